//! Host facilities the desk calls out to.

use std::io;

use crate::label::{ComposedLabel, SizeOption};

/// What the print controller hands to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintJob {
    pub label: ComposedLabel,
    pub size: SizeOption,
    /// Self-contained HTML fragment of the label.
    pub html: String,
}

/// Blocking user interaction and printing, provided by the front end.
pub trait Host: Send + Sync + 'static {
    /// Ask a yes/no question. Only `true` lets the action proceed.
    fn confirm(&self, message: &str) -> bool;

    /// Show a notice the operator has to acknowledge.
    fn notify(&self, message: &str);

    fn print(&self, job: &PrintJob) -> io::Result<()>;
}
