//! Print controls, stored at `print/state`.

use labeldesk_flux::State;

#[derive(Debug, Clone, PartialEq)]
pub struct PrintState {
    /// Off until the first label is composed, then stays on.
    pub enabled: bool,
    /// Selected size id.
    pub size: String,
    /// Class applied to the label container by the last print.
    pub applied_class: Option<String>,
    pub printed: usize,
}

impl State for PrintState {
    const PATH: &'static str = "print/state";
}

impl PrintState {
    pub fn new(size: &str) -> Self {
        Self {
            enabled: false,
            size: size.to_string(),
            applied_class: None,
            printed: 0,
        }
    }
}
