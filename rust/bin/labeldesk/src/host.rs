//! Terminal implementation of [`Host`].

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use labeldesk::{Host, PrintJob};

/// Confirms on stdin, reports on stderr, prints label HTML to a file or
/// stdout.
pub struct TerminalHost {
    assume_yes: bool,
    output: Option<PathBuf>,
}

impl TerminalHost {
    pub fn new(assume_yes: bool, output: Option<PathBuf>) -> Self {
        Self { assume_yes, output }
    }
}

impl Host for TerminalHost {
    fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N]: ", message);
        let _ = io::stderr().flush();
        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        let answer = answer.trim();
        answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
    }

    fn notify(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn print(&self, job: &PrintJob) -> io::Result<()> {
        match &self.output {
            Some(path) => {
                std::fs::write(path, &job.html)?;
                eprintln!("Label written to {}", path.display());
                Ok(())
            }
            None => io::stdout().lock().write_all(job.html.as_bytes()),
        }
    }
}
