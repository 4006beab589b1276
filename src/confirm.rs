use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::error::Result;

/// User prompt with two shapes: acknowledgment-only (`notify`) and
/// confirm/cancel (`confirm`). At most one prompt is pending at a time:
/// both methods take `&mut self` and block until resolved, so a caller
/// cannot open a second prompt while one is outstanding, and each call
/// resolves exactly once.
pub trait Gate {
    fn notify(&mut self, title: &str, message: &str) -> Result<()>;

    /// `true` means confirmed, `false` means cancelled.
    fn confirm(&mut self, title: &str, message: &str) -> Result<bool>;
}

/// Terminal gate. Messages go to stderr so stdout stays clean for
/// structured output; confirmations read one line from stdin, where `y` or
/// `yes` (any case) confirms and anything else cancels. With `assume_yes`
/// every confirmation resolves true without prompting, for scripted use.
pub struct TermGate {
    assume_yes: bool,
}

impl TermGate {
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Gate for TermGate {
    fn notify(&mut self, title: &str, message: &str) -> Result<()> {
        eprintln!("{} {message}", format!("{title}:").bold());
        Ok(())
    }

    fn confirm(&mut self, title: &str, message: &str) -> Result<bool> {
        if self.assume_yes {
            return Ok(true);
        }
        eprint!("{} {message} [y/N] ", format!("{title}:").bold());
        io::stderr().flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        let answer = line.trim().to_ascii_lowercase();
        Ok(answer == "y" || answer == "yes")
    }
}
