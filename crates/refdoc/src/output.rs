//! Status lines on stderr.
//!
//! Rendered documents may go to stdout, so nothing here writes there.

use console::{Style, Term};
use refdoc_model::Diagnostic;

/// Status line printer.
pub(crate) struct Output {
    term: Term,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub(crate) fn info(&self, msg: &str) {
        self.line(msg.to_owned());
    }

    /// Green.
    pub(crate) fn success(&self, msg: &str) {
        self.line(Style::new().for_stderr().green().apply_to(msg).to_string());
    }

    /// Red.
    pub(crate) fn error(&self, msg: &str) {
        self.line(Style::new().for_stderr().red().apply_to(msg).to_string());
    }

    /// Print a lint warning with a highlighted prefix.
    pub(crate) fn diagnostic(&self, diagnostic: &Diagnostic) {
        self.line(diagnostic_line(diagnostic));
    }

    fn line(&self, line: String) {
        // Status output is best effort; a closed stderr must not fail the command.
        let _ = self.term.write_line(&line);
    }
}

fn diagnostic_line(diagnostic: &Diagnostic) -> String {
    let prefix = Style::new().for_stderr().yellow().bold().apply_to("warning");
    format!("{prefix}: {diagnostic}")
}
