//! Output management and formatting.

use std::io;

use console::Term;
use owo_colors::OwoColorize;

use graft_core::application::ports::Reporter;

use crate::cli::GlobalArgs;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    pub fn new(args: &GlobalArgs) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }
}

/// [`Reporter`] implementation forwarding core progress lines to the
/// terminal. Write failures are swallowed — progress output is best-effort.
pub struct ConsoleReporter<'a> {
    output: &'a OutputManager,
}

impl<'a> ConsoleReporter<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self { output }
    }
}

impl Reporter for ConsoleReporter<'_> {
    fn report(&self, line: &str) {
        let _ = self.output.print(line);
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
