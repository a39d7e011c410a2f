//! Buffering reporter for tests and embedding.

use std::sync::Mutex;

use graft_core::application::ports::Reporter;

/// Collects progress lines in memory.
#[derive(Debug, Default)]
pub struct BufferReporter {
    lines: Mutex<Vec<String>>,
}

impl BufferReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line reported so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().map(|l| l.clone()).unwrap_or_default()
    }

    /// Whether any reported line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }
}

impl Reporter for BufferReporter {
    fn report(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_lines_in_order() {
        let reporter = BufferReporter::new();
        reporter.report("first");
        reporter.report("second");
        assert_eq!(reporter.lines(), vec!["first", "second"]);
    }

    #[test]
    fn contains_matches_substrings() {
        let reporter = BufferReporter::new();
        reporter.report("Processing package skeleton : \"SonataAcmeBundle\"");
        assert!(reporter.contains("SonataAcmeBundle"));
        assert!(!reporter.contains("FakeBundle"));
    }
}
