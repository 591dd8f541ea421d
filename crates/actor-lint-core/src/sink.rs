//! Shared collector for findings produced by concurrent workers.

use crate::types::Violation;
use parking_lot::Mutex;

/// Append-only buffer of findings.
///
/// Appends may come from any number of threads in any order. Draining sorts
/// by file, line, column, code and message, then drops findings whose
/// identity (code, location, message) was already seen.
#[derive(Debug, Default)]
pub struct DiagnosticSink {
    buffer: Mutex<Vec<Violation>>,
}

impl DiagnosticSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one finding.
    pub fn report(&self, violation: Violation) {
        self.buffer.lock().push(violation);
    }

    /// Appends a batch of findings under a single lock.
    pub fn extend(&self, violations: impl IntoIterator<Item = Violation>) {
        let mut batch = violations.into_iter().peekable();
        if batch.peek().is_some() {
            self.buffer.lock().extend(batch);
        }
    }

    /// Number of findings appended so far, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    /// Whether nothing has been appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    /// Consumes the sink and returns the deduplicated, sorted findings.
    #[must_use]
    pub fn into_sorted(self) -> Vec<Violation> {
        let mut violations = self.buffer.into_inner();
        violations.sort_by(|a, b| {
            a.location
                .cmp(&b.location)
                .then_with(|| a.code.cmp(&b.code))
                .then_with(|| a.message.cmp(&b.message))
                .then_with(|| a.labels.cmp(&b.labels))
        });
        violations.dedup_by(|later, earlier| later.identity() == earlier.identity());
        violations
    }
}
