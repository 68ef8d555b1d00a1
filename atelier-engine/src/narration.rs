//! Narration buffer
//!
//! Collects the categorized audit trail a simulation emits while it runs.
//! The buffer can be drained periodically (live display) or snapshotted at
//! the end (recap, tests).

use std::sync::{Arc, Mutex};

use atelier_core::domain::narration::{NarrationEntry, NarrationKind};

/// Sink for narrated simulation events
pub trait NarrationSink: Send + Sync {
    /// Records one entry
    fn record(&self, entry: NarrationEntry);

    /// Records an action entry
    fn action(&self, message: String) {
        self.record(NarrationEntry::new(NarrationKind::Action, message));
    }

    /// Records a success entry
    fn success(&self, message: String) {
        self.record(NarrationEntry::new(NarrationKind::Success, message));
    }

    /// Records a warning entry
    fn warning(&self, message: String) {
        self.record(NarrationEntry::new(NarrationKind::Warning, message));
    }

    /// Records an info entry
    fn info(&self, message: String) {
        self.record(NarrationEntry::new(NarrationKind::Info, message));
    }
}

/// In-memory implementation of [`NarrationSink`]
///
/// Uses `Arc<Mutex<Vec<NarrationEntry>>>` for thread-safe access across
/// tasks; clones share the same buffer.
#[derive(Clone, Default)]
pub struct InMemoryNarration {
    entries: Arc<Mutex<Vec<NarrationEntry>>>,
}

impl InMemoryNarration {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all buffered entries and clears the buffer
    pub fn drain(&self) -> Vec<NarrationEntry> {
        let mut entries = self.entries.lock().unwrap();
        entries.drain(..).collect()
    }

    /// Returns a copy of the buffered entries without clearing
    pub fn snapshot(&self) -> Vec<NarrationEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Number of buffered entries
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Whether the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }
}

impl NarrationSink for InMemoryNarration {
    fn record(&self, entry: NarrationEntry) {
        let mut entries = self.entries.lock().unwrap();
        entries.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_drain() {
        let narration = InMemoryNarration::new();
        narration.info("started".to_string());
        narration.action("moved".to_string());

        assert_eq!(narration.len(), 2);

        let drained = narration.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].kind, NarrationKind::Info);
        assert_eq!(drained[1].kind, NarrationKind::Action);
        assert!(narration.is_empty());
    }

    #[test]
    fn test_clones_share_the_buffer() {
        let narration = InMemoryNarration::new();
        let other = narration.clone();
        other.warning("shared".to_string());

        let snapshot = narration.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].message, "shared");
        // Snapshot does not clear.
        assert_eq!(narration.len(), 1);
    }
}
