//! Scripted workflow runner
//!
//! Bridges the timed sequencer to the branch store: each scripted action is
//! applied to a shared store as the sequencer reaches it, with the result
//! narrated. Validation failures (a branch that already exists on a re-run)
//! are narrated as warnings and never abort the script.

use std::sync::{Arc, Mutex};

use atelier_core::domain::workflow::{WorkflowAction, WorkflowStep};
use atelier_core::store::BranchStore;

use crate::narration::NarrationSink;
use crate::sequencer::{Sequencer, StepSink};

/// Applies scripted workflow actions to a shared branch store
pub struct WorkflowSink {
    store: Arc<Mutex<BranchStore>>,
    narration: Arc<dyn NarrationSink>,
}

impl WorkflowSink {
    /// Creates a sink over a shared store
    pub fn new(store: Arc<Mutex<BranchStore>>, narration: Arc<dyn NarrationSink>) -> Self {
        Self { store, narration }
    }
}

impl StepSink<WorkflowStep> for WorkflowSink {
    fn apply(&self, _index: usize, step: &WorkflowStep) {
        let mut store = self.store.lock().unwrap();
        match &step.action {
            WorkflowAction::Branch { name, from } => {
                match store.create_branch(name, Some(from.as_str())) {
                    Ok(()) => self.narration.action(format!("branched {name} from {from}")),
                    Err(err) => self.narration.warning(err.to_string()),
                }
            }
            WorkflowAction::Commit {
                branch,
                message,
                kind,
            } => match store.commit(branch, message, Some(*kind)) {
                Ok(_) => self
                    .narration
                    .action(format!("commit on {branch}: {message}")),
                Err(err) => self.narration.warning(err.to_string()),
            },
        }
    }
}

/// Builds a sequencer over a workflow script, optionally at a uniform speed
pub fn workflow_sequencer(
    script: Vec<WorkflowStep>,
    delay_ms: Option<u64>,
) -> Sequencer<WorkflowStep> {
    let steps = match delay_ms {
        Some(ms) => script.into_iter().map(|step| step.at_speed(ms)).collect(),
        None => script,
    };
    Sequencer::new(steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    use atelier_core::catalog;
    use atelier_core::domain::narration::NarrationKind;

    use crate::narration::InMemoryNarration;

    #[tokio::test(start_paused = true)]
    async fn test_script_builds_the_expected_history() {
        let store = Arc::new(Mutex::new(BranchStore::new()));
        let narration = Arc::new(InMemoryNarration::new());
        let sink = Arc::new(WorkflowSink::new(store.clone(), narration.clone()));

        let mut sequencer = workflow_sequencer(catalog::workflow_script(), None);
        sequencer.start(sink);
        sequencer.join().await;

        let store = store.lock().unwrap();
        assert_eq!(store.branches().len(), 4);
        assert_eq!(store.find("feature/auth").unwrap().commits.len(), 2);
        assert_eq!(store.find("hotfix/security").unwrap().commits.len(), 1);
        assert_eq!(store.find("feature/dashboard").unwrap().commits.len(), 3);
        // The script never touches main.
        assert_eq!(store.find("main").unwrap().commits.len(), 1);

        let entries = narration.drain();
        assert_eq!(entries.len(), 9);
        assert!(entries.iter().all(|e| e.kind == NarrationKind::Action));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rerun_warns_on_existing_branches() {
        let store = Arc::new(Mutex::new(BranchStore::new()));
        let narration = Arc::new(InMemoryNarration::new());
        let sink = Arc::new(WorkflowSink::new(store.clone(), narration.clone()));

        let mut sequencer = workflow_sequencer(catalog::workflow_script(), Some(10));
        sequencer.start(sink.clone());
        sequencer.join().await;
        narration.drain();

        sequencer.start(sink);
        sequencer.join().await;

        let entries = narration.drain();
        let warnings = entries
            .iter()
            .filter(|e| e.kind == NarrationKind::Warning)
            .count();
        // The three branch creations collide; the commits land again.
        assert_eq!(warnings, 3);
        let store = store.lock().unwrap();
        assert_eq!(store.find("feature/auth").unwrap().commits.len(), 4);
    }
}
