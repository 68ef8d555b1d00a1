//! Scripted git-workflow domain types
//!
//! A workflow script is a declarative list of branch/commit actions replayed
//! against a live branch store on a timer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::branch::CommitKind;
use crate::domain::step::TimedStep;

/// One scripted action against the branch store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "action")]
pub enum WorkflowAction {
    /// Cut a new branch from an existing one
    Branch { name: String, from: String },
    /// Record a commit on a branch
    Commit {
        branch: String,
        message: String,
        kind: CommitKind,
    },
}

/// A workflow action together with the delay before the next one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowStep {
    pub action: WorkflowAction,
    pub delay_ms: u64,
}

impl WorkflowStep {
    /// Creates a branch step
    pub fn branch(name: impl Into<String>, from: impl Into<String>, delay_ms: u64) -> Self {
        Self {
            action: WorkflowAction::Branch {
                name: name.into(),
                from: from.into(),
            },
            delay_ms,
        }
    }

    /// Creates a commit step
    pub fn commit(
        branch: impl Into<String>,
        message: impl Into<String>,
        kind: CommitKind,
        delay_ms: u64,
    ) -> Self {
        Self {
            action: WorkflowAction::Commit {
                branch: branch.into(),
                message: message.into(),
                kind,
            },
            delay_ms,
        }
    }

    /// Returns the step with its delay replaced
    pub fn at_speed(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

impl TimedStep for WorkflowStep {
    fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
