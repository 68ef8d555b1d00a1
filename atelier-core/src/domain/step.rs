//! Playback step domain types

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A step with a delay to observe before the sequence moves past it.
///
/// Implemented by every payload the timed sequencer can drive.
pub trait TimedStep {
    /// Delay to wait after this step before the next one is applied.
    fn delay(&self) -> Duration;
}

/// A single step of a scripted console playback
///
/// Structure shared between the engine (drives timing) and the CLI (renders).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackStep {
    /// Line shown when the step is reached
    pub message: String,
    /// Canned console output emitted with the step (may be empty)
    pub output: Vec<String>,
    /// Delay before the next step, in milliseconds
    pub delay_ms: u64,
    /// Human-readable explanation of what the step stands for
    pub detail: String,
}

impl PlaybackStep {
    /// Creates a step with no canned output
    pub fn new(
        message: impl Into<String>,
        delay_ms: u64,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            message: message.into(),
            output: Vec::new(),
            delay_ms,
            detail: detail.into(),
        }
    }

    /// Attaches canned console output to the step
    pub fn with_output(mut self, output: Vec<String>) -> Self {
        self.output = output;
        self
    }
}

impl TimedStep for PlaybackStep {
    fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
