//! Narration domain types
//!
//! Every observable mutation in a simulation is narrated: a timestamped,
//! categorized line describing what happened, optionally tagged with the
//! simulated day it happened on.

use serde::{Deserialize, Serialize};

/// Category of a narration entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NarrationKind {
    Action,
    Success,
    Warning,
    Error,
    Info,
}

/// A narrated simulation event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarrationEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub kind: NarrationKind,
    /// Simulated day the event belongs to, when the source is a day cycle
    pub day: Option<u32>,
    pub message: String,
}

impl NarrationEntry {
    /// Creates an entry stamped with the current time
    pub fn new(kind: NarrationKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            kind,
            day: None,
            message: message.into(),
        }
    }

    /// Creates an entry tagged with a simulated day
    pub fn on_day(day: u32, kind: NarrationKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            kind,
            day: Some(day),
            message: message.into(),
        }
    }
}
