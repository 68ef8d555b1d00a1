//! Branch and commit domain types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category tag carried by a commit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitKind {
    Feature,
    Bugfix,
    Hotfix,
}

impl CommitKind {
    /// Parses a user-supplied kind label
    pub fn parse(label: &str) -> Option<CommitKind> {
        match label.trim().to_lowercase().as_str() {
            "feature" => Some(CommitKind::Feature),
            "bugfix" => Some(CommitKind::Bugfix),
            "hotfix" => Some(CommitKind::Hotfix),
            _ => None,
        }
    }
}

impl std::fmt::Display for CommitKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CommitKind::Feature => "feature",
            CommitKind::Bugfix => "bugfix",
            CommitKind::Hotfix => "hotfix",
        };
        f.write_str(label)
    }
}

/// A single entry in a branch's append-only history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    pub id: Uuid,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub kind: Option<CommitKind>,
}

impl Commit {
    /// Creates a commit with a fresh id and the current timestamp
    pub fn new(message: impl Into<String>, kind: Option<CommitKind>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            timestamp: chrono::Utc::now(),
            kind,
        }
    }
}

/// A named branch: an append-only sequence of commits
///
/// `parent` records where the branch was cut from. It is provenance only and
/// is never validated against the live branch set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub name: String,
    pub parent: Option<String>,
    pub commits: Vec<Commit>,
}

impl Branch {
    /// Creates an empty branch
    pub fn new(name: impl Into<String>, parent: Option<String>) -> Self {
        Self {
            name: name.into(),
            parent,
            commits: Vec::new(),
        }
    }
}
