//! Candidate domain types
//!
//! Candidates move through a fixed, ordered hiring pipeline. Automated
//! transitions only ever move one stage forward; manual control can set any
//! stage directly.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Hiring pipeline stage
///
/// The variants are ordered; `next` walks them front to back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    New,
    Interview,
    Offer,
    Hired,
}

impl Stage {
    /// All stages, in pipeline order
    pub const ALL: [Stage; 4] = [Stage::New, Stage::Interview, Stage::Offer, Stage::Hired];

    /// The stage one position forward, or `None` at the end of the pipeline
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::New => Some(Stage::Interview),
            Stage::Interview => Some(Stage::Offer),
            Stage::Offer => Some(Stage::Hired),
            Stage::Hired => None,
        }
    }

    /// Whether this is the terminal stage
    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    /// Lowercase label used in narration and tables
    pub fn label(self) -> &'static str {
        match self {
            Stage::New => "new",
            Stage::Interview => "interview",
            Stage::Offer => "offer",
            Stage::Hired => "hired",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A candidate in the hiring pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    pub stage: Stage,
    pub experience_years: u32,
    pub skills: Vec<String>,
    pub last_update: chrono::DateTime<chrono::Utc>,
}

impl Candidate {
    /// Creates a candidate at the initial stage
    pub fn applicant(
        name: impl Into<String>,
        role: impl Into<String>,
        experience_years: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role: role.into(),
            stage: Stage::New,
            experience_years,
            skills: Vec::new(),
            last_update: chrono::Utc::now(),
        }
    }

    /// Creates a candidate at a given stage with a skill set
    pub fn with_stage(
        name: impl Into<String>,
        role: impl Into<String>,
        stage: Stage,
        experience_years: u32,
        skills: &[&str],
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            role: role.into(),
            stage,
            experience_years,
            skills: skills.iter().map(|s| (*s).to_string()).collect(),
            last_update: chrono::Utc::now(),
        }
    }

    /// Advances the candidate exactly one stage forward
    ///
    /// Returns the new stage, or `None` if the candidate is already at the
    /// terminal stage (no mutation happens in that case).
    pub fn advance(&mut self) -> Option<Stage> {
        let next = self.stage.next()?;
        self.stage = next;
        self.last_update = chrono::Utc::now();
        Some(next)
    }
}

/// Errors raised by roster operations
#[derive(Debug, Error)]
pub enum RosterError {
    /// A candidate needs a non-empty name
    #[error("candidate name is required")]
    EmptyName,

    /// No candidate with the given name exists
    #[error("no candidate named '{0}'")]
    UnknownCandidate(String),
}

/// The collection of candidates owned by one simulation or sandbox
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Roster {
    candidates: Vec<Candidate>,
}

impl Roster {
    /// Creates an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a roster from pre-built candidates
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// Number of candidates in the roster
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Iterates over candidates in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Candidate> {
        self.candidates.iter()
    }

    /// Iterates mutably over candidates in insertion order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Candidate> {
        self.candidates.iter_mut()
    }

    /// Appends a pre-built candidate (generator path, no validation)
    pub fn push(&mut self, candidate: Candidate) {
        self.candidates.push(candidate);
    }

    /// Adds a new applicant by user input
    ///
    /// The name must be non-empty after trimming.
    pub fn add(
        &mut self,
        name: &str,
        role: &str,
        experience_years: u32,
    ) -> Result<&Candidate, RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        self.candidates
            .push(Candidate::applicant(name, role, experience_years));
        Ok(self.candidates.last().expect("just pushed"))
    }

    /// Removes a candidate by name
    pub fn remove(&mut self, name: &str) -> Result<Candidate, RosterError> {
        let index = self
            .candidates
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| RosterError::UnknownCandidate(name.to_string()))?;
        Ok(self.candidates.remove(index))
    }

    /// Looks up a candidate by name
    pub fn find(&self, name: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.name == name)
    }

    /// Manually sets a candidate's stage (user control, not the simulator)
    pub fn set_stage(&mut self, name: &str, stage: Stage) -> Result<(), RosterError> {
        let candidate = self
            .candidates
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| RosterError::UnknownCandidate(name.to_string()))?;
        candidate.stage = stage;
        candidate.last_update = chrono::Utc::now();
        Ok(())
    }

    /// Advances a named candidate one stage forward
    pub fn advance(&mut self, name: &str) -> Result<Option<Stage>, RosterError> {
        let candidate = self
            .candidates
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| RosterError::UnknownCandidate(name.to_string()))?;
        Ok(candidate.advance())
    }
}
