//! Command drill
//!
//! The terminal exercise: the learner types commands, each matched against
//! the expected command of the current step. Matching is case-insensitive
//! and whitespace-trimmed. A match echoes the step's canned output into the
//! transcript and advances one step; anything else is rejected with an error
//! naming the expected command.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One step of a command drill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillStep {
    /// The command the learner is expected to type
    pub command: String,
    /// Canned console output printed on a match (may be empty)
    pub output: Vec<String>,
    /// What the step teaches
    pub description: String,
    /// Hint shown on request
    pub hint: String,
    /// Confirmation line printed on a match
    pub success: String,
}

/// Errors raised when submitting drill input
#[derive(Debug, Error)]
pub enum DrillError {
    /// The input did not match the expected command
    #[error("unrecognized command, try '{expected}'")]
    WrongCommand { expected: String },

    /// The drill has already run to completion
    #[error("the exercise is already complete")]
    AlreadyComplete,
}

/// Result of a successful submission
#[derive(Debug, Clone)]
pub struct DrillAdvance {
    /// Index of the step that was just matched
    pub matched: usize,
    /// Lines appended to the transcript by this submission
    pub lines: Vec<String>,
    /// Whether the drill is now complete
    pub completed: bool,
}

/// Interactive expected-command exercise
#[derive(Debug, Clone)]
pub struct CommandDrill {
    steps: Vec<DrillStep>,
    current: usize,
    completed: bool,
    transcript: Vec<String>,
}

impl CommandDrill {
    /// Creates a drill over the given steps
    ///
    /// An empty step list yields a drill that is complete from the start.
    pub fn new(steps: Vec<DrillStep>) -> Self {
        let completed = steps.is_empty();
        Self {
            steps,
            current: 0,
            completed,
            transcript: Vec::new(),
        }
    }

    /// The step the learner is currently on, if any
    pub fn current_step(&self) -> Option<&DrillStep> {
        if self.completed {
            return None;
        }
        self.steps.get(self.current)
    }

    /// 0-based index of the current step
    pub fn index(&self) -> usize {
        self.current
    }

    /// Total number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the drill has no steps
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Whether every step has been matched
    pub fn completed(&self) -> bool {
        self.completed
    }

    /// Everything echoed so far, attempts included
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Submits one line of input against the current step
    ///
    /// The attempt is echoed into the transcript either way; only a match
    /// moves the step index, and only by one.
    pub fn submit(&mut self, input: &str) -> Result<DrillAdvance, DrillError> {
        if self.completed {
            return Err(DrillError::AlreadyComplete);
        }

        let attempt = input.trim();
        self.transcript.push(format!("$ {attempt}"));

        let step = &self.steps[self.current];
        if !attempt.eq_ignore_ascii_case(step.command.trim()) {
            return Err(DrillError::WrongCommand {
                expected: step.command.clone(),
            });
        }

        let mut lines = step.output.clone();
        lines.push(step.success.clone());
        self.transcript.extend(lines.iter().cloned());

        let matched = self.current;
        if self.current + 1 < self.steps.len() {
            self.current += 1;
        } else {
            self.completed = true;
        }

        Ok(DrillAdvance {
            matched,
            lines,
            completed: self.completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_exact_match_advances() {
        let mut drill = CommandDrill::new(catalog::git_drill_steps());
        assert_eq!(drill.index(), 0);

        let advance = drill.submit("git init").unwrap();
        assert_eq!(advance.matched, 0);
        assert!(!advance.completed);
        assert_eq!(drill.index(), 1);
        assert!(
            advance
                .lines
                .iter()
                .any(|l| l.contains("Initialized empty Git repository"))
        );
    }

    #[test]
    fn test_match_is_case_insensitive_and_trimmed() {
        let mut drill = CommandDrill::new(catalog::git_drill_steps());
        drill.submit("  GIT INIT  ").unwrap();
        assert_eq!(drill.index(), 1);
    }

    #[test]
    fn test_mismatch_names_expected_command() {
        let mut drill = CommandDrill::new(catalog::git_drill_steps());
        let err = drill.submit("git status").unwrap_err();
        match err {
            DrillError::WrongCommand { expected } => assert_eq!(expected, "git init"),
            other => panic!("unexpected error: {other:?}"),
        }
        // Step counter unchanged; the attempt is still on the transcript.
        assert_eq!(drill.index(), 0);
        assert_eq!(drill.transcript(), &["$ git status".to_string()]);
    }

    #[test]
    fn test_full_run_completes_once() {
        let steps = catalog::git_drill_steps();
        let commands: Vec<String> = steps.iter().map(|s| s.command.clone()).collect();
        let mut drill = CommandDrill::new(steps);

        let mut indices = Vec::new();
        for command in &commands {
            let advance = drill.submit(command).unwrap();
            indices.push(advance.matched);
        }

        assert_eq!(indices, (0..commands.len()).collect::<Vec<_>>());
        assert!(drill.completed());
        assert!(matches!(
            drill.submit("git init"),
            Err(DrillError::AlreadyComplete)
        ));
    }

    #[test]
    fn test_empty_drill_is_complete() {
        let drill = CommandDrill::new(Vec::new());
        assert!(drill.completed());
        assert!(drill.current_step().is_none());
        assert_eq!(drill.index(), 0);
    }
}
