//! Task checklists
//!
//! Small goal lists shown next to a sandbox; the owning view marks tasks
//! done as the matching operations land.

use serde::{Deserialize, Serialize};

/// One checklist item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub description: String,
    pub hint: String,
    pub done: bool,
}

impl Task {
    /// Creates an open task
    pub fn new(id: u32, description: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            hint: hint.into(),
            done: false,
        }
    }
}

/// An ordered checklist
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates a checklist from tasks
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// All tasks, in order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Marks a task done; unknown ids are ignored
    pub fn complete(&mut self, id: u32) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.done = true;
        }
    }

    /// Whether every task is done
    pub fn all_done(&self) -> bool {
        self.tasks.iter().all(|t| t.done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_marks_only_the_matching_task() {
        let mut list = TaskList::new(vec![
            Task::new(1, "first", "h1"),
            Task::new(2, "second", "h2"),
        ]);

        list.complete(1);
        assert!(list.tasks()[0].done);
        assert!(!list.tasks()[1].done);
        assert!(!list.all_done());

        // Unknown id is a no-op.
        list.complete(99);
        list.complete(2);
        assert!(list.all_done());
    }
}
