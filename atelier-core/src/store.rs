//! Branch store
//!
//! In-memory multi-branch history: one append-only commit sequence per named
//! branch, plus a copying merge. Every operation validates before it mutates,
//! so a rejected call leaves the store untouched.

use thiserror::Error;

use crate::domain::branch::{Branch, Commit, CommitKind};

/// Errors raised by branch store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// A branch needs a non-empty name
    #[error("branch name is required")]
    EmptyBranchName,

    /// A branch with the given name already exists
    #[error("branch '{0}' already exists")]
    DuplicateBranch(String),

    /// No branch with the given name exists
    #[error("no branch named '{0}'")]
    UnknownBranch(String),

    /// A commit needs a non-empty message
    #[error("commit message is required")]
    EmptyMessage,

    /// Merging a branch into itself would duplicate its own history
    #[error("cannot merge branch '{0}' into itself")]
    MergeIntoSelf(String),
}

/// In-memory branch history store
///
/// A fresh store starts with a `main` branch holding one initial commit.
#[derive(Debug, Clone)]
pub struct BranchStore {
    branches: Vec<Branch>,
}

impl BranchStore {
    /// Creates a store seeded with `main` and its initial commit
    pub fn new() -> Self {
        let mut main = Branch::new("main", None);
        main.commits.push(Commit::new("Initial commit", None));
        Self {
            branches: vec![main],
        }
    }

    /// Creates a completely empty store (no seeded branch)
    pub fn empty() -> Self {
        Self {
            branches: Vec::new(),
        }
    }

    /// All branches, in creation order
    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Looks up a branch by name
    pub fn find(&self, name: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.name == name)
    }

    /// Creates an empty branch with a provenance reference
    ///
    /// The parent name is recorded as-is; it is not required to exist.
    pub fn create_branch(&mut self, name: &str, parent: Option<&str>) -> Result<(), StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyBranchName);
        }
        if self.branches.iter().any(|b| b.name == name) {
            return Err(StoreError::DuplicateBranch(name.to_string()));
        }
        self.branches
            .push(Branch::new(name, parent.map(str::to_string)));
        Ok(())
    }

    /// Appends a commit to the named branch
    pub fn commit(
        &mut self,
        branch: &str,
        message: &str,
        kind: Option<CommitKind>,
    ) -> Result<&Commit, StoreError> {
        if message.trim().is_empty() {
            return Err(StoreError::EmptyMessage);
        }
        let branch = self
            .branches
            .iter_mut()
            .find(|b| b.name == branch)
            .ok_or_else(|| StoreError::UnknownBranch(branch.to_string()))?;
        branch.commits.push(Commit::new(message, kind));
        Ok(branch.commits.last().expect("just pushed"))
    }

    /// Copies every commit of `source` into `target`
    ///
    /// Each copy gets a fresh id and a `[source]`-prefixed message; the
    /// source branch is left untouched. Unknown source or target names are a
    /// no-op returning `Ok(0)`. Merging is deliberately not idempotent: a
    /// second merge duplicates the copies again.
    pub fn merge(&mut self, source: &str, target: &str) -> Result<usize, StoreError> {
        if source == target {
            return Err(StoreError::MergeIntoSelf(source.to_string()));
        }

        let Some(source_branch) = self.find(source) else {
            return Ok(0);
        };
        if self.find(target).is_none() {
            return Ok(0);
        }

        let copies: Vec<Commit> = source_branch
            .commits
            .iter()
            .map(|commit| Commit {
                id: uuid::Uuid::new_v4(),
                message: format!("[{source}] {}", commit.message),
                timestamp: chrono::Utc::now(),
                kind: commit.kind,
            })
            .collect();
        let count = copies.len();

        let target_branch = self
            .branches
            .iter_mut()
            .find(|b| b.name == target)
            .expect("target existence checked above");
        target_branch.commits.extend(copies);

        Ok(count)
    }
}

impl Default for BranchStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_store_seeds_main() {
        let store = BranchStore::new();
        let main = store.find("main").unwrap();
        assert_eq!(main.commits.len(), 1);
        assert_eq!(main.commits[0].message, "Initial commit");
    }

    #[test]
    fn test_create_branch_validation() {
        let mut store = BranchStore::new();

        assert!(matches!(
            store.create_branch("  ", Some("main")),
            Err(StoreError::EmptyBranchName)
        ));
        assert_eq!(store.branches().len(), 1);

        store.create_branch("feature/header", Some("main")).unwrap();
        assert!(matches!(
            store.create_branch("feature/header", Some("main")),
            Err(StoreError::DuplicateBranch(_))
        ));
        assert_eq!(store.branches().len(), 2);

        let branch = store.find("feature/header").unwrap();
        assert_eq!(branch.parent.as_deref(), Some("main"));
        assert!(branch.commits.is_empty());
    }

    #[test]
    fn test_commit_validation() {
        let mut store = BranchStore::new();

        assert!(matches!(
            store.commit("main", "   ", None),
            Err(StoreError::EmptyMessage)
        ));
        assert!(matches!(
            store.commit("nope", "msg", None),
            Err(StoreError::UnknownBranch(_))
        ));

        let commit = store
            .commit("main", "Add navigation menu", Some(CommitKind::Feature))
            .unwrap();
        assert_eq!(commit.message, "Add navigation menu");
        assert_eq!(commit.kind, Some(CommitKind::Feature));
        assert_eq!(store.find("main").unwrap().commits.len(), 2);
    }

    #[test]
    fn test_merge_copies_and_leaves_source_untouched() {
        let mut store = BranchStore::new();
        store.create_branch("feature/header", Some("main")).unwrap();
        store
            .commit("feature/header", "Add navigation menu", Some(CommitKind::Feature))
            .unwrap();

        let source_before = store.find("feature/header").unwrap().commits.clone();
        let target_before = store.find("main").unwrap().commits.len();

        let copied = store.merge("feature/header", "main").unwrap();
        assert_eq!(copied, 1);

        let main = store.find("main").unwrap();
        assert_eq!(main.commits.len(), target_before + 1);
        let merged = main.commits.last().unwrap();
        assert!(merged.message.contains("feature/header"));
        assert!(merged.message.contains("Add navigation menu"));

        // Source is byte-for-byte what it was.
        let source_after = store.find("feature/header").unwrap();
        assert_eq!(source_after.commits.len(), source_before.len());
        assert_eq!(source_after.commits[0].id, source_before[0].id);
        assert_eq!(source_after.commits[0].message, source_before[0].message);
    }

    #[test]
    fn test_merge_is_not_idempotent() {
        let mut store = BranchStore::new();
        store.create_branch("feature/auth", Some("main")).unwrap();
        store
            .commit("feature/auth", "Add login form component", Some(CommitKind::Feature))
            .unwrap();
        store
            .commit("feature/auth", "Implement OAuth authentication", Some(CommitKind::Feature))
            .unwrap();

        store.merge("feature/auth", "main").unwrap();
        store.merge("feature/auth", "main").unwrap();

        // 1 initial + 2 copies per merge.
        assert_eq!(store.find("main").unwrap().commits.len(), 5);
    }

    #[test]
    fn test_merge_ids_stay_unique() {
        let mut store = BranchStore::new();
        store.create_branch("feature/auth", Some("main")).unwrap();
        store.commit("feature/auth", "Add login form component", None).unwrap();

        store.merge("feature/auth", "main").unwrap();
        store.merge("feature/auth", "main").unwrap();

        let mut ids = HashSet::new();
        for branch in store.branches() {
            for commit in &branch.commits {
                assert!(ids.insert(commit.id), "duplicate commit id {}", commit.id);
            }
        }
    }

    #[test]
    fn test_merge_unknown_names_is_noop() {
        let mut store = BranchStore::new();
        let before = store.find("main").unwrap().commits.len();

        assert_eq!(store.merge("ghost", "main").unwrap(), 0);
        assert_eq!(store.merge("main", "ghost").unwrap(), 0);
        assert_eq!(store.find("main").unwrap().commits.len(), before);
    }

    #[test]
    fn test_merge_into_self_is_rejected() {
        let mut store = BranchStore::new();
        let before = store.find("main").unwrap().commits.len();

        assert!(matches!(
            store.merge("main", "main"),
            Err(StoreError::MergeIntoSelf(_))
        ));
        assert_eq!(store.find("main").unwrap().commits.len(), before);
    }
}
