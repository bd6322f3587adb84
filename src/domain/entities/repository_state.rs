//! Working tree state, derived fresh on every run

/// Snapshot of the local working tree relative to HEAD
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryState {
    /// `git status --short` style lines, one per changed path
    changes: Vec<String>,
}

impl RepositoryState {
    pub fn clean() -> Self {
        Self::default()
    }

    pub fn with_changes(changes: Vec<String>) -> Self {
        Self { changes }
    }

    /// Parse `git status --porcelain` output.
    ///
    /// Untracked files (`??`) are kept for display but never make the tree
    /// dirty; only tracked paths that differ from HEAD do.
    pub fn from_porcelain(output: &str) -> Self {
        let changes = output
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| line.trim_end().to_string())
            .collect();
        Self { changes }
    }

    pub fn has_uncommitted_changes(&self) -> bool {
        self.changes.iter().any(|line| !is_untracked(line))
    }

    /// Nothing tracked differs from HEAD
    pub fn is_clean(&self) -> bool {
        !self.has_uncommitted_changes()
    }

    pub fn changes(&self) -> &[String] {
        &self.changes
    }
}

fn is_untracked(line: &str) -> bool {
    line.starts_with("??")
}
