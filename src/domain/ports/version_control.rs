//! Version Control Port
//!
//! The three operations the deploy flow needs from the local repository.
//! The git CLI adapter lives in `infrastructure::git`.

use crate::domain::entities::RepositoryState;
use crate::domain::value_objects::CommitMessage;
use crate::error::LaunchpadResult;

pub trait VersionControl {
    /// Working tree changes relative to HEAD (tracked and untracked)
    fn status(&self) -> LaunchpadResult<RepositoryState>;

    /// Stage every modified, new and deleted path
    fn stage_all(&self) -> LaunchpadResult<()>;

    /// Create a single commit from the staged changes
    fn commit(&self, message: &CommitMessage) -> LaunchpadResult<()>;

    /// Publish the current branch to its configured upstream
    fn push(&self) -> LaunchpadResult<()>;
}
