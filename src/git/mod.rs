//! Git operations via the system `git` binary.
//!
//! Everything shells out to `git`, inheriting the user's existing git config
//! and hooks. The working directory is passed explicitly so tests never
//! depend on the process cwd.

pub mod commit;
pub mod staged;

pub use commit::commit_staged;
pub use staged::{is_repository, staged_diff};
