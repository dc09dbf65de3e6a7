//! Integration tests for staged-diff extraction and commit execution
//! against real git repositories.

mod common;

use common::TestRepo;
use grapheus::error::GitError;
use grapheus::git::{commit_staged, is_repository, staged_diff};

#[test]
fn is_repository_false_for_plain_directory() {
    let dir = tempfile::tempdir().unwrap();
    assert!(!is_repository(dir.path()));
}

#[test]
fn is_repository_true_for_initialized_repo() {
    let repo = TestRepo::new();
    assert!(is_repository(repo.path()));
}

#[test]
fn staged_diff_fails_outside_a_repository() {
    let dir = tempfile::tempdir().unwrap();
    let err = staged_diff(dir.path()).unwrap_err();
    assert!(matches!(err, GitError::NotARepository));
}

#[test]
fn staged_diff_fails_without_staged_changes() {
    let repo = TestRepo::new();
    // An unstaged file must not count as staged.
    repo.write_file("notes.txt", "scratch\n");

    let err = staged_diff(repo.path()).unwrap_err();
    assert!(matches!(err, GitError::NoStagedChanges));
}

#[test]
fn staged_diff_returns_the_staged_hunks() {
    let repo = TestRepo::new();
    repo.write_file("x.txt", "hello\n");
    repo.stage("x.txt");

    let diff = staged_diff(repo.path()).unwrap();
    assert!(diff.contains("diff --git"));
    assert!(diff.contains("+hello"));
    // Trimmed on both ends.
    assert_eq!(diff, diff.trim());
}

#[test]
fn staged_diff_only_covers_the_index() {
    let repo = TestRepo::new();
    repo.write_file("staged.txt", "staged content\n");
    repo.stage("staged.txt");
    repo.write_file("unstaged.txt", "unstaged content\n");

    let diff = staged_diff(repo.path()).unwrap();
    assert!(diff.contains("staged content"));
    assert!(!diff.contains("unstaged content"));
}

#[test]
fn commit_staged_creates_a_commit_with_the_exact_message() {
    let repo = TestRepo::new();
    repo.write_file("x.txt", "hello\n");
    repo.stage("x.txt");

    assert!(commit_staged(repo.path(), "Add hello line"));
    assert!(repo.head_message().starts_with("Add hello line"));
}

#[test]
fn commit_staged_passes_multiline_messages_through() {
    let repo = TestRepo::new();
    repo.write_file("x.txt", "hello\n");
    repo.stage("x.txt");

    let message = "Add hello line\n\n- introduce x.txt\n- greet the world";
    assert!(commit_staged(repo.path(), message));
    assert!(repo.head_message().starts_with(message));
}

#[test]
fn commit_staged_reports_failure_with_nothing_staged() {
    let repo = TestRepo::new();
    repo.write_file("x.txt", "hello\n");
    repo.stage("x.txt");
    repo.commit_index("init");

    assert!(!commit_staged(repo.path(), "Nothing to commit"));
}
