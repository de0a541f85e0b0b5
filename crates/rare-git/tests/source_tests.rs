//! Integration tests for commit listing and message lookup against real repositories.

mod common;
use common::*;

use rare_hash::CommitHash;
use rare_git::{CommitSource, GitError, GitOptions};
use rare_rank::{MessageSource, RankingEngine};

fn source(dir: &std::path::Path) -> CommitSource {
    CommitSource::local(dir, GitOptions::default()).unwrap()
}

#[test]
fn lists_every_commit() {
    let dir = tempfile::tempdir().unwrap();
    let hashes = setup_two_author_repo(dir.path());

    let commits = source(dir.path()).list_commits(None).unwrap();
    assert_eq!(commits.len(), 3);

    // git log lists newest first.
    let listed: Vec<String> = commits.iter().map(|c| c.hash.to_string()).collect();
    let mut expected = hashes.clone();
    expected.reverse();
    assert_eq!(listed, expected);

    assert_eq!(commits[1].author, "Bob Builder");
    assert_eq!(commits[0].timestamp, "2009-02-13 23:31:30 +0000");
}

#[test]
fn author_filter() {
    let dir = tempfile::tempdir().unwrap();
    setup_two_author_repo(dir.path());

    let src = source(dir.path());
    let alice = src.list_commits(Some("Alice")).unwrap();
    assert_eq!(alice.len(), 2);
    assert!(alice.iter().all(|c| c.author == "Alice"));

    let nobody = src.list_commits(Some("Nobody At All")).unwrap();
    assert!(nobody.is_empty());
}

#[test]
fn message_lookup() {
    let dir = tempfile::tempdir().unwrap();
    let hashes = setup_two_author_repo(dir.path());

    let src = source(dir.path());
    let hash = CommitHash::from_hex(&hashes[1]).unwrap();
    assert_eq!(src.commit_message(&hash).unwrap(), "add line 2");
}

#[test]
fn message_lookup_of_unknown_commit_fails() {
    let dir = tempfile::tempdir().unwrap();
    setup_two_author_repo(dir.path());

    let unknown = CommitHash::from_hex("0123456789abcdef0123456789abcdef01234567").unwrap();
    let err = source(dir.path()).commit_message(&unknown).unwrap_err();
    assert!(matches!(err, GitError::CommandFailed { .. }));
}

#[test]
fn repository_without_commits_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path());

    let commits = source(dir.path()).list_commits(None).unwrap();
    assert!(commits.is_empty());
}

#[test]
fn plain_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("plain");
    std::fs::create_dir(&plain).unwrap();

    let err = source(&plain).list_commits(None).unwrap_err();
    assert!(matches!(err, GitError::CommandFailed { .. }));
}

#[test]
fn remote_clone_is_temporary() {
    let dir = tempfile::tempdir().unwrap();
    let upstream = dir.path().join("upstream");
    std::fs::create_dir(&upstream).unwrap();
    setup_two_author_repo(&upstream);

    let url = format!("file://{}", upstream.display());
    let remote = CommitSource::remote(&url, GitOptions::default()).unwrap();
    assert_eq!(remote.location(), url);

    let clone_dir = remote.git_dir().to_path_buf();
    assert!(clone_dir.exists());
    assert_eq!(remote.list_commits(None).unwrap().len(), 3);

    drop(remote);
    assert!(!clone_dir.exists());
}

#[test]
fn remote_clone_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = format!("file://{}", dir.path().join("missing").display());
    let err = CommitSource::remote(&missing, GitOptions::default()).unwrap_err();
    assert!(matches!(err, GitError::CommandFailed { .. }));
}

#[test]
fn ranks_a_real_repository() {
    let dir = tempfile::tempdir().unwrap();
    init_repo(dir.path());
    for i in 0..12 {
        commit(dir.path(), "Test Author", &format!("commit number {i}"));
    }

    let src = source(dir.path());
    let commits = src.list_commits(None).unwrap();
    let rankings = RankingEngine::new(3).unwrap().rank(&commits, &src);

    assert_eq!(rankings.letters.len(), 3);
    assert_eq!(rankings.numbers.len(), 3);
    for pair in rankings.letters.windows(2) {
        assert!(pair[0].letters >= pair[1].letters);
    }
    for pair in rankings.numbers.windows(2) {
        assert!(pair[0].numbers >= pair[1].numbers);
    }
    for c in rankings.letters.iter().chain(rankings.numbers.iter()) {
        assert!(c.message.starts_with("commit number "), "{:?}", c.message);
        assert_eq!(c.letters + c.numbers, 40);
    }
}
