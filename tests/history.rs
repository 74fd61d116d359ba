mod common;

use common::*;
use gloc::analyze::analyze_repository;
use gloc::error::GlocError;
use gloc::git::GitRepo;
use gloc::model::ReportRow;
use gloc::util::month_key;
use pretty_assertions::assert_eq;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn active_branch_is_reported_by_short_name() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    init_git_repo(dir.path());
    commit_file(dir.path(), "a.py", "x = 1\n", "2023-01-01 12:00:00 +0000");

    let repo = GitRepo::open(dir.path()).unwrap();
    assert_eq!(repo.active_branch().unwrap(), BRANCH);
}

#[test]
fn detached_head_has_no_active_branch() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    init_git_repo(dir.path());
    commit_file(dir.path(), "a.py", "x = 1\n", "2023-01-01 12:00:00 +0000");
    assert!(Command::new("git")
        .args(["checkout", "--detach"])
        .current_dir(dir.path())
        .status()
        .unwrap()
        .success());

    let repo = GitRepo::open(dir.path()).unwrap();
    assert!(matches!(repo.active_branch(), Err(GlocError::NoActiveBranch)));
}

#[test]
fn commits_are_listed_newest_first_by_committer_time() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    init_git_repo(dir.path());
    // Committer dates deliberately out of topological order.
    commit_file(dir.path(), "a.py", "a = 1\n", "2023-02-10 12:00:00 +0000");
    commit_file(dir.path(), "b.py", "b = 1\n", "2022-12-10 12:00:00 +0000");
    commit_file(dir.path(), "c.py", "c = 1\n", "2023-01-10 12:00:00 +0000");

    let repo = GitRepo::open(dir.path()).unwrap();
    let commits = repo.collect_commits().unwrap();
    let months: Vec<String> = commits.iter().map(|c| month_key(&c.timestamp)).collect();
    assert_eq!(months, vec!["2023-02", "2023-01", "2022-12"]);
    assert!(commits.iter().all(|c| c.short_id.len() == 7));
}

#[test]
fn unborn_branch_has_no_commits() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    init_git_repo(dir.path());

    let repo = GitRepo::open(dir.path()).unwrap();
    assert!(repo.collect_commits().unwrap().is_empty());

    let analysis = analyze_repository(&repo, false).unwrap();
    assert_eq!(analysis.branch, BRANCH);
    assert_eq!(analysis.commit_count, 0);
    assert!(analysis.rows.is_empty());
}

#[test]
fn checkout_replaces_the_working_tree() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    build_march_fixture(dir.path());

    let repo = GitRepo::open(dir.path()).unwrap();
    let commits = repo.collect_commits().unwrap();
    assert_eq!(commits.len(), 2);
    let (newest, oldest) = (&commits[0], &commits[1]);

    write_file(dir.path(), "untracked/Stray.java", "int stray;\n");

    repo.checkout(oldest).unwrap();
    assert!(dir.path().join("src/Hello.java").is_file());
    assert!(!dir.path().join("scripts/tool.py").exists());
    assert!(!dir.path().join("untracked").exists());
    assert!(dir.path().join(".git").is_dir());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("src/Hello.java")).unwrap(),
        HELLO_JAVA
    );

    repo.checkout(newest).unwrap();
    assert!(!dir.path().join("src/Hello.java").exists());
    assert_eq!(
        std::fs::read_to_string(dir.path().join("scripts/tool.py")).unwrap(),
        TOOL_PY
    );
}

#[test]
fn march_fixture_averages_over_both_commits() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    build_march_fixture(dir.path());

    let repo = GitRepo::open(dir.path()).unwrap();
    let analysis = analyze_repository(&repo, false).unwrap();

    assert_eq!(analysis.commit_count, 2);
    assert_eq!(analysis.skipped_files, 0);
    assert_eq!(
        analysis.rows,
        vec![ReportRow {
            month: "2023-03".to_string(),
            branch: BRANCH.to_string(),
            average_java: 4.0,
            average_python: 1.5,
            average_total: 5.5,
        }]
    );
}

#[cfg(unix)]
#[test]
fn checkout_restores_symlinks_without_counting_them() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    init_git_repo(dir.path());
    write_file(dir.path(), "Real.java", "int a;\n");
    std::os::unix::fs::symlink("Real.java", dir.path().join("Alias.java")).unwrap();
    commit_all(dir.path(), "add link", "2023-05-01 12:00:00 +0000");

    let repo = GitRepo::open(dir.path()).unwrap();
    let commits = repo.collect_commits().unwrap();
    repo.checkout(&commits[0]).unwrap();

    let alias = dir.path().join("Alias.java");
    assert!(alias.symlink_metadata().unwrap().file_type().is_symlink());

    let analysis = analyze_repository(&repo, false).unwrap();
    assert_eq!(analysis.rows[0].average_java, 1.0);
}

#[test]
fn missing_object_fails_checkout() {
    if !has_git() {
        return;
    }
    let dir = tempdir().unwrap();
    build_march_fixture(dir.path());
    let blob = git_output(dir.path(), &["rev-parse", "HEAD~1:src/Hello.java"]);
    let (fan, rest) = blob.split_at(2);
    std::fs::remove_file(dir.path().join(".git/objects").join(fan).join(rest)).unwrap();

    let repo = GitRepo::open(dir.path()).unwrap();
    let commits = repo.collect_commits().unwrap();
    let oldest = &commits[1];

    match repo.checkout(oldest) {
        Err(GlocError::Checkout { commit, .. }) => assert_eq!(commit, oldest.id.to_string()),
        other => panic!("expected a checkout error, got {other:?}"),
    }
    assert!(matches!(
        analyze_repository(&repo, false),
        Err(GlocError::Checkout { .. })
    ));
}
