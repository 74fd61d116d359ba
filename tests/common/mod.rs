#![allow(dead_code)]

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use std::process::Command;

pub const BRANCH: &str = "trunk";

/// Ten physical lines, eight of them code.
pub const HELLO_JAVA: &str = "\
// Greeting service.
package demo;

public class Hello {
    public static void main(String[] args) {
        String who = \"world\";
        System.out.println(\"Hello, \" + who);
        int x = 1;
    }
}
";

/// Four physical lines, three of them code.
pub const TOOL_PY: &str = "\
# helper
import sys
print(sys.argv)
sys.exit(0)
";

pub const CSV_HEADER_LINE: &str =
    "Month,Branch,Average Java Lines of Code,Average Python Lines of Code,Average Total Lines of Code\r\n";

pub fn has_git() -> bool {
    Command::new("git").arg("--version").output().is_ok()
}

fn git(dir: &Path, args: &[&str]) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .unwrap()
        .success());
}

pub fn git_output(dir: &Path, args: &[&str]) -> String {
    let out = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(out.status.success());
    String::from_utf8(out.stdout).unwrap().trim().to_string()
}

fn git_at(dir: &Path, args: &[&str], date: &str) {
    assert!(Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .status()
        .unwrap()
        .success());
}

pub fn init_git_repo(dir: &Path) {
    git(dir, &["init"]);
    git(dir, &["symbolic-ref", "HEAD", &format!("refs/heads/{BRANCH}")]);
    git(dir, &["config", "core.autocrlf", "false"]);
    git(dir, &["config", "core.safecrlf", "false"]);
    git(dir, &["config", "user.email", "you@example.com"]);
    git(dir, &["config", "user.name", "Your Name"]);
}

pub fn write_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut f = File::create(&path).unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.sync_all().unwrap();
}

pub fn remove_file(dir: &Path, name: &str) {
    fs::remove_file(dir.join(name)).unwrap();
}

/// Stage everything (including deletions) and commit with a fixed
/// author and committer date such as `2023-03-05 10:00:00 +0000`.
pub fn commit_all(dir: &Path, message: &str, date: &str) {
    git(dir, &["add", "-A"]);
    git_at(dir, &["commit", "--allow-empty", "-m", message], date);
}

pub fn commit_file(dir: &Path, name: &str, content: &str, date: &str) {
    write_file(dir, name, content);
    commit_all(dir, &format!("add {name}"), date);
}

/// Two commits in March 2023: the first adds `Hello.java`, the second
/// deletes it and adds `tool.py`.
pub fn build_march_fixture(dir: &Path) {
    init_git_repo(dir);
    commit_file(dir, "src/Hello.java", HELLO_JAVA, "2023-03-05 10:00:00 +0000");
    remove_file(dir, "src/Hello.java");
    write_file(dir, "scripts/tool.py", TOOL_PY);
    commit_all(dir, "replace java with python", "2023-03-20 10:00:00 +0000");
}
