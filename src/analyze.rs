use crate::aggregate::Aggregator;
use crate::classify::classify;
use crate::count::count_lines;
use crate::error::{GlocError, Result};
use crate::git::{GitRepo, ScratchClone};
use crate::model::{CommitCounts, Language, ReportRow};
use crate::report::write_csv;
use crate::util::day_key;
use anyhow::Context;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{debug, info, warn};

/// Outcome of walking one branch's history.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub branch: String,
    pub commit_count: usize,
    pub skipped_files: usize,
    pub rows: Vec<ReportRow>,
}

pub fn exec(repo_url: &str, output_csv: &Path) -> anyhow::Result<()> {
    info!("Processing repository: {repo_url}");
    let scratch = ScratchClone::clone_from(repo_url).context("Failed to clone repository")?;
    debug!(dir = %scratch.path().display(), "scratch clone ready");

    let analysis = analyze_repository(scratch.repo(), true);
    if let Err(e) = scratch.close() {
        warn!("Scratch clone was not fully removed: {e}");
    }
    let analysis = analysis.context("Failed to analyze commit history")?;

    write_csv(&analysis.rows, output_csv)
        .with_context(|| format!("Failed to write {}", output_csv.display()))?;
    info!("Output written to {}", output_csv.display());

    println!(
        "{} {} ({} months, {} commits on {})",
        style("Output written to").bold(),
        style(output_csv.display()).cyan(),
        style(analysis.rows.len()).yellow(),
        style(analysis.commit_count).yellow(),
        style(&analysis.branch).green(),
    );
    if analysis.skipped_files > 0 {
        println!(
            "{} unreadable files were skipped",
            style(analysis.skipped_files).red()
        );
    }

    Ok(())
}

/// Check out every commit of the active branch in turn and aggregate its
/// Java and Python line counts by month.
///
/// The working tree of `repo` is overwritten; it is left at the oldest commit.
pub fn analyze_repository(repo: &GitRepo, show_progress: bool) -> Result<Analysis> {
    let branch = repo.active_branch()?;
    let commits = repo.collect_commits()?;
    info!(branch = %branch, commits = commits.len(), "walking history");

    let pb = if show_progress {
        ProgressBar::new(commits.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut aggregator = Aggregator::new();
    let mut skipped_files = 0;

    for commit in &commits {
        if gix::interrupt::is_triggered() {
            pb.abandon();
            return Err(GlocError::Interrupted);
        }
        pb.set_message(commit.short_id.clone());
        debug!(
            "Checking out commit {} from {}",
            commit.short_id,
            day_key(&commit.timestamp)
        );
        repo.checkout(commit)?;

        let counts = count_tree(repo.path())?;
        debug!(
            commit = %commit.short_id,
            java_files = counts.java_files,
            python_files = counts.python_files,
            java_lines = counts.java_lines,
            python_lines = counts.python_lines,
            skipped = counts.skipped_files,
            "counted"
        );

        aggregator.record(commit, counts.java_lines, counts.python_lines);
        skipped_files += counts.skipped_files;
        pb.inc(1);
    }

    pb.finish_and_clear();

    if aggregator.is_empty() {
        warn!("Branch {branch} has no commits; the report will only contain a header");
    }

    Ok(Analysis {
        commit_count: aggregator.commit_count() as usize,
        rows: aggregator.into_rows(&branch),
        branch,
        skipped_files,
    })
}

/// Sum the code lines of every Java and Python file under `root`.
///
/// Files that vanish or cannot be opened are skipped with a warning and
/// tallied in [`CommitCounts::skipped_files`].
pub fn count_tree(root: &Path) -> Result<CommitCounts> {
    let files = classify(root)?;
    let mut counts = CommitCounts {
        java_files: files.java.len(),
        python_files: files.python.len(),
        ..CommitCounts::default()
    };

    for (language, path) in files.iter() {
        match count_lines(path, language) {
            Ok(lines) => match language {
                Language::Java => counts.java_lines += lines,
                Language::Python => counts.python_lines += lines,
            },
            Err(GlocError::FileRead { path, source }) => {
                warn!("Skipping unreadable {language} file {}: {source}", path.display());
                counts.skipped_files += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(counts)
}
