use crate::error::{GlocError, Result};
use crate::model::Language;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Java and Python files found in one working tree, in traversal order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceFiles {
    pub java: Vec<PathBuf>,
    pub python: Vec<PathBuf>,
}

impl SourceFiles {
    pub fn push(&mut self, language: Language, path: PathBuf) {
        match language {
            Language::Java => self.java.push(path),
            Language::Python => self.python.push(path),
        }
    }

    pub fn len(&self) -> usize {
        self.java.len() + self.python.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &Path)> {
        let java = self.java.iter().map(|p| (Language::Java, p.as_path()));
        let python = self.python.iter().map(|p| (Language::Python, p.as_path()));
        java.chain(python)
    }
}

/// Recursively partition the regular files under `root` by language.
///
/// Everything is visited (hidden files, ignored files) except the `.git`
/// directory. Symlinks are not followed. A directory that cannot be read
/// fails the whole walk.
pub fn classify(root: &Path) -> Result<SourceFiles> {
    if !root.is_dir() {
        return Err(GlocError::Walk(format!("{} is not a directory", root.display())));
    }

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| entry.file_name() != OsStr::new(".git"))
        .build();

    let mut files = SourceFiles::default();
    for entry in walker {
        let entry = entry.map_err(|e| GlocError::Walk(e.to_string()))?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let Some(language) = entry.file_name().to_str().and_then(Language::from_file_name)
        else {
            continue;
        };
        files.push(language, entry.into_path());
    }

    Ok(files)
}
