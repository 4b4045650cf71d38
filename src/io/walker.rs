use anyhow::Result;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Recursive discovery of Python source files, honoring gitignore
/// rules plus explicit glob ignore patterns.
pub struct FileWalker {
    root: PathBuf,
    ignore_patterns: Vec<String>,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            ignore_patterns: vec![],
        }
    }

    pub fn with_ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.ignore_patterns = patterns;
        self
    }

    pub fn walk(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .git_ignore(true)
            .build();

        for entry in walker {
            let entry = entry?;
            let path = entry.path();

            if path.is_file() && self.should_process(path) {
                files.push(path.to_path_buf());
            }
        }

        Ok(files)
    }

    fn should_process(&self, path: &Path) -> bool {
        if !is_python_file(path) {
            return false;
        }
        let path_str = path.to_string_lossy();
        for pattern in &self.ignore_patterns {
            if glob::Pattern::new(pattern)
                .map(|p| p.matches(&path_str))
                .unwrap_or(false)
            {
                return false;
            }
        }
        true
    }
}

fn is_python_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy() == "py")
        .unwrap_or(false)
}

/// Expands a mix of files and directories into a sorted, deduplicated
/// list of Python files. Explicit file arguments are taken as-is when
/// they have a `.py` extension.
pub fn find_python_files(paths: &[PathBuf], ignore_patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_file() {
            if is_python_file(path) {
                files.push(path.clone());
            }
        } else {
            files.extend(
                FileWalker::new(path.clone())
                    .with_ignore_patterns(ignore_patterns.to_vec())
                    .walk()?,
            );
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
