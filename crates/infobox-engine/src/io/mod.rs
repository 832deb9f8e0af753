//! Filesystem access: reading markup and indexing a notes folder so link
//! and image names can be resolved to files.

use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolve::LinkResolver;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Read a markup file and return its content
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }
    Ok(())
}

/// Scan for every non-hidden file below the notes directory, sorted.
pub fn scan_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_notes_dir(notes_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if hidden {
            continue;
        }

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else {
            files.push(path);
        }
    }

    Ok(())
}

/// Resolves note and image names to paths relative to a notes folder.
///
/// Lookup order, each over all paths in sorted order:
/// 1. exact relative path (`People/John Doe.md`)
/// 2. relative path without `.md` (`People/John Doe`)
/// 3. file name (`cat.png`)
/// 4. file stem (`John Doe`)
///
/// Unknown names resolve to themselves.
#[derive(Debug, Clone, Default)]
pub struct VaultResolver {
    paths: Vec<RelativePathBuf>,
}

impl VaultResolver {
    /// Index every file under `notes_root`.
    pub fn build(notes_root: &Path) -> Result<Self, IoError> {
        let files = scan_files(notes_root)?;
        let paths = files.iter().filter_map(|f| {
            let rel = f.strip_prefix(notes_root).ok()?;
            RelativePathBuf::from_path(rel).ok()
        });
        let resolver = Self::from_paths(paths);
        log::info!(
            "Indexed {} files under {}",
            resolver.len(),
            notes_root.display()
        );
        Ok(resolver)
    }

    pub fn from_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = RelativePathBuf>,
    {
        let mut paths: Vec<_> = paths.into_iter().collect();
        paths.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Self { paths }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The indexed file a reference points at, if any.
    pub fn lookup(&self, reference: &str) -> Option<&RelativePath> {
        let rules: [fn(&RelativePath, &str) -> bool; 4] = [
            |p, r| p.as_str() == r,
            |p, r| p.as_str().strip_suffix(".md") == Some(r),
            |p, r| p.file_name() == Some(r),
            |p, r| p.file_stem() == Some(r),
        ];
        for matches in rules {
            for path in &self.paths {
                let path: &RelativePath = path;
                if matches(path, reference) {
                    return Some(path);
                }
            }
        }
        None
    }
}

impl LinkResolver for VaultResolver {
    fn resolve(&self, reference: &str) -> String {
        match self.lookup(reference) {
            Some(path) => path.to_string(),
            None => {
                log::debug!("no file for link target {reference:?}");
                reference.to_string()
            }
        }
    }
}
