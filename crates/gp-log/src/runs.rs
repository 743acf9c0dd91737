//! Listing of run directories under a root path.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::{LogError, LogResult};

/// One run directory, with its position in the printed listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunEntry {
    pub index: usize,
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RunCatalog {
    root_dir: PathBuf,
    runs: Vec<RunEntry>,
}

impl RunCatalog {
    /// Scan `root_dir` for run directories. Plain files are skipped and the
    /// result is sorted by name so indices are stable between invocations.
    pub fn scan(root_dir: impl Into<PathBuf>) -> LogResult<Self> {
        let root_dir = root_dir.into();
        let read_dir = fs::read_dir(&root_dir).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LogError::RootNotFound {
                path: root_dir.clone(),
            },
            _ => LogError::Io {
                path: root_dir.clone(),
                source: e,
            },
        })?;

        let mut named = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| LogError::Io {
                path: root_dir.clone(),
                source: e,
            })?;
            let path = entry.path();
            if path.is_dir() {
                let name = entry.file_name().to_string_lossy().to_string();
                named.push((name, path));
            }
        }
        named.sort_by(|a, b| a.0.cmp(&b.0));

        let runs = named
            .into_iter()
            .enumerate()
            .map(|(index, (name, path))| RunEntry { index, name, path })
            .collect::<Vec<_>>();
        tracing::debug!(root = %root_dir.display(), count = runs.len(), "scanned runs");

        Ok(Self { root_dir, runs })
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn runs(&self) -> &[RunEntry] {
        &self.runs
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RunEntry> {
        self.runs.get(index)
    }
}
