//! File-existence probe used by message rendering
//!
//! The only filesystem access the builder performs is asking whether an icon
//! exists. It goes through this trait so tests can answer deterministically.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub trait FileProbe: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
}

/// Probe backed by the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl FileProbe for FsProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// In-memory probe that only knows the paths it was given
#[derive(Debug, Default)]
pub struct StaticProbe {
    paths: Mutex<HashSet<PathBuf>>,
}

impl StaticProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        StaticProbe {
            paths: Mutex::new(paths.into_iter().map(Into::into).collect()),
        }
    }

    pub fn add(&self, path: impl Into<PathBuf>) {
        self.paths.lock().unwrap().insert(path.into());
    }
}

impl FileProbe for StaticProbe {
    fn exists(&self, path: &Path) -> bool {
        self.paths.lock().unwrap().contains(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_probe_knows_only_its_paths() {
        let p = StaticProbe::with_paths(["icons/a.png"]);
        assert!(p.exists(Path::new("icons/a.png")));
        assert!(!p.exists(Path::new("icons/b.png")));
        p.add("icons/b.png");
        assert!(p.exists(Path::new("icons/b.png")));
    }

    #[test]
    fn fs_probe_checks_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("icon.png");
        assert!(!FsProbe.exists(&file));
        std::fs::write(&file, b"png").unwrap();
        assert!(FsProbe.exists(&file));
    }
}
