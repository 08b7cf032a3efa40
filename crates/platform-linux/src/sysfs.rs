//! Roots and read helpers for the kernel virtual filesystems.

use std::fs;
use std::path::{Path, PathBuf};

/// Mount points of sysfs and procfs; overridable so collectors can run
/// against a fixture tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SysRoots {
    pub sysfs: PathBuf,
    pub procfs: PathBuf,
}

impl Default for SysRoots {
    fn default() -> Self {
        Self {
            sysfs: PathBuf::from("/sys"),
            procfs: PathBuf::from("/proc"),
        }
    }
}

impl SysRoots {
    pub fn new(sysfs: impl Into<PathBuf>, procfs: impl Into<PathBuf>) -> Self {
        Self {
            sysfs: sysfs.into(),
            procfs: procfs.into(),
        }
    }

    pub fn sys(&self, relative: &str) -> PathBuf {
        self.sysfs.join(relative)
    }

    pub fn proc(&self, relative: &str) -> PathBuf {
        self.procfs.join(relative)
    }
}

pub(crate) fn read_trimmed(path: &Path) -> Option<String> {
    fs::read_to_string(path).ok().map(|s| s.trim().to_string())
}

/// Trimmed contents, `None` when unreadable or blank.
pub(crate) fn read_value(path: &Path) -> Option<String> {
    read_trimmed(path).filter(|value| !value.is_empty())
}

/// Directory entries sorted by name, so enumeration order is stable.
pub(crate) fn sorted_entries(dir: &Path) -> Vec<(String, PathBuf)> {
    let Ok(read_dir) = fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut entries: Vec<(String, PathBuf)> = read_dir
        .flatten()
        .map(|entry| (entry.file_name().to_string_lossy().to_string(), entry.path()))
        .collect();
    entries.sort();
    entries
}
