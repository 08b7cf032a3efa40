use std::path::{Path, PathBuf};

use anyhow::Result;

use super::constants::{CONFIG_CANDIDATES, CONFIG_ENV};

/// An explicit path (flag, then environment) must exist; otherwise the first
/// existing candidate is used, if any.
pub(super) fn resolve_config_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("configured --config does not exist: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    if let Ok(p) = std::env::var(CONFIG_ENV) {
        let p = p.trim();
        if !p.is_empty() {
            let path = PathBuf::from(p);
            if !path.exists() {
                anyhow::bail!("configured {} does not exist: {}", CONFIG_ENV, path.display());
            }
            return Ok(Some(path));
        }
    }

    Ok(CONFIG_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists()))
}
