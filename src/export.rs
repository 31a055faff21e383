use crate::viz::{self, Figure};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Pending-export marker produced by a configurator session.
///
/// Once set it stays set until consumed with [`ExportSignal::take`]; requests
/// that do not ask for export leave it untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSignal {
    pub pending: bool,
    pub name: String,
}

impl ExportSignal {
    pub fn mark(&mut self, name: impl Into<String>) {
        self.pending = true;
        self.name = name.into();
    }

    /// Consume the signal, returning the export name if one was pending.
    pub fn take(&mut self) -> Option<String> {
        if self.pending {
            self.pending = false;
            Some(std::mem::take(&mut self.name))
        } else {
            None
        }
    }
}

/// Path a figure named `name` is exported to inside `dir`.
pub fn export_path<P: AsRef<Path>>(dir: P, name: &str) -> Result<PathBuf> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        bail!("export name is empty");
    }
    if trimmed.contains(['/', '\\']) || trimmed == "." || trimmed == ".." {
        bail!("export name must be a plain file stem, got {:?}", name);
    }
    Ok(dir.as_ref().join(format!("{trimmed}.svg")))
}

/// Write `figure` to `dir` if `signal` is pending, consuming the signal.
///
/// Returns the written path, or `None` when nothing was pending.
pub fn export_pending<P: AsRef<Path>>(
    signal: &mut ExportSignal,
    figure: &Figure,
    dir: P,
) -> Result<Option<PathBuf>> {
    if !signal.pending {
        return Ok(None);
    }
    let path = export_path(dir.as_ref(), &signal.name)?;
    fs::create_dir_all(dir.as_ref())?;
    viz::render_svg(figure, &path)?;
    signal.take();
    log::info!("exported figure to {}", path.display());
    Ok(Some(path))
}
