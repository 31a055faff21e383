//! Configurator session: the current rendering defaults, the open figures
//! built from them, and the pending-export signal.
//!
//! Nothing here is process-global. Each session is an owned value and every
//! mutation goes through `&mut self`, so one request → figure → export
//! sequence cannot interleave with another on the same session.

use crate::error::Result;
use crate::export::{self, ExportSignal};
use crate::models::StyleRequest;
use crate::profile::StyleProfile;
use crate::viz::Figure;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default)]
pub struct StyleConfigurator {
    defaults: StyleProfile,
    export: ExportSignal,
    figures: Vec<Figure>,
}

impl StyleConfigurator {
    /// Fresh session with library baseline defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `req` to this session and return the current export signal.
    ///
    /// The request is validated before anything changes; on error the
    /// defaults, open figures and export signal are exactly as before.
    /// Defaults are replaced wholesale, so applying the same request twice
    /// yields identical defaults.
    pub fn apply(&mut self, req: &StyleRequest) -> Result<ExportSignal> {
        let profile = StyleProfile::from_request(req)?;

        self.defaults = profile;

        if req.clear_previous {
            let closed = self.close_all();
            log::debug!("closed {closed} open figure(s)");
        }
        if req.mark_for_export {
            self.export.mark(req.export_name.clone());
        }
        Ok(self.export.clone())
    }

    /// Current rendering defaults.
    pub fn defaults(&self) -> &StyleProfile {
        &self.defaults
    }

    /// Restore library baseline defaults. Figures and export signal are kept.
    pub fn reset(&mut self) {
        self.defaults = StyleProfile::baseline();
    }

    /// Open a new figure styled with the current defaults.
    pub fn figure(&mut self) -> &mut Figure {
        let idx = self.figures.len();
        self.figures.push(Figure::new(self.defaults.clone()));
        &mut self.figures[idx]
    }

    pub fn open_figures(&self) -> &[Figure] {
        &self.figures
    }

    /// Discard every open figure; returns how many were dropped.
    pub fn close_all(&mut self) -> usize {
        let n = self.figures.len();
        self.figures.clear();
        n
    }

    pub fn export_signal(&self) -> &ExportSignal {
        &self.export
    }

    /// Consume the pending export, if any.
    pub fn take_export(&mut self) -> Option<String> {
        self.export.take()
    }

    /// Export the most recently opened figure if an export is pending.
    pub fn export_latest<P: AsRef<Path>>(&mut self, dir: P) -> anyhow::Result<Option<PathBuf>> {
        match self.figures.last() {
            Some(fig) => export::export_pending(&mut self.export, fig, dir),
            None => Ok(None),
        }
    }
}
