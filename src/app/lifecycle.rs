//! Application lifecycle - startup, persistence, undo and reset.

use super::{Editor, EditorEvent};
use crate::assets::{AssetSource, preload};
use crate::perf::{PERSIST_BUDGET_MS, measure_and_log};
use crate::snapshot::{RestoreReport, Snapshot};
use crate::types::AssetOrigin;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, error, info, warn};

/// Read a default layout document (snapshot-shaped JSON).
pub fn load_default_layout(path: &Path) -> Result<Snapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read default layout {}", path.display()))?;
    Snapshot::from_json(&text).with_context(|| format!("Failed to parse default layout {}", path.display()))
}

impl Editor {
    /// Bring the editor up: read the saved layout, preload bundled assets,
    /// then restore the saved layout or fall back to `default_layout`.
    ///
    /// Every failure is logged and skipped; the editor is usable afterwards
    /// regardless.
    pub fn initialize(&mut self, source: Option<&dyn AssetSource>, default_layout: Option<Snapshot>) {
        let saved = self.load_saved_state();

        if let Some(source) = source {
            match preload(source) {
                Ok(assets) => {
                    let count = assets.len();
                    for asset in assets {
                        self.canvas.board.assets_mut().register(
                            asset.name,
                            asset.natural_size,
                            AssetOrigin::Bundled,
                            asset.bytes,
                        );
                    }
                    info!(count, "Loaded bundled assets");
                    self.notify(EditorEvent::AssetsChanged);
                }
                Err(e) => error!(error = %e, "Could not list bundled assets"),
            }
        }

        match (saved, default_layout) {
            (Some(saved), _) => {
                self.restore_snapshot(&saved);
            }
            (None, Some(layout)) => {
                self.persistence.history.set_current(layout.clone());
                self.restore_snapshot(&layout);
            }
            (None, None) => {}
        }
    }

    /// Read and parse the saved layout. A parsed value also becomes the
    /// undo baseline.
    pub(crate) fn load_saved_state(&mut self) -> Option<Snapshot> {
        let key = self.config.storage_key.clone();
        let text = match self.persistence.storage.get(&key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                error!(error = %e, "Could not load state");
                return None;
            }
        };
        match Snapshot::from_json(&text) {
            Ok(snapshot) => {
                self.persistence.history.set_current(snapshot.clone());
                Some(snapshot)
            }
            Err(e) => {
                error!(error = %e, "Saved state is unreadable, ignoring it");
                None
            }
        }
    }

    /// Replace the layout with `snapshot` without committing.
    pub(crate) fn restore_snapshot(&mut self, snapshot: &Snapshot) -> RestoreReport {
        self.canvas.input_state.reset();
        self.canvas.selection.deselect_all();
        self.canvas.board.clear_items();

        let report = snapshot.restore_into(&mut self.canvas.board, &mut self.view);

        if report.skipped > 0 {
            warn!(skipped = report.skipped, "Some items could not be restored");
        }
        self.notify(EditorEvent::Restored);
        report
    }

    /// Capture the current layout, push the previous commit onto the undo
    /// stack and persist.
    pub(crate) fn commit(&mut self) {
        let snapshot = Snapshot::capture(&self.canvas.board, &self.view);
        self.persist(&snapshot);
        self.persistence.history.commit(snapshot);
        debug!(depth = self.persistence.history.depth(), "Committed");
        self.notify(EditorEvent::Committed);
    }

    /// Write a snapshot to storage. Failures are logged and the previous
    /// stored value is left as is.
    pub(crate) fn persist(&self, snapshot: &Snapshot) {
        let json = match snapshot.to_json() {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Could not serialize state");
                return;
            }
        };
        let key = &self.config.storage_key;
        let result = measure_and_log("persist", PERSIST_BUDGET_MS, || {
            self.persistence.storage.set(key, &json)
        });
        if let Err(e) = result {
            error!(error = %e, "Could not save state");
        }
    }

    /// Step back to the previous commit. No-op when there is none.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.persistence.history.undo() else {
            return false;
        };
        self.persist(&previous);
        self.restore_snapshot(&previous);
        true
    }

    /// Remove every item, reset zoom and forget the saved layout. Undo
    /// history is left untouched.
    pub fn clear_canvas(&mut self) {
        self.canvas.input_state.reset();
        self.canvas.board.clear_items();
        self.canvas.selection.deselect_all();
        self.view.set_zoom(1.0);

        let key = self.config.storage_key.clone();
        if let Err(e) = self.persistence.storage.remove(&key) {
            error!(error = %e, "Could not clear saved state");
        }

        self.notify(EditorEvent::ItemsChanged);
        self.notify(EditorEvent::SelectionChanged);
        self.notify(EditorEvent::ViewChanged);
    }
}
