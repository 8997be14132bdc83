//! Application state - the Editor struct and its sub-structs.

use crate::board::Board;
use crate::config::EditorConfig;
use crate::history::History;
use crate::input::InputState;
use crate::input::coords::CoordinateContext;
use crate::selection::SelectionManager;
use crate::storage::Storage;
use crate::types::ItemId;
use crate::view::{ViewState, Viewport};

/// Change notifications for a rendering adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorEvent {
    /// Item geometry or membership changed
    ItemsChanged,
    /// Selection, primary item or marquee changed
    SelectionChanged,
    /// Zoom, toggles, wall guide or viewport changed
    ViewChanged,
    /// The asset registry changed
    AssetsChanged,
    /// A snapshot was committed to history and storage
    Committed,
    /// Items were rebuilt from a snapshot (startup or undo)
    Restored,
}

pub type Subscriber = Box<dyn FnMut(&EditorEvent)>;

/// Canvas interaction state - items, selection and the active gesture
pub struct CanvasState {
    pub board: Board,
    pub selection: SelectionManager,
    /// Input state machine
    pub input_state: InputState,
    /// Host-supplied canvas geometry
    pub viewport: Viewport,
}

/// Persistence state - storage backend and undo history
pub struct PersistenceState {
    pub storage: Box<dyn Storage>,
    pub history: History,
}

/// The layout editor. Owns all editing state and is driven by the host's
/// pointer, keyboard and toolbar events.
pub struct Editor {
    pub(crate) canvas: CanvasState,
    pub(crate) view: ViewState,
    pub(crate) persistence: PersistenceState,
    pub(crate) config: EditorConfig,
    subscribers: Vec<Subscriber>,
}

impl Editor {
    pub fn new(storage: Box<dyn Storage>, config: EditorConfig) -> Self {
        Self::with_board(Board::new(), storage, config)
    }

    /// Start from a specific board, e.g. one with an injected id generator.
    pub fn with_board(board: Board, storage: Box<dyn Storage>, config: EditorConfig) -> Self {
        Self {
            canvas: CanvasState {
                board,
                selection: SelectionManager::new(),
                input_state: InputState::default(),
                viewport: Viewport::default(),
            },
            view: ViewState::default(),
            persistence: PersistenceState {
                storage,
                history: History::new(config.max_history),
            },
            config,
            subscribers: Vec::new(),
        }
    }

    // ==================== Queries ====================

    pub fn board(&self) -> &Board {
        &self.canvas.board
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.canvas.selection
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn viewport(&self) -> &Viewport {
        &self.canvas.viewport
    }

    pub fn input_state(&self) -> &InputState {
        &self.canvas.input_state
    }

    pub fn history(&self) -> &History {
        &self.persistence.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Resize handles are shown (and hit-testable) on this item.
    pub fn handles_visible(&self, id: ItemId) -> bool {
        self.view.show_handles || self.canvas.selection.contains(id)
    }

    // ==================== Host Geometry ====================

    /// Update canvas element geometry. Not persisted.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if self.canvas.viewport != viewport {
            self.canvas.viewport = viewport;
            self.notify(EditorEvent::ViewChanged);
        }
    }

    // ==================== Notifications ====================

    pub fn subscribe(&mut self, subscriber: impl FnMut(&EditorEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub(crate) fn notify(&mut self, event: EditorEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }

    pub(crate) fn coord_context(&self) -> CoordinateContext<'_> {
        CoordinateContext::new(&self.canvas.viewport, self.view.zoom)
    }
}
