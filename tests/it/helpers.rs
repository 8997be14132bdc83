//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `editor()` / `editor_with_storage()` - Editors backed by in-memory storage
//! - `LayoutBuilder` - Builder for snapshot documents with exact geometry
//! - `FailingStorage` - A backend where every call fails
//! - `StaticSource` - An in-memory bundled asset source
//! - Pointer event shorthands and PNG fixtures

use image::{ImageFormat, RgbaImage};
use posterboard::assets::AssetSource;
use posterboard::error::{AssetError, AssetResult, StorageError, StorageResult};
use posterboard::input::{
    Modifiers, MouseButton, PointerDownEvent, PointerMoveEvent, PointerUpEvent,
};
use posterboard::types::{ItemId, Point};
use posterboard::{Editor, EditorConfig, MemoryStorage, Snapshot, Storage};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::io::Cursor;

// ============================================================================
// Editors
// ============================================================================

/// Fresh editor with empty in-memory storage and default config.
pub fn editor() -> Editor {
    editor_with_storage(MemoryStorage::new())
}

/// Fresh editor writing to `storage`. Keep a clone to inspect what it wrote.
pub fn editor_with_storage(storage: MemoryStorage) -> Editor {
    Editor::new(Box::new(storage), EditorConfig::default())
}

/// Editor started from `layout` as its default layout.
pub fn editor_from_layout(layout: Snapshot) -> Editor {
    let mut editor = editor();
    editor.initialize(None, Some(layout));
    editor
}

// ============================================================================
// LayoutBuilder - snapshot documents with exact geometry
// ============================================================================

/// Builder for snapshot documents.
///
/// # Example
/// ```ignore
/// let layout = LayoutBuilder::new()
///     .with_zoom(0.5)
///     .with_block("A", (10.0, 10.0), (20.0, 20.0))
///     .build();
/// ```
pub struct LayoutBuilder {
    items: Vec<Value>,
    zoom: f32,
}

impl Default for LayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            zoom: 1.0,
        }
    }

    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Add a block at real `position` with real `size`.
    pub fn with_block(mut self, name: &str, position: (f32, f32), size: (f32, f32)) -> Self {
        self.items.push(json!({
            "type": "block",
            "name": name,
            "x": position.0,
            "y": position.1,
            "width": size.0,
            "height": size.1,
            "maxWidth": size.0,
            "maxHeight": size.1,
        }));
        self
    }

    /// Add an image item that refers to an asset by name only.
    pub fn with_image(mut self, name: &str, position: (f32, f32), size: (f32, f32)) -> Self {
        self.items.push(json!({
            "type": "image",
            "name": name,
            "x": position.0,
            "y": position.1,
            "width": size.0,
            "height": size.1,
            "maxWidth": size.0,
            "maxHeight": size.1,
            "isFromPosters": true,
        }));
        self
    }

    pub fn build(self) -> Snapshot {
        let document = json!({
            "placedImages": self.items,
            "canvasZoom": self.zoom,
        });
        Snapshot::from_json(&document.to_string()).expect("layout document parses")
    }
}

// ============================================================================
// Storage and asset stand-ins
// ============================================================================

/// Storage where every operation fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingStorage;

impl Storage for FailingStorage {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Err(StorageError::Unavailable("read disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("quota exceeded".to_string()))
    }

    fn remove(&self, _key: &str) -> StorageResult<()> {
        Err(StorageError::Unavailable("remove disabled".to_string()))
    }
}

/// Bundled assets held in memory, keyed by name.
#[derive(Default)]
pub struct StaticSource {
    files: HashMap<String, Vec<u8>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, bytes: Vec<u8>) -> Self {
        self.files.insert(name.to_string(), bytes);
        self
    }
}

impl AssetSource for StaticSource {
    fn list(&self) -> AssetResult<Vec<String>> {
        Ok(self.files.keys().cloned().collect())
    }

    fn read(&self, name: &str) -> AssetResult<Vec<u8>> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| AssetError::NotFound(name.to_string()))
    }
}

/// Encoded PNG of the given dimensions.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, image::Rgba([200, 120, 40, 255]));
    let mut bytes = Cursor::new(Vec::new());
    image
        .write_to(&mut bytes, ImageFormat::Png)
        .expect("PNG encoding succeeds");
    bytes.into_inner()
}

// ============================================================================
// Pointer shorthands
// ============================================================================

pub fn down(x: f32, y: f32) -> PointerDownEvent {
    PointerDownEvent {
        position: Point::new(x, y),
        button: MouseButton::Primary,
        modifiers: Modifiers::default(),
    }
}

pub fn shift_down(x: f32, y: f32) -> PointerDownEvent {
    PointerDownEvent {
        modifiers: Modifiers::shift(),
        ..down(x, y)
    }
}

pub fn move_to(x: f32, y: f32) -> PointerMoveEvent {
    PointerMoveEvent {
        position: Point::new(x, y),
        modifiers: Modifiers::default(),
    }
}

pub fn up(x: f32, y: f32) -> PointerUpEvent {
    PointerUpEvent {
        position: Point::new(x, y),
        button: MouseButton::Primary,
    }
}

/// Full press-move-release gesture.
pub fn drag(editor: &mut Editor, from: (f32, f32), to: (f32, f32)) {
    editor.handle_pointer_down(&down(from.0, from.1));
    editor.handle_pointer_move(&move_to(to.0, to.1));
    editor.handle_pointer_up(&up(to.0, to.1));
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_item_count(editor: &Editor, expected: usize) {
    assert_eq!(
        editor.board().len(),
        expected,
        "expected {} items, found {}",
        expected,
        editor.board().len()
    );
}

/// Ids in store order.
pub fn item_ids(editor: &Editor) -> Vec<ItemId> {
    editor.board().items().iter().map(|item| item.id).collect()
}

pub fn position_of(editor: &Editor, id: ItemId) -> (f32, f32) {
    editor.board().get_item(id).expect("item exists").position
}

pub fn size_of(editor: &Editor, id: ItemId) -> (f32, f32) {
    editor.board().get_item(id).expect("item exists").size
}

pub fn assert_close(actual: (f32, f32), expected: (f32, f32)) {
    assert!(
        (actual.0 - expected.0).abs() < 1e-3 && (actual.1 - expected.1).abs() < 1e-3,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}
