//! Undo history integration tests.

use crate::helpers::{
    LayoutBuilder, StaticSource, assert_close, assert_item_count, down, drag, editor, editor_from_layout,
    editor_with_storage, item_ids, png_bytes, position_of,
};
use posterboard::constants::STORAGE_KEY;
use posterboard::storage::Storage;
use posterboard::{Editor, EditorConfig, EditorEvent, MemoryStorage, Snapshot};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_undo_without_history_is_noop() {
    let mut editor = editor();
    assert!(!editor.undo());

    editor.add_block(2.0, 2.0);
    assert!(!editor.undo());
    assert_item_count(&editor, 1);
}

#[test]
fn test_undo_add_sequence() {
    let mut editor = editor();
    editor.add_block(2.0, 2.0);
    editor.add_block(3.0, 3.0);
    editor.add_block(4.0, 4.0);

    assert!(editor.undo());
    assert_item_count(&editor, 2);
    assert!(editor.undo());
    assert_item_count(&editor, 1);
    assert!(!editor.undo());
}

#[test]
fn test_undo_notifies_restore_only() {
    let mut editor = editor();
    editor.add_block(2.0, 2.0);
    editor.add_block(3.0, 3.0);

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    editor.subscribe(move |event| sink.borrow_mut().push(*event));

    assert!(editor.undo());
    assert!(events.borrow().contains(&EditorEvent::Restored));
    assert!(!events.borrow().contains(&EditorEvent::Committed));
}

#[test]
fn test_history_depth_is_bounded() {
    let config = EditorConfig {
        max_history: 3,
        ..EditorConfig::default()
    };
    let mut editor = Editor::new(Box::new(MemoryStorage::new()), config);

    // max + 1 commits
    for i in 0..4 {
        editor.add_block(2.0 + i as f32, 2.0);
        assert!(editor.history().depth() <= 3);
    }
    assert_eq!(editor.history().depth(), 3);

    for _ in 0..3 {
        assert!(editor.undo());
    }
    // Back at the state after the first commit; nothing older survives
    assert_item_count(&editor, 1);
    assert!(!editor.undo());
    assert_item_count(&editor, 1);
}

#[test]
fn test_undo_restores_dragged_position() {
    let mut editor = editor_from_layout(
        LayoutBuilder::new()
            .with_block("A", (100.0, 100.0), (200.0, 200.0))
            .build(),
    );

    drag(&mut editor, (150.0, 150.0), (350.0, 250.0));
    drag(&mut editor, (350.0, 250.0), (450.0, 250.0));

    assert!(editor.undo());
    let id = item_ids(&editor)[0];
    assert_close(position_of(&editor, id), (300.0, 200.0));

    assert!(editor.undo());
    let id = item_ids(&editor)[0];
    assert_close(position_of(&editor, id), (100.0, 100.0));
}

#[test]
fn test_undo_does_not_commit_and_persists_restored_state() {
    let storage = MemoryStorage::new();
    let mut editor = editor_with_storage(storage.clone());
    editor.add_block(2.0, 2.0);
    editor.add_block(3.0, 3.0);
    editor.add_block(4.0, 4.0);
    assert_eq!(editor.history().depth(), 2);

    editor.undo();
    assert_eq!(editor.history().depth(), 1);

    let saved = storage.get(STORAGE_KEY).unwrap().unwrap();
    let saved = Snapshot::from_json(&saved).unwrap();
    assert_eq!(saved.placed_images.len(), 2);
    assert_eq!(editor.history().current(), Some(&saved));
}

#[test]
fn test_undo_clears_selection_and_gesture() {
    let mut editor = editor();
    editor.add_block(2.0, 2.0);
    editor.add_block(3.0, 3.0);

    editor.handle_pointer_down(&down(100.0, 100.0));
    assert!(!editor.selection().is_empty());

    editor.undo();
    assert!(editor.selection().is_empty());
    assert!(editor.input_state().is_idle());
}

#[test]
fn test_undo_resolves_images_by_asset_name() {
    let source = StaticSource::new()
        .with_file("sunset.png", png_bytes(60, 40))
        .with_file("forest.png", png_bytes(40, 60));
    let mut editor = editor();
    editor.initialize(Some(&source), None);

    let ids: Vec<_> = editor.board().assets().iter().map(|asset| asset.id).collect();
    editor.add_asset_to_canvas(ids[0]);
    editor.add_asset_to_canvas(ids[1]);
    editor.add_block(2.0, 2.0);

    assert!(editor.undo());
    assert_item_count(&editor, 2);
    let names: Vec<_> = editor.board().items().iter().map(|item| item.name().to_string()).collect();
    assert_eq!(names, vec!["forest.png", "sunset.png"]);
    assert!(editor.board().items().iter().all(|item| item.is_image()));
}

#[test]
fn test_undo_restores_uploads_from_inline_data() {
    let mut editor = editor();
    let asset = editor.upload_asset("mine.png", png_bytes(64, 48)).unwrap();
    editor.add_asset_to_canvas(asset);
    editor.add_block(2.0, 2.0);

    editor.remove_uploaded_assets();
    assert_item_count(&editor, 1);
    assert!(editor.board().assets().is_empty());

    assert!(editor.undo());
    assert_item_count(&editor, 2);
    let restored = editor.board().assets().find_by_name("mine.png").unwrap();
    assert!(restored.is_uploaded());
    assert_eq!(restored.natural_size, (64.0, 48.0));
}

#[test]
fn test_unresolvable_images_are_skipped() {
    let editor = editor_from_layout(
        LayoutBuilder::new()
            .with_image("ghost.png", (0.0, 0.0), (300.0, 300.0))
            .with_block("kept", (400.0, 0.0), (300.0, 300.0))
            .build(),
    );

    assert_item_count(&editor, 1);
    assert!(editor.board().items()[0].is_block());
}
