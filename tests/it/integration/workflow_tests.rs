//! End-to-end editing workflows: keyboard, snapping, uploads, scene output.

use crate::helpers::{
    LayoutBuilder, StaticSource, assert_item_count, down, editor, editor_from_layout, item_ids,
    png_bytes, shift_down, size_of, up,
};
use posterboard::EditorEvent;
use posterboard::error::AssetError;
use posterboard::input::{KeyEvent, Modifiers};
use std::cell::RefCell;
use std::rc::Rc;

fn select_both(editor: &mut posterboard::Editor) {
    editor.handle_pointer_down(&down(10.0, 10.0));
    editor.handle_pointer_up(&up(10.0, 10.0));
    editor.handle_pointer_down(&shift_down(210.0, 10.0));
    editor.handle_pointer_up(&up(210.0, 10.0));
}

fn two_blocks() -> posterboard::Editor {
    editor_from_layout(
        LayoutBuilder::new()
            .with_block("A", (0.0, 0.0), (100.0, 100.0))
            .with_block("B", (200.0, 0.0), (100.0, 100.0))
            .with_block("C", (400.0, 0.0), (100.0, 100.0))
            .build(),
    )
}

// ============================================================================
// Keyboard
// ============================================================================

#[test]
fn test_delete_key_removes_whole_selection() {
    let mut editor = two_blocks();
    select_both(&mut editor);

    assert!(editor.handle_key(&KeyEvent::new("Delete", Modifiers::default())));
    assert_item_count(&editor, 1);
    assert_eq!(editor.board().items()[0].name(), "C");
    assert!(editor.selection().is_empty());

    // Empty selection: Backspace is not consumed and nothing changes
    assert!(!editor.handle_key(&KeyEvent::new("Backspace", Modifiers::default())));
    assert_item_count(&editor, 1);
}

#[test]
fn test_undo_shortcut_restores_deleted_items() {
    let mut editor = two_blocks();
    select_both(&mut editor);
    editor.handle_key(&KeyEvent::new("Backspace", Modifiers::default()));

    let cmd = Modifiers {
        platform: true,
        ..Modifiers::default()
    };
    assert!(editor.handle_key(&KeyEvent::new("z", cmd)));
    assert_item_count(&editor, 3);
}

#[test]
fn test_delete_selected_is_noop_without_selection() {
    let mut editor = two_blocks();
    let depth = editor.history().depth();
    assert_eq!(editor.delete_selected(), 0);
    assert_eq!(editor.history().depth(), depth);
}

// ============================================================================
// Snapping
// ============================================================================

fn editor_with_photos() -> posterboard::Editor {
    let mut editor = editor();
    let first = editor.upload_asset("first.png", png_bytes(1250, 1850)).unwrap();
    let second = editor.upload_asset("second.png", png_bytes(1600, 1000)).unwrap();
    editor.add_asset_to_canvas(first);
    editor.add_asset_to_canvas(second);
    editor.add_block(2.0, 3.0);
    editor
}

#[test]
fn test_snap_applies_to_all_images_without_selection() {
    let mut editor = editor_with_photos();
    let ids = item_ids(&editor);

    editor.set_snap_to_standard(true);
    // 4.17" × 6.17" portrait fits 4×6; 5.33" × 3.33" landscape falls back to 4×6
    assert_eq!(size_of(&editor, ids[0]), (1200.0, 1800.0));
    assert_eq!(size_of(&editor, ids[1]), (1800.0, 1200.0));
    // Blocks are exempt
    assert_eq!(size_of(&editor, ids[2]), (600.0, 900.0));
    assert!(editor.view().snap_to_standard);

    editor.set_snap_to_standard(false);
    assert_eq!(size_of(&editor, ids[0]), (1250.0, 1850.0));
    assert_eq!(size_of(&editor, ids[1]), (1600.0, 1000.0));
    assert!(editor.board().get_item(ids[0]).unwrap().pre_snap_size().is_none());
}

#[test]
fn test_snap_applies_only_to_selection_when_present() {
    let mut editor = editor_with_photos();
    let ids = item_ids(&editor);

    // The block sits on top at (50, 50); select the first photo below it via
    // a point only the photo covers
    editor.handle_pointer_down(&down(1000.0, 1500.0));
    editor.handle_pointer_up(&up(1000.0, 1500.0));
    assert_eq!(editor.selection().ids(), vec![ids[0]]);

    editor.set_snap_to_standard(true);
    assert_eq!(size_of(&editor, ids[0]), (1200.0, 1800.0));
    assert_eq!(size_of(&editor, ids[1]), (1600.0, 1000.0));
}

#[test]
fn test_resnap_starts_from_original_size() {
    let mut editor = editor_with_photos();
    let ids = item_ids(&editor);

    editor.set_snap_to_standard(true);
    editor.set_snap_to_standard(true);
    assert_eq!(size_of(&editor, ids[0]), (1200.0, 1800.0));

    editor.set_snap_to_standard(false);
    assert_eq!(size_of(&editor, ids[0]), (1250.0, 1850.0));
}

// ============================================================================
// Uploads
// ============================================================================

#[test]
fn test_upload_rejects_undecodable_bytes() {
    let mut editor = editor();
    let result = editor.upload_asset("notes.txt", b"hello".to_vec());
    assert!(matches!(result, Err(AssetError::Decode(_))));
    assert!(editor.board().assets().is_empty());
}

#[test]
fn test_remove_uploaded_assets_keeps_bundled_ones() {
    let source = StaticSource::new().with_file("bundled.png", png_bytes(20, 20));
    let mut editor = editor();
    editor.initialize(Some(&source), None);

    let bundled = editor.board().assets().iter().next().unwrap().id;
    let uploaded = editor.upload_asset("mine.png", png_bytes(20, 20)).unwrap();
    editor.add_asset_to_canvas(bundled);
    editor.add_asset_to_canvas(uploaded);
    editor.add_block(2.0, 2.0);

    assert_eq!(editor.remove_uploaded_assets(), 1);
    assert_item_count(&editor, 2);
    assert!(editor.board().items().iter().all(|item| item.name() != "mine.png"));
    assert_eq!(editor.board().assets().len(), 1);
}

// ============================================================================
// Scene and notifications
// ============================================================================

#[test]
fn test_scene_labels_follow_toggle() {
    let mut editor = editor();
    let asset = editor.upload_asset("photo.png", png_bytes(2550, 3300)).unwrap();
    editor.add_asset_to_canvas(asset);
    editor.add_block(2.0, 3.0);

    let scene = editor.scene();
    insta::assert_snapshot!(scene.items[0].label.clone().unwrap(), @r#"
    2550 × 3300px
    8.5" × 11.0"
    "#);
    assert_eq!(scene.items[0].large_marker, None);
    assert_eq!(scene.items[1].label.as_deref(), Some("2\" × 3\""));

    editor.set_show_labels(false);
    let scene = editor.scene();
    assert_eq!(scene.items[0].label, None);
    assert_eq!(scene.items[1].label.as_deref(), Some("2\" × 3\""));
}

#[test]
fn test_current_size_reports_extent() {
    let mut editor = editor();
    assert!(editor.current_size().is_none());

    editor.add_block(18.0, 24.0);
    insta::assert_snapshot!(editor.scene().current_size, @"Current: 18.2 in × 24.2 in (1.5 ft × 2.0 ft)");
}

#[test]
fn test_handles_visible_on_selection_or_toggle() {
    let mut editor = two_blocks();
    let ids = item_ids(&editor);

    editor.handle_pointer_down(&down(50.0, 50.0));
    editor.handle_pointer_up(&up(50.0, 50.0));
    assert!(editor.handles_visible(ids[0]));
    assert!(!editor.handles_visible(ids[1]));

    editor.set_show_handles(true);
    assert!(editor.scene().items.iter().all(|item| item.handles_visible));
}

#[test]
fn test_subscribers_see_gesture_events() {
    let mut editor = two_blocks();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    editor.subscribe(move |event| sink.borrow_mut().push(*event));

    editor.handle_pointer_down(&down(50.0, 50.0));
    editor.handle_pointer_up(&up(50.0, 50.0));

    assert_eq!(
        *events.borrow(),
        vec![EditorEvent::SelectionChanged, EditorEvent::Committed]
    );
}
