//! Bulk placement, wall guide and fit-to-view tests.

use crate::helpers::{StaticSource, assert_close, assert_item_count, editor, png_bytes};
use posterboard::EditorEvent;
use posterboard::view::WallPreset;
use std::cell::RefCell;
use std::rc::Rc;

/// Count `Committed` events.
fn commit_counter(editor: &mut posterboard::Editor) -> Rc<RefCell<usize>> {
    let commits = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&commits);
    editor.subscribe(move |event| {
        if *event == EditorEvent::Committed {
            *counter.borrow_mut() += 1;
        }
    });
    commits
}

fn position_by_name(editor: &posterboard::Editor, name: &str) -> (f32, f32) {
    editor
        .board()
        .items()
        .iter()
        .find(|item| item.name() == name)
        .expect("item placed")
        .position
}

#[test]
fn test_place_all_packs_smallest_first_and_commits_once() {
    let source = StaticSource::new()
        .with_file("a.png", png_bytes(30, 30))
        .with_file("b.png", png_bytes(20, 20))
        .with_file("c.png", png_bytes(10, 10));
    let mut editor = editor();
    editor.initialize(Some(&source), None);
    let commits = commit_counter(&mut editor);

    assert_eq!(editor.place_all(), 3);
    assert_eq!(*commits.borrow(), 1);

    // Tiny assets never zoom in past 1
    assert_eq!(editor.view().zoom, 1.0);
    assert_close(position_by_name(&editor, "c.png"), (30.0, 30.0));
    assert_close(position_by_name(&editor, "b.png"), (60.0, 30.0));
    assert_close(position_by_name(&editor, "a.png"), (100.0, 30.0));
}

#[test]
fn test_place_all_skips_already_placed_assets() {
    let source = StaticSource::new()
        .with_file("a.png", png_bytes(30, 30))
        .with_file("b.png", png_bytes(20, 20));
    let mut editor = editor();
    editor.initialize(Some(&source), None);

    let first = editor.board().assets().iter().next().unwrap().id;
    editor.add_asset_to_canvas(first);

    assert_eq!(editor.place_all(), 1);
    assert_item_count(&editor, 2);
    assert_eq!(editor.place_all(), 0);
    assert_item_count(&editor, 2);
}

#[test]
fn test_place_all_zooms_out_for_large_assets() {
    let source = StaticSource::new().with_file("big.png", png_bytes(4000, 3000));
    let mut editor = editor();
    editor.initialize(Some(&source), None);

    editor.place_all();
    let zoom = editor.view().zoom;
    assert!(zoom > 0.0 && zoom < 1.0);

    // The placed item keeps its natural size in real units
    let item = &editor.board().items()[0];
    assert_eq!(item.size, (4000.0, 3000.0));
    assert_close(item.position, (30.0 / zoom, 30.0 / zoom));
}

#[test]
fn test_wall_preset_packs_items_into_guide() {
    let mut editor = editor();
    editor.add_block(2.0, 2.0);
    editor.add_block(2.0, 2.0);
    let commits = commit_counter(&mut editor);

    editor.set_wall_preset(Some(WallPreset::dorm()));
    assert_eq!(*commits.borrow(), 1);

    let positions: Vec<_> = editor.board().items().iter().map(|item| item.position).collect();
    assert_eq!(positions, vec![(40.0, 40.0), (660.0, 40.0)]);
    assert_eq!(editor.view().wall_preset_key(), "dorm");
}

#[test]
fn test_clearing_wall_preset_leaves_items_in_place() {
    let mut editor = editor();
    editor.add_block(2.0, 2.0);
    editor.set_wall_preset(Some(WallPreset::dorm()));

    editor.set_wall_preset(None);
    assert_eq!(editor.board().items()[0].position, (40.0, 40.0));
    assert!(editor.view().wall_guide().is_none());
    assert!(editor.scene().wall_guide.is_none());
}

#[test]
fn test_move_out_of_guide_packs_below_it() {
    let mut editor = editor();
    assert!(!editor.move_out_of_guide());

    editor.add_block(2.0, 2.0);
    editor.add_block(2.0, 2.0);
    assert!(!editor.move_out_of_guide());

    editor.set_wall_preset(Some(WallPreset::dorm()));
    assert!(editor.move_out_of_guide());

    // Dorm guide spans (20, 20)-(24020, 12020)
    let positions: Vec<_> = editor.board().items().iter().map(|item| item.position).collect();
    assert_eq!(positions, vec![(20.0, 12040.0), (640.0, 12040.0)]);
}

#[test]
fn test_fit_to_view_zooms_out_to_extent() {
    let mut editor = editor();
    assert!(!editor.fit_to_view());

    editor.add_block(18.0, 24.0);
    assert!(editor.fit_to_view());

    // Default viewport 1280×800 less the (100, 150) inset
    let expected = (1180.0_f32 / 5450.0).min(650.0 / 7250.0);
    assert!((editor.view().zoom - expected).abs() < 1e-6);
}

#[test]
fn test_fit_to_view_includes_wall_guide_and_never_zooms_in() {
    let mut editor = editor();
    editor.add_block(1.0, 1.0);
    assert!(editor.fit_to_view());
    assert_eq!(editor.view().zoom, 1.0);

    editor.set_wall_preset(Some(WallPreset::dorm()));
    assert!(editor.fit_to_view());
    let expected = (1180.0_f32 / 24020.0).min(650.0 / 12020.0);
    assert!((editor.view().zoom - expected).abs() < 1e-6);
}
