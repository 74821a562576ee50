// Session-level undo: snapshots cover grid, tuning, and options

use tab_editor_wasm::api::TabSession;
use tab_editor_wasm::models::core::{RenderOptions, TabGrid};
use tab_editor_wasm::models::tuning::TuningSpec;
use tab_editor_wasm::undo::{HistoryStack, Snapshot};

#[test]
fn test_undo_restores_cell_edit() {
    let mut session = TabSession::new();
    session.set_cell(0, 1, "5".to_string());
    assert!(session.render_result().text.contains("5--"));

    assert!(session.undo());
    assert!(!session.render_result().text.contains('5'));
}

#[test]
fn test_undo_restores_tuning_and_options() {
    let mut session = TabSession::new();
    session.set_tuning("dropd", "");
    session.set_include_legend(true);

    assert!(session.undo()); // legend flag back off
    assert!(session.undo()); // tuning back to standard

    let text = session.render_result().text;
    assert!(!text.contains("hammer-on"));
    // Standard tuning: lowest string renders as E, not D
    assert!(text.lines().last().unwrap().starts_with("E |"));
}

#[test]
fn test_undo_restores_structural_edit() {
    let mut session = TabSession::new();
    let before = session.beat_count();
    session.insert_beat_at(3);
    assert_eq!(session.beat_count(), before + 1);

    assert!(session.undo());
    assert_eq!(session.beat_count(), before);
}

#[test]
fn test_undo_with_empty_history_is_noop() {
    let mut session = TabSession::new();
    assert!(!session.undo());
    assert_eq!(session.beat_count(), 8);
}

#[test]
fn test_history_caps_at_fifty() {
    let mut session = TabSession::new();
    // First edit establishes a marker, then 50 more push it out of history
    session.set_cell(0, 1, "marker".to_string());
    for i in 0..50 {
        session.set_cell(1, 1, i.to_string());
    }

    let mut undone = 0;
    while session.undo() {
        undone += 1;
    }
    assert_eq!(undone, 50);
    // The pre-"marker" empty state is unrecoverable
    assert!(session.render_result().text.contains("marker"));
}

#[test]
fn test_snapshot_json_round_trip() {
    let mut grid = TabGrid::new(3);
    grid.set_cell(4, 2, "7b");
    grid.set_label(1, "Em");
    let snapshot = Snapshot {
        grid,
        tuning: TuningSpec::Custom("D A D G B e".to_string()),
        options: RenderOptions {
            include_legend: true,
            ..RenderOptions::default()
        },
    };

    let json = serde_json::to_string(&snapshot).unwrap();
    let restored: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, snapshot);
}

#[test]
fn test_stack_pop_order_is_lifo() {
    let mut stack = HistoryStack::default();
    for beats in [1usize, 2, 3] {
        stack.push(Snapshot {
            grid: TabGrid::new(beats),
            tuning: TuningSpec::Standard,
            options: RenderOptions::default(),
        });
    }
    assert_eq!(stack.pop().unwrap().grid.beat_count, 3);
    assert_eq!(stack.pop().unwrap().grid.beat_count, 2);
    assert_eq!(stack.pop().unwrap().grid.beat_count, 1);
    assert!(!stack.can_undo());
}
