use super::harness::{square, Host};
use polyedit_core::{Coordinate, EditorEvent, PolygonKey};
use polyedit_editor::{EditorOptions, EditorState, Gesture};
use std::time::Duration;

fn selected_square() -> Host {
    let mut host = Host::new(vec![square("a", 0.0)]);
    host.editor.select_polygon_by_key(&PolygonKey::from("a"));
    host
}

#[test]
fn test_burst_of_moves_yields_one_change() {
    let mut host = selected_square();
    host.editor.handle(Gesture::VertexDragStart { vertex: 2 });
    assert_eq!(host.editor.state(), EditorState::DraggingVertex);

    let mut last = Coordinate::default();
    for step in 1..=8 {
        host.advance(3);
        last = Coordinate::new(1.0 + step as f64 * 0.1, 1.0);
        host.editor.handle(Gesture::VertexDrag {
            vertex: 2,
            coordinate: last,
        });
    }
    host.editor.handle(Gesture::VertexDragEnd {
        vertex: 2,
        coordinate: None,
    });
    assert!(host.take_events().is_empty());

    host.advance(25);

    let events = host.take_events();
    let [EditorEvent::Changed { index: 0, polygon }] = events.as_slice() else {
        panic!("expected one Changed, got {events:?}");
    };
    assert_eq!(polygon.coordinates[2], last);
    assert_eq!(host.editor.state(), EditorState::Selected);
    assert_eq!(host.editor.selected_polygon(), Some(polygon));
}

#[test]
fn test_slow_moves_update_outline_only() {
    let mut host = selected_square();
    host.editor.begin_vertex_drag(0);

    host.editor.drag_vertex(0, Coordinate::new(-1.0, -1.0));
    host.advance(30);

    assert_eq!(
        host.editor.drag_draft().and_then(|d| d.vertex(0)),
        Some(Coordinate::new(-1.0, -1.0))
    );
    assert_eq!(host.editor.selected_polygon(), Some(&square("a", 0.0)));
    assert!(host.take_events().is_empty());

    host.editor.end_vertex_drag(0, Some(Coordinate::new(-2.0, -2.0)));
    host.advance(30);

    assert!(matches!(
        host.take_events().as_slice(),
        [EditorEvent::Changed { polygon, .. }] if polygon.coordinates[0] == Coordinate::new(-2.0, -2.0)
    ));
}

#[test]
fn test_midpoint_drag_inserts_vertex() {
    let mut host = selected_square();
    let midpoint = host.editor.overlay().midpoint_handles[1].clone();

    host.editor.handle(Gesture::MidpointDragStart {
        midpoint: midpoint.index,
        coordinate: midpoint.coordinate,
    });
    assert_eq!(host.editor.drag_draft().map(|d| d.vertex_count()), Some(5));

    host.editor.handle(Gesture::VertexDrag {
        vertex: 1,
        coordinate: Coordinate::new(-0.5, 0.5),
    });
    host.editor.handle(Gesture::VertexDragEnd {
        vertex: 1,
        coordinate: None,
    });
    host.advance(25);

    let events = host.sync();
    let [EditorEvent::Changed { polygon, .. }] = events.as_slice() else {
        panic!("expected one Changed, got {events:?}");
    };
    assert_eq!(polygon.vertex_count(), 5);
    assert_eq!(polygon.coordinates[0], Coordinate::new(0.0, 0.0));
    assert_eq!(polygon.coordinates[1], Coordinate::new(-0.5, 0.5));
    assert_eq!(polygon.coordinates[2], Coordinate::new(0.0, 1.0));
    assert_eq!(host.polygons[0].vertex_count(), 5);
}

#[test]
fn test_reset_cancels_pending_commit() {
    let mut host = selected_square();
    host.editor.begin_vertex_drag(1);
    host.editor.drag_vertex(1, Coordinate::new(4.0, 4.0));
    host.editor.end_vertex_drag(1, None);
    assert!(host.editor.has_pending_work());

    host.editor.reset_all();
    host.advance(100);

    assert!(!host.editor.has_pending_work());
    assert!(host.take_events().is_empty());
    assert_eq!(host.editor.state(), EditorState::Idle);
}

#[test]
fn test_tap_flushes_pending_commit() {
    let mut host = selected_square();
    host.editor.begin_vertex_drag(1);
    host.editor.end_vertex_drag(1, Some(Coordinate::new(0.0, 2.0)));

    host.tap(0.5, 0.5);

    assert!(matches!(
        host.take_events().as_slice(),
        [EditorEvent::Changed { .. }]
    ));
}

#[test]
fn test_zero_window_applies_immediately() {
    let options = EditorOptions {
        drag_rate_limit: Duration::ZERO,
        ..EditorOptions::default()
    };
    let mut host = Host::with_options(options, vec![square("a", 0.0)]);
    host.editor.select_polygon_by_index(0);

    host.editor.begin_vertex_drag(3);
    host.editor.drag_vertex(3, Coordinate::new(2.0, 0.0));
    assert_eq!(
        host.editor.drag_draft().and_then(|d| d.vertex(3)),
        Some(Coordinate::new(2.0, 0.0))
    );
    host.editor.end_vertex_drag(3, None);

    assert_eq!(host.take_events().len(), 1);
    assert_eq!(host.editor.state(), EditorState::Selected);
}

#[test]
fn test_drag_without_selection_is_ignored() {
    let mut host = Host::new(vec![square("a", 0.0)]);
    host.editor.begin_vertex_drag(0);
    host.editor.drag_vertex(0, Coordinate::new(5.0, 5.0));
    host.editor.end_vertex_drag(0, None);
    host.advance(25);

    assert!(host.take_events().is_empty());
    assert!(host.editor.drag_draft().is_none());
}
