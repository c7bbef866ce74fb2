use super::harness::{square, Host};
use polyedit_core::{Coordinate, EditorEvent, PolygonKey};
use polyedit_editor::{EditorOptions, EditorState, Gesture};

fn two_squares() -> Host {
    Host::new(vec![square("a", 0.0), square("b", 10.0)])
}

#[test]
fn test_polygon_press_toggles() {
    let mut host = two_squares();

    host.editor.handle(Gesture::PolygonPress { index: 1 });
    assert!(matches!(
        host.take_events().as_slice(),
        [EditorEvent::Selected { index: 1, .. }]
    ));
    assert_eq!(host.editor.state(), EditorState::Selected);

    host.editor.handle(Gesture::PolygonPress { index: 1 });
    let events = host.take_events();
    assert!(matches!(
        events.as_slice(),
        [EditorEvent::Unselected { index: 1, polygon }] if polygon.key == PolygonKey::from("b")
    ));
    assert_eq!(host.editor.state(), EditorState::Idle);
}

#[test]
fn test_pressing_other_polygon_does_not_unselect_previous() {
    let mut host = two_squares();
    host.editor.press_polygon(0);
    host.take_events();

    host.editor.press_polygon(1);
    let events = host.take_events();
    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], EditorEvent::Selected { index: 1, .. }));
    assert_eq!(host.editor.selected_key(), Some(&PolygonKey::from("b")));
}

#[test]
fn test_tap_inside_selected_is_noop() {
    let mut host = two_squares();
    host.editor.select_polygon_by_index(0);

    host.tap(0.5, 0.5);

    assert!(host.take_events().is_empty());
    assert_eq!(host.editor.selected_polygon(), Some(&square("a", 0.0)));
}

#[test]
fn test_tap_outside_appends_vertex() {
    let mut host = two_squares();
    host.editor.select_polygon_by_index(0);

    host.tap(3.0, 3.0);

    let events = host.take_events();
    let [EditorEvent::Changed { index: 0, polygon }] = events.as_slice() else {
        panic!("expected one Changed, got {events:?}");
    };
    assert_eq!(polygon.vertex_count(), 5);
    assert_eq!(polygon.coordinates.last(), Some(&Coordinate::new(3.0, 3.0)));
}

#[test]
fn test_tap_outside_with_vertex_selected_unselects() {
    let mut host = two_squares();
    host.editor.select_polygon_by_index(1);
    host.editor.press_vertex(2);
    assert_eq!(host.editor.selected_vertex(), Some(2));

    host.tap(3.0, 3.0);

    assert!(matches!(
        host.take_events().as_slice(),
        [EditorEvent::Unselected { index: 1, .. }]
    ));
    assert_eq!(host.editor.state(), EditorState::Idle);
}

#[test]
fn test_programmatic_selection_is_silent() {
    let mut host = two_squares();

    host.editor.select_polygon_by_key(&PolygonKey::from("b"));
    assert_eq!(host.editor.selected_key(), Some(&PolygonKey::from("b")));

    host.editor.select_polygon_by_index(7);
    assert_eq!(host.editor.selected_key(), Some(&PolygonKey::from("b")));

    host.editor.select_polygon_by_key(&PolygonKey::from("zzz"));
    assert_eq!(host.editor.selected_key(), None);

    assert!(host.take_events().is_empty());
}

#[test]
fn test_reselect_by_index_keeps_vertex() {
    let mut host = two_squares();
    host.editor.select_polygon_by_index(1);
    host.editor.press_vertex(3);

    host.editor.select_polygon_by_index(1);
    assert_eq!(host.editor.selected_vertex(), Some(3));

    host.editor.select_polygon_by_index(0);
    assert_eq!(host.editor.selected_key(), Some(&PolygonKey::from("a")));
    assert_eq!(host.editor.selected_vertex(), None);
    assert_eq!(host.editor.selected_polygon(), Some(&square("a", 0.0)));
    assert!(host.take_events().is_empty());
}

#[test]
fn test_selection_cleared_when_polygon_disappears() {
    let mut host = two_squares();
    host.editor.select_polygon_by_key(&PolygonKey::from("a"));

    host.polygons.remove(0);
    host.editor.set_polygons(host.polygons.clone());

    assert_eq!(host.editor.state(), EditorState::Idle);
    assert!(host.editor.selected_polygon().is_none());
}

#[test]
fn test_working_copy_follows_collection() {
    let mut host = two_squares();
    host.editor.select_polygon_by_key(&PolygonKey::from("b"));

    host.polygons[1].coordinates.pop();
    host.polygons.swap(0, 1);
    host.editor.set_polygons(host.polygons.clone());

    assert_eq!(
        host.editor.selected_polygon().map(|p| p.vertex_count()),
        Some(3)
    );

    host.tap(30.0, 30.0);
    assert!(matches!(
        host.take_events().as_slice(),
        [EditorEvent::Changed { index: 0, .. }]
    ));
}

#[test]
fn test_idle_tap_selects_when_enabled() {
    let options = EditorOptions {
        select_on_idle_tap: true,
        ..EditorOptions::default()
    };
    let mut host = Host::with_options(options, vec![square("a", 0.0), square("b", 10.0)]);

    host.tap(10.5, 10.5);

    assert!(matches!(
        host.take_events().as_slice(),
        [EditorEvent::Selected { index: 1, .. }]
    ));
}

#[test]
fn test_idle_tap_inside_polygon_creates_by_default() {
    let mut host = two_squares().with_template();
    host.tap(0.5, 0.5);
    assert_eq!(host.editor.state(), EditorState::Creating);
    assert!(host.take_events().is_empty());
}

#[test]
fn test_overlay_handles() {
    let mut host = two_squares();
    assert!(host.editor.overlay().is_empty());

    host.editor.select_polygon_by_index(0);
    host.editor.press_vertex(1);

    let overlay = host.editor.overlay();
    assert_eq!(overlay.vertex_handles.len(), 4);
    assert_eq!(overlay.midpoint_handles.len(), 4);
    let selected = overlay.selected_vertex().expect("selected vertex");
    assert_eq!(selected.index, 1);
    assert!(selected.removable);
    assert!(!selected.draggable);
}
