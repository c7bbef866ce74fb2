use super::harness::{ring, square, Host};
use polyedit_core::{EditorEvent, PolygonKey};
use polyedit_editor::{EditorOptions, EditorState, Gesture};

fn remove_vertex(host: &mut Host, vertex: usize) {
    host.editor.handle(Gesture::VertexPress { vertex });
    host.editor.handle(Gesture::VertexPress { vertex });
}

#[test]
fn test_first_press_selects_vertex() {
    let mut host = Host::new(vec![square("a", 0.0)]);
    host.editor.select_polygon_by_index(0);

    host.editor.press_vertex(3);
    assert_eq!(host.editor.selected_vertex(), Some(3));

    host.editor.press_vertex(1);
    assert_eq!(host.editor.selected_vertex(), Some(1));
    assert!(host.take_events().is_empty());
}

#[test]
fn test_removal_above_floor_changes() {
    let mut host = Host::new(vec![square("a", 0.0), ring("p", 10.0, 5)]);
    host.editor.select_polygon_by_index(1);

    remove_vertex(&mut host, 0);

    let events = host.sync();
    let [EditorEvent::Changed { index: 1, polygon }] = events.as_slice() else {
        panic!("expected Changed, got {events:?}");
    };
    assert_eq!(polygon.vertex_count(), 4);
    assert_eq!(polygon.coordinates[0], ring("p", 10.0, 5).coordinates[1]);
    assert_eq!(host.editor.selected_vertex(), None);
    assert_eq!(host.editor.state(), EditorState::Selected);
}

#[test]
fn test_removal_below_floor_removes_polygon() {
    let mut host = Host::new(vec![square("a", 0.0), ring("p", 10.0, 5)]);
    host.editor.select_polygon_by_index(1);

    remove_vertex(&mut host, 4);
    host.sync();
    remove_vertex(&mut host, 0);

    let events = host.sync();
    assert!(matches!(events.as_slice(), [EditorEvent::Removed { index: 1 }]));
    assert_eq!(host.editor.state(), EditorState::Idle);
    assert_eq!(host.polygons.len(), 1);
}

#[test]
fn test_triangle_vertex_removal_removes_polygon() {
    let mut host = Host::new(vec![ring("t", 0.0, 3)]);
    host.editor.select_polygon_by_key(&PolygonKey::from("t"));
    host.editor.press_vertex(2);

    host.editor.press_vertex(2);

    assert!(matches!(
        host.take_events().as_slice(),
        [EditorEvent::Removed { index: 0 }]
    ));
    assert!(host.editor.selected_key().is_none());
    assert!(host.editor.selected_vertex().is_none());
}

#[test]
fn test_lower_floor_keeps_triangles() {
    let options = EditorOptions {
        removal_floor: 3,
        ..EditorOptions::default()
    };
    let mut host = Host::with_options(options, vec![square("a", 0.0)]);
    host.editor.select_polygon_by_index(0);

    remove_vertex(&mut host, 0);

    assert!(matches!(
        host.take_events().as_slice(),
        [EditorEvent::Changed { index: 0, polygon }] if polygon.vertex_count() == 3
    ));
}

#[test]
fn test_out_of_range_vertex_press_is_ignored() {
    let mut host = Host::new(vec![square("a", 0.0)]);
    host.editor.select_polygon_by_index(0);

    host.editor.press_vertex(9);

    assert_eq!(host.editor.selected_vertex(), None);
    assert!(host.take_events().is_empty());
}

#[test]
fn test_vertex_press_without_selection_is_ignored() {
    let mut host = Host::new(vec![square("a", 0.0)]);
    host.editor.press_vertex(0);
    host.editor.press_vertex(0);
    assert!(host.take_events().is_empty());
    assert_eq!(host.editor.state(), EditorState::Idle);
}
