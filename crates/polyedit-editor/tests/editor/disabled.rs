use super::harness::{square, Host};
use polyedit_core::{Coordinate, PolygonKey};
use polyedit_editor::{EditorControl, EditorState, Gesture};

#[test]
fn test_disabling_resets_and_freezes() {
    let mut host = Host::new(vec![square("a", 0.0), square("b", 10.0)]).with_template();
    host.editor.select_polygon_by_index(0);
    host.editor.begin_vertex_drag(0);
    host.editor.drag_vertex(0, Coordinate::new(-1.0, -1.0));

    host.editor.set_disabled(true);
    assert!(host.editor.is_disabled());
    assert_eq!(host.editor.state(), EditorState::Idle);
    assert!(!host.editor.has_pending_work());

    host.editor.handle(Gesture::PolygonPress { index: 1 });
    host.tap(30.0, 30.0);
    host.tap(30.0, 31.0);
    host.tap(31.0, 31.0);
    host.advance(50);

    assert!(host.take_events().is_empty());
    assert_eq!(host.editor.state(), EditorState::Idle);
}

#[test]
fn test_programmatic_selection_while_disabled() {
    let mut host = Host::new(vec![square("a", 0.0)]);
    host.editor.set_disabled(true);

    host.editor.select_polygon_by_key(&PolygonKey::from("a"));

    assert_eq!(host.editor.selected_key(), Some(&PolygonKey::from("a")));
    let overlay = host.editor.overlay();
    assert!(overlay.selected.is_some());
    assert!(overlay.vertex_handles.is_empty());
    assert!(overlay.midpoint_handles.is_empty());
    assert!(host.take_events().is_empty());
}

#[test]
fn test_reenabled_editor_accepts_gestures() {
    let mut host = Host::new(vec![square("a", 0.0)]);
    host.editor.set_disabled(true);
    host.editor.set_disabled(false);

    host.editor.handle(Gesture::PolygonPress { index: 0 });
    assert_eq!(host.take_events().len(), 1);
}

#[test]
fn test_control_trait_object() {
    let mut host = Host::new(vec![square("a", 0.0)]).with_template();
    {
        let control: &mut dyn EditorControl = &mut host.editor;
        control.start_polygon();
        control.set_coordinate(Coordinate::new(5.0, 5.0));
    }
    assert_eq!(host.editor.state(), EditorState::Creating);

    let control: &mut dyn EditorControl = &mut host.editor;
    control.reset_all();
    control.select_polygon_by_index(0);
    assert_eq!(host.editor.state(), EditorState::Selected);
}
