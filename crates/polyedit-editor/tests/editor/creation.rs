use super::harness::{square, Host};
use polyedit_core::{EditorEvent, Polygon, PolygonKey};
use polyedit_editor::{CreationTrigger, EditorOptions, EditorState, PENDING_INSERT_UPDATES};

#[test]
fn test_three_taps_create_and_select() {
    let mut host = Host::new(Vec::new()).with_template();

    host.tap(0.0, 0.0);
    assert_eq!(host.editor.state(), EditorState::Creating);
    host.tap(0.0, 1.0);
    assert!(host.take_events().is_empty());
    host.tap(1.0, 1.0);

    let events = host.take_events();
    assert_eq!(events.len(), 1);
    let EditorEvent::Created { polygon } = &events[0] else {
        panic!("expected Created, got {:?}", events[0]);
    };
    assert_eq!(polygon.vertex_count(), 3);
    assert_eq!(host.editor.state(), EditorState::Selected);
    assert_eq!(host.editor.selected_key(), Some(&polygon.key));
}

#[test]
fn test_no_template_no_creation() {
    let mut host = Host::new(Vec::new());
    for i in 0..3 {
        host.tap(i as f64, 0.0);
    }
    assert!(host.take_events().is_empty());
    assert_eq!(host.editor.state(), EditorState::Idle);
}

#[test]
fn test_explicit_trigger_requires_start() {
    let options = EditorOptions {
        creation_trigger: CreationTrigger::Explicit,
        ..EditorOptions::default()
    };
    let mut host = Host::with_options(options, Vec::new()).with_template();

    host.tap(0.0, 0.0);
    assert_eq!(host.editor.state(), EditorState::Idle);
    assert!(host.editor.creation_draft().is_none());

    host.editor.start_polygon();
    assert_eq!(host.editor.state(), EditorState::Creating);
    host.tap(0.0, 0.0);
    host.tap(0.0, 1.0);
    host.tap(1.0, 1.0);

    assert_eq!(host.take_events().len(), 1);
    assert_eq!(host.editor.state(), EditorState::Selected);
}

#[test]
fn test_template_style_and_fresh_key() {
    let taken = Polygon::new("new", Vec::new());
    let mut host = Host::new(vec![taken]).with_template();

    host.tap(20.0, 20.0);
    host.tap(20.0, 21.0);
    host.tap(21.0, 21.0);

    let events = host.take_events();
    let Some(EditorEvent::Created { polygon }) = events.first() else {
        panic!("expected Created");
    };
    assert_ne!(polygon.key, PolygonKey::from("new"));
}

#[test]
fn test_created_polygon_stays_selected_until_inserted() {
    let mut host = Host::new(vec![square("a", 10.0)]).with_template();
    host.tap(0.0, 0.0);
    host.tap(0.0, 1.0);
    host.tap(1.0, 1.0);
    let created = match host.take_events().pop() {
        Some(EditorEvent::Created { polygon }) => polygon,
        other => panic!("expected Created, got {other:?}"),
    };

    // The host re-renders before inserting the new polygon.
    host.editor.set_polygons(host.polygons.clone());
    assert_eq!(host.editor.selected_key(), Some(&created.key));

    // Edits before insertion cannot be reported by index.
    host.tap(5.0, 5.0);
    assert!(host.take_events().is_empty());

    host.polygons.push(host.editor.selected_polygon().cloned().expect("selected"));
    host.editor.set_polygons(host.polygons.clone());
    host.tap(6.0, 6.0);

    let events = host.take_events();
    assert!(matches!(
        events.as_slice(),
        [EditorEvent::Changed { index: 1, polygon }] if polygon.vertex_count() == 5
    ));
}

#[test]
fn test_created_polygon_dropped_when_never_inserted() {
    let mut host = Host::new(vec![square("a", 10.0)]).with_template();
    host.tap(0.0, 0.0);
    host.tap(0.0, 1.0);
    host.tap(1.0, 1.0);
    assert!(matches!(
        host.take_events().as_slice(),
        [EditorEvent::Created { .. }]
    ));

    for _ in 1..PENDING_INSERT_UPDATES {
        host.editor.set_polygons(host.polygons.clone());
        assert_eq!(host.editor.state(), EditorState::Selected);
    }

    host.editor.set_polygons(host.polygons.clone());
    assert_eq!(host.editor.state(), EditorState::Idle);
    assert!(host.editor.selected_key().is_none());
    assert!(host.editor.overlay().is_empty());
    assert!(host.take_events().is_empty());
}

#[test]
fn test_four_vertex_creation() {
    let options = EditorOptions {
        creation_vertex_count: 4,
        ..EditorOptions::default()
    };
    let mut host = Host::with_options(options, Vec::new()).with_template();
    for (lat, lon) in [(0.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
        host.tap(lat, lon);
    }
    assert_eq!(host.editor.creation_draft().map(|d| d.vertex_count()), Some(3));
    host.tap(1.0, 0.0);

    assert!(matches!(
        host.take_events().as_slice(),
        [EditorEvent::Created { polygon }] if polygon.vertex_count() == 4
    ));
}

#[test]
fn test_reset_discards_draft() {
    let mut host = Host::new(Vec::new()).with_template();
    host.tap(0.0, 0.0);
    host.tap(0.0, 1.0);
    host.editor.reset_all();
    assert_eq!(host.editor.state(), EditorState::Idle);

    host.tap(5.0, 5.0);
    assert_eq!(host.editor.creation_draft().map(|d| d.vertex_count()), Some(1));
}
