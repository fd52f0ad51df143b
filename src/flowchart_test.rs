//! Tests for the flowchart grid layout engine and the process restyle pass.

use serde_json::json;

use super::*;
use crate::model::FlowchartSpec;
use crate::shape::{Align, Fill, Font};

fn spec_from(value: serde_json::Value) -> FlowchartSpec {
    serde_json::from_value(value).unwrap()
}

fn geos(shapes: &[Shape]) -> Vec<(&f64, &f64, &GeoProps)> {
    shapes
        .iter()
        .filter_map(|s| match s {
            Shape::Geo { x, y, props } => Some((x, y, props)),
            _ => None,
        })
        .collect()
}

fn arrows(shapes: &[Shape]) -> Vec<&Shape> {
    shapes.iter().filter(|s| matches!(s, Shape::Arrow { .. })).collect()
}

fn texts(shapes: &[Shape]) -> Vec<&Shape> {
    shapes.iter().filter(|s| matches!(s, Shape::Text { .. })).collect()
}

// =============================================================================
// GRID MATH
// =============================================================================

#[test]
fn column_count_follows_square_root_clamped() {
    for (nodes, expected) in [(0, 1), (1, 1), (2, 2), (4, 2), (5, 3), (9, 3), (10, 3), (25, 3)] {
        assert_eq!(grid_columns(nodes), expected, "{nodes} nodes");
    }
}

#[test]
fn position_depends_only_on_index_and_columns() {
    assert_eq!(grid_position(0, 2), (100.0, 150.0));
    assert_eq!(grid_position(1, 2), (350.0, 150.0));
    assert_eq!(grid_position(2, 2), (100.0, 300.0));
    assert_eq!(grid_position(5, 3), (600.0, 300.0));
}

// =============================================================================
// LAYOUT
// =============================================================================

#[test]
fn two_node_flow_with_labeled_connection() {
    let spec = spec_from(json!({
        "title": "T",
        "nodes": [
            { "id": "1", "text": "Start", "type": "start" },
            { "id": "2", "text": "End", "type": "end" }
        ],
        "connections": [{ "from": "1", "to": "2", "label": "go" }]
    }));
    let shapes = layout(&spec);

    // title + 2 geos + 1 label + 1 arrow
    assert_eq!(shapes.len(), 5);

    let Shape::Text { x, y, props } = &shapes[0] else {
        panic!("expected title first");
    };
    assert_eq!((*x, *y), (100.0, 50.0));
    assert_eq!(props.text, "T");
    assert_eq!(props.size, Size::Xl);
    assert_eq!(props.align, Some(Align::Middle));

    let geos = geos(&shapes);
    assert_eq!(geos.len(), 2);
    let (x0, y0, start) = geos[0];
    assert_eq!((*x0, *y0), (100.0, 150.0));
    assert_eq!(start.geo, GeoKind::Ellipse);
    assert_eq!(start.color, "blue");
    assert_eq!(start.text, "Start");
    let (x1, y1, end) = geos[1];
    assert_eq!((*x1, *y1), (350.0, 150.0));
    assert_eq!(end.geo, GeoKind::Ellipse);
    assert_eq!(end.color, "green");

    // Label at midpoint of the two anchors, nudged up-right.
    let Shape::Text { x, y, props } = &shapes[3] else {
        panic!("expected connection label");
    };
    assert_eq!((*x, *y), (240.0, 135.0));
    assert_eq!(props.text, "go");
    assert_eq!(props.size, Size::S);
    assert!(props.align.is_none());

    // Arrow anchored at source visual center, head offset from raw anchors.
    let Shape::Arrow { x, y, props } = &shapes[4] else {
        panic!("expected arrow last");
    };
    assert_eq!((*x, *y), (180.0, 190.0));
    assert_eq!(props.start, Offset::ZERO);
    assert_eq!(props.end, Offset { x: 250.0, y: 0.0 });
    assert_eq!(props.color, "black");
    assert_eq!(props.dash, Dash::Draw);
    assert_eq!(props.size, Size::M);
}

#[test]
fn one_geo_per_node_plus_title() {
    let nodes: Vec<_> = (0..7).map(|i| json!({ "id": i.to_string(), "text": "n" })).collect();
    let spec = spec_from(json!({ "nodes": nodes }));
    let shapes = layout(&spec);
    assert_eq!(geos(&shapes).len(), 7);
    assert_eq!(texts(&shapes).len(), 1); // default title only
    assert!(arrows(&shapes).is_empty());
}

#[test]
fn seven_nodes_wrap_on_three_columns() {
    let nodes: Vec<_> = (0..7).map(|i| json!({ "id": i.to_string() })).collect();
    let spec = spec_from(json!({ "nodes": nodes }));
    let shapes = layout(&spec);
    let geos = geos(&shapes);
    // cols = ceil(sqrt(7)) = 3; node 3 starts row 1, node 6 starts row 2.
    assert_eq!((*geos[3].0, *geos[3].1), (100.0, 300.0));
    assert_eq!((*geos[4].0, *geos[4].1), (350.0, 300.0));
    assert_eq!((*geos[6].0, *geos[6].1), (100.0, 450.0));
}

#[test]
fn node_type_styling_flows_from_policy() {
    let spec = spec_from(json!({
        "nodes": [
            { "id": "d", "type": "decision" },
            { "id": "i", "type": "input" },
            { "id": "doc", "type": "document" }
        ]
    }));
    let shapes = layout(&spec);
    let geos = geos(&shapes);

    assert_eq!(geos[0].2.geo, GeoKind::Diamond);
    assert_eq!((geos[0].2.w, geos[0].2.h), (180.0, 100.0));
    assert_eq!(geos[0].2.color, "orange");

    assert_eq!(geos[1].2.geo, GeoKind::Parallelogram);
    assert_eq!((geos[1].2.w, geos[1].2.h), (160.0, 80.0));

    assert_eq!(geos[2].2.geo, GeoKind::Rectangle);
    assert_eq!(geos[2].2.color, "light-blue");
}

#[test]
fn node_text_defaults_are_positional() {
    let spec = spec_from(json!({ "nodes": [{}, {}] }));
    let shapes = layout(&spec);
    let geos = geos(&shapes);
    assert_eq!(geos[0].2.text, "Node 1");
    assert_eq!(geos[1].2.text, "Node 2");
}

#[test]
fn nodes_without_ids_resolve_positionally() {
    let spec = spec_from(json!({
        "nodes": [{ "text": "a" }, { "text": "b" }],
        "connections": [{ "from": "1", "to": "2" }]
    }));
    let shapes = layout(&spec);
    assert_eq!(arrows(&shapes).len(), 1);
}

#[test]
fn unresolved_endpoint_drops_connection_only() {
    let spec = spec_from(json!({
        "nodes": [
            { "id": "1", "text": "a" },
            { "id": "2", "text": "b" }
        ],
        "connections": [
            { "from": "1", "to": "99", "label": "lost" },
            { "from": "1", "to": "2" }
        ]
    }));
    let shapes = layout(&spec);
    // No shapes at all for the dangling connection, label included.
    assert_eq!(arrows(&shapes).len(), 1);
    assert_eq!(texts(&shapes).len(), 1); // title only
    assert_eq!(geos(&shapes).len(), 2);
}

#[test]
fn duplicate_node_id_drops_referencing_connections() {
    let spec = spec_from(json!({
        "nodes": [
            { "id": "1", "text": "first" },
            { "id": "1", "text": "second" },
            { "id": "2", "text": "other" }
        ],
        "connections": [{ "from": "1", "to": "2" }]
    }));
    let shapes = layout(&spec);
    assert!(arrows(&shapes).is_empty());
    assert_eq!(geos(&shapes).len(), 3);
}

#[test]
fn empty_label_emits_no_text_shape() {
    let spec = spec_from(json!({
        "nodes": [{ "id": "1" }, { "id": "2" }],
        "connections": [{ "from": "1", "to": "2", "label": "" }]
    }));
    let shapes = layout(&spec);
    assert_eq!(texts(&shapes).len(), 1); // title only
    assert_eq!(arrows(&shapes).len(), 1);
}

#[test]
fn parallel_connections_all_drawn() {
    let spec = spec_from(json!({
        "nodes": [{ "id": "1" }, { "id": "2" }],
        "connections": [
            { "from": "1", "to": "2" },
            { "from": "1", "to": "2" },
            { "from": "2", "to": "1" }
        ]
    }));
    let shapes = layout(&spec);
    assert_eq!(arrows(&shapes).len(), 3);
}

#[test]
fn empty_spec_yields_title_only() {
    let spec = spec_from(json!({}));
    let shapes = layout(&spec);
    assert_eq!(shapes.len(), 1);
    assert!(matches!(&shapes[0], Shape::Text { .. }));
}

#[test]
fn titleless_spec_yields_no_title() {
    let spec = FlowchartSpec { title: None, ..FlowchartSpec::default() };
    assert!(layout(&spec).is_empty());
}

// =============================================================================
// PROCESS RESTYLE
// =============================================================================

#[test]
fn process_restyle_solidifies_and_recolors_rectangles() {
    let spec = spec_from(json!({
        "nodes": [
            { "id": "1", "text": "Begin", "type": "start" },
            { "id": "2", "text": "Work", "type": "process" },
            { "id": "3", "text": "Check", "type": "decision" }
        ],
        "connections": [{ "from": "1", "to": "2" }]
    }));
    let mut shapes = layout(&spec);
    restyle_as_process(&mut shapes);

    let geos = geos(&shapes);
    for (_, _, props) in &geos {
        assert_eq!(props.dash, Some(Dash::Solid));
    }
    // Rectangles turn light-green; other geometries keep their type color.
    assert_eq!(geos[0].2.color, "blue");
    assert_eq!(geos[1].2.color, "light-green");
    assert_eq!(geos[2].2.color, "orange");

    // Title and arrows are untouched.
    let Shape::Text { props, .. } = &shapes[0] else {
        panic!("expected title");
    };
    assert_eq!(props.font, Font::Draw);
    let Shape::Arrow { props, .. } = shapes.last().unwrap() else {
        panic!("expected arrow last");
    };
    assert_eq!(props.dash, Dash::Draw);
}

#[test]
fn layout_never_sets_fill_on_flowchart_nodes() {
    let spec = spec_from(json!({ "nodes": [{ "id": "1" }] }));
    let shapes = layout(&spec);
    let geos = geos(&shapes);
    assert_eq!(geos[0].2.fill, None::<Fill>);
    assert_eq!(geos[0].2.dash, None);
}
