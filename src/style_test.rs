//! Tests for the shape/style policy tables.

use super::*;

#[test]
fn geometry_by_node_type() {
    assert_eq!(geometry_for(NodeType::Start), GeoKind::Ellipse);
    assert_eq!(geometry_for(NodeType::End), GeoKind::Ellipse);
    assert_eq!(geometry_for(NodeType::Decision), GeoKind::Diamond);
    assert_eq!(geometry_for(NodeType::Input), GeoKind::Parallelogram);
    assert_eq!(geometry_for(NodeType::Process), GeoKind::Rectangle);
    assert_eq!(geometry_for(NodeType::Document), GeoKind::Rectangle);
}

#[test]
fn color_by_node_type() {
    assert_eq!(color_for(NodeType::Start), BLUE);
    assert_eq!(color_for(NodeType::End), GREEN);
    assert_eq!(color_for(NodeType::Decision), ORANGE);
    assert_eq!(color_for(NodeType::Process), LIGHT_BLUE);
    assert_eq!(color_for(NodeType::Input), LIGHT_BLUE);
    assert_eq!(color_for(NodeType::Document), LIGHT_BLUE);
}

#[test]
fn diamonds_get_the_larger_box() {
    assert_eq!(node_size(GeoKind::Diamond), (180.0, 100.0));
    assert_eq!(node_size(GeoKind::Rectangle), (160.0, 80.0));
    assert_eq!(node_size(GeoKind::Ellipse), (160.0, 80.0));
    assert_eq!(node_size(GeoKind::Parallelogram), (160.0, 80.0));
}

#[test]
fn palette_cycles_by_modulo() {
    assert_eq!(branch_color(0), BLUE);
    assert_eq!(branch_color(7), LIGHT_GREEN);
    assert_eq!(branch_color(8), BLUE);
    assert_eq!(branch_color(13), LIGHT_BLUE);
}
