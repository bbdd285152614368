//! Tests for image areas

use insta::assert_snapshot;

use super::{Area, ClickAction};
use crate::error::{CoordinateError, ImageMapError};
use crate::geometry::{Point, Rect, Shape, ShapeKind};

fn rect_area(coords: &str) -> Area {
    Area::from_coordinates(ShapeKind::Rectangle, coords).unwrap()
}

#[test]
fn test_new_area_defaults() {
    let area = rect_area("10, 10, 50, 50");

    assert!(area.enabled());
    assert!(!area.owner_draw());
    assert_eq!(area.tab_order(), 0);
    assert_eq!(area.access_key(), None);
    assert_eq!(area.action(), ClickAction::FireEvent);
    assert_eq!(area.tool_tip(), None);
    assert_eq!(area.tag(), None);
    assert_eq!(area.revision(), 0);
}

#[test]
fn test_set_coordinates_changes_revision_only_on_change() {
    let mut area = rect_area("10, 10, 50, 50");

    assert_eq!(area.set_coordinates("10,10,50,50"), Ok(false));
    assert_eq!(area.revision(), 0);

    assert_eq!(area.set_coordinates("0, 0, 20, 20"), Ok(true));
    assert_eq!(area.revision(), 1);
    assert_eq!(area.geometry_revision(), 1);
    assert_eq!(area.coordinates(), "0, 0, 20, 20");
}

#[test]
fn test_failed_set_coordinates_keeps_previous_geometry() {
    let mut area = rect_area("10, 10, 50, 50");

    let err = area.set_coordinates("1, 2, 3").unwrap_err();
    assert!(matches!(err, CoordinateError::Arity { .. }));
    assert_eq!(area.coordinates(), "10, 10, 50, 50");
    assert_eq!(area.revision(), 0);
}

#[test]
fn test_set_shape_rejects_other_kind() {
    let mut area = rect_area("10, 10, 50, 50");

    let err = area
        .set_shape(Shape::Circle {
            center: Point::new(1, 1),
            radius: 1,
        })
        .unwrap_err();
    assert!(matches!(
        err,
        ImageMapError::ShapeMismatch {
            expected: ShapeKind::Rectangle,
            found: ShapeKind::Circle
        }
    ));

    assert!(
        area.set_shape(Shape::Rectangle(Rect::new(0, 0, 5, 5)))
            .unwrap()
    );
}

#[test]
fn test_flag_setters_bump_general_revision_only() {
    let mut area = rect_area("10, 10, 50, 50");

    assert!(area.set_enabled(false));
    assert!(!area.set_enabled(false));
    assert!(area.set_tab_order(3));
    assert!(area.set_owner_draw(true));
    assert!(area.set_action(ClickAction::None));
    assert!(area.set_tag(Some("payload")));

    assert_eq!(area.revision(), 5);
    assert_eq!(area.geometry_revision(), 0);
}

#[test]
fn test_access_key_is_case_insensitive() {
    let mut area = rect_area("10, 10, 50, 50");

    assert!(area.set_access_key(Some('x')));
    assert_eq!(area.access_key(), Some('X'));
    assert!(area.matches_access_key('x'));
    assert!(area.matches_access_key('X'));
    assert!(!area.matches_access_key('y'));
}

#[test]
fn test_access_key_text_validation() {
    let mut area = rect_area("10, 10, 50, 50");

    assert!(area.set_access_key_text("k").unwrap());
    assert_eq!(area.access_key(), Some('K'));
    assert!(matches!(
        area.set_access_key_text("ab"),
        Err(ImageMapError::AccessKeyLength(_))
    ));
    assert_eq!(area.access_key(), Some('K'));
    assert!(area.set_access_key_text("").unwrap());
    assert_eq!(area.access_key(), None);
}

#[test]
fn test_blank_tool_tip_is_none() {
    let mut area = rect_area("10, 10, 50, 50");

    assert!(!area.set_tool_tip(Some("   ")));
    assert_eq!(area.tool_tip(), None);
    assert!(area.set_tool_tip(Some("Hello")));
    assert_eq!(area.tool_tip(), Some("Hello"));
}

#[test]
fn test_equality_is_structural() {
    let a = rect_area("10, 10, 50, 50").with_tab_order(2).with_tool_tip("A");
    let b = rect_area("10,10,50,50").with_tab_order(2).with_tool_tip("A");

    assert_ne!(a.id(), b.id());
    assert_eq!(a, b);
    assert_ne!(a, b.clone().with_tag("other"));
    assert_ne!(a, b.clone().with_enabled(false));
}

#[test]
fn test_owner_draw_not_part_of_equality() {
    let a = rect_area("10, 10, 50, 50");
    let b = rect_area("10, 10, 50, 50").with_owner_draw(true);

    assert_eq!(a, b);
}

#[test]
fn test_clone_gets_new_identity() {
    let a = rect_area("10, 10, 50, 50");
    let b = a.clone();

    assert_ne!(a.id(), b.id());
    assert_eq!(a, b);
}

#[test]
fn test_selectable_predicate() {
    let area = rect_area("10, 10, 50, 50");
    assert!(!area.is_selectable());

    let area = area.with_tab_order(1);
    assert!(area.is_selectable());
    assert!(!area.clone().with_enabled(false).is_selectable());
    assert!(!area.clone().with_action(ClickAction::None).is_selectable());
    assert!(!area.with_action(ClickAction::Navigate).is_selectable());
}

#[test]
fn test_contains_and_bounding_box() {
    let area = Area::from_coordinates(ShapeKind::Circle, "20, 20, 5").unwrap();

    assert!(area.contains_point(Point::new(22, 22)));
    assert!(!area.contains_point(Point::new(30, 30)));
    assert_eq!(area.bounding_box(), Rect::new(15, 15, 10, 10));
}

#[test]
fn test_display_with_tool_tip() {
    let area = rect_area("10, 10, 50, 50").with_tool_tip("Header");
    assert_snapshot!(area.to_string(), @"Header, Rectangle at 10, 10, 50, 50");
}

#[test]
fn test_display_polygon_without_tool_tip() {
    let area = Area::from_coordinates(ShapeKind::Polygon, "0,0,10,0,10,10").unwrap();
    assert_snapshot!(area.to_string(), @"Polygon at 0, 0, 10, 0, 10, 10");
}
