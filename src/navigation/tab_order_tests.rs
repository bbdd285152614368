//! Tests for tab-order navigation and access keys

use super::*;
use crate::area::{Area, ClickAction};
use crate::collection::AreaCollection;
use crate::geometry::ShapeKind;

fn tabbed(tab_order: u32) -> Area {
    Area::from_coordinates(ShapeKind::Rectangle, "0, 0, 10, 10")
        .unwrap()
        .with_tab_order(tab_order)
}

fn collection(orders: &[u32]) -> AreaCollection {
    orders.iter().map(|&t| tabbed(t)).collect()
}

#[test]
fn test_first_selectable_ignores_storage_order() {
    let areas = collection(&[30, 10, 20]);
    assert_eq!(first_selectable(&areas), Some(1));
}

#[test]
fn test_last_selectable_picks_largest_tab_order() {
    let areas = collection(&[30, 10, 20]);
    assert_eq!(last_selectable(&areas), Some(0));
}

#[test]
fn test_ties_break_to_lowest_storage_index() {
    let areas = collection(&[5, 2, 5, 2]);

    assert_eq!(first_selectable(&areas), Some(1));
    assert_eq!(last_selectable(&areas), Some(0));
    assert_eq!(next_selectable(&areas, Some(1), true), Some(0));
    assert_eq!(next_selectable(&areas, Some(0), false), Some(1));
}

#[test]
fn test_next_forward_and_backward() {
    let areas = collection(&[30, 10, 20]);

    assert_eq!(next_selectable(&areas, Some(1), true), Some(2));
    assert_eq!(next_selectable(&areas, Some(2), true), Some(0));
    assert_eq!(next_selectable(&areas, Some(0), false), Some(2));
    assert_eq!(next_selectable(&areas, Some(2), false), Some(1));
}

#[test]
fn test_next_does_not_wrap() {
    let areas = collection(&[30, 10, 20]);

    assert_eq!(next_selectable(&areas, Some(0), true), None);
    assert_eq!(next_selectable(&areas, Some(1), false), None);
}

#[test]
fn test_next_from_out_of_range_starts_at_boundary() {
    let areas = collection(&[30, 10, 20]);

    assert_eq!(next_selectable(&areas, None, true), Some(1));
    assert_eq!(next_selectable(&areas, Some(99), true), Some(1));
    assert_eq!(next_selectable(&areas, None, false), Some(0));
}

#[test]
fn test_next_from_unselectable_area_uses_its_tab_order() {
    let mut areas = collection(&[30, 10, 20]);
    areas.update(2, |a| a.set_enabled(false));

    assert_eq!(next_selectable(&areas, Some(2), true), Some(0));
    assert_eq!(next_selectable(&areas, Some(1), true), Some(0));
}

#[test]
fn test_unselectable_areas_are_skipped() {
    let areas: AreaCollection = [
        tabbed(0),
        tabbed(1).with_enabled(false),
        tabbed(2).with_action(ClickAction::None),
        tabbed(3).with_action(ClickAction::Navigate),
        tabbed(4),
    ]
    .into_iter()
    .collect();

    assert_eq!(first_selectable(&areas), Some(4));
    assert_eq!(last_selectable(&areas), Some(4));
    assert_eq!(next_selectable(&areas, Some(4), true), None);
    assert!(has_tab_stop(&areas));
}

#[test]
fn test_no_selectable_areas() {
    let areas = collection(&[0, 0]);

    assert_eq!(first_selectable(&areas), None);
    assert_eq!(last_selectable(&areas), None);
    assert_eq!(next_selectable(&areas, None, true), None);
    assert!(!has_tab_stop(&areas));
    assert!(!has_tab_stop(&AreaCollection::new()));
}

#[test]
fn test_access_key_fans_out_to_all_matches() {
    let areas: AreaCollection = [
        tabbed(0).with_access_key('x'),
        tabbed(0).with_access_key('y'),
        tabbed(0).with_access_key('X'),
        tabbed(0).with_access_key('x').with_enabled(false),
        tabbed(0).with_access_key('x').with_action(ClickAction::None),
    ]
    .into_iter()
    .collect();

    assert_eq!(access_key_matches(&areas, 'X'), vec![0, 2]);
    assert_eq!(access_key_matches(&areas, 'x'), vec![0, 2]);
    assert!(access_key_matches(&areas, 'z').is_empty());
}
