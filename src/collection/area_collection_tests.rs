//! Tests for the area collection

use super::{AreaCollection, ChangeSubject};
use crate::area::Area;
use crate::error::ImageMapError;
use crate::geometry::ShapeKind;

fn rect(coords: &str) -> Area {
    Area::from_coordinates(ShapeKind::Rectangle, coords).unwrap()
}

#[test]
fn test_push_records_incoming_area() {
    let mut areas = AreaCollection::new();
    let area = rect("0, 0, 10, 10");
    let id = area.id();

    areas.push(area);

    assert_eq!(areas.len(), 1);
    assert_eq!(areas.version(), 1);
    assert_eq!(areas.geometry_version(), 1);
    let changes = areas.take_changes();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].subject, ChangeSubject::Area(id));
    assert!(areas.take_changes().is_empty());
}

#[test]
fn test_insert_keeps_storage_order() {
    let mut areas = AreaCollection::from_areas([rect("0, 0, 10, 10"), rect("20, 20, 30, 30")]);
    let middle = rect("10, 10, 20, 20");

    areas.insert(1, middle.clone()).unwrap();

    assert_eq!(areas.index_of(&middle), Some(1));
    assert_eq!(areas.get(2).unwrap().coordinates(), "20, 20, 30, 30");
}

#[test]
fn test_insert_out_of_range_fails() {
    let mut areas = AreaCollection::new();
    let err = areas.insert(1, rect("0, 0, 10, 10")).unwrap_err();

    assert!(matches!(
        err,
        ImageMapError::IndexOutOfRange { index: 1, len: 0 }
    ));
    assert_eq!(areas.version(), 0);
}

#[test]
fn test_remove_reports_outgoing_area() {
    let mut areas = AreaCollection::from_areas([rect("0, 0, 10, 10"), rect("20, 20, 30, 30")]);
    let outgoing = areas.get(0).unwrap().id();
    areas.take_changes();

    let removed = areas.remove_at(0).unwrap();

    assert_eq!(removed.id(), outgoing);
    assert_eq!(areas.len(), 1);
    assert_eq!(
        areas.take_changes()[0].subject,
        ChangeSubject::Area(outgoing)
    );
    assert!(areas.remove_at(5).is_err());
}

#[test]
fn test_set_reports_incoming_area() {
    let mut areas = AreaCollection::from_areas([rect("0, 0, 10, 10")]);
    areas.take_changes();
    let incoming = rect("5, 5, 15, 15");
    let incoming_id = incoming.id();

    let old = areas.set(0, incoming).unwrap();

    assert_eq!(old.coordinates(), "0, 0, 10, 10");
    assert_eq!(
        areas.take_changes()[0].subject,
        ChangeSubject::Area(incoming_id)
    );
}

#[test]
fn test_clear_reports_collection_subject() {
    let mut areas = AreaCollection::from_areas([rect("0, 0, 10, 10")]);
    areas.take_changes();

    areas.clear();

    assert!(areas.is_empty());
    assert_eq!(
        areas.take_changes()[0].subject,
        ChangeSubject::Collection
    );
}

#[test]
fn test_update_without_change_records_nothing() {
    let mut areas = AreaCollection::from_areas([rect("0, 0, 10, 10")]);
    areas.take_changes();
    let version = areas.version();

    let changed = areas.update(0, |a| a.set_enabled(true));

    assert_eq!(changed, Some(false));
    assert_eq!(areas.version(), version);
    assert!(areas.take_changes().is_empty());
}

#[test]
fn test_update_flag_change_keeps_geometry_version() {
    let mut areas = AreaCollection::from_areas([rect("0, 0, 10, 10")]);
    let geometry = areas.geometry_version();
    let version = areas.version();

    areas.update(0, |a| a.set_enabled(false));

    assert_eq!(areas.version(), version + 1);
    assert_eq!(areas.geometry_version(), geometry);
}

#[test]
fn test_update_geometry_change_bumps_both_versions() {
    let mut areas = AreaCollection::from_areas([rect("0, 0, 10, 10")]);
    let geometry = areas.geometry_version();

    areas.update(0, |a| a.set_coordinates("0, 0, 20, 20")).unwrap().unwrap();

    assert_eq!(areas.geometry_version(), geometry + 1);
}

#[test]
fn test_update_out_of_range_is_none() {
    let mut areas = AreaCollection::new();
    assert_eq!(areas.update(0, |a| a.set_enabled(false)), None);
}

#[test]
fn test_repeated_changes_to_same_area_are_coalesced() {
    let mut areas = AreaCollection::from_areas([rect("0, 0, 10, 10")]);
    areas.take_changes();

    areas.update(0, |a| a.set_tab_order(1));
    areas.update(0, |a| a.set_tab_order(2));

    let changes = areas.take_changes();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].version, areas.version());
}

#[test]
fn test_index_of_is_structural_and_position_of_is_identity() {
    let first = rect("0, 0, 10, 10");
    let twin = first.clone();
    let areas = AreaCollection::from_areas([first]);

    assert_eq!(areas.index_of(&twin), Some(0));
    assert_eq!(areas.position_of(twin.id()), None);
    assert_eq!(areas.position_of(areas.get(0).unwrap().id()), Some(0));
}
