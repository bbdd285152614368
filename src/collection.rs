//! Area collection
//!
//! Ordered storage of areas. Storage order is z-order and click priority.
//! The collection is a passive notifier: it never knows about the caches its
//! owner derives from it. Owners compare `version()` (any change) or
//! `geometry_version()` (shape or membership change) against the value they
//! last built from, and may drain `take_changes()` to learn which area was
//! the subject of each change.

mod area_collection;

pub use area_collection::{AreaCollection, ChangeSubject, CollectionChange};

#[cfg(test)]
#[path = "collection/area_collection_tests.rs"]
mod area_collection_tests;
