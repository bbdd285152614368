//! Image areas
//!
//! An `Area` is one hot-spot: a fixed shape kind with its geometry plus the
//! behavior flags hosts read (enabled, tab order, access key, click action,
//! tool tip, owner draw and an opaque tag). Every setter reports whether the
//! value actually changed and bumps the area's revision only when it did, so
//! owners never invalidate caches for a no-op.

mod click_action;
mod image_area;

pub use click_action::ClickAction;
pub use image_area::{Area, AreaId};

#[cfg(test)]
#[path = "area/image_area_tests.rs"]
mod image_area_tests;
