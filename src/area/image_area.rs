use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use super::ClickAction;
use crate::codec;
use crate::error::{CoordinateError, ImageMapError};
use crate::geometry::{Point, Rect, Shape, ShapeKind};

static NEXT_AREA_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an area instance, distinct from its structural equality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AreaId(u64);

impl AreaId {
    fn next() -> Self {
        AreaId(NEXT_AREA_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A single hot-spot on an image map
#[derive(Debug)]
pub struct Area {
    id: AreaId,
    shape: Shape,
    enabled: bool,
    owner_draw: bool,
    tab_order: u32,
    access_key: Option<char>,
    action: ClickAction,
    tool_tip: Option<String>,
    tag: Option<String>,
    revision: u64,
    geometry_revision: u64,
}

impl Area {
    pub fn new(shape: Shape) -> Self {
        Self {
            id: AreaId::next(),
            shape,
            enabled: true,
            owner_draw: false,
            tab_order: 0,
            access_key: None,
            action: ClickAction::default(),
            tool_tip: None,
            tag: None,
            revision: 0,
            geometry_revision: 0,
        }
    }

    /// Create an area of `kind` from its textual coordinates
    pub fn from_coordinates(kind: ShapeKind, coordinates: &str) -> Result<Self, CoordinateError> {
        Ok(Self::new(codec::decode(kind, coordinates)?))
    }

    pub fn with_tool_tip(mut self, tool_tip: &str) -> Self {
        self.set_tool_tip(Some(tool_tip));
        self
    }

    pub fn with_tab_order(mut self, tab_order: u32) -> Self {
        self.set_tab_order(tab_order);
        self
    }

    pub fn with_access_key(mut self, key: char) -> Self {
        self.set_access_key(Some(key));
        self
    }

    pub fn with_action(mut self, action: ClickAction) -> Self {
        self.set_action(action);
        self
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.set_enabled(enabled);
        self
    }

    pub fn with_owner_draw(mut self, owner_draw: bool) -> Self {
        self.set_owner_draw(owner_draw);
        self
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.set_tag(Some(tag));
        self
    }

    pub fn id(&self) -> AreaId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.shape.kind()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Encoded coordinates, e.g. `"10, 10, 50, 50"`
    pub fn coordinates(&self) -> String {
        codec::encode(&self.shape)
    }

    /// Decode and store new coordinates
    ///
    /// The current geometry is untouched when decoding fails. Returns whether
    /// the geometry changed.
    pub fn set_coordinates(&mut self, coordinates: &str) -> Result<bool, CoordinateError> {
        let shape = codec::decode(self.kind(), coordinates)?;
        Ok(self.replace_shape(shape))
    }

    /// Replace the geometry with another of the same kind
    pub fn set_shape(&mut self, shape: Shape) -> Result<bool, ImageMapError> {
        if shape.kind() != self.kind() {
            return Err(ImageMapError::ShapeMismatch {
                expected: self.kind(),
                found: shape.kind(),
            });
        }
        Ok(self.replace_shape(shape))
    }

    fn replace_shape(&mut self, shape: Shape) -> bool {
        if shape == self.shape {
            return false;
        }
        self.shape = shape;
        self.touch(true);
        true
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        self.touch(false);
        true
    }

    pub fn owner_draw(&self) -> bool {
        self.owner_draw
    }

    pub fn set_owner_draw(&mut self, owner_draw: bool) -> bool {
        if self.owner_draw == owner_draw {
            return false;
        }
        self.owner_draw = owner_draw;
        self.touch(false);
        true
    }

    /// Tab order; 0 excludes the area from keyboard traversal
    pub fn tab_order(&self) -> u32 {
        self.tab_order
    }

    pub fn set_tab_order(&mut self, tab_order: u32) -> bool {
        if self.tab_order == tab_order {
            return false;
        }
        self.tab_order = tab_order;
        self.touch(false);
        true
    }

    /// Access key, stored upper-cased
    pub fn access_key(&self) -> Option<char> {
        self.access_key
    }

    pub fn set_access_key(&mut self, key: Option<char>) -> bool {
        let key = key.map(fold_key);
        if self.access_key == key {
            return false;
        }
        self.access_key = key;
        self.touch(false);
        true
    }

    /// Set the access key from text; empty text clears it
    pub fn set_access_key_text(&mut self, text: &str) -> Result<bool, ImageMapError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(self.set_access_key(None)),
            (Some(c), None) => Ok(self.set_access_key(Some(c))),
            _ => Err(ImageMapError::AccessKeyLength(text.to_string())),
        }
    }

    /// Case-insensitive comparison against the access key
    pub fn matches_access_key(&self, key: char) -> bool {
        self.access_key == Some(fold_key(key))
    }

    pub fn action(&self) -> ClickAction {
        self.action
    }

    pub fn set_action(&mut self, action: ClickAction) -> bool {
        if self.action == action {
            return false;
        }
        self.action = action;
        self.touch(false);
        true
    }

    pub fn tool_tip(&self) -> Option<&str> {
        self.tool_tip.as_deref()
    }

    /// Blank or whitespace-only tool tips are stored as none
    pub fn set_tool_tip(&mut self, tool_tip: Option<&str>) -> bool {
        let tool_tip = tool_tip
            .filter(|t| !t.trim().is_empty())
            .map(str::to_string);
        if self.tool_tip == tool_tip {
            return false;
        }
        self.tool_tip = tool_tip;
        self.touch(false);
        true
    }

    /// Host data attached to the area; never read by the engine
    ///
    /// Text so documents can carry it. Hosts with richer data key it by
    /// `id()` or by the tag itself.
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub fn set_tag(&mut self, tag: Option<&str>) -> bool {
        let tag = tag.map(str::to_string);
        if self.tag == tag {
            return false;
        }
        self.tag = tag;
        self.touch(false);
        true
    }

    pub fn contains_point(&self, p: Point) -> bool {
        self.shape.contains(p)
    }

    pub fn bounding_box(&self) -> Rect {
        self.shape.bounding_box()
    }

    /// Enabled, in the tab order, and firing events
    pub fn is_selectable(&self) -> bool {
        self.enabled && self.tab_order > 0 && self.action == ClickAction::FireEvent
    }

    /// Bumped on every actual change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Bumped only when the geometry changes
    pub fn geometry_revision(&self) -> u64 {
        self.geometry_revision
    }

    fn touch(&mut self, geometry: bool) {
        self.revision = self.revision.wrapping_add(1);
        if geometry {
            self.geometry_revision = self.geometry_revision.wrapping_add(1);
        }
    }
}

fn fold_key(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

/// Clones are new instances and get a fresh identity
impl Clone for Area {
    fn clone(&self) -> Self {
        Self {
            id: AreaId::next(),
            shape: self.shape.clone(),
            enabled: self.enabled,
            owner_draw: self.owner_draw,
            tab_order: self.tab_order,
            access_key: self.access_key,
            action: self.action,
            tool_tip: self.tool_tip.clone(),
            tag: self.tag.clone(),
            revision: self.revision,
            geometry_revision: self.geometry_revision,
        }
    }
}

/// Structural equality: identity and owner draw are ignored
impl PartialEq for Area {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind()
            && self.coordinates() == other.coordinates()
            && self.access_key == other.access_key
            && self.action == other.action
            && self.enabled == other.enabled
            && self.tab_order == other.tab_order
            && self.tool_tip == other.tool_tip
            && self.tag == other.tag
    }
}

impl Eq for Area {}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(tool_tip) = &self.tool_tip {
            write!(f, "{}, ", tool_tip)?;
        }
        write!(f, "{} at {}", self.kind(), self.coordinates())
    }
}
