use crate::area::{Area, AreaId};
use crate::error::ImageMapError;

/// What a collection change was about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeSubject {
    /// An area was inserted, removed, replaced or modified
    Area(AreaId),
    /// The collection was cleared
    Collection,
}

/// One change notification, stamped with the collection version it produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionChange {
    pub subject: ChangeSubject,
    pub version: u64,
}

#[derive(Debug, Default)]
pub struct AreaCollection {
    areas: Vec<Area>,
    version: u64,
    geometry_version: u64,
    changes: Vec<CollectionChange>,
}

impl AreaCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_areas(areas: impl IntoIterator<Item = Area>) -> Self {
        let mut collection = Self::new();
        collection.extend(areas);
        collection
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Area> {
        self.areas.get(index)
    }

    /// Areas in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, Area> {
        self.areas.iter()
    }

    /// Bumped on every change, including flag changes on member areas
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Bumped on membership changes and member geometry changes only
    pub fn geometry_version(&self) -> u64 {
        self.geometry_version
    }

    pub fn push(&mut self, area: Area) {
        let id = area.id();
        self.areas.push(area);
        self.record(ChangeSubject::Area(id), true);
    }

    pub fn extend(&mut self, areas: impl IntoIterator<Item = Area>) {
        for area in areas {
            self.push(area);
        }
    }

    pub fn insert(&mut self, index: usize, area: Area) -> Result<(), ImageMapError> {
        if index > self.areas.len() {
            return Err(self.out_of_range(index));
        }
        let id = area.id();
        self.areas.insert(index, area);
        self.record(ChangeSubject::Area(id), true);
        Ok(())
    }

    pub fn remove_at(&mut self, index: usize) -> Result<Area, ImageMapError> {
        if index >= self.areas.len() {
            return Err(self.out_of_range(index));
        }
        let area = self.areas.remove(index);
        self.record(ChangeSubject::Area(area.id()), true);
        Ok(area)
    }

    /// Replace the area at `index`, returning the outgoing one
    pub fn set(&mut self, index: usize, area: Area) -> Result<Area, ImageMapError> {
        let Some(slot) = self.areas.get_mut(index) else {
            return Err(self.out_of_range(index));
        };
        let id = area.id();
        let old = std::mem::replace(slot, area);
        self.record(ChangeSubject::Area(id), true);
        Ok(old)
    }

    pub fn clear(&mut self) {
        self.areas.clear();
        self.record(ChangeSubject::Collection, true);
    }

    /// Storage index of the first structurally equal area
    pub fn index_of(&self, area: &Area) -> Option<usize> {
        self.areas.iter().position(|a| a == area)
    }

    /// Storage index of a specific area instance
    pub fn position_of(&self, id: AreaId) -> Option<usize> {
        self.areas.iter().position(|a| a.id() == id)
    }

    /// Mutate the area at `index` in place
    ///
    /// A change is recorded only if the closure actually changed the area.
    pub fn update<R>(&mut self, index: usize, f: impl FnOnce(&mut Area) -> R) -> Option<R> {
        let area = self.areas.get_mut(index)?;
        let (revision, geometry_revision) = (area.revision(), area.geometry_revision());
        let result = f(area);
        let id = area.id();
        let changed = area.revision() != revision;
        let geometry_changed = area.geometry_revision() != geometry_revision;
        if changed {
            self.record(ChangeSubject::Area(id), geometry_changed);
        }
        Some(result)
    }

    /// Drain pending change notifications
    pub fn take_changes(&mut self) -> Vec<CollectionChange> {
        std::mem::take(&mut self.changes)
    }

    fn record(&mut self, subject: ChangeSubject, geometry: bool) {
        self.version = self.version.wrapping_add(1);
        if geometry {
            self.geometry_version = self.geometry_version.wrapping_add(1);
        }

        // Coalesce repeated notifications about the same subject
        let version = self.version;
        match self.changes.last_mut() {
            Some(last) if last.subject == subject => last.version = version,
            _ => self.changes.push(CollectionChange { subject, version }),
        }
    }

    fn out_of_range(&self, index: usize) -> ImageMapError {
        ImageMapError::IndexOutOfRange {
            index,
            len: self.areas.len(),
        }
    }
}

impl<'a> IntoIterator for &'a AreaCollection {
    type Item = &'a Area;
    type IntoIter = std::slice::Iter<'a, Area>;

    fn into_iter(self) -> Self::IntoIter {
        self.areas.iter()
    }
}

impl FromIterator<Area> for AreaCollection {
    fn from_iter<T: IntoIterator<Item = Area>>(iter: T) -> Self {
        Self::from_areas(iter)
    }
}
