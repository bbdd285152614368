use crate::collection::AreaCollection;
use crate::geometry::{Point, Shape, Size};

/// Geometry of one non-degenerate area, labeled with its storage index
#[derive(Debug, Clone)]
struct LabeledRegion {
    index: usize,
    shape: Shape,
}

/// Composite region derived from an `AreaCollection`
///
/// Never authoritative: it is rebuilt from the collection whenever the
/// collection's geometry version differs from the one it was built for.
/// Enabled flags are read live from the collection at resolve time, so
/// toggling an area never forces a rebuild.
#[derive(Debug, Default)]
pub struct HitTestCache {
    regions: Vec<LabeledRegion>,
    built_for: Option<u64>,
    rebuilds: u64,
}

impl HitTestCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the cached regions; the next resolve rebuilds them
    pub fn invalidate(&mut self) {
        self.regions.clear();
        self.built_for = None;
    }

    pub fn is_stale(&self, areas: &AreaCollection) -> bool {
        self.built_for != Some(areas.geometry_version())
    }

    /// Number of times the regions have been rebuilt
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Number of labeled regions (degenerate areas contribute none)
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Index of the first enabled area containing `point`, if any
    ///
    /// Points outside `0..=width`, `0..=height` are rejected without
    /// touching the regions.
    pub fn resolve(&mut self, areas: &AreaCollection, bounds: Size, point: Point) -> Option<usize> {
        if point.x < 0 || point.y < 0 || point.x > bounds.width || point.y > bounds.height {
            return None;
        }

        if self.is_stale(areas) {
            self.rebuild(areas);
        }

        self.regions
            .iter()
            .find(|region| {
                region.shape.contains(point)
                    && areas.get(region.index).is_some_and(|a| a.enabled())
            })
            .map(|region| region.index)
    }

    fn rebuild(&mut self, areas: &AreaCollection) {
        self.regions = areas
            .iter()
            .enumerate()
            .filter(|(_, area)| !area.shape().is_degenerate())
            .map(|(index, area)| LabeledRegion {
                index,
                shape: area.shape().clone(),
            })
            .collect();
        self.built_for = Some(areas.geometry_version());
        self.rebuilds += 1;

        log::debug!(
            "Rebuilt hit-test regions: {} areas, {} regions",
            areas.len(),
            self.regions.len()
        );
    }
}
