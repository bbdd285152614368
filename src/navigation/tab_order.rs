use crate::area::{Area, ClickAction};
use crate::collection::AreaCollection;

/// Scan in storage order, keeping a candidate only if strictly better
///
/// Strict comparison keeps the lowest storage index among equals.
fn best_selectable(
    areas: &AreaCollection,
    accept: impl Fn(u32) -> bool,
    better: impl Fn(u32, u32) -> bool,
) -> Option<usize> {
    let mut best: Option<(usize, u32)> = None;
    for (index, area) in areas.iter().enumerate() {
        if !area.is_selectable() || !accept(area.tab_order()) {
            continue;
        }
        match best {
            Some((_, tab)) if !better(area.tab_order(), tab) => {}
            _ => best = Some((index, area.tab_order())),
        }
    }
    best.map(|(index, _)| index)
}

/// Selectable area with the smallest tab order
pub fn first_selectable(areas: &AreaCollection) -> Option<usize> {
    best_selectable(areas, |_| true, |candidate, best| candidate < best)
}

/// Selectable area with the largest tab order
pub fn last_selectable(areas: &AreaCollection) -> Option<usize> {
    best_selectable(areas, |_| true, |candidate, best| candidate > best)
}

/// Next selectable area in tab order from `from`
///
/// Forward picks the smallest tab order strictly greater than the tab order
/// at `from`; backward picks the largest strictly smaller one. A missing or
/// out-of-range `from` starts before the first (forward) or after the last
/// (backward) tab position.
pub fn next_selectable(areas: &AreaCollection, from: Option<usize>, forward: bool) -> Option<usize> {
    let current = from.and_then(|i| areas.get(i)).map(Area::tab_order);

    if forward {
        let boundary = current.unwrap_or(0);
        best_selectable(areas, |tab| tab > boundary, |candidate, best| candidate < best)
    } else {
        let boundary = current.unwrap_or(u32::MAX);
        best_selectable(areas, |tab| tab < boundary, |candidate, best| candidate > best)
    }
}

/// Every enabled, event-firing area whose access key matches `key`
///
/// All matches are returned in storage order; one key may activate several
/// co-located areas.
pub fn access_key_matches(areas: &AreaCollection, key: char) -> Vec<usize> {
    areas
        .iter()
        .enumerate()
        .filter(|(_, a)| {
            a.enabled() && a.action() == ClickAction::FireEvent && a.matches_access_key(key)
        })
        .map(|(index, _)| index)
        .collect()
}

/// True when at least one area can take keyboard focus
pub fn has_tab_stop(areas: &AreaCollection) -> bool {
    areas.iter().any(Area::is_selectable)
}
