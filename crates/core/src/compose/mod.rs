//! Composition of the single flat list every other component reads.
//!
//! The dynamic list comes from the backend for the active language; the
//! static list is compiled in (settings, developer tools, ...) and passes
//! through the [`FeatureTable`] first.

pub mod features;

pub use features::FeatureTable;

use crate::model::MenuItem;

/// Concatenate the dynamic list with the already-filtered static list.
///
/// No deduplication: static ids live in a reserved range disjoint from
/// server-assigned ids.
pub fn compose(dynamic: &[MenuItem], static_filtered: &[MenuItem]) -> Vec<MenuItem> {
    let mut merged = Vec::with_capacity(dynamic.len() + static_filtered.len());
    merged.extend_from_slice(dynamic);
    merged.extend_from_slice(static_filtered);
    merged
}

/// Stable ordering by `position`; items without one keep their encounter
/// order after all positioned items.
pub fn order_by_position(items: &mut [MenuItem]) {
    items.sort_by_key(|item| (item.position.is_none(), item.position));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuId;

    #[test]
    fn compose_keeps_dynamic_first_and_does_not_dedup() {
        let dynamic = vec![MenuItem::new(1, "Home"), MenuItem::new(2, "Reports")];
        let stat = vec![MenuItem::new(2, "menu.dup").with_screen("Dup")];
        let merged = compose(&dynamic, &stat);
        let ids: Vec<MenuId> = merged.iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![MenuId(1), MenuId(2), MenuId(2)]);
    }

    #[test]
    fn order_by_position_is_stable() {
        let mut items = vec![
            MenuItem::new(1, "c").with_position(3),
            MenuItem::new(2, "none-a"),
            MenuItem::new(3, "a").with_position(1),
            MenuItem::new(4, "b").with_position(1),
            MenuItem::new(5, "none-b"),
        ];
        order_by_position(&mut items);
        let ids: Vec<i64> = items.iter().map(|item| item.id.0).collect();
        assert_eq!(ids, vec![3, 4, 1, 2, 5]);
    }
}
