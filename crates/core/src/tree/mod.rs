//! Tree reconstruction over the flat menu list.
//!
//! - `depth`: distance of an item from its root, used for insertion ordering.
//! - `forest`: builds the nested navigation forest.
//! - `breadcrumb`: ancestor chains for the active item.
//!
//! All three walk parent links through an id-indexed view of the list. Walks
//! are bounded by the list length, so a cyclic parent chain resolves to
//! "unbounded"/"absent" instead of looping.

use std::collections::HashMap;

use crate::model::{MenuId, MenuItem};

pub mod breadcrumb;
pub mod depth;
pub mod forest;

pub use breadcrumb::{breadcrumb, id_path, Crumb};
pub use depth::{depth, Depth};
pub use forest::{build_forest, Forest};

/// Id-indexed view over a flat list. Later duplicates overwrite earlier ones.
pub(crate) struct ItemIndex<'a> {
    by_id: HashMap<MenuId, &'a MenuItem>,
}

impl<'a> ItemIndex<'a> {
    pub(crate) fn new(items: &'a [MenuItem]) -> Self {
        let by_id = items.iter().map(|item| (item.id, item)).collect();
        Self { by_id }
    }

    pub(crate) fn get(&self, id: MenuId) -> Option<&'a MenuItem> {
        self.by_id.get(&id).copied()
    }

    /// Upper bound on the number of parent hops an acyclic chain can take.
    pub(crate) fn max_hops(&self) -> usize {
        self.by_id.len()
    }
}
