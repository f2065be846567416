use serde::{Deserialize, Serialize};

use super::ItemIndex;
use crate::model::{MenuId, MenuItem};

/// Distance of an item from its root.
///
/// Every finite depth orders before `Unbounded`, which is what items with an
/// unresolvable ancestor chain get. Callers only use this for sorting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Depth {
    Finite(usize),
    Unbounded,
}

impl Depth {
    pub fn as_finite(self) -> Option<usize> {
        match self {
            Depth::Finite(d) => Some(d),
            Depth::Unbounded => None,
        }
    }
}

/// Depth of `id` in `items`: 0 for a root, `1 + depth(parent)` otherwise.
///
/// Returns `Depth::Unbounded` when `id` (or any ancestor) is missing, or when
/// the chain loops back on itself.
pub fn depth(items: &[MenuItem], id: MenuId) -> Depth {
    ItemIndex::new(items).depth(id)
}

impl ItemIndex<'_> {
    pub(crate) fn depth(&self, id: MenuId) -> Depth {
        let mut current = id;
        let mut hops = 0usize;
        loop {
            let Some(item) = self.get(current) else {
                return Depth::Unbounded;
            };
            match item.parent_id {
                None => return Depth::Finite(hops),
                Some(parent) => {
                    hops += 1;
                    if hops > self.max_hops() {
                        return Depth::Unbounded;
                    }
                    current = parent;
                }
            }
        }
    }
}
