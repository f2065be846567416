use serde::{Deserialize, Serialize};

use super::ItemIndex;
use crate::model::{MenuId, MenuItem, RenderKind};

/// One entry of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    pub id: MenuId,
    /// Literal text for dynamic items, an i18n key for static ones.
    pub caption: String,
    pub kind: RenderKind,
}

/// Ancestor chain of `target`, root first and `target` last.
///
/// Returns `None` when `target` or any ancestor is missing (no partial paths),
/// or when the chain is cyclic.
pub fn id_path(items: &[MenuItem], target: MenuId) -> Option<Vec<MenuId>> {
    ItemIndex::new(items).id_path(target)
}

/// [`id_path`] mapped back to captions for display.
pub fn breadcrumb(items: &[MenuItem], target: MenuId) -> Option<Vec<Crumb>> {
    let index = ItemIndex::new(items);
    let ids = index.id_path(target)?;
    ids.into_iter()
        .map(|id| {
            index.get(id).map(|item| Crumb {
                id,
                caption: item.caption.clone(),
                kind: item.render_kind(),
            })
        })
        .collect()
}

impl ItemIndex<'_> {
    pub(crate) fn id_path(&self, target: MenuId) -> Option<Vec<MenuId>> {
        let mut chain = Vec::new();
        let mut current = self.get(target)?;
        loop {
            chain.push(current.id);
            match current.parent_id {
                None => break,
                Some(parent) => {
                    if chain.len() > self.max_hops() {
                        return None;
                    }
                    current = self.get(parent)?;
                }
            }
        }
        chain.reverse();
        Some(chain)
    }
}
