use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Depth, ItemIndex};
use crate::model::{MenuId, MenuItem, MenuNode};

/// Navigation forest built from a flat list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    pub roots: Vec<MenuNode>,
    /// Items left out because their parent never resolved, in processing order.
    pub dropped: Vec<MenuId>,
}

impl Forest {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes across all trees.
    pub fn node_count(&self) -> usize {
        self.roots.iter().map(MenuNode::node_count).sum()
    }

    pub fn find(&self, id: MenuId) -> Option<&MenuNode> {
        self.roots.iter().find_map(|root| root.find(id))
    }

    /// Pre-order traversal yielding `(level, node)` pairs, roots at level 0.
    pub fn walk(&self) -> Vec<(usize, &MenuNode)> {
        let mut out = Vec::with_capacity(self.node_count());
        let mut stack: Vec<(usize, &MenuNode)> =
            self.roots.iter().rev().map(|root| (0, root)).collect();
        while let Some((level, node)) = stack.pop() {
            out.push((level, node));
            stack.extend(node.children.iter().rev().map(|child| (level + 1, child)));
        }
        out
    }
}

struct Slot<'a> {
    item: &'a MenuItem,
    children: Vec<usize>,
}

/// Build the navigation forest from a flat list.
///
/// Items are inserted in ascending depth order (stable, so equal depths keep
/// list order), which puts every resolvable parent in place before its
/// children. An item whose parent cannot be found is dropped and reported in
/// [`Forest::dropped`]; it is never an error.
pub fn build_forest(items: &[MenuItem]) -> Forest {
    let index = ItemIndex::new(items);
    let mut ordered: Vec<(Depth, &MenuItem)> =
        items.iter().map(|item| (index.depth(item.id), item)).collect();
    ordered.sort_by_key(|(depth, _)| *depth);

    let mut arena: Vec<Slot<'_>> = Vec::with_capacity(items.len());
    let mut slot_of: HashMap<MenuId, usize> = HashMap::with_capacity(items.len());
    let mut roots = Vec::new();
    let mut dropped = Vec::new();

    for (_, item) in ordered {
        let parent_slot = match item.parent_id {
            None => None,
            Some(parent) => match slot_of.get(&parent) {
                Some(&slot) => Some(slot),
                None => {
                    debug!(id = %item.id, parent = %parent, "dropping menu item with unresolved parent");
                    dropped.push(item.id);
                    continue;
                }
            },
        };

        let slot = arena.len();
        arena.push(Slot { item, children: Vec::new() });
        slot_of.insert(item.id, slot);
        match parent_slot {
            Some(parent) => arena[parent].children.push(slot),
            None => roots.push(slot),
        }
    }

    let roots = materialize(arena, &roots);
    Forest { roots, dropped }
}

/// Turn the arena into nested nodes without recursing.
///
/// A child's slot is always greater than its parent's, so walking the arena
/// backwards finishes every subtree before the node that owns it.
fn materialize(arena: Vec<Slot<'_>>, roots: &[usize]) -> Vec<MenuNode> {
    let mut built: Vec<Option<MenuNode>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);
    for (slot, entry) in arena.iter().enumerate().rev() {
        let children = entry.children.iter().filter_map(|&child| built[child].take()).collect();
        built[slot] = Some(MenuNode { value: entry.item.clone(), children });
    }
    roots.iter().filter_map(|&slot| built[slot].take()).collect()
}
