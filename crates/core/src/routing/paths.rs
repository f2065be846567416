use std::collections::{BTreeMap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::slug::{join_path, normalize_path, slugify};
use crate::model::{MenuId, MenuItem};

/// Bidirectional id/path lookup for every reachable menu item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMap {
    pub path_by_id: BTreeMap<MenuId, String>,
    pub id_by_path: BTreeMap<String, MenuId>,
}

impl PathMap {
    pub fn path_of(&self, id: MenuId) -> Option<&str> {
        self.path_by_id.get(&id).map(String::as_str)
    }

    /// Resolve an incoming URL path. The path is normalized first, so
    /// `home/sub/` and `/home/sub` resolve alike.
    pub fn id_of(&self, path: &str) -> Option<MenuId> {
        self.id_by_path.get(&normalize_path(path)).copied()
    }

    pub fn len(&self) -> usize {
        self.path_by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path_by_id.is_empty()
    }

    fn record(&mut self, id: MenuId, path: String) {
        self.id_by_path.insert(path.clone(), id);
        self.path_by_id.insert(id, path);
    }
}

/// Assign every item reachable from a root a unique hierarchical path.
///
/// Segments come from [`slugify`] on the caption. Within one parent:
/// - an empty slug falls back to the item id
/// - a slug shared by several siblings is suffixed with `-<id>` on each of them
/// - any segment already taken by an earlier sibling keeps getting `-<id>`
///   appended until it is free
///
/// Items under a dangling or cyclic parent chain are never reached and get
/// no path.
pub fn build_paths(items: &[MenuItem]) -> PathMap {
    let mut children: HashMap<Option<MenuId>, Vec<&MenuItem>> = HashMap::new();
    for item in items {
        children.entry(item.parent_id).or_default().push(item);
    }

    let mut map = PathMap::default();
    let mut visited: HashSet<MenuId> = HashSet::new();
    // Explicit stack of (parent key, parent path) so deep menus never recurse.
    let mut pending: Vec<(Option<MenuId>, String)> = vec![(None, "/".to_string())];

    while let Some((parent, parent_path)) = pending.pop() {
        let Some(siblings) = children.get(&parent) else {
            continue;
        };

        let segments = sibling_segments(siblings);
        let mut descend = Vec::with_capacity(siblings.len());
        for (item, segment) in siblings.iter().zip(segments) {
            if !visited.insert(item.id) {
                continue;
            }
            let path = join_path(&parent_path, &segment);
            map.record(item.id, path.clone());
            descend.push((Some(item.id), path));
        }
        pending.extend(descend.into_iter().rev());
    }

    map
}

/// Pick a unique path segment for each sibling, in order.
fn sibling_segments(siblings: &[&MenuItem]) -> Vec<String> {
    let slugs: Vec<String> = siblings.iter().map(|item| slugify(&item.caption)).collect();
    let mut occurrences: HashMap<&str, usize> = HashMap::new();
    for slug in slugs.iter().filter(|slug| !slug.is_empty()) {
        *occurrences.entry(slug.as_str()).or_default() += 1;
    }

    let mut used: HashSet<String> = HashSet::with_capacity(siblings.len());
    let mut segments = Vec::with_capacity(siblings.len());
    for (item, slug) in siblings.iter().zip(&slugs) {
        let mut segment = if slug.is_empty() {
            item.id.to_string()
        } else if occurrences.get(slug.as_str()).copied().unwrap_or(0) > 1 {
            format!("{slug}-{}", item.id)
        } else {
            slug.clone()
        };
        while used.contains(&segment) {
            debug!(id = %item.id, segment = %segment, "path segment taken by a sibling, disambiguating");
            segment = format!("{segment}-{}", item.id);
        }
        used.insert(segment.clone());
        segments.push(segment);
    }
    segments
}
