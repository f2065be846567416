use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::model::{MenuId, MenuItem};

/// Hand-maintained on/off switches for static menu entries.
///
/// Ids without an entry are enabled. Disabling a parent does not cascade:
/// whoever edits the table disables or reparents its children too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureTable {
    flags: BTreeMap<MenuId, bool>,
}

impl FeatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_enabled(&self, id: MenuId) -> bool {
        self.flags.get(&id).copied().unwrap_or(true)
    }

    pub fn set(&mut self, id: MenuId, enabled: bool) -> &mut Self {
        self.flags.insert(id, enabled);
        self
    }

    pub fn disabled(&self) -> impl Iterator<Item = MenuId> + '_ {
        self.flags.iter().filter(|(_, enabled)| !**enabled).map(|(id, _)| *id)
    }

    /// Keep only enabled entries, preserving order.
    pub fn filter(&self, items: &[MenuItem]) -> Vec<MenuItem> {
        items
            .iter()
            .filter(|item| {
                let enabled = self.is_enabled(item.id);
                if !enabled {
                    debug!(id = %item.id, "static menu entry disabled by feature table");
                }
                enabled
            })
            .cloned()
            .collect()
    }
}

impl FromIterator<(MenuId, bool)> for FeatureTable {
    fn from_iter<T: IntoIterator<Item = (MenuId, bool)>>(iter: T) -> Self {
        Self { flags: iter.into_iter().collect() }
    }
}
