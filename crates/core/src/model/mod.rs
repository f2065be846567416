//! Core data model for menu descriptors and the navigation tree.
//!
//! A menu arrives as a flat adjacency list of [`MenuItem`]s, each naming its
//! parent by id. Everything else in this crate is derived from that list:
//! - [`MenuNode`] forests for rendering nested navigation
//! - path maps for deep links
//! - breadcrumb chains for the active item

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a menu item.
///
/// Unique within one composed list. Server items and static items draw from
/// disjoint numeric ranges; this crate never generates ids itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuId(pub i64);

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for MenuId {
    fn from(value: i64) -> Self {
        MenuId(value)
    }
}

/// Name of the view a static menu item opens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenRef(pub String);

impl ScreenRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// How a menu item is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderKind {
    /// Server-supplied item; the caption is literal display text.
    Dynamic,
    /// Compiled-in item bound to a screen; the caption is an i18n key.
    Static,
}

/// Flat menu descriptor as received from the backend or the static table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuId,
    /// `None` marks a root. A parent id that matches nothing is tolerated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<MenuId>,
    /// Sibling ordering hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    pub caption: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen: Option<ScreenRef>,
}

impl MenuItem {
    pub fn new(id: i64, caption: impl Into<String>) -> Self {
        Self { id: MenuId(id), parent_id: None, position: None, caption: caption.into(), screen: None }
    }

    pub fn with_parent(mut self, parent: i64) -> Self {
        self.parent_id = Some(MenuId(parent));
        self
    }

    pub fn with_position(mut self, position: i32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_screen(mut self, screen: impl Into<String>) -> Self {
        self.screen = Some(ScreenRef::new(screen));
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn render_kind(&self) -> RenderKind {
        if self.screen.is_some() {
            RenderKind::Static
        } else {
            RenderKind::Dynamic
        }
    }
}

/// A node of the navigation forest.
///
/// Forests are rebuilt from the flat list on every change and never mutated
/// in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    pub value: MenuItem,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn new(value: MenuItem) -> Self {
        Self { value, children: Vec::new() }
    }

    pub fn id(&self) -> MenuId {
        self.value.id
    }

    /// Depth-first (pre-order) search of this subtree.
    pub fn find(&self, id: MenuId) -> Option<&MenuNode> {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.value.id == id {
                return Some(node);
            }
            stack.extend(node.children.iter().rev());
        }
        None
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
