//! URL path generation for menu items.
//!
//! Every reachable item gets a hierarchical, URL-safe path derived from its
//! caption. The router uses `path_by_id` to configure deep links and
//! `id_by_path` to resolve an incoming URL back to the item to activate.

pub mod paths;
pub mod slug;

pub use paths::{build_paths, PathMap};
pub use slug::{normalize_path, slugify};
