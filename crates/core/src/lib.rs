//! menu-core
//!
//! Core library for the dashboard's dynamic menu: it turns a flat,
//! server-supplied list of menu descriptors into a navigation forest, merges
//! it with the compiled-in static entries, assigns every node a stable URL
//! path and tracks the active node for breadcrumbs and deep links.
//!
//! The goal is to keep all substantive logic here so it is fully testable and
//! reusable from multiple frontends (CLI, UI shell, etc.).

pub mod model;
pub mod tree;
pub mod routing;
pub mod compose;
pub mod session;
pub mod project;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
