pub mod menu;
pub mod project;
pub mod util;

pub use menu::*;
pub use project::*;
pub use util::*;
