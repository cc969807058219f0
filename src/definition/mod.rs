pub mod lowering;
pub mod merge;
pub mod model;

pub use lowering::{generate, map_type_token};
pub use merge::{merge, populate_view_visibility};
pub use model::*;
