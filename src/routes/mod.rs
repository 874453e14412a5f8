//! HTTP surface, one module per resource.

pub mod common;
pub mod items;
pub mod users;

pub use common::root_routes;
pub use items::item_routes;
pub use users::user_routes;
