//! Data access: create and get-by-id per entity, nothing more.

pub mod item;
pub mod user;
