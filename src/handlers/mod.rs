//! HTTP handlers: generic record CRUD plus owner lookups by alternate key.

pub mod entity;
pub mod owner;
pub use entity::*;
pub use owner::*;
