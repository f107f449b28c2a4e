//! Runtime configuration, built once at startup and passed down explicitly.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
