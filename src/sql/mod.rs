//! Safe SQL builder: identifiers from static table descriptions only, values as parameters.

mod builder;
pub use builder::*;
