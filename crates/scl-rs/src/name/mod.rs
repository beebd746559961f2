// crates/scl-rs/src/name/mod.rs

//! Dotted data names used to address the instance and template trees.

mod data_attribute;
mod data_object;
mod path;

pub use data_attribute::DaTypeName;
pub use data_object::DoTypeName;
pub use path::{PathName, is_valid_segment};
