#![cfg_attr(not(any(feature = "std", test)), no_std)]

// 'alloc' is used for names, stored values and the node arena.
extern crate alloc;

// --- Foundation Modules ---
pub mod constants;
pub mod error;
mod log;
pub mod types;

// --- Names and Descriptors ---
pub mod name;

// --- Trees ---
pub mod instance;
pub mod template;

// --- Resolution and Validation ---
pub mod binding;
pub mod tracker;
pub mod validator;

// --- Top-level Exports ---
pub use binding::{ExtRef, ExtRefBindingInfo};
pub use error::SclError;
pub use instance::{AttributeNode, DataNode, LogicalNode, NodeHandle, ObjectNode};
pub use name::{DaTypeName, DoTypeName, PathName};
pub use template::DataTypeTemplates;
pub use tracker::{DaiTracker, MatchResult, Resolution};
pub use types::{BasicType, Cdc, FunctionalConstraint, Private, ServiceType, Val};
pub use validator::validate_bounded;
