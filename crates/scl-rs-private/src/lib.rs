// src/lib.rs

#![cfg_attr(not(test), no_std)]
#![doc = "Reads and writes CoMPAS extension blocks (`<Private>`) of SCL files."]
#![doc = ""]
#![doc = "Each block carries a `type` tag selecting one of a fixed set of element"]
#![doc = "models. This `no_std + alloc` library decodes and encodes them with"]
#![doc = "`quick-xml` and `serde`:"]
#![doc = "- `get_compas_privates` / `get_compas_private`: decoding blocks of one kind."]
#![doc = "- `remove_privates`: dropping blocks of one kind."]
#![doc = "- `create_private`: encoding an element into a new block."]

extern crate alloc;

// --- Crate Modules ---

mod error;
mod kind;
pub mod model;
mod service;

// --- Public API Re-exports ---

pub use error::PrivateError;
pub use kind::PrivateKind;
pub use service::{
    CompasPrivate, create_private, get_compas_icd_header, get_compas_private, get_compas_privates, remove_privates,
};
