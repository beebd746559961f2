// crates/scl-rs/src/name/data_object.rs

use super::PathName;
use crate::error::SclError;
use crate::types::Cdc;
use alloc::string::String;
use core::fmt;

/// Object-side name: a DOI followed by its nested SDI names, optionally tagged
/// with the common data class of the DO type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DoTypeName {
    path: PathName,
    cdc: Option<Cdc>,
}

impl DoTypeName {
    pub fn new(path: PathName) -> Self {
        Self { path, cdc: None }
    }

    /// Parses a dotted DO reference (`do.sdo1.sdo2`).
    pub fn parse(dotted: &str) -> Result<Self, SclError> {
        PathName::parse(dotted).map(Self::new)
    }

    pub fn with_cdc(mut self, cdc: Cdc) -> Self {
        self.cdc = Some(cdc);
        self
    }

    pub fn path(&self) -> &PathName {
        &self.path
    }

    pub fn name(&self) -> &str {
        self.path.name()
    }

    pub fn struct_names(&self) -> &[String] {
        self.path.struct_names()
    }

    pub fn is_defined(&self) -> bool {
        self.path.is_defined()
    }

    pub fn cdc(&self) -> Option<Cdc> {
        self.cdc
    }

    pub fn set_cdc(&mut self, cdc: Option<Cdc>) {
        self.cdc = cdc;
    }
}

impl fmt::Display for DoTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path, f)
    }
}
