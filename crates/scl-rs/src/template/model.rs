// crates/scl-rs/src/template/model.rs

use crate::types::{BasicType, Cdc, FunctionalConstraint, Val};
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// `<LNodeType>`: the data objects a logical node class exposes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LNodeType {
    pub id: String,
    pub ln_class: String,
    pub data_objects: Vec<DoDecl>,
}

/// `<DO>` or `<SDO>`: a named reference to a `DOType`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoDecl {
    pub name: String,
    pub type_ref: String,
}

impl DoDecl {
    pub fn new(name: &str, type_ref: &str) -> Self {
        Self {
            name: name.to_string(),
            type_ref: type_ref.to_string(),
        }
    }
}

/// `<DOType>`.
#[derive(Debug, Clone, PartialEq)]
pub struct DoType {
    pub id: String,
    pub cdc: Cdc,
    pub sdos: Vec<DoDecl>,
    pub das: Vec<DaDecl>,
}

/// `<DA>` inside a `DOType`.
#[derive(Debug, Clone, PartialEq)]
pub struct DaDecl {
    pub name: String,
    pub fc: FunctionalConstraint,
    pub b_type: BasicType,
    /// `DAType` id for `Struct`, `EnumType` id for `Enum`.
    pub type_ref: Option<String>,
    pub val_import: bool,
    /// Default values declared in the template.
    pub values: Vec<Val>,
}

impl DaDecl {
    pub fn new(name: &str, fc: FunctionalConstraint, b_type: BasicType) -> Self {
        Self {
            name: name.to_string(),
            fc,
            b_type,
            type_ref: None,
            val_import: false,
            values: Vec::new(),
        }
    }

    pub fn with_type_ref(mut self, type_ref: &str) -> Self {
        self.type_ref = Some(type_ref.to_string());
        self
    }

    pub fn with_val_import(mut self, val_import: bool) -> Self {
        self.val_import = val_import;
        self
    }

    pub fn with_value(mut self, val: Val) -> Self {
        self.values.push(val);
        self
    }
}

/// `<DAType>`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DaType {
    pub id: String,
    pub bdas: Vec<BdaDecl>,
}

/// `<BDA>` inside a `DAType`.
#[derive(Debug, Clone, PartialEq)]
pub struct BdaDecl {
    pub name: String,
    pub b_type: BasicType,
    pub type_ref: Option<String>,
    pub values: Vec<Val>,
}

impl BdaDecl {
    pub fn new(name: &str, b_type: BasicType) -> Self {
        Self {
            name: name.to_string(),
            b_type,
            type_ref: None,
            values: Vec::new(),
        }
    }

    pub fn with_type_ref(mut self, type_ref: &str) -> Self {
        self.type_ref = Some(type_ref.to_string());
        self
    }

    pub fn with_value(mut self, val: Val) -> Self {
        self.values.push(val);
        self
    }
}
