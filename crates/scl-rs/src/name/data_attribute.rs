// crates/scl-rs/src/name/data_attribute.rs

use super::PathName;
use crate::constants::DEFAULT_SGROUP;
use crate::error::SclError;
use crate::types::{BasicType, FunctionalConstraint, Val};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;
use core::hash::{Hash, Hasher};

/// Attribute-side name (`da.bda1.bda2`) together with the declaration it was
/// resolved against and the values recorded for it, keyed by substitution group.
///
/// Two descriptors are equal when their path, functional constraint, basic
/// type and type reference are equal. The importable flag and the stored
/// values are state and do not take part in the comparison.
#[derive(Debug, Clone, Default)]
pub struct DaTypeName {
    path: PathName,
    fc: Option<FunctionalConstraint>,
    b_type: Option<BasicType>,
    type_ref: Option<String>,
    val_import: bool,
    values: BTreeMap<u32, String>,
}

impl DaTypeName {
    pub fn new(path: PathName) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Parses a dotted DA reference (`da.bda1.bda2`).
    pub fn parse(dotted: &str) -> Result<Self, SclError> {
        PathName::parse(dotted).map(Self::new)
    }

    pub fn with_fc(mut self, fc: FunctionalConstraint) -> Self {
        self.fc = Some(fc);
        self
    }

    pub fn with_b_type(mut self, b_type: BasicType) -> Self {
        self.b_type = Some(b_type);
        self
    }

    pub fn with_type_ref(mut self, type_ref: impl Into<String>) -> Self {
        self.type_ref = Some(type_ref.into());
        self
    }

    pub fn with_val_import(mut self, val_import: bool) -> Self {
        self.val_import = val_import;
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

    pub fn fc(&self) -> Option<FunctionalConstraint> {
        self.fc
    }

    pub fn b_type(&self) -> Option<BasicType> {
        self.b_type
    }

    pub fn type_ref(&self) -> Option<&str> {
        self.type_ref.as_deref()
    }

    pub fn is_val_import(&self) -> bool {
        self.val_import
    }

    /// Values keyed by substitution group; group `0` is the ungrouped value.
    pub fn values(&self) -> &BTreeMap<u32, String> {
        &self.values
    }

    /// Replaces every stored value.
    pub fn set_values(&mut self, values: BTreeMap<u32, String>) {
        self.values = values;
    }

    /// Returns the value held by the lowest substitution group, if any.
    pub fn first_value(&self) -> Option<&str> {
        self.values.values().next().map(String::as_str)
    }

    /// An attribute may be written from an imported configuration only when it
    /// is flagged importable and its functional constraint is a configurable one.
    pub fn is_updatable(&self) -> bool {
        use FunctionalConstraint::*;
        self.val_import && matches!(self.fc, Some(Cf | Dc | Sg | Sp | St | Se))
    }

    /// Records `value` under `s_group`, `None` meaning the ungrouped value.
    pub fn add_value(&mut self, s_group: Option<u32>, value: impl Into<String>) {
        self.values
            .insert(s_group.unwrap_or(DEFAULT_SGROUP), value.into());
    }

    /// Records a list of `<Val>` entries.
    ///
    /// A single entry is always stored as the ungrouped value, whatever group
    /// it carries. With several entries each one must carry its own group.
    pub fn add_values(&mut self, vals: &[Val]) -> Result<(), SclError> {
        if let [single] = vals {
            self.values.insert(DEFAULT_SGROUP, single.value.clone());
            return Ok(());
        }
        if vals.iter().any(|v| v.s_group.is_none()) {
            return Err(SclError::MissingSettingGroup {
                path: self.path.to_string(),
            });
        }
        for val in vals {
            self.add_value(val.s_group, val.value.clone());
        }
        Ok(())
    }

    /// Takes over the declaration of `other` when this name is defined.
    ///
    /// Values already recorded are kept; groups only `other` knows are added.
    pub fn merge(&mut self, other: &DaTypeName) {
        if !self.is_defined() {
            return;
        }
        self.fc = other.fc;
        self.b_type = other.b_type;
        self.type_ref = other.type_ref.clone();
        self.val_import = other.val_import;
        for (s_group, value) in &other.values {
            self.values
                .entry(*s_group)
                .or_insert_with(|| value.clone());
        }
    }
}

impl PartialEq for DaTypeName {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.fc == other.fc
            && self.b_type == other.b_type
            && self.type_ref == other.type_ref
    }
}

impl Eq for DaTypeName {}

impl Hash for DaTypeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
        self.fc.hash(state);
        self.b_type.hash(state);
        self.type_ref.hash(state);
    }
}

impl fmt::Display for DaTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.path, f)
    }
}
