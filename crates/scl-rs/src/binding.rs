// crates/scl-rs/src/binding.rs

//! Source addressing of input references (`<ExtRef>`).

use crate::constants::LN_CLASS_LLN0;
use crate::name::{DaTypeName, DoTypeName, PathName};
use crate::types::ServiceType;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::hash::{Hash, Hasher};

/// An `<ExtRef>` as read from a document. Absent attributes are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtRef {
    pub ied_name: Option<String>,
    pub ld_inst: Option<String>,
    pub prefix: Option<String>,
    pub ln_class: Vec<String>,
    pub ln_inst: Option<String>,
    pub do_name: Option<String>,
    pub da_name: Option<String>,
    pub service_type: Option<ServiceType>,
}

/// The data an input reference is bound to: the source logical node and the
/// DO/DA inside it.
///
/// `ln_type` is filled in once the source node is found and is ignored by
/// equality and hashing.
#[derive(Debug, Clone, Default)]
pub struct ExtRefBindingInfo {
    pub ied_name: Option<String>,
    pub ld_inst: Option<String>,
    pub prefix: Option<String>,
    pub ln_class: Option<String>,
    pub ln_inst: Option<String>,
    pub ln_type: Option<String>,
    pub do_name: Option<DoTypeName>,
    pub da_name: Option<DaTypeName>,
    pub service_type: Option<ServiceType>,
}

impl ExtRefBindingInfo {
    /// Copies the source address of `ext_ref`. Only the first `lnClass` is kept
    /// and the DO/DA names are split but not checked.
    pub fn from_ext_ref(ext_ref: &ExtRef) -> Self {
        Self {
            ied_name: ext_ref.ied_name.clone(),
            ld_inst: ext_ref.ld_inst.clone(),
            prefix: ext_ref.prefix.clone(),
            ln_class: ext_ref.ln_class.first().cloned(),
            ln_inst: ext_ref.ln_inst.clone(),
            ln_type: None,
            do_name: ext_ref
                .do_name
                .as_deref()
                .map(|s| DoTypeName::new(PathName::split(s))),
            da_name: ext_ref
                .da_name
                .as_deref()
                .map(|s| DaTypeName::new(PathName::split(s))),
            service_type: ext_ref.service_type,
        }
    }

    /// A binding is usable when it names an IED, an LDevice and an LN class,
    /// an `lnInst` unless the class is `LLN0`, and a well formed DO if any.
    pub fn is_valid(&self) -> bool {
        if let Some(do_name) = &self.do_name {
            if do_name.is_defined() && !do_name.path().is_well_formed() {
                return false;
            }
        }
        let ln_class = self.ln_class.as_deref();
        !is_blank(self.ied_name.as_deref())
            && !is_blank(self.ld_inst.as_deref())
            && !is_blank(ln_class)
            && (ln_class == Some(LN_CLASS_LLN0) || !is_blank(self.ln_inst.as_deref()))
    }

    /// Returns `true` if `ext_ref` points at the same source logical node.
    ///
    /// A service type is only compared when `ext_ref` declares one.
    pub fn is_wrapped_in(&self, ext_ref: &ExtRef) -> bool {
        self.ied_name == ext_ref.ied_name
            && self.ld_inst == ext_ref.ld_inst
            && self.prefix == ext_ref.prefix
            && self.ln_inst == ext_ref.ln_inst
            && self
                .ln_class
                .as_ref()
                .is_some_and(|c| ext_ref.ln_class.contains(c))
            && (ext_ref.service_type.is_none() || self.service_type == ext_ref.service_type)
    }

    /// Returns `true` when no address field is set.
    pub fn is_null(&self) -> bool {
        self.ied_name.is_none()
            && self.ld_inst.is_none()
            && self.prefix.is_none()
            && self.ln_class.is_none()
            && self.ln_inst.is_none()
            && self.do_name.is_none()
            && self.da_name.is_none()
            && self.service_type.is_none()
    }
}

fn is_blank(s: Option<&str>) -> bool {
    s.is_none_or(|s| s.trim().is_empty())
}

impl PartialEq for ExtRefBindingInfo {
    fn eq(&self, other: &Self) -> bool {
        self.ied_name == other.ied_name
            && self.ld_inst == other.ld_inst
            && self.prefix == other.prefix
            && self.ln_class == other.ln_class
            && self.ln_inst == other.ln_inst
            && self.do_name == other.do_name
            && self.da_name == other.da_name
            && self.service_type == other.service_type
    }
}

impl Eq for ExtRefBindingInfo {}

impl Hash for ExtRefBindingInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ied_name.hash(state);
        self.ld_inst.hash(state);
        self.prefix.hash(state);
        self.ln_class.hash(state);
        self.ln_inst.hash(state);
        self.do_name.hash(state);
        self.da_name.hash(state);
        self.service_type.hash(state);
    }
}

impl fmt::Display for ExtRefBindingInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = |s: &Option<String>| s.clone().unwrap_or_default();
        write!(
            f,
            "{}/{} {}{}{}",
            opt(&self.ied_name),
            opt(&self.ld_inst),
            opt(&self.prefix),
            opt(&self.ln_class),
            opt(&self.ln_inst)
        )?;
        if let Some(do_name) = &self.do_name {
            write!(f, ".{}", do_name)?;
        }
        if let Some(da_name) = &self.da_name {
            write!(f, ".{}", da_name)?;
        }
        if let Some(service_type) = self.service_type {
            write!(f, " ({})", service_type)?;
        }
        Ok(())
    }
}
