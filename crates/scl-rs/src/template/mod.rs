// crates/scl-rs/src/template/mod.rs

//! Template tree (`<DataTypeTemplates>`): the declared shape of logical nodes,
//! read-only for the resolver and the validator.

mod model;

pub use model::{BdaDecl, DaDecl, DaType, DoDecl, DoType, LNodeType};

use crate::constants::MAX_STRUCT_DEPTH;
use crate::error::SclError;
use crate::log::scl_trace;
use crate::name::{DaTypeName, DoTypeName, PathName};
use crate::types::{BasicType, Cdc, FunctionalConstraint, Val};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// All type declarations of a document, keyed by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataTypeTemplates {
    lnode_types: BTreeMap<String, LNodeType>,
    do_types: BTreeMap<String, DoType>,
    da_types: BTreeMap<String, DaType>,
}

impl DataTypeTemplates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an `LNodeType`, replacing any previous one with the same id.
    pub fn add_lnode_type(&mut self, lnode_type: LNodeType) {
        self.lnode_types.insert(lnode_type.id.clone(), lnode_type);
    }

    pub fn add_do_type(&mut self, do_type: DoType) {
        self.do_types.insert(do_type.id.clone(), do_type);
    }

    pub fn add_da_type(&mut self, da_type: DaType) {
        self.da_types.insert(da_type.id.clone(), da_type);
    }

    pub fn lnode_type(&self, id: &str) -> Option<&LNodeType> {
        self.lnode_types.get(id)
    }

    pub fn do_type(&self, id: &str) -> Option<&DoType> {
        self.do_types.get(id)
    }

    pub fn da_type(&self, id: &str) -> Option<&DaType> {
        self.da_types.get(id)
    }

    /// Common data class of a `DOType`.
    pub fn declared_cdc(&self, do_type_ref: &str) -> Option<Cdc> {
        self.do_type(do_type_ref).map(|t| t.cdc)
    }

    /// Basic type of the BDA `bda_name` inside the `DAType` `da_type_ref`.
    pub fn declared_basic_type(&self, da_type_ref: &str, bda_name: &str) -> Option<BasicType> {
        self.da_type(da_type_ref)?
            .bdas
            .iter()
            .find(|b| b.name == bda_name)
            .map(|b| b.b_type)
    }

    /// Follows `do_name` (`do.sdo1.sdo2`) from the `LNodeType` `ln_type` down to
    /// the `DOType` of its last segment.
    pub fn resolve_do(&self, ln_type: &str, do_name: &DoTypeName) -> Result<&DoType, SclError> {
        let lnode_type = self
            .lnode_type(ln_type)
            .ok_or_else(|| SclError::UnknownLNodeType(ln_type.to_string()))?;

        let decl = lnode_type
            .data_objects
            .iter()
            .find(|d| d.name == do_name.name())
            .ok_or_else(|| SclError::NoSuchChild {
                parent: ln_type.to_string(),
                name: do_name.name().to_string(),
            })?;
        let mut do_type = self.referenced_do_type(decl)?;

        for sdo_name in do_name.struct_names() {
            let decl = do_type
                .sdos
                .iter()
                .find(|d| &d.name == sdo_name)
                .ok_or_else(|| SclError::NoSuchChild {
                    parent: do_type.id.clone(),
                    name: sdo_name.clone(),
                })?;
            do_type = self.referenced_do_type(decl)?;
        }
        Ok(do_type)
    }

    /// Lists every leaf attribute declared directly under `do_name`, structured
    /// DAs being flattened into their BDA leaves (`minVal.f`, `minVal.i`).
    ///
    /// Each descriptor carries the DA's functional constraint and importable
    /// flag, the leaf's basic type and type reference, and the template default
    /// values.
    pub fn leaf_attributes(&self, ln_type: &str, do_name: &DoTypeName) -> Result<Vec<DaTypeName>, SclError> {
        let do_type = self.resolve_do(ln_type, do_name)?;
        let mut pending = Vec::new();
        for da in &do_type.das {
            self.da_leaves(da, &mut pending)?;
        }
        let leaves = pending
            .into_iter()
            .map(|(name, defaults)| with_defaults(name, defaults))
            .collect::<Result<Vec<_>, _>>()?;
        scl_trace!("{} leaves under {}/{}", leaves.len(), ln_type, do_name);
        Ok(leaves)
    }

    /// Returns the first leaf under `do_name` whose DA is named `leaf_name`.
    pub fn sibling_leaf(
        &self,
        ln_type: &str,
        do_name: &DoTypeName,
        leaf_name: &str,
    ) -> Result<Option<DaTypeName>, SclError> {
        let do_type = self.resolve_do(ln_type, do_name)?;
        self.first_leaf(do_type, leaf_name)
    }

    /// Returns the first leaf of the DA `da_name` of `do_type`.
    ///
    /// Only that DA is flattened and only the returned leaf gets its template
    /// defaults, so other declarations of the DO are never looked at.
    pub fn first_leaf(&self, do_type: &DoType, da_name: &str) -> Result<Option<DaTypeName>, SclError> {
        let Some(da) = do_type.das.iter().find(|da| da.name == da_name) else {
            return Ok(None);
        };
        let mut pending = Vec::new();
        self.da_leaves(da, &mut pending)?;
        pending
            .into_iter()
            .next()
            .map(|(name, defaults)| with_defaults(name, defaults))
            .transpose()
    }

    /// Flattens one DA into its leaves, each paired with its template defaults.
    fn da_leaves<'t>(&'t self, da: &'t DaDecl, leaves: &mut Vec<(DaTypeName, &'t [Val])>) -> Result<(), SclError> {
        let path = PathName::new(da.name.as_str(), Vec::new());
        if da.b_type == BasicType::Struct {
            let leaf = LeafTemplate {
                fc: da.fc,
                val_import: da.val_import,
            };
            let type_ref = struct_type_ref(&path, da.type_ref.as_deref())?;
            return self.flatten_struct(&path, type_ref, &leaf, 1, leaves);
        }
        let mut name = DaTypeName::new(path)
            .with_fc(da.fc)
            .with_b_type(da.b_type)
            .with_val_import(da.val_import);
        if let Some(type_ref) = &da.type_ref {
            name = name.with_type_ref(type_ref.as_str());
        }
        leaves.push((name, da.values.as_slice()));
        Ok(())
    }

    fn referenced_do_type(&self, decl: &DoDecl) -> Result<&DoType, SclError> {
        self.do_type(&decl.type_ref).ok_or_else(|| {
            SclError::InconsistentTemplate(format!(
                "DO({}) references unknown DOType({})",
                decl.name, decl.type_ref
            ))
        })
    }

    fn flatten_struct<'t>(
        &'t self,
        path: &PathName,
        da_type_ref: &str,
        leaf: &LeafTemplate,
        depth: usize,
        leaves: &mut Vec<(DaTypeName, &'t [Val])>,
    ) -> Result<(), SclError> {
        if depth > MAX_STRUCT_DEPTH {
            return Err(SclError::InconsistentTemplate(format!(
                "DA({}) nests DATypes deeper than {} levels",
                path, MAX_STRUCT_DEPTH
            )));
        }
        let da_type = self.da_type(da_type_ref).ok_or_else(|| {
            SclError::InconsistentTemplate(format!(
                "DA({}) references unknown DAType({})",
                path, da_type_ref
            ))
        })?;

        for bda in &da_type.bdas {
            let path = path.child(bda.name.as_str());
            if bda.b_type == BasicType::Struct {
                let type_ref = struct_type_ref(&path, bda.type_ref.as_deref())?;
                self.flatten_struct(&path, type_ref, leaf, depth + 1, leaves)?;
                continue;
            }
            let mut name = DaTypeName::new(path)
                .with_fc(leaf.fc)
                .with_b_type(bda.b_type)
                .with_val_import(leaf.val_import);
            if let Some(type_ref) = &bda.type_ref {
                name = name.with_type_ref(type_ref.as_str());
            }
            leaves.push((name, bda.values.as_slice()));
        }
        Ok(())
    }
}

/// What a BDA leaf inherits from the DA at the top of its structure.
struct LeafTemplate {
    fc: FunctionalConstraint,
    val_import: bool,
}

fn struct_type_ref<'a>(path: &PathName, type_ref: Option<&'a str>) -> Result<&'a str, SclError> {
    type_ref.ok_or_else(|| SclError::InconsistentTemplate(format!("Struct DA({}) has no type", path)))
}

fn with_defaults(mut name: DaTypeName, values: &[Val]) -> Result<DaTypeName, SclError> {
    if !values.is_empty() {
        name.add_values(values)?;
    }
    Ok(name)
}
