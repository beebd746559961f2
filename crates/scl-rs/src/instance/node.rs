// crates/scl-rs/src/instance/node.rs

use super::{DataNode, NodeHandle};
use crate::constants::DEFAULT_SGROUP;
use crate::error::SclError;
use crate::log::scl_trace;
use crate::types::{Private, Val};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// Result of a deepest-match descent.
///
/// `consumed` is the index of the last name that resolved, or `None` when the
/// first name already failed. `node` is the node reached by that last name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeepestMatch {
    pub node: Option<NodeHandle>,
    pub consumed: Option<usize>,
}

impl DeepestMatch {
    /// Returns `true` if every name of a path of `len` segments resolved.
    pub fn is_complete(&self, len: usize) -> bool {
        len > 0 && self.consumed == Some(len - 1)
    }
}

/// Nodes that hold structured children (DOI and SDI).
pub trait ObjectNode {
    /// Looks up a direct SDI child by name.
    fn structured_child(&self, arena: &[DataNode], name: &str) -> Result<NodeHandle, SclError>;

    /// Looks up a direct DAI child by name.
    fn attribute_child(&self, arena: &[DataNode], name: &str) -> Result<NodeHandle, SclError>;

    /// Descends through `names[start..]`, one level per name, and stops at the
    /// first name that does not resolve.
    ///
    /// Every name but the last must resolve to an SDI. With `must_be_leaf` the
    /// last name must resolve to a DAI, otherwise to an SDI. The first child
    /// found at each level is kept; there is no backtracking.
    fn find_deepest_match(
        &self,
        arena: &[DataNode],
        names: &[String],
        start: usize,
        must_be_leaf: bool,
    ) -> DeepestMatch;
}

/// Nodes that hold or contain attribute values (DAI and SDI).
pub trait AttributeNode {
    fn attribute_name(&self) -> &str;

    /// Returns `true` if the node stores values itself.
    fn holds_value(&self) -> bool;

    /// `None` when `valImport` was never set on this instance.
    fn is_importable(&self) -> Option<bool>;

    /// Stored values keyed by substitution group, ungrouped values under `0`.
    fn values(&self) -> BTreeMap<u32, String>;

    /// Writes one value, `None` or `Some(0)` addressing the ungrouped value.
    fn update_value(&mut self, s_group: Option<u32>, value: &str) -> Result<(), SclError>;

    /// Writes several values at once.
    ///
    /// When the map carries more than one entry and one of them is group `0`,
    /// only the group `0` entry is written. The other groups are dropped.
    fn update_values(&mut self, values: &BTreeMap<u32, String>) -> Result<(), SclError> {
        if values.len() > 1 {
            if let Some(value) = values.get(&DEFAULT_SGROUP) {
                return self.update_value(Some(DEFAULT_SGROUP), value);
            }
        }
        for (s_group, value) in values {
            self.update_value(Some(*s_group), value)?;
        }
        Ok(())
    }
}

/// A DOI or SDI: a named node whose children live in the owning arena.
#[derive(Debug, Clone, PartialEq)]
pub struct ContainerNode {
    pub(super) name: String,
    pub(super) parent: Option<NodeHandle>,
    pub(super) children: Vec<NodeHandle>,
    pub(super) val_import: Option<bool>,
    pub(super) privates: Vec<Private>,
}

impl ContainerNode {
    pub(super) fn new(name: &str, parent: Option<NodeHandle>) -> Self {
        Self {
            name: name.to_string(),
            parent,
            children: Vec::new(),
            val_import: None,
            privates: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    pub fn children(&self) -> &[NodeHandle] {
        &self.children
    }

    pub fn privates(&self) -> &[Private] {
        &self.privates
    }

    fn find_child<F>(&self, arena: &[DataNode], name: &str, accept: F) -> Option<NodeHandle>
    where
        F: Fn(&DataNode) -> bool,
    {
        self.children.iter().copied().find(|h| {
            arena
                .get(h.index())
                .is_some_and(|node| accept(node) && node.name() == name)
        })
    }

    fn no_such_child(&self, name: &str) -> SclError {
        SclError::NoSuchChild {
            parent: self.name.clone(),
            name: name.to_string(),
        }
    }
}

impl ObjectNode for ContainerNode {
    fn structured_child(&self, arena: &[DataNode], name: &str) -> Result<NodeHandle, SclError> {
        self.find_child(arena, name, |n| matches!(n, DataNode::Sdi(_)))
            .ok_or_else(|| self.no_such_child(name))
    }

    fn attribute_child(&self, arena: &[DataNode], name: &str) -> Result<NodeHandle, SclError> {
        self.find_child(arena, name, |n| matches!(n, DataNode::Dai(_)))
            .ok_or_else(|| self.no_such_child(name))
    }

    fn find_deepest_match(
        &self,
        arena: &[DataNode],
        names: &[String],
        start: usize,
        must_be_leaf: bool,
    ) -> DeepestMatch {
        let mut found = DeepestMatch::default();
        let mut current = self;
        let last = names.len().saturating_sub(1);

        for (i, name) in names.iter().enumerate().skip(start) {
            let step = if must_be_leaf && i == last {
                current.attribute_child(arena, name)
            } else {
                current.structured_child(arena, name)
            };
            let Ok(handle) = step else {
                scl_trace!("'{}' has no child '{}', stopping at index {}", current.name, name, i);
                break;
            };
            found = DeepestMatch {
                node: Some(handle),
                consumed: Some(i),
            };
            match arena.get(handle.index()) {
                Some(DataNode::Doi(c)) | Some(DataNode::Sdi(c)) => current = c,
                // A DAI ends the walk.
                _ => break,
            }
        }
        found
    }
}

impl AttributeNode for ContainerNode {
    fn attribute_name(&self) -> &str {
        &self.name
    }

    fn holds_value(&self) -> bool {
        false
    }

    fn is_importable(&self) -> Option<bool> {
        self.val_import
    }

    fn values(&self) -> BTreeMap<u32, String> {
        BTreeMap::new()
    }

    fn update_value(&mut self, _s_group: Option<u32>, _value: &str) -> Result<(), SclError> {
        Err(SclError::NotUpdatable {
            name: self.name.clone(),
            reason: "structured attribute holds no value",
        })
    }
}

/// A DAI: the leaf holding configured values.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafNode {
    pub(super) name: String,
    pub(super) parent: Option<NodeHandle>,
    pub(super) val_import: Option<bool>,
    pub(super) vals: Vec<Val>,
    pub(super) privates: Vec<Private>,
}

impl LeafNode {
    pub(super) fn new(name: &str, parent: Option<NodeHandle>) -> Self {
        Self {
            name: name.to_string(),
            parent,
            val_import: None,
            vals: Vec::new(),
            privates: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeHandle> {
        self.parent
    }

    /// The raw `<Val>` entries in document order.
    pub fn vals(&self) -> &[Val] {
        &self.vals
    }

    pub fn privates(&self) -> &[Private] {
        &self.privates
    }

    pub fn set_val_import(&mut self, val_import: bool) {
        self.val_import = Some(val_import);
    }
}

impl AttributeNode for LeafNode {
    fn attribute_name(&self) -> &str {
        &self.name
    }

    fn holds_value(&self) -> bool {
        true
    }

    fn is_importable(&self) -> Option<bool> {
        self.val_import
    }

    fn values(&self) -> BTreeMap<u32, String> {
        let mut values = BTreeMap::new();
        for val in &self.vals {
            values
                .entry(val.s_group.unwrap_or(DEFAULT_SGROUP))
                .or_insert_with(|| val.value.clone());
        }
        values
    }

    fn update_value(&mut self, s_group: Option<u32>, value: &str) -> Result<(), SclError> {
        if self.val_import == Some(false) {
            return Err(SclError::NotUpdatable {
                name: self.name.clone(),
                reason: "valImport(false)",
            });
        }

        match s_group.filter(|g| *g != DEFAULT_SGROUP) {
            Some(group) => {
                match self.vals.iter_mut().find(|v| v.s_group == Some(group)) {
                    Some(val) => val.value = value.to_string(),
                    None => self.vals.push(Val::grouped(group, value)),
                }
            }
            None => {
                let untagged = self
                    .vals
                    .iter()
                    .position(|v| v.s_group.is_none_or(|g| g == DEFAULT_SGROUP));
                match untagged.or_else(|| (!self.vals.is_empty()).then_some(0)) {
                    Some(i) => self.vals[i].value = value.to_string(),
                    None => self.vals.push(Val::new(value)),
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn leaf(vals: Vec<Val>) -> LeafNode {
        let mut node = LeafNode::new("setVal", None);
        node.vals = vals;
        node
    }

    #[test]
    fn test_update_grouped_value_overwrites_or_appends() {
        let mut node = leaf(vec![Val::grouped(1, "a"), Val::grouped(2, "b")]);
        node.update_value(Some(2), "B").unwrap();
        node.update_value(Some(3), "C").unwrap();
        assert_eq!(
            node.vals(),
            &[
                Val::grouped(1, "a"),
                Val::grouped(2, "B"),
                Val::grouped(3, "C")
            ]
        );
    }

    #[test]
    fn test_update_ungrouped_prefers_untagged_entry() {
        let mut node = leaf(vec![Val::grouped(1, "a"), Val::new("x")]);
        node.update_value(None, "y").unwrap();
        assert_eq!(node.vals(), &[Val::grouped(1, "a"), Val::new("y")]);

        // Group 0 addresses the same entry.
        node.update_value(Some(0), "z").unwrap();
        assert_eq!(node.vals(), &[Val::grouped(1, "a"), Val::new("z")]);
    }

    #[test]
    fn test_update_ungrouped_falls_back_to_first_entry() {
        let mut node = leaf(vec![Val::grouped(4, "a"), Val::grouped(5, "b")]);
        node.update_value(None, "c").unwrap();
        assert_eq!(node.vals(), &[Val::grouped(4, "c"), Val::grouped(5, "b")]);
    }

    #[test]
    fn test_update_ungrouped_appends_on_empty_leaf() {
        let mut node = leaf(Vec::new());
        node.update_value(None, "7.0").unwrap();
        assert_eq!(node.vals(), &[Val::new("7.0")]);
    }

    #[test]
    fn test_update_refused_when_not_importable() {
        let mut node = leaf(vec![Val::new("1")]);
        node.set_val_import(false);
        let err = node.update_value(None, "2").unwrap_err();
        assert!(matches!(err, SclError::NotUpdatable { .. }));
        assert_eq!(node.vals(), &[Val::new("1")]);

        node.set_val_import(true);
        node.update_value(None, "2").unwrap();
        assert_eq!(node.is_importable(), Some(true));
    }

    #[test]
    fn test_update_values_collapses_to_default_group() {
        let mut node = leaf(vec![Val::grouped(1, "a")]);
        let mut values = BTreeMap::new();
        values.insert(0, "zero".to_string());
        values.insert(2, "two".to_string());
        node.update_values(&values).unwrap();
        // Only the group 0 entry was written, onto the first stored value.
        assert_eq!(node.vals(), &[Val::grouped(1, "zero")]);
    }

    #[test]
    fn test_update_values_applies_every_group() {
        let mut node = leaf(Vec::new());
        let mut values = BTreeMap::new();
        values.insert(1, "one".to_string());
        values.insert(2, "two".to_string());
        node.update_values(&values).unwrap();
        assert_eq!(node.values(), values);
    }

    #[test]
    fn test_values_normalises_missing_group() {
        let node = leaf(vec![Val::new("a"), Val::grouped(3, "c")]);
        let values = node.values();
        assert_eq!(values.get(&0).map(String::as_str), Some("a"));
        assert_eq!(values.get(&3).map(String::as_str), Some("c"));
        assert_eq!(node.is_importable(), None);
    }

    #[test]
    fn test_container_refuses_update() {
        let mut node = ContainerNode::new("setMag", None);
        assert!(!node.holds_value());
        assert_eq!(
            node.update_value(None, "1"),
            Err(SclError::NotUpdatable {
                name: "setMag".to_string(),
                reason: "structured attribute holds no value",
            })
        );
    }

    #[test]
    fn test_deepest_match_completeness() {
        let m = DeepestMatch {
            node: None,
            consumed: Some(1),
        };
        assert!(m.is_complete(2));
        assert!(!m.is_complete(3));
        assert!(!DeepestMatch::default().is_complete(1));
        assert!(!DeepestMatch::default().is_complete(0));
    }
}
