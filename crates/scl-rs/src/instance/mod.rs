// crates/scl-rs/src/instance/mod.rs

//! Instance tree of a logical node: the DOI/SDI/DAI hierarchy holding the
//! configured values, stored in an arena owned by [`LogicalNode`].

mod node;

pub use node::{AttributeNode, ContainerNode, DeepestMatch, LeafNode, ObjectNode};

use crate::error::SclError;
use crate::log::{LogMetadata, scl_debug, scl_warn};
use crate::name::{DaTypeName, DoTypeName};
use crate::template::DataTypeTemplates;
use crate::tracker::{DaiTracker, MatchResult};
use crate::types::Private;
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

/// Index of a node in the arena of its [`LogicalNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeHandle(usize);

impl NodeHandle {
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of the instance tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DataNode {
    /// Data object instance, a direct child of the logical node.
    Doi(ContainerNode),
    /// Structured instance: a nested data object or a structured attribute.
    Sdi(ContainerNode),
    /// Leaf attribute instance.
    Dai(LeafNode),
}

impl DataNode {
    pub fn name(&self) -> &str {
        match self {
            Self::Doi(c) | Self::Sdi(c) => c.name(),
            Self::Dai(l) => l.name(),
        }
    }

    pub fn parent(&self) -> Option<NodeHandle> {
        match self {
            Self::Doi(c) | Self::Sdi(c) => c.parent(),
            Self::Dai(l) => l.parent(),
        }
    }

    /// Returns the node as an object container, `None` for a DAI.
    pub fn as_object(&self) -> Option<&ContainerNode> {
        match self {
            Self::Doi(c) | Self::Sdi(c) => Some(c),
            Self::Dai(_) => None,
        }
    }

    /// Returns the node as an attribute, `None` for a DOI.
    pub fn as_attribute(&self) -> Option<&dyn AttributeNode> {
        match self {
            Self::Doi(_) => None,
            Self::Sdi(c) => Some(c),
            Self::Dai(l) => Some(l),
        }
    }

    pub fn as_attribute_mut(&mut self) -> Option<&mut dyn AttributeNode> {
        match self {
            Self::Doi(_) => None,
            Self::Sdi(c) => Some(c),
            Self::Dai(l) => Some(l),
        }
    }

    pub fn as_leaf(&self) -> Option<&LeafNode> {
        match self {
            Self::Dai(l) => Some(l),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Doi(_) => "DOI",
            Self::Sdi(_) => "SDI",
            Self::Dai(_) => "DAI",
        }
    }
}

/// A logical node instance (`<LN>` or `<LN0>`) and the instance tree below it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalNode {
    pub ln_class: String,
    pub inst: String,
    pub prefix: String,
    /// Id of the `LNodeType` describing this node in the template tree.
    pub ln_type: String,
    nodes: Vec<DataNode>,
    dois: Vec<NodeHandle>,
    privates: Vec<Private>,
}

impl LogMetadata for LogicalNode {
    fn meta(&self) -> String {
        format!(
            "ln={}{}{}, lnType={}",
            self.prefix, self.ln_class, self.inst, self.ln_type
        )
    }
}

impl LogicalNode {
    pub fn new(ln_class: &str, inst: &str, ln_type: &str) -> Self {
        Self {
            ln_class: ln_class.to_string(),
            inst: inst.to_string(),
            prefix: String::new(),
            ln_type: ln_type.to_string(),
            nodes: Vec::new(),
            dois: Vec::new(),
            privates: Vec::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// The arena backing the instance tree.
    pub fn nodes(&self) -> &[DataNode] {
        &self.nodes
    }

    pub fn node(&self, handle: NodeHandle) -> Option<&DataNode> {
        self.nodes.get(handle.index())
    }

    pub fn node_mut(&mut self, handle: NodeHandle) -> Option<&mut DataNode> {
        self.nodes.get_mut(handle.index())
    }

    pub fn parent(&self, handle: NodeHandle) -> Option<NodeHandle> {
        self.node(handle).and_then(DataNode::parent)
    }

    pub fn container(&self, handle: NodeHandle) -> Option<&ContainerNode> {
        self.node(handle).and_then(DataNode::as_object)
    }

    pub fn leaf(&self, handle: NodeHandle) -> Option<&LeafNode> {
        self.node(handle).and_then(DataNode::as_leaf)
    }

    pub fn attribute(&self, handle: NodeHandle) -> Option<&dyn AttributeNode> {
        self.node(handle).and_then(DataNode::as_attribute)
    }

    pub fn attribute_mut(&mut self, handle: NodeHandle) -> Option<&mut dyn AttributeNode> {
        self.node_mut(handle).and_then(DataNode::as_attribute_mut)
    }

    pub fn privates(&self) -> &[Private] {
        &self.privates
    }

    /// Looks up a DOI by name.
    pub fn doi(&self, name: &str) -> Result<NodeHandle, SclError> {
        self.dois
            .iter()
            .copied()
            .find(|h| self.node(*h).is_some_and(|n| n.name() == name))
            .ok_or_else(|| SclError::NoSuchChild {
                parent: self.meta(),
                name: name.to_string(),
            })
    }

    /// Returns the DOI named `name`, creating it if needed.
    pub fn add_doi(&mut self, name: &str) -> NodeHandle {
        if let Ok(existing) = self.doi(name) {
            return existing;
        }
        let handle = self.push(DataNode::Doi(ContainerNode::new(name, None)));
        self.dois.push(handle);
        handle
    }

    /// Returns the SDI named `name` under `parent`, creating it if needed.
    pub fn add_sdi(&mut self, parent: NodeHandle, name: &str) -> Result<NodeHandle, SclError> {
        self.add_child(parent, name, |parent| {
            DataNode::Sdi(ContainerNode::new(name, Some(parent)))
        })
    }

    /// Returns the DAI named `name` under `parent`, creating it if needed.
    pub fn add_dai(&mut self, parent: NodeHandle, name: &str) -> Result<NodeHandle, SclError> {
        self.add_child(parent, name, |parent| {
            DataNode::Dai(LeafNode::new(name, Some(parent)))
        })
    }

    /// Sets `valImport` on a DAI or SDI.
    pub fn set_val_import(&mut self, handle: NodeHandle, val_import: bool) -> Result<(), SclError> {
        match self.node_mut(handle) {
            Some(DataNode::Dai(l)) => l.val_import = Some(val_import),
            Some(DataNode::Sdi(c)) => c.val_import = Some(val_import),
            Some(DataNode::Doi(c)) => {
                return Err(SclError::NotUpdatable {
                    name: c.name.clone(),
                    reason: "a DOI carries no valImport",
                });
            }
            None => return Err(self.dangling(handle)),
        }
        Ok(())
    }

    /// Attaches an extension block to a node, or to the logical node itself
    /// when `handle` is `None`.
    pub fn add_private(&mut self, handle: Option<NodeHandle>, private: Private) -> Result<(), SclError> {
        let Some(handle) = handle else {
            self.privates.push(private);
            return Ok(());
        };
        match self.node_mut(handle) {
            Some(DataNode::Doi(c)) | Some(DataNode::Sdi(c)) => c.privates.push(private),
            Some(DataNode::Dai(l)) => l.privates.push(private),
            None => return Err(self.dangling(handle)),
        }
        Ok(())
    }

    /// Rebuilds the dotted path of a node from its parent links
    /// (`origin.sdo1.setMag`).
    pub fn path_of(&self, handle: NodeHandle) -> String {
        let mut segments = Vec::new();
        let mut cursor = Some(handle);
        while let Some(h) = cursor {
            let Some(node) = self.node(h) else { break };
            segments.push(node.name());
            cursor = node.parent();
        }
        segments.reverse();
        segments.join(".")
    }

    /// Values held by the DAI addressed by `do_name` and `da_name`.
    ///
    /// Empty unless the pair resolves fully.
    pub fn dai_values(&self, do_name: &DoTypeName, da_name: &DaTypeName) -> BTreeMap<u32, String> {
        let resolution = DaiTracker::new(self, do_name, da_name).search();
        match (resolution.result, resolution.attribute_node) {
            (MatchResult::FullMatch, Some(handle)) => self
                .attribute(handle)
                .map(|a| a.values())
                .unwrap_or_default(),
            _ => BTreeMap::new(),
        }
    }

    /// Resolves `do_name`/`da_name` and, on a full match, checks the bounds of
    /// the candidate held by `da_name` and writes its values to the DAI.
    ///
    /// Partial and failed resolutions are returned without touching the tree.
    pub fn apply_update(
        &mut self,
        templates: &DataTypeTemplates,
        do_name: &DoTypeName,
        da_name: &DaTypeName,
    ) -> Result<MatchResult, SclError> {
        let tracker = DaiTracker::new(self, do_name, da_name);
        let resolution = tracker.search();
        if resolution.result != MatchResult::FullMatch {
            scl_debug!(*self, "{}.{} not updated: {}", do_name, da_name, resolution.result);
            return Ok(resolution.result);
        }
        tracker.validate_bounded(templates)?;

        let Some(handle) = resolution.attribute_node else {
            return Err(SclError::InconsistentTemplate(format!(
                "{}.{} matched without an attribute node",
                do_name, da_name
            )));
        };
        let meta = self.meta();
        let attribute = self
            .attribute_mut(handle)
            .ok_or_else(|| SclError::InconsistentTemplate(format!("{} is not an attribute", handle)))?;
        if let Err(e) = attribute.update_values(da_name.values()) {
            scl_warn!("[{}] {}.{}: {}", meta, do_name, da_name, e);
            return Err(e);
        }
        Ok(MatchResult::FullMatch)
    }

    fn push(&mut self, node: DataNode) -> NodeHandle {
        let handle = NodeHandle(self.nodes.len());
        self.nodes.push(node);
        handle
    }

    fn add_child<F>(&mut self, parent: NodeHandle, name: &str, build: F) -> Result<NodeHandle, SclError>
    where
        F: FnOnce(NodeHandle) -> DataNode,
    {
        let candidate = build(parent);
        let existing = {
            let container = match self.node(parent) {
                Some(DataNode::Doi(c)) | Some(DataNode::Sdi(c)) => c,
                Some(other) => {
                    return Err(SclError::InconsistentTemplate(format!(
                        "{} '{}' cannot hold children",
                        other.kind(),
                        other.name()
                    )));
                }
                None => return Err(self.dangling(parent)),
            };
            container.children().iter().copied().find(|h| {
                self.node(*h)
                    .is_some_and(|n| n.name() == name && n.kind() == candidate.kind())
            })
        };
        if let Some(existing) = existing {
            return Ok(existing);
        }

        let handle = self.push(candidate);
        if let Some(DataNode::Doi(c)) | Some(DataNode::Sdi(c)) = self.nodes.get_mut(parent.index()) {
            c.children.push(handle);
        }
        Ok(handle)
    }

    fn dangling(&self, handle: NodeHandle) -> SclError {
        SclError::NoSuchChild {
            parent: self.meta(),
            name: handle.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Val;
    use alloc::vec;

    fn sample() -> (LogicalNode, NodeHandle, NodeHandle) {
        let mut ln = LogicalNode::new("PTOC", "1", "PTOC_T");
        let origin = ln.add_doi("origin");
        let sdo1 = ln.add_sdi(origin, "sdo1").unwrap();
        let set_mag = ln.add_sdi(sdo1, "setMag").unwrap();
        let f = ln.add_dai(set_mag, "f").unwrap();
        (ln, origin, f)
    }

    #[test]
    fn test_builders_reuse_existing_children() {
        let (mut ln, origin, f) = sample();
        assert_eq!(ln.add_doi("origin"), origin);
        let sdo1 = ln.add_sdi(origin, "sdo1").unwrap();
        let set_mag = ln.add_sdi(sdo1, "setMag").unwrap();
        assert_eq!(ln.add_dai(set_mag, "f").unwrap(), f);
        assert_eq!(ln.nodes().len(), 4);
    }

    #[test]
    fn test_sdi_and_dai_with_same_name_are_distinct() {
        let mut ln = LogicalNode::new("GGIO", "1", "GGIO_T");
        let doi = ln.add_doi("Mod");
        let sdi = ln.add_sdi(doi, "x").unwrap();
        let dai = ln.add_dai(doi, "x").unwrap();
        assert_ne!(sdi, dai);
        let container = ln.container(doi).unwrap();
        assert_eq!(container.structured_child(ln.nodes(), "x"), Ok(sdi));
        assert_eq!(container.attribute_child(ln.nodes(), "x"), Ok(dai));
    }

    #[test]
    fn test_leaf_cannot_hold_children() {
        let (mut ln, _, f) = sample();
        assert!(matches!(
            ln.add_sdi(f, "x"),
            Err(SclError::InconsistentTemplate(_))
        ));
    }

    #[test]
    fn test_path_of_follows_parent_links() {
        let (ln, origin, f) = sample();
        assert_eq!(ln.path_of(f), "origin.sdo1.setMag.f");
        assert_eq!(ln.path_of(origin), "origin");
        assert_eq!(ln.parent(origin), None);
    }

    #[test]
    fn test_missing_doi_is_no_such_child() {
        let (ln, _, _) = sample();
        assert!(matches!(ln.doi("Beh"), Err(SclError::NoSuchChild { .. })));
    }

    #[test]
    fn test_find_deepest_match_stops_at_first_miss() {
        let (ln, origin, _) = sample();
        let doi = ln.container(origin).unwrap();
        let names = vec!["sdo1".to_string(), "nope".to_string(), "setMag".to_string()];
        let m = doi.find_deepest_match(ln.nodes(), &names, 0, false);
        assert_eq!(m.consumed, Some(0));
        assert_eq!(m.node.map(|h| ln.path_of(h)), Some("origin.sdo1".to_string()));

        let names = vec!["sdo1".to_string(), "setMag".to_string(), "f".to_string()];
        let m = doi.find_deepest_match(ln.nodes(), &names, 0, true);
        assert!(m.is_complete(names.len()));
        assert!(ln.leaf(m.node.unwrap()).is_some());

        // Without the leaf requirement the DAI is not an acceptable last step.
        let m = doi.find_deepest_match(ln.nodes(), &names, 0, false);
        assert_eq!(m.consumed, Some(1));
    }

    #[test]
    fn test_val_import_and_privates() {
        let (mut ln, origin, f) = sample();
        ln.set_val_import(f, false).unwrap();
        assert_eq!(ln.attribute(f).unwrap().is_importable(), Some(false));
        assert!(ln.set_val_import(origin, true).is_err());

        ln.add_private(Some(f), Private::new("COMPAS-Flow")).unwrap();
        ln.add_private(None, Private::new("COMPAS-LDevice")).unwrap();
        assert_eq!(ln.leaf(f).unwrap().privates().len(), 1);
        assert_eq!(ln.privates()[0].kind, "COMPAS-LDevice");
    }

    #[test]
    fn test_dai_values_requires_full_match() {
        let (mut ln, _, f) = sample();
        ln.attribute_mut(f).unwrap().update_value(None, "12.5").unwrap();
        let do_name = DoTypeName::parse("origin.sdo1").unwrap();

        let values = ln.dai_values(&do_name, &DaTypeName::parse("setMag.f").unwrap());
        assert_eq!(values.get(&0).map(String::as_str), Some("12.5"));

        let values = ln.dai_values(&do_name, &DaTypeName::parse("setMag.i").unwrap());
        assert!(values.is_empty());
        assert_eq!(ln.leaf(f).unwrap().vals(), &[Val::new("12.5")]);
    }

    #[test]
    fn test_log_metadata() {
        let ln = LogicalNode::new("PTOC", "1", "PTOC_T").with_prefix("P");
        assert_eq!(ln.meta(), "ln=PPTOC1, lnType=PTOC_T");
    }
}
