// crates/scl-rs/src/tracker.rs

use crate::error::SclError;
use crate::instance::{LogicalNode, NodeHandle, ObjectNode};
use crate::log::{scl_debug, scl_trace};
use crate::name::{DaTypeName, DoTypeName};
use crate::template::DataTypeTemplates;
use crate::validator;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

/// How far a DO/DA name pair resolved in an instance tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchResult {
    /// The DOI itself is missing.
    Failed,
    /// A prefix of the DO or DA path resolved, the rest did not.
    PartialMatch,
    /// Both paths resolved down to a DAI.
    FullMatch,
}

impl MatchResult {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Failed => "FAILED",
            Self::PartialMatch => "PARTIAL_MATCH",
            Self::FullMatch => "FULL_MATCH",
        }
    }
}

impl fmt::Display for MatchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchResult {
    type Err = SclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Failed, Self::PartialMatch, Self::FullMatch]
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SclError::InvalidEnumValue {
                kind: "match result",
                value: s.to_string(),
            })
    }
}

/// Outcome of [`DaiTracker::search`].
///
/// `object_node` is the deepest DOI/SDI reached on the DO side and
/// `attribute_node` the deepest SDI/DAI reached on the DA side. The indexes are
/// those of the last structure name consumed on each side, `None` when no
/// structure name was consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub result: MatchResult,
    pub object_node: Option<NodeHandle>,
    pub attribute_node: Option<NodeHandle>,
    pub do_index: Option<usize>,
    pub da_index: Option<usize>,
}

impl Resolution {
    fn new(result: MatchResult) -> Self {
        Self {
            result,
            object_node: None,
            attribute_node: None,
            do_index: None,
            da_index: None,
        }
    }
}

/// Locates the DAI addressed by a DO/DA name pair under one logical node.
pub struct DaiTracker<'a> {
    ln: &'a LogicalNode,
    do_name: &'a DoTypeName,
    da_name: &'a DaTypeName,
}

impl<'a> DaiTracker<'a> {
    pub fn new(ln: &'a LogicalNode, do_name: &'a DoTypeName, da_name: &'a DaTypeName) -> Self {
        Self { ln, do_name, da_name }
    }

    pub fn do_name(&self) -> &DoTypeName {
        self.do_name
    }

    pub fn da_name(&self) -> &DaTypeName {
        self.da_name
    }

    /// Walks the DO path then the DA path, greedily and left to right.
    ///
    /// A missing DOI gives `Failed`. Any other name that does not resolve gives
    /// `PartialMatch` with the handles of the deepest nodes reached so far.
    pub fn search(&self) -> Resolution {
        let result = self.walk();
        scl_debug!(self.ln, "{} / {} -> {}", self.do_name, self.da_name, result.result);
        result
    }

    fn walk(&self) -> Resolution {
        let arena = self.ln.nodes();

        let Ok(doi) = self.ln.doi(self.do_name.name()) else {
            scl_trace!(self.ln, "DOI({}) not found", self.do_name.name());
            return Resolution::new(MatchResult::Failed);
        };
        let mut res = Resolution::new(MatchResult::PartialMatch);
        res.object_node = Some(doi);

        let sdo_names = self.do_name.struct_names();
        if !sdo_names.is_empty() {
            let Some(doi_node) = self.ln.container(doi) else {
                return res;
            };
            let deepest = doi_node.find_deepest_match(arena, sdo_names, 0, false);
            if let Some(node) = deepest.node {
                res.object_node = Some(node);
            }
            res.do_index = deepest.consumed;
            if !deepest.is_complete(sdo_names.len()) {
                scl_trace!(self.ln, "DO path {} stops at {:?}", self.do_name, deepest.consumed);
                return res;
            }
        }

        let Some(parent) = res.object_node.and_then(|h| self.ln.container(h)) else {
            return res;
        };

        let bda_names = self.da_name.struct_names();
        if bda_names.is_empty() {
            match parent.attribute_child(arena, self.da_name.name()) {
                Ok(dai) => res.attribute_node = Some(dai),
                Err(e) => {
                    scl_trace!(self.ln, "{}", e);
                    return res;
                }
            }
        } else {
            let sdi = match parent.structured_child(arena, self.da_name.name()) {
                Ok(sdi) => sdi,
                Err(e) => {
                    scl_trace!(self.ln, "{}", e);
                    return res;
                }
            };
            res.attribute_node = Some(sdi);
            let Some(sdi_node) = self.ln.container(sdi) else {
                return res;
            };
            let deepest = sdi_node.find_deepest_match(arena, bda_names, 0, true);
            if let Some(node) = deepest.node {
                res.attribute_node = Some(node);
            }
            res.da_index = deepest.consumed;
            if !deepest.is_complete(bda_names.len()) {
                scl_trace!(self.ln, "DA path {} stops at {:?}", self.da_name, deepest.consumed);
                return res;
            }
        }

        res.result = MatchResult::FullMatch;
        res
    }

    /// Returns the instance node that blocks a `PartialMatch` by being of the
    /// other kind: a DAI where the DA path expects an SDI, or an SDI where it
    /// expects the final DAI.
    ///
    /// `None` when the path stops on a name that is simply not instantiated.
    pub fn shape_conflict(&self, res: &Resolution) -> Option<NodeHandle> {
        if res.result != MatchResult::PartialMatch {
            return None;
        }
        let sdo_names = self.do_name.struct_names();
        if !sdo_names.is_empty() && res.do_index != Some(sdo_names.len() - 1) {
            return None;
        }

        let bda_names = self.da_name.struct_names();
        let (parent, next) = match res.attribute_node {
            None => (res.object_node?, self.da_name.name()),
            Some(sdi) => {
                let next = res.da_index.map_or(0, |i| i + 1);
                (sdi, bda_names.get(next)?.as_str())
            }
        };
        let conflict = self
            .ln
            .container(parent)?
            .children()
            .iter()
            .copied()
            .find(|h| self.ln.node(*h).is_some_and(|n| n.name() == next));
        if let Some(h) = conflict {
            scl_trace!(self.ln, "{} / {} blocked by {}", self.do_name, self.da_name, self.ln.path_of(h));
        }
        conflict
    }

    /// Checks the candidate held by the DA name against the `minVal`, `maxVal`
    /// and `stepSize` siblings declared for the DO.
    pub fn validate_bounded(&self, templates: &DataTypeTemplates) -> Result<(), SclError> {
        validator::validate_bounded(self.ln, templates, self.do_name, self.da_name)
    }
}
