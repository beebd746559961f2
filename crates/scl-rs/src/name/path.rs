// crates/scl-rs/src/name/path.rs

use crate::error::SclError;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// A dotted name split into its leaf `name` and the ordered structure names
/// that follow it (`do.sdo1.sdo2` → `do` + `[sdo1, sdo2]`).
///
/// An empty `name` is the undefined sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PathName {
    name: String,
    struct_names: Vec<String>,
}

impl PathName {
    /// Builds a name from already split parts without checking the grammar.
    pub fn new(name: impl Into<String>, struct_names: Vec<String>) -> Self {
        Self {
            name: name.into(),
            struct_names,
        }
    }

    /// Returns the undefined sentinel.
    pub fn undefined() -> Self {
        Self::default()
    }

    /// Parses a dotted name, checking every segment against
    /// `[a-zA-Z][a-zA-Z0-9]*(\(\d+\))?`. An empty string parses to the
    /// undefined sentinel.
    pub fn parse(dotted: &str) -> Result<Self, SclError> {
        if dotted.is_empty() {
            return Ok(Self::undefined());
        }
        let mut parts = Vec::new();
        for segment in dotted.split('.') {
            if !is_valid_segment(segment) {
                return Err(SclError::InvalidPathName(dotted.to_string()));
            }
            parts.push(segment.to_string());
        }
        let name = parts.remove(0);
        Ok(Self {
            name,
            struct_names: parts,
        })
    }

    /// Splits a dotted name on `.` without checking the grammar, for names
    /// read from a document and validated later with [`Self::is_well_formed`].
    pub fn split(dotted: &str) -> Self {
        let mut segments = dotted.split('.').map(ToString::to_string);
        let name = segments.next().unwrap_or_default();
        Self::new(name, segments.collect())
    }

    /// Parses a leading name and a dotted tail separately
    /// (`("do", "sdo1.sdo2")`). An empty tail yields no structure names.
    pub fn from_parts(name: &str, struct_names: &str) -> Result<Self, SclError> {
        if !is_valid_segment(name) {
            return Err(SclError::InvalidPathName(name.to_string()));
        }
        let tail = if struct_names.is_empty() {
            Vec::new()
        } else {
            let tail = Self::parse(struct_names)?;
            let mut all = Vec::with_capacity(tail.struct_names.len() + 1);
            all.push(tail.name);
            all.extend(tail.struct_names);
            all
        };
        Ok(Self::new(name, tail))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn struct_names(&self) -> &[String] {
        &self.struct_names
    }

    /// Returns `false` for the undefined sentinel.
    pub fn is_defined(&self) -> bool {
        !self.name.is_empty()
    }

    /// Checks every segment against the identifier grammar.
    /// The undefined sentinel is not well formed.
    pub fn is_well_formed(&self) -> bool {
        is_valid_segment(&self.name) && self.struct_names.iter().all(|s| is_valid_segment(s))
    }

    /// Number of segments, leaf name included.
    pub fn depth(&self) -> usize {
        if self.is_defined() {
            self.struct_names.len() + 1
        } else {
            0
        }
    }

    /// Returns a copy with `segment` appended to the structure names.
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut struct_names = self.struct_names.clone();
        struct_names.push(segment.into());
        Self::new(self.name.clone(), struct_names)
    }
}

impl fmt::Display for PathName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for s in &self.struct_names {
            write!(f, ".{}", s)?;
        }
        Ok(())
    }
}

impl FromStr for PathName {
    type Err = SclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Returns `true` if `segment` matches `[a-zA-Z][a-zA-Z0-9]*(\(\d+\))?`.
pub fn is_valid_segment(segment: &str) -> bool {
    let (ident, index) = match segment.find('(') {
        Some(open) => (&segment[..open], Some(&segment[open..])),
        None => (segment, None),
    };

    let mut chars = ident.chars();
    let head_ok = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if !head_ok || !chars.all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }

    match index {
        None => true,
        Some(index) => index
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())),
    }
}
