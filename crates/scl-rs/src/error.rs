// crates/scl-rs/src/error.rs

use crate::types::BasicType;
use alloc::string::String;
use core::fmt;

/// Errors reported by the resolution, update and validation operations.
///
/// A name that does not resolve while walking a path is not an error for the
/// tracker: it is folded into `MatchResult::PartialMatch` or
/// `MatchResult::Failed`. `NoSuchChild` only surfaces from direct lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum SclError {
    /// No child with the requested name exists under the given parent.
    NoSuchChild { parent: String, name: String },

    /// A write was attempted against a node that refuses updates.
    NotUpdatable { name: String, reason: &'static str },

    /// A stored value could not be read as a number.
    InvalidValue { path: String, value: String },

    /// A bound or step leaf has no basic type, or a non-numeric one.
    UndefinedNumericType {
        path: String,
        b_type: Option<BasicType>,
    },

    /// The candidate is lower than the declared `minVal`.
    BelowMinimum { path: String, value: f64, min: f64 },

    /// The candidate is greater than the declared `maxVal`.
    AboveMaximum { path: String, value: f64, max: f64 },

    /// The candidate is not a multiple of the declared `stepSize`.
    NotAStepMultiple { path: String, value: f64, step: f64 },

    /// The template tree and the instance tree disagree, or the template
    /// references a type that does not exist.
    InconsistentTemplate(String),

    /// The logical node references an `LNodeType` that is not declared.
    UnknownLNodeType(String),

    /// A dotted name contains a segment outside the identifier grammar.
    InvalidPathName(String),

    /// A token does not name a variant of the requested enumeration.
    InvalidEnumValue { kind: &'static str, value: String },

    /// Several values were supplied but one of them carries no substitution group.
    MissingSettingGroup { path: String },

    /// Validation was requested on a descriptor that holds no value.
    MissingValue { path: String },
}

impl fmt::Display for SclError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSuchChild { parent, name } => {
                write!(f, "No child named '{}' under '{}'", name, parent)
            }
            Self::NotUpdatable { name, reason } => {
                write!(f, "DAI({}) cannot be updated: {}", name, reason)
            }
            Self::InvalidValue { path, value } => {
                write!(f, "Invalid value '{}' for DA({})", value, path)
            }
            Self::UndefinedNumericType { path, b_type } => match b_type {
                Some(b) => write!(f, "DA({}) basic type {} is not numeric", path, b),
                None => write!(f, "Undefined DA({}) basic type", path),
            },
            Self::BelowMinimum { path, value, min } => write!(
                f,
                "The DA({}) value({}) must be greater than({})",
                path, value, min
            ),
            Self::AboveMaximum { path, value, max } => write!(
                f,
                "The DA({}) value({}) must be less than({})",
                path, value, max
            ),
            Self::NotAStepMultiple { path, value, step } => write!(
                f,
                "The DA({}) value({}) is not divisible by ({})",
                path, value, step
            ),
            Self::InconsistentTemplate(msg) => write!(f, "Inconsistent template: {}", msg),
            Self::UnknownLNodeType(id) => write!(f, "Unknown LNodeType: {}", id),
            Self::InvalidPathName(name) => write!(f, "Invalid data name: '{}'", name),
            Self::InvalidEnumValue { kind, value } => {
                write!(f, "'{}' is not a valid {} value", value, kind)
            }
            Self::MissingSettingGroup { path } => write!(
                f,
                "DA({}) has several values but at least one has no setting group",
                path
            ),
            Self::MissingValue { path } => write!(f, "DA({}) holds no value to validate", path),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SclError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_display_embeds_path_and_value() {
        let err = SclError::AboveMaximum {
            path: "StrVal.setMag.f".to_string(),
            value: 15.0,
            max: 10.0,
        };
        assert_eq!(
            err.to_string(),
            "The DA(StrVal.setMag.f) value(15) must be less than(10)"
        );
    }

    #[test]
    fn test_display_undefined_numeric_type() {
        let err = SclError::UndefinedNumericType {
            path: "minVal".to_string(),
            b_type: None,
        };
        assert_eq!(err.to_string(), "Undefined DA(minVal) basic type");

        let err = SclError::UndefinedNumericType {
            path: "minVal".to_string(),
            b_type: Some(BasicType::VisString255),
        };
        assert_eq!(err.to_string(), "DA(minVal) basic type VisString255 is not numeric");
    }
}
