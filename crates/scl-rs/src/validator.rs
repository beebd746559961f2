// crates/scl-rs/src/validator.rs

//! Bounds checking of `ING` and `ASG` settings against the `minVal`, `maxVal`
//! and `stepSize` attributes declared beside the value.

use crate::constants::{DA_MAX_VAL, DA_MIN_VAL, DA_STEP_SIZE, STEP_TOLERANCE};
use crate::error::SclError;
use crate::instance::{DataNode, LogicalNode};
use crate::log::{scl_trace, scl_warn};
use crate::name::{DaTypeName, DoTypeName};
use crate::template::{DataTypeTemplates, DoType};
use crate::tracker::{DaiTracker, MatchResult};
use alloc::collections::BTreeMap;
use alloc::format;
use alloc::string::{String, ToString};

/// Validates the candidate held by `da_name` for the data object `do_name` of
/// `ln`.
///
/// Data objects whose common data class is not boundable always pass. The CDC
/// is taken from `do_name` when it carries one, from the template otherwise.
/// Each of `minVal`, `maxVal` and `stepSize` is optional; the first leaf of
/// that DA is used, with its instance value taking precedence over the
/// template default. No other DA of the DO is read.
pub fn validate_bounded(
    ln: &LogicalNode,
    templates: &DataTypeTemplates,
    do_name: &DoTypeName,
    da_name: &DaTypeName,
) -> Result<(), SclError> {
    let cdc = match do_name.cdc() {
        Some(cdc) => cdc,
        None => templates.resolve_do(&ln.ln_type, do_name)?.cdc,
    };
    if !cdc.is_boundable() {
        return Ok(());
    }

    let path = da_name.to_string();
    let raw = da_name
        .first_value()
        .ok_or_else(|| SclError::MissingValue { path: path.clone() })?;
    let value = parse_number(&path, raw)?;

    let bounds = Bounds {
        ln,
        templates,
        do_type: templates.resolve_do(&ln.ln_type, do_name)?,
        do_name,
    };

    let result = check(&bounds, &path, value);
    if let Err(e) = &result {
        scl_warn!(ln, "{}.{}: {}", do_name, da_name, e);
    }
    result
}

/// Reads the first stored value of a bound or step leaf as a number.
///
/// `Ok(None)` when the leaf holds no value. Only the numeric basic types are
/// accepted.
pub fn numeric_value(da_name: &DaTypeName) -> Result<Option<f64>, SclError> {
    let Some(raw) = da_name.first_value() else {
        return Ok(None);
    };
    match da_name.b_type() {
        Some(b_type) if b_type.is_numeric() => {}
        b_type => {
            return Err(SclError::UndefinedNumericType {
                path: da_name.to_string(),
                b_type,
            });
        }
    }
    parse_number(&da_name.to_string(), raw).map(Some)
}

struct Bounds<'a> {
    ln: &'a LogicalNode,
    templates: &'a DataTypeTemplates,
    do_type: &'a DoType,
    do_name: &'a DoTypeName,
}

impl Bounds<'_> {
    /// Value of the first leaf of the DA `name`, its instance values overriding
    /// the template defaults.
    ///
    /// An instance node of the other kind on the leaf's path is an
    /// `InconsistentTemplate`, not a missing bound.
    fn get(&self, name: &str) -> Result<Option<(String, f64)>, SclError> {
        let Some(mut leaf) = self.templates.first_leaf(self.do_type, name)? else {
            return Ok(None);
        };

        let tracker = DaiTracker::new(self.ln, self.do_name, &leaf);
        let resolution = tracker.search();
        let instance_values = match (resolution.result, resolution.attribute_node) {
            (MatchResult::FullMatch, Some(handle)) => self
                .ln
                .attribute(handle)
                .map(|a| a.values())
                .unwrap_or_default(),
            _ => {
                if let Some(conflict) = tracker.shape_conflict(&resolution) {
                    return Err(SclError::InconsistentTemplate(format!(
                        "DA({}) does not match the instance {} {}",
                        leaf,
                        self.ln.node(conflict).map_or("node", DataNode::kind),
                        self.ln.path_of(conflict)
                    )));
                }
                BTreeMap::new()
            }
        };
        if !instance_values.is_empty() {
            leaf.set_values(instance_values);
        }
        let bound = numeric_value(&leaf)?;
        scl_trace!(self.ln, "{} = {:?}", leaf, bound);
        Ok(bound.map(|v| (leaf.to_string(), v)))
    }
}

fn check(bounds: &Bounds<'_>, path: &str, value: f64) -> Result<(), SclError> {
    // All three are resolved before any comparison.
    let [min, max, step] = [DA_MIN_VAL, DA_MAX_VAL, DA_STEP_SIZE].map(|name| bounds.get(name));
    let (min, max, step) = (min?, max?, step?);

    if let Some((_, min)) = min {
        if value < min {
            return Err(SclError::BelowMinimum {
                path: path.to_string(),
                value,
                min,
            });
        }
    }
    if let Some((_, max)) = max {
        if value > max {
            return Err(SclError::AboveMaximum {
                path: path.to_string(),
                value,
                max,
            });
        }
    }
    if let Some((step_path, step)) = step {
        // Both sides are truncated to integers before the remainder is taken.
        let divisor = (step as i64).unsigned_abs();
        if divisor == 0 {
            return Err(SclError::InvalidValue {
                path: step_path,
                value: step.to_string(),
            });
        }
        let remainder = (value as i64).unsigned_abs() % divisor;
        if remainder as f64 > STEP_TOLERANCE {
            return Err(SclError::NotAStepMultiple {
                path: path.to_string(),
                value,
                step,
            });
        }
    }
    Ok(())
}

fn parse_number(path: &str, raw: &str) -> Result<f64, SclError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| SclError::InvalidValue {
            path: path.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BasicType, Cdc, FunctionalConstraint, Val};

    fn bound(name: &str, b_type: Option<BasicType>, value: Option<&str>) -> DaTypeName {
        let mut da = DaTypeName::parse(name).unwrap().with_fc(FunctionalConstraint::Cf);
        if let Some(b_type) = b_type {
            da = da.with_b_type(b_type);
        }
        if let Some(value) = value {
            da.add_value(None, value);
        }
        da
    }

    #[test]
    fn test_numeric_value_accepts_numeric_types() {
        for b_type in [BasicType::Int8, BasicType::Int32U, BasicType::Int64U, BasicType::Float64] {
            assert_eq!(numeric_value(&bound("minVal", Some(b_type), Some("3"))), Ok(Some(3.0)));
        }
        assert_eq!(numeric_value(&bound("minVal", Some(BasicType::Float32), Some(" 2.5 "))), Ok(Some(2.5)));
    }

    #[test]
    fn test_numeric_value_without_value_is_none() {
        assert_eq!(numeric_value(&bound("minVal", None, None)), Ok(None));
    }

    #[test]
    fn test_numeric_value_rejects_other_types() {
        assert_eq!(
            numeric_value(&bound("minVal", None, Some("1"))),
            Err(SclError::UndefinedNumericType {
                path: "minVal".into(),
                b_type: None
            })
        );
        assert_eq!(
            numeric_value(&bound("minVal", Some(BasicType::VisString64), Some("1"))),
            Err(SclError::UndefinedNumericType {
                path: "minVal".into(),
                b_type: Some(BasicType::VisString64)
            })
        );
    }

    #[test]
    fn test_numeric_value_rejects_garbage() {
        assert_eq!(
            numeric_value(&bound("stepSize", Some(BasicType::Int32), Some("two"))),
            Err(SclError::InvalidValue {
                path: "stepSize".into(),
                value: "two".into()
            })
        );
    }

    #[test]
    fn test_non_boundable_cdc_always_passes() {
        let ln = LogicalNode::new("GGIO", "1", "UNKNOWN");
        let templates = DataTypeTemplates::new();
        let do_name = DoTypeName::parse("Ind").unwrap().with_cdc(Cdc::Sps);
        // No value and no template: nothing is looked at.
        let da_name = DaTypeName::parse("stVal").unwrap();
        assert_eq!(validate_bounded(&ln, &templates, &do_name, &da_name), Ok(()));
    }

    #[test]
    fn test_boundable_without_value_is_a_contract_error() {
        let ln = LogicalNode::new("PTOC", "1", "PTOC_T");
        let templates = DataTypeTemplates::new();
        let do_name = DoTypeName::parse("StrVal").unwrap().with_cdc(Cdc::Asg);
        let da_name = DaTypeName::parse("setMag.f").unwrap();
        assert_eq!(
            validate_bounded(&ln, &templates, &do_name, &da_name),
            Err(SclError::MissingValue {
                path: "setMag.f".into()
            })
        );
    }

    #[test]
    fn test_unparseable_candidate_is_invalid() {
        let ln = LogicalNode::new("PTOC", "1", "PTOC_T");
        let templates = DataTypeTemplates::new();
        let do_name = DoTypeName::parse("StrVal").unwrap().with_cdc(Cdc::Ing);
        let mut da_name = DaTypeName::parse("setVal").unwrap();
        da_name.add_values(&[Val::new("abc")]).unwrap();
        assert_eq!(
            validate_bounded(&ln, &templates, &do_name, &da_name),
            Err(SclError::InvalidValue {
                path: "setVal".into(),
                value: "abc".into()
            })
        );
    }
}
