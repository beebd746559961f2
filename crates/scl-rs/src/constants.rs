// crates/scl-rs/src/constants.rs
//! Well-known names and numeric limits used by the resolver and the validator.

/// Substitution group used for ungrouped values.
pub const DEFAULT_SGROUP: u32 = 0;

/// Template leaf holding the lower bound of a bounded setting.
pub const DA_MIN_VAL: &str = "minVal";
/// Template leaf holding the upper bound of a bounded setting.
pub const DA_MAX_VAL: &str = "maxVal";
/// Template leaf holding the step size of a bounded setting.
pub const DA_STEP_SIZE: &str = "stepSize";

/// Largest remainder still accepted by the step-size check.
pub const STEP_TOLERANCE: f64 = 1e-9;

/// `lnClass` of the logical node zero, which carries no `lnInst`.
pub const LN_CLASS_LLN0: &str = "LLN0";

/// Deepest DAType/BDA nesting followed before a template is declared recursive.
pub const MAX_STRUCT_DEPTH: usize = 32;
