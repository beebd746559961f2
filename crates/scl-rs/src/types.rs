// crates/scl-rs/src/types.rs

//! Scalar enumerations of the SCL model and the small value records shared by
//! the instance and template trees.

use crate::error::SclError;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

/// Generates a fieldless enum together with its SCL token mapping
/// (`as_str`, `Display` and `FromStr`).
macro_rules! scl_token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Returns the token used for this value in an SCL file.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $token),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = SclError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok(Self::$variant),)+
                    _ => Err(SclError::InvalidEnumValue {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

scl_token_enum! {
    /// Functional constraint (`@fc`) of a data attribute.
    FunctionalConstraint, "functional constraint" {
        /// Status information
        St => "ST",
        /// Measurands
        Mx => "MX",
        /// Control
        Co => "CO",
        /// Set point
        Sp => "SP",
        /// Setting group
        Sg => "SG",
        /// Setting group editable
        Se => "SE",
        /// Substitution
        Sv => "SV",
        /// Configuration
        Cf => "CF",
        /// Description
        Dc => "DC",
        /// Extended definition
        Ex => "EX",
        /// Service response
        Sr => "SR",
        /// Operate received
        Or => "OR",
        /// Blocking
        Bl => "BL",
    }
}

scl_token_enum! {
    /// Predefined basic type (`@bType`) of a leaf attribute.
    BasicType, "basic type" {
        Boolean => "BOOLEAN",
        Int8 => "INT8",
        Int16 => "INT16",
        Int24 => "INT24",
        Int32 => "INT32",
        Int64 => "INT64",
        Int128 => "INT128",
        Int8U => "INT8U",
        Int16U => "INT16U",
        Int24U => "INT24U",
        Int32U => "INT32U",
        Int64U => "INT64U",
        Float32 => "FLOAT32",
        Float64 => "FLOAT64",
        Enum => "Enum",
        Dbpos => "Dbpos",
        Tcmd => "Tcmd",
        Quality => "Quality",
        Timestamp => "Timestamp",
        VisString32 => "VisString32",
        VisString64 => "VisString64",
        VisString65 => "VisString65",
        VisString129 => "VisString129",
        VisString255 => "VisString255",
        Octet64 => "Octet64",
        Unicode255 => "Unicode255",
        Struct => "Struct",
        EntryTime => "EntryTime",
        Check => "Check",
        ObjRef => "ObjRef",
        Currency => "Currency",
        PhyComAddr => "PhyComAddr",
        TrgOps => "TrgOps",
        OptFlds => "OptFlds",
        SvOptFlds => "SvOptFlds",
        LogOptFlds => "LogOptFlds",
        EntryId => "EntryID",
        Octet6 => "Octet6",
        Octet16 => "Octet16",
    }
}

impl BasicType {
    /// Returns `true` for the types a bound or step value may be declared with:
    /// signed and unsigned integers of 8, 16, 32 and 64 bits, and both floats.
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int8U
                | Self::Int16
                | Self::Int16U
                | Self::Int32
                | Self::Int32U
                | Self::Int64
                | Self::Int64U
                | Self::Float32
                | Self::Float64
        )
    }
}

scl_token_enum! {
    /// Common data class (`@cdc`) of a data object type.
    Cdc, "common data class" {
        Sps => "SPS",
        Dps => "DPS",
        Ins => "INS",
        Ens => "ENS",
        Act => "ACT",
        Acd => "ACD",
        Sec => "SEC",
        Bcr => "BCR",
        Mv => "MV",
        Cmv => "CMV",
        Sav => "SAV",
        Wye => "WYE",
        Del => "DEL",
        Seq => "SEQ",
        Spc => "SPC",
        Dpc => "DPC",
        Inc => "INC",
        Enc => "ENC",
        Bsc => "BSC",
        Isc => "ISC",
        Apc => "APC",
        Bac => "BAC",
        Spg => "SPG",
        /// Integer status setting
        Ing => "ING",
        Eng => "ENG",
        Org => "ORG",
        Tsg => "TSG",
        Cug => "CUG",
        Vsg => "VSG",
        /// Analogue setting
        Asg => "ASG",
        Curve => "CURVE",
        Csg => "CSG",
        Dpl => "DPL",
        Lpl => "LPL",
        Csd => "CSD",
        Vss => "VSS",
    }
}

impl Cdc {
    /// Returns `true` for the classes whose value is checked against
    /// `minVal`, `maxVal` and `stepSize`.
    pub const fn is_boundable(&self) -> bool {
        matches!(self, Self::Ing | Self::Asg)
    }
}

scl_token_enum! {
    /// Service type (`@serviceType`) of an input reference.
    ServiceType, "service type" {
        Poll => "Poll",
        Report => "Report",
        Goose => "GOOSE",
        Smv => "SMV",
    }
}

/// A single `<Val>` entry. `s_group` is `None` for an ungrouped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Val {
    pub s_group: Option<u32>,
    pub value: String,
}

impl Val {
    /// Creates an ungrouped value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            s_group: None,
            value: value.into(),
        }
    }

    /// Creates a value tagged with a substitution group.
    pub fn grouped(s_group: u32, value: impl Into<String>) -> Self {
        Self {
            s_group: Some(s_group),
            value: value.into(),
        }
    }
}

/// An extension block (`<Private type="...">`).
///
/// The engine never looks inside: `contents` holds the raw XML fragments of the
/// block and is carried with the node it was attached to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Private {
    /// The `@type` tag that selects the decoder.
    pub kind: String,
    /// One XML fragment per child element.
    pub contents: Vec<String>,
}

impl Private {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            contents: Vec::new(),
        }
    }
}
