// crates/scl-rs-private/src/kind.rs

use core::fmt;

/// The CoMPAS extension blocks understood by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrivateKind {
    Bay,
    Criteria,
    Flow,
    Function,
    IcdHeader,
    LDevice,
    SclFileType,
    SystemVersion,
}

impl PrivateKind {
    pub const ALL: [PrivateKind; 8] = [
        Self::Bay,
        Self::Criteria,
        Self::Flow,
        Self::Function,
        Self::IcdHeader,
        Self::LDevice,
        Self::SclFileType,
        Self::SystemVersion,
    ];

    /// Value of `<Private type="...">` for this kind.
    pub const fn type_tag(&self) -> &'static str {
        match self {
            Self::Bay => "COMPAS-Bay",
            Self::Criteria => "COMPAS-Criteria",
            Self::Flow => "COMPAS-Flow",
            Self::Function => "COMPAS-Function",
            Self::IcdHeader => "COMPAS-ICDHeader",
            Self::LDevice => "COMPAS-LDevice",
            Self::SclFileType => "COMPAS-SclFileType",
            Self::SystemVersion => "COMPAS-SystemVersion",
        }
    }

    /// Local name of the element carried inside the block.
    pub const fn element_name(&self) -> &'static str {
        match self {
            Self::Bay => "Bay",
            Self::Criteria => "Criteria",
            Self::Flow => "Flow",
            Self::Function => "Function",
            Self::IcdHeader => "ICDHeader",
            Self::LDevice => "LDevice",
            Self::SclFileType => "SclFileType",
            Self::SystemVersion => "SystemVersion",
        }
    }

    /// Qualified root element written by [`crate::create_private`].
    pub const fn root_element(&self) -> &'static str {
        match self {
            Self::Bay => "compas:Bay",
            Self::Criteria => "compas:Criteria",
            Self::Flow => "compas:Flow",
            Self::Function => "compas:Function",
            Self::IcdHeader => "compas:ICDHeader",
            Self::LDevice => "compas:LDevice",
            Self::SclFileType => "compas:SclFileType",
            Self::SystemVersion => "compas:SystemVersion",
        }
    }

    /// Looks a kind up by its `type` tag.
    pub fn from_type_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.type_tag() == tag)
    }
}

impl fmt::Display for PrivateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_tag())
    }
}
