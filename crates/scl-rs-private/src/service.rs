// crates/scl-rs-private/src/service.rs

use crate::error::PrivateError;
use crate::kind::PrivateKind;
use crate::model::{
    CompasBay, CompasCriteria, CompasFlow, CompasFunction, CompasIcdHeader, CompasLDevice, CompasSclFileType,
    CompasSystemVersion,
};
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use log::{trace, warn};
use quick_xml::Reader;
use quick_xml::de::from_str;
use quick_xml::events::Event;
use quick_xml::se::to_string_with_root;
use scl_rs::Private;

/// A decoded CoMPAS extension element, one variant per [`PrivateKind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompasPrivate {
    Bay(CompasBay),
    Criteria(CompasCriteria),
    Flow(CompasFlow),
    Function(CompasFunction),
    IcdHeader(CompasIcdHeader),
    LDevice(CompasLDevice),
    SclFileType(CompasSclFileType),
    SystemVersion(CompasSystemVersion),
}

impl CompasPrivate {
    pub fn kind(&self) -> PrivateKind {
        match self {
            Self::Bay(_) => PrivateKind::Bay,
            Self::Criteria(_) => PrivateKind::Criteria,
            Self::Flow(_) => PrivateKind::Flow,
            Self::Function(_) => PrivateKind::Function,
            Self::IcdHeader(_) => PrivateKind::IcdHeader,
            Self::LDevice(_) => PrivateKind::LDevice,
            Self::SclFileType(_) => PrivateKind::SclFileType,
            Self::SystemVersion(_) => PrivateKind::SystemVersion,
        }
    }

    /// Decodes one XML element as the model of `kind`.
    ///
    /// The element name itself is not checked here; see [`get_compas_privates`].
    pub fn decode(kind: PrivateKind, fragment: &str) -> Result<Self, PrivateError> {
        Ok(match kind {
            PrivateKind::Bay => Self::Bay(from_str(fragment)?),
            PrivateKind::Criteria => Self::Criteria(from_str(fragment)?),
            PrivateKind::Flow => Self::Flow(from_str(fragment)?),
            PrivateKind::Function => Self::Function(from_str(fragment)?),
            PrivateKind::IcdHeader => Self::IcdHeader(from_str(fragment)?),
            PrivateKind::LDevice => Self::LDevice(from_str(fragment)?),
            PrivateKind::SclFileType => Self::SclFileType(from_str(fragment)?),
            PrivateKind::SystemVersion => Self::SystemVersion(from_str(fragment)?),
        })
    }

    /// Writes the element under its qualified root name (`compas:...`).
    pub fn encode(&self) -> Result<String, PrivateError> {
        let root = self.kind().root_element();
        Ok(match self {
            Self::Bay(v) => to_string_with_root(root, v)?,
            Self::Criteria(v) => to_string_with_root(root, v)?,
            Self::Flow(v) => to_string_with_root(root, v)?,
            Self::Function(v) => to_string_with_root(root, v)?,
            Self::IcdHeader(v) => to_string_with_root(root, v)?,
            Self::LDevice(v) => to_string_with_root(root, v)?,
            Self::SclFileType(v) => to_string_with_root(root, v)?,
            Self::SystemVersion(v) => to_string_with_root(root, v)?,
        })
    }
}

macro_rules! impl_from_model {
    ($($model:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$model> for CompasPrivate {
                fn from(value: $model) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_model! {
    CompasBay => Bay,
    CompasCriteria => Criteria,
    CompasFlow => Flow,
    CompasFunction => Function,
    CompasIcdHeader => IcdHeader,
    CompasLDevice => LDevice,
    CompasSclFileType => SclFileType,
    CompasSystemVersion => SystemVersion,
}

/// Decodes every element of the blocks tagged with `kind`.
///
/// Blocks with another tag are skipped. A block whose element is not the one
/// `kind` expects is rejected with [`PrivateError::Inconsistent`].
pub fn get_compas_privates(privates: &[Private], kind: PrivateKind) -> Result<Vec<CompasPrivate>, PrivateError> {
    let mut decoded = Vec::new();
    for private in privates.iter().filter(|p| p.kind == kind.type_tag()) {
        for fragment in &private.contents {
            let Some(found) = root_name(fragment)? else {
                trace!("Skipping {} content without element", kind);
                continue;
            };
            let local = found.rsplit(':').next().unwrap_or(found.as_str());
            if local != kind.element_name() {
                warn!("Private {} holds <{}>", kind, found);
                return Err(PrivateError::Inconsistent { kind, found });
            }
            decoded.push(CompasPrivate::decode(kind, fragment)?);
        }
    }
    Ok(decoded)
}

/// Decodes the single element of `kind` held by `private`, if any.
pub fn get_compas_private(private: &Private, kind: PrivateKind) -> Result<Option<CompasPrivate>, PrivateError> {
    let mut decoded = get_compas_privates(core::slice::from_ref(private), kind)?;
    match decoded.len() {
        0 | 1 => Ok(decoded.pop()),
        count => Err(PrivateError::TooManyElements { kind, count }),
    }
}

/// Decodes the `<compas:ICDHeader>` of a `COMPAS-ICDHeader` block.
pub fn get_compas_icd_header(private: &Private) -> Result<Option<CompasIcdHeader>, PrivateError> {
    Ok(match get_compas_private(private, PrivateKind::IcdHeader)? {
        Some(CompasPrivate::IcdHeader(header)) => Some(header),
        _ => None,
    })
}

/// Drops every block tagged with `kind`.
pub fn remove_privates(privates: &mut Vec<Private>, kind: PrivateKind) {
    privates.retain(|p| p.kind != kind.type_tag());
}

/// Wraps an element into a new block carrying its type tag.
pub fn create_private(element: impl Into<CompasPrivate>) -> Result<Private, PrivateError> {
    let element = element.into();
    let kind = element.kind();
    Ok(Private {
        kind: kind.type_tag().into(),
        contents: vec![element.encode()?],
    })
}

/// Qualified name of the first element of `fragment`.
fn root_name(fragment: &str) -> Result<Option<String>, PrivateError> {
    let mut reader = Reader::from_str(fragment);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                return Ok(Some(String::from_utf8_lossy(e.name().as_ref()).into_owned()));
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_name() {
        assert_eq!(
            root_name(r#"<!-- c --><compas:Bay UUID="1"/>"#).unwrap().as_deref(),
            Some("compas:Bay")
        );
        assert_eq!(root_name("  ").unwrap(), None);
    }

    #[test]
    fn test_kind_follows_variant() {
        let element: CompasPrivate = CompasLDevice::default().into();
        assert_eq!(element.kind(), PrivateKind::LDevice);
    }
}
