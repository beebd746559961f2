// crates/scl-rs-private/src/error.rs

use crate::kind::PrivateKind;
use alloc::fmt;
use alloc::string::String;
use quick_xml::Error as XmlError;
use quick_xml::errors::serialize::DeError;
use quick_xml::errors::serialize::SeError;

/// Errors raised while reading or writing extension blocks.
#[derive(Debug)]
pub enum PrivateError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// An error from the underlying `quick-xml` reader.
    XmlReading(XmlError),

    /// The block is tagged with `kind` but carries another element.
    Inconsistent { kind: PrivateKind, found: String },

    /// A single element was expected but the block holds `count`.
    TooManyElements { kind: PrivateKind, count: usize },
}

impl From<DeError> for PrivateError {
    fn from(e: DeError) -> Self {
        PrivateError::XmlParsing(e)
    }
}

impl From<SeError> for PrivateError {
    fn from(e: SeError) -> Self {
        PrivateError::XmlSerializing(e)
    }
}

impl From<XmlError> for PrivateError {
    fn from(e: XmlError) -> Self {
        PrivateError::XmlReading(e)
    }
}

impl fmt::Display for PrivateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivateError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            PrivateError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            PrivateError::XmlReading(e) => write!(f, "XML reading error: {}", e),
            PrivateError::Inconsistent { kind, found } => write!(
                f,
                "Private is inconsistent. It has type={} which expects <{}> content, but got <{}>",
                kind,
                kind.root_element(),
                found
            ),
            PrivateError::TooManyElements { kind, count } => write!(
                f,
                "Expecting maximum 1 element of type {} in private {}, but got {}",
                kind.element_name(),
                kind,
                count
            ),
        }
    }
}
