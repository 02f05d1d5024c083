//! RDF datatype representation
//!
//! Datatypes are always explicit in this IR - there is no "untyped" literal.
//! Plain strings default to `xsd:string`, and language-tagged strings use
//! `rdf:langString`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Common XSD and RDF datatype IRIs (re-exported from vocab crate)
pub mod iri {
    pub use ontograph_vocab::rdf::LANG_STRING as RDF_LANG_STRING;
    pub use ontograph_vocab::xsd::{
        ANY_URI as XSD_ANY_URI, BOOLEAN as XSD_BOOLEAN, DECIMAL as XSD_DECIMAL,
        DOUBLE as XSD_DOUBLE, INTEGER as XSD_INTEGER,
        NON_NEGATIVE_INTEGER as XSD_NON_NEGATIVE_INTEGER, STRING as XSD_STRING,
    };
}

/// RDF literal datatype
///
/// A thin interned wrapper around the datatype's expanded IRI. Use
/// `Datatype::xsd_string()` for plain strings, `Datatype::rdf_lang_string()`
/// for language-tagged strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Datatype(Arc<str>);

impl Datatype {
    /// Create a datatype from an expanded IRI
    pub fn from_iri(iri: impl AsRef<str>) -> Self {
        Datatype(Arc::from(iri.as_ref()))
    }

    /// xsd:string - default for plain string literals
    pub fn xsd_string() -> Self {
        Self::from_iri(iri::XSD_STRING)
    }

    /// xsd:boolean
    pub fn xsd_boolean() -> Self {
        Self::from_iri(iri::XSD_BOOLEAN)
    }

    /// xsd:integer
    pub fn xsd_integer() -> Self {
        Self::from_iri(iri::XSD_INTEGER)
    }

    /// xsd:nonNegativeInteger - cardinality values in OWL restrictions
    pub fn xsd_non_negative_integer() -> Self {
        Self::from_iri(iri::XSD_NON_NEGATIVE_INTEGER)
    }

    /// xsd:double
    pub fn xsd_double() -> Self {
        Self::from_iri(iri::XSD_DOUBLE)
    }

    /// xsd:anyURI
    pub fn xsd_any_uri() -> Self {
        Self::from_iri(iri::XSD_ANY_URI)
    }

    /// rdf:langString - for language-tagged literals
    pub fn rdf_lang_string() -> Self {
        Self::from_iri(iri::RDF_LANG_STRING)
    }

    /// Get the IRI representation of this datatype
    pub fn as_iri(&self) -> &str {
        &self.0
    }

    /// Check if this is the xsd:string datatype
    pub fn is_xsd_string(&self) -> bool {
        self.0.as_ref() == iri::XSD_STRING
    }

    /// Check if this is the rdf:langString datatype
    pub fn is_lang_string(&self) -> bool {
        self.0.as_ref() == iri::RDF_LANG_STRING
    }

    /// Check if this is a numeric type (integer, nonNegativeInteger, double, decimal)
    pub fn is_numeric(&self) -> bool {
        matches!(
            self.0.as_ref(),
            iri::XSD_INTEGER | iri::XSD_NON_NEGATIVE_INTEGER | iri::XSD_DOUBLE | iri::XSD_DECIMAL
        )
    }
}

impl std::fmt::Display for Datatype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_iri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datatype_constructors() {
        assert_eq!(Datatype::xsd_string().as_iri(), iri::XSD_STRING);
        assert_eq!(Datatype::xsd_boolean().as_iri(), iri::XSD_BOOLEAN);
        assert_eq!(Datatype::xsd_integer().as_iri(), iri::XSD_INTEGER);
        assert_eq!(Datatype::rdf_lang_string().as_iri(), iri::RDF_LANG_STRING);
    }

    #[test]
    fn test_datatype_equality() {
        assert_eq!(Datatype::xsd_string(), Datatype::from_iri(iri::XSD_STRING));
        assert_ne!(Datatype::xsd_string(), Datatype::xsd_integer());
    }

    #[test]
    fn test_is_checks() {
        assert!(Datatype::xsd_string().is_xsd_string());
        assert!(!Datatype::xsd_integer().is_xsd_string());

        assert!(Datatype::rdf_lang_string().is_lang_string());
        assert!(!Datatype::xsd_string().is_lang_string());

        assert!(Datatype::xsd_integer().is_numeric());
        assert!(Datatype::xsd_non_negative_integer().is_numeric());
        assert!(!Datatype::xsd_string().is_numeric());
    }
}
