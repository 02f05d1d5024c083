//! RDF triple: a (subject, predicate, object) statement

use crate::Term;
use serde::{Deserialize, Serialize};

/// A single RDF statement
///
/// The predicate is a `Term` for uniformity, but a well-formed triple always
/// carries `Term::Iri` in predicate position.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject (IRI or blank node)
    pub s: Term,
    /// Predicate (always an IRI)
    pub p: Term,
    /// Object (IRI, blank node, or literal)
    pub o: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Triple { s, p, o }
    }

    /// Check whether the predicate equals the given expanded IRI
    pub fn predicate_is(&self, iri: &str) -> bool {
        self.p.is_iri_str(iri)
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}
