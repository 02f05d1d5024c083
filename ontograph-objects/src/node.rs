//! Cache keys for graph-backed wrappers
//!
//! A wrapper is keyed either by the node it wraps (entities, literals,
//! anonymous expressions) or by the root statement that asserts it (axioms).
//! Keys are immutable and cheap to hash; they are the only state a wrapper
//! needs at construction time.

use ontograph_ir::{Term, Triple};

/// Key identifying the root statement of a statement-bound axiom
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TripleKey {
    /// Subject of the root statement
    pub s: Term,
    /// Predicate of the root statement
    pub p: Term,
    /// Object of the root statement
    pub o: Term,
}

impl TripleKey {
    /// Create a key from statement components
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        TripleKey { s, p, o }
    }

    /// Key of an existing statement
    pub fn from_triple(t: &Triple) -> Self {
        TripleKey {
            s: t.s.clone(),
            p: t.p.clone(),
            o: t.o.clone(),
        }
    }

    /// Reconstruct the root statement
    pub fn as_triple(&self) -> Triple {
        Triple::new(self.s.clone(), self.p.clone(), self.o.clone())
    }
}

impl std::fmt::Display for TripleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.s, self.p, self.o)
    }
}

/// Dedup-table key for the object factory
///
/// At most one canonical wrapper exists per (model identity, `ObjectKey`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKey {
    /// Wrapper keyed by a graph node (entity IRI, literal, blank node)
    Node(Term),
    /// Wrapper keyed by an axiom root statement
    Statement(TripleKey),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triple_key_roundtrip() {
        let t = Triple::new(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::iri("http://example.org/o"),
        );
        let key = TripleKey::from_triple(&t);
        assert_eq!(key.as_triple(), t);
    }

    #[test]
    fn test_object_key_equality() {
        let a = ObjectKey::Node(Term::iri("http://example.org/x"));
        let b = ObjectKey::Node(Term::iri("http://example.org/x"));
        assert_eq!(a, b);

        let c = ObjectKey::Node(Term::blank("x"));
        assert_ne!(a, c);
    }
}
