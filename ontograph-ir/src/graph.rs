//! RDF graph - a collection of triples
//!
//! The `Graph` type uses `Vec<Triple>` to preserve duplicates (bag semantics).
//! Call `dedupe()` explicitly if you want set semantics.
//!
//! Beyond the bag container, this module provides the pattern-matching query
//! surface the object cache consumes: subject/predicate/object matching,
//! single-object lookup, and reverse (object to subject) lookup.

use crate::{Term, Triple};

/// A collection of RDF triples
///
/// # Design Decisions
///
/// - **Vec storage**: Uses `Vec<Triple>` instead of `BTreeSet` so callers can
///   stream statements in without reordering.
/// - **Explicit deduplication**: Call `dedupe()` if you want set semantics.
/// - **Deterministic output**: Call `sort()` before formatting for stable output.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// The triples in this graph
    triples: Vec<Triple>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Sort triples by SPO for deterministic output
    pub fn sort(&mut self) {
        self.triples.sort();
    }

    /// Remove duplicate triples (apply set semantics)
    pub fn dedupe(&mut self) {
        self.triples.sort();
        self.triples.dedup();
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// Iterate over triples matching a subject/predicate/object pattern
    ///
    /// `None` in a position matches any term. The predicate is matched by
    /// expanded IRI string since predicates are always IRIs. Pattern terms
    /// are captured by clone, so the returned iterator borrows only the
    /// graph and callers may pass short-lived or temporary terms.
    pub fn matching<'g>(
        &'g self,
        s: Option<&Term>,
        p: Option<&str>,
        o: Option<&Term>,
    ) -> impl Iterator<Item = &'g Triple> + 'g {
        let s = s.cloned();
        let p = p.map(str::to_owned);
        let o = o.cloned();
        self.triples.iter().filter(move |t| {
            s.as_ref().map_or(true, |s| t.s == *s)
                && p.as_deref().map_or(true, |p| t.predicate_is(p))
                && o.as_ref().map_or(true, |o| t.o == *o)
        })
    }

    /// Iterate over objects of statements with the given subject and predicate
    pub fn objects_of<'g>(&'g self, s: &Term, p: &str) -> impl Iterator<Item = &'g Term> + 'g {
        self.matching(Some(s), Some(p), None).map(|t| &t.o)
    }

    /// Get the single object of (subject, predicate), if any statement exists
    ///
    /// When multiple statements match, the first in insertion order is
    /// returned; decoders that require uniqueness check separately.
    pub fn object_of(&self, s: &Term, p: &str) -> Option<&Term> {
        self.objects_of(s, p).next()
    }

    /// Iterate over subjects of statements with the given predicate and object
    pub fn subjects_where<'g>(&'g self, p: &str, o: &Term) -> impl Iterator<Item = &'g Term> + 'g {
        self.matching(None, Some(p), Some(o)).map(|t| &t.s)
    }

    /// Check whether any statement with the given subject and predicate exists
    pub fn has(&self, s: &Term, p: &str) -> bool {
        self.object_of(s, p).is_some()
    }

    /// Check whether the exact statement exists
    pub fn contains_triple(&self, s: &Term, p: &str, o: &Term) -> bool {
        self.matching(Some(s), Some(p), Some(o)).next().is_some()
    }

    /// Remove all statements matching a pattern, returning the removed count
    ///
    /// Used by callers that map a high-level object back to its statements
    /// and retract them.
    pub fn remove_matching(
        &mut self,
        s: Option<&Term>,
        p: Option<&str>,
        o: Option<&Term>,
    ) -> usize {
        let before = self.triples.len();
        self.triples.retain(|t| {
            !(s.map_or(true, |s| t.s == *s)
                && p.map_or(true, |p| t.predicate_is(p))
                && o.map_or(true, |o| t.o == *o))
        });
        before - self.triples.len()
    }

    /// Get all unique subjects in the graph
    pub fn subjects(&self) -> Vec<&Term> {
        let mut subjects: Vec<&Term> = self.triples.iter().map(|t| &t.s).collect();
        subjects.sort();
        subjects.dedup();
        subjects
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_graph() -> Graph {
        let mut graph = Graph::new();

        graph.add_triple(
            Term::iri("http://example.org/bob"),
            Term::iri("http://xmlns.com/foaf/0.1/name"),
            Term::string("Bob"),
        );

        graph.add_triple(
            Term::iri("http://example.org/alice"),
            Term::iri("http://xmlns.com/foaf/0.1/name"),
            Term::string("Alice"),
        );

        graph.add_triple(
            Term::iri("http://example.org/alice"),
            Term::iri("http://xmlns.com/foaf/0.1/age"),
            Term::integer(30),
        );

        graph
    }

    #[test]
    fn test_graph_creation() {
        let graph = Graph::new();
        assert!(graph.is_empty());
        assert_eq!(graph.len(), 0);
    }

    #[test]
    fn test_pattern_matching() {
        let graph = make_test_graph();
        let alice = Term::iri("http://example.org/alice");

        let hits: Vec<_> = graph.matching(Some(&alice), None, None).collect();
        assert_eq!(hits.len(), 2);

        let name = graph
            .object_of(&alice, "http://xmlns.com/foaf/0.1/name")
            .unwrap();
        assert_eq!(name, &Term::string("Alice"));

        assert!(graph.has(&alice, "http://xmlns.com/foaf/0.1/age"));
        assert!(!graph.has(&alice, "http://xmlns.com/foaf/0.1/mbox"));
    }

    #[test]
    fn test_results_outlive_pattern_terms() {
        // Matches borrow only the graph, not the pattern terms
        let graph = make_test_graph();
        let hits: Vec<&Triple> = {
            let alice = Term::iri("http://example.org/alice");
            graph.matching(Some(&alice), None, None).collect()
        };
        assert_eq!(hits.len(), 2);

        let name = graph.object_of(
            &Term::iri("http://example.org/alice"),
            "http://xmlns.com/foaf/0.1/name",
        );
        assert_eq!(name, Some(&Term::string("Alice")));
    }

    #[test]
    fn test_reverse_lookup() {
        let graph = make_test_graph();
        let subjects: Vec<_> = graph
            .subjects_where("http://xmlns.com/foaf/0.1/name", &Term::string("Bob"))
            .collect();
        assert_eq!(subjects, vec![&Term::iri("http://example.org/bob")]);
    }

    #[test]
    fn test_graph_dedupe() {
        let mut graph = Graph::new();

        let triple = Triple::new(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::string("o"),
        );

        graph.add(triple.clone());
        graph.add(triple.clone());
        graph.add(triple);

        assert_eq!(graph.len(), 3);

        graph.dedupe();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_remove_matching() {
        let mut graph = make_test_graph();
        let alice = Term::iri("http://example.org/alice");

        let removed = graph.remove_matching(Some(&alice), None, None);
        assert_eq!(removed, 2);
        assert_eq!(graph.len(), 1);
        assert!(!graph.has(&alice, "http://xmlns.com/foaf/0.1/name"));
    }

    #[test]
    fn test_subjects() {
        let graph = make_test_graph();
        assert_eq!(graph.subjects().len(), 2);
    }
}
