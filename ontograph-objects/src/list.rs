//! RDF list decoding
//!
//! Set-valued expressions and n-ary axioms point at `rdf:first`/`rdf:rest`
//! chains. The walk is strict: every cell must carry exactly one `rdf:first`
//! and one `rdf:rest`, the chain must terminate at `rdf:nil`, and cycles are
//! malformed.

use crate::error::{Error, Result};
use hashbrown::HashSet;
use ontograph_ir::{Graph, Term};
use ontograph_vocab::rdf;

/// Collect the elements of an RDF list rooted at `head`
///
/// `head` may be `rdf:nil` (empty list). Any other IRI, a literal, or a
/// blank node without list statements is malformed.
pub fn collect_list(graph: &Graph, head: &Term) -> Result<Vec<Term>> {
    let mut elements = Vec::new();
    let mut seen: HashSet<Term> = HashSet::new();
    let mut cursor = head.clone();

    loop {
        if cursor.is_iri_str(rdf::NIL) {
            return Ok(elements);
        }
        if !cursor.is_blank() {
            return Err(Error::malformed(format!(
                "list cell {} is neither a blank node nor rdf:nil",
                cursor
            )));
        }
        if !seen.insert(cursor.clone()) {
            return Err(Error::malformed(format!("cyclic list at {}", cursor)));
        }

        let mut firsts = graph.objects_of(&cursor, rdf::FIRST);
        let first = firsts
            .next()
            .ok_or_else(|| Error::malformed(format!("list cell {} has no rdf:first", cursor)))?;
        if firsts.next().is_some() {
            return Err(Error::malformed(format!(
                "list cell {} has multiple rdf:first statements",
                cursor
            )));
        }
        elements.push(first.clone());

        let mut rests = graph.objects_of(&cursor, rdf::REST);
        let rest = rests
            .next()
            .ok_or_else(|| Error::malformed(format!("list cell {} has no rdf:rest", cursor)))?;
        if rests.next().is_some() {
            return Err(Error::malformed(format!(
                "list cell {} has multiple rdf:rest statements",
                cursor
            )));
        }
        cursor = rest.clone();
    }
}

/// Emit the statements of a list rooted at `head` into `out`
///
/// Used when mapping a wrapper back to its graph footprint.
pub(crate) fn list_triples(graph: &Graph, head: &Term, out: &mut Vec<ontograph_ir::Triple>) {
    let mut cursor = head.clone();
    let mut guard = 0usize;
    while cursor.is_blank() && guard <= graph.len() {
        guard += 1;
        let mut next = None;
        for t in graph.matching(Some(&cursor), None, None) {
            out.push(t.clone());
            if t.predicate_is(rdf::REST) {
                next = Some(t.o.clone());
            }
        }
        match next {
            Some(n) => cursor = n,
            None => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_graph() -> (Graph, Term) {
        let mut g = Graph::new();
        let b0 = Term::blank("b0");
        let b1 = Term::blank("b1");
        g.add_triple(b0.clone(), Term::iri(rdf::FIRST), Term::iri("http://x"));
        g.add_triple(b0.clone(), Term::iri(rdf::REST), b1.clone());
        g.add_triple(b1.clone(), Term::iri(rdf::FIRST), Term::iri("http://y"));
        g.add_triple(b1.clone(), Term::iri(rdf::REST), Term::iri(rdf::NIL));
        (g, b0)
    }

    #[test]
    fn test_collect_list() {
        let (g, head) = list_graph();
        let elements = collect_list(&g, &head).unwrap();
        assert_eq!(elements, vec![Term::iri("http://x"), Term::iri("http://y")]);
    }

    #[test]
    fn test_empty_list() {
        let g = Graph::new();
        assert!(collect_list(&g, &Term::iri(rdf::NIL)).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_list_is_malformed() {
        let mut g = Graph::new();
        let b0 = Term::blank("b0");
        g.add_triple(b0.clone(), Term::iri(rdf::FIRST), Term::iri("http://x"));
        // no rdf:rest
        assert!(collect_list(&g, &b0).is_err());
    }

    #[test]
    fn test_cyclic_list_is_malformed() {
        let mut g = Graph::new();
        let b0 = Term::blank("b0");
        g.add_triple(b0.clone(), Term::iri(rdf::FIRST), Term::iri("http://x"));
        g.add_triple(b0.clone(), Term::iri(rdf::REST), b0.clone());
        assert!(collect_list(&g, &b0).is_err());
    }

    #[test]
    fn test_literal_head_is_malformed() {
        let g = Graph::new();
        assert!(collect_list(&g, &Term::string("nope")).is_err());
    }
}
