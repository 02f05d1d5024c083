//! Format-agnostic RDF graph intermediate representation
//!
//! This crate provides canonical types for representing RDF graphs that can be
//! produced by parsers and consumed by the object cache, regardless of the
//! serialization format the statements came from.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!    Compaction is a formatter concern.
//!
//! 2. **Explicit datatypes** - Literals always have an explicit datatype,
//!    never optional. Plain strings use `xsd:string`, language-tagged strings
//!    use `rdf:langString`.
//!
//! 3. **Bag semantics by default** - The `Graph` type uses `Vec<Triple>` to
//!    preserve duplicates. Call `dedupe()` explicitly for set semantics.
//!
//! 4. **Deterministic output** - Call `sort()` for deterministic triple
//!    ordering (SPO lexicographic).
//!
//! # Example
//!
//! ```
//! use ontograph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//!
//! graph.add_triple(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://xmlns.com/foaf/0.1/name"),
//!     Term::string("Alice"),
//! );
//!
//! assert!(graph
//!     .object_of(&Term::iri("http://example.org/alice"), "http://xmlns.com/foaf/0.1/name")
//!     .is_some());
//! ```

pub mod datatype;
mod graph;
mod term;
mod triple;

pub use datatype::Datatype;
pub use graph::Graph;
pub use term::{BlankId, Literal, LiteralValue, Term};
pub use triple::Triple;
