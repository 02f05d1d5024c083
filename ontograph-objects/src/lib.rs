//! Graph-backed lazy object cache for ontology models
//!
//! This crate fronts an RDF graph (from `ontograph-ir`) with thin typed
//! wrappers over ontology objects: entities, literals, anonymous class
//! expressions and data ranges, and statement-bound axioms. A wrapper carries
//! only its identity - an IRI, a literal value, a blank node id, or a root
//! statement key - and decodes its structured content from the graph on
//! first access, retaining it in a clearable single-slot cache.
//!
//! # Core pieces
//!
//! - [`Model`]: shared graph + dedup factory. `resolve`/`resolve_axiom` hand
//!   out canonical wrappers; `update` is the single graph mutation point.
//! - [`OntObject`]: closed enum of wrapper kinds with `content()`,
//!   `equals()`, `content_hash()`, `signature_set()`, `as_triples()`.
//! - [`ExpressionShape`] / [`AxiomShape`]: the closed sets of decodable
//!   shapes, each with a deterministic (graph, key) -> content mapping.
//!
//! # Example
//!
//! ```
//! use ontograph_ir::Term;
//! use ontograph_objects::Model;
//! use ontograph_vocab::{owl, rdf};
//!
//! let model = Model::new();
//! model.update(|g| {
//!     g.add_triple(
//!         Term::iri("http://example.org/Dog"),
//!         Term::iri(rdf::TYPE),
//!         Term::iri(owl::CLASS),
//!     );
//! });
//!
//! let dog = model.resolve(&Term::iri("http://example.org/Dog")).unwrap();
//! assert!(dog.as_entity().is_some());
//! ```

pub mod axiom;
pub mod cache;
pub mod content;
pub mod error;
pub mod expression;
pub mod list;
pub mod model;
pub mod node;
pub mod object;
pub mod signature;

pub use axiom::AxiomShape;
pub use cache::{ContentStats, ContentStatsSnapshot};
pub use content::{Annotation, ContentItem, FacetRestriction};
pub use error::{Error, Result};
pub use expression::ExpressionShape;
pub use list::collect_list;
pub use model::Model;
pub use node::{ObjectKey, TripleKey};
pub use object::{Axiom, Entity, Expression, OntObject};
pub use signature::{EntityKind, SignatureCollector};
