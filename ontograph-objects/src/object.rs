//! Graph-backed object wrappers
//!
//! A wrapper holds only its identity (entity IRI, literal value, blank node
//! id, or root statement key) plus a clearable content slot. Everything else
//! is decoded from the model's graph on demand. The closed [`OntObject`] enum
//! replaces an open class hierarchy: adding a shape means extending the shape
//! enums, not introducing new types.
//!
//! ## Locking
//!
//! `content()` probes the cell before touching the model's graph lock, so a
//! cache hit never contends with writers. Content collection eagerly seeds
//! nested sub-wrappers while the graph read guard is held
//! (`force_content_in`), which keeps recursive hashing and comparison off the
//! lock entirely.

use crate::axiom::{self, AxiomShape};
use crate::cache::ContentCell;
use crate::content::{self, ContentItem};
use crate::error::{Error, Result};
use crate::expression::{self, ExpressionShape};
use crate::model::Model;
use crate::node::TripleKey;
use crate::signature::{self, EntityKind, SignatureCollector};
use hashbrown::HashSet;
use once_cell::sync::OnceCell;
use ontograph_ir::{BlankId, Graph, Literal, Term, Triple};
use ontograph_vocab::rdf;
use rustc_hash::FxHasher;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A named primitive entity: (kind, IRI)
///
/// Entities are context-free; two wrappers for the same IRI and kind are
/// interchangeable regardless of which model produced them.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Entity {
    /// Declared kind
    pub kind: EntityKind,
    /// Expanded IRI
    pub iri: Arc<str>,
}

/// An anonymous class expression or data range, keyed by its blank node
#[derive(Debug)]
pub struct Expression {
    /// Detected shape
    pub shape: ExpressionShape,
    /// The blank node this wrapper fronts
    pub node: BlankId,
    model: Model,
    content: ContentCell,
    hash: OnceCell<u64>,
}

impl Expression {
    pub(crate) fn new(shape: ExpressionShape, node: BlankId, model: Model) -> Self {
        Expression {
            shape,
            node,
            model,
            content: ContentCell::new(),
            hash: OnceCell::new(),
        }
    }

    /// The model this wrapper reads from
    pub fn model(&self) -> &Model {
        &self.model
    }

    fn content(&self) -> Result<Arc<[ContentItem]>> {
        if let Some(resident) = self.content.peek() {
            self.model.stats_ref().record_hit();
            return Ok(resident);
        }
        self.model.stats_ref().record_miss();
        let graph = self.model.read_graph();
        self.content_in(&graph)
    }

    fn content_in(&self, graph: &Graph) -> Result<Arc<[ContentItem]>> {
        let node = Term::BlankNode(self.node.clone());
        self.content
            .get_or_compute(|| expression::collect(&self.model, graph, self.shape, &node))
    }
}

/// A statement-bound axiom, keyed by its root statement
///
/// A `None` key marks a detached wrapper (see [`Axiom::without_annotations`]):
/// its content is fixed at construction, it is not registered in the dedup
/// table, and it never takes the same-key equality fast path.
#[derive(Debug)]
pub struct Axiom {
    /// Detected shape
    pub shape: AxiomShape,
    key: Option<TripleKey>,
    model: Model,
    content: ContentCell,
    hash: OnceCell<u64>,
}

impl Axiom {
    pub(crate) fn new(shape: AxiomShape, key: TripleKey, model: Model) -> Self {
        Axiom {
            shape,
            key: Some(key),
            model,
            content: ContentCell::new(),
            hash: OnceCell::new(),
        }
    }

    /// Root statement key; `None` for detached wrappers
    pub fn key(&self) -> Option<&TripleKey> {
        self.key.as_ref()
    }

    /// The model this wrapper reads from
    pub fn model(&self) -> &Model {
        &self.model
    }

    fn content(&self) -> Result<Arc<[ContentItem]>> {
        if let Some(resident) = self.content.peek() {
            self.model.stats_ref().record_hit();
            return Ok(resident);
        }
        self.model.stats_ref().record_miss();
        let graph = self.model.read_graph();
        self.content_in(&graph)
    }

    fn content_in(&self, graph: &Graph) -> Result<Arc<[ContentItem]>> {
        let key = self.key.as_ref().ok_or_else(|| {
            Error::malformed("detached axiom has no statement key to recollect from")
        })?;
        self.content
            .get_or_compute(|| axiom::collect(&self.model, graph, self.shape, key))
    }

    /// Operand-only variant with the annotation suffix stripped
    ///
    /// The result is detached: content-fixed, unregistered, equal to any
    /// axiom with the same shape and operands under structural comparison.
    pub fn without_annotations(&self) -> Result<Arc<OntObject>> {
        let items = self.content()?;
        let stripped: Vec<ContentItem> = items
            .iter()
            .filter(|i| !i.is_annotation())
            .cloned()
            .collect();
        let detached = Axiom {
            shape: self.shape,
            key: None,
            model: self.model.clone(),
            content: ContentCell::new(),
            hash: OnceCell::new(),
        };
        detached.content.seed(stripped);
        Ok(Arc::new(OntObject::Axiom(detached)))
    }
}

/// Any object the cache can hand out
#[derive(Debug)]
pub enum OntObject {
    /// Named primitive entity
    Entity(Entity),
    /// Literal value (context-free)
    Literal(Literal),
    /// Anonymous individual (blank node with no expression statements)
    Anonymous(BlankId),
    /// Anonymous class expression or data range
    Expression(Expression),
    /// Statement-bound axiom
    Axiom(Axiom),
}

impl OntObject {
    /// Stable structural kind index
    ///
    /// Entities occupy 0-5, literals 10, anonymous individuals 11,
    /// expressions 100+, axioms 200+. Two objects with different indices are
    /// never equal.
    pub fn kind_index(&self) -> u32 {
        match self {
            OntObject::Entity(e) => e.kind.index(),
            OntObject::Literal(_) => 10,
            OntObject::Anonymous(_) => 11,
            OntObject::Expression(expr) => 100 + expr.shape.tag(),
            OntObject::Axiom(ax) => 200 + ax.shape.tag(),
        }
    }

    /// Try to view as an entity
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            OntObject::Entity(e) => Some(e),
            _ => None,
        }
    }

    /// Try to view as an expression
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            OntObject::Expression(expr) => Some(expr),
            _ => None,
        }
    }

    /// Try to view as an axiom
    pub fn as_axiom(&self) -> Option<&Axiom> {
        match self {
            OntObject::Axiom(ax) => Some(ax),
            _ => None,
        }
    }

    /// The object's content array, decoding it if not resident
    ///
    /// Leaves (entities, literals, anonymous individuals) have empty content.
    pub fn content(&self) -> Result<Arc<[ContentItem]>> {
        match self {
            OntObject::Entity(_) | OntObject::Literal(_) | OntObject::Anonymous(_) => {
                Ok(Vec::new().into())
            }
            OntObject::Expression(expr) => expr.content(),
            OntObject::Axiom(ax) => ax.content(),
        }
    }

    /// Decode content while a graph read guard is already held
    ///
    /// Used by collection to seed nested sub-wrappers without re-entering
    /// the model lock.
    pub(crate) fn force_content_in(&self, graph: &Graph) -> Result<Arc<[ContentItem]>> {
        match self {
            OntObject::Entity(_) | OntObject::Literal(_) | OntObject::Anonymous(_) => {
                Ok(Vec::new().into())
            }
            OntObject::Expression(expr) => expr.content_in(graph),
            OntObject::Axiom(ax) => ax.content_in(graph),
        }
    }

    /// Non-forcing probe: whether content is resident
    pub fn has_content(&self) -> bool {
        match self {
            OntObject::Expression(expr) => expr.content.has_content(),
            OntObject::Axiom(ax) => ax.content.has_content(),
            _ => false,
        }
    }

    /// Drop resident content so the next access re-decodes from the graph
    ///
    /// Detached axioms keep their content: it is their identity.
    pub fn clear_content(&self) {
        match self {
            OntObject::Expression(expr) => {
                expr.content.clear();
                expr.model.stats_ref().record_clear();
            }
            OntObject::Axiom(ax) => {
                if ax.key.is_some() {
                    ax.content.clear();
                    ax.model.stats_ref().record_clear();
                }
            }
            _ => {}
        }
    }

    /// Structural equality
    ///
    /// 1. Pointer identity.
    /// 2. Kind index mismatch: unequal.
    /// 3. Same model, same key: equal without touching content.
    /// 4. Recursive content comparison.
    pub fn equals(&self, other: &OntObject) -> Result<bool> {
        if std::ptr::eq(self, other) {
            return Ok(true);
        }
        if self.kind_index() != other.kind_index() {
            return Ok(false);
        }
        match (self, other) {
            (OntObject::Entity(a), OntObject::Entity(b)) => Ok(a.iri == b.iri),
            (OntObject::Literal(a), OntObject::Literal(b)) => Ok(a == b),
            (OntObject::Anonymous(a), OntObject::Anonymous(b)) => Ok(a == b),
            (OntObject::Expression(a), OntObject::Expression(b)) => {
                if a.model.same_context(&b.model) && a.node == b.node {
                    return Ok(true);
                }
                content::content_eq(&a.content()?, &b.content()?)
            }
            (OntObject::Axiom(a), OntObject::Axiom(b)) => {
                if a.model.same_context(&b.model) {
                    if let (Some(ka), Some(kb)) = (&a.key, &b.key) {
                        if ka == kb {
                            return Ok(true);
                        }
                    }
                }
                content::content_eq(&a.content()?, &b.content()?)
            }
            _ => Ok(false),
        }
    }

    /// Content hash, computed once and retained across cache eviction
    ///
    /// Leaves hash their identity directly. Composite hashes force content on
    /// first request; set-shaped content hashes order-independently.
    pub fn content_hash(&self) -> Result<u64> {
        match self {
            OntObject::Entity(e) => {
                let mut h = FxHasher::default();
                self.kind_index().hash(&mut h);
                e.iri.hash(&mut h);
                Ok(h.finish())
            }
            OntObject::Literal(lit) => {
                let mut h = FxHasher::default();
                self.kind_index().hash(&mut h);
                lit.hash(&mut h);
                Ok(h.finish())
            }
            OntObject::Anonymous(id) => {
                let mut h = FxHasher::default();
                self.kind_index().hash(&mut h);
                id.hash(&mut h);
                Ok(h.finish())
            }
            OntObject::Expression(expr) => expr
                .hash
                .get_or_try_init(|| {
                    let items = expr.content()?;
                    if expr.shape.is_ordered() {
                        content::hash_ordered(self.kind_index(), &items)
                    } else {
                        content::hash_unordered(self.kind_index(), &items)
                    }
                })
                .copied(),
            OntObject::Axiom(ax) => ax
                .hash
                .get_or_try_init(|| {
                    let items = ax.content()?;
                    if ax.shape.is_symmetric() {
                        content::hash_unordered(self.kind_index(), &items)
                    } else {
                        content::hash_ordered(self.kind_index(), &items)
                    }
                })
                .copied(),
        }
    }

    /// Capability flag: can an entity of `kind` occur in this object's tree?
    pub fn may_contain(&self, kind: EntityKind) -> bool {
        match self {
            OntObject::Entity(e) => e.kind == kind,
            OntObject::Literal(_) => kind == EntityKind::Datatype,
            OntObject::Anonymous(_) => false,
            OntObject::Expression(expr) => expr.shape.may_contain(kind),
            OntObject::Axiom(ax) => ax.shape.may_contain(kind),
        }
    }

    /// Feed this object's signature into a collector
    pub fn signature(&self, collector: &mut SignatureCollector) -> Result<()> {
        signature::walk(self, collector)
    }

    /// Collect the signature of one entity kind as a sorted set
    pub fn signature_set(&self, kind: EntityKind) -> Result<BTreeSet<Arc<str>>> {
        let mut collector = SignatureCollector::new(kind);
        signature::walk(self, &mut collector)?;
        Ok(collector.into_set())
    }

    /// Whether this axiom carries an annotation suffix
    pub fn is_annotated(&self) -> Result<bool> {
        match self {
            OntObject::Axiom(_) => Ok(self.content()?.iter().any(ContentItem::is_annotation)),
            _ => Ok(false),
        }
    }

    /// The graph statements this wrapper stands for
    ///
    /// Entities reconstruct their declaration statement; literals and
    /// anonymous individuals have no footprint of their own; expressions map
    /// to their blank-node closure; axioms to the root statement plus
    /// reification and operand closures. Detached axioms map to nothing.
    pub fn as_triples(&self) -> Result<Vec<Triple>> {
        match self {
            OntObject::Entity(e) => Ok(vec![Triple::new(
                Term::Iri(e.iri.clone()),
                Term::iri(rdf::TYPE),
                Term::iri(e.kind.type_iri()),
            )]),
            OntObject::Literal(_) | OntObject::Anonymous(_) => Ok(Vec::new()),
            OntObject::Expression(expr) => {
                let graph = expr.model.read_graph();
                let mut out = Vec::new();
                let mut visited = HashSet::new();
                blank_closure(&graph, &Term::BlankNode(expr.node.clone()), &mut visited, &mut out);
                out.sort();
                out.dedup();
                Ok(out)
            }
            OntObject::Axiom(ax) => {
                let key = match &ax.key {
                    Some(k) => k,
                    None => return Ok(Vec::new()),
                };
                let graph = ax.model.read_graph();
                let mut out = vec![key.as_triple()];
                let mut visited = HashSet::new();
                blank_closure(&graph, &key.s, &mut visited, &mut out);
                blank_closure(&graph, &key.o, &mut visited, &mut out);
                for r in graph.subjects_where(rdf::TYPE, &Term::iri(ontograph_vocab::owl::AXIOM)) {
                    if graph.contains_triple(r, ontograph_vocab::owl::ANNOTATED_SOURCE, &key.s)
                        && graph.contains_triple(r, ontograph_vocab::owl::ANNOTATED_PROPERTY, &key.p)
                        && graph.contains_triple(r, ontograph_vocab::owl::ANNOTATED_TARGET, &key.o)
                    {
                        blank_closure(&graph, r, &mut visited, &mut out);
                    }
                }
                out.sort();
                out.dedup();
                Ok(out)
            }
        }
    }
}

impl std::fmt::Display for OntObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OntObject::Entity(e) => write!(f, "<{}>", e.iri),
            OntObject::Literal(lit) => write!(f, "{}", lit),
            OntObject::Anonymous(id) => write!(f, "{}", id),
            OntObject::Expression(expr) => write!(f, "{}({})", expr.shape, expr.node),
            OntObject::Axiom(ax) => match &ax.key {
                Some(key) => write!(f, "{}[{}]", ax.shape, key),
                None => write!(f, "{}[detached]", ax.shape),
            },
        }
    }
}

/// Collect every statement reachable from `seed` through blank subjects
///
/// Named and non-blank seeds contribute nothing; for blank seeds this walks
/// list cells, nested expression nodes, and facet nodes.
fn blank_closure(graph: &Graph, seed: &Term, visited: &mut HashSet<Term>, out: &mut Vec<Triple>) {
    if !seed.is_blank() || !visited.insert(seed.clone()) {
        return;
    }
    let mut pending = vec![seed.clone()];
    while let Some(subject) = pending.pop() {
        for t in graph.matching(Some(&subject), None, None) {
            out.push(t.clone());
            if t.o.is_blank() && visited.insert(t.o.clone()) {
                pending.push(t.o.clone());
            }
        }
    }
}
