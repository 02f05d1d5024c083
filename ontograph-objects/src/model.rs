//! The model: shared graph state plus the object factory
//!
//! A [`Model`] owns the triple graph behind a read-write lock and a dedup
//! table mapping object keys to canonical wrappers. Cloning a `Model` is
//! cheap and shares both; model identity (for the equality fast path) is the
//! identity of that shared state.
//!
//! The factory discipline: look the key up first, build the wrapper outside
//! the table entry, then insert with `entry().or_insert` so a racing resolve
//! for the same key converges on one canonical wrapper.

use crate::axiom::{self, AxiomShape};
use crate::cache::{ContentStats, ContentStatsSnapshot};
use crate::error::{Error, Result};
use crate::expression::{self, ExpressionShape};
use crate::node::{ObjectKey, TripleKey};
use crate::object::{Axiom, Entity, Expression, OntObject};
use crate::signature::EntityKind;
use dashmap::DashMap;
use hashbrown::HashSet;
use ontograph_ir::{Graph, Term, Triple};
use ontograph_vocab::{owl, rdf};
use std::sync::{Arc, RwLock, RwLockReadGuard};
use tracing::{debug, trace};

const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

struct ModelInner {
    graph: RwLock<Graph>,
    objects: DashMap<ObjectKey, Arc<OntObject>>,
    stats: ContentStats,
}

/// Handle to a shared graph and its object cache
#[derive(Clone)]
pub struct Model {
    inner: Arc<ModelInner>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("triples", &self.inner.graph.read().unwrap().len())
            .field("cached_objects", &self.inner.objects.len())
            .finish()
    }
}

impl Model {
    /// Create a model over an empty graph
    pub fn new() -> Self {
        Self::with_graph(Graph::new())
    }

    /// Create a model over an existing graph
    pub fn with_graph(graph: Graph) -> Self {
        Model {
            inner: Arc::new(ModelInner {
                graph: RwLock::new(graph),
                objects: DashMap::new(),
                stats: ContentStats::default(),
            }),
        }
    }

    /// Create a model from raw statements
    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Self {
        Self::with_graph(triples.into_iter().collect())
    }

    /// Whether two handles share the same underlying state
    pub fn same_context(&self, other: &Model) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Acquire the graph read guard
    pub fn read_graph(&self) -> RwLockReadGuard<'_, Graph> {
        self.inner.graph.read().unwrap()
    }

    /// Mutate the graph under the write lock
    ///
    /// Existing wrappers keep their resident content until it is cleared;
    /// this is the single mutation point of the model.
    pub fn update<R>(&self, f: impl FnOnce(&mut Graph) -> R) -> R {
        let mut graph = self.inner.graph.write().unwrap();
        f(&mut graph)
    }

    /// Snapshot of the content cache counters
    pub fn stats(&self) -> ContentStatsSnapshot {
        self.inner.stats.snapshot()
    }

    pub(crate) fn stats_ref(&self) -> &ContentStats {
        &self.inner.stats
    }

    /// Number of wrappers in the dedup table
    pub fn cached_objects(&self) -> usize {
        self.inner.objects.len()
    }

    /// Clear the resident content of every cached wrapper
    ///
    /// Wrappers stay valid; the next content access re-decodes from the
    /// current graph state.
    pub fn clear_all_content(&self) {
        for entry in self.inner.objects.iter() {
            entry.value().clear_content();
        }
    }

    /// Drop every cached wrapper
    ///
    /// Wrappers already handed out stay usable but are no longer canonical:
    /// a later resolve of the same key builds a fresh wrapper.
    pub fn invalidate(&self) {
        self.inner.objects.clear();
    }

    fn intern(&self, key: ObjectKey, obj: Arc<OntObject>) -> Arc<OntObject> {
        self.inner.objects.entry(key).or_insert(obj).clone()
    }

    /// Resolve a graph node to its canonical wrapper
    ///
    /// IRIs resolve through their declarations, blank nodes through shape
    /// detection (falling back to anonymous individuals for blank nodes the
    /// graph merely mentions), literals context-free. An IRI with no
    /// declaration and a blank node the graph never mentions are
    /// unresolvable.
    pub fn resolve(&self, term: &Term) -> Result<Arc<OntObject>> {
        let key = ObjectKey::Node(term.clone());
        if let Some(existing) = self.inner.objects.get(&key) {
            return Ok(existing.clone());
        }

        let obj = match term {
            Term::Literal(lit) => Arc::new(OntObject::Literal(lit.clone())),
            Term::Iri(iri) => {
                let graph = self.read_graph();
                let kind = declared_kind(&graph, term, iri).ok_or_else(|| {
                    Error::unresolvable(format!("IRI {} has no entity declaration", iri))
                })?;
                Arc::new(OntObject::Entity(Entity {
                    kind,
                    iri: iri.clone(),
                }))
            }
            Term::BlankNode(id) => {
                let graph = self.read_graph();
                match expression::detect(&graph, term)? {
                    Some(shape) => Arc::new(OntObject::Expression(Expression::new(
                        shape,
                        id.clone(),
                        self.clone(),
                    ))),
                    None => {
                        let mentioned = graph.matching(Some(term), None, None).next().is_some()
                            || graph.matching(None, None, Some(term)).next().is_some();
                        if !mentioned {
                            return Err(Error::unresolvable(format!(
                                "blank node {} does not occur in the graph",
                                term
                            )));
                        }
                        Arc::new(OntObject::Anonymous(id.clone()))
                    }
                }
            }
        };
        trace!(term = %term, "resolved node wrapper");
        Ok(self.intern(key, obj))
    }

    /// Resolve a blank node under a caller-asserted expression shape
    ///
    /// Skips detection; the shape is trusted and content collection will
    /// surface a malformed structure if it does not hold.
    pub fn resolve_with(&self, term: &Term, shape: ExpressionShape) -> Result<Arc<OntObject>> {
        let key = ObjectKey::Node(term.clone());
        if let Some(existing) = self.inner.objects.get(&key) {
            return Ok(existing.clone());
        }
        let id = term.as_blank().cloned().ok_or_else(|| {
            Error::malformed(format!("{} cannot carry expression shape {}", term, shape))
        })?;
        let obj = Arc::new(OntObject::Expression(Expression::new(
            shape,
            id,
            self.clone(),
        )));
        Ok(self.intern(key, obj))
    }

    /// Resolve a nested expression operand while the graph guard is held
    pub(crate) fn resolve_expression_in(
        &self,
        graph: &Graph,
        term: &Term,
    ) -> Result<Arc<OntObject>> {
        let key = ObjectKey::Node(term.clone());
        if let Some(existing) = self.inner.objects.get(&key) {
            return Ok(existing.clone());
        }
        let id = term.as_blank().cloned().ok_or_else(|| {
            Error::malformed(format!("{} where an anonymous expression is required", term))
        })?;
        let shape = expression::detect(graph, term)?.ok_or_else(|| {
            Error::malformed(format!(
                "blank node {} carries no expression statements",
                term
            ))
        })?;
        let obj = Arc::new(OntObject::Expression(Expression::new(
            shape,
            id,
            self.clone(),
        )));
        Ok(self.intern(key, obj))
    }

    /// Resolve a root statement to its canonical axiom wrapper
    pub fn resolve_axiom(&self, key: TripleKey) -> Result<Arc<OntObject>> {
        let okey = ObjectKey::Statement(key.clone());
        if let Some(existing) = self.inner.objects.get(&okey) {
            return Ok(existing.clone());
        }
        let shape = {
            let graph = self.read_graph();
            self.check_root(&graph, &key)?;
            axiom::detect(&graph, &key)?
        };
        let obj = Arc::new(OntObject::Axiom(Axiom::new(shape, key, self.clone())));
        trace!(axiom = %obj, "resolved axiom wrapper");
        Ok(self.intern(okey, obj))
    }

    /// Resolve a root statement under a caller-asserted axiom shape
    pub fn resolve_axiom_with(&self, key: TripleKey, shape: AxiomShape) -> Result<Arc<OntObject>> {
        let okey = ObjectKey::Statement(key.clone());
        if let Some(existing) = self.inner.objects.get(&okey) {
            return Ok(existing.clone());
        }
        {
            let graph = self.read_graph();
            self.check_root(&graph, &key)?;
        }
        let obj = Arc::new(OntObject::Axiom(Axiom::new(shape, key, self.clone())));
        Ok(self.intern(okey, obj))
    }

    fn check_root(&self, graph: &Graph, key: &TripleKey) -> Result<()> {
        let pred = key.p.as_iri().ok_or_else(|| {
            Error::malformed(format!("root statement {} has a non-IRI predicate", key))
        })?;
        if !graph.contains_triple(&key.s, pred, &key.o) {
            return Err(Error::unresolvable(format!(
                "no statement {} in the graph",
                key
            )));
        }
        Ok(())
    }

    /// Enumerate every axiom decodable from the current graph
    ///
    /// Statements that belong to encoding machinery (list cells, reification
    /// nodes, expression internals) are skipped, as are statements that fail
    /// shape detection.
    pub fn axioms(&self) -> Result<Vec<Arc<OntObject>>> {
        let mut found = Vec::new();
        let mut seen: HashSet<TripleKey> = HashSet::new();
        let graph = self.read_graph();

        for t in graph.iter() {
            let pred = match t.p.as_iri() {
                Some(p) => p,
                None => continue,
            };
            if axiom::is_structural_predicate(pred) {
                continue;
            }
            if t.s.is_blank() {
                // The only axiom rooted on a blank node is the n-ary
                // disjointness form.
                if !(pred.as_ref() == rdf::TYPE && t.o.is_iri_str(owl::ALL_DISJOINT_CLASSES)) {
                    continue;
                }
            } else if pred.as_ref() == rdf::TYPE {
                if let Some(o) = t.o.as_iri() {
                    if axiom::is_structural_type(o) {
                        continue;
                    }
                }
            }

            let key = TripleKey::from_triple(t);
            if !seen.insert(key.clone()) {
                continue;
            }
            match axiom::detect(&graph, &key) {
                Ok(shape) => {
                    let okey = ObjectKey::Statement(key.clone());
                    let obj = match self.inner.objects.get(&okey) {
                        Some(existing) => existing.clone(),
                        None => self.intern(
                            okey,
                            Arc::new(OntObject::Axiom(Axiom::new(shape, key, self.clone()))),
                        ),
                    };
                    found.push(obj);
                }
                Err(err) => {
                    debug!(statement = %key, %err, "skipping undecodable statement");
                }
            }
        }
        Ok(found)
    }

    /// Structural membership check: does any axiom in the graph equal `obj`?
    ///
    /// Works across resolution paths and across models; comparison runs
    /// after enumeration so no graph lock is held during content forcing.
    pub fn contains_axiom(&self, obj: &OntObject) -> Result<bool> {
        for ax in self.axioms()? {
            if ax.equals(obj)? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Declared entity kind of an IRI node
///
/// Declarations win; `owl:Thing`/`owl:Nothing` and the XSD namespace are
/// built-in.
fn declared_kind(graph: &Graph, term: &Term, iri: &str) -> Option<EntityKind> {
    for o in graph.objects_of(term, rdf::TYPE) {
        if let Some(t) = o.as_iri() {
            if let Some(kind) = EntityKind::from_type_iri(t) {
                return Some(kind);
            }
        }
    }
    if iri == owl::THING || iri == owl::NOTHING {
        return Some(EntityKind::Class);
    }
    if iri.starts_with(XSD_NS) {
        return Some(EntityKind::Datatype);
    }
    None
}
