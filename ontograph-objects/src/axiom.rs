//! Statement-bound axiom shapes
//!
//! An axiom wrapper is keyed by the root statement that asserts it, e.g.
//! `ex:Dog rdfs:subClassOf ex:Animal`. Shape detection dispatches on the root
//! predicate (and, for `rdf:type` roots, the object); content collection
//! decodes the operands positionally or as a canonical set, then appends any
//! annotations discovered through the `owl:Axiom` reification protocol.
//!
//! The one complex form is `AllDisjointClasses`: its root is an
//! `rdf:type owl:AllDisjointClasses` statement on a node carrying an
//! `owl:members` list, with annotations sitting directly on that node.

use crate::content::{self, Annotation, ContentItem};
use crate::error::{Error, Result};
use crate::expression::{class_item, data_range_item, individual_item, literal_item};
use crate::list::collect_list;
use crate::model::Model;
use crate::node::TripleKey;
use crate::signature::EntityKind;
use ontograph_ir::{Graph, Term};
use ontograph_vocab::{owl, rdf, rdfs};
use tracing::trace;

/// Concrete statement-bound axiom shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AxiomShape {
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    AllDisjointClasses,
    SubObjectPropertyOf,
    SubDataPropertyOf,
    InverseObjectProperties,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    DataPropertyDomain,
    DataPropertyRange,
    FunctionalObjectProperty,
    FunctionalDataProperty,
    ClassAssertion,
    ObjectPropertyAssertion,
    DataPropertyAssertion,
    SameIndividual,
    DifferentIndividuals,
    AnnotationAssertion,
    Declaration,
}

impl AxiomShape {
    /// Stable per-shape tag, part of the wrapper kind-index space
    pub(crate) fn tag(self) -> u32 {
        self as u32
    }

    /// Shape name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            AxiomShape::SubClassOf => "SubClassOf",
            AxiomShape::EquivalentClasses => "EquivalentClasses",
            AxiomShape::DisjointClasses => "DisjointClasses",
            AxiomShape::AllDisjointClasses => "AllDisjointClasses",
            AxiomShape::SubObjectPropertyOf => "SubObjectPropertyOf",
            AxiomShape::SubDataPropertyOf => "SubDataPropertyOf",
            AxiomShape::InverseObjectProperties => "InverseObjectProperties",
            AxiomShape::ObjectPropertyDomain => "ObjectPropertyDomain",
            AxiomShape::ObjectPropertyRange => "ObjectPropertyRange",
            AxiomShape::DataPropertyDomain => "DataPropertyDomain",
            AxiomShape::DataPropertyRange => "DataPropertyRange",
            AxiomShape::FunctionalObjectProperty => "FunctionalObjectProperty",
            AxiomShape::FunctionalDataProperty => "FunctionalDataProperty",
            AxiomShape::ClassAssertion => "ClassAssertion",
            AxiomShape::ObjectPropertyAssertion => "ObjectPropertyAssertion",
            AxiomShape::DataPropertyAssertion => "DataPropertyAssertion",
            AxiomShape::SameIndividual => "SameIndividual",
            AxiomShape::DifferentIndividuals => "DifferentIndividuals",
            AxiomShape::AnnotationAssertion => "AnnotationAssertion",
            AxiomShape::Declaration => "Declaration",
        }
    }

    /// Whether the operand pair is symmetric (stored as a canonical set)
    pub fn is_symmetric(self) -> bool {
        matches!(
            self,
            AxiomShape::EquivalentClasses
                | AxiomShape::DisjointClasses
                | AxiomShape::AllDisjointClasses
                | AxiomShape::InverseObjectProperties
                | AxiomShape::SameIndividual
                | AxiomShape::DifferentIndividuals
        )
    }

    /// Capability flag: can an entity of `kind` ever occur beneath this axiom?
    ///
    /// Every axiom can carry annotations, so `AnnotationProperty` is always
    /// reachable. Shapes with class-expression operands are transparent to
    /// everything a class expression can hold.
    pub fn may_contain(self, kind: EntityKind) -> bool {
        use AxiomShape::*;
        if kind == EntityKind::AnnotationProperty {
            return true;
        }
        // Operands are class expressions: transitively anything one can hold.
        let class_operand = matches!(
            self,
            SubClassOf
                | EquivalentClasses
                | DisjointClasses
                | AllDisjointClasses
                | ObjectPropertyDomain
                | DataPropertyDomain
                | ObjectPropertyRange
                | ClassAssertion
        );

        match kind {
            EntityKind::Class => class_operand | matches!(self, Declaration),
            EntityKind::ObjectProperty => {
                class_operand
                    | matches!(
                        self,
                        SubObjectPropertyOf
                            | InverseObjectProperties
                            | FunctionalObjectProperty
                            | ObjectPropertyAssertion
                            | Declaration
                    )
            }
            EntityKind::DataProperty => {
                class_operand
                    | matches!(
                        self,
                        SubDataPropertyOf
                            | DataPropertyRange
                            | FunctionalDataProperty
                            | DataPropertyAssertion
                            | Declaration
                    )
            }
            EntityKind::Datatype => {
                class_operand
                    | matches!(
                        self,
                        DataPropertyRange | DataPropertyAssertion | AnnotationAssertion | Declaration
                    )
            }
            EntityKind::NamedIndividual => {
                class_operand
                    | matches!(
                        self,
                        ObjectPropertyAssertion
                            | DataPropertyAssertion
                            | SameIndividual
                            | DifferentIndividuals
                            | Declaration
                    )
            }
            EntityKind::AnnotationProperty => true,
        }
    }
}

impl std::fmt::Display for AxiomShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Entity kind of a bare-IRI content item at `idx`, per shape
///
/// `Declaration` is the one shape where the kind lives in the root statement
/// (the declared type IRI), hence the key parameter.
pub(crate) fn item_kind(
    shape: AxiomShape,
    key: Option<&TripleKey>,
    idx: usize,
) -> Option<EntityKind> {
    use AxiomShape::*;
    match shape {
        SubClassOf | EquivalentClasses | DisjointClasses | AllDisjointClasses => {
            Some(EntityKind::Class)
        }
        SubObjectPropertyOf | InverseObjectProperties => Some(EntityKind::ObjectProperty),
        SubDataPropertyOf => Some(EntityKind::DataProperty),
        ObjectPropertyDomain | ObjectPropertyRange => match idx {
            0 => Some(EntityKind::ObjectProperty),
            1 => Some(EntityKind::Class),
            _ => None,
        },
        DataPropertyDomain => match idx {
            0 => Some(EntityKind::DataProperty),
            1 => Some(EntityKind::Class),
            _ => None,
        },
        DataPropertyRange => match idx {
            0 => Some(EntityKind::DataProperty),
            1 => Some(EntityKind::Datatype),
            _ => None,
        },
        FunctionalObjectProperty => Some(EntityKind::ObjectProperty),
        FunctionalDataProperty => Some(EntityKind::DataProperty),
        ClassAssertion => match idx {
            0 => Some(EntityKind::NamedIndividual),
            1 => Some(EntityKind::Class),
            _ => None,
        },
        ObjectPropertyAssertion => match idx {
            0 | 2 => Some(EntityKind::NamedIndividual),
            1 => Some(EntityKind::ObjectProperty),
            _ => None,
        },
        DataPropertyAssertion => match idx {
            0 => Some(EntityKind::NamedIndividual),
            1 => Some(EntityKind::DataProperty),
            _ => None,
        },
        SameIndividual | DifferentIndividuals => Some(EntityKind::NamedIndividual),
        AnnotationAssertion => match idx {
            // The subject's kind is not recoverable from the statement alone
            1 => Some(EntityKind::AnnotationProperty),
            _ => None,
        },
        Declaration => {
            if idx != 0 {
                return None;
            }
            key.and_then(|k| k.o.as_iri())
                .and_then(|iri| EntityKind::from_type_iri(iri))
        }
    }
}

/// Declared kind of a property IRI, if any
fn property_kind(graph: &Graph, term: &Term) -> Option<EntityKind> {
    for o in graph.objects_of(term, rdf::TYPE) {
        if let Some(iri) = o.as_iri() {
            match EntityKind::from_type_iri(iri) {
                Some(
                    k @ (EntityKind::ObjectProperty
                    | EntityKind::DataProperty
                    | EntityKind::AnnotationProperty),
                ) => return Some(k),
                _ => {}
            }
        }
    }
    None
}

/// Dispatch object-vs-data flavor on the declared kind of a property subject
fn by_property_kind(
    graph: &Graph,
    subject: &Term,
    object_shape: AxiomShape,
    data_shape: AxiomShape,
) -> AxiomShape {
    match property_kind(graph, subject) {
        Some(EntityKind::DataProperty) => data_shape,
        _ => object_shape,
    }
}

/// Determine the axiom shape of a root statement
///
/// The caller has already checked that the statement exists in the graph.
pub(crate) fn detect(graph: &Graph, key: &TripleKey) -> Result<AxiomShape> {
    use AxiomShape::*;

    let pred = key.p.as_iri().ok_or_else(|| {
        Error::malformed(format!("root statement {} has a non-IRI predicate", key))
    })?;

    let shape = match pred.as_ref() {
        rdfs::SUB_CLASS_OF => SubClassOf,
        owl::EQUIVALENT_CLASS => EquivalentClasses,
        owl::DISJOINT_WITH => DisjointClasses,
        rdfs::SUB_PROPERTY_OF => {
            by_property_kind(graph, &key.s, SubObjectPropertyOf, SubDataPropertyOf)
        }
        owl::INVERSE_OF => InverseObjectProperties,
        rdfs::DOMAIN => by_property_kind(graph, &key.s, ObjectPropertyDomain, DataPropertyDomain),
        rdfs::RANGE => by_property_kind(graph, &key.s, ObjectPropertyRange, DataPropertyRange),
        owl::SAME_AS => SameIndividual,
        owl::DIFFERENT_FROM => DifferentIndividuals,
        rdf::TYPE => match key.o.as_iri().map(|i| i.as_ref()) {
            Some(owl::FUNCTIONAL_PROPERTY) => by_property_kind(
                graph,
                &key.s,
                FunctionalObjectProperty,
                FunctionalDataProperty,
            ),
            Some(owl::ALL_DISJOINT_CLASSES) => AllDisjointClasses,
            Some(iri) if EntityKind::from_type_iri(iri).is_some() => Declaration,
            _ => ClassAssertion,
        },
        other => match property_kind(graph, &key.p) {
            Some(EntityKind::ObjectProperty) => ObjectPropertyAssertion,
            Some(EntityKind::DataProperty) => DataPropertyAssertion,
            Some(EntityKind::AnnotationProperty) => AnnotationAssertion,
            _ => {
                return Err(Error::malformed(format!(
                    "statement {} uses undeclared property {}",
                    key, other
                )))
            }
        },
    };
    trace!(key = %key, shape = %shape, "detected axiom shape");
    Ok(shape)
}

/// A bare-IRI item from a named-property position
fn property_operand(term: &Term, key: &TripleKey) -> Result<ContentItem> {
    match term {
        Term::Iri(iri) => Ok(ContentItem::Iri(iri.clone())),
        _ => Err(Error::malformed(format!(
            "statement {} has an anonymous property operand",
            key
        ))),
    }
}

/// An item from a position that accepts any term (annotation values)
fn any_item(term: &Term) -> Result<ContentItem> {
    match term {
        Term::Iri(iri) => Ok(ContentItem::Iri(iri.clone())),
        Term::BlankNode(id) => Ok(ContentItem::Blank(id.clone())),
        Term::Literal(_) => literal_item(term),
    }
}

/// Deterministic (graph, key) -> content array mapping for one axiom shape
///
/// Operands come first (positional, or canonically ordered for symmetric
/// shapes), followed by the canonically ordered annotation suffix.
pub(crate) fn collect(
    model: &Model,
    graph: &Graph,
    shape: AxiomShape,
    key: &TripleKey,
) -> Result<Vec<ContentItem>> {
    use AxiomShape::*;
    trace!(key = %key, shape = %shape, "collecting axiom content");

    let s = &key.s;
    let o = &key.o;

    let mut items = match shape {
        SubClassOf => vec![class_item(model, graph, s)?, class_item(model, graph, o)?],
        EquivalentClasses | DisjointClasses => content::canonical_sort(vec![
            class_item(model, graph, s)?,
            class_item(model, graph, o)?,
        ])?,
        AllDisjointClasses => {
            let head = graph.object_of(s, owl::MEMBERS).ok_or_else(|| {
                Error::malformed(format!("disjointness node {} has no owl:members", s))
            })?;
            let members = collect_list(graph, head)?;
            if members.len() < 2 {
                return Err(Error::malformed(format!(
                    "disjointness node {} lists fewer than two members",
                    s
                )));
            }
            let operands = members
                .iter()
                .map(|m| class_item(model, graph, m))
                .collect::<Result<Vec<_>>>()?;
            content::canonical_sort(operands)?
        }
        SubObjectPropertyOf | SubDataPropertyOf => {
            vec![property_operand(s, key)?, property_operand(o, key)?]
        }
        InverseObjectProperties => content::canonical_sort(vec![
            property_operand(s, key)?,
            property_operand(o, key)?,
        ])?,
        ObjectPropertyDomain | DataPropertyDomain | ObjectPropertyRange => {
            vec![property_operand(s, key)?, class_item(model, graph, o)?]
        }
        DataPropertyRange => vec![
            property_operand(s, key)?,
            data_range_item(model, graph, o)?,
        ],
        FunctionalObjectProperty | FunctionalDataProperty => vec![property_operand(s, key)?],
        ClassAssertion => vec![individual_item(s)?, class_item(model, graph, o)?],
        ObjectPropertyAssertion => vec![
            individual_item(s)?,
            property_operand(&key.p, key)?,
            individual_item(o)?,
        ],
        DataPropertyAssertion => vec![
            individual_item(s)?,
            property_operand(&key.p, key)?,
            literal_item(o)?,
        ],
        SameIndividual | DifferentIndividuals => {
            content::canonical_sort(vec![individual_item(s)?, individual_item(o)?])?
        }
        AnnotationAssertion => vec![any_item(s)?, property_operand(&key.p, key)?, any_item(o)?],
        Declaration => match s {
            Term::Iri(iri) => vec![ContentItem::Iri(iri.clone())],
            _ => {
                return Err(Error::malformed(format!(
                    "declaration {} of a non-IRI subject",
                    key
                )))
            }
        },
    };

    let annotations = if shape == AllDisjointClasses {
        direct_annotations(graph, s)?
    } else {
        reified_annotations(graph, key)?
    };
    items.extend(annotations);
    Ok(items)
}

/// Annotations sitting directly on a complex-axiom root node
///
/// Everything other than the structural `rdf:type` and `owl:members`
/// statements counts as an annotation.
fn direct_annotations(graph: &Graph, node: &Term) -> Result<Vec<ContentItem>> {
    let mut found = Vec::new();
    for t in graph.matching(Some(node), None, None) {
        if t.predicate_is(rdf::TYPE) || t.predicate_is(owl::MEMBERS) {
            continue;
        }
        if let Term::Iri(pred) = &t.p {
            found.push(ContentItem::Annotation(Annotation {
                property: pred.clone(),
                value: t.o.clone(),
            }));
        }
    }
    content::canonical_sort(found)
}

/// Annotations discovered through the reification protocol
///
/// A reification node `r` carries `rdf:type owl:Axiom` plus
/// `owl:annotatedSource`/`Property`/`Target` statements matching the root;
/// every other statement on `r` is an annotation of the axiom.
fn reified_annotations(graph: &Graph, key: &TripleKey) -> Result<Vec<ContentItem>> {
    let mut found = Vec::new();
    for r in graph.subjects_where(rdf::TYPE, &Term::iri(owl::AXIOM)) {
        if !graph.contains_triple(r, owl::ANNOTATED_SOURCE, &key.s)
            || !graph.contains_triple(r, owl::ANNOTATED_PROPERTY, &key.p)
            || !graph.contains_triple(r, owl::ANNOTATED_TARGET, &key.o)
        {
            continue;
        }
        for t in graph.matching(Some(r), None, None) {
            if t.predicate_is(rdf::TYPE)
                || t.predicate_is(owl::ANNOTATED_SOURCE)
                || t.predicate_is(owl::ANNOTATED_PROPERTY)
                || t.predicate_is(owl::ANNOTATED_TARGET)
            {
                continue;
            }
            if let Term::Iri(pred) = &t.p {
                found.push(ContentItem::Annotation(Annotation {
                    property: pred.clone(),
                    value: t.o.clone(),
                }));
            }
        }
    }
    content::canonical_sort(found)
}

/// Predicates that belong to encoding machinery, never to a root statement
///
/// Used by axiom enumeration to skip list cells, reification nodes, and
/// expression internals.
pub(crate) fn is_structural_predicate(pred: &str) -> bool {
    matches!(
        pred,
        rdf::FIRST
            | rdf::REST
            | owl::MEMBERS
            | owl::ANNOTATED_SOURCE
            | owl::ANNOTATED_PROPERTY
            | owl::ANNOTATED_TARGET
            | owl::ON_PROPERTY
            | owl::ON_CLASS
            | owl::ON_DATA_RANGE
            | owl::ON_DATATYPE
            | owl::WITH_RESTRICTIONS
            | owl::SOME_VALUES_FROM
            | owl::ALL_VALUES_FROM
            | owl::HAS_VALUE
            | owl::HAS_SELF
            | owl::MIN_CARDINALITY
            | owl::MAX_CARDINALITY
            | owl::CARDINALITY
            | owl::MIN_QUALIFIED_CARDINALITY
            | owl::MAX_QUALIFIED_CARDINALITY
            | owl::QUALIFIED_CARDINALITY
            | owl::UNION_OF
            | owl::INTERSECTION_OF
            | owl::COMPLEMENT_OF
            | owl::DATATYPE_COMPLEMENT_OF
            | owl::ONE_OF
    )
}

/// Type IRIs whose `rdf:type` statements are encoding machinery
///
/// `owl:Class` and `rdfs:Datatype` are deliberately absent: on a named
/// subject those statements are declarations.
pub(crate) fn is_structural_type(iri: &str) -> bool {
    matches!(iri, owl::AXIOM | owl::RESTRICTION | rdf::LIST)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(s: &str) -> Term {
        Term::iri(s)
    }

    fn key(s: &str, p: &str, o: &str) -> TripleKey {
        TripleKey::new(iri(s), iri(p), iri(o))
    }

    #[test]
    fn test_detect_sub_class_of() {
        let g = Graph::new();
        let k = key("http://ex/Dog", rdfs::SUB_CLASS_OF, "http://ex/Animal");
        assert_eq!(detect(&g, &k).unwrap(), AxiomShape::SubClassOf);
    }

    #[test]
    fn test_detect_sub_property_by_declared_kind() {
        let mut g = Graph::new();
        g.add_triple(
            iri("http://ex/age"),
            iri(rdf::TYPE),
            iri(owl::DATATYPE_PROPERTY),
        );
        let k = key("http://ex/age", rdfs::SUB_PROPERTY_OF, "http://ex/attr");
        assert_eq!(detect(&g, &k).unwrap(), AxiomShape::SubDataPropertyOf);

        let k2 = key("http://ex/knows", rdfs::SUB_PROPERTY_OF, "http://ex/rel");
        assert_eq!(detect(&g, &k2).unwrap(), AxiomShape::SubObjectPropertyOf);
    }

    #[test]
    fn test_detect_type_dispatch() {
        let g = Graph::new();
        let decl = key("http://ex/Dog", rdf::TYPE, owl::CLASS);
        assert_eq!(detect(&g, &decl).unwrap(), AxiomShape::Declaration);

        let assertion = key("http://ex/rex", rdf::TYPE, "http://ex/Dog");
        assert_eq!(detect(&g, &assertion).unwrap(), AxiomShape::ClassAssertion);

        let disjoint = key("http://ex/n", rdf::TYPE, owl::ALL_DISJOINT_CLASSES);
        assert_eq!(detect(&g, &disjoint).unwrap(), AxiomShape::AllDisjointClasses);
    }

    #[test]
    fn test_detect_undeclared_assertion_property_is_malformed() {
        let g = Graph::new();
        let k = key("http://ex/rex", "http://ex/likes", "http://ex/spot");
        assert!(detect(&g, &k).is_err());
    }

    #[test]
    fn test_declaration_item_kind_comes_from_key() {
        let k = key("http://ex/Dog", rdf::TYPE, owl::CLASS);
        assert_eq!(
            item_kind(AxiomShape::Declaration, Some(&k), 0),
            Some(EntityKind::Class)
        );
        // Detached wrappers lose the key and with it the declared kind
        assert_eq!(item_kind(AxiomShape::Declaration, None, 0), None);
    }

    #[test]
    fn test_symmetry_classification() {
        assert!(AxiomShape::EquivalentClasses.is_symmetric());
        assert!(AxiomShape::SameIndividual.is_symmetric());
        assert!(!AxiomShape::SubClassOf.is_symmetric());
        assert!(!AxiomShape::ObjectPropertyAssertion.is_symmetric());
    }

    #[test]
    fn test_capability_flags() {
        assert!(AxiomShape::SubClassOf.may_contain(EntityKind::Class));
        // Nested restrictions make class operands transparent to properties
        assert!(AxiomShape::SubClassOf.may_contain(EntityKind::ObjectProperty));
        assert!(!AxiomShape::SameIndividual.may_contain(EntityKind::Class));
        // Annotations are allowed on every axiom
        assert!(AxiomShape::SameIndividual.may_contain(EntityKind::AnnotationProperty));
    }

    #[test]
    fn test_structural_predicates() {
        assert!(is_structural_predicate(rdf::FIRST));
        assert!(is_structural_predicate(owl::ANNOTATED_SOURCE));
        assert!(!is_structural_predicate(rdfs::SUB_CLASS_OF));
    }
}
