//! Class-expression and data-range shapes
//!
//! Anonymous expressions are blank nodes whose statements match one of a
//! closed set of shapes. For example:
//!
//! ```turtle
//! ex:Parent owl:equivalentClass [
//!     a owl:Restriction ;
//!     owl:onProperty ex:hasChild ;
//!     owl:someValuesFrom ex:Person
//! ] .
//! ```
//!
//! This module owns shape detection (which shape does a blank node encode)
//! and content collection (the deterministic mapping from (graph, node) to a
//! content array). Shared decoding logic is expressed as free functions
//! parameterized by the item-materialization rules of each position, not as
//! a type hierarchy.

use crate::content::{self, ContentItem, FacetRestriction};
use crate::error::{Error, Result};
use crate::list::collect_list;
use crate::model::Model;
use crate::object::OntObject;
use crate::signature::EntityKind;
use ontograph_ir::{Graph, Term};
use ontograph_vocab::{owl, rdf, rdfs, xsd};
use tracing::trace;

/// Concrete anonymous expression shapes
///
/// `Object*` restriction shapes and the set/complement class shapes are
/// class expressions; `Data{Union,Intersection,Complement,One}Of` and
/// `DatatypeRestriction` are data ranges. `Data{Some,All,Has,Min,Max,Exact}*`
/// are class expressions over data properties.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExpressionShape {
    ObjectSomeValuesFrom,
    ObjectAllValuesFrom,
    ObjectHasValue,
    ObjectHasSelf,
    ObjectMinCardinality,
    ObjectMaxCardinality,
    ObjectExactCardinality,
    ObjectUnionOf,
    ObjectIntersectionOf,
    ObjectComplementOf,
    ObjectOneOf,
    DataSomeValuesFrom,
    DataAllValuesFrom,
    DataHasValue,
    DataMinCardinality,
    DataMaxCardinality,
    DataExactCardinality,
    DataUnionOf,
    DataIntersectionOf,
    DataComplementOf,
    DataOneOf,
    DatatypeRestriction,
}

impl ExpressionShape {
    /// Stable per-shape tag, part of the wrapper kind-index space
    pub(crate) fn tag(self) -> u32 {
        self as u32
    }

    /// Shape name for diagnostics
    pub fn name(self) -> &'static str {
        match self {
            ExpressionShape::ObjectSomeValuesFrom => "ObjectSomeValuesFrom",
            ExpressionShape::ObjectAllValuesFrom => "ObjectAllValuesFrom",
            ExpressionShape::ObjectHasValue => "ObjectHasValue",
            ExpressionShape::ObjectHasSelf => "ObjectHasSelf",
            ExpressionShape::ObjectMinCardinality => "ObjectMinCardinality",
            ExpressionShape::ObjectMaxCardinality => "ObjectMaxCardinality",
            ExpressionShape::ObjectExactCardinality => "ObjectExactCardinality",
            ExpressionShape::ObjectUnionOf => "ObjectUnionOf",
            ExpressionShape::ObjectIntersectionOf => "ObjectIntersectionOf",
            ExpressionShape::ObjectComplementOf => "ObjectComplementOf",
            ExpressionShape::ObjectOneOf => "ObjectOneOf",
            ExpressionShape::DataSomeValuesFrom => "DataSomeValuesFrom",
            ExpressionShape::DataAllValuesFrom => "DataAllValuesFrom",
            ExpressionShape::DataHasValue => "DataHasValue",
            ExpressionShape::DataMinCardinality => "DataMinCardinality",
            ExpressionShape::DataMaxCardinality => "DataMaxCardinality",
            ExpressionShape::DataExactCardinality => "DataExactCardinality",
            ExpressionShape::DataUnionOf => "DataUnionOf",
            ExpressionShape::DataIntersectionOf => "DataIntersectionOf",
            ExpressionShape::DataComplementOf => "DataComplementOf",
            ExpressionShape::DataOneOf => "DataOneOf",
            ExpressionShape::DatatypeRestriction => "DatatypeRestriction",
        }
    }

    /// Whether the content array is positional (order-sensitive)
    ///
    /// Set-valued shapes store canonically ordered members and hash
    /// order-independently; everything else preserves position.
    pub fn is_ordered(self) -> bool {
        !matches!(
            self,
            ExpressionShape::ObjectUnionOf
                | ExpressionShape::ObjectIntersectionOf
                | ExpressionShape::ObjectOneOf
                | ExpressionShape::DataUnionOf
                | ExpressionShape::DataIntersectionOf
                | ExpressionShape::DataOneOf
        )
    }

    /// Capability flag: can an entity of `kind` ever occur beneath this shape?
    ///
    /// Used to prune signature traversal without forcing content.
    pub fn may_contain(self, kind: EntityKind) -> bool {
        use ExpressionShape::*;
        // Containers whose operands are class expressions (transitively
        // anything a class expression can hold).
        let class_container = matches!(
            self,
            ObjectSomeValuesFrom
                | ObjectAllValuesFrom
                | ObjectMinCardinality
                | ObjectMaxCardinality
                | ObjectExactCardinality
                | ObjectUnionOf
                | ObjectIntersectionOf
                | ObjectComplementOf
        );
        // Containers whose operands are data ranges.
        let data_range_container = matches!(
            self,
            DataUnionOf | DataIntersectionOf | DataComplementOf | DatatypeRestriction
        );
        // Class expressions over a data property.
        let data_restriction = matches!(
            self,
            DataSomeValuesFrom
                | DataAllValuesFrom
                | DataHasValue
                | DataMinCardinality
                | DataMaxCardinality
                | DataExactCardinality
        );

        match kind {
            EntityKind::AnnotationProperty => false,
            EntityKind::Class => class_container,
            EntityKind::ObjectProperty => {
                class_container | matches!(self, ObjectHasValue | ObjectHasSelf)
            }
            EntityKind::DataProperty => class_container | data_restriction,
            EntityKind::Datatype => {
                class_container | data_range_container | data_restriction | matches!(self, DataOneOf)
            }
            EntityKind::NamedIndividual => {
                class_container | matches!(self, ObjectHasValue | ObjectOneOf)
            }
        }
    }
}

impl std::fmt::Display for ExpressionShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Entity kind of a bare-IRI content item at `idx`, per shape
///
/// Bare IRIs carry no kind of their own; position within the shape's array
/// determines it. Set-valued shapes assign all positions the member kind.
pub(crate) fn item_kind(shape: ExpressionShape, idx: usize) -> Option<EntityKind> {
    use ExpressionShape::*;
    match shape {
        ObjectSomeValuesFrom | ObjectAllValuesFrom => match idx {
            0 => Some(EntityKind::ObjectProperty),
            1 => Some(EntityKind::Class),
            _ => None,
        },
        DataSomeValuesFrom | DataAllValuesFrom => match idx {
            0 => Some(EntityKind::DataProperty),
            1 => Some(EntityKind::Datatype),
            _ => None,
        },
        ObjectHasValue => match idx {
            0 => Some(EntityKind::ObjectProperty),
            1 => Some(EntityKind::NamedIndividual),
            _ => None,
        },
        DataHasValue => match idx {
            0 => Some(EntityKind::DataProperty),
            _ => None,
        },
        ObjectHasSelf => match idx {
            0 => Some(EntityKind::ObjectProperty),
            _ => None,
        },
        ObjectMinCardinality | ObjectMaxCardinality | ObjectExactCardinality => match idx {
            0 => Some(EntityKind::ObjectProperty),
            2 => Some(EntityKind::Class),
            _ => None,
        },
        DataMinCardinality | DataMaxCardinality | DataExactCardinality => match idx {
            0 => Some(EntityKind::DataProperty),
            2 => Some(EntityKind::Datatype),
            _ => None,
        },
        ObjectUnionOf | ObjectIntersectionOf | ObjectComplementOf => Some(EntityKind::Class),
        ObjectOneOf => Some(EntityKind::NamedIndividual),
        DataUnionOf | DataIntersectionOf | DataComplementOf => Some(EntityKind::Datatype),
        DataOneOf => None,
        DatatypeRestriction => match idx {
            0 => Some(EntityKind::Datatype),
            _ => None,
        },
    }
}

/// Constraining facet IRIs recognized in datatype restrictions
const FACET_IRIS: &[&str] = &[
    xsd::MIN_INCLUSIVE,
    xsd::MAX_INCLUSIVE,
    xsd::MIN_EXCLUSIVE,
    xsd::MAX_EXCLUSIVE,
    xsd::LENGTH,
    xsd::MIN_LENGTH,
    xsd::MAX_LENGTH,
    xsd::PATTERN,
];

/// Check whether an IRI term is declared as a datatype property
fn is_data_property(graph: &Graph, term: &Term) -> bool {
    graph.contains_triple(term, rdf::TYPE, &Term::iri(owl::DATATYPE_PROPERTY))
}

/// Check whether a node is declared rdfs:Datatype (data-range flavored)
fn is_datatype_node(graph: &Graph, node: &Term) -> bool {
    graph.contains_triple(node, rdf::TYPE, &Term::iri(rdfs::DATATYPE))
}

/// Exactly-one object of (s, p), or a malformed-structure error
fn single_object<'g>(graph: &'g Graph, s: &Term, p: &str, what: &str) -> Result<&'g Term> {
    let mut it = graph.objects_of(s, p);
    let first = it
        .next()
        .ok_or_else(|| Error::malformed(format!("{} {} has no {}", what, s, p)))?;
    if it.next().is_some() {
        return Err(Error::malformed(format!(
            "{} {} has multiple {} statements",
            what, s, p
        )));
    }
    Ok(first)
}

/// Determine the shape a blank node encodes, if any
///
/// Returns `Ok(None)` when the node carries no expression statements at all
/// (it may still be a valid anonymous individual). A partial match - e.g. an
/// `owl:onProperty` with no constraint, or conflicting constraints - is a
/// malformed structure.
pub(crate) fn detect(graph: &Graph, node: &Term) -> Result<Option<ExpressionShape>> {
    use ExpressionShape::*;

    if graph.has(node, owl::ON_PROPERTY) {
        let prop = single_object(graph, node, owl::ON_PROPERTY, "restriction")?;
        let data = is_data_property(graph, prop);

        // (constraint predicate, object shape, data shape); exactly one of
        // these must be present on a restriction node.
        let constraints: &[(&str, ExpressionShape, ExpressionShape)] = &[
            (owl::SOME_VALUES_FROM, ObjectSomeValuesFrom, DataSomeValuesFrom),
            (owl::ALL_VALUES_FROM, ObjectAllValuesFrom, DataAllValuesFrom),
            (owl::HAS_VALUE, ObjectHasValue, DataHasValue),
            (owl::HAS_SELF, ObjectHasSelf, ObjectHasSelf),
            (owl::MIN_CARDINALITY, ObjectMinCardinality, DataMinCardinality),
            (
                owl::MIN_QUALIFIED_CARDINALITY,
                ObjectMinCardinality,
                DataMinCardinality,
            ),
            (owl::MAX_CARDINALITY, ObjectMaxCardinality, DataMaxCardinality),
            (
                owl::MAX_QUALIFIED_CARDINALITY,
                ObjectMaxCardinality,
                DataMaxCardinality,
            ),
            (owl::CARDINALITY, ObjectExactCardinality, DataExactCardinality),
            (
                owl::QUALIFIED_CARDINALITY,
                ObjectExactCardinality,
                DataExactCardinality,
            ),
        ];

        let mut found = None;
        for (pred, object_shape, data_shape) in constraints {
            if graph.has(node, pred) {
                let shape = if data { *data_shape } else { *object_shape };
                if found.is_some() {
                    return Err(Error::malformed(format!(
                        "restriction {} carries more than one constraint",
                        node
                    )));
                }
                found = Some(shape);
            }
        }
        return match found {
            Some(shape) => {
                trace!(node = %node, shape = %shape, "detected restriction shape");
                Ok(Some(shape))
            }
            None => Err(Error::malformed(format!(
                "restriction {} has owl:onProperty but no constraint",
                node
            ))),
        };
    }

    if graph.has(node, owl::UNION_OF) {
        return Ok(Some(if is_datatype_node(graph, node) {
            DataUnionOf
        } else {
            ObjectUnionOf
        }));
    }
    if graph.has(node, owl::INTERSECTION_OF) {
        return Ok(Some(if is_datatype_node(graph, node) {
            DataIntersectionOf
        } else {
            ObjectIntersectionOf
        }));
    }
    if graph.has(node, owl::ONE_OF) {
        if is_datatype_node(graph, node) {
            return Ok(Some(DataOneOf));
        }
        // Undeclared: sniff the member kind
        let head = single_object(graph, node, owl::ONE_OF, "enumeration")?;
        let members = collect_list(graph, head)?;
        let literal_members = members.iter().any(|m| m.is_literal());
        return Ok(Some(if literal_members { DataOneOf } else { ObjectOneOf }));
    }
    if graph.has(node, owl::COMPLEMENT_OF) {
        return Ok(Some(ObjectComplementOf));
    }
    if graph.has(node, owl::DATATYPE_COMPLEMENT_OF) {
        return Ok(Some(DataComplementOf));
    }
    if graph.has(node, owl::ON_DATATYPE) || graph.has(node, owl::WITH_RESTRICTIONS) {
        if graph.has(node, owl::ON_DATATYPE) && graph.has(node, owl::WITH_RESTRICTIONS) {
            return Ok(Some(DatatypeRestriction));
        }
        return Err(Error::malformed(format!(
            "datatype restriction {} needs both owl:onDatatype and owl:withRestrictions",
            node
        )));
    }

    Ok(None)
}

/// Materialize a class-expression position: bare IRI if named, recursively
/// resolved sub-wrapper if anonymous
pub(crate) fn class_item(model: &Model, graph: &Graph, term: &Term) -> Result<ContentItem> {
    match term {
        Term::Iri(iri) => Ok(ContentItem::Iri(iri.clone())),
        Term::BlankNode(_) => {
            let sub = model.resolve_expression_in(graph, term)?;
            // Seed nested content now, while the graph is in hand, so
            // canonical ordering and hashing need no further graph access.
            sub.force_content_in(graph)?;
            Ok(ContentItem::Object(sub))
        }
        Term::Literal(_) => Err(Error::malformed(format!(
            "literal {} where a class expression is required",
            term
        ))),
    }
}

/// Materialize a data-range position
pub(crate) fn data_range_item(model: &Model, graph: &Graph, term: &Term) -> Result<ContentItem> {
    match term {
        Term::Iri(iri) => Ok(ContentItem::Iri(iri.clone())),
        Term::BlankNode(_) => {
            let sub = model.resolve_expression_in(graph, term)?;
            sub.force_content_in(graph)?;
            Ok(ContentItem::Object(sub))
        }
        Term::Literal(_) => Err(Error::malformed(format!(
            "literal {} where a data range is required",
            term
        ))),
    }
}

/// Materialize an individual position: bare IRI if named, blank id if anonymous
pub(crate) fn individual_item(term: &Term) -> Result<ContentItem> {
    match term {
        Term::Iri(iri) => Ok(ContentItem::Iri(iri.clone())),
        Term::BlankNode(id) => Ok(ContentItem::Blank(id.clone())),
        Term::Literal(_) => Err(Error::malformed(format!(
            "literal {} where an individual is required",
            term
        ))),
    }
}

/// Materialize a literal position as a literal sub-wrapper
pub(crate) fn literal_item(term: &Term) -> Result<ContentItem> {
    match term {
        Term::Literal(lit) => Ok(ContentItem::Object(std::sync::Arc::new(OntObject::Literal(
            lit.clone(),
        )))),
        _ => Err(Error::malformed(format!(
            "{} where a literal is required",
            term
        ))),
    }
}

/// The named property of a restriction node, as a bare-IRI item
fn property_item(graph: &Graph, node: &Term) -> Result<ContentItem> {
    let prop = single_object(graph, node, owl::ON_PROPERTY, "restriction")?;
    match prop {
        Term::Iri(iri) => Ok(ContentItem::Iri(iri.clone())),
        _ => Err(Error::malformed(format!(
            "restriction {} has an anonymous property expression",
            node
        ))),
    }
}

/// Decode a non-negative cardinality from a restriction node
///
/// The qualified and unqualified predicates are alternatives; both present
/// is malformed.
fn cardinality_scalar(graph: &Graph, node: &Term, plain: &str, qualified: &str) -> Result<(i64, bool)> {
    let has_plain = graph.has(node, plain);
    let has_qualified = graph.has(node, qualified);
    let (pred, qualified) = match (has_plain, has_qualified) {
        (true, false) => (plain, false),
        (false, true) => (qualified, true),
        (true, true) => {
            return Err(Error::malformed(format!(
                "restriction {} carries both qualified and unqualified cardinality",
                node
            )))
        }
        (false, false) => {
            return Err(Error::malformed(format!(
                "restriction {} has no cardinality value",
                node
            )))
        }
    };
    let value = single_object(graph, node, pred, "cardinality restriction")?;
    let n = value
        .as_integer()
        .ok_or_else(|| Error::invalid_literal(format!("cardinality {} is not an integer", value)))?;
    if n < 0 {
        return Err(Error::invalid_literal(format!(
            "cardinality {} is negative",
            n
        )));
    }
    Ok((n, qualified))
}

/// Collect `[property, n]` or `[property, n, filler]` for a cardinality shape
fn collect_cardinality(
    model: &Model,
    graph: &Graph,
    node: &Term,
    plain: &str,
    qualified_pred: &str,
    filler_pred: &str,
    data: bool,
) -> Result<Vec<ContentItem>> {
    let property = property_item(graph, node)?;
    let (n, qualified) = cardinality_scalar(graph, node, plain, qualified_pred)?;
    let mut items = vec![property, ContentItem::Scalar(n)];
    if qualified {
        let filler = single_object(graph, node, filler_pred, "qualified cardinality")?;
        items.push(if data {
            data_range_item(model, graph, filler)?
        } else {
            class_item(model, graph, filler)?
        });
    }
    Ok(items)
}

/// Collect the canonical member set of a set-valued shape
fn collect_members<F>(
    graph: &Graph,
    node: &Term,
    pred: &str,
    mut materialize: F,
) -> Result<Vec<ContentItem>>
where
    F: FnMut(&Term) -> Result<ContentItem>,
{
    let head = single_object(graph, node, pred, "set expression")?;
    let members = collect_list(graph, head)?;
    if members.is_empty() {
        return Err(Error::malformed(format!(
            "set expression {} has an empty member list",
            node
        )));
    }
    let items = members
        .iter()
        .map(|m| materialize(m))
        .collect::<Result<Vec<_>>>()?;
    content::canonical_sort(items)
}

/// Deterministic (graph, node) -> content array mapping for one shape
pub(crate) fn collect(
    model: &Model,
    graph: &Graph,
    shape: ExpressionShape,
    node: &Term,
) -> Result<Vec<ContentItem>> {
    use ExpressionShape::*;
    trace!(node = %node, shape = %shape, "collecting expression content");

    match shape {
        ObjectSomeValuesFrom | ObjectAllValuesFrom => {
            let pred = if shape == ObjectSomeValuesFrom {
                owl::SOME_VALUES_FROM
            } else {
                owl::ALL_VALUES_FROM
            };
            let property = property_item(graph, node)?;
            let filler = class_item(model, graph, single_object(graph, node, pred, "restriction")?)?;
            Ok(vec![property, filler])
        }
        DataSomeValuesFrom | DataAllValuesFrom => {
            let pred = if shape == DataSomeValuesFrom {
                owl::SOME_VALUES_FROM
            } else {
                owl::ALL_VALUES_FROM
            };
            let property = property_item(graph, node)?;
            let filler =
                data_range_item(model, graph, single_object(graph, node, pred, "restriction")?)?;
            Ok(vec![property, filler])
        }
        ObjectHasValue => {
            let property = property_item(graph, node)?;
            let value = individual_item(single_object(graph, node, owl::HAS_VALUE, "restriction")?)?;
            Ok(vec![property, value])
        }
        DataHasValue => {
            let property = property_item(graph, node)?;
            let value = literal_item(single_object(graph, node, owl::HAS_VALUE, "restriction")?)?;
            Ok(vec![property, value])
        }
        ObjectHasSelf => {
            let property = property_item(graph, node)?;
            let flag = single_object(graph, node, owl::HAS_SELF, "restriction")?;
            let is_true = matches!(
                flag.as_literal().map(|l| &l.value),
                Some(ontograph_ir::LiteralValue::Boolean(true))
            );
            if !is_true {
                return Err(Error::malformed(format!(
                    "restriction {} has owl:hasSelf that is not boolean true",
                    node
                )));
            }
            Ok(vec![property])
        }
        ObjectMinCardinality => collect_cardinality(
            model,
            graph,
            node,
            owl::MIN_CARDINALITY,
            owl::MIN_QUALIFIED_CARDINALITY,
            owl::ON_CLASS,
            false,
        ),
        ObjectMaxCardinality => collect_cardinality(
            model,
            graph,
            node,
            owl::MAX_CARDINALITY,
            owl::MAX_QUALIFIED_CARDINALITY,
            owl::ON_CLASS,
            false,
        ),
        ObjectExactCardinality => collect_cardinality(
            model,
            graph,
            node,
            owl::CARDINALITY,
            owl::QUALIFIED_CARDINALITY,
            owl::ON_CLASS,
            false,
        ),
        DataMinCardinality => collect_cardinality(
            model,
            graph,
            node,
            owl::MIN_CARDINALITY,
            owl::MIN_QUALIFIED_CARDINALITY,
            owl::ON_DATA_RANGE,
            true,
        ),
        DataMaxCardinality => collect_cardinality(
            model,
            graph,
            node,
            owl::MAX_CARDINALITY,
            owl::MAX_QUALIFIED_CARDINALITY,
            owl::ON_DATA_RANGE,
            true,
        ),
        DataExactCardinality => collect_cardinality(
            model,
            graph,
            node,
            owl::CARDINALITY,
            owl::QUALIFIED_CARDINALITY,
            owl::ON_DATA_RANGE,
            true,
        ),
        ObjectUnionOf => {
            collect_members(graph, node, owl::UNION_OF, |m| class_item(model, graph, m))
        }
        ObjectIntersectionOf => collect_members(graph, node, owl::INTERSECTION_OF, |m| {
            class_item(model, graph, m)
        }),
        ObjectOneOf => collect_members(graph, node, owl::ONE_OF, individual_item),
        ObjectComplementOf => {
            let operand =
                class_item(model, graph, single_object(graph, node, owl::COMPLEMENT_OF, "complement")?)?;
            Ok(vec![operand])
        }
        DataUnionOf => collect_members(graph, node, owl::UNION_OF, |m| {
            data_range_item(model, graph, m)
        }),
        DataIntersectionOf => collect_members(graph, node, owl::INTERSECTION_OF, |m| {
            data_range_item(model, graph, m)
        }),
        DataOneOf => collect_members(graph, node, owl::ONE_OF, literal_item),
        DataComplementOf => {
            let operand = data_range_item(
                model,
                graph,
                single_object(graph, node, owl::DATATYPE_COMPLEMENT_OF, "complement")?,
            )?;
            Ok(vec![operand])
        }
        DatatypeRestriction => {
            let base = single_object(graph, node, owl::ON_DATATYPE, "datatype restriction")?;
            let base_item = match base {
                Term::Iri(iri) => ContentItem::Iri(iri.clone()),
                _ => {
                    return Err(Error::malformed(format!(
                        "datatype restriction {} has an anonymous base datatype",
                        node
                    )))
                }
            };
            let head = single_object(graph, node, owl::WITH_RESTRICTIONS, "datatype restriction")?;
            // Facets preserve declaration order
            let mut items = vec![base_item];
            for member in collect_list(graph, head)? {
                if !member.is_blank() {
                    return Err(Error::malformed(format!(
                        "facet node {} is not a blank node",
                        member
                    )));
                }
                items.push(facet_item(graph, &member)?);
            }
            if items.len() == 1 {
                return Err(Error::malformed(format!(
                    "datatype restriction {} has no facets",
                    node
                )));
            }
            Ok(items)
        }
    }
}

/// Decode a facet node: exactly one (facet IRI, literal) statement
fn facet_item(graph: &Graph, member: &Term) -> Result<ContentItem> {
    for t in graph.matching(Some(member), None, None) {
        if let Term::Iri(pred) = &t.p {
            if FACET_IRIS.contains(&pred.as_ref()) {
                let value = t.o.as_literal().ok_or_else(|| {
                    Error::malformed(format!("facet {} of {} has a non-literal value", pred, member))
                })?;
                return Ok(ContentItem::Facet(FacetRestriction {
                    facet: pred.clone(),
                    value: value.clone(),
                }));
            }
        }
    }
    Err(Error::malformed(format!(
        "facet node {} carries no recognized constraining facet",
        member
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_ir::Term;

    fn iri(s: &str) -> Term {
        Term::iri(s)
    }

    fn restriction_graph(constraint: &str, filler: Term) -> (Graph, Term) {
        let mut g = Graph::new();
        let node = Term::blank("r");
        g.add_triple(node.clone(), iri(rdf::TYPE), iri(owl::RESTRICTION));
        g.add_triple(node.clone(), iri(owl::ON_PROPERTY), iri("http://ex/p"));
        g.add_triple(node.clone(), iri(constraint), filler);
        (g, node)
    }

    #[test]
    fn test_detect_some_values_from() {
        let (g, node) = restriction_graph(owl::SOME_VALUES_FROM, iri("http://ex/C"));
        assert_eq!(
            detect(&g, &node).unwrap(),
            Some(ExpressionShape::ObjectSomeValuesFrom)
        );
    }

    #[test]
    fn test_detect_data_restriction_by_property_declaration() {
        let (mut g, node) = restriction_graph(owl::SOME_VALUES_FROM, iri(xsd::STRING));
        g.add_triple(iri("http://ex/p"), iri(rdf::TYPE), iri(owl::DATATYPE_PROPERTY));
        assert_eq!(
            detect(&g, &node).unwrap(),
            Some(ExpressionShape::DataSomeValuesFrom)
        );
    }

    #[test]
    fn test_detect_bare_on_property_is_malformed() {
        let mut g = Graph::new();
        let node = Term::blank("r");
        g.add_triple(node.clone(), iri(owl::ON_PROPERTY), iri("http://ex/p"));
        assert!(detect(&g, &node).is_err());
    }

    #[test]
    fn test_detect_conflicting_constraints_is_malformed() {
        let (mut g, node) = restriction_graph(owl::SOME_VALUES_FROM, iri("http://ex/C"));
        g.add_triple(node.clone(), iri(owl::ALL_VALUES_FROM), iri("http://ex/D"));
        assert!(detect(&g, &node).is_err());
    }

    #[test]
    fn test_detect_nothing_returns_none() {
        let mut g = Graph::new();
        let node = Term::blank("anon");
        g.add_triple(iri("http://ex/x"), iri("http://ex/knows"), node.clone());
        assert_eq!(detect(&g, &node).unwrap(), None);
    }

    #[test]
    fn test_item_kinds_positional() {
        let shape = ExpressionShape::ObjectSomeValuesFrom;
        assert_eq!(item_kind(shape, 0), Some(EntityKind::ObjectProperty));
        assert_eq!(item_kind(shape, 1), Some(EntityKind::Class));
        assert_eq!(item_kind(shape, 2), None);
    }

    #[test]
    fn test_capability_flags() {
        // A data restriction can never contain a class expression
        assert!(!ExpressionShape::DataSomeValuesFrom.may_contain(EntityKind::Class));
        assert!(ExpressionShape::DataSomeValuesFrom.may_contain(EntityKind::DataProperty));
        assert!(ExpressionShape::DataSomeValuesFrom.may_contain(EntityKind::Datatype));

        // Enumerations hold individuals only
        assert!(ExpressionShape::ObjectOneOf.may_contain(EntityKind::NamedIndividual));
        assert!(!ExpressionShape::ObjectOneOf.may_contain(EntityKind::ObjectProperty));

        // No expression holds annotation properties
        assert!(!ExpressionShape::ObjectUnionOf.may_contain(EntityKind::AnnotationProperty));
    }

    #[test]
    fn test_ordering_classification() {
        assert!(ExpressionShape::ObjectSomeValuesFrom.is_ordered());
        assert!(ExpressionShape::DatatypeRestriction.is_ordered());
        assert!(!ExpressionShape::ObjectUnionOf.is_ordered());
        assert!(!ExpressionShape::DataOneOf.is_ordered());
    }
}
