//! End-to-end behavior of the model, wrappers, and cache

use ontograph_ir::{Graph, Term};
use ontograph_objects::{
    content::content_eq, AxiomShape, ContentItem, EntityKind, Error, ExpressionShape, Model,
    SignatureCollector, TripleKey,
};
use ontograph_vocab::{owl, rdf, rdfs, xsd};
use std::sync::Arc;

const C: &str = "http://example.org/C";
const D: &str = "http://example.org/D";
const E: &str = "http://example.org/E";
const P: &str = "http://example.org/p";
const Q: &str = "http://example.org/q";
const ALICE: &str = "http://example.org/alice";
const BOB: &str = "http://example.org/bob";

fn iri(s: &str) -> Term {
    Term::iri(s)
}

fn item_iri(item: &ContentItem) -> Option<&str> {
    match item {
        ContentItem::Iri(i) => Some(i),
        _ => None,
    }
}

/// Declarations shared by most scenarios
fn base_model() -> Model {
    let model = Model::new();
    model.update(|g| {
        for class in [C, D, E] {
            g.add_triple(iri(class), iri(rdf::TYPE), iri(owl::CLASS));
        }
        g.add_triple(iri(P), iri(rdf::TYPE), iri(owl::OBJECT_PROPERTY));
        g.add_triple(iri(Q), iri(rdf::TYPE), iri(owl::DATATYPE_PROPERTY));
        for ind in [ALICE, BOB] {
            g.add_triple(iri(ind), iri(rdf::TYPE), iri(owl::NAMED_INDIVIDUAL));
        }
    });
    model
}

fn add_restriction(g: &mut Graph, label: &str, constraint: &str, prop: &str, filler: Term) -> Term {
    let node = Term::blank(label);
    g.add_triple(node.clone(), iri(rdf::TYPE), iri(owl::RESTRICTION));
    g.add_triple(node.clone(), iri(owl::ON_PROPERTY), iri(prop));
    g.add_triple(node.clone(), iri(constraint), filler);
    node
}

fn add_list(g: &mut Graph, label: &str, items: &[Term]) -> Term {
    if items.is_empty() {
        return iri(rdf::NIL);
    }
    let cells: Vec<Term> = (0..items.len())
        .map(|i| Term::blank(format!("{label}-cell{i}")))
        .collect();
    for (i, item) in items.iter().enumerate() {
        g.add_triple(cells[i].clone(), iri(rdf::FIRST), item.clone());
        let rest = if i + 1 < items.len() {
            cells[i + 1].clone()
        } else {
            iri(rdf::NIL)
        };
        g.add_triple(cells[i].clone(), iri(rdf::REST), rest);
    }
    cells[0].clone()
}

#[test]
fn some_values_from_decodes_to_bare_iris() {
    let model = base_model();
    let node = model.update(|g| add_restriction(g, "r", owl::SOME_VALUES_FROM, P, iri(C)));

    let obj = model.resolve(&node).unwrap();
    let expr = obj.as_expression().unwrap();
    assert_eq!(expr.shape, ExpressionShape::ObjectSomeValuesFrom);

    let content = obj.content().unwrap();
    assert_eq!(content.len(), 2);
    assert_eq!(item_iri(&content[0]), Some(P));
    assert_eq!(item_iri(&content[1]), Some(C));
}

#[test]
fn resolution_is_idempotent() {
    let model = base_model();
    let node = model.update(|g| add_restriction(g, "r", owl::SOME_VALUES_FROM, P, iri(C)));

    let a = model.resolve(&node).unwrap();
    let b = model.resolve(&node).unwrap();
    let c = model
        .resolve_with(&node, ExpressionShape::ObjectSomeValuesFrom)
        .unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert!(Arc::ptr_eq(&a, &c));
}

#[test]
fn cache_is_transparent_across_clear() {
    let model = base_model();
    let node = model.update(|g| add_restriction(g, "r", owl::ALL_VALUES_FROM, P, iri(D)));

    let obj = model.resolve(&node).unwrap();
    let before = obj.content().unwrap();
    let hash_before = obj.content_hash().unwrap();

    obj.clear_content();
    assert!(!obj.has_content());

    // The hash outlives eviction without repopulating the slot
    assert_eq!(obj.content_hash().unwrap(), hash_before);
    assert!(!obj.has_content());

    let after = obj.content().unwrap();
    assert!(content_eq(&before, &after).unwrap());
}

#[test]
fn equality_across_resolution_paths_and_models() {
    let model = base_model();
    let n1 = model.update(|g| add_restriction(g, "r1", owl::SOME_VALUES_FROM, P, iri(C)));
    let n2 = model.update(|g| add_restriction(g, "r2", owl::SOME_VALUES_FROM, P, iri(C)));

    let a = model.resolve(&n1).unwrap();
    let b = model.resolve(&n2).unwrap();
    assert!(a.equals(&b).unwrap());
    assert_eq!(a.content_hash().unwrap(), b.content_hash().unwrap());

    // Same structure in a different model compares equal structurally
    let other = base_model();
    let n3 = other.update(|g| add_restriction(g, "r9", owl::SOME_VALUES_FROM, P, iri(C)));
    let c = other.resolve(&n3).unwrap();
    assert!(a.equals(&c).unwrap());
    assert_eq!(a.content_hash().unwrap(), c.content_hash().unwrap());
}

#[test]
fn union_members_are_canonical() {
    let model = base_model();
    let (u1, u2) = model.update(|g| {
        let u1 = Term::blank("u1");
        let h1 = add_list(g, "u1", &[iri(C), iri(D)]);
        g.add_triple(u1.clone(), iri(owl::UNION_OF), h1);

        let u2 = Term::blank("u2");
        let h2 = add_list(g, "u2", &[iri(D), iri(C)]);
        g.add_triple(u2.clone(), iri(owl::UNION_OF), h2);
        (u1, u2)
    });

    let a = model.resolve(&u1).unwrap();
    let b = model.resolve(&u2).unwrap();
    assert_eq!(
        a.as_expression().unwrap().shape,
        ExpressionShape::ObjectUnionOf
    );
    assert!(a.equals(&b).unwrap());
    assert_eq!(a.content_hash().unwrap(), b.content_hash().unwrap());
}

#[test]
fn positional_axioms_are_order_sensitive() {
    let model = base_model();
    model.update(|g| {
        g.add_triple(iri(C), iri(rdfs::SUB_CLASS_OF), iri(D));
        g.add_triple(iri(D), iri(rdfs::SUB_CLASS_OF), iri(C));
    });

    let forward = model
        .resolve_axiom(TripleKey::new(iri(C), iri(rdfs::SUB_CLASS_OF), iri(D)))
        .unwrap();
    let backward = model
        .resolve_axiom(TripleKey::new(iri(D), iri(rdfs::SUB_CLASS_OF), iri(C)))
        .unwrap();
    assert!(!forward.equals(&backward).unwrap());
    assert_ne!(
        forward.content_hash().unwrap(),
        backward.content_hash().unwrap()
    );
}

#[test]
fn symmetric_axioms_are_order_insensitive() {
    let model = base_model();
    model.update(|g| {
        g.add_triple(iri(C), iri(owl::DISJOINT_WITH), iri(D));
        g.add_triple(iri(D), iri(owl::DISJOINT_WITH), iri(C));
    });

    let a = model
        .resolve_axiom(TripleKey::new(iri(C), iri(owl::DISJOINT_WITH), iri(D)))
        .unwrap();
    let b = model
        .resolve_axiom(TripleKey::new(iri(D), iri(owl::DISJOINT_WITH), iri(C)))
        .unwrap();
    assert!(a.equals(&b).unwrap());
    assert_eq!(a.content_hash().unwrap(), b.content_hash().unwrap());
}

#[test]
fn qualified_cardinality_carries_filler() {
    let model = base_model();
    let (plain, qualified) = model.update(|g| {
        let plain = add_restriction(g, "c1", owl::MIN_CARDINALITY, P, Term::non_negative_integer(2));
        let qualified = add_restriction(
            g,
            "c2",
            owl::MIN_QUALIFIED_CARDINALITY,
            P,
            Term::non_negative_integer(2),
        );
        g.add_triple(qualified.clone(), iri(owl::ON_CLASS), iri(D));
        (plain, qualified)
    });

    let plain = model.resolve(&plain).unwrap();
    let content = plain.content().unwrap();
    assert_eq!(content.len(), 2);
    assert!(matches!(content[1], ContentItem::Scalar(2)));

    let qualified = model.resolve(&qualified).unwrap();
    let content = qualified.content().unwrap();
    assert_eq!(content.len(), 3);
    assert_eq!(item_iri(&content[2]), Some(D));

    // The filler distinguishes them
    assert!(!plain.equals(&qualified).unwrap());
}

#[test]
fn datatype_restriction_keeps_facet_order() {
    let model = base_model();
    let node = model.update(|g| {
        let node = Term::blank("dr");
        let min = Term::blank("facet-min");
        g.add_triple(min.clone(), iri(xsd::MIN_INCLUSIVE), Term::integer(0));
        let max = Term::blank("facet-max");
        g.add_triple(max.clone(), iri(xsd::MAX_EXCLUSIVE), Term::integer(10));
        let head = add_list(g, "dr", &[min, max]);
        g.add_triple(node.clone(), iri(owl::ON_DATATYPE), iri(xsd::INTEGER));
        g.add_triple(node.clone(), iri(owl::WITH_RESTRICTIONS), head);
        node
    });

    let obj = model.resolve(&node).unwrap();
    assert_eq!(
        obj.as_expression().unwrap().shape,
        ExpressionShape::DatatypeRestriction
    );
    let content = obj.content().unwrap();
    assert_eq!(content.len(), 3);
    assert_eq!(item_iri(&content[0]), Some(xsd::INTEGER));
    match (&content[1], &content[2]) {
        (ContentItem::Facet(min), ContentItem::Facet(max)) => {
            assert_eq!(min.facet.as_ref(), xsd::MIN_INCLUSIVE);
            assert_eq!(max.facet.as_ref(), xsd::MAX_EXCLUSIVE);
        }
        other => panic!("unexpected facet items: {:?}", other),
    }
}

#[test]
fn signature_walks_nested_operands() {
    let model = base_model();
    model.update(|g| {
        let inner = add_restriction(g, "sig-r", owl::SOME_VALUES_FROM, P, iri(E));
        let union = Term::blank("sig-u");
        let head = add_list(g, "sig-u", &[iri(D), inner]);
        g.add_triple(union.clone(), iri(owl::UNION_OF), head);
        g.add_triple(iri(C), iri(rdfs::SUB_CLASS_OF), union);
    });

    let ax = model
        .resolve_axiom(TripleKey::new(
            iri(C),
            iri(rdfs::SUB_CLASS_OF),
            Term::blank("sig-u"),
        ))
        .unwrap();

    let classes = ax.signature_set(EntityKind::Class).unwrap();
    let names: Vec<&str> = classes.iter().map(|i| i.as_ref()).collect();
    assert_eq!(names, vec![C, D, E]);

    let mut collector = SignatureCollector::new(EntityKind::ObjectProperty);
    ax.signature(&mut collector).unwrap();
    assert_eq!(collector.found().len(), 1);
    // Descends through the union and into the nested restriction
    assert_eq!(collector.descents(), 2);
}

#[test]
fn capability_pruning_skips_content_forcing() {
    let model = base_model();
    let node = model.update(|g| {
        let node = Term::blank("literals");
        g.add_triple(node.clone(), iri(rdf::TYPE), iri(rdfs::DATATYPE));
        let head = add_list(g, "literals", &[Term::integer(1), Term::integer(2)]);
        g.add_triple(node.clone(), iri(owl::ONE_OF), head);
        node
    });

    let obj = model.resolve(&node).unwrap();
    assert_eq!(obj.as_expression().unwrap().shape, ExpressionShape::DataOneOf);

    // An enumeration of literals can never hold a class
    let mut collector = SignatureCollector::new(EntityKind::Class);
    obj.signature(&mut collector).unwrap();
    assert!(collector.found().is_empty());
    assert_eq!(collector.descents(), 0);
    assert!(!obj.has_content());
}

#[test]
fn annotated_axiom_has_annotation_suffix() {
    let model = base_model();
    model.update(|g| {
        g.add_triple(iri(C), iri(rdfs::SUB_CLASS_OF), iri(D));
        let reif = Term::blank("ann");
        g.add_triple(reif.clone(), iri(rdf::TYPE), iri(owl::AXIOM));
        g.add_triple(reif.clone(), iri(owl::ANNOTATED_SOURCE), iri(C));
        g.add_triple(
            reif.clone(),
            iri(owl::ANNOTATED_PROPERTY),
            iri(rdfs::SUB_CLASS_OF),
        );
        g.add_triple(reif.clone(), iri(owl::ANNOTATED_TARGET), iri(D));
        g.add_triple(reif.clone(), iri(rdfs::COMMENT), Term::string("reviewed"));
        g.add_triple(reif.clone(), iri(rdfs::LABEL), Term::string("C under D"));
    });

    let ax = model
        .resolve_axiom(TripleKey::new(iri(C), iri(rdfs::SUB_CLASS_OF), iri(D)))
        .unwrap();
    let content = ax.content().unwrap();
    assert_eq!(content.len(), 4);
    assert!(ax.is_annotated().unwrap());
    assert_eq!(
        content.iter().filter(|i| i.is_annotation()).count(),
        2
    );

    // The annotation suffix feeds the annotation-property signature
    let props = ax.signature_set(EntityKind::AnnotationProperty).unwrap();
    assert_eq!(props.len(), 2);
}

#[test]
fn detached_variant_equals_plain_axiom() {
    let model = base_model();
    model.update(|g| {
        g.add_triple(iri(C), iri(rdfs::SUB_CLASS_OF), iri(D));
        let reif = Term::blank("ann");
        g.add_triple(reif.clone(), iri(rdf::TYPE), iri(owl::AXIOM));
        g.add_triple(reif.clone(), iri(owl::ANNOTATED_SOURCE), iri(C));
        g.add_triple(
            reif.clone(),
            iri(owl::ANNOTATED_PROPERTY),
            iri(rdfs::SUB_CLASS_OF),
        );
        g.add_triple(reif.clone(), iri(owl::ANNOTATED_TARGET), iri(D));
        g.add_triple(reif.clone(), iri(rdfs::COMMENT), Term::string("reviewed"));
    });

    let annotated = model
        .resolve_axiom(TripleKey::new(iri(C), iri(rdfs::SUB_CLASS_OF), iri(D)))
        .unwrap();
    let detached = annotated.as_axiom().unwrap().without_annotations().unwrap();

    assert!(!detached.is_annotated().unwrap());
    assert!(!annotated.equals(&detached).unwrap());

    // A plain assertion of the same operands in another model matches it
    let other = base_model();
    other.update(|g| g.add_triple(iri(C), iri(rdfs::SUB_CLASS_OF), iri(D)));
    let plain = other
        .resolve_axiom(TripleKey::new(iri(C), iri(rdfs::SUB_CLASS_OF), iri(D)))
        .unwrap();
    assert!(plain.equals(&detached).unwrap());
    assert_eq!(
        plain.content_hash().unwrap(),
        detached.content_hash().unwrap()
    );

    // Detached wrappers have no graph footprint
    assert!(detached.as_triples().unwrap().is_empty());
}

#[test]
fn all_disjoint_classes_round_trip() {
    let model = base_model();
    let root = model.update(|g| {
        let root = Term::blank("adc");
        g.add_triple(root.clone(), iri(rdf::TYPE), iri(owl::ALL_DISJOINT_CLASSES));
        let head = add_list(g, "adc", &[iri(C), iri(D), iri(E)]);
        g.add_triple(root.clone(), iri(owl::MEMBERS), head);
        g.add_triple(root.clone(), iri(rdfs::COMMENT), Term::string("pairwise"));
        root
    });

    let key = TripleKey::new(root.clone(), iri(rdf::TYPE), iri(owl::ALL_DISJOINT_CLASSES));
    let ax = model.resolve_axiom(key).unwrap();
    assert_eq!(ax.as_axiom().unwrap().shape, AxiomShape::AllDisjointClasses);

    let content = ax.content().unwrap();
    // three members + one annotation
    assert_eq!(content.len(), 4);
    assert!(ax.is_annotated().unwrap());

    // Footprint covers the root closure: type, members list, annotation
    let triples = ax.as_triples().unwrap();
    assert_eq!(triples.len(), 9);
}

#[test]
fn enumeration_agrees_with_direct_resolution() {
    let model = base_model();
    model.update(|g| {
        g.add_triple(iri(C), iri(rdfs::SUB_CLASS_OF), iri(D));
        g.add_triple(iri(ALICE), iri(rdf::TYPE), iri(C));
        g.add_triple(iri(ALICE), iri(P), iri(BOB));
    });

    let axioms = model.axioms().unwrap();
    // 7 declarations + SubClassOf + ClassAssertion + ObjectPropertyAssertion
    assert_eq!(axioms.len(), 10);

    let direct = model
        .resolve_axiom(TripleKey::new(iri(ALICE), iri(P), iri(BOB)))
        .unwrap();
    assert_eq!(
        direct.as_axiom().unwrap().shape,
        AxiomShape::ObjectPropertyAssertion
    );
    // The enumeration handed out the same canonical wrapper
    assert!(axioms.iter().any(|a| Arc::ptr_eq(a, &direct)));
    assert!(model.contains_axiom(&direct).unwrap());
}

#[test]
fn malformed_structures_fail_without_partial_content() {
    let model = base_model();

    // onProperty with no constraint fails at detection
    let bare = model.update(|g| {
        let node = Term::blank("bare");
        g.add_triple(node.clone(), iri(owl::ON_PROPERTY), iri(P));
        node
    });
    assert!(matches!(
        model.resolve(&bare),
        Err(Error::MalformedStructure(_))
    ));

    // A truncated member list fails at content access and leaves the cell empty
    let broken = model.update(|g| {
        let node = Term::blank("broken");
        let cell = Term::blank("broken-cell");
        g.add_triple(cell.clone(), iri(rdf::FIRST), iri(C));
        // no rdf:rest
        g.add_triple(node.clone(), iri(owl::UNION_OF), cell);
        node
    });
    let obj = model.resolve(&broken).unwrap();
    assert!(obj.content().is_err());
    assert!(!obj.has_content());
}

#[test]
fn cyclic_fillers_fail_to_decode() {
    let model = base_model();

    // Two restrictions whose fillers reference each other
    let node = model.update(|g| {
        let a = add_restriction(g, "cyc-a", owl::SOME_VALUES_FROM, P, Term::blank("cyc-b"));
        add_restriction(g, "cyc-b", owl::SOME_VALUES_FROM, P, a.clone());
        a
    });

    let obj = model.resolve(&node).unwrap();
    assert!(matches!(
        obj.content(),
        Err(Error::MalformedStructure(_))
    ));
    assert!(!obj.has_content());

    // Still an error on retry, never a hang
    assert!(obj.content().is_err());
}

#[test]
fn clear_then_recompute_observes_graph_changes() {
    let model = base_model();
    let node = model.update(|g| add_restriction(g, "r", owl::SOME_VALUES_FROM, P, iri(C)));
    let obj = model.resolve(&node).unwrap();
    assert_eq!(item_iri(&obj.content().unwrap()[1]), Some(C));

    model.update(|g| {
        g.remove_matching(Some(&node), Some(owl::SOME_VALUES_FROM), None);
        g.add_triple(node.clone(), iri(owl::SOME_VALUES_FROM), iri(D));
    });

    // Resident content still reflects the old graph state
    assert_eq!(item_iri(&obj.content().unwrap()[1]), Some(C));

    obj.clear_content();
    assert_eq!(item_iri(&obj.content().unwrap()[1]), Some(D));
}

#[test]
fn object_has_value_accepts_anonymous_individuals() {
    let model = base_model();
    let (named, anon) = model.update(|g| {
        let named = add_restriction(g, "hv1", owl::HAS_VALUE, P, iri(ALICE));
        let anon = add_restriction(g, "hv2", owl::HAS_VALUE, P, Term::blank("someone"));
        (named, anon)
    });

    let named = model.resolve(&named).unwrap();
    let content = named.content().unwrap();
    assert_eq!(item_iri(&content[1]), Some(ALICE));

    let anon = model.resolve(&anon).unwrap();
    let content = anon.content().unwrap();
    assert!(matches!(content[1], ContentItem::Blank(_)));
    assert!(!named.equals(&anon).unwrap());
}

#[test]
fn expression_footprint_covers_blank_closure() {
    let model = base_model();
    let union = model.update(|g| {
        let inner = add_restriction(g, "fp-r", owl::SOME_VALUES_FROM, P, iri(E));
        let union = Term::blank("fp-u");
        let head = add_list(g, "fp-u", &[iri(D), inner]);
        g.add_triple(union.clone(), iri(owl::UNION_OF), head);
        union
    });

    let obj = model.resolve(&union).unwrap();
    let triples = obj.as_triples().unwrap();
    // unionOf + 2 list cells (2 triples each) + 3 restriction triples
    assert_eq!(triples.len(), 8);
}
