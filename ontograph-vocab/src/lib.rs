//! RDF Vocabulary Constants for the ontograph workspace
//!
//! This crate provides a centralized location for the RDF vocabulary IRIs
//! used by the graph IR and the object cache.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#), including
//!   the constraining-facet IRIs used by datatype restrictions
//! - `owl` - OWL 2 vocabulary (http://www.w3.org/2002/07/owl#)

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// rdf:first IRI (RDF list head)
    pub const FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";

    /// rdf:rest IRI (RDF list tail)
    pub const REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";

    /// rdf:nil IRI (RDF list terminator)
    pub const NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";

    /// rdf:List IRI
    pub const LIST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#List";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// rdfs:subPropertyOf IRI
    pub const SUB_PROPERTY_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subPropertyOf";

    /// rdfs:domain IRI
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";

    /// rdfs:range IRI
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";

    /// rdfs:Datatype IRI
    pub const DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:nonNegativeInteger IRI
    pub const NON_NEGATIVE_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#nonNegativeInteger";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:anyURI IRI
    pub const ANY_URI: &str = "http://www.w3.org/2001/XMLSchema#anyURI";

    /// xsd:minInclusive facet IRI
    pub const MIN_INCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#minInclusive";

    /// xsd:maxInclusive facet IRI
    pub const MAX_INCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#maxInclusive";

    /// xsd:minExclusive facet IRI
    pub const MIN_EXCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#minExclusive";

    /// xsd:maxExclusive facet IRI
    pub const MAX_EXCLUSIVE: &str = "http://www.w3.org/2001/XMLSchema#maxExclusive";

    /// xsd:length facet IRI
    pub const LENGTH: &str = "http://www.w3.org/2001/XMLSchema#length";

    /// xsd:minLength facet IRI
    pub const MIN_LENGTH: &str = "http://www.w3.org/2001/XMLSchema#minLength";

    /// xsd:maxLength facet IRI
    pub const MAX_LENGTH: &str = "http://www.w3.org/2001/XMLSchema#maxLength";

    /// xsd:pattern facet IRI
    pub const PATTERN: &str = "http://www.w3.org/2001/XMLSchema#pattern";
}

/// OWL 2 vocabulary constants
pub mod owl {
    /// owl:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";

    /// owl:Restriction IRI
    pub const RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";

    /// owl:Thing IRI
    pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";

    /// owl:Nothing IRI
    pub const NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";

    /// owl:NamedIndividual IRI
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";

    /// owl:ObjectProperty IRI
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";

    /// owl:DatatypeProperty IRI
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";

    /// owl:AnnotationProperty IRI
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";

    /// owl:FunctionalProperty IRI
    pub const FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";

    /// owl:Axiom IRI (annotation reification node type)
    pub const AXIOM: &str = "http://www.w3.org/2002/07/owl#Axiom";

    /// owl:AllDisjointClasses IRI
    pub const ALL_DISJOINT_CLASSES: &str = "http://www.w3.org/2002/07/owl#AllDisjointClasses";

    /// owl:annotatedSource IRI
    pub const ANNOTATED_SOURCE: &str = "http://www.w3.org/2002/07/owl#annotatedSource";

    /// owl:annotatedProperty IRI
    pub const ANNOTATED_PROPERTY: &str = "http://www.w3.org/2002/07/owl#annotatedProperty";

    /// owl:annotatedTarget IRI
    pub const ANNOTATED_TARGET: &str = "http://www.w3.org/2002/07/owl#annotatedTarget";

    /// owl:onProperty IRI
    pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";

    /// owl:onClass IRI (qualified cardinality filler)
    pub const ON_CLASS: &str = "http://www.w3.org/2002/07/owl#onClass";

    /// owl:onDataRange IRI (qualified data cardinality filler)
    pub const ON_DATA_RANGE: &str = "http://www.w3.org/2002/07/owl#onDataRange";

    /// owl:onDatatype IRI (datatype restriction base)
    pub const ON_DATATYPE: &str = "http://www.w3.org/2002/07/owl#onDatatype";

    /// owl:withRestrictions IRI (facet list)
    pub const WITH_RESTRICTIONS: &str = "http://www.w3.org/2002/07/owl#withRestrictions";

    /// owl:someValuesFrom IRI
    pub const SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";

    /// owl:allValuesFrom IRI
    pub const ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";

    /// owl:hasValue IRI
    pub const HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";

    /// owl:hasSelf IRI
    pub const HAS_SELF: &str = "http://www.w3.org/2002/07/owl#hasSelf";

    /// owl:minCardinality IRI
    pub const MIN_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#minCardinality";

    /// owl:maxCardinality IRI
    pub const MAX_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#maxCardinality";

    /// owl:cardinality IRI
    pub const CARDINALITY: &str = "http://www.w3.org/2002/07/owl#cardinality";

    /// owl:minQualifiedCardinality IRI
    pub const MIN_QUALIFIED_CARDINALITY: &str =
        "http://www.w3.org/2002/07/owl#minQualifiedCardinality";

    /// owl:maxQualifiedCardinality IRI
    pub const MAX_QUALIFIED_CARDINALITY: &str =
        "http://www.w3.org/2002/07/owl#maxQualifiedCardinality";

    /// owl:qualifiedCardinality IRI
    pub const QUALIFIED_CARDINALITY: &str = "http://www.w3.org/2002/07/owl#qualifiedCardinality";

    /// owl:unionOf IRI
    pub const UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";

    /// owl:intersectionOf IRI
    pub const INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";

    /// owl:complementOf IRI
    pub const COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";

    /// owl:datatypeComplementOf IRI
    pub const DATATYPE_COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#datatypeComplementOf";

    /// owl:oneOf IRI
    pub const ONE_OF: &str = "http://www.w3.org/2002/07/owl#oneOf";

    /// owl:members IRI (n-ary axiom member list)
    pub const MEMBERS: &str = "http://www.w3.org/2002/07/owl#members";

    /// owl:equivalentClass IRI
    pub const EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";

    /// owl:disjointWith IRI
    pub const DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";

    /// owl:equivalentProperty IRI
    pub const EQUIVALENT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#equivalentProperty";

    /// owl:inverseOf IRI
    pub const INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";

    /// owl:sameAs IRI
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";

    /// owl:differentFrom IRI
    pub const DIFFERENT_FROM: &str = "http://www.w3.org/2002/07/owl#differentFrom";
}

/// Check whether an IRI is rdf:type
#[inline]
pub fn is_rdf_type(iri: &str) -> bool {
    iri == rdf::TYPE
}

/// Check whether an IRI is the rdf:nil list terminator
#[inline]
pub fn is_nil(iri: &str) -> bool {
    iri == rdf::NIL
}
