//! Signature collection over content trees
//!
//! A signature query walks a wrapper's content tree depth-first and gathers
//! the named primitive entities of one kind (classes, datatypes, individuals,
//! properties). Each composite shape statically declares which entity kinds
//! can ever occur beneath it; the walk prunes whole subtrees on those flags
//! without forcing their content.

use crate::error::Result;
use crate::object::OntObject;
use crate::{axiom, content::ContentItem, expression};
use std::collections::BTreeSet;
use std::sync::Arc;

/// The kinds of named primitive entity a signature query can target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// owl:Class
    Class,
    /// rdfs:Datatype
    Datatype,
    /// owl:NamedIndividual
    NamedIndividual,
    /// owl:ObjectProperty
    ObjectProperty,
    /// owl:DatatypeProperty
    DataProperty,
    /// owl:AnnotationProperty
    AnnotationProperty,
}

impl EntityKind {
    /// The rdf:type IRI declaring an entity of this kind
    pub fn type_iri(self) -> &'static str {
        use ontograph_vocab::{owl, rdfs};
        match self {
            EntityKind::Class => owl::CLASS,
            EntityKind::Datatype => rdfs::DATATYPE,
            EntityKind::NamedIndividual => owl::NAMED_INDIVIDUAL,
            EntityKind::ObjectProperty => owl::OBJECT_PROPERTY,
            EntityKind::DataProperty => owl::DATATYPE_PROPERTY,
            EntityKind::AnnotationProperty => owl::ANNOTATION_PROPERTY,
        }
    }

    /// Map a declaration type IRI back to an entity kind
    pub fn from_type_iri(iri: &str) -> Option<Self> {
        use ontograph_vocab::{owl, rdfs};
        match iri {
            owl::CLASS => Some(EntityKind::Class),
            rdfs::DATATYPE => Some(EntityKind::Datatype),
            owl::NAMED_INDIVIDUAL => Some(EntityKind::NamedIndividual),
            owl::OBJECT_PROPERTY => Some(EntityKind::ObjectProperty),
            owl::DATATYPE_PROPERTY => Some(EntityKind::DataProperty),
            owl::ANNOTATION_PROPERTY => Some(EntityKind::AnnotationProperty),
            _ => None,
        }
    }

    /// Stable index per kind, part of the wrapper kind-index space
    pub(crate) fn index(self) -> u32 {
        match self {
            EntityKind::Class => 0,
            EntityKind::Datatype => 1,
            EntityKind::NamedIndividual => 2,
            EntityKind::ObjectProperty => 3,
            EntityKind::DataProperty => 4,
            EntityKind::AnnotationProperty => 5,
        }
    }
}

/// Accumulator for one signature query
///
/// Tracks the number of composite descents so capability pruning is
/// observable by tests and diagnostics.
#[derive(Debug)]
pub struct SignatureCollector {
    target: EntityKind,
    found: BTreeSet<Arc<str>>,
    descents: usize,
}

impl SignatureCollector {
    /// Create a collector for one entity kind
    pub fn new(target: EntityKind) -> Self {
        SignatureCollector {
            target,
            found: BTreeSet::new(),
            descents: 0,
        }
    }

    /// The entity kind being collected
    pub fn target(&self) -> EntityKind {
        self.target
    }

    /// Number of descents into nested composite content
    pub fn descents(&self) -> usize {
        self.descents
    }

    /// Entities found so far
    pub fn found(&self) -> &BTreeSet<Arc<str>> {
        &self.found
    }

    /// Consume the collector, yielding the collected IRIs
    pub fn into_set(self) -> BTreeSet<Arc<str>> {
        self.found
    }

    pub(crate) fn add(&mut self, iri: &Arc<str>) {
        self.found.insert(iri.clone());
    }

    pub(crate) fn record_descent(&mut self) {
        self.descents += 1;
    }
}

/// Depth-first signature walk with capability pruning
pub(crate) fn walk(obj: &OntObject, collector: &mut SignatureCollector) -> Result<()> {
    let target = collector.target();
    match obj {
        OntObject::Entity(e) => {
            if e.kind == target {
                collector.add(&e.iri);
            }
            Ok(())
        }
        OntObject::Literal(lit) => {
            // A literal's datatype is part of the datatype signature
            if target == EntityKind::Datatype {
                collector.add(&Arc::from(lit.datatype.as_iri()));
            }
            Ok(())
        }
        OntObject::Anonymous(_) => Ok(()),
        OntObject::Expression(expr) => {
            if !expr.shape.may_contain(target) {
                return Ok(());
            }
            let items = obj.content()?;
            for (idx, item) in items.iter().enumerate() {
                match item {
                    ContentItem::Iri(iri) => {
                        if expression::item_kind(expr.shape, idx) == Some(target) {
                            collector.add(iri);
                        }
                    }
                    ContentItem::Object(sub) => descend(sub, collector)?,
                    _ => {}
                }
            }
            Ok(())
        }
        OntObject::Axiom(ax) => {
            if !ax.shape.may_contain(target) {
                return Ok(());
            }
            let items = obj.content()?;
            for (idx, item) in items.iter().enumerate() {
                match item {
                    ContentItem::Iri(iri) => {
                        if axiom::item_kind(ax.shape, ax.key(), idx) == Some(target) {
                            collector.add(iri);
                        }
                    }
                    ContentItem::Annotation(a) => {
                        if target == EntityKind::AnnotationProperty {
                            collector.add(&a.property);
                        }
                    }
                    ContentItem::Object(sub) => descend(sub, collector)?,
                    _ => {}
                }
            }
            Ok(())
        }
    }
}

fn descend(sub: &OntObject, collector: &mut SignatureCollector) -> Result<()> {
    if sub.may_contain(collector.target()) {
        collector.record_descent();
        walk(sub, collector)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_iri_roundtrip() {
        for kind in [
            EntityKind::Class,
            EntityKind::Datatype,
            EntityKind::NamedIndividual,
            EntityKind::ObjectProperty,
            EntityKind::DataProperty,
            EntityKind::AnnotationProperty,
        ] {
            assert_eq!(EntityKind::from_type_iri(kind.type_iri()), Some(kind));
        }
        assert_eq!(EntityKind::from_type_iri("http://example.org/Nope"), None);
    }

    #[test]
    fn test_collector_dedupes() {
        let mut c = SignatureCollector::new(EntityKind::Class);
        let iri: Arc<str> = Arc::from("http://example.org/C");
        c.add(&iri);
        c.add(&iri);
        assert_eq!(c.found().len(), 1);
        assert_eq!(c.descents(), 0);
    }
}
