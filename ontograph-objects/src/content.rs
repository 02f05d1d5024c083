//! Content arrays and their item kinds
//!
//! A composite wrapper's value is a shape-specific sequence of
//! [`ContentItem`]s decoded from the graph. Named sub-objects are stored as
//! bare IRIs (no wrapper construction), anonymous sub-objects as materialized
//! wrappers, cardinalities as unboxed scalars, facets and annotations as
//! small value pairs.
//!
//! Hashing uses `FxHasher`, which is deterministic across runs; the canonical
//! ordering of set-valued content depends on that.

use crate::error::Result;
use crate::object::OntObject;
use ontograph_ir::{BlankId, Literal, Term};
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// One element of a composite's content array
#[derive(Clone, Debug)]
pub enum ContentItem {
    /// A named sub-object, stored as its bare IRI
    Iri(Arc<str>),
    /// An anonymous individual, stored as its blank node id
    Blank(BlankId),
    /// An unboxed scalar (cardinality)
    Scalar(i64),
    /// A datatype facet restriction (facet IRI + literal value)
    Facet(FacetRestriction),
    /// An axiom annotation (annotation property IRI + value)
    Annotation(Annotation),
    /// A materialized anonymous sub-object
    Object(Arc<OntObject>),
}

impl ContentItem {
    /// Check if this item is an annotation (annotation suffix probe)
    pub fn is_annotation(&self) -> bool {
        matches!(self, ContentItem::Annotation(_))
    }
}

/// A single constraining facet of a datatype restriction
///
/// Facets preserve declaration order in the content array: order does not
/// affect semantics but it does affect the human-readable rendering contract.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FacetRestriction {
    /// Facet IRI (xsd:minInclusive, xsd:pattern, ...)
    pub facet: Arc<str>,
    /// Restricting value
    pub value: Literal,
}

/// An axiom annotation: (annotation property, value)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Annotation {
    /// Annotation property IRI
    pub property: Arc<str>,
    /// Annotation value (IRI, blank node, or literal)
    pub value: Term,
}

/// Stable discriminant rank, used as the primary canonical sort key
fn rank(item: &ContentItem) -> u8 {
    match item {
        ContentItem::Iri(_) => 0,
        ContentItem::Blank(_) => 1,
        ContentItem::Scalar(_) => 2,
        ContentItem::Facet(_) => 3,
        ContentItem::Annotation(_) => 4,
        ContentItem::Object(_) => 5,
    }
}

/// Hash a single content item
///
/// For `Object` items this forces the sub-object's own content hash, which
/// recursively forces its content array.
pub fn item_hash(item: &ContentItem) -> Result<u64> {
    let mut h = FxHasher::default();
    rank(item).hash(&mut h);
    match item {
        ContentItem::Iri(iri) => iri.hash(&mut h),
        ContentItem::Blank(id) => id.hash(&mut h),
        ContentItem::Scalar(n) => n.hash(&mut h),
        ContentItem::Facet(f) => f.hash(&mut h),
        ContentItem::Annotation(a) => a.hash(&mut h),
        ContentItem::Object(obj) => obj.content_hash()?.hash(&mut h),
    }
    Ok(h.finish())
}

/// Structural equality of two content items
///
/// Items produced by the same deterministic collection algorithm agree on
/// variant for equal logical objects, so cross-variant comparison is false.
pub fn items_eq(a: &ContentItem, b: &ContentItem) -> Result<bool> {
    match (a, b) {
        (ContentItem::Iri(x), ContentItem::Iri(y)) => Ok(x == y),
        (ContentItem::Blank(x), ContentItem::Blank(y)) => Ok(x == y),
        (ContentItem::Scalar(x), ContentItem::Scalar(y)) => Ok(x == y),
        (ContentItem::Facet(x), ContentItem::Facet(y)) => Ok(x == y),
        (ContentItem::Annotation(x), ContentItem::Annotation(y)) => Ok(x == y),
        (ContentItem::Object(x), ContentItem::Object(y)) => x.equals(y),
        _ => Ok(false),
    }
}

/// Element-wise structural equality of two content arrays
pub fn content_eq(a: &[ContentItem], b: &[ContentItem]) -> Result<bool> {
    if a.len() != b.len() {
        return Ok(false);
    }
    for (x, y) in a.iter().zip(b.iter()) {
        if !items_eq(x, y)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Sort set-valued members into canonical order and drop duplicates
///
/// The order is (discriminant rank, content hash) - deterministic and
/// independent of graph traversal order. Hash-equal items are verified
/// structurally before being collapsed.
pub fn canonical_sort(items: Vec<ContentItem>) -> Result<Vec<ContentItem>> {
    let mut keyed: Vec<(u8, u64, ContentItem)> = Vec::with_capacity(items.len());
    for item in items {
        let h = item_hash(&item)?;
        keyed.push((rank(&item), h, item));
    }
    keyed.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    dedup_sorted(keyed)
}

/// Drop structural duplicates from key-sorted items
///
/// Within a run of equal (rank, hash) keys the order is arbitrary, so a
/// candidate is checked against every kept item of the run, not just the
/// last one: a colliding distinct item between two equal ones must not keep
/// the second copy alive.
fn dedup_sorted(keyed: Vec<(u8, u64, ContentItem)>) -> Result<Vec<ContentItem>> {
    let mut out: Vec<ContentItem> = Vec::with_capacity(keyed.len());
    let mut keys: Vec<(u8, u64)> = Vec::with_capacity(keyed.len());
    'candidates: for (r, h, item) in keyed {
        for i in (0..out.len()).rev() {
            if keys[i] != (r, h) {
                break;
            }
            if items_eq(&out[i], &item)? {
                continue 'candidates;
            }
        }
        keys.push((r, h));
        out.push(item);
    }
    Ok(out)
}

/// Order-sensitive hash of a content array under a kind tag
pub fn hash_ordered(kind_tag: u32, items: &[ContentItem]) -> Result<u64> {
    let mut h = FxHasher::default();
    kind_tag.hash(&mut h);
    for item in items {
        item_hash(item)?.hash(&mut h);
    }
    Ok(h.finish())
}

/// Order-independent hash of a content array under a kind tag
///
/// Member hashes are combined by wrapping sum so `{X, Y}` and `{Y, X}` hash
/// identically regardless of storage order.
pub fn hash_unordered(kind_tag: u32, items: &[ContentItem]) -> Result<u64> {
    let mut sum: u64 = 0;
    for item in items {
        sum = sum.wrapping_add(item_hash(item)?);
    }
    let mut h = FxHasher::default();
    kind_tag.hash(&mut h);
    sum.hash(&mut h);
    Ok(h.finish())
}
