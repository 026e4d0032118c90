use crate::{Dataset, DatasetError, DatasetNode, DatasetResult, QuadCollection, SharedDataset};
use rdf_dataset_model::{Quad, QuadTemplate, RdfQuad};
use rustc_hash::FxHashSet;
use std::fmt;

/// Selects quads of a [Dataset] or a [DatasetNode].
///
/// Every operation that accepts a selector dispatches on this type. A matcher is one of:
/// - an exact quad,
/// - a [QuadTemplate],
/// - a predicate over quads, optionally receiving the whole dataset,
/// - a collection of quads, used as an existence test,
/// - the ordinal position of a quad in the iteration order of the receiver.
///
/// Positions are only meaningful for single-quad accessors (e.g., [Dataset::get]). Bulk
/// operations reject them with [DatasetError::MalformedMatcher].
pub enum QuadMatcher<'a> {
    Quad(Quad),
    Template(QuadTemplate),
    Predicate(Box<dyn Fn(&Quad) -> bool + 'a>),
    /// A predicate that also receives the dataset holding the quad. For a [DatasetNode], this is
    /// the complete backing dataset.
    DatasetPredicate(Box<dyn Fn(&Quad, &Dataset) -> bool + 'a>),
    /// Matches the quads contained in the collection at the time the matcher was created.
    Collection(FxHashSet<Quad>),
    Index(usize),
}

impl<'a> QuadMatcher<'a> {
    /// Creates a matcher that matches every quad.
    pub fn any() -> Self {
        Self::Template(QuadTemplate::default())
    }

    pub fn predicate(predicate: impl Fn(&Quad) -> bool + 'a) -> Self {
        Self::Predicate(Box::new(predicate))
    }

    pub fn dataset_predicate(predicate: impl Fn(&Quad, &Dataset) -> bool + 'a) -> Self {
        Self::DatasetPredicate(Box::new(predicate))
    }

    pub fn collection<C: QuadCollection + ?Sized>(collection: &C) -> Self {
        let mut quads = FxHashSet::default();
        collection.visit_quads(&mut |quad| {
            quads.insert(quad.clone());
        });
        Self::Collection(quads)
    }

    /// Creates a matcher for a quad of any [RdfQuad] implementation.
    pub fn foreign(quad: &(impl RdfQuad + ?Sized)) -> Self {
        Self::Quad(quad.to_quad())
    }

    /// Creates a collection matcher from quads of any [RdfQuad] implementation.
    pub fn foreign_collection<Q: RdfQuad>(quads: impl IntoIterator<Item = Q>) -> Self {
        Self::Collection(quads.into_iter().map(RdfQuad::into_quad).collect())
    }

    pub(crate) fn matches(&self, ordinal: usize, quad: &Quad, dataset: &Dataset) -> bool {
        match self {
            QuadMatcher::Quad(expected) => expected == quad,
            QuadMatcher::Template(template) => template.matches(quad),
            QuadMatcher::Predicate(predicate) => predicate(quad),
            QuadMatcher::DatasetPredicate(predicate) => predicate(quad, dataset),
            QuadMatcher::Collection(quads) => quads.contains(quad),
            QuadMatcher::Index(index) => *index == ordinal,
        }
    }

    /// Fails if the matcher cannot be used by the bulk operation `operation`.
    pub(crate) fn ensure_bulk(&self, operation: &str) -> DatasetResult<()> {
        match self {
            QuadMatcher::Index(index) => Err(DatasetError::MalformedMatcher(format!(
                "{operation} does not accept a quad position (got {index})"
            ))),
            _ => Ok(()),
        }
    }
}

impl Default for QuadMatcher<'_> {
    fn default() -> Self {
        Self::any()
    }
}

impl fmt::Debug for QuadMatcher<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuadMatcher::Quad(quad) => f.debug_tuple("Quad").field(quad).finish(),
            QuadMatcher::Template(template) => f.debug_tuple("Template").field(template).finish(),
            QuadMatcher::Predicate(_) => f.write_str("Predicate(..)"),
            QuadMatcher::DatasetPredicate(_) => f.write_str("DatasetPredicate(..)"),
            QuadMatcher::Collection(quads) => {
                f.debug_tuple("Collection").field(&quads.len()).finish()
            }
            QuadMatcher::Index(index) => f.debug_tuple("Index").field(index).finish(),
        }
    }
}

impl From<Quad> for QuadMatcher<'_> {
    fn from(value: Quad) -> Self {
        Self::Quad(value)
    }
}

impl From<&Quad> for QuadMatcher<'_> {
    fn from(value: &Quad) -> Self {
        Self::Quad(value.clone())
    }
}

impl From<QuadTemplate> for QuadMatcher<'_> {
    fn from(value: QuadTemplate) -> Self {
        Self::Template(value)
    }
}

impl From<usize> for QuadMatcher<'_> {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl From<&Dataset> for QuadMatcher<'_> {
    fn from(value: &Dataset) -> Self {
        Self::collection(value)
    }
}

impl From<&SharedDataset> for QuadMatcher<'_> {
    fn from(value: &SharedDataset) -> Self {
        Self::collection(value)
    }
}

impl From<&DatasetNode> for QuadMatcher<'_> {
    fn from(value: &DatasetNode) -> Self {
        Self::collection(value)
    }
}

impl TryFrom<i64> for QuadMatcher<'_> {
    type Error = DatasetError;

    /// Converts a signed position. Negative positions are malformed.
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value).map(Self::Index).map_err(|_| {
            DatasetError::MalformedMatcher(format!("{value} is not a valid quad position"))
        })
    }
}
