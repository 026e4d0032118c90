use crate::dataset::{ground_set_equals, position_mask, rebuild};
use crate::{Dataset, DatasetError, DatasetResult, QuadCollection, QuadMatcher, SharedDataset};
use rdf_dataset_model::{
    BlankNode, Literal, NamedNode, Quad, QuadPosition, RdfQuad, RdfTerm, Term,
};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::{debug, trace};

/// The anchor of a [DatasetNode].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Anchor {
    /// Scopes the node to the quads with this subject.
    Term(Term),
    /// Scopes the node to this exact statement.
    Quad(Quad),
}

impl Anchor {
    /// Returns whether `quad` is visible through a node with this anchor.
    pub fn admits(&self, quad: &Quad) -> bool {
        match self {
            Anchor::Term(term) => quad.subject() == term,
            Anchor::Quad(anchor) => anchor == quad,
        }
    }

    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Anchor::Term(term) => Some(term),
            Anchor::Quad(_) => None,
        }
    }

    /// The value of the anchor term. Fails for quad anchors as they have no single value.
    pub fn value(&self) -> DatasetResult<&str> {
        match self {
            Anchor::Term(term) => Ok(term.value()),
            Anchor::Quad(_) => Err(DatasetError::InvalidOperation(
                "a quad anchor has no single value".to_owned(),
            )),
        }
    }
}

impl From<Term> for Anchor {
    fn from(value: Term) -> Self {
        Anchor::Term(value)
    }
}

impl From<NamedNode> for Anchor {
    fn from(value: NamedNode) -> Self {
        Anchor::Term(value.into())
    }
}

impl From<BlankNode> for Anchor {
    fn from(value: BlankNode) -> Self {
        Anchor::Term(value.into())
    }
}

impl From<Literal> for Anchor {
    fn from(value: Literal) -> Self {
        Anchor::Term(value.into())
    }
}

impl From<Quad> for Anchor {
    fn from(value: Quad) -> Self {
        Anchor::Quad(value)
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Anchor::Term(term) => term.fmt(f),
            Anchor::Quad(quad) => quad.fmt(f),
        }
    }
}

/// A view on the quads of a backing [Dataset] whose subject is the anchor term.
///
/// The node either owns its backing dataset or shares it with other handles:
/// - [DatasetNode::new] creates an empty backing dataset,
/// - [DatasetNode::factory] copies the given dataset, later changes to the original are not
///   visible,
/// - [DatasetNode::with_shared] and [DatasetNode::with_dataset] use the given handle, changes
///   are visible both ways.
///
/// Reads, deletions, and single-quad accessors only consider the visible quads. Ordinal
/// positions refer to the iteration order of the visible quads. Quads added through the node are
/// stored in the backing dataset as they are, use [DatasetNode::add_property] to add a quad with
/// the anchor as subject.
///
/// Operations that return a collection return a new [DatasetNode] with the same anchor.
#[derive(Debug)]
pub struct DatasetNode {
    anchor: Anchor,
    dataset: SharedDataset,
}

impl DatasetNode {
    /// Creates a node with an empty backing dataset.
    pub fn new(anchor: impl Into<Anchor>) -> Self {
        Self::with_shared(anchor, SharedDataset::default())
    }

    /// Creates a node backed by a copy of `dataset`.
    pub fn factory(anchor: impl Into<Anchor>, dataset: &Dataset) -> Self {
        Self::with_shared(anchor, SharedDataset::new(dataset.clone()))
    }

    /// Creates a node backed by the shared `dataset`.
    pub fn with_shared(anchor: impl Into<Anchor>, dataset: SharedDataset) -> Self {
        Self {
            anchor: anchor.into(),
            dataset,
        }
    }

    pub fn get_node(&self) -> &Anchor {
        &self.anchor
    }

    pub fn get_value(&self) -> DatasetResult<&str> {
        self.anchor.value()
    }

    /// Returns a handle to the backing dataset.
    pub fn get_dataset(&self) -> SharedDataset {
        self.dataset.clone()
    }

    /// Returns a node with another anchor that shares the backing dataset of this node.
    pub fn with_node(&self, anchor: impl Into<Anchor>) -> DatasetNode {
        Self::with_shared(anchor, self.dataset.clone())
    }

    /// Returns a node with the same anchor backed by the shared `dataset`.
    pub fn with_dataset(&self, dataset: SharedDataset) -> DatasetNode {
        Self::with_shared(self.anchor.clone(), dataset)
    }

    /// Returns whether the anchor equals `term`. Always false for quad anchors.
    pub fn equals_term(&self, term: &(impl RdfTerm + ?Sized)) -> bool {
        self.anchor
            .as_term()
            .is_some_and(|anchor| anchor.term_equals(term))
    }

    /// The number of visible quads.
    pub fn len(&self) -> usize {
        let dataset = self.dataset.borrow();
        dataset
            .iter()
            .filter(|quad| self.anchor.admits(quad))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The visible quads in iteration order.
    pub fn quads(&self) -> Vec<Quad> {
        let mut quads = Vec::new();
        self.visit_quads(&mut |quad| quads.push(quad.clone()));
        quads
    }

    /// Adds `quad` to the backing dataset.
    pub fn add(&self, quad: impl RdfQuad) -> bool {
        self.dataset.borrow_mut().add(quad)
    }

    /// Adds all quads to the backing dataset and returns how many of them were new.
    pub fn add_all<Q: RdfQuad>(&self, quads: impl IntoIterator<Item = Q>) -> usize {
        self.dataset.borrow_mut().add_all(quads)
    }

    pub fn push(&self, quad: impl RdfQuad) -> bool {
        self.add(quad)
    }

    /// Adds a quad with the anchor as subject in the default graph.
    pub fn add_property(
        &self,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> DatasetResult<bool> {
        self.add_property_in_graph(predicate, object, Term::DefaultGraph)
    }

    /// Adds a quad with the anchor as subject.
    pub fn add_property_in_graph(
        &self,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
        graph: impl Into<Term>,
    ) -> DatasetResult<bool> {
        let subject = self.anchor.as_term().ok_or_else(|| {
            DatasetError::InvalidOperation("cannot use a quad anchor as subject".to_owned())
        })?;
        let quad = Quad::new(subject.clone(), predicate, object, graph);
        Ok(self.add(quad))
    }

    /// Returns the visible quads selected by `matcher`.
    pub fn filter<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Vec<Quad>> {
        let selected = self.select_bulk("filter", &matcher.into())?;
        Ok(self.quads_at(&selected))
    }

    /// Returns whether `matcher` selects a visible quad.
    pub fn contains<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<bool> {
        Ok(self.select_single(&matcher.into())?.is_some())
    }

    /// Returns the single visible quad selected by `matcher`.
    pub fn get<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Quad> {
        let position = self
            .select_single(&matcher.into())?
            .ok_or(DatasetError::NotFound)?;
        trace!(anchor = %self.anchor, position, "Found quad through node");
        Ok(self.dataset.borrow().quad_at(position).clone())
    }

    /// Replaces the single visible quad selected by `matcher`. Adds `quad` to the backing dataset
    /// if nothing matches.
    pub fn set<'m>(&self, matcher: impl Into<QuadMatcher<'m>>, quad: impl RdfQuad) -> DatasetResult<()> {
        let quad = quad.into_quad();
        let selected = self.select_single(&matcher.into())?;
        let mut dataset = self.dataset.borrow_mut();
        match selected {
            Some(position) => dataset.replace_at(position, Some(quad)),
            None => {
                dataset.insert(quad);
            }
        }
        Ok(())
    }

    /// Removes the single visible quad selected by `matcher`.
    pub fn unset<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Option<Quad>> {
        let selected = self.select_single(&matcher.into())?;
        Ok(selected.map(|position| self.dataset.borrow_mut().remove_at(position)))
    }

    /// Removes the visible quads selected by `matcher` from the backing dataset. Returns a node
    /// over the removed quads.
    pub fn delete<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<DatasetNode> {
        let (selected, _) = self.partition("delete", &matcher.into())?;
        let removed = self.dataset.borrow_mut().remove_positions(&selected);
        Ok(self.derive(removed))
    }

    /// Removes the visible quads not selected by `matcher` from the backing dataset. Returns a
    /// node over the removed quads.
    pub fn delete_except<'m>(
        &self,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> DatasetResult<DatasetNode> {
        let (_, rejected) = self.partition("delete_except", &matcher.into())?;
        let removed = self.dataset.borrow_mut().remove_positions(&rejected);
        Ok(self.derive(removed))
    }

    /// Returns a node over a copy of the backing dataset without the visible quads that are not
    /// selected by `matcher`.
    pub fn copy<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<DatasetNode> {
        let (_, rejected) = self.partition("copy", &matcher.into())?;
        Ok(self.derive(self.backing_without(&rejected)))
    }

    /// Returns a node over a copy of the backing dataset without the visible quads selected by
    /// `matcher`.
    pub fn copy_except<'m>(
        &self,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> DatasetResult<DatasetNode> {
        let (selected, _) = self.partition("copy_except", &matcher.into())?;
        Ok(self.derive(self.backing_without(&selected)))
    }

    /// Returns a node over the backing dataset extended by the quads of `other` that are visible
    /// through this node.
    pub fn union<C: QuadCollection + ?Sized>(&self, other: &C) -> DatasetNode {
        let scoped = self.scoped(other);
        let mut dataset = self.dataset.snapshot();
        for quad in scoped {
            dataset.insert(quad);
        }
        self.derive(dataset)
    }

    /// Returns a node whose visible quads are the symmetric difference of the visible quads and
    /// the quads of `other` visible through this node. Invisible quads of the backing dataset are
    /// kept.
    pub fn xor<C: QuadCollection + ?Sized>(&self, other: &C) -> DatasetNode {
        let scoped = self.scoped(other);
        let scoped_set = scoped.iter().collect::<FxHashSet<_>>();
        let backing = self.dataset.borrow();
        let mut dataset: Dataset = backing
            .iter()
            .filter(|quad| !(self.anchor.admits(quad) && scoped_set.contains(quad)))
            .cloned()
            .collect();
        for quad in &scoped {
            if !backing.contains_quad(quad) {
                dataset.insert(quad.clone());
            }
        }
        drop(backing);
        self.derive(dataset)
    }

    /// Replaces every visible quad selected by `matcher` with the result of `f` in the backing
    /// dataset. The quad is removed if `f` returns `None`.
    pub fn for_each<'m>(
        &self,
        mut f: impl FnMut(&Quad) -> Option<Quad>,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> DatasetResult<()> {
        self.try_for_each(|quad| Ok::<_, DatasetError>(f(quad)), matcher)
    }

    /// Like [DatasetNode::for_each] but `f` may fail. Quads processed before the error keep their
    /// new value.
    ///
    /// The backing dataset is not borrowed while `f` runs, so `f` may read it.
    pub fn try_for_each<'m, E: From<DatasetError>>(
        &self,
        mut f: impl FnMut(&Quad) -> Result<Option<Quad>, E>,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> Result<(), E> {
        let selected = self.select_bulk("for_each", &matcher.into())?;
        let targets = self.quads_at(&selected);
        for old in &targets {
            let replacement = f(old)?;
            self.dataset.borrow_mut().replace_quad(old, replacement);
        }
        debug!(anchor = %self.anchor, selected = targets.len(), "Updated quads through node");
        Ok(())
    }

    /// Returns a node over a copy of the backing dataset in which every visible quad selected by
    /// `matcher` is replaced with the result of `f`.
    pub fn map<'m>(
        &self,
        mut f: impl FnMut(&Quad) -> Option<Quad>,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> DatasetResult<DatasetNode> {
        self.try_map(|quad| Ok::<_, DatasetError>(f(quad)), matcher)
    }

    /// Like [DatasetNode::map] but `f` may fail.
    pub fn try_map<'m, E: From<DatasetError>>(
        &self,
        mut f: impl FnMut(&Quad) -> Result<Option<Quad>, E>,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> Result<DatasetNode, E> {
        let selected = self.select_bulk("map", &matcher.into())?;
        let backing = self.dataset.snapshot();
        let mask = position_mask(backing.len(), &selected);
        let (dataset, result) = rebuild(backing.into_iter().collect(), &mask, &mut f);
        result.map(|()| self.derive(dataset))
    }

    /// Folds the visible quads selected by `matcher` in iteration order.
    pub fn reduce<'m, T>(
        &self,
        mut f: impl FnMut(T, &Quad) -> T,
        initial: T,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> DatasetResult<T> {
        self.try_reduce(|acc, quad| Ok::<_, DatasetError>(f(acc, quad)), initial, matcher)
    }

    /// Like [DatasetNode::reduce] but `f` may fail.
    pub fn try_reduce<'m, T, E: From<DatasetError>>(
        &self,
        f: impl FnMut(T, &Quad) -> Result<T, E>,
        initial: T,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> Result<T, E> {
        let selected = self.select_bulk("reduce", &matcher.into())?;
        self.quads_at(&selected).iter().try_fold(initial, f)
    }

    pub fn any<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<bool> {
        Ok(!self.select_bulk("any", &matcher.into())?.is_empty())
    }

    /// Returns whether `matcher` selects every visible quad. True for an empty node.
    pub fn every<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<bool> {
        let (_, rejected) = self.partition("every", &matcher.into())?;
        Ok(rejected.is_empty())
    }

    pub fn none<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<bool> {
        Ok(!self.any(matcher)?)
    }

    pub fn list_subjects<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Vec<Term>> {
        self.list_terms(QuadPosition::Subject, &matcher.into())
    }

    pub fn list_predicates<'m>(
        &self,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> DatasetResult<Vec<Term>> {
        self.list_terms(QuadPosition::Predicate, &matcher.into())
    }

    pub fn list_objects<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Vec<Term>> {
        self.list_terms(QuadPosition::Object, &matcher.into())
    }

    pub fn list_graphs<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Vec<Term>> {
        self.list_terms(QuadPosition::Graph, &matcher.into())
    }

    /// Compares the visible quads with the quads of `other` that would be visible through this
    /// node. Quads with blank nodes are ignored on both sides.
    pub fn equals<C: QuadCollection + ?Sized>(&self, other: &C) -> bool {
        let quads = self.quads();
        ground_set_equals(&quads, other, |quad| self.anchor.admits(quad))
    }

    fn derive(&self, dataset: Dataset) -> DatasetNode {
        Self::with_shared(self.anchor.clone(), SharedDataset::new(dataset))
    }

    fn visible(&self, dataset: &Dataset) -> Vec<usize> {
        dataset
            .positions()
            .filter(|position| self.anchor.admits(dataset.quad_at(*position)))
            .collect()
    }

    fn select_single(&self, matcher: &QuadMatcher<'_>) -> DatasetResult<Option<usize>> {
        let dataset = self.dataset.borrow();
        let visible = self.visible(&dataset);
        dataset.select_single(visible, matcher)
    }

    fn select_bulk(&self, operation: &str, matcher: &QuadMatcher<'_>) -> DatasetResult<Vec<usize>> {
        let dataset = self.dataset.borrow();
        let visible = self.visible(&dataset);
        dataset.select_bulk(operation, visible, matcher)
    }

    /// Splits the visible positions into the ones selected by `matcher` and the others.
    fn partition(
        &self,
        operation: &str,
        matcher: &QuadMatcher<'_>,
    ) -> DatasetResult<(Vec<usize>, Vec<usize>)> {
        let dataset = self.dataset.borrow();
        let visible = self.visible(&dataset);
        let selected = dataset.select_bulk(operation, visible.iter().copied(), matcher)?;
        let mask = position_mask(dataset.len(), &selected);
        let rejected = visible
            .into_iter()
            .filter(|position| !mask[*position])
            .collect();
        Ok((selected, rejected))
    }

    fn quads_at(&self, positions: &[usize]) -> Vec<Quad> {
        let dataset = self.dataset.borrow();
        let quads = positions
            .iter()
            .map(|position| dataset.quad_at(*position).clone())
            .collect::<Vec<_>>();
        drop(dataset);
        quads
    }

    /// Copies the backing dataset without the quads at `excluded`.
    fn backing_without(&self, excluded: &[usize]) -> Dataset {
        let dataset = self.dataset.borrow();
        let mask = position_mask(dataset.len(), excluded);
        let result = dataset
            .iter()
            .zip(mask)
            .filter(|(_, excluded)| !excluded)
            .map(|(quad, _)| quad.clone())
            .collect::<Dataset>();
        drop(dataset);
        result
    }

    /// The quads of `other` that would be visible through this node.
    fn scoped<C: QuadCollection + ?Sized>(&self, other: &C) -> Vec<Quad> {
        let mut quads = Vec::new();
        other.visit_quads(&mut |quad| {
            if self.anchor.admits(quad) {
                quads.push(quad.clone());
            }
        });
        quads
    }

    fn list_terms(&self, position: QuadPosition, matcher: &QuadMatcher<'_>) -> DatasetResult<Vec<Term>> {
        let dataset = self.dataset.borrow();
        let visible = self.visible(&dataset);
        dataset.list_terms(position, visible, matcher)
    }
}

impl QuadCollection for DatasetNode {
    fn visit_quads(&self, visitor: &mut dyn FnMut(&Quad)) {
        let dataset = self.dataset.borrow();
        for quad in dataset.iter().filter(|quad| self.anchor.admits(quad)) {
            visitor(quad);
        }
    }

    fn quad_count(&self) -> usize {
        self.len()
    }
}

/// Writes the canonical text form of the visible quads.
impl fmt::Display for DatasetNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for quad in self.quads() {
            writeln!(f, "{quad}")?;
        }
        Ok(())
    }
}

impl IntoIterator for &DatasetNode {
    type Item = Quad;
    type IntoIter = std::vec::IntoIter<Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads().into_iter()
    }
}
