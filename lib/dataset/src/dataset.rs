use crate::{DatasetError, DatasetResult, QuadCollection, QuadMatcher};
use itertools::Itertools;
use rdf_dataset_model::{Quad, QuadPosition, RdfQuad, Term};
use rustc_hash::FxHashSet;
use std::fmt;
use tracing::{debug, trace};

/// An in-memory [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset).
///
/// A dataset is a duplicate-free collection of quads. Iteration follows the insertion order and
/// ordinal positions ([QuadMatcher::Index]) refer to this order.
///
/// Every operation that returns a [Dataset] returns an independent value. Only [Dataset::add],
/// [Dataset::set], [Dataset::unset], [Dataset::delete], [Dataset::delete_except], and
/// [Dataset::for_each] (and their variants) mutate the receiver.
///
/// ```
/// # use rdf_dataset::Dataset;
/// # use rdf_dataset_model::{Literal, NamedNode, Quad, QuadTemplate};
/// let foo = NamedNode::new_unchecked("foo");
/// let mut dataset = Dataset::new();
/// dataset.add(Quad::new_triple(foo.clone(), NamedNode::new_unchecked("bar"), Literal::from("baz")));
/// dataset.add(Quad::new_triple(foo.clone(), NamedNode::new_unchecked("baz"), Literal::from("bar")));
///
/// let copy = dataset.copy(QuadTemplate::new().with_subject(foo))?;
/// assert_eq!(copy.len(), 2);
/// # Ok::<_, rdf_dataset::DatasetError>(())
/// ```
#[derive(Clone, Default)]
pub struct Dataset {
    quads: Vec<Quad>,
    index: FxHashSet<Quad>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quad> {
        self.quads.iter()
    }

    /// Inserts a quad. Returns `false` if the dataset already contained an equal quad.
    pub fn add(&mut self, quad: impl RdfQuad) -> bool {
        self.insert(quad.into_quad())
    }

    /// Inserts all quads and returns how many of them were new.
    pub fn add_all<Q: RdfQuad>(&mut self, quads: impl IntoIterator<Item = Q>) -> usize {
        let inserted = quads
            .into_iter()
            .filter(|quad| self.insert(quad.to_quad()))
            .count();
        debug!(inserted, "Added quads to dataset");
        inserted
    }

    /// Appends a quad without a matcher. Equal to [Dataset::add].
    pub fn push(&mut self, quad: impl RdfQuad) -> bool {
        self.add(quad)
    }

    /// Returns the quads selected by `matcher` in iteration order.
    pub fn filter<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Matches<'_, 'm>> {
        let matcher = matcher.into();
        matcher.ensure_bulk("filter")?;
        Ok(Matches {
            dataset: self,
            matcher,
            position: 0,
        })
    }

    /// Returns whether `matcher` selects a quad.
    ///
    /// Fails with [DatasetError::AmbiguousMatch] if it selects more than one quad.
    pub fn contains<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<bool> {
        let position = self.select_single(self.positions(), &matcher.into())?;
        Ok(position.is_some())
    }

    /// Returns the single quad selected by `matcher`.
    ///
    /// Fails with [DatasetError::NotFound] if no quad matches and with
    /// [DatasetError::AmbiguousMatch] if more than one quad matches.
    pub fn get<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<&Quad> {
        let position = self
            .select_single(self.positions(), &matcher.into())?
            .ok_or(DatasetError::NotFound)?;
        Ok(&self.quads[position])
    }

    /// Replaces the single quad selected by `matcher` with `quad`. Inserts `quad` if nothing
    /// matches.
    pub fn set<'m>(
        &mut self,
        matcher: impl Into<QuadMatcher<'m>>,
        quad: impl RdfQuad,
    ) -> DatasetResult<()> {
        let quad = quad.into_quad();
        match self.select_single(self.positions(), &matcher.into())? {
            Some(position) => self.replace_at(position, Some(quad)),
            None => {
                self.insert(quad);
            }
        }
        Ok(())
    }

    /// Removes the single quad selected by `matcher`. Returns `None` if nothing matches.
    pub fn unset<'m>(&mut self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Option<Quad>> {
        let removed = self
            .select_single(self.positions(), &matcher.into())?
            .map(|position| self.remove_at(position));
        Ok(removed)
    }

    /// Removes all quads selected by `matcher` and returns them.
    pub fn delete<'m>(&mut self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Dataset> {
        let selected = self.select_bulk("delete", self.positions(), &matcher.into())?;
        Ok(self.remove_positions(&selected))
    }

    /// Removes all quads not selected by `matcher` and returns them.
    pub fn delete_except<'m>(
        &mut self,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> DatasetResult<Dataset> {
        let selected = self.select_bulk("delete_except", self.positions(), &matcher.into())?;
        let rejected = complement(self.len(), &selected);
        Ok(self.remove_positions(&rejected))
    }

    /// Returns a new dataset with the quads selected by `matcher`.
    pub fn copy<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Dataset> {
        let selected = self.select_bulk("copy", self.positions(), &matcher.into())?;
        Ok(self.collect_positions(&selected))
    }

    /// Returns a new dataset with the quads not selected by `matcher`.
    pub fn copy_except<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Dataset> {
        let selected = self.select_bulk("copy_except", self.positions(), &matcher.into())?;
        Ok(self.collect_positions(&complement(self.len(), &selected)))
    }

    /// Returns a new dataset with the quads of both collections.
    pub fn union<C: QuadCollection + ?Sized>(&self, other: &C) -> Dataset {
        let mut result = self.clone();
        other.visit_quads(&mut |quad| {
            result.insert(quad.clone());
        });
        result
    }

    /// Returns a new dataset with the quads contained in exactly one of the two collections.
    pub fn xor<C: QuadCollection + ?Sized>(&self, other: &C) -> Dataset {
        let other = other.to_quads();
        let other_set = other.iter().collect::<FxHashSet<_>>();
        let mut result: Dataset = self
            .quads
            .iter()
            .filter(|quad| !other_set.contains(quad))
            .cloned()
            .collect();
        for quad in &other {
            if !self.index.contains(quad) {
                result.insert(quad.clone());
            }
        }
        result
    }

    /// Replaces every quad selected by `matcher` with the result of `f`. The quad is removed if
    /// `f` returns `None`.
    pub fn for_each<'m>(
        &mut self,
        mut f: impl FnMut(&Quad) -> Option<Quad>,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> DatasetResult<()> {
        self.try_for_each(|quad| Ok::<_, DatasetError>(f(quad)), matcher)
    }

    /// Like [Dataset::for_each] but `f` may fail.
    ///
    /// The first error aborts the operation. Quads processed before the error keep their new
    /// value.
    pub fn try_for_each<'m, E: From<DatasetError>>(
        &mut self,
        mut f: impl FnMut(&Quad) -> Result<Option<Quad>, E>,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> Result<(), E> {
        let selected = self.select_bulk("for_each", self.positions(), &matcher.into())?;
        let mask = position_mask(self.len(), &selected);
        let quads = std::mem::take(&mut self.quads);
        self.index.clear();
        let (dataset, result) = rebuild(quads, &mask, &mut f);
        *self = dataset;
        debug!(selected = selected.len(), "Updated quads in place");
        result
    }

    /// Returns a new dataset in which every quad selected by `matcher` is replaced with the
    /// result of `f`. The quad is dropped if `f` returns `None`.
    pub fn map<'m>(
        &self,
        mut f: impl FnMut(&Quad) -> Option<Quad>,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> DatasetResult<Dataset> {
        self.try_map(|quad| Ok::<_, DatasetError>(f(quad)), matcher)
    }

    /// Like [Dataset::map] but `f` may fail.
    pub fn try_map<'m, E: From<DatasetError>>(
        &self,
        mut f: impl FnMut(&Quad) -> Result<Option<Quad>, E>,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> Result<Dataset, E> {
        let selected = self.select_bulk("map", self.positions(), &matcher.into())?;
        let mask = position_mask(self.len(), &selected);
        let (dataset, result) = rebuild(self.quads.clone(), &mask, &mut f);
        result.map(|()| dataset)
    }

    /// Folds the quads selected by `matcher` in iteration order.
    pub fn reduce<'m, T>(
        &self,
        mut f: impl FnMut(T, &Quad) -> T,
        initial: T,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> DatasetResult<T> {
        self.try_reduce(|acc, quad| Ok::<_, DatasetError>(f(acc, quad)), initial, matcher)
    }

    /// Like [Dataset::reduce] but `f` may fail.
    pub fn try_reduce<'m, T, E: From<DatasetError>>(
        &self,
        f: impl FnMut(T, &Quad) -> Result<T, E>,
        initial: T,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> Result<T, E> {
        let selected = self.select_bulk("reduce", self.positions(), &matcher.into())?;
        selected
            .into_iter()
            .map(|position| &self.quads[position])
            .try_fold(initial, f)
    }

    /// Returns whether `matcher` selects at least one quad.
    pub fn any<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<bool> {
        let selected = self.select_bulk("any", self.positions(), &matcher.into())?;
        Ok(!selected.is_empty())
    }

    /// Returns whether `matcher` selects every quad. True for an empty dataset.
    pub fn every<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<bool> {
        let selected = self.select_bulk("every", self.positions(), &matcher.into())?;
        Ok(selected.len() == self.len())
    }

    /// Returns whether `matcher` selects no quad. True for an empty dataset.
    pub fn none<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<bool> {
        Ok(!self.any(matcher)?)
    }

    /// Returns the distinct subjects of the quads selected by `matcher`.
    pub fn list_subjects<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Vec<Term>> {
        self.list_terms(QuadPosition::Subject, self.positions(), &matcher.into())
    }

    /// Returns the distinct predicates of the quads selected by `matcher`.
    pub fn list_predicates<'m>(
        &self,
        matcher: impl Into<QuadMatcher<'m>>,
    ) -> DatasetResult<Vec<Term>> {
        self.list_terms(QuadPosition::Predicate, self.positions(), &matcher.into())
    }

    /// Returns the distinct objects of the quads selected by `matcher`.
    pub fn list_objects<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Vec<Term>> {
        self.list_terms(QuadPosition::Object, self.positions(), &matcher.into())
    }

    /// Returns the distinct graphs of the quads selected by `matcher`.
    pub fn list_graphs<'m>(&self, matcher: impl Into<QuadMatcher<'m>>) -> DatasetResult<Vec<Term>> {
        self.list_terms(QuadPosition::Graph, self.positions(), &matcher.into())
    }

    /// Compares the quads without blank nodes of both collections.
    ///
    /// Quads that contain a blank node in any position are ignored on both sides. No graph
    /// isomorphism is attempted.
    pub fn equals<C: QuadCollection + ?Sized>(&self, other: &C) -> bool {
        ground_set_equals(self.quads.iter(), other, |_| true)
    }

    pub(crate) fn positions(&self) -> std::ops::Range<usize> {
        0..self.quads.len()
    }

    pub(crate) fn quad_at(&self, position: usize) -> &Quad {
        &self.quads[position]
    }

    pub(crate) fn contains_quad(&self, quad: &Quad) -> bool {
        self.index.contains(quad)
    }

    /// Returns the single candidate position selected by `matcher`.
    ///
    /// Ordinal positions of [QuadMatcher::Index] refer to the order of `candidates`.
    pub(crate) fn select_single(
        &self,
        candidates: impl IntoIterator<Item = usize>,
        matcher: &QuadMatcher<'_>,
    ) -> DatasetResult<Option<usize>> {
        let mut candidates = candidates.into_iter();
        let selected = if let QuadMatcher::Index(index) = matcher {
            candidates.nth(*index)
        } else {
            let matching = self.matching(candidates, matcher);
            match matching.as_slice() {
                [] => None,
                [position] => Some(*position),
                _ => {
                    trace!(count = matching.len(), ?matcher, "Ambiguous quad matcher");
                    return Err(DatasetError::AmbiguousMatch {
                        count: matching.len(),
                    });
                }
            }
        };
        trace!(?matcher, found = selected.is_some(), "Selected single quad");
        Ok(selected)
    }

    /// Returns all candidate positions selected by `matcher`.
    pub(crate) fn select_bulk(
        &self,
        operation: &str,
        candidates: impl IntoIterator<Item = usize>,
        matcher: &QuadMatcher<'_>,
    ) -> DatasetResult<Vec<usize>> {
        matcher.ensure_bulk(operation)?;
        Ok(self.matching(candidates, matcher))
    }

    fn matching(
        &self,
        candidates: impl IntoIterator<Item = usize>,
        matcher: &QuadMatcher<'_>,
    ) -> Vec<usize> {
        candidates
            .into_iter()
            .enumerate()
            .filter(|(ordinal, position)| matcher.matches(*ordinal, &self.quads[*position], self))
            .map(|(_, position)| position)
            .collect()
    }

    pub(crate) fn list_terms(
        &self,
        position: QuadPosition,
        candidates: impl IntoIterator<Item = usize>,
        matcher: &QuadMatcher<'_>,
    ) -> DatasetResult<Vec<Term>> {
        let selected = self.select_bulk("list", candidates, matcher)?;
        Ok(selected
            .into_iter()
            .map(|index| self.quads[index].term(position).clone())
            .unique()
            .collect())
    }

    pub(crate) fn insert(&mut self, quad: Quad) -> bool {
        if self.index.contains(&quad) {
            return false;
        }
        self.index.insert(quad.clone());
        self.quads.push(quad);
        true
    }

    /// Replaces the quad at `position`, keeping the position if the replacement is new. The quad
    /// is removed if `replacement` is `None` or already contained elsewhere.
    pub(crate) fn replace_at(&mut self, position: usize, replacement: Option<Quad>) {
        match replacement {
            Some(quad) if quad == self.quads[position] => {}
            Some(quad) if !self.index.contains(&quad) => {
                self.index.remove(&self.quads[position]);
                self.index.insert(quad.clone());
                self.quads[position] = quad;
            }
            _ => {
                self.remove_at(position);
            }
        }
    }

    /// Replaces `old` by value. Inserts `replacement` if `old` is no longer contained.
    pub(crate) fn replace_quad(&mut self, old: &Quad, replacement: Option<Quad>) {
        match self.quads.iter().position(|quad| quad == old) {
            Some(position) => self.replace_at(position, replacement),
            None => {
                if let Some(quad) = replacement {
                    self.insert(quad);
                }
            }
        }
    }

    pub(crate) fn remove_at(&mut self, position: usize) -> Quad {
        let quad = self.quads.remove(position);
        self.index.remove(&quad);
        quad
    }

    /// Removes the quads at the sorted `positions` and returns them.
    pub(crate) fn remove_positions(&mut self, positions: &[usize]) -> Dataset {
        let mask = position_mask(self.len(), positions);
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.quads)
            .into_iter()
            .zip(mask)
            .partition(|(_, selected)| *selected);
        self.quads = kept.into_iter().map(|(quad, _)| quad).collect();
        let removed: Dataset = removed.into_iter().map(|(quad, _)| quad).collect();
        for quad in &removed.quads {
            self.index.remove(quad);
        }
        debug!(removed = removed.len(), "Removed quads from dataset");
        removed
    }

    pub(crate) fn collect_positions(&self, positions: &[usize]) -> Dataset {
        positions
            .iter()
            .map(|position| self.quads[*position].clone())
            .collect()
    }
}

/// Rebuilds a dataset from `quads`, replacing the masked quads with the result of `f`.
///
/// On error, the failing quad and all remaining quads are kept unchanged.
pub(crate) fn rebuild<E>(
    quads: Vec<Quad>,
    mask: &[bool],
    f: &mut impl FnMut(&Quad) -> Result<Option<Quad>, E>,
) -> (Dataset, Result<(), E>) {
    let mut dataset = Dataset::new();
    let mut result = Ok(());
    let mut quads = quads.into_iter().zip(mask.iter().copied());
    for (quad, selected) in quads.by_ref() {
        if !selected {
            dataset.insert(quad);
            continue;
        }
        match f(&quad) {
            Ok(Some(replacement)) => {
                dataset.insert(replacement);
            }
            Ok(None) => {}
            Err(error) => {
                dataset.insert(quad);
                result = Err(error);
                break;
            }
        }
    }
    for (quad, _) in quads {
        dataset.insert(quad);
    }
    (dataset, result)
}

pub(crate) fn position_mask(len: usize, positions: &[usize]) -> Vec<bool> {
    let mut mask = vec![false; len];
    for position in positions {
        mask[*position] = true;
    }
    mask
}

fn complement(len: usize, positions: &[usize]) -> Vec<usize> {
    let mask = position_mask(len, positions);
    (0..len).filter(|position| !mask[*position]).collect()
}

/// Compares `quads` with the quads of `other` admitted by `admits`, ignoring quads with blank
/// nodes.
pub(crate) fn ground_set_equals<'q, C: QuadCollection + ?Sized>(
    quads: impl IntoIterator<Item = &'q Quad>,
    other: &C,
    admits: impl Fn(&Quad) -> bool,
) -> bool {
    let own = quads
        .into_iter()
        .filter(|quad| !quad.contains_blank_node())
        .collect::<FxHashSet<_>>();
    let mut other_ground = FxHashSet::default();
    other.visit_quads(&mut |quad| {
        if admits(quad) && !quad.contains_blank_node() {
            other_ground.insert(quad.clone());
        }
    });
    own.len() == other_ground.len() && own.iter().all(|quad| other_ground.contains(*quad))
}

/// An iterator over the quads of a [Dataset] selected by a [QuadMatcher].
#[derive(Debug)]
pub struct Matches<'d, 'm> {
    dataset: &'d Dataset,
    matcher: QuadMatcher<'m>,
    position: usize,
}

impl<'d> Iterator for Matches<'d, '_> {
    type Item = &'d Quad;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(quad) = self.dataset.quads.get(self.position) {
            let position = self.position;
            self.position += 1;
            if self.matcher.matches(position, quad, self.dataset) {
                return Some(quad);
            }
        }
        None
    }
}

impl QuadCollection for Dataset {
    fn visit_quads(&self, visitor: &mut dyn FnMut(&Quad)) {
        self.quads.iter().for_each(visitor);
    }

    fn quad_count(&self) -> usize {
        self.len()
    }

    fn to_quads(&self) -> Vec<Quad> {
        self.quads.clone()
    }
}

impl fmt::Debug for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.quads).finish()
    }
}

/// Writes the canonical text form: one line per quad.
impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for quad in &self.quads {
            writeln!(f, "{quad}")?;
        }
        Ok(())
    }
}

impl<Q: RdfQuad> FromIterator<Q> for Dataset {
    fn from_iter<T: IntoIterator<Item = Q>>(iter: T) -> Self {
        let mut dataset = Dataset::new();
        dataset.extend(iter);
        dataset
    }
}

impl<Q: RdfQuad> Extend<Q> for Dataset {
    fn extend<T: IntoIterator<Item = Q>>(&mut self, iter: T) {
        for quad in iter {
            self.insert(quad.into_quad());
        }
    }
}

impl IntoIterator for Dataset {
    type Item = Quad;
    type IntoIter = std::vec::IntoIter<Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Quad;
    type IntoIter = std::slice::Iter<'a, Quad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.iter()
    }
}
