use crate::{Dataset, QuadCollection};
use rdf_dataset_model::Quad;
use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

/// A handle to a [Dataset] that is shared between its clones.
///
/// Mutations through one handle are visible through every other handle. The handle is not
/// thread-safe; callers that share a dataset must order their mutations themselves.
#[derive(Clone, Default, Debug)]
pub struct SharedDataset(Rc<RefCell<Dataset>>);

impl SharedDataset {
    pub fn new(dataset: Dataset) -> Self {
        Self(Rc::new(RefCell::new(dataset)))
    }

    /// Borrows the shared dataset.
    ///
    /// # Panics
    ///
    /// Panics if the dataset is currently borrowed mutably.
    pub fn borrow(&self) -> Ref<'_, Dataset> {
        self.0.borrow()
    }

    /// Mutably borrows the shared dataset.
    ///
    /// # Panics
    ///
    /// Panics if the dataset is currently borrowed. This includes matchers built from a
    /// [DatasetNode](crate::DatasetNode) or a handle over the same dataset while the returned
    /// guard is alive, as the conversion reads the dataset. Build such matchers first:
    ///
    /// ```
    /// # use rdf_dataset::{DatasetNode, QuadMatcher};
    /// # use rdf_dataset::model::{Literal, NamedNode};
    /// let node = DatasetNode::new(NamedNode::new_unchecked("foo"));
    /// node.add_property(NamedNode::new_unchecked("bar"), Literal::from("baz")).unwrap();
    ///
    /// let matcher = QuadMatcher::from(&node);
    /// node.get_dataset().borrow_mut().delete(matcher).unwrap();
    /// assert!(node.is_empty());
    /// ```
    pub fn borrow_mut(&self) -> RefMut<'_, Dataset> {
        self.0.borrow_mut()
    }

    /// Returns an independent copy of the current content.
    pub fn snapshot(&self) -> Dataset {
        self.borrow().clone()
    }

    /// Returns whether both handles point to the same dataset.
    pub fn ptr_eq(&self, other: &SharedDataset) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<Dataset> for SharedDataset {
    fn from(value: Dataset) -> Self {
        Self::new(value)
    }
}

impl QuadCollection for SharedDataset {
    fn visit_quads(&self, visitor: &mut dyn FnMut(&Quad)) {
        self.borrow().visit_quads(visitor);
    }

    fn quad_count(&self) -> usize {
        self.borrow().len()
    }
}
