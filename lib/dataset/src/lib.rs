//! An in-memory [RDF dataset](https://www.w3.org/TR/rdf11-concepts/#dfn-rdf-dataset) with
//! pattern-based access, set algebra, and node-scoped views.
//!
//! - [Dataset] is a duplicate-free collection of quads.
//! - [DatasetNode] is a view on the quads of a dataset whose subject is a given anchor term.
//! - [QuadMatcher] selects the quads an operation applies to.
//!
//! The term model lives in [rdf_dataset_model] and is re-exported as [model].

mod collection;
mod dataset;
mod error;
mod matcher;
mod node;
mod shared;

pub use collection::QuadCollection;
pub use dataset::{Dataset, Matches};
pub use error::{DatasetError, DatasetResult};
pub use matcher::QuadMatcher;
pub use node::{Anchor, DatasetNode};
pub use shared::SharedDataset;

pub mod model {
    pub use rdf_dataset_model::*;
}
