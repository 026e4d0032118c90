//! The term and quad model of [RDF Dataset](https://docs.rs/rdf-dataset/).
//!
//! Terms and quads are immutable values. Equality between values is purely structural and
//! defined over the borrowed views [TermRef] and [QuadRef]. Every type that can expose these views
//! (see [RdfTerm] and [RdfQuad]) can be compared with the types of this crate, including the types
//! of [oxrdf].

mod error;
mod interop;
mod pattern;
mod quad;
mod rdf;

pub use error::*;
pub use interop::*;
pub use pattern::*;
pub use quad::*;
pub use rdf::*;

// Re-export some oxrdf types.
pub use oxrdf::vocab;
pub use oxrdf::{
    BlankNode, BlankNodeIdParseError, BlankNodeRef, IriParseError, LanguageTagParseError, Literal,
    LiteralRef, NamedNode, NamedNodeRef,
};
