use crate::{BlankNodeIdParseError, IriParseError, LanguageTagParseError, TermKind};
use thiserror::Error;

/// An error raised while constructing or converting terms.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TermError {
    /// The value of a named node is not a valid absolute IRI.
    #[error(transparent)]
    InvalidIri(#[from] IriParseError),
    /// The identifier of a blank node is not a valid blank node identifier.
    #[error(transparent)]
    InvalidBlankNodeId(#[from] BlankNodeIdParseError),
    /// The language tag of a literal is not a well-formed BCP47 tag.
    #[error(transparent)]
    InvalidLanguageTag(#[from] LanguageTagParseError),
    /// A literal with the datatype `rdf:langString` was created without a language tag.
    #[error("A literal with the datatype rdf:langString requires a language tag.")]
    MissingLanguageTag,
    /// The pattern of a [ValueMatch](crate::ValueMatch::Regex) is not a valid regular expression.
    #[error("Invalid regular expression: {0}")]
    InvalidRegex(#[from] regex::Error),
    /// A term cannot be represented at the given position of a quad in the target model.
    #[error("A {kind} cannot be used as the {position} of the target quad.")]
    IncompatibleTerm {
        position: &'static str,
        kind: TermKind,
    },
}
