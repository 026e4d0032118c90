use crate::vocab::rdf;
use crate::TermError;
use oxrdf::{Literal, NamedNode};

/// Creates a literal with the given datatype.
///
/// Fails for `rdf:langString` as a language-tagged string cannot exist without its tag. Use
/// [Literal::new_language_tagged_literal] for these literals.
pub fn typed_literal(
    value: impl Into<String>,
    datatype: impl Into<NamedNode>,
) -> Result<Literal, TermError> {
    let datatype = datatype.into();
    if datatype == rdf::LANG_STRING {
        return Err(TermError::MissingLanguageTag);
    }
    Ok(Literal::new_typed_literal(value, datatype))
}

/// Immutable updates of a [Literal].
///
/// Every method returns a new literal and leaves the receiver untouched.
pub trait LiteralExt {
    /// Returns a literal with the given lexical form, keeping the datatype and language tag.
    fn with_value(&self, value: impl Into<String>) -> Literal;

    /// Returns a language-tagged literal with the lexical form of this literal.
    fn with_language(&self, language: impl Into<String>) -> Result<Literal, TermError>;

    /// Returns a typed literal with the lexical form of this literal. The language tag is dropped.
    fn with_datatype(&self, datatype: impl Into<NamedNode>) -> Result<Literal, TermError>;
}

impl LiteralExt for Literal {
    fn with_value(&self, value: impl Into<String>) -> Literal {
        match self.language() {
            Some(language) => Literal::new_language_tagged_literal_unchecked(value, language),
            None => Literal::new_typed_literal(value, self.datatype()),
        }
    }

    fn with_language(&self, language: impl Into<String>) -> Result<Literal, TermError> {
        Ok(Literal::new_language_tagged_literal(self.value(), language)?)
    }

    fn with_datatype(&self, datatype: impl Into<NamedNode>) -> Result<Literal, TermError> {
        typed_literal(self.value(), datatype)
    }
}
