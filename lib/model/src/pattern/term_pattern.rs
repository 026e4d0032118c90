use crate::{BlankNode, Literal, NamedNode, RdfTerm, Term, TermKind, TermRef, ValueMatch};

/// A condition on the language tag of a literal.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LanguageMatch {
    /// The literal has exactly this language tag. Tags are compared case-sensitively and the
    /// validating literal constructors store them in lowercase.
    Exactly(String),
    /// The literal has some language tag.
    AnyTag,
    /// The literal has no language tag.
    Untagged,
}

impl LanguageMatch {
    fn matches(&self, language: Option<&str>) -> bool {
        match self {
            LanguageMatch::Exactly(expected) => language == Some(expected.as_str()),
            LanguageMatch::AnyTag => language.is_some(),
            LanguageMatch::Untagged => language.is_none(),
        }
    }
}

/// A term matcher composed of optional constraints. A term matches if all constraints hold.
///
/// An empty template matches every term. Constraints on the language or the datatype can only
/// hold for literals.
///
/// ```
/// # use rdf_dataset_model::{Literal, NamedNode, TermTemplate, ValueMatch};
/// let template = TermTemplate::literal().with_value(ValueMatch::Greater(5.0));
/// assert!(template.matches(&Literal::from(10_i64)));
/// assert!(!template.matches(&Literal::from(1_i64)));
/// assert!(!template.matches(&NamedNode::new_unchecked("10")));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TermTemplate {
    kind: Option<TermKind>,
    value: Option<ValueMatch>,
    language: Option<LanguageMatch>,
    datatype: Option<NamedNode>,
}

impl TermTemplate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named_node() -> Self {
        Self::of_kind(TermKind::NamedNode)
    }

    pub fn blank_node() -> Self {
        Self::of_kind(TermKind::BlankNode)
    }

    pub fn literal() -> Self {
        Self::of_kind(TermKind::Literal)
    }

    pub fn of_kind(kind: TermKind) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<ValueMatch>) -> Self {
        self.value = Some(value.into());
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: LanguageMatch) -> Self {
        self.language = Some(language);
        self
    }

    #[must_use]
    pub fn with_datatype(mut self, datatype: impl Into<NamedNode>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }

    pub fn matches(&self, term: &(impl RdfTerm + ?Sized)) -> bool {
        self.matches_ref(term.as_term_ref())
    }

    pub(crate) fn matches_ref(&self, term: TermRef<'_>) -> bool {
        if self.kind.is_some_and(|kind| kind != term.kind()) {
            return false;
        }
        if let Some(value) = &self.value {
            if !value.matches(term.value()) {
                return false;
            }
        }
        if self.language.is_none() && self.datatype.is_none() {
            return true;
        }
        let TermRef::Literal(literal) = term else {
            return false;
        };
        if let Some(language) = &self.language {
            if !language.matches(literal.language()) {
                return false;
            }
        }
        match &self.datatype {
            Some(datatype) => datatype.as_ref() == literal.datatype(),
            None => true,
        }
    }
}

/// A single position of a [QuadTemplate](crate::QuadTemplate).
#[derive(Clone, Debug, Default)]
pub enum TermPattern {
    /// Matches every term.
    #[default]
    Any,
    /// Matches terms equal to the given term.
    Term(Term),
    /// Matches terms that satisfy the template.
    Template(TermTemplate),
}

impl TermPattern {
    pub fn is_any(&self) -> bool {
        matches!(self, TermPattern::Any)
    }

    pub fn matches(&self, term: &(impl RdfTerm + ?Sized)) -> bool {
        self.matches_ref(term.as_term_ref())
    }

    pub(crate) fn matches_ref(&self, term: TermRef<'_>) -> bool {
        match self {
            TermPattern::Any => true,
            TermPattern::Term(expected) => expected.as_ref() == term,
            TermPattern::Template(template) => template.matches_ref(term),
        }
    }
}

impl From<Term> for TermPattern {
    fn from(value: Term) -> Self {
        TermPattern::Term(value)
    }
}

impl From<&Term> for TermPattern {
    fn from(value: &Term) -> Self {
        TermPattern::Term(value.clone())
    }
}

impl From<NamedNode> for TermPattern {
    fn from(value: NamedNode) -> Self {
        TermPattern::Term(value.into())
    }
}

impl From<BlankNode> for TermPattern {
    fn from(value: BlankNode) -> Self {
        TermPattern::Term(value.into())
    }
}

impl From<Literal> for TermPattern {
    fn from(value: Literal) -> Self {
        TermPattern::Term(value.into())
    }
}

impl From<TermTemplate> for TermPattern {
    fn from(value: TermTemplate) -> Self {
        TermPattern::Template(value)
    }
}

impl<T: Into<TermPattern>> From<Option<T>> for TermPattern {
    fn from(value: Option<T>) -> Self {
        value.map_or(TermPattern::Any, Into::into)
    }
}
