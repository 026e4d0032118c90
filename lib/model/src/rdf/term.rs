use crate::LiteralExt;
use oxrdf::{BlankNode, BlankNodeRef, Literal, LiteralRef, NamedNode, NamedNodeRef};
use std::fmt;

/// The variant of a [Term].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TermKind {
    NamedNode,
    BlankNode,
    Literal,
    DefaultGraph,
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TermKind::NamedNode => "named node",
            TermKind::BlankNode => "blank node",
            TermKind::Literal => "literal",
            TermKind::DefaultGraph => "default graph",
        })
    }
}

/// An RDF term.
///
/// [Term::DefaultGraph] marks the unnamed graph. It is only meaningful in the graph position of
/// a quad but the model does not restrict where a term may be used.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Term {
    NamedNode(NamedNode),
    BlankNode(BlankNode),
    Literal(Literal),
    #[default]
    DefaultGraph,
}

impl Term {
    pub fn as_ref(&self) -> TermRef<'_> {
        match self {
            Term::NamedNode(node) => TermRef::NamedNode(node.as_ref()),
            Term::BlankNode(node) => TermRef::BlankNode(node.as_ref()),
            Term::Literal(literal) => TermRef::Literal(literal.as_ref()),
            Term::DefaultGraph => TermRef::DefaultGraph,
        }
    }

    pub fn kind(&self) -> TermKind {
        self.as_ref().kind()
    }

    /// The string identity of the term. The default graph has the empty string as its value.
    pub fn value(&self) -> &str {
        self.as_ref().value()
    }

    /// Returns a term of the same variant with another value.
    ///
    /// Literals keep their datatype and language tag. The default graph has no value and is
    /// returned unchanged.
    #[must_use]
    pub fn with_value(&self, value: impl Into<String>) -> Term {
        match self {
            Term::NamedNode(_) => NamedNode::new_unchecked(value).into(),
            Term::BlankNode(_) => BlankNode::new_unchecked(value).into(),
            Term::Literal(literal) => literal.with_value(value).into(),
            Term::DefaultGraph => Term::DefaultGraph,
        }
    }

    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph)
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

impl From<NamedNode> for Term {
    fn from(value: NamedNode) -> Self {
        Term::NamedNode(value)
    }
}

impl From<NamedNodeRef<'_>> for Term {
    fn from(value: NamedNodeRef<'_>) -> Self {
        Term::NamedNode(value.into_owned())
    }
}

impl From<BlankNode> for Term {
    fn from(value: BlankNode) -> Self {
        Term::BlankNode(value)
    }
}

impl From<Literal> for Term {
    fn from(value: Literal) -> Self {
        Term::Literal(value)
    }
}

impl PartialEq<NamedNode> for Term {
    fn eq(&self, other: &NamedNode) -> bool {
        matches!(self, Term::NamedNode(node) if node == other)
    }
}

impl PartialEq<BlankNode> for Term {
    fn eq(&self, other: &BlankNode) -> bool {
        matches!(self, Term::BlankNode(node) if node == other)
    }
}

impl PartialEq<Literal> for Term {
    fn eq(&self, other: &Literal) -> bool {
        matches!(self, Term::Literal(literal) if literal == other)
    }
}

/// A borrowed view on a term.
///
/// This view is the common denominator of all term implementations. Two terms are equal iff
/// their views are equal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum TermRef<'a> {
    NamedNode(NamedNodeRef<'a>),
    BlankNode(BlankNodeRef<'a>),
    Literal(LiteralRef<'a>),
    DefaultGraph,
}

impl<'a> TermRef<'a> {
    pub fn kind(self) -> TermKind {
        match self {
            TermRef::NamedNode(_) => TermKind::NamedNode,
            TermRef::BlankNode(_) => TermKind::BlankNode,
            TermRef::Literal(_) => TermKind::Literal,
            TermRef::DefaultGraph => TermKind::DefaultGraph,
        }
    }

    pub fn value(self) -> &'a str {
        match self {
            TermRef::NamedNode(node) => node.as_str(),
            TermRef::BlankNode(node) => node.as_str(),
            TermRef::Literal(literal) => literal.value(),
            TermRef::DefaultGraph => "",
        }
    }

    pub fn is_blank_node(self) -> bool {
        matches!(self, TermRef::BlankNode(_))
    }

    pub fn into_owned(self) -> Term {
        match self {
            TermRef::NamedNode(node) => node.into_owned().into(),
            TermRef::BlankNode(node) => node.into_owned().into(),
            TermRef::Literal(literal) => literal.into_owned().into(),
            TermRef::DefaultGraph => Term::DefaultGraph,
        }
    }
}

impl fmt::Display for TermRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermRef::NamedNode(node) => node.fmt(f),
            TermRef::BlankNode(node) => node.fmt(f),
            TermRef::Literal(literal) => literal.fmt(f),
            TermRef::DefaultGraph => Ok(()),
        }
    }
}

impl<'a> From<&'a Term> for TermRef<'a> {
    fn from(value: &'a Term) -> Self {
        value.as_ref()
    }
}

impl<'a> From<NamedNodeRef<'a>> for TermRef<'a> {
    fn from(value: NamedNodeRef<'a>) -> Self {
        TermRef::NamedNode(value)
    }
}

impl<'a> From<BlankNodeRef<'a>> for TermRef<'a> {
    fn from(value: BlankNodeRef<'a>) -> Self {
        TermRef::BlankNode(value)
    }
}

impl<'a> From<LiteralRef<'a>> for TermRef<'a> {
    fn from(value: LiteralRef<'a>) -> Self {
        TermRef::Literal(value)
    }
}
