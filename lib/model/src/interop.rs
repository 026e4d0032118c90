//! Accessor traits that make terms and quads of independent implementations comparable.
//!
//! Equality never depends on the concrete type of a value. Every implementation exposes the
//! borrowed views [TermRef] and [QuadRef], and two values are equal iff their views are equal.
//! The [oxrdf] model is supported out of the box.

use crate::{
    BlankNode, BlankNodeRef, Literal, LiteralRef, NamedNode, NamedNodeRef, Quad, QuadPosition,
    QuadRef, Term, TermError, TermKind, TermRef,
};

/// A value that can be viewed as an RDF term.
pub trait RdfTerm {
    fn as_term_ref(&self) -> TermRef<'_>;

    fn to_term(&self) -> Term {
        self.as_term_ref().into_owned()
    }

    /// Structural equality with a term of any implementation.
    fn term_equals<T: RdfTerm + ?Sized>(&self, other: &T) -> bool {
        self.as_term_ref() == other.as_term_ref()
    }
}

/// A value that can be viewed as an RDF quad.
pub trait RdfQuad {
    fn as_quad_ref(&self) -> QuadRef<'_>;

    fn to_quad(&self) -> Quad {
        self.as_quad_ref().into_owned()
    }

    fn into_quad(self) -> Quad
    where
        Self: Sized,
    {
        self.to_quad()
    }

    /// Structural equality with a quad of any implementation.
    fn quad_equals<Q: RdfQuad + ?Sized>(&self, other: &Q) -> bool {
        self.as_quad_ref() == other.as_quad_ref()
    }
}

impl<T: RdfTerm + ?Sized> RdfTerm for &T {
    fn as_term_ref(&self) -> TermRef<'_> {
        (**self).as_term_ref()
    }
}

impl<Q: RdfQuad + ?Sized> RdfQuad for &Q {
    fn as_quad_ref(&self) -> QuadRef<'_> {
        (**self).as_quad_ref()
    }
}

impl RdfTerm for TermRef<'_> {
    fn as_term_ref(&self) -> TermRef<'_> {
        *self
    }
}

impl RdfTerm for Term {
    fn as_term_ref(&self) -> TermRef<'_> {
        self.as_ref()
    }
}

impl RdfTerm for NamedNode {
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::NamedNode(self.as_ref())
    }
}

impl RdfTerm for NamedNodeRef<'_> {
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::NamedNode(*self)
    }
}

impl RdfTerm for BlankNode {
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::BlankNode(self.as_ref())
    }
}

impl RdfTerm for BlankNodeRef<'_> {
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::BlankNode(*self)
    }
}

impl RdfTerm for Literal {
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::Literal(self.as_ref())
    }
}

impl RdfTerm for LiteralRef<'_> {
    fn as_term_ref(&self) -> TermRef<'_> {
        TermRef::Literal(*self)
    }
}

impl RdfQuad for QuadRef<'_> {
    fn as_quad_ref(&self) -> QuadRef<'_> {
        *self
    }
}

impl RdfQuad for Quad {
    fn as_quad_ref(&self) -> QuadRef<'_> {
        self.as_ref()
    }

    fn into_quad(self) -> Quad {
        self
    }
}

impl RdfTerm for oxrdf::Subject {
    fn as_term_ref(&self) -> TermRef<'_> {
        match self {
            oxrdf::Subject::NamedNode(node) => node.as_term_ref(),
            oxrdf::Subject::BlankNode(node) => node.as_term_ref(),
        }
    }
}

impl RdfTerm for oxrdf::Term {
    fn as_term_ref(&self) -> TermRef<'_> {
        match self {
            oxrdf::Term::NamedNode(node) => node.as_term_ref(),
            oxrdf::Term::BlankNode(node) => node.as_term_ref(),
            oxrdf::Term::Literal(literal) => literal.as_term_ref(),
        }
    }
}

impl RdfTerm for oxrdf::GraphName {
    fn as_term_ref(&self) -> TermRef<'_> {
        match self {
            oxrdf::GraphName::NamedNode(node) => node.as_term_ref(),
            oxrdf::GraphName::BlankNode(node) => node.as_term_ref(),
            oxrdf::GraphName::DefaultGraph => TermRef::DefaultGraph,
        }
    }
}

impl RdfQuad for oxrdf::Quad {
    fn as_quad_ref(&self) -> QuadRef<'_> {
        QuadRef {
            subject: self.subject.as_term_ref(),
            predicate: self.predicate.as_term_ref(),
            object: self.object.as_term_ref(),
            graph: self.graph_name.as_term_ref(),
        }
    }
}

impl From<oxrdf::Quad> for Quad {
    fn from(value: oxrdf::Quad) -> Self {
        value.to_quad()
    }
}

impl From<oxrdf::Term> for Term {
    fn from(value: oxrdf::Term) -> Self {
        value.to_term()
    }
}

impl TryFrom<&Quad> for oxrdf::Quad {
    type Error = TermError;

    fn try_from(quad: &Quad) -> Result<Self, Self::Error> {
        let subject = match quad.subject() {
            Term::NamedNode(node) => oxrdf::Subject::NamedNode(node.clone()),
            Term::BlankNode(node) => oxrdf::Subject::BlankNode(node.clone()),
            term => return Err(incompatible(QuadPosition::Subject, term.kind())),
        };
        let predicate = match quad.predicate() {
            Term::NamedNode(node) => node.clone(),
            term => return Err(incompatible(QuadPosition::Predicate, term.kind())),
        };
        let object = match quad.object() {
            Term::NamedNode(node) => oxrdf::Term::NamedNode(node.clone()),
            Term::BlankNode(node) => oxrdf::Term::BlankNode(node.clone()),
            Term::Literal(literal) => oxrdf::Term::Literal(literal.clone()),
            Term::DefaultGraph => {
                return Err(incompatible(QuadPosition::Object, TermKind::DefaultGraph))
            }
        };
        let graph_name = match quad.graph() {
            Term::NamedNode(node) => oxrdf::GraphName::NamedNode(node.clone()),
            Term::BlankNode(node) => oxrdf::GraphName::BlankNode(node.clone()),
            Term::DefaultGraph => oxrdf::GraphName::DefaultGraph,
            term => return Err(incompatible(QuadPosition::Graph, term.kind())),
        };
        Ok(oxrdf::Quad::new(subject, predicate, object, graph_name))
    }
}

impl TryFrom<Quad> for oxrdf::Quad {
    type Error = TermError;

    fn try_from(quad: Quad) -> Result<Self, Self::Error> {
        oxrdf::Quad::try_from(&quad)
    }
}

fn incompatible(position: QuadPosition, kind: TermKind) -> TermError {
    TermError::IncompatibleTerm {
        position: position.as_str(),
        kind,
    }
}
