use crate::{Term, TermRef};
use std::fmt;

/// A position within a quad.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum QuadPosition {
    Subject,
    Predicate,
    Object,
    Graph,
}

impl QuadPosition {
    pub const ALL: [QuadPosition; 4] = [
        QuadPosition::Subject,
        QuadPosition::Predicate,
        QuadPosition::Object,
        QuadPosition::Graph,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            QuadPosition::Subject => "subject",
            QuadPosition::Predicate => "predicate",
            QuadPosition::Object => "object",
            QuadPosition::Graph => "graph",
        }
    }
}

impl fmt::Display for QuadPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An RDF quad: a triple together with the graph it belongs to.
///
/// Quads are immutable. The `with_*` methods return an updated copy.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Quad {
    subject: Term,
    predicate: Term,
    object: Term,
    graph: Term,
}

impl Quad {
    pub fn new(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
        graph: impl Into<Term>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: graph.into(),
        }
    }

    /// Creates a quad in the default graph.
    pub fn new_triple(
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
    ) -> Self {
        Self::new(subject, predicate, object, Term::DefaultGraph)
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    pub fn object(&self) -> &Term {
        &self.object
    }

    pub fn graph(&self) -> &Term {
        &self.graph
    }

    pub fn term(&self, position: QuadPosition) -> &Term {
        match position {
            QuadPosition::Subject => &self.subject,
            QuadPosition::Predicate => &self.predicate,
            QuadPosition::Object => &self.object,
            QuadPosition::Graph => &self.graph,
        }
    }

    #[must_use]
    pub fn with_subject(&self, subject: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_predicate(&self, predicate: impl Into<Term>) -> Self {
        Self {
            predicate: predicate.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_object(&self, object: impl Into<Term>) -> Self {
        Self {
            object: object.into(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_graph(&self, graph: impl Into<Term>) -> Self {
        Self {
            graph: graph.into(),
            ..self.clone()
        }
    }

    /// Returns whether any of the four positions holds a blank node.
    pub fn contains_blank_node(&self) -> bool {
        self.as_ref().contains_blank_node()
    }

    pub fn as_ref(&self) -> QuadRef<'_> {
        QuadRef {
            subject: self.subject.as_ref(),
            predicate: self.predicate.as_ref(),
            object: self.object.as_ref(),
            graph: self.graph.as_ref(),
        }
    }

    pub fn into_parts(self) -> (Term, Term, Term, Term) {
        (self.subject, self.predicate, self.object, self.graph)
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

/// A borrowed view on a quad.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct QuadRef<'a> {
    pub subject: TermRef<'a>,
    pub predicate: TermRef<'a>,
    pub object: TermRef<'a>,
    pub graph: TermRef<'a>,
}

impl<'a> QuadRef<'a> {
    pub fn term(self, position: QuadPosition) -> TermRef<'a> {
        match position {
            QuadPosition::Subject => self.subject,
            QuadPosition::Predicate => self.predicate,
            QuadPosition::Object => self.object,
            QuadPosition::Graph => self.graph,
        }
    }

    pub fn contains_blank_node(self) -> bool {
        QuadPosition::ALL
            .into_iter()
            .any(|position| self.term(position).is_blank_node())
    }

    pub fn into_owned(self) -> Quad {
        Quad {
            subject: self.subject.into_owned(),
            predicate: self.predicate.into_owned(),
            object: self.object.into_owned(),
            graph: self.graph.into_owned(),
        }
    }
}

impl fmt::Display for QuadRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)?;
        if self.graph != TermRef::DefaultGraph {
            write!(f, " {}", self.graph)?;
        }
        Ok(())
    }
}

impl<'a> From<&'a Quad> for QuadRef<'a> {
    fn from(value: &'a Quad) -> Self {
        value.as_ref()
    }
}
