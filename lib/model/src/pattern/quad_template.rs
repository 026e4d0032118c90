use crate::{Quad, QuadPosition, RdfQuad, TermPattern};

/// A quad pattern. Every position holds a [TermPattern], wildcards by default.
///
/// ```
/// # use rdf_dataset_model::{Literal, NamedNode, Quad, QuadTemplate};
/// let template = QuadTemplate::new().with_subject(NamedNode::new_unchecked("foo"));
/// let quad = Quad::new_triple(
///     NamedNode::new_unchecked("foo"),
///     NamedNode::new_unchecked("bar"),
///     Literal::from("baz"),
/// );
/// assert!(template.matches(&quad));
/// assert!(QuadTemplate::default().matches(&quad));
/// ```
#[derive(Clone, Debug, Default)]
pub struct QuadTemplate {
    subject: TermPattern,
    predicate: TermPattern,
    object: TermPattern,
    graph: TermPattern,
}

impl QuadTemplate {
    /// Creates the match-all template.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_patterns(
        subject: impl Into<TermPattern>,
        predicate: impl Into<TermPattern>,
        object: impl Into<TermPattern>,
        graph: impl Into<TermPattern>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
            graph: graph.into(),
        }
    }

    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<TermPattern>) -> Self {
        self.subject = subject.into();
        self
    }

    #[must_use]
    pub fn with_predicate(mut self, predicate: impl Into<TermPattern>) -> Self {
        self.predicate = predicate.into();
        self
    }

    #[must_use]
    pub fn with_object(mut self, object: impl Into<TermPattern>) -> Self {
        self.object = object.into();
        self
    }

    #[must_use]
    pub fn with_graph(mut self, graph: impl Into<TermPattern>) -> Self {
        self.graph = graph.into();
        self
    }

    pub fn subject(&self) -> &TermPattern {
        &self.subject
    }

    pub fn predicate(&self) -> &TermPattern {
        &self.predicate
    }

    pub fn object(&self) -> &TermPattern {
        &self.object
    }

    pub fn graph(&self) -> &TermPattern {
        &self.graph
    }

    pub fn pattern(&self, position: QuadPosition) -> &TermPattern {
        match position {
            QuadPosition::Subject => &self.subject,
            QuadPosition::Predicate => &self.predicate,
            QuadPosition::Object => &self.object,
            QuadPosition::Graph => &self.graph,
        }
    }

    /// Returns whether every position is a wildcard.
    pub fn is_any(&self) -> bool {
        QuadPosition::ALL
            .into_iter()
            .all(|position| self.pattern(position).is_any())
    }

    pub fn matches(&self, quad: &(impl RdfQuad + ?Sized)) -> bool {
        let quad = quad.as_quad_ref();
        QuadPosition::ALL
            .into_iter()
            .all(|position| self.pattern(position).matches_ref(quad.term(position)))
    }
}

impl From<&Quad> for QuadTemplate {
    /// Creates a template that only matches `quad`.
    fn from(quad: &Quad) -> Self {
        Self::from_patterns(quad.subject(), quad.predicate(), quad.object(), quad.graph())
    }
}
