use rdf_dataset_model::{Quad, RdfQuad};

/// A collection of quads that can be combined with a [Dataset](crate::Dataset).
///
/// Set algebra, equality, and collection matchers accept any implementation, including plain
/// slices of foreign quads.
pub trait QuadCollection {
    /// Calls `visitor` once for every quad of the collection in iteration order.
    fn visit_quads(&self, visitor: &mut dyn FnMut(&Quad));

    fn quad_count(&self) -> usize {
        let mut count = 0;
        self.visit_quads(&mut |_| count += 1);
        count
    }

    fn to_quads(&self) -> Vec<Quad> {
        let mut quads = Vec::new();
        self.visit_quads(&mut |quad| quads.push(quad.clone()));
        quads
    }
}

impl<Q: RdfQuad> QuadCollection for [Q] {
    fn visit_quads(&self, visitor: &mut dyn FnMut(&Quad)) {
        for quad in self {
            visitor(&quad.to_quad());
        }
    }

    fn quad_count(&self) -> usize {
        self.len()
    }
}

impl<Q: RdfQuad> QuadCollection for Vec<Q> {
    fn visit_quads(&self, visitor: &mut dyn FnMut(&Quad)) {
        self.as_slice().visit_quads(visitor);
    }

    fn quad_count(&self) -> usize {
        self.len()
    }
}
