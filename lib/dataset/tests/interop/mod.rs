//! Quads of [oxrdf] used as a foreign quad implementation.

use crate::{example_dataset, nn, quads, quads_count, subject};
use oxrdf::{GraphName, Literal, NamedNode};
use rdf_dataset::model::{Quad, RdfQuad};
use rdf_dataset::{Dataset, DatasetNode, QuadMatcher};

fn foreign_quad() -> oxrdf::Quad {
    oxrdf::Quad::new(
        NamedNode::new_unchecked("foo"),
        NamedNode::new_unchecked("bar"),
        Literal::new_simple_literal("baz"),
        GraphName::DefaultGraph,
    )
}

fn foreign_tagged_quad() -> oxrdf::Quad {
    oxrdf::Quad::new(
        NamedNode::new_unchecked("foo"),
        NamedNode::new_unchecked("bar"),
        Literal::new_language_tagged_literal_unchecked("baz", "en"),
        NamedNode::new_unchecked("graph"),
    )
}

fn single() -> Dataset {
    [quads()[0].clone()].into_iter().collect()
}

#[test]
fn foreign_quads_compare_structurally() {
    let quads = quads();
    assert!(quads[0].quad_equals(&foreign_quad()));
    assert!(foreign_quad().quad_equals(&quads[0]));
    assert!(quads[3].quad_equals(&foreign_tagged_quad()));
    assert!(!quads[3].quad_equals(&foreign_quad()));
    assert_eq!(Quad::from(foreign_quad()), quads[0]);
}

#[test]
fn mixed_case_language_tags_match_foreign_quads() {
    let local = quads()[0].with_object(
        rdf_dataset::model::Literal::new_language_tagged_literal("baz", "EN").unwrap(),
    );
    let foreign = oxrdf::Quad::new(
        NamedNode::new_unchecked("foo"),
        NamedNode::new_unchecked("bar"),
        Literal::new_language_tagged_literal("baz", "EN").unwrap(),
        GraphName::DefaultGraph,
    );
    assert!(local.quad_equals(&foreign));

    let dataset: Dataset = [local].into_iter().collect();
    assert!(dataset.contains(QuadMatcher::foreign(&foreign)).unwrap());
}

#[test]
fn foreign_quads_are_deduplicated() {
    let mut dataset = single();
    assert!(!dataset.add(foreign_quad()));
    assert_eq!(dataset.len(), 1);
    assert_eq!(dataset.add_all(vec![foreign_quad(), foreign_tagged_quad()]), 1);
    assert_eq!(quads_count(&dataset), [2, 1, 0, 0, 1]);
}

#[test]
fn foreign_matchers() {
    let dataset = single();
    assert!(dataset.contains(QuadMatcher::foreign(&foreign_quad())).unwrap());
    assert_eq!(dataset.copy(QuadMatcher::foreign(&foreign_quad())).unwrap().len(), 1);
    assert_eq!(
        dataset
            .copy(QuadMatcher::foreign_collection(vec![foreign_quad()]))
            .unwrap()
            .len(),
        1
    );
    assert!(dataset
        .copy_except(QuadMatcher::foreign(&foreign_quad()))
        .unwrap()
        .is_empty());
    assert_eq!(dataset.copy(subject("foo")).unwrap().len(), 1);
}

#[test]
fn foreign_collections_in_set_algebra() {
    let dataset = single();
    let foreign = vec![foreign_quad()];
    assert_eq!(dataset.union(&foreign).len(), 1);
    assert!(dataset.xor(&foreign).is_empty());
    assert!(dataset.equals(&foreign));
    assert!(!dataset.equals(&vec![foreign_tagged_quad()]));
}

#[test]
fn foreign_quads_in_quantifiers() {
    let dataset = single();
    let matcher = || QuadMatcher::foreign(&foreign_quad());
    assert!(dataset.any(matcher()).unwrap());
    assert!(dataset.every(matcher()).unwrap());
    assert!(!dataset.none(matcher()).unwrap());
}

#[test]
fn foreign_quads_through_nodes() {
    let node = DatasetNode::factory(nn("foo"), &example_dataset());
    assert!(node.contains(QuadMatcher::foreign(&foreign_tagged_quad())).unwrap());
    assert!(node.equals(&vec![foreign_quad(), foreign_tagged_quad()]));
    assert!(!node.add(foreign_quad()));
}

#[test]
fn quads_convert_back_to_oxrdf() {
    let quads = quads();
    assert_eq!(oxrdf::Quad::try_from(&quads[3]).unwrap(), foreign_tagged_quad());
    let literal_subject = quads[0].with_subject(rdf_dataset::model::Literal::from("baz"));
    assert!(oxrdf::Quad::try_from(literal_subject).is_err());
}
