use crate::node::foo_node;
use crate::{nn, quads, quads_count, subject};
use rdf_dataset::model::{Literal, Quad, QuadTemplate};
use rdf_dataset::{DatasetError, QuadMatcher};

#[test]
fn filter_is_scoped_to_the_anchor() {
    let quads = quads();
    let node = foo_node();
    assert_eq!(
        node.filter(QuadMatcher::any()).unwrap(),
        vec![quads[0].clone(), quads[3].clone()]
    );
    assert!(node.filter(subject("bar")).unwrap().is_empty());
    assert_eq!(
        node.filter(QuadMatcher::predicate(|quad| quad.graph().is_named_node()))
            .unwrap(),
        vec![quads[3].clone()]
    );
}

#[test]
fn contains_ignores_invisible_quads() {
    let quads = quads();
    let node = foo_node();
    assert!(node.contains(&quads[0]).unwrap());
    assert!(!node.contains(&quads[1]).unwrap());
    assert!(!node.contains(subject("bar")).unwrap());
}

#[test]
fn get_is_scoped_to_the_anchor() {
    let quads = quads();
    let node = foo_node();
    assert_eq!(node.get(&quads[3]).unwrap(), quads[3]);
    assert_eq!(node.get(&quads[2]), Err(DatasetError::NotFound));
    assert_eq!(
        node.get(QuadMatcher::any()),
        Err(DatasetError::AmbiguousMatch { count: 2 })
    );
    let template = QuadTemplate::new().with_graph(nn("graph"));
    assert_eq!(node.get(template).unwrap(), quads[3]);
}

#[test]
fn positions_refer_to_visible_quads() {
    let quads = quads();
    let node = foo_node();
    assert_eq!(node.get(0_usize).unwrap(), quads[0]);
    assert_eq!(node.get(1_usize).unwrap(), quads[3]);
    assert_eq!(node.get(2_usize), Err(DatasetError::NotFound));
}

#[test]
fn unset_removes_from_the_backing_dataset() {
    let quads = quads();
    let node = foo_node();
    assert_eq!(node.unset(&quads[1]).unwrap(), None);
    assert_eq!(node.unset(&quads[0]).unwrap(), Some(quads[0].clone()));
    assert_eq!(quads_count(&node.get_dataset()), [3, 0, 1, 1, 1]);
    assert_eq!(quads_count(&node), [1, 0, 0, 0, 1]);
}

#[test]
fn set_replaces_visible_quads() {
    let quads = quads();
    let node = foo_node();
    let replacement = quads[0].with_object(Literal::from("qux"));
    node.set(&quads[0], replacement.clone()).unwrap();
    assert!(node.contains(&replacement).unwrap());
    assert_eq!(quads_count(&node.get_dataset()), [4, 0, 1, 1, 1]);

    // Moving a quad to another subject takes it out of the view.
    node.set(&replacement, replacement.with_subject(nn("qux")))
        .unwrap();
    assert_eq!(node.len(), 1);
    assert_eq!(node.get_dataset().borrow().len(), 4);
}

#[test]
fn set_inserts_if_nothing_visible_matches() {
    let quads = quads();
    let node = foo_node();
    let added = Quad::new_triple(nn("foo"), nn("qux"), nn("qux"));
    // The quad exists in the backing dataset but is not visible.
    node.set(&quads[1], added.clone()).unwrap();
    assert_eq!(node.len(), 3);
    assert_eq!(quads_count(&node.get_dataset()), [5, 1, 1, 1, 1]);
}

#[test]
fn set_fails_when_ambiguous() {
    let node = foo_node();
    let replacement = Quad::new_triple(nn("foo"), nn("qux"), nn("qux"));
    assert!(matches!(
        node.set(QuadMatcher::any(), replacement),
        Err(DatasetError::AmbiguousMatch { count: 2 })
    ));
    assert_eq!(quads_count(&node.get_dataset()), [4, 1, 1, 1, 1]);
}

#[test]
fn bulk_operations_reject_positions() {
    let node = foo_node();
    assert!(matches!(
        node.filter(0_usize),
        Err(DatasetError::MalformedMatcher(_))
    ));
    assert!(node.delete(0_usize).is_err());
    assert_eq!(node.len(), 2);
}
