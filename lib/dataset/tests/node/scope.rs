use crate::node::foo_node;
use crate::{example_dataset, nn, quads, quads_count};
use rdf_dataset::model::{Literal, Quad, Term};
use rdf_dataset::{Anchor, DatasetNode, QuadMatcher, SharedDataset};

#[test]
fn add_forwards_to_the_backing_dataset() {
    let quads = quads();
    let node = DatasetNode::new(nn("foo"));
    assert!(node.add(quads[0].clone()));
    assert!(node.add(quads[1].clone()));
    assert!(node.add(quads[2].clone()));
    assert!(!node.push(quads[2].clone()));

    assert_eq!(node.get_dataset().borrow().len(), 3);
    assert_eq!(quads_count(&node), [1, 1, 0, 0, 0]);
    assert_eq!(node.len(), 1);

    assert_eq!(node.add_all(quads.clone()), 1);
    assert_eq!(quads_count(&node), [2, 1, 0, 0, 1]);
    assert_eq!(quads_count(&node.get_dataset()), [4, 1, 1, 1, 1]);
}

#[test]
fn factory_copies_the_dataset() {
    let dataset = example_dataset();
    let node = DatasetNode::factory(nn("foo"), &dataset);
    node.add(Quad::new_triple(nn("foo"), nn("qux"), nn("qux")));
    assert_eq!(dataset.len(), 4);
    assert_eq!(node.get_dataset().borrow().len(), 5);
}

#[test]
fn factory_nodes_do_not_observe_the_original() {
    let mut dataset = example_dataset();
    let node = DatasetNode::factory(nn("foo"), &dataset);
    dataset.add(Quad::new_triple(nn("foo"), nn("qux"), nn("qux")));
    dataset.unset(&quads()[0]).unwrap();
    assert_eq!(node.len(), 2);
    assert_eq!(quads_count(&node), [2, 1, 0, 0, 1]);
}

#[test]
fn shared_nodes_observe_the_original() {
    let shared = SharedDataset::new(example_dataset());
    let node = DatasetNode::with_shared(nn("foo"), shared.clone());
    let other = foo_node().with_dataset(shared.clone());

    shared
        .borrow_mut()
        .add(Quad::new_triple(nn("foo"), nn("qux"), nn("qux")));
    assert_eq!(node.len(), 3);
    assert_eq!(other.len(), 3);

    shared.borrow_mut().delete(&quads()[0]).unwrap();
    assert_eq!(node.len(), 2);
    assert_eq!(other.len(), 2);
}

#[test]
fn delete_through_a_guard_with_a_prebuilt_matcher() {
    let node = foo_node();
    let matcher = QuadMatcher::from(&node);
    let removed = node.get_dataset().borrow_mut().delete(matcher).unwrap();
    assert_eq!(quads_count(&removed), [2, 1, 0, 0, 1]);
    assert!(node.is_empty());
    assert_eq!(node.get_dataset().borrow().len(), 2);
}

#[test]
#[should_panic(expected = "already mutably borrowed")]
fn converting_a_node_matcher_inside_a_guard_panics() {
    let node = foo_node();
    let _ = node.get_dataset().borrow_mut().delete(&node);
}

#[test]
fn shared_datasets_are_observed_by_all_nodes() {
    let shared = SharedDataset::new(example_dataset());
    let foo = DatasetNode::with_shared(nn("foo"), shared.clone());
    let bar = foo.with_node(nn("bar"));
    assert!(bar.get_dataset().ptr_eq(&shared));

    bar.add(Quad::new_triple(nn("foo"), nn("qux"), Literal::from("qux")));
    assert_eq!(foo.len(), 3);
    assert_eq!(bar.len(), 1);
    assert_eq!(shared.borrow().len(), 5);
}

#[test]
fn with_dataset_keeps_the_anchor() {
    let node = foo_node();
    let other = node.with_dataset(SharedDataset::default());
    assert_eq!(other.get_node(), node.get_node());
    assert!(other.is_empty());
    assert_eq!(node.len(), 2);
}

#[test]
fn anchor_accessors() {
    let node = foo_node();
    assert_eq!(node.get_node(), &Anchor::Term(Term::from(nn("foo"))));
    assert_eq!(node.get_value().unwrap(), "foo");
    assert!(node.equals_term(&nn("foo")));
    assert!(!node.equals_term(&nn("bar")));
    assert!(!node.equals_term(&Literal::from("foo")));
}

#[test]
fn iteration_yields_visible_quads() {
    let quads = quads();
    let node = foo_node();
    let iterated = (&node).into_iter().collect::<Vec<_>>();
    assert_eq!(iterated, vec![quads[0].clone(), quads[3].clone()]);
    assert_eq!(node.quads(), iterated);
}

#[test]
fn display_writes_visible_quads() {
    let quads = quads();
    let node = foo_node();
    assert_eq!(node.to_string(), format!("{}\n{}\n", quads[0], quads[3]));
    assert_eq!(DatasetNode::new(nn("foo")).to_string(), "");
}

#[test]
fn add_property_uses_the_anchor_as_subject() {
    let node = DatasetNode::new(nn("foo"));
    node.add_property(nn("bar"), Literal::from("baz")).unwrap();
    node.add_property_in_graph(
        nn("bar"),
        Literal::new_language_tagged_literal("baz", "en").unwrap(),
        nn("graph"),
    )
    .unwrap();
    assert_eq!(quads_count(&node), [2, 1, 0, 0, 1]);
}

#[test]
fn quad_anchors_see_a_single_statement() {
    let quads = quads();
    let node = DatasetNode::factory(quads[1].clone(), &example_dataset());
    assert_eq!(quads_count(&node), [1, 0, 1, 0, 0]);
    assert!(node.get_value().is_err());
    insta::assert_snapshot!(
        node.get_value().unwrap_err(),
        @"Invalid operation: a quad anchor has no single value"
    );
}
