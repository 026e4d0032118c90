use crate::{example_dataset, nn, quads, subject};
use rdf_dataset::model::{Literal, Quad, QuadTemplate, Term};
use rdf_dataset::{Dataset, DatasetError, QuadMatcher};

fn numbers() -> Dataset {
    [
        Quad::new_triple(nn("foo"), nn("bar"), Literal::from(1_i64)),
        Quad::new_triple(nn("foo"), nn("baz"), Literal::from(5_i64)),
    ]
    .into_iter()
    .collect()
}

fn number(quad: &Quad) -> i64 {
    quad.object()
        .as_literal()
        .and_then(|literal| literal.value().parse().ok())
        .unwrap_or_default()
}

fn doubled(quad: &Quad) -> Quad {
    quad.with_object(Literal::from(number(quad) * 2))
}

fn values(dataset: &Dataset) -> Vec<i64> {
    dataset.iter().map(number).collect()
}

#[test]
fn for_each_replaces_in_place() {
    let mut dataset = numbers();
    dataset
        .for_each(|quad| Some(doubled(quad)), QuadMatcher::any())
        .unwrap();
    assert_eq!(values(&dataset), vec![2, 10]);
}

#[test]
fn for_each_drops_quads_without_replacement() {
    let mut dataset = numbers();
    dataset
        .for_each(
            |quad| (number(quad) < 5).then(|| quad.clone()),
            QuadMatcher::any(),
        )
        .unwrap();
    assert_eq!(values(&dataset), vec![1]);
}

#[test]
fn for_each_only_touches_selected_quads() {
    let mut dataset = numbers();
    let template = QuadTemplate::new().with_predicate(nn("baz"));
    dataset.for_each(|quad| Some(doubled(quad)), template).unwrap();
    assert_eq!(values(&dataset), vec![1, 10]);
}

#[test]
fn try_for_each_propagates_errors() {
    let mut dataset = numbers();
    let result = dataset.try_for_each(
        |_| Err(DatasetError::InvalidOperation("rejected".to_owned())),
        subject("qux"),
    );
    assert!(result.is_ok());
    assert_eq!(values(&dataset), vec![1, 5]);

    let result = dataset.try_for_each(
        |quad| {
            if number(quad) == 5 {
                Err(DatasetError::InvalidOperation("rejected".to_owned()))
            } else {
                Ok(Some(doubled(quad)))
            }
        },
        QuadMatcher::any(),
    );
    assert!(matches!(result, Err(DatasetError::InvalidOperation(_))));
    assert_eq!(values(&dataset), vec![2, 5]);
}

#[test]
fn map_leaves_the_receiver_untouched() {
    let dataset = numbers();
    let mapped = dataset
        .map(|quad| Some(doubled(quad)), QuadMatcher::any())
        .unwrap();
    assert_eq!(values(&mapped), vec![2, 10]);
    assert_eq!(values(&dataset), vec![1, 5]);

    let filtered = dataset
        .map(|quad| (number(quad) < 5).then(|| quad.clone()), QuadMatcher::any())
        .unwrap();
    assert_eq!(values(&filtered), vec![1]);
}

#[test]
fn try_map_propagates_errors() {
    let dataset = numbers();
    let result = dataset.try_map(
        |_| Err(DatasetError::InvalidOperation("rejected".to_owned())),
        subject("qux"),
    );
    assert_eq!(values(&result.unwrap()), vec![1, 5]);

    let result = dataset.try_map(
        |_| Err(DatasetError::InvalidOperation("rejected".to_owned())),
        QuadMatcher::any(),
    );
    assert!(result.is_err());
}

#[test]
fn map_merges_colliding_results() {
    let dataset = numbers();
    let mapped = dataset
        .map(
            |quad| Some(quad.with_object(Literal::from(0_i64))),
            QuadMatcher::any(),
        )
        .unwrap();
    assert_eq!(mapped.len(), 2);

    let mapped = dataset
        .map(
            |quad| Some(quad.with_predicate(nn("bar")).with_object(Literal::from(0_i64))),
            QuadMatcher::any(),
        )
        .unwrap();
    assert_eq!(mapped.len(), 1);
}

#[test]
fn reduce_folds_in_iteration_order() {
    let dataset = numbers();
    let sum = dataset
        .reduce(|acc, quad| acc + number(quad), 0_i64, QuadMatcher::any())
        .unwrap();
    assert_eq!(sum, 6);

    let order = example_dataset()
        .reduce(
            |mut acc: Vec<String>, quad| {
                acc.push(quad.subject().value().to_owned());
                acc
            },
            Vec::new(),
            QuadMatcher::any(),
        )
        .unwrap();
    assert_eq!(order, vec!["foo", "baz", "bar", "foo"]);

    let empty = dataset
        .reduce(|acc, quad| acc + number(quad), 7_i64, subject("qux"))
        .unwrap();
    assert_eq!(empty, 7);
}

#[test]
fn try_reduce_propagates_errors() {
    let result = numbers().try_reduce(
        |acc, quad| {
            if number(quad) > 3 {
                Err(DatasetError::InvalidOperation("too large".to_owned()))
            } else {
                Ok(acc + number(quad))
            }
        },
        0_i64,
        QuadMatcher::any(),
    );
    assert!(result.is_err());
}

#[test]
fn any_every_none() {
    let quads = quads();
    let dataset = example_dataset();

    assert!(dataset.any(&quads[0]).unwrap());
    assert!(!dataset.none(&quads[0]).unwrap());
    assert!(dataset.any(subject("foo")).unwrap());
    assert!(!dataset.any(subject("qux")).unwrap());
    assert!(dataset.none(subject("qux")).unwrap());
    assert!(dataset
        .any(QuadMatcher::predicate(|quad| quad.graph().is_named_node()))
        .unwrap());
    assert!(dataset
        .any(QuadMatcher::collection(&vec![quads[2].clone()]))
        .unwrap());

    let object = Literal::new_language_tagged_literal("baz", "en").unwrap();
    assert!(!dataset
        .none(QuadTemplate::new().with_object(object))
        .unwrap());

    assert!(!dataset.every(subject("foo")).unwrap());
    assert!(dataset.every(QuadMatcher::any()).unwrap());
}

#[test]
fn every_on_small_datasets() {
    let quads = quads();
    let mut dataset: Dataset = [quads[0].clone()].into_iter().collect();
    assert!(dataset.every(&quads[0]).unwrap());
    dataset.add(quads[1].clone());
    assert!(!dataset.every(&quads[0]).unwrap());

    let dataset: Dataset = [quads[0].clone(), quads[3].clone()].into_iter().collect();
    assert!(dataset.every(subject("foo")).unwrap());
}

#[test]
fn empty_datasets() {
    let dataset = Dataset::new();
    assert!(!dataset.any(QuadMatcher::any()).unwrap());
    assert!(dataset.none(QuadMatcher::any()).unwrap());
    assert!(dataset.every(subject("foo")).unwrap());
}

#[test]
fn list_terms() {
    let dataset = example_dataset();
    let graph_template = QuadTemplate::new().with_predicate(nn("bar"));

    assert_eq!(dataset.list_subjects(QuadMatcher::any()).unwrap().len(), 3);
    assert_eq!(
        dataset.list_subjects(graph_template.clone()).unwrap(),
        vec![Term::from(nn("foo"))]
    );

    assert_eq!(dataset.list_predicates(QuadMatcher::any()).unwrap().len(), 3);
    assert_eq!(
        dataset.list_predicates(subject("foo")).unwrap(),
        vec![Term::from(nn("bar"))]
    );

    assert_eq!(dataset.list_objects(QuadMatcher::any()).unwrap().len(), 4);
    assert_eq!(
        dataset.list_objects(subject("bar")).unwrap(),
        vec![Term::from(nn("foo"))]
    );

    assert_eq!(dataset.list_graphs(QuadMatcher::any()).unwrap().len(), 2);
    assert_eq!(dataset.list_graphs(graph_template).unwrap().len(), 2);
    let object = Literal::new_language_tagged_literal("baz", "en").unwrap();
    assert_eq!(
        dataset
            .list_graphs(QuadTemplate::new().with_object(object))
            .unwrap(),
        vec![Term::from(nn("graph"))]
    );
}

#[test]
fn list_terms_without_matches() {
    let dataset = example_dataset();
    let foobar = subject("foobar");
    assert!(dataset.list_subjects(foobar.clone()).unwrap().is_empty());
    assert!(dataset.list_predicates(foobar.clone()).unwrap().is_empty());
    assert!(dataset.list_objects(foobar.clone()).unwrap().is_empty());
    assert!(dataset.list_graphs(foobar).unwrap().is_empty());
}

#[test]
fn nested_traversal() {
    let quads = quads();
    let mut dataset = example_dataset();
    dataset.add(quads[3].with_predicate(quads[2].predicate().clone()));

    let mut counts = dataset
        .list_subjects(QuadMatcher::any())
        .unwrap()
        .into_iter()
        .map(|subject| {
            let predicates = dataset
                .list_predicates(QuadTemplate::new().with_subject(subject.clone()))
                .unwrap();
            (subject.value().to_owned(), predicates.len())
        })
        .collect::<Vec<_>>();
    counts.sort();
    assert_eq!(
        counts,
        vec![
            ("bar".to_owned(), 1),
            ("baz".to_owned(), 1),
            ("foo".to_owned(), 2)
        ]
    );
}

#[test]
fn dataset_predicates_see_the_whole_dataset() {
    let dataset = example_dataset();
    let shared_subject = QuadMatcher::dataset_predicate(|quad, dataset| {
        dataset
            .iter()
            .filter(|other| other.subject() == quad.subject())
            .count()
            > 1
    });
    assert_eq!(dataset.copy(shared_subject).unwrap().len(), 2);
}
