use owlbridge_graph::{Graph, Node, Triple};
use owlbridge_model::vocab::{owl, rdf, rdfs};
use owlbridge_model::{AxiomKind, ClassExpression};
use owlbridge_translate::{read_all, read_axioms, ErrorPolicy, LoaderConfig, TranslateError};

const EX: &str = "http://example.com/shapes#";

fn ex(name: &str) -> Node {
    Node::iri(format!("{EX}{name}"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}

fn anonymous_class(graph: &mut Graph) -> Node {
    let node = graph.fresh_blank();
    graph.add(Triple::new(node.clone(), rdf::TYPE, Node::iri(owl::CLASS)));
    node
}

/// `Good ⊑ Shape` plus `Broken ⊑ _:i` where `_:i`'s intersection list has a
/// cell with no `rdf:rest`.
fn graph_with_one_broken_axiom() -> Graph {
    let mut graph = Graph::new();
    graph.add(Triple::new(ex("Good"), rdfs::SUB_CLASS_OF, ex("Shape")));

    let intersection = anonymous_class(&mut graph);
    let cell = graph.fresh_blank();
    graph.add(Triple::new(cell.clone(), rdf::FIRST, ex("Shape")));
    graph.add(Triple::new(intersection.clone(), owl::INTERSECTION_OF, cell));
    graph.add(Triple::new(ex("Broken"), rdfs::SUB_CLASS_OF, intersection));
    graph
}

#[test]
fn strict_reads_name_the_failing_statement() {
    let graph = graph_with_one_broken_axiom();
    let err = read_all(&graph, &LoaderConfig::default()).expect_err("strict read fails");
    match &err {
        TranslateError::Statement { triple, source } => {
            assert!(triple.contains("Broken"), "{triple}");
            assert!(source.is_structural());
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("while reading"));
}

#[test]
fn lenient_reads_skip_and_keep_going() {
    init_tracing();
    let graph = graph_with_one_broken_axiom();
    let config = LoaderConfig::default().with_error_policy(ErrorPolicy::Lenient);
    let read = read_axioms(&graph, &config, Some(AxiomKind::SubClassOf))
        .collect::<Result<Vec<_>, _>>()
        .expect("lenient read");
    assert_eq!(read.len(), 1);
    assert!(matches!(
        &read[0].object().body,
        owlbridge_model::AxiomBody::SubClassOf { sub, .. }
            if sub == &ClassExpression::class(format!("{EX}Good"))
    ));
}

#[test]
fn self_referencing_expression_is_a_cycle_in_both_modes() {
    let mut graph = Graph::new();
    let looped = anonymous_class(&mut graph);
    graph.add(Triple::new(looped.clone(), owl::COMPLEMENT_OF, looped.clone()));
    graph.add(Triple::new(ex("A"), rdfs::SUB_CLASS_OF, looped));

    let strict: Vec<_> =
        read_axioms(&graph, &LoaderConfig::default(), Some(AxiomKind::SubClassOf)).collect();
    assert_eq!(strict.len(), 1);
    let err = strict[0].as_ref().expect_err("cycle");
    assert!(err.is_structural());
    assert!(err.to_string().contains("Recursive loop"));

    let lenient = LoaderConfig::default().with_error_policy(ErrorPolicy::Lenient);
    assert_eq!(
        read_axioms(&graph, &lenient, Some(AxiomKind::SubClassOf)).count(),
        0
    );
}

#[test]
fn self_referencing_data_range_is_a_cycle_in_both_modes() {
    let mut graph = Graph::new();
    let width = ex("width");
    graph.add(Triple::new(width.clone(), rdf::TYPE, Node::iri(owl::DATATYPE_PROPERTY)));
    let looped = graph.fresh_blank();
    graph.add(Triple::new(looped.clone(), rdf::TYPE, Node::iri(rdfs::DATATYPE)));
    graph.add(Triple::new(looped.clone(), owl::DATATYPE_COMPLEMENT_OF, looped.clone()));
    graph.add(Triple::new(width, rdfs::RANGE, looped));

    let strict: Vec<_> =
        read_axioms(&graph, &LoaderConfig::default(), Some(AxiomKind::DataPropertyRange))
            .collect();
    assert_eq!(strict.len(), 1);
    match strict[0].as_ref().expect_err("cycle") {
        TranslateError::Statement { source, .. } => {
            assert!(matches!(**source, TranslateError::Cycle { .. }), "{source}");
        }
        other => panic!("unexpected error: {other}"),
    }

    init_tracing();
    let lenient = LoaderConfig::default().with_error_policy(ErrorPolicy::Lenient);
    assert_eq!(
        read_axioms(&graph, &lenient, Some(AxiomKind::DataPropertyRange)).count(),
        0
    );
}

#[test]
fn shared_sub_expressions_are_not_cycles() -> anyhow::Result<()> {
    // (B ⊔ C) ⊓ ¬(B ⊔ C): the union node is reached twice on different paths
    let mut graph = Graph::new();
    let union = anonymous_class(&mut graph);
    let members = graph.write_list([ex("B"), ex("C")]);
    graph.add(Triple::new(union.clone(), owl::UNION_OF, members));

    let complement = anonymous_class(&mut graph);
    graph.add(Triple::new(complement.clone(), owl::COMPLEMENT_OF, union.clone()));

    let intersection = anonymous_class(&mut graph);
    let operands = graph.write_list([union, complement]);
    graph.add(Triple::new(intersection.clone(), owl::INTERSECTION_OF, operands));
    graph.add(Triple::new(ex("A"), rdfs::SUB_CLASS_OF, intersection));

    let read = read_axioms(&graph, &LoaderConfig::default(), Some(AxiomKind::SubClassOf))
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].triples().len(), graph.len());
    Ok(())
}

#[test]
fn contract_errors_are_not_skipped() {
    let err = owlbridge_translate::translator(AxiomKind::SubClassOf)
        .write(
            &owlbridge_model::Axiom::new(owlbridge_model::AxiomBody::FunctionalDataProperty(
                owlbridge_model::DataProperty::new(format!("{EX}width")),
            )),
            &mut Graph::new(),
        )
        .expect_err("wrong kind");
    assert!(matches!(err, TranslateError::Contract { .. }));
    assert!(!err.is_structural());
}
