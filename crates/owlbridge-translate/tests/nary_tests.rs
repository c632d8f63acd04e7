use std::collections::BTreeSet;

use owlbridge_graph::{Graph, Node, Triple};
use owlbridge_model::vocab::{owl, rdf, rdfs};
use owlbridge_model::{
    Annotation, Axiom, AxiomBody, AxiomKind, ClassExpression, Individual, Literal,
};
use owlbridge_translate::{read_axioms, write_axiom, LoaderConfig, TranslateError, Translated};
use proptest::prelude::*;

const EX: &str = "http://example.com/zoo#";

fn class(name: &str) -> ClassExpression {
    ClassExpression::class(format!("{EX}{name}"))
}

fn ind(name: &str) -> Individual {
    Individual::named(format!("{EX}{name}"))
}

fn read_kind(graph: &Graph, kind: AxiomKind) -> Result<Vec<Translated<Axiom>>, TranslateError> {
    read_axioms(graph, &LoaderConfig::default(), Some(kind)).collect()
}

#[test]
fn two_disjoint_classes_are_one_direct_triple() -> anyhow::Result<()> {
    let mut graph = Graph::new();
    let (a, b) = (Node::iri(format!("{EX}A")), Node::iri(format!("{EX}B")));
    graph.add(Triple::new(a.clone(), rdf::TYPE, Node::iri(owl::CLASS)));
    graph.add(Triple::new(b.clone(), rdf::TYPE, Node::iri(owl::CLASS)));
    graph.add(Triple::new(a, owl::DISJOINT_WITH, b));

    let read = read_kind(&graph, AxiomKind::DisjointClasses)?;
    assert_eq!(read.len(), 1);
    let axiom = read[0].object().clone();
    assert_eq!(
        axiom.body,
        AxiomBody::DisjointClasses(BTreeSet::from([class("A"), class("B")]))
    );

    let mut written = Graph::new();
    write_axiom(&axiom, &mut written)?;
    assert_eq!(
        written.iter().collect::<Vec<_>>(),
        graph.iter().collect::<Vec<_>>()
    );
    assert!(written.iter().all(|t| !t.subject.is_blank()));
    Ok(())
}

#[test]
fn three_disjoint_classes_share_one_anonymous_root() -> anyhow::Result<()> {
    let axiom = Axiom::new(AxiomBody::DisjointClasses(BTreeSet::from([
        class("A"),
        class("B"),
        class("C"),
    ])));
    let mut graph = Graph::new();
    write_axiom(&axiom, &mut graph)?;

    let roots: Vec<&Triple> = graph
        .iter()
        .filter(|t| t.predicate.as_str() == rdf::TYPE && t.object.is(owl::ALL_DISJOINT_CLASSES))
        .collect();
    assert_eq!(roots.len(), 1);
    let root = &roots[0].subject;
    assert!(root.is_blank());
    let members = graph
        .unique(root, owl::MEMBERS)
        .map(|t| t.object.clone())
        .expect("members link");
    let list = graph.read_list(&members)?;
    assert_eq!(list.len(), 3);
    assert!(!graph.contains_spo(
        &Node::iri(format!("{EX}A")),
        owl::DISJOINT_WITH,
        &Node::iri(format!("{EX}B"))
    ));

    let read = read_kind(&graph, AxiomKind::DisjointClasses)?;
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].object(), &axiom);
    Ok(())
}

#[test]
fn empty_operand_sets_are_written_only_when_annotated() -> anyhow::Result<()> {
    let bare = Axiom::new(AxiomBody::DifferentIndividuals(BTreeSet::new()));
    let mut graph = Graph::new();
    write_axiom(&bare, &mut graph)?;
    assert!(graph.is_empty());

    let annotated = Axiom::annotated(
        AxiomBody::DifferentIndividuals(BTreeSet::new()),
        [Annotation::literal(rdfs::COMMENT, Literal::string("placeholder"))],
    );
    write_axiom(&annotated, &mut graph)?;
    assert!(graph
        .iter()
        .any(|t| t.predicate.as_str() == owl::MEMBERS && t.object.is(rdf::NIL)));

    let read = read_kind(&graph, AxiomKind::DifferentIndividuals)?;
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].object(), &annotated);
    assert_eq!(read[0].triples().len(), graph.len());
    Ok(())
}

#[test]
fn all_different_accepts_distinct_members() -> anyhow::Result<()> {
    let mut graph = Graph::new();
    let members: Vec<Node> = ["a", "b", "c"]
        .iter()
        .map(|name| {
            let node = Node::iri(format!("{EX}{name}"));
            graph.add(Triple::new(node.clone(), rdf::TYPE, Node::iri(owl::NAMED_INDIVIDUAL)));
            node
        })
        .collect();
    let head = graph.write_list(members);
    let root = graph.fresh_blank();
    graph.add(Triple::new(root.clone(), owl::DISTINCT_MEMBERS, head));
    graph.add(Triple::new(root, rdf::TYPE, Node::iri(owl::ALL_DIFFERENT)));

    let read = read_kind(&graph, AxiomKind::DifferentIndividuals)?;
    assert_eq!(read.len(), 1);
    assert_eq!(
        read[0].object().body,
        AxiomBody::DifferentIndividuals(BTreeSet::from([ind("a"), ind("b"), ind("c")]))
    );
    assert_eq!(read[0].triples().len(), graph.len());
    Ok(())
}

#[test]
fn equivalences_over_three_operands_read_back_pairwise() -> anyhow::Result<()> {
    let axiom = Axiom::new(AxiomBody::SameIndividual(BTreeSet::from([
        ind("a"),
        ind("b"),
        ind("c"),
    ])));
    let mut graph = Graph::new();
    write_axiom(&axiom, &mut graph)?;
    assert_eq!(graph.triples_with_predicate(owl::SAME_AS).count(), 2);

    let read: BTreeSet<Axiom> = read_kind(&graph, AxiomKind::SameIndividual)?
        .into_iter()
        .map(Translated::into_object)
        .collect();
    let pair = |x: &str, y: &str| {
        Axiom::new(AxiomBody::SameIndividual(BTreeSet::from([ind(x), ind(y)])))
    };
    assert_eq!(read, BTreeSet::from([pair("a", "b"), pair("a", "c")]));
    Ok(())
}

#[test]
fn reflexive_equivalences_write_back_as_read() -> anyhow::Result<()> {
    let cases = [
        (AxiomKind::EquivalentClasses, owl::CLASS, owl::EQUIVALENT_CLASS),
        (AxiomKind::EquivalentObjectProperties, owl::OBJECT_PROPERTY, owl::EQUIVALENT_PROPERTY),
        (AxiomKind::EquivalentDataProperties, owl::DATATYPE_PROPERTY, owl::EQUIVALENT_PROPERTY),
        (AxiomKind::SameIndividual, owl::NAMED_INDIVIDUAL, owl::SAME_AS),
    ];
    for (kind, entity_type, predicate) in cases {
        let x = Node::iri(format!("{EX}x"));
        let mut graph = Graph::new();
        graph.add(Triple::new(x.clone(), rdf::TYPE, Node::iri(entity_type)));
        graph.add(Triple::new(x.clone(), predicate, x));

        let read = read_kind(&graph, kind)?;
        assert_eq!(read.len(), 1, "{kind}");
        assert_eq!(read[0].triples().len(), graph.len(), "{kind}");

        let mut written = Graph::new();
        write_axiom(read[0].object(), &mut written)?;
        assert_eq!(
            written.iter().collect::<Vec<_>>(),
            graph.iter().collect::<Vec<_>>(),
            "{kind}"
        );
        assert_eq!(read_kind(&written, kind)?[0].object(), read[0].object());
    }
    Ok(())
}

#[test]
fn an_equivalence_without_operands_cannot_be_written() {
    let axiom = Axiom::new(AxiomBody::EquivalentClasses(BTreeSet::new()));
    let err = write_axiom(&axiom, &mut Graph::new()).expect_err("unwritable");
    assert!(matches!(
        err,
        TranslateError::Unwritable {
            kind: AxiomKind::EquivalentClasses,
            ..
        }
    ));
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn disjoint_classes_pick_their_form_by_operand_count(
        names in prop::collection::btree_set(0usize..8, 0..5),
        annotated in any::<bool>(),
    ) {
        let operands: BTreeSet<ClassExpression> =
            names.iter().map(|i| class(&format!("C{i}"))).collect();
        let annotations = if annotated {
            vec![Annotation::literal(rdfs::LABEL, Literal::string("disjoint"))]
        } else {
            Vec::new()
        };
        let axiom = Axiom::annotated(AxiomBody::DisjointClasses(operands.clone()), annotations);
        let mut graph = Graph::new();
        write_axiom(&axiom, &mut graph).expect("write");
        let read = read_kind(&graph, AxiomKind::DisjointClasses).expect("read");

        if operands.is_empty() && !annotated {
            prop_assert!(graph.is_empty());
            prop_assert!(read.is_empty());
        } else {
            prop_assert_eq!(read.len(), 1);
            prop_assert_eq!(read[0].object(), &axiom);
            let all: BTreeSet<Triple> = graph.iter().cloned().collect();
            prop_assert_eq!(read[0].triples(), &all);
            let has_root = graph.iter().any(|t| t.object.is(owl::ALL_DISJOINT_CLASSES));
            prop_assert_eq!(has_root, operands.len() != 2);
        }
    }
}
