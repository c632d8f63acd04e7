use owlbridge_graph::{Graph, Node, Statement, Triple};
use owlbridge_model::vocab::{owl, rdf, rdfs};
use owlbridge_model::{
    Annotation, AnnotationProperty, AnnotationSubject, AnnotationValue, Axiom, AxiomBody,
    AxiomKind, Iri, Literal,
};
use owlbridge_translate::{read_axioms, test_statement, write_axioms, LoaderConfig};

const LABELLED_TTL: &str = r#"
@prefix : <http://example.com/onto#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

:A a owl:Class ;
   rdfs:label "A" .
"#;

const REIFIED_TTL: &str = r#"
@prefix : <http://example.com/onto#> .
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .

:A a owl:Class .
:B a owl:Class .
:A rdfs:subClassOf :B .
[] a owl:Axiom ;
   owl:annotatedSource :A ;
   owl:annotatedProperty rdfs:subClassOf ;
   owl:annotatedTarget :B ;
   rdfs:comment "asserted by curator" .
"#;

fn label_a() -> Annotation {
    Annotation::literal(rdfs::LABEL, Literal::string("A"))
}

fn declarations(graph: &Graph, config: &LoaderConfig) -> anyhow::Result<Vec<Axiom>> {
    Ok(read_axioms(graph, config, Some(AxiomKind::Declaration))
        .map(|r| r.map(|t| t.into_object()))
        .collect::<Result<_, _>>()?)
}

#[test]
fn bulk_assertions_take_the_label_away_from_the_declaration() -> anyhow::Result<()> {
    let graph = Graph::from_turtle(LABELLED_TTL)?;
    let config = LoaderConfig::default();

    let declared = declarations(&graph, &config)?;
    assert_eq!(declared.len(), 1);
    assert!(declared[0].annotations.is_empty());

    let assertions: Vec<_> =
        read_axioms(&graph, &config, Some(AxiomKind::AnnotationAssertion)).collect();
    assert_eq!(assertions.len(), 1);
    Ok(())
}

#[test]
fn without_bulk_assertions_the_label_appears_on_both() -> anyhow::Result<()> {
    let graph = Graph::from_turtle(LABELLED_TTL)?;
    let config = LoaderConfig::default().with_bulk_annotation_assertions(false);

    let declared = declarations(&graph, &config)?;
    assert_eq!(declared.len(), 1);
    assert_eq!(
        declared[0].annotations.iter().cloned().collect::<Vec<_>>(),
        vec![label_a()]
    );

    let assertions: Vec<Axiom> = read_axioms(&graph, &config, Some(AxiomKind::AnnotationAssertion))
        .map(|r| r.map(|t| t.into_object()))
        .collect::<Result<_, _>>()?;
    assert_eq!(
        assertions,
        vec![Axiom::new(AxiomBody::AnnotationAssertion {
            subject: AnnotationSubject::Iri(Iri::new("http://example.com/onto#A")),
            property: AnnotationProperty::new(rdfs::LABEL),
            value: AnnotationValue::Literal(Literal::string("A")),
        })]
    );
    Ok(())
}

#[test]
fn reified_annotation_is_part_of_the_axiom() -> anyhow::Result<()> {
    let graph = Graph::from_turtle(REIFIED_TTL)?;
    let config = LoaderConfig::default();

    let read: Vec<_> = read_axioms(&graph, &config, Some(AxiomKind::SubClassOf))
        .collect::<Result<_, _>>()?;
    assert_eq!(read.len(), 1);
    let axiom = read[0].object();
    assert_eq!(
        axiom.annotations.iter().cloned().collect::<Vec<_>>(),
        vec![Annotation::literal(rdfs::COMMENT, Literal::string("asserted by curator"))]
    );
    // both declarations, the edge, and the five reification triples
    assert_eq!(read[0].triples().len(), graph.len());

    // the comment lives on the reification node and is not an assertion
    assert_eq!(
        read_axioms(&graph, &config, Some(AxiomKind::AnnotationAssertion)).count(),
        0
    );
    Ok(())
}

fn annotation_axioms() -> Vec<Axiom> {
    let prop = |name: &str| AnnotationProperty::new(format!("http://example.com/onto#{name}"));
    vec![
        Axiom::new(AxiomBody::AnnotationAssertion {
            subject: AnnotationSubject::Iri(Iri::new("http://example.com/onto#A")),
            property: prop("editorNote"),
            value: AnnotationValue::Literal(Literal::string("revisit")),
        }),
        Axiom::new(AxiomBody::SubAnnotationPropertyOf {
            sub: prop("editorNote"),
            sup: AnnotationProperty::new(rdfs::COMMENT),
        }),
        Axiom::new(AxiomBody::AnnotationPropertyDomain {
            property: prop("editorNote"),
            domain: Iri::new(owl::CLASS),
        }),
        Axiom::new(AxiomBody::AnnotationPropertyRange {
            property: prop("editorNote"),
            range: Iri::new("http://www.w3.org/2001/XMLSchema#string"),
        }),
    ]
}

#[test]
fn annotation_axioms_are_silenced_by_configuration() -> anyhow::Result<()> {
    let mut graph = Graph::new();
    write_axioms(&annotation_axioms(), &mut graph)?;

    let on = LoaderConfig::default();
    let off = LoaderConfig::default().with_annotation_axioms(false);
    for kind in AxiomKind::ALL.into_iter().filter(|k| k.is_annotation_axiom()) {
        assert_eq!(read_axioms(&graph, &on, Some(kind)).count(), 1, "{kind}");
        assert_eq!(read_axioms(&graph, &off, Some(kind)).count(), 0, "{kind}");
    }

    let assertion = Statement::new(
        &graph,
        Triple::new(
            Node::iri("http://example.com/onto#A"),
            "http://example.com/onto#editorNote",
            Node::Literal(owlbridge_graph::RdfLiteral::string("revisit")),
        ),
    );
    assert!(test_statement(&assertion, AxiomKind::AnnotationAssertion, &on));
    assert!(!test_statement(&assertion, AxiomKind::AnnotationAssertion, &off));
    Ok(())
}

#[test]
fn punned_property_domain_prefers_the_object_reading() -> anyhow::Result<()> {
    let mut graph = Graph::new();
    let p = Node::iri("http://example.com/onto#relatedTo");
    let c = Node::iri("http://example.com/onto#Thingy");
    graph.add(Triple::new(p.clone(), rdf::TYPE, Node::iri(owl::OBJECT_PROPERTY)));
    graph.add(Triple::new(p.clone(), rdf::TYPE, Node::iri(owl::ANNOTATION_PROPERTY)));
    graph.add(Triple::new(c.clone(), rdf::TYPE, Node::iri(owl::CLASS)));
    graph.add(Triple::new(p, rdfs::DOMAIN, c));

    let strict = LoaderConfig::default();
    assert_eq!(
        read_axioms(&graph, &strict, Some(AxiomKind::ObjectPropertyDomain)).count(),
        1
    );
    assert_eq!(
        read_axioms(&graph, &strict, Some(AxiomKind::AnnotationPropertyDomain)).count(),
        0
    );

    let both = LoaderConfig::default().with_ignore_annotation_overlaps(false);
    assert_eq!(
        read_axioms(&graph, &both, Some(AxiomKind::AnnotationPropertyDomain)).count(),
        1
    );
    Ok(())
}
