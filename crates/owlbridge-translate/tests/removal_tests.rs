use std::collections::BTreeSet;

use owlbridge_graph::Graph;
use owlbridge_model::{Axiom, AxiomBody, AxiomKind, ClassExpression};
use owlbridge_translate::{read_axioms, remove_axiom, write_axioms, LoaderConfig};

fn class(name: &str) -> ClassExpression {
    ClassExpression::class(format!("http://example.com/pets#{name}"))
}

fn disjoint_pets() -> Axiom {
    Axiom::new(AxiomBody::DisjointClasses(BTreeSet::from([
        class("Cat"),
        class("Dog"),
        class("Fish"),
    ])))
}

fn cat_is_pet() -> Axiom {
    Axiom::new(AxiomBody::SubClassOf {
        sub: class("Cat"),
        sup: class("Pet"),
    })
}

fn count(graph: &Graph, config: &LoaderConfig, kind: AxiomKind) -> usize {
    read_axioms(graph, config, Some(kind)).count()
}

#[test]
fn removing_an_nary_axiom_drops_its_anonymous_structure() -> anyhow::Result<()> {
    let config = LoaderConfig::default();
    let mut graph = Graph::new();
    write_axioms([&disjoint_pets(), &cat_is_pet()], &mut graph)?;
    let declarations = count(&graph, &config, AxiomKind::Declaration);

    let removed = remove_axiom(&disjoint_pets(), &mut graph, &config)?;
    assert!(removed > 0);
    assert_eq!(count(&graph, &config, AxiomKind::DisjointClasses), 0);
    assert_eq!(count(&graph, &config, AxiomKind::SubClassOf), 1);
    assert_eq!(count(&graph, &config, AxiomKind::Declaration), declarations);
    assert!(graph.iter().all(|t| !t.subject.is_blank()));
    Ok(())
}

#[test]
fn removing_a_missing_axiom_is_a_no_op() -> anyhow::Result<()> {
    let config = LoaderConfig::default();
    let mut graph = Graph::new();
    write_axioms([&cat_is_pet()], &mut graph)?;
    let before = graph.len();

    assert_eq!(remove_axiom(&disjoint_pets(), &mut graph, &config)?, 0);
    assert_eq!(graph.len(), before);
    Ok(())
}

#[test]
fn unread_declarations_go_with_the_last_axiom_using_them() -> anyhow::Result<()> {
    let config = LoaderConfig::default().with_read_declarations(false);
    let mut graph = Graph::new();
    write_axioms([&cat_is_pet()], &mut graph)?;
    assert_eq!(graph.len(), 3);

    assert_eq!(remove_axiom(&cat_is_pet(), &mut graph, &config)?, 3);
    assert!(graph.is_empty());
    Ok(())
}

#[test]
fn every_copy_of_a_duplicated_axiom_is_removed() -> anyhow::Result<()> {
    let config = LoaderConfig::default();
    let mut graph = Graph::new();
    write_axioms([&disjoint_pets(), &disjoint_pets()], &mut graph)?;
    assert_eq!(count(&graph, &config, AxiomKind::DisjointClasses), 2);

    remove_axiom(&disjoint_pets(), &mut graph, &config)?;
    assert_eq!(count(&graph, &config, AxiomKind::DisjointClasses), 0);
    Ok(())
}
