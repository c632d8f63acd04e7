use std::collections::BTreeSet;

use owlbridge_graph::{Graph, Node, Statement, Triple};
use owlbridge_model::vocab::{owl, rdfs};
use owlbridge_model::{Axiom, AxiomBody, AxiomKind, ClassExpression};

use super::binary::BinaryTranslator;
use super::nary::{all_members, PairwiseTranslator, TwoWayTranslator};
use super::{body_of, by_predicate, finish, mismatched, AxiomTranslator, Candidates};
use crate::codec::{Reader, Writer};
use crate::config::LoaderConfig;
use crate::error::{Result, TranslateError};
use crate::translated::Translated;

// ============================================================================
// SubClassOf / EquivalentClasses / DisjointClasses
// ============================================================================

pub static SUB_CLASS_OF: BinaryTranslator<ClassExpression, ClassExpression> = BinaryTranslator {
    kind: AxiomKind::SubClassOf,
    predicate: rdfs::SUB_CLASS_OF,
    wrap: |sub, sup| AxiomBody::SubClassOf { sub, sup },
    parts: |body| match body {
        AxiomBody::SubClassOf { sub, sup } => Some((sub, sup)),
        _ => None,
    },
};

pub static EQUIVALENT_CLASSES: PairwiseTranslator<ClassExpression> = PairwiseTranslator {
    kind: AxiomKind::EquivalentClasses,
    predicate: owl::EQUIVALENT_CLASS,
    wrap: AxiomBody::EquivalentClasses,
    operands: |body| match body {
        AxiomBody::EquivalentClasses(operands) => Some(operands),
        _ => None,
    },
};

pub static DISJOINT_CLASSES: TwoWayTranslator<ClassExpression> = TwoWayTranslator {
    kind: AxiomKind::DisjointClasses,
    predicate: owl::DISJOINT_WITH,
    marker: owl::ALL_DISJOINT_CLASSES,
    members: &[owl::MEMBERS],
    accepts_members: all_members::<ClassExpression>,
    wrap: AxiomBody::DisjointClasses,
    operands: |body| match body {
        AxiomBody::DisjointClasses(operands) => Some(operands),
        _ => None,
    },
};

// ============================================================================
// DisjointUnion
// ============================================================================

/// `C owl:disjointUnionOf ( C1 ... Cn )` with `C` a named class.
pub struct DisjointUnionTranslator;

impl AxiomTranslator for DisjointUnionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DisjointUnion
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        by_predicate(graph, owl::DISJOINT_UNION_OF)
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        statement.predicate() == owl::DISJOINT_UNION_OF
            && matches!(statement.subject(), Node::Iri(iri) if graph.is_class_iri(iri))
            && graph
                .read_list(statement.object())
                .is_ok_and(|list| all_members::<ClassExpression>(graph, &list.members))
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let class = reader.class(statement.subject())?;
        let list = statement.graph().read_list(statement.object())?;
        let operands: Translated<BTreeSet<ClassExpression>> = list
            .members
            .iter()
            .map(|m| reader.class_expression(m))
            .collect::<Result<_>>()?;
        let body = class
            .zip(operands.with_triples(list.triples))
            .map(|(class, operands)| AxiomBody::DisjointUnion { class, operands });
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let AxiomBody::DisjointUnion { class, operands } = body_of(axiom, self.kind())? else {
            return Err(mismatched(self.kind(), axiom));
        };
        let mut writer = Writer::new(graph);
        let subject = writer.class(class);
        let members = operands.iter().map(|o| writer.class_expression(o)).collect();
        let head = writer.list(members);
        writer.add_annotated(
            Triple::new(subject, owl::DISJOINT_UNION_OF, head),
            &axiom.annotations,
        );
        Ok(())
    }
}

// ============================================================================
// HasKey
// ============================================================================

/// `CE owl:hasKey ( P1 ... Pn )` over object and data properties.
pub struct HasKeyTranslator;

impl AxiomTranslator for HasKeyTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::HasKey
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        by_predicate(graph, owl::HAS_KEY)
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        statement.predicate() == owl::HAS_KEY
            && graph.is_class_expression(statement.subject())
            && graph.read_list(statement.object()).is_ok_and(|list| {
                list.members.iter().all(|m| {
                    graph.is_object_property_expression(m) || graph.is_data_property_node(m)
                })
            })
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let graph = statement.graph();
        let reader = Reader::new(graph, config);
        let class = reader.class_expression(statement.subject())?;
        let list = graph.read_list(statement.object())?;

        let mut object_properties = BTreeSet::new();
        let mut data_properties = BTreeSet::new();
        let mut triples = list.triples;
        for member in &list.members {
            // a punned key property is read as an object property
            if graph.is_object_property_expression(member) {
                let (p, used) = reader.object_property_expression(member)?.into_parts();
                object_properties.insert(p);
                triples.extend(used);
            } else if graph.is_data_property_node(member) {
                let (p, used) = reader.data_property(member)?.into_parts();
                data_properties.insert(p);
                triples.extend(used);
            } else {
                return Err(TranslateError::unsupported(member, "a key property"));
            }
        }

        let body = class
            .map(|class| AxiomBody::HasKey {
                class,
                object_properties,
                data_properties,
            })
            .with_triples(triples);
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let AxiomBody::HasKey {
            class,
            object_properties,
            data_properties,
        } = body_of(axiom, self.kind())?
        else {
            return Err(mismatched(self.kind(), axiom));
        };
        let mut writer = Writer::new(graph);
        let subject = writer.class_expression(class);
        let mut members: Vec<Node> = object_properties
            .iter()
            .map(|p| writer.object_property_expression(p))
            .collect();
        members.extend(data_properties.iter().map(|p| writer.data_property(p)));
        let head = writer.list(members);
        writer.add_annotated(Triple::new(subject, owl::HAS_KEY, head), &axiom.annotations);
        Ok(())
    }
}
