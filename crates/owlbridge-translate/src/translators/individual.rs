//! Assertions about individuals.

use owlbridge_graph::{Graph, Node, Statement, Triple};
use owlbridge_model::vocab::{owl, rdf};
use owlbridge_model::{Axiom, AxiomBody, AxiomKind, Individual};

use super::nary::{all_members, PairwiseTranslator, TwoWayTranslator};
use super::{body_of, by_type, finish, mismatched, AxiomTranslator, Candidates};
use crate::codec::{Reader, Writer};
use crate::config::LoaderConfig;
use crate::error::Result;
use crate::translated::Translated;

pub static SAME_INDIVIDUAL: PairwiseTranslator<Individual> = PairwiseTranslator {
    kind: AxiomKind::SameIndividual,
    predicate: owl::SAME_AS,
    wrap: AxiomBody::SameIndividual,
    operands: |body| match body {
        AxiomBody::SameIndividual(operands) => Some(operands),
        _ => None,
    },
};

pub static DIFFERENT_INDIVIDUALS: TwoWayTranslator<Individual> = TwoWayTranslator {
    kind: AxiomKind::DifferentIndividuals,
    predicate: owl::DIFFERENT_FROM,
    marker: owl::ALL_DIFFERENT,
    members: &[owl::MEMBERS, owl::DISTINCT_MEMBERS],
    accepts_members: all_members::<Individual>,
    wrap: AxiomBody::DifferentIndividuals,
    operands: |body| match body {
        AxiomBody::DifferentIndividuals(operands) => Some(operands),
        _ => None,
    },
};

// ============================================================================
// ClassAssertion
// ============================================================================

/// `a rdf:type C`. Vocabulary types never qualify, so declarations and
/// structural typing triples are left alone.
pub struct ClassAssertionTranslator;

impl AxiomTranslator for ClassAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::ClassAssertion
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        Box::new(graph.triples_with_predicate(rdf::TYPE))
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        statement.predicate() == rdf::TYPE
            && graph.is_individual(statement.subject())
            && graph.is_class_expression(statement.object())
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let individual = reader.individual(statement.subject())?;
        let class = reader.class_expression(statement.object())?;
        let body = class
            .zip(individual)
            .map(|(class, individual)| AxiomBody::ClassAssertion { class, individual });
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let AxiomBody::ClassAssertion { class, individual } = body_of(axiom, self.kind())? else {
            return Err(mismatched(self.kind(), axiom));
        };
        let mut writer = Writer::new(graph);
        let subject = writer.individual(individual);
        let object = writer.class_expression(class);
        writer.add_annotated(Triple::new(subject, rdf::TYPE, object), &axiom.annotations);
        Ok(())
    }
}

// ============================================================================
// Object / data property assertions
// ============================================================================

/// `a P b` with `P` a named object property and `b` an individual.
pub struct ObjectPropertyAssertionTranslator;

impl AxiomTranslator for ObjectPropertyAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::ObjectPropertyAssertion
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        Box::new(graph.iter().filter(|t| !t.object.is_literal()))
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        graph.is_object_property(&statement.triple().predicate)
            && graph.is_individual(statement.subject())
            && graph.is_individual(statement.object())
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let triple = statement.triple();
        let property = reader.object_property(&Node::Iri(triple.predicate.clone()))?;
        let subject = reader.individual(&triple.subject)?;
        let object = reader.individual(&triple.object)?;
        let body = property
            .zip(subject)
            .zip(object)
            .map(|((property, subject), object)| AxiomBody::ObjectPropertyAssertion {
                property,
                subject,
                object,
            });
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let AxiomBody::ObjectPropertyAssertion {
            property,
            subject,
            object,
        } = body_of(axiom, self.kind())?
        else {
            return Err(mismatched(self.kind(), axiom));
        };
        let mut writer = Writer::new(graph);
        writer.object_property(property);
        let subject = writer.individual(subject);
        let object = writer.individual(object);
        writer.add_annotated(
            Triple::new(subject, property.iri().clone(), object),
            &axiom.annotations,
        );
        Ok(())
    }
}

/// `a P "v"` with `P` a data property.
pub struct DataPropertyAssertionTranslator;

impl AxiomTranslator for DataPropertyAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DataPropertyAssertion
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        Box::new(graph.iter().filter(|t| t.object.is_literal()))
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        statement.object().is_literal()
            && graph.is_data_property(&statement.triple().predicate)
            && graph.is_individual(statement.subject())
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let triple = statement.triple();
        let property = reader.data_property(&Node::Iri(triple.predicate.clone()))?;
        let subject = reader.individual(&triple.subject)?;
        let value = reader.literal(&triple.object)?;
        let body = property
            .zip(subject)
            .zip(value)
            .map(|((property, subject), value)| AxiomBody::DataPropertyAssertion {
                property,
                subject,
                value,
            });
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let AxiomBody::DataPropertyAssertion {
            property,
            subject,
            value,
        } = body_of(axiom, self.kind())?
        else {
            return Err(mismatched(self.kind(), axiom));
        };
        let mut writer = Writer::new(graph);
        writer.data_property(property);
        let subject = writer.individual(subject);
        let value = writer.literal(value);
        writer.add_annotated(
            Triple::new(subject, property.iri().clone(), value),
            &axiom.annotations,
        );
        Ok(())
    }
}

// ============================================================================
// Negative property assertions
// ============================================================================

/// Which target predicate a negative assertion carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Individual,
    Value,
}

impl Target {
    fn predicate(self) -> &'static str {
        match self {
            Target::Individual => owl::TARGET_INDIVIDUAL,
            Target::Value => owl::TARGET_VALUE,
        }
    }
}

/// `_:x a owl:NegativePropertyAssertion ; owl:sourceIndividual a ;
/// owl:assertionProperty P ; owl:targetIndividual b` (or `owl:targetValue`).
pub struct NegativeAssertionTranslator {
    target: Target,
}

pub static NEGATIVE_OBJECT_PROPERTY_ASSERTION: NegativeAssertionTranslator =
    NegativeAssertionTranslator {
        target: Target::Individual,
    };

pub static NEGATIVE_DATA_PROPERTY_ASSERTION: NegativeAssertionTranslator =
    NegativeAssertionTranslator {
        target: Target::Value,
    };

impl NegativeAssertionTranslator {
    /// The three header links, read in a fixed order.
    fn links<'g>(&self, reader: &Reader<'g>, root: &Node) -> Result<[&'g Triple; 3]> {
        Ok([
            reader.required(root, owl::SOURCE_INDIVIDUAL)?,
            reader.required(root, owl::ASSERTION_PROPERTY)?,
            reader.required(root, self.target.predicate())?,
        ])
    }
}

impl AxiomTranslator for NegativeAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        match self.target {
            Target::Individual => AxiomKind::NegativeObjectPropertyAssertion,
            Target::Value => AxiomKind::NegativeDataPropertyAssertion,
        }
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        by_type(graph, owl::NEGATIVE_PROPERTY_ASSERTION)
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        let root = statement.subject();
        if statement.predicate() != rdf::TYPE
            || !statement.object().is(owl::NEGATIVE_PROPERTY_ASSERTION)
            || !root.is_blank()
        {
            return false;
        }
        let (Some(source), Some(property), Some(target)) = (
            graph.unique(root, owl::SOURCE_INDIVIDUAL),
            graph.unique(root, owl::ASSERTION_PROPERTY),
            graph.unique(root, self.target.predicate()),
        ) else {
            return false;
        };
        graph.is_individual(&source.object)
            && match self.target {
                Target::Individual => {
                    graph.is_object_property_expression(&property.object)
                        && graph.is_individual(&target.object)
                }
                Target::Value => {
                    graph.is_data_property_node(&property.object) && target.object.is_literal()
                }
            }
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let links = self.links(&reader, statement.subject())?;
        let [source, property, target] = links;
        let subject = reader.individual(&source.object)?;

        let body = match self.target {
            Target::Individual => {
                let property = reader.object_property_expression(&property.object)?;
                let object = reader.individual(&target.object)?;
                property.zip(subject).zip(object).map(|((property, subject), object)| {
                    AxiomBody::NegativeObjectPropertyAssertion {
                        property,
                        subject,
                        object,
                    }
                })
            }
            Target::Value => {
                let property = reader.data_property(&property.object)?;
                let value = reader.literal(&target.object)?;
                property.zip(subject).zip(value).map(|((property, subject), value)| {
                    AxiomBody::NegativeDataPropertyAssertion {
                        property,
                        subject,
                        value,
                    }
                })
            }
        };
        finish(statement, config, body.with_triples(links.into_iter().cloned()))
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let mut writer = Writer::new(graph);
        let (subject, property, target) = match body_of(axiom, self.kind())? {
            AxiomBody::NegativeObjectPropertyAssertion {
                property,
                subject,
                object,
            } => (
                writer.individual(subject),
                writer.object_property_expression(property),
                writer.individual(object),
            ),
            AxiomBody::NegativeDataPropertyAssertion {
                property,
                subject,
                value,
            } => (
                writer.individual(subject),
                writer.data_property(property),
                writer.literal(value),
            ),
            _ => return Err(mismatched(self.kind(), axiom)),
        };

        let root = writer.fresh();
        writer.add(Triple::new(root.clone(), owl::SOURCE_INDIVIDUAL, subject));
        writer.add(Triple::new(root.clone(), owl::ASSERTION_PROPERTY, property));
        writer.add(Triple::new(root.clone(), self.target.predicate(), target));
        writer.add_annotated(
            Triple::new(root, rdf::TYPE, Node::iri(owl::NEGATIVE_PROPERTY_ASSERTION)),
            &axiom.annotations,
        );
        Ok(())
    }
}
