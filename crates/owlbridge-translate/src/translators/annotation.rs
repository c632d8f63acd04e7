use owlbridge_graph::{Graph, Node, Statement, Triple};
use owlbridge_model::vocab::rdfs;
use owlbridge_model::{AnnotationProperty, Axiom, AxiomBody, AxiomKind, Iri};

use super::data_property::{DATA_PROPERTY_DOMAIN, DATA_PROPERTY_RANGE, SUB_DATA_PROPERTY_OF};
use super::object_property::{
    OBJECT_PROPERTY_DOMAIN, OBJECT_PROPERTY_RANGE, SUB_OBJECT_PROPERTY_OF,
};
use super::{body_of, by_predicate, finish, mismatched, AxiomTranslator, Candidates};
use crate::codec::{Reader, Writer};
use crate::config::LoaderConfig;
use crate::error::{Result, TranslateError};
use crate::translated::Translated;

// ============================================================================
// AnnotationAssertion
// ============================================================================

/// `s P v` with `P` an annotation property and `s` an IRI or anonymous
/// individual.
pub struct AnnotationAssertionTranslator;

/// True when `statement` reads as a standalone annotation assertion under
/// `config`. The declaration annotation resolver uses the same test to hand
/// bulk assertions over to this kind.
pub fn is_annotation_assertion(statement: &Statement<'_>, config: &LoaderConfig) -> bool {
    config.load_annotation_axioms && recognizes_assertion(statement, config)
}

fn recognizes_assertion(statement: &Statement<'_>, config: &LoaderConfig) -> bool {
    let graph = statement.graph();
    statement.is_annotation()
        && !statement.subject_is_annotation_node()
        && is_annotation_subject(graph, statement.subject())
        && is_annotation_value(graph, statement.object())
        && (config.allow_bulk_annotation_assertions || !statement.has_annotations())
}

fn is_annotation_subject(graph: &Graph, node: &Node) -> bool {
    match node {
        Node::Iri(_) => !graph.is_ontology_header(node),
        Node::Blank(_) => graph.is_individual(node),
        Node::Literal(_) => false,
    }
}

fn is_annotation_value(graph: &Graph, node: &Node) -> bool {
    match node {
        Node::Iri(_) | Node::Literal(_) => true,
        Node::Blank(_) => graph.is_individual(node),
    }
}

impl AxiomTranslator for AnnotationAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::AnnotationAssertion
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        Box::new(
            graph
                .iter()
                .filter(move |t| graph.is_annotation_property(&t.predicate)),
        )
    }

    fn recognizes(&self, statement: &Statement<'_>, config: &LoaderConfig) -> bool {
        recognizes_assertion(statement, config)
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let triple = statement.triple();
        let subject = reader.annotation_subject(&triple.subject)?;
        let property = reader.annotation_property(&Node::Iri(triple.predicate.clone()))?;
        let value = reader.annotation_value(&triple.object)?;
        let body = subject
            .zip(property)
            .zip(value)
            .map(|((subject, property), value)| AxiomBody::AnnotationAssertion {
                subject,
                property,
                value,
            });
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let AxiomBody::AnnotationAssertion {
            subject,
            property,
            value,
        } = body_of(axiom, self.kind())?
        else {
            return Err(mismatched(self.kind(), axiom));
        };
        let mut writer = Writer::new(graph);
        let subject = writer.annotation_subject(subject);
        writer.annotation_property(property);
        let value = writer.annotation_value(value);
        writer.add_annotated(
            Triple::new(subject, property.iri().clone(), value),
            &axiom.annotations,
        );
        Ok(())
    }
}

// ============================================================================
// Annotation property axioms
// ============================================================================

/// Which annotation-property axiom a [`AnnotationPropertyTranslator`] handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    SubPropertyOf,
    Domain,
    Range,
}

/// `P rdfs:subPropertyOf Q`, `P rdfs:domain U` and `P rdfs:range U` over
/// annotation properties.
pub struct AnnotationPropertyTranslator {
    relation: Relation,
}

pub static SUB_ANNOTATION_PROPERTY_OF: AnnotationPropertyTranslator =
    AnnotationPropertyTranslator {
        relation: Relation::SubPropertyOf,
    };
pub static ANNOTATION_PROPERTY_DOMAIN: AnnotationPropertyTranslator =
    AnnotationPropertyTranslator {
        relation: Relation::Domain,
    };
pub static ANNOTATION_PROPERTY_RANGE: AnnotationPropertyTranslator =
    AnnotationPropertyTranslator {
        relation: Relation::Range,
    };

impl AnnotationPropertyTranslator {
    fn predicate(&self) -> &'static str {
        match self.relation {
            Relation::SubPropertyOf => rdfs::SUB_PROPERTY_OF,
            Relation::Domain => rdfs::DOMAIN,
            Relation::Range => rdfs::RANGE,
        }
    }

    /// Object and data property axioms sharing this predicate.
    fn rivals(&self) -> [&'static dyn AxiomTranslator; 2] {
        match self.relation {
            Relation::SubPropertyOf => [&SUB_OBJECT_PROPERTY_OF, &SUB_DATA_PROPERTY_OF],
            Relation::Domain => [&OBJECT_PROPERTY_DOMAIN, &DATA_PROPERTY_DOMAIN],
            Relation::Range => [&OBJECT_PROPERTY_RANGE, &DATA_PROPERTY_RANGE],
        }
    }
}

impl AxiomTranslator for AnnotationPropertyTranslator {
    fn kind(&self) -> AxiomKind {
        match self.relation {
            Relation::SubPropertyOf => AxiomKind::SubAnnotationPropertyOf,
            Relation::Domain => AxiomKind::AnnotationPropertyDomain,
            Relation::Range => AxiomKind::AnnotationPropertyRange,
        }
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        by_predicate(graph, self.predicate())
    }

    fn recognizes(&self, statement: &Statement<'_>, config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        let shaped = statement.predicate() == self.predicate()
            && graph.is_annotation_property_node(statement.subject())
            && match self.relation {
                Relation::SubPropertyOf => graph.is_annotation_property_node(statement.object()),
                Relation::Domain | Relation::Range => statement.object().as_iri().is_some(),
            };
        if !shaped {
            return false;
        }
        !(config.ignore_annotation_axiom_overlaps
            && self.rivals().iter().any(|r| r.recognizes(statement, config)))
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let triple = statement.triple();
        let property = reader.annotation_property(&triple.subject)?;
        let body = match self.relation {
            Relation::SubPropertyOf => property
                .zip(reader.annotation_property(&triple.object)?)
                .map(|(sub, sup)| AxiomBody::SubAnnotationPropertyOf { sub, sup }),
            Relation::Domain | Relation::Range => {
                let target = triple
                    .object
                    .as_iri()
                    .cloned()
                    .ok_or_else(|| TranslateError::unsupported(&triple.object, "an IRI"))?;
                property.map(|property| {
                    if self.relation == Relation::Domain {
                        AxiomBody::AnnotationPropertyDomain {
                            property,
                            domain: target,
                        }
                    } else {
                        AxiomBody::AnnotationPropertyRange {
                            property,
                            range: target,
                        }
                    }
                })
            }
        };
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let (property, object): (&AnnotationProperty, Target<'_>) =
            match (self.relation, body_of(axiom, self.kind())?) {
                (Relation::SubPropertyOf, AxiomBody::SubAnnotationPropertyOf { sub, sup }) => {
                    (sub, Target::Property(sup))
                }
                (Relation::Domain, AxiomBody::AnnotationPropertyDomain { property, domain }) => {
                    (property, Target::Iri(domain))
                }
                (Relation::Range, AxiomBody::AnnotationPropertyRange { property, range }) => {
                    (property, Target::Iri(range))
                }
                _ => return Err(mismatched(self.kind(), axiom)),
            };
        let mut writer = Writer::new(graph);
        let subject = writer.annotation_property(property);
        let object = match object {
            Target::Property(p) => writer.annotation_property(p),
            Target::Iri(iri) => Node::Iri(iri.clone()),
        };
        writer.add_annotated(
            Triple::new(subject, self.predicate(), object),
            &axiom.annotations,
        );
        Ok(())
    }
}

enum Target<'a> {
    Property(&'a AnnotationProperty),
    Iri(&'a Iri),
}

#[cfg(test)]
mod tests {
    use owlbridge_graph::RdfLiteral;
    use owlbridge_model::vocab::{owl, rdf};
    use owlbridge_model::{AnnotationSubject, AnnotationValue, Literal};

    use super::*;

    fn ex(name: &str) -> String {
        format!("http://example.com/{name}")
    }

    #[test]
    fn assertion_round_trips_with_custom_property() {
        let axiom = Axiom::new(AxiomBody::AnnotationAssertion {
            subject: AnnotationSubject::Iri(Iri::new(ex("A"))),
            property: AnnotationProperty::new(ex("note")),
            value: AnnotationValue::Literal(Literal::lang("bonjour", "fr")),
        });
        let mut graph = Graph::new();
        AnnotationAssertionTranslator
            .write(&axiom, &mut graph)
            .expect("write");
        assert_eq!(graph.len(), 2);

        let config = LoaderConfig::default();
        let statements: Vec<_> = AnnotationAssertionTranslator
            .statements(&graph, &config)
            .collect();
        assert_eq!(statements.len(), 1);
        let read = AnnotationAssertionTranslator
            .read(&statements[0], &config)
            .expect("read");
        assert_eq!(read.object(), &axiom);
        assert_eq!(read.triples().len(), 2);
    }

    #[test]
    fn annotated_assertions_need_bulk_mode() {
        let axiom = Axiom::annotated(
            AxiomBody::AnnotationAssertion {
                subject: AnnotationSubject::Iri(Iri::new(ex("A"))),
                property: AnnotationProperty::new(rdfs::LABEL),
                value: AnnotationValue::Literal(Literal::string("A")),
            },
            [owlbridge_model::Annotation::literal(rdfs::COMMENT, Literal::string("why"))],
        );
        let mut graph = Graph::new();
        AnnotationAssertionTranslator
            .write(&axiom, &mut graph)
            .expect("write");

        let bulk = LoaderConfig::default();
        assert_eq!(AnnotationAssertionTranslator.statements(&graph, &bulk).count(), 1);
        let strict = LoaderConfig::default().with_bulk_annotation_assertions(false);
        assert_eq!(AnnotationAssertionTranslator.statements(&graph, &strict).count(), 0);
        let off = LoaderConfig::default().with_annotation_axioms(false);
        assert_eq!(AnnotationAssertionTranslator.statements(&graph, &off).count(), 0);
    }

    #[test]
    fn ontology_header_annotations_are_not_axioms() {
        let mut graph = Graph::new();
        let onto = Node::iri(ex("onto"));
        graph.add(Triple::new(onto.clone(), rdf::TYPE, Node::iri(owl::ONTOLOGY)));
        graph.add(Triple::new(onto, owl::VERSION_INFO, RdfLiteral::string("1.0")));
        let config = LoaderConfig::default();
        assert_eq!(AnnotationAssertionTranslator.statements(&graph, &config).count(), 0);
    }

    #[test]
    fn domain_overlapping_an_object_property_is_skipped() {
        let mut graph = Graph::new();
        let p = Node::iri(ex("p"));
        graph.add(Triple::new(p.clone(), rdf::TYPE, Node::iri(owl::ANNOTATION_PROPERTY)));
        graph.add(Triple::new(p.clone(), rdf::TYPE, Node::iri(owl::OBJECT_PROPERTY)));
        graph.add(Triple::new(p.clone(), rdfs::DOMAIN, Node::iri(ex("C"))));

        let config = LoaderConfig::default();
        assert_eq!(ANNOTATION_PROPERTY_DOMAIN.statements(&graph, &config).count(), 0);
        let overlapping = config.clone().with_ignore_annotation_overlaps(false);
        assert_eq!(ANNOTATION_PROPERTY_DOMAIN.statements(&graph, &overlapping).count(), 1);
    }

    #[test]
    fn sub_annotation_property_round_trips() {
        let axiom = Axiom::new(AxiomBody::SubAnnotationPropertyOf {
            sub: AnnotationProperty::new(ex("shortLabel")),
            sup: AnnotationProperty::new(rdfs::LABEL),
        });
        let mut graph = Graph::new();
        SUB_ANNOTATION_PROPERTY_OF.write(&axiom, &mut graph).expect("write");
        let config = LoaderConfig::default();
        let statement = SUB_ANNOTATION_PROPERTY_OF
            .statements(&graph, &config)
            .next()
            .expect("statement");
        let read = SUB_ANNOTATION_PROPERTY_OF.read(&statement, &config).expect("read");
        assert_eq!(read.into_object(), axiom);
    }
}
