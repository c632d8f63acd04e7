use owlbridge_graph::{Graph, Node, Statement, Triple};
use owlbridge_model::vocab::rdf;
use owlbridge_model::{Axiom, AxiomBody, AxiomKind, Entity, EntityType};

use super::{body_of, by_predicate, finish, mismatched, AxiomTranslator, Candidates};
use crate::codec::Writer;
use crate::config::LoaderConfig;
use crate::error::{Result, TranslateError};
use crate::translated::Translated;

/// `X rdf:type owl:Class` and the other entity-typing triples.
pub struct DeclarationTranslator;

impl AxiomTranslator for DeclarationTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::Declaration
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        by_predicate(graph, rdf::TYPE)
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        statement.is_declaration() && matches!(statement.subject(), Node::Iri(_))
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let triple = statement.triple();
        let entity_type = triple
            .object
            .as_iri()
            .and_then(|t| EntityType::from_type_iri(t.as_str()))
            .ok_or_else(|| TranslateError::unsupported(&triple.object, "an entity type"))?;
        let iri = triple
            .subject
            .as_iri()
            .ok_or_else(|| TranslateError::unsupported(&triple.subject, "an entity IRI"))?;
        let body = Translated::leaf(AxiomBody::Declaration(Entity::of_type(
            entity_type,
            iri.clone(),
        )));
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let AxiomBody::Declaration(entity) = body_of(axiom, self.kind())? else {
            return Err(mismatched(self.kind(), axiom));
        };
        let triple = Triple::new(
            entity.iri().clone(),
            rdf::TYPE,
            Node::iri(entity.entity_type().type_iri()),
        );
        Writer::new(graph).add_annotated(triple, &axiom.annotations);
        Ok(())
    }
}
