//! Axioms written as a single triple: `S predicate O`, or the typing
//! triple `P rdf:type T` for property characteristics.

use owlbridge_graph::{Graph, Node, Statement, Triple};
use owlbridge_model::vocab::rdf;
use owlbridge_model::{Axiom, AxiomBody, AxiomKind};

use super::operand::Operand;
use super::{body_of, by_predicate, by_type, finish, mismatched, AxiomTranslator, Candidates};
use crate::codec::{Reader, Writer};
use crate::config::LoaderConfig;
use crate::error::Result;
use crate::translated::Translated;

/// `S predicate O`, e.g. `C rdfs:subClassOf D` or `P rdfs:range R`.
pub struct BinaryTranslator<S: 'static, O: 'static> {
    pub kind: AxiomKind,
    pub predicate: &'static str,
    pub wrap: fn(S, O) -> AxiomBody,
    pub parts: fn(&AxiomBody) -> Option<(&S, &O)>,
}

impl<S: Operand, O: Operand> AxiomTranslator for BinaryTranslator<S, O> {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        by_predicate(graph, self.predicate)
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        statement.predicate() == self.predicate
            && S::accepts(graph, statement.subject())
            && O::accepts(graph, statement.object())
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let subject = S::read(&reader, statement.subject())?;
        let object = O::read(&reader, statement.object())?;
        let wrap = self.wrap;
        let body = subject.zip(object).map(|(s, o)| wrap(s, o));
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let (subject, object) = (self.parts)(body_of(axiom, self.kind)?)
            .ok_or_else(|| mismatched(self.kind, axiom))?;
        let mut writer = Writer::new(graph);
        let subject = S::write(&mut writer, subject);
        let object = O::write(&mut writer, object);
        writer.add_annotated(
            Triple::new(subject, self.predicate, object),
            &axiom.annotations,
        );
        Ok(())
    }
}

/// `P rdf:type T`, e.g. `P rdf:type owl:TransitiveProperty`.
pub struct UnaryTranslator<P: 'static> {
    pub kind: AxiomKind,
    pub type_iri: &'static str,
    pub wrap: fn(P) -> AxiomBody,
    pub part: fn(&AxiomBody) -> Option<&P>,
}

impl<P: Operand> AxiomTranslator for UnaryTranslator<P> {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        by_type(graph, self.type_iri)
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        statement.predicate() == rdf::TYPE
            && statement.object().is(self.type_iri)
            && P::accepts(statement.graph(), statement.subject())
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let body = P::read(&reader, statement.subject())?.map(self.wrap);
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let subject = (self.part)(body_of(axiom, self.kind)?)
            .ok_or_else(|| mismatched(self.kind, axiom))?;
        let mut writer = Writer::new(graph);
        let subject = P::write(&mut writer, subject);
        writer.add_annotated(
            Triple::new(subject, rdf::TYPE, Node::iri(self.type_iri)),
            &axiom.annotations,
        );
        Ok(())
    }
}
