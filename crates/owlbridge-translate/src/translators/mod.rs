//! One translator per axiom kind.
//!
//! A translator knows three things about its kind: which triples might root
//! an axiom of that kind ([`AxiomTranslator::candidates`]), whether a given
//! candidate really does ([`AxiomTranslator::recognizes`]), and how to move an
//! axiom between the graph and the domain model (`read` / `write`).

pub mod annotation;
pub mod binary;
pub mod class;
pub mod data_property;
pub mod declaration;
pub mod individual;
pub mod nary;
pub mod object_property;
pub mod operand;
pub mod rule;

use owlbridge_graph::{Graph, Statement, Triple};
use owlbridge_model::{Axiom, AxiomBody, AxiomKind};

use crate::codec::Reader;
use crate::config::LoaderConfig;
use crate::error::{Result, TranslateError};
use crate::translated::Translated;

pub type Candidates<'g> = Box<dyn Iterator<Item = &'g Triple> + 'g>;

pub trait AxiomTranslator: Send + Sync {
    fn kind(&self) -> AxiomKind;

    /// Triples worth testing: a superset of the statements this kind reads.
    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g>;

    /// Shape check for one statement, ignoring loader switches.
    fn recognizes(&self, statement: &Statement<'_>, config: &LoaderConfig) -> bool;

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>>;

    /// Appends the RDF form of `axiom` to `graph`.
    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()>;

    /// Whether the loader switches allow this kind to be read at all.
    fn enabled(&self, config: &LoaderConfig) -> bool {
        match self.kind() {
            AxiomKind::Declaration => config.allow_read_declarations,
            kind if kind.is_annotation_axiom() => config.load_annotation_axioms,
            _ => true,
        }
    }

    fn test_statement(&self, statement: &Statement<'_>, config: &LoaderConfig) -> bool {
        self.enabled(config) && self.recognizes(statement, config)
    }

    /// Every statement of `graph` this translator reads, in graph order.
    fn statements<'g>(
        &'g self,
        graph: &'g Graph,
        config: &'g LoaderConfig,
    ) -> Box<dyn Iterator<Item = Statement<'g>> + 'g> {
        if !self.enabled(config) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.candidates(graph)
                .map(move |t| Statement::new(graph, t.clone()))
                .filter(move |s| self.recognizes(s, config)),
        )
    }
}

// ============================================================================
// Shared helpers
// ============================================================================

/// Finishes a read: adds the root triple and the statement's annotations.
pub(crate) fn finish(
    statement: &Statement<'_>,
    config: &LoaderConfig,
    body: Translated<AxiomBody>,
) -> Result<Translated<Axiom>> {
    let reader = Reader::new(statement.graph(), config);
    let annotations = reader.annotations(statement)?;
    Ok(body
        .zip(annotations)
        .map(|(body, annotations)| Axiom { body, annotations })
        .with_triple(statement.triple().clone()))
}

/// The axiom's body, or a contract error when it belongs to another kind.
pub(crate) fn body_of(axiom: &Axiom, expected: AxiomKind) -> Result<&AxiomBody> {
    if axiom.kind() != expected {
        return Err(TranslateError::wrong_kind(expected, axiom.kind()));
    }
    Ok(&axiom.body)
}

/// Error for a body that passed [`body_of`] but did not match the variant;
/// only reachable when a translator is wired to the wrong kind.
pub(crate) fn mismatched(expected: AxiomKind, axiom: &Axiom) -> TranslateError {
    TranslateError::wrong_kind(expected, axiom.kind())
}

pub(crate) fn by_predicate<'g>(graph: &'g Graph, predicate: &'static str) -> Candidates<'g> {
    Box::new(graph.triples_with_predicate(predicate))
}

/// `rdf:type` triples whose object is `type_iri`.
pub(crate) fn by_type<'g>(graph: &'g Graph, type_iri: &'static str) -> Candidates<'g> {
    Box::new(
        graph
            .triples_with_predicate(owlbridge_model::vocab::rdf::TYPE)
            .filter(move |t| t.object.is(type_iri)),
    )
}
