//! Kind → translator dispatch and whole-graph operations.

use std::collections::BTreeSet;

use owlbridge_graph::{Graph, Statement, Triple};
use owlbridge_model::{Axiom, AxiomKind};

use crate::config::LoaderConfig;
use crate::error::{Result, TranslateError};
use crate::translated::Translated;
use crate::translators::annotation::{
    AnnotationAssertionTranslator, ANNOTATION_PROPERTY_DOMAIN, ANNOTATION_PROPERTY_RANGE,
    SUB_ANNOTATION_PROPERTY_OF,
};
use crate::translators::class::{
    DisjointUnionTranslator, HasKeyTranslator, DISJOINT_CLASSES, EQUIVALENT_CLASSES, SUB_CLASS_OF,
};
use crate::translators::data_property::{
    DATATYPE_DEFINITION, DATA_PROPERTY_DOMAIN, DATA_PROPERTY_RANGE, DISJOINT_DATA_PROPERTIES,
    EQUIVALENT_DATA_PROPERTIES, FUNCTIONAL_DATA_PROPERTY, SUB_DATA_PROPERTY_OF,
};
use crate::translators::declaration::DeclarationTranslator;
use crate::translators::individual::{
    ClassAssertionTranslator, DataPropertyAssertionTranslator, ObjectPropertyAssertionTranslator,
    DIFFERENT_INDIVIDUALS, NEGATIVE_DATA_PROPERTY_ASSERTION, NEGATIVE_OBJECT_PROPERTY_ASSERTION,
    SAME_INDIVIDUAL,
};
use crate::translators::object_property::{
    PropertyChainTranslator, ASYMMETRIC_OBJECT_PROPERTY, DISJOINT_OBJECT_PROPERTIES,
    EQUIVALENT_OBJECT_PROPERTIES, FUNCTIONAL_OBJECT_PROPERTY, INVERSE_FUNCTIONAL_OBJECT_PROPERTY,
    INVERSE_OBJECT_PROPERTIES, IRREFLEXIVE_OBJECT_PROPERTY, OBJECT_PROPERTY_DOMAIN,
    OBJECT_PROPERTY_RANGE, REFLEXIVE_OBJECT_PROPERTY, SUB_OBJECT_PROPERTY_OF,
    SYMMETRIC_OBJECT_PROPERTY, TRANSITIVE_OBJECT_PROPERTY,
};
use crate::translators::rule::RuleTranslator;
use crate::translators::AxiomTranslator;

/// The translator responsible for `kind`.
pub fn translator(kind: AxiomKind) -> &'static dyn AxiomTranslator {
    match kind {
        AxiomKind::Declaration => &DeclarationTranslator,
        AxiomKind::AnnotationAssertion => &AnnotationAssertionTranslator,
        AxiomKind::SubAnnotationPropertyOf => &SUB_ANNOTATION_PROPERTY_OF,
        AxiomKind::AnnotationPropertyDomain => &ANNOTATION_PROPERTY_DOMAIN,
        AxiomKind::AnnotationPropertyRange => &ANNOTATION_PROPERTY_RANGE,
        AxiomKind::SubClassOf => &SUB_CLASS_OF,
        AxiomKind::EquivalentClasses => &EQUIVALENT_CLASSES,
        AxiomKind::DisjointClasses => &DISJOINT_CLASSES,
        AxiomKind::DisjointUnion => &DisjointUnionTranslator,
        AxiomKind::SubObjectPropertyOf => &SUB_OBJECT_PROPERTY_OF,
        AxiomKind::SubPropertyChainOf => &PropertyChainTranslator,
        AxiomKind::EquivalentObjectProperties => &EQUIVALENT_OBJECT_PROPERTIES,
        AxiomKind::DisjointObjectProperties => &DISJOINT_OBJECT_PROPERTIES,
        AxiomKind::InverseObjectProperties => &INVERSE_OBJECT_PROPERTIES,
        AxiomKind::ObjectPropertyDomain => &OBJECT_PROPERTY_DOMAIN,
        AxiomKind::ObjectPropertyRange => &OBJECT_PROPERTY_RANGE,
        AxiomKind::FunctionalObjectProperty => &FUNCTIONAL_OBJECT_PROPERTY,
        AxiomKind::InverseFunctionalObjectProperty => &INVERSE_FUNCTIONAL_OBJECT_PROPERTY,
        AxiomKind::ReflexiveObjectProperty => &REFLEXIVE_OBJECT_PROPERTY,
        AxiomKind::IrreflexiveObjectProperty => &IRREFLEXIVE_OBJECT_PROPERTY,
        AxiomKind::SymmetricObjectProperty => &SYMMETRIC_OBJECT_PROPERTY,
        AxiomKind::AsymmetricObjectProperty => &ASYMMETRIC_OBJECT_PROPERTY,
        AxiomKind::TransitiveObjectProperty => &TRANSITIVE_OBJECT_PROPERTY,
        AxiomKind::SubDataPropertyOf => &SUB_DATA_PROPERTY_OF,
        AxiomKind::EquivalentDataProperties => &EQUIVALENT_DATA_PROPERTIES,
        AxiomKind::DisjointDataProperties => &DISJOINT_DATA_PROPERTIES,
        AxiomKind::DataPropertyDomain => &DATA_PROPERTY_DOMAIN,
        AxiomKind::DataPropertyRange => &DATA_PROPERTY_RANGE,
        AxiomKind::FunctionalDataProperty => &FUNCTIONAL_DATA_PROPERTY,
        AxiomKind::DatatypeDefinition => &DATATYPE_DEFINITION,
        AxiomKind::HasKey => &HasKeyTranslator,
        AxiomKind::ClassAssertion => &ClassAssertionTranslator,
        AxiomKind::ObjectPropertyAssertion => &ObjectPropertyAssertionTranslator,
        AxiomKind::DataPropertyAssertion => &DataPropertyAssertionTranslator,
        AxiomKind::NegativeObjectPropertyAssertion => &NEGATIVE_OBJECT_PROPERTY_ASSERTION,
        AxiomKind::NegativeDataPropertyAssertion => &NEGATIVE_DATA_PROPERTY_ASSERTION,
        AxiomKind::SameIndividual => &SAME_INDIVIDUAL,
        AxiomKind::DifferentIndividuals => &DIFFERENT_INDIVIDUALS,
        AxiomKind::SwrlRule => &RuleTranslator,
    }
}

// ============================================================================
// Reading
// ============================================================================

/// Lazily reads the axioms of `kind`, or of every kind in [`AxiomKind::ALL`]
/// order when `kind` is `None`.
///
/// Under [`ErrorPolicy::Lenient`](crate::ErrorPolicy::Lenient) statements
/// that fail for structural reasons are logged and skipped; every other
/// failure is yielded tagged with the statement that caused it.
pub fn read_axioms<'g>(
    graph: &'g Graph,
    config: &'g LoaderConfig,
    kind: Option<AxiomKind>,
) -> impl Iterator<Item = Result<Translated<Axiom>>> + 'g {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => AxiomKind::ALL.to_vec(),
    };
    kinds
        .into_iter()
        .flat_map(move |kind| read_kind(graph, config, kind))
}

fn read_kind<'g>(
    graph: &'g Graph,
    config: &'g LoaderConfig,
    kind: AxiomKind,
) -> impl Iterator<Item = Result<Translated<Axiom>>> + 'g {
    let translator = translator(kind);
    let span = tracing::debug_span!("read_axioms", %kind);
    translator
        .statements(graph, config)
        .filter_map(move |statement| {
            let _entered = span.enter();
            match translator.read(&statement, config) {
                Ok(axiom) => {
                    tracing::trace!(triples = axiom.triples().len(), "decoded axiom");
                    Some(Ok(axiom))
                }
                Err(err) if config.is_lenient() && err.is_structural() => {
                    tracing::warn!(
                        %kind,
                        triple = %statement.triple(),
                        error = %err,
                        "skipping undecodable statement"
                    );
                    None
                }
                Err(err) => Some(Err(TranslateError::in_statement(statement.triple(), err))),
            }
        })
}

/// Every axiom in the graph; stops at the first error in strict mode.
pub fn read_all(graph: &Graph, config: &LoaderConfig) -> Result<Vec<Translated<Axiom>>> {
    let axioms = read_axioms(graph, config, None).collect::<Result<Vec<_>>>()?;
    tracing::debug!(axioms = axioms.len(), triples = graph.len(), "read graph");
    Ok(axioms)
}

/// Whether `statement` roots an axiom of `kind` under `config`.
pub fn test_statement(statement: &Statement<'_>, kind: AxiomKind, config: &LoaderConfig) -> bool {
    translator(kind).test_statement(statement, config)
}

// ============================================================================
// Writing
// ============================================================================

pub fn write_axiom(axiom: &Axiom, graph: &mut Graph) -> Result<()> {
    tracing::trace!(kind = %axiom.kind(), "writing axiom");
    translator(axiom.kind()).write(axiom, graph)
}

pub fn write_axioms<'a>(
    axioms: impl IntoIterator<Item = &'a Axiom>,
    graph: &mut Graph,
) -> Result<()> {
    for axiom in axioms {
        write_axiom(axiom, graph)?;
    }
    Ok(())
}

/// Removes `axiom` from `graph`: the triples of every decoded occurrence,
/// minus any triple another decoded axiom still depends on (shared
/// declarations, for instance). Returns the number of triples removed.
pub fn remove_axiom(axiom: &Axiom, graph: &mut Graph, config: &LoaderConfig) -> Result<usize> {
    let mut owned: BTreeSet<Triple> = BTreeSet::new();
    let mut shared: BTreeSet<Triple> = BTreeSet::new();
    for decoded in read_axioms(graph, config, Some(axiom.kind())) {
        let (object, triples) = decoded?.into_parts();
        if &object == axiom {
            owned.extend(triples);
        }
    }
    if owned.is_empty() {
        return Ok(0);
    }

    for decoded in read_axioms(graph, config, None) {
        let decoded = decoded?;
        if decoded.object() != axiom {
            shared.extend(decoded.triples().iter().cloned());
        }
    }

    let doomed: Vec<Triple> = owned.difference(&shared).cloned().collect();
    let removed = graph.remove_all(&doomed);
    tracing::debug!(kind = %axiom.kind(), removed, "removed axiom");
    Ok(removed)
}
