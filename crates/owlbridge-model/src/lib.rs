//! OWL 2 structural model.
//!
//! Value types for the axiom side of the OWL/RDF bridge: IRIs and literals,
//! the six entity kinds, class expressions, data ranges, SWRL rules,
//! annotations and axioms. Everything here is plain data with structural
//! equality; nothing knows about graphs.

pub mod axiom;
pub mod entity;
pub mod expression;
pub mod swrl;
pub mod vocab;

pub use axiom::{
    Annotation, AnnotationSubject, AnnotationValue, Annotations, Axiom, AxiomBody, AxiomKind,
    ObjectCharacteristic,
};
pub use entity::{
    AnnotationProperty, AnonymousIndividual, Class, DataProperty, Datatype, Entity, EntityType,
    Individual, Iri, Literal, NamedIndividual, ObjectProperty, ObjectPropertyExpression,
};
pub use expression::{CardinalityKind, ClassExpression, DataRange, Facet, FacetRestriction};

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("invalid IRI `{iri}`: {reason}")]
    InvalidIri { iri: String, reason: String },
}
