//! Annotations and axioms.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entity::{
    AnnotationProperty, AnonymousIndividual, Class, DataProperty, Datatype, Entity, Individual,
    Iri, Literal, ObjectProperty, ObjectPropertyExpression,
};
use crate::expression::{ClassExpression, DataRange};
use crate::swrl::Rule;
use crate::vocab::owl;

// ============================================================================
// Annotations
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnnotationValue {
    Iri(Iri),
    Literal(Literal),
    Anonymous(AnonymousIndividual),
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnnotationSubject {
    Iri(Iri),
    Anonymous(AnonymousIndividual),
}

/// An annotation, possibly annotated itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub property: AnnotationProperty,
    pub value: AnnotationValue,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub annotations: BTreeSet<Annotation>,
}

pub type Annotations = BTreeSet<Annotation>;

impl Annotation {
    pub fn new(property: AnnotationProperty, value: AnnotationValue) -> Self {
        Self {
            property,
            value,
            annotations: BTreeSet::new(),
        }
    }

    pub fn literal(property: impl Into<Iri>, value: Literal) -> Self {
        Self::new(AnnotationProperty::new(property), AnnotationValue::Literal(value))
    }

    pub fn with_annotations(mut self, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        self.annotations.extend(annotations);
        self
    }

    pub fn is_hierarchical(&self) -> bool {
        !self.annotations.is_empty()
    }
}

// ============================================================================
// Axiom kinds
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AxiomKind {
    Declaration,
    AnnotationAssertion,
    SubAnnotationPropertyOf,
    AnnotationPropertyDomain,
    AnnotationPropertyRange,
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    DisjointUnion,
    SubObjectPropertyOf,
    SubPropertyChainOf,
    EquivalentObjectProperties,
    DisjointObjectProperties,
    InverseObjectProperties,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    ReflexiveObjectProperty,
    IrreflexiveObjectProperty,
    SymmetricObjectProperty,
    AsymmetricObjectProperty,
    TransitiveObjectProperty,
    SubDataPropertyOf,
    EquivalentDataProperties,
    DisjointDataProperties,
    DataPropertyDomain,
    DataPropertyRange,
    FunctionalDataProperty,
    DatatypeDefinition,
    HasKey,
    ClassAssertion,
    ObjectPropertyAssertion,
    DataPropertyAssertion,
    NegativeObjectPropertyAssertion,
    NegativeDataPropertyAssertion,
    SameIndividual,
    DifferentIndividuals,
    SwrlRule,
}

impl AxiomKind {
    pub const ALL: [AxiomKind; 39] = [
        AxiomKind::Declaration,
        AxiomKind::AnnotationAssertion,
        AxiomKind::SubAnnotationPropertyOf,
        AxiomKind::AnnotationPropertyDomain,
        AxiomKind::AnnotationPropertyRange,
        AxiomKind::SubClassOf,
        AxiomKind::EquivalentClasses,
        AxiomKind::DisjointClasses,
        AxiomKind::DisjointUnion,
        AxiomKind::SubObjectPropertyOf,
        AxiomKind::SubPropertyChainOf,
        AxiomKind::EquivalentObjectProperties,
        AxiomKind::DisjointObjectProperties,
        AxiomKind::InverseObjectProperties,
        AxiomKind::ObjectPropertyDomain,
        AxiomKind::ObjectPropertyRange,
        AxiomKind::FunctionalObjectProperty,
        AxiomKind::InverseFunctionalObjectProperty,
        AxiomKind::ReflexiveObjectProperty,
        AxiomKind::IrreflexiveObjectProperty,
        AxiomKind::SymmetricObjectProperty,
        AxiomKind::AsymmetricObjectProperty,
        AxiomKind::TransitiveObjectProperty,
        AxiomKind::SubDataPropertyOf,
        AxiomKind::EquivalentDataProperties,
        AxiomKind::DisjointDataProperties,
        AxiomKind::DataPropertyDomain,
        AxiomKind::DataPropertyRange,
        AxiomKind::FunctionalDataProperty,
        AxiomKind::DatatypeDefinition,
        AxiomKind::HasKey,
        AxiomKind::ClassAssertion,
        AxiomKind::ObjectPropertyAssertion,
        AxiomKind::DataPropertyAssertion,
        AxiomKind::NegativeObjectPropertyAssertion,
        AxiomKind::NegativeDataPropertyAssertion,
        AxiomKind::SameIndividual,
        AxiomKind::DifferentIndividuals,
        AxiomKind::SwrlRule,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AxiomKind::Declaration => "Declaration",
            AxiomKind::AnnotationAssertion => "AnnotationAssertion",
            AxiomKind::SubAnnotationPropertyOf => "SubAnnotationPropertyOf",
            AxiomKind::AnnotationPropertyDomain => "AnnotationPropertyDomain",
            AxiomKind::AnnotationPropertyRange => "AnnotationPropertyRange",
            AxiomKind::SubClassOf => "SubClassOf",
            AxiomKind::EquivalentClasses => "EquivalentClasses",
            AxiomKind::DisjointClasses => "DisjointClasses",
            AxiomKind::DisjointUnion => "DisjointUnion",
            AxiomKind::SubObjectPropertyOf => "SubObjectPropertyOf",
            AxiomKind::SubPropertyChainOf => "SubPropertyChainOf",
            AxiomKind::EquivalentObjectProperties => "EquivalentObjectProperties",
            AxiomKind::DisjointObjectProperties => "DisjointObjectProperties",
            AxiomKind::InverseObjectProperties => "InverseObjectProperties",
            AxiomKind::ObjectPropertyDomain => "ObjectPropertyDomain",
            AxiomKind::ObjectPropertyRange => "ObjectPropertyRange",
            AxiomKind::FunctionalObjectProperty => "FunctionalObjectProperty",
            AxiomKind::InverseFunctionalObjectProperty => "InverseFunctionalObjectProperty",
            AxiomKind::ReflexiveObjectProperty => "ReflexiveObjectProperty",
            AxiomKind::IrreflexiveObjectProperty => "IrreflexiveObjectProperty",
            AxiomKind::SymmetricObjectProperty => "SymmetricObjectProperty",
            AxiomKind::AsymmetricObjectProperty => "AsymmetricObjectProperty",
            AxiomKind::TransitiveObjectProperty => "TransitiveObjectProperty",
            AxiomKind::SubDataPropertyOf => "SubDataPropertyOf",
            AxiomKind::EquivalentDataProperties => "EquivalentDataProperties",
            AxiomKind::DisjointDataProperties => "DisjointDataProperties",
            AxiomKind::DataPropertyDomain => "DataPropertyDomain",
            AxiomKind::DataPropertyRange => "DataPropertyRange",
            AxiomKind::FunctionalDataProperty => "FunctionalDataProperty",
            AxiomKind::DatatypeDefinition => "DatatypeDefinition",
            AxiomKind::HasKey => "HasKey",
            AxiomKind::ClassAssertion => "ClassAssertion",
            AxiomKind::ObjectPropertyAssertion => "ObjectPropertyAssertion",
            AxiomKind::DataPropertyAssertion => "DataPropertyAssertion",
            AxiomKind::NegativeObjectPropertyAssertion => "NegativeObjectPropertyAssertion",
            AxiomKind::NegativeDataPropertyAssertion => "NegativeDataPropertyAssertion",
            AxiomKind::SameIndividual => "SameIndividual",
            AxiomKind::DifferentIndividuals => "DifferentIndividuals",
            AxiomKind::SwrlRule => "SWRLRule",
        }
    }

    /// Kinds gated by `load_annotation_axioms`.
    pub fn is_annotation_axiom(self) -> bool {
        matches!(
            self,
            AxiomKind::AnnotationAssertion
                | AxiomKind::SubAnnotationPropertyOf
                | AxiomKind::AnnotationPropertyDomain
                | AxiomKind::AnnotationPropertyRange
        )
    }
}

impl fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The seven object property characteristics, each a single `rdf:type` triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectCharacteristic {
    Functional,
    InverseFunctional,
    Reflexive,
    Irreflexive,
    Symmetric,
    Asymmetric,
    Transitive,
}

impl ObjectCharacteristic {
    pub fn kind(self) -> AxiomKind {
        match self {
            ObjectCharacteristic::Functional => AxiomKind::FunctionalObjectProperty,
            ObjectCharacteristic::InverseFunctional => AxiomKind::InverseFunctionalObjectProperty,
            ObjectCharacteristic::Reflexive => AxiomKind::ReflexiveObjectProperty,
            ObjectCharacteristic::Irreflexive => AxiomKind::IrreflexiveObjectProperty,
            ObjectCharacteristic::Symmetric => AxiomKind::SymmetricObjectProperty,
            ObjectCharacteristic::Asymmetric => AxiomKind::AsymmetricObjectProperty,
            ObjectCharacteristic::Transitive => AxiomKind::TransitiveObjectProperty,
        }
    }

    pub fn type_iri(self) -> &'static str {
        match self {
            ObjectCharacteristic::Functional => owl::FUNCTIONAL_PROPERTY,
            ObjectCharacteristic::InverseFunctional => owl::INVERSE_FUNCTIONAL_PROPERTY,
            ObjectCharacteristic::Reflexive => owl::REFLEXIVE_PROPERTY,
            ObjectCharacteristic::Irreflexive => owl::IRREFLEXIVE_PROPERTY,
            ObjectCharacteristic::Symmetric => owl::SYMMETRIC_PROPERTY,
            ObjectCharacteristic::Asymmetric => owl::ASYMMETRIC_PROPERTY,
            ObjectCharacteristic::Transitive => owl::TRANSITIVE_PROPERTY,
        }
    }
}

// ============================================================================
// Axioms
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AxiomBody {
    Declaration(Entity),
    AnnotationAssertion {
        subject: AnnotationSubject,
        property: AnnotationProperty,
        value: AnnotationValue,
    },
    SubAnnotationPropertyOf {
        sub: AnnotationProperty,
        sup: AnnotationProperty,
    },
    AnnotationPropertyDomain {
        property: AnnotationProperty,
        domain: Iri,
    },
    AnnotationPropertyRange {
        property: AnnotationProperty,
        range: Iri,
    },
    SubClassOf {
        sub: ClassExpression,
        sup: ClassExpression,
    },
    EquivalentClasses(BTreeSet<ClassExpression>),
    DisjointClasses(BTreeSet<ClassExpression>),
    DisjointUnion {
        class: Class,
        operands: BTreeSet<ClassExpression>,
    },
    SubObjectPropertyOf {
        sub: ObjectPropertyExpression,
        sup: ObjectPropertyExpression,
    },
    SubPropertyChainOf {
        chain: Vec<ObjectPropertyExpression>,
        sup: ObjectPropertyExpression,
    },
    EquivalentObjectProperties(BTreeSet<ObjectPropertyExpression>),
    DisjointObjectProperties(BTreeSet<ObjectPropertyExpression>),
    InverseObjectProperties {
        first: ObjectProperty,
        second: ObjectProperty,
    },
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
    },
    ObjectPropertyCharacteristic {
        characteristic: ObjectCharacteristic,
        property: ObjectPropertyExpression,
    },
    SubDataPropertyOf {
        sub: DataProperty,
        sup: DataProperty,
    },
    EquivalentDataProperties(BTreeSet<DataProperty>),
    DisjointDataProperties(BTreeSet<DataProperty>),
    DataPropertyDomain {
        property: DataProperty,
        domain: ClassExpression,
    },
    DataPropertyRange {
        property: DataProperty,
        range: DataRange,
    },
    FunctionalDataProperty(DataProperty),
    DatatypeDefinition {
        datatype: Datatype,
        range: DataRange,
    },
    HasKey {
        class: ClassExpression,
        object_properties: BTreeSet<ObjectPropertyExpression>,
        data_properties: BTreeSet<DataProperty>,
    },
    ClassAssertion {
        class: ClassExpression,
        individual: Individual,
    },
    ObjectPropertyAssertion {
        property: ObjectProperty,
        subject: Individual,
        object: Individual,
    },
    DataPropertyAssertion {
        property: DataProperty,
        subject: Individual,
        value: Literal,
    },
    NegativeObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Individual,
        object: Individual,
    },
    NegativeDataPropertyAssertion {
        property: DataProperty,
        subject: Individual,
        value: Literal,
    },
    SameIndividual(BTreeSet<Individual>),
    DifferentIndividuals(BTreeSet<Individual>),
    SwrlRule(Rule),
}

impl AxiomBody {
    pub fn kind(&self) -> AxiomKind {
        match self {
            AxiomBody::Declaration(_) => AxiomKind::Declaration,
            AxiomBody::AnnotationAssertion { .. } => AxiomKind::AnnotationAssertion,
            AxiomBody::SubAnnotationPropertyOf { .. } => AxiomKind::SubAnnotationPropertyOf,
            AxiomBody::AnnotationPropertyDomain { .. } => AxiomKind::AnnotationPropertyDomain,
            AxiomBody::AnnotationPropertyRange { .. } => AxiomKind::AnnotationPropertyRange,
            AxiomBody::SubClassOf { .. } => AxiomKind::SubClassOf,
            AxiomBody::EquivalentClasses(_) => AxiomKind::EquivalentClasses,
            AxiomBody::DisjointClasses(_) => AxiomKind::DisjointClasses,
            AxiomBody::DisjointUnion { .. } => AxiomKind::DisjointUnion,
            AxiomBody::SubObjectPropertyOf { .. } => AxiomKind::SubObjectPropertyOf,
            AxiomBody::SubPropertyChainOf { .. } => AxiomKind::SubPropertyChainOf,
            AxiomBody::EquivalentObjectProperties(_) => AxiomKind::EquivalentObjectProperties,
            AxiomBody::DisjointObjectProperties(_) => AxiomKind::DisjointObjectProperties,
            AxiomBody::InverseObjectProperties { .. } => AxiomKind::InverseObjectProperties,
            AxiomBody::ObjectPropertyDomain { .. } => AxiomKind::ObjectPropertyDomain,
            AxiomBody::ObjectPropertyRange { .. } => AxiomKind::ObjectPropertyRange,
            AxiomBody::ObjectPropertyCharacteristic { characteristic, .. } => characteristic.kind(),
            AxiomBody::SubDataPropertyOf { .. } => AxiomKind::SubDataPropertyOf,
            AxiomBody::EquivalentDataProperties(_) => AxiomKind::EquivalentDataProperties,
            AxiomBody::DisjointDataProperties(_) => AxiomKind::DisjointDataProperties,
            AxiomBody::DataPropertyDomain { .. } => AxiomKind::DataPropertyDomain,
            AxiomBody::DataPropertyRange { .. } => AxiomKind::DataPropertyRange,
            AxiomBody::FunctionalDataProperty(_) => AxiomKind::FunctionalDataProperty,
            AxiomBody::DatatypeDefinition { .. } => AxiomKind::DatatypeDefinition,
            AxiomBody::HasKey { .. } => AxiomKind::HasKey,
            AxiomBody::ClassAssertion { .. } => AxiomKind::ClassAssertion,
            AxiomBody::ObjectPropertyAssertion { .. } => AxiomKind::ObjectPropertyAssertion,
            AxiomBody::DataPropertyAssertion { .. } => AxiomKind::DataPropertyAssertion,
            AxiomBody::NegativeObjectPropertyAssertion { .. } => {
                AxiomKind::NegativeObjectPropertyAssertion
            }
            AxiomBody::NegativeDataPropertyAssertion { .. } => {
                AxiomKind::NegativeDataPropertyAssertion
            }
            AxiomBody::SameIndividual(_) => AxiomKind::SameIndividual,
            AxiomBody::DifferentIndividuals(_) => AxiomKind::DifferentIndividuals,
            AxiomBody::SwrlRule(_) => AxiomKind::SwrlRule,
        }
    }
}

/// An axiom together with its annotations. Equality covers both.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Axiom {
    pub body: AxiomBody,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub annotations: Annotations,
}

impl Axiom {
    pub fn new(body: AxiomBody) -> Self {
        Self {
            body,
            annotations: BTreeSet::new(),
        }
    }

    pub fn annotated(body: AxiomBody, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        Self {
            body,
            annotations: annotations.into_iter().collect(),
        }
    }

    pub fn kind(&self) -> AxiomKind {
        self.body.kind()
    }

    /// True when both axioms are n-ary axioms of the same kind sharing at
    /// least one operand.
    pub fn nary_intersects(&self, other: &Axiom) -> bool {
        fn shares<T: Ord>(a: &BTreeSet<T>, b: &BTreeSet<T>) -> bool {
            a.intersection(b).next().is_some()
        }
        match (&self.body, &other.body) {
            (AxiomBody::EquivalentClasses(a), AxiomBody::EquivalentClasses(b))
            | (AxiomBody::DisjointClasses(a), AxiomBody::DisjointClasses(b)) => shares(a, b),
            (AxiomBody::EquivalentObjectProperties(a), AxiomBody::EquivalentObjectProperties(b))
            | (AxiomBody::DisjointObjectProperties(a), AxiomBody::DisjointObjectProperties(b)) => {
                shares(a, b)
            }
            (AxiomBody::EquivalentDataProperties(a), AxiomBody::EquivalentDataProperties(b))
            | (AxiomBody::DisjointDataProperties(a), AxiomBody::DisjointDataProperties(b)) => {
                shares(a, b)
            }
            (AxiomBody::SameIndividual(a), AxiomBody::SameIndividual(b))
            | (AxiomBody::DifferentIndividuals(a), AxiomBody::DifferentIndividuals(b)) => {
                shares(a, b)
            }
            _ => false,
        }
    }
}

impl From<AxiomBody> for Axiom {
    fn from(body: AxiomBody) -> Self {
        Axiom::new(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::rdfs;

    fn classes(names: &[&str]) -> BTreeSet<ClassExpression> {
        names
            .iter()
            .map(|n| ClassExpression::class(format!("http://example.com/{n}")))
            .collect()
    }

    #[test]
    fn every_kind_has_a_unique_name() {
        let names: BTreeSet<&str> = AxiomKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(names.len(), AxiomKind::ALL.len());
    }

    #[test]
    fn characteristic_bodies_report_their_own_kind() {
        let body = AxiomBody::ObjectPropertyCharacteristic {
            characteristic: ObjectCharacteristic::Transitive,
            property: ObjectPropertyExpression::named("http://example.com/ancestorOf"),
        };
        assert_eq!(body.kind(), AxiomKind::TransitiveObjectProperty);
    }

    #[test]
    fn annotations_take_part_in_equality() {
        let body = AxiomBody::DisjointClasses(classes(&["A", "B"]));
        let plain = Axiom::new(body.clone());
        let noted = Axiom::annotated(
            body,
            [Annotation::literal(rdfs::COMMENT, Literal::string("checked"))],
        );
        assert_ne!(plain, noted);
        assert_eq!(plain.kind(), noted.kind());
    }

    #[test]
    fn nary_intersects_requires_same_kind_and_shared_operand() {
        let ab = Axiom::new(AxiomBody::DisjointClasses(classes(&["A", "B"])));
        let bc = Axiom::new(AxiomBody::DisjointClasses(classes(&["B", "C"])));
        let cd = Axiom::new(AxiomBody::DisjointClasses(classes(&["C", "D"])));
        let eq_ab = Axiom::new(AxiomBody::EquivalentClasses(classes(&["A", "B"])));
        assert!(ab.nary_intersects(&bc));
        assert!(!ab.nary_intersects(&cd));
        assert!(!ab.nary_intersects(&eq_ab));
    }

    #[test]
    fn axioms_survive_json_serialization() {
        let axiom = Axiom::annotated(
            AxiomBody::SubClassOf {
                sub: ClassExpression::class("http://example.com/Cat"),
                sup: ClassExpression::class("http://example.com/Animal"),
            },
            [Annotation::literal(rdfs::LABEL, Literal::lang("chat", "fr"))],
        );
        let json = serde_json::to_string(&axiom).expect("serialize axiom");
        let back: Axiom = serde_json::from_str(&json).expect("deserialize axiom");
        assert_eq!(back, axiom);
    }
}
