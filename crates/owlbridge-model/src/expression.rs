//! Class expressions and data ranges.
//!
//! Operand collections are ordered sets so that two expressions built from
//! the same operands in different orders compare equal.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entity::{
    Class, DataProperty, Datatype, Individual, Iri, Literal, ObjectPropertyExpression,
};
use crate::vocab::{owl, rdf, xsd};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardinalityKind {
    Min,
    Max,
    Exact,
}

impl CardinalityKind {
    /// Predicate used when the restriction has no filler.
    pub fn unqualified_predicate(self) -> &'static str {
        match self {
            CardinalityKind::Min => owl::MIN_CARDINALITY,
            CardinalityKind::Max => owl::MAX_CARDINALITY,
            CardinalityKind::Exact => owl::CARDINALITY,
        }
    }

    /// Predicate used together with `owl:onClass` / `owl:onDataRange`.
    pub fn qualified_predicate(self) -> &'static str {
        match self {
            CardinalityKind::Min => owl::MIN_QUALIFIED_CARDINALITY,
            CardinalityKind::Max => owl::MAX_QUALIFIED_CARDINALITY,
            CardinalityKind::Exact => owl::QUALIFIED_CARDINALITY,
        }
    }

    /// Resolves a cardinality predicate to its kind and whether it is qualified.
    pub fn from_predicate(iri: &str) -> Option<(Self, bool)> {
        [CardinalityKind::Min, CardinalityKind::Max, CardinalityKind::Exact]
            .into_iter()
            .find_map(|kind| {
                if kind.unqualified_predicate() == iri {
                    Some((kind, false))
                } else if kind.qualified_predicate() == iri {
                    Some((kind, true))
                } else {
                    None
                }
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassExpression {
    Class(Class),
    ObjectIntersectionOf(BTreeSet<ClassExpression>),
    ObjectUnionOf(BTreeSet<ClassExpression>),
    ObjectComplementOf(Box<ClassExpression>),
    ObjectOneOf(BTreeSet<Individual>),
    ObjectSomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectAllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    ObjectHasValue {
        property: ObjectPropertyExpression,
        individual: Individual,
    },
    ObjectHasSelf(ObjectPropertyExpression),
    /// A missing filler is the unqualified form.
    ObjectCardinality {
        kind: CardinalityKind,
        cardinality: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
    DataSomeValuesFrom {
        property: DataProperty,
        range: DataRange,
    },
    DataAllValuesFrom {
        property: DataProperty,
        range: DataRange,
    },
    DataHasValue {
        property: DataProperty,
        value: Literal,
    },
    DataCardinality {
        kind: CardinalityKind,
        cardinality: u32,
        property: DataProperty,
        range: Option<DataRange>,
    },
}

impl ClassExpression {
    pub fn class(iri: impl Into<Iri>) -> Self {
        ClassExpression::Class(Class::new(iri))
    }

    pub fn is_named(&self) -> bool {
        matches!(self, ClassExpression::Class(_))
    }

    pub fn as_class(&self) -> Option<&Class> {
        match self {
            ClassExpression::Class(c) => Some(c),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DataRange {
    Datatype(Datatype),
    IntersectionOf(BTreeSet<DataRange>),
    UnionOf(BTreeSet<DataRange>),
    ComplementOf(Box<DataRange>),
    OneOf(BTreeSet<Literal>),
    Restriction {
        datatype: Datatype,
        facets: BTreeSet<FacetRestriction>,
    },
}

impl DataRange {
    pub fn datatype(iri: impl Into<Iri>) -> Self {
        DataRange::Datatype(Datatype::new(iri))
    }

    pub fn is_named(&self) -> bool {
        matches!(self, DataRange::Datatype(_))
    }
}

/// XSD constraining facets plus `rdf:langRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Facet {
    Length,
    MinLength,
    MaxLength,
    Pattern,
    MinInclusive,
    MinExclusive,
    MaxInclusive,
    MaxExclusive,
    TotalDigits,
    FractionDigits,
    LangRange,
}

impl Facet {
    pub const ALL: [Facet; 11] = [
        Facet::Length,
        Facet::MinLength,
        Facet::MaxLength,
        Facet::Pattern,
        Facet::MinInclusive,
        Facet::MinExclusive,
        Facet::MaxInclusive,
        Facet::MaxExclusive,
        Facet::TotalDigits,
        Facet::FractionDigits,
        Facet::LangRange,
    ];

    pub fn iri(self) -> &'static str {
        match self {
            Facet::Length => xsd::LENGTH,
            Facet::MinLength => xsd::MIN_LENGTH,
            Facet::MaxLength => xsd::MAX_LENGTH,
            Facet::Pattern => xsd::PATTERN,
            Facet::MinInclusive => xsd::MIN_INCLUSIVE,
            Facet::MinExclusive => xsd::MIN_EXCLUSIVE,
            Facet::MaxInclusive => xsd::MAX_INCLUSIVE,
            Facet::MaxExclusive => xsd::MAX_EXCLUSIVE,
            Facet::TotalDigits => xsd::TOTAL_DIGITS,
            Facet::FractionDigits => xsd::FRACTION_DIGITS,
            Facet::LangRange => rdf::LANG_RANGE,
        }
    }

    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|facet| facet.iri() == iri)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FacetRestriction {
    pub facet: Facet,
    pub value: Literal,
}

impl FacetRestriction {
    pub fn new(facet: Facet, value: Literal) -> Self {
        Self { facet, value }
    }
}
