use owlbridge_graph::{Graph, Statement, Triple};
use owlbridge_model::vocab::{owl, rdfs};
use owlbridge_model::{
    Axiom, AxiomBody, AxiomKind, ClassExpression, ObjectCharacteristic, ObjectProperty,
    ObjectPropertyExpression,
};

use super::binary::{BinaryTranslator, UnaryTranslator};
use super::nary::{all_members, PairwiseTranslator, TwoWayTranslator};
use super::{body_of, by_predicate, finish, mismatched, AxiomTranslator, Candidates};
use crate::codec::{Reader, Writer};
use crate::config::LoaderConfig;
use crate::error::Result;
use crate::translated::Translated;

type Ope = ObjectPropertyExpression;

pub static SUB_OBJECT_PROPERTY_OF: BinaryTranslator<Ope, Ope> = BinaryTranslator {
    kind: AxiomKind::SubObjectPropertyOf,
    predicate: rdfs::SUB_PROPERTY_OF,
    wrap: |sub, sup| AxiomBody::SubObjectPropertyOf { sub, sup },
    parts: |body| match body {
        AxiomBody::SubObjectPropertyOf { sub, sup } => Some((sub, sup)),
        _ => None,
    },
};

pub static EQUIVALENT_OBJECT_PROPERTIES: PairwiseTranslator<Ope> = PairwiseTranslator {
    kind: AxiomKind::EquivalentObjectProperties,
    predicate: owl::EQUIVALENT_PROPERTY,
    wrap: AxiomBody::EquivalentObjectProperties,
    operands: |body| match body {
        AxiomBody::EquivalentObjectProperties(operands) => Some(operands),
        _ => None,
    },
};

pub static DISJOINT_OBJECT_PROPERTIES: TwoWayTranslator<Ope> = TwoWayTranslator {
    kind: AxiomKind::DisjointObjectProperties,
    predicate: owl::PROPERTY_DISJOINT_WITH,
    marker: owl::ALL_DISJOINT_PROPERTIES,
    members: &[owl::MEMBERS],
    // an empty member list is claimed here rather than by the data kind
    accepts_members: all_members::<Ope>,
    wrap: AxiomBody::DisjointObjectProperties,
    operands: |body| match body {
        AxiomBody::DisjointObjectProperties(operands) => Some(operands),
        _ => None,
    },
};

pub static INVERSE_OBJECT_PROPERTIES: BinaryTranslator<ObjectProperty, ObjectProperty> =
    BinaryTranslator {
        kind: AxiomKind::InverseObjectProperties,
        predicate: owl::INVERSE_OF,
        wrap: |first, second| AxiomBody::InverseObjectProperties { first, second },
        parts: |body| match body {
            AxiomBody::InverseObjectProperties { first, second } => Some((first, second)),
            _ => None,
        },
    };

pub static OBJECT_PROPERTY_DOMAIN: BinaryTranslator<Ope, ClassExpression> = BinaryTranslator {
    kind: AxiomKind::ObjectPropertyDomain,
    predicate: rdfs::DOMAIN,
    wrap: |property, domain| AxiomBody::ObjectPropertyDomain { property, domain },
    parts: |body| match body {
        AxiomBody::ObjectPropertyDomain { property, domain } => Some((property, domain)),
        _ => None,
    },
};

pub static OBJECT_PROPERTY_RANGE: BinaryTranslator<Ope, ClassExpression> = BinaryTranslator {
    kind: AxiomKind::ObjectPropertyRange,
    predicate: rdfs::RANGE,
    wrap: |property, range| AxiomBody::ObjectPropertyRange { property, range },
    parts: |body| match body {
        AxiomBody::ObjectPropertyRange { property, range } => Some((property, range)),
        _ => None,
    },
};

// ============================================================================
// Characteristics
// ============================================================================

fn characteristic_property(body: &AxiomBody) -> Option<&Ope> {
    match body {
        AxiomBody::ObjectPropertyCharacteristic { property, .. } => Some(property),
        _ => None,
    }
}

macro_rules! characteristic {
    ($name:ident, $variant:ident, $kind:ident, $type_iri:expr) => {
        pub static $name: UnaryTranslator<Ope> = UnaryTranslator {
            kind: AxiomKind::$kind,
            type_iri: $type_iri,
            wrap: |property| AxiomBody::ObjectPropertyCharacteristic {
                characteristic: ObjectCharacteristic::$variant,
                property,
            },
            part: characteristic_property,
        };
    };
}

characteristic!(
    FUNCTIONAL_OBJECT_PROPERTY,
    Functional,
    FunctionalObjectProperty,
    owl::FUNCTIONAL_PROPERTY
);
characteristic!(
    INVERSE_FUNCTIONAL_OBJECT_PROPERTY,
    InverseFunctional,
    InverseFunctionalObjectProperty,
    owl::INVERSE_FUNCTIONAL_PROPERTY
);
characteristic!(
    REFLEXIVE_OBJECT_PROPERTY,
    Reflexive,
    ReflexiveObjectProperty,
    owl::REFLEXIVE_PROPERTY
);
characteristic!(
    IRREFLEXIVE_OBJECT_PROPERTY,
    Irreflexive,
    IrreflexiveObjectProperty,
    owl::IRREFLEXIVE_PROPERTY
);
characteristic!(
    SYMMETRIC_OBJECT_PROPERTY,
    Symmetric,
    SymmetricObjectProperty,
    owl::SYMMETRIC_PROPERTY
);
characteristic!(
    ASYMMETRIC_OBJECT_PROPERTY,
    Asymmetric,
    AsymmetricObjectProperty,
    owl::ASYMMETRIC_PROPERTY
);
characteristic!(
    TRANSITIVE_OBJECT_PROPERTY,
    Transitive,
    TransitiveObjectProperty,
    owl::TRANSITIVE_PROPERTY
);

// ============================================================================
// SubPropertyChainOf
// ============================================================================

/// `P owl:propertyChainAxiom ( P1 ... Pn )`.
pub struct PropertyChainTranslator;

impl AxiomTranslator for PropertyChainTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::SubPropertyChainOf
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        by_predicate(graph, owl::PROPERTY_CHAIN_AXIOM)
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        statement.predicate() == owl::PROPERTY_CHAIN_AXIOM
            && graph.is_object_property_expression(statement.subject())
            && graph
                .read_list(statement.object())
                .is_ok_and(|list| !list.is_empty() && all_members::<Ope>(graph, &list.members))
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let sup = reader.object_property_expression(statement.subject())?;
        let list = statement.graph().read_list(statement.object())?;
        let chain: Translated<Vec<Ope>> = list
            .members
            .iter()
            .map(|m| reader.object_property_expression(m))
            .collect::<Result<_>>()?;
        let body = chain
            .with_triples(list.triples)
            .zip(sup)
            .map(|(chain, sup)| AxiomBody::SubPropertyChainOf { chain, sup });
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let AxiomBody::SubPropertyChainOf { chain, sup } = body_of(axiom, self.kind())? else {
            return Err(mismatched(self.kind(), axiom));
        };
        let mut writer = Writer::new(graph);
        let subject = writer.object_property_expression(sup);
        let members = chain
            .iter()
            .map(|p| writer.object_property_expression(p))
            .collect();
        let head = writer.list(members);
        writer.add_annotated(
            Triple::new(subject, owl::PROPERTY_CHAIN_AXIOM, head),
            &axiom.annotations,
        );
        Ok(())
    }
}
