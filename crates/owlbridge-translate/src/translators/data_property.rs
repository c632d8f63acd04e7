use owlbridge_model::vocab::{owl, rdfs};
use owlbridge_model::{
    AxiomBody, AxiomKind, ClassExpression, DataProperty, DataRange, Datatype,
    ObjectPropertyExpression,
};

use super::binary::{BinaryTranslator, UnaryTranslator};
use super::nary::{all_members, PairwiseTranslator, TwoWayTranslator};

pub static SUB_DATA_PROPERTY_OF: BinaryTranslator<DataProperty, DataProperty> = BinaryTranslator {
    kind: AxiomKind::SubDataPropertyOf,
    predicate: rdfs::SUB_PROPERTY_OF,
    wrap: |sub, sup| AxiomBody::SubDataPropertyOf { sub, sup },
    parts: |body| match body {
        AxiomBody::SubDataPropertyOf { sub, sup } => Some((sub, sup)),
        _ => None,
    },
};

pub static EQUIVALENT_DATA_PROPERTIES: PairwiseTranslator<DataProperty> = PairwiseTranslator {
    kind: AxiomKind::EquivalentDataProperties,
    predicate: owl::EQUIVALENT_PROPERTY,
    wrap: AxiomBody::EquivalentDataProperties,
    operands: |body| match body {
        AxiomBody::EquivalentDataProperties(operands) => Some(operands),
        _ => None,
    },
};

/// `owl:AllDisjointProperties` is shared with the object kind; a list whose
/// members all read as object properties (including an empty one) goes there.
pub static DISJOINT_DATA_PROPERTIES: TwoWayTranslator<DataProperty> = TwoWayTranslator {
    kind: AxiomKind::DisjointDataProperties,
    predicate: owl::PROPERTY_DISJOINT_WITH,
    marker: owl::ALL_DISJOINT_PROPERTIES,
    members: &[owl::MEMBERS],
    accepts_members: |graph, members| {
        !members.is_empty()
            && all_members::<DataProperty>(graph, members)
            && !all_members::<ObjectPropertyExpression>(graph, members)
    },
    wrap: AxiomBody::DisjointDataProperties,
    operands: |body| match body {
        AxiomBody::DisjointDataProperties(operands) => Some(operands),
        _ => None,
    },
};

pub static DATA_PROPERTY_DOMAIN: BinaryTranslator<DataProperty, ClassExpression> =
    BinaryTranslator {
        kind: AxiomKind::DataPropertyDomain,
        predicate: rdfs::DOMAIN,
        wrap: |property, domain| AxiomBody::DataPropertyDomain { property, domain },
        parts: |body| match body {
            AxiomBody::DataPropertyDomain { property, domain } => Some((property, domain)),
            _ => None,
        },
    };

pub static DATA_PROPERTY_RANGE: BinaryTranslator<DataProperty, DataRange> = BinaryTranslator {
    kind: AxiomKind::DataPropertyRange,
    predicate: rdfs::RANGE,
    wrap: |property, range| AxiomBody::DataPropertyRange { property, range },
    parts: |body| match body {
        AxiomBody::DataPropertyRange { property, range } => Some((property, range)),
        _ => None,
    },
};

pub static FUNCTIONAL_DATA_PROPERTY: UnaryTranslator<DataProperty> = UnaryTranslator {
    kind: AxiomKind::FunctionalDataProperty,
    type_iri: owl::FUNCTIONAL_PROPERTY,
    wrap: AxiomBody::FunctionalDataProperty,
    part: |body| match body {
        AxiomBody::FunctionalDataProperty(property) => Some(property),
        _ => None,
    },
};

/// `D owl:equivalentClass R` with `D` a datatype.
pub static DATATYPE_DEFINITION: BinaryTranslator<Datatype, DataRange> = BinaryTranslator {
    kind: AxiomKind::DatatypeDefinition,
    predicate: owl::EQUIVALENT_CLASS,
    wrap: |datatype, range| AxiomBody::DatatypeDefinition { datatype, range },
    parts: |body| match body {
        AxiomBody::DatatypeDefinition { datatype, range } => Some((datatype, range)),
        _ => None,
    },
};

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use owlbridge_graph::{Graph, Node, Triple};
    use owlbridge_model::vocab::{rdf, xsd};
    use owlbridge_model::{Axiom, EntityType, Facet, FacetRestriction, Iri, Literal};

    use super::*;
    use crate::codec::Writer;
    use crate::config::LoaderConfig;
    use crate::translators::class::EQUIVALENT_CLASSES;
    use crate::translators::object_property::{
        DISJOINT_OBJECT_PROPERTIES, FUNCTIONAL_OBJECT_PROPERTY, OBJECT_PROPERTY_RANGE,
    };
    use crate::translators::AxiomTranslator;

    fn dp(name: &str) -> DataProperty {
        DataProperty::new(format!("http://example.com/{name}"))
    }

    fn count(translator: &dyn AxiomTranslator, graph: &Graph) -> usize {
        translator.statements(graph, &LoaderConfig::default()).count()
    }

    #[test]
    fn range_and_functional_are_told_apart_from_object_kinds() {
        let range = Axiom::new(AxiomBody::DataPropertyRange {
            property: dp("age"),
            range: DataRange::datatype(xsd::INTEGER),
        });
        let functional = Axiom::new(AxiomBody::FunctionalDataProperty(dp("age")));
        let mut graph = Graph::new();
        DATA_PROPERTY_RANGE.write(&range, &mut graph).expect("range");
        FUNCTIONAL_DATA_PROPERTY.write(&functional, &mut graph).expect("functional");

        assert_eq!(count(&DATA_PROPERTY_RANGE, &graph), 1);
        assert_eq!(count(&FUNCTIONAL_DATA_PROPERTY, &graph), 1);
        assert_eq!(count(&OBJECT_PROPERTY_RANGE, &graph), 0);
        assert_eq!(count(&FUNCTIONAL_OBJECT_PROPERTY, &graph), 0);

        let config = LoaderConfig::default();
        let statement = DATA_PROPERTY_RANGE
            .statements(&graph, &config)
            .next()
            .expect("statement");
        let read = DATA_PROPERTY_RANGE.read(&statement, &config).expect("read");
        assert_eq!(read.object(), &range);
    }

    #[test]
    fn disjoint_data_properties_list() {
        let axiom = Axiom::new(AxiomBody::DisjointDataProperties(
            [dp("a"), dp("b"), dp("c")].into(),
        ));
        let mut graph = Graph::new();
        DISJOINT_DATA_PROPERTIES.write(&axiom, &mut graph).expect("write");

        assert_eq!(count(&DISJOINT_OBJECT_PROPERTIES, &graph), 0);
        let config = LoaderConfig::default();
        let statement = DISJOINT_DATA_PROPERTIES
            .statements(&graph, &config)
            .next()
            .expect("statement");
        let read = DISJOINT_DATA_PROPERTIES.read(&statement, &config).expect("read");
        assert_eq!(read.object(), &axiom);
        assert_eq!(read.triples().len(), graph.len());
    }

    #[test]
    fn punned_disjoint_properties_read_as_object_properties() {
        let mut graph = Graph::new();
        let members: Vec<Node> = ["a", "b", "c"]
            .iter()
            .map(|name| {
                let iri = Iri::new(format!("http://example.com/{name}"));
                let mut writer = Writer::new(&mut graph);
                writer.declare(&iri, EntityType::ObjectProperty);
                writer.declare(&iri, EntityType::DataProperty)
            })
            .collect();
        let head = graph.write_list(members);
        let root = graph.fresh_blank();
        graph.add(Triple::new(root.clone(), owl::MEMBERS, head));
        graph.add(Triple::new(root, rdf::TYPE, Node::iri(owl::ALL_DISJOINT_PROPERTIES)));

        assert_eq!(count(&DISJOINT_OBJECT_PROPERTIES, &graph), 1);
        assert_eq!(count(&DISJOINT_DATA_PROPERTIES, &graph), 0);
    }

    #[test]
    fn datatype_definition_is_not_an_equivalent_classes_axiom() {
        let axiom = Axiom::new(AxiomBody::DatatypeDefinition {
            datatype: Datatype::new("http://example.com/adult_age"),
            range: DataRange::Restriction {
                datatype: Datatype::new(xsd::INTEGER),
                facets: BTreeSet::from([FacetRestriction::new(
                    Facet::MinInclusive,
                    Literal::integer(18),
                )]),
            },
        });
        let mut graph = Graph::new();
        DATATYPE_DEFINITION.write(&axiom, &mut graph).expect("write");

        assert_eq!(count(&EQUIVALENT_CLASSES, &graph), 0);
        let config = LoaderConfig::default();
        let statement = DATATYPE_DEFINITION
            .statements(&graph, &config)
            .next()
            .expect("statement");
        let read = DATATYPE_DEFINITION.read(&statement, &config).expect("read");
        assert_eq!(read.into_object(), axiom);
    }
}
