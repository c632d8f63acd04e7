use std::collections::BTreeSet;

use owlbridge_graph::{Node, RdfLiteral, Triple};
use owlbridge_model::vocab::{owl, rdfs, xsd};
use owlbridge_model::{ClassExpression, DataRange, FacetRestriction, ObjectPropertyExpression};

use crate::codec::Writer;

impl Writer<'_> {
    pub fn class_expression(&mut self, expression: &ClassExpression) -> Node {
        use ClassExpression as CE;

        match expression {
            CE::Class(c) => self.class(c),
            CE::ObjectIntersectionOf(operands) => {
                self.class_list(owl::INTERSECTION_OF, operands)
            }
            CE::ObjectUnionOf(operands) => self.class_list(owl::UNION_OF, operands),
            CE::ObjectComplementOf(operand) => {
                let inner = self.class_expression(operand);
                let node = self.typed_blank(owl::CLASS);
                self.add(Triple::new(node.clone(), owl::COMPLEMENT_OF, inner));
                node
            }
            CE::ObjectOneOf(individuals) => {
                let members = individuals.iter().map(|i| self.individual(i)).collect();
                let head = self.list(members);
                let node = self.typed_blank(owl::CLASS);
                self.add(Triple::new(node.clone(), owl::ONE_OF, head));
                node
            }
            CE::ObjectSomeValuesFrom { property, filler } => {
                let filler = self.class_expression(filler);
                let node = self.object_restriction(property);
                self.add(Triple::new(node.clone(), owl::SOME_VALUES_FROM, filler));
                node
            }
            CE::ObjectAllValuesFrom { property, filler } => {
                let filler = self.class_expression(filler);
                let node = self.object_restriction(property);
                self.add(Triple::new(node.clone(), owl::ALL_VALUES_FROM, filler));
                node
            }
            CE::ObjectHasValue {
                property,
                individual,
            } => {
                let value = self.individual(individual);
                let node = self.object_restriction(property);
                self.add(Triple::new(node.clone(), owl::HAS_VALUE, value));
                node
            }
            CE::ObjectHasSelf(property) => {
                let node = self.object_restriction(property);
                self.add(Triple::new(
                    node.clone(),
                    owl::HAS_SELF,
                    RdfLiteral::typed("true", xsd::BOOLEAN),
                ));
                node
            }
            CE::ObjectCardinality {
                kind,
                cardinality,
                property,
                filler,
            } => {
                let filler = filler.as_ref().map(|f| self.class_expression(f));
                let node = self.object_restriction(property);
                let predicate = match filler {
                    Some(_) => kind.qualified_predicate(),
                    None => kind.unqualified_predicate(),
                };
                self.add(Triple::new(node.clone(), predicate, cardinality_literal(*cardinality)));
                if let Some(filler) = filler {
                    self.add(Triple::new(node.clone(), owl::ON_CLASS, filler));
                }
                node
            }
            CE::DataSomeValuesFrom { property, range } => {
                let range = self.data_range(range);
                let node = self.data_restriction(property);
                self.add(Triple::new(node.clone(), owl::SOME_VALUES_FROM, range));
                node
            }
            CE::DataAllValuesFrom { property, range } => {
                let range = self.data_range(range);
                let node = self.data_restriction(property);
                self.add(Triple::new(node.clone(), owl::ALL_VALUES_FROM, range));
                node
            }
            CE::DataHasValue { property, value } => {
                let value = self.literal(value);
                let node = self.data_restriction(property);
                self.add(Triple::new(node.clone(), owl::HAS_VALUE, value));
                node
            }
            CE::DataCardinality {
                kind,
                cardinality,
                property,
                range,
            } => {
                let range = range.as_ref().map(|r| self.data_range(r));
                let node = self.data_restriction(property);
                let predicate = match range {
                    Some(_) => kind.qualified_predicate(),
                    None => kind.unqualified_predicate(),
                };
                self.add(Triple::new(node.clone(), predicate, cardinality_literal(*cardinality)));
                if let Some(range) = range {
                    self.add(Triple::new(node.clone(), owl::ON_DATA_RANGE, range));
                }
                node
            }
        }
    }

    pub fn data_range(&mut self, range: &DataRange) -> Node {
        match range {
            DataRange::Datatype(d) => self.datatype(d),
            DataRange::IntersectionOf(operands) => {
                self.data_range_list(owl::INTERSECTION_OF, operands)
            }
            DataRange::UnionOf(operands) => self.data_range_list(owl::UNION_OF, operands),
            DataRange::ComplementOf(operand) => {
                let inner = self.data_range(operand);
                let node = self.typed_blank(rdfs::DATATYPE);
                self.add(Triple::new(node.clone(), owl::DATATYPE_COMPLEMENT_OF, inner));
                node
            }
            DataRange::OneOf(values) => {
                let members = values.iter().map(|v| self.literal(v)).collect();
                let head = self.list(members);
                let node = self.typed_blank(rdfs::DATATYPE);
                self.add(Triple::new(node.clone(), owl::ONE_OF, head));
                node
            }
            DataRange::Restriction { datatype, facets } => {
                let base = self.datatype(datatype);
                let members = facets.iter().map(|f| self.facet_restriction(f)).collect();
                let head = self.list(members);
                let node = self.typed_blank(rdfs::DATATYPE);
                self.add(Triple::new(node.clone(), owl::ON_DATATYPE, base));
                self.add(Triple::new(node.clone(), owl::WITH_RESTRICTIONS, head));
                node
            }
        }
    }

    fn class_list(&mut self, predicate: &str, operands: &BTreeSet<ClassExpression>) -> Node {
        let members = operands.iter().map(|o| self.class_expression(o)).collect();
        let head = self.list(members);
        let node = self.typed_blank(owl::CLASS);
        self.add(Triple::new(node.clone(), predicate, head));
        node
    }

    fn data_range_list(&mut self, predicate: &str, operands: &BTreeSet<DataRange>) -> Node {
        let members = operands.iter().map(|o| self.data_range(o)).collect();
        let head = self.list(members);
        let node = self.typed_blank(rdfs::DATATYPE);
        self.add(Triple::new(node.clone(), predicate, head));
        node
    }

    fn object_restriction(&mut self, property: &ObjectPropertyExpression) -> Node {
        let property = self.object_property_expression(property);
        let node = self.typed_blank(owl::RESTRICTION);
        self.add(Triple::new(node.clone(), owl::ON_PROPERTY, property));
        node
    }

    fn data_restriction(&mut self, property: &owlbridge_model::DataProperty) -> Node {
        let property = self.data_property(property);
        let node = self.typed_blank(owl::RESTRICTION);
        self.add(Triple::new(node.clone(), owl::ON_PROPERTY, property));
        node
    }

    fn facet_restriction(&mut self, restriction: &FacetRestriction) -> Node {
        let value = self.literal(&restriction.value);
        let node = self.fresh();
        self.add(Triple::new(node.clone(), restriction.facet.iri(), value));
        node
    }
}

fn cardinality_literal(n: u32) -> RdfLiteral {
    RdfLiteral::typed(n.to_string(), xsd::NON_NEGATIVE_INTEGER)
}
