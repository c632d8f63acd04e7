use std::collections::BTreeSet;

use owlbridge_graph::{ClassShape, DataRangeShape, Node, RdfList};
use owlbridge_model::vocab::{owl, rdfs};
use owlbridge_model::{
    CardinalityKind, ClassExpression, DataProperty, DataRange, Facet, FacetRestriction,
    ObjectPropertyExpression,
};

use super::ExpansionPath;
use crate::codec::Reader;
use crate::error::{Result, TranslateError};
use crate::translated::Translated;

impl<'g> Reader<'g> {
    pub fn class_expression(&self, node: &Node) -> Result<Translated<ClassExpression>> {
        self.class_expression_in(node, &mut ExpansionPath::new())
    }

    pub fn data_range(&self, node: &Node) -> Result<Translated<DataRange>> {
        self.data_range_in(node, &mut ExpansionPath::new())
    }

    pub fn class_expression_in(
        &self,
        node: &Node,
        path: &mut ExpansionPath,
    ) -> Result<Translated<ClassExpression>> {
        let shape = self
            .graph()
            .class_shape(node)
            .ok_or_else(|| TranslateError::unsupported(node, "a class expression"))?;
        if shape == ClassShape::Named {
            return Ok(self.class(node)?.map(ClassExpression::Class));
        }
        path.enter(node, |path| {
            let header = self.typing(node, &[owl::CLASS, owl::RESTRICTION]);
            Ok(self.anonymous_class(node, shape, path)?.with_triples(header))
        })
    }

    pub fn data_range_in(
        &self,
        node: &Node,
        path: &mut ExpansionPath,
    ) -> Result<Translated<DataRange>> {
        let shape = self
            .graph()
            .data_range_shape(node)
            .ok_or_else(|| TranslateError::unsupported(node, "a data range"))?;
        if shape == DataRangeShape::Named {
            return Ok(self.datatype(node)?.map(DataRange::Datatype));
        }
        path.enter(node, |path| {
            let header = self.typing(node, &[rdfs::DATATYPE]);
            Ok(self.anonymous_data_range(node, shape, path)?.with_triples(header))
        })
    }

    fn anonymous_class(
        &self,
        node: &Node,
        shape: ClassShape,
        path: &mut ExpansionPath,
    ) -> Result<Translated<ClassExpression>> {
        use ClassExpression as CE;

        let expression = match shape {
            ClassShape::Named => self.class(node)?.map(CE::Class),
            ClassShape::IntersectionOf => self
                .class_set(node, owl::INTERSECTION_OF, path)?
                .map(CE::ObjectIntersectionOf),
            ClassShape::UnionOf => self
                .class_set(node, owl::UNION_OF, path)?
                .map(CE::ObjectUnionOf),
            ClassShape::ComplementOf => {
                let link = self.required(node, owl::COMPLEMENT_OF)?;
                self.class_expression_in(&link.object, path)?
                    .map(|c| CE::ObjectComplementOf(Box::new(c)))
                    .with_triple(link.clone())
            }
            ClassShape::OneOf => {
                let list = self.required_list(node, owl::ONE_OF)?;
                let members: Translated<BTreeSet<_>> = list
                    .members
                    .iter()
                    .map(|m| self.individual(m))
                    .collect::<Result<_>>()?;
                members.map(CE::ObjectOneOf).with_triples(list.triples)
            }
            ClassShape::ObjectSomeValuesFrom | ClassShape::ObjectAllValuesFrom => {
                let predicate = if shape == ClassShape::ObjectSomeValuesFrom {
                    owl::SOME_VALUES_FROM
                } else {
                    owl::ALL_VALUES_FROM
                };
                let property = self.restricted_object_property(node)?;
                let link = self.required(node, predicate)?;
                let filler = self.class_expression_in(&link.object, path)?;
                property
                    .zip(filler)
                    .map(|(property, filler)| {
                        let filler = Box::new(filler);
                        if shape == ClassShape::ObjectSomeValuesFrom {
                            CE::ObjectSomeValuesFrom { property, filler }
                        } else {
                            CE::ObjectAllValuesFrom { property, filler }
                        }
                    })
                    .with_triple(link.clone())
            }
            ClassShape::ObjectHasValue => {
                let property = self.restricted_object_property(node)?;
                let link = self.required(node, owl::HAS_VALUE)?;
                property
                    .zip(self.individual(&link.object)?)
                    .map(|(property, individual)| CE::ObjectHasValue {
                        property,
                        individual,
                    })
                    .with_triple(link.clone())
            }
            ClassShape::ObjectHasSelf => {
                let link = self.required(node, owl::HAS_SELF)?;
                self.restricted_object_property(node)?
                    .map(CE::ObjectHasSelf)
                    .with_triple(link.clone())
            }
            ClassShape::ObjectCardinality { kind, qualified } => {
                let property = self.restricted_object_property(node)?;
                let cardinality = self.cardinality(node, kind, qualified)?;
                let filler = if qualified {
                    let link = self.required(node, owl::ON_CLASS)?;
                    self.class_expression_in(&link.object, path)?
                        .map(|c| Some(Box::new(c)))
                        .with_triple(link.clone())
                } else {
                    Translated::leaf(None)
                };
                property
                    .zip(cardinality)
                    .zip(filler)
                    .map(|((property, cardinality), filler)| CE::ObjectCardinality {
                        kind,
                        cardinality,
                        property,
                        filler,
                    })
            }
            ClassShape::DataSomeValuesFrom | ClassShape::DataAllValuesFrom => {
                let predicate = if shape == ClassShape::DataSomeValuesFrom {
                    owl::SOME_VALUES_FROM
                } else {
                    owl::ALL_VALUES_FROM
                };
                let property = self.restricted_data_property(node)?;
                let link = self.required(node, predicate)?;
                let range = self.data_range_in(&link.object, path)?;
                property
                    .zip(range)
                    .map(|(property, range)| {
                        if shape == ClassShape::DataSomeValuesFrom {
                            CE::DataSomeValuesFrom { property, range }
                        } else {
                            CE::DataAllValuesFrom { property, range }
                        }
                    })
                    .with_triple(link.clone())
            }
            ClassShape::DataHasValue => {
                let property = self.restricted_data_property(node)?;
                let link = self.required(node, owl::HAS_VALUE)?;
                property
                    .zip(self.literal(&link.object)?)
                    .map(|(property, value)| CE::DataHasValue { property, value })
                    .with_triple(link.clone())
            }
            ClassShape::DataCardinality { kind, qualified } => {
                let property = self.restricted_data_property(node)?;
                let cardinality = self.cardinality(node, kind, qualified)?;
                let range = if qualified {
                    let link = self.required(node, owl::ON_DATA_RANGE)?;
                    self.data_range_in(&link.object, path)?
                        .map(Some)
                        .with_triple(link.clone())
                } else {
                    Translated::leaf(None)
                };
                property
                    .zip(cardinality)
                    .zip(range)
                    .map(|((property, cardinality), range)| CE::DataCardinality {
                        kind,
                        cardinality,
                        property,
                        range,
                    })
            }
        };
        Ok(expression)
    }

    fn anonymous_data_range(
        &self,
        node: &Node,
        shape: DataRangeShape,
        path: &mut ExpansionPath,
    ) -> Result<Translated<DataRange>> {
        let range = match shape {
            DataRangeShape::Named => self.datatype(node)?.map(DataRange::Datatype),
            DataRangeShape::IntersectionOf => self
                .data_range_set(node, owl::INTERSECTION_OF, path)?
                .map(DataRange::IntersectionOf),
            DataRangeShape::UnionOf => self
                .data_range_set(node, owl::UNION_OF, path)?
                .map(DataRange::UnionOf),
            DataRangeShape::ComplementOf => {
                let link = self.required(node, owl::DATATYPE_COMPLEMENT_OF)?;
                self.data_range_in(&link.object, path)?
                    .map(|r| DataRange::ComplementOf(Box::new(r)))
                    .with_triple(link.clone())
            }
            DataRangeShape::OneOf => {
                let list = self.required_list(node, owl::ONE_OF)?;
                let values: Translated<BTreeSet<_>> = list
                    .members
                    .iter()
                    .map(|m| self.literal(m))
                    .collect::<Result<_>>()?;
                values.map(DataRange::OneOf).with_triples(list.triples)
            }
            DataRangeShape::Restriction => {
                let link = self.required(node, owl::ON_DATATYPE)?;
                let datatype = self.datatype(&link.object)?.with_triple(link.clone());
                let list = self.required_list(node, owl::WITH_RESTRICTIONS)?;
                let facets: Translated<BTreeSet<_>> = list
                    .members
                    .iter()
                    .map(|m| self.facet_restriction(m))
                    .collect::<Result<_>>()?;
                datatype
                    .zip(facets.with_triples(list.triples))
                    .map(|(datatype, facets)| DataRange::Restriction { datatype, facets })
            }
        };
        Ok(range)
    }

    fn class_set(
        &self,
        node: &Node,
        predicate: &str,
        path: &mut ExpansionPath,
    ) -> Result<Translated<BTreeSet<ClassExpression>>> {
        let RdfList {
            members, triples, ..
        } = self.required_list(node, predicate)?;
        let operands: Translated<BTreeSet<_>> = members
            .iter()
            .map(|m| self.class_expression_in(m, path))
            .collect::<Result<_>>()?;
        Ok(operands.with_triples(triples))
    }

    fn data_range_set(
        &self,
        node: &Node,
        predicate: &str,
        path: &mut ExpansionPath,
    ) -> Result<Translated<BTreeSet<DataRange>>> {
        let RdfList {
            members, triples, ..
        } = self.required_list(node, predicate)?;
        let operands: Translated<BTreeSet<_>> = members
            .iter()
            .map(|m| self.data_range_in(m, path))
            .collect::<Result<_>>()?;
        Ok(operands.with_triples(triples))
    }

    fn restricted_object_property(
        &self,
        node: &Node,
    ) -> Result<Translated<ObjectPropertyExpression>> {
        let link = self.required(node, owl::ON_PROPERTY)?;
        Ok(self
            .object_property_expression(&link.object)?
            .with_triple(link.clone()))
    }

    fn restricted_data_property(&self, node: &Node) -> Result<Translated<DataProperty>> {
        let link = self.required(node, owl::ON_PROPERTY)?;
        Ok(self.data_property(&link.object)?.with_triple(link.clone()))
    }

    fn cardinality(
        &self,
        node: &Node,
        kind: CardinalityKind,
        qualified: bool,
    ) -> Result<Translated<u32>> {
        let predicate = if qualified {
            kind.qualified_predicate()
        } else {
            kind.unqualified_predicate()
        };
        let link = self.required(node, predicate)?;
        let value = link
            .object
            .as_literal()
            .and_then(|lit| lit.lexical.trim().parse::<u32>().ok())
            .ok_or_else(|| {
                TranslateError::structural(node, format!("{} is not a cardinality", link.object))
            })?;
        Ok(Translated::new(value, [link.clone()]))
    }

    fn facet_restriction(&self, node: &Node) -> Result<Translated<FacetRestriction>> {
        let mut found = self
            .graph()
            .triples_with_subject(node)
            .filter_map(|t| Facet::from_iri(t.predicate.as_str()).map(|f| (f, t)));
        let (facet, triple) = match (found.next(), found.next()) {
            (Some(one), None) => one,
            _ => {
                return Err(TranslateError::structural(
                    node,
                    "facet restriction needs exactly one facet",
                ))
            }
        };
        Ok(self
            .literal(&triple.object)?
            .map(|value| FacetRestriction::new(facet, value))
            .with_triple(triple.clone()))
    }
}

#[cfg(test)]
mod tests {
    use owlbridge_graph::{Graph, RdfLiteral, Triple};
    use owlbridge_model::vocab::{rdf, xsd};
    use owlbridge_model::{Class, Individual, Literal};

    use super::*;
    use crate::config::LoaderConfig;

    fn ex(name: &str) -> Node {
        Node::iri(format!("http://example.com/{name}"))
    }

    fn typed(graph: &mut Graph, node: &Node, type_iri: &str) {
        graph.add(Triple::new(node.clone(), rdf::TYPE, Node::iri(type_iri)));
    }

    #[test]
    fn reads_qualified_cardinality_with_all_triples() {
        let mut graph = Graph::new();
        typed(&mut graph, &ex("hasPart"), owl::OBJECT_PROPERTY);
        let r = Node::blank("r");
        typed(&mut graph, &r, owl::RESTRICTION);
        graph.add(Triple::new(r.clone(), owl::ON_PROPERTY, ex("hasPart")));
        graph.add(Triple::new(
            r.clone(),
            owl::MIN_QUALIFIED_CARDINALITY,
            RdfLiteral::typed("2", xsd::NON_NEGATIVE_INTEGER),
        ));
        graph.add(Triple::new(r.clone(), owl::ON_CLASS, ex("Wheel")));

        let config = LoaderConfig::default();
        let read = Reader::new(&graph, &config)
            .class_expression(&r)
            .expect("restriction");
        assert_eq!(
            read.object(),
            &ClassExpression::ObjectCardinality {
                kind: CardinalityKind::Min,
                cardinality: 2,
                property: ObjectPropertyExpression::named("http://example.com/hasPart"),
                filler: Some(Box::new(ClassExpression::class("http://example.com/Wheel"))),
            }
        );
        assert_eq!(read.triples().len(), graph.len());
    }

    #[test]
    fn self_complement_is_a_cycle() {
        let mut graph = Graph::new();
        let x = Node::blank("x");
        typed(&mut graph, &x, owl::CLASS);
        graph.add(Triple::new(x.clone(), owl::COMPLEMENT_OF, x.clone()));

        let config = LoaderConfig::default();
        let err = Reader::new(&graph, &config)
            .class_expression(&x)
            .expect_err("cycle");
        assert!(matches!(err, TranslateError::Cycle { .. }));
    }

    #[test]
    fn union_through_list_back_to_itself_is_a_cycle() {
        let mut graph = Graph::new();
        let x = Node::blank("x");
        typed(&mut graph, &x, owl::CLASS);
        let head = graph.write_list([ex("A"), x.clone()]);
        graph.add(Triple::new(x.clone(), owl::UNION_OF, head));

        let config = LoaderConfig::default();
        let err = Reader::new(&graph, &config)
            .class_expression(&x)
            .expect_err("cycle");
        assert!(err.to_string().contains("Recursive loop"));
    }

    #[test]
    fn one_of_reads_individuals() {
        let mut graph = Graph::new();
        let x = Node::blank("x");
        typed(&mut graph, &x, owl::CLASS);
        let head = graph.write_list([ex("red"), ex("green")]);
        graph.add(Triple::new(x.clone(), owl::ONE_OF, head));

        let config = LoaderConfig::default();
        let read = Reader::new(&graph, &config)
            .class_expression(&x)
            .expect("enumeration");
        let expected: BTreeSet<_> = [
            Individual::named("http://example.com/red"),
            Individual::named("http://example.com/green"),
        ]
        .into();
        assert_eq!(read.object(), &ClassExpression::ObjectOneOf(expected));
        assert_eq!(read.triples().len(), graph.len());
    }

    #[test]
    fn datatype_restriction_reads_facets() {
        let mut graph = Graph::new();
        let d = Node::blank("d");
        typed(&mut graph, &d, rdfs::DATATYPE);
        graph.add(Triple::new(d.clone(), owl::ON_DATATYPE, Node::iri(xsd::INTEGER)));
        let facet = Node::blank("f");
        graph.add(Triple::new(
            facet.clone(),
            xsd::MIN_INCLUSIVE,
            RdfLiteral::typed("18", xsd::INTEGER),
        ));
        let head = graph.write_list([facet]);
        graph.add(Triple::new(d.clone(), owl::WITH_RESTRICTIONS, head));

        let config = LoaderConfig::default();
        let read = Reader::new(&graph, &config).data_range(&d).expect("restriction");
        match read.object() {
            DataRange::Restriction { datatype, facets } => {
                assert_eq!(datatype.iri().as_str(), xsd::INTEGER);
                assert_eq!(
                    facets.iter().next(),
                    Some(&FacetRestriction::new(
                        Facet::MinInclusive,
                        Literal::typed("18", xsd::INTEGER)
                    ))
                );
            }
            other => panic!("unexpected range {other:?}"),
        }
        assert_eq!(read.triples().len(), graph.len());
    }

    #[test]
    fn named_classes_are_leaves() {
        let graph = Graph::new();
        let config = LoaderConfig::default();
        let read = Reader::new(&graph, &config)
            .class_expression(&ex("Person"))
            .expect("lenient class");
        assert_eq!(
            read.object(),
            &ClassExpression::Class(Class::new("http://example.com/Person"))
        );
        assert!(read.triples().is_empty());
    }
}
