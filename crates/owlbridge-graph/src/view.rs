//! Typed views over graph nodes.
//!
//! These answer "can this node be read as X?" without decoding anything:
//! entity declarations (with the built-in vocabulary treated as implicitly
//! declared), the structural role of blank nodes, and the shape of class
//! expressions, data ranges and SWRL atoms.

use owlbridge_model::vocab::{builtin, owl, rdf, rdfs, swrl};
use owlbridge_model::{CardinalityKind, EntityType, Iri};

use crate::graph::Graph;
use crate::node::{Node, Triple};

/// What a blank node is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankRole {
    /// `owl:Axiom` / `owl:Annotation` reification node.
    Reification,
    /// Root of an axiom without a named subject (`owl:AllDisjointClasses`, `swrl:Imp`, ...).
    AxiomRoot,
    ClassExpression,
    DataRange,
    SwrlAtom,
    ListCell,
    InverseProperty,
    FacetRestriction,
    /// None of the above.
    AnonymousIndividual,
}

/// Types whose instances are anonymous axiom roots carrying annotations directly.
pub const AXIOM_ROOT_TYPES: &[&str] = &[
    owl::ALL_DISJOINT_CLASSES,
    owl::ALL_DISJOINT_PROPERTIES,
    owl::ALL_DIFFERENT,
    owl::NEGATIVE_PROPERTY_ASSERTION,
    swrl::IMP,
];

pub const ATOM_TYPES: &[&str] = &[
    swrl::CLASS_ATOM,
    swrl::DATA_RANGE_ATOM,
    swrl::INDIVIDUAL_PROPERTY_ATOM,
    swrl::DATAVALUED_PROPERTY_ATOM,
    swrl::BUILTIN_ATOM,
    swrl::SAME_INDIVIDUAL_ATOM,
    swrl::DIFFERENT_INDIVIDUALS_ATOM,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassShape {
    Named,
    IntersectionOf,
    UnionOf,
    ComplementOf,
    OneOf,
    ObjectSomeValuesFrom,
    ObjectAllValuesFrom,
    ObjectHasValue,
    ObjectHasSelf,
    ObjectCardinality { kind: CardinalityKind, qualified: bool },
    DataSomeValuesFrom,
    DataAllValuesFrom,
    DataHasValue,
    DataCardinality { kind: CardinalityKind, qualified: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataRangeShape {
    Named,
    IntersectionOf,
    UnionOf,
    ComplementOf,
    OneOf,
    Restriction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomShape {
    Class,
    DataRange,
    ObjectProperty,
    DataProperty,
    BuiltIn,
    SameIndividuals,
    DifferentIndividuals,
}

impl AtomShape {
    pub fn type_iri(self) -> &'static str {
        match self {
            AtomShape::Class => swrl::CLASS_ATOM,
            AtomShape::DataRange => swrl::DATA_RANGE_ATOM,
            AtomShape::ObjectProperty => swrl::INDIVIDUAL_PROPERTY_ATOM,
            AtomShape::DataProperty => swrl::DATAVALUED_PROPERTY_ATOM,
            AtomShape::BuiltIn => swrl::BUILTIN_ATOM,
            AtomShape::SameIndividuals => swrl::SAME_INDIVIDUAL_ATOM,
            AtomShape::DifferentIndividuals => swrl::DIFFERENT_INDIVIDUALS_ATOM,
        }
    }

    fn from_type_iri(iri: &str) -> Option<Self> {
        [
            AtomShape::Class,
            AtomShape::DataRange,
            AtomShape::ObjectProperty,
            AtomShape::DataProperty,
            AtomShape::BuiltIn,
            AtomShape::SameIndividuals,
            AtomShape::DifferentIndividuals,
        ]
        .into_iter()
        .find(|s| s.type_iri() == iri)
    }
}

// ============================================================================
// Entity views
// ============================================================================

impl Graph {
    /// The `rdf:type` triple declaring `iri` as an entity of `entity_type`.
    pub fn declaration(&self, iri: &Iri, entity_type: EntityType) -> Option<Triple> {
        let triple = Triple::new(iri.clone(), rdf::TYPE, Node::iri(entity_type.type_iri()));
        self.contains(&triple).then_some(triple)
    }

    pub fn is_declared(&self, iri: &Iri, entity_type: EntityType) -> bool {
        self.has_type(&Node::Iri(iri.clone()), entity_type.type_iri())
    }

    pub fn is_ontology_header(&self, node: &Node) -> bool {
        self.has_type(node, owl::ONTOLOGY)
    }

    /// Declared or built-in class. Undeclared user IRIs are accepted in class
    /// position unless declared as a datatype.
    pub fn is_class_iri(&self, iri: &Iri) -> bool {
        if builtin::is_class(iri.as_str()) || self.is_declared(iri, EntityType::Class) {
            return true;
        }
        !builtin::is_reserved(iri.as_str()) && !self.is_declared(iri, EntityType::Datatype)
    }

    pub fn is_datatype_iri(&self, iri: &Iri) -> bool {
        builtin::is_datatype(iri.as_str()) || self.is_declared(iri, EntityType::Datatype)
    }

    pub fn is_object_property(&self, iri: &Iri) -> bool {
        builtin::is_object_property(iri.as_str())
            || self.is_declared(iri, EntityType::ObjectProperty)
    }

    pub fn is_data_property(&self, iri: &Iri) -> bool {
        builtin::is_data_property(iri.as_str()) || self.is_declared(iri, EntityType::DataProperty)
    }

    pub fn is_annotation_property(&self, iri: &Iri) -> bool {
        builtin::is_annotation_property(iri.as_str())
            || self.is_declared(iri, EntityType::AnnotationProperty)
    }

    pub fn is_swrl_variable(&self, node: &Node) -> bool {
        matches!(node, Node::Iri(_)) && self.has_type(node, swrl::VARIABLE)
    }

    /// Named property or `_:x owl:inverseOf P` with `P` a named object property.
    pub fn is_object_property_expression(&self, node: &Node) -> bool {
        match node {
            Node::Iri(iri) => self.is_object_property(iri),
            Node::Blank(_) => match self.unique(node, owl::INVERSE_OF) {
                Some(t) => matches!(&t.object, Node::Iri(p) if self.is_object_property(p)),
                None => false,
            },
            Node::Literal(_) => false,
        }
    }

    pub fn is_data_property_node(&self, node: &Node) -> bool {
        matches!(node, Node::Iri(iri) if self.is_data_property(iri))
    }

    pub fn is_annotation_property_node(&self, node: &Node) -> bool {
        matches!(node, Node::Iri(iri) if self.is_annotation_property(iri))
    }

    /// Named individuals are any non-vocabulary IRI; blank nodes qualify only
    /// when they play no structural role.
    pub fn is_individual(&self, node: &Node) -> bool {
        match node {
            Node::Iri(iri) => !builtin::is_reserved(iri.as_str()) && !self.is_swrl_variable(node),
            Node::Blank(_) => self.blank_role(node) == BlankRole::AnonymousIndividual,
            Node::Literal(_) => false,
        }
    }

    pub fn is_class_expression(&self, node: &Node) -> bool {
        self.class_shape(node).is_some()
    }

    pub fn is_data_range(&self, node: &Node) -> bool {
        self.data_range_shape(node).is_some()
    }
}

// ============================================================================
// Structural shapes
// ============================================================================

impl Graph {
    pub fn blank_role(&self, node: &Node) -> BlankRole {
        let types: Vec<&Iri> = self.types(node).collect();
        let typed = |iri: &str| types.iter().any(|t| t.as_str() == iri);

        if typed(owl::AXIOM) || typed(owl::ANNOTATION) {
            BlankRole::Reification
        } else if AXIOM_ROOT_TYPES.iter().copied().any(|t| typed(t)) {
            BlankRole::AxiomRoot
        } else if typed(owl::CLASS) || typed(owl::RESTRICTION) {
            BlankRole::ClassExpression
        } else if typed(rdfs::DATATYPE) {
            BlankRole::DataRange
        } else if ATOM_TYPES.iter().copied().any(|t| typed(t)) {
            BlankRole::SwrlAtom
        } else if typed(rdf::LIST) || self.has_predicate(node, rdf::FIRST) {
            BlankRole::ListCell
        } else if self.has_predicate(node, owl::INVERSE_OF) {
            BlankRole::InverseProperty
        } else if self
            .triples_with_subject(node)
            .any(|t| builtin::is_facet(t.predicate.as_str()))
        {
            BlankRole::FacetRestriction
        } else {
            BlankRole::AnonymousIndividual
        }
    }

    /// Blank node typed as a reification node (`owl:Axiom` or `owl:Annotation`).
    pub fn is_reification_node(&self, node: &Node) -> bool {
        node.is_blank() && self.blank_role(node) == BlankRole::Reification
    }

    /// Node typed as one of [`AXIOM_ROOT_TYPES`].
    pub fn is_axiom_root(&self, node: &Node) -> bool {
        self.types(node)
            .any(|t| AXIOM_ROOT_TYPES.contains(&t.as_str()))
    }

    pub fn class_shape(&self, node: &Node) -> Option<ClassShape> {
        match node {
            Node::Iri(iri) => self.is_class_iri(iri).then_some(ClassShape::Named),
            Node::Blank(_) if self.has_type(node, owl::RESTRICTION) => self.restriction_shape(node),
            Node::Blank(_) if self.has_type(node, owl::CLASS) => {
                if self.has_predicate(node, owl::INTERSECTION_OF) {
                    Some(ClassShape::IntersectionOf)
                } else if self.has_predicate(node, owl::UNION_OF) {
                    Some(ClassShape::UnionOf)
                } else if self.has_predicate(node, owl::COMPLEMENT_OF) {
                    Some(ClassShape::ComplementOf)
                } else if self.has_predicate(node, owl::ONE_OF) {
                    Some(ClassShape::OneOf)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    fn restriction_shape(&self, node: &Node) -> Option<ClassShape> {
        let property = &self.unique(node, owl::ON_PROPERTY)?.object;
        let object_ok = self.is_object_property_expression(property);
        let data_ok = self.is_data_property_node(property);
        if !object_ok && !data_ok {
            return None;
        }
        // A punned property is resolved by what the filler looks like.
        let is_data = |filler: Option<&Node>| -> bool {
            match (object_ok, data_ok) {
                (true, false) => false,
                (false, true) => true,
                _ => filler.is_some_and(|f| f.is_literal() || self.is_data_range(f)),
            }
        };

        for (predicate, object_shape, data_shape) in [
            (
                owl::SOME_VALUES_FROM,
                ClassShape::ObjectSomeValuesFrom,
                ClassShape::DataSomeValuesFrom,
            ),
            (owl::ALL_VALUES_FROM, ClassShape::ObjectAllValuesFrom, ClassShape::DataAllValuesFrom),
            (owl::HAS_VALUE, ClassShape::ObjectHasValue, ClassShape::DataHasValue),
        ] {
            if let Some(t) = self.unique(node, predicate) {
                return Some(if is_data(Some(&t.object)) { data_shape } else { object_shape });
            }
        }

        if object_ok && self.has_predicate(node, owl::HAS_SELF) {
            return Some(ClassShape::ObjectHasSelf);
        }

        let cardinality = self
            .triples_with_subject(node)
            .find_map(|t| CardinalityKind::from_predicate(t.predicate.as_str()));
        if let Some((kind, qualified)) = cardinality {
            let data = if qualified {
                if self.has_predicate(node, owl::ON_DATA_RANGE) {
                    true
                } else if self.has_predicate(node, owl::ON_CLASS) {
                    false
                } else {
                    return None;
                }
            } else {
                is_data(None)
            };
            if (data && !data_ok) || (!data && !object_ok) {
                return None;
            }
            return Some(if data {
                ClassShape::DataCardinality { kind, qualified }
            } else {
                ClassShape::ObjectCardinality { kind, qualified }
            });
        }

        None
    }

    pub fn data_range_shape(&self, node: &Node) -> Option<DataRangeShape> {
        match node {
            Node::Iri(iri) => self.is_datatype_iri(iri).then_some(DataRangeShape::Named),
            Node::Blank(_) if self.has_type(node, rdfs::DATATYPE) => {
                if self.has_predicate(node, owl::ON_DATATYPE)
                    && self.has_predicate(node, owl::WITH_RESTRICTIONS)
                {
                    Some(DataRangeShape::Restriction)
                } else if self.has_predicate(node, owl::INTERSECTION_OF) {
                    Some(DataRangeShape::IntersectionOf)
                } else if self.has_predicate(node, owl::UNION_OF) {
                    Some(DataRangeShape::UnionOf)
                } else if self.has_predicate(node, owl::DATATYPE_COMPLEMENT_OF) {
                    Some(DataRangeShape::ComplementOf)
                } else if self.has_predicate(node, owl::ONE_OF) {
                    Some(DataRangeShape::OneOf)
                } else {
                    None
                }
            }
            _ => None,
        }
    }

    pub fn atom_shape(&self, node: &Node) -> Option<AtomShape> {
        self.types(node)
            .find_map(|t| AtomShape::from_type_iri(t.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RdfLiteral;
    use owlbridge_model::vocab::xsd;

    fn ex(name: &str) -> Node {
        Node::iri(format!("http://example.com/{name}"))
    }

    fn declare(graph: &mut Graph, node: &Node, type_iri: &str) {
        graph.add(Triple::new(node.clone(), rdf::TYPE, Node::iri(type_iri)));
    }

    #[test]
    fn builtins_count_as_declared() {
        let graph = Graph::new();
        assert!(graph.is_annotation_property(&Iri::new(rdfs::LABEL)));
        assert!(graph.is_class_iri(&Iri::new(owl::THING)));
        assert!(graph.is_datatype_iri(&Iri::new(xsd::INTEGER)));
        assert!(!graph.is_class_iri(&Iri::new(owl::RESTRICTION)));
        assert!(!graph.is_object_property(&Iri::new("http://example.com/p")));
    }

    #[test]
    fn blank_roles_follow_types_and_predicates() {
        let mut graph = Graph::new();
        let reif = Node::blank("r");
        declare(&mut graph, &reif, owl::AXIOM);
        let root = Node::blank("d");
        declare(&mut graph, &root, owl::ALL_DISJOINT_CLASSES);
        let restriction = Node::blank("x");
        declare(&mut graph, &restriction, owl::RESTRICTION);
        let cell = Node::blank("l");
        graph.add(Triple::new(cell.clone(), rdf::FIRST, ex("A")));
        let facet = Node::blank("f");
        graph.add(Triple::new(
            facet.clone(),
            xsd::MIN_INCLUSIVE,
            RdfLiteral::typed("1", xsd::INTEGER),
        ));
        let person = Node::blank("p");
        declare(&mut graph, &person, "http://example.com/Person");

        assert_eq!(graph.blank_role(&reif), BlankRole::Reification);
        assert_eq!(graph.blank_role(&root), BlankRole::AxiomRoot);
        assert_eq!(graph.blank_role(&restriction), BlankRole::ClassExpression);
        assert_eq!(graph.blank_role(&cell), BlankRole::ListCell);
        assert_eq!(graph.blank_role(&facet), BlankRole::FacetRestriction);
        assert_eq!(graph.blank_role(&person), BlankRole::AnonymousIndividual);
        assert!(graph.is_individual(&person));
        assert!(!graph.is_individual(&cell));
    }

    #[test]
    fn restriction_shape_uses_property_declarations() {
        let mut graph = Graph::new();
        let knows = ex("knows");
        let age = ex("age");
        declare(&mut graph, &knows, owl::OBJECT_PROPERTY);
        declare(&mut graph, &age, owl::DATATYPE_PROPERTY);

        let some = Node::blank("s");
        declare(&mut graph, &some, owl::RESTRICTION);
        graph.add(Triple::new(some.clone(), owl::ON_PROPERTY, knows.clone()));
        graph.add(Triple::new(some.clone(), owl::SOME_VALUES_FROM, ex("Person")));
        assert_eq!(graph.class_shape(&some), Some(ClassShape::ObjectSomeValuesFrom));

        let min = Node::blank("m");
        declare(&mut graph, &min, owl::RESTRICTION);
        graph.add(Triple::new(min.clone(), owl::ON_PROPERTY, age));
        graph.add(Triple::new(
            min.clone(),
            owl::MIN_CARDINALITY,
            RdfLiteral::typed("1", xsd::NON_NEGATIVE_INTEGER),
        ));
        assert_eq!(
            graph.class_shape(&min),
            Some(ClassShape::DataCardinality {
                kind: CardinalityKind::Min,
                qualified: false
            })
        );
    }

    #[test]
    fn restriction_on_unknown_property_has_no_shape() {
        let mut graph = Graph::new();
        let r = Node::blank("r");
        declare(&mut graph, &r, owl::RESTRICTION);
        graph.add(Triple::new(r.clone(), owl::ON_PROPERTY, ex("undeclared")));
        graph.add(Triple::new(r.clone(), owl::SOME_VALUES_FROM, ex("A")));
        assert_eq!(graph.class_shape(&r), None);
    }
}
