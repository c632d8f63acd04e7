//! Leaf codecs between graph terms and domain values.
//!
//! [`Reader`] turns IRIs, blank nodes and literals into entities,
//! individuals and literals, attaching the declaration triples that justify
//! them. [`Writer`] does the reverse and declares every non-built-in entity
//! it emits.

use owlbridge_graph::{Graph, Node, RdfList, RdfLiteral, Triple};
use owlbridge_model::vocab::{builtin, owl, rdf};
use owlbridge_model::{
    AnnotationProperty, AnnotationSubject, AnnotationValue, AnonymousIndividual, Class,
    DataProperty, Datatype, Entity, EntityType, Individual, Iri, Literal, NamedIndividual,
    ObjectProperty, ObjectPropertyExpression,
};

use crate::config::LoaderConfig;
use crate::error::{Result, TranslateError};
use crate::translated::Translated;

// ============================================================================
// Reading
// ============================================================================

/// Read-side context: the graph being decoded and the loader options.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'g> {
    graph: &'g Graph,
    config: &'g LoaderConfig,
}

impl<'g> Reader<'g> {
    pub fn new(graph: &'g Graph, config: &'g LoaderConfig) -> Self {
        Self { graph, config }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn config(&self) -> &'g LoaderConfig {
        self.config
    }

    /// The single `(node, predicate, ?)` triple.
    pub fn required(&self, node: &Node, predicate: &str) -> Result<&'g Triple> {
        self.graph.unique(node, predicate).ok_or_else(|| {
            TranslateError::structural(node, format!("expected exactly one <{predicate}>"))
        })
    }

    /// Reads the list hanging off `(node, predicate, head)`; the link triple
    /// is included in the returned list's triples.
    pub fn required_list(&self, node: &Node, predicate: &str) -> Result<RdfList> {
        let link = self.required(node, predicate)?;
        let mut list = self.graph.read_list(&link.object)?;
        list.triples.push(link.clone());
        Ok(list)
    }

    /// `rdf:type` triples on `node` whose object is one of `types`.
    pub fn typing(&self, node: &Node, types: &[&str]) -> Vec<Triple> {
        self.graph
            .triples_with_subject(node)
            .filter(|t| {
                t.predicate.as_str() == rdf::TYPE
                    && t.object.as_iri().is_some_and(|o| types.contains(&o.as_str()))
            })
            .cloned()
            .collect()
    }

    fn declared<T>(&self, iri: &Iri, entity_type: EntityType, object: T) -> Translated<T> {
        Translated::new(object, self.graph.declaration(iri, entity_type))
    }

    fn iri<'n>(&self, node: &'n Node, expected: &'static str) -> Result<&'n Iri> {
        node.as_iri()
            .ok_or_else(|| TranslateError::unsupported(node, expected))
    }

    pub fn class(&self, node: &Node) -> Result<Translated<Class>> {
        let iri = self.iri(node, "a class")?;
        if !self.graph.is_class_iri(iri) {
            return Err(TranslateError::unsupported(node, "a class"));
        }
        Ok(self.declared(iri, EntityType::Class, Class(iri.clone())))
    }

    pub fn datatype(&self, node: &Node) -> Result<Translated<Datatype>> {
        let iri = self.iri(node, "a datatype")?;
        if !self.graph.is_datatype_iri(iri) {
            return Err(TranslateError::unsupported(node, "a datatype"));
        }
        Ok(self.declared(iri, EntityType::Datatype, Datatype(iri.clone())))
    }

    pub fn object_property(&self, node: &Node) -> Result<Translated<ObjectProperty>> {
        let iri = self.iri(node, "an object property")?;
        if !self.graph.is_object_property(iri) {
            return Err(TranslateError::unsupported(node, "an object property"));
        }
        Ok(self.declared(iri, EntityType::ObjectProperty, ObjectProperty(iri.clone())))
    }

    /// A named object property or `_:x owl:inverseOf P`.
    pub fn object_property_expression(
        &self,
        node: &Node,
    ) -> Result<Translated<ObjectPropertyExpression>> {
        match node {
            Node::Iri(_) => Ok(self
                .object_property(node)?
                .map(ObjectPropertyExpression::Named)),
            Node::Blank(_) => {
                let link = self.required(node, owl::INVERSE_OF)?;
                if link.object.is_blank() {
                    return Err(TranslateError::structural(
                        node,
                        "inverse of an inverse property expression",
                    ));
                }
                Ok(self
                    .object_property(&link.object)?
                    .map(ObjectPropertyExpression::Inverse)
                    .with_triple(link.clone()))
            }
            Node::Literal(_) => Err(TranslateError::unsupported(
                node,
                "an object property expression",
            )),
        }
    }

    pub fn data_property(&self, node: &Node) -> Result<Translated<DataProperty>> {
        let iri = self.iri(node, "a data property")?;
        if !self.graph.is_data_property(iri) {
            return Err(TranslateError::unsupported(node, "a data property"));
        }
        Ok(self.declared(iri, EntityType::DataProperty, DataProperty(iri.clone())))
    }

    pub fn annotation_property(&self, node: &Node) -> Result<Translated<AnnotationProperty>> {
        let iri = self.iri(node, "an annotation property")?;
        if !self.graph.is_annotation_property(iri) {
            return Err(TranslateError::unsupported(node, "an annotation property"));
        }
        Ok(self.declared(
            iri,
            EntityType::AnnotationProperty,
            AnnotationProperty(iri.clone()),
        ))
    }

    pub fn individual(&self, node: &Node) -> Result<Translated<Individual>> {
        if !self.graph.is_individual(node) {
            return Err(TranslateError::unsupported(node, "an individual"));
        }
        match node {
            Node::Iri(iri) => Ok(self.declared(
                iri,
                EntityType::NamedIndividual,
                Individual::Named(NamedIndividual(iri.clone())),
            )),
            Node::Blank(id) => Ok(Translated::leaf(Individual::Anonymous(
                AnonymousIndividual::new(id.as_str()),
            ))),
            Node::Literal(_) => Err(TranslateError::unsupported(node, "an individual")),
        }
    }

    /// Literals carry the declaration of a user-defined datatype, if present.
    pub fn literal(&self, node: &Node) -> Result<Translated<Literal>> {
        let lit = node
            .as_literal()
            .ok_or_else(|| TranslateError::unsupported(node, "a literal"))?;
        Ok(self.declared(
            &lit.datatype,
            EntityType::Datatype,
            Literal {
                lexical: lit.lexical.clone(),
                datatype: lit.datatype.clone(),
                language: lit.language.clone(),
            },
        ))
    }

    pub fn annotation_value(&self, node: &Node) -> Result<Translated<AnnotationValue>> {
        match node {
            Node::Iri(iri) => Ok(Translated::leaf(AnnotationValue::Iri(iri.clone()))),
            Node::Literal(_) => Ok(self.literal(node)?.map(AnnotationValue::Literal)),
            Node::Blank(id) if self.graph.is_individual(node) => Ok(Translated::leaf(
                AnnotationValue::Anonymous(AnonymousIndividual::new(id.as_str())),
            )),
            Node::Blank(_) => Err(TranslateError::unsupported(node, "an annotation value")),
        }
    }

    pub fn annotation_subject(&self, node: &Node) -> Result<Translated<AnnotationSubject>> {
        match node {
            Node::Iri(iri) => Ok(Translated::leaf(AnnotationSubject::Iri(iri.clone()))),
            Node::Blank(id) if self.graph.is_individual(node) => Ok(Translated::leaf(
                AnnotationSubject::Anonymous(AnonymousIndividual::new(id.as_str())),
            )),
            _ => Err(TranslateError::unsupported(node, "an annotation subject")),
        }
    }

    pub fn entity(&self, node: &Node, entity_type: EntityType) -> Result<Translated<Entity>> {
        let iri = self.iri(node, "an entity")?;
        Ok(Translated::leaf(Entity::of_type(entity_type, iri.clone())))
    }
}

// ============================================================================
// Writing
// ============================================================================

/// Write-side context over a mutable graph.
#[derive(Debug)]
pub struct Writer<'a> {
    graph: &'a mut Graph,
}

fn is_builtin_of(iri: &Iri, entity_type: EntityType) -> bool {
    let iri = iri.as_str();
    match entity_type {
        EntityType::Class => builtin::is_class(iri),
        EntityType::Datatype => builtin::is_datatype(iri),
        EntityType::ObjectProperty => builtin::is_object_property(iri),
        EntityType::DataProperty => builtin::is_data_property(iri),
        EntityType::AnnotationProperty => builtin::is_annotation_property(iri),
        EntityType::NamedIndividual => false,
    }
}

impl<'a> Writer<'a> {
    pub fn new(graph: &'a mut Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        self.graph
    }

    pub fn add(&mut self, triple: Triple) {
        self.graph.add(triple);
    }

    pub fn fresh(&mut self) -> Node {
        self.graph.fresh_blank()
    }

    /// A fresh blank node with one `rdf:type`.
    pub fn typed_blank(&mut self, type_iri: &str) -> Node {
        let node = self.fresh();
        self.add(Triple::new(node.clone(), rdf::TYPE, Node::iri(type_iri)));
        node
    }

    pub fn list(&mut self, members: Vec<Node>) -> Node {
        self.graph.write_list(members)
    }

    /// Adds the declaration triple unless the IRI is built in for that type.
    pub fn declare(&mut self, iri: &Iri, entity_type: EntityType) -> Node {
        let node = Node::Iri(iri.clone());
        if !is_builtin_of(iri, entity_type) {
            self.add(Triple::new(
                node.clone(),
                rdf::TYPE,
                Node::iri(entity_type.type_iri()),
            ));
        }
        node
    }

    pub fn class(&mut self, class: &Class) -> Node {
        self.declare(class.iri(), EntityType::Class)
    }

    pub fn datatype(&mut self, datatype: &Datatype) -> Node {
        self.declare(datatype.iri(), EntityType::Datatype)
    }

    pub fn object_property(&mut self, property: &ObjectProperty) -> Node {
        self.declare(property.iri(), EntityType::ObjectProperty)
    }

    pub fn object_property_expression(&mut self, property: &ObjectPropertyExpression) -> Node {
        match property {
            ObjectPropertyExpression::Named(p) => self.object_property(p),
            ObjectPropertyExpression::Inverse(p) => {
                let named = self.object_property(p);
                let node = self.fresh();
                self.add(Triple::new(node.clone(), owl::INVERSE_OF, named));
                node
            }
        }
    }

    pub fn data_property(&mut self, property: &DataProperty) -> Node {
        self.declare(property.iri(), EntityType::DataProperty)
    }

    pub fn annotation_property(&mut self, property: &AnnotationProperty) -> Node {
        self.declare(property.iri(), EntityType::AnnotationProperty)
    }

    pub fn individual(&mut self, individual: &Individual) -> Node {
        match individual {
            Individual::Named(i) => self.declare(i.iri(), EntityType::NamedIndividual),
            Individual::Anonymous(a) => self.graph.anonymous_individual(a.label()),
        }
    }

    pub fn literal(&mut self, literal: &Literal) -> Node {
        if literal.language.is_none() {
            self.declare(&literal.datatype, EntityType::Datatype);
        }
        Node::Literal(RdfLiteral::new(
            literal.lexical.clone(),
            Some(literal.datatype.clone()),
            literal.language.clone(),
        ))
    }

    pub fn annotation_value(&mut self, value: &AnnotationValue) -> Node {
        match value {
            AnnotationValue::Iri(iri) => Node::Iri(iri.clone()),
            AnnotationValue::Literal(lit) => self.literal(lit),
            AnnotationValue::Anonymous(a) => self.graph.anonymous_individual(a.label()),
        }
    }

    pub fn annotation_subject(&mut self, subject: &AnnotationSubject) -> Node {
        match subject {
            AnnotationSubject::Iri(iri) => Node::Iri(iri.clone()),
            AnnotationSubject::Anonymous(a) => self.graph.anonymous_individual(a.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use owlbridge_model::vocab::{owl, rdfs, xsd};

    fn ex(name: &str) -> Node {
        Node::iri(format!("http://example.com/{name}"))
    }

    #[test]
    fn leaves_carry_their_declarations() {
        let mut graph = Graph::new();
        let knows = ex("knows");
        graph.add(Triple::new(knows.clone(), rdf::TYPE, Node::iri(owl::OBJECT_PROPERTY)));
        let config = LoaderConfig::default();
        let reader = Reader::new(&graph, &config);

        let property = reader.object_property(&knows).expect("object property");
        assert_eq!(property.triples().len(), 1);
        assert!(reader.data_property(&knows).is_err());

        let label = reader
            .annotation_property(&Node::iri(rdfs::LABEL))
            .expect("builtin annotation property");
        assert!(label.triples().is_empty());
    }

    #[test]
    fn inverse_expressions_include_the_link() {
        let mut graph = Graph::new();
        let mut writer = Writer::new(&mut graph);
        let node = writer.object_property_expression(&ObjectPropertyExpression::inverse(
            "http://example.com/hasParent",
        ));

        let config = LoaderConfig::default();
        let reader = Reader::new(&graph, &config);
        let read = reader
            .object_property_expression(&node)
            .expect("inverse expression");
        assert_eq!(
            read.object(),
            &ObjectPropertyExpression::inverse("http://example.com/hasParent")
        );
        assert_eq!(read.triples().len(), graph.len());
    }

    #[test]
    fn writer_skips_builtin_declarations() {
        let mut graph = Graph::new();
        let mut writer = Writer::new(&mut graph);
        writer.class(&Class::new(owl::THING));
        writer.literal(&Literal::typed("5", xsd::INTEGER));
        writer.literal(&Literal::typed("x", "http://example.com/code"));
        assert_eq!(graph.len(), 1);
        assert!(graph.is_declared(&Iri::new("http://example.com/code"), EntityType::Datatype));
    }
}
