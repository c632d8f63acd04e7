//! Statements: a triple seen in the context of its graph.

use std::fmt;

use owlbridge_model::vocab::{owl, rdf};
use owlbridge_model::EntityType;

use crate::graph::Graph;
use crate::node::{Node, Triple};

/// A triple plus the graph it lives in. Reading the annotations of a
/// statement needs the surrounding graph, so translators pass these around
/// instead of bare triples.
#[derive(Clone)]
pub struct Statement<'g> {
    graph: &'g Graph,
    triple: Triple,
}

impl fmt::Debug for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Statement").field(&self.triple).finish()
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.triple.fmt(f)
    }
}

impl<'g> Statement<'g> {
    pub fn new(graph: &'g Graph, triple: Triple) -> Self {
        Self { graph, triple }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn triple(&self) -> &Triple {
        &self.triple
    }

    pub fn into_triple(self) -> Triple {
        self.triple
    }

    pub fn subject(&self) -> &Node {
        &self.triple.subject
    }

    pub fn predicate(&self) -> &str {
        self.triple.predicate.as_str()
    }

    pub fn object(&self) -> &Node {
        &self.triple.object
    }

    /// `X rdf:type T` for an entity type `T`.
    pub fn is_declaration(&self) -> bool {
        self.predicate() == rdf::TYPE
            && self
                .object()
                .as_iri()
                .is_some_and(|t| EntityType::from_type_iri(t.as_str()).is_some())
    }

    /// A declaration of a named entity; its plain annotations belong to it.
    pub fn is_declaration_root(&self) -> bool {
        self.is_declaration()
            && matches!(self.subject(), Node::Iri(_))
            && !self.graph.is_ontology_header(self.subject())
    }

    /// The root triple of an axiom without a named subject, e.g.
    /// `_:x rdf:type owl:AllDisjointClasses`.
    pub fn is_axiom_root(&self) -> bool {
        self.predicate() == rdf::TYPE
            && self
                .object()
                .as_iri()
                .is_some_and(|t| crate::view::AXIOM_ROOT_TYPES.contains(&t.as_str()))
    }

    /// The predicate is an annotation property (built-in or declared).
    pub fn is_annotation(&self) -> bool {
        self.graph.is_annotation_property(&self.triple.predicate)
    }

    /// The subject is a reification node or an anonymous axiom root, i.e. the
    /// statement annotates something rather than asserting about an entity.
    pub fn subject_is_annotation_node(&self) -> bool {
        self.subject().is_blank()
            && (self.graph.is_reification_node(self.subject())
                || self.graph.is_axiom_root(self.subject()))
    }

    /// Reification nodes (`owl:Axiom` / `owl:Annotation`) pointing at this triple.
    pub fn reification_nodes(&self) -> Vec<&'g Node> {
        let graph = self.graph;
        let t = &self.triple;
        graph
            .subjects(owl::ANNOTATED_SOURCE, &t.subject)
            .filter(|r| {
                graph.is_reification_node(r)
                    && graph.contains_spo(
                        r,
                        owl::ANNOTATED_PROPERTY,
                        &Node::Iri(t.predicate.clone()),
                    )
                    && graph.contains_spo(r, owl::ANNOTATED_TARGET, &t.object)
            })
            .collect()
    }

    /// The four header triples of a reification node.
    pub fn reification_header(graph: &Graph, node: &Node) -> Vec<Triple> {
        graph
            .triples_with_subject(node)
            .filter(|t| match t.predicate.as_str() {
                rdf::TYPE => t.object.is(owl::AXIOM) || t.object.is(owl::ANNOTATION),
                owl::ANNOTATED_SOURCE | owl::ANNOTATED_PROPERTY | owl::ANNOTATED_TARGET => true,
                _ => false,
            })
            .cloned()
            .collect()
    }

    fn annotation_triples_of(&self, holder: &Node) -> impl Iterator<Item = Statement<'g>> + 'g {
        let graph = self.graph;
        graph
            .triples_with_subject(holder)
            .filter(move |t| graph.is_annotation_property(&t.predicate))
            .map(move |t| Statement::new(graph, t.clone()))
    }

    /// Annotations attached through reification nodes.
    pub fn reified_annotations(&self) -> Vec<Statement<'g>> {
        self.reification_nodes()
            .into_iter()
            .flat_map(|r| self.annotation_triples_of(r))
            .collect()
    }

    /// Annotations written directly on an anonymous axiom root.
    pub fn compact_annotations(&self) -> Vec<Statement<'g>> {
        if !self.is_axiom_root() || !self.subject().is_blank() {
            return Vec::new();
        }
        self.annotation_triples_of(self.subject()).collect()
    }

    /// Plain annotation triples on the entity a declaration root declares.
    pub fn plain_annotations(&self) -> Vec<Statement<'g>> {
        if !self.is_declaration_root() {
            return Vec::new();
        }
        self.annotation_triples_of(self.subject()).collect()
    }

    /// Every annotation statement attached to this statement, in graph order.
    pub fn annotations(&self) -> Vec<Statement<'g>> {
        let mut out = self.reified_annotations();
        out.extend(self.compact_annotations());
        out.extend(self.plain_annotations());
        out.sort_by(|a, b| a.triple.cmp(&b.triple));
        out.dedup_by(|a, b| a.triple == b.triple);
        out
    }

    pub fn has_annotations(&self) -> bool {
        !self.reification_nodes().is_empty()
            || !self.compact_annotations().is_empty()
            || !self.plain_annotations().is_empty()
    }
}

impl PartialEq for Statement<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.graph, other.graph) && self.triple == other.triple
    }
}

impl Eq for Statement<'_> {}
