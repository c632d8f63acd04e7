//! Axiom annotations: collecting them from a statement and writing them back.
//!
//! An annotation reaches a statement in one of three ways:
//!
//! - reified: an `owl:Axiom` node whose `annotatedSource/Property/Target`
//!   match the triple, carrying `P v` pairs
//! - compact: `P v` written directly on an anonymous axiom root such as
//!   `_:x rdf:type owl:AllDisjointClasses`
//! - plain: `P v` on the entity a declaration declares
//!
//! Annotations may themselves be annotated; nested ones are reified through
//! `owl:Annotation` nodes.

use owlbridge_graph::view::AXIOM_ROOT_TYPES;
use owlbridge_graph::{Node, Statement, Triple};
use owlbridge_model::vocab::{owl, rdf};
use owlbridge_model::{Annotation, Annotations};

use crate::codec::{Reader, Writer};
use crate::error::Result;
use crate::expression::ExpansionPath;
use crate::translated::Translated;
use crate::translators::annotation::is_annotation_assertion;

impl<'g> Reader<'g> {
    /// All annotations of `statement`, each with the triples that encode it.
    ///
    /// With `load_annotation_axioms` and `allow_bulk_annotation_assertions`
    /// both on, plain annotations that also read as standalone
    /// `AnnotationAssertion` axioms are left to those axioms.
    pub fn annotations(&self, statement: &Statement<'g>) -> Result<Translated<Annotations>> {
        self.annotations_in(statement, &mut ExpansionPath::new())
    }

    fn annotations_in(
        &self,
        statement: &Statement<'g>,
        path: &mut ExpansionPath,
    ) -> Result<Translated<Annotations>> {
        let mut found = statement.annotations();
        let config = self.config();
        if statement.is_declaration_root()
            && config.load_annotation_axioms
            && config.allow_bulk_annotation_assertions
        {
            found.retain(|a| !is_annotation_assertion(a, config));
        }
        found
            .iter()
            .map(|a| self.annotation_in(a, path))
            .collect()
    }

    fn annotation_in(
        &self,
        statement: &Statement<'g>,
        path: &mut ExpansionPath,
    ) -> Result<Translated<Annotation>> {
        let triple = statement.triple();
        let holder = statement.subject();
        let property = self.annotation_property(&Node::Iri(triple.predicate.clone()))?;
        let value = self.annotation_value(statement.object())?;

        let (header, nested) = if self.graph().is_reification_node(holder) {
            let header = Statement::reification_header(self.graph(), holder);
            let nested = path.enter(holder, |path| self.annotations_in(statement, path))?;
            (header, nested)
        } else {
            (Vec::new(), self.annotations_in(statement, path)?)
        };

        Ok(property
            .zip(value)
            .zip(nested)
            .map(|((property, value), annotations)| Annotation {
                property,
                value,
                annotations,
            })
            .with_triple(triple.clone())
            .with_triples(header))
    }
}

impl Writer<'_> {
    /// Adds `triple` and attaches `annotations` to it.
    pub fn add_annotated(&mut self, triple: Triple, annotations: &Annotations) {
        self.add(triple.clone());
        self.annotate(&triple, annotations);
    }

    /// Anonymous axiom roots take annotations directly; any other triple is
    /// reified, reusing an existing reification node when there is one.
    pub fn annotate(&mut self, triple: &Triple, annotations: &Annotations) {
        if annotations.is_empty() {
            return;
        }
        let holder = if is_root_typing(triple) {
            triple.subject.clone()
        } else {
            self.reification_node(triple)
        };
        for annotation in annotations {
            self.annotation_on(&holder, annotation);
        }
    }

    fn annotation_on(&mut self, holder: &Node, annotation: &Annotation) {
        self.annotation_property(&annotation.property);
        let property = annotation.property.iri().clone();
        let value = self.annotation_value(&annotation.value);
        let triple = Triple::new(holder.clone(), property, value);
        self.add(triple.clone());
        self.annotate(&triple, &annotation.annotations);
    }

    fn reification_node(&mut self, triple: &Triple) -> Node {
        let existing = Statement::new(self.graph(), triple.clone())
            .reification_nodes()
            .first()
            .map(|n| (*n).clone());
        if let Some(node) = existing {
            return node;
        }

        let nested = {
            let graph = self.graph();
            triple.subject.is_blank()
                && (graph.is_reification_node(&triple.subject)
                    || graph.is_axiom_root(&triple.subject))
        };
        let node = self.typed_blank(if nested { owl::ANNOTATION } else { owl::AXIOM });
        self.add(Triple::new(node.clone(), owl::ANNOTATED_SOURCE, triple.subject.clone()));
        self.add(Triple::new(
            node.clone(),
            owl::ANNOTATED_PROPERTY,
            Node::Iri(triple.predicate.clone()),
        ));
        self.add(Triple::new(node.clone(), owl::ANNOTATED_TARGET, triple.object.clone()));
        node
    }
}

fn is_root_typing(triple: &Triple) -> bool {
    triple.subject.is_blank()
        && triple.predicate.as_str() == rdf::TYPE
        && triple
            .object
            .as_iri()
            .is_some_and(|t| AXIOM_ROOT_TYPES.contains(&t.as_str()))
}
