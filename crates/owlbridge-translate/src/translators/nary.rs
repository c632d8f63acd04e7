//! N-ary axioms over sets of operands.
//!
//! Equivalence axioms are always written pairwise (`a owl:sameAs b`); a
//! single operand becomes the reflexive triple `a owl:sameAs a`.
//! Disjointness axioms have two forms: one pairwise triple for exactly two
//! operands, otherwise an anonymous root such as
//! `_:x rdf:type owl:AllDisjointClasses ; owl:members ( ... )`.

use std::collections::BTreeSet;

use owlbridge_graph::{Graph, Node, Statement, Triple};
use owlbridge_model::vocab::rdf;
use owlbridge_model::{Axiom, AxiomBody, AxiomKind};

use super::operand::Operand;
use super::{body_of, by_predicate, finish, mismatched, AxiomTranslator, Candidates};
use crate::codec::{Reader, Writer};
use crate::config::LoaderConfig;
use crate::error::{Result, TranslateError};
use crate::translated::Translated;

fn read_pair<O: Operand>(
    reader: &Reader<'_>,
    triple: &Triple,
) -> Result<Translated<BTreeSet<O>>> {
    let first = O::read(reader, &triple.subject)?;
    let second = O::read(reader, &triple.object)?;
    Ok(first.zip(second).map(|(a, b)| [a, b].into()))
}

// ============================================================================
// Pairwise-only kinds
// ============================================================================

/// `EquivalentClasses`, `EquivalentObjectProperties`,
/// `EquivalentDataProperties`, `SameIndividual`.
pub struct PairwiseTranslator<O: 'static> {
    pub kind: AxiomKind,
    pub predicate: &'static str,
    pub wrap: fn(BTreeSet<O>) -> AxiomBody,
    pub operands: fn(&AxiomBody) -> Option<&BTreeSet<O>>,
}

impl<O: Operand> AxiomTranslator for PairwiseTranslator<O> {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        by_predicate(graph, self.predicate)
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        statement.predicate() == self.predicate
            && O::accepts(graph, statement.subject())
            && O::accepts(graph, statement.object())
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let body = read_pair::<O>(&reader, statement.triple())?.map(self.wrap);
        finish(statement, config, body)
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let operands = (self.operands)(body_of(axiom, self.kind)?)
            .ok_or_else(|| mismatched(self.kind, axiom))?;
        let operands: Vec<&O> = operands.iter().collect();
        let Some((&first, rest)) = operands.split_first() else {
            return Err(TranslateError::Unwritable {
                kind: self.kind,
                reason: "needs at least one operand".to_string(),
            });
        };

        let mut writer = Writer::new(graph);
        let first = O::write(&mut writer, first);
        if rest.is_empty() {
            // a single operand is the reflexive triple it was read from
            writer.add_annotated(
                Triple::new(first.clone(), self.predicate, first),
                &axiom.annotations,
            );
            return Ok(());
        }
        for &other in rest {
            let other = O::write(&mut writer, other);
            writer.add_annotated(
                Triple::new(first.clone(), self.predicate, other),
                &axiom.annotations,
            );
        }
        Ok(())
    }
}

// ============================================================================
// Two-way kinds
// ============================================================================

/// `DisjointClasses`, `DisjointObjectProperties`, `DisjointDataProperties`,
/// `DifferentIndividuals`.
pub struct TwoWayTranslator<O: 'static> {
    pub kind: AxiomKind,
    /// Pairwise form, e.g. `owl:disjointWith`.
    pub predicate: &'static str,
    /// Type of the anonymous root, e.g. `owl:AllDisjointClasses`.
    pub marker: &'static str,
    /// Member-list predicates accepted on read; the first is written.
    pub members: &'static [&'static str],
    /// Decides whether a root's member list belongs to this kind.
    pub accepts_members: fn(&Graph, &[Node]) -> bool,
    pub wrap: fn(BTreeSet<O>) -> AxiomBody,
    pub operands: fn(&AxiomBody) -> Option<&BTreeSet<O>>,
}

/// Every member is an operand of type `O`.
pub fn all_members<O: Operand>(graph: &Graph, members: &[Node]) -> bool {
    members.iter().all(|m| O::accepts(graph, m))
}

impl<O: Operand> TwoWayTranslator<O> {
    fn member_link<'g>(&self, graph: &'g Graph, root: &Node) -> Option<&'g Triple> {
        let mut links = graph
            .triples_with_subject(root)
            .filter(|t| self.members.contains(&t.predicate.as_str()));
        match (links.next(), links.next()) {
            (Some(link), None) => Some(link),
            _ => None,
        }
    }
}

impl<O: Operand> AxiomTranslator for TwoWayTranslator<O> {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn candidates<'g>(&self, graph: &'g Graph) -> Candidates<'g> {
        let (predicate, marker) = (self.predicate, self.marker);
        Box::new(
            graph
                .triples_with_predicate(predicate)
                .chain(
                    graph
                        .triples_with_predicate(rdf::TYPE)
                        .filter(move |t| t.object.is(marker)),
                ),
        )
    }

    fn recognizes(&self, statement: &Statement<'_>, _config: &LoaderConfig) -> bool {
        let graph = statement.graph();
        if statement.predicate() == self.predicate {
            return O::accepts(graph, statement.subject()) && O::accepts(graph, statement.object());
        }
        if statement.predicate() != rdf::TYPE
            || !statement.object().is(self.marker)
            || !statement.subject().is_blank()
        {
            return false;
        }
        self.member_link(graph, statement.subject())
            .and_then(|link| graph.read_list(&link.object).ok())
            .is_some_and(|list| (self.accepts_members)(graph, &list.members))
    }

    fn read(&self, statement: &Statement<'_>, config: &LoaderConfig) -> Result<Translated<Axiom>> {
        let reader = Reader::new(statement.graph(), config);
        let operands = if statement.predicate() == self.predicate {
            read_pair::<O>(&reader, statement.triple())?
        } else {
            let root = statement.subject();
            let link = self.member_link(statement.graph(), root).ok_or_else(|| {
                TranslateError::structural(root, "expected exactly one member list")
            })?;
            let list = statement.graph().read_list(&link.object)?;
            let operands: Translated<BTreeSet<O>> = list
                .members
                .iter()
                .map(|m| O::read(&reader, m))
                .collect::<Result<_>>()?;
            operands.with_triple(link.clone()).with_triples(list.triples)
        };
        finish(statement, config, operands.map(self.wrap))
    }

    fn write(&self, axiom: &Axiom, graph: &mut Graph) -> Result<()> {
        let operands = (self.operands)(body_of(axiom, self.kind)?)
            .ok_or_else(|| mismatched(self.kind, axiom))?;
        if operands.is_empty() && axiom.annotations.is_empty() {
            return Ok(());
        }

        let mut writer = Writer::new(graph);
        if operands.len() == 2 {
            let mut pair = operands.iter().map(|o| O::write(&mut writer, o)).collect::<Vec<_>>();
            let (second, first) = (pair.pop(), pair.pop());
            if let (Some(first), Some(second)) = (first, second) {
                writer.add_annotated(
                    Triple::new(first, self.predicate, second),
                    &axiom.annotations,
                );
            }
            return Ok(());
        }

        let members = operands.iter().map(|o| O::write(&mut writer, o)).collect();
        let head = writer.list(members);
        let root = writer.fresh();
        writer.add(Triple::new(root.clone(), self.members[0], head));
        writer.add_annotated(
            Triple::new(root, rdf::TYPE, Node::iri(self.marker)),
            &axiom.annotations,
        );
        Ok(())
    }
}
