//! RDF collections (`rdf:first` / `rdf:rest` chains).

use std::collections::BTreeSet;

use owlbridge_model::vocab::rdf;

use crate::error::GraphError;
use crate::graph::Graph;
use crate::node::{Node, Triple};

/// A decoded RDF list: the members in order plus every cell triple walked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RdfList {
    pub members: Vec<Node>,
    pub cells: Vec<Node>,
    pub triples: Vec<Triple>,
}

impl RdfList {
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }
}

impl Graph {
    /// Walks the list starting at `head`. Each cell must have exactly one
    /// `rdf:first` and one `rdf:rest`; `rdf:type rdf:List` cell triples are
    /// collected too.
    pub fn read_list(&self, head: &Node) -> Result<RdfList, GraphError> {
        let mut list = RdfList::default();
        let mut seen: BTreeSet<&Node> = BTreeSet::new();
        let mut cell = head;

        while !cell.is(rdf::NIL) {
            if !seen.insert(cell) {
                return Err(GraphError::CyclicList {
                    head: head.to_string(),
                });
            }
            if !cell.is_blank() {
                return Err(GraphError::MalformedList {
                    head: head.to_string(),
                    reason: format!("cell {cell} is not a blank node"),
                });
            }
            let first = self.unique(cell, rdf::FIRST).ok_or_else(|| GraphError::MalformedList {
                head: head.to_string(),
                reason: format!("cell {cell} needs exactly one rdf:first"),
            })?;
            let rest = self.unique(cell, rdf::REST).ok_or_else(|| GraphError::MalformedList {
                head: head.to_string(),
                reason: format!("cell {cell} needs exactly one rdf:rest"),
            })?;

            list.members.push(first.object.clone());
            list.cells.push(cell.clone());
            list.triples.push(first.clone());
            list.triples.push(rest.clone());
            list.triples.extend(
                self.triples_with_subject(cell)
                    .filter(|t| t.predicate.as_str() == rdf::TYPE && t.object.is(rdf::LIST))
                    .cloned(),
            );
            cell = &rest.object;
        }

        Ok(list)
    }

    /// Writes `members` as a fresh list and returns its head (`rdf:nil` when empty).
    pub fn write_list(&mut self, members: impl IntoIterator<Item = Node>) -> Node {
        let members: Vec<Node> = members.into_iter().collect();
        let cells: Vec<Node> = members.iter().map(|_| self.fresh_blank()).collect();
        let nil = Node::iri(rdf::NIL);

        for (i, member) in members.into_iter().enumerate() {
            let next = cells.get(i + 1).cloned().unwrap_or_else(|| nil.clone());
            self.add(Triple::new(cells[i].clone(), rdf::FIRST, member));
            self.add(Triple::new(cells[i].clone(), rdf::REST, next));
        }

        cells.into_iter().next().unwrap_or(nil)
    }
}
