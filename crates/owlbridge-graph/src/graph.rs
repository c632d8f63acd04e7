//! In-memory triple store with subject, predicate and object indexes.

use std::collections::BTreeSet;

use ahash::{AHashMap, AHashSet};
use owlbridge_model::vocab::rdf;
use owlbridge_model::Iri;

use crate::node::{BlankId, Node, Triple};

/// A set of triples. Iteration order is the triples' natural order, so every
/// scan over the graph is deterministic.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    triples: BTreeSet<Triple>,
    by_subject: AHashMap<Node, BTreeSet<Triple>>,
    by_predicate: AHashMap<Iri, BTreeSet<Triple>>,
    by_object: AHashMap<Node, BTreeSet<Triple>>,
    next_blank: u64,
    /// Labels handed out by [`Graph::fresh_blank`].
    minted: AHashSet<BlankId>,
    /// Node chosen for each anonymous individual label written so far.
    individuals: AHashMap<BlankId, Node>,
}

fn index_insert<K: std::hash::Hash + Eq>(
    index: &mut AHashMap<K, BTreeSet<Triple>>,
    key: K,
    triple: &Triple,
) {
    index.entry(key).or_default().insert(triple.clone());
}

fn index_remove<K, Q>(index: &mut AHashMap<K, BTreeSet<Triple>>, key: &Q, triple: &Triple)
where
    K: std::hash::Hash + Eq + std::borrow::Borrow<Q>,
    Q: std::hash::Hash + Eq + ?Sized,
{
    if let Some(set) = index.get_mut(key) {
        set.remove(triple);
        if set.is_empty() {
            index.remove(key);
        }
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.triples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns `true` if the triple was not already present.
    pub fn add(&mut self, triple: Triple) -> bool {
        if self.triples.contains(&triple) {
            return false;
        }
        index_insert(&mut self.by_subject, triple.subject.clone(), &triple);
        index_insert(&mut self.by_predicate, triple.predicate.clone(), &triple);
        index_insert(&mut self.by_object, triple.object.clone(), &triple);
        self.triples.insert(triple);
        true
    }

    /// Returns `true` if the triple was present.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        if !self.triples.remove(triple) {
            return false;
        }
        index_remove(&mut self.by_subject, &triple.subject, triple);
        index_remove(&mut self.by_predicate, &triple.predicate, triple);
        index_remove(&mut self.by_object, &triple.object, triple);
        true
    }

    /// Removes every listed triple; returns how many were present.
    pub fn remove_all<'a>(&mut self, triples: impl IntoIterator<Item = &'a Triple>) -> usize {
        triples.into_iter().filter(|t| self.remove(t)).count()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    pub fn contains_spo(&self, subject: &Node, predicate: &str, object: &Node) -> bool {
        self.triples_with_subject(subject)
            .any(|t| t.predicate.as_str() == predicate && &t.object == object)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Triple> + '_ {
        self.triples.iter()
    }

    pub fn triples_with_subject<'g>(
        &'g self,
        subject: &Node,
    ) -> impl Iterator<Item = &'g Triple> + 'g {
        self.by_subject.get(subject).into_iter().flatten()
    }

    pub fn triples_with_predicate<'g>(
        &'g self,
        predicate: &str,
    ) -> impl Iterator<Item = &'g Triple> + 'g {
        self.by_predicate.get(predicate).into_iter().flatten()
    }

    pub fn triples_with_object<'g>(
        &'g self,
        object: &Node,
    ) -> impl Iterator<Item = &'g Triple> + 'g {
        self.by_object.get(object).into_iter().flatten()
    }

    /// Pattern match; `None` is a wildcard. Uses the most selective index.
    pub fn find<'g>(
        &'g self,
        subject: Option<&Node>,
        predicate: Option<&str>,
        object: Option<&Node>,
    ) -> Box<dyn Iterator<Item = &'g Triple> + 'g> {
        let predicate_owned = predicate.map(str::to_string);
        let object_owned = object.cloned();
        let matches = move |t: &&Triple| {
            predicate_owned
                .as_deref()
                .map_or(true, |p| t.predicate.as_str() == p)
                && object_owned.as_ref().map_or(true, |o| &t.object == o)
        };
        match (subject, predicate, object) {
            (Some(s), _, _) => Box::new(self.triples_with_subject(s).filter(matches)),
            (None, _, Some(o)) => Box::new(self.triples_with_object(o).filter(matches)),
            (None, Some(p), None) => Box::new(self.triples_with_predicate(p)),
            (None, None, None) => Box::new(self.triples.iter()),
        }
    }

    /// Objects of `(subject, predicate, ?)`.
    pub fn objects<'g>(
        &'g self,
        subject: &Node,
        predicate: &'g str,
    ) -> impl Iterator<Item = &'g Node> + 'g {
        self.triples_with_subject(subject)
            .filter(move |t| t.predicate.as_str() == predicate)
            .map(|t| &t.object)
    }

    /// The single triple `(subject, predicate, ?)`, if exactly one exists.
    pub fn unique(&self, subject: &Node, predicate: &str) -> Option<&Triple> {
        let mut it = self
            .triples_with_subject(subject)
            .filter(|t| t.predicate.as_str() == predicate);
        let first = it.next()?;
        match it.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    pub fn has_predicate(&self, subject: &Node, predicate: &str) -> bool {
        self.triples_with_subject(subject)
            .any(|t| t.predicate.as_str() == predicate)
    }

    /// Subjects of `(?, predicate, object)`.
    pub fn subjects<'g>(
        &'g self,
        predicate: &'g str,
        object: &Node,
    ) -> impl Iterator<Item = &'g Node> + 'g {
        self.triples_with_object(object)
            .filter(move |t| t.predicate.as_str() == predicate)
            .map(|t| &t.subject)
    }

    pub fn has_type(&self, node: &Node, type_iri: &str) -> bool {
        self.types(node).any(|t| t.as_str() == type_iri)
    }

    /// IRI objects of `(node, rdf:type, ?)`.
    pub fn types<'g>(&'g self, node: &Node) -> impl Iterator<Item = &'g Iri> + 'g {
        self.objects(node, rdf::TYPE).filter_map(Node::as_iri)
    }

    /// True if the node occurs anywhere in the graph.
    pub fn mentions(&self, node: &Node) -> bool {
        self.by_subject.contains_key(node) || self.by_object.contains_key(node)
    }

    /// A blank node label not used anywhere in the graph.
    pub fn fresh_blank(&mut self) -> Node {
        loop {
            let id = BlankId(format!("genid{}", self.next_blank));
            self.next_blank += 1;
            let candidate = Node::Blank(id.clone());
            if !self.mentions(&candidate) && !self.individuals.contains_key(&id) {
                self.minted.insert(id);
                return candidate;
            }
        }
    }

    /// The node an anonymous individual labelled `label` is written to.
    ///
    /// The label is kept unless this graph minted it for something other
    /// than an individual, in which case the individual moves to a fresh
    /// blank node. Repeated calls with one label return the same node.
    pub fn anonymous_individual(&mut self, label: &str) -> Node {
        let id = BlankId::new(label);
        if let Some(node) = self.individuals.get(&id) {
            return node.clone();
        }
        let same = Node::Blank(id.clone());
        let taken = self.minted.contains(&id)
            && !(self.mentions(&same) && self.is_individual(&same));
        let node = if taken { self.fresh_blank() } else { same };
        self.individuals.insert(id, node.clone());
        node
    }

    /// Serializes the graph as N-Triples, one triple per line in graph order.
    pub fn to_ntriples(&self) -> String {
        let mut out = String::new();
        for triple in &self.triples {
            out.push_str(&triple.to_string());
            out.push_str(" .\n");
        }
        out
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        for triple in iter {
            self.add(triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl<'g> IntoIterator for &'g Graph {
    type Item = &'g Triple;
    type IntoIter = std::collections::btree_set::Iter<'g, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::RdfLiteral;
    use owlbridge_model::vocab::owl;

    const EX: &str = "http://example.com/";

    fn ex(name: &str) -> Node {
        Node::iri(format!("{EX}{name}"))
    }

    #[test]
    fn add_is_idempotent_and_remove_updates_indexes() {
        let mut graph = Graph::new();
        let t = Triple::new(ex("A"), rdf::TYPE, Node::iri(owl::CLASS));
        assert!(graph.add(t.clone()));
        assert!(!graph.add(t.clone()));
        assert_eq!(graph.len(), 1);
        assert!(graph.has_type(&ex("A"), owl::CLASS));

        assert!(graph.remove(&t));
        assert!(graph.is_empty());
        assert!(!graph.has_type(&ex("A"), owl::CLASS));
        assert_eq!(graph.triples_with_predicate(rdf::TYPE).count(), 0);
    }

    #[test]
    fn find_filters_on_every_position() {
        let graph: Graph = [
            Triple::new(ex("a"), format!("{EX}p"), ex("b")),
            Triple::new(ex("a"), format!("{EX}q"), ex("b")),
            Triple::new(ex("c"), format!("{EX}p"), RdfLiteral::string("x")),
        ]
        .into_iter()
        .collect();

        let p = format!("{EX}p");
        assert_eq!(graph.find(Some(&ex("a")), None, None).count(), 2);
        assert_eq!(graph.find(None, Some(&p), None).count(), 2);
        assert_eq!(graph.find(None, None, Some(&ex("b"))).count(), 2);
        assert_eq!(graph.find(Some(&ex("a")), Some(&p), Some(&ex("b"))).count(), 1);
        assert_eq!(graph.find(None, None, None).count(), 3);
    }

    #[test]
    fn unique_rejects_ambiguous_objects() {
        let mut graph = Graph::new();
        let p = format!("{EX}p");
        graph.add(Triple::new(ex("a"), p.as_str(), ex("b")));
        assert!(graph.unique(&ex("a"), &p).is_some());
        graph.add(Triple::new(ex("a"), p.as_str(), ex("c")));
        assert!(graph.unique(&ex("a"), &p).is_none());
    }

    #[test]
    fn fresh_blank_skips_labels_in_use() {
        let mut graph = Graph::new();
        graph.add(Triple::new(Node::blank("genid0"), rdf::TYPE, Node::iri(owl::CLASS)));
        let fresh = graph.fresh_blank();
        assert_ne!(fresh, Node::blank("genid0"));
        assert!(!graph.mentions(&fresh));
    }

    #[test]
    fn anonymous_individuals_avoid_minted_labels() {
        let mut graph = Graph::new();
        let structure = graph.fresh_blank();
        let Node::Blank(minted) = &structure else {
            panic!("fresh_blank returned {structure}");
        };

        let moved = graph.anonymous_individual(minted.as_str());
        assert_ne!(moved, structure);
        assert_eq!(graph.anonymous_individual(minted.as_str()), moved);

        let kept = graph.anonymous_individual("felix");
        assert_eq!(kept, Node::blank("felix"));
        assert_ne!(graph.fresh_blank(), moved);
    }
}
