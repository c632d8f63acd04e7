//! `Translated<T>`: a decoded value together with the triples it came from.

use std::collections::BTreeSet;

use owlbridge_graph::Triple;

/// A domain object and its provenance: the exact set of graph triples
/// consumed to produce it. Two wrappers are equal when both the object and
/// the triple set are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated<T> {
    object: T,
    triples: BTreeSet<Triple>,
}

impl<T> Translated<T> {
    pub fn new(object: T, triples: impl IntoIterator<Item = Triple>) -> Self {
        Self {
            object,
            triples: triples.into_iter().collect(),
        }
    }

    /// A value that consumed no triples (e.g. a built-in entity).
    pub fn leaf(object: T) -> Self {
        Self {
            object,
            triples: BTreeSet::new(),
        }
    }

    pub fn with_triple(mut self, triple: Triple) -> Self {
        self.triples.insert(triple);
        self
    }

    pub fn with_triples(mut self, triples: impl IntoIterator<Item = Triple>) -> Self {
        self.triples.extend(triples);
        self
    }

    /// Unions another value's provenance into this one.
    pub fn append<U>(mut self, other: &Translated<U>) -> Self {
        self.triples.extend(other.triples.iter().cloned());
        self
    }

    pub fn object(&self) -> &T {
        &self.object
    }

    pub fn triples(&self) -> &BTreeSet<Triple> {
        &self.triples
    }

    pub fn into_object(self) -> T {
        self.object
    }

    pub fn into_parts(self) -> (T, BTreeSet<Triple>) {
        (self.object, self.triples)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Translated<U> {
        Translated {
            object: f(self.object),
            triples: self.triples,
        }
    }

    /// Pairs two values, uniting their provenance.
    pub fn zip<U>(mut self, other: Translated<U>) -> Translated<(T, U)> {
        self.triples.extend(other.triples);
        Translated {
            object: (self.object, other.object),
            triples: self.triples,
        }
    }
}

impl<T: Ord> FromIterator<Translated<T>> for Translated<BTreeSet<T>> {
    fn from_iter<I: IntoIterator<Item = Translated<T>>>(iter: I) -> Self {
        let mut out = Translated::leaf(BTreeSet::new());
        for item in iter {
            out.triples.extend(item.triples);
            out.object.insert(item.object);
        }
        out
    }
}

impl<T> FromIterator<Translated<T>> for Translated<Vec<T>> {
    fn from_iter<I: IntoIterator<Item = Translated<T>>>(iter: I) -> Self {
        let mut out = Translated::leaf(Vec::new());
        for item in iter {
            out.triples.extend(item.triples);
            out.object.push(item.object);
        }
        out
    }
}
