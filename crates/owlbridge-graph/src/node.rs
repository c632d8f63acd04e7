//! RDF terms and triples.

use std::fmt;

use owlbridge_model::vocab::{rdf, xsd};
use owlbridge_model::Iri;
use serde::{Deserialize, Serialize};

/// A blank node label, without the `_:` prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlankId(pub String);

impl BlankId {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A literal as it appears in the graph. The datatype is always filled in:
/// simple literals get `xsd:string`, tagged literals `rdf:langString`.
/// Equality is exact on all three parts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RdfLiteral {
    pub lexical: String,
    pub datatype: Iri,
    pub language: Option<String>,
}

impl RdfLiteral {
    /// Builds a literal from its surface parts, applying the RDF 1.1 defaults.
    pub fn new(
        lexical: impl Into<String>,
        datatype: Option<Iri>,
        language: Option<String>,
    ) -> Self {
        let datatype = match (&language, datatype) {
            (Some(_), _) => Iri::new(rdf::LANG_STRING),
            (None, Some(dt)) => dt,
            (None, None) => Iri::new(xsd::STRING),
        };
        Self {
            lexical: lexical.into(),
            datatype,
            language,
        }
    }

    pub fn string(lexical: impl Into<String>) -> Self {
        Self::new(lexical, None, None)
    }

    pub fn typed(lexical: impl Into<String>, datatype: impl Into<Iri>) -> Self {
        Self::new(lexical, Some(datatype.into()), None)
    }
}

fn escape_ntriples(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for RdfLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", escape_ntriples(&self.lexical))?;
        match &self.language {
            Some(lang) => write!(f, "@{lang}"),
            None => write!(f, "^^{}", self.datatype),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Node {
    Iri(Iri),
    Blank(BlankId),
    Literal(RdfLiteral),
}

impl Node {
    pub fn iri(iri: impl Into<Iri>) -> Self {
        Node::Iri(iri.into())
    }

    pub fn blank(label: impl Into<String>) -> Self {
        Node::Blank(BlankId::new(label))
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Node::Blank(id) => Some(id),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&RdfLiteral> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    /// True if this node is the IRI `iri`.
    pub fn is(&self, iri: &str) -> bool {
        matches!(self, Node::Iri(i) if i.as_str() == iri)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Iri(iri) => iri.fmt(f),
            Node::Blank(id) => id.fmt(f),
            Node::Literal(lit) => lit.fmt(f),
        }
    }
}

impl From<Iri> for Node {
    fn from(value: Iri) -> Self {
        Node::Iri(value)
    }
}

impl From<BlankId> for Node {
    fn from(value: BlankId) -> Self {
        Node::Blank(value)
    }
}

impl From<RdfLiteral> for Node {
    fn from(value: RdfLiteral) -> Self {
        Node::Literal(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Node,
    pub predicate: Iri,
    pub object: Node,
}

impl Triple {
    pub fn new(
        subject: impl Into<Node>,
        predicate: impl Into<Iri>,
        object: impl Into<Node>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

/// N-Triples form, without the trailing dot.
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}
