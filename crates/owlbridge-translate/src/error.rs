//! Translation errors.

use owlbridge_graph::{GraphError, Node, Triple};
use owlbridge_model::AxiomKind;

pub type Result<T, E = TranslateError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The graph around a recognized statement is not shaped as expected.
    #[error("malformed structure at {node}: {message}")]
    Structural { node: String, message: String },

    /// A structural node refers back to itself through expansion.
    #[error("Recursive loop on {node}")]
    Cycle { node: String },

    #[error("{node} cannot be read as {expected}")]
    UnsupportedShape { node: String, expected: &'static str },

    /// The caller handed a translator something it does not translate.
    #[error("contract violation: {message}")]
    Contract { message: String },

    #[error("{kind} has no RDF form: {reason}")]
    Unwritable { kind: AxiomKind, reason: String },

    /// A decoding failure, tagged with the statement being read.
    #[error("while reading `{triple}`: {source}")]
    Statement {
        triple: String,
        #[source]
        source: Box<TranslateError>,
    },
}

impl TranslateError {
    pub fn structural(node: &Node, message: impl Into<String>) -> Self {
        TranslateError::Structural {
            node: node.to_string(),
            message: message.into(),
        }
    }

    pub fn cycle(node: &Node) -> Self {
        TranslateError::Cycle {
            node: node.to_string(),
        }
    }

    pub fn unsupported(node: &Node, expected: &'static str) -> Self {
        TranslateError::UnsupportedShape {
            node: node.to_string(),
            expected,
        }
    }

    pub fn wrong_kind(expected: AxiomKind, found: AxiomKind) -> Self {
        TranslateError::Contract {
            message: format!("{expected} translator given a {found} axiom"),
        }
    }

    pub fn in_statement(triple: &Triple, source: TranslateError) -> Self {
        match source {
            already @ TranslateError::Statement { .. } => already,
            other => TranslateError::Statement {
                triple: triple.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// Errors caused by the graph's shape; lenient reads skip these.
    pub fn is_structural(&self) -> bool {
        match self {
            TranslateError::Structural { .. }
            | TranslateError::Cycle { .. }
            | TranslateError::UnsupportedShape { .. } => true,
            TranslateError::Statement { source, .. } => source.is_structural(),
            TranslateError::Contract { .. } | TranslateError::Unwritable { .. } => false,
        }
    }
}

impl From<GraphError> for TranslateError {
    fn from(value: GraphError) -> Self {
        match value {
            GraphError::MalformedList { head, reason } => TranslateError::Structural {
                node: head,
                message: reason,
            },
            GraphError::CyclicList { head } => TranslateError::Cycle { node: head },
            GraphError::InvalidTerm { term, reason } => TranslateError::Structural {
                node: term,
                message: reason,
            },
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid loader config: {0}")]
    Json(#[from] serde_json::Error),
}
