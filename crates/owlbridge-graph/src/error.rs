//! Graph-level errors.

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("malformed RDF list at {head}: {reason}")]
    MalformedList { head: String, reason: String },

    #[error("cyclic RDF list at {head}")]
    CyclicList { head: String },

    #[error("invalid RDF term `{term}`: {reason}")]
    InvalidTerm { term: String, reason: String },
}
