//! Loader configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// What a bulk read does with a statement that passes recognition but
/// fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Surface the error to the caller.
    #[default]
    Strict,
    /// Log a warning and skip the statement.
    Lenient,
}

/// Options consulted while reading axioms from a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Read `Declaration` axioms at all.
    pub allow_read_declarations: bool,
    /// Read annotation axioms (assertions, sub-properties, domains, ranges).
    pub load_annotation_axioms: bool,
    /// Plain annotation triples on an entity are standalone annotation
    /// assertions even when they are themselves annotated.
    pub allow_bulk_annotation_assertions: bool,
    /// Skip annotation-property domain/range/sub-property candidates that
    /// also read as object or data property axioms.
    pub ignore_annotation_axiom_overlaps: bool,
    /// Strict or lenient handling of undecodable statements.
    pub error_policy: ErrorPolicy,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            allow_read_declarations: true,
            load_annotation_axioms: true,
            allow_bulk_annotation_assertions: true,
            ignore_annotation_axiom_overlaps: true,
            error_policy: ErrorPolicy::Strict,
        }
    }
}

impl LoaderConfig {
    pub fn with_read_declarations(mut self, allow: bool) -> Self {
        self.allow_read_declarations = allow;
        self
    }

    pub fn with_annotation_axioms(mut self, load: bool) -> Self {
        self.load_annotation_axioms = load;
        self
    }

    pub fn with_bulk_annotation_assertions(mut self, allow: bool) -> Self {
        self.allow_bulk_annotation_assertions = allow;
        self
    }

    pub fn with_ignore_annotation_overlaps(mut self, ignore: bool) -> Self {
        self.ignore_annotation_axiom_overlaps = ignore;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    pub fn is_lenient(&self) -> bool {
        self.error_policy == ErrorPolicy::Lenient
    }

    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(ConfigError::from)
    }
}
