//! OWL 2 axioms to and from RDF graphs.
//!
//! This crate is the translation layer between the structural model in
//! `owlbridge-model` and the triple store in `owlbridge-graph`:
//!
//! - **Reading** finds the statements that root an axiom of a given kind,
//!   decodes them, and records exactly which triples were consumed
//!   ([`Translated`]).
//! - **Writing** emits the canonical triples for an axiom, including entity
//!   declarations and annotation reification.
//! - **Removal** deletes an axiom's triples while keeping the ones other
//!   axioms still depend on.
//!
//! Entry points live in [`registry`]; behaviour is tuned by [`LoaderConfig`].

mod annotation;
pub mod codec;
pub mod config;
pub mod error;
pub mod expression;
pub mod registry;
pub mod translated;
pub mod translators;

pub use codec::{Reader, Writer};
pub use config::{ErrorPolicy, LoaderConfig};
pub use error::{ConfigError, Result, TranslateError};
pub use expression::{ExpansionPath, MAX_EXPRESSION_DEPTH};
pub use registry::{
    read_all, read_axioms, remove_axiom, test_statement, translator, write_axiom, write_axioms,
};
pub use translated::Translated;
pub use translators::AxiomTranslator;
