//! RDF graph collaborator for the OWL/RDF bridge.
//!
//! - [`Graph`]: an indexed, deterministic set of [`Triple`]s with list helpers
//! - [`Statement`]: a triple in the context of its graph, with annotation lookup
//! - typed views (`is_class_iri`, `class_shape`, `blank_role`, ...) used to
//!   recognize axioms without decoding them
//! - [`load_graph`]: Turtle / N-Triples / RDF/XML loading through sophia

pub mod error;
pub mod graph;
pub mod list;
pub mod load;
pub mod node;
pub mod statement;
pub mod view;

pub use error::GraphError;
pub use graph::Graph;
pub use list::RdfList;
pub use load::{load_graph, load_graph_file, RdfFormat};
pub use node::{BlankId, Node, RdfLiteral, Triple};
pub use statement::Statement;
pub use view::{AtomShape, BlankRole, ClassShape, DataRangeShape};
