//! Loading graphs from Turtle, N-Triples and RDF/XML via sophia.

use std::path::Path;

use anyhow::{anyhow, Result};
use owlbridge_model::Iri;
use sophia::api::prelude::*;

use crate::error::GraphError;
use crate::graph::Graph;
// `Triple` stays qualified here: the sophia prelude exports a trait of that name.
use crate::node::{self, BlankId, Node, RdfLiteral};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfFormat {
    NTriples,
    Turtle,
    RdfXml,
}

impl RdfFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "nt" | "ntriples" => Some(RdfFormat::NTriples),
            "ttl" | "turtle" => Some(RdfFormat::Turtle),
            "rdf" | "owl" | "xml" => Some(RdfFormat::RdfXml),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{message}")]
struct LoadSinkError {
    message: String,
}

impl From<GraphError> for LoadSinkError {
    fn from(value: GraphError) -> Self {
        Self {
            message: value.to_string(),
        }
    }
}

fn unescape_rdf_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('"') => out.push('"'),
            Some('\'') => out.push('\''),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

/// Parses the N-Triples-style display form sophia gives its terms.
fn parse_term_display(term: &str) -> Result<Node, GraphError> {
    let s = term.trim();
    let invalid = |reason: &str| GraphError::InvalidTerm {
        term: s.to_string(),
        reason: reason.to_string(),
    };

    if let Some(rest) = s.strip_prefix('<').and_then(|t| t.strip_suffix('>')) {
        return Ok(Node::Iri(Iri::new(rest)));
    }

    if let Some(rest) = s.strip_prefix("_:") {
        return Ok(Node::Blank(BlankId::new(rest)));
    }

    if !s.starts_with('"') {
        return Err(invalid("unsupported term form"));
    }

    let mut end_quote = None;
    let mut escaped = false;
    for (i, ch) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            end_quote = Some(i);
            break;
        }
    }
    let end = end_quote.ok_or_else(|| invalid("missing closing quote"))?;

    let lexical = unescape_rdf_string(&s[1..end]);
    let rest = s[end + 1..].trim();

    if let Some(lang) = rest.strip_prefix('@') {
        return Ok(Node::Literal(RdfLiteral::new(lexical, None, Some(lang.to_string()))));
    }
    if let Some(dt) = rest.strip_prefix("^^") {
        let dt = dt.trim();
        let dt = dt
            .strip_prefix('<')
            .and_then(|t| t.strip_suffix('>'))
            .unwrap_or(dt);
        return Ok(Node::Literal(RdfLiteral::typed(lexical, dt)));
    }
    Ok(Node::Literal(RdfLiteral::string(lexical)))
}

fn triple_from_display(s: &str, p: &str, o: &str) -> Result<node::Triple, GraphError> {
    let subject = parse_term_display(s)?;
    if subject.is_literal() {
        return Err(GraphError::InvalidTerm {
            term: s.to_string(),
            reason: "literal in subject position".to_string(),
        });
    }
    let Node::Iri(predicate) = parse_term_display(p)? else {
        return Err(GraphError::InvalidTerm {
            term: p.to_string(),
            reason: "predicate must be an IRI".to_string(),
        });
    };
    let object = parse_term_display(o)?;
    Ok(node::Triple::new(subject, predicate, object))
}

/// Parses `bytes` in the given surface format into a fresh graph.
pub fn load_graph(bytes: &[u8], format: RdfFormat) -> Result<Graph> {
    let cursor = std::io::Cursor::new(bytes);
    let reader = std::io::BufReader::new(cursor);
    let mut graph = Graph::new();

    let mut sink = |s: String, p: String, o: String| -> std::result::Result<(), LoadSinkError> {
        graph.add(triple_from_display(&s, &p, &o)?);
        Ok(())
    };

    match format {
        RdfFormat::NTriples => {
            let mut parser = sophia::turtle::parser::nt::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| {
                    sink(t.s().to_string(), t.p().to_string(), t.o().to_string())
                })
                .map_err(|e| anyhow!("failed to parse N-Triples: {e}"))?;
        }
        RdfFormat::Turtle => {
            let mut parser = sophia::turtle::parser::turtle::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| {
                    sink(t.s().to_string(), t.p().to_string(), t.o().to_string())
                })
                .map_err(|e| anyhow!("failed to parse Turtle: {e}"))?;
        }
        RdfFormat::RdfXml => {
            let mut parser = sophia::xml::parser::parse_bufread(reader);
            parser
                .try_for_each_triple(|t| {
                    sink(t.s().to_string(), t.p().to_string(), t.o().to_string())
                })
                .map_err(|e| anyhow!("failed to parse RDF/XML: {e}"))?;
        }
    }

    tracing::debug!(triples = graph.len(), ?format, "loaded graph");
    Ok(graph)
}

/// Loads a file, picking the format from its extension.
pub fn load_graph_file(path: &Path) -> Result<Graph> {
    let bytes = std::fs::read(path)?;
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let format = RdfFormat::from_extension(ext)
        .ok_or_else(|| anyhow!("unsupported RDF format: .{ext}"))?;
    load_graph(&bytes, format).map_err(|e| anyhow!("{}: {e}", path.display()))
}

impl Graph {
    pub fn from_turtle(text: &str) -> Result<Graph> {
        load_graph(text.as_bytes(), RdfFormat::Turtle)
    }

    pub fn from_ntriples(text: &str) -> Result<Graph> {
        load_graph(text.as_bytes(), RdfFormat::NTriples)
    }
}
