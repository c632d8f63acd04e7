//! Class expressions and data ranges.
//!
//! Reading walks blank-node structure depth first. Every structural node
//! entered is pushed on an [`ExpansionPath`]; meeting a node already on the
//! path fails with [`TranslateError::Cycle`] instead of recursing forever.

mod read;
mod write;

use owlbridge_graph::Node;

use crate::error::{Result, TranslateError};

/// Nesting beyond this is treated as malformed rather than walked.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

/// Structural nodes currently being expanded, outermost first.
#[derive(Debug, Default)]
pub struct ExpansionPath {
    nodes: Vec<Node>,
}

impl ExpansionPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(&self) -> usize {
        self.nodes.len()
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.nodes.contains(node)
    }

    /// Runs `f` with `node` on the path.
    pub fn enter<T>(
        &mut self,
        node: &Node,
        f: impl FnOnce(&mut ExpansionPath) -> Result<T>,
    ) -> Result<T> {
        if self.contains(node) {
            return Err(TranslateError::cycle(node));
        }
        if self.nodes.len() >= MAX_EXPRESSION_DEPTH {
            return Err(TranslateError::structural(
                node,
                format!("expression nested deeper than {MAX_EXPRESSION_DEPTH}"),
            ));
        }
        self.nodes.push(node.clone());
        let out = f(self);
        self.nodes.pop();
        out
    }
}
