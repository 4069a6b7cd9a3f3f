//! BDD to DOT (Graphviz) conversion.
//!
//! The generated graph follows these conventions:
//! - **Terminal nodes** are boxes labelled `0` and `1`
//! - **Decision nodes** are ellipses labelled with their variable's name,
//!   or `x<handle>` for an unnamed variable
//! - **Edges**: solid for high (then), dashed for low (else)
//!
//! The export only reads the manager; it never creates nodes.
//!
//! # Examples
//!
//! ```
//! use robdd::bdd::Bdd;
//!
//! let bdd = Bdd::default();
//! let a = bdd.create_variable("a").unwrap();
//! let b = bdd.create_variable("b").unwrap();
//! let f = bdd.and2(a, b).unwrap();
//!
//! let dot = bdd.to_dot(f).unwrap();
//! assert!(dot.starts_with("digraph BDD {"));
//! // Render with: dot -Tpng output.dot -o output.png
//! ```

use std::fmt::Write as _;
use std::path::Path;

use log::debug;

use crate::bdd::Bdd;
use crate::error::BddError;
use crate::reference::Ref;

/// Visual settings for the DOT output.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for decision nodes (default: "ellipse")
    pub node_shape: &'static str,
    /// Shape for terminal nodes (default: "box")
    pub terminal_shape: &'static str,
    /// Style for high (then) edges (default: "solid")
    pub high_edge_style: &'static str,
    /// Style for low (else) edges (default: "dashed")
    pub low_edge_style: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            node_shape: "ellipse",
            terminal_shape: "box",
            high_edge_style: "solid",
            low_edge_style: "dashed",
        }
    }
}

/// Failure while exporting a diagram.
#[derive(Debug)]
pub enum DotError {
    Bdd(BddError),
    Fmt(std::fmt::Error),
    Io(std::io::Error),
}

impl From<BddError> for DotError {
    fn from(e: BddError) -> Self {
        DotError::Bdd(e)
    }
}

impl From<std::fmt::Error> for DotError {
    fn from(e: std::fmt::Error) -> Self {
        DotError::Fmt(e)
    }
}

impl From<std::io::Error> for DotError {
    fn from(e: std::io::Error) -> Self {
        DotError::Io(e)
    }
}

impl std::fmt::Display for DotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DotError::Bdd(e) => write!(f, "BDD error: {}", e),
            DotError::Fmt(e) => write!(f, "Formatting error: {}", e),
            DotError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for DotError {}

/// Escape `label` for use inside a double-quoted DOT string.
fn escape_label(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Bdd {
    /// Converts the diagram rooted at `root` to DOT format.
    pub fn to_dot(&self, root: Ref) -> Result<String, DotError> {
        self.to_dot_with_config(root, &DotConfig::default())
    }

    pub fn to_dot_with_config(&self, root: Ref, config: &DotConfig) -> Result<String, DotError> {
        debug!("to_dot(root = {})", root);
        let nodes = self.reachable_nodes(root)?;

        let mut dot = String::new();
        writeln!(dot, "digraph BDD {{")?;
        writeln!(dot, "  rankdir=TB;")?;

        for &id in nodes.iter() {
            if self.is_zero(id) {
                writeln!(dot, "  {} [shape={}, label=\"0\"];", id.raw(), config.terminal_shape)?;
            } else if self.is_one(id) {
                writeln!(dot, "  {} [shape={}, label=\"1\"];", id.raw(), config.terminal_shape)?;
            } else {
                let label = escape_label(&self.variable_label(id)?);
                writeln!(dot, "  {} [shape={}, label=\"{}\"];", id.raw(), config.node_shape, label)?;
            }
        }

        for &id in nodes.iter() {
            if id.is_terminal() {
                continue;
            }
            let node = self.node(id);
            writeln!(
                dot,
                "  {} -> {} [style={}];",
                id.raw(),
                node.high.raw(),
                config.high_edge_style
            )?;
            writeln!(
                dot,
                "  {} -> {} [style={}];",
                id.raw(),
                node.low.raw(),
                config.low_edge_style
            )?;
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }

    /// Writes the DOT rendering of `root` to `path`.
    pub fn write_dot(&self, path: impl AsRef<Path>, root: Ref) -> Result<(), DotError> {
        let dot = self.to_dot(root)?;
        std::fs::write(path, dot)?;
        Ok(())
    }
}
