//! Append-only node store with a hash-cons (unique) table.
//!
//! Nodes live in a plain `Vec<Node>` and are addressed by their position.
//! The unique table maps every non-terminal `(variable, high, low)` triple to
//! the single handle representing it, so [`Storage::put`] is the only way a
//! composite node enters the store.

use std::collections::HashMap;

use log::trace;

use crate::node::Node;
use crate::reference::Ref;

#[derive(Debug, Clone)]
pub struct Storage {
    nodes: Vec<Node>,
    unique: HashMap<Node, Ref>,
    labels: HashMap<Ref, String>,
    variables: HashMap<String, Ref>,
}

impl Storage {
    pub fn new(capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(2));
        nodes.push(Node::terminal(Ref::FALSE));
        nodes.push(Node::terminal(Ref::TRUE));

        Self {
            nodes,
            unique: HashMap::with_capacity(capacity),
            labels: HashMap::new(),
            variables: HashMap::new(),
        }
    }

    /// Number of nodes in the store, terminals included.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of variables registered so far.
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn contains(&self, r: Ref) -> bool {
        r.index() < self.nodes.len()
    }

    pub fn node(&self, r: Ref) -> Node {
        self.nodes[r.index()]
    }
    pub fn variable(&self, r: Ref) -> Ref {
        self.nodes[r.index()].variable
    }

    pub fn label(&self, r: Ref) -> Option<&str> {
        self.labels.get(&r).map(String::as_str)
    }

    pub fn lookup_label(&self, label: &str) -> Option<Ref> {
        self.variables.get(label).copied()
    }

    /// Variables in creation (= ordering) order.
    pub fn variables(&self) -> Vec<Ref> {
        let mut vars: Vec<Ref> = self.variables.values().copied().collect();
        vars.sort();
        vars
    }

    fn alloc(&mut self, node: Node) -> Ref {
        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "Storage is full");
        let r = Ref::new(index as u32);
        self.nodes.push(node);
        r
    }

    /// Append a fresh variable node labelled `label`.
    ///
    /// The caller must have checked that the label is not taken.
    pub fn add_variable(&mut self, label: &str) -> Ref {
        assert!(!self.variables.contains_key(label), "Label '{}' is taken", label);

        let index = self.nodes.len() as u32;
        let v = Ref::new(index);
        let node = Node::new(v, Ref::TRUE, Ref::FALSE);
        let r = self.alloc(node);
        debug_assert_eq!(r, v);

        self.unique.insert(node, r);
        self.labels.insert(r, label.to_string());
        self.variables.insert(label.to_string(), r);
        r
    }

    /// Find or create the node for `(variable, high, low)`.
    ///
    /// Equal children collapse to the child itself.
    pub fn put(&mut self, variable: Ref, high: Ref, low: Ref) -> Ref {
        if high == low {
            return high;
        }

        debug_assert!(!variable.is_terminal(), "Terminal cannot be a decision variable");
        debug_assert!(
            high.is_terminal() || variable < self.variable(high),
            "Ordering violated: {} must precede {}",
            variable,
            self.variable(high)
        );
        debug_assert!(
            low.is_terminal() || variable < self.variable(low),
            "Ordering violated: {} must precede {}",
            variable,
            self.variable(low)
        );

        let node = Node::new(variable, high, low);
        if let Some(&r) = self.unique.get(&node) {
            return r;
        }

        let r = self.alloc(node);
        trace!("put: new node {} = ({}, {}, {})", r, variable, high, low);
        self.unique.insert(node, r);
        r
    }
}
