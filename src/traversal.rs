use std::collections::BTreeSet;

use log::debug;

use crate::bdd::Bdd;
use crate::error::Result;
use crate::reference::Ref;

impl Bdd {
    /// All nodes reachable from `root`, terminals included.
    pub fn reachable_nodes(&self, root: Ref) -> Result<BTreeSet<Ref>> {
        self.check(root)?;
        debug!("reachable_nodes(root = {})", root);
        Ok(self.descendants([root]))
    }

    /// The distinct top variables of the non-terminal nodes reachable from `root`.
    pub fn reachable_variables(&self, root: Ref) -> Result<BTreeSet<Ref>> {
        self.check(root)?;
        debug!("reachable_variables(root = {})", root);
        Ok(self
            .descendants([root])
            .into_iter()
            .filter(|r| !r.is_terminal())
            .map(|r| self.variable(r))
            .collect())
    }

    /// Number of nodes reachable from `f`, terminals included.
    pub fn size(&self, f: Ref) -> Result<usize> {
        Ok(self.reachable_nodes(f)?.len())
    }

    pub(crate) fn descendants(&self, nodes: impl IntoIterator<Item = Ref>) -> BTreeSet<Ref> {
        let mut visited = BTreeSet::new();
        let mut stack: Vec<Ref> = nodes.into_iter().collect();

        while let Some(node) = stack.pop() {
            if visited.insert(node) && !node.is_terminal() {
                let n = self.node(node);
                stack.push(n.low);
                stack.push(n.high);
            }
        }

        visited
    }
}
