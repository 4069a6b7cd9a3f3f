use crate::reference::Ref;

/// The `(variable, high, low)` triple of a node.
///
/// Terminals carry their own handle in every field. A variable node `v`
/// has `variable == v`, `high == TRUE`, `low == FALSE`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Node {
    pub variable: Ref,
    pub high: Ref,
    pub low: Ref,
}

impl Node {
    pub const fn new(variable: Ref, high: Ref, low: Ref) -> Self {
        Self { variable, high, low }
    }

    pub(crate) const fn terminal(r: Ref) -> Self {
        Self::new(r, r, r)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_equal_triples_hash_equal() {
        let a = Node::new(Ref::new(2), Ref::TRUE, Ref::FALSE);
        let b = Node::new(Ref::new(2), Ref::TRUE, Ref::FALSE);
        let c = Node::new(Ref::new(2), Ref::FALSE, Ref::TRUE);

        let set: HashSet<Node> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_terminal_is_self_referencing() {
        let t = Node::terminal(Ref::TRUE);
        assert_eq!(t.variable, Ref::TRUE);
        assert_eq!(t.high, Ref::TRUE);
        assert_eq!(t.low, Ref::TRUE);
    }
}
