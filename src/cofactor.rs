//! Cofactors: restricting a function by fixing one variable.
//!
//! [`Bdd::restrict_true`] and [`Bdd::restrict_false`] compute the exact
//! Shannon cofactor with respect to an arbitrary variable and re-canonicalize
//! the result. [`Bdd::branch_high`] and [`Bdd::branch_low`] only expose the
//! node's own children.

use std::cmp::Ordering;
use std::collections::HashMap;

use log::debug;

use crate::bdd::Bdd;
use crate::cache::OpKey;
use crate::error::Result;
use crate::reference::Ref;

impl Bdd {
    /// `f` with the top variable of `x` fixed to `true`.
    ///
    /// If `x` is a constant, `f` is returned unchanged. A composite `x` is not
    /// assumed true as a whole: only its top variable is fixed, so
    /// `restrict_true(f, f)` for a composite `f` is the high cofactor of `f`,
    /// not `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use robdd::bdd::Bdd;
    ///
    /// let bdd = Bdd::default();
    /// let a = bdd.create_variable("a").unwrap();
    /// let b = bdd.create_variable("b").unwrap();
    /// let f = bdd.and2(a, b).unwrap();
    /// assert_eq!(bdd.restrict_true(f, a).unwrap(), b);
    /// assert_eq!(bdd.restrict_false(f, a).unwrap(), bdd.zero());
    /// ```
    pub fn restrict_true(&self, f: Ref, x: Ref) -> Result<Ref> {
        self.check(f)?;
        self.check(x)?;
        debug!("restrict_true(f = {}, x = {})", f, x);
        Ok(self.restrict(f, x, true))
    }

    /// `f` with the top variable of `x` fixed to `false`.
    pub fn restrict_false(&self, f: Ref, x: Ref) -> Result<Ref> {
        self.check(f)?;
        self.check(x)?;
        debug!("restrict_false(f = {}, x = {})", f, x);
        Ok(self.restrict(f, x, false))
    }

    /// The high (then) child of `f`, or `f` itself if it is a constant.
    pub fn branch_high(&self, f: Ref) -> Result<Ref> {
        self.check(f)?;
        if f.is_terminal() {
            return Ok(f);
        }
        Ok(self.node(f).high)
    }

    /// The low (else) child of `f`, or `f` itself if it is a constant.
    pub fn branch_low(&self, f: Ref) -> Result<Ref> {
        self.check(f)?;
        if f.is_terminal() {
            return Ok(f);
        }
        Ok(self.node(f).low)
    }

    /// Cofactors `(high, low)` of `f` with respect to `v`, where `v` is not
    /// below the top variable of `f`.
    pub(crate) fn top_cofactors(&self, f: Ref, v: Ref) -> (Ref, Ref) {
        if f.is_terminal() {
            return (f, f);
        }
        let node = self.node(f);
        assert!(
            v <= node.variable,
            "Cofactor variable {} is below the top variable {} of {}",
            v,
            node.variable,
            f
        );
        if v < node.variable {
            (f, f)
        } else {
            (node.high, node.low)
        }
    }

    /// Restriction that needs no descent into `f`, if there is one.
    fn restrict_known(&self, f: Ref, v: Ref, value: bool, memo: &HashMap<Ref, Ref>) -> Option<Ref> {
        if f.is_terminal() {
            return Some(f);
        }
        let node = self.node(f);
        match node.variable.cmp(&v) {
            // `f` does not depend on `v`
            Ordering::Greater => Some(f),
            Ordering::Equal => Some(if value { node.high } else { node.low }),
            Ordering::Less => match memo.get(&f) {
                Some(&res) => Some(res),
                None => self.cache_get(&OpKey::Restrict(f, v, value)),
            },
        }
    }

    pub(crate) fn restrict(&self, f: Ref, x: Ref, value: bool) -> Ref {
        if x.is_terminal() {
            return f;
        }
        let v = self.variable(x);

        let mut memo = HashMap::new();
        if let Some(res) = self.restrict_known(f, v, value, &memo) {
            return res;
        }

        let mut stack = vec![(f, false)];
        while let Some((g, expanded)) = stack.pop() {
            if memo.contains_key(&g) {
                continue;
            }
            if !expanded {
                if let Some(res) = self.restrict_known(g, v, value, &memo) {
                    memo.insert(g, res);
                    continue;
                }
                let node = self.node(g);
                stack.push((g, true));
                stack.push((node.low, false));
                stack.push((node.high, false));
            } else {
                let node = self.node(g);
                let high = self
                    .restrict_known(node.high, v, value, &memo)
                    .expect("high child must be restricted before its parent");
                let low = self
                    .restrict_known(node.low, v, value, &memo)
                    .expect("low child must be restricted before its parent");
                let res = self.mk_node(node.variable, high, low);
                self.cache_insert(OpKey::Restrict(g, v, value), res);
                memo.insert(g, res);
            }
        }

        memo[&f]
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_restrict_variable_itself() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();

        assert_eq!(bdd.restrict_true(a, a).unwrap(), bdd.one());
        assert_eq!(bdd.restrict_false(a, a).unwrap(), bdd.zero());
    }

    #[test]
    fn test_restrict_constant() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();

        assert_eq!(bdd.restrict_true(bdd.one(), a).unwrap(), bdd.one());
        assert_eq!(bdd.restrict_false(bdd.zero(), a).unwrap(), bdd.zero());
    }

    #[test]
    fn test_restrict_by_constant_is_identity() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();
        let b = bdd.create_variable("b").unwrap();
        let f = bdd.or2(a, b).unwrap();

        assert_eq!(bdd.restrict_true(f, bdd.one()).unwrap(), f);
        assert_eq!(bdd.restrict_false(f, bdd.zero()).unwrap(), f);
    }

    #[test]
    fn test_restrict_top_variable() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();
        let b = bdd.create_variable("b").unwrap();
        let f = bdd.and2(a, b).unwrap();

        assert_eq!(bdd.restrict_true(f, a).unwrap(), b);
        assert_eq!(bdd.restrict_true(f, a).unwrap(), bdd.and2(bdd.one(), b).unwrap());
        assert_eq!(bdd.restrict_false(f, a).unwrap(), bdd.zero());
    }

    #[test]
    fn test_restrict_inner_variable() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();
        let b = bdd.create_variable("b").unwrap();
        let c = bdd.create_variable("c").unwrap();

        // f = (a <-> b) | c
        let f = bdd.or2(bdd.xnor2(a, b).unwrap(), c).unwrap();

        // f|b=0 = ~a | c
        let not_a = bdd.negate(a).unwrap();
        assert_eq!(bdd.restrict_false(f, b).unwrap(), bdd.or2(not_a, c).unwrap());
        // f|b=1 = a | c
        assert_eq!(bdd.restrict_true(f, b).unwrap(), bdd.or2(a, c).unwrap());
    }

    #[test]
    fn test_restrict_absent_variable() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();
        let b = bdd.create_variable("b").unwrap();
        let c = bdd.create_variable("c").unwrap();
        let f = bdd.and2(b, c).unwrap();

        // `a` precedes the support of `f`.
        assert_eq!(bdd.restrict_true(f, a).unwrap(), f);

        // `b` is missing from the middle of `g`'s support.
        let g = bdd.and2(a, c).unwrap();
        let size = bdd.node_count();
        assert_eq!(bdd.restrict_false(g, b).unwrap(), g);
        assert_eq!(bdd.node_count(), size);
    }

    #[test]
    fn test_restrict_by_composite_uses_top_variable() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();
        let b = bdd.create_variable("b").unwrap();
        let f = bdd.or2(a, b).unwrap();
        let x = bdd.and2(a, b).unwrap();

        assert_eq!(bdd.restrict_false(f, x).unwrap(), bdd.restrict_false(f, a).unwrap());

        // Restricting a function by itself fixes only its top variable.
        let g = bdd.and2(a, b).unwrap();
        assert_eq!(bdd.restrict_true(g, g).unwrap(), b);
        assert_ne!(bdd.restrict_true(g, g).unwrap(), bdd.one());
    }

    #[test]
    fn test_branches() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();
        let b = bdd.create_variable("b").unwrap();
        let f = bdd.or2(a, b).unwrap();

        assert_eq!(bdd.branch_high(f).unwrap(), bdd.one());
        assert_eq!(bdd.branch_low(f).unwrap(), b);
        assert_eq!(bdd.branch_high(bdd.zero()).unwrap(), bdd.zero());
        assert_eq!(bdd.branch_low(bdd.one()).unwrap(), bdd.one());
    }

    #[test]
    fn test_branch_differs_from_restrict() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();
        let b = bdd.create_variable("b").unwrap();
        let f = bdd.and2(a, b).unwrap();

        // Restricting by `b` descends, the branch is positional.
        assert_eq!(bdd.restrict_true(f, b).unwrap(), a);
        assert_eq!(bdd.branch_high(f).unwrap(), b);
    }

    #[test]
    fn test_invalid_handles() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();

        assert!(bdd.restrict_true(a, Ref::new(9)).is_err());
        assert!(bdd.restrict_false(Ref::new(9), a).is_err());
        assert!(bdd.branch_high(Ref::new(9)).is_err());
        assert!(bdd.branch_low(Ref::new(3)).is_err());
    }
}
