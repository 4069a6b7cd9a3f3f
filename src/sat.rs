use std::collections::HashMap;

use num_bigint::BigUint;

use crate::bdd::Bdd;
use crate::error::Result;
use crate::reference::Ref;

impl Bdd {
    /// Evaluate `f` under `assignment`. Unassigned variables are `false`.
    pub fn eval(&self, f: Ref, assignment: &HashMap<Ref, bool>) -> Result<bool> {
        self.check(f)?;

        let mut current = f;
        while !current.is_terminal() {
            let node = self.node(current);
            let value = assignment.get(&node.variable).copied().unwrap_or(false);
            current = if value { node.high } else { node.low };
        }
        Ok(self.is_one(current))
    }

    /// Returns one satisfying assignment of `f` as `(variable, value)` pairs
    /// along a path to `1`, or `None` if `f` is unsatisfiable.
    pub fn one_sat(&self, f: Ref) -> Result<Option<Vec<(Ref, bool)>>> {
        self.check(f)?;
        if self.is_zero(f) {
            return Ok(None);
        }

        let mut path = Vec::new();
        let mut current = f;

        // Every non-terminal node reaches `1`, so any branch other than `0` is satisfiable.
        while !self.is_one(current) {
            let node = self.node(current);
            if !self.is_zero(node.high) {
                path.push((node.variable, true));
                current = node.high;
            } else {
                path.push((node.variable, false));
                current = node.low;
            }
        }

        Ok(Some(path))
    }

    /// Number of satisfying assignments of `f` over all variables created so far.
    pub fn sat_count(&self, f: Ref) -> Result<BigUint> {
        self.check(f)?;
        let max = BigUint::from(1u32) << self.variable_count();
        Ok(self.sat_count_(f, &max))
    }

    /// Post-order walk on an explicit stack; `count(v) = (count(low) + count(high)) / 2`.
    fn sat_count_(&self, f: Ref, max: &BigUint) -> BigUint {
        let mut cache: HashMap<Ref, BigUint> = HashMap::new();
        cache.insert(Ref::FALSE, BigUint::ZERO);
        cache.insert(Ref::TRUE, max.clone());

        let mut stack = vec![(f, false)];
        while let Some((node, expanded)) = stack.pop() {
            if cache.contains_key(&node) {
                continue;
            }
            let n = self.node(node);
            if expanded {
                let count: BigUint = (&cache[&n.low] + &cache[&n.high]) >> 1;
                cache.insert(node, count);
            } else {
                stack.push((node, true));
                if !cache.contains_key(&n.high) {
                    stack.push((n.high, false));
                }
                if !cache.contains_key(&n.low) {
                    stack.push((n.low, false));
                }
            }
        }

        cache.remove(&f).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_eval() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();
        let b = bdd.create_variable("b").unwrap();
        let f = bdd.xor2(a, b).unwrap();

        for (va, vb) in [(false, false), (false, true), (true, false), (true, true)] {
            let assignment = HashMap::from([(a, va), (b, vb)]);
            assert_eq!(bdd.eval(f, &assignment).unwrap(), va ^ vb);
        }
        assert!(!bdd.eval(f, &HashMap::new()).unwrap());
    }

    #[test]
    fn test_one_sat() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();
        let b = bdd.create_variable("b").unwrap();
        let not_b = bdd.negate(b).unwrap();
        let f = bdd.and2(a, not_b).unwrap();

        let model = bdd.one_sat(f).unwrap().unwrap();
        assert_eq!(model, vec![(a, true), (b, false)]);
        assert_eq!(bdd.one_sat(bdd.zero()).unwrap(), None);
        assert_eq!(bdd.one_sat(bdd.one()).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_sat_count_terminal() {
        let bdd = Bdd::default();
        bdd.create_variable("a").unwrap();
        bdd.create_variable("b").unwrap();

        assert_eq!(bdd.sat_count(bdd.zero()).unwrap(), BigUint::from(0u32));
        assert_eq!(bdd.sat_count(bdd.one()).unwrap(), BigUint::from(4u32));
    }

    #[test]
    fn test_sat_count_skips_levels() {
        let bdd = Bdd::default();
        let a = bdd.create_variable("a").unwrap();
        let _b = bdd.create_variable("b").unwrap();
        let c = bdd.create_variable("c").unwrap();

        assert_eq!(bdd.sat_count(a).unwrap(), BigUint::from(4u32));
        assert_eq!(bdd.sat_count(bdd.and2(a, c).unwrap()).unwrap(), BigUint::from(2u32));
        assert_eq!(bdd.sat_count(bdd.or2(a, c).unwrap()).unwrap(), BigUint::from(6u32));
        assert_eq!(bdd.sat_count(bdd.xor2(a, c).unwrap()).unwrap(), BigUint::from(4u32));
    }
}
