//! The [`Bdd`] manager and the ITE engine.
//!
//! All Boolean connectives reduce to [`Bdd::ite`] plus [`Bdd::negate`].
//! Every node goes through the unique table, so two handles are equal
//! exactly when they denote the same Boolean function.
//!
//! The recursive algorithms (ITE, negation, restriction, traversal) run on
//! explicit stacks: native stack usage does not depend on the diagram.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;

use log::debug;

use crate::cache::{Cache, CacheStats, OpKey};
use crate::config::BddConfig;
use crate::error::{BddError, Result};
use crate::node::Node;
use crate::reference::Ref;
use crate::storage::Storage;

enum IteFrame {
    /// Evaluate `ite(i, t, e)`.
    Call(Ref, Ref, Ref),
    /// Both branch results are on the result stack: admit `(variable, high, low)`.
    Build(OpKey, Ref),
}

pub struct Bdd {
    storage: RefCell<Storage>,
    cache: RefCell<Cache>,
}

impl Bdd {
    pub fn new() -> Self {
        Self::with_config(BddConfig::default())
    }

    pub fn with_config(config: BddConfig) -> Self {
        debug!("Bdd::with_config({:?})", config);
        Self {
            storage: RefCell::new(Storage::new(config.storage_capacity())),
            cache: RefCell::new(Cache::with_capacity(config.cache_capacity())),
        }
    }
}

impl Default for Bdd {
    fn default() -> Self {
        Bdd::new()
    }
}

impl Debug for Bdd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let storage = self.storage.borrow();
        f.debug_struct("Bdd")
            .field("size", &storage.size())
            .field("variables", &storage.num_variables())
            .field("cache", &self.cache.borrow().stats())
            .finish()
    }
}

// Store access and queries.
impl Bdd {
    pub fn zero(&self) -> Ref {
        Ref::FALSE
    }
    pub fn one(&self) -> Ref {
        Ref::TRUE
    }

    pub fn is_zero(&self, node: Ref) -> bool {
        node == Ref::FALSE
    }
    pub fn is_one(&self, node: Ref) -> bool {
        node == Ref::TRUE
    }

    /// Fail with [`BddError::InvalidHandle`] unless `node` belongs to this manager.
    pub fn check(&self, node: Ref) -> Result<()> {
        let storage = self.storage.borrow();
        if storage.contains(node) {
            Ok(())
        } else {
            Err(BddError::InvalidHandle {
                handle: node,
                size: storage.size(),
            })
        }
    }

    /// Number of nodes in the store, including both terminals.
    pub fn node_count(&self) -> usize {
        self.storage.borrow().size()
    }

    pub fn variable_count(&self) -> usize {
        self.storage.borrow().num_variables()
    }

    /// All variables, in creation order.
    pub fn variables(&self) -> Vec<Ref> {
        self.storage.borrow().variables()
    }

    pub(crate) fn node(&self, node: Ref) -> Node {
        self.storage.borrow().node(node)
    }

    pub(crate) fn variable(&self, node: Ref) -> Ref {
        self.storage.borrow().variable(node)
    }

    pub(crate) fn mk_node(&self, variable: Ref, high: Ref, low: Ref) -> Ref {
        self.storage.borrow_mut().put(variable, high, low)
    }

    /// Create a new variable, placed after all existing ones in the ordering.
    pub fn create_variable(&self, label: &str) -> Result<Ref> {
        debug!("create_variable(label = {:?})", label);
        let mut storage = self.storage.borrow_mut();
        if storage.lookup_label(label).is_some() {
            return Err(BddError::DuplicateLabel(label.to_string()));
        }
        Ok(storage.add_variable(label))
    }

    /// Look up a variable by its label.
    pub fn variable_by_label(&self, label: &str) -> Option<Ref> {
        self.storage.borrow().lookup_label(label)
    }

    pub fn is_constant(&self, node: Ref) -> Result<bool> {
        self.check(node)?;
        Ok(node.is_terminal())
    }

    pub fn is_variable(&self, node: Ref) -> Result<bool> {
        self.check(node)?;
        Ok(!node.is_terminal() && self.variable(node) == node)
    }

    /// The variable `node` decides on. Terminals return themselves.
    pub fn top_variable(&self, node: Ref) -> Result<Ref> {
        self.check(node)?;
        Ok(self.variable(node))
    }

    /// The node's own label: present for variable nodes only.
    pub fn label(&self, node: Ref) -> Result<Option<String>> {
        self.check(node)?;
        Ok(self.storage.borrow().label(node).map(str::to_string))
    }

    /// Name of the top variable of `node`; `"False"`/`"True"` for terminals.
    pub fn variable_label(&self, node: Ref) -> Result<String> {
        self.check(node)?;
        if self.is_zero(node) {
            return Ok("False".to_string());
        }
        if self.is_one(node) {
            return Ok("True".to_string());
        }
        let storage = self.storage.borrow();
        let v = storage.variable(node);
        Ok(storage
            .label(v)
            .map_or_else(|| format!("x{}", v.raw()), str::to_string))
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.borrow().stats()
    }

    /// Drop all memoized results. Handles stay valid.
    pub fn clear_cache(&self) {
        debug!("clear_cache()");
        self.cache.borrow_mut().clear();
    }

    pub(crate) fn cache_get(&self, key: &OpKey) -> Option<Ref> {
        self.cache.borrow_mut().get(key)
    }

    pub(crate) fn cache_insert(&self, key: OpKey, value: Ref) {
        self.cache.borrow_mut().insert(key, value);
    }
}

// ITE engine.
impl Bdd {
    /// Apply the ITE operation to the arguments.
    ///
    /// ```text
    /// ITE(i, t, e) = (i ∧ t) ∨ (¬i ∧ e)
    /// ```
    ///
    /// # Examples
    ///
    /// ```
    /// use robdd::bdd::Bdd;
    ///
    /// let bdd = Bdd::default();
    /// let a = bdd.create_variable("a").unwrap();
    /// let b = bdd.create_variable("b").unwrap();
    /// let f = bdd.ite(a, b, bdd.zero()).unwrap();
    /// assert_eq!(f, bdd.and2(b, a).unwrap());
    /// ```
    pub fn ite(&self, i: Ref, t: Ref, e: Ref) -> Result<Ref> {
        self.check(i)?;
        self.check(t)?;
        self.check(e)?;
        Ok(self.apply_ite(i, t, e))
    }

    fn ite_terminal(&self, i: Ref, t: Ref, e: Ref) -> Option<Ref> {
        if self.is_one(i) {
            debug!("ite(1,T,E) => T");
            return Some(t);
        }
        if self.is_zero(i) {
            debug!("ite(0,T,E) => E");
            return Some(e);
        }
        if self.is_one(t) && self.is_zero(e) {
            debug!("ite(I,1,0) => I");
            return Some(i);
        }
        if t == e {
            debug!("ite(I,T,T) => T");
            return Some(t);
        }
        None
    }

    /// Smallest top variable among `i` and the non-constant `t`, `e`.
    fn ite_top_variable(&self, i: Ref, t: Ref, e: Ref) -> Ref {
        let storage = self.storage.borrow();
        let mut m = storage.variable(i);
        if !t.is_terminal() {
            m = m.min(storage.variable(t));
        }
        if !e.is_terminal() {
            m = m.min(storage.variable(e));
        }
        m
    }

    pub(crate) fn apply_ite(&self, i: Ref, t: Ref, e: Ref) -> Ref {
        debug!("apply_ite(i = {}, t = {}, e = {})", i, t, e);

        let mut frames = vec![IteFrame::Call(i, t, e)];
        let mut results: Vec<Ref> = Vec::new();

        while let Some(frame) = frames.pop() {
            match frame {
                IteFrame::Call(i, t, e) => {
                    if let Some(res) = self.ite_terminal(i, t, e) {
                        results.push(res);
                        continue;
                    }

                    let key = OpKey::Ite(i, t, e);
                    if let Some(res) = self.cache_get(&key) {
                        debug!("cache: ite(i = {}, t = {}, e = {}) -> {}", i, t, e, res);
                        results.push(res);
                        continue;
                    }

                    let x = self.ite_top_variable(i, t, e);
                    debug!("min variable = {}", x);

                    let (i1, i0) = self.top_cofactors(i, x);
                    let (t1, t0) = self.top_cofactors(t, x);
                    let (e1, e0) = self.top_cofactors(e, x);

                    // High branch is popped first, so its result lands below the low one.
                    frames.push(IteFrame::Build(key, x));
                    frames.push(IteFrame::Call(i0, t0, e0));
                    frames.push(IteFrame::Call(i1, t1, e1));
                }
                IteFrame::Build(key, x) => {
                    let low = results.pop().expect("ITE result stack underflow");
                    let high = results.pop().expect("ITE result stack underflow");
                    let res = self.mk_node(x, high, low);
                    debug!("computed: {:?} -> {}", key, res);
                    self.cache_insert(key, res);
                    results.push(res);
                }
            }
        }

        assert_eq!(results.len(), 1, "ITE must produce exactly one result");
        results[0]
    }
}

// Negation and derived connectives.
impl Bdd {
    /// Complement of `f`.
    pub fn negate(&self, f: Ref) -> Result<Ref> {
        self.check(f)?;
        Ok(self.apply_not(f))
    }

    fn negate_known(&self, f: Ref, memo: &HashMap<Ref, Ref>) -> Option<Ref> {
        if self.is_zero(f) {
            Some(Ref::TRUE)
        } else if self.is_one(f) {
            Some(Ref::FALSE)
        } else if let Some(&res) = memo.get(&f) {
            Some(res)
        } else {
            self.cache_get(&OpKey::Not(f))
        }
    }

    pub(crate) fn apply_not(&self, f: Ref) -> Ref {
        debug!("apply_not(f = {})", f);

        let mut memo = HashMap::new();
        if let Some(res) = self.negate_known(f, &memo) {
            return res;
        }

        let mut stack = vec![(f, false)];
        while let Some((g, expanded)) = stack.pop() {
            if memo.contains_key(&g) {
                continue;
            }
            if !expanded {
                if let Some(res) = self.negate_known(g, &memo) {
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
                    .negate_known(node.high, &memo)
                    .expect("high child must be negated before its parent");
                let low = self
                    .negate_known(node.low, &memo)
                    .expect("low child must be negated before its parent");
                let res = self.mk_node(node.variable, high, low);
                self.cache_insert(OpKey::Not(g), res);
                self.cache_insert(OpKey::Not(res), g);
                memo.insert(g, res);
            }
        }

        memo[&f]
    }

    pub fn and2(&self, a: Ref, b: Ref) -> Result<Ref> {
        debug!("and2(a = {}, b = {})", a, b);
        self.ite(a, b, Ref::FALSE)
    }

    pub fn or2(&self, a: Ref, b: Ref) -> Result<Ref> {
        debug!("or2(a = {}, b = {})", a, b);
        self.ite(a, Ref::TRUE, b)
    }

    pub fn xor2(&self, a: Ref, b: Ref) -> Result<Ref> {
        debug!("xor2(a = {}, b = {})", a, b);
        let not_b = self.negate(b)?;
        self.ite(a, not_b, b)
    }

    pub fn nand2(&self, a: Ref, b: Ref) -> Result<Ref> {
        debug!("nand2(a = {}, b = {})", a, b);
        let f = self.and2(a, b)?;
        Ok(self.apply_not(f))
    }

    pub fn nor2(&self, a: Ref, b: Ref) -> Result<Ref> {
        debug!("nor2(a = {}, b = {})", a, b);
        let f = self.or2(a, b)?;
        Ok(self.apply_not(f))
    }

    pub fn xnor2(&self, a: Ref, b: Ref) -> Result<Ref> {
        debug!("xnor2(a = {}, b = {})", a, b);
        let f = self.xor2(a, b)?;
        Ok(self.apply_not(f))
    }

    /// `a -> b`
    pub fn imply2(&self, a: Ref, b: Ref) -> Result<Ref> {
        debug!("imply2(a = {}, b = {})", a, b);
        self.ite(a, b, Ref::TRUE)
    }

    pub fn and_many(&self, nodes: impl IntoIterator<Item = Ref>) -> Result<Ref> {
        let mut res = Ref::TRUE;
        for node in nodes {
            res = self.and2(res, node)?;
        }
        Ok(res)
    }

    pub fn or_many(&self, nodes: impl IntoIterator<Item = Ref>) -> Result<Ref> {
        let mut res = Ref::FALSE;
        for node in nodes {
            res = self.or2(res, node)?;
        }
        Ok(res)
    }

    pub fn to_bracket_string(&self, node: Ref) -> Result<String> {
        self.check(node)?;
        Ok(self.bracket_string(node))
    }

    fn bracket_string(&self, node: Ref) -> String {
        if self.is_zero(node) {
            return "(0)".to_string();
        }
        if self.is_one(node) {
            return "(1)".to_string();
        }

        let n = self.node(node);
        format!(
            "{}:({}, {}, {})",
            node,
            self.variable_label(n.variable).unwrap_or_default(),
            self.bracket_string(n.high),
            self.bracket_string(n.low)
        )
    }
}
