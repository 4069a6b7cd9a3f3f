//! # robdd: Reduced Ordered Binary Decision Diagrams
//!
//! **`robdd`** is a small, manager-centric library for building Boolean
//! functions as **ROBDDs**.
//!
//! ## What is a ROBDD?
//!
//! A Reduced Ordered Binary Decision Diagram represents a Boolean function as a
//! directed acyclic graph. For a fixed variable ordering it is **canonical**:
//! every function has exactly one representation, so equivalence checking is a
//! handle comparison.
//!
//! ## Key Features
//!
//! - **Manager-Centric Architecture**: all operations go through the
//!   [`Bdd`][crate::bdd::Bdd] manager, which owns the node store, the unique
//!   table (hash consing) and the computed cache.
//! - **Lightweight handles**: nodes are addressed by [`Ref`][crate::reference::Ref],
//!   a plain index. `Ref::FALSE` is `@0`, `Ref::TRUE` is `@1`.
//! - **Creation-order ordering**: variables are ordered by when they were created.
//! - **Explicit stacks**: ITE, negation, restriction and traversal never recurse
//!   natively, so deep diagrams cannot exhaust the call stack.
//!
//! ## Basic Usage
//!
//! ```rust
//! use robdd::bdd::Bdd;
//!
//! let bdd = Bdd::default();
//!
//! let a = bdd.create_variable("a").unwrap();
//! let b = bdd.create_variable("b").unwrap();
//!
//! // f = a AND (NOT b)
//! let not_b = bdd.negate(b).unwrap();
//! let f = bdd.and2(a, not_b).unwrap();
//!
//! // Canonicity: the same function always gets the same handle.
//! assert_eq!(f, bdd.and2(not_b, a).unwrap());
//!
//! // Fixing a = true leaves NOT b.
//! assert_eq!(bdd.restrict_true(f, a).unwrap(), not_b);
//! ```
//!
//! ## Core Components
//!
//! - **[`bdd`]**: the manager, the ITE engine, negation and the connectives.
//! - **[`cofactor`]**: structural and positional cofactors.
//! - **[`traversal`]**: reachable nodes and variables.
//! - **[`sat`]**: evaluation and model counting.
//! - **[`dot`]**: Graphviz export.

pub mod bdd;
pub mod cache;
pub mod cofactor;
pub mod config;
pub mod dot;
pub mod error;
pub mod node;
pub mod reference;
pub mod sat;
pub mod storage;
pub mod traversal;
