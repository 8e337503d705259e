//! Arena-backed red-black tree collections for Rust.
//!
//! This crate provides [`RBTreeMap`] and [`RBTreeSet`], sorted collections
//! shaped after the standard library's `BTreeMap` and `BTreeSet` but built on
//! a classic red-black tree whose nodes live in a contiguous arena:
//!
//! - O(log n) lookup, insertion and removal with strictly unique keys
//! - Position-hinted insertion ([`RBTreeMap::append`] exploits it to merge
//!   sorted inputs cheaply)
//! - Cursor-style bound queries ([`lower_bound`](RBTreeMap::lower_bound),
//!   [`upper_bound`](RBTreeMap::upper_bound), [`range`](RBTreeMap::range))
//!
//! # Example
//!
//! ```
//! use cardinal_tree::RBTreeMap;
//!
//! let mut movies = RBTreeMap::new();
//! movies.insert("Office Space", 1999);
//! movies.insert("Blade Runner", 1982);
//! movies.insert("Alien", 1979);
//!
//! // Standard BTreeMap operations work as expected
//! assert_eq!(movies.get(&"Alien"), Some(&1979));
//! assert_eq!(movies.len(), 3);
//!
//! // Iteration is always in ascending key order
//! let first = movies.iter().next().unwrap();
//! assert_eq!(first, (&"Alien", &1979));
//!
//! // Bound queries
//! assert_eq!(movies.lower_bound(&"B"), Some((&"Blade Runner", &1982)));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Familiar API** - Mirrors `std::collections::BTreeMap`/`BTreeSet`
//! - **Arena storage** - Nodes are indices into a slot arena, so rotations and
//!   erases never move key-value pairs in memory
//!
//! # Implementation
//!
//! The tree is a textbook red-black tree: every node is red or black, the root
//! is black, red nodes have black children, and every root-to-leaf path
//! carries the same number of black nodes, which bounds the height at
//! 2·log₂(n + 1). Parent and child links are arena handles rather than owned
//! pointers, so rebalancing is pure index surgery.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
// NOTE: We have to allow unsafe code in order to performantly match BTreeMap and BTreeSet's functionality.
// #![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod rbtree_map;
pub mod rbtree_set;

pub use rbtree_map::RBTreeMap;
pub use rbtree_set::RBTreeSet;
