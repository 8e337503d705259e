//! Internal, `unsafe`-free-at-the-surface tree machinery.
//!
//! Nothing in here is public; the map and set adapters re-expose a safe,
//! `std`-collections-shaped API on top.

mod arena;
mod node;
mod raw_rbtree;

pub(crate) use arena::Handle;
pub(crate) use node::Node;
pub(crate) use raw_rbtree::RawRBTree;
