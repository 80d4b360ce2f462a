//! An ordered skip list storing elements such that they can be efficiently
//! accessed, inserted and removed, all in `O(log(n))` on average.
//!
//! Conceptually, the list is a single sorted base chain with a number of
//! "express lanes" layered on top of it:
//!
//! ```text
//! <head> ----------> [2] --------------------------------------------------> [9] ---------->
//! <head> ----------> [2] ------------------------------------[7] ----------> [9] ---------->
//! <head> ----------> [2] ----------> [4] ------------------> [7] ----------> [9] --> [10] ->
//! <head> --> [1] --> [2] --> [3] --> [4] --> [5] --> [6] --> [7] --> [8] --> [9] --> [10] ->
//! ```
//!
//! The base chain (bottom row) always holds every element in sorted order.
//! Each node joins a randomized number of lanes above it at insertion time,
//! and searches descend lane by lane, advancing as far as possible without
//! overshooting before falling back to the base chain for the final stretch.
//! No rebalancing is ever required.
//!
//! Each lane slot on a node is either *pending* (the node has not been
//! promoted into that lane) or *established* (the node is a member of the
//! lane and may serve as a splice point for later promotions). The head
//! sentinel's slots are established from the start, so any node can be the
//! first to populate a lane by splicing directly off the head.
//!
//! The list is an ordered multiset: duplicate elements are permitted and
//! kept adjacent. Elements must implement [`Ord`], and the ordering must be
//! total and stable for the lifetime of the list.

pub mod level_generator;
mod skiplist;
mod skipnode;

pub use crate::level_generator::{Geometric, GeometricError, LevelGenerator};
pub use crate::skiplist::SkipList;
pub use crate::skipnode::{IntoIter, Iter};
