//! Skip lists use a probabilistic distribution of nodes over the express
//! lanes, whereby the base chain contains all the nodes, and each lane above
//! it contains a random subset of the nodes of the lane below.
//!
//! Most commonly a geometric distribution is used, whereby the chance that a
//! node joins lane `n + 1` is `p` times the chance of joining lane `n` (with
//! `0 < p < 1`). This is what [`Geometric`] implements, and the default
//! should suffice for almost all uses, but custom generators can be
//! implemented where tests or benchmarks need deterministic promotion
//! sequences.

pub mod geometric;

pub use geometric::{Geometric, GeometricError};

/// Upon the insertion of a new node in the list, the node is replicated into
/// the express lanes above the base chain as determined by a
/// [`LevelGenerator`].
///
/// The generator is an explicit capability handed to the list at
/// construction rather than process-wide random state, so a scripted
/// implementation can drive a test through an exact sequence of promotions.
pub trait LevelGenerator {
    /// The number of express lanes the next inserted node should join, on
    /// top of the base chain it always joins.
    ///
    /// The result is unbounded in principle; the list caps it at its lane
    /// capacity, and any excess is silently ignored.
    #[must_use]
    fn extra_levels(&mut self) -> usize;
}
