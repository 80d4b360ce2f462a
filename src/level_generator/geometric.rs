//! Geometric level generator.

use rand::prelude::*;
use thiserror::Error;

use crate::level_generator::LevelGenerator;

/// Errors that can occur when creating a [`Geometric`] level generator.
#[derive(Error, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeometricError {
    /// The probability `p` must be in the range `(0, 1)`.
    #[error("p must be in (0, 1).")]
    InvalidProbability,
}

/// A level generator using a geometric distribution.
///
/// A coin with success probability `p` is flipped until it fails; the number
/// of successes is the number of express lanes the new node joins. A node
/// therefore joins lane `n` with probability `p^n`, truncated in practice by
/// the capacity of the owning list.
#[derive(Debug)]
pub struct Geometric {
    /// The probability that a node joins the next lane up.
    p: f64,
    /// The random number generator.
    rng: SmallRng,
}

impl Geometric {
    /// Create a new geometric level generator where `p` is the probability
    /// that a node present in some lane is also present in the next one.
    ///
    /// # Errors
    ///
    /// `p` must be strictly between 0 and 1.
    #[inline]
    pub fn new(p: f64) -> Result<Self, GeometricError> {
        if !(0.0 < p && p < 1.0) {
            return Err(GeometricError::InvalidProbability);
        }
        Ok(Geometric {
            p,
            rng: SmallRng::from_rng(&mut rand::rng()),
        })
    }

    /// Like [`Geometric::new`], but drawing from the given random source.
    ///
    /// Seeding the source makes the promotion sequence reproducible, which
    /// tests and benchmarks rely on.
    ///
    /// # Errors
    ///
    /// `p` must be strictly between 0 and 1.
    #[inline]
    pub fn with_rng(p: f64, rng: SmallRng) -> Result<Self, GeometricError> {
        if !(0.0 < p && p < 1.0) {
            return Err(GeometricError::InvalidProbability);
        }
        Ok(Geometric { p, rng })
    }
}

impl Default for Geometric {
    /// A fair-coin generator: every inserted node has a 50% chance of
    /// joining each successive lane.
    #[inline]
    fn default() -> Self {
        Geometric {
            p: 0.5,
            rng: SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

impl LevelGenerator for Geometric {
    #[inline]
    fn extra_levels(&mut self) -> usize {
        let mut levels = 0;
        while self.rng.random::<f64>() < self.p {
            levels += 1;
        }
        levels
    }
}
