//! The mixing function used to fold multi-word and multi-element hashes.
//!
//! `combine` is deliberately non-commutative: `combine(a, b) != combine(b, a)`
//! for almost all inputs, so reordering the words of an aggregate or the
//! elements of a sequence changes the resulting hash.

/// Mix two hash words into one.
///
/// `x*x + x + y` when `x > y`, otherwise `x + y*y`, modulo 2^64.
#[inline]
pub const fn combine(x: u64, y: u64) -> u64 {
    if x > y {
        x.wrapping_mul(x).wrapping_add(x).wrapping_add(y)
    } else {
        x.wrapping_add(y.wrapping_mul(y))
    }
}

/// Fold an iterator of element hashes, seeded at 0.
///
/// This is the rule for composites: the seed is 0 and every element hash,
/// including the first, goes through `combine`.
pub fn fold_elements<I>(hashes: I) -> u64
where
    I: IntoIterator<Item = u64>,
{
    hashes.into_iter().fold(0, combine)
}

/// Left fold of 32-bit words, seeded by the first word.
///
/// Used by the flat-aggregate fallback. An aggregate with no words hashes
/// to 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordFold {
    seed: Option<u64>,
}

impl WordFold {
    /// Create an empty fold.
    pub const fn new() -> Self {
        Self { seed: None }
    }

    /// Feed the next word.
    #[inline]
    pub fn push(&mut self, word: u32) {
        let word = u64::from(word);
        self.seed = Some(match self.seed {
            None => word,
            Some(seed) => combine(seed, word),
        });
    }

    /// The folded hash.
    pub fn finish(self) -> u64 {
        self.seed.unwrap_or(0)
    }
}
