//! Post selection
//!
//! Picks the latest post plus a seeded random sample of the rest.
//! The same seed and post count always produce the same selection, so
//! re-running within a day leaves the README untouched.

use chrono::NaiveDate;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

/// Index of the newest post in feed order
pub const LATEST_INDEX: usize = 0;

/// Draws distinct indices without replacement
pub trait IndexSampler {
    /// Sample `amount` distinct values from `0..length`, in draw order.
    /// Never called with `amount > length`.
    fn sample(&mut self, length: usize, amount: usize) -> Vec<usize>;
}

/// Deterministic sampler keyed by an arbitrary string.
///
/// ChaCha20 output is fixed for a given key, so a seed picks the same
/// posts whichever build runs it.
pub struct SeededSampler {
    rng: ChaCha20Rng,
}

impl SeededSampler {
    pub fn new(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        let mut key = [0u8; 32];
        key.copy_from_slice(&digest);

        Self {
            rng: ChaCha20Rng::from_seed(key),
        }
    }
}

impl IndexSampler for SeededSampler {
    fn sample(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, length, amount).into_vec()
    }
}

/// Chosen post indices in render order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Random picks, each in `1..post_count`, in sampler order
    pub random: Vec<usize>,
}

impl Selection {
    /// Latest first, then the random picks
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        std::iter::once(LATEST_INDEX).chain(self.random.iter().copied())
    }

    /// Number of cards the selection renders
    pub fn card_count(&self) -> usize {
        1 + self.random.len()
    }
}

/// Select `min(requested, post_count)` posts: the latest plus random others.
///
/// Returns `None` when there is nothing to select. When fewer candidates
/// remain than requested, all of them are sampled.
pub fn select_posts<S: IndexSampler>(
    post_count: usize,
    requested: usize,
    sampler: &mut S,
) -> Option<Selection> {
    if post_count == 0 || requested == 0 {
        return None;
    }

    let total = requested.min(post_count);
    let candidates = post_count - 1;
    let random_needed = (total - 1).min(candidates);

    let random = if random_needed == 0 {
        Vec::new()
    } else {
        sampler
            .sample(candidates, random_needed)
            .into_iter()
            .map(|offset| offset + 1)
            .collect()
    };

    Some(Selection { random })
}

/// Default seed: the calendar date in ISO form
pub fn seed_for_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Seed for today's local date
pub fn seed_for_today() -> String {
    seed_for_date(chrono::Local::now().date_naive())
}
