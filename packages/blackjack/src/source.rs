//! Randomness behind shuffling and drawing.
//!
//! The deck never talks to an RNG directly; it asks a [`CardSource`] to order
//! a fresh deck and to choose which remaining card comes out next. Production
//! code uses [`RandomSource`], tests and demos use [`StackedSource`] to force
//! an exact sequence of draws.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

use crate::Card;

pub trait CardSource: Send {
    /// Reorder a freshly built deck.
    fn shuffle(&mut self, cards: &mut [Card]);

    /// Index of the next card to remove. Only called with a non-empty slice;
    /// the result must be `< remaining.len()`.
    fn pick(&mut self, remaining: &[Card]) -> usize;
}

/// Uniform shuffle and uniform draw backed by ChaCha8.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
}

impl RandomSource {
    /// Seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Reproducible sequence of shuffles and draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CardSource for RandomSource {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.rng);
    }

    fn pick(&mut self, remaining: &[Card]) -> usize {
        self.rng.gen_range(0..remaining.len())
    }
}

/// Deals a scripted sequence of cards.
///
/// Each draw takes the next scripted card that is still in the deck. Scripted
/// cards that were already dealt are skipped; once the script runs out the
/// last remaining card is dealt. Shuffling keeps canonical order.
#[derive(Debug, Clone, Default)]
pub struct StackedSource {
    script: VecDeque<Card>,
}

impl StackedSource {
    pub fn new(script: impl IntoIterator<Item = Card>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }
}

impl CardSource for StackedSource {
    fn shuffle(&mut self, _cards: &mut [Card]) {}

    fn pick(&mut self, remaining: &[Card]) -> usize {
        while let Some(next) = self.script.pop_front() {
            if let Some(pos) = remaining.iter().position(|c| *c == next) {
                return pos;
            }
        }
        remaining.len() - 1
    }
}
