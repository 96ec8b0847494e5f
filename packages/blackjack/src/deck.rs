use std::fmt;

use crate::source::{CardSource, RandomSource};
use crate::{Card, GameError};

/// The pool of undealt cards for one round.
pub struct Deck {
    cards: Vec<Card>,
    source: Box<dyn CardSource>,
}

impl Deck {
    /// A full, shuffled deck drawing from `source`.
    pub fn new(source: impl CardSource + 'static) -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(52),
            source: Box::new(source),
        };
        deck.reset();
        deck
    }

    /// Refills with the 52 standard cards and shuffles them.
    pub fn reset(&mut self) {
        self.cards = Card::standard_deck();
        self.source.shuffle(&mut self.cards);
    }

    /// Removes one card chosen by the source among those remaining.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            return Err(GameError::EmptyDeck);
        }
        let index = self.source.pick(&self.cards);
        if index >= self.cards.len() {
            return Err(GameError::InvalidState(format!(
                "card source picked index {index} of {}",
                self.cards.len()
            )));
        }
        Ok(self.cards.remove(index))
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub(crate) fn restore(&mut self, cards: Vec<Card>) {
        self.cards = cards;
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(RandomSource::new())
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deck")
            .field("remaining", &self.cards.len())
            .finish_non_exhaustive()
    }
}
