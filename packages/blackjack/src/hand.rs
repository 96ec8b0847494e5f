use crate::Card;

pub const BLACKJACK: u8 = 21;

/// Result of a round from the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    Win,
    Loss,
    Push,
    Blackjack,
}

/// Calculate the value of a blackjack hand.
/// Aces count 11 and drop to 1 one at a time while the hand would bust.
pub fn calculate_hand_value(cards: &[Card]) -> u8 {
    let mut total: u16 = 0;
    let mut aces: u16 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        total += card.value() as u16;
    }

    while total > BLACKJACK as u16 && aces > 0 {
        total -= 10;
        aces -= 1;
    }

    total.min(u8::MAX as u16) as u8
}

/// Check if a hand is soft (an ace is still counted as 11)
pub fn is_soft_hand(cards: &[Card]) -> bool {
    let hard_total: u16 = cards
        .iter()
        .map(|c| if c.is_ace() { 1 } else { c.value() as u16 })
        .sum();
    let has_ace = cards.iter().any(Card::is_ace);
    has_ace && hard_total + 10 == calculate_hand_value(cards) as u16
}

/// Check if a hand is busted
pub fn is_busted(cards: &[Card]) -> bool {
    calculate_hand_value(cards) > BLACKJACK
}

/// Check if a hand is blackjack (21 with 2 cards)
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && calculate_hand_value(cards) == BLACKJACK
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn value(&self) -> u8 {
        calculate_hand_value(&self.cards)
    }

    pub fn is_soft(&self) -> bool {
        is_soft_hand(&self.cards)
    }

    pub fn is_busted(&self) -> bool {
        is_busted(&self.cards)
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn cards(ranks: &[Rank]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(r, Suit::Hearts)).collect()
    }

    #[test]
    fn test_calculate_hand_value_simple() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::Two, Rank::Three])), 5);
    }

    #[test]
    fn test_calculate_hand_value_with_face_cards() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::King, Rank::Queen])), 20);
    }

    #[test]
    fn test_calculate_hand_value_empty() {
        assert_eq!(calculate_hand_value(&[]), 0);
    }

    #[test]
    fn test_calculate_hand_value_soft_ace() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::Ace, Rank::Six])), 17);
    }

    #[test]
    fn test_calculate_hand_value_hard_ace() {
        let hand = cards(&[Rank::Ace, Rank::Six, Rank::Nine]);
        assert_eq!(calculate_hand_value(&hand), 16);
    }

    #[test]
    fn test_pair_of_aces_is_twelve() {
        assert_eq!(calculate_hand_value(&cards(&[Rank::Ace, Rank::Ace])), 12);
    }

    #[test]
    fn test_calculate_hand_value_multiple_aces() {
        let hand = cards(&[Rank::Ace, Rank::Ace, Rank::Nine]);
        assert_eq!(calculate_hand_value(&hand), 21);

        let four_aces = cards(&[Rank::Ace, Rank::Ace, Rank::Ace, Rank::Ace]);
        assert_eq!(calculate_hand_value(&four_aces), 14);
    }

    #[test]
    fn test_value_stays_hard_when_no_ace_can_soften() {
        let hand = cards(&[Rank::King, Rank::Queen, Rank::Five]);
        assert_eq!(calculate_hand_value(&hand), 25);

        // Both aces already at 1.
        let hand = cards(&[Rank::Ace, Rank::Ace, Rank::King, Rank::Queen]);
        assert_eq!(calculate_hand_value(&hand), 22);
    }

    #[test]
    fn test_softening_keeps_value_at_or_under_21_when_possible() {
        for first in Rank::ALL {
            for second in Rank::ALL {
                let hand = cards(&[first, second, Rank::Ace]);
                let hard: u16 = hand
                    .iter()
                    .map(|c| if c.is_ace() { 1 } else { c.value() as u16 })
                    .sum();
                let value = calculate_hand_value(&hand);
                if hard <= 21 {
                    assert!(value <= 21, "{hand:?} valued {value}");
                } else {
                    assert_eq!(value as u16, hard);
                }
            }
        }
    }

    #[test]
    fn test_is_busted() {
        assert!(is_busted(&cards(&[Rank::King, Rank::Queen, Rank::Five])));
        assert!(!is_busted(&cards(&[Rank::King, Rank::Queen])));
    }

    #[test]
    fn test_is_blackjack() {
        assert!(is_blackjack(&cards(&[Rank::Ace, Rank::King])));
        assert!(is_blackjack(&cards(&[Rank::Ten, Rank::Ace])));
    }

    #[test]
    fn test_not_blackjack_three_cards() {
        assert!(!is_blackjack(&cards(&[Rank::Ace, Rank::King, Rank::Two])));
        assert!(!is_blackjack(&cards(&[Rank::Seven, Rank::Seven, Rank::Seven])));
    }

    #[test]
    fn test_not_blackjack_wrong_value() {
        assert!(!is_blackjack(&cards(&[Rank::King, Rank::Queen])));
    }

    #[test]
    fn test_is_soft_hand() {
        assert!(is_soft_hand(&cards(&[Rank::Ace, Rank::Six])));
        assert!(!is_soft_hand(&cards(&[Rank::Ace, Rank::Six, Rank::Nine])));
        assert!(!is_soft_hand(&cards(&[Rank::King, Rank::Queen])));
        assert!(is_soft_hand(&cards(&[Rank::Ace, Rank::Ace])));
    }

    #[test]
    fn test_hand_struct() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());
        hand.add_card(Card::new(Rank::King, Suit::Hearts));
        hand.add_card(Card::new(Rank::Seven, Suit::Spades));
        assert_eq!(hand.len(), 2);
        assert_eq!(hand.value(), 17);
        assert!(!hand.is_blackjack());
        hand.add_card(Card::new(Rank::Nine, Suit::Clubs));
        assert!(hand.is_busted());
    }

    #[test]
    fn test_hand_struct_is_blackjack() {
        let hand = Hand::from(vec![
            Card::new(Rank::Ace, Suit::Hearts),
            Card::new(Rank::King, Suit::Spades),
        ]);
        assert!(hand.is_blackjack());
        assert!(hand.is_soft());
    }
}
