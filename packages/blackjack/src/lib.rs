mod card;
mod deck;
mod error;
mod game_state;
mod hand;
mod outcome;
pub mod source;

pub use card::{Card, CardView, Rank, Suit};
pub use deck::Deck;
pub use error::GameError;
pub use game_state::{GamePhase, GameSession, RoundView, SessionSnapshot, DEALER_STANDS_ON};
pub use hand::{calculate_hand_value, is_blackjack, is_busted, is_soft_hand, Hand, HandOutcome, BLACKJACK};
pub use outcome::{running_total_message, Resolution, ALREADY_OVER};
pub use source::{CardSource, RandomSource, StackedSource};
