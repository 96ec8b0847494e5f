use crate::HandOutcome;

pub const ALREADY_OVER: &str = "Game is over! Please start a new game.";

/// How a round was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Both sides dealt a natural.
    BothBlackjack,
    PlayerBlackjack,
    DealerBlackjack,
    PlayerBust,
    /// Player hit to 21, dealer drew past 21.
    TwentyOneDealerBust,
    /// Player hit to 21, dealer drew to 21.
    TwentyOnePush,
    /// Player hit to 21, dealer stopped short.
    TwentyOneWin,
    DealerBust,
    PlayerHigher,
    Tie,
    DealerHigher,
}

impl Resolution {
    pub fn outcome(&self) -> HandOutcome {
        match self {
            Resolution::PlayerBlackjack => HandOutcome::Blackjack,
            Resolution::TwentyOneDealerBust
            | Resolution::TwentyOneWin
            | Resolution::DealerBust
            | Resolution::PlayerHigher => HandOutcome::Win,
            Resolution::BothBlackjack | Resolution::TwentyOnePush | Resolution::Tie => {
                HandOutcome::Push
            }
            Resolution::DealerBlackjack | Resolution::PlayerBust | Resolution::DealerHigher => {
                HandOutcome::Loss
            }
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Resolution::BothBlackjack => "Both have Blackjack! Push!",
            Resolution::PlayerBlackjack => "🎉 BLACKJACK! You win! 🎉",
            Resolution::DealerBlackjack => "Dealer has Blackjack! You lose!",
            Resolution::PlayerBust => "Bust! You lose!",
            Resolution::TwentyOneDealerBust => "You win! Dealer busts!",
            Resolution::TwentyOnePush => "Push! Both got 21!",
            Resolution::TwentyOneWin => "You win with 21!",
            Resolution::DealerBust => "Dealer busts! You win! 🎉",
            Resolution::PlayerHigher => "You win! 🎉",
            Resolution::Tie => "Push! It's a tie!",
            Resolution::DealerHigher => "Dealer wins!",
        }
    }

    /// Outcome of the opening deal, if either side holds a natural.
    pub fn from_naturals(player_blackjack: bool, dealer_blackjack: bool) -> Option<Self> {
        match (player_blackjack, dealer_blackjack) {
            (true, true) => Some(Resolution::BothBlackjack),
            (true, false) => Some(Resolution::PlayerBlackjack),
            (false, true) => Some(Resolution::DealerBlackjack),
            (false, false) => None,
        }
    }

    /// Player has just hit to exactly 21 and the dealer has finished drawing.
    pub fn after_twenty_one(dealer_value: u8) -> Self {
        if dealer_value > 21 {
            Resolution::TwentyOneDealerBust
        } else if dealer_value == 21 {
            Resolution::TwentyOnePush
        } else {
            Resolution::TwentyOneWin
        }
    }

    /// Showdown after the player stands.
    pub fn after_stand(player_value: u8, dealer_value: u8) -> Self {
        if dealer_value > 21 {
            Resolution::DealerBust
        } else if player_value > dealer_value {
            Resolution::PlayerHigher
        } else if player_value == dealer_value {
            Resolution::Tie
        } else {
            Resolution::DealerHigher
        }
    }
}

pub fn running_total_message(value: u8) -> String {
    format!("Your hand is worth {value}")
}
