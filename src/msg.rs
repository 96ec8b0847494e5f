use blackjack::{running_total_message, Card, CardView, RoundView};
use serde::{Deserialize, Serialize};

pub const WELCOME: &str = "Welcome to the Blackjack app!";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WelcomeResponse {
    pub message: String,
}

impl Default for WelcomeResponse {
    fn default() -> Self {
        Self {
            message: WELCOME.to_string(),
        }
    }
}

/// `GET /start`. `message` is only present when a natural ended the round on the deal.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StartResponse {
    pub player_hand: Vec<Card>,
    pub dealer_hand: Vec<CardView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<RoundView> for StartResponse {
    fn from(view: RoundView) -> Self {
        Self {
            player_hand: view.player_hand,
            dealer_hand: view.dealer_hand,
            message: view.message,
        }
    }
}

/// `GET /hit`. The dealer's hand is only sent once the round is over.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HitResponse {
    pub player_hand: Vec<Card>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dealer_hand: Option<Vec<CardView>>,
    pub message: String,
}

impl From<RoundView> for HitResponse {
    fn from(view: RoundView) -> Self {
        let terminal = view.is_terminal();
        let message = view
            .message
            .unwrap_or_else(|| running_total_message(view.player_value));
        Self {
            player_hand: view.player_hand,
            dealer_hand: terminal.then_some(view.dealer_hand),
            message,
        }
    }
}

/// `GET /stand`. Always reveals both hands.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StandResponse {
    pub player_hand: Vec<Card>,
    pub dealer_hand: Vec<CardView>,
    pub result: String,
}

impl From<RoundView> for StandResponse {
    fn from(view: RoundView) -> Self {
        Self {
            player_hand: view.player_hand,
            dealer_hand: view.dealer_hand,
            result: view.message.unwrap_or_default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack::{GameSession, Rank, StackedSource, Suit};
    use serde_json::json;

    fn session() -> GameSession {
        GameSession::new(StackedSource::new([
            Card::new(Rank::Ten, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Two, Suit::Spades),
            Card::new(Rank::Ten, Suit::Diamonds),
            Card::new(Rank::Three, Suit::Hearts),
        ]))
    }

    #[test]
    fn test_start_payload_hides_hole_card() {
        let view = session().start().unwrap();
        let body = serde_json::to_value(StartResponse::from(view)).unwrap();
        assert_eq!(
            body,
            json!({
                "player_hand": [
                    { "suit": "Hearts", "rank": "10" },
                    { "suit": "Spades", "rank": "2" },
                ],
                "dealer_hand": [
                    { "suit": "Clubs", "rank": "7" },
                    { "suit": "Hidden", "rank": "Hidden" },
                ],
            })
        );
    }

    #[test]
    fn test_hit_payload_in_progress_omits_dealer() {
        let mut game = session();
        game.start().unwrap();
        let body = serde_json::to_value(HitResponse::from(game.hit().unwrap())).unwrap();
        assert_eq!(body["message"], "Your hand is worth 15");
        assert!(body.get("dealer_hand").is_none());
        assert_eq!(body["player_hand"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_stand_payload_reveals_dealer() {
        let mut game = session();
        game.start().unwrap();
        let body = serde_json::to_value(StandResponse::from(game.stand().unwrap())).unwrap();
        assert_eq!(body["result"], "Dealer wins!");
        assert_eq!(
            body["dealer_hand"],
            json!([
                { "suit": "Clubs", "rank": "7" },
                { "suit": "Diamonds", "rank": "10" },
            ])
        );
    }

    #[test]
    fn test_welcome() {
        let body = serde_json::to_value(WelcomeResponse::default()).unwrap();
        assert_eq!(body, json!({ "message": "Welcome to the Blackjack app!" }));
    }
}
