use log::{debug, info, warn};

use crate::outcome::{running_total_message, ALREADY_OVER};
use crate::source::CardSource;
use crate::{Card, CardView, Deck, GameError, Hand, HandOutcome, Resolution};

/// Dealer draws on 16 or less and stands on any 17, soft or hard.
pub const DEALER_STANDS_ON: u8 = 17;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    PlayerTurn,
    Settled,
}

/// What the player is allowed to see after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    pub player_hand: Vec<Card>,
    pub dealer_hand: Vec<CardView>,
    pub player_value: u8,
    pub phase: GamePhase,
    pub resolution: Option<Resolution>,
    pub message: Option<String>,
    /// Set when the operation was refused because the round had already ended.
    pub already_over: bool,
}

impl RoundView {
    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::Settled
    }

    pub fn outcome(&self) -> Option<HandOutcome> {
        self.resolution.map(|r| r.outcome())
    }
}

/// Full copy of the session state, used for rollback and comparisons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub player_hand: Hand,
    pub dealer_hand: Hand,
    pub deck: Vec<Card>,
    pub phase: GamePhase,
    pub resolution: Option<Resolution>,
}

/// One player against the dealer, one round at a time.
#[derive(Debug)]
pub struct GameSession {
    deck: Deck,
    player_hand: Hand,
    dealer_hand: Hand,
    phase: GamePhase,
    resolution: Option<Resolution>,
}

impl GameSession {
    pub fn new(source: impl CardSource + 'static) -> Self {
        Self::with_deck(Deck::new(source))
    }

    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            player_hand: Hand::new(),
            dealer_hand: Hand::new(),
            phase: GamePhase::NotStarted,
            resolution: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_terminal(&self) -> bool {
        self.phase == GamePhase::Settled
    }

    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    pub fn player_hand(&self) -> &Hand {
        &self.player_hand
    }

    pub fn dealer_hand(&self) -> &Hand {
        &self.dealer_hand
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Discards the previous round, deals two cards each and checks for naturals.
    pub fn start(&mut self) -> Result<RoundView, GameError> {
        self.transact(|session| {
            session.deck.reset();
            session.player_hand = Hand::new();
            session.dealer_hand = Hand::new();
            session.resolution = None;

            for _ in 0..2 {
                let card = session.deck.draw()?;
                session.player_hand.add_card(card);
                let card = session.deck.draw()?;
                session.dealer_hand.add_card(card);
            }
            session.phase = GamePhase::PlayerTurn;
            info!(
                "New round: player {} ({}), dealer shows {}",
                format_cards(session.player_hand.cards()),
                session.player_hand.value(),
                session.dealer_hand.cards()[0],
            );

            let natural = Resolution::from_naturals(
                session.player_hand.is_blackjack(),
                session.dealer_hand.is_blackjack(),
            );
            if let Some(resolution) = natural {
                session.settle(resolution);
            }
            Ok(session.view())
        })
    }

    /// Deals the player one card. Reaching 21 ends the round with the dealer playing out.
    pub fn hit(&mut self) -> Result<RoundView, GameError> {
        if let Some(view) = self.guard("hit")? {
            return Ok(view);
        }

        self.transact(|session| {
            let card = session.deck.draw()?;
            session.player_hand.add_card(card);
            let value = session.player_hand.value();
            debug!("Player draws {card}, hand worth {value}");

            if session.player_hand.is_busted() {
                session.settle(Resolution::PlayerBust);
            } else if value == 21 {
                session.play_dealer()?;
                session.settle(Resolution::after_twenty_one(session.dealer_hand.value()));
            } else {
                let mut view = session.view();
                view.message = Some(running_total_message(value));
                return Ok(view);
            }
            Ok(session.view())
        })
    }

    /// Ends the player's turn; the dealer plays out and the hands are compared.
    pub fn stand(&mut self) -> Result<RoundView, GameError> {
        if let Some(view) = self.guard("stand")? {
            return Ok(view);
        }

        self.transact(|session| {
            session.play_dealer()?;
            let resolution = Resolution::after_stand(
                session.player_hand.value(),
                session.dealer_hand.value(),
            );
            session.settle(resolution);
            Ok(session.view())
        })
    }

    /// Current state as the player may see it; the hole card stays masked
    /// while the player is still acting.
    pub fn view(&self) -> RoundView {
        let dealer_hand = self
            .dealer_hand
            .cards()
            .iter()
            .enumerate()
            .map(|(i, card)| {
                if self.phase == GamePhase::PlayerTurn && i > 0 {
                    CardView::Hidden
                } else {
                    CardView::Up(*card)
                }
            })
            .collect();

        RoundView {
            player_hand: self.player_hand.cards().to_vec(),
            dealer_hand,
            player_value: self.player_hand.value(),
            phase: self.phase,
            resolution: self.resolution,
            message: self.resolution.map(|r| r.message().to_string()),
            already_over: false,
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            player_hand: self.player_hand.clone(),
            dealer_hand: self.dealer_hand.clone(),
            deck: self.deck.cards().to_vec(),
            phase: self.phase,
            resolution: self.resolution,
        }
    }

    fn restore(&mut self, snapshot: SessionSnapshot) {
        self.player_hand = snapshot.player_hand;
        self.dealer_hand = snapshot.dealer_hand;
        self.deck.restore(snapshot.deck);
        self.phase = snapshot.phase;
        self.resolution = snapshot.resolution;
    }

    /// Short-circuits player actions outside of the player's turn.
    fn guard(&self, action: &str) -> Result<Option<RoundView>, GameError> {
        match self.phase {
            GamePhase::PlayerTurn => Ok(None),
            GamePhase::Settled => {
                debug!("Ignoring {action} on a settled round");
                let mut view = self.view();
                view.message = Some(ALREADY_OVER.to_string());
                view.already_over = true;
                Ok(Some(view))
            }
            GamePhase::NotStarted => {
                warn!("Rejecting {action}: no round has been dealt");
                Err(GameError::InvalidState(format!(
                    "cannot {action} before a game is started"
                )))
            }
        }
    }

    /// Runs `op`, rolling every field back if it fails part way.
    fn transact<F>(&mut self, op: F) -> Result<RoundView, GameError>
    where
        F: FnOnce(&mut Self) -> Result<RoundView, GameError>,
    {
        let checkpoint = self.snapshot();
        match op(self) {
            Ok(view) => Ok(view),
            Err(err) => {
                warn!("Round operation failed, state rolled back: {err}");
                self.restore(checkpoint);
                Err(err)
            }
        }
    }

    fn play_dealer(&mut self) -> Result<(), GameError> {
        while self.dealer_hand.value() < DEALER_STANDS_ON {
            let card = self.deck.draw()?;
            debug!("Dealer draws {card}");
            self.dealer_hand.add_card(card);
        }
        Ok(())
    }

    fn settle(&mut self, resolution: Resolution) {
        self.phase = GamePhase::Settled;
        self.resolution = Some(resolution);
        info!(
            "Round settled: {:?} (player {} = {}, dealer {} = {})",
            resolution,
            format_cards(self.player_hand.cards()),
            self.player_hand.value(),
            format_cards(self.dealer_hand.cards()),
            self.dealer_hand.value(),
        );
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_deck(Deck::default())
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
