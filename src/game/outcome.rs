//! Winner and loser bookkeeping.
//!
//! Nobody can finish while the draw pile still has cards: hands refill.
//! Once the deck is dry, any player whose hand reaches zero is recorded as
//! finished, and the last player left holding cards is the Budala (the
//! Fool). There is no "winner" of the game as such, only an ordered list of
//! escapees and one loser.

use std::fmt;

use tracing::info;

use super::Game;

/// End-of-game announcement: who is the Fool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOver {
    /// The loser's name.
    pub fool: String,
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Game over! The Budala is {}", self.fool)
    }
}

impl Game {
    /// Record any newly emptied hands as finished players.
    ///
    /// Only meaningful once the deck is empty; idempotent, so callers may
    /// invoke it after every state change without duplicating names.
    pub fn check_for_winners(&mut self) {
        if !self.deck.is_empty() {
            return;
        }
        for i in 0..self.players.len() {
            if self.players[i].hand_size() == 0 {
                let name = self.players[i].name();
                if !self.winners.iter().any(|w| w == name) {
                    info!(player = name, "out of cards, finished");
                    self.winners.push(name.to_string());
                }
            }
        }
    }

    /// Report the Fool, if the game has ended.
    ///
    /// With the deck empty: exactly one player still holding cards makes
    /// them the Fool; zero players holding cards means the defender of the
    /// final round lost it. Rotation may already have moved on by then, so
    /// callers that know who was defending when the triggering action ran
    /// pass that name as `fallback_defender`; otherwise the current
    /// defender pointer is used.
    #[must_use]
    pub fn check_loser(&self, fallback_defender: Option<&str>) -> Option<GameOver> {
        if !self.deck.is_empty() {
            return None;
        }

        let mut holding = self.players.iter().filter(|p| p.hand_size() > 0);
        match (holding.next(), holding.next()) {
            (Some(last), None) => Some(GameOver {
                fool: last.name().to_string(),
            }),
            (None, _) => {
                let fool = fallback_defender
                    .unwrap_or_else(|| self.defender().name())
                    .to_string();
                Some(GameOver { fool })
            }
            _ => None,
        }
    }
}
