//! A seated player: identity plus a hand of cards.
//!
//! Players carry no game-rule knowledge. The hand is kept sorted by rank
//! ascending for deterministic display; membership and removal use card
//! value equality.

use serde::Serialize;

use super::card::Card;
use crate::game::GameError;

/// A player's identity and hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
}

impl Player {
    pub(crate) fn new(name: String) -> Self {
        Self {
            name,
            hand: Vec::new(),
        }
    }

    /// The player's name, unique within a game.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The hand, sorted by rank ascending.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Number of cards held.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Value-equality membership test.
    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Add cards to the hand and restore rank order.
    pub(crate) fn take_cards(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.hand.extend(cards);
        self.hand.sort_by_key(|c| c.rank);
    }

    /// Remove one matching card from the hand.
    ///
    /// The game pre-checks `has_card`, so this only fails on a caller bug.
    pub(crate) fn remove_card(&mut self, card: Card) -> Result<(), GameError> {
        match self.hand.iter().position(|&c| c == card) {
            Some(pos) => {
                self.hand.remove(pos);
                Ok(())
            }
            None => Err(GameError::CardNotHeld {
                player: self.name.clone(),
                card,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::{Rank, Suit};

    fn player_with(cards: &[Card]) -> Player {
        let mut p = Player::new("Kolja".to_string());
        p.take_cards(cards.iter().copied());
        p
    }

    #[test]
    fn test_take_cards_sorts_by_rank() {
        let p = player_with(&[
            Card::new(Rank::King, Suit::Hearts),
            Card::new(Rank::Six, Suit::Spades),
            Card::new(Rank::Ten, Suit::Clubs),
        ]);

        let ranks: Vec<Rank> = p.hand().iter().map(|c| c.rank).collect();
        assert_eq!(ranks, vec![Rank::Six, Rank::Ten, Rank::King]);
    }

    #[test]
    fn test_has_card_by_value() {
        let p = player_with(&[Card::new(Rank::Nine, Suit::Diamonds)]);

        assert!(p.has_card(Card::new(Rank::Nine, Suit::Diamonds)));
        assert!(!p.has_card(Card::new(Rank::Nine, Suit::Clubs)));
    }

    #[test]
    fn test_remove_card() {
        let held = Card::new(Rank::Queen, Suit::Clubs);
        let mut p = player_with(&[held]);

        assert!(p.remove_card(held).is_ok());
        assert_eq!(p.hand_size(), 0);
    }

    #[test]
    fn test_remove_missing_card_fails() {
        let mut p = player_with(&[Card::new(Rank::Queen, Suit::Clubs)]);
        let missing = Card::new(Rank::Queen, Suit::Spades);

        let err = p.remove_card(missing).unwrap_err();
        assert!(matches!(err, GameError::CardNotHeld { .. }));
        assert_eq!(p.hand_size(), 1);
    }

    #[test]
    fn test_remove_one_of_duplicates() {
        // Hands are multisets: taking back a card you already fielded can
        // produce duplicates mid-take, and only one copy must be removed.
        let card = Card::new(Rank::Eight, Suit::Hearts);
        let mut p = player_with(&[card, card]);

        assert!(p.remove_card(card).is_ok());
        assert_eq!(p.hand_size(), 1);
        assert!(p.has_card(card));
    }
}
