//! The draw pile and its revealed trump card.
//!
//! A deck is built once per game: 36 unique cards, shuffled, with the card
//! at the bottom turned face up as the trump. The trump is observed, not
//! removed - it is the last card that will ever be drawn. Cards leave from
//! the opposite end (the top) and the pile only ever shrinks.

use super::card::{Card, Rank, Suit};
use super::rng::GameRng;

/// Number of cards in a fresh deck.
pub const DECK_SIZE: usize = 36;

/// An ordered draw pile. The bottom of the pile is index 0; drawing pops
/// from the end.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    trump_card: Card,
}

impl Deck {
    /// Build the full 36-card deck, shuffle it, and reveal the trump.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    /// Build a deck from an explicit ordering, bottom card first.
    ///
    /// The bottom card becomes the trump. This is the injection seam for
    /// deterministic deals in tests; `shuffled` delegates here.
    ///
    /// # Panics
    ///
    /// Panics if `cards` is empty: a deck without a bottom card has no
    /// trump.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        assert!(!cards.is_empty(), "a deck needs at least one card");
        let trump_card = cards[0];
        Self { cards, trump_card }
    }

    /// Remove up to `n` cards from the top of the pile.
    ///
    /// Returns fewer than `n` once the pile is exhausted; never fails.
    pub fn draw(&mut self, n: usize) -> Vec<Card> {
        let take = n.min(self.cards.len());
        let mut drawn = Vec::with_capacity(take);
        for _ in 0..take {
            if let Some(card) = self.cards.pop() {
                drawn.push(card);
            }
        }
        drawn
    }

    /// The face-up trump card at the bottom of the pile.
    ///
    /// Stays valid for the whole game, even after the physical card has
    /// been drawn.
    #[must_use]
    pub fn trump_card(&self) -> Card {
        self.trump_card
    }

    /// The trump suit for the whole game.
    #[must_use]
    pub fn trump_suit(&self) -> Suit {
        self.trump_card.suit
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pile is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
