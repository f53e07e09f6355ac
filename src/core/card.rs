//! The 36-card Budalla deck's value types: suits, ranks, and cards.
//!
//! Cards are immutable `Copy` values compared by rank and suit, never by
//! identity. Ranks run from Six up to Ace; the court cards carry their
//! conventional display symbols (11=J, 12=Q, 13=K, 14=A).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits, in deck-construction order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// The display symbol for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, Six through Ace.
///
/// Discriminants are the conventional card values, so `Rank::Jack.value()`
/// is 11 and ordering follows card strength.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    /// All nine ranks, ascending.
    pub const ALL: [Rank; 9] = [
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// The numeric card value (6-14).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// The display symbol: the numeric value for pip cards, J/Q/K/A for
    /// court cards. A pure lookup with no behavioral coupling to the enum.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Whether this card, played as a defense, beats `attack` under the
    /// given trump suit.
    ///
    /// Same suit requires a higher rank (this covers trump-vs-trump);
    /// otherwise only a trump beats a non-trump. A non-trump of a different
    /// suit never beats.
    #[must_use]
    pub fn beats(self, attack: Card, trump: Suit) -> bool {
        if self.suit == attack.suit {
            self.rank > attack.rank
        } else {
            self.suit == trump
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Six.value(), 6);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Ace.value(), 14);
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Seven > Rank::Six);
    }

    #[test]
    fn test_rank_symbols() {
        assert_eq!(Rank::Six.symbol(), "6");
        assert_eq!(Rank::Ten.symbol(), "10");
        assert_eq!(Rank::Jack.symbol(), "J");
        assert_eq!(Rank::Queen.symbol(), "Q");
        assert_eq!(Rank::King.symbol(), "K");
        assert_eq!(Rank::Ace.symbol(), "A");
    }

    #[test]
    fn test_card_equality_by_value() {
        let a = Card::new(Rank::Nine, Suit::Clubs);
        let b = Card::new(Rank::Nine, Suit::Clubs);
        let c = Card::new(Rank::Nine, Suit::Spades);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::Jack, Suit::Hearts).to_string(), "J♥");
        assert_eq!(Card::new(Rank::Ten, Suit::Spades).to_string(), "10♠");
    }

    #[test]
    fn test_beats_same_suit() {
        let trump = Suit::Diamonds;
        let ten = Card::new(Rank::Ten, Suit::Clubs);
        let king = Card::new(Rank::King, Suit::Clubs);

        assert!(king.beats(ten, trump));
        assert!(!ten.beats(king, trump));
        assert!(!ten.beats(ten, trump));
    }

    #[test]
    fn test_beats_trump_over_non_trump() {
        let trump = Suit::Diamonds;
        let six_trump = Card::new(Rank::Six, Suit::Diamonds);
        let ace_clubs = Card::new(Rank::Ace, Suit::Clubs);

        assert!(six_trump.beats(ace_clubs, trump));
        assert!(!ace_clubs.beats(six_trump, trump));
    }

    #[test]
    fn test_beats_trump_vs_trump_needs_higher_rank() {
        let trump = Suit::Spades;
        let seven = Card::new(Rank::Seven, Suit::Spades);
        let queen = Card::new(Rank::Queen, Suit::Spades);

        assert!(queen.beats(seven, trump));
        assert!(!seven.beats(queen, trump));
    }

    #[test]
    fn test_beats_off_suit_never_wins() {
        let trump = Suit::Diamonds;
        let attack = Card::new(Rank::Six, Suit::Hearts);
        let defense = Card::new(Rank::Ace, Suit::Clubs);

        assert!(!defense.beats(attack, trump));
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::new(Rank::Queen, Suit::Hearts);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
