//! Core value types: cards, the deck, players, and the shuffle RNG.
//!
//! Everything here is rule-free. Legality and turn order live in
//! `crate::game`.

pub mod card;
pub mod deck;
pub mod player;
pub mod rng;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DECK_SIZE};
pub use player::Player;
pub use rng::GameRng;
