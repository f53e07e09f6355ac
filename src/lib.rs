//! # budalla
//!
//! Rules engine for Budalla, a Durak-variant trick-taking card game for
//! 2-5 players.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no networking, persistence, or rendering. The
//!    transport layer resolves a client message to a `(verb, player,
//!    cards)` call, invokes one operation, and re-broadcasts state.
//!
//! 2. **Validate, then mutate**: every operation either fully succeeds or
//!    fails with a typed [`GameError`] and leaves state untouched.
//!
//! 3. **One game per room**: a `Game` has no interior locking. Callers
//!    serialize mutations per instance (actor, mutex, or work queue);
//!    distinct games are independent.
//!
//! ## Modules
//!
//! - `core`: cards, the deck and trump, players, the shuffle RNG
//! - `game`: the state machine, its operations, and winner/loser tracking

pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Card, Deck, GameRng, Player, Rank, Suit, DECK_SIZE};
pub use crate::game::{Game, GameError, GameOver, HAND_SIZE, MAX_PLAYERS, MIN_PLAYERS};
