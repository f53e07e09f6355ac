//! The Budalla state machine.
//!
//! `Game` is the aggregate root: it owns the deck, the seated players, the
//! table piles, the turn pointers, and the winner bookkeeping. All rule
//! enforcement lives here; every mutation goes through the operation set,
//! which validates fully before touching state.
//!
//! ## Roles
//!
//! Each round has a primary attacker and a defender. The *active attacker*
//! is whichever non-defender currently holds the right to add an attack
//! card; it starts at the primary attacker and can rotate to other seats
//! with cards. Seating order is fixed at construction and rotation is
//! always "next index, wrapping".
//!
//! ## Concurrency
//!
//! The engine is synchronous: each operation runs to completion with no
//! suspension points. Callers owning more than one game (one per room) must
//! serialize calls per instance; separate games are fully independent.

mod error;
mod outcome;
mod round;

pub use error::GameError;
pub use outcome::GameOver;

use smallvec::SmallVec;
use tracing::debug;

use crate::core::{Card, Deck, GameRng, Player, Suit};

/// Minimum seats in a game.
pub const MIN_PLAYERS: usize = 2;
/// Maximum seats in a game.
pub const MAX_PLAYERS: usize = 5;
/// Hands are dealt and refilled up to this size.
pub const HAND_SIZE: usize = 6;

/// Cap on undefended attack cards once the discard pile is non-empty.
const BASE_ATTACK_LIMIT: usize = 6;
/// Cap for the opening round, before the defender has ever drawn back up.
const FIRST_ROUND_ATTACK_LIMIT: usize = 5;

/// One game of Budalla, from the deal to the Fool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    players: Vec<Player>,
    deck: Deck,
    trump_suit: Suit,
    discard_pile: Vec<Card>,
    /// Attack cards not yet beaten, in placement order.
    table_attack: SmallVec<[Card; 6]>,
    /// Beaten (attack, defense) pairs flattened in order; always even length.
    table_defense: SmallVec<[Card; 12]>,
    attacker_idx: usize,
    defender_idx: usize,
    active_attacker_idx: usize,
    /// Consecutive skips since the last attack, defense, or pass.
    skipped_count: usize,
    /// Names of players who emptied their hand after the deck ran dry,
    /// in finishing order. Append-only.
    winners: Vec<String>,
}

impl Game {
    /// Start a game with a fresh entropy-seeded shuffle.
    ///
    /// Fails with [`GameError::InvalidPlayerCount`] outside 2-5 players.
    /// "Restarting" a room is constructing a new `Game` with the same names.
    pub fn new(names: Vec<String>) -> Result<Self, GameError> {
        let mut rng = GameRng::from_entropy();
        debug!(seed = rng.seed(), "shuffling a new deck");
        Self::with_deck(names, Deck::shuffled(&mut rng))
    }

    /// Start a game with a seeded shuffle, for reproducible deals.
    pub fn with_seed(names: Vec<String>, seed: u64) -> Result<Self, GameError> {
        Self::with_deck(names, Deck::shuffled(&mut GameRng::new(seed)))
    }

    /// Start a game from an already-built deck.
    pub fn with_deck(names: Vec<String>, mut deck: Deck) -> Result<Self, GameError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&names.len()) {
            return Err(GameError::InvalidPlayerCount(names.len()));
        }

        let trump_suit = deck.trump_suit();
        let mut players: Vec<Player> = names.into_iter().map(Player::new).collect();
        for player in &mut players {
            player.take_cards(deck.draw(HAND_SIZE));
        }

        debug!(trump = %deck.trump_card(), players = players.len(), "game dealt");

        Ok(Self {
            players,
            deck,
            trump_suit,
            discard_pile: Vec::new(),
            table_attack: SmallVec::new(),
            table_defense: SmallVec::new(),
            attacker_idx: 0,
            defender_idx: 1,
            active_attacker_idx: 0,
            skipped_count: 0,
            winners: Vec::new(),
        })
    }

    // === State queries for the transport projection ===
    //
    // The engine exposes raw state; hiding opponents' hands from a given
    // viewer is the caller's job.

    /// All seated players, in fixed seating order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by name.
    #[must_use]
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// The trump suit for the whole game.
    #[must_use]
    pub fn trump_suit(&self) -> Suit {
        self.trump_suit
    }

    /// The revealed trump card.
    #[must_use]
    pub fn trump_card(&self) -> Card {
        self.deck.trump_card()
    }

    /// Cards left in the draw pile.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.deck.len()
    }

    /// Whether the draw pile is exhausted.
    #[must_use]
    pub fn deck_is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Cards permanently out of play.
    #[must_use]
    pub fn discard_count(&self) -> usize {
        self.discard_pile.len()
    }

    /// Attack cards not yet beaten.
    #[must_use]
    pub fn table_attack(&self) -> &[Card] {
        &self.table_attack
    }

    /// Beaten (attack, defense) pairs, flattened in placement order.
    #[must_use]
    pub fn table_defense(&self) -> &[Card] {
        &self.table_defense
    }

    /// The round's primary attacker.
    #[must_use]
    pub fn attacker(&self) -> &Player {
        &self.players[self.attacker_idx]
    }

    /// The round's defender.
    #[must_use]
    pub fn defender(&self) -> &Player {
        &self.players[self.defender_idx]
    }

    /// Whoever currently holds the right to add an attack card.
    #[must_use]
    pub fn active_attacker(&self) -> &Player {
        &self.players[self.active_attacker_idx]
    }

    /// Players who have finished, in finishing order.
    #[must_use]
    pub fn winners(&self) -> &[String] {
        &self.winners
    }

    /// How many more undefended attack cards may be placed right now.
    ///
    /// `min(base - defended_pairs, defender's hand size)`, where the base
    /// is 5 until the first discard of the game and 6 afterwards.
    #[must_use]
    pub fn current_attack_limit(&self) -> usize {
        let base = if self.discard_pile.is_empty() {
            FIRST_ROUND_ATTACK_LIMIT
        } else {
            BASE_ATTACK_LIMIT
        };
        let defended_pairs = self.table_defense.len() / 2;
        base.saturating_sub(defended_pairs)
            .min(self.players[self.defender_idx].hand_size())
    }

    // === Rotation helpers ===

    /// First seat after `from`, wrapping, satisfying `pred`. Never returns
    /// `from` itself.
    fn scan_seats(&self, from: usize, pred: impl Fn(usize, &Player) -> bool) -> Option<usize> {
        let n = self.players.len();
        (1..n)
            .map(|step| (from + step) % n)
            .find(|&seat| pred(seat, &self.players[seat]))
    }

    /// Next seat after `from` that still holds cards.
    fn next_active_seat(&self, from: usize) -> Option<usize> {
        self.scan_seats(from, |_, p| p.hand_size() > 0)
    }

    /// Next seat after `from` eligible to attack: holds cards and is not
    /// the defender.
    fn next_attacker_seat(&self, from: usize) -> Option<usize> {
        self.scan_seats(from, |seat, p| {
            seat != self.defender_idx && p.hand_size() > 0
        })
    }

    /// Seats, excluding the defender, still holding cards.
    fn active_attacker_count(&self) -> usize {
        self.players
            .iter()
            .enumerate()
            .filter(|(seat, p)| *seat != self.defender_idx && p.hand_size() > 0)
            .count()
    }

    /// Every state-advancing move funnels through here: the consecutive-
    /// skip counter resets and newly emptied hands are recorded.
    fn mark_progress(&mut self) {
        self.skipped_count = 0;
        self.check_for_winners();
    }
}
