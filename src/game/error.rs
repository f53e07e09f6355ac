//! Typed rejections of illegal actions.
//!
//! Every failure is a synchronous, non-fatal refusal: validation runs
//! before any mutation, so a returned error means the game state is
//! exactly as it was. The transport layer relays the message to the
//! offending client only.

use thiserror::Error;

use crate::core::Card;

/// Why a requested move was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Construction only: the game seats 2 to 5 players.
    #[error("a game needs between 2 and 5 players, got {0}")]
    InvalidPlayerCount(usize),

    /// The actor does not currently hold the attack right.
    #[error("it is not {0}'s turn")]
    NotYourTurn(String),

    /// A defender-only action was requested by someone else.
    #[error("{0} is not the defender")]
    NotTheDefender(String),

    /// The defender tried to attack.
    #[error("{0} cannot attack while defending")]
    NotTheAttacker(String),

    /// The named card is not in the actor's hand.
    #[error("{player} does not hold {card}")]
    CardNotHeld { player: String, card: Card },

    /// An attack card's rank matches nothing already on the table.
    #[error("{0} does not match any rank on the table")]
    RankMismatch(Card),

    /// No more undefended attack cards may be placed this round.
    #[error("the attack limit has been reached")]
    AttackLimitReached,

    /// Tried to defend a card that is not currently attacking.
    #[error("{0} is not currently attacking")]
    CardNotOnTable(Card),

    /// The defense card does not beat the attack card.
    #[error("{defense} does not beat {attack}")]
    DefenseTooWeak { attack: Card, defense: Card },

    /// The primary attacker must open the round before skipping.
    #[error("the primary attacker must open the round before skipping")]
    IllegalSkip,

    /// The attack cannot be redirected to the next player.
    #[error("cannot pass the attack: {0}")]
    IllegalPass(&'static str),

    /// Take was requested with no attack cards on the table.
    #[error("there are no attack cards to take")]
    NothingToTake,
}
