//! The attack/defend/pass/skip/take protocol.
//!
//! Each operation validates its preconditions in order (first failure
//! wins), then mutates atomically. A returned error means nothing changed.

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::{Game, GameError, HAND_SIZE};
use crate::core::{Card, Rank};

impl Game {
    /// Place an attack card on the table.
    ///
    /// Only the active attacker may attack; after the first card, the rank
    /// must match a card already on the table, and the attack limit bounds
    /// how many undefended cards may pile up.
    pub fn attack(&mut self, card: Card, player: &str) -> Result<(), GameError> {
        if self.active_attacker().name() != player {
            return Err(GameError::NotYourTurn(player.to_string()));
        }
        if self.defender().name() == player {
            return Err(GameError::NotTheAttacker(player.to_string()));
        }
        let seat = self.active_attacker_idx;
        if !self.players[seat].has_card(card) {
            return Err(GameError::CardNotHeld {
                player: player.to_string(),
                card,
            });
        }
        if !self.table_attack.is_empty() || !self.table_defense.is_empty() {
            let table_ranks: FxHashSet<Rank> = self
                .table_attack
                .iter()
                .chain(self.table_defense.iter())
                .map(|c| c.rank)
                .collect();
            if !table_ranks.contains(&card.rank) {
                return Err(GameError::RankMismatch(card));
            }
        }
        if self.table_attack.len() >= self.current_attack_limit() {
            return Err(GameError::AttackLimitReached);
        }

        self.players[seat].remove_card(card)?;
        self.table_attack.push(card);
        debug!(player, card = %card, "attack placed");
        self.mark_progress();
        Ok(())
    }

    /// Beat an attack card with a defense card.
    ///
    /// The beat rule: same suit needs a higher rank, and a trump beats any
    /// non-trump regardless of rank. The pair moves to the defense pile.
    pub fn defend(
        &mut self,
        attack_card: Card,
        defense_card: Card,
        player: &str,
    ) -> Result<(), GameError> {
        if self.defender().name() != player {
            return Err(GameError::NotTheDefender(player.to_string()));
        }
        let seat = self.defender_idx;
        if !self.players[seat].has_card(defense_card) {
            return Err(GameError::CardNotHeld {
                player: player.to_string(),
                card: defense_card,
            });
        }
        let Some(pos) = self.table_attack.iter().position(|&c| c == attack_card) else {
            return Err(GameError::CardNotOnTable(attack_card));
        };
        if !defense_card.beats(attack_card, self.trump_suit) {
            return Err(GameError::DefenseTooWeak {
                attack: attack_card,
                defense: defense_card,
            });
        }

        self.players[seat].remove_card(defense_card)?;
        self.table_attack.remove(pos);
        self.table_defense.push(attack_card);
        self.table_defense.push(defense_card);
        debug!(player, attack = %attack_card, defense = %defense_card, "attack beaten");
        // A defender can go out on this move once the deck is dry.
        self.mark_progress();
        Ok(())
    }

    /// Cede the attack right to the next eligible seat.
    ///
    /// Once every eligible attacker has skipped in a row, the attack phase
    /// is over: an empty attack pile ends the round in the defender's
    /// favor, otherwise the defender must still beat or take what is
    /// pending.
    pub fn skip_attack_turn(&mut self, player: &str) -> Result<(), GameError> {
        if self.active_attacker().name() != player {
            return Err(GameError::NotYourTurn(player.to_string()));
        }
        let is_primary = self.active_attacker_idx == self.attacker_idx;
        if is_primary && self.table_attack.is_empty() && self.table_defense.is_empty() {
            return Err(GameError::IllegalSkip);
        }

        self.skipped_count += 1;
        debug!(player, skipped = self.skipped_count, "attack turn skipped");

        if self.skipped_count >= self.active_attacker_count() {
            // Everyone who could attack has waved the round through.
            if self.table_attack.is_empty() {
                info!("every attack beaten, round goes to the defender");
                self.end_turn(true);
            } else {
                info!(
                    defender = self.defender().name(),
                    pending = self.table_attack.len(),
                    "attackers are done, defender must beat or take"
                );
            }
            self.reset_active_attacker();
            return Ok(());
        }

        match self.next_attacker_seat(self.active_attacker_idx) {
            Some(seat) => {
                self.active_attacker_idx = seat;
                debug!(next = self.players[seat].name(), "attack right moves on");
            }
            None => {
                // Nobody left who could attack; the skip count normally
                // catches this first. Close the round as defended.
                self.end_turn(true);
                self.reset_active_attacker();
            }
        }
        Ok(())
    }

    /// Defender redirects the whole attack to the next player.
    ///
    /// Only legal before any card has been defended, with a card matching
    /// the attack's uniform rank, and only when the next defender holds
    /// enough cards to possibly answer.
    pub fn pass_attack(&mut self, card: Card, player: &str) -> Result<(), GameError> {
        if self.defender().name() != player {
            return Err(GameError::NotTheDefender(player.to_string()));
        }
        if !self.table_defense.is_empty() {
            return Err(GameError::IllegalPass("the defense has already started"));
        }
        let seat = self.defender_idx;
        if !self.players[seat].has_card(card) {
            return Err(GameError::CardNotHeld {
                player: player.to_string(),
                card,
            });
        }
        if !self.table_attack.iter().all(|c| c.rank == card.rank) {
            return Err(GameError::IllegalPass("card rank must match the whole attack"));
        }
        let Some(next_defender) = self.next_active_seat(seat) else {
            return Err(GameError::IllegalPass("no player can receive the attack"));
        };
        if self.players[next_defender].hand_size() < self.table_attack.len() + 1 {
            return Err(GameError::IllegalPass("the next player holds too few cards"));
        }

        self.players[seat].remove_card(card)?;
        self.table_attack.push(card);
        debug!(
            player,
            card = %card,
            to = self.players[next_defender].name(),
            "attack passed along"
        );

        // The former defender now leads the attack against the next seat.
        self.attacker_idx = seat;
        self.defender_idx = next_defender;
        self.active_attacker_idx = self.attacker_idx;
        self.mark_progress();
        Ok(())
    }

    /// Defender concedes the round and picks up the table.
    pub fn action_take(&mut self, player: &str) -> Result<(), GameError> {
        if self.defender().name() != player {
            return Err(GameError::NotTheDefender(player.to_string()));
        }
        if self.table_attack.is_empty() {
            return Err(GameError::NothingToTake);
        }

        debug!(
            player,
            cards = self.table_attack.len() + self.table_defense.len(),
            "defender takes the table"
        );
        self.end_turn(false);
        Ok(())
    }

    /// Close the round: clear the table, refill hands, rotate roles.
    ///
    /// On success the table goes to the discard pile and the defender leads
    /// the next round (if they still hold cards). On failure the defender
    /// absorbs the table and is skipped over as the next attacker.
    pub(super) fn end_turn(&mut self, success: bool) {
        if success {
            info!(defender = self.defender().name(), "round defended");
            self.discard_pile.extend(self.table_attack.drain(..));
            self.discard_pile.extend(self.table_defense.drain(..));
            self.refill_hands();

            let defender = self.defender_idx;
            self.attacker_idx = if self.players[defender].hand_size() > 0 {
                defender
            } else {
                self.next_active_seat(defender)
                    .unwrap_or((defender + 1) % self.players.len())
            };
        } else {
            info!(defender = self.defender().name(), "defender picks up the table");
            let taken: Vec<Card> = self
                .table_attack
                .drain(..)
                .chain(self.table_defense.drain(..))
                .collect();
            self.players[self.defender_idx].take_cards(taken);
            self.refill_hands();

            // Taking costs the defender their turn to attack.
            let defender = self.defender_idx;
            self.attacker_idx = self
                .next_active_seat(defender)
                .unwrap_or((defender + 1) % self.players.len());
        }

        self.defender_idx = self
            .next_active_seat(self.attacker_idx)
            .unwrap_or((self.attacker_idx + 1) % self.players.len());
        self.active_attacker_idx = self.attacker_idx;
        self.skipped_count = 0;
        self.check_for_winners();
    }

    /// Top hands back up to six: defender first, then the attacker, then
    /// the remaining seats in rotation order after the attacker.
    ///
    /// Runs on the closing round's roles, before rotation. The deck may run
    /// dry mid-distribution, in which case later seats simply get fewer or
    /// nothing; the order is what keeps that fair.
    fn refill_hands(&mut self) {
        let n = self.players.len();
        let mut order = vec![self.defender_idx, self.attacker_idx];
        for step in 1..n {
            let seat = (self.attacker_idx + step) % n;
            if !order.contains(&seat) {
                order.push(seat);
            }
        }

        for seat in order {
            let needed = HAND_SIZE.saturating_sub(self.players[seat].hand_size());
            if needed > 0 && !self.deck.is_empty() {
                let drawn = self.deck.draw(needed);
                self.players[seat].take_cards(drawn);
            }
        }
    }

    /// Point the attack right back at the primary attacker, stepping past
    /// an emptied hand, and clear the consecutive-skip counter.
    fn reset_active_attacker(&mut self) {
        self.skipped_count = 0;
        self.active_attacker_idx = self.attacker_idx;
        if self.players[self.attacker_idx].hand_size() == 0 {
            if let Some(seat) = self.next_attacker_seat(self.attacker_idx) {
                self.active_attacker_idx = seat;
            }
        }
    }
}
