//! # Round
//!
//! The raffle state machine. Every transition is a method on [`RaffleRound`]
//! that either fully applies or returns an [`Error`] without touching `self`.
//! Nothing here talks to storage, tokens or the coordinator; `lib.rs` loads
//! the round, applies one transition, saves it, and only then performs any
//! external call.
//!
//! | Transition        | From          | To            |
//! |-------------------|---------------|---------------|
//! | `record_entry`    | `Open`        | `Open`        |
//! | `close`           | `Open`        | `Calculating` |
//! | `settle`          | `Calculating` | `Open`        |

use soroban_sdk::{Address, Env, Vec, U256};

use crate::types::{DrawRecord, RaffleConfig, RaffleRound, RaffleState, UpkeepCheck};
use crate::Error;

impl RaffleRound {
    /// A fresh, empty, open cycle starting at `now`.
    pub fn open(env: &Env, now: u64) -> Self {
        RaffleRound {
            cycle: 0,
            state: RaffleState::Open,
            players: Vec::new(env),
            prize_pool: 0,
            last_timestamp: now,
            pending_request: None,
        }
    }

    pub fn participant_count(&self) -> u32 {
        self.players.len()
    }

    pub fn participant(&self, index: u32) -> Result<Address, Error> {
        self.players.get(index).ok_or(Error::IndexOutOfRange)
    }

    /// Evaluate whether the cycle may be closed at `now`.
    pub fn check_upkeep(&self, config: &RaffleConfig, now: u64) -> UpkeepCheck {
        let elapsed = now.saturating_sub(self.last_timestamp);
        let is_open = self.state == RaffleState::Open;
        let time_passed = elapsed >= config.interval;
        let has_players = !self.players.is_empty();
        // Implied by `has_players` while the fee is positive, but a zero fee
        // can produce players with an empty pot.
        let has_balance = self.prize_pool > 0;

        UpkeepCheck {
            upkeep_needed: is_open && time_passed && has_players && has_balance,
            is_open,
            time_passed,
            has_players,
            has_balance,
            elapsed,
            participants: self.players.len(),
            prize_pool: self.prize_pool,
        }
    }

    /// Append one entry for `player`.
    pub fn record_entry(
        &mut self,
        player: Address,
        amount: i128,
        entrance_fee: i128,
    ) -> Result<(), Error> {
        if amount < entrance_fee {
            return Err(Error::InsufficientStake);
        }
        if self.state != RaffleState::Open {
            return Err(Error::RaffleNotOpen);
        }
        let prize_pool = self
            .prize_pool
            .checked_add(amount)
            .ok_or(Error::Overflow)?;

        self.players.push_back(player);
        self.prize_pool = prize_pool;
        Ok(())
    }

    /// Close entry. Eligibility is re-evaluated here rather than trusted from
    /// an earlier `check_upkeep`. On failure the diagnostics are returned
    /// alongside the error so the caller can log them.
    pub fn close(&mut self, config: &RaffleConfig, now: u64) -> Result<(), (Error, UpkeepCheck)> {
        let check = self.check_upkeep(config, now);
        if !check.upkeep_needed {
            return Err((Error::UpkeepNotNeeded, check));
        }
        self.state = RaffleState::Calculating;
        Ok(())
    }

    /// Remember the coordinator's handle for the request issued by `close`.
    pub fn mark_requested(&mut self, request_id: u64) {
        self.pending_request = Some(request_id);
    }

    /// Consume delivered randomness: pick the winner and reopen the cycle.
    ///
    /// The returned record holds the payout still owed to the winner; the
    /// caller must transfer it after persisting `self`.
    pub fn settle(
        &mut self,
        env: &Env,
        request_id: u64,
        random_words: &Vec<U256>,
        now: u64,
    ) -> Result<DrawRecord, Error> {
        match (self.state, self.pending_request) {
            (RaffleState::Calculating, Some(pending)) if pending == request_id => {}
            _ => return Err(Error::UnknownRequest),
        }
        let random = random_words.get(0).ok_or(Error::EmptyRandomWords)?;
        let count = self.players.len();
        if count == 0 {
            return Err(Error::NoParticipants);
        }
        let winner = self.participant(winner_index(env, &random, count))?;

        let draw = DrawRecord {
            cycle: self.cycle,
            request_id,
            winner,
            payout: self.prize_pool,
            drawn_at: now,
        };

        self.cycle += 1;
        self.state = RaffleState::Open;
        self.players = Vec::new(env);
        self.prize_pool = 0;
        self.last_timestamp = now;
        self.pending_request = None;

        Ok(draw)
    }
}

/// `random mod count`. `count` must be non-zero.
pub fn winner_index(env: &Env, random: &U256, count: u32) -> u32 {
    let index = random.rem_euclid(&U256::from_u32(env, count));
    // Always below `count`, so it fits.
    index.to_u128().unwrap_or_default() as u32
}
