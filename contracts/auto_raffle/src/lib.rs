//! # Auto Raffle Contract
//!
//! A raffle that runs itself. Players stake a fixed entrance fee to enter;
//! once the configured interval has elapsed an automation trigger closes the
//! cycle and the contract asks a randomness coordinator for a random word.
//! When the coordinator answers, the whole pot goes to the selected player
//! and a new cycle opens.
//!
//! | Phase        | Entry Point(s)                                   |
//! |--------------|--------------------------------------------------|
//! | Bootstrap    | `__constructor`                                  |
//! | Entry        | [`AutoRaffle::enter`]                            |
//! | Automation   | [`AutoRaffle::check_upkeep`], [`AutoRaffle::perform_upkeep`] |
//! | Resolution   | [`AutoRaffle::fulfill_random_words`]             |
//! | Queries      | `raffle_state`, `participant`, `recent_winner`, … |
//!
//! ## Architecture
//!
//! State transitions live in [`round`]. Storage access is delegated to
//! [`storage`]. This file loads state, applies one transition, persists it,
//! and only then talks to the token or the coordinator.
//!
//! ## Liveness
//!
//! Nothing here recovers from a coordinator that never answers. The raffle
//! then stays in `Calculating`: entries are refused but no stake is lost, and
//! the pot is still paid out if the answer eventually arrives.

#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, log, panic_with_error, token, Address, Bytes, Env,
    Vec, U256,
};

pub mod coordinator;
pub mod events;
mod round;
mod storage;
mod types;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;

use coordinator::CoordinatorClient;
pub use round::winner_index;
pub use types::{DrawRecord, RaffleConfig, RaffleRound, RaffleState, RandomWordsRequest, UpkeepCheck};

/// Random words consumed per cycle.
pub const NUM_WORDS: u32 = 1;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InsufficientStake = 1,
    RaffleNotOpen = 2,
    UpkeepNotNeeded = 3,
    UnknownRequest = 4,
    NoParticipants = 5,
    PayoutFailed = 6,
    Unauthorized = 7,
    IndexOutOfRange = 8,
    InvalidConfig = 9,
    EmptyRandomWords = 10,
    NotInitialized = 11,
    Overflow = 12,
}

#[contract]
pub struct AutoRaffle;

#[contractimpl]
impl AutoRaffle {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Store the configuration and open the first cycle at the current
    /// ledger timestamp.
    ///
    /// Panics with `Error::InvalidConfig` if the fee is negative or the
    /// request asks for anything other than [`NUM_WORDS`] words.
    pub fn __constructor(env: Env, config: RaffleConfig) {
        if config.entrance_fee < 0 || config.request.num_words != NUM_WORDS {
            panic_with_error!(&env, Error::InvalidConfig);
        }
        storage::save_config(&env, &config);
        let round = RaffleRound::open(&env, env.ledger().timestamp());
        storage::save_round(&env, &round);
    }

    // ─────────────────────────────────────────────────────────
    // Entry
    // ─────────────────────────────────────────────────────────

    /// Enter the current cycle by staking `amount` of the raffle token.
    ///
    /// - `player` must authorize; `amount` is moved from `player` to the contract.
    /// - `amount` must be at least the entrance fee. Anything above the fee
    ///   joins the pot as well.
    /// - Each call is one slot; entering again improves the odds.
    pub fn enter(env: Env, player: Address, amount: i128) -> Result<(), Error> {
        player.require_auth();
        let config = storage::load_config(&env)?;
        let mut round = storage::load_round(&env)?;

        round.record_entry(player.clone(), amount, config.entrance_fee)?;
        storage::save_round(&env, &round);

        if amount > 0 {
            token::Client::new(&env, &config.token).transfer(
                &player,
                &env.current_contract_address(),
                &amount,
            );
        }

        events::emit_raffle_entered(&env, round.cycle, player, amount);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Automation
    // ─────────────────────────────────────────────────────────

    /// Report whether `perform_upkeep` would succeed right now, and why not.
    ///
    /// Read-only; safe to poll as often as needed. `check_data` is ignored.
    pub fn check_upkeep(env: Env, _check_data: Bytes) -> Result<UpkeepCheck, Error> {
        let config = storage::load_config(&env)?;
        let round = storage::load_round(&env)?;
        Ok(round.check_upkeep(&config, env.ledger().timestamp()))
    }

    /// Close entry and request randomness. Returns the coordinator's
    /// request id.
    ///
    /// Eligibility is evaluated again here; a stale positive `check_upkeep`
    /// does not help. Fails with `Error::UpkeepNotNeeded` otherwise, which
    /// includes every call made while a request is already outstanding.
    pub fn perform_upkeep(env: Env, _perform_data: Bytes) -> Result<u64, Error> {
        let config = storage::load_config(&env)?;
        let mut round = storage::load_round(&env)?;

        if let Err((err, check)) = round.close(&config, env.ledger().timestamp()) {
            log!(
                &env,
                "upkeep not needed",
                check.is_open,
                check.time_passed,
                check.has_players,
                check.has_balance
            );
            return Err(err);
        }
        storage::save_round(&env, &round);

        let request_id = CoordinatorClient::new(&env, &config.coordinator)
            .request_random_words(&env.current_contract_address(), &config.request);

        round.mark_requested(request_id);
        storage::save_round(&env, &round);

        events::emit_winner_requested(&env, round.cycle, request_id);
        Ok(request_id)
    }

    // ─────────────────────────────────────────────────────────
    // Resolution
    // ─────────────────────────────────────────────────────────

    /// Coordinator callback delivering the randomness for `request_id`.
    ///
    /// - `caller` must be the configured coordinator and must authorize.
    /// - `request_id` must be the outstanding request; anything else,
    ///   including a second delivery for a resolved request, is rejected.
    /// - Only the first word is used.
    ///
    /// The cycle is reset and persisted before the pot is transferred. If the
    /// transfer fails the call returns `Error::PayoutFailed` and every change
    /// is rolled back, so the same request can be delivered again.
    pub fn fulfill_random_words(
        env: Env,
        caller: Address,
        request_id: u64,
        random_words: Vec<U256>,
    ) -> Result<(), Error> {
        let config = storage::load_config(&env)?;
        if caller != config.coordinator {
            return Err(Error::Unauthorized);
        }
        caller.require_auth();

        let mut round = storage::load_round(&env)?;
        let draw = round.settle(&env, request_id, &random_words, env.ledger().timestamp())?;
        storage::save_round(&env, &round);
        storage::save_last_draw(&env, &draw);

        if draw.payout > 0 {
            let paid = token::Client::new(&env, &config.token).try_transfer(
                &env.current_contract_address(),
                &draw.winner,
                &draw.payout,
            );
            if !matches!(paid, Ok(Ok(()))) {
                log!(&env, "payout failed", draw.winner, draw.payout);
                return Err(Error::PayoutFailed);
            }
        }

        events::emit_winner_picked(&env, draw.cycle, request_id, draw.winner, draw.payout);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn config(env: Env) -> Result<RaffleConfig, Error> {
        storage::load_config(&env)
    }

    /// Snapshot of the whole current cycle.
    pub fn round(env: Env) -> Result<RaffleRound, Error> {
        storage::load_round(&env)
    }

    pub fn raffle_state(env: Env) -> Result<RaffleState, Error> {
        Ok(storage::load_round(&env)?.state)
    }

    pub fn entrance_fee(env: Env) -> Result<i128, Error> {
        Ok(storage::load_config(&env)?.entrance_fee)
    }

    /// Seconds a cycle must stay open before it can be closed.
    pub fn interval(env: Env) -> Result<u64, Error> {
        Ok(storage::load_config(&env)?.interval)
    }

    pub fn num_words(env: Env) -> Result<u32, Error> {
        Ok(storage::load_config(&env)?.request.num_words)
    }

    pub fn request_confirmations(env: Env) -> Result<u32, Error> {
        Ok(storage::load_config(&env)?.request.request_confirmations)
    }

    pub fn participant_count(env: Env) -> Result<u32, Error> {
        Ok(storage::load_round(&env)?.participant_count())
    }

    /// Return the player holding slot `index` in the current cycle.
    pub fn participant(env: Env, index: u32) -> Result<Address, Error> {
        storage::load_round(&env)?.participant(index)
    }

    /// Sum of the stakes collected in the current cycle.
    pub fn prize_pool(env: Env) -> Result<i128, Error> {
        Ok(storage::load_round(&env)?.prize_pool)
    }

    /// Ledger timestamp at which the current cycle opened.
    pub fn last_timestamp(env: Env) -> Result<u64, Error> {
        Ok(storage::load_round(&env)?.last_timestamp)
    }

    pub fn pending_request(env: Env) -> Result<Option<u64>, Error> {
        Ok(storage::load_round(&env)?.pending_request)
    }

    /// Number of the current cycle; starts at 0.
    pub fn cycle(env: Env) -> Result<u64, Error> {
        Ok(storage::load_round(&env)?.cycle)
    }

    /// Winner of the most recently resolved cycle, if any.
    pub fn recent_winner(env: Env) -> Option<Address> {
        storage::load_last_draw(&env).map(|draw| draw.winner)
    }

    /// Amount paid out in the most recently resolved cycle; 0 before the first.
    pub fn last_payout(env: Env) -> i128 {
        storage::load_last_draw(&env)
            .map(|draw| draw.payout)
            .unwrap_or(0)
    }

    pub fn last_draw(env: Env) -> Option<DrawRecord> {
        storage::load_last_draw(&env)
    }
}
