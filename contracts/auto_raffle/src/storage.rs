//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the raffle:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key      | Type           | Description                       |
//! |----------|----------------|-----------------------------------|
//! | `Config` | `RaffleConfig` | Immutable configuration           |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key        | Type          | Description                          |
//! |------------|---------------|--------------------------------------|
//! | `Round`    | `RaffleRound` | Mutable state of the current cycle   |
//! | `LastDraw` | `DrawRecord`  | Outcome of the most recent cycle     |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.

use soroban_sdk::{contracttype, Env};

use crate::types::{DrawRecord, RaffleConfig, RaffleRound};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

/// Instance storage: bump by 7 days when below 1 day remaining.
const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

/// Persistent storage: bump by 30 days when below 7 days remaining.
const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Raffle configuration (Instance).
    Config,
    /// Current cycle (Persistent).
    Round,
    /// Most recent resolved cycle (Persistent).
    LastDraw,
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ─────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────

pub fn save_config(env: &Env, config: &RaffleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn load_config(env: &Env) -> Result<RaffleConfig, Error> {
    let config: RaffleConfig = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)?;
    bump_instance(env);
    Ok(config)
}

// ─────────────────────────────────────────────────────────
// Current cycle
// ─────────────────────────────────────────────────────────

pub fn load_round(env: &Env) -> Result<RaffleRound, Error> {
    let key = DataKey::Round;
    let round: RaffleRound = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotInitialized)?;
    bump_persistent(env, &key);
    Ok(round)
}

pub fn save_round(env: &Env, round: &RaffleRound) {
    let key = DataKey::Round;
    env.storage().persistent().set(&key, round);
    bump_persistent(env, &key);
}

// ─────────────────────────────────────────────────────────
// Draw history
// ─────────────────────────────────────────────────────────

/// Returns `None` until the first cycle has been resolved.
pub fn load_last_draw(env: &Env) -> Option<DrawRecord> {
    let key = DataKey::LastDraw;
    let draw: Option<DrawRecord> = env.storage().persistent().get(&key);
    if draw.is_some() {
        bump_persistent(env, &key);
    }
    draw
}

/// Overwrites the previous cycle's record.
pub fn save_last_draw(env: &Env, draw: &DrawRecord) {
    let key = DataKey::LastDraw;
    env.storage().persistent().set(&key, draw);
    bump_persistent(env, &key);
}
