//! # Types
//!
//! Shared data structures used across all modules of the raffle.
//!
//! ## Design decisions
//!
//! ### Config / Round split
//!
//! The raffle is stored as two separate ledger entries:
//!
//! - [`RaffleConfig`] — written once by the constructor; never mutated.
//! - [`RaffleRound`] — the mutable aggregate rewritten by every transition.
//!
//! A third entry, [`DrawRecord`], keeps the outcome of the most recent cycle.
//!
//! ### State as a Finite-State Machine
//!
//! [`RaffleState`] cycles forever:
//!
//! ```text
//! Open ──(perform_upkeep)──► Calculating ──(fulfill_random_words)──► Open
//! ```
//!
//! There is no terminal state. Entries are only accepted while `Open`, and a
//! randomness request is outstanding exactly while `Calculating`.

use soroban_sdk::{contracttype, Address, BytesN, Vec};

/// Phase of the current raffle cycle.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RaffleState {
    /// Accepting entries; closure allowed once eligible.
    Open = 0,
    /// Entry closed, waiting for the coordinator to deliver randomness.
    Calculating = 1,
}

/// Parameters forwarded verbatim to the randomness coordinator.
///
/// Opaque to the raffle itself apart from `num_words`, which must be 1.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RandomWordsRequest {
    /// Key hash selecting the coordinator's proving key (gas lane).
    pub key_hash: BytesN<32>,
    /// Subscription that pays for the request.
    pub subscription_id: u64,
    /// Confirmations the coordinator waits for before answering.
    pub request_confirmations: u32,
    /// Budget the coordinator may spend on the callback.
    pub callback_gas_limit: u32,
    /// Number of random words requested.
    pub num_words: u32,
}

/// Immutable raffle configuration, supplied at construction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaffleConfig {
    /// Minimum stake per entry, in units of `token`.
    pub entrance_fee: i128,
    /// Seconds that must elapse after a cycle opens before it may close.
    pub interval: u64,
    /// Stellar asset contract the stake is paid in.
    pub token: Address,
    /// The only address allowed to deliver randomness.
    pub coordinator: Address,
    pub request: RandomWordsRequest,
}

/// Mutable state of the current cycle.
///
/// Loaded, transformed and saved as a single unit by every entry point.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaffleRound {
    /// Sequential cycle number, starting at 0.
    pub cycle: u64,
    pub state: RaffleState,
    /// One slot per entry, in entry order. Duplicates allowed.
    pub players: Vec<Address>,
    /// Sum of the deposits made during this cycle.
    pub prize_pool: i128,
    /// Ledger timestamp at which this cycle opened.
    pub last_timestamp: u64,
    /// Handle of the outstanding randomness request, if any.
    pub pending_request: Option<u64>,
}

/// Outcome of a resolved cycle.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DrawRecord {
    pub cycle: u64,
    pub request_id: u64,
    pub winner: Address,
    pub payout: i128,
    pub drawn_at: u64,
}

/// Result of the eligibility check, with every individual condition exposed
/// so a poller can tell why closure is not possible yet.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpkeepCheck {
    /// `true` only when all four conditions below hold.
    pub upkeep_needed: bool,
    pub is_open: bool,
    pub time_passed: bool,
    pub has_players: bool,
    pub has_balance: bool,
    /// Seconds since the cycle opened.
    pub elapsed: u64,
    pub participants: u32,
    pub prize_pool: i128,
}
