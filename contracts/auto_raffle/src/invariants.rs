#![allow(dead_code)]

extern crate std;

use crate::types::{RaffleRound, RaffleState};

/// A request is outstanding exactly while the round is `Calculating`.
pub fn assert_pending_matches_state(round: &RaffleRound) {
    match round.state {
        RaffleState::Open => assert!(
            round.pending_request.is_none(),
            "open round {} still holds request {:?}",
            round.cycle,
            round.pending_request
        ),
        RaffleState::Calculating => assert!(
            round.pending_request.is_some(),
            "calculating round {} has no outstanding request",
            round.cycle
        ),
    }
}

/// The pot never goes negative and is empty whenever the ledger is.
pub fn assert_pool_consistent(round: &RaffleRound) {
    assert!(
        round.prize_pool >= 0,
        "round {} has negative pool ({})",
        round.cycle,
        round.prize_pool
    );
    if round.players.is_empty() {
        assert_eq!(
            round.prize_pool, 0,
            "round {} has an empty ledger but a pool of {}",
            round.cycle, round.prize_pool
        );
    }
}

/// After one deposit of `amount`, the pool grows by exactly `amount` and the
/// ledger by exactly one slot.
pub fn assert_entry_invariant(before: &RaffleRound, after: &RaffleRound, amount: i128) {
    assert_eq!(
        after.prize_pool,
        before.prize_pool + amount,
        "entry invariant broken: {} + {} != {}",
        before.prize_pool,
        amount,
        after.prize_pool
    );
    assert_eq!(after.players.len(), before.players.len() + 1);
}

/// A resolved round is open, empty and restarted at `now`.
pub fn assert_reset(before: &RaffleRound, after: &RaffleRound, now: u64) {
    assert_eq!(after.state, RaffleState::Open);
    assert_eq!(after.players.len(), 0);
    assert_eq!(after.prize_pool, 0);
    assert_eq!(after.last_timestamp, now);
    assert_eq!(after.pending_request, None);
    assert_eq!(after.cycle, before.cycle + 1);
}

pub fn assert_all_round_invariants(round: &RaffleRound) {
    assert_pending_matches_state(round);
    assert_pool_consistent(round);
}
