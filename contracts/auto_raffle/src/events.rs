//! Events published by the raffle. Topics are `(name, cycle)` so an indexer
//! can follow one cycle from its first entry to its payout.

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RaffleEntered {
    pub cycle: u64,
    pub player: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinnerRequested {
    pub cycle: u64,
    pub request_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WinnerPicked {
    pub cycle: u64,
    pub request_id: u64,
    pub winner: Address,
    pub payout: i128,
}

pub fn emit_raffle_entered(env: &Env, cycle: u64, player: Address, amount: i128) {
    let topics = (symbol_short!("entered"), cycle);
    let data = RaffleEntered {
        cycle,
        player,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_winner_requested(env: &Env, cycle: u64, request_id: u64) {
    let topics = (symbol_short!("requested"), cycle);
    let data = WinnerRequested { cycle, request_id };
    env.events().publish(topics, data);
}

pub fn emit_winner_picked(env: &Env, cycle: u64, request_id: u64, winner: Address, payout: i128) {
    let topics = (symbol_short!("picked"), cycle);
    let data = WinnerPicked {
        cycle,
        request_id,
        winner,
        payout,
    };
    env.events().publish(topics, data);
}
