//! # Coordinator
//!
//! The randomness coordinator's side of the request/fulfill handshake.
//!
//! The raffle calls [`RandomnessCoordinator::request_random_words`] once per
//! cycle and gets a request id back synchronously. The coordinator answers
//! later, in a separate invocation, by calling the raffle's
//! `fulfill_random_words(caller, request_id, random_words)` with its own
//! address as `caller`. Delivery is assumed at-most-once per request id and is
//! never assumed to happen at all.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::RandomWordsRequest;

#[contractclient(name = "CoordinatorClient")]
pub trait RandomnessCoordinator {
    /// Register a request on behalf of `consumer` and return its id.
    fn request_random_words(env: Env, consumer: Address, request: RandomWordsRequest) -> u64;
}
