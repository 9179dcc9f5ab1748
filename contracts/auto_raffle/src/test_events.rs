extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Bytes, BytesN, Env, IntoVal, TryIntoVal, U256,
};

use crate::events::{RaffleEntered, WinnerPicked, WinnerRequested};
use crate::mocks::{MockCoordinator, MockCoordinatorClient};
use crate::{AutoRaffle, AutoRaffleClient, RaffleConfig, RandomWordsRequest};

const FEE: i128 = 10;
const INTERVAL: u64 = 30;

fn setup() -> (
    Env,
    AutoRaffleClient<'static>,
    MockCoordinatorClient<'static>,
    Address,
) {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let coordinator_id = env.register(MockCoordinator, ());
    let config = RaffleConfig {
        entrance_fee: FEE,
        interval: INTERVAL,
        token: token_id.clone(),
        coordinator: coordinator_id.clone(),
        request: RandomWordsRequest {
            key_hash: BytesN::from_array(&env, &[0xabu8; 32]),
            subscription_id: 7,
            request_confirmations: 3,
            callback_gas_limit: 500_000,
            num_words: 1,
        },
    };
    let raffle_id = env.register(AutoRaffle, (config,));

    let raffle = AutoRaffleClient::new(&env, &raffle_id);
    let coordinator = MockCoordinatorClient::new(&env, &coordinator_id);
    (env, raffle, coordinator, token_id)
}

fn funded_player(env: &Env, token: &Address) -> Address {
    let player = Address::generate(env);
    token::StellarAssetClient::new(env, token).mint(&player, &1_000);
    player
}

#[test]
fn test_raffle_entered_event() {
    let (env, raffle, _coordinator, token) = setup();
    let player = funded_player(&env, &token);

    raffle.enter(&player, &FEE);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("entered"), cycle)
    assert_eq!(last_event.0, raffle.address);
    let expected_topics = vec![&env, symbol_short!("entered").into_val(&env), 0u64.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: RaffleEntered = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, RaffleEntered {
        cycle: 0,
        player: player.clone(),
        amount: FEE,
    });
}

#[test]
fn test_winner_requested_event() {
    let (env, raffle, _coordinator, token) = setup();
    let player = funded_player(&env, &token);
    raffle.enter(&player, &FEE);
    env.ledger().set_timestamp(INTERVAL + 1);

    let request_id = raffle.perform_upkeep(&Bytes::new(&env));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("requested"), cycle)
    assert_eq!(last_event.0, raffle.address);
    let expected_topics = vec![&env, symbol_short!("requested").into_val(&env), 0u64.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: WinnerRequested = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, WinnerRequested { cycle: 0, request_id });
}

#[test]
fn test_winner_picked_event() {
    let (env, raffle, coordinator, token) = setup();
    let first = funded_player(&env, &token);
    let second = funded_player(&env, &token);
    raffle.enter(&first, &FEE);
    raffle.enter(&second, &FEE);
    env.ledger().set_timestamp(INTERVAL + 1);
    let request_id = raffle.perform_upkeep(&Bytes::new(&env));

    coordinator.fulfill(&request_id, &U256::from_u32(&env, 3));

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    // Topic: (symbol_short!("picked"), cycle)
    assert_eq!(last_event.0, raffle.address);
    let expected_topics = vec![&env, symbol_short!("picked").into_val(&env), 0u64.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);

    let event_data: WinnerPicked = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(event_data, WinnerPicked {
        cycle: 0,
        request_id,
        winner: second.clone(),
        payout: 2 * FEE,
    });
}

#[test]
fn test_next_cycle_events_carry_new_cycle_number() {
    let (env, raffle, coordinator, token) = setup();
    let player = funded_player(&env, &token);
    raffle.enter(&player, &FEE);
    env.ledger().set_timestamp(INTERVAL + 1);
    let request_id = raffle.perform_upkeep(&Bytes::new(&env));
    coordinator.fulfill(&request_id, &U256::from_u32(&env, 0));

    raffle.enter(&player, &FEE);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");
    let expected_topics = vec![&env, symbol_short!("entered").into_val(&env), 1u64.into_val(&env)];
    assert_eq!(last_event.1, expected_topics);
}
