#![cfg(test)]

use super::{Error, ErrorKind, SaleToken, SaleTokenClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    Address, Env, InvokeError, String,
};
use vesting_core::ledger::TOKEN_PAUSED_CODE;

fn assert_contract_error<T, C>(
    result: Result<Result<T, C>, Result<Error, InvokeError>>,
    expected: Error,
) {
    assert!(matches!(result, Err(Ok(err)) if err == expected));
}

fn setup(env: &Env) -> (SaleTokenClient<'_>, Address) {
    let admin = Address::generate(env);
    let contract_id = env.register(SaleToken, ());
    let client = SaleTokenClient::new(env, &contract_id);
    client.initialize(
        &admin,
        &String::from_str(env, "Sale Token"),
        &String::from_str(env, "SALE"),
        &18,
    );
    (client, admin)
}

#[test]
fn test_initialize_records_metadata_once() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, admin) = setup(&env);

    assert_eq!(client.admin(), admin);
    assert_eq!(client.name(), String::from_str(&env, "Sale Token"));
    assert_eq!(client.symbol(), String::from_str(&env, "SALE"));
    assert_eq!(client.decimals(), 18);
    assert_eq!(client.total_supply(), 0);
    assert!(!client.paused());

    assert_contract_error(
        client.try_initialize(
            &admin,
            &String::from_str(&env, "Again"),
            &String::from_str(&env, "AGN"),
            &7,
        ),
        Error::AlreadyInitialized,
    );
}

#[test]
fn test_mint_and_transfer_move_balances() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _) = setup(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &1_000);
    assert_eq!(client.balance(&alice), 1_000);
    assert_eq!(client.total_supply(), 1_000);

    client.transfer(&alice, &bob, &400);
    assert_eq!(client.balance(&alice), 600);
    assert_eq!(client.balance(&bob), 400);
    assert_eq!(client.total_supply(), 1_000);

    assert_contract_error(
        client.try_transfer(&bob, &alice, &401),
        Error::InsufficientBalance,
    );
    assert_contract_error(client.try_mint(&bob, &-1), Error::InvalidAmount);
    assert_eq!(client.balance(&bob), 400);
}

#[test]
fn test_pause_blocks_mint_transfer_and_approve() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _) = setup(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    client.mint(&alice, &500);
    client.approve(&alice, &bob, &200, &100);
    client.pause();
    assert!(client.paused());

    assert_contract_error(client.try_mint(&alice, &1), Error::MintingDisallowed);
    assert_contract_error(client.try_transfer(&alice, &bob, &1), Error::Paused);
    assert_contract_error(
        client.try_transfer_from(&bob, &alice, &bob, &1),
        Error::Paused,
    );
    assert_contract_error(client.try_approve(&alice, &bob, &5, &100), Error::Paused);
    assert_eq!(client.balance(&alice), 500);
    assert_eq!(client.total_supply(), 500);

    client.unpause();
    client.transfer(&alice, &bob, &50);
    assert_eq!(client.balance(&bob), 50);
    assert_eq!(Error::MintingDisallowed.kind(), ErrorKind::State);
    assert_eq!(Error::Paused as u32, TOKEN_PAUSED_CODE);
}

#[test]
fn test_transfer_from_spends_allowance() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _) = setup(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);
    let receiver = Address::generate(&env);

    client.mint(&owner, &1_000);
    client.approve(&owner, &spender, &300, &100);
    assert_eq!(client.allowance(&owner, &spender), 300);

    client.transfer_from(&spender, &owner, &receiver, &120);
    assert_eq!(client.allowance(&owner, &spender), 180);
    assert_eq!(client.balance(&receiver), 120);
    assert_eq!(client.balance(&owner), 880);

    assert_contract_error(
        client.try_transfer_from(&spender, &owner, &receiver, &181),
        Error::InsufficientAllowance,
    );
    assert_eq!(client.allowance(&owner, &spender), 180);
}

#[test]
fn test_allowance_expires_with_ledger_sequence() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, _) = setup(&env);
    let owner = Address::generate(&env);
    let spender = Address::generate(&env);

    env.ledger().with_mut(|li| li.sequence_number = 50);
    assert_contract_error(
        client.try_approve(&owner, &spender, &10, &49),
        Error::InvalidExpiration,
    );

    client.mint(&owner, &100);
    client.approve(&owner, &spender, &10, &60);
    assert_eq!(client.allowance(&owner, &spender), 10);

    env.ledger().with_mut(|li| li.sequence_number = 61);
    assert_eq!(client.allowance(&owner, &spender), 0);
    assert_contract_error(
        client.try_transfer_from(&spender, &owner, &spender, &1),
        Error::InsufficientAllowance,
    );
}

#[test]
fn test_set_admin_hands_over_minting() {
    let env = Env::default();
    env.mock_all_auths();
    let (client, admin) = setup(&env);
    let sale = Address::generate(&env);

    client.set_admin(&sale);
    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, admin);

    assert_eq!(client.admin(), sale);
    client.mint(&sale, &5);
    assert_eq!(client.balance(&sale), 5);
}

#[test]
fn test_initialize_requires_admin_auth() {
    let env = Env::default();
    let claimant = Address::generate(&env);
    let contract_id = env.register(SaleToken, ());
    let client = SaleTokenClient::new(&env, &contract_id);
    let name = String::from_str(&env, "Sale Token");
    let symbol = String::from_str(&env, "SALE");

    assert!(client
        .try_initialize(&claimant, &name, &symbol, &18)
        .is_err());
    assert_contract_error(client.try_admin(), Error::NotInitialized);

    env.mock_all_auths();
    client.initialize(&claimant, &name, &symbol, &18);
    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, claimant);
    assert_eq!(client.admin(), claimant);
}
