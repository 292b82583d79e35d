#![cfg(test)]
use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, String};

fn setup(env: &Env) -> (Address, ClaimTokenClient<'_>) {
    let admin = Address::generate(env);
    let contract_id = env.register(
        ClaimToken,
        (
            admin.clone(),
            String::from_str(env, "Orbit Launch"),
            String::from_str(env, "ORB"),
        ),
    );
    (admin, ClaimTokenClient::new(env, &contract_id))
}

#[test]
fn test_metadata() {
    let env = Env::default();
    env.mock_all_auths();

    let (admin, client) = setup(&env);

    assert_eq!(client.name(), String::from_str(&env, "Orbit Launch"));
    assert_eq!(client.symbol(), String::from_str(&env, "ORB"));
    assert_eq!(client.admin(), admin);
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_mint_and_transfer() {
    let env = Env::default();
    env.mock_all_auths();

    let (_admin, client) = setup(&env);
    let holder = Address::generate(&env);
    let investor = Address::generate(&env);

    client.mint(&holder, &1_000);
    assert_eq!(client.balance(&holder), 1_000);
    assert_eq!(client.total_supply(), 1_000);

    // A second mint accumulates
    client.mint(&holder, &500);
    assert_eq!(client.balance(&holder), 1_500);
    assert_eq!(client.total_supply(), 1_500);

    client.transfer(&holder, &investor, &400);
    assert_eq!(client.balance(&holder), 1_100);
    assert_eq!(client.balance(&investor), 400);
    assert_eq!(client.total_supply(), 1_500);
}

#[test]
fn test_transfer_insufficient_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let (_admin, client) = setup(&env);
    let holder = Address::generate(&env);
    let investor = Address::generate(&env);

    client.mint(&holder, &100);

    let result = client.try_transfer(&holder, &investor, &101);
    assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));

    // Balances untouched after the failed transfer
    assert_eq!(client.balance(&holder), 100);
    assert_eq!(client.balance(&investor), 0);
}

#[test]
fn test_negative_amounts_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let (_admin, client) = setup(&env);
    let holder = Address::generate(&env);

    let result = client.try_mint(&holder, &-1);
    assert_eq!(result, Err(Ok(TokenError::NegativeAmount)));

    client.mint(&holder, &10);
    let result = client.try_transfer(&holder, &Address::generate(&env), &-5);
    assert_eq!(result, Err(Ok(TokenError::NegativeAmount)));
}

#[test]
fn test_zero_amount_transfer() {
    let env = Env::default();
    env.mock_all_auths();

    let (_admin, client) = setup(&env);
    let holder = Address::generate(&env);
    let other = Address::generate(&env);

    client.mint(&holder, &0);
    assert_eq!(client.total_supply(), 0);

    client.transfer(&holder, &other, &0);
    assert_eq!(client.balance(&holder), 0);
    assert_eq!(client.balance(&other), 0);
}
