#![no_std]

#[cfg(test)]
mod test;

mod storage_types;
use storage_types::{DataKey, PersistentKey, TokenError, TTL_INSTANCE, TTL_PERSISTENT};

use soroban_sdk::{
    contract, contractimpl, panic_with_error, symbol_short, Address, Env, String,
};

#[contract]
pub struct ClaimToken;

#[contractimpl]
impl ClaimToken {
    /// Deploy-time setup: metadata and the single mint authority.
    pub fn __constructor(env: Env, admin: Address, name: String, symbol: String) {
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Symbol, &symbol);
        env.storage().instance().set(&DataKey::TotalSupply, &0i128);

        extend_instance(&env);
    }

    /// Mint new claim units to `to`. Only the admin set at construction may mint.
    pub fn mint(env: Env, to: Address, amount: i128) {
        let admin: Address = env.storage().instance().get(&DataKey::Admin).unwrap();
        admin.require_auth();

        if amount < 0 {
            panic_with_error!(&env, TokenError::NegativeAmount);
        }

        let supply: i128 = env.storage().instance().get(&DataKey::TotalSupply).unwrap();
        let supply = supply
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, TokenError::MathOverflow));
        env.storage().instance().set(&DataKey::TotalSupply, &supply);

        receive_balance(&env, &to, amount);
        extend_instance(&env);

        env.events()
            .publish((symbol_short!("mint"), admin, to), amount);
    }

    /// Move `amount` claim units from `from` to `to`.
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();

        if amount < 0 {
            panic_with_error!(&env, TokenError::NegativeAmount);
        }

        spend_balance(&env, &from, amount);
        receive_balance(&env, &to, amount);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .persistent()
            .get(&PersistentKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage().instance().get(&DataKey::TotalSupply).unwrap()
    }

    pub fn name(env: Env) -> String {
        env.storage().instance().get(&DataKey::Name).unwrap()
    }

    pub fn symbol(env: Env) -> String {
        env.storage().instance().get(&DataKey::Symbol).unwrap()
    }

    pub fn admin(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Admin).unwrap()
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn spend_balance(env: &Env, id: &Address, amount: i128) {
    let key = PersistentKey::Balance(id.clone());
    let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    if balance < amount {
        panic_with_error!(env, TokenError::InsufficientBalance);
    }
    env.storage().persistent().set(&key, &(balance - amount));
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn receive_balance(env: &Env, id: &Address, amount: i128) {
    let key = PersistentKey::Balance(id.clone());
    let balance: i128 = env.storage().persistent().get(&key).unwrap_or(0);
    let balance = balance
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, TokenError::MathOverflow));
    env.storage().persistent().set(&key, &balance);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_PERSISTENT, TTL_PERSISTENT);
}
