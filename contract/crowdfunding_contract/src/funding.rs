use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::storage_types::{CrowdfundError, DataKey, BASIS_POINTS, PLATFORM_FEE_BPS};

/// The payment token all contributions and payouts are denominated in.
pub fn payment_token(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .unwrap_or_else(|| panic_with_error!(env, CrowdfundError::NotInitialized))
}

/// Pull an investor's contribution into the contract. The transfer runs
/// under the investor's authorization; its failure aborts the call.
pub fn collect_contribution(env: &Env, from: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &payment_token(env));
    token_client.transfer(from, &env.current_contract_address(), &amount);
}

/// Pay out raised funds from the contract. Returns Err instead of trapping
/// so the caller can surface owner and treasury failures distinctly.
pub fn payout(env: &Env, to: &Address, amount: i128) -> Result<(), ()> {
    let token_client = token::TokenClient::new(env, &payment_token(env));
    match token_client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(()),
    }
}

/// Split a withdrawal into the owner's share and the platform fee.
/// The fee is floor(amount * 3 / 100); the two parts always sum to `amount`.
pub fn split_payout(env: &Env, amount: i128) -> (i128, i128) {
    let treasury_amount = amount
        .checked_mul(PLATFORM_FEE_BPS as i128)
        .map(|v| v / BASIS_POINTS as i128)
        .unwrap_or_else(|| panic_with_error!(env, CrowdfundError::MathOverflow));
    (amount - treasury_amount, treasury_amount)
}
