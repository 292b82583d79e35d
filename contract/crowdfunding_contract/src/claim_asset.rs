use soroban_sdk::{contractclient, Address, Env, String};

/// Interface of a campaign's claim-asset ledger.
///
/// One ledger instance exists per campaign, constructed with the registry
/// as its mint authority. The registry drives it exclusively through this
/// client; the ledger's internal balance accounting is its own business.
#[contractclient(name = "ClaimAssetClient")]
pub trait ClaimAssetLedger {
    /// Mint `amount` claim units to `to`. Restricted to the ledger's admin.
    fn mint(env: Env, to: Address, amount: i128);

    /// Move `amount` claim units from `from` to `to`. Fails when `from`
    /// holds less than `amount`.
    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn balance(env: Env, id: Address) -> i128;

    fn total_supply(env: Env) -> i128;

    fn name(env: Env) -> String;

    fn symbol(env: Env) -> String;
}
