#![no_std]


pub mod claim_asset;

mod events;
mod funding;
mod storage_types;

use claim_asset::ClaimAssetClient;
use storage_types::{
    Campaign, CampaignId, CrowdfundError, DataKey, PersistentKey, MIN_CONTRIBUTION,
    PLATFORM_FEE_BPS, TTL_INSTANCE, TTL_PERSISTENT,
};

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Vec};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Initialize the registry with the administrative address and the
    /// payment token all contributions are denominated in.
    pub fn initialize(env: Env, admin: Address, payment_token: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, CrowdfundError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::PaymentToken, &payment_token);
        env.storage().instance().set(&DataKey::NextCampaignId, &0u64);

        extend_instance(&env);
    }

    /// Register a new campaign and bind its claim-asset ledger.
    ///
    /// The ledger at `claim_token` must be freshly constructed with this
    /// contract as its mint authority and the campaign's (name, symbol).
    /// The full claim supply is minted to the creator, and the circulation
    /// share (total_supply / equity) moves into the contract-held sale pool.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        name: String,
        symbol: String,
        description: String,
        team: String,
        target: i128,
        total_supply: i128,
        equity: u32,
        deadline: u64,
        token_price: i128,
        image: String,
        claim_token: Address,
    ) -> CampaignId {
        creator.require_auth();

        if name.len() == 0 {
            panic_with_error!(&env, CrowdfundError::NameRequired);
        }
        if symbol.len() == 0 {
            panic_with_error!(&env, CrowdfundError::SymbolRequired);
        }
        if target <= 0 {
            panic_with_error!(&env, CrowdfundError::InvalidTarget);
        }
        if token_price <= 0 {
            panic_with_error!(&env, CrowdfundError::InvalidTokenPrice);
        }
        if equity == 0 {
            panic_with_error!(&env, CrowdfundError::InvalidEquity);
        }
        if total_supply < 0 {
            panic_with_error!(&env, CrowdfundError::InvalidSupply);
        }
        if deadline <= env.ledger().timestamp() {
            panic_with_error!(&env, CrowdfundError::DeadlineNotFuture);
        }

        let claim = ClaimAssetClient::new(&env, &claim_token);
        // A nonzero supply means the ledger was pre-minted or is already
        // bound to a campaign; binding mints, so this doubles as a reuse guard.
        if claim.total_supply() != 0 {
            panic_with_error!(&env, CrowdfundError::LedgerNotFresh);
        }
        if claim.name() != name || claim.symbol() != symbol {
            panic_with_error!(&env, CrowdfundError::LedgerMetadataMismatch);
        }

        let circulation_supply = total_supply / equity as i128;

        claim.mint(&creator, &total_supply);
        if circulation_supply > 0 {
            claim.transfer(&creator, &env.current_contract_address(), &circulation_supply);
        }

        let id = read_next_id(&env);
        let campaign = Campaign {
            id,
            owner: creator.clone(),
            name: name.clone(),
            symbol: symbol.clone(),
            description,
            team,
            image,
            target,
            raised_amount: 0,
            equity,
            circulation_supply,
            token_price,
            deadline,
            is_funded: false,
            is_closed: false,
            token: claim_token,
            withdrawn: false,
        };

        env.storage().persistent().set(&PersistentKey::Campaign(id), &campaign);

        let owner_key = PersistentKey::OwnerCampaigns(creator.clone());
        let mut owned: Vec<CampaignId> = env
            .storage()
            .persistent()
            .get(&owner_key)
            .unwrap_or_else(|| Vec::new(&env));
        owned.push_back(id);
        env.storage().persistent().set(&owner_key, &owned);

        env.storage().instance().set(&DataKey::NextCampaignId, &(id + 1));

        extend_persistent(&env, &PersistentKey::Campaign(id));
        extend_persistent(&env, &owner_key);
        extend_instance(&env);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                id,
                owner: creator,
                name,
                symbol,
                target,
                deadline,
            },
        );

        id
    }

    /// Contribute `amount` of the payment token to an open campaign.
    ///
    /// The contribution is pulled from the investor inside this call; in
    /// exchange, amount / token_price claim tokens leave the sale pool.
    /// Crossing the target closes the campaign; funds stay escrowed until
    /// the owner withdraws.
    pub fn invest(env: Env, investor: Address, campaign_id: CampaignId, amount: i128) {
        investor.require_auth();

        let mut campaign = read_campaign(&env, campaign_id);

        if campaign.is_closed {
            panic_with_error!(&env, CrowdfundError::CampaignClosed);
        }
        if env.ledger().timestamp() >= campaign.deadline {
            panic_with_error!(&env, CrowdfundError::CampaignExpired);
        }
        if amount <= MIN_CONTRIBUTION {
            panic_with_error!(&env, CrowdfundError::ContributionTooSmall);
        }

        // amount below token_price buys zero claim tokens; the contribution
        // still counts toward the target.
        let tokens_out = amount / campaign.token_price;

        let claim = ClaimAssetClient::new(&env, &campaign.token);
        let pool = claim.balance(&env.current_contract_address());
        if tokens_out > pool {
            panic_with_error!(&env, CrowdfundError::ClaimPoolExhausted);
        }

        funding::collect_contribution(&env, &investor, amount);

        campaign.raised_amount = campaign
            .raised_amount
            .checked_add(amount)
            .unwrap_or_else(|| panic_with_error!(&env, CrowdfundError::MathOverflow));

        let crossed_target = campaign.raised_amount >= campaign.target;
        if crossed_target {
            campaign.is_closed = true;
            campaign.is_funded = true;
        }

        // Closure committed before the claim tokens leave the pool.
        env.storage()
            .persistent()
            .set(&PersistentKey::Campaign(campaign_id), &campaign);
        extend_persistent(&env, &PersistentKey::Campaign(campaign_id));

        if tokens_out > 0 {
            claim.transfer(&env.current_contract_address(), &investor, &tokens_out);
        }

        events::emit_campaign_funded(
            &env,
            events::CampaignFundedEvent {
                campaign_id,
                investor,
                amount,
            },
        );

        if crossed_target {
            events::emit_campaign_closed(&env, events::CampaignClosedEvent { campaign_id });
        }
    }

    /// Pay out a funded campaign: 97% to the owner, 3% to the treasury.
    ///
    /// Double-gated: the caller must be the registry admin and the
    /// campaign owner. Succeeds at most once per campaign.
    pub fn withdraw(env: Env, caller: Address, campaign_id: CampaignId, treasury: Address) {
        caller.require_auth();

        let admin = read_admin(&env);
        if caller != admin {
            panic_with_error!(&env, CrowdfundError::NotAuthorized);
        }

        let mut campaign = read_campaign(&env, campaign_id);
        if caller != campaign.owner {
            panic_with_error!(&env, CrowdfundError::NotCampaignOwner);
        }
        if campaign.withdrawn {
            panic_with_error!(&env, CrowdfundError::AlreadyWithdrawn);
        }
        if campaign.raised_amount < campaign.target {
            panic_with_error!(&env, CrowdfundError::TargetNotReached);
        }

        let amount = campaign.raised_amount;
        let (owner_amount, treasury_amount) = funding::split_payout(&env, amount);

        // Spent state is committed before any funds move; a failed payout
        // traps and reverts the flags along with everything else.
        campaign.raised_amount = 0;
        campaign.withdrawn = true;
        env.storage()
            .persistent()
            .set(&PersistentKey::Campaign(campaign_id), &campaign);
        extend_persistent(&env, &PersistentKey::Campaign(campaign_id));

        if funding::payout(&env, &campaign.owner, owner_amount).is_err() {
            panic_with_error!(&env, CrowdfundError::OwnerPayoutFailed);
        }
        if funding::payout(&env, &treasury, treasury_amount).is_err() {
            panic_with_error!(&env, CrowdfundError::TreasuryPayoutFailed);
        }

        events::emit_campaign_withdrawn(
            &env,
            events::CampaignWithdrawnEvent {
                campaign_id,
                owner_amount,
                treasury_amount,
            },
        );
    }

    /// View functions
    pub fn get_campaign(env: Env, campaign_id: CampaignId) -> Option<Campaign> {
        env.storage().persistent().get(&PersistentKey::Campaign(campaign_id))
    }

    pub fn get_campaigns_by_owner(env: Env, owner: Address) -> Vec<CampaignId> {
        env.storage()
            .persistent()
            .get(&PersistentKey::OwnerCampaigns(owner))
            .unwrap_or_else(|| Vec::new(&env))
    }

    pub fn get_campaign_count(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::NextCampaignId).unwrap_or(0)
    }

    pub fn get_admin(env: Env) -> Address {
        read_admin(&env)
    }

    pub fn get_payment_token(env: Env) -> Address {
        funding::payment_token(&env)
    }

    pub fn get_platform_fee_bps(_env: Env) -> u32 {
        PLATFORM_FEE_BPS
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn read_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(env, CrowdfundError::NotInitialized))
}

fn read_next_id(env: &Env) -> CampaignId {
    env.storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or_else(|| panic_with_error!(env, CrowdfundError::NotInitialized))
}

fn read_campaign(env: &Env, campaign_id: CampaignId) -> Campaign {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .unwrap_or_else(|| panic_with_error!(env, CrowdfundError::CampaignNotFound))
}
