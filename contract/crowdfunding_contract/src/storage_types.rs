use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    PaymentToken,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    OwnerCampaigns(Address),
}

pub type CampaignId = u64;

// A fundraising campaign and its claim-asset ledger handle
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    /// Creation-order index, assigned 0,1,2,… by the registry.
    pub id: CampaignId,
    /// Receives the raised funds on withdrawal. Immutable.
    pub owner: Address,
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub team: String,
    pub image: String,
    /// Funding goal in payment-token units.
    pub target: i128,
    /// Cumulative contributions; reset to zero by a successful withdraw.
    pub raised_amount: i128,
    /// Divisor applied to the claim supply to size the sale pool.
    pub equity: u32,
    /// total_supply / equity at creation (integer division).
    pub circulation_supply: i128,
    /// Payment-token units per claim token.
    pub token_price: i128,
    /// Ledger timestamp after which investments are rejected.
    pub deadline: u64,
    /// Target reached.
    pub is_funded: bool,
    /// No longer accepting investments.
    pub is_closed: bool,
    /// The campaign's claim-asset ledger. Set at creation, never reassigned.
    pub token: Address,
    /// One successful withdraw happened.
    pub withdrawn: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotAuthorized = 3,
    CampaignNotFound = 4,
    NameRequired = 5,
    SymbolRequired = 6,
    InvalidTarget = 7,
    InvalidTokenPrice = 8,
    InvalidEquity = 9,
    InvalidSupply = 10,
    DeadlineNotFuture = 11,
    LedgerNotFresh = 12,
    LedgerMetadataMismatch = 13,
    CampaignClosed = 14,
    CampaignExpired = 15,
    ContributionTooSmall = 16,
    ClaimPoolExhausted = 17,
    NotCampaignOwner = 18,
    AlreadyWithdrawn = 19,
    TargetNotReached = 20,
    OwnerPayoutFailed = 21,
    TreasuryPayoutFailed = 22,
    MathOverflow = 23,
}

// Constants
pub const BASIS_POINTS: u32 = 10000; // 100% in basis points
pub const PLATFORM_FEE_BPS: u32 = 300; // 3%
pub const MIN_CONTRIBUTION: i128 = 5; // contributions must strictly exceed this
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
