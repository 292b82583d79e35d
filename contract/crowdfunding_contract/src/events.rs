use soroban_sdk::{contracttype, Address, String, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub id: CampaignId,
    pub owner: Address,
    pub name: String,
    pub symbol: String,
    pub target: i128,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignFundedEvent {
    pub campaign_id: CampaignId,
    pub investor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignClosedEvent {
    pub campaign_id: CampaignId,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub owner_amount: i128,
    pub treasury_amount: i128,
}

pub fn emit_campaign_created(env: &soroban_sdk::Env, event: CampaignCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_campaign_funded(env: &soroban_sdk::Env, event: CampaignFundedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_funded"),),
        event,
    );
}

pub fn emit_campaign_closed(env: &soroban_sdk::Env, event: CampaignClosedEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_closed"),),
        event,
    );
}

pub fn emit_campaign_withdrawn(env: &soroban_sdk::Env, event: CampaignWithdrawnEvent) {
    env.events().publish(
        (Symbol::new(env, "campaign_withdrawn"),),
        event,
    );
}
