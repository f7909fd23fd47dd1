use soroban_sdk::{contracttype, Address, Env};
use vesting_core::Entitlement;

use crate::config::SaleConfig;
use crate::error::Error;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Config,
    Rate,
    Raised,
    TokensSold,
    Finalized,
    Whitelist(Address),
    Entitlement(Address),
}

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn read_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn write_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_config(env: &Env) -> Result<SaleConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn write_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn read_rate(env: &Env) -> Result<i128, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Rate)
        .ok_or(Error::NotInitialized)
}

pub fn write_rate(env: &Env, rate: i128) {
    env.storage().instance().set(&DataKey::Rate, &rate);
}

pub fn read_raised(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Raised).unwrap_or(0)
}

pub fn write_raised(env: &Env, raised: i128) {
    env.storage().instance().set(&DataKey::Raised, &raised);
}

pub fn read_tokens_sold(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TokensSold)
        .unwrap_or(0)
}

pub fn write_tokens_sold(env: &Env, sold: i128) {
    env.storage().instance().set(&DataKey::TokensSold, &sold);
}

pub fn is_finalized(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Finalized)
        .unwrap_or(false)
}

pub fn write_finalized(env: &Env) {
    env.storage().instance().set(&DataKey::Finalized, &true);
}

pub fn is_whitelisted(env: &Env, who: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Whitelist(who.clone()))
        .unwrap_or(false)
}

pub fn write_whitelisted(env: &Env, who: &Address, listed: bool) {
    let key = DataKey::Whitelist(who.clone());
    if listed {
        env.storage().persistent().set(&key, &true);
    } else {
        env.storage().persistent().remove(&key);
    }
}

pub fn has_entitlement(env: &Env, beneficiary: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Entitlement(beneficiary.clone()))
}

pub fn read_entitlement(env: &Env, beneficiary: &Address) -> Result<Entitlement, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Entitlement(beneficiary.clone()))
        .ok_or(Error::ScheduleNotFound)
}

pub fn write_entitlement(env: &Env, beneficiary: &Address, entitlement: &Entitlement) {
    env.storage()
        .persistent()
        .set(&DataKey::Entitlement(beneficiary.clone()), entitlement);
}
