use soroban_sdk::{symbol_short, Address, Env, Symbol};
use vesting_core::Release;

pub const EVENT_INIT: Symbol = symbol_short!("init");
pub const EVENT_PURCHASE: Symbol = symbol_short!("purchase");
pub const EVENT_MINT_VEST: Symbol = symbol_short!("mint_vest");
pub const EVENT_RELEASE: Symbol = symbol_short!("release");
pub const EVENT_RATE_UPDATED: Symbol = symbol_short!("rate_upd");
pub const EVENT_FINALIZED: Symbol = symbol_short!("finalized");
pub const EVENT_WL_ADD: Symbol = symbol_short!("wl_add");
pub const EVENT_WL_REM: Symbol = symbol_short!("wl_rem");

pub fn initialized(env: &Env, owner: &Address, opening_time: u64, closing_time: u64) {
    env.events()
        .publish((EVENT_INIT, owner.clone()), (opening_time, closing_time));
}

pub fn purchase(
    env: &Env,
    purchaser: &Address,
    beneficiary: &Address,
    contribution: i128,
    principal: i128,
    bonus: i128,
) {
    env.events().publish(
        (EVENT_PURCHASE, purchaser.clone(), beneficiary.clone()),
        (contribution, principal, bonus),
    );
}

pub fn mint_and_vest(env: &Env, beneficiary: &Address, principal: i128, bonus: i128) {
    env.events()
        .publish((EVENT_MINT_VEST, beneficiary.clone()), (principal, bonus));
}

pub fn release(env: &Env, beneficiary: &Address, release: &Release) {
    env.events().publish(
        (EVENT_RELEASE, beneficiary.clone()),
        (release.principal, release.bonus),
    );
}

pub fn rate_updated(env: &Env, old_rate: i128, new_rate: i128) {
    env.events()
        .publish((EVENT_RATE_UPDATED,), (old_rate, new_rate));
}

pub fn finalized(env: &Env, distribution: &Address, team_supply: i128) {
    env.events()
        .publish((EVENT_FINALIZED, distribution.clone()), team_supply);
}

pub fn whitelist(env: &Env, who: &Address, listed: bool) {
    let topic = if listed { EVENT_WL_ADD } else { EVENT_WL_REM };
    env.events().publish((topic, who.clone()), ());
}
