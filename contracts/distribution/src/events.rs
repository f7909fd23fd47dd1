use soroban_sdk::{symbol_short, Address, Env, Symbol};
use vesting_core::Release;

use crate::category::{AllocationCategory, RevokeCredit};

pub const EVENT_INIT: Symbol = symbol_short!("init");
pub const EVENT_ALLOCATED: Symbol = symbol_short!("alloc");
pub const EVENT_UPDATED: Symbol = symbol_short!("alloc_upd");
pub const EVENT_REVOKED: Symbol = symbol_short!("revoke");
pub const EVENT_RELEASE: Symbol = symbol_short!("release");
pub const EVENT_CREDIT_SET: Symbol = symbol_short!("credit");

pub fn initialized(env: &Env, owner: &Address, token: &Address) {
    env.events()
        .publish((EVENT_INIT, owner.clone()), token.clone());
}

pub fn allocated(env: &Env, beneficiary: &Address, category: AllocationCategory, amount: i128) {
    env.events()
        .publish((EVENT_ALLOCATED, beneficiary.clone()), (category, amount));
}

pub fn updated(env: &Env, beneficiary: &Address, principal: i128, bonus: i128) {
    env.events()
        .publish((EVENT_UPDATED, beneficiary.clone()), (principal, bonus));
}

pub fn revoked(
    env: &Env,
    beneficiary: &Address,
    settled: &Release,
    reclaimed: i128,
    credited_to: AllocationCategory,
) {
    env.events().publish(
        (EVENT_REVOKED, beneficiary.clone()),
        (settled.principal, settled.bonus, reclaimed, credited_to),
    );
}

pub fn release(env: &Env, beneficiary: &Address, release: &Release) {
    env.events().publish(
        (EVENT_RELEASE, beneficiary.clone()),
        (release.principal, release.bonus),
    );
}

pub fn revoke_credit_set(env: &Env, credit: RevokeCredit) {
    env.events().publish((EVENT_CREDIT_SET,), credit);
}
