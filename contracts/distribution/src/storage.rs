use soroban_sdk::{contracttype, Address, Env};
use vesting_core::math::{checked_add, checked_sub};
use vesting_core::{BonusMilestones, Entitlement};

use crate::category::{AllocationCategory, RevokeCredit};
use crate::error::Error;

/// Per-category supply ledger.
///
/// `allocated + available == cap + credited - reclaimed` holds after every
/// entry point. `credited` counts revoked remainders received from any
/// category, `reclaimed` counts remainders taken back from this one.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct PoolState {
    pub available: i128,
    pub allocated: i128,
    pub credited: i128,
    pub reclaimed: i128,
}

impl PoolState {
    pub fn with_cap(cap: i128) -> Self {
        Self {
            available: cap,
            ..Self::default()
        }
    }

    /// Draws `amount` for a new or grown allocation.
    pub fn draw(&mut self, amount: i128) -> Result<(), Error> {
        if amount > self.available {
            return Err(Error::InsufficientSupply);
        }
        self.available = checked_sub(self.available, amount)?;
        self.allocated = checked_add(self.allocated, amount)?;
        Ok(())
    }

    /// Returns `amount` from a shrunk allocation.
    pub fn give_back(&mut self, amount: i128) -> Result<(), Error> {
        self.allocated = checked_sub(self.allocated, amount)?;
        self.available = checked_add(self.available, amount)?;
        Ok(())
    }

    pub fn reclaim(&mut self, amount: i128) -> Result<(), Error> {
        self.allocated = checked_sub(self.allocated, amount)?;
        self.reclaimed = checked_add(self.reclaimed, amount)?;
        Ok(())
    }

    pub fn credit(&mut self, amount: i128) -> Result<(), Error> {
        self.available = checked_add(self.available, amount)?;
        self.credited = checked_add(self.credited, amount)?;
        Ok(())
    }

    pub fn is_balanced(&self, cap: i128) -> bool {
        let held = self.allocated.checked_add(self.available);
        let expected = cap
            .checked_add(self.credited)
            .and_then(|v| v.checked_sub(self.reclaimed));
        held.is_some() && held == expected
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Allocation {
    pub category: AllocationCategory,
    pub entitlement: Entitlement,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    BonusMilestones,
    RevokeCredit,
    GrandTotal,
    Pool(AllocationCategory),
    Allocation(Address),
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

pub fn read_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(Error::NotInitialized)
}

pub fn write_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::Token, token);
}

pub fn read_bonus_milestones(env: &Env) -> Result<BonusMilestones, Error> {
    env.storage()
        .instance()
        .get(&DataKey::BonusMilestones)
        .ok_or(Error::NotInitialized)
}

pub fn write_bonus_milestones(env: &Env, milestones: &BonusMilestones) {
    env.storage()
        .instance()
        .set(&DataKey::BonusMilestones, milestones);
}

pub fn read_revoke_credit(env: &Env) -> RevokeCredit {
    env.storage()
        .instance()
        .get(&DataKey::RevokeCredit)
        .unwrap_or_default()
}

pub fn write_revoke_credit(env: &Env, credit: &RevokeCredit) {
    env.storage().instance().set(&DataKey::RevokeCredit, credit);
}

pub fn read_grand_total(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::GrandTotal)
        .unwrap_or(0)
}

pub fn write_grand_total(env: &Env, total: i128) {
    env.storage().instance().set(&DataKey::GrandTotal, &total);
}

pub fn read_pool(env: &Env, category: AllocationCategory) -> Result<PoolState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Pool(category))
        .ok_or(Error::NotInitialized)
}

pub fn write_pool(env: &Env, category: AllocationCategory, pool: &PoolState) {
    env.storage().instance().set(&DataKey::Pool(category), pool);
}

pub fn has_allocation(env: &Env, beneficiary: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Allocation(beneficiary.clone()))
}

pub fn read_allocation(env: &Env, beneficiary: &Address) -> Result<Allocation, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Allocation(beneficiary.clone()))
        .ok_or(Error::AllocationNotFound)
}

pub fn write_allocation(env: &Env, beneficiary: &Address, allocation: &Allocation) {
    env.storage()
        .persistent()
        .set(&DataKey::Allocation(beneficiary.clone()), allocation);
}
