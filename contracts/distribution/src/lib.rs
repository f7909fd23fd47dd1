#![no_std]

//! Team and investor allocations drawn from six capped categories.
//!
//! The contract holds the team supply minted at sale finalization. Each
//! beneficiary gets at most one allocation; linear categories vest from the
//! allocation time, the rest are paid out in full when allocated.

mod category;
mod error;
mod events;
mod storage;

pub use category::{AllocationCategory, ReleaseTerms, RevokeCredit};
pub use error::{Error, ErrorKind};
pub use storage::{Allocation, PoolState};

use soroban_sdk::{contract, contractimpl, token, Address, Env};
use vesting_core::ledger::is_token_paused;
use vesting_core::math::{checked_add, checked_sub};
use vesting_core::{
    AttachedBonus, BonusMilestones, BonusSchedule, Entitlement, Release, Revocation,
    VestingSchedule,
};

use storage::{
    has_allocation, has_owner, read_allocation, read_bonus_milestones, read_grand_total,
    read_owner, read_pool, read_revoke_credit, read_token, write_allocation,
    write_bonus_milestones, write_grand_total, write_owner, write_pool, write_revoke_credit,
    write_token,
};

#[contract]
pub struct Distribution;

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = read_owner(env)?;
    if *caller != owner {
        return Err(Error::NotOwner);
    }
    Ok(())
}

fn pay_out(env: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let token = read_token(env)?;
    let client = token::Client::new(env, &token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        Err(failure) if is_token_paused(&failure) => Err(Error::LedgerPaused),
        _ => Err(Error::InsufficientBalance),
    }
}

fn new_schedule(
    beneficiary: &Address,
    amount: i128,
    terms: ReleaseTerms,
    now: u64,
) -> Result<VestingSchedule, Error> {
    // Paid-at-distribution grants get a one-second window starting now.
    let (duration, lock) = match terms {
        ReleaseTerms::Linear { duration, lock } => (duration, lock),
        ReleaseTerms::AtDistribution => (1, 0),
    };
    let end = now.checked_add(duration).ok_or(Error::InvalidRange)?;
    Ok(VestingSchedule::new(
        beneficiary.clone(),
        amount,
        now,
        end,
        lock,
        terms.is_revocable(),
    )?)
}

#[contractimpl]
impl Distribution {
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        bonus_milestones: BonusMilestones,
        revoke_credit: RevokeCredit,
    ) -> Result<(), Error> {
        if has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        bonus_milestones.validate()?;

        write_owner(&env, &owner);
        write_token(&env, &token);
        write_bonus_milestones(&env, &bonus_milestones);
        write_revoke_credit(&env, &revoke_credit);
        write_grand_total(&env, 0);
        for category in AllocationCategory::ALL {
            write_pool(&env, category, &PoolState::with_cap(category.initial_cap()));
        }

        events::initialized(&env, &owner, &token);
        Ok(())
    }

    /// Grants `amount` from `category`. Returns what was paid out immediately.
    pub fn set_allocation(
        env: Env,
        caller: Address,
        beneficiary: Address,
        amount: i128,
        category: AllocationCategory,
    ) -> Result<Release, Error> {
        require_owner(&env, &caller)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if has_allocation(&env, &beneficiary) {
            return Err(Error::DuplicateAllocation);
        }

        let mut pool = read_pool(&env, category)?;
        pool.draw(amount)?;
        let grand_total = checked_add(read_grand_total(&env), amount)?;

        let terms = category.release_terms();
        let schedule = new_schedule(&beneficiary, amount, terms, env.ledger().timestamp())?;
        let mut entitlement = Entitlement::new(schedule, None);
        let paid = match terms {
            ReleaseTerms::AtDistribution => entitlement.settle_in_full()?,
            ReleaseTerms::Linear { .. } => Release::default(),
        };

        if !paid.is_empty() {
            pay_out(&env, &beneficiary, paid.total()?)?;
        }

        write_pool(&env, category, &pool);
        write_grand_total(&env, grand_total);
        write_allocation(
            &env,
            &beneficiary,
            &Allocation {
                category,
                entitlement,
            },
        );

        events::allocated(&env, &beneficiary, category, amount);
        Ok(paid)
    }

    /// Corrects the principal and bonus of an existing allocation. The
    /// difference is drawn from, or returned to, the allocation's category.
    pub fn update_allocation(
        env: Env,
        caller: Address,
        beneficiary: Address,
        new_initial_amount: i128,
        new_bonus: i128,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        if new_bonus < 0 {
            return Err(Error::InvalidAmount);
        }

        let mut allocation = read_allocation(&env, &beneficiary)?;
        if allocation.entitlement.is_revoked() {
            return Err(Error::Revoked);
        }
        let now = env.ledger().timestamp();

        let principal_delta = allocation
            .entitlement
            .schedule
            .correct_amount(new_initial_amount)?;
        let bonus_delta = match allocation.entitlement.bonus {
            AttachedBonus::Scheduled(ref mut bonus) => bonus.correct_amount(new_bonus)?,
            AttachedBonus::None if new_bonus > 0 => {
                let milestones = read_bonus_milestones(&env)?;
                let bonus = BonusSchedule::new(new_bonus, now, &milestones)?;
                allocation.entitlement.bonus = AttachedBonus::Scheduled(bonus);
                new_bonus
            }
            AttachedBonus::None => 0,
        };

        let delta = checked_add(principal_delta, bonus_delta)?;
        let mut pool = read_pool(&env, allocation.category)?;
        if delta > 0 {
            pool.draw(delta)?;
        } else if delta < 0 {
            pool.give_back(delta.checked_neg().ok_or(Error::MathOverflow)?)?;
        }
        let grand_total = checked_add(read_grand_total(&env), delta)?;

        if allocation.category.release_terms() == ReleaseTerms::AtDistribution {
            let paid = allocation.entitlement.schedule.settle_in_full()?;
            if paid > 0 {
                pay_out(&env, &beneficiary, paid)?;
            }
        }

        write_pool(&env, allocation.category, &pool);
        write_grand_total(&env, grand_total);
        write_allocation(&env, &beneficiary, &allocation);

        events::updated(&env, &beneficiary, new_initial_amount, new_bonus);
        Ok(())
    }

    /// Pays out what has vested, then credits the remainder to the pool picked
    /// by the current [`RevokeCredit`].
    pub fn revoke_allocation(
        env: Env,
        caller: Address,
        beneficiary: Address,
    ) -> Result<Revocation, Error> {
        require_owner(&env, &caller)?;
        let mut allocation = read_allocation(&env, &beneficiary)?;
        let revocation = allocation.entitlement.revoke(env.ledger().timestamp())?;
        let reclaimed = revocation.reclaimed;

        let origin = allocation.category;
        let target = read_revoke_credit(&env).target(origin);
        let mut origin_pool = read_pool(&env, origin)?;
        origin_pool.reclaim(reclaimed)?;
        if target == origin {
            origin_pool.credit(reclaimed)?;
            write_pool(&env, origin, &origin_pool);
        } else {
            let mut target_pool = read_pool(&env, target)?;
            target_pool.credit(reclaimed)?;
            write_pool(&env, origin, &origin_pool);
            write_pool(&env, target, &target_pool);
        }
        let grand_total = checked_sub(read_grand_total(&env), reclaimed)?;

        if !revocation.settled.is_empty() {
            pay_out(&env, &beneficiary, revocation.settled.total()?)?;
        }

        write_grand_total(&env, grand_total);
        write_allocation(&env, &beneficiary, &allocation);

        events::revoked(&env, &beneficiary, &revocation.settled, reclaimed, target);
        Ok(revocation)
    }

    pub fn release(env: Env, caller: Address, beneficiary: Address) -> Result<Release, Error> {
        caller.require_auth();
        if caller != beneficiary && caller != read_owner(&env)? {
            return Err(Error::NotAuthorized);
        }

        let mut allocation = read_allocation(&env, &beneficiary)?;
        let release = allocation.entitlement.release(env.ledger().timestamp())?;

        if !release.is_empty() {
            pay_out(&env, &beneficiary, release.total()?)?;
            write_allocation(&env, &beneficiary, &allocation);
            events::release(&env, &beneficiary, &release);
        }
        Ok(release)
    }

    pub fn set_revoke_credit(env: Env, caller: Address, credit: RevokeCredit) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        write_revoke_credit(&env, &credit);
        events::revoke_credit_set(&env, credit);
        Ok(())
    }

    // Queries

    pub fn available_supply(env: Env, category: AllocationCategory) -> Result<i128, Error> {
        Ok(read_pool(&env, category)?.available)
    }

    pub fn category_cap(_env: Env, category: AllocationCategory) -> i128 {
        category.initial_cap()
    }

    pub fn pool_state(env: Env, category: AllocationCategory) -> Result<PoolState, Error> {
        read_pool(&env, category)
    }

    pub fn grand_total_allocated(env: Env) -> i128 {
        read_grand_total(&env)
    }

    pub fn get_allocation(env: Env, beneficiary: Address) -> Result<Allocation, Error> {
        read_allocation(&env, &beneficiary)
    }

    pub fn releasable_amount(env: Env, beneficiary: Address) -> Result<Release, Error> {
        let allocation = read_allocation(&env, &beneficiary)?;
        Ok(allocation
            .entitlement
            .releasable_amount(env.ledger().timestamp())?)
    }

    pub fn revoke_credit(env: Env) -> RevokeCredit {
        read_revoke_credit(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        read_owner(&env)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        read_token(&env)
    }
}
