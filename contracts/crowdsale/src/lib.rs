#![no_std]

//! Time-boxed, whitelist-gated token sale.
//!
//! Each purchase mints principal plus a tiered bonus into this contract's
//! custody and records an [`Entitlement`] for the beneficiary: the principal
//! vests linearly, the bonus unlocks in two steps. After the closing time the
//! owner finalizes once, minting the team supply to the distribution contract.

mod config;
mod error;
mod events;
mod storage;

pub use config::{
    BonusTier, SaleConfig, SaleState, DEFAULT_MAX_MINT, DEFAULT_MIN_MINT, DEFAULT_RATE,
    DEFAULT_TEAM_SUPPLY, DEFAULT_TOKEN_CAP, MAX_RATE_DELTA_PERCENT,
};
pub use error::{Error, ErrorKind};

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};
use vesting_core::ledger::is_token_paused;
use vesting_core::math::{checked_add, percent_of};
use vesting_core::{AttachedBonus, BonusSchedule, Entitlement, Release, VestingSchedule};

use storage::{
    has_entitlement, has_owner, read_config, read_entitlement, read_owner, read_raised,
    read_rate, read_tokens_sold, write_config, write_entitlement, write_finalized, write_owner,
    write_raised, write_rate, write_tokens_sold, write_whitelisted,
};

#[contract]
pub struct Crowdsale;

fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
    caller.require_auth();
    let owner = read_owner(env)?;
    if *caller != owner {
        return Err(Error::NotOwner);
    }
    Ok(())
}

fn mint_to(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::StellarAssetClient::new(env, token);
    match client.try_mint(to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::MintingDisallowed),
    }
}

fn pay_out(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    match client.try_transfer(&env.current_contract_address(), to, &amount) {
        Ok(Ok(())) => Ok(()),
        Err(failure) if is_token_paused(&failure) => Err(Error::LedgerPaused),
        _ => Err(Error::InsufficientBalance),
    }
}

/// Tokens sold after adding `amount`, rejected past the sale cap.
fn checked_tokens_sold(env: &Env, config: &SaleConfig, amount: i128) -> Result<i128, Error> {
    let sold = checked_add(read_tokens_sold(env), amount)?;
    if sold > config.token_cap {
        return Err(Error::TokenCapExceeded);
    }
    Ok(sold)
}

fn new_entitlement(
    config: &SaleConfig,
    beneficiary: &Address,
    principal: i128,
    bonus: i128,
    now: u64,
) -> Result<Entitlement, Error> {
    let end = now
        .checked_add(config.vesting_duration)
        .ok_or(Error::InvalidRange)?;
    let schedule = VestingSchedule::new(
        beneficiary.clone(),
        principal,
        now,
        end,
        config.vesting_lock,
        false,
    )?;
    let bonus = if bonus > 0 {
        Some(BonusSchedule::new(bonus, now, &config.bonus_milestones)?)
    } else {
        None
    };
    Ok(Entitlement::new(schedule, bonus))
}

fn set_whitelisted(env: &Env, who: &Address, listed: bool) {
    write_whitelisted(env, who, listed);
    events::whitelist(env, who, listed);
}

#[contractimpl]
impl Crowdsale {
    pub fn initialize(env: Env, owner: Address, config: SaleConfig) -> Result<(), Error> {
        if has_owner(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();
        config.validate()?;

        write_owner(&env, &owner);
        write_rate(&env, config.initial_rate);
        write_raised(&env, 0);
        write_tokens_sold(&env, 0);
        write_config(&env, &config);

        events::initialized(&env, &owner, config.opening_time, config.closing_time);
        Ok(())
    }

    // Whitelist

    pub fn add_to_whitelist(env: Env, caller: Address, who: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        set_whitelisted(&env, &who, true);
        Ok(())
    }

    pub fn add_many_to_whitelist(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        for who in addresses.iter() {
            set_whitelisted(&env, &who, true);
        }
        Ok(())
    }

    pub fn remove_from_whitelist(env: Env, caller: Address, who: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        set_whitelisted(&env, &who, false);
        Ok(())
    }

    pub fn remove_many_from_whitelist(
        env: Env,
        caller: Address,
        addresses: Vec<Address>,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        for who in addresses.iter() {
            set_whitelisted(&env, &who, false);
        }
        Ok(())
    }

    pub fn is_whitelisted(env: Env, who: Address) -> bool {
        storage::is_whitelisted(&env, &who)
    }

    // Sale

    /// `purchaser` pays `contribution` in the payment token; `beneficiary` gets
    /// the vested tokens.
    pub fn buy_tokens(
        env: Env,
        purchaser: Address,
        beneficiary: Address,
        contribution: i128,
    ) -> Result<Release, Error> {
        purchaser.require_auth();
        let config = read_config(&env)?;
        let now = env.ledger().timestamp();

        if config.state_at(now, storage::is_finalized(&env)) != SaleState::Open {
            return Err(Error::NotOpen);
        }
        if contribution <= 0 {
            return Err(Error::InvalidAmount);
        }
        if !storage::is_whitelisted(&env, &beneficiary) {
            return Err(Error::NotWhitelisted);
        }
        if has_entitlement(&env, &beneficiary) {
            return Err(Error::AlreadyPurchased);
        }

        let rate = read_rate(&env)?;
        let principal = contribution.checked_mul(rate).ok_or(Error::MathOverflow)?;
        let bonus = percent_of(principal, config.bonus_percent_at(now))?;
        let minted = checked_add(principal, bonus)?;
        let sold = checked_tokens_sold(&env, &config, minted)?;
        let raised = checked_add(read_raised(&env), contribution)?;
        let entitlement = new_entitlement(&config, &beneficiary, principal, bonus, now)?;

        let payment = token::Client::new(&env, &config.payment_token);
        match payment.try_transfer(&purchaser, &config.wallet, &contribution) {
            Ok(Ok(())) => {}
            Err(failure) if is_token_paused(&failure) => return Err(Error::LedgerPaused),
            _ => return Err(Error::InsufficientBalance),
        }
        mint_to(&env, &config.token, &env.current_contract_address(), minted)?;

        write_entitlement(&env, &beneficiary, &entitlement);
        write_raised(&env, raised);
        write_tokens_sold(&env, sold);

        events::purchase(&env, &purchaser, &beneficiary, contribution, principal, bonus);
        Ok(Release { principal, bonus })
    }

    /// Records a sale settled outside the contract.
    pub fn mint_and_vest(
        env: Env,
        caller: Address,
        beneficiary: Address,
        principal: i128,
        bonus: i128,
    ) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let config = read_config(&env)?;
        let now = env.ledger().timestamp();

        if storage::is_finalized(&env) {
            return Err(Error::AlreadyFinalized);
        }
        if bonus < 0 {
            return Err(Error::InvalidAmount);
        }
        if principal < config.min_mint {
            return Err(Error::BelowMinimum);
        }
        if principal > config.max_mint {
            return Err(Error::AboveMaximum);
        }
        if has_entitlement(&env, &beneficiary) {
            return Err(Error::DuplicateSchedule);
        }

        let minted = checked_add(principal, bonus)?;
        let sold = checked_tokens_sold(&env, &config, minted)?;
        let entitlement = new_entitlement(&config, &beneficiary, principal, bonus, now)?;

        mint_to(&env, &config.token, &env.current_contract_address(), minted)?;

        write_entitlement(&env, &beneficiary, &entitlement);
        write_tokens_sold(&env, sold);

        events::mint_and_vest(&env, &beneficiary, principal, bonus);
        Ok(())
    }

    pub fn update_rate(env: Env, caller: Address, new_rate: i128) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        if new_rate <= 0 {
            return Err(Error::InvalidAmount);
        }

        let rate = read_rate(&env)?;
        let delta = new_rate.checked_sub(rate).ok_or(Error::MathOverflow)?;
        let scaled_delta = delta
            .checked_abs()
            .and_then(|d| d.checked_mul(100))
            .ok_or(Error::MathOverflow)?;
        let allowed = rate
            .checked_mul(MAX_RATE_DELTA_PERCENT)
            .ok_or(Error::MathOverflow)?;
        if scaled_delta > allowed {
            return Err(Error::RateDeltaExceeded);
        }

        write_rate(&env, new_rate);
        events::rate_updated(&env, rate, new_rate);
        Ok(())
    }

    pub fn finalize(env: Env, caller: Address) -> Result<(), Error> {
        require_owner(&env, &caller)?;
        let config = read_config(&env)?;

        if storage::is_finalized(&env) {
            return Err(Error::AlreadyFinalized);
        }
        if env.ledger().timestamp() < config.closing_time {
            return Err(Error::NotClosed);
        }

        mint_to(&env, &config.token, &config.distribution, config.team_supply)?;
        write_finalized(&env);

        events::finalized(&env, &config.distribution, config.team_supply);
        Ok(())
    }

    /// Pays out whatever principal and bonus are releasable now. Zero is not an error.
    pub fn release(env: Env, caller: Address, beneficiary: Address) -> Result<Release, Error> {
        caller.require_auth();
        if caller != beneficiary && caller != read_owner(&env)? {
            return Err(Error::NotAuthorized);
        }

        let config = read_config(&env)?;
        let mut entitlement = read_entitlement(&env, &beneficiary)?;
        let release = entitlement.release(env.ledger().timestamp())?;

        if !release.is_empty() {
            pay_out(&env, &config.token, &beneficiary, release.total()?)?;
            write_entitlement(&env, &beneficiary, &entitlement);
            events::release(&env, &beneficiary, &release);
        }
        Ok(release)
    }

    // Queries

    pub fn sale_state(env: Env) -> Result<SaleState, Error> {
        let config = read_config(&env)?;
        Ok(config.state_at(env.ledger().timestamp(), storage::is_finalized(&env)))
    }

    pub fn has_closed(env: Env) -> Result<bool, Error> {
        let config = read_config(&env)?;
        Ok(env.ledger().timestamp() >= config.closing_time)
    }

    pub fn rate(env: Env) -> Result<i128, Error> {
        read_rate(&env)
    }

    pub fn raised(env: Env) -> i128 {
        read_raised(&env)
    }

    pub fn tokens_sold(env: Env) -> i128 {
        read_tokens_sold(&env)
    }

    pub fn cap_reached(env: Env) -> Result<bool, Error> {
        let config = read_config(&env)?;
        Ok(read_tokens_sold(&env) >= config.token_cap)
    }

    pub fn is_finalized(env: Env) -> bool {
        storage::is_finalized(&env)
    }

    pub fn config(env: Env) -> Result<SaleConfig, Error> {
        read_config(&env)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        read_owner(&env)
    }

    pub fn get_vesting_schedule(env: Env, beneficiary: Address) -> Result<VestingSchedule, Error> {
        Ok(read_entitlement(&env, &beneficiary)?.schedule)
    }

    pub fn get_bonus_schedule(
        env: Env,
        beneficiary: Address,
    ) -> Result<AttachedBonus, Error> {
        Ok(read_entitlement(&env, &beneficiary)?.bonus)
    }

    pub fn releasable_amount(env: Env, beneficiary: Address) -> Result<Release, Error> {
        let entitlement = read_entitlement(&env, &beneficiary)?;
        Ok(entitlement.releasable_amount(env.ledger().timestamp())?)
    }
}
