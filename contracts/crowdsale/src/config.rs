use soroban_sdk::{contracttype, vec, Address, Env, Vec};
use vesting_core::{tokens, BonusMilestones, SECONDS_PER_DAY, SECONDS_PER_MONTH};

use crate::error::Error;

/// Tokens minted per base unit of contribution at deployment.
pub const DEFAULT_RATE: i128 = 1_000;
pub const DEFAULT_MIN_MINT: i128 = tokens(333_000);
pub const DEFAULT_MAX_MINT: i128 = tokens(13_500_000);
/// Ceiling on principal plus bonus minted by purchases and off-chain sales.
pub const DEFAULT_TOKEN_CAP: i128 = tokens(165_000_000);
/// Minted to the distribution contract on finalize.
pub const DEFAULT_TEAM_SUPPLY: i128 = tokens(135_000_000);
pub const DEFAULT_VESTING_MONTHS: u64 = 5;
/// Largest rate change accepted by one update, in percent of the current rate.
pub const MAX_RATE_DELTA_PERCENT: i128 = 10;

/// Bonus percent paid on purchases made before `ends_after` seconds of sale time.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BonusTier {
    pub ends_after: u64,
    pub percent: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleState {
    Pending,
    Open,
    Closed,
    Finalized,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SaleConfig {
    pub opening_time: u64,
    pub closing_time: u64,
    pub initial_rate: i128,
    /// Receives contributions.
    pub wallet: Address,
    pub token: Address,
    pub payment_token: Address,
    /// Receives the team supply on finalize.
    pub distribution: Address,
    /// Ascending by `ends_after`. Purchases after the last tier get no bonus.
    pub bonus_tiers: Vec<BonusTier>,
    pub vesting_duration: u64,
    pub vesting_lock: u64,
    pub bonus_milestones: BonusMilestones,
    pub min_mint: i128,
    pub max_mint: i128,
    pub token_cap: i128,
    pub team_supply: i128,
}

impl SaleConfig {
    pub fn standard(
        env: &Env,
        opening_time: u64,
        closing_time: u64,
        wallet: Address,
        token: Address,
        payment_token: Address,
        distribution: Address,
    ) -> Self {
        Self {
            opening_time,
            closing_time,
            initial_rate: DEFAULT_RATE,
            wallet,
            token,
            payment_token,
            distribution,
            bonus_tiers: vec![
                env,
                BonusTier {
                    ends_after: 2 * SECONDS_PER_DAY,
                    percent: 30,
                },
                BonusTier {
                    ends_after: 4 * SECONDS_PER_DAY,
                    percent: 20,
                },
                BonusTier {
                    ends_after: 6 * SECONDS_PER_DAY,
                    percent: 10,
                },
                BonusTier {
                    ends_after: 8 * SECONDS_PER_DAY,
                    percent: 5,
                },
            ],
            vesting_duration: DEFAULT_VESTING_MONTHS * SECONDS_PER_MONTH,
            vesting_lock: 0,
            bonus_milestones: BonusMilestones::standard(),
            min_mint: DEFAULT_MIN_MINT,
            max_mint: DEFAULT_MAX_MINT,
            token_cap: DEFAULT_TOKEN_CAP,
            team_supply: DEFAULT_TEAM_SUPPLY,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.opening_time >= self.closing_time || self.initial_rate <= 0 {
            return Err(Error::InvalidConfig);
        }
        if self.min_mint <= 0 || self.min_mint > self.max_mint {
            return Err(Error::InvalidConfig);
        }
        if self.token_cap <= 0 || self.team_supply <= 0 {
            return Err(Error::InvalidConfig);
        }
        if self.vesting_duration == 0 || self.vesting_lock > self.vesting_duration {
            return Err(Error::InvalidConfig);
        }
        self.bonus_milestones
            .validate()
            .map_err(|_| Error::InvalidConfig)?;

        let mut previous_end = 0u64;
        for tier in self.bonus_tiers.iter() {
            if tier.ends_after <= previous_end || tier.percent > 100 {
                return Err(Error::InvalidConfig);
            }
            previous_end = tier.ends_after;
        }
        Ok(())
    }

    pub fn state_at(&self, now: u64, finalized: bool) -> SaleState {
        if finalized {
            SaleState::Finalized
        } else if now < self.opening_time {
            SaleState::Pending
        } else if now < self.closing_time {
            SaleState::Open
        } else {
            SaleState::Closed
        }
    }

    /// Bonus percent for a purchase at `now`; zero outside every tier.
    pub fn bonus_percent_at(&self, now: u64) -> u32 {
        let elapsed = now.saturating_sub(self.opening_time);
        self.bonus_tiers
            .iter()
            .find(|tier| elapsed < tier.ends_after)
            .map(|tier| tier.percent)
            .unwrap_or(0)
    }
}
