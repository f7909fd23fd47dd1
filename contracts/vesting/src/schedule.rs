use soroban_sdk::{contracttype, Address};

use crate::error::VestingError;
use crate::math::{checked_add, checked_sub, mul_div_floor};

/// Linear release of a principal amount over `[start_timestamp, end_timestamp)`.
///
/// `amount_claimed + balance == initial_amount` holds after every mutation.
/// Revocation corrects `initial_amount` down to what was claimed and keeps the
/// forfeited remainder in `amount_revoked`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct VestingSchedule {
    pub beneficiary: Address,
    pub start_timestamp: u64,
    pub end_timestamp: u64,
    /// Seconds after `start_timestamp` before anything can be claimed.
    pub lock_period: u64,
    pub initial_amount: i128,
    pub amount_claimed: i128,
    pub balance: i128,
    pub amount_revoked: i128,
    pub revocable: bool,
    pub revoked: bool,
}

/// Outcome of revoking a schedule: what was paid out first, what was taken back.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Settlement {
    pub settled: i128,
    pub reclaimed: i128,
}

impl VestingSchedule {
    pub fn new(
        beneficiary: Address,
        initial_amount: i128,
        start_timestamp: u64,
        end_timestamp: u64,
        lock_period: u64,
        revocable: bool,
    ) -> Result<Self, VestingError> {
        if initial_amount <= 0 {
            return Err(VestingError::InvalidAmount);
        }
        if end_timestamp <= start_timestamp {
            return Err(VestingError::InvalidRange);
        }
        if lock_period > end_timestamp - start_timestamp {
            return Err(VestingError::InvalidRange);
        }

        Ok(Self {
            beneficiary,
            start_timestamp,
            end_timestamp,
            lock_period,
            initial_amount,
            amount_claimed: 0,
            balance: initial_amount,
            amount_revoked: 0,
            revocable,
            revoked: false,
        })
    }

    /// First timestamp at which a claim is permitted.
    pub fn unlocks_at(&self) -> u64 {
        self.start_timestamp.saturating_add(self.lock_period)
    }

    /// Time-proportional share of `initial_amount`, ignoring the lock.
    pub fn vested_amount(&self, now: u64) -> Result<i128, VestingError> {
        if now <= self.start_timestamp {
            return Ok(0);
        }
        if now >= self.end_timestamp {
            return Ok(self.initial_amount);
        }

        let elapsed = i128::from(now - self.start_timestamp);
        let duration = i128::from(self.end_timestamp - self.start_timestamp);
        mul_div_floor(self.initial_amount, elapsed, duration)
    }

    pub fn releasable_amount(&self, now: u64) -> Result<i128, VestingError> {
        if self.revoked || now < self.unlocks_at() {
            return Ok(0);
        }
        if now >= self.end_timestamp {
            return Ok(self.balance);
        }

        let vested = self.vested_amount(now)?;
        let releasable = checked_sub(vested, self.amount_claimed)?;
        Ok(releasable.max(0))
    }

    /// Claims whatever is releasable at `now`. Zero is a valid outcome.
    pub fn release(&mut self, now: u64) -> Result<i128, VestingError> {
        if self.revoked {
            return Err(VestingError::Revoked);
        }
        let amount = self.releasable_amount(now)?;
        self.claim(amount)?;
        Ok(amount)
    }

    /// Claims the full remaining balance regardless of time.
    pub fn settle_in_full(&mut self) -> Result<i128, VestingError> {
        if self.revoked {
            return Err(VestingError::Revoked);
        }
        let amount = self.balance;
        self.claim(amount)?;
        Ok(amount)
    }

    /// Pays out what is releasable at `now`, then forfeits the rest.
    pub fn revoke(&mut self, now: u64) -> Result<Settlement, VestingError> {
        if !self.revocable {
            return Err(VestingError::NotRevocable);
        }
        if self.revoked {
            return Err(VestingError::AlreadyRevoked);
        }

        let settled = self.releasable_amount(now)?;
        self.claim(settled)?;

        let reclaimed = self.balance;
        self.initial_amount = self.amount_claimed;
        self.amount_revoked = checked_add(self.amount_revoked, reclaimed)?;
        self.balance = 0;
        self.revoked = true;

        Ok(Settlement { settled, reclaimed })
    }

    /// Replaces `initial_amount`, returning the signed difference.
    pub fn correct_amount(&mut self, new_initial_amount: i128) -> Result<i128, VestingError> {
        if self.revoked {
            return Err(VestingError::Revoked);
        }
        if new_initial_amount <= 0 || new_initial_amount < self.amount_claimed {
            return Err(VestingError::InvalidAmount);
        }

        let delta = checked_sub(new_initial_amount, self.initial_amount)?;
        self.initial_amount = new_initial_amount;
        self.balance = checked_sub(new_initial_amount, self.amount_claimed)?;
        Ok(delta)
    }

    pub fn is_fully_released(&self) -> bool {
        self.balance == 0
    }

    pub fn is_consistent(&self) -> bool {
        self.amount_claimed >= 0
            && self.balance >= 0
            && self.amount_claimed.checked_add(self.balance) == Some(self.initial_amount)
    }

    fn claim(&mut self, amount: i128) -> Result<(), VestingError> {
        if amount < 0 || amount > self.balance {
            return Err(VestingError::InvalidAmount);
        }
        self.amount_claimed = checked_add(self.amount_claimed, amount)?;
        self.balance = checked_sub(self.balance, amount)?;
        Ok(())
    }
}
