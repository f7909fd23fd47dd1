use soroban_sdk::contracttype;

use crate::error::VestingError;
use crate::math::{checked_add, checked_sub, percent_of, SECONDS_PER_MONTH};
use crate::schedule::Settlement;

/// Two-stage unlock cadence, as offsets from the purchase timestamp.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BonusMilestones {
    pub first_unlock: u64,
    pub final_unlock: u64,
    /// Share of the bonus released at `first_unlock`, in percent.
    pub first_percent: u32,
}

impl BonusMilestones {
    /// Half after six months, the rest after twelve.
    pub fn standard() -> Self {
        Self {
            first_unlock: 6 * SECONDS_PER_MONTH,
            final_unlock: 12 * SECONDS_PER_MONTH,
            first_percent: 50,
        }
    }

    pub fn validate(&self) -> Result<(), VestingError> {
        if self.first_unlock >= self.final_unlock {
            return Err(VestingError::InvalidMilestones);
        }
        if self.first_percent == 0 || self.first_percent >= 100 {
            return Err(VestingError::InvalidMilestones);
        }
        Ok(())
    }
}

/// Bonus released in discrete steps, independent of the principal's linear curve.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BonusSchedule {
    pub purchase_timestamp: u64,
    pub first_unlock_timestamp: u64,
    pub final_unlock_timestamp: u64,
    pub first_percent: u32,
    pub bonus_amount: i128,
    pub bonus_claimed: i128,
    pub bonus_balance: i128,
    pub revoked: bool,
}

impl BonusSchedule {
    pub fn new(
        bonus_amount: i128,
        purchase_timestamp: u64,
        milestones: &BonusMilestones,
    ) -> Result<Self, VestingError> {
        if bonus_amount < 0 {
            return Err(VestingError::InvalidAmount);
        }
        milestones.validate()?;

        let first_unlock_timestamp = purchase_timestamp
            .checked_add(milestones.first_unlock)
            .ok_or(VestingError::InvalidRange)?;
        let final_unlock_timestamp = purchase_timestamp
            .checked_add(milestones.final_unlock)
            .ok_or(VestingError::InvalidRange)?;

        Ok(Self {
            purchase_timestamp,
            first_unlock_timestamp,
            final_unlock_timestamp,
            first_percent: milestones.first_percent,
            bonus_amount,
            bonus_claimed: 0,
            bonus_balance: bonus_amount,
            revoked: false,
        })
    }

    /// Step function: nothing, then `first_percent`, then everything.
    pub fn unlocked_amount(&self, now: u64) -> Result<i128, VestingError> {
        if now < self.first_unlock_timestamp {
            Ok(0)
        } else if now < self.final_unlock_timestamp {
            percent_of(self.bonus_amount, self.first_percent)
        } else {
            Ok(self.bonus_amount)
        }
    }

    pub fn releasable_amount(&self, now: u64) -> Result<i128, VestingError> {
        if self.revoked {
            return Ok(0);
        }
        if now >= self.final_unlock_timestamp {
            return Ok(self.bonus_balance);
        }
        let unlocked = self.unlocked_amount(now)?;
        Ok(checked_sub(unlocked, self.bonus_claimed)?.max(0))
    }

    pub fn release(&mut self, now: u64) -> Result<i128, VestingError> {
        if self.revoked {
            return Err(VestingError::Revoked);
        }
        let amount = self.releasable_amount(now)?;
        self.claim(amount)?;
        Ok(amount)
    }

    pub fn settle_in_full(&mut self) -> Result<i128, VestingError> {
        if self.revoked {
            return Err(VestingError::Revoked);
        }
        let amount = self.bonus_balance;
        self.claim(amount)?;
        Ok(amount)
    }

    /// Revocability is decided by the principal schedule this bonus rides on.
    pub fn revoke(&mut self, now: u64) -> Result<Settlement, VestingError> {
        if self.revoked {
            return Err(VestingError::AlreadyRevoked);
        }
        let settled = self.releasable_amount(now)?;
        self.claim(settled)?;

        let reclaimed = self.bonus_balance;
        self.bonus_amount = self.bonus_claimed;
        self.bonus_balance = 0;
        self.revoked = true;

        Ok(Settlement { settled, reclaimed })
    }

    pub fn correct_amount(&mut self, new_bonus_amount: i128) -> Result<i128, VestingError> {
        if self.revoked {
            return Err(VestingError::Revoked);
        }
        if new_bonus_amount < self.bonus_claimed {
            return Err(VestingError::InvalidAmount);
        }
        let delta = checked_sub(new_bonus_amount, self.bonus_amount)?;
        self.bonus_amount = new_bonus_amount;
        self.bonus_balance = checked_sub(new_bonus_amount, self.bonus_claimed)?;
        Ok(delta)
    }

    pub fn is_consistent(&self) -> bool {
        self.bonus_claimed >= 0
            && self.bonus_balance >= 0
            && self.bonus_claimed.checked_add(self.bonus_balance) == Some(self.bonus_amount)
    }

    fn claim(&mut self, amount: i128) -> Result<(), VestingError> {
        if amount < 0 || amount > self.bonus_balance {
            return Err(VestingError::InvalidAmount);
        }
        self.bonus_claimed = checked_add(self.bonus_claimed, amount)?;
        self.bonus_balance = checked_sub(self.bonus_balance, amount)?;
        Ok(())
    }
}

/// The bonus riding on a principal schedule, if the grant earned one.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum AttachedBonus {
    None,
    Scheduled(BonusSchedule),
}

impl AttachedBonus {
    pub fn as_ref(&self) -> Option<&BonusSchedule> {
        match self {
            AttachedBonus::Scheduled(bonus) => Some(bonus),
            AttachedBonus::None => None,
        }
    }

    pub fn as_mut(&mut self) -> Option<&mut BonusSchedule> {
        match self {
            AttachedBonus::Scheduled(bonus) => Some(bonus),
            AttachedBonus::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, AttachedBonus::None)
    }
}

impl From<Option<BonusSchedule>> for AttachedBonus {
    fn from(bonus: Option<BonusSchedule>) -> Self {
        match bonus {
            Some(bonus) => AttachedBonus::Scheduled(bonus),
            None => AttachedBonus::None,
        }
    }
}
