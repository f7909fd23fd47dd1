use soroban_sdk::contracttype;

use crate::bonus::{AttachedBonus, BonusSchedule};
use crate::error::VestingError;
use crate::math::checked_add;
use crate::schedule::VestingSchedule;

/// Principal and bonus paid out by one release call.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[contracttype]
pub struct Release {
    pub principal: i128,
    pub bonus: i128,
}

impl Release {
    pub fn total(&self) -> Result<i128, VestingError> {
        checked_add(self.principal, self.bonus)
    }

    pub fn is_empty(&self) -> bool {
        self.principal == 0 && self.bonus == 0
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Revocation {
    /// Vested but unclaimed amounts paid to the beneficiary before revoking.
    pub settled: Release,
    /// Principal plus bonus taken back from the beneficiary.
    pub reclaimed: i128,
}

/// A principal schedule and the bonus attached to it, released together.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Entitlement {
    pub schedule: VestingSchedule,
    pub bonus: AttachedBonus,
}

impl Entitlement {
    pub fn new(schedule: VestingSchedule, bonus: Option<BonusSchedule>) -> Self {
        Self {
            schedule,
            bonus: bonus.into(),
        }
    }

    pub fn releasable_amount(&self, now: u64) -> Result<Release, VestingError> {
        let principal = self.schedule.releasable_amount(now)?;
        let bonus = match self.bonus.as_ref() {
            Some(bonus) => bonus.releasable_amount(now)?,
            None => 0,
        };
        Ok(Release { principal, bonus })
    }

    pub fn release(&mut self, now: u64) -> Result<Release, VestingError> {
        let principal = self.schedule.release(now)?;
        let bonus = match self.bonus.as_mut() {
            Some(bonus) => bonus.release(now)?,
            None => 0,
        };
        Ok(Release { principal, bonus })
    }

    pub fn settle_in_full(&mut self) -> Result<Release, VestingError> {
        let principal = self.schedule.settle_in_full()?;
        let bonus = match self.bonus.as_mut() {
            Some(bonus) => bonus.settle_in_full()?,
            None => 0,
        };
        Ok(Release { principal, bonus })
    }

    pub fn revoke(&mut self, now: u64) -> Result<Revocation, VestingError> {
        let principal = self.schedule.revoke(now)?;
        let bonus = match self.bonus.as_mut() {
            Some(bonus) => Some(bonus.revoke(now)?),
            None => None,
        };

        let (bonus_settled, bonus_reclaimed) = bonus
            .map(|s| (s.settled, s.reclaimed))
            .unwrap_or((0, 0));

        Ok(Revocation {
            settled: Release {
                principal: principal.settled,
                bonus: bonus_settled,
            },
            reclaimed: checked_add(principal.reclaimed, bonus_reclaimed)?,
        })
    }

    /// Principal plus bonus currently granted.
    pub fn total_granted(&self) -> Result<i128, VestingError> {
        let bonus = self.bonus.as_ref().map(|b| b.bonus_amount).unwrap_or(0);
        checked_add(self.schedule.initial_amount, bonus)
    }

    pub fn bonus_amount(&self) -> i128 {
        self.bonus.as_ref().map(|b| b.bonus_amount).unwrap_or(0)
    }

    pub fn is_revoked(&self) -> bool {
        self.schedule.revoked
    }

    pub fn is_consistent(&self) -> bool {
        self.schedule.is_consistent()
            && self.bonus.as_ref().map(|b| b.is_consistent()).unwrap_or(true)
    }
}
