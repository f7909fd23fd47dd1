#![no_std]

//! Release accounting shared by the crowdsale and distribution contracts.
//!
//! Everything here is a pure function of the stored record and a single `now`
//! sample; storage and token movements stay in the contracts.

pub mod bonus;
pub mod entitlement;
pub mod error;
pub mod ledger;
pub mod math;
pub mod schedule;

pub use bonus::{AttachedBonus, BonusMilestones, BonusSchedule};
pub use entitlement::{Entitlement, Release, Revocation};
pub use error::{ErrorKind, VestingError};
pub use math::{tokens, SECONDS_PER_DAY, SECONDS_PER_MONTH, TOKEN_UNIT};
pub use schedule::{Settlement, VestingSchedule};

mod test;
