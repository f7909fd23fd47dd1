use soroban_sdk::contracterror;
pub use vesting_core::ErrorKind;
use vesting_core::VestingError;

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    NotOwner = 3,
    NotAuthorized = 4,
    InvalidAmount = 5,
    InvalidRange = 6,
    InvalidMilestones = 7,
    MathOverflow = 8,
    /// Request exceeds the category's available supply.
    InsufficientSupply = 9,
    DuplicateAllocation = 10,
    AllocationNotFound = 11,
    Revoked = 12,
    NotRevocable = 13,
    AlreadyRevoked = 14,
    /// Custody could not cover a payout.
    InsufficientBalance = 15,
    /// The token refused a payout because it is paused.
    LedgerPaused = 16,
}

impl Error {
    pub fn kind(self) -> ErrorKind {
        match self {
            Error::InvalidAmount | Error::InvalidRange | Error::InvalidMilestones => {
                ErrorKind::Validation
            }
            Error::NotOwner | Error::NotAuthorized => ErrorKind::Authorization,
            Error::MathOverflow | Error::InsufficientSupply | Error::InsufficientBalance => {
                ErrorKind::Capacity
            }
            Error::NotInitialized
            | Error::AlreadyInitialized
            | Error::DuplicateAllocation
            | Error::AllocationNotFound
            | Error::Revoked
            | Error::NotRevocable
            | Error::AlreadyRevoked
            | Error::LedgerPaused => ErrorKind::State,
        }
    }
}

impl From<VestingError> for Error {
    fn from(err: VestingError) -> Self {
        match err {
            VestingError::InvalidAmount => Error::InvalidAmount,
            VestingError::InvalidRange => Error::InvalidRange,
            VestingError::InvalidMilestones => Error::InvalidMilestones,
            VestingError::Revoked => Error::Revoked,
            VestingError::NotRevocable => Error::NotRevocable,
            VestingError::AlreadyRevoked => Error::AlreadyRevoked,
            VestingError::MathOverflow => Error::MathOverflow,
        }
    }
}
