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
    /// Caller is neither the beneficiary nor the owner.
    NotAuthorized = 4,
    InvalidConfig = 5,
    InvalidAmount = 6,
    InvalidRange = 7,
    InvalidMilestones = 8,
    MathOverflow = 9,
    NotOpen = 10,
    NotWhitelisted = 11,
    AlreadyPurchased = 12,
    DuplicateSchedule = 13,
    BelowMinimum = 14,
    AboveMaximum = 15,
    RateDeltaExceeded = 16,
    NotClosed = 17,
    AlreadyFinalized = 18,
    ScheduleNotFound = 19,
    Revoked = 20,
    NotRevocable = 21,
    AlreadyRevoked = 22,
    TokenCapExceeded = 23,
    MintingDisallowed = 24,
    InsufficientBalance = 25,
    /// The token refused a transfer because it is paused.
    LedgerPaused = 26,
}

impl Error {
    pub fn kind(self) -> ErrorKind {
        match self {
            Error::InvalidConfig
            | Error::InvalidAmount
            | Error::InvalidRange
            | Error::InvalidMilestones => ErrorKind::Validation,
            Error::NotOwner | Error::NotAuthorized | Error::NotWhitelisted => {
                ErrorKind::Authorization
            }
            Error::MathOverflow
            | Error::BelowMinimum
            | Error::AboveMaximum
            | Error::RateDeltaExceeded
            | Error::TokenCapExceeded
            | Error::InsufficientBalance => ErrorKind::Capacity,
            Error::NotInitialized
            | Error::AlreadyInitialized
            | Error::NotOpen
            | Error::AlreadyPurchased
            | Error::DuplicateSchedule
            | Error::NotClosed
            | Error::AlreadyFinalized
            | Error::ScheduleNotFound
            | Error::Revoked
            | Error::NotRevocable
            | Error::AlreadyRevoked
            | Error::MintingDisallowed
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
