use soroban_sdk::contracterror;
pub use vesting_core::ErrorKind;

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Transfers and approvals are frozen.
    Paused = 3,
    /// Mint attempted while paused.
    MintingDisallowed = 4,
    InsufficientBalance = 5,
    InsufficientAllowance = 6,
    InvalidAmount = 7,
    InvalidExpiration = 8,
    MathOverflow = 9,
}

impl Error {
    pub fn kind(self) -> ErrorKind {
        match self {
            Error::InvalidAmount | Error::InvalidExpiration => ErrorKind::Validation,
            Error::InsufficientAllowance => ErrorKind::Authorization,
            Error::InsufficientBalance | Error::MathOverflow => ErrorKind::Capacity,
            Error::NotInitialized
            | Error::AlreadyInitialized
            | Error::Paused
            | Error::MintingDisallowed => ErrorKind::State,
        }
    }
}
