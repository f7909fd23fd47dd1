use soroban_sdk::contracterror;

/// Coarse classification shared by every contract in the workspace.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// Bad input: time ranges, amounts, configuration.
    Validation,
    /// Caller is not allowed to perform the operation.
    Authorization,
    /// A pool, cap, rate bound or balance would be exceeded.
    Capacity,
    /// Wrong lifecycle phase for the operation.
    State,
}

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VestingError {
    InvalidAmount = 1,
    /// `end <= start`, or the lock period does not fit inside the window.
    InvalidRange = 2,
    InvalidMilestones = 3,
    Revoked = 4,
    NotRevocable = 5,
    AlreadyRevoked = 6,
    MathOverflow = 7,
}

impl VestingError {
    pub fn kind(self) -> ErrorKind {
        match self {
            VestingError::InvalidAmount
            | VestingError::InvalidRange
            | VestingError::InvalidMilestones => ErrorKind::Validation,
            VestingError::MathOverflow => ErrorKind::Capacity,
            VestingError::Revoked | VestingError::NotRevocable | VestingError::AlreadyRevoked => {
                ErrorKind::State
            }
        }
    }
}
