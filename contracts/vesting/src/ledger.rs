//! Classifying failures reported by the sale token.

use soroban_sdk::{Error, InvokeError};

/// Contract error code the sale token returns for a transfer while paused.
pub const TOKEN_PAUSED_CODE: u32 = 3;

/// Whether a failed `try_transfer` was rejected because the token is paused.
pub fn is_token_paused(failure: &Result<Error, InvokeError>) -> bool {
    matches!(failure, Ok(err) if *err == Error::from_contract_error(TOKEN_PAUSED_CODE))
}
