use crate::constants::SolidityType;
use thiserror::Error;

/// Every failure the SDK can report. None of them is transient: each one
/// means a caller-supplied value broke an invariant of the pair math.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SdkError {
    #[error("tokens are on different chains")]
    ChainMismatch,
    #[error("tokens have the same address")]
    IdenticalTokens,
    #[error("token is not valid for this operation")]
    InvalidToken,
    #[error("value exceeds the {0} ceiling")]
    Overflow(SolidityType),
    #[error("subtraction result is negative")]
    Underflow,
    #[error("division by zero")]
    DivisionByZero,
    #[error("insufficient reserves")]
    InsufficientReserves,
    #[error("amount must be positive")]
    InvalidAmount,
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("unsupported chain id: {0}")]
    UnsupportedChain(u64),
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("invalid precision: {0}")]
    InvalidPrecision(String),
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SdkError>;
