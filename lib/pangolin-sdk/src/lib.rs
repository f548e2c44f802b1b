//! Off-chain replica of Pangolin pair arithmetic on Avalanche.
//!
//! Everything here is pure computation over caller-supplied reserves: pair
//! addresses come from CREATE2, quotes from the constant-product formula with
//! the 0.25% fee, and every intermediate value is held to the same `uint256`
//! ceiling the pair contract enforces.

pub mod address;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod math;

pub use address::{get_create2_address, keccak256, Address, InitCodeHash};
pub use config::{Deployment, DeploymentConfig};
pub use constants::{ChainId, Rounding, SolidityType};
pub use entities::{wavax, Fraction, Pair, PairAddressCache, Percent, Price, Token, TokenAmount};
pub use error::{Result, SdkError};
pub use math::{sqrt, Uint256, Uint8};
