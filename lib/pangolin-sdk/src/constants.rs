use crate::address::{Address, InitCodeHash};
use crate::error::SdkError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
#[repr(u64)]
pub enum ChainId {
    /// Avalanche C-Chain
    Mainnet = 43114,
    /// Avalanche Fuji
    Testnet = 43113,
}

impl ChainId {
    pub const ALL: [ChainId; 2] = [ChainId::Mainnet, ChainId::Testnet];

    pub const fn id(&self) -> u64 {
        *self as u64
    }
}

impl TryFrom<u64> for ChainId {
    type Error = SdkError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        match value {
            43114 => Ok(ChainId::Mainnet),
            43113 => Ok(ChainId::Testnet),
            other => Err(SdkError::UnsupportedChain(other)),
        }
    }
}

impl From<ChainId> for u64 {
    fn from(value: ChainId) -> Self {
        value.id()
    }
}

impl Display for ChainId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Rounding applied when an exact rational value is rendered as a decimal.
/// Modes act on the magnitude, so `RoundUp` is a ceiling for non-negative
/// values and `RoundHalfUp` rounds ties away from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    RoundDown,
    RoundHalfUp,
    RoundUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolidityType {
    Uint8,
    Uint256,
}

impl SolidityType {
    pub const fn bits(&self) -> u64 {
        match self {
            SolidityType::Uint8 => 8,
            SolidityType::Uint256 => 256,
        }
    }
}

impl Display for SolidityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SolidityType::Uint8 => "uint8",
            SolidityType::Uint256 => "uint256",
        })
    }
}

pub const FACTORY_ADDRESS: Address =
    Address::from_hex_const("0x21cadeb92c8BbFBEF98c3098846f0999209C3A97");

pub const INIT_CODE_HASH: InitCodeHash = InitCodeHash::from_hex_const(
    "0xb097ef8a6a4a0b6041d0386882bfbbaf250e6a4bcf927900040c44a343d57964",
);

pub const fn factory_address(chain_id: ChainId) -> Address {
    match chain_id {
        ChainId::Mainnet => FACTORY_ADDRESS,
        ChainId::Testnet => FACTORY_ADDRESS,
    }
}

pub const fn init_code_hash(chain_id: ChainId) -> InitCodeHash {
    match chain_id {
        ChainId::Mainnet => INIT_CODE_HASH,
        ChainId::Testnet => INIT_CODE_HASH,
    }
}

pub const MINIMUM_LIQUIDITY: u64 = 1000;

/// 0.25% swap fee: 9975 / 10000 of the input reaches the curve.
pub const FEES_NUMERATOR: u64 = 9975;
pub const FEES_DENOMINATOR: u64 = 10000;

/// `rootK * PROTOCOL_FEE_FACTOR + rootKLast` is the fee-on mint denominator.
pub const PROTOCOL_FEE_FACTOR: u64 = 5;

pub const PAIR_DECIMALS: u8 = 18;
pub const PAIR_SYMBOL: &str = "PGL";
pub const PAIR_NAME: &str = "Pangolin Liquidity";
