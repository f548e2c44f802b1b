use crate::address::Address;
use crate::constants::ChainId;
use crate::error::{Result, SdkError};
use crate::math::Uint8;
use once_cell::sync::Lazy;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use std::sync::Arc;

static WAVAX: Lazy<[Token; 2]> = Lazy::new(|| {
    [
        Token::from_parts(
            ChainId::Mainnet,
            Address::from_hex_const("0xB31f66AA3C1e785363F0875A1B74E27b85FD66c7"),
            18,
            Some("WAVAX"),
            Some("Wrapped AVAX"),
        ),
        Token::from_parts(
            ChainId::Testnet,
            Address::from_hex_const("0xd00ae08403B9bbb9124bB305C09058E32C39A48c"),
            18,
            Some("WAVAX"),
            Some("Wrapped AVAX"),
        ),
    ]
});

/// Wrapped native token of `chain_id`.
pub fn wavax(chain_id: ChainId) -> Token {
    match chain_id {
        ChainId::Mainnet => WAVAX[0].clone(),
        ChainId::Testnet => WAVAX[1].clone(),
    }
}

/// ERC-20 identity. Symbol and name are labels only: two tokens are the same
/// token exactly when chain and address agree.
#[derive(Debug, Clone)]
pub struct Token {
    chain_id: ChainId,
    address: Address,
    decimals: u8,
    symbol: Option<Arc<str>>,
    name: Option<Arc<str>>,
}

impl Token {
    /// # Errors
    /// [`SdkError::InvalidAddress`] for a malformed address and
    /// [`SdkError::Overflow`] when `decimals` does not fit a `uint8`.
    pub fn new(
        chain_id: ChainId,
        address: &str,
        decimals: u32,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self> {
        let address = Address::from_str(address)?;
        let decimals = Uint8::try_from(decimals)?;
        Ok(Self::from_parts(
            chain_id,
            address,
            decimals.to_u8(),
            symbol,
            name,
        ))
    }

    pub fn from_parts(
        chain_id: ChainId,
        address: Address,
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.map(Arc::from),
            name: name.map(Arc::from),
        }
    }

    pub fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Whether `self` becomes `token0` when paired with `other`.
    pub fn sorts_before(&self, other: &Token) -> Result<bool> {
        if self.chain_id != other.chain_id {
            return Err(SdkError::ChainMismatch);
        }
        if self.address == other.address {
            return Err(SdkError::IdenticalTokens);
        }
        Ok(self.address < other.address)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.symbol {
            Some(symbol) => f.write_str(symbol),
            None => Display::fmt(&self.address, f),
        }
    }
}
