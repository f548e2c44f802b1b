//! 20-byte EVM addresses, Keccak-256 and CREATE2 address prediction.

use crate::error::{Result, SdkError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha3::{Digest, Keccak256};
use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Contract address. Byte ordering is the canonical ordering and matches the
/// lexical ordering of the lower-case hex form.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 20]);

/// Keccak-256 of a pair contract's creation bytecode.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct InitCodeHash([u8; 32]);

impl Address {
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Decodes a `0x`-prefixed literal at compile time; bad input fails the build.
    pub(crate) const fn from_hex_const(s: &str) -> Self {
        Self(decode_hex_const::<20>(s))
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_lower_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// EIP-55 mixed-case rendering.
    pub fn to_checksum(&self) -> String {
        let lower = hex::encode(self.0);
        let hash = keccak256(&[lower.as_bytes()]);
        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for (i, c) in lower.chars().enumerate() {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if c.is_ascii_alphabetic() && nibble >= 8 {
                out.push(c.to_ascii_uppercase());
            } else {
                out.push(c);
            }
        }
        out
    }
}

impl FromStr for Address {
    type Err = SdkError;

    /// Accepts 40 hex digits with an optional `0x` prefix. Single-case input
    /// is taken as is, mixed-case input must carry a valid EIP-55 checksum.
    fn from_str(s: &str) -> Result<Self> {
        let body = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if body.len() != 40 {
            return Err(SdkError::InvalidAddress(s.to_string()));
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(body, &mut bytes)
            .map_err(|_| SdkError::InvalidAddress(s.to_string()))?;
        let address = Address(bytes);

        let has_lower = body.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = body.chars().any(|c| c.is_ascii_uppercase());
        if has_lower && has_upper && address.to_checksum()[2..] != *body {
            return Err(SdkError::InvalidAddress(format!("bad checksum: {}", s)));
        }
        Ok(address)
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_checksum())
    }
}

impl Debug for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({})", self.to_lower_hex())
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_checksum())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s: String = Deserialize::deserialize(deserializer)?;
        Address::from_str(s.as_str()).map_err(serde::de::Error::custom)
    }
}

impl InitCodeHash {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub(crate) const fn from_hex_const(s: &str) -> Self {
        Self(decode_hex_const::<32>(s))
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl FromStr for InitCodeHash {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self> {
        let body = s.strip_prefix("0x").unwrap_or(s);
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(body, &mut bytes)
            .map_err(|_| SdkError::InvalidNumber(format!("init code hash: {}", s)))?;
        Ok(InitCodeHash(bytes))
    }
}

impl Display for InitCodeHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl Debug for InitCodeHash {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "InitCodeHash({})", self)
    }
}

pub fn keccak256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    let mut out = [0u8; 32];
    out.copy_from_slice(&digest);
    out
}

/// Address a contract gets when `factory` deploys it with CREATE2:
/// `keccak256(0xff ++ factory ++ salt ++ init_code_hash)[12..]`.
pub fn get_create2_address(
    factory: &Address,
    salt: &[u8; 32],
    init_code_hash: &InitCodeHash,
) -> Address {
    let prefix = [0xff_u8];
    let hash = keccak256(&[
        &prefix[..],
        &factory.as_bytes()[..],
        &salt[..],
        &init_code_hash.as_bytes()[..],
    ]);
    let mut out = [0u8; 20];
    out.copy_from_slice(&hash[12..]);
    Address(out)
}

const fn hex_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

const fn decode_hex_const<const N: usize>(s: &str) -> [u8; N] {
    let bytes = s.as_bytes();
    assert!(bytes.len() == 2 + 2 * N, "unexpected hex literal length");
    assert!(bytes[0] == b'0' && bytes[1] == b'x', "missing 0x prefix");
    let mut out = [0u8; N];
    let mut i = 0;
    while i < N {
        out[i] = (hex_nibble(bytes[2 + 2 * i]) << 4) | hex_nibble(bytes[3 + 2 * i]);
        i += 1;
    }
    out
}
