use crate::constants::SolidityType;
use crate::error::{Result, SdkError};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use std::fmt::{Debug, Display, Formatter};
use std::hash::Hash;
use std::marker::PhantomData;
use std::str::FromStr;

/// Bit-width ceiling of a [`BoundedUint`].
pub trait Width: Copy + Eq + Ord + Hash + Debug + Default + Send + Sync + 'static {
    const BITS: u64;
    const SOLIDITY_TYPE: SolidityType;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct W8;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct W256;

impl Width for W8 {
    const BITS: u64 = 8;
    const SOLIDITY_TYPE: SolidityType = SolidityType::Uint8;
}

impl Width for W256 {
    const BITS: u64 = 256;
    const SOLIDITY_TYPE: SolidityType = SolidityType::Uint256;
}

/// Arbitrary-precision unsigned integer that refuses to leave `0..=2^BITS-1`.
///
/// Every operation re-checks its result against the ceiling and reports
/// [`SdkError::Overflow`] instead of wrapping, the same way a SafeMath call
/// reverts on chain.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BoundedUint<W: Width> {
    value: BigUint,
    _width: PhantomData<W>,
}

pub type Uint8 = BoundedUint<W8>;
pub type Uint256 = BoundedUint<W256>;

impl<W: Width> BoundedUint<W> {
    pub fn new(value: BigUint) -> Result<Self> {
        if value.bits() > W::BITS {
            return Err(SdkError::Overflow(W::SOLIDITY_TYPE));
        }
        Ok(Self::within_bounds(value))
    }

    /// Caller guarantees `value` already fits the ceiling.
    pub(crate) fn within_bounds(value: BigUint) -> Self {
        debug_assert!(value.bits() <= W::BITS);
        Self {
            value,
            _width: PhantomData,
        }
    }

    pub fn zero() -> Self {
        Self::within_bounds(BigUint::zero())
    }

    pub fn one() -> Self {
        Self::within_bounds(BigUint::one())
    }

    pub fn max_value() -> Self {
        Self::within_bounds((BigUint::one() << W::BITS) - 1u32)
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.value
    }

    pub fn into_biguint(self) -> BigUint {
        self.value
    }

    pub fn to_bigint(&self) -> BigInt {
        BigInt::from(self.value.clone())
    }

    pub fn checked_add(&self, rhs: &Self) -> Result<Self> {
        Self::new(&self.value + &rhs.value)
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self> {
        if self.value < rhs.value {
            return Err(SdkError::Underflow);
        }
        Ok(Self::within_bounds(&self.value - &rhs.value))
    }

    pub fn checked_mul(&self, rhs: &Self) -> Result<Self> {
        Self::new(&self.value * &rhs.value)
    }

    /// Truncating division.
    pub fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(SdkError::DivisionByZero);
        }
        Ok(Self::within_bounds(&self.value / &rhs.value))
    }

    pub fn checked_rem(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(SdkError::DivisionByZero);
        }
        Ok(Self::within_bounds(&self.value % &rhs.value))
    }

    /// Ceiling division. The quotient never exceeds the dividend, so only a
    /// zero divisor can fail.
    pub fn div_ceil(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            return Err(SdkError::DivisionByZero);
        }
        let (q, r) = self.value.div_rem(&rhs.value);
        let q = if r.is_zero() { q } else { q + 1u32 };
        Ok(Self::within_bounds(q))
    }

    pub fn checked_pow(&self, exp: u32) -> Result<Self> {
        // bits(x^e) <= e * bits(x); bail out before materializing huge powers
        if !self.value.is_zero()
            && !self.value.is_one()
            && (self.value.bits() - 1).saturating_mul(u64::from(exp)) >= W::BITS
        {
            return Err(SdkError::Overflow(W::SOLIDITY_TYPE));
        }
        Self::new(self.value.pow(exp))
    }

    pub fn to_hex(&self) -> String {
        format!("0x{:x}", self.value)
    }
}

impl Uint8 {
    pub fn to_u8(&self) -> u8 {
        // the ceiling keeps the value inside u8
        self.value.to_u8().unwrap_or(u8::MAX)
    }
}

impl Uint256 {
    pub fn to_u128(&self) -> Option<u128> {
        self.value.to_u128()
    }
}

impl<W: Width> FromStr for BoundedUint<W> {
    type Err = SdkError;

    /// Plain decimal digits, or `0x`-prefixed hex digits.
    fn from_str(s: &str) -> Result<Self> {
        let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => (hex, 16),
            None => (s, 10),
        };
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(SdkError::InvalidNumber(s.to_string()));
        }
        let value = BigUint::parse_bytes(digits.as_bytes(), radix)
            .ok_or_else(|| SdkError::InvalidNumber(s.to_string()))?;
        Self::new(value)
    }
}

impl<W: Width> TryFrom<BigUint> for BoundedUint<W> {
    type Error = SdkError;

    fn try_from(value: BigUint) -> Result<Self> {
        Self::new(value)
    }
}

impl<W: Width> TryFrom<&BigInt> for BoundedUint<W> {
    type Error = SdkError;

    fn try_from(value: &BigInt) -> Result<Self> {
        let magnitude = value.to_biguint().ok_or(SdkError::Underflow)?;
        Self::new(magnitude)
    }
}

macro_rules! uint256_from_native {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Uint256 {
                fn from(value: $t) -> Self {
                    Self::within_bounds(BigUint::from(value))
                }
            }
        )*
    };
}

uint256_from_native!(u8, u16, u32, u64, u128);

impl From<u8> for Uint8 {
    fn from(value: u8) -> Self {
        Self::within_bounds(BigUint::from(value))
    }
}

macro_rules! uint8_try_from_native {
    ($($t:ty),*) => {
        $(
            impl TryFrom<$t> for Uint8 {
                type Error = SdkError;

                fn try_from(value: $t) -> Result<Self> {
                    Self::new(BigUint::from(value))
                }
            }
        )*
    };
}

uint8_try_from_native!(u16, u32, u64, u128);

impl<W: Width> From<BoundedUint<W>> for BigInt {
    fn from(value: BoundedUint<W>) -> Self {
        BigInt::from(value.value)
    }
}

impl<W: Width> From<&BoundedUint<W>> for BigInt {
    fn from(value: &BoundedUint<W>) -> Self {
        value.to_bigint()
    }
}

impl<W: Width> Display for BoundedUint<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.value, f)
    }
}

impl<W: Width> Debug for BoundedUint<W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", W::SOLIDITY_TYPE, self.value)
    }
}
