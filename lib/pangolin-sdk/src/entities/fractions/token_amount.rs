use crate::constants::Rounding;
use crate::entities::fractions::fraction::{pow10, Fraction};
use crate::entities::token::Token;
use crate::error::{Result, SdkError};
use crate::math::Uint256;
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Raw on-chain quantity of one token, in its smallest unit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenAmount {
    token: Token,
    raw: Uint256,
}

impl TokenAmount {
    pub fn new(token: Token, raw: Uint256) -> Self {
        Self { token, raw }
    }

    /// Decimal or `0x` hex string in the smallest unit.
    pub fn from_raw(token: Token, raw: &str) -> Result<Self> {
        Ok(Self::new(token, Uint256::from_str(raw)?))
    }

    pub fn from_big(token: Token, raw: BigUint) -> Result<Self> {
        Ok(Self::new(token, Uint256::try_from(raw)?))
    }

    /// Scales a human-readable decimal such as `"12.5"` by `10^decimals`
    /// without leaving integer arithmetic.
    ///
    /// # Errors
    /// [`SdkError::InvalidNumber`] for anything but digits with at most one
    /// point, [`SdkError::InvalidAmount`] when more fractional digits are
    /// given than the token has decimals, [`SdkError::Overflow`] past `uint256`.
    pub fn from_human(token: Token, amount: &str) -> Result<Self> {
        let (int_part, frac_part) = match amount.split_once('.') {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (amount, ""),
        };
        let well_formed = !(int_part.is_empty() && frac_part.is_empty())
            && int_part.chars().all(|c| c.is_ascii_digit())
            && frac_part.chars().all(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(SdkError::InvalidNumber(amount.to_string()));
        }
        let decimals = u32::from(token.decimals());
        if frac_part.len() > decimals as usize {
            return Err(SdkError::InvalidAmount);
        }
        let int_value = parse_digits(int_part, amount)?;
        let frac_value = parse_digits(frac_part, amount)?;
        let raw = int_value * pow10(decimals)
            + frac_value * pow10(decimals - frac_part.len() as u32);
        Self::from_big(token, raw)
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn raw(&self) -> &Uint256 {
        &self.raw
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    pub fn add(&self, other: &TokenAmount) -> Result<TokenAmount> {
        if self.token != other.token {
            return Err(SdkError::InvalidToken);
        }
        Ok(Self::new(self.token.clone(), self.raw.checked_add(&other.raw)?))
    }

    pub fn subtract(&self, other: &TokenAmount) -> Result<TokenAmount> {
        if self.token != other.token {
            return Err(SdkError::InvalidToken);
        }
        Ok(Self::new(self.token.clone(), self.raw.checked_sub(&other.raw)?))
    }

    /// The amount in whole tokens, `raw / 10^decimals`.
    pub fn as_fraction(&self) -> Fraction {
        Fraction::with_positive_denominator(
            self.raw.to_bigint(),
            pow10(u32::from(self.token.decimals())),
        )
    }

    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> Result<String> {
        self.as_fraction()
            .to_significant(significant_digits, rounding)
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> Result<String> {
        if decimal_places > u32::from(self.token.decimals()) {
            return Err(SdkError::InvalidPrecision(format!(
                "{} decimal places requested, token has {}",
                decimal_places,
                self.token.decimals()
            )));
        }
        Ok(self.as_fraction().to_fixed(decimal_places, rounding))
    }

    /// Full precision, trailing zeros dropped: `1500000` at 6 decimals is `"1.5"`.
    pub fn to_exact(&self) -> String {
        let decimals = usize::from(self.token.decimals());
        let text = self
            .as_fraction()
            .to_fixed(decimals as u32, Rounding::RoundDown);
        if decimals == 0 {
            return text;
        }
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

impl Display for TokenAmount {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.to_exact(), self.token)
    }
}

fn parse_digits(digits: &str, input: &str) -> Result<BigUint> {
    if digits.is_empty() {
        return Ok(BigUint::zero());
    }
    BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| SdkError::InvalidNumber(input.to_string()))
}
