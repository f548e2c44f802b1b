use crate::constants::Rounding;
use crate::entities::fractions::fraction::{pow10, Fraction};
use crate::entities::fractions::token_amount::TokenAmount;
use crate::entities::token::Token;
use crate::error::{Result, SdkError};
use crate::math::Uint256;
use num_bigint::BigInt;

/// How much of `quote` one unit of `base` is worth.
///
/// `raw` is the ratio of smallest units (`quote_amount / base_amount`);
/// `scalar` is `10^base_decimals / 10^quote_decimals`, which turns it into a
/// ratio of whole tokens.
#[derive(Debug, Clone)]
pub struct Price {
    base: Token,
    quote: Token,
    raw: Fraction,
    scalar: Fraction,
}

impl Price {
    pub fn new(
        base: Token,
        quote: Token,
        base_amount: &Uint256,
        quote_amount: &Uint256,
    ) -> Result<Self> {
        let raw = Fraction::new(quote_amount.to_bigint(), base_amount.to_bigint())?;
        Self::from_fraction(base, quote, raw)
    }

    pub fn from_amounts(base: &TokenAmount, quote: &TokenAmount) -> Result<Self> {
        Self::new(
            base.token().clone(),
            quote.token().clone(),
            base.raw(),
            quote.raw(),
        )
    }

    fn from_fraction(base: Token, quote: Token, raw: Fraction) -> Result<Self> {
        if base.chain_id() != quote.chain_id() {
            return Err(SdkError::ChainMismatch);
        }
        if base == quote {
            return Err(SdkError::IdenticalTokens);
        }
        let scalar = Fraction::with_positive_denominator(
            BigInt::from(pow10(u32::from(base.decimals()))),
            pow10(u32::from(quote.decimals())),
        );
        Ok(Self {
            base,
            quote,
            raw,
            scalar,
        })
    }

    pub fn base(&self) -> &Token {
        &self.base
    }

    pub fn quote_token(&self) -> &Token {
        &self.quote
    }

    pub fn raw(&self) -> &Fraction {
        &self.raw
    }

    pub fn adjusted(&self) -> Fraction {
        self.raw.multiply(&self.scalar)
    }

    /// Fails with `DivisionByZero` for a zero price.
    pub fn invert(&self) -> Result<Price> {
        Self::from_fraction(self.quote.clone(), self.base.clone(), self.raw.invert()?)
    }

    /// Chains `base -> quote` with `quote -> other.quote`.
    pub fn multiply(&self, other: &Price) -> Result<Price> {
        if self.quote != other.base {
            return Err(SdkError::InvalidToken);
        }
        Self::from_fraction(
            self.base.clone(),
            other.quote.clone(),
            self.raw.multiply(&other.raw),
        )
    }

    /// Converts an amount of `base` into `quote`, rounding down to the
    /// smallest unit.
    pub fn quote(&self, amount: &TokenAmount) -> Result<TokenAmount> {
        if *amount.token() != self.base {
            return Err(SdkError::InvalidToken);
        }
        let quoted = self
            .raw
            .multiply(&Fraction::from_integer(amount.raw().to_bigint()))
            .quotient();
        Ok(TokenAmount::new(
            self.quote.clone(),
            Uint256::try_from(&quoted)?,
        ))
    }

    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> Result<String> {
        self.adjusted().to_significant(significant_digits, rounding)
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.adjusted().to_fixed(decimal_places, rounding)
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.quote == other.quote && self.raw == other.raw
    }
}

impl Eq for Price {}
