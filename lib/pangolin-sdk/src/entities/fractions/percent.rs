use crate::constants::Rounding;
use crate::entities::fractions::fraction::Fraction;
use crate::error::Result;
use num_bigint::BigInt;
use once_cell::sync::Lazy;

static ONE_HUNDRED: Lazy<Fraction> = Lazy::new(|| Fraction::from_integer(100u32));

/// A fraction rendered as a percentage: `1/400` shows as `"0.25"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Percent(Fraction);

impl Percent {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        Ok(Self(Fraction::new(numerator, denominator)?))
    }

    pub fn as_fraction(&self) -> &Fraction {
        &self.0
    }

    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> Result<String> {
        self.0
            .multiply(&ONE_HUNDRED)
            .to_significant(significant_digits, rounding)
    }

    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        self.0.multiply(&ONE_HUNDRED).to_fixed(decimal_places, rounding)
    }
}

impl From<Fraction> for Percent {
    fn from(value: Fraction) -> Self {
        Self(value)
    }
}
