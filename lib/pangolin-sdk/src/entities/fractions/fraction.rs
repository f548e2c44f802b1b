use crate::constants::Rounding;
use crate::error::{Result, SdkError};
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

/// Exact rational number. The denominator is never zero and always positive,
/// the sign lives on the numerator. Nothing reduces the fraction unless
/// [`Fraction::reduced`] is asked for, so equality cross-multiplies.
#[derive(Debug, Clone)]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Result<Self> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(SdkError::DivisionByZero);
        }
        Ok(Self::normalized(numerator, denominator))
    }

    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self {
            numerator: value.into(),
            denominator: BigInt::one(),
        }
    }

    /// For denominators that are positive by construction, such as `10^d`.
    pub(crate) fn with_positive_denominator(numerator: BigInt, denominator: BigUint) -> Self {
        debug_assert!(!denominator.is_zero());
        Self {
            numerator,
            denominator: BigInt::from(denominator),
        }
    }

    fn normalized(numerator: BigInt, denominator: BigInt) -> Self {
        if denominator.is_negative() {
            Self {
                numerator: -numerator,
                denominator: -denominator,
            }
        } else {
            Self {
                numerator,
                denominator,
            }
        }
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Integer part, truncated toward zero.
    pub fn quotient(&self) -> BigInt {
        &self.numerator / &self.denominator
    }

    /// What the quotient leaves behind, over the same denominator.
    pub fn remainder(&self) -> Fraction {
        Self {
            numerator: &self.numerator % &self.denominator,
            denominator: self.denominator.clone(),
        }
    }

    pub fn invert(&self) -> Result<Fraction> {
        Fraction::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn add(&self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Self {
                numerator: &self.numerator + &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Self {
            numerator: &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn subtract(&self, other: &Fraction) -> Fraction {
        if self.denominator == other.denominator {
            return Self {
                numerator: &self.numerator - &other.numerator,
                denominator: self.denominator.clone(),
            };
        }
        Self {
            numerator: &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn multiply(&self, other: &Fraction) -> Fraction {
        Self {
            numerator: &self.numerator * &other.numerator,
            denominator: &self.denominator * &other.denominator,
        }
    }

    pub fn divide(&self, other: &Fraction) -> Result<Fraction> {
        Fraction::new(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        )
    }

    /// Lowest terms. Only ever computed on request.
    pub fn reduced(&self) -> Fraction {
        let gcd = self.numerator.gcd(&self.denominator);
        if gcd.is_zero() || gcd.is_one() {
            return self.clone();
        }
        Self {
            numerator: &self.numerator / &gcd,
            denominator: &self.denominator / &gcd,
        }
    }

    /// Exact value rounded once to `decimal_places`, zero padded:
    /// `1/3 -> "0.33"`, `1 -> "1.00"`.
    pub fn to_fixed(&self, decimal_places: u32, rounding: Rounding) -> String {
        let scaled = self.numerator.magnitude() * pow10(decimal_places);
        let digits = round_div(&scaled, self.denominator.magnitude(), rounding);
        let negative = self.numerator.is_negative() && !digits.is_zero();
        render_fixed(negative, &digits, decimal_places)
    }

    /// Rounds to `significant_digits` and renders in plain notation with
    /// trailing zeros dropped.
    ///
    /// The quotient is first rounded to one extra significant digit and then
    /// to the requested count, both times with `rounding`, so `0.1449` at two
    /// digits with `RoundHalfUp` renders as `"0.15"`.
    ///
    /// # Errors
    /// [`SdkError::InvalidPrecision`] when `significant_digits` is zero.
    pub fn to_significant(&self, significant_digits: u32, rounding: Rounding) -> Result<String> {
        if significant_digits == 0 {
            return Err(SdkError::InvalidPrecision(
                "significant digits must be at least 1".to_string(),
            ));
        }
        if self.numerator.is_zero() {
            return Ok("0".to_string());
        }
        let magnitude = self.numerator.magnitude();
        let (digits, exponent) = round_significant(
            magnitude,
            self.denominator.magnitude(),
            significant_digits + 1,
            rounding,
        );
        let (numerator, denominator) = if exponent >= 0 {
            (digits * pow10(exponent.unsigned_abs() as u32), BigUint::one())
        } else {
            (digits, pow10(exponent.unsigned_abs() as u32))
        };
        let (digits, exponent) =
            round_significant(&numerator, &denominator, significant_digits, rounding);
        Ok(render_plain(
            self.numerator.is_negative(),
            digits,
            exponent,
        ))
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross-multiplying keeps the direction
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

pub(crate) fn pow10(exp: u32) -> BigUint {
    BigUint::from(10u32).pow(exp)
}

/// `numerator / denominator` as an integer, rounded on the magnitude.
pub(crate) fn round_div(numerator: &BigUint, denominator: &BigUint, rounding: Rounding) -> BigUint {
    let (q, r) = numerator.div_rem(denominator);
    if r.is_zero() {
        return q;
    }
    let bump = match rounding {
        Rounding::RoundDown => false,
        Rounding::RoundUp => true,
        Rounding::RoundHalfUp => r * 2u32 >= *denominator,
    };
    if bump {
        q + 1u32
    } else {
        q
    }
}

/// Rounds `numerator / denominator` (non-zero) to `precision` significant
/// digits. The result is `digits * 10^exponent`; a carry out of the last
/// place can leave `digits` one digit longer than `precision`.
fn round_significant(
    numerator: &BigUint,
    denominator: &BigUint,
    precision: u32,
    rounding: Rounding,
) -> (BigUint, i64) {
    // position of the leading digit: 10^e <= value < 10^(e+1)
    let integer_part = numerator / denominator;
    let leading = if !integer_part.is_zero() {
        integer_part.to_string().len() as i64 - 1
    } else {
        let mut shift = 0i64;
        let mut scaled = numerator.clone();
        while scaled < *denominator {
            scaled *= 10u32;
            shift += 1;
        }
        -shift
    };
    let exponent = leading - (i64::from(precision) - 1);
    let digits = if exponent <= 0 {
        round_div(
            &(numerator * pow10(exponent.unsigned_abs() as u32)),
            denominator,
            rounding,
        )
    } else {
        round_div(
            numerator,
            &(denominator * pow10(exponent as u32)),
            rounding,
        )
    };
    (digits, exponent)
}

fn render_fixed(negative: bool, digits: &BigUint, decimal_places: u32) -> String {
    let mut text = digits.to_string();
    let places = decimal_places as usize;
    if places > 0 {
        if text.len() <= places {
            text = format!("{}{}", "0".repeat(places + 1 - text.len()), text);
        }
        text.insert(text.len() - places, '.');
    }
    if negative {
        text.insert(0, '-');
    }
    text
}

fn render_plain(negative: bool, mut digits: BigUint, mut exponent: i64) -> String {
    let ten = BigUint::from(10u32);
    while !digits.is_zero() && (&digits % &ten).is_zero() {
        digits /= 10u32;
        exponent += 1;
    }
    let text = digits.to_string();
    let mut out = if exponent >= 0 {
        format!("{}{}", text, "0".repeat(exponent as usize))
    } else {
        let places = exponent.unsigned_abs() as usize;
        if text.len() > places {
            let (int_part, frac_part) = text.split_at(text.len() - places);
            format!("{}.{}", int_part, frac_part)
        } else {
            format!("0.{}{}", "0".repeat(places - text.len()), text)
        }
    };
    if negative && !digits.is_zero() {
        out.insert(0, '-');
    }
    out
}

impl From<BigUint> for Fraction {
    fn from(value: BigUint) -> Self {
        Fraction::from_integer(BigInt::from(value))
    }
}
