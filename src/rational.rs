use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};
use std::str::FromStr;

use num::{BigInt, BigRational, One, Signed, ToPrimitive, Zero};

use crate::errors::RationalError;
use crate::rounding::RoundingMode;

/// An exact ratio of two arbitrary-precision integers.
///
/// [`Rational`] is always kept normalized (gcd of numerator/denominator is 1, the
/// denominator is positive) by the underlying [`num::BigRational`]. Frame counts in
/// this crate's test corpus reach into the millions and Premiere-tick counts reach
/// ~10^22, both comfortably inside a fixed-width 128-bit integer, but the
/// intermediate products used to get there (seconds times a 254-billion tick rate,
/// or a frame count times a 1001-denominator NTSC rate) are kept exact here rather
/// than widened-but-still-bounded, per the "use an off-the-shelf bigint" guidance
/// for this library.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rational(BigRational);

impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl Rational {
    /// Constructs a new, normalized `numer / denom`.
    pub fn new(numer: BigInt, denom: BigInt) -> Self {
        Rational(BigRational::new(numer, denom))
    }

    /// Constructs an integer-valued rational.
    pub fn from_integer(value: BigInt) -> Self {
        Rational(BigRational::from_integer(value))
    }

    /// The rational `0/1`.
    pub fn zero() -> Self {
        Rational(BigRational::zero())
    }

    /// Parses an exact decimal string (`"23.98"`, `"-0.5"`, `"12"`) into a
    /// [`Rational`] without ever routing through a binary float, so that decimal
    /// intent (`0.5`, `1.5`, `23.98`, ...) survives exactly.
    pub fn from_decimal_str(s: &str) -> Option<Self> {
        let s = s.trim();
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if rest.is_empty() {
            return None;
        }

        let mut parts = rest.splitn(2, '.');
        let int_part = parts.next().unwrap_or("");
        let frac_part = parts.next();

        if int_part.is_empty() && frac_part.map_or(true, |f| f.is_empty()) {
            return None;
        }
        if !int_part.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let int_value = if int_part.is_empty() {
            BigInt::zero()
        } else {
            BigInt::from_str(int_part).ok()?
        };
        let mut value = BigRational::from_integer(int_value);

        if let Some(frac) = frac_part {
            if frac.is_empty() || !frac.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            let frac_value = BigInt::from_str(frac).ok()?;
            let mut denom = BigInt::one();
            for _ in 0..frac.len() {
                denom = denom * BigInt::from(10);
            }
            value = value + BigRational::new(frac_value, denom);
        }

        if negative {
            value = -value;
        }
        Some(Rational(value))
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    pub fn abs(&self) -> Self {
        Rational(self.0.abs())
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }

    /// Rounds to an integer using `mode`. `RoundingMode::Off` truncates toward
    /// zero, same as `RoundingMode::Floor`/`Ceil` would for a value of the matching
    /// sign; callers that need to reject an unaligned value altogether should check
    /// [`Rational::is_integer`] before rounding rather than rely on this method.
    pub fn round(&self, mode: RoundingMode) -> BigInt {
        round_bigrational(&self.0, mode)
    }

    /// Divides `self` by `divisor`, returning the integer quotient (rounded per
    /// `round_q`) and the exact rational remainder `self - divisor * quotient`.
    pub fn divrem(
        &self,
        divisor: &Rational,
        round_q: RoundingMode,
    ) -> Result<(BigInt, Rational), RationalError> {
        if divisor.is_zero() {
            return Err(RationalError::DivisionByZero);
        }
        let quotient_rat = self.0.clone() / divisor.0.clone();
        let quotient = round_bigrational(&quotient_rat, round_q);
        let remainder =
            self.0.clone() - divisor.0.clone() * BigRational::from_integer(quotient.clone());
        Ok((quotient, Rational(remainder)))
    }
}

fn round_bigrational(r: &BigRational, mode: RoundingMode) -> BigInt {
    match mode {
        RoundingMode::Floor => r.floor().to_integer(),
        RoundingMode::Ceil => r.ceil().to_integer(),
        RoundingMode::Off => r.trunc().to_integer(),
        RoundingMode::Up => {
            if r.is_integer() {
                r.to_integer()
            } else if r.is_negative() {
                r.floor().to_integer()
            } else {
                r.ceil().to_integer()
            }
        }
        RoundingMode::Closest => {
            let trunc = r.trunc();
            let frac = r.clone() - trunc.clone();
            if frac.is_zero() {
                return trunc.to_integer();
            }
            let frac_abs = frac.abs();
            let doubled = frac_abs.numer().clone() * BigInt::from(2);
            if &doubled >= frac_abs.denom() {
                if r.is_negative() {
                    (trunc - BigRational::one()).to_integer()
                } else {
                    (trunc + BigRational::one()).to_integer()
                }
            } else {
                trunc.to_integer()
            }
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer(), self.denom())
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Rational {
    type Output = Rational;
    fn add(self, rhs: Self) -> Self::Output {
        Rational(self.0 + rhs.0)
    }
}

impl Sub for Rational {
    type Output = Rational;
    fn sub(self, rhs: Self) -> Self::Output {
        Rational(self.0 - rhs.0)
    }
}

impl Mul for Rational {
    type Output = Rational;
    fn mul(self, rhs: Self) -> Self::Output {
        Rational(self.0 * rhs.0)
    }
}

impl Div for Rational {
    type Output = Rational;
    fn div(self, rhs: Self) -> Self::Output {
        Rational(self.0 / rhs.0)
    }
}

impl Rem for Rational {
    type Output = Rational;
    fn rem(self, rhs: Self) -> Self::Output {
        Rational(self.0 % rhs.0)
    }
}

impl Neg for Rational {
    type Output = Rational;
    fn neg(self) -> Self::Output {
        Rational(-self.0)
    }
}

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Rational::from_integer(BigInt::from(value))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let raw = String::deserialize(deserializer)?;
        let (numer, denom) = raw
            .split_once('/')
            .ok_or_else(|| D::Error::custom("expected a rational string in 'num/denom' form"))?;
        let numer = BigInt::from_str(numer.trim())
            .map_err(|err| D::Error::custom(format!("invalid numerator: {}", err)))?;
        let denom = BigInt::from_str(denom.trim())
            .map_err(|err| D::Error::custom(format!("invalid denominator: {}", err)))?;
        Ok(Rational::new(numer, denom))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("23.98", 2398, 100)]
    #[case("-0.5", -1, 2)]
    #[case("12", 12, 1)]
    #[case(".5", 1, 2)]
    fn test_from_decimal_str(#[case] input: &str, #[case] numer: i64, #[case] denom: i64) {
        let parsed = Rational::from_decimal_str(input).unwrap();
        assert_eq!(Rational::new(numer.into(), denom.into()), parsed);
    }

    #[test]
    fn test_from_decimal_str_rejects_garbage() {
        assert!(Rational::from_decimal_str("not-a-number").is_none());
        assert!(Rational::from_decimal_str("").is_none());
    }

    #[rstest]
    #[case(1, 2, RoundingMode::Closest, 1)]
    #[case(-1, 2, RoundingMode::Closest, -1)]
    #[case(3, 2, RoundingMode::Closest, 2)]
    #[case(3, 2, RoundingMode::Floor, 1)]
    #[case(3, 2, RoundingMode::Ceil, 2)]
    #[case(-3, 2, RoundingMode::Floor, -2)]
    #[case(-3, 2, RoundingMode::Ceil, -1)]
    #[case(3, 2, RoundingMode::Off, 1)]
    #[case(-3, 2, RoundingMode::Off, -1)]
    #[case(3, 2, RoundingMode::Up, 2)]
    #[case(-3, 2, RoundingMode::Up, -2)]
    fn test_round(
        #[case] numer: i64,
        #[case] denom: i64,
        #[case] mode: RoundingMode,
        #[case] expected: i64,
    ) {
        let rational = Rational::new(numer.into(), denom.into());
        assert_eq!(BigInt::from(expected), rational.round(mode));
    }

    #[test]
    fn test_divrem() {
        let dividend = Rational::new(86401.into(), 1.into());
        let divisor = Rational::from_integer(2.into());
        let (q, r) = dividend.divrem(&divisor, RoundingMode::Floor).unwrap();
        assert_eq!(BigInt::from(43200), q);
        assert_eq!(Rational::from_integer(1.into()), r);
    }

    #[test]
    fn test_divrem_by_zero() {
        let dividend = Rational::from_integer(1.into());
        let divisor = Rational::zero();
        assert_eq!(
            Err(RationalError::DivisionByZero),
            dividend.divrem(&divisor, RoundingMode::Floor)
        );
    }
}
