//! Parsing of fraction literals.
//!
//! The grammar is `<int>` or `<int>/<int>`, where `<int>` is an optional
//! leading `-` followed by one or more ASCII decimal digits. Whitespace,
//! a leading `+` and digit separators are rejected. A zero denominator is
//! accepted here and surfaces later as [`RationalError::DivisionByZero`].

use core::str::FromStr;
use num_bigint::BigInt;
use num_traits::One;

use crate::error::{ParseErrorKind, Result, RationalError};
use crate::Rational;

impl Rational {
    /// Parse `"n"` or `"n/d"` into an unreduced rational.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::Rational;
    ///
    /// let r = Rational::parse("117/1098").unwrap();
    /// assert_eq!(r.to_string(), "13/122");
    ///
    /// assert!(Rational::parse("1/2/3").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(RationalError::parse(text, ParseErrorKind::Empty));
        }

        let segments: Vec<&str> = text.split('/').collect();
        match segments.as_slice() {
            [numer] => Ok(Rational::new_raw(parse_integer(text, numer)?, BigInt::one())),
            [numer, denom] => Ok(Rational::new_raw(
                parse_integer(text, numer)?,
                parse_integer(text, denom)?,
            )),
            _ => Err(RationalError::parse(
                text,
                ParseErrorKind::TooManySegments(segments.len()),
            )),
        }
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        Rational::parse(s)
    }
}

/// Parse one signed decimal segment of `input`.
fn parse_integer(input: &str, segment: &str) -> Result<BigInt> {
    let invalid = || RationalError::parse(input, ParseErrorKind::InvalidInteger(segment.to_owned()));

    let digits = segment.strip_prefix('-').unwrap_or(segment);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    segment.parse::<BigInt>().map_err(|_| invalid())
}
