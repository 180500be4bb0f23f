//! Exact rational-number arithmetic over arbitrary-precision integers.
//!
//! This library provides [`Rational`], a fraction of two [`BigInt`] values
//! with the standard arithmetic operators, exact comparison, parsing from
//! text and string rendering in lowest terms.
//!
//! # Features
//!
//! - **Arbitrary precision**: numerator and denominator are unbounded
//! - **Deferred reduction**: arithmetic never computes a GCD
//! - **Exact ordering**: comparison cross-multiplies, no floating point
//! - **Flexible inputs**: any [`Integral`] type, including fixed-width
//!   crypto-bigint integers, converts into a rational
//!
//! # Design Philosophy
//!
//! Construction and arithmetic store their results **unreduced**. A value
//! is brought to canonical form (lowest terms, positive denominator) only
//! at the boundaries that need it: [`Rational::reduce`], equality,
//! comparison and display. Chained operations therefore never pay for a
//! GCD, at the price of intermediate results carrying large unreduced
//! parts.
//!
//! A zero denominator is never rejected eagerly by [`Rational::new_raw`]
//! or by division. Such a value is *undefined*: operations that divide by
//! the denominator fail with [`RationalError::DivisionByZero`], it compares
//! unequal to everything (itself included) and it renders verbatim as
//! `"n/0"`.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use big_ratio::Rational;
//!
//! let half = Rational::div_by(1, 2).unwrap();
//! let third = Rational::div_by(1, 3).unwrap();
//!
//! // Operations return unreduced results
//! let product = &half * &third;
//! assert_eq!(product, Rational::div_by(1, 6).unwrap());
//!
//! let sum = &half + &third;
//! assert_eq!(sum.to_string(), "5/6");
//! assert!(half < Rational::div_by(2, 3).unwrap());
//! ```
//!
//! ## Ranges
//!
//! ```
//! use big_ratio::Rational;
//!
//! let third = Rational::div_by(1, 3).unwrap();
//! let two_thirds = Rational::div_by(2, 3).unwrap();
//! let range = third.range_to(two_thirds);
//!
//! assert!(Rational::div_by(1, 2).unwrap().in_range(&range));
//! ```
//!
//! ## Parsing
//!
//! ```
//! use big_ratio::Rational;
//!
//! let r: Rational = "117/1098".parse().unwrap();
//! assert_eq!(r.to_string(), "13/122");
//! ```

pub mod error;
pub mod integral;
mod parse;

pub use crate::error::{ParseErrorKind, RationalError, Result};
pub use crate::integral::{gcd, Integral};
pub use num_bigint::{BigInt, BigUint};

use core::cmp::Ordering;
use core::fmt;
use core::ops::RangeInclusive;
use num_bigint::Sign;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// A rational number stored as a numerator/denominator pair.
///
/// # Invariants
///
/// - Values are immutable; every operation returns a new `Rational`
/// - Values are not automatically reduced (call [`reduce`](Rational::reduce)
///   explicitly)
/// - The sign may live on either part until reduction folds it into the
///   numerator
/// - A zero denominator is representable and marks the value as undefined
///
/// # Examples
///
/// ```
/// use big_ratio::{BigInt, Rational};
///
/// let r = Rational::new_raw(BigInt::from(2), BigInt::from(-4));
/// assert_eq!(r.denom(), &BigInt::from(-4));
/// assert_eq!(r.to_string(), "-1/2");
/// ```
#[derive(Clone, Debug)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a rational from the pair verbatim.
    ///
    /// Neither reduction nor a zero-denominator check happens here. A zero
    /// denominator surfaces later as [`RationalError::DivisionByZero`].
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::{BigInt, Rational};
    ///
    /// let r = Rational::new_raw(BigInt::from(4), BigInt::from(6));
    /// assert_eq!(r.numer(), &BigInt::from(4)); // Not reduced
    /// assert_eq!(r.denom(), &BigInt::from(6));
    /// ```
    #[inline]
    pub fn new_raw(numer: BigInt, denom: BigInt) -> Self {
        Self { numer, denom }
    }

    /// Create a rational in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if `denom` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::{BigInt, Rational};
    ///
    /// let r = Rational::new(BigInt::from(4), BigInt::from(-6)).unwrap();
    /// assert_eq!(r.numer(), &BigInt::from(-2));
    /// assert_eq!(r.denom(), &BigInt::from(3));
    /// ```
    pub fn new(numer: BigInt, denom: BigInt) -> Result<Self> {
        Self::new_raw(numer, denom).reduce()
    }

    /// Create `numer / denom` from any pair of integral values.
    ///
    /// Both arguments are converted to [`BigInt`] and stored unreduced.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::InvalidArgument`] if `denom` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::Rational;
    ///
    /// let a = Rational::div_by(2_000_000_000i64, 4_000_000_000i64).unwrap();
    /// assert_eq!(a, Rational::div_by(1, 2).unwrap());
    ///
    /// assert!(Rational::div_by(1, 0u8).is_err());
    /// ```
    pub fn div_by<N: Integral, D: Integral>(numer: N, denom: D) -> Result<Self> {
        if denom.is_zero_value() {
            return Err(RationalError::InvalidArgument(format!(
                "denominator of {:?} / {:?} is zero",
                numer, denom
            )));
        }
        Ok(Self::new_raw(numer.to_big_int(), denom.to_big_int()))
    }

    /// Create the integer `n` as `n/1`.
    #[inline]
    pub fn from_integer<N: Integral>(n: N) -> Self {
        Self::new_raw(n.to_big_int(), BigInt::one())
    }

    /// Create a rational representing 0.
    #[inline]
    pub fn zero() -> Self {
        Self::new_raw(BigInt::zero(), BigInt::one())
    }

    /// Create a rational representing 1.
    #[inline]
    pub fn one() -> Self {
        Self::new_raw(BigInt::one(), BigInt::one())
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// The stored numerator, as constructed.
    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    /// The stored denominator, as constructed.
    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Consume the value, returning `(numer, denom)`.
    #[inline]
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numer, self.denom)
    }

    // ========================================================================
    // PREDICATES
    // ========================================================================

    /// Check that the denominator is non-zero.
    #[inline]
    pub fn is_defined(&self) -> bool {
        !self.denom.is_zero()
    }

    /// Check if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.is_defined() && self.numer.is_zero()
    }

    /// Check if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign() == Sign::Plus
    }

    /// Check if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign() == Sign::Minus
    }

    /// Check if the canonical form has denominator 1.
    pub fn is_integer(&self) -> bool {
        self.is_defined() && (&self.numer % &self.denom).is_zero()
    }

    /// Check if the stored pair already is the canonical form.
    pub fn is_reduced(&self) -> bool {
        self.denom.is_positive() && gcd(&self.numer, &self.denom).is_one()
    }

    /// Sign of the represented value; `NoSign` for zero and undefined values.
    fn sign(&self) -> Sign {
        match (self.numer.sign(), self.denom.sign()) {
            (Sign::NoSign, _) | (_, Sign::NoSign) => Sign::NoSign,
            (n, d) if n == d => Sign::Plus,
            _ => Sign::Minus,
        }
    }

    // ========================================================================
    // REDUCTION
    // ========================================================================

    /// Reduce to canonical form: lowest terms with a positive denominator.
    ///
    /// The receiver is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::{BigInt, Rational};
    ///
    /// let r = Rational::new_raw(BigInt::from(6), BigInt::from(-8));
    /// let reduced = r.reduce().unwrap();
    /// assert_eq!(reduced.numer(), &BigInt::from(-3));
    /// assert_eq!(reduced.denom(), &BigInt::from(4));
    /// ```
    pub fn reduce(&self) -> Result<Self> {
        self.check_denom("reduce")?;

        let g = gcd(&self.numer, &self.denom);
        let mut numer = &self.numer / &g;
        let mut denom = &self.denom / &g;

        if denom.is_negative() {
            numer = -numer;
            denom = -denom;
        }

        Ok(Self { numer, denom })
    }

    fn check_denom(&self, op: &'static str) -> Result<()> {
        if self.denom.is_zero() {
            tracing::debug!(op, numer = %self.numer, "zero denominator");
            return Err(RationalError::DivisionByZero);
        }
        Ok(())
    }

    // ========================================================================
    // FLOAT CONVERSION
    // ========================================================================

    /// Approximate conversion to f64.
    ///
    /// Each part is truncated to its top 64 bits before dividing, so values
    /// whose parts exceed the f64 range still produce a finite estimate.
    /// An undefined value yields `±inf` or `NaN`, as float division would.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::Rational;
    ///
    /// let r = Rational::div_by(-3, 4).unwrap();
    /// assert_eq!(r.to_f64_approx(), -0.75);
    /// ```
    pub fn to_f64_approx(&self) -> f64 {
        if self.denom.is_zero() {
            return self.numer.to_f64().unwrap_or(f64::NAN) / 0.0;
        }
        if self.numer.is_zero() {
            return 0.0;
        }

        let n_shift = self.numer.bits().saturating_sub(64);
        let d_shift = self.denom.bits().saturating_sub(64);

        let n_approx = (self.numer.magnitude() >> n_shift).to_f64().unwrap_or(f64::NAN);
        let d_approx = (self.denom.magnitude() >> d_shift).to_f64().unwrap_or(f64::NAN);

        let exp_diff = n_shift as i64 - d_shift as i64;
        let exp_diff = i32::try_from(exp_diff).unwrap_or(i32::MAX * exp_diff.signum() as i32);

        // Scale in two steps so a gap of ±1024 bits does not saturate powi
        // before the mantissa ratio pulls the value back into range.
        let half = exp_diff / 2;
        let val = n_approx / d_approx * 2f64.powi(half) * 2f64.powi(exp_diff - half);

        if self.is_negative() {
            -val
        } else {
            val
        }
    }

    // ========================================================================
    // ARITHMETIC
    // ========================================================================

    /// Add two rationals: `(n1·d2 + n2·d1) / (d1·d2)`, unreduced.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn add(&self, other: &Self) -> Self {
        Self {
            numer: &self.numer * &other.denom + &other.numer * &self.denom,
            denom: &self.denom * &other.denom,
        }
    }

    /// Subtract: `(n1·d2 − n2·d1) / (d1·d2)`, unreduced.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            numer: &self.numer * &other.denom - &other.numer * &self.denom,
            denom: &self.denom * &other.denom,
        }
    }

    /// Multiply: `(n1·n2) / (d1·d2)`, unreduced.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::{BigInt, Rational};
    ///
    /// let a = Rational::div_by(2, 3).unwrap();
    /// let b = Rational::div_by(3, 4).unwrap();
    /// let product = a.mul(&b);
    /// assert_eq!(product.numer(), &BigInt::from(6)); // 6/12, unreduced
    /// assert_eq!(product.denom(), &BigInt::from(12));
    /// ```
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            numer: &self.numer * &other.numer,
            denom: &self.denom * &other.denom,
        }
    }

    /// Divide: `(n1·d2) / (d1·n2)`, unreduced.
    ///
    /// Dividing by zero does not fail here; the result has a zero
    /// denominator and fails at the first operation that needs it.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn div(&self, other: &Self) -> Self {
        Self {
            numer: &self.numer * &other.denom,
            denom: &self.denom * &other.numer,
        }
    }

    /// Negate: `−n / d`.
    #[allow(clippy::should_implement_trait)]
    #[inline]
    pub fn neg(&self) -> Self {
        Self {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }

    /// Get the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.abs(),
        }
    }

    /// Get the reciprocal (1/x).
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the value is zero or
    /// undefined.
    pub fn recip(&self) -> Result<Self> {
        self.check_denom("recip")?;
        if self.numer.is_zero() {
            tracing::debug!("reciprocal of zero");
            return Err(RationalError::DivisionByZero);
        }
        Ok(Self {
            numer: self.denom.clone(),
            denom: self.numer.clone(),
        })
    }

    // ========================================================================
    // COMPARISON
    // ========================================================================

    /// Exact three-way comparison.
    ///
    /// Compares `n1·d2` against `n2·d1`, flipping the result when exactly one
    /// denominator is negative. No floating-point approximation is involved.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if either denominator is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use big_ratio::Rational;
    /// use std::cmp::Ordering;
    ///
    /// let a = Rational::div_by(1, 2).unwrap();
    /// let b = Rational::div_by(-2, -3).unwrap();
    /// assert_eq!(a.compare_to(&b).unwrap(), Ordering::Less);
    /// ```
    pub fn compare_to(&self, other: &Self) -> Result<Ordering> {
        self.check_denom("compare")?;
        other.check_denom("compare")?;

        let lhs = &self.numer * &other.denom;
        let rhs = &other.numer * &self.denom;
        let ord = lhs.cmp(&rhs);

        if self.denom.sign() == other.denom.sign() {
            Ok(ord)
        } else {
            Ok(ord.reverse())
        }
    }

    /// Build the closed range `self..=high`.
    ///
    /// `self <= high` is not enforced; an inverted range contains nothing.
    #[inline]
    pub fn range_to(self, high: Self) -> RangeInclusive<Self> {
        self..=high
    }

    /// Check `low <= self && self <= high` for the range's bounds.
    ///
    /// Undefined values are never contained, nor is anything contained in
    /// a range with an undefined bound.
    #[inline]
    pub fn in_range(&self, range: &RangeInclusive<Self>) -> bool {
        range.contains(self)
    }

    // ========================================================================
    // FORMATTING
    // ========================================================================

    /// Render the canonical form, failing on an undefined value instead of
    /// rendering it verbatim like [`Display`](fmt::Display) does.
    ///
    /// # Errors
    ///
    /// Returns [`RationalError::DivisionByZero`] if the denominator is zero.
    pub fn try_to_string(&self) -> Result<String> {
        let reduced = self.reduce()?;
        Ok(reduced.to_string())
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

impl Default for Rational {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Rational {
    /// Canonical form: `"n"` when the reduced denominator is 1, otherwise
    /// `"n/d"`. An undefined value prints its stored pair, e.g. `"3/0"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_defined() {
            return write!(f, "{}/{}", self.numer, self.denom);
        }
        match self.reduce() {
            Ok(r) if r.denom.is_one() => write!(f, "{}", r.numer),
            Ok(r) => write!(f, "{}/{}", r.numer, r.denom),
            Err(_) => write!(f, "{}/{}", self.numer, self.denom),
        }
    }
}

use core::ops::{Add, Div, Mul, Neg, Sub};

/// Forward a binary operator to the inherent method for owned and borrowed
/// operands.
macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, other: Rational) -> Rational {
                Rational::$method(&self, &other)
            }
        }

        impl $trait for &Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, other: &Rational) -> Rational {
                Rational::$method(self, other)
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, other: &Rational) -> Rational {
                Rational::$method(&self, other)
            }
        }

        impl $trait<Rational> for &Rational {
            type Output = Rational;
            #[inline]
            fn $method(self, other: Rational) -> Rational {
                Rational::$method(self, &other)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Neg for Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        Rational {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Neg for &Rational {
    type Output = Rational;
    #[inline]
    fn neg(self) -> Rational {
        Rational::neg(self)
    }
}

impl PartialEq for Rational {
    /// Equal iff the canonical forms coincide. For non-zero denominators
    /// that is exactly `n1·d2 == n2·d1`.
    fn eq(&self, other: &Self) -> bool {
        if !self.is_defined() || !other.is_defined() {
            return false;
        }
        &self.numer * &other.denom == &other.numer * &self.denom
    }
}

impl PartialOrd for Rational {
    /// `None` when either side is undefined.
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare_to(other).ok()
    }
}
