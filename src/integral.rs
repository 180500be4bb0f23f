//! Integral inputs accepted by the [`Rational`] convenience constructors.
//!
//! Every type implementing [`Integral`] converts losslessly into the
//! arbitrary-precision [`BigInt`] that backs a rational. The trait is
//! implemented for:
//!
//! - all primitive signed and unsigned integers, `i8` through `u128`,
//!   `isize` and `usize`
//! - [`BigInt`] and [`BigUint`]
//! - with the `crypto-bigint` feature, the fixed-width unsigned integers
//!   `U64` through `U16384`
//!
//! # Example
//!
//! ```
//! use big_ratio::{BigInt, Integral};
//!
//! assert_eq!(4_000_000_000u64.to_big_int(), BigInt::from(4_000_000_000u64));
//! assert!(0i8.is_zero_value());
//! ```

use core::fmt::Debug;
use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::Zero;

use crate::Rational;

/// An integral value that can become a numerator or denominator.
pub trait Integral: Clone + Debug {
    /// Convert to the arbitrary-precision representation.
    fn to_big_int(&self) -> BigInt;

    /// Returns `true` if this value is zero.
    fn is_zero_value(&self) -> bool {
        self.to_big_int().is_zero()
    }
}

/// Greatest common divisor of `a` and `b`, always non-negative.
///
/// `gcd(0, d) == |d|`, `gcd(n, 0) == |n|` and `gcd(0, 0) == 0`.
///
/// ```
/// use big_ratio::{gcd, BigInt};
///
/// assert_eq!(gcd(&BigInt::from(117), &BigInt::from(1098)), BigInt::from(9));
/// assert_eq!(gcd(&BigInt::from(0), &BigInt::from(-4)), BigInt::from(4));
/// ```
#[inline]
pub fn gcd(a: &BigInt, b: &BigInt) -> BigInt {
    a.gcd(b)
}

/// Implement `Integral` and `From<_> for Rational` for primitive integers.
macro_rules! impl_integral_primitive {
    ($($type:ty),* $(,)?) => {
        $(
            impl Integral for $type {
                #[inline]
                fn to_big_int(&self) -> BigInt {
                    BigInt::from(*self)
                }

                #[inline]
                fn is_zero_value(&self) -> bool {
                    *self == 0
                }
            }

            impl From<$type> for Rational {
                #[inline]
                fn from(n: $type) -> Self {
                    Rational::from_integer(n)
                }
            }
        )*
    };
}

impl_integral_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Integral for BigInt {
    #[inline]
    fn to_big_int(&self) -> BigInt {
        self.clone()
    }

    #[inline]
    fn is_zero_value(&self) -> bool {
        self.is_zero()
    }
}

impl Integral for BigUint {
    #[inline]
    fn to_big_int(&self) -> BigInt {
        BigInt::from(self.clone())
    }

    #[inline]
    fn is_zero_value(&self) -> bool {
        self.is_zero()
    }
}

impl From<BigInt> for Rational {
    #[inline]
    fn from(n: BigInt) -> Self {
        Rational::new_raw(n, BigInt::from(1))
    }
}

impl From<BigUint> for Rational {
    #[inline]
    fn from(n: BigUint) -> Self {
        Rational::from(BigInt::from(n))
    }
}

#[cfg(feature = "crypto-bigint")]
mod fixed_width {
    use super::*;
    use crypto_bigint::{
        Encoding, U1024, U128, U1280, U1536, U16384, U1792, U192, U2048, U256, U3072, U320, U3584,
        U384, U4096, U4224, U4352, U448, U512, U576, U6144, U64, U640, U704, U768, U8192, U832,
        U896, U960,
    };
    use num_bigint::Sign;

    /// Implement `Integral` for crypto-bigint unsigned integers via their
    /// big-endian byte encoding.
    macro_rules! impl_integral_uint {
        ($($type:ty),* $(,)?) => {
            $(
                impl Integral for $type {
                    #[inline]
                    fn to_big_int(&self) -> BigInt {
                        BigInt::from_bytes_be(Sign::Plus, self.to_be_bytes().as_ref())
                    }

                    #[inline]
                    fn is_zero_value(&self) -> bool {
                        *self == <$type>::ZERO
                    }
                }

                impl From<$type> for Rational {
                    #[inline]
                    fn from(n: $type) -> Self {
                        Rational::from_integer(n)
                    }
                }
            )*
        };
    }

    impl_integral_uint!(
        U64, U128, U192, U256, U320, U384, U448, U512, U576, U640, U704, U768, U832, U896, U960,
        U1024, U1280, U1536, U1792, U2048, U3072, U3584, U4096, U4224, U4352, U6144, U8192,
        U16384,
    );
}
