use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};

const SIGN_MASK: u64 = 1 << 63;
const EXPONENT_SHIFT: u32 = 52;
const EXPONENT_MASK: u64 = 0x7ff << EXPONENT_SHIFT;
const MANTISSA_MASK: u64 = (1 << EXPONENT_SHIFT) - 1;

/// The three bit fields of a binary64 value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FloatParts {
    pub sign: bool,
    /// Biased 11-bit exponent.
    pub exponent: u16,
    /// 52-bit fraction, without the implicit leading bit.
    pub mantissa: u64,
}

impl FloatParts {
    pub fn decompose(x: f64) -> Self {
        let bits = x.to_bits();
        Self {
            sign: bits & SIGN_MASK != 0,
            exponent: ((bits & EXPONENT_MASK) >> EXPONENT_SHIFT) as u16,
            mantissa: bits & MANTISSA_MASK,
        }
    }

    /// Reassembles the value. Bits outside each field's width are dropped.
    pub fn compose(self) -> f64 {
        let sign = if self.sign { SIGN_MASK } else { 0 };
        let exponent = (u64::from(self.exponent) << EXPONENT_SHIFT) & EXPONENT_MASK;
        f64::from_bits(sign | exponent | (self.mantissa & MANTISSA_MASK))
    }
}

/// True only for NaN, the one value that is unequal to itself.
#[allow(clippy::eq_op)]
pub fn is_nan(x: f64) -> bool {
    x != x
}

/// True when truncation toward zero loses nothing. Magnitudes beyond the
/// `i64` range do not convert and are reported as non-integers.
pub fn is_integer(x: f64) -> bool {
    match x.to_i64() {
        Some(truncated) => x - truncated as f64 == 0.0,
        None => false,
    }
}

pub fn is_odd_integer(x: f64) -> bool {
    is_integer(x) && x.to_i64().is_some_and(|n| n % 2 != 0)
}

pub fn is_even_integer(x: f64) -> bool {
    is_integer(x) && x.to_i64().is_some_and(|n| n % 2 == 0)
}

pub fn is_infinite(x: f64) -> bool {
    x == f64::INFINITY || x == f64::NEG_INFINITY
}

/// False exactly for the two infinities. NaN counts as finite here.
pub fn is_finite(x: f64) -> bool {
    !is_infinite(x)
}

/// Reads the sign bit directly, which is the only way to tell `-0.0` from
/// `+0.0` or to see the sign of a NaN.
pub fn sign_bit(x: f64) -> bool {
    FloatParts::decompose(x).sign
}
