use super::float::fabs;
use super::Elementary;
use crate::classify::{
    is_even_integer, is_finite, is_infinite, is_integer, is_nan, is_odd_integer, sign_bit,
};
use std::f64::consts::E;

/// Beyond this magnitude `exp` saturates to `+inf` without summing.
const EXP_SATURATION: f64 = 300.0;
/// Below this magnitude `exp` returns exactly 1.
const EXP_FLUSH: f64 = 2.0e-300;

impl Elementary {
    /// Taylor series around zero with guards for the special values and
    /// for arguments too large or too small to be worth summing.
    ///
    /// Any argument above 300 in magnitude saturates to `+inf`, negative ones
    /// included. Negative arguments sum the series at `-x` and take the
    /// reciprocal, since the alternating series cancels catastrophically.
    pub fn exp(&self, x: f64) -> f64 {
        if x == 0.0 {
            1.0
        } else if x == f64::NEG_INFINITY {
            0.0
        } else if x == f64::INFINITY {
            f64::INFINITY
        } else if is_nan(x) {
            f64::NAN
        } else if fabs(x) > EXP_SATURATION {
            f64::INFINITY
        } else if fabs(x) < EXP_FLUSH {
            1.0
        } else if x < 0.0 {
            1.0 / self.sum_series("exp", 1.0, |term, i| term * -x / i)
        } else {
            self.sum_series("exp", 1.0, |term, i| term * x / i)
        }
    }

    /// Natural logarithm.
    ///
    /// The argument is divided by `e` until it drops below `e`, then
    /// `exp(y) = x` is solved with a fixed number of Newton steps. Far from
    /// the root each step moves `y` by about 2, so with the default 100 steps
    /// arguments below about `1e-85` are not reached.
    pub fn log(&self, x: f64) -> f64 {
        if x < 0.0 || is_nan(x) {
            return f64::NAN;
        } else if x == 1.0 {
            return 0.0;
        } else if x == 0.0 {
            return f64::NEG_INFINITY;
        } else if x == f64::INFINITY {
            return f64::INFINITY;
        }

        let mut reduced = x;
        let mut divisions = 0.0;
        while reduced >= E {
            reduced /= E;
            divisions += 1.0;
        }

        let mut y = 0.0;
        for _ in 0..self.settings.newton_steps {
            let ey = self.exp(y);
            y += 2.0 * (reduced - ey) / (reduced + ey);
        }
        y + divisions
    }

    /// `base` raised to `exponent`.
    ///
    /// Special cases are checked in a fixed order and the first match wins;
    /// see the comments on each arm. Everything else is computed as
    /// `exp(exponent * log(|base|))` with the sign restored for negative
    /// bases raised to odd integers. That product inherits the saturation of
    /// [`Elementary::exp`]: once it exceeds 300 in magnitude the result is
    /// `+inf` either way, so `pow(2.0, -500.0)` is `+inf` rather than a tiny
    /// positive number.
    pub fn pow(&self, base: f64, exponent: f64) -> f64 {
        let zero_base = base == 0.0;
        let odd_exponent = is_odd_integer(exponent);
        let even_or_fractional = !is_integer(exponent) || is_even_integer(exponent);

        // pow(+0, negative odd) and pow(-0, negative odd)
        if zero_base && exponent < 0.0 && odd_exponent {
            if sign_bit(base) {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        }
        // pow(±0, negative finite even or fractional)
        else if zero_base && exponent < 0.0 && is_finite(exponent) && even_or_fractional {
            f64::INFINITY
        }
        // pow(±0, -inf)
        else if zero_base && exponent == f64::NEG_INFINITY {
            f64::INFINITY
        }
        // pow(±0, positive odd) keeps the sign of the zero
        else if zero_base && exponent > 0.0 && odd_exponent {
            base
        }
        // pow(±0, positive even or fractional)
        else if zero_base && exponent > 0.0 && even_or_fractional {
            0.0
        } else if base == -1.0 && is_infinite(exponent) {
            1.0
        }
        // 1 to anything, NaN included
        else if base == 1.0 {
            1.0
        }
        // anything to ±0, NaN included
        else if exponent == 0.0 {
            1.0
        } else if is_finite(base) && base < 0.0 && is_finite(exponent) && !is_integer(exponent) {
            f64::NAN
        } else if exponent == f64::NEG_INFINITY && fabs(base) < 1.0 {
            f64::INFINITY
        } else if exponent == f64::NEG_INFINITY && fabs(base) > 1.0 {
            0.0
        } else if exponent == f64::INFINITY && fabs(base) < 1.0 {
            0.0
        } else if exponent == f64::INFINITY && fabs(base) > 1.0 {
            f64::INFINITY
        } else if base == f64::NEG_INFINITY && exponent < 0.0 {
            if odd_exponent {
                -0.0
            } else {
                0.0
            }
        } else if base == f64::NEG_INFINITY && exponent > 0.0 {
            if odd_exponent {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }
        } else if base == f64::INFINITY && exponent < 0.0 {
            0.0
        } else if base == f64::INFINITY && exponent > 0.0 {
            f64::INFINITY
        } else if is_nan(base) || is_nan(exponent) {
            f64::NAN
        } else if base < 0.0 && !is_integer(exponent) {
            f64::NAN
        } else {
            let magnitude = self.exp(exponent * self.log(fabs(base)));
            if base < 0.0 && odd_exponent {
                -magnitude
            } else {
                magnitude
            }
        }
    }

    /// Square root, computed as `pow(x, 0.5)` away from the special values.
    pub fn sqrt(&self, x: f64) -> f64 {
        if is_nan(x) || x < 0.0 {
            f64::NAN
        } else if x == 0.0 || x == f64::INFINITY {
            x
        } else {
            self.pow(x, 0.5)
        }
    }
}

pub fn exp(x: f64) -> f64 {
    Elementary::default().exp(x)
}

pub fn log(x: f64) -> f64 {
    Elementary::default().log(x)
}

pub fn pow(base: f64, exponent: f64) -> f64 {
    Elementary::default().pow(base, exponent)
}

pub fn sqrt(x: f64) -> f64 {
    Elementary::default().sqrt(x)
}
