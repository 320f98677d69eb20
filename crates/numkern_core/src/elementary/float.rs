use super::Elementary;
use crate::classify::{is_infinite, is_integer, is_nan};

/// Integer magnitudes with this many characters before the decimal point
/// (sign included) no longer get the `- 1` adjustment in `floor`.
const FLOOR_ADJUST_DIGITS: usize = 17;

/// Absolute value of an `i32`. `i32::MIN` has no positive counterpart and
/// is returned unchanged.
pub fn abs(x: i32) -> i32 {
    if x < 0 {
        x.wrapping_neg()
    } else {
        x
    }
}

/// Absolute value of an `f64`; `-0.0` becomes `+0.0` and NaN stays NaN.
pub fn fabs(x: f64) -> f64 {
    if is_nan(x) {
        f64::NAN
    } else if x == 0.0 {
        0.0
    } else if x < 0.0 {
        -x
    } else {
        x
    }
}

impl Elementary {
    /// Remainder of `x / y` with the sign of `x`.
    ///
    /// Computed by repeatedly stepping `x` toward zero by `|y|`, so the cost
    /// grows with `|x / y|`. Returns NaN once `max_reductions` steps have not
    /// been enough.
    pub fn fmod(&self, x: f64, y: f64) -> f64 {
        if x == 0.0 && y != 0.0 {
            0.0
        } else if y == 0.0 && !is_nan(x) {
            f64::NAN
        } else if is_infinite(x) && !is_nan(y) {
            f64::NAN
        } else if is_infinite(y) && !is_infinite(x) {
            x
        } else if is_nan(x) || is_nan(y) {
            f64::NAN
        } else {
            self.reduce(x, fabs(y))
        }
    }

    fn reduce(&self, x: f64, step: f64) -> f64 {
        let mut remainder = x;
        let mut steps = 0usize;
        while fabs(remainder) >= step {
            if steps == self.settings.max_reductions {
                tracing::warn!(x, step, steps, "fmod exceeded its reduction limit");
                return f64::NAN;
            }
            if remainder > 0.0 {
                remainder -= step;
            } else {
                remainder += step;
            }
            steps += 1;
        }
        remainder
    }
}

pub fn fmod(x: f64, y: f64) -> f64 {
    Elementary::default().fmod(x, y)
}

/// Smallest integer not less than `x`.
pub fn ceil(x: f64) -> f64 {
    if is_infinite(x) || x == 0.0 {
        x
    } else if is_nan(x) {
        f64::NAN
    } else {
        let whole = integer_part(x);
        if x > 0.0 && !is_integer(x) {
            whole + 1.0
        } else {
            whole
        }
    }
}

/// Largest integer not greater than `x`.
pub fn floor(x: f64) -> f64 {
    if is_infinite(x) || x == 0.0 {
        x
    } else if is_nan(x) {
        f64::NAN
    } else {
        let whole = integer_part(x);
        if x < 0.0 && !is_integer(x) && digits_before_point(x) < FLOOR_ADJUST_DIGITS {
            whole - 1.0
        } else {
            whole
        }
    }
}

/// Truncates toward zero by cutting the decimal rendering of `x` at the point.
fn integer_part(x: f64) -> f64 {
    let text = x.to_string();
    let whole = &text[..digits_before_point(x)];
    whole.parse().unwrap_or(x)
}

fn digits_before_point(x: f64) -> usize {
    let text = x.to_string();
    text.find('.').unwrap_or(text.len())
}
