use super::float::fabs;
use super::Elementary;
use crate::classify::{is_infinite, is_nan};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

impl Elementary {
    pub fn sin(&self, x: f64) -> f64 {
        if x == 0.0 {
            return x;
        } else if is_nan(x) || is_infinite(x) {
            return f64::NAN;
        }
        let x = self.reduce_period(x);
        self.sum_series("sin", x, |term, i| -term * x * x / (2.0 * i * (2.0 * i + 1.0)))
    }

    pub fn cos(&self, x: f64) -> f64 {
        if is_nan(x) || is_infinite(x) {
            return f64::NAN;
        } else if x == 0.0 {
            return 1.0;
        }
        let x = self.reduce_period(x);
        self.sum_series("cos", 1.0, |term, i| {
            -term * x * x / ((2.0 * i - 1.0) * (2.0 * i))
        })
    }

    /// `sin(x) / cos(x)`. Near the poles the quotient is whatever the
    /// division produces; there is no pole detection.
    pub fn tan(&self, x: f64) -> f64 {
        if is_nan(x) || is_infinite(x) {
            f64::NAN
        } else if x == 0.0 {
            x
        } else {
            self.sin(x) / self.cos(x)
        }
    }

    pub fn asin(&self, x: f64) -> f64 {
        let tolerance = self.settings.tolerance;
        if is_nan(x) || x > 1.0 || x < -1.0 {
            f64::NAN
        } else if x >= 1.0 - tolerance {
            FRAC_PI_2
        } else if x <= -1.0 + tolerance {
            -FRAC_PI_2
        } else if x < 0.0 {
            -self.asin(-x)
        } else {
            self.atan(x / self.sqrt(1.0 - x * x))
        }
    }

    pub fn acos(&self, x: f64) -> f64 {
        if is_nan(x) {
            f64::NAN
        } else if x == 1.0 {
            0.0
        } else if x > 1.0 || x < -1.0 {
            f64::NAN
        } else {
            FRAC_PI_2 - self.asin(x)
        }
    }

    /// Arctangent. Arguments above 1 are folded through
    /// `atan(x) = pi/2 - atan(1/x)` so the series only sees `[0, 1)`. The
    /// series converges slowly as the argument approaches 1.
    pub fn atan(&self, x: f64) -> f64 {
        if is_nan(x) {
            f64::NAN
        } else if x < 0.0 {
            -self.atan(-x)
        } else if x > 1.0 {
            FRAC_PI_2 - self.atan(1.0 / x)
        } else if x == 1.0 {
            FRAC_PI_4
        } else {
            self.sum_series("atan", x, |term, i| {
                -term * x * x * (2.0 * i - 1.0) / (2.0 * i + 1.0)
            })
        }
    }

    /// Brings `x` into `[-2pi, 2pi]` before a series is summed.
    fn reduce_period(&self, x: f64) -> f64 {
        if fabs(x) > TAU {
            self.fmod(x, TAU)
        } else {
            x
        }
    }
}

pub fn sin(x: f64) -> f64 {
    Elementary::default().sin(x)
}

pub fn cos(x: f64) -> f64 {
    Elementary::default().cos(x)
}

pub fn tan(x: f64) -> f64 {
    Elementary::default().tan(x)
}

pub fn asin(x: f64) -> f64 {
    Elementary::default().asin(x)
}

pub fn acos(x: f64) -> f64 {
    Elementary::default().acos(x)
}

pub fn atan(x: f64) -> f64 {
    Elementary::default().atan(x)
}
