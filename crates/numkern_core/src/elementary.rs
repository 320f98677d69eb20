mod exp;
mod float;
mod trig;

use serde::{Deserialize, Serialize};

pub use exp::{exp, log, pow, sqrt};
pub use float::{abs, ceil, fabs, floor, fmod};
pub use trig::{acos, asin, atan, cos, sin, tan};

/// Convergence tolerance shared by every series and Newton iteration.
pub const SERIES_EPSILON: f64 = 1e-17;

/// Iteration limits for the elementary functions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesSettings {
    /// A series stops once its latest term is no larger than this.
    pub tolerance: f64,
    /// Upper bound on the number of series terms. When reached, the partial
    /// sum is returned and a warning is logged.
    pub max_terms: usize,
    /// Fixed number of Newton steps used by `log`.
    pub newton_steps: usize,
    /// Upper bound on the subtractions performed by `fmod`. When reached,
    /// `fmod` returns NaN.
    pub max_reductions: usize,
}

impl Default for SeriesSettings {
    fn default() -> Self {
        Self {
            tolerance: SERIES_EPSILON,
            max_terms: 1 << 24,
            newton_steps: 100,
            max_reductions: 1 << 24,
        }
    }
}

/// Evaluates the elementary functions under a fixed set of [`SeriesSettings`].
///
/// Nothing here panics or returns an error: domain and range problems come
/// back as NaN or a signed infinity. The free functions evaluate with
/// [`SeriesSettings::default`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Elementary {
    settings: SeriesSettings,
}

impl Elementary {
    pub fn new(settings: SeriesSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SeriesSettings {
        &self.settings
    }

    /// Sums `first + t1 + t2 + ...` where `next(t(i-1), i)` yields `t(i)`.
    fn sum_series(&self, function: &'static str, first: f64, next: impl Fn(f64, f64) -> f64) -> f64 {
        let mut sum = first;
        let mut term = first;
        let mut i = 1usize;
        while fabs(term) > self.settings.tolerance {
            if i > self.settings.max_terms {
                tracing::warn!(
                    function,
                    terms = self.settings.max_terms,
                    last_term = term,
                    "series did not converge, returning partial sum"
                );
                break;
            }
            term = next(term, i as f64);
            sum += term;
            i += 1;
        }
        sum
    }
}
