//! Probability <-> log-odds ("weight") conversions.

use bigdecimal::{BigDecimal, ToPrimitive};
use mln_core::{Error, Result};

/// Log-odds of `probability`: `-ln((1/p) - 1)`.
///
/// The input is intended to lie in the open interval (0, 1) but is not
/// range-checked; out-of-domain values propagate through IEEE-754 special
/// values instead of signaling an error:
/// - `logit(1.0)` is `+inf` (`-ln(0)`)
/// - `logit(0.0)` is `-inf` (`1.0/0.0` is `+inf`)
/// - `logit(-0.0)` is NaN (`1.0/-0.0` is `-inf`, `ln` of a negative is NaN)
/// - any `p < 0` or `p > 1` is NaN
#[inline]
pub fn logit(probability: f64) -> f64 {
    -((1.0 / probability) - 1.0).ln()
}

/// Log-odds of an arbitrary-precision decimal `probability`.
///
/// The decimal input is downcast to its nearest `f64` before the
/// transcendental step and the `f64` result is re-wrapped as an exact
/// `BigDecimal` (binary expansion). The extra precision of the input is
/// therefore *not* carried through: this overload exists for callers that
/// hold weights as decimals, not for higher-precision arithmetic.
///
/// Because a `BigDecimal` cannot hold `inf` or NaN, inputs outside (0, 1)
/// return [`Error::Computation`] where [`logit`] would return a special
/// value.
pub fn logit_decimal(probability: &BigDecimal) -> Result<BigDecimal> {
    let p = probability.to_f64().unwrap_or(f64::NAN);
    let weight = logit(p);
    BigDecimal::try_from(weight).map_err(|_| {
        Error::Computation(format!("logit of {} is not finite: {}", probability, weight))
    })
}

/// Probability recovered from a log-odds `weight`: `1 / (1 + exp(-w))`.
///
/// Total over the whole `f64` line: finite weights land strictly inside
/// (0, 1), `+inf` yields `1.0`, `-inf` yields `0.0`, NaN propagates.
#[inline]
pub fn logistic(weight: f64) -> f64 {
    1.0 / (1.0 + (-weight).exp())
}
