use log::{debug, trace};

use crate::combinatorics::{Arithmetic, combination};
use crate::error::{Error, Result};
use crate::interval::Interval;

/// A binomial distribution: the number of successes in `n` independent trials
/// that each succeed with probability `p`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Binomial {
    n: i64,
    p: f64,
    arithmetic: Arithmetic,
}

impl Binomial {
    /// Create a distribution, requiring `n > 0` and `0 <= p <= 1`.
    pub fn new(n: i64, p: f64) -> Result<Self> {
        Ok(Self::unchecked(check_trials(n)?, check_probability(p)?))
    }

    pub(crate) fn unchecked(n: i64, p: f64) -> Self {
        Self {
            n,
            p,
            arithmetic: Arithmetic::default(),
        }
    }

    /// Use the given overflow behavior for the binomial coefficients.
    pub fn with_arithmetic(self, arithmetic: Arithmetic) -> Self {
        Self { arithmetic, ..self }
    }

    pub fn trials(&self) -> i64 {
        self.n
    }

    pub fn success_probability(&self) -> f64 {
        self.p
    }

    pub fn arithmetic(&self) -> Arithmetic {
        self.arithmetic
    }

    /// P(X = x).
    pub fn pmf(&self, x: i64) -> Result<f64> {
        let count = combination(self.n, x, self.arithmetic)?;
        if count == 0 {
            // x > n: (1-p)^(n-x) is infinite when p == 1, and 0 * inf is NaN.
            return Ok(0.0);
        }
        let probability =
            count as f64 * self.p.powf(x as f64) * (1.0 - self.p).powf((self.n - x) as f64);
        trace!("P(X = {x}) = {probability}");
        Ok(probability)
    }

    /// P(X in interval), summed in ascending order of x.
    pub fn cumulative(&self, interval: &Interval) -> Result<f64> {
        let mut probability = 0.0;
        // Every x above n contributes exactly 0, so the walk stops at n.
        let last = self.n.max(0);
        for x in interval.points().take_while(|&x| x <= last) {
            probability += self.pmf(x)?;
        }
        debug!(
            "P(X in {interval}) = {probability} for n = {}, p = {}",
            self.n, self.p
        );
        Ok(probability)
    }
}

/// The probability of exactly `x` successes in `n` trials with success
/// probability `p`.
///
/// Unlike [`Binomial::new`], no range checks are made on `n` or `p`; only
/// the binomial coefficient can fail.
pub fn point_probability(n: i64, x: i64, p: f64) -> Result<f64> {
    Binomial::unchecked(n, p).pmf(x)
}

/// The probability that the number of successes falls in `interval`.
pub fn cumulative_probability(n: i64, p: f64, interval: &Interval) -> Result<f64> {
    Binomial::unchecked(n, p).cumulative(interval)
}

/// Require a positive number of trials.
pub fn check_trials(n: i64) -> Result<i64> {
    if n <= 0 {
        return Err(Error::ArgumentOutOfRange {
            name: "n",
            expected: "greater than 0",
            value: n.to_string(),
        });
    }
    Ok(n)
}

/// Require a probability in `[0, 1]`. NaN is out of range.
pub fn check_probability(p: f64) -> Result<f64> {
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::ArgumentOutOfRange {
            name: "p",
            expected: "in interval [0,1]",
            value: format!("{p:.6}"),
        });
    }
    Ok(p)
}
