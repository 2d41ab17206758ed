//! Validation of the three positional arguments `n p x`.
//!
//! Arguments are validated in order, so a bad `n` is reported before anything
//! about `p` or `x` is looked at.

use crate::binomial::{Binomial, check_probability, check_trials};
use crate::combinatorics::Arithmetic;
use crate::error::{Error, Result};
use crate::interval::Interval;

/// Validated inputs for a single run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Query {
    pub model: Binomial,
    pub successes: Interval,
}

impl Query {
    /// P(X in successes), computing coefficients under `arithmetic`.
    pub fn probability(&self, arithmetic: Arithmetic) -> Result<f64> {
        self.model
            .with_arithmetic(arithmetic)
            .cumulative(&self.successes)
    }
}

pub fn validate_n(arg: Option<&str>) -> Result<i64> {
    let arg = arg.ok_or(Error::ArgumentMissing { name: "n" })?;
    let n = arg
        .parse::<i64>()
        .map_err(|err| Error::malformed_int("n", arg, err))?;
    check_trials(n)
}

pub fn validate_p(arg: Option<&str>) -> Result<f64> {
    let arg = arg.ok_or(Error::ArgumentMissing { name: "p" })?;
    let p = arg
        .parse::<f64>()
        .map_err(|err| Error::malformed_float("p", arg, err))?;
    check_probability(p)
}

pub fn validate_x(arg: Option<&str>) -> Result<Interval> {
    arg.ok_or(Error::ArgumentMissing { name: "x" })?.parse()
}

/// Validate `n`, `p` and `x`, stopping at the first failure.
pub fn parse_query(n: Option<&str>, p: Option<&str>, x: Option<&str>) -> Result<Query> {
    let n = validate_n(n)?;
    let p = validate_p(p)?;
    let successes = validate_x(x)?;

    Ok(Query {
        model: Binomial::unchecked(n, p),
        successes,
    })
}
