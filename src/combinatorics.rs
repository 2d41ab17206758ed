use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// How 64-bit integer overflow is treated while computing factorials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Arithmetic {
    /// Two's complement wraparound. Large factorials silently lose their value.
    #[default]
    Wrapping,
    /// Overflow is reported as [`Error::ArithmeticOverflow`].
    Checked,
}

impl Arithmetic {
    fn mul(self, operation: &'static str, argument: i64, a: i64, b: i64) -> Result<i64> {
        match self {
            Arithmetic::Wrapping => Ok(a.wrapping_mul(b)),
            Arithmetic::Checked => a
                .checked_mul(b)
                .ok_or(Error::ArithmeticOverflow {
                    operation,
                    argument,
                }),
        }
    }
}

impl FromStr for Arithmetic {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wrapping" => Ok(Arithmetic::Wrapping),
            "checked" => Ok(Arithmetic::Checked),
            _ => Err(format!("unknown arithmetic mode {s:?}")),
        }
    }
}

impl fmt::Display for Arithmetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arithmetic::Wrapping => f.write_str("wrapping"),
            Arithmetic::Checked => f.write_str("checked"),
        }
    }
}

/// `n!`, computed by repeated multiplication.
pub fn factorial(n: i64, arithmetic: Arithmetic) -> Result<i64> {
    if n < 0 {
        return Err(Error::NegativeFactorialArgument(n));
    }

    let mut product: i64 = 1;
    for k in 2..=n {
        product = arithmetic.mul("factorial", n, product, k)?;
    }
    Ok(product)
}

/// The number of ways to choose `r` items from a set of `n` when order does
/// not matter.
pub fn combination(n: i64, r: i64, arithmetic: Arithmetic) -> Result<i64> {
    if n < 0 {
        return Err(Error::NegativeCombinationArgument {
            name: "n",
            value: n,
        });
    }
    if r < 0 {
        return Err(Error::NegativeCombinationArgument {
            name: "r",
            value: r,
        });
    }

    if r == 0 || r == n {
        return Ok(1);
    }
    if r > n {
        return Ok(0);
    }

    let n_fac = factorial(n, arithmetic)?;
    let r_fac = factorial(r, arithmetic)?;
    let n_less_r_fac = factorial(n - r, arithmetic)?;
    let denominator = arithmetic.mul("combination", n, r_fac, n_less_r_fac)?;

    if denominator == 0 {
        return Err(Error::DegenerateDenominator { n, r });
    }
    Ok(n_fac.wrapping_div(denominator))
}
