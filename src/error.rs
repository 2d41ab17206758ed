use std::num::{ParseFloatError, ParseIntError};

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating input or computing probabilities
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("positional argument {name} not provided")]
    ArgumentMissing { name: &'static str },

    #[error("{name} must be {expected}; {value} provided")]
    ArgumentOutOfRange {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("invalid value {value:?} for {name}: {reason}")]
    ArgumentMalformed {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error(transparent)]
    IntervalSyntax(#[from] IntervalSyntaxError),

    #[error("left boundary greater than right; {left} > {right}")]
    IntervalBounds { left: i64, right: i64 },

    #[error("factorial argument cannot be less than 0; {0} provided")]
    NegativeFactorialArgument(i64),

    #[error("{name} cannot be less than 0; {value} provided")]
    NegativeCombinationArgument { name: &'static str, value: i64 },

    #[error("{operation} overflowed 64-bit arithmetic at argument {argument}")]
    ArithmeticOverflow {
        operation: &'static str,
        argument: i64,
    },

    /// `r! * (n-r)!` wrapped around to zero, so `C(n, r)` has no value.
    #[error("denominator of C({n}, {r}) wrapped to zero")]
    DegenerateDenominator { n: i64, r: i64 },

    #[error("invalid setting {key}={value:?}")]
    InvalidSetting { key: &'static str, value: String },
}

/// Ways an interval expression can be malformed
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum IntervalSyntaxError {
    #[error("interval string must begin with '[' or '('")]
    MissingLeadingBracket,

    #[error("interval string must end with ']' or ')'")]
    MissingTrailingBracket,

    #[error("2 numbers required; {found} given")]
    TokenCount { found: usize },

    #[error("interval boundary {token:?} is not an integer: {source}")]
    NonIntegerToken {
        token: String,
        source: ParseIntError,
    },
}

impl Error {
    pub(crate) fn malformed_int(name: &'static str, value: &str, err: ParseIntError) -> Self {
        Error::ArgumentMalformed {
            name,
            value: value.to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn malformed_float(name: &'static str, value: &str, err: ParseFloatError) -> Self {
        Error::ArgumentMalformed {
            name,
            value: value.to_string(),
            reason: err.to_string(),
        }
    }
}
