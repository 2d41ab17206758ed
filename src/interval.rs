use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::{Error, IntervalSyntaxError, Result};

/// A contiguous range of integers, open or closed at either end.
///
/// The interval holding only `v` is written `[v, v+1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    left: i64,
    right: i64,
    open_left: bool,
    open_right: bool,
}

impl Interval {
    /// Create an interval, rejecting a left bound greater than the right one.
    pub fn new(left: i64, right: i64, open_left: bool, open_right: bool) -> Result<Self> {
        if left > right {
            return Err(Error::IntervalBounds { left, right });
        }

        Ok(Self {
            left,
            right,
            open_left,
            open_right,
        })
    }

    /// The interval containing exactly `value`, in the canonical `[v, v+1)`
    /// form. `i64::MAX` has no successor and is stored as `[v, v]` instead.
    pub fn point(value: i64) -> Self {
        match value.checked_add(1) {
            Some(right) => Self {
                left: value,
                right,
                open_left: false,
                open_right: true,
            },
            None => Self {
                left: value,
                right: value,
                open_left: false,
                open_right: false,
            },
        }
    }

    pub fn is_open_left(&self) -> bool {
        self.open_left
    }

    pub fn is_open_right(&self) -> bool {
        self.open_right
    }

    /// First integer in the interval when iterating it.
    pub fn start(&self) -> i64 {
        if self.open_left {
            self.left.saturating_add(1)
        } else {
            self.left
        }
    }

    /// Last integer in the interval when iterating it.
    pub fn end(&self) -> i64 {
        if self.open_right {
            self.right.saturating_sub(1)
        } else {
            self.right
        }
    }

    pub fn is_empty(&self) -> bool {
        // Saturation at the i64 limits would otherwise turn (MAX, MAX] into {MAX}.
        (self.open_left && self.left == i64::MAX)
            || (self.open_right && self.right == i64::MIN)
            || self.start() > self.end()
    }

    /// Every integer in the interval, ascending.
    pub fn points(&self) -> RangeInclusive<i64> {
        if self.is_empty() {
            // An always-empty range; `1..=0` yields nothing.
            1..=0
        } else {
            self.start()..=self.end()
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let open = if self.open_left { '(' } else { '[' };
        let close = if self.open_right { ')' } else { ']' };
        write!(f, "{open}{}, {}{close}", self.left, self.right)
    }
}

/// Parses either a bare integer `v` (meaning `[v, v+1)`) or an interval
/// expression such as `[2,3]`, `(23, 45]` or `(3,3)`.
impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.parse::<i64>() {
            Ok(value) => Ok(Interval::point(value)),
            Err(_) => parse_interval(s),
        }
    }
}

/// Parse bracket notation into an interval.
///
/// The string must:
///
///   start with either '[' or '('
///   end with ']' or ')'
///   hold exactly two integers separated by a comma
///   have left boundary <= right boundary
///
/// Spaces are tolerated around the second integer only.
pub fn parse_interval(s: &str) -> Result<Interval> {
    let open_left = match s.chars().next() {
        Some('[') => false,
        Some('(') => true,
        _ => return Err(IntervalSyntaxError::MissingLeadingBracket.into()),
    };

    let open_right = match s.chars().next_back() {
        Some(']') => false,
        Some(')') => true,
        _ => return Err(IntervalSyntaxError::MissingTrailingBracket.into()),
    };

    let inner = s.trim_matches(|c| matches!(c, '[' | ']' | '(' | ')'));
    let tokens: Vec<&str> = inner.split(',').collect();
    let [left, right] = tokens[..] else {
        return Err(IntervalSyntaxError::TokenCount {
            found: tokens.len(),
        }
        .into());
    };

    let left = parse_bound(left)?;
    let right = parse_bound(right.trim_matches(' '))?;

    Interval::new(left, right, open_left, open_right)
}

fn parse_bound(token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|source| {
        IntervalSyntaxError::NonIntegerToken {
            token: token.to_string(),
            source,
        }
        .into()
    })
}
