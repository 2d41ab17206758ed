pub mod args;
pub mod binomial;
pub mod combinatorics;
pub mod config;
pub mod error;
pub mod interval;

pub use binomial::{Binomial, cumulative_probability, point_probability};
pub use combinatorics::{Arithmetic, combination, factorial};
pub use error::{Error, IntervalSyntaxError, Result};
pub use interval::Interval;

/// Digits printed after the decimal point.
pub const OUTPUT_PRECISION: usize = 6;

pub const USAGE: &str = "Usage: binomial n p x
  n: Number of trials. Integer greater than 0
  p: Probability of success. Float between 0 and 1
  x: Number of successes required.
     Integer between 0 and n of an open or closed interval using the
     following notation - [a,b], (a,b) or a combination of the two.
";

/// Render a probability the way the command line prints it.
pub fn format_probability(probability: f64) -> String {
    format!("{probability:.prec$}", prec = OUTPUT_PRECISION)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn six_decimal_places() {
        assert_eq!(format_probability(0.24609375), "0.246094");
        assert_eq!(format_probability(0.0), "0.000000");
        assert_eq!(format_probability(0.9999999999), "1.000000");
    }
}
