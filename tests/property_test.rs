use binomial::{Arithmetic, Interval, combination, cumulative_probability};
use quickcheck::{Arbitrary, Gen, TestResult};
use quickcheck_macros::quickcheck;
use rand::Rng;

const TOLERANCE: f64 = 1e-9;

/// Largest trial count whose factorials fit in 64 bits.
const MAX_EXACT_TRIALS: i64 = 20;

/// Trial parameters small enough for every binomial coefficient to be exact.
#[derive(Debug, Clone, Copy)]
struct Trials {
    n: i64,
    p: f64,
}

impl Arbitrary for Trials {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = i64::from(u8::arbitrary(g)) % MAX_EXACT_TRIALS + 1;

        // Mix in the endpoints, which take the 0^0 path.
        let p = match u8::arbitrary(g) % 10 {
            0 => 0.0,
            1 => 1.0,
            _ => f64::from(u32::arbitrary(g)) / f64::from(u32::MAX),
        };

        Trials { n, p }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let p = self.p;
        Box::new((1..self.n).rev().map(move |n| Trials { n, p }))
    }
}

fn closed(left: i64, right: i64) -> Interval {
    Interval::new(left, right, false, false).unwrap()
}

#[quickcheck]
fn full_range_sums_to_one(trials: Trials) -> bool {
    let total = cumulative_probability(trials.n, trials.p, &closed(0, trials.n)).unwrap();
    (total - 1.0).abs() < TOLERANCE
}

#[quickcheck]
fn choosing_none_or_all_is_one(n: u8) -> bool {
    let n = i64::from(n);
    combination(n, 0, Arithmetic::Wrapping) == Ok(1)
        && combination(n, n, Arithmetic::Wrapping) == Ok(1)
}

#[quickcheck]
fn choosing_more_than_n_is_zero(n: u8, extra: u8) -> bool {
    let n = i64::from(n);
    let r = n + i64::from(extra) + 1;
    combination(n, r, Arithmetic::Wrapping) == Ok(0)
}

/// C(n, r) = C(n-1, r-1) + C(n-1, r) while the factorials stay exact.
#[quickcheck]
fn pascals_rule(n: u8, r: u8) -> TestResult {
    let n = i64::from(n) % MAX_EXACT_TRIALS + 1;
    let r = i64::from(r) % n;
    if r == 0 {
        return TestResult::discard();
    }

    let c = |n, r| combination(n, r, Arithmetic::Checked).unwrap();
    TestResult::from_bool(c(n, r) == c(n - 1, r - 1) + c(n - 1, r))
}

#[quickcheck]
fn bare_integer_is_single_point_interval(value: i64, trials: Trials) -> TestResult {
    let Some(next) = value.checked_add(1) else {
        return TestResult::discard();
    };

    let bare: Interval = value.to_string().parse().unwrap();
    let explicit: Interval = format!("[{value},{next})").parse().unwrap();
    if bare != explicit {
        return TestResult::failed();
    }

    TestResult::from_bool(
        cumulative_probability(trials.n, trials.p, &bare)
            == cumulative_probability(trials.n, trials.p, &explicit),
    )
}

#[quickcheck]
fn inverted_bounds_never_parse(left: i64, right: i64) -> TestResult {
    if left <= right {
        return TestResult::discard();
    }

    TestResult::from_bool(matches!(
        format!("[{left},{right}]").parse::<Interval>(),
        Err(binomial::Error::IntervalBounds { .. })
    ))
}

/// Splitting [a, c] at b into [a, b] and (b, c] preserves the total.
#[quickcheck]
fn adjacent_intervals_add_up(trials: Trials) -> bool {
    let mut rng = rand::rng();
    let a = rng.random_range(0..=trials.n);
    let b = rng.random_range(a..=trials.n);
    let c = rng.random_range(b..=trials.n);

    let whole = cumulative_probability(trials.n, trials.p, &closed(a, c)).unwrap();
    let lower = cumulative_probability(trials.n, trials.p, &closed(a, b)).unwrap();
    let upper = cumulative_probability(
        trials.n,
        trials.p,
        &Interval::new(b, c, true, false).unwrap(),
    )
    .unwrap();

    (whole - (lower + upper)).abs() < TOLERANCE
}
