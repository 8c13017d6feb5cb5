//! Compounding-interest payment primitives shared by every calculator
//!
//! These are the closed-form PMT/FV formulas; everything month-by-month
//! (schedules, APR, break-even) is built on top of them.

/// Months in a year, for converting loan terms to payment counts
pub const MONTHS_PER_YEAR: u32 = 12;

/// Divide by this to convert a yearly rate in percent to a monthly decimal rate
pub const MONTHLY_RATE_DECIMAL: f64 = 1200.0;

/// Tolerance for comparing floats that result from repeated arithmetic
pub const EPSILON: f64 = 1e-6;

/// Compare two floats within [`EPSILON`]
pub fn kinda_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Round a rate to the nearest 1/8 of a percentage point
///
/// ARM indexes are quoted in eighths, so the fully indexed rate is
/// snapped before any schedule math.
pub fn nearest_eighth(rate: f64) -> f64 {
    (rate * 8.0).round() / 8.0
}

/// Monthly payment that converts `present_value` into `future_value` over
/// `payments` periods of compounding at `rate` per period.
///
/// `rate` is a monthly decimal fraction. The standard usage has `rate > 0`;
/// a zero rate with zero payments divides by zero and is the caller's
/// responsibility to guard.
pub fn pmt(rate: f64, payments: u32, present_value: f64, future_value: f64) -> f64 {
    let r_exp = (1.0 + rate).powi(payments as i32);
    rate * (future_value + present_value * r_exp) / (r_exp - 1.0)
}

/// Future value of a loan after `periods` payments of `payment` at `rate`
/// per period, starting from `present_value`.
///
/// The zero-rate case is an explicit linear branch, not a limit of the
/// compounding formula.
pub fn fv(rate: f64, payment: f64, present_value: f64, periods: u32) -> f64 {
    let pow = (1.0 + rate).powi(periods as i32);
    if rate != 0.0 {
        payment * (1.0 - pow) / rate + present_value * pow
    } else {
        present_value - payment * periods as f64
    }
}
