//! Break-even comparison between two loan offers
//!
//! Two loans are compared on "equity less costs": the equity accrued in the
//! property minus everything paid to fees, interest, and insurance. The
//! break-even point is the first month where the cheaper loan changes.

use serde::{Deserialize, Serialize};

use crate::amortization::compute_amortization_schedule;
use crate::insurance::{InsuredPeriod, MortgageInsurance, PrivateMi};
use crate::loan::LoanOffer;

/// Equity accrued less costs paid, month by month
///
/// Entry 0 is the position before any payment: property value, less the
/// loan balance, less the up-front fees.
fn equity_less_costs(offer: &LoanOffer, schedule: &[InsuredPeriod]) -> Vec<f64> {
    let mut costs = offer.total_fees;
    let mut trajectory = Vec::with_capacity(schedule.len() + 1);
    trajectory.push(offer.insurance.property_value - offer.loan.present_value - costs);
    for period in schedule {
        costs += period.interest + period.mortgage_insurance;
        trajectory.push(offer.insurance.property_value - period.balance_at_end_of_month - costs);
    }
    trajectory
}

/// Element-wise sign comparison, padding the shorter trajectory with its
/// last value: -1 when A holds more equity less costs (A is cheaper),
/// 0 when equal, 1 otherwise
fn compare_trajectories(a: &[f64], b: &[f64]) -> Vec<i8> {
    let len = a.len().max(b.len());
    let mut compared = Vec::with_capacity(len);
    for idx in 0..len {
        let value_a = a[idx.min(a.len() - 1)];
        let value_b = b[idx.min(b.len() - 1)];
        compared.push(if value_a == value_b {
            0
        } else if value_a > value_b {
            -1
        } else {
            1
        });
    }
    compared
}

/// Months until one loan becomes more expensive than the other, pricing
/// insurance on both sides as conventional PMI
///
/// Returns a positive n when `a` is more expensive until n months out,
/// positive infinity when `a` is always more expensive, the negated values
/// when `b` is, and 0 when the loans never differ.
pub fn compute_break_even(a: &LoanOffer, b: &LoanOffer) -> f64 {
    compute_break_even_with(a, &PrivateMi, b, &PrivateMi)
}

/// Months until one loan becomes more expensive than the other, under
/// explicit insurance programs
pub fn compute_break_even_with(
    a: &LoanOffer,
    mi_a: &dyn MortgageInsurance,
    b: &LoanOffer,
    mi_b: &dyn MortgageInsurance,
) -> f64 {
    let insured_a = mi_a.apply(&a.insurance, &compute_amortization_schedule(&a.loan));
    let insured_b = mi_b.apply(&b.insurance, &compute_amortization_schedule(&b.loan));
    let compared = compare_trajectories(
        &equity_less_costs(a, &insured_a),
        &equity_less_costs(b, &insured_b),
    );

    let mut initial = compared[0];
    let mut min_month = 1usize;
    let mut rest = &compared[1..];

    // initially the same cost: skip forward to the first divergence
    if initial == 0 {
        match rest.iter().position(|&sign| sign != 0) {
            // everything is zero, the loans never differ
            None => return 0.0,
            Some(leading_zeros) => {
                min_month += leading_zeros;
                initial = rest[leading_zeros];
                rest = &rest[leading_zeros + 1..];
            }
        }
    }

    // find the point at which the comparison flips
    match rest.iter().position(|&sign| sign == -initial) {
        None => f64::INFINITY * f64::from(initial),
        Some(crossover) => f64::from(initial) * (crossover + min_month) as f64,
    }
}

/// A loan reduced to its rate and up-front cost, for quick estimates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    /// The rate of the loan, as a yearly percentage
    pub rate: f64,

    /// Up-front cost of taking the loan
    pub initial_cost: f64,
}

/// Closed-form break-even estimate between two quotes
///
/// Treats the rate gap as a flat monthly cost difference working off the
/// up-front cost difference. Two quotes at the same rate never cross, and a
/// negative crossing means one quote is always better; both report 0.
pub fn quick_break_even(a: &LoanQuote, b: &LoanQuote) -> f64 {
    if a.rate == b.rate {
        return 0.0;
    }
    let rate_diff = a.rate - b.rate;
    let initial_cost_diff = b.initial_cost - a.initial_cost;
    let break_even = initial_cost_diff / rate_diff;
    if break_even > 0.0 {
        break_even
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offer(initial_rate: f64, total_fees: f64, loan_term: u32) -> LoanOffer {
        LoanOffer::fixed(0, initial_rate, 500_000.0, loan_term, total_fees, 600_000.0)
    }

    #[test]
    fn test_identical_loans_never_break_even() {
        let a = offer(3.75, 0.0, 30);
        assert_eq!(compute_break_even(&a, &a), 0.0);
    }

    #[test]
    fn test_always_cheaper_loan_is_signed_infinity() {
        // same loan size, a has no fees and a lower rate
        let a = offer(3.75, 0.0, 30);
        let b = offer(4.75, 1_000.0, 30);

        assert_eq!(compute_break_even(&a, &b), f64::NEG_INFINITY);
        assert_eq!(compute_break_even(&b, &a), f64::INFINITY);
    }

    #[test]
    fn test_cheap_rate_with_large_fees_crosses_over() {
        // a pays 10k up front for a 2 point rate discount: more expensive
        // at the start, cheaper eventually
        let a = offer(3.0, 10_000.0, 30);
        let b = offer(5.0, 0.0, 30);

        let break_even = compute_break_even(&a, &b);
        assert!(break_even.is_finite());
        assert!(break_even > 0.0);
        assert!(break_even < 360.0);
    }

    #[test]
    fn test_break_even_is_antisymmetric() {
        let a = offer(3.0, 10_000.0, 30);
        let b = offer(5.0, 0.0, 30);

        assert_eq!(compute_break_even(&a, &b), -compute_break_even(&b, &a));
    }

    #[test]
    fn test_larger_fee_gap_pushes_the_break_even_out() {
        let b = offer(5.0, 0.0, 30);
        let near = compute_break_even(&offer(3.0, 5_000.0, 30), &b);
        let far = compute_break_even(&offer(3.0, 10_000.0, 30), &b);

        assert!(near > 0.0 && far > near);
    }

    #[test]
    fn test_mismatched_terms_pad_the_shorter_trajectory() {
        // a 15 year loan stops accruing costs once paid off; comparison
        // continues against its settled position
        let a = offer(3.0, 10_000.0, 15);
        let b = offer(3.75, 0.0, 30);

        let break_even = compute_break_even(&a, &b);
        assert!(break_even.is_finite());
        assert!(break_even > 0.0);
    }

    #[test]
    fn test_quick_break_even_same_rate() {
        let a = LoanQuote { rate: 5.0, initial_cost: 1_000.0 };
        let b = LoanQuote { rate: 5.0, initial_cost: 0.0 };
        assert_eq!(quick_break_even(&a, &b), 0.0);
    }

    #[test]
    fn test_quick_break_even_always_better_loan() {
        let a = LoanQuote { rate: 2.3, initial_cost: 1_000.0 };
        let b = LoanQuote { rate: 1.5, initial_cost: 0.0 };
        assert_eq!(quick_break_even(&a, &b), 0.0);
    }

    #[test]
    fn test_quick_break_even_crossing() {
        let a = LoanQuote { rate: 1.5, initial_cost: 1_000.0 };
        let b = LoanQuote { rate: 2.3, initial_cost: 0.0 };
        assert!((quick_break_even(&a, &b) - 1_250.0).abs() < 1e-9);
    }
}
