//! Month-by-month amortization schedule generator
//!
//! Handles standard fixed rate loans and adjustable rate loans with
//! initial, periodic, and lifetime adjustment caps. An ARM re-prices at
//! each adjustment boundary: the rate steps toward the fully indexed rate
//! by at most the applicable cap, and the payment is recomputed over the
//! remaining balance and term.

use super::schedule::AmortizationPeriod;
use crate::loan::AmortizationInputs;
use crate::math::{self, MONTHLY_RATE_DECIMAL, MONTHS_PER_YEAR};

/// Compute a monthly amortization schedule for a loan
///
/// Each period shows the principal and interest paid that month and the
/// resulting balance. With no ARM fields this degenerates to a fixed rate
/// schedule with a constant payment.
pub fn compute_amortization_schedule(inputs: &AmortizationInputs) -> Vec<AmortizationPeriod> {
    let fully_indexed_rate = inputs.fully_indexed_rate.unwrap_or(inputs.initial_rate);
    let fixed_term = inputs.fixed_term.unwrap_or(inputs.loan_term);
    let adjustment_period = inputs.adjustment_period.unwrap_or(1);
    let caps = inputs.caps;

    let monthly_indexed_rate = math::nearest_eighth(fully_indexed_rate) / MONTHLY_RATE_DECIMAL;
    // Lifetime envelope relative to the initial rate; adjustments never
    // cross the fully indexed rate in either direction.
    let max_rate = ((inputs.initial_rate + caps.lifetime) / MONTHLY_RATE_DECIMAL).min(monthly_indexed_rate);
    let min_rate = ((inputs.initial_rate - caps.lifetime) / MONTHLY_RATE_DECIMAL).max(monthly_indexed_rate);

    let payment_periods = inputs.loan_term * MONTHS_PER_YEAR;
    let fixed_periods = fixed_term * MONTHS_PER_YEAR;
    let periods_per_adjustment = adjustment_period * MONTHS_PER_YEAR;

    let mut remaining_balance = inputs.present_value;
    let mut monthly_rate = inputs.initial_rate / MONTHLY_RATE_DECIMAL;
    let mut monthly_payment = math::pmt(monthly_rate, payment_periods, remaining_balance, 0.0);

    let mut schedule = Vec::with_capacity(payment_periods as usize);
    // iterate over the life of the loan, month by month
    for i in 0..payment_periods {
        if i >= fixed_periods && (i - fixed_periods) % periods_per_adjustment == 0 {
            // the first adjustment uses the initial cap, later ones the periodic cap
            let cap = (if i == fixed_periods { caps.initial } else { caps.periodic }) / MONTHLY_RATE_DECIMAL;
            let step = if monthly_rate < monthly_indexed_rate { cap } else { -cap };
            monthly_rate = min_rate.max((monthly_rate + step).min(max_rate));
            monthly_payment = math::pmt(monthly_rate, payment_periods - i, remaining_balance, 0.0);
        }

        let interest = monthly_rate * remaining_balance;
        // the final payment is capped so the balance cannot go negative
        let paid = (remaining_balance + interest).min(monthly_payment);
        remaining_balance = (remaining_balance - (paid - interest)).max(0.0);

        schedule.push(AmortizationPeriod {
            principal: paid - interest,
            interest,
            balance_at_end_of_month: remaining_balance,
        });
    }

    schedule
}
