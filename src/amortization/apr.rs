//! Annual percentage rate solver
//!
//! APR accounts for the true cost of a mortgage by folding the future value
//! of the up-front fees and the mortgage insurance premiums into an
//! effective rate. The solver compresses the monthly payment stream into
//! groups of equal payments, then walks a bisection-style search from the
//! note rate until the grouped payments amortize the loan to zero.

use super::engine::compute_amortization_schedule;
use crate::insurance::{MortgageInsurance, PrivateMi};
use crate::loan::LoanOffer;
use crate::math::{self, MONTHLY_RATE_DECIMAL};

/// A contiguous run of identical monthly payments
#[derive(Debug, Clone, PartialEq)]
struct PaymentGroup {
    monthly_payment: f64,
    payments: u32,
}

/// Compute the APR for a loan offer, pricing insurance as conventional PMI
pub fn compute_apr(offer: &LoanOffer) -> f64 {
    compute_apr_with(offer, &PrivateMi)
}

/// Compute the APR for a loan offer under an explicit insurance program
pub fn compute_apr_with(offer: &LoanOffer, mi: &dyn MortgageInsurance) -> f64 {
    // Amortize the fees as if they were financed on the same schedule shape:
    // their monthly principal + interest is what paying them up front costs
    // over the life of the loan.
    let mut fee_inputs = offer.loan.clone();
    fee_inputs.present_value = offer.total_fees;
    let fee_amortization = compute_amortization_schedule(&fee_inputs);

    let loan_amortization = compute_amortization_schedule(&offer.loan);
    let insured = mi.apply(&offer.insurance, &loan_amortization);

    // Group adjacent equal payments so the search evaluates one FV call per
    // run instead of one per month.
    let mut payment_groups: Vec<PaymentGroup> = Vec::new();
    for (i, period) in insured.iter().enumerate() {
        let fee_allocation = fee_amortization
            .get(i)
            .map(|fee| fee.principal + fee.interest)
            .unwrap_or(0.0);
        let monthly_payment =
            period.principal + period.interest + fee_allocation + period.mortgage_insurance;

        match payment_groups.last_mut() {
            Some(last) if math::kinda_equal(last.monthly_payment, monthly_payment) => {
                last.payments += 1;
            }
            _ => payment_groups.push(PaymentGroup { monthly_payment, payments: 1 }),
        }
    }

    // Start at the note rate and work toward the actual APR, halving the
    // step each iteration.
    let mut rate = offer.loan.initial_rate / MONTHLY_RATE_DECIMAL;
    let mut diff = rate;
    for iteration in 0..100 {
        let mut present_value = offer.loan.present_value;
        for group in &payment_groups {
            // pay the loan down at the known payment for the known number of
            // payments, at the trial rate
            present_value = math::fv(rate, group.monthly_payment, present_value, group.payments);
        }

        if math::kinda_equal(present_value, 0.0) {
            log::debug!("apr converged after {} iterations", iteration);
            break;
        }

        rate += diff * if present_value < 0.0 { 1.0 } else { -1.0 };
        diff /= 2.0;
    }

    // yearly rate as a percent, rather than monthly as a decimal
    rate * MONTHLY_RATE_DECIMAL
}
