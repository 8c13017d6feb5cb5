//! Monthly payment helpers and the principal & interest cost model

use serde::{Deserialize, Serialize};

use crate::costs::CostModel;
use crate::math::{self, MONTHLY_RATE_DECIMAL, MONTHS_PER_YEAR};

/// Minimal loan inputs for a principal & interest payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPaymentInputs {
    /// The rate of the loan, as a yearly percentage
    pub initial_rate: f64,

    /// The loan size
    pub present_value: f64,

    /// Loan term in years
    pub loan_term: u32,
}

/// The monthly payment required to pay a loan off over its term
pub fn compute_monthly_payment(inputs: &MonthlyPaymentInputs) -> f64 {
    math::pmt(
        inputs.initial_rate / MONTHLY_RATE_DECIMAL,
        inputs.loan_term * MONTHS_PER_YEAR,
        inputs.present_value,
        0.0,
    )
}

/// Principal & interest expressed as a cost model
///
/// A pure compounding-interest factor with no offset, valid for any
/// present value. Merging this into a cost model collection lets the
/// affordability solver treat P&I like any other monthly cost.
pub fn p_and_i_cost_model(initial_rate: f64, loan_term: u32) -> Vec<CostModel> {
    let rate = initial_rate / MONTHLY_RATE_DECIMAL;
    let r_exp = (1.0 + rate).powi((loan_term * MONTHS_PER_YEAR) as i32);

    vec![CostModel {
        present_value_factor: rate * r_exp / (r_exp - 1.0),
        cost_offset: 0.0,
        min_present_value: f64::NEG_INFINITY,
        max_present_value: f64::INFINITY,
    }]
}
