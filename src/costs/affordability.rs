//! Affordability: the largest loan that fits a target monthly payment
//!
//! Loans become more affordable as the solved present value increases, so
//! among all cost-model combinations the solver wants the most generous one
//! that still respects every range constraint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::model::{combine_cost_models, compute_cost_models, CostModelCollection};
use crate::payments::p_and_i_cost_model;

/// Label under which the principal & interest cost is solved and reported
pub const P_AND_I_LABEL: &str = "pAndI";

/// Inputs to the affordability solver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordabilityInputs {
    /// The rate of the loan, as a yearly percentage
    pub initial_rate: f64,

    /// Loan term in years
    pub loan_term: u32,

    /// The target max monthly payment
    pub target_monthly_payment: f64,

    /// Monthly cost models beyond principal & interest
    pub cost_models: CostModelCollection,
}

/// Result of the affordability solver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Affordability {
    /// The highest present value whose combined monthly costs stay at or
    /// below the target, NaN when no present value can satisfy it
    pub present_value: f64,

    /// Dollar cost of every labeled component at that present value,
    /// including principal & interest under `pAndI`
    pub costs: BTreeMap<String, f64>,
}

/// Solve each combined cost model for the present value hitting the target
/// payment and take the best feasible answer
///
/// A candidate solving below its own minimum is infeasible (NaN). NaN
/// candidates are ignored by the max-reduce, so the result is NaN only when
/// every combination is infeasible.
pub fn compute_max_present_value(costs: &CostModelCollection, target_monthly_payment: f64) -> f64 {
    combine_cost_models(costs)
        .iter()
        .map(|model| {
            let solved = (target_monthly_payment - model.cost_offset) / model.present_value_factor;
            // a NaN quotient (zero factor, exactly met offset) must survive the clamp
            let solved = if solved.is_nan() {
                solved
            } else {
                solved.min(model.max_present_value)
            };
            if solved < model.min_present_value {
                f64::NAN
            } else {
                solved
            }
        })
        .fold(f64::NAN, |l, r| {
            if l.is_nan() {
                r
            } else if r.is_nan() {
                l
            } else {
                l.max(r)
            }
        })
}

/// Compute the best affordability for a target monthly payment
///
/// Merges a principal & interest model into the caller's cost models,
/// solves for the maximum present value, then reports every component's
/// dollar cost at that present value.
pub fn compute_affordability(inputs: &AffordabilityInputs) -> Affordability {
    let mut costs = inputs.cost_models.clone();
    costs.insert(
        P_AND_I_LABEL.to_string(),
        p_and_i_cost_model(inputs.initial_rate, inputs.loan_term),
    );

    let present_value = compute_max_present_value(&costs, inputs.target_monthly_payment);
    let costs = compute_cost_models(&costs, present_value);

    Affordability { present_value, costs }
}
