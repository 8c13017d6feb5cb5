//! Mortgage System - Mortgage finance calculation library
//!
//! This library provides:
//! - Monthly payments and amortization schedules (fixed and adjustable rate)
//! - Mortgage insurance overlays (conventional PMI and FHA MIP)
//! - APR via iterative root-finding over fee and insurance cashflows
//! - Lifetime cost totals and break-even comparison between two loans
//! - Affordability: the largest loan fitting a target monthly payment under
//!   composable piecewise-linear cost models
//!
//! Everything is a pure function over plain value objects. Domain
//! infeasibility (an unsolvable present value, a cost model with no piece
//! covering the request) is signaled with IEEE-754 NaN rather than errors;
//! callers check `is_nan()`.

pub mod amortization;
pub mod comparison;
pub mod costs;
pub mod format;
pub mod insurance;
pub mod loan;
pub mod math;
pub mod payments;

// Re-export commonly used types
pub use amortization::{compute_amortization_schedule, compute_apr, compute_apr_with, AmortizationPeriod};
pub use comparison::{compute_break_even, compute_total_cost, quick_break_even, LoanQuote};
pub use costs::{
    combine_cost_models, compute_affordability, compute_cost_models, Affordability,
    AffordabilityInputs, CostModel, CostModelCollection,
};
pub use insurance::{FhaMip, InsuredPeriod, MiKind, MortgageInsurance, PrivateMi};
pub use loan::{AmortizationInputs, LoanOffer, MiInputs, RateCaps};
pub use payments::{compute_monthly_payment, MonthlyPaymentInputs};
