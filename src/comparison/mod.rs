//! Loan-versus-loan comparisons: break-even points and lifetime costs

mod break_even;
mod total_cost;

pub use break_even::{compute_break_even, compute_break_even_with, quick_break_even, LoanQuote};
pub use total_cost::{compute_total_cost, compute_total_cost_with};
