//! Amortization schedules and the APR solver

mod apr;
mod engine;
mod schedule;

pub use apr::{compute_apr, compute_apr_with};
pub use engine::compute_amortization_schedule;
pub use schedule::{summarize, AmortizationPeriod, ScheduleSummary};
