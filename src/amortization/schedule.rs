//! Amortization schedule row types

use serde::{Deserialize, Serialize};

/// One month of an amortization schedule
///
/// Produced in order by the engine; the balance at the end of one month is
/// the balance at the beginning of the next.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationPeriod {
    /// Payment towards principal
    pub principal: f64,

    /// Interest payment
    pub interest: f64,

    /// Remaining balance
    pub balance_at_end_of_month: f64,
}

impl AmortizationPeriod {
    /// The full principal & interest payment for the month
    pub fn payment(&self) -> f64 {
        self.principal + self.interest
    }
}

/// Lifetime totals for a schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_months: u32,
    pub total_principal: f64,
    pub total_interest: f64,
    pub final_balance: f64,
}

/// Sum a schedule into its lifetime totals
pub fn summarize(schedule: &[AmortizationPeriod]) -> ScheduleSummary {
    ScheduleSummary {
        total_months: schedule.len() as u32,
        total_principal: schedule.iter().map(|p| p.principal).sum(),
        total_interest: schedule.iter().map(|p| p.interest).sum(),
        final_balance: schedule.last().map(|p| p.balance_at_end_of_month).unwrap_or(0.0),
    }
}
