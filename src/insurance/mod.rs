//! Mortgage insurance overlays
//!
//! Annotates an amortization schedule with the per-month insurance cost a
//! borrower actually pays:
//! - **Private (PMI)**: conventional loans carry insurance while the
//!   start-of-month loan-to-value is above 78%
//! - **FHA (MIP)**: government-insured loans carry insurance for the life of
//!   the loan above 90% initial LTV, otherwise for the first 11 years
//!
//! Overlays never mutate the input schedule; they return a new sequence.

use serde::{Deserialize, Serialize};

use crate::amortization::AmortizationPeriod;
use crate::loan::MiInputs;
use crate::math::MONTHS_PER_YEAR;

/// An amortization period annotated with its mortgage insurance cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsuredPeriod {
    /// Payment towards principal
    pub principal: f64,

    /// Interest payment
    pub interest: f64,

    /// Remaining balance
    pub balance_at_end_of_month: f64,

    /// Insurance premium due this month
    pub mortgage_insurance: f64,
}

impl InsuredPeriod {
    fn new(period: &AmortizationPeriod, mortgage_insurance: f64) -> Self {
        Self {
            principal: period.principal,
            interest: period.interest,
            balance_at_end_of_month: period.balance_at_end_of_month,
            mortgage_insurance,
        }
    }
}

/// Capability for applying a mortgage insurance program to a schedule
pub trait MortgageInsurance {
    /// Annotate a full amortization schedule with per-month insurance costs
    fn apply(&self, inputs: &MiInputs, schedule: &[AmortizationPeriod]) -> Vec<InsuredPeriod>;
}

/// Conventional private mortgage insurance
///
/// Lenders are required to remove PMI once the borrower reaches 22% equity,
/// so each month is priced independently on its start-of-month balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrivateMi;

impl MortgageInsurance for PrivateMi {
    fn apply(&self, inputs: &MiInputs, schedule: &[AmortizationPeriod]) -> Vec<InsuredPeriod> {
        schedule
            .iter()
            .map(|period| {
                let start_of_month_ltv =
                    (period.balance_at_end_of_month + period.principal) / inputs.property_value;
                let premium = if start_of_month_ltv > 0.78 {
                    inputs.mortgage_insurance
                } else {
                    0.0
                };
                InsuredPeriod::new(period, premium)
            })
            .collect()
    }
}

/// FHA mortgage insurance premium
///
/// Removal depends only on the initial loan-to-value, not the balance
/// trajectory: above 90% the premium runs for the life of the loan, at or
/// below it runs for exactly 11 years.
#[derive(Debug, Clone, Copy, Default)]
pub struct FhaMip;

impl MortgageInsurance for FhaMip {
    fn apply(&self, inputs: &MiInputs, schedule: &[AmortizationPeriod]) -> Vec<InsuredPeriod> {
        let Some(first) = schedule.first() else {
            return Vec::new();
        };

        let loan_value = first.balance_at_end_of_month + first.principal
            - inputs.up_front_mip.unwrap_or(0.0);

        if loan_value / inputs.property_value > 0.9 {
            schedule
                .iter()
                .map(|period| InsuredPeriod::new(period, inputs.mortgage_insurance))
                .collect()
        } else {
            schedule
                .iter()
                .enumerate()
                .map(|(index, period)| {
                    let premium = if index as u32 + 1 > MONTHS_PER_YEAR * 11 {
                        0.0
                    } else {
                        inputs.mortgage_insurance
                    };
                    InsuredPeriod::new(period, premium)
                })
                .collect()
        }
    }
}

/// Insurance program selector for offers loaded from data files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MiKind {
    /// Conventional loan with PMI
    #[default]
    Private,

    /// FHA loan with MIP
    Fha,
}

impl MiKind {
    /// The insurance program backing this kind
    pub fn policy(&self) -> &'static dyn MortgageInsurance {
        match self {
            MiKind::Private => &PrivateMi,
            MiKind::Fha => &FhaMip,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MiKind::Private => "Private",
            MiKind::Fha => "FHA",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(principal: f64, interest: f64, balance: f64) -> AmortizationPeriod {
        AmortizationPeriod {
            principal,
            interest,
            balance_at_end_of_month: balance,
        }
    }

    #[test]
    fn test_pmi_applies_until_78_percent_ltv() {
        let inputs = MiInputs {
            property_value: 500_000.0,
            mortgage_insurance: 100.0,
            up_front_mip: None,
        };
        let schedule = vec![
            period(50_000.0, 200.0, 400_000.0),
            period(50_000.0, 200.0, 350_000.0),
            period(50_000.0, 200.0, 300_000.0),
        ];

        let insured = PrivateMi.apply(&inputs, &schedule);
        let premiums: Vec<f64> = insured.iter().map(|p| p.mortgage_insurance).collect();
        assert_eq!(premiums, vec![100.0, 100.0, 0.0]);
    }

    #[test]
    fn test_fha_mip_over_90_percent_ltv_runs_for_life() {
        let inputs = MiInputs {
            property_value: 107_000.0,
            mortgage_insurance: 100.0,
            up_front_mip: Some(1_000.0),
        };
        let schedule = vec![period(5_000.0, 200.0, 100_000.0); 150];

        let insured = FhaMip.apply(&inputs, &schedule);
        assert_eq!(insured.len(), 150);
        assert!(insured.iter().all(|p| p.mortgage_insurance == 100.0));
    }

    #[test]
    fn test_fha_mip_under_90_percent_ltv_runs_11_years() {
        let inputs = MiInputs {
            property_value: 200_000.0,
            mortgage_insurance: 100.0,
            up_front_mip: Some(1_000.0),
        };
        let schedule = vec![period(5_000.0, 200.0, 100_000.0); 150];

        let insured = FhaMip.apply(&inputs, &schedule);
        for (index, p) in insured.iter().enumerate() {
            let expected = if index < 132 { 100.0 } else { 0.0 };
            assert_eq!(p.mortgage_insurance, expected, "month {}", index + 1);
        }
    }

    #[test]
    fn test_overlays_preserve_the_underlying_schedule() {
        let inputs = MiInputs {
            property_value: 500_000.0,
            mortgage_insurance: 75.0,
            up_front_mip: None,
        };
        let schedule = vec![period(1_000.0, 1_500.0, 449_000.0)];

        let insured = PrivateMi.apply(&inputs, &schedule);
        assert_eq!(insured[0].principal, schedule[0].principal);
        assert_eq!(insured[0].interest, schedule[0].interest);
        assert_eq!(insured[0].balance_at_end_of_month, schedule[0].balance_at_end_of_month);
    }
}
