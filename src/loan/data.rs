//! Loan input value objects shared by every calculator

use serde::{Deserialize, Serialize};

use crate::insurance::MiKind;

/// Adjustment caps for an adjustable rate loan, in percentage points
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RateCaps {
    /// Cap on the very first rate adjustment
    pub initial: f64,

    /// Cap on every adjustment after the first
    pub periodic: f64,

    /// Bound on total movement away from the initial rate
    pub lifetime: f64,
}

/// Inputs to the amortization schedule generator
///
/// A fixed rate loan only needs the first three fields; the ARM fields
/// default to values that produce no adjustments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationInputs {
    /// The rate of the loan, as a yearly percentage
    pub initial_rate: f64,

    /// The loan size
    pub present_value: f64,

    /// Loan term in years
    pub loan_term: u32,

    /// For adjustable rate loans, the fully indexed rate
    #[serde(default)]
    pub fully_indexed_rate: Option<f64>,

    /// For adjustable rate loans, the fixed period in years
    #[serde(default)]
    pub fixed_term: Option<u32>,

    /// For adjustable rate loans, the adjustment period in years
    #[serde(default)]
    pub adjustment_period: Option<u32>,

    /// For adjustable rate loans, the adjustment caps
    #[serde(default)]
    pub caps: RateCaps,
}

impl AmortizationInputs {
    /// A fixed rate loan: no index, no adjustments, no caps
    pub fn fixed(initial_rate: f64, present_value: f64, loan_term: u32) -> Self {
        Self {
            initial_rate,
            present_value,
            loan_term,
            fully_indexed_rate: None,
            fixed_term: None,
            adjustment_period: None,
            caps: RateCaps::default(),
        }
    }
}

/// Inputs to a mortgage insurance overlay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MiInputs {
    /// Appraised value of the property backing the loan
    pub property_value: f64,

    /// Monthly insurance premium in dollars
    pub mortgage_insurance: f64,

    /// For FHA loans, the financed up-front premium
    #[serde(default)]
    pub up_front_mip: Option<f64>,
}

/// A complete loan offer: amortization terms, insurance context, and the
/// up-front fees the lender charges
///
/// This is the input to APR, total cost, and break-even comparisons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanOffer {
    /// Identifier used by batch comparison tooling
    #[serde(default)]
    pub offer_id: u32,

    /// Amortization terms
    pub loan: AmortizationInputs,

    /// Insurance context
    pub insurance: MiInputs,

    /// The dollar value of fees that the lender is charging on the loan
    pub total_fees: f64,

    /// Which insurance program prices this offer
    #[serde(default)]
    pub mi_kind: MiKind,
}

impl LoanOffer {
    /// A conventional fixed rate offer with no insurance
    pub fn fixed(offer_id: u32, initial_rate: f64, present_value: f64, loan_term: u32, total_fees: f64, property_value: f64) -> Self {
        Self {
            offer_id,
            loan: AmortizationInputs::fixed(initial_rate, present_value, loan_term),
            insurance: MiInputs {
                property_value,
                mortgage_insurance: 0.0,
                up_front_mip: None,
            },
            total_fees,
            mi_kind: MiKind::Private,
        }
    }
}
