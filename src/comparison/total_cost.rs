//! Lifetime non-equity cost of a mortgage

use crate::amortization::compute_amortization_schedule;
use crate::insurance::{MortgageInsurance, PrivateMi};
use crate::loan::LoanOffer;

/// Total non-equity cost of a loan over its lifespan, pricing insurance as
/// conventional PMI
pub fn compute_total_cost(offer: &LoanOffer) -> f64 {
    compute_total_cost_with(offer, &PrivateMi)
}

/// Total non-equity cost of a loan over its lifespan, under an explicit
/// insurance program
///
/// Money paid to fees, interest, and mortgage insurance is effectively
/// lost, while payments toward principal become equity in the home. This
/// returns only the lost portion.
pub fn compute_total_cost_with(offer: &LoanOffer, mi: &dyn MortgageInsurance) -> f64 {
    mi.apply(&offer.insurance, &compute_amortization_schedule(&offer.loan))
        .iter()
        .map(|period| period.interest + period.mortgage_insurance)
        .fold(offer.total_fees, |total, cost| total + cost)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIFETIME_INTEREST: f64 = 333_608.06;

    fn offer(total_fees: f64, mortgage_insurance: f64) -> LoanOffer {
        let mut offer = LoanOffer::fixed(0, 3.75, 500_000.0, 30, total_fees, 600_000.0);
        offer.insurance.mortgage_insurance = mortgage_insurance;
        offer
    }

    #[test]
    fn test_total_cost_is_lifetime_interest() {
        assert!((compute_total_cost(&offer(0.0, 0.0)) - LIFETIME_INTEREST).abs() < 5e-3);
    }

    #[test]
    fn test_total_cost_includes_mortgage_insurance() {
        // PMI runs until the start-of-month LTV reaches 78%: 40 months here
        let lifetime_mi = 40_000.0;
        let total = compute_total_cost(&offer(0.0, 1_000.0));
        assert!((total - (LIFETIME_INTEREST + lifetime_mi)).abs() < 5e-3);
    }

    #[test]
    fn test_total_cost_includes_fees() {
        let total = compute_total_cost(&offer(1_000.0, 0.0));
        assert!((total - (LIFETIME_INTEREST + 1_000.0)).abs() < 5e-3);
    }

    #[test]
    fn test_total_cost_includes_fees_and_insurance() {
        let total = compute_total_cost(&offer(1_000.0, 1_000.0));
        assert!((total - (LIFETIME_INTEREST + 1_000.0 + 40_000.0)).abs() < 5e-3);
    }
}
