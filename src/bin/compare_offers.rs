//! Compare loan offers from an offer sheet
//!
//! Computes the monthly payment, APR, and lifetime cost for every offer in
//! a CSV offer sheet, then the pairwise break-even matrix between them.
//!
//! Usage: cargo run --bin compare_offers [offer_sheet.csv]

use anyhow::Context;
use rayon::prelude::*;

use mortgage_system::comparison::{compute_break_even_with, compute_total_cost_with};
use mortgage_system::format::format_currency_with;
use mortgage_system::loan::{load_offers, loader::DEFAULT_OFFERS_PATH};
use mortgage_system::{
    compute_apr_with, compute_monthly_payment, LoanOffer, MonthlyPaymentInputs,
};

/// Computed metrics for one offer
#[derive(Debug)]
struct OfferMetrics {
    offer: LoanOffer,
    monthly_payment: f64,
    apr: f64,
    total_cost: f64,
}

fn analyze(offer: &LoanOffer) -> OfferMetrics {
    let mi = offer.mi_kind.policy();
    OfferMetrics {
        offer: offer.clone(),
        monthly_payment: compute_monthly_payment(&MonthlyPaymentInputs {
            initial_rate: offer.loan.initial_rate,
            present_value: offer.loan.present_value,
            loan_term: offer.loan.loan_term,
        }),
        apr: compute_apr_with(offer, mi),
        total_cost: compute_total_cost_with(offer, mi),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_OFFERS_PATH.to_string());
    println!("Loading offers from {}...", path);
    let offers = load_offers(&path).with_context(|| format!("failed to load {}", path))?;
    println!("{} offers loaded\n", offers.len());

    let metrics: Vec<OfferMetrics> = offers.par_iter().map(analyze).collect();

    println!(
        "{:>5} {:>8} {:>12} {:>6} {:>10} {:>8} {:>8} {:>14}",
        "Offer", "Rate", "Amount", "Term", "Fees", "MI", "APR", "Lifetime Cost"
    );
    println!("{}", "-".repeat(80));
    for m in &metrics {
        println!(
            "{:>5} {:>7.3}% {:>12} {:>6} {:>10} {:>8} {:>7.3}% {:>14}",
            m.offer.offer_id,
            m.offer.loan.initial_rate,
            format_currency_with(m.offer.loan.present_value, true, 0),
            m.offer.loan.loan_term,
            format_currency_with(m.offer.total_fees, true, 0),
            m.offer.mi_kind.as_str(),
            m.apr,
            format_currency_with(m.total_cost, true, 0),
        );
    }

    println!("\nMonthly payments:");
    for m in &metrics {
        println!(
            "  Offer {}: {}",
            m.offer.offer_id,
            format_currency_with(m.monthly_payment, true, 2)
        );
    }

    // Pairwise break-even: months until the row offer becomes more
    // expensive than the column offer
    println!("\nBreak-even matrix (months, + means the row offer costs more until then):");
    print!("{:>8}", "");
    for m in &metrics {
        print!("{:>10}", format!("#{}", m.offer.offer_id));
    }
    println!();
    for a in &metrics {
        print!("{:>8}", format!("#{}", a.offer.offer_id));
        for b in &metrics {
            if a.offer.offer_id == b.offer.offer_id {
                print!("{:>10}", "-");
                continue;
            }
            let break_even = compute_break_even_with(
                &a.offer,
                a.offer.mi_kind.policy(),
                &b.offer,
                b.offer.mi_kind.policy(),
            );
            if break_even.is_infinite() {
                print!("{:>10}", if break_even > 0.0 { "always" } else { "never" });
            } else {
                print!("{:>10.0}", break_even);
            }
        }
        println!();
    }

    Ok(())
}
