//! Mortgage System CLI
//!
//! Command-line interface for analyzing a single loan: amortization
//! schedule, insurance overlay, APR, and lifetime cost.

use std::fs::File;
use std::io::Write;

use anyhow::{bail, Context};
use chrono::{Months, NaiveDate};
use clap::Parser;
use serde::Serialize;

use mortgage_system::amortization::{summarize, ScheduleSummary};
use mortgage_system::comparison::compute_total_cost_with;
use mortgage_system::format::format_currency_with;
use mortgage_system::{
    compute_amortization_schedule, compute_apr_with, compute_monthly_payment, AmortizationInputs,
    InsuredPeriod, LoanOffer, MiInputs, MiKind, MonthlyPaymentInputs, RateCaps,
};

#[derive(Debug, Parser)]
#[command(name = "mortgage_system", about = "Amortization and cost analysis for a single loan")]
struct Cli {
    /// Yearly rate in percent
    #[arg(long, default_value_t = 4.0)]
    rate: f64,

    /// Loan amount in dollars
    #[arg(long, default_value_t = 400_000.0)]
    amount: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    term: u32,

    /// Up-front lender fees in dollars
    #[arg(long, default_value_t = 0.0)]
    fees: f64,

    /// Appraised property value in dollars
    #[arg(long, default_value_t = 500_000.0)]
    property_value: f64,

    /// Monthly mortgage insurance premium in dollars
    #[arg(long, default_value_t = 0.0)]
    monthly_mi: f64,

    /// FHA up-front premium financed into the loan
    #[arg(long)]
    up_front_mip: Option<f64>,

    /// Insurance program: Private or FHA
    #[arg(long, default_value = "Private")]
    mi_kind: String,

    /// For adjustable rate loans, the fully indexed rate
    #[arg(long)]
    fully_indexed_rate: Option<f64>,

    /// For adjustable rate loans, the fixed period in years
    #[arg(long)]
    fixed_term: Option<u32>,

    /// For adjustable rate loans, the adjustment period in years
    #[arg(long)]
    adjustment_period: Option<u32>,

    /// Cap on the first rate adjustment, in percentage points
    #[arg(long, default_value_t = 0.0)]
    initial_cap: f64,

    /// Cap on later rate adjustments, in percentage points
    #[arg(long, default_value_t = 0.0)]
    periodic_cap: f64,

    /// Lifetime bound on rate movement, in percentage points
    #[arg(long, default_value_t = 0.0)]
    lifetime_cap: f64,

    /// Date of the first payment, for the schedule's date column
    #[arg(long, default_value = "2026-01-01")]
    first_payment: NaiveDate,

    /// Write the full schedule to this CSV path
    #[arg(long)]
    csv: Option<String>,

    /// Emit the analysis as JSON instead of a table
    #[arg(long)]
    json: bool,
}

/// Full analysis of one loan, for the JSON output mode
#[derive(Debug, Serialize)]
struct LoanReport {
    offer: LoanOffer,
    monthly_payment: f64,
    apr: f64,
    total_cost: f64,
    summary: ScheduleSummary,
    schedule: Vec<InsuredPeriod>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mi_kind = match cli.mi_kind.as_str() {
        "Private" => MiKind::Private,
        "FHA" => MiKind::Fha,
        other => bail!("unknown mortgage insurance kind: {}", other),
    };

    let offer = LoanOffer {
        offer_id: 0,
        loan: AmortizationInputs {
            initial_rate: cli.rate,
            present_value: cli.amount,
            loan_term: cli.term,
            fully_indexed_rate: cli.fully_indexed_rate,
            fixed_term: cli.fixed_term,
            adjustment_period: cli.adjustment_period,
            caps: RateCaps {
                initial: cli.initial_cap,
                periodic: cli.periodic_cap,
                lifetime: cli.lifetime_cap,
            },
        },
        insurance: MiInputs {
            property_value: cli.property_value,
            mortgage_insurance: cli.monthly_mi,
            up_front_mip: cli.up_front_mip,
        },
        total_fees: cli.fees,
        mi_kind,
    };

    let schedule = compute_amortization_schedule(&offer.loan);
    let insured = mi_kind.policy().apply(&offer.insurance, &schedule);
    let summary = summarize(&schedule);

    let monthly_payment = compute_monthly_payment(&MonthlyPaymentInputs {
        initial_rate: cli.rate,
        present_value: cli.amount,
        loan_term: cli.term,
    });
    let apr = compute_apr_with(&offer, mi_kind.policy());
    let total_cost = compute_total_cost_with(&offer, mi_kind.policy());

    if cli.json {
        let report = LoanReport {
            offer,
            monthly_payment,
            apr,
            total_cost,
            summary,
            schedule: insured,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Mortgage System v0.1.0");
    println!("======================\n");

    println!(
        "Loan: {} at {}% over {} years ({})",
        format_currency_with(cli.amount, true, 0),
        cli.rate,
        cli.term,
        mi_kind.as_str(),
    );
    println!("  Monthly Payment: {}", format_currency_with(monthly_payment, true, 2));
    println!("  APR: {:.4}%", apr);
    println!("  Lifetime Cost: {}", format_currency_with(total_cost, true, 0));
    println!();

    // Print the first 24 months to console
    println!(
        "{:>5} {:>12} {:>12} {:>12} {:>10} {:>14}",
        "Month", "Date", "Principal", "Interest", "MI", "Balance"
    );
    println!("{}", "-".repeat(70));
    for (i, row) in insured.iter().enumerate().take(24) {
        println!(
            "{:>5} {:>12} {:>12.2} {:>12.2} {:>10.2} {:>14.2}",
            i + 1,
            payment_date(cli.first_payment, i),
            row.principal,
            row.interest,
            row.mortgage_insurance,
            row.balance_at_end_of_month,
        );
    }
    if insured.len() > 24 {
        println!("... ({} more months)", insured.len() - 24);
    }

    println!("\nSummary:");
    println!("  Total Months: {}", summary.total_months);
    println!("  Total Principal: {}", format_currency_with(summary.total_principal, true, 0));
    println!("  Total Interest: {}", format_currency_with(summary.total_interest, true, 0));
    println!("  Final Balance: {:.6}", summary.final_balance);

    if let Some(path) = &cli.csv {
        write_schedule_csv(path, cli.first_payment, &insured)
            .with_context(|| format!("failed to write schedule to {}", path))?;
        println!("\nFull schedule written to: {}", path);
    }

    Ok(())
}

/// Payment date for a 0-indexed schedule month
fn payment_date(first_payment: NaiveDate, month: usize) -> NaiveDate {
    first_payment + Months::new(month as u32)
}

fn write_schedule_csv(
    path: &str,
    first_payment: NaiveDate,
    insured: &[InsuredPeriod],
) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "Month,Date,Principal,Interest,MortgageInsurance,BalanceAtEndOfMonth")?;
    for (i, row) in insured.iter().enumerate() {
        writeln!(
            file,
            "{},{},{:.8},{:.8},{:.8},{:.8}",
            i + 1,
            payment_date(first_payment, i),
            row.principal,
            row.interest,
            row.mortgage_insurance,
            row.balance_at_end_of_month,
        )?;
    }
    Ok(())
}
