//! Load loan offers from a rate-sheet CSV

use std::path::Path;

use csv::Reader;
use thiserror::Error;

use super::{AmortizationInputs, LoanOffer, MiInputs, RateCaps};
use crate::insurance::MiKind;

/// Default location of the offer sheet consumed by the comparison tools
pub const DEFAULT_OFFERS_PATH: &str = "data/loan_offers.csv";

/// Errors produced while loading loan offers
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read offer sheet: {0}")]
    Csv(#[from] csv::Error),

    #[error("offer {offer_id}: unknown mortgage insurance kind: {kind}")]
    UnknownMiKind { offer_id: u32, kind: String },
}

/// Raw CSV row matching the offer sheet columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "OfferID")]
    offer_id: u32,
    #[serde(rename = "Rate")]
    rate: f64,
    #[serde(rename = "LoanAmount")]
    loan_amount: f64,
    #[serde(rename = "LoanTermYears")]
    loan_term_years: u32,
    #[serde(rename = "TotalFees")]
    total_fees: f64,
    #[serde(rename = "PropertyValue")]
    property_value: f64,
    #[serde(rename = "MonthlyMI")]
    monthly_mi: f64,
    #[serde(rename = "UpFrontMIP")]
    up_front_mip: Option<f64>,
    #[serde(rename = "MIKind")]
    mi_kind: String,
    #[serde(rename = "FullyIndexedRate")]
    fully_indexed_rate: Option<f64>,
    #[serde(rename = "FixedTermYears")]
    fixed_term_years: Option<u32>,
    #[serde(rename = "AdjustmentPeriodYears")]
    adjustment_period_years: Option<u32>,
    #[serde(rename = "InitialCap")]
    initial_cap: Option<f64>,
    #[serde(rename = "PeriodicCap")]
    periodic_cap: Option<f64>,
    #[serde(rename = "LifetimeCap")]
    lifetime_cap: Option<f64>,
}

impl CsvRow {
    fn to_offer(self) -> Result<LoanOffer, LoadError> {
        let mi_kind = match self.mi_kind.as_str() {
            "Private" => MiKind::Private,
            "FHA" => MiKind::Fha,
            other => {
                return Err(LoadError::UnknownMiKind {
                    offer_id: self.offer_id,
                    kind: other.to_string(),
                })
            }
        };

        Ok(LoanOffer {
            offer_id: self.offer_id,
            loan: AmortizationInputs {
                initial_rate: self.rate,
                present_value: self.loan_amount,
                loan_term: self.loan_term_years,
                fully_indexed_rate: self.fully_indexed_rate,
                fixed_term: self.fixed_term_years,
                adjustment_period: self.adjustment_period_years,
                caps: RateCaps {
                    initial: self.initial_cap.unwrap_or(0.0),
                    periodic: self.periodic_cap.unwrap_or(0.0),
                    lifetime: self.lifetime_cap.unwrap_or(0.0),
                },
            },
            insurance: MiInputs {
                property_value: self.property_value,
                mortgage_insurance: self.monthly_mi,
                up_front_mip: self.up_front_mip,
            },
            total_fees: self.total_fees,
            mi_kind,
        })
    }
}

/// Load all loan offers from a CSV file
pub fn load_offers<P: AsRef<Path>>(path: P) -> Result<Vec<LoanOffer>, LoadError> {
    let mut reader = Reader::from_path(path)?;
    collect_offers(&mut reader)
}

/// Load loan offers from any reader (e.g., string buffer)
pub fn load_offers_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<LoanOffer>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    collect_offers(&mut csv_reader)
}

/// Load loan offers from the default offer sheet location
pub fn load_default_offers() -> Result<Vec<LoanOffer>, LoadError> {
    load_offers(DEFAULT_OFFERS_PATH)
}

fn collect_offers<R: std::io::Read>(reader: &mut Reader<R>) -> Result<Vec<LoanOffer>, LoadError> {
    let mut offers = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        offers.push(row.to_offer()?);
    }
    log::debug!("loaded {} loan offers", offers.len());
    Ok(offers)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
OfferID,Rate,LoanAmount,LoanTermYears,TotalFees,PropertyValue,MonthlyMI,UpFrontMIP,MIKind,FullyIndexedRate,FixedTermYears,AdjustmentPeriodYears,InitialCap,PeriodicCap,LifetimeCap
1,3.75,500000,30,0,600000,0,,Private,,,,,,
2,4.375,450000,30,3853,500000,131.25,1000,FHA,,,,,,
3,4.125,200000,30,1000,300000,0,,Private,5,7,1,2,2,5
";

    #[test]
    fn test_load_offers_from_reader() {
        let offers = load_offers_from_reader(SHEET.as_bytes()).expect("Failed to parse offer sheet");
        assert_eq!(offers.len(), 3);

        let fha = &offers[1];
        assert_eq!(fha.offer_id, 2);
        assert_eq!(fha.mi_kind, MiKind::Fha);
        assert_eq!(fha.insurance.up_front_mip, Some(1000.0));

        let arm = &offers[2];
        assert_eq!(arm.loan.fully_indexed_rate, Some(5.0));
        assert_eq!(arm.loan.fixed_term, Some(7));
        assert_eq!(arm.loan.caps.lifetime, 5.0);
    }

    #[test]
    fn test_unknown_mi_kind_is_rejected() {
        let sheet = "\
OfferID,Rate,LoanAmount,LoanTermYears,TotalFees,PropertyValue,MonthlyMI,UpFrontMIP,MIKind,FullyIndexedRate,FixedTermYears,AdjustmentPeriodYears,InitialCap,PeriodicCap,LifetimeCap
1,3.75,500000,30,0,600000,0,,VA,,,,,,
";
        let err = load_offers_from_reader(sheet.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::UnknownMiKind { offer_id: 1, .. }));
    }

    #[test]
    fn test_load_default_offers() {
        let offers = load_default_offers().expect("Failed to load default offer sheet");
        assert!(!offers.is_empty());
    }
}
