//! Loan offer inputs and the offer sheet loader

mod data;
pub mod loader;

pub use data::{AmortizationInputs, LoanOffer, MiInputs, RateCaps};
pub use loader::{load_default_offers, load_offers, load_offers_from_reader, LoadError};
