//! Cost model composition and the affordability solver

mod affordability;
mod model;

pub use affordability::{
    compute_affordability, compute_max_present_value, Affordability, AffordabilityInputs,
    P_AND_I_LABEL,
};
pub use model::{combine_cost_models, compute_cost_models, CostModel, CostModelCollection};
