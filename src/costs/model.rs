//! Piecewise-linear monthly cost models
//!
//! A cost model prices one monthly cost (taxes, insurance, HOA dues, ...)
//! as a linear function of the loan's present value, valid over a present
//! value range. A collection labels lists of models, and the engine offers
//! two views of it:
//! - [`combine_cost_models`] flattens the collection into every feasible
//!   combination of one piece per label, for solvers
//! - [`compute_cost_models`] evaluates each label at a concrete present
//!   value, for reporting

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One piece of a piecewise-linear monthly cost function
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    /// Scales the present value of the loan into a monthly cost
    pub present_value_factor: f64,

    /// Fixed monthly cost added on top of the scaled present value
    pub cost_offset: f64,

    /// Minimum present value for this model to be valid
    pub min_present_value: f64,

    /// Maximum present value for this model to be valid
    pub max_present_value: f64,
}

impl CostModel {
    /// Monthly cost at a given present value
    pub fn cost_at(&self, present_value: f64) -> f64 {
        self.cost_offset + present_value * self.present_value_factor
    }

    /// Whether a present value falls inside this model's valid range
    pub fn contains(&self, present_value: f64) -> bool {
        present_value >= self.min_present_value && present_value <= self.max_present_value
    }
}

/// Labeled cost models: label to ordered list of pieces
pub type CostModelCollection = BTreeMap<String, Vec<CostModel>>;

/// Flatten a collection into every combination of one piece per label
///
/// Factors and offsets add; ranges intersect (min by max, max by min).
/// Combinations whose intersected range is empty are infeasible and are
/// dropped. A label with an empty list constrains nothing and is skipped.
pub fn combine_cost_models(costs: &CostModelCollection) -> Vec<CostModel> {
    let mut results: Vec<CostModel> = Vec::new();
    for models in costs.values() {
        if models.is_empty() {
            continue;
        }
        if results.is_empty() {
            results = models.clone();
            continue;
        }
        results = results
            .iter()
            .flat_map(|base| {
                models.iter().map(move |model| CostModel {
                    present_value_factor: base.present_value_factor + model.present_value_factor,
                    cost_offset: base.cost_offset + model.cost_offset,
                    min_present_value: base.min_present_value.max(model.min_present_value),
                    max_present_value: base.max_present_value.min(model.max_present_value),
                })
            })
            .filter(|combined| combined.min_present_value <= combined.max_present_value)
            .collect();
    }
    results
}

/// Evaluate every label's cheapest applicable cost at a present value
///
/// A label whose models all miss the range evaluates to NaN. A label with
/// no models at all is a constant zero cost, computed as
/// `present_value * 0.0` so that a NaN present value still propagates.
pub fn compute_cost_models(costs: &CostModelCollection, present_value: f64) -> BTreeMap<String, f64> {
    costs
        .iter()
        .map(|(label, models)| {
            let cost = if models.is_empty() {
                present_value * 0.0
            } else {
                models
                    .iter()
                    .filter(|model| model.contains(present_value))
                    .map(|model| model.cost_at(present_value))
                    .fold(f64::NAN, |l, r| {
                        if l.is_nan() {
                            r
                        } else if r.is_nan() {
                            l
                        } else {
                            l.min(r)
                        }
                    })
            };
            (label.clone(), cost)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(factor: f64, offset: f64, min: f64, max: f64) -> CostModel {
        CostModel {
            present_value_factor: factor,
            cost_offset: offset,
            min_present_value: min,
            max_present_value: max,
        }
    }

    fn collection(entries: &[(&str, Vec<CostModel>)]) -> CostModelCollection {
        entries
            .iter()
            .map(|(label, models)| (label.to_string(), models.clone()))
            .collect()
    }

    #[test]
    fn test_combine_creates_all_combinations() {
        let costs = collection(&[
            ("one", vec![model(1.0, 1.0, 1.0, 10.0), model(3.0, 3.0, 3.0, 30.0)]),
            ("two", vec![model(5.0, 5.0, 5.0, 50.0), model(7.0, 7.0, 7.0, 70.0)]),
        ]);

        let combined = combine_cost_models(&costs);
        assert_eq!(
            combined,
            vec![
                model(6.0, 6.0, 5.0, 10.0),
                model(8.0, 8.0, 7.0, 10.0),
                model(8.0, 8.0, 5.0, 30.0),
                model(10.0, 10.0, 7.0, 30.0),
            ]
        );
    }

    #[test]
    fn test_combine_omits_impossible_ranges() {
        // intersecting [10, 100] with [101, 200] leaves nothing
        let costs = collection(&[
            ("one", vec![model(1.0, 0.0, 10.0, 100.0)]),
            ("two", vec![model(1.0, 0.0, 101.0, 200.0)]),
        ]);

        assert!(combine_cost_models(&costs).is_empty());
    }

    #[test]
    fn test_combine_skips_empty_labels() {
        let costs = collection(&[
            ("one", vec![model(1.0, 1.0, 0.0, 100.0)]),
            ("two", vec![]),
        ]);

        assert_eq!(combine_cost_models(&costs), vec![model(1.0, 1.0, 0.0, 100.0)]);
    }

    #[test]
    fn test_compute_returns_results_per_label() {
        let costs = collection(&[
            ("one", vec![model(0.0, 1.0, 0.0, 100.0)]),
            ("two", vec![model(0.0, 2.0, 0.0, 100.0)]),
        ]);

        let computed = compute_cost_models(&costs, 50.0);
        assert_eq!(computed["one"], 1.0);
        assert_eq!(computed["two"], 2.0);
    }

    #[test]
    fn test_compute_returns_nan_outside_every_range() {
        let costs = collection(&[
            ("one", vec![model(0.0, 0.0, 75.0, 100.0)]),
            ("two", vec![model(0.0, 0.0, 0.0, 25.0)]),
        ]);

        let computed = compute_cost_models(&costs, 50.0);
        assert!(computed["one"].is_nan());
        assert!(computed["two"].is_nan());
    }

    #[test]
    fn test_compute_takes_the_lowest_applicable_cost() {
        let costs = collection(&[
            ("one", vec![model(0.0, 1.0, 0.0, 100.0), model(0.0, 2.0, 0.0, 100.0)]),
            ("two", vec![model(0.0, 1.0, 0.0, 45.0), model(0.0, 2.0, 45.0, 100.0)]),
        ]);

        let computed = compute_cost_models(&costs, 50.0);
        assert_eq!(computed["one"], 1.0);
        assert_eq!(computed["two"], 2.0);
    }

    #[test]
    fn test_compute_applies_the_present_value_factor() {
        let costs = collection(&[
            ("one", vec![model(0.01, 2.0, f64::NEG_INFINITY, f64::INFINITY)]),
            ("two", vec![model(0.02, 3.0, f64::NEG_INFINITY, f64::INFINITY)]),
        ]);

        let computed = compute_cost_models(&costs, 100.0);
        assert_eq!(computed["one"], 3.0);
        assert_eq!(computed["two"], 5.0);
    }

    #[test]
    fn test_compute_empty_label_is_zero_but_propagates_nan() {
        let costs = collection(&[("taxes", vec![])]);

        assert_eq!(compute_cost_models(&costs, 250_000.0)["taxes"], 0.0);
        assert!(compute_cost_models(&costs, f64::NAN)["taxes"].is_nan());
    }
}
