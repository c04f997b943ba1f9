//! The load-planning seam between the engine and its optimizer.
//!
//! A [`LoadOptimizer`] receives parallel weight and bill sequences plus one
//! vehicle capacity and returns the most valuable feasible selection.
//! Implementations must be exact for their contract; the engine relies on
//! the returned indices, not just the total.

use thiserror::Error;

/// Outcome of one optimizer run over a single vehicle capacity.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadPlan {
    /// Maximum attainable bill total within the capacity.
    pub total_bill: f64,
    /// Indices of the selected items, ascending, into the input sequences.
    pub selected: Vec<usize>,
}

impl LoadPlan {
    /// A plan selecting nothing, worth nothing.
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Errors returned by [`LoadOptimizer::plan`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// The parallel input sequences differ in length.
    #[error("parallel inputs differ in length: {weights} weights vs {bills} bills")]
    LengthMismatch {
        /// Number of weights supplied.
        weights: usize,
        /// Number of bills supplied.
        bills: usize,
    },
}

/// Select a subset of items maximizing total bill within a weight capacity.
///
/// Each item may be used at most once, and the sum of selected weights must
/// not exceed `capacity`. Weights and the capacity are unsigned, so the
/// non-negativity precondition holds by construction. Implementations must
/// be deterministic and `Send + Sync` so unrelated allocation runs can
/// proceed in parallel.
///
/// # Examples
/// ```
/// use cartage_core::{LoadOptimizer, LoadPlan, PlanError};
///
/// /// Takes items in order while they fit.
/// struct FirstFit;
///
/// impl LoadOptimizer for FirstFit {
///     fn plan(&self, weights: &[u32], bills: &[f64], capacity: u32)
///         -> Result<LoadPlan, PlanError>
///     {
///         if weights.len() != bills.len() {
///             return Err(PlanError::LengthMismatch {
///                 weights: weights.len(),
///                 bills: bills.len(),
///             });
///         }
///         let mut plan = LoadPlan::empty();
///         let mut remaining = capacity;
///         for (index, (&weight, &bill)) in weights.iter().zip(bills).enumerate() {
///             if weight <= remaining {
///                 remaining -= weight;
///                 plan.total_bill += bill;
///                 plan.selected.push(index);
///             }
///         }
///         Ok(plan)
///     }
/// }
///
/// let plan = FirstFit.plan(&[4, 9, 3], &[1.0, 2.0, 3.0], 8)?;
/// assert_eq!(plan.selected, vec![0, 2]);
/// # Ok::<(), PlanError>(())
/// ```
pub trait LoadOptimizer: Send + Sync {
    /// Plan a load for one vehicle of the given `capacity`.
    fn plan(&self, weights: &[u32], bills: &[f64], capacity: u32) -> Result<LoadPlan, PlanError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FirstFitOptimizer;

    #[test]
    fn mismatched_inputs_are_rejected() {
        let err = FirstFitOptimizer
            .plan(&[1, 2], &[1.0], 10)
            .unwrap_err();
        assert_eq!(
            err,
            PlanError::LengthMismatch {
                weights: 2,
                bills: 1
            }
        );
    }

    #[test]
    fn empty_plan_is_worthless() {
        let plan = LoadPlan::empty();
        assert_eq!(plan.total_bill, 0.0);
        assert!(plan.selected.is_empty());
    }
}
