//! Exact 0/1 knapsack over a bottom-up value table.

use cartage_core::{LoadOptimizer, LoadPlan, PlanError};

/// Exact 0/1 knapsack [`LoadOptimizer`].
///
/// Builds the classic value table `V[i][c]`: the best attainable bill total
/// using the first `i` items within capacity `c`. Selection is reconstructed
/// by walking the filled table backwards with the same comparison the fill
/// used, so a tie between including and excluding an item always resolves to
/// inclusion in both passes.
///
/// Time and memory are `O(n * capacity)` cells per run; callers with very
/// large capacities should size them deliberately.
///
/// # Examples
/// ```
/// use cartage_core::LoadOptimizer;
/// use cartage_solver_knapsack::KnapsackOptimizer;
///
/// let plan = KnapsackOptimizer
///     .plan(&[5, 8, 15], &[150.0, 580.0, 250.0], 10)?;
/// assert_eq!(plan.total_bill, 580.0);
/// assert_eq!(plan.selected, vec![1]);
/// # Ok::<(), cartage_core::PlanError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct KnapsackOptimizer;

impl LoadOptimizer for KnapsackOptimizer {
    fn plan(&self, weights: &[u32], bills: &[f64], capacity: u32) -> Result<LoadPlan, PlanError> {
        if weights.len() != bills.len() {
            return Err(PlanError::LengthMismatch {
                weights: weights.len(),
                bills: bills.len(),
            });
        }
        if weights.is_empty() || capacity == 0 {
            return Ok(LoadPlan::empty());
        }
        let table = ValueTable::fill(weights, bills, capacity);
        Ok(LoadPlan {
            total_bill: table.best(),
            selected: table.reconstruct(weights, bills),
        })
    }
}

/// Dense `(items + 1) x (capacity + 1)` table of bill totals.
///
/// Row 0 is the no-items base case and stays zero.
struct ValueTable {
    columns: usize,
    cells: Vec<f64>,
}

impl ValueTable {
    #[expect(
        clippy::float_arithmetic,
        reason = "cell values are monetary bill totals accumulated by the recurrence"
    )]
    fn fill(weights: &[u32], bills: &[f64], capacity: u32) -> Self {
        let columns = to_index(capacity) + 1;
        let mut table = Self {
            columns,
            cells: vec![0.0; (weights.len() + 1) * columns],
        };
        for (row, (&weight, &bill)) in weights.iter().zip(bills).enumerate() {
            let item_weight = to_index(weight);
            for cap in 0..columns {
                let exclude = table.get(row, cap);
                let value = if item_weight <= cap {
                    let include = bill + table.get(row, cap - item_weight);
                    if include >= exclude { include } else { exclude }
                } else {
                    exclude
                };
                table.set(row + 1, cap, value);
            }
        }
        table
    }

    /// Walk back from `(n, capacity)`, selecting an item whenever including
    /// it does not lose to excluding it. Indices come out ascending.
    #[expect(
        clippy::float_arithmetic,
        reason = "the walk re-applies the fill recurrence's comparison"
    )]
    fn reconstruct(&self, weights: &[u32], bills: &[f64]) -> Vec<usize> {
        let mut selected = Vec::new();
        let mut cap = self.columns - 1;
        for (index, (&weight, &bill)) in weights.iter().zip(bills).enumerate().rev() {
            let item_weight = to_index(weight);
            if item_weight > cap {
                continue;
            }
            let include = bill + self.get(index, cap - item_weight);
            if include >= self.get(index, cap) {
                selected.push(index);
                cap -= item_weight;
            }
        }
        selected.reverse();
        selected
    }

    /// The optimum over all items at full capacity.
    fn best(&self) -> f64 {
        self.cells.last().copied().unwrap_or_default()
    }

    fn get(&self, item: usize, cap: usize) -> f64 {
        self.cells
            .get(item * self.columns + cap)
            .copied()
            .unwrap_or_default()
    }

    fn set(&mut self, item: usize, cap: usize, value: f64) {
        let index = item * self.columns + cap;
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = value;
        }
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "u32 weights and capacities fit usize on all supported targets"
)]
const fn to_index(value: u32) -> usize {
    value as usize
}
