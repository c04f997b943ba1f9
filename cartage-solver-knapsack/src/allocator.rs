//! Two-tier fleet allocation over a screened manifest.

use cartage_core::{
    AllocateError, Allocation, AllocationRequest, Allocator, DestinationTable, LoadOptimizer,
    LoadPlan, ManifestItem, PlanError, Screening, Tariff, screen_items,
};

use crate::KnapsackOptimizer;

/// Default [`Allocator`]: screens the manifest, plans the one-door vehicle,
/// then plans the two-door vehicle over the remainder.
///
/// The allocator owns the run-invariant collaborators: the destination
/// table, the tariff, and a [`LoadOptimizer`]. Each request supplies the
/// manifest and the fleet capacities.
///
/// The one-door load is fixed before the two-door tier is planned, so
/// revenue is maximized per vehicle in that order; the pair as a whole is
/// not jointly optimized. The trade-off is deterministic and covered by
/// regression tests.
///
/// # Examples
/// ```
/// use cartage_core::{
///     AllocationRequest, Allocator, DestinationTable, Fleet, ItemRecord, Tariff,
/// };
/// use cartage_solver_knapsack::TieredAllocator;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let destinations = DestinationTable::from_pairs([("Hai Phong".to_owned(), 100)]);
/// let allocator = TieredAllocator::new(destinations, Tariff::new(500.0, 200.0)?);
/// let request = AllocationRequest {
///     items: vec![ItemRecord {
///         name: "pump".into(),
///         weight: 20,
///         height: 0.5,
///         length: 0.5,
///         width: 0.5,
///         city: "Hai Phong".into(),
///     }],
///     fleet: Fleet::new(100, 150)?,
/// };
/// let allocation = allocator.allocate(&request)?;
/// assert_eq!(allocation.one_door.len(), 1);
/// # Ok(())
/// # }
/// ```
pub struct TieredAllocator<O: LoadOptimizer> {
    destinations: DestinationTable,
    tariff: Tariff,
    optimizer: O,
}

impl TieredAllocator<KnapsackOptimizer> {
    /// Construct an allocator backed by the exact knapsack optimizer.
    #[must_use]
    pub const fn new(destinations: DestinationTable, tariff: Tariff) -> Self {
        Self::with_optimizer(destinations, tariff, KnapsackOptimizer)
    }
}

impl<O: LoadOptimizer> TieredAllocator<O> {
    /// Construct an allocator with an explicit optimizer.
    #[must_use]
    pub const fn with_optimizer(
        destinations: DestinationTable,
        tariff: Tariff,
        optimizer: O,
    ) -> Self {
        Self {
            destinations,
            tariff,
            optimizer,
        }
    }

    fn plan_tier(&self, items: &[ManifestItem], capacity: u32) -> Result<LoadPlan, PlanError> {
        let weights: Vec<u32> = items.iter().map(|item| item.weight).collect();
        let bills: Vec<f64> = items.iter().map(|item| item.bill).collect();
        self.optimizer.plan(&weights, &bills, capacity)
    }
}

impl<O: LoadOptimizer> Allocator for TieredAllocator<O> {
    fn allocate(&self, request: &AllocationRequest) -> Result<Allocation, AllocateError> {
        let Screening { valid, invalid } =
            screen_items(request.items.clone(), &self.destinations, &self.tariff);

        let two_door_capacity = request.fleet.two_door_capacity();
        let (oversized, eligible): (Vec<ManifestItem>, Vec<ManifestItem>) = valid
            .into_iter()
            .partition(|item| item.weight > two_door_capacity);

        let one_door_plan = self.plan_tier(&eligible, request.fleet.one_door_capacity())?;
        let (one_door, remainder) = split_selected(eligible, &one_door_plan.selected);

        let two_door_plan = self.plan_tier(&remainder, two_door_capacity)?;
        let (two_door, next_delivery) = split_selected(remainder, &two_door_plan.selected);

        Ok(Allocation {
            invalid,
            oversized,
            one_door,
            two_door,
            next_delivery,
        })
    }
}

/// Stable split of `items` into `(selected, rest)` by ascending indices.
fn split_selected(
    items: Vec<ManifestItem>,
    selected: &[usize],
) -> (Vec<ManifestItem>, Vec<ManifestItem>) {
    let mut cursor = selected.iter().copied().peekable();
    let mut picked = Vec::with_capacity(selected.len());
    let mut rest = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        if cursor.peek() == Some(&index) {
            cursor.next();
            picked.push(item);
        } else {
            rest.push(item);
        }
    }
    for stray in cursor {
        log::warn!("planned index {stray} is outside the tier's item range; ignoring it");
        debug_assert!(false, "planned index {stray} out of range");
    }
    (picked, rest)
}
