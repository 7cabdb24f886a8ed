//! Finished combinations.

use std::sync::Arc;

use stampfinder_core::Stamp;

use crate::field::ComboSort;

/// A concrete set of stamps meeting the count and value window of a search.
///
/// Aggregates are computed once at construction.
#[derive(Debug, Clone)]
pub struct Combination {
    stamps: Vec<Arc<Stamp>>,
    total_value: f64,
    space_used: f64,
    width_used: f64,
    weight: f64,
}

impl Combination {
    /// Builds a combination, ranking it with `sort`.
    pub fn new(stamps: Vec<Arc<Stamp>>, sort: &ComboSort) -> Self {
        let value_sum: f64 = stamps.iter().filter_map(|s| s.value).sum();
        let space_used = stamps.iter().filter_map(|s| s.bbox_area()).sum();
        let width_used = stamps.iter().filter_map(|s| s.width()).sum();
        let weight = sort.combo_weight(stamps.iter().map(|s| s.as_ref()));
        Self {
            stamps,
            total_value: round_cents(value_sum),
            space_used,
            width_used,
            weight,
        }
    }

    #[inline]
    pub fn stamps(&self) -> &[Arc<Stamp>] {
        &self.stamps
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }

    /// Sum of stamp values, rounded to two decimals.
    #[inline]
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Sum of bounding-box areas.
    #[inline]
    pub fn space_used(&self) -> f64 {
        self.space_used
    }

    #[inline]
    pub fn width_used(&self) -> f64 {
        self.width_used
    }

    /// Ranking weight under the search's sort; lower ranks first.
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Stamp ids sorted ascending.
    pub fn sorted_ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.stamps.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
