//! Grouping of interchangeable stamps.
//!
//! Stamps with the same whole value and the same ranking weight are
//! interchangeable for both feasibility and ranking, so the search works on
//! one group per distinct `(value, weight)` pair instead of on raw stamps.

use std::collections::HashMap;
use std::sync::Arc;

use rand::Rng;
use stampfinder_core::{Stamp, StampId};

use crate::options::ComboOptions;

/// Equivalence class of stamps sharing value and weight.
#[derive(Debug, Clone)]
pub struct StampGroup {
    stamps: Vec<Arc<Stamp>>,
    value: u32,
    weight: f64,
    order_key: StampId,
}

impl StampGroup {
    /// Member stamps in input order. Never empty.
    #[inline]
    pub fn stamps(&self) -> &[Arc<Stamp>] {
        &self.stamps
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Smallest member id; totally orders groups.
    #[inline]
    pub fn order_key(&self) -> StampId {
        self.order_key
    }

    /// Picks a member uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Arc<Stamp> {
        &self.stamps[rng.random_range(0..self.stamps.len())]
    }
}

/// Bit pattern of a weight, with `-0.0` folded into `0.0`.
fn weight_key(weight: f64) -> u64 {
    if weight == 0.0 {
        0.0f64.to_bits()
    } else {
        weight.to_bits()
    }
}

/// Partitions accepted stamps with whole values into groups.
///
/// Groups come back sorted by order key, which fixes the order the search
/// visits them in.
pub fn group_stamps(stamps: &[Arc<Stamp>], options: &ComboOptions) -> Vec<StampGroup> {
    let sort = options.sort();
    let mut by_key: HashMap<(u32, u64), usize> = HashMap::new();
    let mut groups: Vec<StampGroup> = Vec::new();

    for stamp in stamps {
        if !options.is_accepted(stamp) {
            continue;
        }
        let Some(value) = stamp.whole_value() else {
            continue;
        };
        let weight = sort.stamp_weight(stamp);
        let slot = *by_key
            .entry((value, weight_key(weight)))
            .or_insert_with(|| {
                groups.push(StampGroup {
                    stamps: Vec::new(),
                    value,
                    weight,
                    order_key: stamp.id,
                });
                groups.len() - 1
            });
        let group = &mut groups[slot];
        group.order_key = group.order_key.min(stamp.id);
        group.stamps.push(Arc::clone(stamp));
    }

    groups.sort_by_key(|g| g.order_key);
    groups
}
