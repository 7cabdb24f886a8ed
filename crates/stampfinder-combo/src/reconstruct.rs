//! Turning terminal table entries into concrete combinations.

use std::sync::Arc;

use rand::Rng;
use stampfinder_core::Stamp;

use crate::combination::Combination;
use crate::field::ComboSort;
use crate::group::StampGroup;
use crate::table::{CellRef, DpTable};

/// Follows the chain ending at `at` in the last layer, picking one random
/// member of each visited group. Stamps come out root first.
pub fn reconstruct<R: Rng + ?Sized>(
    table: &DpTable,
    groups: &[StampGroup],
    at: CellRef,
    sort: &ComboSort,
    rng: &mut R,
) -> Combination {
    let mut stamps: Vec<Arc<Stamp>> = Vec::with_capacity(table.depth());
    let mut layer = table.depth() - 1;
    let mut entry = table.entry(layer, at);
    loop {
        stamps.push(Arc::clone(groups[entry.group].pick(rng)));
        match entry.prev {
            Some(prev) => {
                layer -= 1;
                entry = table.entry(layer, prev);
            }
            None => break,
        }
    }
    stamps.reverse();
    Combination::new(stamps, sort)
}

/// Reconstructs every terminal entry, in table order.
pub fn reconstruct_all<R: Rng + ?Sized>(
    table: &DpTable,
    groups: &[StampGroup],
    sort: &ComboSort,
    rng: &mut R,
) -> Vec<Combination> {
    table
        .terminal_entries()
        .into_iter()
        .map(|at| reconstruct(table, groups, at, sort, rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::group_stamps;
    use crate::options::ComboOptions;
    use crate::statistics::SearchStatistics;
    use crate::table::ValueWindow;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use stampfinder_core::NumberRange;
    use stampfinder_test::{scenario_stamps, shared, StampBuilder};

    fn options() -> ComboOptions {
        ComboOptions::default().with_year_range(NumberRange::UNBOUNDED)
    }

    #[test]
    fn test_members_drawn_from_groups() {
        let groups = group_stamps(&scenario_stamps(), &options());
        let window = ValueWindow { min: 20, max: 20 };
        let table = DpTable::build(&groups, window, 2, 100, &mut SearchStatistics::new());
        let mut rng = ChaCha8Rng::seed_from_u64(11);

        for _ in 0..10 {
            let combos = reconstruct_all(&table, &groups, options().sort(), &mut rng);
            assert_eq!(combos.len(), 1);
            assert_eq!(combos[0].len(), 2);
            assert_eq!(combos[0].total_value(), 20.0);
            assert!(combos[0].stamps().iter().all(|s| s.id == 1 || s.id == 2));
        }
    }

    #[test]
    fn test_root_first_order() {
        let stamps = shared(vec![
            StampBuilder::new(1).value(1.0).width(1.0).build(),
            StampBuilder::new(2).value(8.0).width(1.0).build(),
        ]);
        let groups = group_stamps(&stamps, &options());
        let window = ValueWindow { min: 9, max: 9 };
        let table = DpTable::build(&groups, window, 2, 100, &mut SearchStatistics::new());
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let combos = reconstruct_all(&table, &groups, options().sort(), &mut rng);
        let ids: Vec<u32> = combos[0].stamps().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
