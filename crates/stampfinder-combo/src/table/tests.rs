use std::collections::HashSet;

use stampfinder_core::NumberRange;
use stampfinder_test::{scenario_stamps, shared, StampBuilder};

use super::*;
use crate::group::group_stamps;
use crate::options::ComboOptions;

fn window(min: f64, max: f64) -> ValueWindow {
    ValueWindow::from_range(&NumberRange::between(Some(min), Some(max)).unwrap()).unwrap()
}

fn build(groups: &[StampGroup], window: ValueWindow, depth: usize, cap: usize) -> DpTable {
    DpTable::build(groups, window, depth, cap, &mut SearchStatistics::new())
}

fn all_years() -> ComboOptions {
    ComboOptions::default().with_year_range(NumberRange::UNBOUNDED)
}

/// Group indices of the chain ending at `at`, root first.
fn chain(table: &DpTable, at: CellRef) -> Vec<usize> {
    let mut layer = table.depth() - 1;
    let mut entry = table.entry(layer, at);
    let mut groups = vec![entry.group];
    while let Some(prev) = entry.prev {
        layer -= 1;
        entry = table.entry(layer, prev);
        groups.push(entry.group);
    }
    groups.reverse();
    groups
}

#[test]
fn test_window_rounds_inward() {
    let w = window(9.5, 20.7);
    assert_eq!(w, ValueWindow { min: 10, max: 20 });
}

#[test]
fn test_window_clamps_negative_min() {
    let w = window(-5.0, 3.0);
    assert_eq!(w, ValueWindow { min: 0, max: 3 });
}

#[test]
fn test_window_rejects_unbounded_and_empty() {
    assert!(ValueWindow::from_range(&NumberRange::UNBOUNDED).is_none());
    assert!(ValueWindow::from_range(&NumberRange::at_least(5.0).unwrap()).is_none());
    assert!(ValueWindow::from_range(&NumberRange::at_most(5.0).unwrap()).is_none());
    let no_whole = NumberRange::between(Some(10.2), Some(10.8)).unwrap();
    assert!(ValueWindow::from_range(&no_whole).is_none());
    let negative = NumberRange::between(Some(-9.0), Some(-1.0)).unwrap();
    assert!(ValueWindow::from_range(&negative).is_none());
}

#[test]
fn test_pair_of_interchangeable_stamps() {
    let groups = group_stamps(&scenario_stamps(), &all_years());
    let table = build(&groups, window(20.0, 20.0), 2, 100);

    let terminals = table.terminal_entries();
    assert_eq!(terminals.len(), 1);
    assert_eq!(terminals[0].value, 20);
    assert_eq!(chain(&table, terminals[0]), vec![0, 0]);
}

#[test]
fn test_single_stamp_layer() {
    let groups = group_stamps(&scenario_stamps(), &all_years());
    let table = build(&groups, window(20.0, 20.0), 1, 100);

    let terminals = table.terminal_entries();
    assert_eq!(terminals.len(), 1);
    assert_eq!(groups[table.entry(0, terminals[0]).group].order_key(), 3);
}

#[test]
fn test_unreachable_window_is_empty() {
    let groups = group_stamps(&scenario_stamps(), &all_years());
    let mut stats = SearchStatistics::new();
    let table = DpTable::build(&groups, window(0.0, 5.0), 3, 100, &mut stats);

    assert!(table.terminal_entries().is_empty());
    assert_eq!(table.layer_count(), 0);
    assert!(stats.layers.is_empty());
}

#[test]
fn test_wide_window_sized_by_reachable_sums() {
    let groups = group_stamps(&scenario_stamps(), &all_years());
    let table = build(&groups, ValueWindow { min: 10, max: 4_000_000_000 }, 2, 100);

    assert!(table.cell(0, 41).is_empty());
    let values: Vec<usize> = table.terminal_entries().iter().map(|t| t.value).collect();
    assert_eq!(values, vec![20, 30, 40]);
}

#[test]
fn test_window_above_reachable_sums_is_empty() {
    let groups = group_stamps(&scenario_stamps(), &all_years());
    let table = build(&groups, ValueWindow { min: 41, max: u32::MAX }, 2, 100);

    assert_eq!(table.layer_count(), 0);
    assert!(table.terminal_entries().is_empty());
}

#[test]
fn test_zero_depth_has_no_terminals() {
    let groups = group_stamps(&scenario_stamps(), &all_years());
    let table = build(&groups, window(0.0, 40.0), 0, 100);

    assert_eq!(table.depth(), 0);
    assert!(table.terminal_entries().is_empty());
}

#[test]
fn test_lower_bound_only_on_last_layer() {
    // 1 + 1 + 8 = 10 needs an intermediate sum of 2, below the minimum.
    let stamps = shared(vec![
        StampBuilder::new(1).value(1.0).width(1.0).build(),
        StampBuilder::new(2).value(8.0).width(1.0).build(),
    ]);
    let groups = group_stamps(&stamps, &all_years());
    let table = build(&groups, window(10.0, 10.0), 3, 100);

    let terminals = table.terminal_entries();
    assert_eq!(terminals.len(), 1);
    assert_eq!(chain(&table, terminals[0]), vec![0, 0, 1]);
}

#[test]
fn test_cells_sorted_by_weight() {
    let stamps = shared(vec![
        StampBuilder::new(1).value(5.0).width(9.0).build(),
        StampBuilder::new(2).value(5.0).width(2.0).build(),
        StampBuilder::new(3).value(5.0).width(4.0).build(),
    ]);
    let groups = group_stamps(&stamps, &all_years());
    let table = build(&groups, window(0.0, 10.0), 1, 100);

    let weights: Vec<f64> = table.cell(0, 5).iter().map(|e| e.total_weight).collect();
    assert_eq!(weights, vec![2.0, 4.0, 9.0]);
}

#[test]
fn test_cell_never_exceeds_cap() {
    let stamps = shared(
        (1..=30)
            .map(|id| {
                StampBuilder::new(id)
                    .value((id % 4 + 1) as f64)
                    .width(id as f64)
                    .build()
            })
            .collect(),
    );
    let groups = group_stamps(&stamps, &all_years());
    let mut stats = SearchStatistics::new();
    let table = DpTable::build(&groups, window(0.0, 12.0), 3, 5, &mut stats);

    for layer in 0..table.layer_count() {
        for value in 0..=12 {
            assert!(table.cell(layer, value).len() <= 5);
        }
    }
    assert!(stats.total_pruned() > 0);
}

#[test]
fn test_pruning_keeps_lightest() {
    let stamps = shared(
        (1..=6)
            .map(|id| StampBuilder::new(id).value(3.0).width(10.0 - id as f64).build())
            .collect(),
    );
    let groups = group_stamps(&stamps, &all_years());
    let table = build(&groups, window(3.0, 3.0), 1, 2);

    let weights: Vec<f64> = table.cell(0, 3).iter().map(|e| e.total_weight).collect();
    assert_eq!(weights, vec![4.0, 5.0]);
}

#[test]
fn test_no_duplicate_multisets() {
    let stamps = shared(
        (1..=8)
            .map(|id| {
                StampBuilder::new(id)
                    .value((id % 3 + 1) as f64)
                    .width(id as f64)
                    .build()
            })
            .collect(),
    );
    let groups = group_stamps(&stamps, &all_years());
    let table = build(&groups, window(3.0, 9.0), 3, 100);

    let mut seen = HashSet::new();
    for at in table.terminal_entries() {
        let mut multiset = chain(&table, at);
        multiset.sort_unstable();
        assert!(seen.insert(multiset), "multiset produced twice");
    }
    assert!(!seen.is_empty());
}

#[test]
fn test_chains_respect_order_keys() {
    let stamps = shared(
        (1..=6)
            .map(|id| StampBuilder::new(id).value(id as f64).width(1.0 + id as f64).build())
            .collect(),
    );
    let groups = group_stamps(&stamps, &all_years());
    let table = build(&groups, window(6.0, 12.0), 3, 100);

    for at in table.terminal_entries() {
        let keys: Vec<_> = chain(&table, at)
            .into_iter()
            .map(|g| groups[g].order_key())
            .collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn test_terminals_in_ascending_value() {
    let groups = group_stamps(&scenario_stamps(), &all_years());
    let table = build(&groups, window(10.0, 40.0), 2, 100);

    let values: Vec<usize> = table.terminal_entries().iter().map(|t| t.value).collect();
    assert_eq!(values, vec![20, 30, 40]);
}

#[test]
fn test_empty_groups() {
    let table = build(&[], window(0.0, 10.0), 2, 100);
    assert!(table.terminal_entries().is_empty());
}
