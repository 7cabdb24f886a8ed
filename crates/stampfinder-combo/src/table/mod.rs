//! Dynamic-programming table of partial combinations.
//!
//! `layer L, cell v` holds the best-ranked ways to choose `L + 1` stamps
//! summing to exactly `v`. Each entry names the group its last stamp comes
//! from and links back to the entry it extends in layer `L - 1`, so a chain
//! read from a last-layer entry spells out a whole combination.
//!
//! Two rules keep the table small:
//! - an entry only extends entries whose group order key is not greater
//!   than its own, so each multiset of groups is built once;
//! - after a layer is filled, each cell keeps only its `max_per_cell`
//!   lowest-weight entries.

use stampfinder_core::NumberRange;
use tracing::debug;

use crate::group::StampGroup;
use crate::statistics::{LayerStatistics, SearchStatistics};

/// Position of an entry: value cell and slot within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub value: usize,
    pub slot: usize,
}

/// A partial combination ending with a stamp from `group`.
#[derive(Debug, Clone)]
pub struct DpEntry {
    /// Index into the group slice the table was built from.
    pub group: usize,
    /// Summed weight of the whole chain.
    pub total_weight: f64,
    /// Entry extended in the previous layer; `None` in layer 0.
    pub prev: Option<CellRef>,
}

/// Integer target window `[min, max]` of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueWindow {
    pub min: u32,
    pub max: u32,
}

impl ValueWindow {
    /// Converts a value range to the whole values it contains.
    ///
    /// Returns `None` when either bound is absent or no non-negative whole
    /// value lies inside.
    pub fn from_range(range: &NumberRange) -> Option<Self> {
        let (start, end) = (range.start()?, range.end()?);
        let min = start.ceil().max(0.0);
        let max = end.floor();
        if max < min || max > u32::MAX as f64 {
            return None;
        }
        Some(Self {
            min: min as u32,
            max: max as u32,
        })
    }
}

type Cell = Vec<DpEntry>;

/// Fully built table. Immutable once returned.
#[derive(Debug)]
pub struct DpTable {
    layers: Vec<Vec<Cell>>,
    depth: usize,
    window: ValueWindow,
}

impl DpTable {
    /// Fills every layer for combinations of `depth` stamps.
    ///
    /// Cells stop at the largest sum the groups can reach in `depth` picks,
    /// so the table never grows past what the catalog allows. Builds
    /// nothing when no sum of `depth` group values can land in the window,
    /// and stops early, leaving later layers absent, once a layer is empty.
    pub fn build(
        groups: &[StampGroup],
        window: ValueWindow,
        depth: usize,
        max_per_cell: usize,
        stats: &mut SearchStatistics,
    ) -> Self {
        let Some(window) = reachable_window(groups, window, depth) else {
            return Self {
                layers: Vec::new(),
                depth,
                window,
            };
        };
        let width = window.max as usize + 1;
        let mut layers: Vec<Vec<Cell>> = Vec::new();

        for layer in 0..depth {
            let mut cells: Vec<Cell> = vec![Vec::new(); width];
            match layers.last() {
                None => seed_first_layer(groups, window, &mut cells),
                Some(prev_layer) => {
                    let is_last = layer + 1 == depth;
                    extend_layer(groups, window, is_last, prev_layer, &mut cells);
                }
            }

            let layer_stats = prune(layer, &mut cells, max_per_cell);
            debug!(
                event = "layer_built",
                layer,
                populated_cells = layer_stats.populated_cells,
                entries_kept = layer_stats.entries_kept,
                entries_pruned = layer_stats.entries_pruned,
            );
            let exhausted = layer_stats.entries_kept == 0;
            stats.record_layer(layer_stats);
            layers.push(cells);
            if exhausted {
                break;
            }
        }

        Self {
            layers,
            depth,
            window,
        }
    }

    /// Stamps per complete combination.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of layers actually built.
    #[inline]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Entries of one cell, best first.
    pub fn cell(&self, layer: usize, value: usize) -> &[DpEntry] {
        self.layers
            .get(layer)
            .and_then(|cells| cells.get(value))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn entry(&self, layer: usize, at: CellRef) -> &DpEntry {
        &self.layers[layer][at.value][at.slot]
    }

    /// Complete combinations inside the target window, by ascending value
    /// and then cell order.
    pub fn terminal_entries(&self) -> Vec<CellRef> {
        if self.depth == 0 || self.layers.len() < self.depth {
            return Vec::new();
        }
        let last = self.depth - 1;
        (self.window.min as usize..=self.window.max as usize)
            .flat_map(|value| {
                (0..self.cell(last, value).len()).map(move |slot| CellRef { value, slot })
            })
            .collect()
    }
}

/// Narrows `window` to the sums `depth` picks from `groups` can make.
fn reachable_window(
    groups: &[StampGroup],
    window: ValueWindow,
    depth: usize,
) -> Option<ValueWindow> {
    let depth = u64::try_from(depth).unwrap_or(u64::MAX);
    let lowest = groups.iter().map(|g| u64::from(g.value())).min()?;
    let highest = groups.iter().map(|g| u64::from(g.value())).max()?;
    let max = u64::from(window.max).min(highest.saturating_mul(depth));
    let min = u64::from(window.min).max(lowest.saturating_mul(depth));
    if depth == 0 || min > max {
        return None;
    }
    Some(ValueWindow {
        min: window.min,
        max: max as u32,
    })
}

fn seed_first_layer(groups: &[StampGroup], window: ValueWindow, cells: &mut [Cell]) {
    for (index, group) in groups.iter().enumerate() {
        if group.value() <= window.max {
            cells[group.value() as usize].push(DpEntry {
                group: index,
                total_weight: group.weight(),
                prev: None,
            });
        }
    }
}

fn extend_layer(
    groups: &[StampGroup],
    window: ValueWindow,
    is_last: bool,
    prev_layer: &[Cell],
    cells: &mut [Cell],
) {
    for (index, group) in groups.iter().enumerate() {
        let Some(upper) = window.max.checked_sub(group.value()) else {
            continue;
        };
        // Only the finished sum has a lower bound.
        let lower = if is_last {
            window.min.saturating_sub(group.value())
        } else {
            0
        };
        for prev_value in lower as usize..=upper as usize {
            let target = prev_value + group.value() as usize;
            for (slot, prev) in prev_layer[prev_value].iter().enumerate() {
                if groups[prev.group].order_key() > group.order_key() {
                    continue;
                }
                cells[target].push(DpEntry {
                    group: index,
                    total_weight: prev.total_weight + group.weight(),
                    prev: Some(CellRef {
                        value: prev_value,
                        slot,
                    }),
                });
            }
        }
    }
}

fn prune(layer: usize, cells: &mut [Cell], max_per_cell: usize) -> LayerStatistics {
    let mut stats = LayerStatistics {
        layer,
        ..LayerStatistics::default()
    };
    for cell in cells.iter_mut().filter(|c| !c.is_empty()) {
        // Stable: equal weights keep insertion order.
        cell.sort_by(|a, b| a.total_weight.total_cmp(&b.total_weight));
        if cell.len() > max_per_cell {
            stats.entries_pruned += cell.len() - max_per_cell;
            cell.truncate(max_per_cell);
        }
        stats.populated_cells += 1;
        stats.entries_kept += cell.len();
    }
    stats
}

#[cfg(test)]
mod tests;
