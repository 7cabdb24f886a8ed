//! Combination search statistics.
//!
//! Collected while the DP table is built and returned alongside the results
//! by [`ComboFinder::search`](crate::ComboFinder::search).

use std::time::Duration;

/// Figures for one DP layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayerStatistics {
    /// Index of this layer (stamps chosen minus one).
    pub layer: usize,
    /// Cells holding at least one entry after pruning.
    pub populated_cells: usize,
    /// Entries kept after pruning.
    pub entries_kept: usize,
    /// Entries discarded by the per-cell cap.
    pub entries_pruned: usize,
}

/// Complete statistics for a search.
#[derive(Debug, Clone, Default)]
pub struct SearchStatistics {
    /// Stamps passing the acceptance filters with a whole value.
    pub accepted_stamps: usize,
    /// Distinct `(value, weight)` groups.
    pub group_count: usize,
    /// Per-layer figures, in layer order. Shorter than the stamp count when
    /// a layer came out empty.
    pub layers: Vec<LayerStatistics>,
    /// Combinations reconstructed.
    pub combination_count: usize,
    /// Wall time of the whole search.
    pub duration: Duration,
}

impl SearchStatistics {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_layer(&mut self, layer: LayerStatistics) {
        self.layers.push(layer);
    }

    /// Total entries kept across all layers.
    pub fn total_entries(&self) -> usize {
        self.layers.iter().map(|l| l.entries_kept).sum()
    }

    /// Total entries discarded by pruning.
    pub fn total_pruned(&self) -> usize {
        self.layers.iter().map(|l| l.entries_pruned).sum()
    }
}
