//! Combination search entry points.

use std::sync::Arc;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use stampfinder_config::{EngineConfig, FinderConfig};
use stampfinder_core::Stamp;
use tracing::info;

use crate::combination::Combination;
use crate::group::group_stamps;
use crate::options::ComboOptions;
use crate::reconstruct::reconstruct_all;
use crate::statistics::SearchStatistics;
use crate::table::{DpTable, ValueWindow};

/// Finds combinations of `options.n_of_stamps()` stamps whose values sum
/// into the target window, lowest weight first within each value.
///
/// An unbounded or infeasible value window yields no combinations.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use stampfinder_combo::{find_combinations, ComboOptions};
/// use stampfinder_config::EngineConfig;
/// use stampfinder_core::NumberRange;
/// use stampfinder_test::scenario_stamps;
///
/// let options = ComboOptions::default()
///     .with_value_range(NumberRange::exact(20.0).unwrap());
/// let mut rng = ChaCha8Rng::seed_from_u64(1);
/// let combos = find_combinations(&scenario_stamps(), &options, &EngineConfig::default(), &mut rng);
/// assert_eq!(combos.len(), 1);
/// assert_eq!(combos[0].total_value(), 20.0);
/// ```
pub fn find_combinations<R: Rng + ?Sized>(
    stamps: &[Arc<Stamp>],
    options: &ComboOptions,
    config: &EngineConfig,
    rng: &mut R,
) -> Vec<Combination> {
    search_with_statistics(stamps, options, config, rng).0
}

fn search_with_statistics<R: Rng + ?Sized>(
    stamps: &[Arc<Stamp>],
    options: &ComboOptions,
    config: &EngineConfig,
    rng: &mut R,
) -> (Vec<Combination>, SearchStatistics) {
    let started = Instant::now();
    let mut stats = SearchStatistics::new();

    let Some(window) = ValueWindow::from_range(options.value_range()) else {
        info!(
            event = "combo_search_skipped",
            value_range = %options.value_range(),
        );
        return (Vec::new(), stats);
    };

    let groups = group_stamps(stamps, options);
    stats.accepted_stamps = groups.iter().map(|g| g.stamps().len()).sum();
    stats.group_count = groups.len();

    info!(
        event = "combo_search_start",
        stamp_count = options.n_of_stamps(),
        min_value = window.min,
        max_value = window.max,
        group_count = groups.len(),
        sort = %options.sort(),
    );

    let combos = if groups.is_empty() {
        Vec::new()
    } else {
        let table = DpTable::build(
            &groups,
            window,
            options.n_of_stamps(),
            config.max_results_per_cell.max(1),
            &mut stats,
        );
        reconstruct_all(&table, &groups, options.sort(), rng)
    };

    stats.combination_count = combos.len();
    stats.duration = started.elapsed();
    info!(
        event = "combo_search_end",
        combination_count = combos.len(),
        entries = stats.total_entries(),
        pruned = stats.total_pruned(),
        elapsed_ms = stats.duration.as_millis() as u64,
    );
    (combos, stats)
}

/// Combination search bound to an engine configuration and its own RNG.
///
/// With a configured seed, the same searches in the same order return the
/// same stamps.
#[derive(Debug)]
pub struct ComboFinder {
    config: EngineConfig,
    rng: ChaCha8Rng,
}

impl ComboFinder {
    /// Creates a finder, seeding from the configuration or OS entropy.
    pub fn new(config: EngineConfig) -> Self {
        let rng = match config.random_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        Self { config, rng }
    }

    pub fn from_config(config: &FinderConfig) -> Self {
        Self::new(config.engine.clone())
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs one search over `stamps`.
    pub fn find(&mut self, stamps: &[Arc<Stamp>], options: &ComboOptions) -> Vec<Combination> {
        find_combinations(stamps, options, &self.config, &mut self.rng)
    }

    /// Runs one search and reports how it went.
    pub fn search(
        &mut self,
        stamps: &[Arc<Stamp>],
        options: &ComboOptions,
    ) -> (Vec<Combination>, SearchStatistics) {
        search_with_statistics(stamps, options, &self.config, &mut self.rng)
    }
}

impl Default for ComboFinder {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
