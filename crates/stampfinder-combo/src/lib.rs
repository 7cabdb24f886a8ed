//! StampFinder Combo - combination search engine
//!
//! Finds sets of a fixed number of stamps whose values add up to a target
//! window, ranked by a secondary weight (stamp width or area):
//! - Options and acceptance filters ([`ComboOptions`], [`ComboSort`])
//! - Grouping of interchangeable stamps ([`StampGroup`])
//! - A layered value table pruned to a fixed number of entries per cell
//! - Random representative selection when rebuilding combinations
//! - Background searches that never publish stale results ([`ComboManager`])
//!
//! # Example
//!
//! ```
//! use stampfinder_combo::{ComboFinder, ComboOptions};
//! use stampfinder_config::EngineConfig;
//! use stampfinder_core::NumberRange;
//! use stampfinder_test::scenario_stamps;
//!
//! let mut finder = ComboFinder::new(EngineConfig { random_seed: Some(7), ..Default::default() });
//! let options = ComboOptions::default()
//!     .with_value_range(NumberRange::exact(20.0).unwrap())
//!     .with_n_of_stamps(1)
//!     .unwrap();
//! let (combos, stats) = finder.search(&scenario_stamps(), &options);
//! assert_eq!(combos[0].sorted_ids(), vec![3]);
//! assert_eq!(stats.group_count, 2);
//! ```

pub mod combination;
pub mod field;
pub mod finder;
pub mod group;
pub mod manager;
pub mod options;
pub mod reconstruct;
pub mod statistics;
pub mod table;

pub use combination::Combination;
pub use field::{ComboField, ComboSort};
pub use finder::{find_combinations, ComboFinder};
pub use group::{group_stamps, StampGroup};
pub use manager::{ComboManager, PublishedCombinations, SearchJob};
pub use options::ComboOptions;
pub use statistics::{LayerStatistics, SearchStatistics};
pub use table::{CellRef, DpEntry, DpTable, ValueWindow};
