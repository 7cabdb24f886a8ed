use clap::Args;
use serde::Serialize;
use stampfinder_combo::{ComboFinder, ComboOptions, Combination};
use stampfinder_config::FinderConfig;
use stampfinder_core::{AvailabilityRequirement, Catalog, NumberRange, Stamp};
use stampfinder_search::SearchOptions;

use crate::output::{opt_num, print_one, print_out};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Face value range, e.g. `15` or `10~25`
    #[arg(long)]
    value: Option<String>,
    /// Issue year range, e.g. `2010~` or `~` for all years
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// `any` or comma-separated shop ids
    #[arg(long)]
    available: Option<String>,
    /// Text to find in number, name or series
    #[arg(long)]
    contains: Option<String>,
    /// `<field>-<order>` with field id, value, boxarea or width
    #[arg(long)]
    sort: Option<String>,
}

impl SearchArgs {
    fn to_options(&self) -> anyhow::Result<SearchOptions> {
        let given = [
            ("value", &self.value),
            ("year", &self.year),
            ("category", &self.category),
            ("available", &self.available),
            ("contains", &self.contains),
            ("sort", &self.sort),
        ];
        let options = SearchOptions::from_params(
            given
                .iter()
                .filter_map(|(k, v)| v.as_deref().map(|v| (*k, v))),
        )?;
        Ok(options)
    }
}

#[derive(Args, Debug)]
pub struct CombosArgs {
    /// Target total value, e.g. `50` or `45~50`
    #[arg(long)]
    value: String,
    /// Stamps per combination
    #[arg(long)]
    count: Option<usize>,
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    available: Option<String>,
    /// `<field>-<order>` with field space or width
    #[arg(long)]
    sort: Option<String>,
    /// Seed for picking among interchangeable stamps
    #[arg(long)]
    seed: Option<u64>,
    /// Print at most this many combinations
    #[arg(long)]
    limit: Option<usize>,
}

impl CombosArgs {
    fn to_options(&self, config: &FinderConfig) -> anyhow::Result<ComboOptions> {
        let mut options = ComboOptions::from_defaults(&config.defaults)?
            .with_value_range(self.value.parse::<NumberRange>()?);
        if let Some(count) = self.count {
            options = options.with_n_of_stamps(count)?;
        }
        if let Some(year) = &self.year {
            options = options.with_year_range(year.parse()?);
        }
        if let Some(category) = &self.category {
            options = options.with_category(Some(category.clone()));
        }
        if let Some(available) = &self.available {
            options = options.with_availability(AvailabilityRequirement::decode(available));
        }
        if let Some(sort) = &self.sort {
            options = options.with_sort(sort.parse()?);
        }
        Ok(options)
    }
}

#[derive(Serialize)]
struct StatsView {
    stamps: usize,
    shops: usize,
    min_year: i32,
    max_year: i32,
    categories: Vec<String>,
}

#[derive(Serialize)]
struct StampView {
    id: u32,
    value: Option<f64>,
    year: Option<i32>,
    name: Option<String>,
    categories: Vec<String>,
    shape: Option<String>,
    shops: Vec<String>,
}

impl From<&Stamp> for StampView {
    fn from(stamp: &Stamp) -> Self {
        let mut shops: Vec<String> = stamp.shop_items.iter().map(|i| i.shop_id.clone()).collect();
        shops.sort_unstable();
        shops.dedup();
        Self {
            id: stamp.id,
            value: stamp.value,
            year: stamp.year,
            name: stamp.name.clone(),
            categories: stamp.categories.clone(),
            shape: stamp.shape.map(|s| s.describe()),
            shops,
        }
    }
}

#[derive(Serialize)]
struct ComboView {
    total_value: f64,
    width_used: f64,
    space_used: f64,
    stamp_ids: Vec<u32>,
}

impl From<&Combination> for ComboView {
    fn from(combo: &Combination) -> Self {
        Self {
            total_value: combo.total_value(),
            width_used: combo.width_used(),
            space_used: combo.space_used(),
            stamp_ids: combo.stamps().iter().map(|s| s.id).collect(),
        }
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn stats(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    let stats = catalog.stats();
    let view = StatsView {
        stamps: catalog.len(),
        shops: catalog.shops().len(),
        min_year: stats.min_year,
        max_year: stats.max_year,
        categories: stats.categories.clone(),
    };
    print_one(json, view, |v| {
        format!(
            "stamps\t{}\nshops\t{}\nyears\t{}~{}\ncategories\t{}",
            v.stamps,
            v.shops,
            v.min_year,
            v.max_year,
            v.categories.join(",")
        )
    })
}

pub fn search(catalog: &Catalog, args: &SearchArgs, json: bool) -> anyhow::Result<()> {
    let options = args.to_options()?;
    let found: Vec<StampView> = options
        .filter_and_sort(catalog.stamps())
        .iter()
        .map(|s| StampView::from(s.as_ref()))
        .collect();
    print_out(json, &found, |s| {
        format!(
            "{}\t{}\t{}\t{}\t{}",
            s.id,
            opt_num(s.value),
            s.year.map(|y| y.to_string()).unwrap_or_default(),
            s.name.as_deref().unwrap_or(""),
            s.categories.join(",")
        )
    })
}

pub fn combos(
    catalog: &Catalog,
    config: &FinderConfig,
    args: &CombosArgs,
    json: bool,
) -> anyhow::Result<()> {
    let options = args.to_options(config)?;
    let mut engine = config.engine.clone();
    if let Some(seed) = args.seed {
        engine.random_seed = Some(seed);
    }
    let mut finder = ComboFinder::new(engine);
    let found = finder.find(catalog.stamps(), &options);

    let views: Vec<ComboView> = found
        .iter()
        .take(args.limit.unwrap_or(usize::MAX))
        .map(ComboView::from)
        .collect();
    print_out(json, &views, |c| {
        format!(
            "{}\t{}\t{}\t{}",
            c.total_value,
            c.width_used,
            c.space_used,
            join_ids(&c.stamp_ids)
        )
    })
}
