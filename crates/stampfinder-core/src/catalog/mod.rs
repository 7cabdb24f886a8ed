//! Catalog model: stamps, shops and the immutable snapshot joining them.

mod raw;
mod shape;
mod stamp;

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::sync::Arc;

use crate::error::Result;

pub use raw::{RawShape, RawShop, RawShopItem, RawStamp};
pub use shape::StampShape;
pub use stamp::{Shop, ShopItem, Stamp, StampId};

/// Summary figures over the whole catalog.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogStats {
    /// Earliest issue year, or 0 when no stamp has a year.
    pub min_year: i32,
    /// Latest issue year, or 0 when no stamp has a year.
    pub max_year: i32,
    /// Every category, sorted and deduplicated.
    pub categories: Vec<String>,
}

/// Immutable snapshot of stamps and shops.
///
/// Shop items are linked into the stamps they mention at construction, so
/// availability filters only look at the stamp itself.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    stamps: Vec<Arc<Stamp>>,
    by_id: HashMap<StampId, usize>,
    shops: Vec<Shop>,
    stats: CatalogStats,
}

impl Catalog {
    /// Builds a catalog, linking every shop item into the stamps it lists.
    ///
    /// Shop indexes are reassigned from feed order. Items naming unknown
    /// stamp ids are kept on the shop but linked nowhere.
    pub fn new(mut stamps: Vec<Stamp>, mut shops: Vec<Shop>) -> Self {
        let by_id: HashMap<StampId, usize> =
            stamps.iter().enumerate().map(|(i, s)| (s.id, i)).collect();

        for (index, shop) in shops.iter_mut().enumerate() {
            shop.index = index;
            for item in &shop.items {
                for id in &item.stamp_ids {
                    if let Some(&pos) = by_id.get(id) {
                        stamps[pos].shop_items.push(item.clone());
                    }
                }
            }
        }

        let stats = compute_stats(&stamps);
        Self {
            stamps: stamps.into_iter().map(Arc::new).collect(),
            by_id,
            shops,
            stats,
        }
    }

    /// Builds a catalog from decoded feeds. `base_url` prefixes image paths.
    pub fn from_raw(base_url: &str, raw_stamps: Vec<RawStamp>, raw_shops: Vec<RawShop>) -> Self {
        let stamps = raw_stamps
            .into_iter()
            .map(|raw| Stamp {
                id: raw.id,
                page: raw.page,
                image_url: raw.image.map(|image| format!("{}{}", base_url, image)),
                value: raw.value,
                year: raw.year,
                categories: raw.categories.unwrap_or_default(),
                series: raw.series,
                name: raw.name,
                shape: raw.shape.as_ref().and_then(RawShape::to_shape),
                shop_items: Vec::new(),
            })
            .collect();

        let shops = raw_shops
            .into_iter()
            .map(|raw| {
                let items = raw
                    .items
                    .into_iter()
                    .map(|item| ShopItem {
                        shop_id: raw.id.clone(),
                        name: item.name,
                        amount: item.amount,
                        stamp_ids: item.ids,
                    })
                    .collect();
                Shop {
                    id: raw.id,
                    display_name: raw.display_name,
                    link: raw.link,
                    report_date: raw.report_date,
                    index: 0,
                    items,
                }
            })
            .collect();

        Self::new(stamps, shops)
    }

    /// Decodes both feeds from JSON text.
    pub fn from_json_str(base_url: &str, stamps_json: &str, shops_json: &str) -> Result<Self> {
        let raw_stamps: Vec<RawStamp> = serde_json::from_str(stamps_json)?;
        let raw_shops: Vec<RawShop> = serde_json::from_str(shops_json)?;
        Ok(Self::from_raw(base_url, raw_stamps, raw_shops))
    }

    /// Loads both feeds from JSON files.
    pub fn load(
        base_url: &str,
        stamps_path: impl AsRef<Path>,
        shops_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let stamps_json = std::fs::read_to_string(stamps_path)?;
        let shops_json = std::fs::read_to_string(shops_path)?;
        Self::from_json_str(base_url, &stamps_json, &shops_json)
    }

    #[inline]
    pub fn stamps(&self) -> &[Arc<Stamp>] {
        &self.stamps
    }

    #[inline]
    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    pub fn stamp(&self, id: StampId) -> Option<&Arc<Stamp>> {
        self.by_id.get(&id).map(|&i| &self.stamps[i])
    }

    pub fn shop(&self, id: &str) -> Option<&Shop> {
        self.shops.iter().find(|s| s.id == id)
    }

    #[inline]
    pub fn stats(&self) -> &CatalogStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.stamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stamps.is_empty()
    }
}

fn compute_stats(stamps: &[Stamp]) -> CatalogStats {
    let years = stamps.iter().filter_map(|s| s.year);
    let min_year = years.clone().min().unwrap_or(0);
    let max_year = years.max().unwrap_or(0);
    let categories: BTreeSet<&String> = stamps.iter().flat_map(|s| &s.categories).collect();
    CatalogStats {
        min_year,
        max_year,
        categories: categories.into_iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests;
