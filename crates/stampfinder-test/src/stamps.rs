//! Stamp fixtures.
//!
//! # Example
//!
//! ```
//! use stampfinder_test::stamps::StampBuilder;
//!
//! let stamp = StampBuilder::new(7).value(25.0).width(30.0).year(2015).build();
//! assert_eq!(stamp.whole_value(), Some(25));
//! assert_eq!(stamp.width(), Some(30.0));
//! ```

use std::sync::Arc;

use stampfinder_core::{ShopItem, Stamp, StampId, StampShape};

/// Builder for catalog stamps.
///
/// Stamps default to year 2022 so they pass the default year filter.
#[derive(Debug, Clone)]
pub struct StampBuilder {
    stamp: Stamp,
}

impl StampBuilder {
    pub fn new(id: StampId) -> Self {
        let mut stamp = Stamp::new(id);
        stamp.year = Some(2022);
        Self { stamp }
    }

    pub fn value(mut self, value: f64) -> Self {
        self.stamp.value = Some(value);
        self
    }

    pub fn no_value(mut self) -> Self {
        self.stamp.value = None;
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.stamp.year = Some(year);
        self
    }

    pub fn no_year(mut self) -> Self {
        self.stamp.year = None;
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.stamp.name = Some(name.to_string());
        self
    }

    pub fn series(mut self, series: &str) -> Self {
        self.stamp.series = Some(series.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.stamp.categories.push(category.to_string());
        self
    }

    /// Square shape of the given side, so width and area both follow.
    pub fn width(mut self, width: f64) -> Self {
        self.stamp.shape = Some(StampShape::Rect { w: width, h: width });
        self
    }

    pub fn shape(mut self, shape: StampShape) -> Self {
        self.stamp.shape = Some(shape);
        self
    }

    /// Adds a one-stamp listing in the given shop.
    pub fn listed_in(mut self, shop_id: &str) -> Self {
        self.stamp.shop_items.push(ShopItem {
            shop_id: shop_id.to_string(),
            name: format!("#{}", self.stamp.id),
            amount: Some(1),
            stamp_ids: vec![self.stamp.id],
        });
        self
    }

    pub fn build(self) -> Stamp {
        self.stamp
    }

    pub fn build_arc(self) -> Arc<Stamp> {
        Arc::new(self.stamp)
    }
}

/// Wraps stamps for APIs taking shared stamps.
pub fn shared(stamps: Vec<Stamp>) -> Vec<Arc<Stamp>> {
    stamps.into_iter().map(Arc::new).collect()
}

/// Two interchangeable 10-value stamps (ids 1, 2; width 1) and one
/// 20-value stamp (id 3; width 2).
pub fn scenario_stamps() -> Vec<Arc<Stamp>> {
    vec![
        StampBuilder::new(1).value(10.0).width(1.0).build_arc(),
        StampBuilder::new(2).value(10.0).width(1.0).build_arc(),
        StampBuilder::new(3).value(20.0).width(2.0).build_arc(),
    ]
}
