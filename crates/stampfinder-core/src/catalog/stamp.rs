//! Stamp records and their shop listings.

use super::shape::StampShape;

/// Identifier of a stamp in the catalog.
pub type StampId = u32;

/// A listing of one or more stamps in a shop's price list.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopItem {
    pub shop_id: String,
    pub name: String,
    pub amount: Option<u32>,
    pub stamp_ids: Vec<StampId>,
}

/// A vendor publishing a price list.
#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    pub id: String,
    pub display_name: String,
    pub link: String,
    pub report_date: Option<String>,
    /// Position in the shops feed.
    pub index: usize,
    pub items: Vec<ShopItem>,
}

/// A catalog entry.
///
/// Fields are plain data; stamps are shared read-only behind `Arc` once a
/// [`Catalog`](super::Catalog) owns them.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    pub id: StampId,
    pub page: String,
    pub image_url: Option<String>,
    /// Face value. Only whole values take part in combinations.
    pub value: Option<f64>,
    pub year: Option<i32>,
    pub categories: Vec<String>,
    pub series: Option<String>,
    pub name: Option<String>,
    pub shape: Option<StampShape>,
    /// Shop items listing this stamp, in shop feed order.
    pub shop_items: Vec<ShopItem>,
}

impl Stamp {
    /// Creates a stamp with only an id set.
    pub fn new(id: StampId) -> Self {
        Self {
            id,
            page: String::new(),
            image_url: None,
            value: None,
            year: None,
            categories: Vec::new(),
            series: None,
            name: None,
            shape: None,
            shop_items: Vec::new(),
        }
    }

    /// Lowercase `"{id}|{name}|{series}"`, the haystack for text search.
    pub fn search_key(&self) -> String {
        format!(
            "{}|{}|{}",
            self.id,
            self.name.as_deref().unwrap_or(""),
            self.series.as_deref().unwrap_or("")
        )
        .to_lowercase()
    }

    /// Returns the value as an integer when it is a finite, non-negative
    /// whole number.
    pub fn whole_value(&self) -> Option<u32> {
        let value = self.value?;
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
            Some(value as u32)
        } else {
            None
        }
    }

    pub fn width(&self) -> Option<f64> {
        self.shape.map(|s| s.width())
    }

    pub fn bbox_area(&self) -> Option<f64> {
        self.shape.map(|s| s.bbox_area())
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Returns true when at least one shop lists this stamp.
    pub fn is_available(&self) -> bool {
        !self.shop_items.is_empty()
    }

    pub fn is_listed_by(&self, shop_id: &str) -> bool {
        self.shop_items.iter().any(|i| i.shop_id == shop_id)
    }
}
