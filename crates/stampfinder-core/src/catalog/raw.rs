//! Wire format of the catalog feeds.
//!
//! The stamps feed is a JSON array of entries; the shops feed is a JSON
//! array of shops with their price-list items.

use serde::{Deserialize, Serialize};

use super::shape::StampShape;
use super::stamp::StampId;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawShape {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub w: Option<f64>,
    #[serde(default)]
    pub h: Option<f64>,
    #[serde(default)]
    pub d: Option<f64>,
}

impl RawShape {
    /// Converts to a typed shape; unknown kinds or missing sizes yield `None`.
    pub fn to_shape(&self) -> Option<StampShape> {
        match self.kind.as_str() {
            "rect" => Some(StampShape::Rect {
                w: self.w?,
                h: self.h?,
            }),
            "oval" => Some(StampShape::Oval {
                w: self.w?,
                h: self.h?,
            }),
            "circle" => Some(StampShape::Circle { d: self.d? }),
            "triangle45" => Some(StampShape::Triangle45 { w: self.w? }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawStamp {
    pub id: StampId,
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub shape: Option<RawShape>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawShopItem {
    pub name: String,
    pub ids: Vec<StampId>,
    #[serde(default)]
    pub amount: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RawShop {
    pub id: String,
    pub display_name: String,
    pub link: String,
    #[serde(default)]
    pub report_date: Option<String>,
    #[serde(default)]
    pub items: Vec<RawShopItem>,
}
