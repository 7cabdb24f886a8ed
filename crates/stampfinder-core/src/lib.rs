//! StampFinder Core - catalog model and shared types
//!
//! This crate provides the pieces every StampFinder component builds on:
//! - Catalog model (stamps, shapes, shops) and feed decoding
//! - Numeric ranges used by value and year filters
//! - Sort direction and availability requirements
//! - Parameter maps for mirroring options in URLs
//! - The shared error type

pub mod availability;
pub mod catalog;
pub mod error;
pub mod params;
pub mod range;
pub mod sort_order;

pub use availability::AvailabilityRequirement;
pub use catalog::{
    Catalog, CatalogStats, RawShape, RawShop, RawShopItem, RawStamp, Shop, ShopItem, Stamp,
    StampId, StampShape,
};
pub use error::{Result, StampFinderError};
pub use params::ParamMap;
pub use range::NumberRange;
pub use sort_order::SortOrder;
