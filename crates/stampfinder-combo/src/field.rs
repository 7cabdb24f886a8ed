//! Ranking fields for combinations.
//!
//! A [`ComboSort`] turns each stamp into a scalar *weight*; the search keeps
//! the combinations with the lowest summed weight.

use std::fmt;
use std::str::FromStr;

use stampfinder_core::{SortOrder, Stamp, StampFinderError};

/// Physical attribute used to rank combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComboField {
    /// Bounding-box area the stamp occupies.
    Space,
    /// Horizontal extent of the stamp.
    #[default]
    Width,
}

impl ComboField {
    pub const ALL: [ComboField; 2] = [ComboField::Space, ComboField::Width];

    pub fn id(&self) -> &'static str {
        match self {
            ComboField::Space => "space",
            ComboField::Width => "width",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ComboField::Space => "By occupied space",
            ComboField::Width => "By width",
        }
    }

    /// Extracts the field; stamps without a shape count as 0.
    pub fn extract(&self, stamp: &Stamp) -> f64 {
        let value = match self {
            ComboField::Space => stamp.bbox_area(),
            ComboField::Width => stamp.width(),
        };
        value.unwrap_or(0.0)
    }
}

impl fmt::Display for ComboField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ComboField {
    type Err = StampFinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| StampFinderError::UnknownField(s.to_string()))
    }
}

/// Field and direction ranking combinations.
///
/// Ascending keeps the combinations with the smallest total field first,
/// descending the largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ComboSort {
    pub field: ComboField,
    pub order: SortOrder,
}

impl ComboSort {
    pub fn new(field: ComboField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Per-stamp weight minimized by the search.
    ///
    /// `asc` puts the smallest totals first (`width-asc` is narrowest
    /// first). Links from the earlier web finder used the inverse, where
    /// `width-asc` listed the widest first; flip the order when importing them.
    pub fn stamp_weight(&self, stamp: &Stamp) -> f64 {
        self.order.sign() * self.field.extract(stamp)
    }

    /// Summed weight of a set of stamps.
    pub fn combo_weight<'a, I>(&self, stamps: I) -> f64
    where
        I: IntoIterator<Item = &'a Stamp>,
    {
        stamps.into_iter().map(|s| self.stamp_weight(s)).sum()
    }
}

impl fmt::Display for ComboSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field, self.order)
    }
}

impl FromStr for ComboSort {
    type Err = StampFinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, order) = s
            .split_once('-')
            .ok_or_else(|| StampFinderError::UnknownField(s.to_string()))?;
        Ok(Self::new(field.parse()?, order.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stampfinder_core::StampShape;

    fn stamp(shape: Option<StampShape>) -> Stamp {
        let mut stamp = Stamp::new(1);
        stamp.shape = shape;
        stamp
    }

    #[test]
    fn test_extract() {
        let s = stamp(Some(StampShape::Rect { w: 30.0, h: 20.0 }));
        assert_eq!(ComboField::Width.extract(&s), 30.0);
        assert_eq!(ComboField::Space.extract(&s), 600.0);
        assert_eq!(ComboField::Width.extract(&stamp(None)), 0.0);
    }

    #[test]
    fn test_order_flips_weight() {
        let s = stamp(Some(StampShape::Circle { d: 10.0 }));
        let asc = ComboSort::new(ComboField::Width, SortOrder::Asc);
        let desc = ComboSort::new(ComboField::Width, SortOrder::Desc);
        assert_eq!(asc.stamp_weight(&s), 10.0);
        assert_eq!(desc.stamp_weight(&s), -10.0);
        assert_eq!(asc.combo_weight([&s, &s]), 20.0);
    }

    #[test]
    fn test_parse_and_display() {
        let sort: ComboSort = "space-desc".parse().unwrap();
        assert_eq!(sort, ComboSort::new(ComboField::Space, SortOrder::Desc));
        assert_eq!(sort.to_string(), "space-desc");
        assert_eq!(ComboSort::default().to_string(), "width-asc");
        assert!("height-asc".parse::<ComboSort>().is_err());
        assert!("width".parse::<ComboSort>().is_err());
        assert!("width-up".parse::<ComboSort>().is_err());
    }
}
