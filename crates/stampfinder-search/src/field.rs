//! Catalog sort fields.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use stampfinder_core::{SortOrder, Stamp, StampFinderError};

/// Stamp attribute the catalog can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StampField {
    Id,
    Value,
    BoxArea,
    Width,
}

impl StampField {
    pub const ALL: [StampField; 4] = [
        StampField::Id,
        StampField::Value,
        StampField::BoxArea,
        StampField::Width,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            StampField::Id => "id",
            StampField::Value => "value",
            StampField::BoxArea => "boxarea",
            StampField::Width => "width",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StampField::Id => "By number",
            StampField::Value => "By face value",
            StampField::BoxArea => "By space taken",
            StampField::Width => "By width",
        }
    }

    /// Reads the field, `None` when the stamp lacks it.
    pub fn extract(&self, stamp: &Stamp) -> Option<f64> {
        match self {
            StampField::Id => Some(f64::from(stamp.id)),
            StampField::Value => stamp.value,
            StampField::BoxArea => stamp.bbox_area(),
            StampField::Width => stamp.width(),
        }
    }
}

impl fmt::Display for StampField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StampField {
    type Err = StampFinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| StampFinderError::UnknownField(s.to_string()))
    }
}

/// Catalog ordering: a field and a direction.
///
/// Stamps lacking the field always sort after those that have it,
/// whatever the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StampSort {
    pub field: StampField,
    pub order: SortOrder,
}

impl StampSort {
    pub fn new(field: StampField, order: SortOrder) -> Self {
        Self { field, order }
    }

    pub fn compare(&self, a: &Stamp, b: &Stamp) -> Ordering {
        match (self.field.extract(a), self.field.extract(b)) {
            (Some(x), Some(y)) => {
                let ord = x.total_cmp(&y);
                match self.order {
                    SortOrder::Asc => ord,
                    SortOrder::Desc => ord.reverse(),
                }
            }
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl Default for StampSort {
    fn default() -> Self {
        Self::new(StampField::Id, SortOrder::Desc)
    }
}

impl fmt::Display for StampSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.field, self.order)
    }
}

impl FromStr for StampSort {
    type Err = StampFinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, order) = s
            .split_once('-')
            .ok_or_else(|| StampFinderError::UnknownField(s.to_string()))?;
        Ok(Self::new(field.parse()?, order.parse()?))
    }
}
