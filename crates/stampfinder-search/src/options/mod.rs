//! Catalog search options.

use std::sync::Arc;

use stampfinder_core::params::{self, ParamMap};
use stampfinder_core::{AvailabilityRequirement, NumberRange, Result, Stamp};
use tracing::debug;

use crate::field::StampSort;

const KEY_VALUE: &str = "value";
const KEY_YEAR: &str = "year";
const KEY_CATEGORY: &str = "category";
const KEY_AVAILABLE: &str = "available";
const KEY_SORT: &str = "sort";
const KEY_CONTAINS: &str = "contains";

/// Filters and ordering applied to the catalog listing.
///
/// Immutable; `with_*` methods return changed copies. Options mirror
/// themselves in URL parameters, with defaults left out.
///
/// # Examples
///
/// ```
/// use stampfinder_core::NumberRange;
/// use stampfinder_search::SearchOptions;
///
/// let options = SearchOptions::default().with_value(NumberRange::exact(15.0).unwrap());
/// let params = options.to_params();
/// assert_eq!(params.get("value").map(String::as_str), Some("15"));
/// assert_eq!(params.len(), 1);
///
/// let decoded = SearchOptions::from_params(params.iter().map(|(k, v)| (k.as_str(), v.as_str()))).unwrap();
/// assert_eq!(decoded, options);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    value: NumberRange,
    year: NumberRange,
    category: Option<String>,
    availability: AvailabilityRequirement,
    contains: String,
    sort: StampSort,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            value: NumberRange::UNBOUNDED,
            year: NumberRange::since(1998),
            category: None,
            availability: AvailabilityRequirement::NoRequirement,
            contains: String::new(),
            sort: StampSort::default(),
        }
    }
}

impl SearchOptions {
    pub fn new(
        value: NumberRange,
        year: NumberRange,
        category: Option<String>,
        availability: AvailabilityRequirement,
        contains: impl Into<String>,
        sort: StampSort,
    ) -> Self {
        Self {
            value,
            year,
            category,
            availability,
            contains: contains.into(),
            sort,
        }
    }

    pub fn value(&self) -> &NumberRange {
        &self.value
    }

    pub fn year(&self) -> &NumberRange {
        &self.year
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn availability(&self) -> &AvailabilityRequirement {
        &self.availability
    }

    pub fn contains(&self) -> &str {
        &self.contains
    }

    pub fn sort(&self) -> &StampSort {
        &self.sort
    }

    pub fn with_value(&self, value: NumberRange) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }

    pub fn with_year(&self, year: NumberRange) -> Self {
        Self {
            year,
            ..self.clone()
        }
    }

    pub fn with_category(&self, category: Option<String>) -> Self {
        Self {
            category,
            ..self.clone()
        }
    }

    pub fn with_availability(&self, availability: AvailabilityRequirement) -> Self {
        Self {
            availability,
            ..self.clone()
        }
    }

    pub fn with_contains(&self, contains: impl Into<String>) -> Self {
        Self {
            contains: contains.into(),
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: StampSort) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    /// Returns true when the stamp passes every filter.
    ///
    /// A stamp without a year or value only passes an unbounded range.
    pub fn matches(&self, stamp: &Stamp) -> bool {
        self.year.contains(stamp.year.map(f64::from))
            && self.value.contains(stamp.value)
            && self.availability.matches(stamp)
            && self.category.as_deref().map_or(true, |c| stamp.has_category(c))
            && (self.contains.is_empty()
                || stamp.search_key().contains(&self.contains.to_lowercase()))
    }

    /// Matching stamps in sort order. Equal stamps keep catalog order.
    pub fn filter_and_sort(&self, stamps: &[Arc<Stamp>]) -> Vec<Arc<Stamp>> {
        let mut found: Vec<Arc<Stamp>> =
            stamps.iter().filter(|s| self.matches(s)).cloned().collect();
        found.sort_by(|a, b| self.sort.compare(a, b));
        debug!(
            event = "catalog_search",
            scanned = stamps.len(),
            matched = found.len(),
            sort = %self.sort,
        );
        found
    }

    fn full_params(&self) -> ParamMap {
        [
            (KEY_VALUE, self.value.to_string()),
            (KEY_YEAR, self.year.to_string()),
            (KEY_CATEGORY, self.category.clone().unwrap_or_default()),
            (KEY_AVAILABLE, self.availability.to_string()),
            (KEY_SORT, self.sort.to_string()),
            (KEY_CONTAINS, self.contains.clone()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }

    /// Encodes the options as URL parameters, omitting default entries.
    pub fn to_params(&self) -> ParamMap {
        params::without_defaults(self.full_params(), &Self::default().full_params())
    }

    /// Decodes URL parameters; absent keys keep their default.
    pub fn from_params<'a, I>(given: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let map = params::overlay(&Self::default().full_params(), given);
        let category = params::get(&map, KEY_CATEGORY);
        Ok(Self::new(
            params::get(&map, KEY_VALUE).parse()?,
            params::get(&map, KEY_YEAR).parse()?,
            (!category.is_empty()).then(|| category.to_string()),
            AvailabilityRequirement::decode(params::get(&map, KEY_AVAILABLE)),
            params::get(&map, KEY_CONTAINS),
            params::get(&map, KEY_SORT).parse()?,
        ))
    }
}
