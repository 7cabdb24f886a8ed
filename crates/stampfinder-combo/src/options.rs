//! Immutable options describing a combination search.

use std::sync::Arc;

use stampfinder_config::ComboDefaults;
use stampfinder_core::params::{self, ParamMap};
use stampfinder_core::{AvailabilityRequirement, NumberRange, Result, Stamp, StampFinderError};

use crate::field::ComboSort;

const KEY_VALUE: &str = "value";
const KEY_YEAR: &str = "year";
const KEY_CATEGORY: &str = "category";
const KEY_AVAILABLE: &str = "available";
const KEY_COUNT: &str = "n";
const KEY_SORT: &str = "sort";

/// What to look for: target value window, stamp count, acceptance filters
/// and ranking.
///
/// Instances never change; every `with_*` method returns a new value.
///
/// # Examples
///
/// ```
/// use stampfinder_combo::ComboOptions;
/// use stampfinder_core::NumberRange;
///
/// let options = ComboOptions::default()
///     .with_value_range(NumberRange::exact(50.0).unwrap())
///     .with_n_of_stamps(3)
///     .unwrap();
/// assert_eq!(options.n_of_stamps(), 3);
/// assert!(ComboOptions::default().with_n_of_stamps(0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ComboOptions {
    value: NumberRange,
    year: NumberRange,
    category: Option<String>,
    n_of_stamps: usize,
    availability: AvailabilityRequirement,
    sort: ComboSort,
}

impl Default for ComboOptions {
    fn default() -> Self {
        Self {
            value: NumberRange::UNBOUNDED,
            year: NumberRange::since(1998),
            category: None,
            n_of_stamps: 2,
            availability: AvailabilityRequirement::NoRequirement,
            sort: ComboSort::default(),
        }
    }
}

impl ComboOptions {
    /// Creates options, rejecting a stamp count of zero.
    pub fn new(
        value: NumberRange,
        year: NumberRange,
        category: Option<String>,
        n_of_stamps: usize,
        availability: AvailabilityRequirement,
        sort: ComboSort,
    ) -> Result<Self> {
        check_n_of_stamps(n_of_stamps)?;
        Ok(Self {
            value,
            year,
            category,
            n_of_stamps,
            availability,
            sort,
        })
    }

    /// Default options adjusted by configured defaults.
    pub fn from_defaults(defaults: &ComboDefaults) -> Result<Self> {
        let year = defaults
            .min_year
            .map_or(NumberRange::UNBOUNDED, NumberRange::since);
        Self::new(
            NumberRange::UNBOUNDED,
            year,
            None,
            defaults.n_of_stamps,
            AvailabilityRequirement::NoRequirement,
            defaults.sort.parse()?,
        )
    }

    #[inline]
    pub fn value_range(&self) -> &NumberRange {
        &self.value
    }

    #[inline]
    pub fn year_range(&self) -> &NumberRange {
        &self.year
    }

    #[inline]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[inline]
    pub fn n_of_stamps(&self) -> usize {
        self.n_of_stamps
    }

    #[inline]
    pub fn availability(&self) -> &AvailabilityRequirement {
        &self.availability
    }

    #[inline]
    pub fn sort(&self) -> &ComboSort {
        &self.sort
    }

    pub fn with_value_range(&self, value: NumberRange) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }

    pub fn with_year_range(&self, year: NumberRange) -> Self {
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

    pub fn with_sort(&self, sort: ComboSort) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn with_n_of_stamps(&self, n_of_stamps: usize) -> Result<Self> {
        check_n_of_stamps(n_of_stamps)?;
        Ok(Self {
            n_of_stamps,
            ..self.clone()
        })
    }

    /// Per-stamp acceptance: year, category, availability, and a value no
    /// greater than the target maximum.
    pub fn is_accepted(&self, stamp: &Stamp) -> bool {
        self.year.contains(stamp.year.map(f64::from))
            && self.value.without_start().contains(stamp.value)
            && self.availability.matches(stamp)
            && self.category.as_deref().map_or(true, |c| stamp.has_category(c))
    }

    pub fn filter_accepted(&self, stamps: &[Arc<Stamp>]) -> Vec<Arc<Stamp>> {
        stamps
            .iter()
            .filter(|s| self.is_accepted(s))
            .cloned()
            .collect()
    }

    fn full_params(&self) -> ParamMap {
        [
            (KEY_VALUE, self.value.to_string()),
            (KEY_YEAR, self.year.to_string()),
            (KEY_CATEGORY, self.category.clone().unwrap_or_default()),
            (KEY_AVAILABLE, self.availability.to_string()),
            (KEY_COUNT, self.n_of_stamps.to_string()),
            (KEY_SORT, self.sort.to_string()),
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
        let n_of_stamps = params::get(&map, KEY_COUNT).parse::<usize>().map_err(|_| {
            StampFinderError::InvalidConfiguration(format!(
                "stamp count '{}' is not a number",
                params::get(&map, KEY_COUNT)
            ))
        })?;
        Self::new(
            params::get(&map, KEY_VALUE).parse()?,
            params::get(&map, KEY_YEAR).parse()?,
            (!category.is_empty()).then(|| category.to_string()),
            n_of_stamps,
            AvailabilityRequirement::decode(params::get(&map, KEY_AVAILABLE)),
            params::get(&map, KEY_SORT).parse()?,
        )
    }
}

fn check_n_of_stamps(n_of_stamps: usize) -> Result<()> {
    if n_of_stamps == 0 {
        return Err(StampFinderError::InvalidConfiguration(
            "a combination needs at least one stamp".to_string(),
        ));
    }
    Ok(())
}
