//! Inclusive numeric ranges with optional bounds.
//!
//! Ranges back every numeric filter (stamp value, issue year) and the target
//! value window of the combination search. Either side may be absent; a range
//! whose sides coincide is *exact* and prints as a single number.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StampFinderError};

/// Separator between the bounds in the text form (`"15~19"`).
const SEPARATOR: char = '~';

/// An inclusive range `[start, end]` where either bound may be absent.
///
/// # Examples
///
/// ```
/// use stampfinder_core::NumberRange;
///
/// let range = NumberRange::between(Some(10.0), Some(20.0)).unwrap();
/// assert!(range.contains(Some(15.0)));
/// assert!(!range.contains(Some(21.0)));
/// assert!(!range.contains(None));
/// assert_eq!(range.to_string(), "10~20");
///
/// let exact: NumberRange = "25".parse().unwrap();
/// assert!(exact.is_exact());
/// assert_eq!(exact.end(), Some(25.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumberRange {
    start: Option<f64>,
    end: Option<f64>,
}

impl NumberRange {
    /// The range with neither bound set.
    pub const UNBOUNDED: NumberRange = NumberRange {
        start: None,
        end: None,
    };

    /// Creates a range, rejecting non-finite bounds and `start > end`.
    pub fn between(start: Option<f64>, end: Option<f64>) -> Result<Self> {
        for bound in [start, end].into_iter().flatten() {
            if !bound.is_finite() {
                return Err(StampFinderError::InvalidRange(format!(
                    "bound {} is not a finite number",
                    bound
                )));
            }
        }
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(StampFinderError::InvalidRange(format!("{} > {}", s, e)));
            }
        }
        Ok(Self { start, end })
    }

    /// Creates a range containing exactly one value.
    pub fn exact(value: f64) -> Result<Self> {
        Self::between(Some(value), Some(value))
    }

    /// Creates a range bounded from below only.
    pub fn at_least(start: f64) -> Result<Self> {
        Self::between(Some(start), None)
    }

    /// Creates `[start, ∞)` for a whole-number start such as an issue year.
    pub fn since(start: i32) -> Self {
        Self {
            start: Some(f64::from(start)),
            end: None,
        }
    }

    /// Creates a range bounded from above only.
    pub fn at_most(end: f64) -> Result<Self> {
        Self::between(None, Some(end))
    }

    #[inline]
    pub fn start(&self) -> Option<f64> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<f64> {
        self.end
    }

    /// Returns true when both sides coincide (including the unbounded range).
    pub fn is_exact(&self) -> bool {
        self.start == self.end
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Returns true when both bounds are present.
    pub fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Tests membership. An absent value only belongs to the unbounded range.
    pub fn contains(&self, n: Option<f64>) -> bool {
        match n {
            None => self.is_unbounded(),
            Some(n) => {
                self.start.map_or(true, |s| s <= n) && self.end.map_or(true, |e| e >= n)
            }
        }
    }

    /// Returns a copy of this range with the lower bound dropped.
    pub fn without_start(&self) -> Self {
        Self {
            start: None,
            end: self.end,
        }
    }
}

fn write_bound(f: &mut fmt::Formatter<'_>, bound: Option<f64>) -> fmt::Result {
    match bound {
        Some(b) => write!(f, "{}", b),
        None => Ok(()),
    }
}

impl fmt::Display for NumberRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_exact() {
            write_bound(f, self.start)
        } else {
            write_bound(f, self.start)?;
            write!(f, "{}", SEPARATOR)?;
            write_bound(f, self.end)
        }
    }
}

fn parse_bound(s: &str, whole: &str) -> Result<Option<f64>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .map(Some)
        .ok_or_else(|| StampFinderError::InvalidRange(format!("cannot parse '{}'", whole)))
}

impl FromStr for NumberRange {
    type Err = StampFinderError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(SEPARATOR).collect();
        match parts.as_slice() {
            [single] => {
                let value = parse_bound(single, s)?;
                Self::between(value, value)
            }
            [start, end] => Self::between(parse_bound(start, s)?, parse_bound(end, s)?),
            _ => Err(StampFinderError::InvalidRange(format!(
                "cannot parse '{}'",
                s
            ))),
        }
    }
}
