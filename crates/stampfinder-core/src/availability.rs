//! Availability requirements: which shops must list a stamp.

use std::fmt;

use crate::catalog::{Shop, Stamp};

/// Text form of [`AvailabilityRequirement::AnyShop`].
const ANY: &str = "any";

/// Constraint on the shops listing a stamp.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AvailabilityRequirement {
    /// Every stamp matches.
    #[default]
    NoRequirement,
    /// The stamp must be listed by at least one shop.
    AnyShop,
    /// The stamp must be listed by at least one of these shops.
    Shops(Vec<String>),
}

impl AvailabilityRequirement {
    /// Builds a requirement from the set of shops a user ticked.
    ///
    /// Nothing ticked means no requirement; everything ticked means any shop.
    pub fn from_selection<S: AsRef<str>>(selected: &[S], total_shops: usize) -> Self {
        if selected.is_empty() {
            AvailabilityRequirement::NoRequirement
        } else if selected.len() == total_shops {
            AvailabilityRequirement::AnyShop
        } else {
            AvailabilityRequirement::Shops(
                selected.iter().map(|s| s.as_ref().to_string()).collect(),
            )
        }
    }

    /// Decodes the text form written by `Display`.
    pub fn decode(s: &str) -> Self {
        if s == ANY {
            AvailabilityRequirement::AnyShop
        } else if s.is_empty() {
            AvailabilityRequirement::NoRequirement
        } else {
            AvailabilityRequirement::Shops(s.split(',').map(str::to_string).collect())
        }
    }

    pub fn matches(&self, stamp: &Stamp) -> bool {
        match self {
            AvailabilityRequirement::NoRequirement => true,
            AvailabilityRequirement::AnyShop => stamp.is_available(),
            AvailabilityRequirement::Shops(ids) => stamp
                .shop_items
                .iter()
                .any(|item| ids.iter().any(|id| *id == item.shop_id)),
        }
    }

    /// Returns true when a listing in `shop` satisfies this requirement.
    pub fn is_shop_accepted(&self, shop: &Shop) -> bool {
        match self {
            AvailabilityRequirement::NoRequirement => false,
            AvailabilityRequirement::AnyShop => true,
            AvailabilityRequirement::Shops(ids) => ids.iter().any(|id| *id == shop.id),
        }
    }
}

impl fmt::Display for AvailabilityRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AvailabilityRequirement::NoRequirement => Ok(()),
            AvailabilityRequirement::AnyShop => f.write_str(ANY),
            AvailabilityRequirement::Shops(ids) => f.write_str(&ids.join(",")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ShopItem;

    fn listed_in(shops: &[&str]) -> Stamp {
        let mut stamp = Stamp::new(1);
        stamp.shop_items = shops
            .iter()
            .map(|shop| ShopItem {
                shop_id: shop.to_string(),
                name: "Hello".to_string(),
                amount: Some(1),
                stamp_ids: vec![1],
            })
            .collect();
        stamp
    }

    #[test]
    fn test_any_shop() {
        let req = AvailabilityRequirement::AnyShop;
        assert!(!req.matches(&listed_in(&[])));
        assert!(req.matches(&listed_in(&["shop1"])));
    }

    #[test]
    fn test_specific_shops() {
        let req = AvailabilityRequirement::Shops(vec!["shop2".to_string()]);
        assert!(!req.matches(&listed_in(&[])));
        assert!(!req.matches(&listed_in(&["shop1"])));
        assert!(req.matches(&listed_in(&["shop1", "shop2"])));
    }

    #[test]
    fn test_no_requirement() {
        assert!(AvailabilityRequirement::NoRequirement.matches(&listed_in(&[])));
    }

    #[test]
    fn test_from_selection() {
        assert_eq!(
            AvailabilityRequirement::from_selection::<&str>(&[], 3),
            AvailabilityRequirement::NoRequirement
        );
        assert_eq!(
            AvailabilityRequirement::from_selection(&["a", "b", "c"], 3),
            AvailabilityRequirement::AnyShop
        );
        assert_eq!(
            AvailabilityRequirement::from_selection(&["a"], 3),
            AvailabilityRequirement::Shops(vec!["a".to_string()])
        );
    }

    #[test]
    fn test_text_form() {
        for req in [
            AvailabilityRequirement::NoRequirement,
            AvailabilityRequirement::AnyShop,
            AvailabilityRequirement::Shops(vec!["a".to_string(), "b".to_string()]),
        ] {
            assert_eq!(AvailabilityRequirement::decode(&req.to_string()), req);
        }
        assert_eq!(AvailabilityRequirement::AnyShop.to_string(), "any");
    }
}
