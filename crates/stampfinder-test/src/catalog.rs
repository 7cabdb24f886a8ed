//! Catalog fixtures.
//!
//! # Example
//!
//! ```
//! use stampfinder_test::catalog::sample_catalog;
//!
//! let catalog = sample_catalog();
//! assert_eq!(catalog.len(), 8);
//! assert_eq!(catalog.shops().len(), 2);
//! ```

use stampfinder_core::{Catalog, Shop, ShopItem, StampShape};

use crate::stamps::StampBuilder;

fn shop(id: &str, display_name: &str, items: Vec<(&str, Vec<u32>)>) -> Shop {
    Shop {
        id: id.to_string(),
        display_name: display_name.to_string(),
        link: format!("https://{}.example", id),
        report_date: Some("2024-05-01".to_string()),
        index: 0,
        items: items
            .into_iter()
            .map(|(name, ids)| ShopItem {
                shop_id: id.to_string(),
                name: name.to_string(),
                amount: None,
                stamp_ids: ids,
            })
            .collect(),
    }
}

/// Eight stamps across years, categories and shapes, with two shops.
///
/// | id | value | year | width | categories   | shops       |
/// |----|-------|------|-------|--------------|-------------|
/// | 1  | 10    | 2019 | 30    | Birds        | post        |
/// | 2  | 10    | 2020 | 30    | Birds        | post, club  |
/// | 3  | 15    | 2021 | 25    | Space        |             |
/// | 4  | 25    | 2021 | 40    | Art          | club        |
/// | 5  | 12.5  | 2022 | 20    | Art          | post        |
/// | 6  | 5     | 1995 | 20    | Birds        | club        |
/// | 7  | 30    | 2023 | (d35) | Space, Art   |             |
/// | 8  | none  | 2023 | 30    | Art          | post        |
pub fn sample_catalog() -> Catalog {
    let stamps = vec![
        StampBuilder::new(1)
            .value(10.0)
            .year(2019)
            .width(30.0)
            .name("Owl")
            .category("Birds")
            .build(),
        StampBuilder::new(2)
            .value(10.0)
            .year(2020)
            .width(30.0)
            .name("Eagle")
            .category("Birds")
            .build(),
        StampBuilder::new(3)
            .value(15.0)
            .year(2021)
            .width(25.0)
            .name("Rocket")
            .series("Cosmonautics")
            .category("Space")
            .build(),
        StampBuilder::new(4)
            .value(25.0)
            .year(2021)
            .width(40.0)
            .name("Portrait")
            .category("Art")
            .build(),
        StampBuilder::new(5)
            .value(12.5)
            .year(2022)
            .width(20.0)
            .name("Sketch")
            .category("Art")
            .build(),
        StampBuilder::new(6)
            .value(5.0)
            .year(1995)
            .width(20.0)
            .name("Sparrow")
            .category("Birds")
            .build(),
        StampBuilder::new(7)
            .value(30.0)
            .year(2023)
            .shape(StampShape::Circle { d: 35.0 })
            .name("Moon")
            .series("Cosmonautics")
            .category("Space")
            .category("Art")
            .build(),
        StampBuilder::new(8)
            .no_value()
            .year(2023)
            .width(30.0)
            .name("Souvenir sheet")
            .category("Art")
            .build(),
    ];
    let shops = vec![
        shop(
            "post",
            "Post Office",
            vec![("Owl", vec![1]), ("Eagle", vec![2]), ("Art", vec![5, 8])],
        ),
        shop(
            "club",
            "Collectors Club",
            vec![("Eagle", vec![2]), ("Portrait", vec![4]), ("Sparrow", vec![6])],
        ),
    ];
    Catalog::new(stamps, shops)
}
