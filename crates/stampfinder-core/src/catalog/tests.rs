//! Tests for catalog construction.

use super::*;

const STAMPS_JSON: &str = r#"[
    {"id": 1, "page": "2020", "image": "1.png", "value": 10, "year": 2020,
     "categories": ["Nature", "Birds"], "name": "Owl",
     "shape": {"type": "rect", "w": 30, "h": 40}},
    {"id": 2, "page": "2021", "image": null, "value": 12.5, "year": 2021,
     "categories": null, "series": "Lighthouses",
     "shape": {"type": "circle", "d": 25}},
    {"id": 3, "page": "old", "image": null, "value": null, "year": null,
     "categories": ["Art"]}
]"#;

const SHOPS_JSON: &str = r#"[
    {"id": "post", "displayName": "Post Office", "link": "https://post.example",
     "reportDate": "2024-01-10",
     "items": [{"name": "Owl", "ids": [1]}, {"name": "Ghost", "ids": [99]}]},
    {"id": "club", "displayName": "Club", "link": "https://club.example",
     "reportDate": "2024-02-01",
     "items": [{"name": "Lot", "ids": [1, 2], "amount": 4}]}
]"#;

fn sample() -> Catalog {
    Catalog::from_json_str("https://img.example/", STAMPS_JSON, SHOPS_JSON).unwrap()
}

#[test]
fn test_decodes_stamps() {
    let catalog = sample();
    assert_eq!(catalog.len(), 3);

    let owl = catalog.stamp(1).unwrap();
    assert_eq!(owl.image_url.as_deref(), Some("https://img.example/1.png"));
    assert_eq!(owl.shape, Some(StampShape::Rect { w: 30.0, h: 40.0 }));
    assert_eq!(owl.categories, vec!["Nature", "Birds"]);

    let lighthouse = catalog.stamp(2).unwrap();
    assert!(lighthouse.categories.is_empty());
    assert_eq!(lighthouse.image_url, None);
    assert_eq!(lighthouse.width(), Some(25.0));
}

#[test]
fn test_links_shop_items() {
    let catalog = sample();
    let owl = catalog.stamp(1).unwrap();
    assert_eq!(owl.shop_items.len(), 2);
    assert!(owl.is_listed_by("post"));
    assert!(owl.is_listed_by("club"));

    let lighthouse = catalog.stamp(2).unwrap();
    assert!(!lighthouse.is_listed_by("post"));
    assert_eq!(lighthouse.shop_items[0].amount, Some(4));

    assert!(!catalog.stamp(3).unwrap().is_available());
}

#[test]
fn test_shop_indexes_follow_feed_order() {
    let catalog = sample();
    assert_eq!(catalog.shops()[0].index, 0);
    assert_eq!(catalog.shop("club").unwrap().index, 1);
    assert_eq!(catalog.shop("post").unwrap().items.len(), 2);
}

#[test]
fn test_stats() {
    let stats = sample().stats().clone();
    assert_eq!(stats.min_year, 2020);
    assert_eq!(stats.max_year, 2021);
    assert_eq!(stats.categories, vec!["Art", "Birds", "Nature"]);
}

#[test]
fn test_empty_catalog_stats() {
    let catalog = Catalog::new(Vec::new(), Vec::new());
    assert!(catalog.is_empty());
    assert_eq!(catalog.stats(), &CatalogStats::default());
}

#[test]
fn test_invalid_json_is_an_error() {
    let result = Catalog::from_json_str("", "{not json", "[]");
    assert!(matches!(
        result,
        Err(crate::StampFinderError::CatalogDecode(_))
    ));
}
