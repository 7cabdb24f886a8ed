use stampfinder_core::{AvailabilityRequirement, Catalog, NumberRange};
use stampfinder_search::SearchOptions;

const STAMPS: &str = r#"[
    {"id": 101, "page": "2019", "image": "101.png", "value": 25, "year": 2019,
     "categories": ["Fauna"], "name": "Lynx", "shape": {"type": "rect", "w": 30, "h": 40}},
    {"id": 102, "page": "2020", "image": "102.png", "value": 30, "year": 2020,
     "categories": ["Fauna"], "name": "Bear", "shape": {"type": "oval", "w": 35, "h": 30}},
    {"id": 103, "page": "2020", "image": null, "value": null, "year": 2020,
     "categories": ["Space"], "name": "Orbit", "series": "Space age"},
    {"id": 104, "page": "1997", "image": "104.png", "value": 10, "year": 1997,
     "categories": ["Fauna"], "name": "Hare"}
]"#;

const SHOPS: &str = r#"[
    {"id": "kiosk", "displayName": "Kiosk", "link": "https://kiosk.example",
     "reportDate": "2024-02-01", "items": [{"name": "Bear", "ids": [102], "amount": 3}]}
]"#;

fn catalog() -> Catalog {
    Catalog::from_json_str("https://img.example/", STAMPS, SHOPS).unwrap()
}

fn ids(options: &SearchOptions) -> Vec<u32> {
    options
        .filter_and_sort(catalog().stamps())
        .iter()
        .map(|s| s.id)
        .collect()
}

#[test]
fn test_default_listing() {
    assert_eq!(ids(&SearchOptions::default()), vec![103, 102, 101]);
}

#[test]
fn test_search_from_url_params() {
    let options =
        SearchOptions::from_params([("category", "Fauna"), ("year", "~"), ("sort", "value-asc")])
            .unwrap();
    assert_eq!(ids(&options), vec![104, 101, 102]);
}

#[test]
fn test_value_range_excludes_unpriced() {
    let options = SearchOptions::default().with_value(NumberRange::at_least(0.0).unwrap());
    assert_eq!(ids(&options), vec![102, 101]);
}

#[test]
fn test_available_in_shop() {
    let options = SearchOptions::default().with_availability(AvailabilityRequirement::AnyShop);
    assert_eq!(ids(&options), vec![102]);
}

#[test]
fn test_text_search_in_series() {
    let options = SearchOptions::default().with_contains("space AGE");
    assert_eq!(ids(&options), vec![103]);
}

#[test]
fn test_sort_by_area_puts_shapeless_last() {
    let options = SearchOptions::from_params([("sort", "boxarea-desc")]).unwrap();
    assert_eq!(ids(&options), vec![101, 102, 103]);
}
