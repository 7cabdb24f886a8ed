//! Loading catalogs from feed files on disk.

use std::io::Write;

use stampfinder_core::{Catalog, StampFinderError};

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_from_files() {
    let stamps = write_temp(
        r#"[{"id": 5, "page": "p", "image": "5.png", "value": 20, "year": 2001, "categories": []}]"#,
    );
    let shops = write_temp(
        r#"[{"id": "s", "displayName": "S", "link": "l", "reportDate": "2024-01-01",
            "items": [{"name": "five", "ids": [5]}]}]"#,
    );

    let catalog = Catalog::load("/img/", stamps.path(), shops.path()).unwrap();
    let stamp = catalog.stamp(5).unwrap();
    assert_eq!(stamp.whole_value(), Some(20));
    assert_eq!(stamp.image_url.as_deref(), Some("/img/5.png"));
    assert!(stamp.is_listed_by("s"));
}

#[test]
fn test_missing_file_is_io_error() {
    let shops = write_temp("[]");
    let result = Catalog::load("", "/definitely/not/here.json", shops.path());
    assert!(matches!(result, Err(StampFinderError::Io(_))));
}
