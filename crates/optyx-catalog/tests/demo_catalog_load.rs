use std::io::Write;
use std::path::PathBuf;

use optyx_catalog::{load_catalog, provenance, stable_hash_string, CategoryId, Price};

fn demo_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("data")
        .join("catalog.demo.yaml")
}

#[test]
fn demo_catalog_loads() {
    let catalog = load_catalog(demo_path()).expect("load demo catalog");
    assert_eq!(catalog.brand, "Lumos Optical");
    assert_eq!(catalog.rows(CategoryId::SvMinusComp).len(), 6);
    assert_eq!(catalog.rows(CategoryId::CylKt).len(), 8);
    assert_eq!(catalog.rows(CategoryId::BifocalKt).len(), 5);
    assert!(catalog.row_count() > 30);
}

#[test]
fn price_entry_order_is_the_authoring_order() {
    let catalog = load_catalog(demo_path()).expect("load demo catalog");
    let first = &catalog.rows(CategoryId::SvMinusComp)[0];
    let codes: Vec<&str> = first
        .prices
        .iter()
        .map(|entry| entry.code.as_str())
        .collect();
    assert_eq!(codes, ["HC", "ARC", "BLUCUT", "ARC_PG"]);
    assert_eq!(first.prices[0].price, Price::Amount(500));
    assert_eq!(first.prices[3].price, Price::NotOffered);
}

#[test]
fn catalog_hash_is_stable_across_loads() {
    let first = load_catalog(demo_path()).expect("first load");
    let second = load_catalog(demo_path()).expect("second load");
    assert_eq!(
        stable_hash_string(&first).expect("first hash"),
        stable_hash_string(&second).expect("second hash")
    );
}

#[test]
fn provenance_reflects_the_catalog() {
    let catalog = load_catalog(demo_path()).expect("load demo catalog");
    let descriptor = provenance(&catalog).expect("provenance");
    assert_eq!(descriptor.brand, "Lumos Optical");
    assert_eq!(
        descriptor.catalog_hash,
        stable_hash_string(&catalog).expect("hash")
    );
}

#[test]
fn loading_a_missing_file_reports_the_path() {
    let err = load_catalog("does/not/exist.yaml").expect_err("missing file");
    let info = err.info();
    assert_eq!(info.code, "catalog_read");
    assert!(info.context["path"].contains("exist.yaml"));
}

#[test]
fn catalogs_load_from_any_file_path() {
    let minimal = concat!(
        "brand: Test Brand\n",
        "single_vision:\n",
        "  minus_comp:\n",
        "    - range: \"-6.0 to -2.0\"\n",
        "      prices:\n",
        "        - { code: HC, price: 100 }\n",
    );
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(minimal.as_bytes()).expect("write");
    let catalog = load_catalog(file.path()).expect("load minimal");
    assert_eq!(catalog.brand, "Test Brand");
    assert_eq!(catalog.rows(CategoryId::SvMinusComp).len(), 1);
    assert!(catalog.rows(CategoryId::ProgressiveSph).is_empty());
}
