use std::path::PathBuf;

use optyx_catalog::{load_catalog, Catalog, CategoryId};
use optyx_core::{PowerType, Rx};
use optyx_match::{find_best_match, validate_catalog};

fn demo_catalog() -> Catalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("data")
        .join("catalog.demo.yaml");
    load_catalog(path).expect("demo catalog loads")
}

const FLAWED: &str = concat!(
    "brand: Flawed\n",
    "single_vision:\n",
    "  minus_comp:\n",
    "    - range: \"-6.0 to -2.0\"\n",
    "      prices:\n",
    "        - { code: HC, price: 500 }\n",
    "    - range: \"mystery\"\n",
    "      prices:\n",
    "        - { code: HC, price: 500 }\n",
    "cyl_kt:\n",
    "  - range: \"+2, 30°\"\n",
    "    prices:\n",
    "      - { code: HC, price: 580 }\n",
    "bifocal_kt:\n",
    "  - range: \"0/+ ADD\"\n",
    "    prices:\n",
    "      - { code: HC, price: 900 }\n",
);

#[test]
fn the_demo_catalog_validates_clean() {
    assert_eq!(validate_catalog(&demo_catalog()), Vec::new());
}

#[test]
fn unparseable_ranges_are_reported_with_their_location() {
    let catalog = Catalog::from_yaml_slice(FLAWED.as_bytes()).expect("flawed catalog loads");
    let issues = validate_catalog(&catalog);
    let parse_issue = issues
        .iter()
        .find(|issue| issue.range == "mystery")
        .expect("unparseable row is reported");
    assert_eq!(parse_issue.category, CategoryId::SvMinusComp);
    assert_eq!(parse_issue.row, 1);
}

#[test]
fn dead_rows_are_reported() {
    let catalog = Catalog::from_yaml_slice(FLAWED.as_bytes()).expect("flawed catalog loads");
    let issues = validate_catalog(&catalog);
    assert!(issues
        .iter()
        .any(|issue| issue.range == "0/+ ADD" && issue.message.contains("never match")));
    assert!(issues
        .iter()
        .any(|issue| issue.range == "+2, 30°" && issue.message.contains("standard axes")));
    assert_eq!(issues.len(), 3);
}

#[test]
fn flawed_rows_never_match_but_never_fail_the_load() {
    let catalog = Catalog::from_yaml_slice(FLAWED.as_bytes()).expect("flawed catalog loads");
    // The healthy first row still matches; the unparseable second row is
    // skipped silently at match time.
    let found =
        find_best_match(Rx::new(-3.0, 0.0, 0), &catalog, PowerType::WithPower).expect("matches");
    assert_eq!(found.row.range, "-6.0 to -2.0");
    // The dead ADD row never takes an order.
    assert!(find_best_match(Rx::new(0.0, 0.0, 0), &catalog, PowerType::Bifocal).is_none());
}
