use optyx_catalog::{Catalog, Price, PriceEntry, RangeRow};

#[test]
fn amounts_serialize_as_numbers() {
    assert_eq!(
        serde_json::to_string(&Price::Amount(500)).expect("serialize"),
        "500"
    );
}

#[test]
fn not_offered_serializes_as_the_dash_sentinel() {
    assert_eq!(
        serde_json::to_string(&Price::NotOffered).expect("serialize"),
        "\"-\""
    );
}

#[test]
fn prices_roundtrip_both_ways() {
    for price in [Price::Amount(0), Price::Amount(2100), Price::NotOffered] {
        let json = serde_json::to_string(&price).expect("serialize");
        let back: Price = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(price, back);
    }
}

#[test]
fn unexpected_price_strings_are_rejected() {
    assert!(serde_json::from_str::<Price>("\"free\"").is_err());
    assert!(serde_json::from_str::<Price>("\"--\"").is_err());
}

#[test]
fn negative_prices_are_rejected() {
    assert!(serde_json::from_str::<Price>("-100").is_err());
}

#[test]
fn rows_keep_entry_order_through_a_roundtrip() {
    let row = RangeRow {
        range: "-6.0 to -2.0".to_string(),
        prices: vec![
            PriceEntry {
                code: "BLUCUT".to_string(),
                price: Price::Amount(900),
            },
            PriceEntry {
                code: "HC".to_string(),
                price: Price::Amount(500),
            },
            PriceEntry {
                code: "ARC".to_string(),
                price: Price::NotOffered,
            },
        ],
    };
    let json = serde_json::to_string(&row).expect("serialize");
    let back: RangeRow = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(row, back);
    let codes: Vec<&str> = back.prices.iter().map(|e| e.code.as_str()).collect();
    assert_eq!(codes, ["BLUCUT", "HC", "ARC"]);
}

#[test]
fn yaml_catalogs_accept_the_dash_sentinel() {
    let yaml = concat!(
        "brand: Inline\n",
        "cyl_kt:\n",
        "  - range: \"+2, 90°\"\n",
        "    prices:\n",
        "      - { code: HC, price: 580 }\n",
        "      - { code: ARC, price: \"-\" }\n",
    );
    let catalog = Catalog::from_yaml_slice(yaml.as_bytes()).expect("parse");
    assert_eq!(catalog.cyl_kt[0].prices[1].price, Price::NotOffered);
}
