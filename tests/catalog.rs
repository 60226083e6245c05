use std::io::Write;

use electrical_quote_toolbox::catalog::{
    CableType, Catalog, CatalogError, EquipmentType, PlateColor, PlateSize, MAX_UNIT_PRICE,
};
use electrical_quote_toolbox::dimensioning::{generate_breakers, BreakerInput};
use electrical_quote_toolbox::panel::{compute_layout, RowProtection};
use electrical_quote_toolbox::units::{BreakerRating, CableSection, DdrRating};
use rstest::rstest;
use rust_decimal_macros::dec;

#[test]
fn builtin_breaker_and_ddr_parts() {
    let catalog = Catalog::builtin();
    let b16 = catalog.breaker(BreakerRating::A16).expect("16A");
    assert_eq!(b16.part.reference, "SCHR9PFC616");
    assert_eq!(b16.part.price, dec!(8.50));

    let ddr = catalog.ddr(DdrRating::A40).expect("40A ddr");
    assert_eq!(ddr.part.reference, "SCHR9PFE240");
    assert_eq!(ddr.part.price, dec!(45.00));
    assert_eq!(catalog.ddr(DdrRating::A63).map(|d| d.part.price), Some(dec!(65.00)));
}

#[rstest]
#[case(0, "SCHR9H13401")]
#[case(13, "SCHR9H13401")]
#[case(14, "SCHR9H18401")]
#[case(18, "SCHR9H18401")]
#[case(20, "SCHR9H13402")]
#[case(72, "SCHR9H18404")]
#[case(200, "SCHR9H18404")]
fn panel_selection(#[case] modules: u32, #[case] reference: &str) {
    let catalog = Catalog::builtin();
    let panel = catalog.panel_for_modules(modules).expect("panel");
    assert_eq!(panel.part.reference, reference);
}

#[test]
fn lookups_by_typed_keys() {
    let catalog = Catalog::builtin();
    assert_eq!(
        catalog
            .cable(CableType::R2V, Some(CableSection::S2_5))
            .map(|c| c.part.reference.as_str())
            .ok(),
        Some("ABER2V3G2.5")
    );
    assert!(catalog.cable(CableType::RJ45, None).is_ok());
    assert!(matches!(
        catalog.cable(CableType::Prefile, Some(CableSection::S4)),
        Err(CatalogError::MissingPart { kind: "cable", .. })
    ));
    assert_eq!(
        catalog
            .plate(PlateColor::Black, PlateSize::Double)
            .map(|p| p.part.reference.as_str()),
        Some("SCHS540704")
    );
    assert!(catalog.equipment(EquipmentType::SimpleSocket).is_some());
    assert!(catalog.equipment(EquipmentType::Convector).is_none());
    assert_eq!(
        catalog.find_part("SCHR9PLC").map(|p| p.price),
        Some(dec!(120.00))
    );
}

#[test]
fn toml_round_trip_keeps_catalog() {
    let catalog = Catalog::builtin();
    let text = catalog.to_toml_string().expect("serialize");
    let parsed = Catalog::from_toml_str(&text).expect("parse");
    assert_eq!(parsed, catalog);
}

#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"
version = "client-2025"

[[circuit_breakers]]
rating = 16
part = {{ reference = "X16", label = "Disjoncteur 16A", price = "9.10" }}

[[differential_breakers]]
rating = 25
part = {{ reference = "D25", label = "DDR 25A", price = "30" }}
"#
    )
    .expect("write");

    let catalog = Catalog::load(file.path()).expect("load");
    assert_eq!(catalog.version, "client-2025");
    assert_eq!(catalog.breaker(BreakerRating::A16).map(|b| b.part.price).ok(), Some(dec!(9.10)));
    assert!(catalog.panels.is_empty());
    assert!(matches!(
        catalog.breaker(BreakerRating::A20),
        Err(CatalogError::MissingPart { kind: "circuit_breaker", .. })
    ));
}

#[test]
fn negative_price_is_rejected() {
    let src = r#"
version = "bad"

[[surge_protectors]]
reference = "SP"
label = "Parafoudre"
price = "-1.00"
"#;
    assert!(matches!(
        Catalog::from_toml_str(src),
        Err(CatalogError::NegativePrice(reference)) if reference == "SP"
    ));
}

#[rstest]
#[case("79228162514264337593543950335")]
#[case("1000000.01")]
fn oversized_price_is_rejected(#[case] price: &str) {
    let src = format!(
        r#"
version = "huge"

[[surge_protectors]]
reference = "SP"
label = "Parafoudre"
price = "{price}"
"#
    );
    assert!(matches!(
        Catalog::from_toml_str(&src),
        Err(CatalogError::PriceOutOfRange { reference, .. }) if reference == "SP"
    ));
}

#[test]
fn price_at_upper_bound_is_accepted() {
    let src = format!(
        r#"
version = "edge"

[[surge_protectors]]
reference = "SP"
label = "Parafoudre"
price = "{MAX_UNIT_PRICE}"
"#
    );
    let catalog = Catalog::from_toml_str(&src).expect("bound is inclusive");
    assert_eq!(catalog.surge_protectors[0].price, MAX_UNIT_PRICE);
}

#[test]
fn unknown_rating_in_file_is_a_parse_error() {
    let src = r#"
version = "bad"

[[circuit_breakers]]
rating = 17
part = { reference = "X", label = "x", price = "1" }
"#;
    assert!(matches!(Catalog::from_toml_str(src), Err(CatalogError::Parse(_))));
}

#[test]
fn missing_ddr_part_leaves_row_unconfigured() {
    let mut catalog = Catalog::builtin();
    catalog
        .differential_breakers
        .retain(|d| d.rating != DdrRating::A63);

    let inputs: Vec<BreakerInput> = (0..9)
        .map(|_| BreakerInput {
            rating: 16,
            quantity: 1,
            description: None,
        })
        .collect();
    let breakers = generate_breakers(&inputs, &catalog).expect("breakers");
    let layout = compute_layout(&breakers, &catalog);

    assert_eq!(layout.unconfigured_rows(), vec![1]);
    match &layout.rows[0].protection {
        RowProtection::Unconfigured(sizing) => {
            assert_eq!(sizing.rating, DdrRating::A63);
            assert_eq!(sizing.total_rating, 128);
        }
        other => panic!("expected unconfigured row, got {other:?}"),
    }
    assert_eq!(layout.line_items().len(), 1);
}
