use electrical_quote_toolbox::catalog::{CableType, Catalog};
use electrical_quote_toolbox::dimensioning::{
    self, billed_length, normalize_rating, section_tier, translate_description, DimensioningError,
    DimensioningInput, InputError,
};
use electrical_quote_toolbox::logging;
use electrical_quote_toolbox::quote::LineKind;
use electrical_quote_toolbox::units::{BreakerRating, CableSection, DdrRating};
use rstest::rstest;
use rust_decimal_macros::dec;

const INPUT: &str = r#"{
    "circuit_breakers": [
        { "rating": 20, "quantity": 2, "description": "SimpleSocket circuit breaker" },
        { "rating": 17, "quantity": 1 }
    ],
    "electrical_panels": [ { "modules": 20, "type": "" } ],
    "cables": [
        { "type": "Câble RJ45", "section": 0, "length_estimate": 12.3 },
        { "type": "R2V 3G", "section": 3.0 },
        { "cableType": "prefile", "section": 5.0, "length_estimate": 4 }
    ],
    "surge_protectors": [ { "type": "Parafoudre", "quantity": 1 } ],
    "installation_notes": [ "Prévoir une gaine de réserve" ]
}"#;

fn input() -> DimensioningInput {
    serde_json::from_str(INPUT).expect("valid dimensioning json")
}

#[test]
fn non_standard_rating_falls_back_to_16a() {
    logging::init_test();
    assert_eq!(normalize_rating(17), BreakerRating::A16);
    assert_eq!(normalize_rating(0), BreakerRating::A16);
    assert_eq!(normalize_rating(63), BreakerRating::A63);
}

#[test]
fn descriptions_are_translated_on_word_boundaries() {
    assert_eq!(
        translate_description("SimpleSocket circuit breaker"),
        "prise simple disjoncteur"
    );
    assert_eq!(translate_description("WaterHeater 20A"), "chauffe-eau 20A");
    assert_eq!(translate_description("OvenSocketX"), "OvenSocketX");
}

#[rstest]
#[case(CableType::R2V, 12.0, Some(CableSection::S10))]
#[case(CableType::R2V, 10.0, Some(CableSection::S10))]
#[case(CableType::R2V, 7.0, Some(CableSection::S6))]
#[case(CableType::R2V, 4.0, Some(CableSection::S4))]
#[case(CableType::R2V, 3.0, Some(CableSection::S2_5))]
#[case(CableType::R2V, 1.0, Some(CableSection::S1_5))]
#[case(CableType::Prefile, 10.0, Some(CableSection::S6))]
#[case(CableType::Prefile, 4.0, Some(CableSection::S2_5))]
#[case(CableType::Prefile, 2.0, Some(CableSection::S1_5))]
#[case(CableType::RJ45, 2.5, None)]
#[case(CableType::Coaxial, 0.0, None)]
fn cable_section_tiers(
    #[case] cable_type: CableType,
    #[case] section: f64,
    #[case] expected: Option<CableSection>,
) {
    assert_eq!(section_tier(cable_type, section), expected);
}

#[rstest]
#[case(None, 10)]
#[case(Some(0.0), 10)]
#[case(Some(4.0), 4)]
#[case(Some(12.3), 13)]
fn cable_length_is_rounded_up(#[case] estimate: Option<f64>, #[case] metres: u32) {
    assert_eq!(billed_length(estimate), metres);
}

#[test]
fn generate_prices_every_item() {
    let catalog = Catalog::builtin();
    let quote = dimensioning::generate(&input(), &catalog).expect("generate");

    assert_eq!(quote.breakers.len(), 2);
    assert_eq!(quote.breakers[0].id, "cb-0");
    assert_eq!(quote.breakers[0].label, "prise simple disjoncteur");
    assert_eq!(quote.breakers[0].reference, "SCHR9PFC620");
    assert_eq!(quote.breakers[1].rating, BreakerRating::A16);
    assert_eq!(quote.breakers[1].label, "Disjoncteur 16A");

    assert_eq!(quote.panels[0].reference, "SCHR9H13402");
    assert_eq!(quote.panels[0].label, "Tableau 26 modules");
    assert_eq!(quote.panels[0].quantity, 1);

    let cables: Vec<(&str, u32)> = quote
        .cables
        .iter()
        .map(|c| (c.reference.as_str(), c.quantity))
        .collect();
    assert_eq!(
        cables,
        vec![("ABEFTP1X4PCAT6", 13), ("ABER2V3G2.5", 10), ("ABEPREF3G2.5", 4)]
    );
    assert_eq!(quote.cables[0].label, "Câble RJ45 Cat6");

    assert_eq!(quote.surge_protectors[0].reference, "SCHR9PLC");
    assert_eq!(quote.surge_protectors[0].unit_price, dec!(120));
    assert_eq!(quote.surge_protectors[0].label, "Parafoudre");
    assert_eq!(quote.installation_notes.len(), 1);

    let layout = quote.layout().expect("fresh layout");
    let ddr = layout.ddrs().next().expect("one ddr");
    assert_eq!(ddr.total_rating, 56);
    assert_eq!(ddr.adjusted_rating, 40);
    assert_eq!(ddr.rating, DdrRating::A40);
}

#[test]
fn line_items_follow_item_order() {
    let quote = dimensioning::generate(&input(), &Catalog::builtin()).expect("generate");
    let kinds: Vec<LineKind> = quote.line_items().iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::CircuitBreaker,
            LineKind::CircuitBreaker,
            LineKind::ElectricalPanel,
            LineKind::Cable,
            LineKind::Cable,
            LineKind::Cable,
            LineKind::SurgeProtector,
            LineKind::DifferentialCircuitBreaker,
        ]
    );
}

#[test]
fn editing_clears_layout_until_recompute() {
    let catalog = Catalog::builtin();
    let mut quote = dimensioning::generate(&input(), &catalog).expect("generate");

    quote
        .edit_breaker("cb-1", BreakerRating::A32, 1, &catalog)
        .expect("edit");
    assert!(quote.is_stale());
    assert!(quote
        .line_items()
        .iter()
        .all(|l| l.kind != LineKind::DifferentialCircuitBreaker));
    assert_eq!(quote.breakers[1].reference, "SCHR9PFC632");
    assert_eq!(quote.breakers[1].label, "Disjoncteur 32A");
    assert_eq!(quote.breakers[1].price, dec!(14.00));

    let layout = quote.recompute_layout(&catalog);
    let ddr = layout.ddrs().next().expect("ddr");
    assert_eq!(ddr.total_rating, 72);
    assert_eq!(ddr.adjusted_rating, 51);
    assert_eq!(ddr.rating, DdrRating::A63);
    assert!(!quote.is_stale());
}

#[test]
fn add_and_remove_breakers() {
    let catalog = Catalog::builtin();
    let mut quote = dimensioning::generate(&input(), &catalog).expect("generate");

    let added = quote
        .add_breaker(BreakerRating::A10, 1, &catalog)
        .expect("add");
    assert_eq!(added, "cb-2");
    let removed = quote.remove_breaker("cb-0").expect("remove");
    assert_eq!(removed.rating, BreakerRating::A20);
    assert_eq!(
        quote.add_breaker(BreakerRating::A2, 1, &catalog).expect("add"),
        "cb-3"
    );

    let layout = quote.recompute_layout(&catalog).clone();
    assert_eq!(layout.rows[0].row.breaker_ids(), vec!["cb-1", "cb-2", "cb-3"]);
}

#[test]
fn editing_unknown_breaker_fails() {
    let catalog = Catalog::builtin();
    let mut quote = dimensioning::generate(&input(), &catalog).expect("generate");
    let err = quote
        .edit_breaker("cb-99", BreakerRating::A16, 1, &catalog)
        .unwrap_err();
    assert!(matches!(
        err,
        DimensioningError::Input(InputError::UnknownBreaker(ref id)) if id == "cb-99"
    ));
    assert!(!quote.is_stale());
}

#[test]
fn zero_quantity_is_rejected() {
    let mut bad = input();
    bad.circuit_breakers[1].quantity = 0;
    assert_eq!(
        bad.validate(),
        Err(InputError::ZeroQuantity {
            field: "circuit_breakers",
            index: 1
        })
    );
    assert!(dimensioning::generate(&bad, &Catalog::builtin()).is_err());
}

#[test]
fn negative_cable_values_are_rejected() {
    let mut bad = input();
    bad.cables[0].length_estimate = Some(-1.0);
    assert!(matches!(
        bad.validate(),
        Err(InputError::InvalidNumber {
            field: "cables.length_estimate",
            index: 0,
            ..
        })
    ));
}
