use electrical_quote_toolbox::catalog::{Catalog, EquipmentType};
use electrical_quote_toolbox::dimensioning::InputError;
use electrical_quote_toolbox::project::{Project, ProjectError};
use electrical_quote_toolbox::quote::{
    self, build_quote, calculate_total, total::round_for_display, write_csv, LineKind,
    QuoteError, QuoteLineItem,
};
use rust_decimal_macros::dec;

const PROJECT: &str = r##"{
    "name": "Maison Dupont",
    "pieces": [ { "id": 1, "name": "Cuisine" }, { "id": "2", "name": "" } ],
    "equipments": [
        { "roomId": "1", "type": "SimpleSocket", "quantity": 2 },
        { "roomId": "1", "type": "Dedicated20ASocket", "quantity": 1 },
        { "roomId": "1", "type": "DoubleSwitch", "quantity": 1, "metadata": { "color": "#000000" } },
        { "roomId": "1", "type": "LightingPoint", "quantity": 4 },
        { "roomId": "2", "type": "Convector", "quantity": 1 },
        { "roomId": "2", "type": "SimpleSocket", "quantity": 1, "metadata": { "color": "#FF0000" } }
    ],
    "dimensioning": {
        "circuit_breakers": [ { "rating": 16, "quantity": 1 }, { "rating": 20, "quantity": 1 } ]
    }
}"##;

fn project() -> Project {
    Project::from_json_str(PROJECT).expect("valid project")
}

fn line(reference: &str, price: rust_decimal::Decimal, quantity: u32) -> QuoteLineItem {
    QuoteLineItem {
        id: reference.to_string(),
        kind: LineKind::Equipment,
        label: String::new(),
        reference: reference.to_string(),
        unit_price: price,
        quantity,
        room_id: None,
    }
}

#[test]
fn rooms_accept_numeric_and_text_ids() {
    let project = project();
    assert_eq!(project.rooms[0].id, "1");
    assert_eq!(project.room_name("1"), "Cuisine");
    assert_eq!(project.room_name("2"), "Pièce 2");
    assert_eq!(project.room_name("9"), "Pièce 9");
}

#[test]
fn equipment_lines_are_grouped_with_plates_and_boxes() {
    let quote = build_quote(&project(), &Catalog::builtin()).expect("quote");
    assert_eq!(quote.equipment.len(), 3);

    let sockets = &quote.equipment[0];
    assert_eq!(sockets.equipment_type, EquipmentType::SimpleSocket);
    assert_eq!(sockets.quantity, 3);
    assert_eq!(
        sockets.plate.as_ref().map(|p| p.part.reference.as_str()),
        Some("SCHS520702")
    );
    assert_eq!(
        sockets.enclosure_box.as_ref().map(|b| b.reference.as_str()),
        Some("EUR52061")
    );

    let switch = &quote.equipment[1];
    assert_eq!(switch.equipment_type, EquipmentType::DoubleSwitch);
    assert_eq!(
        switch.plate.as_ref().map(|p| p.part.reference.as_str()),
        Some("SCHS540704")
    );

    let other_room = &quote.equipment[2];
    assert_eq!(other_room.room_id.as_deref(), Some("2"));
    assert_eq!(
        other_room.plate.as_ref().map(|p| p.part.reference.as_str()),
        Some("SCHS520702")
    );
}

#[test]
fn totals_add_equipment_and_dimensioning() {
    let quote = build_quote(&project(), &Catalog::builtin()).expect("quote");
    let totals = quote.totals();
    assert_eq!(totals.equipment, dec!(37.26));
    // 16A + 20A 차단기, 40A DDR
    assert_eq!(totals.dimensioning, dec!(62.00));
    assert_eq!(totals.total, dec!(99.26));

    let sum: rust_decimal::Decimal = quote.line_items().iter().map(|l| l.line_total()).sum();
    assert_eq!(sum, totals.total);
}

#[test]
fn total_is_exact_and_rounded_only_for_display() {
    let lines = vec![line("A", dec!(0.333), 3), line("B", dec!(1.10), 0)];
    let totals = calculate_total(&lines, &[]);
    assert_eq!(totals.total, dec!(0.999));
    assert_eq!(round_for_display(totals.total), dec!(1.00));
    assert_eq!(totals.rounded().total, dec!(1.00));
    assert_eq!(calculate_total(&[], &[]).total, dec!(0));
}

#[test]
fn plate_summary_counts_white_and_black_per_room() {
    let summary = quote::plate_summary(&project());
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].room_name, "Cuisine");
    assert_eq!(summary[0].white, 3);
    assert_eq!(summary[0].black, 1);
}

#[test]
fn csv_lists_references_and_quantities() {
    let quote = build_quote(&project(), &Catalog::builtin()).expect("quote");
    let mut out = Vec::new();
    write_csv(&mut out, &quote.line_items()).expect("csv");
    let text = String::from_utf8(out).expect("utf8");

    let expected = "\
Référence,Quantité
SCHS520059,3
SCHS520702,3
EUR52061,3
SCHS520214,1
SCHS540704,1
EUR52064,1
SCHS520059,1
SCHS520702,1
EUR52061,1
SCHR9PFC616,1
SCHR9PFC620,1
SCHR9PFE240,1
";
    assert_eq!(text, expected);
}

#[test]
fn csv_skips_blank_references_and_zero_quantities() {
    let mut out = Vec::new();
    write_csv(
        &mut out,
        &[line("", dec!(1), 1), line("X", dec!(1), 0), line("Y", dec!(1), 2)],
    )
    .expect("csv");
    assert_eq!(String::from_utf8(out).expect("utf8"), "Référence,Quantité\nY,2\n");
}

#[test]
fn csv_file_export() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("devis.csv");
    quote::export_csv(&path, &[line("Z", dec!(2), 5)]).expect("export");
    let text = std::fs::read_to_string(&path).expect("read back");
    assert!(text.ends_with("Z,5\n"));
}

#[test]
fn unknown_equipment_type_is_rejected() {
    let src = r#"{ "equipments": [ { "roomId": "1", "type": "Toaster", "quantity": 1 } ] }"#;
    assert!(matches!(Project::from_json_str(src), Err(ProjectError::Json(_))));
}

#[test]
fn equipment_in_unknown_room_is_rejected() {
    let mut project = project();
    project.equipments[0].room_id = Some("42".to_string());
    assert!(matches!(
        build_quote(&project, &Catalog::builtin()),
        Err(QuoteError::Input(InputError::UnknownRoom(room))) if room == "42"
    ));
}

#[test]
fn project_without_dimensioning_has_only_equipment() {
    let mut project = project();
    project.dimensioning = None;
    let quote = build_quote(&project, &Catalog::builtin()).expect("quote");
    assert!(quote.dimensioning_line_items().is_empty());
    assert_eq!(quote.totals().dimensioning, dec!(0));
    assert!(quote.line_items().iter().all(|l| l.kind.is_equipment()));
}

#[test]
fn quote_serializes_to_json() {
    let quote = build_quote(&project(), &Catalog::builtin()).expect("quote");
    let json = serde_json::to_value(&quote).expect("json");
    assert_eq!(json["project_name"], "Maison Dupont");
    assert_eq!(
        json["dimensioning"]["layout"]["rows"][0]["protection"]["status"],
        "ddr"
    );
}

const UNORDERED_PROJECT: &str = r##"{
    "rooms": [ { "id": 1, "name": "Salon" }, { "id": 2, "name": "Chambre" } ],
    "equipments": [
        { "type": "SimpleSocket", "quantity": 1 },
        { "roomId": "2", "type": "DoubleSocket", "quantity": 1 },
        { "roomId": "1", "type": "SimpleSocket", "quantity": 2, "metadata": { "color": "#000000" } },
        { "roomId": "2", "type": "SimpleSocket", "quantity": 1 }
    ]
}"##;

#[test]
fn equipment_lines_follow_room_order() {
    let project = Project::from_json_str(UNORDERED_PROJECT).expect("valid project");
    let quote = build_quote(&project, &Catalog::builtin()).expect("quote");

    let rooms: Vec<Option<&str>> = quote
        .equipment
        .iter()
        .map(|l| l.room_id.as_deref())
        .collect();
    assert_eq!(rooms, vec![Some("1"), Some("2"), Some("2"), None]);
    // 방 안에서는 입력 순서
    assert_eq!(quote.equipment[1].equipment_type, EquipmentType::DoubleSocket);
    assert_eq!(quote.equipment[2].equipment_type, EquipmentType::SimpleSocket);

    let names: Vec<String> = quote::plate_summary(&project)
        .into_iter()
        .map(|r| r.room_name)
        .collect();
    assert_eq!(names, vec!["Salon", "Chambre", "Pièce "]);
}
