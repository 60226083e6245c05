//! 빌드에 포함된 기본 부품표.
//! 단가는 유통 참고가(부가세 별도)이며 견적 시 최신 가격표로 갱신해야 한다.
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{
    BreakerPart, CablePart, CableType, Catalog, DdrPart, EquipmentPart, EquipmentType, PanelPart,
    Part, PlateColor, PlatePart, PlateSize,
};
use crate::units::{BreakerRating, CableSection, DdrRating};

pub const BUILTIN_VERSION: &str = "builtin-2024.1";

#[derive(Debug, Clone, Copy)]
struct StaticPart {
    reference: &'static str,
    label: &'static str,
    price: Decimal,
}

const fn part(reference: &'static str, label: &'static str, price: Decimal) -> StaticPart {
    StaticPart {
        reference,
        label,
        price,
    }
}

impl StaticPart {
    fn to_part(self) -> Part {
        Part {
            reference: self.reference.to_string(),
            label: self.label.to_string(),
            price: self.price,
        }
    }
}

struct StaticEquipment {
    equipment_type: EquipmentType,
    name: &'static str,
    part: StaticPart,
    enclosure_box: &'static str,
}

const EQUIPMENT: &[StaticEquipment] = &[
    StaticEquipment {
        equipment_type: EquipmentType::SimpleSocket,
        name: "Prise simple",
        part: part("SCHS520059", "Prise simple - 16A - 2P+T Odace", dec!(3.24)),
        enclosure_box: "EUR52061",
    },
    StaticEquipment {
        equipment_type: EquipmentType::DoubleSocket,
        name: "Prise double",
        part: part("SCHS520059", "Prise double - 16A - 2P+T Odace", dec!(6.48)),
        enclosure_box: "EUR52064",
    },
    StaticEquipment {
        equipment_type: EquipmentType::NetworkSocket,
        name: "Prise RJ45",
        part: part("SCHS520476", "Prise RJ45 - cat.6 STP grade 2TV min Odace", dec!(9.90)),
        enclosure_box: "EUR52061",
    },
    StaticEquipment {
        equipment_type: EquipmentType::TVSocket,
        name: "Prise TV",
        part: part("SCHS520445", "Prise TV simple - Odace", dec!(7.00)),
        enclosure_box: "EUR52061",
    },
    StaticEquipment {
        equipment_type: EquipmentType::SimpleSwitch,
        name: "Interrupteur simple",
        part: part("SCHS520204", "Interrupteur simple - 10A Odace", dec!(3.50)),
        enclosure_box: "EUR52061",
    },
    StaticEquipment {
        equipment_type: EquipmentType::DoubleSwitch,
        name: "Interrupteur double",
        part: part("SCHS520214", "Interrupteur double - 10A Odace", dec!(8.00)),
        enclosure_box: "EUR52064",
    },
    StaticEquipment {
        equipment_type: EquipmentType::OvenSocket,
        name: "Prise Plaque",
        part: part("SCHS520059", "Prise Four/Plaque - 16A - 2P+T Odace", dec!(3.24)),
        enclosure_box: "EUR52061",
    },
    StaticEquipment {
        equipment_type: EquipmentType::ExtractorSocket,
        name: "Prise Hotte",
        part: part("SCHS520059", "Prise Hotte - 16A - 2P+T", dec!(3.24)),
        enclosure_box: "EUR52061",
    },
    StaticEquipment {
        equipment_type: EquipmentType::DimmerSwitch,
        name: "Va-et-vient",
        part: part("SCHS520204", "Va-et-vient - 10A Odace", dec!(3.50)),
        enclosure_box: "EUR52061",
    },
];

const PLATES: &[(PlateColor, PlateSize, StaticPart)] = &[
    (
        PlateColor::White,
        PlateSize::Single,
        part("SCHS520702", "Plaque simple blanche", dec!(2.00)),
    ),
    (
        PlateColor::White,
        PlateSize::Double,
        part("SCHS520704", "Plaque double blanche", dec!(4.00)),
    ),
    (
        PlateColor::Black,
        PlateSize::Single,
        part("SCHS540702", "Plaque simple noire", dec!(2.00)),
    ),
    (
        PlateColor::Black,
        PlateSize::Double,
        part("SCHS540704", "Plaque double noire", dec!(4.00)),
    ),
];

const ENCLOSURE_BOXES: &[StaticPart] = &[
    part("EUR52061", "Boîte simple 40mm", dec!(0.30)),
    part("EUR52064", "Boîte double 40mm", dec!(3.10)),
    part("EUR52068", "Boîte simple 50mm", dec!(1.10)),
    part("EUR52071", "Boîte double 50mm", dec!(1.45)),
];

const CIRCUIT_BREAKERS: &[(BreakerRating, StaticPart)] = &[
    (
        BreakerRating::A2,
        part("SCHR9PFC602", "Disjoncteur Resi9 peignable 2A - Courbe C 1P+N", dec!(10.50)),
    ),
    (
        BreakerRating::A6,
        part("SCHR9PFC606", "Disjoncteur Resi9 peignable 6A - Courbe C 1P+N", dec!(20.00)),
    ),
    (
        BreakerRating::A10,
        part("SCHR9PFC610", "Disjoncteur Resi9 peignable 10A - Courbe C 1P+N", dec!(8.50)),
    ),
    (
        BreakerRating::A16,
        part("SCHR9PFC616", "Disjoncteur Resi9 peignable 16A - Courbe C 1P+N", dec!(8.50)),
    ),
    (
        BreakerRating::A20,
        part("SCHR9PFC620", "Disjoncteur Resi9 peignable 20A - Courbe C 1P+N", dec!(8.50)),
    ),
    (
        BreakerRating::A25,
        part("SCHR9PFC625", "Disjoncteur Resi9 peignable 25A - Courbe C 1P+N", dec!(14.00)),
    ),
    (
        BreakerRating::A32,
        part("SCHR9PFC632", "Disjoncteur Resi9 peignable 32A - Courbe C 1P+N", dec!(14.00)),
    ),
    (
        BreakerRating::A40,
        part("SCHA9F77240", "Disjoncteur Acti9 2P 40A - Courbe C - iC60N", dec!(30.00)),
    ),
    (
        BreakerRating::A63,
        part("SCHA9F77263", "Disjoncteur Acti9 2P 63A - Courbe C - iC60N", dec!(110.00)),
    ),
];

const DIFFERENTIAL_BREAKERS: &[(DdrRating, StaticPart)] = &[
    (
        DdrRating::A25,
        part("SCHR9PFE225", "Interrupteur différentiel 25A - Type A - 30mA", dec!(35.00)),
    ),
    (
        DdrRating::A40,
        part("SCHR9PFE240", "Interrupteur différentiel 40A - Type A - 30mA", dec!(45.00)),
    ),
    (
        DdrRating::A63,
        part("SCHR9PFE263", "Interrupteur différentiel 63A - Type A - 30mA", dec!(65.00)),
    ),
];

// (열당 모듈, 열 수, 부품)
const PANELS: &[(u32, u32, StaticPart)] = &[
    (13, 1, part("SCHR9H13401", "Coffret 13 modules (Studio) - En saillie blanc (RAL 9003)", dec!(25.00))),
    (18, 1, part("SCHR9H18401", "Coffret 1 rangée 18 modules - En saillie blanc (RAL 9003)", dec!(35.00))),
    (13, 2, part("SCHR9H13402", "Coffret 2 rangées 13 modules - En saillie blanc (RAL 9003)", dec!(35.00))),
    (18, 2, part("SCHR9H18402", "Coffret 2 rangées 18 modules - En saillie blanc (RAL 9003)", dec!(55.00))),
    (13, 3, part("SCHR9H13403", "Coffret 3 rangées 13 modules - En saillie blanc (RAL 9003)", dec!(50.00))),
    (13, 4, part("SCHR9H13404", "Coffret 4 rangées 13 modules - En saillie blanc (RAL 9003)", dec!(65.00))),
    (18, 3, part("SCHR9H18403", "Coffret 3 rangées 18 modules - En saillie blanc (RAL 9003)", dec!(65.00))),
    (18, 4, part("SCHR9H18404", "Coffret 4 rangées 18 modules - En saillie blanc (RAL 9003)", dec!(90.00))),
];

const CABLES: &[(CableType, Option<CableSection>, StaticPart)] = &[
    (CableType::R2V, Some(CableSection::S1_5), part("ABER2V3G1.5", "Câble R2V 1.5mm²", dec!(0.90))),
    (CableType::R2V, Some(CableSection::S2_5), part("ABER2V3G2.5", "Câble R2V 2.5mm²", dec!(1.20))),
    (CableType::R2V, Some(CableSection::S4), part("ABER2V3G4", "Câble R2V 4mm²", dec!(1.85))),
    (CableType::R2V, Some(CableSection::S6), part("ABER2V3G6", "Câble R2V 6mm²", dec!(2.45))),
    (CableType::R2V, Some(CableSection::S10), part("ABER2V3G10", "Câble R2V 10mm²", dec!(4.20))),
    (CableType::Prefile, Some(CableSection::S1_5), part("ABEPREF3G1.5", "Câble Prefile 1.5mm²", dec!(0.90))),
    (CableType::Prefile, Some(CableSection::S2_5), part("ABEPREF3G2.5", "Câble Prefile 2.5mm²", dec!(1.20))),
    (CableType::Prefile, Some(CableSection::S6), part("ABEPREF3G6", "Câble Prefile 6mm²", dec!(2.45))),
    (CableType::RJ45, None, part("ABEFTP1X4PCAT6", "Câble RJ45 Cat6", dec!(0.70))),
    (CableType::Coaxial, None, part("ABE17VATC", "Câble Coaxial", dec!(0.18))),
];

const SURGE_PROTECTORS: &[StaticPart] =
    &[part("SCHR9PLC", "Parafoudre Type 2 - 10kA", dec!(120.00))];

/// 정적 표를 소유형 카탈로그로 변환한다.
pub fn catalog() -> Catalog {
    Catalog {
        version: BUILTIN_VERSION.to_string(),
        equipment: EQUIPMENT
            .iter()
            .map(|e| EquipmentPart {
                equipment_type: e.equipment_type,
                name: e.name.to_string(),
                part: e.part.to_part(),
                enclosure_box: Some(e.enclosure_box.to_string()),
            })
            .collect(),
        plates: PLATES
            .iter()
            .map(|&(color, size, p)| PlatePart {
                color,
                size,
                part: p.to_part(),
            })
            .collect(),
        enclosure_boxes: ENCLOSURE_BOXES.iter().map(|p| p.to_part()).collect(),
        circuit_breakers: CIRCUIT_BREAKERS
            .iter()
            .map(|&(rating, p)| BreakerPart {
                rating,
                part: p.to_part(),
            })
            .collect(),
        differential_breakers: DIFFERENTIAL_BREAKERS
            .iter()
            .map(|&(rating, p)| DdrPart {
                rating,
                part: p.to_part(),
            })
            .collect(),
        panels: PANELS
            .iter()
            .map(|&(modules_per_row, rows, p)| PanelPart {
                modules_per_row,
                rows,
                part: p.to_part(),
            })
            .collect(),
        cables: CABLES
            .iter()
            .map(|&(cable_type, section, p)| CablePart {
                cable_type,
                section,
                part: p.to_part(),
            })
            .collect(),
        surge_protectors: SURGE_PROTECTORS.iter().map(|p| p.to_part()).collect(),
    }
}
