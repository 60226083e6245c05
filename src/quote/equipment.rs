use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::line::{LineKind, QuoteLineItem};
use crate::catalog::{Catalog, EquipmentType, Part, PlateColor, PlatePart};
use crate::project::Equipment;

/// 같은 방, 같은 품목, 같은 마감으로 묶인 설비 견적 한 건.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentLine {
    pub room_id: Option<String>,
    /// 견적 기준 종류 (20A 전용 콘센트는 일반 콘센트)
    pub equipment_type: EquipmentType,
    pub name: String,
    pub part: Part,
    pub plate: Option<PlatePart>,
    pub enclosure_box: Option<Part>,
    pub quantity: u32,
}

impl EquipmentLine {
    /// 본체, 플레이트, 박스를 각각 한 줄씩. 수량은 모두 배치 수량이다.
    pub fn line_items(&self, index: usize) -> Vec<QuoteLineItem> {
        let line = |id: String, kind, label: &str, part: &Part| QuoteLineItem {
            id,
            kind,
            label: label.to_string(),
            reference: part.reference.clone(),
            unit_price: part.price,
            quantity: self.quantity,
            room_id: self.room_id.clone(),
        };

        let mut lines = vec![line(format!("eq-{index}"), LineKind::Equipment, &self.name, &self.part)];
        if let Some(plate) = &self.plate {
            lines.push(line(
                format!("eq-{index}-plate"),
                LineKind::Plate,
                &plate.part.label,
                &plate.part,
            ));
        }
        if let Some(bx) = &self.enclosure_box {
            lines.push(line(
                format!("eq-{index}-box"),
                LineKind::EnclosureBox,
                &bx.label,
                bx,
            ));
        }
        lines
    }
}

type GroupKey = (Option<String>, EquipmentType, String, Option<String>, Option<String>);

/// 설비 배치를 카탈로그 품목으로 바꾸고 동일 항목을 합친다. 받은 순서에서 처음 나온 순서를 유지한다.
pub fn generate_equipment_lines<'a>(
    equipments: impl IntoIterator<Item = &'a Equipment>,
    catalog: &Catalog,
) -> Vec<EquipmentLine> {
    let mut groups: IndexMap<GroupKey, EquipmentLine> = IndexMap::new();

    for eq in equipments {
        let Some(quoted) = eq.equipment_type.quoted_as() else {
            continue;
        };
        let Some(entry) = catalog.equipment(quoted) else {
            debug!(equipment = %eq.equipment_type, "카탈로그에 없는 설비는 견적에서 제외합니다");
            continue;
        };

        let plate = if quoted.needs_plate() {
            let color = PlateColor::from_hex(eq.color());
            catalog.plate(color, quoted.plate_size()).cloned()
        } else {
            None
        };
        let enclosure_box = entry.enclosure_box.as_deref().and_then(|reference| {
            let found = catalog.enclosure_box(reference).cloned();
            if found.is_none() {
                warn!(reference, "카탈로그에 없는 매입 박스는 생략합니다");
            }
            found
        });

        let key = (
            eq.room_id.clone(),
            quoted,
            entry.part.reference.clone(),
            plate.as_ref().map(|p| p.part.reference.clone()),
            enclosure_box.as_ref().map(|b| b.reference.clone()),
        );
        groups
            .entry(key)
            .and_modify(|line| line.quantity = line.quantity.saturating_add(eq.quantity))
            .or_insert_with(|| EquipmentLine {
                room_id: eq.room_id.clone(),
                equipment_type: quoted,
                name: entry.name.clone(),
                part: entry.part.clone(),
                plate,
                enclosure_box,
                quantity: eq.quantity,
            });
    }

    groups.into_values().collect()
}
