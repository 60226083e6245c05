use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::PlateColor;
use crate::project::Project;

/// 방별 플레이트 색상 집계.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomPlateCount {
    pub room_id: String,
    pub room_name: String,
    pub white: u32,
    pub black: u32,
}

/// 플레이트가 필요한 설비 수를 방/색상별로 센다. 방 목록 순서를 따른다.
/// 색상 미지정은 흰색, `#FFFFFF`/`#000000` 외의 색상은 세지 않는다.
pub fn plate_summary(project: &Project) -> Vec<RoomPlateCount> {
    let mut rooms: IndexMap<String, RoomPlateCount> = IndexMap::new();

    for eq in project.equipments_in_room_order() {
        let Some(quoted) = eq.equipment_type.quoted_as() else {
            continue;
        };
        if !quoted.needs_plate() {
            continue;
        }
        let color = match eq.color() {
            None => Some(PlateColor::White),
            Some(c) => PlateColor::from_exact_hex(c),
        };
        let Some(color) = color else {
            continue;
        };

        let room_id = eq.room_id.clone().unwrap_or_default();
        let entry = rooms
            .entry(room_id.clone())
            .or_insert_with(|| RoomPlateCount {
                room_name: project.room_name(&room_id),
                room_id,
                white: 0,
                black: 0,
            });
        match color {
            PlateColor::White => entry.white = entry.white.saturating_add(eq.quantity),
            PlateColor::Black => entry.black = entry.black.saturating_add(eq.quantity),
        }
    }

    rooms.into_values().collect()
}
