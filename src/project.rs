//! 견적 대상 프로젝트 문서(방, 설비 배치, 치수 계산 결과).
//!
//! 호스트가 JSON으로 저장한 문서를 읽는다. 필드명은 상위 API 표기를 따른다.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

use crate::catalog::EquipmentType;
use crate::dimensioning::{DimensioningInput, InputError};

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("프로젝트 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("프로젝트 JSON 파싱 오류: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Input(#[from] InputError),
}

/// 방 id는 숫자 또는 문자열로 온다. 내부에서는 문자열로 통일한다.
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EquipmentMetadata {
    /// `#FFFFFF` / `#000000` 형태의 마감 색상
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// 방 하나에 놓인 설비 배치.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(rename = "roomId", alias = "room_id", default)]
    pub room_id: Option<String>,
    #[serde(rename = "type")]
    pub equipment_type: EquipmentType,
    #[serde(default)]
    pub name: Option<String>,
    pub quantity: u32,
    #[serde(default)]
    pub metadata: EquipmentMetadata,
}

impl Equipment {
    pub fn color(&self) -> Option<&str> {
        self.metadata.color.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "pieces")]
    pub rooms: Vec<Room>,
    #[serde(default)]
    pub equipments: Vec<Equipment>,
    #[serde(default)]
    pub dimensioning: Option<DimensioningInput>,
}

impl Project {
    pub fn from_json_str(src: &str) -> Result<Self, ProjectError> {
        let project: Project = serde_json::from_str(src)?;
        project.validate()?;
        Ok(project)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ProjectError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// 설비 수량 ≥ 1, 방 참조 존재, 치수 계산 입력 검증.
    pub fn validate(&self) -> Result<(), InputError> {
        for (index, eq) in self.equipments.iter().enumerate() {
            if eq.quantity == 0 {
                return Err(InputError::ZeroQuantity {
                    field: "equipments",
                    index,
                });
            }
            if let Some(room) = eq.room_id.as_deref() {
                if !self.rooms.is_empty() && !self.rooms.iter().any(|r| r.id == room) {
                    return Err(InputError::UnknownRoom(room.to_string()));
                }
            }
        }
        match &self.dimensioning {
            Some(dim) => dim.validate(),
            None => Ok(()),
        }
    }

    /// 방 목록 순서대로 설비를 돌려준다. 방 안에서는 입력 순서를 지키고,
    /// 방이 없거나 목록에 없는 방의 설비는 맨 뒤에 둔다.
    pub fn equipments_in_room_order(&self) -> Vec<&Equipment> {
        let rank = |eq: &Equipment| {
            eq.room_id
                .as_deref()
                .and_then(|id| self.rooms.iter().position(|r| r.id == id))
                .unwrap_or(self.rooms.len())
        };
        let mut ordered: Vec<&Equipment> = self.equipments.iter().collect();
        ordered.sort_by_key(|&eq| rank(eq));
        ordered
    }

    /// 방 표시명. 이름이 없거나 모르는 방이면 `Pièce {id}`.
    pub fn room_name(&self, room_id: &str) -> String {
        self.rooms
            .iter()
            .find(|r| r.id == room_id && !r.name.trim().is_empty())
            .map(|r| r.name.clone())
            .unwrap_or_else(|| format!("Pièce {room_id}"))
    }
}
