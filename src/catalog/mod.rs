//! 상용 부품 참조표(품번, 품명, 단가)와 조회 함수.
//!
//! 카탈로그는 읽기 전용 데이터다. 기본값은 빌드에 포함된 표를 쓰고,
//! 호스트가 TOML 파일로 다른 버전을 공급할 수 있다.

pub mod builtin;
pub mod keys;

use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::units::{BreakerRating, CableSection, DdrRating};
pub use keys::{CableType, EquipmentType, PlateColor, PlateSize};

/// 카탈로그 로드/조회 시 발생 가능한 오류.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("카탈로그 파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("카탈로그 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("카탈로그 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// 요청한 키에 해당하는 부품이 카탈로그에 없음
    #[error("카탈로그에 {kind} 부품이 없습니다: {key}")]
    MissingPart { kind: &'static str, key: String },
    /// 단가가 음수인 부품
    #[error("단가가 음수인 부품: {0}")]
    NegativePrice(String),
    /// 단가가 상한을 넘는 부품
    #[error("단가가 상한({max})을 넘는 부품: {reference}")]
    PriceOutOfRange { reference: String, max: Decimal },
}

/// 부품 단가 상한. 수량과 합계를 곱해도 `Decimal` 범위 안에 머문다.
pub const MAX_UNIT_PRICE: Decimal = dec!(1000000);

/// 품번/품명/단가 한 벌.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    pub reference: String,
    pub label: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentPart {
    pub equipment_type: EquipmentType,
    /// 견적서에 표시할 설비명
    pub name: String,
    pub part: Part,
    /// 매입 박스 품번
    #[serde(default)]
    pub enclosure_box: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatePart {
    pub color: PlateColor,
    pub size: PlateSize,
    pub part: Part,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakerPart {
    pub rating: BreakerRating,
    pub part: Part,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdrPart {
    pub rating: DdrRating,
    pub part: Part,
}

/// 분전반 함체. 총 수용 모듈 = 열당 모듈 × 열 수.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPart {
    pub modules_per_row: u32,
    pub rows: u32,
    pub part: Part,
}

impl PanelPart {
    pub fn capacity(&self) -> u32 {
        self.modules_per_row * self.rows
    }
}

/// 케이블 품목. 단가는 미터당 가격이다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CablePart {
    pub cable_type: CableType,
    /// RJ45/동축처럼 단면적 구분이 없는 품목은 None
    #[serde(default)]
    pub section: Option<CableSection>,
    pub part: Part,
}

/// 견적 엔진이 참조하는 전체 카탈로그.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub version: String,
    #[serde(default)]
    pub equipment: Vec<EquipmentPart>,
    #[serde(default)]
    pub plates: Vec<PlatePart>,
    #[serde(default)]
    pub enclosure_boxes: Vec<Part>,
    #[serde(default)]
    pub circuit_breakers: Vec<BreakerPart>,
    #[serde(default)]
    pub differential_breakers: Vec<DdrPart>,
    #[serde(default)]
    pub panels: Vec<PanelPart>,
    #[serde(default)]
    pub cables: Vec<CablePart>,
    #[serde(default)]
    pub surge_protectors: Vec<Part>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// 빌드에 포함된 기본 카탈로그.
    pub fn builtin() -> Self {
        builtin::catalog()
    }

    /// TOML 문자열에서 카탈로그를 읽고 검증한다.
    pub fn from_toml_str(src: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(src)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// TOML 파일에서 카탈로그를 읽는다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        for part in self.all_parts() {
            if part.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(part.reference.clone()));
            }
            if part.price > MAX_UNIT_PRICE {
                return Err(CatalogError::PriceOutOfRange {
                    reference: part.reference.clone(),
                    max: MAX_UNIT_PRICE,
                });
            }
        }
        Ok(())
    }

    /// 카탈로그의 모든 부품을 표 순서대로 돌려준다.
    pub fn all_parts(&self) -> impl Iterator<Item = &Part> {
        self.equipment
            .iter()
            .map(|e| &e.part)
            .chain(self.plates.iter().map(|p| &p.part))
            .chain(self.enclosure_boxes.iter())
            .chain(self.circuit_breakers.iter().map(|b| &b.part))
            .chain(self.differential_breakers.iter().map(|d| &d.part))
            .chain(self.panels.iter().map(|p| &p.part))
            .chain(self.cables.iter().map(|c| &c.part))
            .chain(self.surge_protectors.iter())
    }

    /// 품번으로 부품을 찾는다. 같은 품번이 여러 표에 있으면 먼저 나온 것을 쓴다.
    pub fn find_part(&self, reference: &str) -> Option<&Part> {
        self.all_parts().find(|p| p.reference == reference)
    }

    pub fn equipment(&self, equipment_type: EquipmentType) -> Option<&EquipmentPart> {
        self.equipment
            .iter()
            .find(|e| e.equipment_type == equipment_type)
    }

    pub fn plate(&self, color: PlateColor, size: PlateSize) -> Option<&PlatePart> {
        self.plates
            .iter()
            .find(|p| p.color == color && p.size == size)
    }

    pub fn enclosure_box(&self, reference: &str) -> Option<&Part> {
        self.enclosure_boxes
            .iter()
            .find(|b| b.reference == reference)
    }

    pub fn breaker(&self, rating: BreakerRating) -> Result<&BreakerPart, CatalogError> {
        self.circuit_breakers
            .iter()
            .find(|b| b.rating == rating)
            .ok_or_else(|| CatalogError::MissingPart {
                kind: "circuit_breaker",
                key: rating.to_string(),
            })
    }

    /// DDR 정격별 부품. 없으면 해당 열은 미구성으로 남는다.
    pub fn ddr(&self, rating: DdrRating) -> Option<&DdrPart> {
        self.differential_breakers
            .iter()
            .find(|d| d.rating == rating)
    }

    /// 요청 모듈 수 이상을 수용하는 가장 작은 함체를 고른다.
    /// 충분히 큰 함체가 없으면 가장 큰 함체를 돌려준다.
    pub fn panel_for_modules(&self, modules: u32) -> Result<&PanelPart, CatalogError> {
        self.panels
            .iter()
            .filter(|p| p.capacity() >= modules)
            .min_by_key(|p| p.capacity())
            .or_else(|| self.panels.iter().max_by_key(|p| p.capacity()))
            .ok_or_else(|| CatalogError::MissingPart {
                kind: "electrical_panel",
                key: format!("{modules} modules"),
            })
    }

    pub fn cable(
        &self,
        cable_type: CableType,
        section: Option<CableSection>,
    ) -> Result<&CablePart, CatalogError> {
        self.cables
            .iter()
            .find(|c| c.cable_type == cable_type && c.section == section)
            .ok_or_else(|| CatalogError::MissingPart {
                kind: "cable",
                key: match section {
                    Some(s) => format!("{cable_type} {s}"),
                    None => cable_type.to_string(),
                },
            })
    }

    pub fn surge_protector(&self) -> Result<&Part, CatalogError> {
        self.surge_protectors
            .first()
            .ok_or_else(|| CatalogError::MissingPart {
                kind: "surge_protector",
                key: "default".to_string(),
            })
    }
}
