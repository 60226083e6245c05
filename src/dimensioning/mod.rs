//! 치수 계산 결과(차단기, 분전반, 케이블, 서지보호기)를 견적 품목으로 바꾼다.
//!
//! 차단기 목록은 사용자가 수정할 수 있다. 수정하면 이전 열 배치는 버려지고
//! [`DimensioningQuote::recompute_layout`]을 호출할 때까지 비어 있다.

pub mod breakers;
pub mod cables;
pub mod labels;
pub mod panels;
pub mod surge;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::catalog::{CableType, Catalog, CatalogError};
use crate::panel::{compute_layout, CircuitBreaker, PanelLayout};
use crate::quote::line::QuoteLineItem;
use crate::units::BreakerRating;

pub use breakers::{generate_breakers, normalize_rating, price_breaker};
pub use cables::{billed_length, price_cable, section_tier, DEFAULT_CABLE_LENGTH_M};
pub use labels::translate_description;
pub use panels::{price_panel, DEFAULT_PANEL_MODULES};
pub use surge::price_surge_protector;

/// 입력 검증 오류.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field}의 수량은 1 이상이어야 합니다 (항목 {index})")]
    ZeroQuantity { field: &'static str, index: usize },
    #[error("{field} 값이 올바르지 않습니다 (항목 {index}): {value}")]
    InvalidNumber {
        field: &'static str,
        index: usize,
        value: f64,
    },
    #[error("존재하지 않는 방을 참조합니다: {0}")]
    UnknownRoom(String),
    #[error("차단기를 찾을 수 없습니다: {0}")]
    UnknownBreaker(String),
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakerInput {
    /// 상위 서비스가 준 정격 [A]. 표준 정격이 아닐 수 있다.
    pub rating: u32,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelInput {
    #[serde(default)]
    pub modules: Option<u32>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CableInput {
    /// 자유 형식 케이블 설명
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// 명시적 케이블 종류. 없으면 설명에서 추정한다.
    #[serde(rename = "cableType", alias = "cable_type", default)]
    pub cable_type: Option<CableType>,
    /// 단면적 [mm²]
    #[serde(default)]
    pub section: f64,
    /// 추정 길이 [m]
    #[serde(default)]
    pub length_estimate: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurgeProtectorInput {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub rating: Option<u32>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub description: Option<String>,
}

/// 차단기 목록의 수량이 모두 1 이상인지 확인한다.
pub fn validate_breakers(breakers: &[BreakerInput]) -> Result<(), InputError> {
    match breakers.iter().position(|b| b.quantity == 0) {
        Some(index) => Err(InputError::ZeroQuantity {
            field: "circuit_breakers",
            index,
        }),
        None => Ok(()),
    }
}

/// 치수 계산 서비스 응답.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensioningInput {
    #[serde(default)]
    pub circuit_breakers: Vec<BreakerInput>,
    #[serde(default)]
    pub electrical_panels: Vec<PanelInput>,
    #[serde(default)]
    pub cables: Vec<CableInput>,
    #[serde(default)]
    pub surge_protectors: Vec<SurgeProtectorInput>,
    /// 시공 메모. 견적 금액에는 영향이 없다.
    #[serde(default)]
    pub installation_notes: Vec<String>,
}

impl DimensioningInput {
    /// 수량 ≥ 1, 단면적/길이는 유한한 0 이상 값.
    pub fn validate(&self) -> Result<(), InputError> {
        validate_breakers(&self.circuit_breakers)?;
        for (index, c) in self.cables.iter().enumerate() {
            if !c.section.is_finite() || c.section < 0.0 {
                return Err(InputError::InvalidNumber {
                    field: "cables.section",
                    index,
                    value: c.section,
                });
            }
            if let Some(len) = c.length_estimate {
                if !len.is_finite() || len < 0.0 {
                    return Err(InputError::InvalidNumber {
                        field: "cables.length_estimate",
                        index,
                        value: len,
                    });
                }
            }
        }
        for (index, s) in self.surge_protectors.iter().enumerate() {
            if s.quantity == 0 {
                return Err(InputError::ZeroQuantity {
                    field: "surge_protectors",
                    index,
                });
            }
        }
        Ok(())
    }
}

/// 치수 계산에서 나온 견적 품목 묶음.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensioningQuote {
    pub breakers: Vec<CircuitBreaker>,
    pub panels: Vec<QuoteLineItem>,
    pub cables: Vec<QuoteLineItem>,
    pub surge_protectors: Vec<QuoteLineItem>,
    /// 차단기 목록이 바뀌면 None이 된다.
    pub layout: Option<PanelLayout>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub installation_notes: Vec<String>,
}

/// 입력을 검증하고 모든 품목을 가격 매김한 뒤 열 배치를 계산한다.
pub fn generate(
    input: &DimensioningInput,
    catalog: &Catalog,
) -> Result<DimensioningQuote, DimensioningError> {
    input.validate()?;

    let breakers = generate_breakers(&input.circuit_breakers, catalog)?;
    let panels = input
        .electrical_panels
        .iter()
        .enumerate()
        .map(|(i, p)| price_panel(i, p, catalog))
        .collect::<Result<Vec<_>, _>>()?;
    let cables = input
        .cables
        .iter()
        .enumerate()
        .map(|(i, c)| price_cable(i, c, catalog))
        .collect::<Result<Vec<_>, _>>()?;
    let surge_protectors = input
        .surge_protectors
        .iter()
        .enumerate()
        .map(|(i, s)| price_surge_protector(i, s, catalog))
        .collect::<Result<Vec<_>, _>>()?;

    let layout = compute_layout(&breakers, catalog);
    debug!(
        breakers = breakers.len(),
        rows = layout.rows.len(),
        "치수 계산 품목 생성 완료"
    );

    Ok(DimensioningQuote {
        breakers,
        panels,
        cables,
        surge_protectors,
        layout: Some(layout),
        installation_notes: input.installation_notes.clone(),
    })
}

/// 치수 계산 품목 생성 오류.
#[derive(Debug, Error)]
pub enum DimensioningError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl DimensioningQuote {
    /// 현재 열 배치. 수정 후 재계산 전이면 None.
    pub fn layout(&self) -> Option<&PanelLayout> {
        self.layout.as_ref()
    }

    pub fn is_stale(&self) -> bool {
        self.layout.is_none()
    }

    /// 차단기의 정격/수량을 바꾸고 카탈로그 가격을 다시 매긴다.
    pub fn edit_breaker(
        &mut self,
        id: &str,
        rating: BreakerRating,
        quantity: u32,
        catalog: &Catalog,
    ) -> Result<(), DimensioningError> {
        let index = self.position(id)?;
        if quantity == 0 {
            return Err(InputError::ZeroQuantity {
                field: "circuit_breakers",
                index,
            }
            .into());
        }
        let part = &catalog.breaker(rating)?.part;
        let breaker = &mut self.breakers[index];
        if breaker.rating != rating {
            breaker.reference = part.reference.clone();
            breaker.price = part.price;
            if breaker.label == format!("Disjoncteur {}A", breaker.rating.amps()) {
                breaker.label = format!("Disjoncteur {}A", rating.amps());
            }
            breaker.rating = rating;
        }
        breaker.quantity = quantity;
        self.layout = None;
        Ok(())
    }

    /// 목록 끝에 차단기를 추가하고 새 id를 돌려준다.
    pub fn add_breaker(
        &mut self,
        rating: BreakerRating,
        quantity: u32,
        catalog: &Catalog,
    ) -> Result<String, DimensioningError> {
        if quantity == 0 {
            return Err(InputError::ZeroQuantity {
                field: "circuit_breakers",
                index: self.breakers.len(),
            }
            .into());
        }
        let id = self.next_breaker_id();
        let breaker = price_breaker(id.clone(), rating, quantity, None, catalog)?;
        self.breakers.push(breaker);
        self.layout = None;
        Ok(id)
    }

    pub fn remove_breaker(&mut self, id: &str) -> Result<CircuitBreaker, DimensioningError> {
        let index = self.position(id)?;
        self.layout = None;
        Ok(self.breakers.remove(index))
    }

    /// 현재 차단기 목록으로 열 배치와 DDR을 새로 만든다.
    pub fn recompute_layout(&mut self, catalog: &Catalog) -> &PanelLayout {
        self.layout.insert(compute_layout(&self.breakers, catalog))
    }

    /// 견적 줄: 차단기, 분전반, 케이블, 서지보호기, DDR 순.
    /// 열 배치가 무효화된 상태면 DDR 줄은 빠진다.
    pub fn line_items(&self) -> Vec<QuoteLineItem> {
        let mut lines: Vec<QuoteLineItem> = self
            .breakers
            .iter()
            .map(QuoteLineItem::from_breaker)
            .collect();
        lines.extend(self.panels.iter().cloned());
        lines.extend(self.cables.iter().cloned());
        lines.extend(self.surge_protectors.iter().cloned());
        if let Some(layout) = &self.layout {
            lines.extend(layout.line_items());
        }
        lines
    }

    fn position(&self, id: &str) -> Result<usize, InputError> {
        self.breakers
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| InputError::UnknownBreaker(id.to_string()))
    }

    fn next_breaker_id(&self) -> String {
        let next = self
            .breakers
            .iter()
            .filter_map(|b| b.id.strip_prefix("cb-")?.parse::<usize>().ok())
            .max()
            .map_or(self.breakers.len(), |max| max + 1);
        format!("cb-{next}")
    }
}
