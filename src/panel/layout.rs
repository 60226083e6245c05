use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::breaker::CircuitBreaker;
use super::ddr_sizing::{size_ddr, DdrSizing, DERATING_PERCENT};
use super::row_packing::{pack_rows, PanelRow};
use crate::catalog::Catalog;
use crate::quote::line::{LineKind, QuoteLineItem};
use crate::units::DdrRating;

/// 열 하나를 보호하는 누전차단기(DDR).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifferentialBreaker {
    pub id: String,
    pub rating: DdrRating,
    pub reference: String,
    /// `DDR 40A - Rangée 2` 형태의 표시명
    pub label: String,
    pub description: String,
    pub price: Decimal,
    /// 보호하는 차단기 id (열 순서)
    pub covered_breaker_ids: Vec<String>,
    pub total_rating: u32,
    pub adjusted_rating: u32,
}

/// 열 보호 상태. 차단기가 있는 열은 반드시 둘 중 하나다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowProtection {
    Ddr(DifferentialBreaker),
    /// 산정된 정격에 해당하는 부품이 카탈로그에 없음
    Unconfigured(DdrSizing),
}

impl RowProtection {
    pub fn ddr(&self) -> Option<&DifferentialBreaker> {
        match self {
            RowProtection::Ddr(ddr) => Some(ddr),
            RowProtection::Unconfigured(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtectedRow {
    pub row: PanelRow,
    pub protection: RowProtection,
}

/// 분전반 열 배치와 열별 DDR.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub rows: Vec<ProtectedRow>,
}

impl PanelLayout {
    pub fn ddrs(&self) -> impl Iterator<Item = &DifferentialBreaker> {
        self.rows.iter().filter_map(|r| r.protection.ddr())
    }

    /// DDR 부품을 찾지 못한 열 번호.
    pub fn unconfigured_rows(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|r| r.protection.ddr().is_none())
            .map(|r| r.row.number)
            .collect()
    }

    pub fn breaker_count(&self) -> usize {
        self.rows.iter().map(|r| r.row.breakers.len()).sum()
    }

    pub fn total_modules(&self) -> u32 {
        self.rows.iter().map(|r| r.row.modules()).sum()
    }

    /// DDR 견적 줄. 수량은 항상 1이다.
    pub fn line_items(&self) -> Vec<QuoteLineItem> {
        self.ddrs()
            .map(|ddr| QuoteLineItem {
                id: ddr.id.clone(),
                kind: LineKind::DifferentialCircuitBreaker,
                label: ddr.label.clone(),
                reference: ddr.reference.clone(),
                unit_price: ddr.price,
                quantity: 1,
                room_id: None,
            })
            .collect()
    }
}

/// 열의 DDR을 산정하고 카탈로그 부품을 붙인다.
pub fn assign_ddr(row: &PanelRow, catalog: &Catalog) -> RowProtection {
    let sizing = size_ddr(row);
    let Some(part) = catalog.ddr(sizing.rating) else {
        warn!(
            row = row.number,
            rating = %sizing.rating,
            "카탈로그에 DDR 부품이 없어 열을 미구성으로 둡니다"
        );
        return RowProtection::Unconfigured(sizing);
    };

    let amps = sizing.rating.amps();
    RowProtection::Ddr(DifferentialBreaker {
        id: format!("ddr-{}", row.number),
        rating: sizing.rating,
        reference: part.part.reference.clone(),
        label: format!("DDR {amps}A - Rangée {}", row.number),
        description: format!(
            "Interrupteur différentiel {amps}A pour {} circuit(s) - Calibre total: {}A, Ajusté ({}): {}A",
            row.breakers.len(),
            sizing.total_rating,
            Decimal::new(i64::from(DERATING_PERCENT), 2).normalize(),
            sizing.adjusted_rating
        ),
        price: part.part.price,
        covered_breaker_ids: row.breaker_ids(),
        total_rating: sizing.total_rating,
        adjusted_rating: sizing.adjusted_rating,
    })
}

/// 현재 차단기 목록으로 열 배치와 DDR을 처음부터 다시 계산한다.
///
/// 이전 결과는 참조하지 않으므로 같은 입력에 대해 항상 같은 결과를 낸다.
pub fn compute_layout(breakers: &[CircuitBreaker], catalog: &Catalog) -> PanelLayout {
    let rows: Vec<ProtectedRow> = pack_rows(breakers)
        .into_iter()
        .map(|row| {
            let protection = assign_ddr(&row, catalog);
            ProtectedRow { row, protection }
        })
        .collect();
    debug!(rows = rows.len(), "DDR 재계산 완료");
    PanelLayout { rows }
}
