use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::panel::CircuitBreaker;

/// 견적 줄의 출처 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Equipment,
    Plate,
    EnclosureBox,
    CircuitBreaker,
    ElectricalPanel,
    Cable,
    SurgeProtector,
    DifferentialCircuitBreaker,
}

impl LineKind {
    /// 설비 배치에서 나온 줄인지(아니면 치수 계산에서 나온 줄).
    pub fn is_equipment(self) -> bool {
        matches!(
            self,
            LineKind::Equipment | LineKind::Plate | LineKind::EnclosureBox
        )
    }
}

/// 단가와 수량이 정해진 견적 한 줄.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteLineItem {
    pub id: String,
    pub kind: LineKind,
    pub label: String,
    pub reference: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_id: Option<String>,
}

impl QuoteLineItem {
    /// 단가 × 수량
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// 차단기 한 줄을 견적 줄로 옮긴다.
    pub fn from_breaker(breaker: &CircuitBreaker) -> Self {
        QuoteLineItem {
            id: breaker.id.clone(),
            kind: LineKind::CircuitBreaker,
            label: breaker.label.clone(),
            reference: breaker.reference.clone(),
            unit_price: breaker.price,
            quantity: breaker.quantity,
            room_id: None,
        }
    }
}
