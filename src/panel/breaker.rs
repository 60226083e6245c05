use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::units::BreakerRating;

/// 치수 계산 결과로 생성된(또는 사용자가 수정한) 분기 차단기 한 줄.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitBreaker {
    pub id: String,
    pub rating: BreakerRating,
    /// 1 이상. 0/음수 검증은 호출 측 책임이다.
    pub quantity: u32,
    pub reference: String,
    /// 견적서 표시명
    pub label: String,
    /// 단가
    pub price: Decimal,
}

impl CircuitBreaker {
    /// 이 줄이 차지하는 레일 모듈 수. 수량과 무관하게 정격으로만 정해진다.
    pub fn module_cost(&self) -> u32 {
        self.rating.module_cost()
    }

    /// 정격 × 수량 [A]
    pub fn nameplate_current(&self) -> u32 {
        self.rating.amps().saturating_mul(self.quantity)
    }
}
