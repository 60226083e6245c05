use serde::{Deserialize, Serialize};
use tracing::debug;

use super::breaker::CircuitBreaker;

/// 분전반 한 열(레일)에 들어가는 최대 모듈 수.
pub const ROW_MODULE_BUDGET: u32 = 8;

/// 같은 레일에 배치된 차단기 묶음. 번호는 1부터 배치 순서대로 매긴다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelRow {
    pub number: usize,
    pub breakers: Vec<CircuitBreaker>,
}

impl PanelRow {
    /// 사용 중인 모듈 수. 항상 [`ROW_MODULE_BUDGET`] 이하이다.
    pub fn modules(&self) -> u32 {
        self.breakers.iter().map(CircuitBreaker::module_cost).sum()
    }

    pub fn free_modules(&self) -> u32 {
        ROW_MODULE_BUDGET.saturating_sub(self.modules())
    }

    /// 열 전체 정격 합계 [A] (정격 × 수량의 합)
    pub fn total_rating(&self) -> u32 {
        self.breakers
            .iter()
            .fold(0u32, |acc, b| acc.saturating_add(b.nameplate_current()))
    }

    pub fn breaker_ids(&self) -> Vec<String> {
        self.breakers.iter().map(|b| b.id.clone()).collect()
    }
}

/// 차단기를 입력 순서대로 열에 채운다 (first-fit, 재정렬 없음).
///
/// 현재 열에 넣으면 모듈 예산을 넘는 경우에만 열을 닫고 새 열을 시작한다.
/// 차단기 하나를 여러 열로 나누지 않으며, 어떤 차단기도 버리지 않는다.
pub fn pack_rows(breakers: &[CircuitBreaker]) -> Vec<PanelRow> {
    let mut rows: Vec<PanelRow> = Vec::new();
    let mut current: Vec<CircuitBreaker> = Vec::new();
    let mut current_modules = 0u32;

    for breaker in breakers {
        let cost = breaker.module_cost();
        if current_modules + cost > ROW_MODULE_BUDGET && !current.is_empty() {
            rows.push(PanelRow {
                number: rows.len() + 1,
                breakers: std::mem::take(&mut current),
            });
            current_modules = 0;
        }
        current.push(breaker.clone());
        current_modules += cost;
    }

    if !current.is_empty() {
        rows.push(PanelRow {
            number: rows.len() + 1,
            breakers: current,
        });
    }

    debug!(
        breakers = breakers.len(),
        rows = rows.len(),
        "차단기 열 배치 완료"
    );
    rows
}
