use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::line::QuoteLineItem;

/// 표시용 소수 자릿수
pub const DISPLAY_DECIMALS: u32 = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub equipment: Decimal,
    pub dimensioning: Decimal,
    pub total: Decimal,
}

impl QuoteTotals {
    /// 표시용으로 반올림한 합계.
    pub fn rounded(&self) -> QuoteTotals {
        QuoteTotals {
            equipment: round_for_display(self.equipment),
            dimensioning: round_for_display(self.dimensioning),
            total: round_for_display(self.total),
        }
    }
}

pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp(DISPLAY_DECIMALS)
}

pub fn sum_lines<'a>(lines: impl IntoIterator<Item = &'a QuoteLineItem>) -> Decimal {
    lines.into_iter().map(QuoteLineItem::line_total).sum()
}

/// 총액 = Σ 설비 줄 금액 + Σ 치수 계산 줄 금액. 반올림하지 않은 정확한 값이다.
pub fn calculate_total(
    equipment_lines: &[QuoteLineItem],
    dimensioning_lines: &[QuoteLineItem],
) -> QuoteTotals {
    let equipment = sum_lines(equipment_lines);
    let dimensioning = sum_lines(dimensioning_lines);
    QuoteTotals {
        equipment,
        dimensioning,
        total: equipment + dimensioning,
    }
}
