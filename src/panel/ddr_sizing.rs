use serde::{Deserialize, Serialize};

use super::row_packing::PanelRow;
use crate::units::DdrRating;

/// 동시 사용률 감소계수(0.7)를 백분율로 표현한 값.
pub const DERATING_PERCENT: u32 = 70;

/// 보정 전류 상한과 DDR 정격. 위에서부터 처음 만족하는 단계를 쓰고, 넘치면 63A.
const DDR_TIERS: [(u32, DdrRating); 2] = [(25, DdrRating::A25), (40, DdrRating::A40)];

/// 한 열에 대한 DDR 선정 결과. 카탈로그와 무관한 순수 계산값이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DdrSizing {
    /// 정격 × 수량 합계 [A]
    pub total_rating: u32,
    /// ceil(합계 × 0.7) [A]
    pub adjusted_rating: u32,
    pub rating: DdrRating,
}

/// 합계 전류에 감소계수를 적용하고 올림한다.
///
/// 정수 연산으로 ceil(total × 70 / 100)을 구하므로 경계값에서 부동소수 오차가 없다.
pub fn derate(total_rating: u32) -> u32 {
    let scaled = u64::from(total_rating) * u64::from(DERATING_PERCENT);
    u32::try_from(scaled.div_ceil(100)).unwrap_or(u32::MAX)
}

/// 보정 전류에 맞는 DDR 정격을 고른다.
pub fn ddr_rating_for(adjusted_rating: u32) -> DdrRating {
    DDR_TIERS
        .iter()
        .find(|(limit, _)| adjusted_rating <= *limit)
        .map(|&(_, rating)| rating)
        .unwrap_or(DdrRating::A63)
}

/// 열 하나의 DDR 정격을 산정한다.
pub fn size_ddr(row: &PanelRow) -> DdrSizing {
    let total_rating = row.total_rating();
    let adjusted_rating = derate(total_rating);
    DdrSizing {
        total_rating,
        adjusted_rating,
        rating: ddr_rating_for(adjusted_rating),
    }
}
