use tracing::warn;

use super::labels::translate_description;
use super::BreakerInput;
use crate::catalog::{Catalog, CatalogError};
use crate::panel::CircuitBreaker;
use crate::units::BreakerRating;

/// 상위 서비스가 준 정격값을 표준 정격으로 맞춘다.
///
/// 표에 없는 값은 16A 품목으로 견적한다. 상위 입력 경계에서만 쓰는 폴백이다.
pub fn normalize_rating(amps: u32) -> BreakerRating {
    BreakerRating::from_amps(amps).unwrap_or_else(|| {
        warn!(amps, "표준 정격이 아니므로 16A 차단기로 대체합니다");
        BreakerRating::A16
    })
}

/// 정격에 맞는 카탈로그 품번/단가로 차단기 한 줄을 만든다.
pub fn price_breaker(
    id: String,
    rating: BreakerRating,
    quantity: u32,
    description: Option<&str>,
    catalog: &Catalog,
) -> Result<CircuitBreaker, CatalogError> {
    let part = &catalog.breaker(rating)?.part;
    let label = match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(d) => translate_description(d),
        None => format!("Disjoncteur {}A", rating.amps()),
    };
    Ok(CircuitBreaker {
        id,
        rating,
        quantity,
        reference: part.reference.clone(),
        label,
        price: part.price,
    })
}

/// 치수 계산 결과의 차단기 목록을 견적용 차단기로 변환한다. id는 `cb-{순번}`.
pub fn generate_breakers(
    inputs: &[BreakerInput],
    catalog: &Catalog,
) -> Result<Vec<CircuitBreaker>, CatalogError> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            price_breaker(
                format!("cb-{index}"),
                normalize_rating(input.rating),
                input.quantity,
                input.description.as_deref(),
                catalog,
            )
        })
        .collect()
}
