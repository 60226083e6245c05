use super::CableInput;
use crate::catalog::{CableType, Catalog, CatalogError};
use crate::quote::line::{LineKind, QuoteLineItem};
use crate::units::CableSection;

/// 길이 추정값이 없을 때 견적하는 기본 길이 [m]
pub const DEFAULT_CABLE_LENGTH_M: u32 = 10;

/// 요청 단면적 이하의 가장 큰 카탈로그 규격. 최소 1.5mm².
pub fn section_tier(cable_type: CableType, section_mm2: f64) -> Option<CableSection> {
    let tiers: &[(f64, CableSection)] = match cable_type {
        CableType::RJ45 | CableType::Coaxial => return None,
        CableType::R2V => &[
            (10.0, CableSection::S10),
            (6.0, CableSection::S6),
            (4.0, CableSection::S4),
            (2.5, CableSection::S2_5),
        ],
        CableType::Prefile => &[(6.0, CableSection::S6), (2.5, CableSection::S2_5)],
    };
    Some(
        tiers
            .iter()
            .find(|(min, _)| section_mm2 >= *min)
            .map(|&(_, s)| s)
            .unwrap_or(CableSection::S1_5),
    )
}

/// 견적 길이 [m]. 추정값을 올림하고, 없으면 기본 길이를 쓴다.
pub fn billed_length(length_estimate_m: Option<f64>) -> u32 {
    match length_estimate_m {
        Some(len) if len.is_finite() && len > 0.0 => len.ceil() as u32,
        _ => DEFAULT_CABLE_LENGTH_M,
    }
}

/// 케이블 한 줄을 견적한다. 단가는 미터당 가격, 수량은 견적 길이이다.
pub fn price_cable(
    index: usize,
    input: &CableInput,
    catalog: &Catalog,
) -> Result<QuoteLineItem, CatalogError> {
    let cable_type = input
        .cable_type
        .unwrap_or_else(|| CableType::infer(input.kind.as_deref()));
    let section = section_tier(cable_type, input.section);
    let part = &catalog.cable(cable_type, section)?.part;
    let label = match cable_type {
        CableType::RJ45 => "Câble RJ45 Cat6".to_string(),
        CableType::Coaxial => "Câble Coaxial".to_string(),
        CableType::R2V | CableType::Prefile => {
            format!("Câble {cable_type} {}mm²", input.section)
        }
    };
    Ok(QuoteLineItem {
        id: format!("cable-{index}"),
        kind: LineKind::Cable,
        label,
        reference: part.reference.clone(),
        unit_price: part.price,
        quantity: billed_length(input.length_estimate),
        room_id: None,
    })
}
