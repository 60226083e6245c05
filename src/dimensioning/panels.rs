use super::PanelInput;
use crate::catalog::{Catalog, CatalogError};
use crate::quote::line::{LineKind, QuoteLineItem};

/// 모듈 수가 주어지지 않았을 때의 기본 요청값.
pub const DEFAULT_PANEL_MODULES: u32 = 18;

/// 요청 모듈 수에 맞는 함체를 골라 견적 줄을 만든다.
pub fn price_panel(
    index: usize,
    input: &PanelInput,
    catalog: &Catalog,
) -> Result<QuoteLineItem, CatalogError> {
    let requested = input.modules.unwrap_or(DEFAULT_PANEL_MODULES);
    let panel = catalog.panel_for_modules(requested)?;
    let label = input
        .kind
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Tableau {} modules", panel.capacity()));
    Ok(QuoteLineItem {
        id: format!("panel-{index}"),
        kind: LineKind::ElectricalPanel,
        label,
        reference: panel.part.reference.clone(),
        unit_price: panel.part.price,
        quantity: 1,
        room_id: None,
    })
}
