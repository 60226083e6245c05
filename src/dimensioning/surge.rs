use super::SurgeProtectorInput;
use crate::catalog::{Catalog, CatalogError};
use crate::quote::line::{LineKind, QuoteLineItem};

pub fn price_surge_protector(
    index: usize,
    input: &SurgeProtectorInput,
    catalog: &Catalog,
) -> Result<QuoteLineItem, CatalogError> {
    let part = catalog.surge_protector()?;
    let label = input
        .kind
        .as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .unwrap_or("Parafoudre Type 2")
        .to_string();
    Ok(QuoteLineItem {
        id: format!("sp-{index}"),
        kind: LineKind::SurgeProtector,
        label,
        reference: part.reference.clone(),
        unit_price: part.price,
        quantity: input.quantity,
        room_id: None,
    })
}
