use facture_model::LineItem;
use serde::Serialize;

/// Derived monetary totals. Recomputed for every render; any stored copy on
/// the invoice row is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
}

/// Sum line items and apply the tax rate.
///
/// Each item's stored `amount` is summed as-is (a manually overridden
/// amount is respected, not recomputed from quantity and rate). No rounding
/// happens here; values keep full precision until formatted.
pub fn compute(items: &[LineItem], tax_rate_percent: f64) -> Totals {
    let subtotal: f64 = items.iter().map(|item| item.amount).sum();
    let tax_amount = subtotal * tax_rate_percent / 100.0;
    Totals {
        subtotal,
        tax_amount,
        total: subtotal + tax_amount,
    }
}
