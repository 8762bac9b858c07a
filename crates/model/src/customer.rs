use crate::payment::PaymentMethod;
use serde::{Deserialize, Serialize};

/// A stored customer row.
///
/// The defaults (`currency`, `default_tax_rate`, `payment_terms_days`) are
/// copied onto new invoices at creation time; the contact fields are read
/// live at render time for the "To" block.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CustomerRecord {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default, alias = "defaultTaxRate")]
    pub default_tax_rate: Option<f64>,
    #[serde(default, alias = "paymentTermsDays", alias = "payment_terms")]
    pub payment_terms_days: Option<u32>,
    #[serde(default, alias = "paymentMethod")]
    pub payment_method: Option<PaymentMethod>,
}
