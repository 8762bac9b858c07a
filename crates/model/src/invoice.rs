use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Invoice lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Sent,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Sent => "sent",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "sent" => InvoiceStatus::Sent,
            "paid" => InvoiceStatus::Paid,
            "overdue" => InvoiceStatus::Overdue,
            "cancelled" => InvoiceStatus::Cancelled,
            _ => InvoiceStatus::Draft,
        }
    }

    /// The status an invoice displays as on `today`: a sent invoice past its
    /// due date reads as overdue without a stored status transition.
    pub fn effective(self, due_date: Option<NaiveDate>, today: NaiveDate) -> InvoiceStatus {
        match (self, due_date) {
            (InvoiceStatus::Sent, Some(due)) if due < today => InvoiceStatus::Overdue,
            _ => self,
        }
    }
}

/// One billable row on an invoice.
///
/// `amount` is stored, not derived: it defaults to `quantity * rate` but a
/// manually overridden amount is kept and later summed as-is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    pub rate: f64,
    pub amount: f64,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, rate: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            rate,
            amount: quantity * rate,
        }
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }
}

impl<'de> Deserialize<'de> for LineItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LineItemDef {
            #[serde(default)]
            description: String,
            #[serde(default)]
            quantity: f64,
            #[serde(default)]
            rate: f64,
            amount: Option<f64>,
        }

        let def = LineItemDef::deserialize(deserializer)?;
        let amount = def.amount.unwrap_or(def.quantity * def.rate);
        Ok(LineItem {
            description: def.description,
            quantity: def.quantity,
            rate: def.rate,
            amount,
        })
    }
}

/// A stored invoice row.
///
/// `number` and `line_items` are nullable at the data source and stay
/// optional here; the layout engine treats their absence as a contract
/// violation, not a renderable state. The stored totals are never trusted:
/// rendering always recomputes them from the line items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: String,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default, alias = "customerId")]
    pub customer_id: Option<String>,
    #[serde(default, alias = "templateId")]
    pub template_id: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "lineItems")]
    pub line_items: Option<Vec<LineItem>>,
    #[serde(default, alias = "taxRate")]
    pub tax_rate: f64,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default, alias = "taxAmount")]
    pub tax_amount: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default, alias = "issueDate")]
    pub issue_date: Option<NaiveDate>,
    #[serde(default, alias = "dueDate")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl InvoiceRecord {
    /// Human-readable number for display and filenames. Bare sequential
    /// numbers ("42") render as "INV-0042"; anything else passes through.
    pub fn display_number(&self) -> Option<String> {
        let number = self.number.as_deref()?.trim();
        if number.is_empty() {
            return None;
        }
        if number.chars().all(|c| c.is_ascii_digit()) {
            Some(format!("INV-{:0>4}", number))
        } else {
            Some(number.to_string())
        }
    }
}
