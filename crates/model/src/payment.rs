use serde::{Deserialize, Serialize};

/// A customer's default payment method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentMethod {
    Card {
        #[serde(default)]
        brand: Option<String>,
        last4: String,
    },
    Bank {
        #[serde(default, alias = "bankName")]
        bank_name: Option<String>,
        #[serde(default, alias = "regNo")]
        reg_no: Option<String>,
        #[serde(default, alias = "accountNo")]
        account_no: Option<String>,
        #[serde(default)]
        iban: Option<String>,
    },
    Mobile {
        #[serde(default)]
        phone: Option<String>,
        #[serde(default)]
        provider: Option<String>,
    },
}

impl PaymentMethod {
    /// One display line for the payment block. Cards mask down to the last
    /// four digits; bank methods prefer registration + account over IBAN.
    pub fn display_line(&self) -> String {
        match self {
            PaymentMethod::Card { brand, last4 } => match brand {
                Some(brand) => format!("{} **** {}", brand, last4),
                None => format!("**** {}", last4),
            },
            PaymentMethod::Bank {
                bank_name,
                reg_no,
                account_no,
                iban,
            } => {
                let mut parts: Vec<String> = Vec::new();
                if let Some(name) = bank_name {
                    parts.push(name.clone());
                }
                match (reg_no, account_no) {
                    (Some(reg), Some(account)) => {
                        parts.push(format!("{} {}", reg, account));
                    }
                    _ => {
                        if let Some(iban) = iban {
                            parts.push(format!("IBAN {}", iban));
                        }
                    }
                }
                parts.join(", ")
            }
            PaymentMethod::Mobile { phone, provider } => phone
                .clone()
                .or_else(|| provider.clone())
                .unwrap_or_default(),
        }
    }
}
