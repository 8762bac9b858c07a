use serde::{Deserialize, Serialize};

/// Per-user company defaults, exactly one row per user.
///
/// The color fields are legacy: they predate templates and only apply when
/// the invoice has no template colors at all.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProfileRecord {
    #[serde(default, alias = "companyName")]
    pub company_name: Option<String>,
    #[serde(default, alias = "companyAddress", alias = "address")]
    pub company_address: Option<String>,
    #[serde(default, alias = "companyPhone", alias = "phone")]
    pub company_phone: Option<String>,
    #[serde(default, alias = "companyEmail", alias = "email")]
    pub company_email: Option<String>,
    #[serde(default, alias = "companyWebsite", alias = "website")]
    pub company_website: Option<String>,
    #[serde(default, alias = "taxId")]
    pub tax_id: Option<String>,
    #[serde(default, alias = "businessLicense")]
    pub business_license: Option<String>,
    #[serde(default, alias = "logoUrl")]
    pub logo_url: Option<String>,
    #[serde(default, alias = "primaryColor")]
    pub primary_color: Option<String>,
    #[serde(default, alias = "secondaryColor")]
    pub secondary_color: Option<String>,
    #[serde(default, alias = "accentColor")]
    pub accent_color: Option<String>,
    #[serde(default, alias = "textColor")]
    pub text_color: Option<String>,
}
