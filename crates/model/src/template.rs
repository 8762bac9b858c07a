use crate::font::FontFamily;
use serde::{Deserialize, Serialize};

/// A named, reusable bundle of styling and company-identity overrides.
/// Many invoices may reference one template.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplateRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "isDefault")]
    pub is_default: bool,
    #[serde(default, alias = "templateData", alias = "template_data")]
    pub data: TemplateData,
}

/// The styling payload of a template. Every field is optional; absent
/// fields fall through to profile values during resolution. Colors stay raw
/// hex strings here so the resolver can decide how to treat bad values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TemplateData {
    #[serde(default, alias = "primaryColor")]
    pub primary_color: Option<String>,
    #[serde(default, alias = "secondaryColor")]
    pub secondary_color: Option<String>,
    #[serde(default, alias = "accentColor")]
    pub accent_color: Option<String>,
    #[serde(default, alias = "textColor")]
    pub text_color: Option<String>,
    #[serde(default, alias = "fontFamily")]
    pub font_family: Option<FontFamily>,
    #[serde(default, alias = "companyName")]
    pub company_name: Option<String>,
    #[serde(default, alias = "companyAddress")]
    pub company_address: Option<String>,
    #[serde(default, alias = "companyPhone")]
    pub company_phone: Option<String>,
    #[serde(default, alias = "companyEmail")]
    pub company_email: Option<String>,
    #[serde(default, alias = "companyWebsite")]
    pub company_website: Option<String>,
    #[serde(default, alias = "taxId")]
    pub tax_id: Option<String>,
    #[serde(default, alias = "businessLicense")]
    pub business_license: Option<String>,
    #[serde(default, alias = "logoUrl")]
    pub logo_url: Option<String>,
}
