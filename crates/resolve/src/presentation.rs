use facture_model::{FontFamily, ProfileRecord, TemplateData};
use facture_types::Color;
use serde::Serialize;

/// Hard fallbacks used when neither template nor profile supplies a value.
pub mod defaults {
    use facture_types::Color;

    pub const PRIMARY_COLOR: Color = Color::new(0x3b, 0x82, 0xf6);
    pub const SECONDARY_COLOR: Color = Color::new(0x64, 0x74, 0x8b);
    pub const ACCENT_COLOR: Color = Color::new(0xf5, 0x9e, 0x0b);
    pub const TEXT_COLOR: Color = Color::new(0x1f, 0x29, 0x37);
    pub const COMPANY_NAME: &str = "Your Company";
    pub const COMPANY_ADDRESS: &str = "123 Business Street";
    pub const COMPANY_EMAIL: &str = "your@company.com";
}

/// The single merged set of visual and identity values for one render.
/// Derived fresh every time, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPresentation {
    pub primary_color: Color,
    pub secondary_color: Color,
    pub accent_color: Color,
    pub text_color: Color,
    pub font_family: FontFamily,
    pub company_name: String,
    pub company_address: String,
    pub company_email: String,
    pub company_phone: Option<String>,
    pub company_website: Option<String>,
    pub tax_id: Option<String>,
    pub business_license: Option<String>,
    pub logo_url: Option<String>,
}

/// Merge template, profile, and hard defaults into one presentation.
///
/// Total: never fails, every required field ends up populated. Each field
/// resolves independently (template value, else profile value, else
/// default) — except colors, which resolve as a group: if the template
/// defines any usable color, the profile's legacy colors are not consulted
/// at all.
pub fn resolve(
    template: Option<&TemplateData>,
    profile: Option<&ProfileRecord>,
) -> ResolvedPresentation {
    let (primary_color, secondary_color, accent_color, text_color) =
        resolve_colors(template, profile);

    ResolvedPresentation {
        primary_color,
        secondary_color,
        accent_color,
        text_color,
        font_family: template.and_then(|t| t.font_family).unwrap_or_default(),
        company_name: required(
            pick(
                template.map(|t| &t.company_name),
                profile.map(|p| &p.company_name),
            ),
            defaults::COMPANY_NAME,
        ),
        company_address: required(
            pick(
                template.map(|t| &t.company_address),
                profile.map(|p| &p.company_address),
            ),
            defaults::COMPANY_ADDRESS,
        ),
        company_email: required(
            pick(
                template.map(|t| &t.company_email),
                profile.map(|p| &p.company_email),
            ),
            defaults::COMPANY_EMAIL,
        ),
        company_phone: pick(
            template.map(|t| &t.company_phone),
            profile.map(|p| &p.company_phone),
        ),
        company_website: pick(
            template.map(|t| &t.company_website),
            profile.map(|p| &p.company_website),
        ),
        tax_id: pick(template.map(|t| &t.tax_id), profile.map(|p| &p.tax_id)),
        business_license: pick(
            template.map(|t| &t.business_license),
            profile.map(|p| &p.business_license),
        ),
        logo_url: pick(
            template.map(|t| &t.logo_url),
            profile.map(|p| &p.logo_url),
        ),
    }
}

/// A present-but-empty field does not count as a value.
fn non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn pick(template: Option<&Option<String>>, profile: Option<&Option<String>>) -> Option<String> {
    template
        .and_then(non_empty)
        .or_else(|| profile.and_then(non_empty))
}

fn required(value: Option<String>, fallback: &str) -> String {
    value.unwrap_or_else(|| fallback.to_string())
}

/// A non-empty hex string that fails to parse counts as absent.
fn parse_color(field: &Option<String>) -> Option<Color> {
    non_empty(field).and_then(|s| Color::from_hex(&s).ok())
}

fn resolve_colors(
    template: Option<&TemplateData>,
    profile: Option<&ProfileRecord>,
) -> (Color, Color, Color, Color) {
    if let Some(t) = template {
        let primary = parse_color(&t.primary_color);
        let secondary = parse_color(&t.secondary_color);
        let accent = parse_color(&t.accent_color);
        let text = parse_color(&t.text_color);
        // One usable template color claims the whole group; missing members
        // take hard defaults, never the profile's legacy colors.
        if primary.is_some() || secondary.is_some() || accent.is_some() || text.is_some() {
            return (
                primary.unwrap_or(defaults::PRIMARY_COLOR),
                secondary.unwrap_or(defaults::SECONDARY_COLOR),
                accent.unwrap_or(defaults::ACCENT_COLOR),
                text.unwrap_or(defaults::TEXT_COLOR),
            );
        }
    }
    (
        profile
            .and_then(|p| parse_color(&p.primary_color))
            .unwrap_or(defaults::PRIMARY_COLOR),
        profile
            .and_then(|p| parse_color(&p.secondary_color))
            .unwrap_or(defaults::SECONDARY_COLOR),
        profile
            .and_then(|p| parse_color(&p.accent_color))
            .unwrap_or(defaults::ACCENT_COLOR),
        profile
            .and_then(|p| parse_color(&p.text_color))
            .unwrap_or(defaults::TEXT_COLOR),
    )
}
