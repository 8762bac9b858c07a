use serde::{Deserialize, Serialize};

/// Languages the document generator can localize into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    En,
    Da,
    De,
    Fr,
    Es,
}

impl LanguageCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageCode::En => "en",
            LanguageCode::Da => "da",
            LanguageCode::De => "de",
            LanguageCode::Fr => "fr",
            LanguageCode::Es => "es",
        }
    }
}

struct LanguageProfile {
    code: LanguageCode,
    /// Lowercase substrings counted anywhere in the text: the local word
    /// for "invoice", local currency names, and from/to prepositions
    /// (padded with spaces so they only match as words).
    keywords: &'static [&'static str],
    /// Characters distinctive enough to identify the language on their
    /// own. The sets are disjoint; shared diacritics like `é` are excluded.
    markers: &'static [char],
}

static PROFILES: &[LanguageProfile] = &[
    LanguageProfile {
        code: LanguageCode::Da,
        keywords: &[
            "faktura", "moms", "dkk", "betaling", "beløb", "forfalden", " kr", " fra ", " til ",
        ],
        markers: &['æ', 'ø', 'å'],
    },
    LanguageProfile {
        code: LanguageCode::De,
        keywords: &[
            "rechnung", "mwst", "mehrwertsteuer", "betrag", "zahlung", "fällig", " von ", " an ",
        ],
        markers: &['ä', 'ö', 'ü', 'ß'],
    },
    LanguageProfile {
        code: LanguageCode::Fr,
        keywords: &[
            "facture", "tva", "montant", "paiement", "échéance", " de ", " à ",
        ],
        markers: &['ç', 'œ', 'à', 'è', 'ê', 'â', 'î', 'û'],
    },
    LanguageProfile {
        code: LanguageCode::Es,
        keywords: &[
            "factura", "iva", "importe", "pago", "vencimiento", " de ", " para ",
        ],
        markers: &['ñ', '¿', '¡'],
    },
    LanguageProfile {
        code: LanguageCode::En,
        keywords: &[
            "invoice", "payment", "due", "amount", "usd", "$", " from ", " to ",
        ],
        markers: &[],
    },
];

/// Infer a display language from free-text invoice content.
///
/// Pure and total: keyword occurrences are summed per language and the
/// strictly highest score wins; ties and all-zero scores fall back to
/// distinctive characters, then to English. Runs on the invoice's own
/// title/description, never on customer or company data.
pub fn detect(text: &str) -> LanguageCode {
    let haystack = text.to_lowercase();

    let mut best: Option<(LanguageCode, usize)> = None;
    let mut tied = false;
    for profile in PROFILES {
        let score: usize = profile
            .keywords
            .iter()
            .map(|kw| haystack.matches(kw).count())
            .sum();
        match best {
            Some((_, top)) if score > top => {
                best = Some((profile.code, score));
                tied = false;
            }
            Some((_, top)) if score == top => tied = true,
            None => best = Some((profile.code, score)),
            _ => {}
        }
    }
    if let Some((code, score)) = best {
        if score > 0 && !tied {
            return code;
        }
    }

    for profile in PROFILES {
        if haystack.chars().any(|c| profile.markers.contains(&c)) {
            return profile.code;
        }
    }
    LanguageCode::En
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_danish_invoice_text() {
        assert_eq!(
            detect("Faktura for bilvask service, 500 DKK, 25% moms"),
            LanguageCode::Da
        );
    }

    #[test]
    fn detects_english_invoice_text() {
        assert_eq!(detect("Invoice for website design, $1500"), LanguageCode::En);
    }

    #[test]
    fn detects_german_invoice_text() {
        assert_eq!(
            detect("Rechnung für Webdesign, Betrag 1200 EUR inkl. MwSt"),
            LanguageCode::De
        );
    }

    #[test]
    fn detects_french_invoice_text() {
        assert_eq!(
            detect("Facture, montant 800 EUR, TVA incluse"),
            LanguageCode::Fr
        );
    }

    #[test]
    fn detects_spanish_invoice_text() {
        assert_eq!(
            detect("Factura para diseño web, importe 900 EUR, IVA incluido"),
            LanguageCode::Es
        );
    }

    #[test]
    fn falls_back_to_marker_characters() {
        assert_eq!(detect("søndag på havnen"), LanguageCode::Da);
        assert_eq!(detect("straße"), LanguageCode::De);
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(detect(""), LanguageCode::En);
        assert_eq!(detect("1234 5678"), LanguageCode::En);
    }

    #[test]
    fn is_deterministic() {
        let text = "Faktura for bilvask service, 500 DKK, 25% moms";
        assert_eq!(detect(text), detect(text));
    }
}
