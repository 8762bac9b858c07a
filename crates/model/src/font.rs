use serde::{de, Deserialize, Deserializer, Serialize};

/// The closed set of font families a template may select.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Mono,
}

impl FontFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontFamily::Sans => "sans",
            FontFamily::Serif => "serif",
            FontFamily::Mono => "mono",
        }
    }

    /// Parse a font family from a string (e.g., "serif", "monospace").
    fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "sans" | "sans-serif" => Ok(FontFamily::Sans),
            "serif" => Ok(FontFamily::Serif),
            "mono" | "monospace" => Ok(FontFamily::Mono),
            _ => Err(format!("Invalid font family: '{}'", s)),
        }
    }
}

impl<'de> Deserialize<'de> for FontFamily {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases() {
        assert_eq!(FontFamily::parse("sans-serif").unwrap(), FontFamily::Sans);
        assert_eq!(FontFamily::parse("Monospace").unwrap(), FontFamily::Mono);
        assert!(FontFamily::parse("comic sans").is_err());
    }
}
