//! Supported display locales.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::LabelError;

/// How a locale orders day, month and year in short dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// `Oct 3`, `Oct 3, 2024`.
    MonthDay,
    /// `3 Oct`, `3 Oct 2024`.
    DayMonth,
    /// Numeric with unit markers: `10月3日`, `2024年10月3日`.
    YearMonthDay,
}

/// Display locale for period and breadcrumb labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Locale {
    /// English (United States).
    #[default]
    EnUs,
    /// English (United Kingdom).
    EnGb,
    /// French (France).
    FrFr,
    /// German (Germany).
    DeDe,
    /// Spanish (Spain).
    EsEs,
    /// Portuguese (Brazil).
    PtBr,
    /// Japanese (Japan).
    JaJp,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Self; 7] = [
        Self::EnUs,
        Self::EnGb,
        Self::FrFr,
        Self::DeDe,
        Self::EsEs,
        Self::PtBr,
        Self::JaJp,
    ];

    /// Returns the BCP-47 tag.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::FrFr => "fr-FR",
            Self::DeDe => "de-DE",
            Self::EsEs => "es-ES",
            Self::PtBr => "pt-BR",
            Self::JaJp => "ja-JP",
        }
    }

    /// Returns the matching `chrono` locale for month names.
    #[must_use]
    pub fn chrono(self) -> chrono::Locale {
        match self {
            Self::EnUs => chrono::Locale::en_US,
            Self::EnGb => chrono::Locale::en_GB,
            Self::FrFr => chrono::Locale::fr_FR,
            Self::DeDe => chrono::Locale::de_DE,
            Self::EsEs => chrono::Locale::es_ES,
            Self::PtBr => chrono::Locale::pt_BR,
            Self::JaJp => chrono::Locale::ja_JP,
        }
    }

    /// Order of the parts in a short date.
    #[must_use]
    pub fn date_order(self) -> DateOrder {
        match self {
            Self::EnUs => DateOrder::MonthDay,
            Self::JaJp => DateOrder::YearMonthDay,
            _ => DateOrder::DayMonth,
        }
    }

    /// Prefix for quarter labels.
    #[must_use]
    pub fn quarter_prefix(self) -> &'static str {
        match self {
            Self::FrFr | Self::EsEs | Self::PtBr => "T",
            _ => "Q",
        }
    }

    /// Label of the category-axis root.
    #[must_use]
    pub fn all_label(self) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb => "All",
            Self::FrFr => "Tout",
            Self::DeDe => "Alle",
            Self::EsEs => "Todo",
            Self::PtBr => "Tudo",
            Self::JaJp => "すべて",
        }
    }
}

impl FromStr for Locale {
    type Err = LabelError;

    /// Accepts `en-US`, `en_us`, or a bare language such as `fr`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('_', "-").to_lowercase();
        let exact = Self::ALL
            .into_iter()
            .find(|locale| locale.tag().to_lowercase() == normalized);
        if let Some(locale) = exact {
            return Ok(locale);
        }

        let language = normalized.split('-').next().unwrap_or_default();
        match language {
            "en" => Ok(Self::EnUs),
            "fr" => Ok(Self::FrFr),
            "de" => Ok(Self::DeDe),
            "es" => Ok(Self::EsEs),
            "pt" => Ok(Self::PtBr),
            "ja" => Ok(Self::JaJp),
            _ => Err(LabelError::UnsupportedLocale(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = LabelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag().to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
