// crates/thaiaddr-core/src/model/mod.rs

//! # Data Model
//!
//! The reference table is a flat list of [`GeographyRecord`]s, one per postal
//! sub-area. There is no nested province → district → subdistrict tree: every
//! hierarchy view is derived on demand by the query layer
//! ([`crate::traits::AddressQuery`]) from whichever record subset is active.

pub mod convert;
pub mod postal;
pub mod raw;
pub mod table;

pub use postal::PostalCode;
pub use table::{ReferenceTable, TableStats};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Numeric identifier of a province, district or subdistrict.
///
/// Codes are treated as globally unique keys within their level.
pub type AreaCode = u32;

/// Display locale for option labels and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Th,
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Th => "th",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "th" => Ok(Locale::Th),
            "en" => Ok(Locale::En),
            other => Err(format!("unsupported locale: {other}")),
        }
    }
}

/// A name in both supported display locales.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalizedName {
    pub th: String,
    pub en: String,
}

impl LocalizedName {
    pub fn new(th: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            th: th.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::Th => &self.th,
            Locale::En => &self.en,
        }
    }
}

/// One postal sub-area. Immutable once the table is built.
///
/// A subdistrict carries exactly one postal code, but one postal code may
/// cover several subdistricts (and several districts or provinces).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographyRecord {
    pub province_code: AreaCode,
    pub province_name: LocalizedName,
    pub district_code: AreaCode,
    pub district_name: LocalizedName,
    pub subdistrict_code: AreaCode,
    pub subdistrict_name: LocalizedName,
    pub postal_code: PostalCode,
}

impl GeographyRecord {
    pub fn postal_code(&self) -> &str {
        self.postal_code.as_str()
    }
}

/// The three cascading administrative levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Province,
    District,
    Subdistrict,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Level::Province => "province",
            Level::District => "district",
            Level::Subdistrict => "subdistrict",
        })
    }
}

/// A dropdown entry for a province or district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaOption {
    pub code: AreaCode,
    pub name: LocalizedName,
}

/// A dropdown entry for a subdistrict; carries the postal code it syncs back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubdistrictOption {
    pub code: AreaCode,
    pub name: LocalizedName,
    pub postal_code: PostalCode,
}

/// One row of the live postal-code suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalSuggestion {
    pub postal_code: PostalCode,
    pub district_name: LocalizedName,
    pub province_name: LocalizedName,
}
