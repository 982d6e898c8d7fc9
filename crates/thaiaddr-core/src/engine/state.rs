// crates/thaiaddr-core/src/engine/state.rs
use crate::model::{AreaCode, AreaOption, GeographyRecord, Level, SubdistrictOption};
use serde::{Deserialize, Serialize};

/// Which input currently drives resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Mode {
    /// Option lists come from the records matching the confirmed postal code.
    #[default]
    ZipDriven,
    /// The user picked a dropdown directly; lists come from the full table.
    Manual,
}

/// Record collection an option list was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SubsetKind {
    Full,
    Postal,
}

/// How a list was produced, so it can be re-derived (e.g. on a locale
/// switch) from exactly the same inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOrigin {
    pub subset: SubsetKind,
    pub parent: Option<AreaCode>,
}

/// A dropdown's current contents. A disabled list is inert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionList<T> {
    pub items: Vec<T>,
    pub enabled: bool,
    pub origin: Option<ListOrigin>,
}

impl<T> OptionList<T> {
    pub fn cleared() -> Self {
        Self {
            items: Vec::new(),
            enabled: false,
            origin: None,
        }
    }

    pub(crate) fn populated(items: Vec<T>, origin: ListOrigin) -> Self {
        Self {
            items,
            enabled: true,
            origin: Some(origin),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for OptionList<T> {
    fn default() -> Self {
        Self::cleared()
    }
}

/// The three cascading dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionLists {
    pub provinces: OptionList<AreaOption>,
    pub districts: OptionList<AreaOption>,
    pub subdistricts: OptionList<SubdistrictOption>,
}

impl OptionLists {
    pub fn contains(&self, level: Level, code: AreaCode) -> bool {
        match level {
            Level::Province => self.provinces.items.iter().any(|o| o.code == code),
            Level::District => self.districts.items.iter().any(|o| o.code == code),
            Level::Subdistrict => self.subdistricts.items.iter().any(|o| o.code == code),
        }
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        match level {
            Level::Province => self.provinces.enabled,
            Level::District => self.districts.enabled,
            Level::Subdistrict => self.subdistricts.enabled,
        }
    }
}

/// The user's current picks. Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub province: Option<AreaCode>,
    pub district: Option<AreaCode>,
    pub subdistrict: Option<AreaCode>,
    pub postal_text: String,
}

impl Selection {
    pub fn get(&self, level: Level) -> Option<AreaCode> {
        match level {
            Level::Province => self.province,
            Level::District => self.district,
            Level::Subdistrict => self.subdistrict,
        }
    }

    pub(crate) fn set(&mut self, level: Level, code: Option<AreaCode>) {
        match level {
            Level::Province => self.province = code,
            Level::District => self.district = code,
            Level::Subdistrict => self.subdistrict = code,
        }
    }
}

/// Everything one form session knows. Only the engine mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionState {
    pub mode: Mode,
    /// Records matching the last confirmed postal code; empty when none is
    /// confirmed.
    pub zip_records: Vec<GeographyRecord>,
    pub selection: Selection,
    pub options: OptionLists,
}
