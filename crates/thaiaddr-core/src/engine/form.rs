// crates/thaiaddr-core/src/engine/form.rs

//! Free-text address lines, the submission snapshot and its checks.

use crate::error::PostalCodeError;
use crate::model::PostalCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-text lines typed next to the cascading dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressLines {
    pub house_no: String,
    pub soi: String,
    pub moo: String,
    pub building_name: String,
    pub street_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddressField {
    HouseNo,
    Soi,
    Moo,
    BuildingName,
    StreetName,
}

impl AddressLines {
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        let slot = match field {
            AddressField::HouseNo => &mut self.house_no,
            AddressField::Soi => &mut self.soi,
            AddressField::Moo => &mut self.moo,
            AddressField::BuildingName => &mut self.building_name,
            AddressField::StreetName => &mut self.street_name,
        };
        *slot = value.into();
    }
}

impl std::str::FromStr for AddressField {
    type Err = String;

    /// Accepts the camelCase wire names (`houseNo`) and snake_case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "houseNo" | "house_no" => Ok(AddressField::HouseNo),
            "soi" => Ok(AddressField::Soi),
            "moo" => Ok(AddressField::Moo),
            "buildingName" | "building_name" => Ok(AddressField::BuildingName),
            "streetName" | "street_name" => Ok(AddressField::StreetName),
            other => Err(format!("unknown address field: {other}")),
        }
    }
}

/// Structured address for preview and submission. Names are in the
/// session's active locale; unset parts are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSnapshot {
    pub house_no: String,
    pub soi: String,
    pub moo: String,
    pub building_name: String,
    pub street_name: String,
    pub subdistrict_name: String,
    pub district_name: String,
    pub province_name: String,
    pub postal_code: String,
}

impl AddressSnapshot {
    /// One-line rendering of the non-empty parts.
    ///
    /// ```rust
    /// use thaiaddr_core::engine::AddressSnapshot;
    ///
    /// let snap = AddressSnapshot {
    ///     house_no: "99/1".into(),
    ///     subdistrict_name: "Si Lom".into(),
    ///     district_name: "Bang Rak".into(),
    ///     province_name: "Bangkok".into(),
    ///     postal_code: "10500".into(),
    ///     ..Default::default()
    /// };
    /// assert_eq!(snap.format_display(), "99/1 Si Lom Bang Rak Bangkok 10500");
    /// ```
    pub fn format_display(&self) -> String {
        [
            &self.house_no,
            &self.building_name,
            &self.street_name,
            &self.subdistrict_name,
            &self.district_name,
            &self.province_name,
            &self.postal_code,
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Fields checked before submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    PostalCode,
    Province,
    District,
    Subdistrict,
    HouseNo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "problem", rename_all = "camelCase")]
pub enum FieldIssue {
    Missing {
        field: FormField,
    },
    InvalidPostalCode {
        #[serde(serialize_with = "serialize_display")]
        reason: PostalCodeError,
    },
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing { field } => write!(f, "{field:?} is required"),
            FieldIssue::InvalidPostalCode { reason } => write!(f, "PostalCode: {reason}"),
        }
    }
}

/// Required-field check over a snapshot, in form order.
pub fn validate_snapshot(snapshot: &AddressSnapshot) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if snapshot.postal_code.is_empty() {
        issues.push(FieldIssue::Missing {
            field: FormField::PostalCode,
        });
    } else if let Err(reason) = PostalCode::parse(&snapshot.postal_code) {
        issues.push(FieldIssue::InvalidPostalCode { reason });
    }

    let required = [
        (FormField::Province, &snapshot.province_name),
        (FormField::District, &snapshot.district_name),
        (FormField::Subdistrict, &snapshot.subdistrict_name),
        (FormField::HouseNo, &snapshot.house_no),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            issues.push(FieldIssue::Missing { field });
        }
    }
    issues
}

fn serialize_display<S: serde::Serializer>(
    value: &PostalCodeError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
