// crates/thaiaddr-core/src/model/table.rs
use super::GeographyRecord;
use crate::error::{AddressError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The immutable reference table, loaded once per process or session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReferenceTable {
    records: Vec<GeographyRecord>,
}

/// Simple aggregate statistics for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub records: usize,
    pub provinces: usize,
    pub districts: usize,
    pub subdistricts: usize,
    pub postal_codes: usize,
}

impl ReferenceTable {
    /// Wraps already validated records. An empty table is rejected.
    pub fn new(records: Vec<GeographyRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(AddressError::Empty);
        }
        Ok(Self { records })
    }

    /// All records in table order.
    pub fn records(&self) -> &[GeographyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        let mut provinces = HashSet::new();
        let mut districts = HashSet::new();
        let mut subdistricts = HashSet::new();
        let mut postal_codes = HashSet::new();
        for r in &self.records {
            provinces.insert(r.province_code);
            districts.insert(r.district_code);
            subdistricts.insert(r.subdistrict_code);
            postal_codes.insert(r.postal_code.as_str());
        }
        TableStats {
            records: self.records.len(),
            provinces: provinces.len(),
            districts: districts.len(),
            subdistricts: subdistricts.len(),
            postal_codes: postal_codes.len(),
        }
    }
}

impl AsRef<[GeographyRecord]> for ReferenceTable {
    fn as_ref(&self) -> &[GeographyRecord] {
        &self.records
    }
}
