// crates/thaiaddr-core/src/model/convert.rs
use super::raw::RecordRaw;
use super::{GeographyRecord, LocalizedName, PostalCode};
use crate::error::{AddressError, Result};

/// **Standard Converter:** Raw -> validated records.
///
/// Fails on the first record whose postal code is not a valid Thai code; the
/// error names the record's position so a broken dataset is easy to fix.
pub fn from_raw(raw_records: Vec<RecordRaw>) -> Result<Vec<GeographyRecord>> {
    raw_records
        .into_iter()
        .enumerate()
        .map(|(idx, r)| {
            let text = r.postal_code.to_text();
            let postal_code = PostalCode::parse(&text).map_err(|e| {
                AddressError::InvalidData(format!(
                    "record #{idx} (subdistrict {}): postal code {text:?}: {e}",
                    r.subdistrict_code
                ))
            })?;

            Ok(GeographyRecord {
                province_code: r.province_code,
                province_name: LocalizedName::new(r.province_name_th, r.province_name_en),
                district_code: r.district_code,
                district_name: LocalizedName::new(r.district_name_th, r.district_name_en),
                subdistrict_code: r.subdistrict_code,
                subdistrict_name: LocalizedName::new(r.subdistrict_name_th, r.subdistrict_name_en),
                postal_code,
            })
        })
        .collect()
}
