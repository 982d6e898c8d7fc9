// crates/thaiaddr-core/src/model/raw.rs
use serde::Deserialize;

/// Raw record structure as it comes from the reference-table JSON.
///
/// {
///   "provinceCode": 10, "provinceNameTh": "กรุงเทพมหานคร", "provinceNameEn": "Bangkok",
///   "districtCode": 1004, "districtNameTh": "บางรัก", "districtNameEn": "Bang Rak",
///   "subdistrictCode": 100401, "subdistrictNameTh": "สีลม", "subdistrictNameEn": "Si Lom",
///   "postalCode": 10500
/// }
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordRaw {
    pub province_code: u32,
    pub province_name_th: String,
    #[serde(default)]
    pub province_name_en: String,
    pub district_code: u32,
    pub district_name_th: String,
    #[serde(default)]
    pub district_name_en: String,
    pub subdistrict_code: u32,
    pub subdistrict_name_th: String,
    #[serde(default)]
    pub subdistrict_name_en: String,
    pub postal_code: PostalCodeRaw,
}

/// Datasets ship the postal code either as a JSON number or as a string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PostalCodeRaw {
    Number(u64),
    Text(String),
}

impl PostalCodeRaw {
    pub fn to_text(&self) -> String {
        match self {
            PostalCodeRaw::Number(n) => n.to_string(),
            PostalCodeRaw::Text(s) => s.trim().to_owned(),
        }
    }
}

pub type RecordsRaw = Vec<RecordRaw>;
