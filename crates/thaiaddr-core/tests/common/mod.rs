// Shared fixtures for the thaiaddr-core integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use thaiaddr_core::{GeographyRecord, LocalizedName, PostalCode, ReferenceTable};

pub const BANGKOK: u32 = 10;
pub const NONTHABURI: u32 = 12;
pub const PATHUM_THANI: u32 = 13;
pub const CHIANG_MAI: u32 = 50;

pub const BANG_RAK: u32 = 1004;
pub const PATHUM_WAN: u32 = 1007;
pub const SATHON: u32 = 1028;
pub const MUEANG_CHIANG_MAI: u32 = 5001;
pub const MAE_RIM: u32 = 5007;

pub const SI_LOM: u32 = 100402;
pub const THUNG_MAHA_MEK: u32 = 102803;
pub const RIM_TAI: u32 = 500701;

pub fn rec(
    province: (u32, &str, &str),
    district: (u32, &str, &str),
    subdistrict: (u32, &str, &str),
    postal: &str,
) -> GeographyRecord {
    GeographyRecord {
        province_code: province.0,
        province_name: LocalizedName::new(province.1, province.2),
        district_code: district.0,
        district_name: LocalizedName::new(district.1, district.2),
        subdistrict_code: subdistrict.0,
        subdistrict_name: LocalizedName::new(subdistrict.1, subdistrict.2),
        postal_code: PostalCode::parse(postal).expect("fixture postal code"),
    }
}

const BKK: (u32, &str, &str) = (BANGKOK, "กรุงเทพมหานคร", "Bangkok");
const NBI: (u32, &str, &str) = (NONTHABURI, "นนทบุรี", "Nonthaburi");
const PTE: (u32, &str, &str) = (PATHUM_THANI, "ปทุมธานี", "Pathum Thani");
const CMI: (u32, &str, &str) = (CHIANG_MAI, "เชียงใหม่", "Chiang Mai");

/// A small slice of Thailand.
///
/// - 10500 spans two Bangkok districts (Bang Rak, Sathon).
/// - 11000 spans two provinces (Nonthaburi, Pathum Thani).
/// - 50180 resolves to a single subdistrict all the way down.
/// - Sathon also has Thung Maha Mek (10120), unreachable from 10500.
pub fn records() -> Vec<GeographyRecord> {
    let bang_rak = (BANG_RAK, "บางรัก", "Bang Rak");
    let sathon = (SATHON, "สาทร", "Sathon");
    let pathum_wan = (PATHUM_WAN, "ปทุมวัน", "Pathum Wan");
    let mueang_cm = (MUEANG_CHIANG_MAI, "เมืองเชียงใหม่", "Mueang Chiang Mai");
    let mae_rim = (MAE_RIM, "แม่ริม", "Mae Rim");

    vec![
        rec(BKK, bang_rak, (100401, "มหาพฤฒาราม", "Maha Phruettharam"), "10500"),
        rec(BKK, bang_rak, (SI_LOM, "สีลม", "Si Lom"), "10500"),
        rec(BKK, bang_rak, (100403, "สุริยวงศ์", "Suriyawong"), "10500"),
        rec(BKK, sathon, (102801, "ทุ่งวัดดอน", "Thung Wat Don"), "10500"),
        rec(BKK, sathon, (THUNG_MAHA_MEK, "ทุ่งมหาเมฆ", "Thung Maha Mek"), "10120"),
        rec(BKK, pathum_wan, (100701, "รองเมือง", "Rong Mueang"), "10330"),
        rec(BKK, pathum_wan, (100704, "ลุมพินี", "Lumphini"), "10330"),
        rec(NBI, (1201, "เมืองนนทบุรี", "Mueang Nonthaburi"), (120102, "บางกระสอ", "Bang Kraso"), "11000"),
        rec(NBI, (1206, "ปากเกร็ด", "Pak Kret"), (120601, "ปากเกร็ด", "Pak Kret"), "11120"),
        rec(PTE, (1301, "เมืองปทุมธานี", "Mueang Pathum Thani"), (130102, "บางปรอก", "Bang Prok"), "11000"),
        rec(CMI, mueang_cm, (500101, "ศรีภูมิ", "Si Phum"), "50200"),
        rec(CMI, mueang_cm, (500105, "ช้างเผือก", "Chang Phueak"), "50300"),
        rec(CMI, mae_rim, (RIM_TAI, "ริมใต้", "Rim Tai"), "50180"),
    ]
}

pub fn table() -> Arc<ReferenceTable> {
    Arc::new(ReferenceTable::new(records()).expect("fixture table"))
}

pub const FIXTURE_JSON: &str = r#"[
  {"provinceCode": 10, "provinceNameTh": "กรุงเทพมหานคร", "provinceNameEn": "Bangkok",
   "districtCode": 1004, "districtNameTh": "บางรัก", "districtNameEn": "Bang Rak",
   "subdistrictCode": 100402, "subdistrictNameTh": "สีลม", "subdistrictNameEn": "Si Lom",
   "postalCode": 10500},
  {"provinceCode": 50, "provinceNameTh": "เชียงใหม่", "provinceNameEn": "Chiang Mai",
   "districtCode": 5007, "districtNameTh": "แม่ริม", "districtNameEn": "Mae Rim",
   "subdistrictCode": 500701, "subdistrictNameTh": "ริมใต้", "subdistrictNameEn": "Rim Tai",
   "postalCode": "50180"}
]"#;
