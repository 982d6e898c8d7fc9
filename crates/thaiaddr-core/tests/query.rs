mod common;

use common::*;
use thaiaddr_core::prelude::*;
use thaiaddr_core::LocalizedName;

fn codes<T: AreaLabel>(items: &[T]) -> Vec<u32> {
    items.iter().map(|o| o.code()).collect()
}

#[test]
fn unique_provinces_keeps_first_seen_name() {
    let mut records = records();
    let mut renamed = records[0].clone();
    renamed.province_name = LocalizedName::new("บางกอก", "Bangkok (old)");
    records.push(renamed);

    let provinces = records.unique_provinces(Locale::En);
    assert_eq!(
        codes(&provinces),
        vec![BANGKOK, CHIANG_MAI, NONTHABURI, PATHUM_THANI]
    );
    assert_eq!(provinces[0].name.en, "Bangkok");
    assert_eq!(provinces[0].name.th, "กรุงเทพมหานคร");
}

#[test]
fn thai_order_files_leading_vowels_under_their_consonant() {
    let records = records();
    let th = records.districts_of(Some(CHIANG_MAI), Locale::Th);
    let en = records.districts_of(Some(CHIANG_MAI), Locale::En);

    // เมืองเชียงใหม่ (ม+เ) sorts before แม่ริม (ม+แ) in Thai...
    assert_eq!(codes(&th), vec![MUEANG_CHIANG_MAI, MAE_RIM]);
    // ...but "Mae Rim" comes first in English.
    assert_eq!(codes(&en), vec![MAE_RIM, MUEANG_CHIANG_MAI]);
}

#[test]
fn districts_of_without_province_returns_every_district() {
    let records = records();
    let all = records.districts_of(None, Locale::En);
    assert_eq!(all.len(), 8);

    let bangkok = records.districts_of(Some(BANGKOK), Locale::En);
    assert_eq!(codes(&bangkok), vec![BANG_RAK, PATHUM_WAN, SATHON]);

    assert!(records.districts_of(Some(99), Locale::En).is_empty());
}

#[test]
fn subdistricts_carry_their_postal_code() {
    let records = records();
    let sathon = records.subdistricts_of(Some(SATHON), Locale::En);
    let pairs: Vec<_> = sathon
        .iter()
        .map(|s| (s.name.en.as_str(), s.postal_code.as_str()))
        .collect();
    assert_eq!(
        pairs,
        vec![("Thung Maha Mek", "10120"), ("Thung Wat Don", "10500")]
    );
}

#[test]
fn records_matching_postal_is_exact() {
    let records = records();
    assert_eq!(records.records_matching_postal("10500").len(), 4);
    assert_eq!(records.records_matching_postal("11000").len(), 2);
    assert!(records.records_matching_postal("1050").is_empty());
    assert!(records.records_matching_postal("105000").is_empty());
}

#[test]
fn suggestions_keep_first_occurrence_in_table_order() {
    let records = vec![
        rec((10, "ก", "A"), (1, "ก", "Alpha"), (101, "ก", "a"), "10200"),
        rec((10, "ก", "A"), (2, "ข", "Beta"), (102, "ข", "b"), "10100"),
        rec((10, "ก", "A"), (3, "ค", "Gamma"), (103, "ค", "c"), "10200"),
        rec((10, "ก", "A"), (4, "ง", "Delta"), (104, "ง", "d"), "10110"),
        rec((20, "จ", "B"), (5, "จ", "Epsilon"), (105, "จ", "e"), "20000"),
    ];

    let all = records.postal_code_suggestions("10", 10);
    let zips: Vec<_> = all.iter().map(|s| s.postal_code.as_str()).collect();
    assert_eq!(zips, vec!["10200", "10100", "10110"]);
    // The first record seen for a code supplies the names.
    assert_eq!(all[0].district_name.en, "Alpha");

    let limited = records.postal_code_suggestions("10", 2);
    let zips: Vec<_> = limited.iter().map(|s| s.postal_code.as_str()).collect();
    assert_eq!(zips, vec!["10200", "10100"]);

    let narrow = records.postal_code_suggestions("101", 10);
    assert_eq!(narrow.len(), 2);
}

#[test]
fn empty_prefix_suggests_nothing() {
    assert!(records().postal_code_suggestions("", 10).is_empty());
}

#[test]
fn table_stats_count_distinct_codes() {
    let stats = table().stats();
    assert_eq!(stats.records, 13);
    assert_eq!(stats.provinces, 4);
    assert_eq!(stats.districts, 8);
    assert_eq!(stats.subdistricts, 13);
    assert_eq!(stats.postal_codes, 8);
}

#[test]
fn find_subdistrict_and_name_matching() {
    let records = records();
    let silom = records.find_subdistrict(SI_LOM).expect("Si Lom");
    assert_eq!(silom.postal_code(), "10500");

    let provinces = records.unique_provinces(Locale::Th);
    assert!(provinces.iter().any(|p| p.is_named("chiang mai")));
    assert!(provinces.iter().any(|p| p.is_named("เชียงใหม่")));
    assert!(provinces.iter().any(|p| p.is_named("  PATHUM THANI ")));
    assert!(!provinces.iter().any(|p| p.is_named("Chiang")));
}
