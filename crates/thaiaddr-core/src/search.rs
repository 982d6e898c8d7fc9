// crates/thaiaddr-core/src/search.rs
use crate::model::{
    AreaCode, AreaOption, GeographyRecord, Locale, PostalSuggestion, SubdistrictOption,
};
use crate::traits::{sort_by_locale, AddressQuery};
use std::collections::HashSet;

impl AddressQuery for [GeographyRecord] {
    fn unique_provinces(&self, locale: Locale) -> Vec<AreaOption> {
        let mut seen = HashSet::new();
        let mut out: Vec<AreaOption> = self
            .iter()
            .filter(|r| seen.insert(r.province_code))
            .map(|r| AreaOption {
                code: r.province_code,
                name: r.province_name.clone(),
            })
            .collect();
        sort_by_locale(&mut out, locale);
        out
    }

    fn districts_of(&self, province: Option<AreaCode>, locale: Locale) -> Vec<AreaOption> {
        let mut seen = HashSet::new();
        let mut out: Vec<AreaOption> = self
            .iter()
            .filter(|r| province.map_or(true, |p| r.province_code == p))
            .filter(|r| seen.insert(r.district_code))
            .map(|r| AreaOption {
                code: r.district_code,
                name: r.district_name.clone(),
            })
            .collect();
        sort_by_locale(&mut out, locale);
        out
    }

    fn subdistricts_of(
        &self,
        district: Option<AreaCode>,
        locale: Locale,
    ) -> Vec<SubdistrictOption> {
        let mut seen = HashSet::new();
        let mut out: Vec<SubdistrictOption> = self
            .iter()
            .filter(|r| district.map_or(true, |d| r.district_code == d))
            .filter(|r| seen.insert(r.subdistrict_code))
            .map(|r| SubdistrictOption {
                code: r.subdistrict_code,
                name: r.subdistrict_name.clone(),
                postal_code: r.postal_code.clone(),
            })
            .collect();
        sort_by_locale(&mut out, locale);
        out
    }

    fn records_matching_postal(&self, postal_text: &str) -> Vec<GeographyRecord> {
        self.iter()
            .filter(|r| r.postal_code.as_str() == postal_text)
            .cloned()
            .collect()
    }

    fn postal_code_suggestions(&self, prefix: &str, limit: usize) -> Vec<PostalSuggestion> {
        let mut out = Vec::new();
        if prefix.is_empty() || limit == 0 {
            return out;
        }

        let mut seen = HashSet::new();
        for r in self {
            let zip = r.postal_code.as_str();
            if zip.starts_with(prefix) && seen.insert(zip) {
                out.push(PostalSuggestion {
                    postal_code: r.postal_code.clone(),
                    district_name: r.district_name.clone(),
                    province_name: r.province_name.clone(),
                });
                if out.len() >= limit {
                    break;
                }
            }
        }
        out
    }

    fn find_subdistrict(&self, subdistrict: AreaCode) -> Option<&GeographyRecord> {
        self.iter().find(|r| r.subdistrict_code == subdistrict)
    }
}
