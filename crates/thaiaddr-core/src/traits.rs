// crates/thaiaddr-core/src/traits.rs
use crate::model::{
    AreaCode, AreaOption, GeographyRecord, Locale, LocalizedName, PostalSuggestion,
    SubdistrictOption,
};
use crate::text::{collation_key, equals_folded};

/// Default number of distinct postal codes offered while typing.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;

/// Shared view of a dropdown entry: a code plus its bilingual name.
///
/// Implementors get locale-aware labels and folded name matching for free.
///
/// # Examples
/// ```rust
/// use thaiaddr_core::model::{AreaOption, Locale, LocalizedName};
/// use thaiaddr_core::traits::AreaLabel;
///
/// let bkk = AreaOption { code: 10, name: LocalizedName::new("กรุงเทพมหานคร", "Bangkok") };
/// assert_eq!(bkk.label(Locale::En), "Bangkok");
/// assert!(bkk.is_named("BANGKOK"));
/// assert!(bkk.is_named("กรุงเทพมหานคร"));
/// ```
pub trait AreaLabel {
    fn code(&self) -> AreaCode;
    fn name(&self) -> &LocalizedName;

    #[inline]
    fn label(&self, locale: Locale) -> &str {
        self.name().get(locale)
    }

    /// Case- and accent-insensitive match against either locale's name.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        let q = q.trim();
        equals_folded(&self.name().th, q) || equals_folded(&self.name().en, q)
    }
}

impl AreaLabel for AreaOption {
    fn code(&self) -> AreaCode {
        self.code
    }

    fn name(&self) -> &LocalizedName {
        &self.name
    }
}

impl AreaLabel for SubdistrictOption {
    fn code(&self) -> AreaCode {
        self.code
    }

    fn name(&self) -> &LocalizedName {
        &self.name
    }
}

/// Orders options by their label in `locale`, ties broken by code.
pub fn sort_by_locale<T: AreaLabel>(options: &mut [T], locale: Locale) {
    options.sort_by_cached_key(|o| (collation_key(o.label(locale), locale), o.code()));
}

/// The query layer: pure derivations over a record collection.
///
/// Implemented for `[GeographyRecord]` so the full table and a zip-matched
/// subset answer the same questions. Every "unique" derivation dedups by the
/// level's code and keeps the name pair of the first record seen with that
/// code; later duplicates never override it.
pub trait AddressQuery {
    /// One entry per distinct province, sorted by the `locale` name.
    fn unique_provinces(&self, locale: Locale) -> Vec<AreaOption>;

    /// Distinct districts, restricted to `province` when given.
    fn districts_of(&self, province: Option<AreaCode>, locale: Locale) -> Vec<AreaOption>;

    /// Distinct subdistricts with their postal code, restricted to `district`
    /// when given.
    fn subdistricts_of(&self, district: Option<AreaCode>, locale: Locale)
        -> Vec<SubdistrictOption>;

    /// Records whose postal code equals `postal_text` exactly.
    fn records_matching_postal(&self, postal_text: &str) -> Vec<GeographyRecord>;

    /// First occurrence of each distinct postal code starting with `prefix`,
    /// in table order, stopping after `limit` codes. An empty prefix yields
    /// nothing.
    fn postal_code_suggestions(&self, prefix: &str, limit: usize) -> Vec<PostalSuggestion>;

    /// The first record carrying `subdistrict` as its subdistrict code.
    fn find_subdistrict(&self, subdistrict: AreaCode) -> Option<&GeographyRecord>;
}
