// crates/thaiaddr-core/src/text.rs

//! Text helpers: digit filtering for the postal field and the collation keys
//! used to order option lists.

use crate::model::Locale;

const THAI_KO_KAI: char = '\u{0E01}';
const THAI_HO_NOKHUK: char = '\u{0E2E}';

/// Keeps only ASCII digits, the way the postal field discards typed input.
///
/// ```rust
/// use thaiaddr_core::text::digits_only;
///
/// assert_eq!(digits_only("10-5 00"), "10500");
/// assert_eq!(digits_only("abc"), "");
/// ```
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Convert a string into a folded key suitable for comparison.
///
/// Transliterates Unicode to ASCII with `deunicode`, then lowercases.
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Case- and accent-insensitive equality on the folded form.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

fn is_thai_consonant(c: char) -> bool {
    (THAI_KO_KAI..=THAI_HO_NOKHUK).contains(&c)
}

/// เ แ โ ใ ไ are written before the consonant they are pronounced after.
fn is_thai_leading_vowel(c: char) -> bool {
    ('\u{0E40}'..='\u{0E44}').contains(&c)
}

/// Maitaikhu, the four tone marks and thanthakhat only matter for ties.
fn is_thai_tie_mark(c: char) -> bool {
    ('\u{0E47}'..='\u{0E4C}').contains(&c)
}

/// Sort key for Thai dictionary order.
///
/// Returns `(primary, secondary)`. The primary key moves every leading vowel
/// behind the consonant that follows it and drops tone marks; the secondary
/// key is the sequence of dropped marks.
pub fn thai_collation_key(s: &str) -> (String, String) {
    let chars: Vec<char> = s.chars().collect();
    let mut primary = String::with_capacity(s.len());
    let mut secondary = String::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_thai_leading_vowel(c) && chars.get(i + 1).copied().is_some_and(is_thai_consonant) {
            primary.push(chars[i + 1]);
            primary.push(c);
            i += 2;
            continue;
        }
        if is_thai_tie_mark(c) {
            secondary.push(c);
        } else {
            primary.push(c);
        }
        i += 1;
    }
    (primary, secondary)
}

/// Locale-aware sort key for an option label.
pub fn collation_key(s: &str, locale: Locale) -> (String, String) {
    match locale {
        Locale::Th => thai_collation_key(s),
        Locale::En => (fold_key(s), s.to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_vowel_sorts_after_its_consonant() {
        // เชียงใหม่ is filed under ช, so it comes after กรุงเทพ and before ตาก
        let mut names = vec!["ตาก", "เชียงใหม่", "กรุงเทพมหานคร"];
        names.sort_by_cached_key(|n| thai_collation_key(n));
        assert_eq!(names, vec!["กรุงเทพมหานคร", "เชียงใหม่", "ตาก"]);
    }

    #[test]
    fn tone_marks_only_break_ties() {
        let (p1, s1) = thai_collation_key("ป่า");
        let (p2, s2) = thai_collation_key("ปา");
        assert_eq!(p1, p2);
        assert_ne!(s1, s2);
    }

    #[test]
    fn english_key_ignores_case_and_accents() {
        assert_eq!(collation_key("Bang Rak", Locale::En).0, "bang rak");
        assert!(equals_folded("Phra Nakhon Si Ayutthaya", "phra nakhon si ayutthaya"));
    }
}
