//! Slug generation for shareable addresses.
//!
//! Display names in the library are largely Vietnamese. Precomposed
//! Vietnamese letters are mapped through an explicit table first because
//! NFD alone does not cover đ/Đ, and the table keeps the common case
//! independent of normalization details. Anything the table misses is
//! handled by canonical decomposition plus combining-mark stripping.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Map a precomposed Vietnamese letter to its base Latin letter.
///
/// Covers every tone/diacritic combination of the lowercase vowel families
/// plus đ/Đ. Uppercase vowels fall through to NFD handling.
fn vietnamese_base(c: char) -> Option<char> {
    Some(match c {
        'à' | 'á' | 'ả' | 'ã' | 'ạ' | 'ă' | 'ằ' | 'ắ' | 'ẳ' | 'ẵ' | 'ặ' | 'â' | 'ầ' | 'ấ' | 'ẩ'
        | 'ẫ' | 'ậ' => 'a',
        'è' | 'é' | 'ẻ' | 'ẽ' | 'ẹ' | 'ê' | 'ề' | 'ế' | 'ể' | 'ễ' | 'ệ' => 'e',
        'ì' | 'í' | 'ỉ' | 'ĩ' | 'ị' => 'i',
        'ò' | 'ó' | 'ỏ' | 'õ' | 'ọ' | 'ô' | 'ồ' | 'ố' | 'ổ' | 'ỗ' | 'ộ' | 'ơ' | 'ờ' | 'ớ' | 'ở'
        | 'ỡ' | 'ợ' => 'o',
        'ù' | 'ú' | 'ủ' | 'ũ' | 'ụ' | 'ư' | 'ừ' | 'ứ' | 'ử' | 'ữ' | 'ự' => 'u',
        'ỳ' | 'ý' | 'ỷ' | 'ỹ' | 'ỵ' => 'y',
        'đ' | 'Đ' => 'd',
        _ => return None,
    })
}

/// Derive a canonical ASCII slug from a display name.
///
/// Steps: explicit Vietnamese mapping, NFD + combining-mark strip,
/// lowercase, collapse non-alphanumeric runs to a single `-`, trim `-`.
///
/// Total and pure; the same input always yields the same output, and the
/// output is already a fixed point (`slugify(slugify(x)) == slugify(x)`).
/// A name with no ASCII-mappable characters collapses to the empty string;
/// callers must treat an empty slug as "no friendly address available".
pub fn slugify(name: &str) -> String {
    let mapped = name.chars().map(|c| vietnamese_base(c).unwrap_or(c));
    let stripped = mapped.nfd().filter(|c| !is_combining_mark(*c));

    let mut slug = String::with_capacity(name.len());
    let mut run_break = false;
    for c in stripped {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if run_break && !slug.is_empty() {
                slug.push('-');
            }
            run_break = false;
            slug.push(c);
        } else {
            run_break = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_vietnamese_letters() {
        assert_eq!(slugify("Thiền định"), "thien-dinh");
        assert_eq!(slugify("Đại hội"), "dai-hoi");
        assert_eq!(slugify("Hướng dẫn"), "huong-dan");
    }

    #[test]
    fn uppercase_precomposed_falls_through_to_nfd() {
        assert_eq!(slugify("ĐẠI HỘI"), "dai-hoi");
        assert_eq!(slugify("Ấn Độ"), "an-do");
    }

    #[test]
    fn collapses_separator_runs_and_trims() {
        assert_eq!(slugify("  Hello,   World! "), "hello-world");
        assert_eq!(slugify("--a--b--"), "a-b");
        assert_eq!(slugify("2024 / Q1 (draft)"), "2024-q1-draft");
    }

    #[test]
    fn output_matches_slug_charset_or_is_empty() {
        for name in ["Bài giảng số 5", "***", "", "Mẹ", "tập 12"] {
            let slug = slugify(name);
            assert!(
                slug.is_empty()
                    || slug
                        .split('-')
                        .all(|seg| !seg.is_empty()
                            && seg.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())),
                "bad slug {slug:?} for {name:?}"
            );
        }
    }

    #[test]
    fn unmappable_name_collapses_to_empty() {
        assert_eq!(slugify("日本語"), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn idempotent() {
        for name in ["Thiền định", "Hello, World!", "日本語", "a-b-c"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
    }
}
