//! Pure slug normalization.
//!
//! The disambiguation loop that probes the store lives in the `catalog` crate;
//! this module only derives candidates.

/// Slug used when a name contains no alphanumeric characters.
pub const FALLBACK_SLUG: &str = "entry";

/// Separator placed between words and before numeric suffixes.
pub const SLUG_SEPARATOR: char = '-';

/// Normalizes a display name into a URL-safe base slug.
///
/// ASCII letters are lowercased, ASCII digits kept, and every run of any other
/// characters collapses into a single `-`. Leading and trailing separators are
/// dropped. Names with nothing left normalize to [`FALLBACK_SLUG`].
///
/// # Examples
///
/// ```
/// use catalog_core::catalog::slugify;
///
/// assert_eq!(slugify("Pear Watch"), "pear-watch");
/// assert_eq!(slugify("  --Hello,   World!!  "), "hello-world");
/// assert_eq!(slugify("!!!"), "entry");
/// ```
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SLUG_SEPARATOR);
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Returns the candidate for a given probe attempt.
///
/// Attempt `0` is the base itself; attempt `n` appends `-n` to the base.
/// Suffixes never accumulate (`base-2`, not `base-1-2`).
pub fn slug_candidate(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}{SLUG_SEPARATOR}{attempt}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_joins_words() {
        assert_eq!(slugify("Pear Watch"), "pear-watch");
        assert_eq!(slugify("PEAR WATCH PRO"), "pear-watch-pro");
    }

    #[test]
    fn test_collapses_punctuation_runs() {
        assert_eq!(slugify("pear -- watch"), "pear-watch");
        assert_eq!(slugify("pear_watch.v2"), "pear-watch-v2");
        assert_eq!(slugify("a & b / c"), "a-b-c");
    }

    #[test]
    fn test_trims_leading_and_trailing_separators() {
        assert_eq!(slugify("  pear watch  "), "pear-watch");
        assert_eq!(slugify("...pear..."), "pear");
    }

    #[test]
    fn test_keeps_digits() {
        assert_eq!(slugify("Watch 3000"), "watch-3000");
        assert_eq!(slugify("2024"), "2024");
    }

    #[test]
    fn test_non_ascii_characters_act_as_separators() {
        assert_eq!(slugify("café crème"), "caf-cr-me");
        assert_eq!(slugify("日本"), FALLBACK_SLUG);
    }

    #[test]
    fn test_empty_and_punctuation_only_names_fall_back() {
        assert_eq!(slugify(""), FALLBACK_SLUG);
        assert_eq!(slugify("   "), FALLBACK_SLUG);
        assert_eq!(slugify("!?-_"), FALLBACK_SLUG);
    }

    #[test]
    fn test_is_deterministic() {
        assert_eq!(slugify("Pear Watch"), slugify("Pear Watch"));
    }

    #[test]
    fn test_candidate_suffixes_base() {
        assert_eq!(slug_candidate("pear-watch", 0), "pear-watch");
        assert_eq!(slug_candidate("pear-watch", 1), "pear-watch-1");
        assert_eq!(slug_candidate("pear-watch", 12), "pear-watch-12");
    }
}
