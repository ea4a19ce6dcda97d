// crates/loadboard-core/src/text.rs

/// Normalize a string for case-insensitive comparison.
///
/// Uses full Unicode lowercasing, so `"LAHORE"` and `"Lahore"` fold to the
/// same key. No accent folding and no trimming is applied: the query the user
/// typed is matched as-is.
///
/// # Examples
///
/// ```rust
/// use loadboard_core::text::fold_case;
///
/// assert_eq!(fold_case("KaRaChI"), "karachi");
/// assert_eq!(fold_case(" Multan"), " multan");
/// ```
#[inline]
pub fn fold_case(s: &str) -> String {
    s.to_lowercase()
}

/// Substring test against an already folded needle.
///
/// Callers fold the query once with [`fold_case`] and reuse it across the
/// whole scan.
#[inline]
pub fn contains_folded(haystack: &str, folded_needle: &str) -> bool {
    folded_needle.is_empty() || fold_case(haystack).contains(folded_needle)
}

/// Parse the leading integer of a free-form numeric field.
///
/// Leading whitespace is skipped, an optional `+`/`-` sign is honoured, and
/// digits are consumed up to the first non-digit. Everything after that (units
/// such as `"kg"`, decimals, thousands separators) is ignored.
///
/// Returns `None` when no digit follows the optional sign or the value does
/// not fit into an `i64`.
///
/// # Examples
///
/// ```rust
/// use loadboard_core::text::leading_integer;
///
/// assert_eq!(leading_integer("500 kg"), Some(500));
/// assert_eq!(leading_integer("  12.9t"), Some(12));
/// assert_eq!(leading_integer("-40"), Some(-40));
/// assert_eq!(leading_integer("1,200 kg"), Some(1));
/// assert_eq!(leading_integer("heavy"), None);
/// ```
pub fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = rest
        .as_bytes()
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches_anything() {
        assert!(contains_folded("Quetta", ""));
        assert!(contains_folded("", ""));
    }

    #[test]
    fn folding_is_unicode_aware() {
        assert!(contains_folded("KÖLN", &fold_case("Köl")));
        assert!(contains_folded("Peshawar", &fold_case("SHAW")));
        assert!(!contains_folded("Peshawar", &fold_case("shawn")));
    }

    #[test]
    fn leading_integer_rejects_signs_without_digits() {
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer("+kg"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn leading_integer_rejects_overflow() {
        assert_eq!(leading_integer("99999999999999999999999 kg"), None);
    }
}
