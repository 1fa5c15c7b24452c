//! Candidate digit-string generation for phone lookups.
//!
//! Given one raw free-text number, produce the ordered list of plausible
//! local/international renderings to try against the lookup endpoint, most
//! bare form first.

/// Minimum accepted variant length in digits.
pub const MIN_VARIANT_LEN: usize = 8;

/// Maximum accepted variant length in digits.
pub const MAX_VARIANT_LEN: usize = 12;

/// Build the ordered, deduplicated list of candidate digit strings for `raw`.
///
/// The input may contain spaces, dashes, parentheses, a leading `+` or an
/// international `00` dialing prefix. Candidates are generated in decreasing
/// plausibility order: bare local form, `0`-prefixed local form, then the
/// full calling-code form. Variants shorter than [`MIN_VARIANT_LEN`] or
/// longer than [`MAX_VARIANT_LEN`] digits are dropped.
#[must_use]
pub fn build_variants(raw: &str, calling_code: &str) -> Vec<String> {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    // "00" is the spelled-out form of "+"
    if let Some(stripped) = digits.strip_prefix("00") {
        digits = stripped.to_string();
    }

    let mut candidates = Vec::with_capacity(3);
    if let Some(rest) = digits.strip_prefix(calling_code) {
        let bare = rest.trim_start_matches('0');
        candidates.push(bare.to_string());
        candidates.push(format!("0{bare}"));
        candidates.push(format!("{calling_code}{rest}"));
    } else {
        let core = digits.trim_start_matches('0');
        candidates.push(core.to_string());
        candidates.push(format!("0{core}"));
        candidates.push(format!("{calling_code}{core}"));
    }

    let mut variants: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if (MIN_VARIANT_LEN..=MAX_VARIANT_LEN).contains(&candidate.len())
            && !variants.contains(&candidate)
        {
            variants.push(candidate);
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_prefixed_international() {
        let variants = build_variants("+966501234567", "966");
        assert_eq!(variants, vec!["501234567", "0501234567", "966501234567"]);
    }

    #[test]
    fn test_double_zero_prefix_matches_plus() {
        assert_eq!(
            build_variants("00966501234567", "966"),
            build_variants("+966501234567", "966")
        );
    }

    #[test]
    fn test_local_form_without_country_code() {
        let variants = build_variants("0501234567", "966");
        assert_eq!(variants, vec!["501234567", "0501234567", "966501234567"]);
    }

    #[test]
    fn test_punctuation_is_stripped() {
        let variants = build_variants("(050) 123-4567", "966");
        assert_eq!(variants, vec!["501234567", "0501234567", "966501234567"]);
    }

    #[test]
    fn test_no_duplicates_and_order_preserved() {
        let variants = build_variants("+966501234567", "966");
        let mut deduped = variants.clone();
        deduped.dedup();
        assert_eq!(variants, deduped);
        assert_eq!(variants[0], "501234567");
    }

    #[test]
    fn test_length_bounds() {
        // Too-long artifacts are dropped entirely
        assert!(build_variants("+96650123456789012345", "966").is_empty());
        // In-bounds variants all satisfy the digit-length window
        for variant in build_variants("+966501234567", "966") {
            assert!((MIN_VARIANT_LEN..=MAX_VARIANT_LEN).contains(&variant.len()));
        }
    }

    #[test]
    fn test_empty_and_non_digit_input() {
        assert!(build_variants("", "966").is_empty());
        assert!(build_variants("no digits here", "966").is_empty());
    }

    #[test]
    fn test_too_short_input_filtered() {
        assert!(build_variants("123", "966").is_empty());
    }
}
