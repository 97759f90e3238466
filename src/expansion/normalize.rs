//! Term normalization shared by the index and its lookups.

/// Normalize a term for index lookups: trimmed and lowercased.
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// True when either normalized term contains the other.
///
/// Empty terms never match.
pub fn overlaps(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_term() {
        assert_eq!(normalize_term("  RiZZ "), "rizz");
        assert_eq!(normalize_term("No Cap"), "no cap");
        assert_eq!(normalize_term("   "), "");
    }

    #[test]
    fn test_overlaps() {
        assert!(overlaps("riz", "rizzler"));
        assert!(overlaps("he has rizz god energy", "rizz god"));
        assert!(!overlaps("aura", "rizz"));
        assert!(!overlaps("", "rizz"));
    }
}
