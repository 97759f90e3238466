//! Edit-distance primitives used by the fuzzy matcher.
//!
//! Distances work on `char`s, not bytes, so multi-byte input is measured
//! the way a user perceives it. [`QueryPattern`] is the only entry point.

use std::cmp::min;

/// Optimal-string-alignment distance: Levenshtein plus adjacent swaps.
///
/// "serach" is one edit away from "search" here, two with plain Levenshtein.
fn transposition_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let width = b.len() + 1;
    let mut matrix = vec![0usize; (a.len() + 1) * width];
    for i in 0..=a.len() {
        matrix[i * width] = i;
    }
    for j in 0..=b.len() {
        matrix[j] = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            let mut best = min(
                min(matrix[(i - 1) * width + j] + 1, matrix[i * width + j - 1] + 1),
                matrix[(i - 1) * width + j - 1] + cost,
            );
            if i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = min(best, matrix[(i - 2) * width + j - 2] + 1);
            }
            matrix[i * width + j] = best;
        }
    }

    matrix[a.len() * width + b.len()]
}

/// Smallest edit distance between `pattern` and any substring of `text`.
///
/// Leading and trailing text is free, so "riz" is 0 away from "the rizzler"
/// and 1 away from "raz".
fn substring_chars(pattern: &[char], text: &[char]) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    if text.is_empty() {
        return pattern.len();
    }

    // Columns walk the text; the first row stays zero so a match may start anywhere.
    let mut column: Vec<usize> = (0..=pattern.len()).collect();
    let mut best = column[pattern.len()];

    for &tc in text {
        let mut diagonal = column[0];
        column[0] = 0;
        for (i, &pc) in pattern.iter().enumerate() {
            let cost = usize::from(pc != tc);
            let above = column[i + 1];
            column[i + 1] = min(min(above + 1, column[i] + 1), diagonal + cost);
            diagonal = above;
        }
        best = min(best, column[pattern.len()]);
    }

    best
}

/// A query prepared once and compared against many candidates.
#[derive(Debug, Clone)]
pub struct QueryPattern {
    query: String,
    chars: Vec<char>,
}

impl QueryPattern {
    /// Prepare a pattern. The query is used as given; callers normalize it.
    pub fn new<S: Into<String>>(query: S) -> Self {
        let query = query.into();
        let chars = query.chars().collect();
        QueryPattern { query, chars }
    }

    /// The query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the query is empty.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Whole-string distance to `candidate`, normalized by the longer length.
    pub fn word_score(&self, candidate: &str) -> f64 {
        let other: Vec<char> = candidate.chars().collect();
        let longest = self.chars.len().max(other.len());
        if longest == 0 {
            return 0.0;
        }
        transposition_chars(&self.chars, &other) as f64 / longest as f64
    }

    /// Best substring distance inside `candidate`, normalized by query length.
    pub fn window_score(&self, candidate: &str) -> f64 {
        if self.chars.is_empty() {
            return 0.0;
        }
        let other: Vec<char> = candidate.chars().collect();
        substring_chars(&self.chars, &other) as f64 / self.chars.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn transposition(a: &str, b: &str) -> usize {
        transposition_chars(&chars(a), &chars(b))
    }

    fn substring(pattern: &str, text: &str) -> usize {
        substring_chars(&chars(pattern), &chars(text))
    }

    #[test]
    fn test_transposition_distance() {
        assert_eq!(transposition("ab", "ba"), 1);
        assert_eq!(transposition("search", "serach"), 1);
        assert_eq!(transposition("bussin", "busisn"), 1);
        assert_eq!(transposition("kitten", "sitting"), 3);
        assert_eq!(transposition("rizz", "rizz"), 0);
        assert_eq!(transposition("", "abc"), 3);
    }

    #[test]
    fn test_substring_distance() {
        assert_eq!(substring("riz", "the rizzler"), 0);
        assert_eq!(substring("riz", "rizler"), 0);
        assert_eq!(substring("riz", "raz"), 1);
        assert_eq!(substring("riz", "random"), 2);
        assert_eq!(substring("", "anything"), 0);
        assert_eq!(substring("abc", ""), 3);
    }

    #[test]
    fn test_query_pattern_scores() {
        let pattern = QueryPattern::new("riz");
        assert_eq!(pattern.len(), 3);
        assert_eq!(pattern.query(), "riz");
        assert!((pattern.window_score("rizzler") - 0.0).abs() < 1e-9);
        assert!((pattern.word_score("rizz") - 0.25).abs() < 1e-9);
        assert!(pattern.window_score("random") > 0.6);
    }

    #[test]
    fn test_query_pattern_counts_chars() {
        let pattern = QueryPattern::new("café");
        assert_eq!(pattern.len(), 4);
        assert!((pattern.word_score("cafe") - 0.25).abs() < 1e-9);
    }
}
