//! Lexical similarity scoring for alias matching.

/// Score the similarity of two strings in `[0, 1]`.
///
/// - identical strings score 1.0;
/// - either empty scores 0.0;
/// - substring containment in either direction scores 0.9;
/// - otherwise, the count of characters of the shorter string that appear
///   anywhere in the longer one, divided by the longer length.
///
/// The overlap count is per character occurrence without consuming matched
/// positions, so duplicate letters can inflate it; the result still cannot
/// exceed 1.0 because the count is bounded by the shorter length.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a.contains(b) || b.contains(a) {
        return 0.9;
    }

    let (longer, shorter) = if a.chars().count() > b.chars().count() {
        (a, b)
    } else {
        (b, a)
    };
    let longer_chars: Vec<char> = longer.chars().collect();
    let overlap = shorter
        .chars()
        .filter(|c| longer_chars.contains(c))
        .count();
    overlap as f64 / longer_chars.len() as f64
}
