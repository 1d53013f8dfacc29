//! Reverse similarity: how much of a suggestion the typed input already covers.

/// Score `suggestion` against what the user typed, in `[0, 1]`.
///
/// ```text
/// score = |input words found verbatim in suggestion| / |suggestion words|
///       + Σ 0.5 · len(iw) / len(sw)   for every input word iw (len > 1)
///                                     that prefixes a suggestion word sw
/// ```
///
/// Words are lowercased and split on whitespace; lengths count characters.
/// The function is not symmetric: `("da", "days")` scores, `("days", "da")` does not.
pub fn reverse_similarity(input: &str, suggestion: &str) -> f64 {
    let input = input.to_lowercase();
    let suggestion = suggestion.to_lowercase();
    let input_words: Vec<&str> = input.split_whitespace().collect();
    let suggestion_words: Vec<&str> = suggestion.split_whitespace().collect();

    if suggestion_words.is_empty() {
        return 0.0;
    }

    let matched = input_words.iter().filter(|iw| suggestion_words.contains(*iw)).count();
    let mut similarity = matched as f64 / suggestion_words.len() as f64;

    for iw in input_words.iter().filter(|iw| iw.chars().count() > 1) {
        let iw_len = iw.chars().count() as f64;
        for sw in suggestion_words.iter().filter(|sw| sw.starts_with(*iw)) {
            similarity += 0.5 * (iw_len / sw.chars().count() as f64);
        }
    }

    similarity.min(1.0)
}
