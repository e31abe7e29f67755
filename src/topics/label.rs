// Keyword extraction and label generation for clusters.

use super::tfidf::SparseVector;

/// Keywords kept per cluster.
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// Keywords used to build the label.
const LABEL_WORDS: usize = 3;

/// Label used when a cluster has no keywords at all.
pub const FALLBACK_LABEL: &str = "General";

/// The `n` highest-weighted terms of a cluster vector, heaviest first.
///
/// Equal weights are ordered alphabetically so the result never depends on
/// anything but the vector itself.
pub fn top_keywords(vector: &SparseVector, n: usize) -> Vec<String> {
    let mut ranked: Vec<(&String, f64)> = vector.iter().map(|(t, w)| (t, *w)).collect();
    // BTreeMap iteration is already alphabetical, and the sort is stable
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .take(n)
        .map(|(term, _)| term.clone())
        .collect()
}

/// Title-case the top three keywords and join them with " / ".
pub fn make_label(keywords: &[String]) -> String {
    if keywords.is_empty() {
        return FALLBACK_LABEL.to_string();
    }
    keywords
        .iter()
        .take(LABEL_WORDS)
        .map(|k| title_case(k))
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Uppercase the first letter of each hyphen-separated part.
fn title_case(word: &str) -> String {
    word.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec_of(pairs: &[(&str, f64)]) -> SparseVector {
        pairs.iter().map(|(t, w)| (t.to_string(), *w)).collect()
    }

    #[test]
    fn test_top_keywords_by_weight() {
        let v = vec_of(&[("css", 0.2), ("react", 0.9), ("hooks", 0.5), ("jsx", 0.1)]);
        assert_eq!(top_keywords(&v, 3), vec!["react", "hooks", "css"]);
    }

    #[test]
    fn test_top_keywords_ties_are_alphabetical() {
        let v = vec_of(&[("zeta", 0.5), ("alpha", 0.5), ("mid", 0.5)]);
        assert_eq!(top_keywords(&v, 5), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_make_label() {
        let kws: Vec<String> = ["transformers", "neural", "deep-learning", "gpu"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(make_label(&kws), "Transformers / Neural / Deep-Learning");
    }

    #[test]
    fn test_make_label_empty() {
        assert_eq!(make_label(&[]), "General");
    }

    #[test]
    fn test_labeling_is_idempotent() {
        let v = vec_of(&[("rust", 0.3), ("tokio", 0.3), ("async", 0.7)]);
        let first = top_keywords(&v, DEFAULT_KEYWORD_COUNT);
        let second = top_keywords(&v, DEFAULT_KEYWORD_COUNT);
        assert_eq!(first, second);
        assert_eq!(make_label(&first), make_label(&second));
        assert_eq!(make_label(&first), "Async / Rust / Tokio");
    }
}
