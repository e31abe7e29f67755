// Cosine similarity between sparse term vectors.
//
//   cos(a, b) = dot(a, b) / (|a| * |b|)
//
// TF-IDF weights are never negative, so the result lives in [0, 1]:
// 0.0 for documents with no shared terms, 1.0 for identical term profiles.

use super::tfidf::SparseVector;

/// Norms below this are treated as zero.
const EPSILON: f64 = 1e-12;

/// Compute the cosine similarity between two sparse vectors.
///
/// Returns 0.0 when either vector is empty or all-zero, or when the vectors
/// share no terms.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let dot = dot_product(a, b);
    if dot == 0.0 {
        return 0.0;
    }

    let norm_a = euclidean_norm(a);
    let norm_b = euclidean_norm(b);
    if norm_a < EPSILON || norm_b < EPSILON {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Sum of `a[t] * b[t]` over shared terms, walking the smaller vector.
pub fn dot_product(a: &SparseVector, b: &SparseVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(term, w)| large.get(term).map(|other| w * other))
        .sum()
}

pub fn euclidean_norm(v: &SparseVector) -> f64 {
    v.values().map(|w| w * w).sum::<f64>().sqrt()
}
