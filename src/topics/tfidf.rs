// TF-IDF vector construction.
//
// Each document becomes a sparse term -> weight map. Term frequency is
// normalized by document length, and IDF uses add-one smoothing so every
// term keeps a positive weight:
//
//   idf(t) = ln((N + 1) / (df(t) + 1)) + 1
//
// Words that appear in every document still count, just less than words that
// are distinctive to a few of them. That is what lets the clusterer tell a
// batch of frontend posts apart from a batch of ML posts.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Sparse term -> weight vector.
///
/// Ordered so that iteration, float summation and keyword tie-breaks are the
/// same on every run.
pub type SparseVector = BTreeMap<String, f64>;

/// Build TF-IDF vectors for a batch of tokenized documents.
///
/// Returns the sorted vocabulary and one vector per input document, in input
/// order. An empty batch yields an empty vocabulary and no vectors.
pub fn build_tfidf(tokenized_docs: &[Vec<String>]) -> (Vec<String>, Vec<SparseVector>) {
    if tokenized_docs.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let vocabulary: Vec<String> = tokenized_docs
        .iter()
        .flatten()
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect();

    let idf = inverse_document_frequency(tokenized_docs);

    let vectors = tokenized_docs
        .iter()
        .map(|tokens| {
            // Empty docs divide by 1; the vector is empty either way
            let len = tokens.len().max(1) as f64;

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for token in tokens {
                *counts.entry(token.as_str()).or_insert(0) += 1;
            }

            counts
                .into_iter()
                .filter_map(|(term, count)| {
                    let weight = (count as f64 / len) * idf.get(term).copied().unwrap_or(0.0);
                    (weight > 0.0).then(|| (term.to_string(), weight))
                })
                .collect::<SparseVector>()
        })
        .collect();

    (vocabulary, vectors)
}

/// Smoothed IDF for every term in the batch.
fn inverse_document_frequency(tokenized_docs: &[Vec<String>]) -> HashMap<&str, f64> {
    let n_docs = tokenized_docs.len() as f64;

    let mut df: HashMap<&str, usize> = HashMap::new();
    for tokens in tokenized_docs {
        let unique: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for term in unique {
            *df.entry(term).or_insert(0) += 1;
        }
    }

    df.into_iter()
        .map(|(term, freq)| (term, ((n_docs + 1.0) / (freq as f64 + 1.0)).ln() + 1.0))
        .collect()
}
