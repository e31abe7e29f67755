// Tokenizer — raw text to a normalized term sequence.
//
// Deliberately simple: lowercase, whitespace split, boundary punctuation
// stripped, stopwords and numbers dropped. No stemming, so "model" and
// "models" are different terms.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Characters stripped from both ends of every token.
const STRIP_CHARS: &[char] = &[
    '.', ',', ';', ':', '!', '?', '"', '\'', '`', '(', ')', '[', ']', '{', '}', '<', '>', '*',
    '_', '~', '#', '|', '/', '\\', '-', '=', '+', '&', '^', '%', '$', '@', '\u{2018}', '\u{2019}',
    '\u{201C}', '\u{201D}', '\u{00AB}', '\u{00BB}', '\u{2026}', '\u{2013}', '\u{2014}',
];

/// Whitespace variants that `split_whitespace` would miss or that should be
/// normalized before splitting.
const EXTRA_SPACES: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

/// English function words, pronouns and generic web filler.
const STOPWORDS: &[&str] = &[
    // articles, conjunctions, prepositions
    "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "if", "then", "else", "than",
    "as", "at", "by", "for", "from", "in", "into", "of", "off", "on", "onto", "out", "over",
    "to", "up", "upon", "with", "within", "without", "about", "above", "after", "again",
    "against", "along", "among", "around", "before", "behind", "below", "between", "beyond",
    "down", "during", "except", "inside", "near", "since", "through", "toward", "towards",
    "under", "until", "via", "while", "per",
    // pronouns and determiners
    "i", "me", "my", "mine", "myself", "we", "us", "our", "ours", "ourselves", "you", "your",
    "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers",
    "herself", "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "this",
    "that", "these", "those", "who", "whom", "whose", "which", "what", "where", "when", "why",
    "how", "all", "any", "both", "each", "every", "few", "more", "most", "other", "some",
    "such", "no", "not", "only", "own", "same", "too", "very", "just", "also", "much", "many",
    "one", "ones", "anyone", "everyone", "someone", "something", "anything", "everything",
    "nothing",
    // auxiliaries and common verbs
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "done", "can", "could", "will", "would", "shall", "should",
    "may", "might", "must", "get", "gets", "got", "make", "makes", "made", "go", "goes",
    "going", "gone", "say", "says", "said", "see", "use", "used", "using", "like", "want",
    "need", "know", "think", "take",
    // contractions (apostrophes survive tokenization mid-word)
    "i'm", "i've", "i'll", "i'd", "you're", "you've", "you'll", "it's", "that's", "there's",
    "they're", "we're", "we've", "don't", "doesn't", "didn't", "can't", "won't", "isn't",
    "aren't", "wasn't", "weren't", "let's",
    // adverbs and fillers
    "here", "there", "now", "still", "even", "ever", "never", "always", "often", "really",
    "well", "back", "way", "new", "etc", "yes", "today", "yesterday", "tomorrow",
    "week", "year", "day", "time", "lot", "thing", "things",
    // generic web / content filler
    "post", "posts", "posted", "blog", "article", "articles", "comment", "comments", "read",
    "reading", "click", "link", "links", "share", "shared", "subscribe", "newsletter",
    "http", "https", "www", "com", "html", "amp", "rss", "feed", "update", "updates",
    "page", "site", "website",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Whether `word` (already lowercased) is in the built-in stopword set.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}

/// Split text into lowercase terms, dropping stopwords, numbers and
/// single-character fragments.
///
/// Pure and deterministic: the same input always yields the same tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_whitespace() || EXTRA_SPACES.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect();

    normalized
        .split(' ')
        .map(|raw| raw.trim_matches(STRIP_CHARS))
        .filter(|token| keep_token(token))
        .map(str::to_string)
        .collect()
}

fn keep_token(token: &str) -> bool {
    if token.chars().count() < 2 {
        return false;
    }
    if token.chars().all(char::is_numeric) {
        return false;
    }
    !is_stopword(token)
}
