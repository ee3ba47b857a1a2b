//! Stop-word and ISL-important word lists for the gloss filter.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Standard English stop words.
///
/// Contracted forms appear apostrophe-stripped ("dont", "youre") because the
/// normalizer removes punctuation before the gloss filter runs.
const ENGLISH_STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
    "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
    "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
    "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
    "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
    "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by", "for",
    "with", "about", "against", "between", "into", "through", "during", "before", "after",
    "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why", "how", "all",
    "any", "both", "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
    "only", "own", "same", "so", "than", "too", "very", "can", "will", "just", "should", "now",
    "dont", "didnt", "doesnt", "isnt", "wasnt", "werent", "wont", "cant", "couldnt", "shouldnt",
    "wouldnt", "hasnt", "havent", "hadnt", "arent", "aint", "youre", "youve", "youll", "youd",
    "thats", "shes", "hes", "theyre", "theyve", "im", "ive", "ill", "id", "whats", "mustnt",
    "neednt", "shant",
];

/// Words that matter in ISL gloss even though they are generic stop words.
///
/// Pronouns, question words, polarity words, and a few domain nouns. A token
/// in this set always survives the stop filter.
const IMPORTANT_WORDS: &[&str] = &[
    "i", "he", "she", "they", "we", "what", "where", "how", "you", "your", "my", "name", "hear",
    "book", "sign", "me", "yes", "no", "not", "this", "it", "us", "our", "that", "when",
];

/// English stop words as a HashSet.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// ISL-important words as a HashSet.
pub static IMPORTANT_WORDS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IMPORTANT_WORDS.iter().copied().collect());
