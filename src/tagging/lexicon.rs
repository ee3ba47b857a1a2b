//! Word lists backing the rule-based part-of-speech tagger.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Modal auxiliaries (the "will"/"shall" class).
const MODAL_VERBS: &[&str] = &[
    "will", "shall", "would", "should", "can", "could", "may", "might", "must",
];

/// Irregular past-tense forms and past participles.
///
/// Regular verbs are caught by the "-ed" suffix rule; this list covers the
/// common verbs that inflect irregularly.
const IRREGULAR_PAST: &[&str] = &[
    "was", "were", "been", "had", "did", "done", "went", "gone", "said", "made", "got", "gotten",
    "took", "taken", "saw", "seen", "came", "knew", "known", "gave", "given", "found", "thought",
    "told", "became", "showed", "shown", "left", "felt", "brought", "began", "begun", "kept",
    "held", "wrote", "written", "stood", "heard", "meant", "met", "ran", "paid", "sat", "spoke",
    "spoken", "led", "grew", "grown", "lost", "fell", "fallen", "sent", "built", "understood",
    "drew", "drawn", "broke", "broken", "spent", "drove", "driven", "bought", "wore", "worn",
    "chose", "chosen", "ate", "eaten", "drank", "drunk", "flew", "flown", "forgot", "forgotten",
    "slept", "swam", "swum", "threw", "thrown", "woke", "woken", "won", "sang", "sung", "taught",
    "caught", "fought", "sought", "sold", "rode", "ridden", "rose", "risen",
];

/// Common verbs in base/present form.
///
/// Tense counting only considers verb-class tokens; nouns, pronouns, and
/// other words contribute no evidence. Third-person "-s"/"-es" inflections
/// are handled by suffix stripping in the tagger.
const PRESENT_VERBS: &[&str] = &[
    "go", "come", "eat", "drink", "see", "look", "watch", "hear", "listen", "speak", "say",
    "tell", "ask", "answer", "read", "write", "draw", "learn", "teach", "study", "know",
    "think", "understand", "remember", "forget", "want", "need", "like", "love", "hate",
    "feel", "live", "work", "play", "run", "walk", "sit", "stand", "sleep", "wake", "give",
    "take", "make", "do", "get", "put", "keep", "hold", "bring", "carry", "throw", "catch",
    "open", "close", "start", "stop", "help", "meet", "call", "wait", "try", "use", "find",
    "buy", "sell", "pay", "cook", "clean", "wash", "wear", "drive", "ride", "fly", "swim",
    "jump", "dance", "sing", "cry", "laugh", "smile", "visit", "travel", "stay", "leave",
    "begin", "finish", "win", "lose", "choose", "grow", "build", "break", "cut", "fall",
    "rise", "send", "show", "talk", "turn", "move", "happen", "become", "let", "mean",
    "spend", "set",
];

/// Words ending in "-ed" that are not past-tense verbs.
const PAST_ED_EXCEPTIONS: &[&str] = &[
    "need", "feed", "speed", "seed", "bleed", "breed", "exceed", "proceed", "succeed", "indeed",
    "hundred", "naked", "wicked", "sacred",
];

/// Words ending in "-ing" that are not present participles.
const GERUND_EXCEPTIONS: &[&str] = &[
    "thing", "bring", "spring", "string", "swing", "cling", "fling", "sling", "wring", "sting",
    "during", "morning", "evening", "nothing", "something", "anything", "everything", "ceiling",
    "darling",
];

/// Modal auxiliaries as a HashSet.
pub static MODAL_VERBS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| MODAL_VERBS.iter().copied().collect());

/// Irregular past forms as a HashSet.
pub static IRREGULAR_PAST_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| IRREGULAR_PAST.iter().copied().collect());

/// Present-form verbs as a HashSet.
pub static PRESENT_VERBS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PRESENT_VERBS.iter().copied().collect());

/// "-ed" exceptions as a HashSet.
pub static PAST_ED_EXCEPTIONS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| PAST_ED_EXCEPTIONS.iter().copied().collect());

/// "-ing" exceptions as a HashSet.
pub static GERUND_EXCEPTIONS_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| GERUND_EXCEPTIONS.iter().copied().collect());
