//! Tense classification from part-of-speech tags.
//!
//! The detector accumulates one [`TenseCounts`] record per sentence and
//! classifies it into exactly one [`Tense`] bucket. Classification and marker
//! insertion are deliberately separated: [`detect`] returns both the chosen
//! tense and the raw counts, and the gloss filter only inserts a marker when
//! the chosen bucket's count is strictly positive. Collapsing the two steps
//! would insert a marker whenever the all-zero default happens to land on a
//! marked tense.
//!
//! Only verb-class tags count: a pronoun or noun contributes no evidence.
//! This keeps a sentence like "I will go" future even though two of its
//! three words are not verbs.
//!
//! # Examples
//!
//! ```
//! use signgloss::tagging::PosTag;
//! use signgloss::tense::{Tense, detect};
//!
//! // "i will go": pronoun, modal, present verb.
//! let (tense, counts) = detect(&[PosTag::Other, PosTag::Modal, PosTag::VerbPresent]);
//! assert_eq!(tense, Tense::Future);
//! assert_eq!(counts.get(Tense::Future), 1);
//! assert_eq!(counts.get(Tense::Present), 1);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tagging::PosTag;

/// The four tense buckets the pipeline distinguishes.
///
/// Variant order is the tie-break order for classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    /// Future tense, marked with a leading "will".
    Future,
    /// Simple present, never marked.
    Present,
    /// Past tense, marked with a leading "before".
    Past,
    /// Present continuous, marked with a leading "now".
    PresentContinuous,
}

impl Tense {
    /// All tenses in definition (tie-break) order.
    pub const ALL: [Tense; 4] = [
        Tense::Future,
        Tense::Present,
        Tense::Past,
        Tense::PresentContinuous,
    ];

    /// The gloss marker token for this tense, if any.
    ///
    /// ISL does not inflect verbs; a marker sign at the front of the sentence
    /// carries the tense instead. Simple present has no marker.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Tense::Future => Some("will"),
            Tense::Present => None,
            Tense::Past => Some("before"),
            Tense::PresentContinuous => Some("now"),
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Tense::Future => "future",
            Tense::Present => "present",
            Tense::Past => "past",
            Tense::PresentContinuous => "present_continuous",
        };
        write!(f, "{name}")
    }
}

/// Per-sentence tally of tense evidence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenseCounts {
    /// Modal auxiliary occurrences.
    pub future: u32,
    /// Present-form verb occurrences.
    pub present: u32,
    /// Past-tense verb occurrences.
    pub past: u32,
    /// Present-participle occurrences.
    pub present_continuous: u32,
}

impl TenseCounts {
    /// Create an all-zero count record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter for the given tense.
    pub fn increment(&mut self, tense: Tense) {
        match tense {
            Tense::Future => self.future += 1,
            Tense::Present => self.present += 1,
            Tense::Past => self.past += 1,
            Tense::PresentContinuous => self.present_continuous += 1,
        }
    }

    /// Get the counter for the given tense.
    pub fn get(&self, tense: Tense) -> u32 {
        match tense {
            Tense::Future => self.future,
            Tense::Present => self.present,
            Tense::Past => self.past,
            Tense::PresentContinuous => self.present_continuous,
        }
    }

    /// Total evidence across all buckets.
    pub fn total(&self) -> u32 {
        self.future + self.present + self.past + self.present_continuous
    }

    /// The bucket with the strictly highest count.
    ///
    /// Ties are broken by definition order ([`Tense::ALL`]); all-zero counts
    /// default to [`Tense::Present`]. Callers deciding whether to insert a
    /// marker must still check `get(dominant) > 0`.
    pub fn dominant(&self) -> Tense {
        if self.total() == 0 {
            return Tense::Present;
        }
        let mut best = Tense::ALL[0];
        for tense in Tense::ALL {
            if self.get(tense) > self.get(best) {
                best = tense;
            }
        }
        best
    }
}

/// Classify a tagged sentence into a tense bucket.
///
/// Verb-class tags contribute to exactly one counter each: modal → future,
/// past verb → past, gerund → present continuous, present verb → present.
/// Non-verb tags contribute nothing. Returns the dominant tense together
/// with the full count record so callers can apply the classify-then-gate
/// contract.
pub fn detect(tags: &[PosTag]) -> (Tense, TenseCounts) {
    let mut counts = TenseCounts::new();
    for tag in tags {
        let tense = match tag {
            PosTag::Modal => Tense::Future,
            PosTag::VerbPast => Tense::Past,
            PosTag::VerbGerund => Tense::PresentContinuous,
            PosTag::VerbPresent => Tense::Present,
            PosTag::Other => continue,
        };
        counts.increment(tense);
    }
    (counts.dominant(), counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_future_on_tie_with_present() {
        // "i will go": the modal and the present verb tie at one apiece;
        // future is defined first and wins.
        let (tense, counts) = detect(&[PosTag::Other, PosTag::Modal, PosTag::VerbPresent]);
        assert_eq!(tense, Tense::Future);
        assert_eq!(counts.future, 1);
        assert_eq!(counts.present, 1);
    }

    #[test]
    fn test_detect_past() {
        let (tense, counts) = detect(&[PosTag::VerbPast, PosTag::VerbPast, PosTag::Other]);
        assert_eq!(tense, Tense::Past);
        assert_eq!(counts.past, 2);
    }

    #[test]
    fn test_non_verbs_contribute_nothing() {
        let (tense, counts) = detect(&[PosTag::Other, PosTag::Other]);
        assert_eq!(tense, Tense::Present);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_detect_present_continuous() {
        let (tense, _) = detect(&[PosTag::VerbGerund, PosTag::VerbGerund, PosTag::Other]);
        assert_eq!(tense, Tense::PresentContinuous);
    }

    #[test]
    fn test_empty_tags_default_to_present() {
        let (tense, counts) = detect(&[]);
        assert_eq!(tense, Tense::Present);
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.get(Tense::Present), 0);
    }

    #[test]
    fn test_tie_breaks_in_definition_order() {
        // future and past tied at 1; future is defined first.
        let mut counts = TenseCounts::new();
        counts.increment(Tense::Future);
        counts.increment(Tense::Past);
        assert_eq!(counts.dominant(), Tense::Future);

        // past and present_continuous tied; past comes first.
        let mut counts = TenseCounts::new();
        counts.increment(Tense::Past);
        counts.increment(Tense::PresentContinuous);
        assert_eq!(counts.dominant(), Tense::Past);
    }

    #[test]
    fn test_strictly_highest_wins() {
        let mut counts = TenseCounts::new();
        counts.increment(Tense::Present);
        counts.increment(Tense::Past);
        counts.increment(Tense::Past);
        assert_eq!(counts.dominant(), Tense::Past);
    }

    #[test]
    fn test_markers() {
        assert_eq!(Tense::Past.marker(), Some("before"));
        assert_eq!(Tense::Future.marker(), Some("will"));
        assert_eq!(Tense::PresentContinuous.marker(), Some("now"));
        assert_eq!(Tense::Present.marker(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tense::PresentContinuous.to_string(), "present_continuous");
        assert_eq!(Tense::Future.to_string(), "future");
    }
}
