//! Normalized Flesch reading-ease scoring.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::config::LabelLocale;
use crate::counts::ReadabilityScore;
use crate::syllables::estimate_syllables;
use crate::text::{is_blank, words};

pub const BASE_SCORE: f64 = 206.835;
pub const SENTENCE_LENGTH_WEIGHT: f64 = 1.015;
pub const SYLLABLE_WEIGHT: f64 = 84.6;

const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Qualitative band of a readability score, ordered from hardest to easiest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ReadabilityLabel {
    /// Empty or word-less text.
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
    #[serde(rename = "Very Difficult")]
    VeryDifficult,
    #[serde(rename = "Difficult")]
    Difficult,
    #[serde(rename = "Fairly Difficult")]
    FairlyDifficult,
    #[serde(rename = "Standard")]
    Standard,
    #[serde(rename = "Fairly Easy")]
    FairlyEasy,
    #[serde(rename = "Easy")]
    Easy,
    #[serde(rename = "Very Easy")]
    VeryEasy,
}

/// Lower bounds, checked top-down with `>=`.
const THRESHOLDS: [(f64, ReadabilityLabel); 6] = [
    (90.0, ReadabilityLabel::VeryEasy),
    (80.0, ReadabilityLabel::Easy),
    (70.0, ReadabilityLabel::FairlyEasy),
    (60.0, ReadabilityLabel::Standard),
    (50.0, ReadabilityLabel::FairlyDifficult),
    (30.0, ReadabilityLabel::Difficult),
];

impl ReadabilityLabel {
    /// Label for a score already clamped to `0..=100`.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map_or(Self::VeryDifficult, |(_, label)| *label)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotApplicable => "N/A",
            Self::VeryDifficult => "Very Difficult",
            Self::Difficult => "Difficult",
            Self::FairlyDifficult => "Fairly Difficult",
            Self::Standard => "Standard",
            Self::FairlyEasy => "Fairly Easy",
            Self::Easy => "Easy",
            Self::VeryEasy => "Very Easy",
        }
    }

    #[must_use]
    pub const fn localized(self, locale: LabelLocale) -> &'static str {
        match locale {
            LabelLocale::English => self.as_str(),
            LabelLocale::Portuguese => match self {
                Self::NotApplicable => "N/A",
                Self::VeryDifficult => "Muito Difícil",
                Self::Difficult => "Difícil",
                Self::FairlyDifficult => "Razoavelmente Difícil",
                Self::Standard => "Padrão",
                Self::FairlyEasy => "Razoavelmente Fácil",
                Self::Easy => "Fácil",
                Self::VeryEasy => "Muito Fácil",
            },
        }
    }
}

impl fmt::Display for ReadabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Counts that feed the formula.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStatistics {
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
}

/// Unrounded scoring outcome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityResult {
    /// Formula output before clamping.
    pub raw: f64,
    pub label: ReadabilityLabel,
    pub statistics: TextStatistics,
}

impl ReadabilityResult {
    #[must_use]
    pub const fn not_applicable() -> Self {
        Self {
            raw: 0.0,
            label: ReadabilityLabel::NotApplicable,
            statistics: TextStatistics { sentences: 0, words: 0, syllables: 0 },
        }
    }

    /// Integer score reported to callers.
    #[must_use]
    pub fn score(&self) -> ReadabilityScore {
        ReadabilityScore::from_f64(self.raw)
    }

    #[must_use]
    pub fn is_applicable(&self) -> bool {
        self.label != ReadabilityLabel::NotApplicable
    }
}

/// Number of sentences, with a line-count fallback for unpunctuated text.
///
/// A sentence is a non-empty run of non-terminators followed by at least one
/// of `.`, `!`, `?`. Abbreviations therefore count as sentence breaks.
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    let mut sentences = 0usize;
    let mut in_run = false;

    for c in text.chars() {
        if TERMINATORS.contains(&c) {
            if in_run {
                sentences += 1;
                in_run = false;
            }
        } else {
            in_run = true;
        }
    }

    if sentences == 0 {
        text.matches('\n').count() + 1
    } else {
        sentences
    }
}

/// `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`.
///
/// Callers guarantee `words > 0` and `sentences > 0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn flesch_reading_ease(statistics: &TextStatistics) -> f64 {
    let words = statistics.words as f64;
    let sentences = statistics.sentences as f64;
    let syllables = statistics.syllables as f64;

    BASE_SCORE - SENTENCE_LENGTH_WEIGHT * (words / sentences) - SYLLABLE_WEIGHT * (syllables / words)
}

/// Scores plain text.
///
/// Blank or word-less input yields [`ReadabilityResult::not_applicable`],
/// which is a valid result rather than an error.
#[must_use]
pub fn score_readability(text: &str) -> ReadabilityResult {
    if is_blank(text) {
        return ReadabilityResult::not_applicable();
    }

    let mut statistics = TextStatistics { sentences: count_sentences(text), ..TextStatistics::default() };
    for word in words(text) {
        statistics.words += 1;
        statistics.syllables += estimate_syllables(word) as usize;
    }

    if statistics.words == 0 {
        return ReadabilityResult::not_applicable();
    }

    let raw = flesch_reading_ease(&statistics);
    let label = ReadabilityLabel::from_score(raw.clamp(0.0, 100.0));
    log::trace!(
        "readability: {} sentences, {} words, {} syllables -> {raw:.3} ({label})",
        statistics.sentences,
        statistics.words,
        statistics.syllables
    );

    ReadabilityResult { raw, label, statistics }
}
