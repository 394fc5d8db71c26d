//! Heuristic syllable estimation.
//!
//! Tuned for English/Portuguese-like spelling. The estimate is only an input
//! to the readability formula and is not linguistically exact.

use alloc::string::String;

/// Letters that keep a trailing `e`/`es` syllabic (`table`, `files`).
const SUFFIX_KEEPERS: [char; 7] = ['l', 'a', 'e', 'i', 'o', 'u', 'y'];

#[inline]
fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimates the syllable count of a single word. Always returns at least 1.
///
/// Words of three characters or fewer are monosyllabic. Otherwise a silent
/// inflection (`-es`, `-e` after a consonant, or `-ed`) and a leading `y`
/// are dropped, and vowel runs are counted two letters at a time.
#[must_use]
pub fn estimate_syllables(word: &str) -> u32 {
    let lower: String = word.to_lowercase();
    if lower.chars().count() <= 3 {
        return 1;
    }

    let stem = strip_inflection(&lower);
    let stem = stem.strip_prefix('y').unwrap_or(stem);

    count_nuclei(stem).max(1)
}

/// Removes `ed`, or `es`/`e` together with the consonant before it.
fn strip_inflection(word: &str) -> &str {
    if let Some(stem) = word.strip_suffix("ed") {
        return stem;
    }

    for suffix in ["es", "e"] {
        if let Some(rest) = word.strip_suffix(suffix)
            && let Some(prev) = rest.chars().next_back()
            && !SUFFIX_KEEPERS.contains(&prev)
        {
            return &rest[..rest.len() - prev.len_utf8()];
        }
    }

    word
}

/// A vowel run of length `n` holds `ceil(n / 2)` nuclei.
fn count_nuclei(word: &str) -> u32 {
    let mut nuclei = 0u32;
    let mut run = 0u32;

    for c in word.chars() {
        if is_vowel(c) {
            run += 1;
            if run % 2 == 1 {
                nuclei = nuclei.saturating_add(1);
            }
        } else {
            run = 0;
        }
    }

    nuclei
}
