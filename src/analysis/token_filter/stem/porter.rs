//! Porter stemming algorithm implementation.
//!
//! Reduces English words to their stems with the five rewrite steps of
//! Porter (1980). Words are processed as lowercase ASCII; anything containing
//! non-ASCII characters is returned unchanged.
//!
//! # Examples
//!
//! ```
//! use vecsyn::analysis::token_filter::stem::Stemmer;
//! use vecsyn::analysis::token_filter::stem::porter::PorterStemmer;
//!
//! let stemmer = PorterStemmer::new();
//!
//! assert_eq!(stemmer.stem("running"), "run");
//! assert_eq!(stemmer.stem("flies"), "fli");
//! assert_eq!(stemmer.stem("relational"), "relat");
//! ```

use crate::analysis::token_filter::stem::Stemmer;

/// Porter stemming algorithm implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

const STEP2_RULES: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("abli", "able"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
];

const STEP3_RULES: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

// Longer suffixes precede the suffixes they end with.
const STEP4_SUFFIXES: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

impl PorterStemmer {
    /// Create a new Porter stemmer.
    pub fn new() -> Self {
        PorterStemmer
    }

    fn is_consonant(w: &[u8], i: usize) -> bool {
        match w[i] {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => i == 0 || !Self::is_consonant(w, i - 1),
            _ => true,
        }
    }

    /// Number of vowel-consonant sequences in `w`.
    fn measure(w: &[u8]) -> usize {
        let n = w.len();
        let mut i = 0;
        while i < n && Self::is_consonant(w, i) {
            i += 1;
        }

        let mut m = 0;
        while i < n {
            while i < n && !Self::is_consonant(w, i) {
                i += 1;
            }
            if i >= n {
                break;
            }
            m += 1;
            while i < n && Self::is_consonant(w, i) {
                i += 1;
            }
        }
        m
    }

    fn has_vowel(w: &[u8]) -> bool {
        (0..w.len()).any(|i| !Self::is_consonant(w, i))
    }

    fn ends_double_consonant(w: &[u8]) -> bool {
        let n = w.len();
        n >= 2 && w[n - 1] == w[n - 2] && Self::is_consonant(w, n - 1)
    }

    /// consonant-vowel-consonant, where the last consonant is not w, x or y.
    fn ends_cvc(w: &[u8]) -> bool {
        let n = w.len();
        n >= 3
            && Self::is_consonant(w, n - 3)
            && !Self::is_consonant(w, n - 2)
            && Self::is_consonant(w, n - 1)
            && !matches!(w[n - 1], b'w' | b'x' | b'y')
    }

    fn stem_len(w: &[u8], suffix: &str) -> Option<usize> {
        w.ends_with(suffix.as_bytes())
            .then(|| w.len() - suffix.len())
    }

    /// Apply the first rule whose suffix matches, if the stem measure exceeds `min`.
    fn apply_rules(w: &mut Vec<u8>, rules: &[(&str, &str)], min: usize) {
        for (suffix, replacement) in rules {
            if let Some(stem) = Self::stem_len(w, suffix) {
                if Self::measure(&w[..stem]) > min {
                    w.truncate(stem);
                    w.extend_from_slice(replacement.as_bytes());
                }
                return;
            }
        }
    }

    fn step1a(w: &mut Vec<u8>) {
        if w.ends_with(b"sses") || w.ends_with(b"ies") {
            w.truncate(w.len() - 2);
        } else if !w.ends_with(b"ss") && w.ends_with(b"s") {
            w.pop();
        }
    }

    fn step1b(w: &mut Vec<u8>) {
        if let Some(stem) = Self::stem_len(w, "eed") {
            if Self::measure(&w[..stem]) > 0 {
                w.pop();
            }
            return;
        }

        let stem = match Self::stem_len(w, "ed").or_else(|| Self::stem_len(w, "ing")) {
            Some(stem) if Self::has_vowel(&w[..stem]) => stem,
            _ => return,
        };
        w.truncate(stem);

        if w.ends_with(b"at") || w.ends_with(b"bl") || w.ends_with(b"iz") {
            w.push(b'e');
        } else if Self::ends_double_consonant(w) && !matches!(w[w.len() - 1], b'l' | b's' | b'z')
        {
            w.pop();
        } else if Self::measure(w) == 1 && Self::ends_cvc(w) {
            w.push(b'e');
        }
    }

    fn step1c(w: &mut [u8]) {
        let n = w.len();
        if w.ends_with(b"y") && Self::has_vowel(&w[..n - 1]) {
            w[n - 1] = b'i';
        }
    }

    fn step4(w: &mut Vec<u8>) {
        for suffix in STEP4_SUFFIXES {
            if let Some(stem) = Self::stem_len(w, suffix) {
                let ion_ok = *suffix != "ion" || matches!(stem.checked_sub(1).map(|i| w[i]), Some(b's' | b't'));
                if ion_ok && Self::measure(&w[..stem]) > 1 {
                    w.truncate(stem);
                }
                return;
            }
        }
    }

    fn step5(w: &mut Vec<u8>) {
        if let Some(stem) = Self::stem_len(w, "e") {
            let m = Self::measure(&w[..stem]);
            if m > 1 || (m == 1 && !Self::ends_cvc(&w[..stem])) {
                w.truncate(stem);
            }
        }

        if w.ends_with(b"ll") && Self::measure(w) > 1 {
            w.pop();
        }
    }
}

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if word.len() <= 2 || !word.is_ascii() {
            return word.to_string();
        }

        let mut w = word.to_ascii_lowercase().into_bytes();
        Self::step1a(&mut w);
        Self::step1b(&mut w);
        Self::step1c(&mut w);
        Self::apply_rules(&mut w, STEP2_RULES, 0);
        Self::apply_rules(&mut w, STEP3_RULES, 0);
        Self::step4(&mut w);
        Self::step5(&mut w);

        // Only ASCII bytes were removed or appended.
        String::from_utf8_lossy(&w).into_owned()
    }

    fn name(&self) -> &'static str {
        "porter"
    }
}
