use crate::parser::classify::is_titlecase;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Casing convention detected on the original input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// Every cased letter is uppercase.
    Upper,
    /// Every cased letter is lowercase.
    Lower,
    /// First word lowercase, the rest title-case or uppercase.
    Camel,
    /// All words title-case or uppercase.
    Pascal,
    /// Any other mix of word casing.
    Mixed,
    /// No words at all.
    #[default]
    Unknown,
}

impl CaseStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStyle::Upper => "upper",
            CaseStyle::Lower => "lower",
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Mixed => "mixed",
            CaseStyle::Unknown => "unknown",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upper" => Ok(CaseStyle::Upper),
            "lower" => Ok(CaseStyle::Lower),
            "camel" => Ok(CaseStyle::Camel),
            "pascal" => Ok(CaseStyle::Pascal),
            "mixed" => Ok(CaseStyle::Mixed),
            "unknown" => Ok(CaseStyle::Unknown),
            _ => Err(format!("Unknown case style: {}", s)),
        }
    }
}

/// Classify the original string from its resolved words.
pub fn determine(was_upper: bool, words: &[String], original: &str) -> CaseStyle {
    if was_upper {
        return CaseStyle::Upper;
    }
    if is_lower_word(original) {
        return CaseStyle::Lower;
    }
    let Some((first, rest)) = words.split_first() else {
        return CaseStyle::Unknown;
    };

    let mut camel = is_lower_word(first);
    let mut pascal = is_title_word(first) || is_upper_word(first);

    if camel || pascal {
        for word in rest {
            let capitalized = is_title_word(word) || is_upper_word(word);
            camel &= capitalized;
            pascal &= capitalized;
            if !capitalized {
                break;
            }
        }
    }

    if camel {
        CaseStyle::Camel
    } else if pascal {
        CaseStyle::Pascal
    } else {
        CaseStyle::Mixed
    }
}

// The word predicates use the derived Lowercase/Uppercase properties rather
// than the Ll/Lu categories, so `ª` (Lo, Other_Lowercase) counts as lowercase.

/// At least one cased letter and no uppercase or titlecase letter.
pub fn is_lower_word(s: &str) -> bool {
    let mut cased = false;
    for ch in s.chars() {
        if ch.is_uppercase() || is_titlecase(ch) {
            return false;
        }
        cased |= ch.is_lowercase();
    }
    cased
}

/// At least one cased letter and no lowercase or titlecase letter.
pub fn is_upper_word(s: &str) -> bool {
    let mut cased = false;
    for ch in s.chars() {
        if ch.is_lowercase() || is_titlecase(ch) {
            return false;
        }
        cased |= ch.is_uppercase();
    }
    cased
}

/// Uppercase letters only directly after uncased characters, lowercase
/// letters only after cased ones.
pub fn is_title_word(s: &str) -> bool {
    let mut cased = false;
    let mut previous_cased = false;
    for ch in s.chars() {
        if ch.is_uppercase() || is_titlecase(ch) {
            if previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else if ch.is_lowercase() {
            if !previous_cased {
                return false;
            }
            previous_cased = true;
            cased = true;
        } else {
            previous_cased = false;
        }
    }
    cased
}

/// First character titlecased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut out = String::with_capacity(s.len());
    push_titlecase(&mut out, first);
    out.extend(chars.flat_map(char::to_lowercase));
    out
}

fn push_titlecase(out: &mut String, ch: char) {
    let start = out.len();
    out.extend(
        unicode_case_mapping::to_titlecase(ch)
            .iter()
            .filter(|&&code| code != 0)
            .filter_map(|&code| char::from_u32(code)),
    );
    // No mapping: the character is its own titlecase
    if out.len() == start {
        out.push(ch);
    }
}
