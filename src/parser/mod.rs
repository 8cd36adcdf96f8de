pub mod acronym;
pub mod case;
pub mod classify;
pub mod segment;

use crate::error::Result;
use crate::ParsedCase;
use case::{capitalize, is_upper_word};

pub use case::CaseStyle;

/// Split `text` into words and detect its original casing.
///
/// A non-empty `acronyms` list switches run resolution from "every capital
/// run is one word" to splitting runs along the known acronyms. With
/// `preserve_case` the words keep their original casing (re-uppercased when
/// the whole input was uppercase); otherwise each word is capitalized unless
/// it is a known acronym or already all-uppercase.
pub fn parse<S: AsRef<str>>(
    text: &str,
    acronyms: Option<&[S]>,
    preserve_case: bool,
) -> Result<ParsedCase> {
    let acronyms = match acronyms {
        Some(list) if !list.is_empty() => acronym::sanitize(list)?,
        _ => Vec::new(),
    };

    let segmented = segment::segment(text);
    let mut words = acronym::resolve(segmented.tokens, &acronyms);
    let case = case::determine(segmented.was_upper, &words, text);

    if preserve_case {
        if segmented.was_upper {
            words = words.iter().map(|w| w.to_uppercase()).collect();
        }
    } else {
        normalize_words(&mut words, &acronyms);
    }

    tracing::debug!(
        input = text,
        words = ?words,
        case = %case,
        separator = %segmented.separator,
        "parsed identifier"
    );

    Ok(ParsedCase {
        words,
        case,
        separator: segmented.separator,
    })
}

/// Uppercase known acronyms and capitalize everything that is not already
/// all-uppercase.
pub fn normalize_words(words: &mut [String], acronyms: &[String]) {
    for word in words.iter_mut() {
        let upper = word.to_uppercase();
        if acronyms.contains(&upper) {
            *word = upper;
        } else if !is_upper_word(word) {
            *word = capitalize(word);
        }
    }
}
