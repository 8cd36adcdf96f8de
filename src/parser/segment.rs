use crate::parser::case::is_upper_word;
use crate::parser::classify::{is_separator, is_upper};

/// Raw output unit of the segmenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    /// One or more consecutive separator characters.
    Separator,
}

impl Token {
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(word) => Some(word),
            Token::Separator => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmented {
    pub tokens: Vec<Token>,
    /// First separator character seen, or empty.
    pub separator: String,
    /// The input had no lowercase letters and was lowered before splitting.
    pub was_upper: bool,
}

/// Split `text` at case and separator transitions.
///
/// An all-uppercase input is lowered first so that `HELLO_WORLD` yields two
/// words instead of one word per letter.
pub fn segment(text: &str) -> Segmented {
    let was_upper = is_upper_word(text);
    let chars: Vec<char> = if was_upper {
        text.to_lowercase().chars().collect()
    } else {
        text.chars().collect()
    };

    let mut segmented = Segmented {
        was_upper,
        ..Default::default()
    };

    let Some(&first) = chars.first() else {
        return segmented;
    };

    let mut run_start = 0;
    let mut prev = first;

    // One step past the end so the trailing run is flushed.
    for i in 1..=chars.len() {
        let current = chars.get(i).copied();

        let split = match current {
            Some(ch) => is_upper(ch) || is_separator(ch) != is_separator(prev),
            None => true,
        };

        if split {
            if !is_separator(prev) {
                segmented
                    .tokens
                    .push(Token::Word(chars[run_start..i].iter().collect()));
            } else {
                if segmented.separator.is_empty() {
                    segmented.separator = chars[run_start].to_string();
                }
                segmented.tokens.push(Token::Separator);
            }
            run_start = i;
        }

        if let Some(ch) = current {
            prev = ch;
        }
    }

    tracing::trace!(
        tokens = segmented.tokens.len(),
        separator = %segmented.separator,
        was_upper,
        "segmented input"
    );

    segmented
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Token {
        Token::Word(s.to_string())
    }

    #[test]
    fn test_empty_input() {
        let seg = segment("");
        assert!(seg.tokens.is_empty());
        assert_eq!(seg.separator, "");
        assert!(!seg.was_upper);
    }

    #[test]
    fn test_camel_case_splitting() {
        let seg = segment("fooBarString");
        assert_eq!(seg.tokens, vec![word("foo"), word("Bar"), word("String")]);
        assert_eq!(seg.separator, "");
    }

    #[test]
    fn test_upper_input_is_lowered() {
        let seg = segment("HELLO_WORLD");
        assert!(seg.was_upper);
        assert_eq!(seg.tokens, vec![word("hello"), Token::Separator, word("world")]);
        assert_eq!(seg.separator, "_");
    }

    #[test]
    fn test_capital_run_splits_per_letter() {
        let seg = segment("fooHTTPBar");
        assert_eq!(
            seg.tokens,
            vec![word("foo"), word("H"), word("T"), word("T"), word("P"), word("Bar")]
        );
    }

    #[test]
    fn test_separator_runs_collapse() {
        let seg = segment("a--_b");
        assert_eq!(seg.tokens, vec![word("a"), Token::Separator, word("b")]);
        assert_eq!(seg.separator, "-");
    }

    #[test]
    fn test_first_separator_is_reported() {
        let seg = segment("one.two_three");
        assert_eq!(seg.separator, ".");
        assert_eq!(seg.tokens.len(), 5);
    }

    #[test]
    fn test_only_separators() {
        let seg = segment("__");
        assert_eq!(seg.tokens, vec![Token::Separator]);
        assert_eq!(seg.separator, "_");
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        let seg = segment("_foo_");
        assert_eq!(
            seg.tokens,
            vec![Token::Separator, word("foo"), Token::Separator]
        );
    }

    #[test]
    fn test_digits_stay_in_word() {
        let seg = segment("utf8Decoder");
        assert_eq!(seg.tokens, vec![word("utf8"), word("Decoder")]);
    }

    #[test]
    fn test_unicode_lowercase_is_letter() {
        let seg = segment("fóoBarString");
        assert_eq!(seg.tokens, vec![word("fóo"), word("Bar"), word("String")]);
    }
}
