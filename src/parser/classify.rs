use unicode_general_category::{get_general_category, GeneralCategory};

/// Coarse character class used to find word boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    UpperLetter,
    LowerLetter,
    Digit,
    Separator,
}

impl CharClass {
    /// Classify by Unicode general category (Lu, Ll, Nd). Everything else,
    /// titlecase letters and marks included, is a separator.
    pub fn of(ch: char) -> Self {
        match get_general_category(ch) {
            GeneralCategory::UppercaseLetter => CharClass::UpperLetter,
            GeneralCategory::LowercaseLetter => CharClass::LowerLetter,
            GeneralCategory::DecimalNumber => CharClass::Digit,
            _ => CharClass::Separator,
        }
    }
}

pub fn is_upper(ch: char) -> bool {
    CharClass::of(ch) == CharClass::UpperLetter
}

pub fn is_lower(ch: char) -> bool {
    CharClass::of(ch) == CharClass::LowerLetter
}

pub fn is_separator(ch: char) -> bool {
    CharClass::of(ch) == CharClass::Separator
}

pub(crate) fn is_titlecase(ch: char) -> bool {
    get_general_category(ch) == GeneralCategory::TitlecaseLetter
}
