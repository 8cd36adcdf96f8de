use crate::error::Result;
use crate::parser::case::capitalize;
use crate::parser::parse;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Target naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Style {
    Camel,
    Pascal,
    Snake,
    Dash,
    Const,
    Dot,
    Ada,
    HttpHeader,
    SeparateWords,
    Slash,
    Backslash,
    Title,
    Lower,
    Upper,
    Capital,
}

lazy_static! {
    static ref STYLE_NAMES: HashMap<&'static str, Style> = {
        let mut names = HashMap::new();
        for style in Style::ALL {
            names.insert(style.name(), style);
            for alias in style.aliases() {
                names.insert(*alias, style);
            }
        }
        names
    };
}

impl Style {
    pub const ALL: [Style; 15] = [
        Style::Camel,
        Style::Pascal,
        Style::Snake,
        Style::Dash,
        Style::Const,
        Style::Dot,
        Style::Ada,
        Style::HttpHeader,
        Style::SeparateWords,
        Style::Slash,
        Style::Backslash,
        Style::Title,
        Style::Lower,
        Style::Upper,
        Style::Capital,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Style::Camel => "camel",
            Style::Pascal => "pascal",
            Style::Snake => "snake",
            Style::Dash => "dash",
            Style::Const => "const",
            Style::Dot => "dot",
            Style::Ada => "ada",
            Style::HttpHeader => "http_header",
            Style::SeparateWords => "separate_words",
            Style::Slash => "slash",
            Style::Backslash => "backslash",
            Style::Title => "title",
            Style::Lower => "lower",
            Style::Upper => "upper",
            Style::Capital => "capital",
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Style::Pascal => &["mixed"],
            Style::Dash => &["kebab", "kebap", "spinal", "slug"],
            Style::Const => &["screaming"],
            Style::Ada => &["camel_snake"],
            _ => &[],
        }
    }

    /// Word-joining styles that keep the segmented casing.
    pub fn preserves_case(&self) -> bool {
        matches!(self, Style::SeparateWords | Style::Slash | Style::Backslash)
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('-', "_");
        STYLE_NAMES
            .get(key.as_str())
            .copied()
            .ok_or_else(|| format!("Unknown style: {}", s))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Style {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Style> for String {
    fn from(style: Style) -> Self {
        style.name().to_string()
    }
}

/// Convert `text` to `style`. An empty `acronyms` slice disables dictionary
/// based acronym detection.
pub fn convert<S: AsRef<str>>(style: Style, text: &str, acronyms: &[S]) -> Result<String> {
    let words = || parse(text, Some(acronyms), style.preserves_case()).map(|parsed| parsed.words);

    let converted = match style {
        Style::Camel => {
            let mut words = words()?;
            if let Some(first) = words.first_mut() {
                *first = first.to_lowercase();
            }
            words.concat()
        }
        Style::Pascal => words()?.concat(),
        Style::Snake => join(&words()?, "_", str::to_lowercase),
        Style::Dash => join(&words()?, "-", str::to_lowercase),
        Style::Const => join(&words()?, "_", str::to_uppercase),
        Style::Dot => join(&words()?, ".", str::to_lowercase),
        Style::Ada => join(&words()?, "_", capitalize),
        Style::HttpHeader => join(&words()?, "-", capitalize),
        Style::SeparateWords => words()?.join(" "),
        Style::Slash => words()?.join("/"),
        Style::Backslash => words()?.join("\\"),
        Style::Title => capitalize(&convert(Style::Snake, text, acronyms)?),
        Style::Lower => text.to_lowercase(),
        Style::Upper => text.to_uppercase(),
        Style::Capital => capitalize(text),
    };

    Ok(converted)
}

fn join(words: &[String], delimiter: &str, transform: impl Fn(&str) -> String) -> String {
    words
        .iter()
        .map(|w| transform(w.as_str()))
        .collect::<Vec<_>>()
        .join(delimiter)
}

macro_rules! style_fns {
    ($($(#[$meta:meta])* $name:ident => $style:expr;)*) => {
        $(
            $(#[$meta])*
            pub fn $name<S: AsRef<str>>(text: &str, acronyms: &[S]) -> Result<String> {
                convert($style, text, acronyms)
            }
        )*
    };
}

style_fns! {
    /// `fooBarString`
    camel => Style::Camel;
    /// `FooBarString`
    pascal => Style::Pascal;
    mixed => Style::Pascal;
    /// `foo_bar_string`
    snake => Style::Snake;
    /// `foo-bar-string`
    dash => Style::Dash;
    kebab => Style::Dash;
    /// `FOO_BAR_STRING`
    constant => Style::Const;
    screaming => Style::Const;
    /// `foo.bar.string`
    dot => Style::Dot;
    /// `Foo_Bar_String`
    ada => Style::Ada;
    /// `Foo-Bar-String`
    http_header => Style::HttpHeader;
    /// `foo bar string`, casing preserved
    separate_words => Style::SeparateWords;
    /// `foo/bar/string`, casing preserved
    slash => Style::Slash;
    /// `foo\bar\string`, casing preserved
    backslash => Style::Backslash;
    /// `Foo_bar_string`
    title => Style::Title;
}
