use crate::convert::{convert, Style};
use crate::ParsedCase;
use anyhow::Result;
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

const STYLE_SAMPLE: &str = "fooHTTPBarString";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// One converted input.
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct JsonConversions<'a> {
    style: Style,
    results: &'a [Conversion],
}

#[derive(Debug, Serialize)]
struct JsonParsed<'a> {
    input: &'a str,
    #[serde(flatten)]
    parsed: &'a ParsedCase,
}

#[derive(Debug, Serialize)]
struct JsonStyle {
    name: &'static str,
    aliases: &'static [&'static str],
    example: String,
}

/// Render conversion results. Text output is one bare result per line so it
/// can be piped.
pub fn render_conversions(
    style: Style,
    conversions: &[Conversion],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(conversions
            .iter()
            .map(|c| format!("{}\n", c.output))
            .collect()),
        OutputFormat::Json => {
            let output = JsonConversions {
                style,
                results: conversions,
            };
            Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
        }
    }
}

pub fn render_parsed(
    parsed: &[(String, ParsedCase)],
    format: OutputFormat,
    colored_output: bool,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(parsed
            .iter()
            .map(|(input, p)| format_parsed_text(input, p, colored_output))
            .collect()),
        OutputFormat::Json => {
            let output: Vec<JsonParsed> = parsed
                .iter()
                .map(|(input, parsed)| JsonParsed { input, parsed })
                .collect();
            Ok(format!("{}\n", serde_json::to_string_pretty(&output)?))
        }
    }
}

fn format_parsed_text(input: &str, parsed: &ParsedCase, colored_output: bool) -> String {
    let words = parsed.words.join(", ");
    let case = parsed.case.to_string();
    let separator = if parsed.separator.is_empty() {
        "(none)".to_string()
    } else {
        format!("{:?}", parsed.separator)
    };

    if colored_output {
        format!(
            "{}\n  {} {}\n  {} {}\n  {} {}\n",
            input.bold(),
            "words:    ".dimmed(),
            words.green(),
            "case:     ".dimmed(),
            case.cyan(),
            "separator:".dimmed(),
            separator.yellow()
        )
    } else {
        format!(
            "{}\n  words:     {}\n  case:      {}\n  separator: {}\n",
            input, words, case, separator
        )
    }
}

pub fn render_styles(format: OutputFormat, colored_output: bool) -> Result<String> {
    let acronyms = ["HTTP"];
    let mut styles = Vec::with_capacity(Style::ALL.len());
    for style in Style::ALL {
        styles.push(JsonStyle {
            name: style.name(),
            aliases: style.aliases(),
            example: convert(style, STYLE_SAMPLE, &acronyms)?,
        });
    }

    match format {
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(&styles)?)),
        OutputFormat::Text => {
            let mut out = String::new();
            for style in &styles {
                let name = format!("{:<16}", style.name);
                let example = format!("{:<24}", style.example);
                let aliases = if style.aliases.is_empty() {
                    String::new()
                } else {
                    format!("(aliases: {})", style.aliases.join(", "))
                };

                if colored_output {
                    out.push_str(&format!(
                        "  {} {} {}\n",
                        name.bold(),
                        example.green(),
                        aliases.dimmed()
                    ));
                } else {
                    out.push_str(&format!("  {} {} {}\n", name, example, aliases));
                }
            }
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_text_conversions_are_bare_lines() {
        let conversions = vec![
            Conversion {
                input: "fooBar".to_string(),
                output: "foo_bar".to_string(),
            },
            Conversion {
                input: "BazQux".to_string(),
                output: "baz_qux".to_string(),
            },
        ];
        let out = render_conversions(Style::Snake, &conversions, OutputFormat::Text).unwrap();
        assert_eq!(out, "foo_bar\nbaz_qux\n");
    }

    #[test]
    fn test_json_conversions() {
        let conversions = vec![Conversion {
            input: "fooBar".to_string(),
            output: "foo-bar".to_string(),
        }];
        let out = render_conversions(Style::Dash, &conversions, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["style"], "dash");
        assert_eq!(value["results"][0]["output"], "foo-bar");
    }

    #[test]
    fn test_parsed_text_and_json() {
        let parsed = parse("HELLO_WORLD", None::<&[&str]>, false).unwrap();
        let entries = vec![("HELLO_WORLD".to_string(), parsed)];

        let text = render_parsed(&entries, OutputFormat::Text, false).unwrap();
        assert!(text.contains("words:     Hello, World"));
        assert!(text.contains("case:      upper"));
        assert!(text.contains("separator: \"_\""));

        let json = render_parsed(&entries, OutputFormat::Json, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["input"], "HELLO_WORLD");
        assert_eq!(value[0]["case"], "upper");
        assert_eq!(value[0]["words"][1], "World");
    }

    #[test]
    fn test_styles_listing() {
        let text = render_styles(OutputFormat::Text, false).unwrap();
        assert!(text.contains("foo_http_bar_string"));
        assert!(text.contains("kebab"));
        assert_eq!(text.lines().count(), Style::ALL.len());
    }
}
