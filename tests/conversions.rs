use caseconv::convert::{self, Style};
use caseconv::{parse, CaseError, CaseStyle};

const NONE: &[&str] = &[];

/// Lossless styles: formatting their own output again changes nothing and
/// yields the same words.
#[test]
fn test_lossless_styles_roundtrip() {
    let styles = [
        Style::Camel,
        Style::Pascal,
        Style::Snake,
        Style::Dash,
        Style::Const,
        Style::Dot,
        Style::Ada,
        Style::HttpHeader,
    ];
    let inputs = ["fooBarString", "HELLO_WORLD", "some-kebab-name", "Foo.Bar.utf8"];

    for style in styles {
        for input in inputs {
            let once = convert::convert(style, input, NONE).unwrap();
            let twice = convert::convert(style, &once, NONE).unwrap();
            assert_eq!(once, twice, "{} of {:?}", style, input);

            let before = parse(input, Some(NONE), false).unwrap();
            let after = parse(&once, Some(NONE), false).unwrap();
            assert_eq!(
                lowered(&before.words),
                lowered(&after.words),
                "{} of {:?}",
                style,
                input
            );
        }
    }
}

fn lowered(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

#[test]
fn test_every_style_from_every_style() {
    let values = [
        (Style::Camel, "fooBarString"),
        (Style::Pascal, "FooBarString"),
        (Style::Snake, "foo_bar_string"),
        (Style::Dash, "foo-bar-string"),
        (Style::Const, "FOO_BAR_STRING"),
        (Style::Dot, "foo.bar.string"),
        (Style::Ada, "Foo_Bar_String"),
        (Style::HttpHeader, "Foo-Bar-String"),
    ];

    for (target, expected) in values {
        for (_, input) in values {
            assert_eq!(
                convert::convert(target, input, NONE).unwrap(),
                expected,
                "{} of {:?}",
                target,
                input
            );
        }
    }
}

#[test]
fn test_preserving_styles_keep_original_casing() {
    let cases = [
        ("fooBarString", "foo Bar String"),
        ("FooBarString", "Foo Bar String"),
        ("FOO_BAR_STRING", "FOO BAR STRING"),
        ("foo_bar_string", "foo bar string"),
        ("foo-bar-string", "foo bar string"),
    ];
    for (input, expected) in cases {
        assert_eq!(convert::separate_words(input, NONE).unwrap(), expected);
        assert_eq!(
            convert::slash(input, NONE).unwrap(),
            expected.replace(' ', "/")
        );
        assert_eq!(
            convert::backslash(input, NONE).unwrap(),
            expected.replace(' ', "\\")
        );
    }
}

#[test]
fn test_acronym_dictionary() {
    let acronyms = ["HTTP"];
    let input = "fooHTTPBarString";

    let parsed = parse(input, Some(&acronyms[..]), false).unwrap();
    assert_eq!(parsed.words, vec!["Foo", "HTTP", "Bar", "String"]);
    assert_eq!(parsed.case, CaseStyle::Camel);

    assert_eq!(convert::snake(input, &acronyms).unwrap(), "foo_http_bar_string");
    assert_eq!(convert::constant(input, &acronyms).unwrap(), "FOO_HTTP_BAR_STRING");
    assert_eq!(convert::dot(input, &acronyms).unwrap(), "foo.http.bar.string");
    assert_eq!(convert::http_header(input, &acronyms).unwrap(), "Foo-Http-Bar-String");
    assert_eq!(convert::slash(input, &acronyms).unwrap(), "foo/HTTP/Bar/String");
    assert_eq!(convert::title(input, &acronyms).unwrap(), "Foo_http_bar_string");
}

#[test]
fn test_invalid_acronym() {
    assert_eq!(
        parse("fooBar", Some(&["AB_C"][..]), false),
        Err(CaseError::InvalidAcronym("AB_C".to_string()))
    );
    assert!(convert::snake("fooBar", &["HTTP", "two words"]).is_err());
}

#[test]
fn test_separator_detection() {
    let none: Option<&[&str]> = None;
    assert_eq!(parse("foo", none, false).unwrap().separator, "");
    assert_eq!(parse("foo bar", none, false).unwrap().separator, " ");
    assert_eq!(parse("a--_b", none, false).unwrap().separator, "-");
    assert_eq!(parse("a/b\\c", none, false).unwrap().separator, "/");

    let parsed = parse("---", none, false).unwrap();
    assert!(parsed.words.is_empty());
    assert_eq!(parsed.case, CaseStyle::Unknown);
    assert_eq!(parsed.separator, "-");
}
