use crate::error::{CaseError, Result};
use crate::parser::classify::{is_separator, is_upper};
use crate::parser::segment::Token;
use std::ops::Range;

/// Validate caller-supplied acronyms and normalize them to uppercase.
///
/// Fails on the first entry that is empty or contains a separator.
pub fn sanitize<S: AsRef<str>>(raw: &[S]) -> Result<Vec<String>> {
    raw.iter()
        .map(|acronym| {
            let acronym = acronym.as_ref();
            if acronym.is_empty() || acronym.chars().any(is_separator) {
                Err(CaseError::InvalidAcronym(acronym.to_string()))
            } else {
                Ok(acronym.to_uppercase())
            }
        })
        .collect()
}

/// Regroup runs of single uppercase letters and drop separator markers.
///
/// With an empty acronym list every run becomes one word; otherwise runs are
/// split along the known acronyms and leftover letters stand alone.
pub fn resolve(tokens: Vec<Token>, acronyms: &[String]) -> Vec<String> {
    let mut words = Vec::with_capacity(tokens.len());
    let mut run: Vec<char> = Vec::new();

    for token in tokens {
        if let Some(letter) = single_upper_letter(&token) {
            run.push(letter);
            continue;
        }
        flush_run(&mut run, acronyms, &mut words);
        if let Token::Word(word) = token {
            words.push(word);
        }
    }
    flush_run(&mut run, acronyms, &mut words);

    words
}

fn single_upper_letter(token: &Token) -> Option<char> {
    let mut chars = token.as_word()?.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if is_upper(ch) => Some(ch),
        _ => None,
    }
}

fn flush_run(run: &mut Vec<char>, acronyms: &[String], words: &mut Vec<String>) {
    if run.is_empty() {
        return;
    }
    if acronyms.is_empty() {
        words.push(run.iter().collect());
    } else {
        words.extend(
            split_run(run, acronyms)
                .into_iter()
                .map(|range| run[range].iter().collect::<String>()),
        );
    }
    run.clear();
}

/// Cover `run` with non-overlapping acronym matches, in acronym order, and
/// fill the gaps with single letters. Ranges come back sorted by start.
fn split_run(run: &[char], acronyms: &[String]) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut covered = vec![false; run.len()];

    for acronym in acronyms {
        let needle: Vec<char> = acronym.chars().collect();
        if needle.is_empty() || needle.len() > run.len() {
            continue;
        }

        for start in 0..=run.len() - needle.len() {
            let end = start + needle.len();
            if run[start..end] != needle[..] {
                continue;
            }
            if ranges.iter().any(|r| start < r.end && end > r.start) {
                continue;
            }
            tracing::debug!(acronym = %acronym, start, end, "matched acronym");
            covered[start..end].iter_mut().for_each(|c| *c = true);
            ranges.push(start..end);
        }
    }

    ranges.extend(
        covered
            .iter()
            .enumerate()
            .filter(|(_, covered)| !**covered)
            .map(|(i, _)| i..i + 1),
    );
    ranges.sort_by_key(|r| r.start);
    ranges
}
