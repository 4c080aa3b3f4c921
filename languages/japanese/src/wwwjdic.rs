//! Parser for the WWWJDIC raw "backdoor" output.
//!
//! Each payload line is an EDICT entry of the form
//! `走る [はしる] /(v5r,vi) (1) to run/(2) to travel/(P)/`. Lines are taken
//! apart by the named steps below, in order, so every field boundary can be
//! checked on its own.

use vocab_core::preprocess::trim_trailing_separator;
use vocab_core::{DictionaryLookup, KeyType, ParseError, VocabularyEntry};

use crate::abbreviations;
use crate::script::extract_headword;

pub const NO_MATCHES_MARKER: &str = "No matches were found for this key";

const PAYLOAD_OPEN: &str = "<pre>";
const PAYLOAD_CLOSE: &str = "</pre>";
const COMMON_WORD_MARKER: &str = "(P)";
const TRAILING_COMMON_MARKER: &str = "; (P);";
const SENSE_SEPARATOR: &str = "; ";

/// Parse a full WWWJDIC response body.
///
/// Lines that cannot be parsed are logged and skipped. Only a truncated
/// payload fails the whole response.
pub fn parse(raw: &str, key_type: KeyType) -> Result<DictionaryLookup, ParseError> {
    if raw.contains(NO_MATCHES_MARKER) {
        tracing::debug!("WWWJDIC reported no matches");
        return Ok(DictionaryLookup::NoMatches);
    }

    let payload = extract_payload(raw).inspect_err(|e| {
        tracing::error!("{e}, raw response: {raw:?}");
    })?;

    let lines: Vec<&str> = payload
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    tracing::debug!("WWWJDIC entries received: {} lines", lines.len());

    if lines.is_empty() {
        return Ok(DictionaryLookup::NoMatches);
    }

    let mut entries = Vec::with_capacity(lines.len());
    for (index, line) in lines.iter().enumerate() {
        match parse_line(line, key_type) {
            Ok(entry) => entries.push(entry),
            Err(e) => tracing::warn!("Skipping dictionary line {}: {e}", index + 1),
        }
    }

    Ok(DictionaryLookup::Matches(entries))
}

/// Text between `<pre>` and `</pre>`, or the whole body when there is no
/// `<pre>` block at all.
pub fn extract_payload(raw: &str) -> Result<&str, ParseError> {
    let Some(open) = raw.find(PAYLOAD_OPEN) else {
        return Ok(raw);
    };

    let body = &raw[open + PAYLOAD_OPEN.len()..];
    let close = body
        .find(PAYLOAD_CLOSE)
        .ok_or(ParseError::UnterminatedPayload)?;

    Ok(&body[..close])
}

/// Parse a single EDICT line into an entry
pub fn parse_line(line: &str, key_type: KeyType) -> Result<VocabularyEntry, ParseError> {
    let (japanese, english) = split_segments(line)?;

    let japanese = strip_common_marker(japanese);
    let english = normalize_sense_separators(english);

    let (codes, definition) = split_part_of_speech(&english);
    let parts_of_speech = codes.map(expand_parts_of_speech).unwrap_or_default();

    let definition = strip_trailing_common_marker(definition, key_type);
    let definitions = split_numbered_senses(definition);
    if definitions.iter().all(|d| d.is_empty()) {
        return Err(ParseError::MalformedLine {
            line: line.to_string(),
        });
    }

    let headword = extract_headword(&japanese).ok_or_else(|| ParseError::NoHeadwordFound {
        segment: japanese.clone(),
    })?;

    VocabularyEntry::new(headword, japanese.trim(), parts_of_speech, definitions).ok_or_else(
        || ParseError::MalformedLine {
            line: line.to_string(),
        },
    )
}

/// Step 1: split at the first `/` into the Japanese and English segments
pub fn split_segments(line: &str) -> Result<(&str, &str), ParseError> {
    line.split_once('/').ok_or_else(|| ParseError::MalformedLine {
        line: line.to_string(),
    })
}

/// Step 2: remove every common-word marker from the Japanese segment
pub fn strip_common_marker(japanese: &str) -> String {
    japanese.replace(COMMON_WORD_MARKER, "")
}

/// Step 3: the remaining slashes separate senses
pub fn normalize_sense_separators(english: &str) -> String {
    english.replace('/', SENSE_SEPARATOR)
}

/// Step 4: split the leading part-of-speech parenthetical from the
/// definition text.
///
/// Returns the raw code list (without parentheses) and the rest. A segment
/// that does not open with a parenthetical, or opens with a sense number
/// like `(1)`, has no code list.
pub fn split_part_of_speech(english: &str) -> (Option<&str>, &str) {
    let trimmed = english.trim_start();

    if trimmed.starts_with('(') && split_sense_number(trimmed).is_none() {
        if let Some(close) = trimmed.find(')') {
            let codes = &trimmed[1..close];
            let rest = trimmed[close + 1..].trim_start();
            return (Some(codes), rest);
        }
    }

    (None, trimmed)
}

/// Step 4, continued: expand comma-separated codes into long forms
pub fn expand_parts_of_speech(codes: &str) -> Vec<String> {
    codes
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(abbreviations::expand)
        .collect()
}

/// Step 5: drop the trailing `; (P);` marker and anything after it
pub fn strip_trailing_common_marker(definition: &str, key_type: KeyType) -> &str {
    match definition.find(TRAILING_COMMON_MARKER) {
        Some(at) => &definition[..at],
        None => {
            if key_type == KeyType::CommonOnly {
                tracing::debug!("Common-word marker missing from definition: {definition:?}");
            }
            definition
        }
    }
}

/// Step 6: split `(1) ... (2) ...` into separate senses.
///
/// Scans for `(2)`, `(3)`, ... in order. Whatever follows the last marker
/// found becomes the final sense, so out-of-order numbering degrades into
/// fewer, longer senses rather than an error.
pub fn split_numbered_senses(definition: &str) -> Vec<String> {
    if !definition.starts_with("(1) ") {
        return vec![trim_trailing_separator(definition).to_string()];
    }

    let mut senses = Vec::new();
    let mut start = 0;
    let mut next_number = 2;

    loop {
        let marker = format!("({next_number})");
        match definition[start..].find(&marker) {
            Some(offset) => {
                let at = start + offset;
                senses.push(renumber_sense(&definition[start..at]));
                start = at;
                next_number += 1;
            }
            None => {
                senses.push(renumber_sense(&definition[start..]));
                break;
            }
        }
    }

    senses
}

/// `(3) to hurry to; ` becomes `3. to hurry to`
fn renumber_sense(chunk: &str) -> String {
    let renumbered = match split_sense_number(chunk) {
        Some((number, rest)) => format!("{number}.{rest}"),
        None => chunk.to_string(),
    };

    trim_trailing_separator(&renumbered).to_string()
}

fn split_sense_number(text: &str) -> Option<(&str, &str)> {
    let inner = text.strip_prefix('(')?;
    let close = inner.find(')')?;
    let number = &inner[..close];

    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((number, &inner[close + 1..]))
}
