/// Characters that can make up a written Japanese headword.
///
/// Hiragana, katakana, full-width/half-width forms and the common CJK
/// ideograph block. ASCII punctuation, spaces and brackets break a run.
pub fn is_japanese_script(c: char) -> bool {
    matches!(
        c,
        '\u{3040}'..='\u{309F}'
            | '\u{30A0}'..='\u{30FF}'
            | '\u{FF00}'..='\u{FFEF}'
            | '\u{4E00}'..='\u{9FAF}'
    )
}

/// First maximal run of Japanese script characters in `text`.
///
/// Reading annotations such as `走る(はしる)` or `走る [はしる]` are separated
/// from the written form by non-script characters, so only the written form
/// is returned.
pub fn extract_headword(text: &str) -> Option<&str> {
    let start = text.find(is_japanese_script)?;
    let rest = &text[start..];
    let end = rest
        .char_indices()
        .find(|(_, c)| !is_japanese_script(*c))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    Some(&rest[..end])
}
