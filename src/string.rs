// this_file: src/string.rs

//! String literal decoding: strips the surrounding quotes from a raw
//! [`crate::lexeme::LexemeKind::Str`] lexeme and resolves its escape
//! sequences.

use crate::error::{Error, Result};

/// Decodes a raw quoted-string lexeme (including its surrounding `"`
/// characters) into its string value.
pub fn decode_string_literal(raw: &str, offset: usize) -> Result<String> {
    if raw.len() < 2 || !raw.starts_with('"') || !raw.ends_with('"') {
        return Err(Error::unexpected_symbol(raw, offset));
    }
    decode_escapes(&raw[1..raw.len() - 1], offset)
}

fn decode_escapes(s: &str, offset: usize) -> Result<String> {
    // Fast path: no backslash means no escapes to resolve.
    if !s.contains('\\') {
        return Ok(s.to_string());
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some('/') => result.push('/'),
            Some('b') => result.push('\u{0008}'),
            Some('f') => result.push('\u{000C}'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some('u') => {
                let high = read_hex4(&mut chars, offset)?;
                let decoded = if (0xD800..=0xDBFF).contains(&high) {
                    decode_surrogate_pair(high, &mut chars, offset)?
                } else {
                    char::from_u32(high)
                        .ok_or_else(|| Error::unexpected_symbol("\\u (invalid code point)", offset))?
                };
                result.push(decoded);
            }
            _ => return Err(Error::unexpected_symbol("invalid escape sequence", offset)),
        }
    }

    Ok(result)
}

fn decode_surrogate_pair(
    high: u32,
    chars: &mut std::str::Chars<'_>,
    offset: usize,
) -> Result<char> {
    if chars.next() != Some('\\') || chars.next() != Some('u') {
        return Err(Error::unexpected_symbol("unpaired surrogate", offset));
    }
    let low = read_hex4(chars, offset)?;
    if !(0xDC00..=0xDFFF).contains(&low) {
        return Err(Error::unexpected_symbol("invalid low surrogate", offset));
    }
    let code_point = 0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00);
    char::from_u32(code_point)
        .ok_or_else(|| Error::unexpected_symbol("invalid surrogate pair", offset))
}

fn read_hex4(chars: &mut std::str::Chars<'_>, offset: usize) -> Result<u32> {
    let mut value = 0u32;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .ok_or_else(|| Error::unexpected_symbol("invalid unicode escape", offset))?;
        value = (value << 4) | digit;
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_string() {
        assert_eq!(decode_string_literal("\"hello\"", 0).unwrap(), "hello");
    }

    #[test]
    fn decodes_standard_escapes() {
        let raw = r#""line\nbreak\tand\\quote\"end""#;
        assert_eq!(
            decode_string_literal(raw, 0).unwrap(),
            "line\nbreak\tand\\quote\"end"
        );
    }

    #[test]
    fn decodes_unicode_escape() {
        assert_eq!(decode_string_literal("\"\\u0041\"", 0).unwrap(), "A");
    }

    #[test]
    fn decodes_surrogate_pair() {
        let raw = "\"\\ud83d\\ude00\"";
        assert_eq!(decode_string_literal(raw, 0).unwrap(), "\u{1F600}");
    }

    #[test]
    fn rejects_unpaired_high_surrogate() {
        assert!(decode_string_literal(r#""\ud83d""#, 0).is_err());
    }

    #[test]
    fn rejects_unterminated_quotes() {
        assert!(decode_string_literal("\"abc", 0).is_err());
    }
}
