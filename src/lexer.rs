// this_file: src/lexer.rs

//! The Lexer stage: turns a growing byte buffer into a stream of
//! [`Lexeme`]s, suspending whenever the current lexeme might extend past
//! the end of the buffer.
//!
//! Scanning happens at the byte level rather than the `char` level. JSON's
//! structural bytes (`"`, `\`, `{`, `}`, `[`, `]`, `,`, `:`, and ASCII
//! whitespace) are all below 0x80, and UTF-8 continuation bytes are always
//! in 0x80..=0xBF, so they can never be mistaken for one another; a lexeme's
//! bytes are decoded to UTF-8 only once the whole lexeme is known to be
//! complete, which keeps chunk boundaries that fall inside a multi-byte
//! character harmless.

use crate::error::{Error, Result};
use crate::lexeme::{Lexeme, LexemeKind};

/// Result of pulling the next lexeme from the [`Lexer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexResult {
    /// A complete lexeme was recognized.
    Ready(Lexeme),
    /// The buffer was exhausted before the current (or next) lexeme could
    /// be completed; call [`Lexer::feed`] with more bytes and try again.
    NeedMore,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartialKind {
    Str { escaped: bool },
    Bare,
}

/// Resumption state for a lexeme that was cut short by a buffer boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Partial {
    /// Buffer-local index of the lexeme's first byte.
    start: usize,
    /// Buffer-local index to resume scanning from.
    scan_pos: usize,
    kind: PartialKind,
}

/// Re-entrant byte-buffer lexer.
///
/// Owns the only buffer in the pipeline (`B` in the design notes): it may
/// append newly fed bytes to it and may discard a consumed prefix, tracked
/// via `discarded` (`D`), but never otherwise copies or re-derives it.
#[derive(Debug, Clone)]
pub struct Lexer {
    buffer: Vec<u8>,
    /// Buffer-local scan cursor; always at the start of the next
    /// not-yet-recognized lexeme.
    pos: usize,
    /// Absolute offset of `buffer[0]`.
    discarded: usize,
    /// Set once the caller has signaled no more bytes are coming.
    finished: bool,
    /// Set once the `Eof` sentinel has been emitted.
    eof_emitted: bool,
    partial: Option<Partial>,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    /// Creates a lexer with an empty buffer.
    pub fn new() -> Self {
        Lexer {
            buffer: Vec::new(),
            pos: 0,
            discarded: 0,
            finished: false,
            eof_emitted: false,
            partial: None,
        }
    }

    /// Appends a chunk of bytes to the buffer and drops any prefix that is
    /// no longer needed (everything before the start of the
    /// not-yet-recognized lexeme).
    pub fn feed(&mut self, chunk: &[u8]) {
        if !chunk.is_empty() {
            self.buffer.extend_from_slice(chunk);
        }
        self.compact();
    }

    /// Signals that no further bytes will be fed. The next exhausted-buffer
    /// [`LexResult::NeedMore`] outcome becomes either an `Eof` lexeme or an
    /// [`Error::IncompleteJson`], depending on whether a lexeme was left
    /// in progress.
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// The absolute offset the lexer's scan cursor currently sits at.
    pub fn position(&self) -> usize {
        self.discarded + self.pos
    }

    fn compact(&mut self) {
        if self.pos == 0 {
            return;
        }
        let drop_n = self.pos;
        self.buffer.drain(0..drop_n);
        self.discarded += drop_n;
        self.pos = 0;
        if let Some(p) = &mut self.partial {
            p.start -= drop_n;
            p.scan_pos -= drop_n;
        }
    }

    /// Attempts to recognize the next lexeme.
    pub fn next_lexeme(&mut self) -> Result<LexResult> {
        if let Some(partial) = self.partial {
            return self.resume_partial(partial);
        }

        while self.pos < self.buffer.len() && is_whitespace(self.buffer[self.pos]) {
            self.pos += 1;
        }

        if self.pos >= self.buffer.len() {
            return self.at_buffer_end();
        }

        let start = self.pos;
        let b = self.buffer[start];
        match b {
            b'{' | b'}' | b'[' | b']' | b',' | b':' => {
                self.pos += 1;
                Ok(LexResult::Ready(self.make_op(b, start)))
            }
            b'"' => self.scan_string(start, start + 1, false),
            _ if is_bare_byte(b) => self.scan_bare(start, start),
            _ => {
                // A single non-JSON-structural byte. The lexer hands this
                // through as a one-byte bare lexeme; the value parser is
                // the one that turns it into `UnexpectedSymbol`.
                self.pos += 1;
                let text = String::from_utf8_lossy(&self.buffer[start..start + 1]).into_owned();
                Ok(LexResult::Ready(Lexeme {
                    offset: self.discarded + start,
                    kind: LexemeKind::Bare(text),
                }))
            }
        }
    }

    fn at_buffer_end(&mut self) -> Result<LexResult> {
        if self.finished {
            if self.eof_emitted {
                return Ok(LexResult::NeedMore);
            }
            self.eof_emitted = true;
            Ok(LexResult::Ready(Lexeme {
                offset: self.discarded + self.pos,
                kind: LexemeKind::Eof,
            }))
        } else {
            Ok(LexResult::NeedMore)
        }
    }

    fn resume_partial(&mut self, partial: Partial) -> Result<LexResult> {
        match partial.kind {
            PartialKind::Str { escaped } => self.scan_string(partial.start, partial.scan_pos, escaped),
            PartialKind::Bare => self.scan_bare(partial.start, partial.scan_pos),
        }
    }

    fn scan_string(&mut self, start: usize, mut i: usize, mut escaped: bool) -> Result<LexResult> {
        while i < self.buffer.len() {
            let c = self.buffer[i];
            if escaped {
                escaped = false;
                i += 1;
                continue;
            }
            if c == b'\\' {
                escaped = true;
                i += 1;
                continue;
            }
            if c == b'"' {
                let end = i + 1;
                self.pos = end;
                self.partial = None;
                let text = String::from_utf8(self.buffer[start..end].to_vec())
                    .map_err(|_| Error::unexpected_symbol("<invalid utf-8>", self.discarded + start))?;
                return Ok(LexResult::Ready(Lexeme {
                    offset: self.discarded + start,
                    kind: LexemeKind::Str(text),
                }));
            }
            i += 1;
        }
        if self.finished {
            self.partial = None;
            return Err(Error::incomplete("Incomplete string lexeme"));
        }
        self.partial = Some(Partial {
            start,
            scan_pos: i,
            kind: PartialKind::Str { escaped },
        });
        Ok(LexResult::NeedMore)
    }

    fn scan_bare(&mut self, start: usize, mut i: usize) -> Result<LexResult> {
        while i < self.buffer.len() && is_bare_byte(self.buffer[i]) {
            i += 1;
        }
        if i >= self.buffer.len() && !self.finished {
            self.partial = Some(Partial {
                start,
                scan_pos: i,
                kind: PartialKind::Bare,
            });
            return Ok(LexResult::NeedMore);
        }
        self.pos = i;
        self.partial = None;
        let text = String::from_utf8(self.buffer[start..i].to_vec())
            .map_err(|_| Error::unexpected_symbol("<invalid utf-8>", self.discarded + start))?;
        Ok(LexResult::Ready(Lexeme {
            offset: self.discarded + start,
            kind: LexemeKind::Bare(text),
        }))
    }

    fn make_op(&self, b: u8, start: usize) -> Lexeme {
        Lexeme {
            offset: self.discarded + start,
            kind: LexemeKind::Op(b as char),
        }
    }
}

#[inline]
fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r')
}

/// The bare-lexeme character class: `[A-Za-z0-9.+-]`. Covers `true`,
/// `false`, `null`, and every numeric literal (including exponents), the
/// way `original_source`'s `LEXEME_RE` does for the Python reference this
/// crate was distilled from.
#[inline]
fn is_bare_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'.' || b == b'+' || b == b'-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(lexer: &mut Lexer) -> Vec<Lexeme> {
        let mut out = Vec::new();
        loop {
            match lexer.next_lexeme().unwrap() {
                LexResult::Ready(lex) => {
                    let is_eof = lex.kind == LexemeKind::Eof;
                    out.push(lex);
                    if is_eof {
                        break;
                    }
                }
                LexResult::NeedMore => break,
            }
        }
        out
    }

    #[test]
    fn lexes_structural_characters() {
        let mut lexer = Lexer::new();
        lexer.feed(b"{}[],:");
        lexer.finish();
        let lexemes = drain(&mut lexer);
        let kinds: Vec<_> = lexemes.into_iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            vec![
                LexemeKind::Op('{'),
                LexemeKind::Op('}'),
                LexemeKind::Op('['),
                LexemeKind::Op(']'),
                LexemeKind::Op(','),
                LexemeKind::Op(':'),
                LexemeKind::Eof,
            ]
        );
    }

    #[test]
    fn suspends_mid_string_and_resumes() {
        let mut lexer = Lexer::new();
        lexer.feed(br#""hel"#);
        assert_eq!(lexer.next_lexeme().unwrap(), LexResult::NeedMore);
        lexer.feed(br#"lo""#);
        match lexer.next_lexeme().unwrap() {
            LexResult::Ready(Lexeme {
                kind: LexemeKind::Str(s),
                ..
            }) => assert_eq!(s, "\"hello\""),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn suspends_mid_escape_and_resumes() {
        let mut lexer = Lexer::new();
        lexer.feed(br#""a\"#);
        assert_eq!(lexer.next_lexeme().unwrap(), LexResult::NeedMore);
        lexer.feed(br#""b""#);
        match lexer.next_lexeme().unwrap() {
            LexResult::Ready(Lexeme {
                kind: LexemeKind::Str(s),
                ..
            }) => assert_eq!(s, "\"a\\\"b\""),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn suspends_mid_number_and_resumes() {
        let mut lexer = Lexer::new();
        lexer.feed(b"123");
        assert_eq!(lexer.next_lexeme().unwrap(), LexResult::NeedMore);
        lexer.feed(b"45 ");
        match lexer.next_lexeme().unwrap() {
            LexResult::Ready(Lexeme {
                kind: LexemeKind::Bare(s),
                ..
            }) => assert_eq!(s, "12345"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn suspends_mid_keyword_and_resumes() {
        let mut lexer = Lexer::new();
        lexer.feed(b"tru");
        assert_eq!(lexer.next_lexeme().unwrap(), LexResult::NeedMore);
        lexer.feed(b"e ");
        match lexer.next_lexeme().unwrap() {
            LexResult::Ready(Lexeme {
                kind: LexemeKind::Bare(s),
                ..
            }) => assert_eq!(s, "true"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn unterminated_string_at_finish_is_incomplete() {
        let mut lexer = Lexer::new();
        lexer.feed(br#""abc"#);
        lexer.finish();
        assert!(lexer.next_lexeme().is_err());
    }

    #[test]
    fn offsets_survive_buffer_compaction() {
        let mut lexer = Lexer::new();
        lexer.feed(b"[1,");
        assert!(matches!(
            lexer.next_lexeme().unwrap(),
            LexResult::Ready(Lexeme {
                kind: LexemeKind::Op('['),
                offset: 0
            })
        ));
        assert!(matches!(
            lexer.next_lexeme().unwrap(),
            LexResult::Ready(Lexeme {
                kind: LexemeKind::Bare(_),
                offset: 1
            })
        ));
        assert!(matches!(
            lexer.next_lexeme().unwrap(),
            LexResult::Ready(Lexeme {
                kind: LexemeKind::Op(','),
                offset: 2
            })
        ));
        lexer.feed(b"2]");
        match lexer.next_lexeme().unwrap() {
            LexResult::Ready(Lexeme { offset, .. }) => assert_eq!(offset, 3),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn eof_emitted_once() {
        let mut lexer = Lexer::new();
        lexer.feed(b"1");
        lexer.finish();
        let lexemes = drain(&mut lexer);
        assert_eq!(lexemes.len(), 2);
        assert_eq!(lexemes[1].kind, LexemeKind::Eof);
    }
}
