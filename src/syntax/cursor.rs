//! Scanner state over immutable source text.
//!
//! The cursor tracks a byte offset plus line/column counters, skips trivia
//! (whitespace and both comment styles), and offers the character-level
//! primitives the grammar rules consume tokens through. It only ever moves
//! forward and never past end of input.

use crate::syntax::error::ParseError;

#[derive(Debug)]
pub struct Cursor<'src> {
    text: &'src str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(text: &'src str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Current byte offset into the source.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// 1-based line of the cursor.
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the cursor.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Character at the cursor without consuming it, or `None` at end of
    /// input.
    pub fn current_char(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Character `offset` positions ahead of the cursor. Only 2-character
    /// lookahead is needed (`//`, `/*`, `*/`).
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.text[self.pos..].chars().nth(offset)
    }

    /// Consumes and returns the current character, or `None` at end of
    /// input. Consuming a newline bumps the line counter and resets the
    /// column to 1.
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Skips whitespace, `//` line comments (the terminating newline is left
    /// for the whitespace arm), and `/* ... */` block comments. An
    /// unterminated block comment is consumed silently to end of input.
    pub fn skip_trivia(&mut self) {
        loop {
            match self.current_char() {
                Some(' ' | '\t' | '\n' | '\r') => {
                    self.advance();
                }
                Some('/') if self.peek(1) == Some('/') => {
                    while matches!(self.current_char(), Some(c) if c != '\n') {
                        self.advance();
                    }
                }
                Some('/') if self.peek(1) == Some('*') => {
                    self.advance();
                    self.advance();
                    loop {
                        match self.current_char() {
                            Some('*') if self.peek(1) == Some('/') => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            Some(_) => {
                                self.advance();
                            }
                            None => break,
                        }
                    }
                }
                _ => break,
            }
        }
    }

    /// Skips trivia, then matches `literal` character by character. The
    /// first mismatch fails at the mismatching character; matched characters
    /// stay consumed.
    pub fn expect(&mut self, literal: &str) -> Result<(), ParseError> {
        self.skip_trivia();
        for expected in literal.chars() {
            match self.current_char() {
                Some(found) if found == expected => {
                    self.advance();
                }
                found => {
                    let found = match found {
                        Some(c) => format!("'{c}'"),
                        None => "end of input".to_string(),
                    };
                    return Err(self.syntax_error(format!(
                        "Expected '{literal}' at line {}, col {}, got {found}",
                        self.line, self.column
                    )));
                }
            }
        }
        Ok(())
    }

    /// Skips trivia, then greedily consumes alphanumeric-or-underscore
    /// characters. Fails if none were consumed.
    pub fn parse_identifier(&mut self) -> Result<String, ParseError> {
        self.skip_trivia();
        let mut ident = String::new();
        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        if ident.is_empty() {
            return Err(self.syntax_error(format!(
                "Expected identifier at line {}, col {}",
                self.line, self.column
            )));
        }
        Ok(ident)
    }

    /// A syntax error carrying the cursor's position snapshot.
    pub fn syntax_error(&self, message: impl Into<String>) -> ParseError {
        ParseError::Syntax {
            message: message.into(),
            position: self.pos,
            line: self.line,
            column: self.column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_tracks_lines_and_columns() {
        let mut cursor = Cursor::new("ab\nc");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!((cursor.line(), cursor.column()), (1, 2));
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.advance(), Some('\n'));
        assert_eq!((cursor.line(), cursor.column()), (2, 1));
        assert_eq!(cursor.advance(), Some('c'));
        assert_eq!(cursor.advance(), None);
        assert!(cursor.at_end());
    }

    #[test]
    fn advance_never_moves_past_end() {
        let mut cursor = Cursor::new("");
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn skip_trivia_handles_both_comment_styles() {
        let mut cursor = Cursor::new("  // line\n  /* block\n comment */  x");
        cursor.skip_trivia();
        assert_eq!(cursor.current_char(), Some('x'));
    }

    #[test]
    fn line_comment_stops_at_newline() {
        let mut cursor = Cursor::new("// note\nx");
        cursor.skip_trivia();
        assert_eq!(cursor.current_char(), Some('x'));
        assert_eq!(cursor.line(), 2);
    }

    #[test]
    fn unterminated_block_comment_consumes_to_end() {
        let mut cursor = Cursor::new("/* never closed");
        cursor.skip_trivia();
        assert!(cursor.at_end());
    }

    #[test]
    fn expect_consumes_literal() {
        let mut cursor = Cursor::new("  component x");
        cursor.expect("component").unwrap();
        assert_eq!(cursor.current_char(), Some(' '));
    }

    #[test]
    fn expect_reports_mismatch_position() {
        let mut cursor = Cursor::new("composite");
        let err = cursor.expect("component").unwrap_err();
        match err {
            ParseError::Syntax {
                message, position, ..
            } => {
                assert!(message.contains("Expected 'component'"));
                assert!(message.contains("got 's'"));
                // "compo" matched before the mismatch.
                assert_eq!(position, 5);
            }
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn expect_reports_end_of_input() {
        let mut cursor = Cursor::new("comp");
        let err = cursor.expect("component").unwrap_err();
        assert!(err.to_string().contains("got end of input"));
    }

    #[test]
    fn identifier_accepts_alnum_and_underscore() {
        let mut cursor = Cursor::new("  pss_top2 {");
        assert_eq!(cursor.parse_identifier().unwrap(), "pss_top2");
        assert_eq!(cursor.current_char(), Some(' '));
    }

    #[test]
    fn empty_identifier_is_an_error() {
        let mut cursor = Cursor::new("{");
        let err = cursor.parse_identifier().unwrap_err();
        assert!(err.to_string().contains("Expected identifier"));
    }
}
