use crate::{
    ast::{Comparison, Token},
    error::{ErrorKind, ParseError, Position},
};

/// Characters that may follow the first `=` or `!` of a comparator.
const COMPARATOR_CHARS: [char; 8] = ['=', 'g', 'l', 't', 'e', 'q', 'i', 'n'];

/// Lexer state that lookahead must restore.
#[derive(Debug, Clone)]
struct Cursor {
    position: usize,
    line: usize,
    column: usize,
    last_literal: String,
}

pub struct Lexer {
    input: Vec<char>,
    cursor: Cursor,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            cursor: Cursor {
                position: 0,
                line: 1,
                column: 0,
                last_literal: String::new(),
            },
        }
    }

    /// Current line and column.
    pub fn position(&self) -> Position {
        Position::new(self.cursor.line, self.cursor.column)
    }

    /// Text of the most recent value token.
    pub fn last_literal(&self) -> &str {
        &self.cursor.last_literal
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.cursor.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.current_char()?;
        if ch == '\n' {
            self.cursor.line += 1;
            self.cursor.column = 0;
        } else {
            self.cursor.column += 1;
        }
        self.cursor.position += 1;
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn error(&self, kind: ErrorKind) -> ParseError {
        ParseError::new(self.position(), kind)
    }

    fn read_comparator(&mut self) -> Result<Token, ParseError> {
        let mut text = String::new();
        // '=' or '!'
        text.extend(self.advance());

        loop {
            let Some(ch) = self.current_char() else {
                return Err(self.error(ErrorKind::UnexpectedEof { found: text }));
            };
            text.push(ch);
            if !COMPARATOR_CHARS.contains(&ch) {
                return Err(self.error(ErrorKind::UnexpectedInput { found: text }));
            }
            self.advance();
            if ch == '=' {
                break;
            }
        }

        match Comparison::from_fiql(&text) {
            Some(comparison) => Ok(Token::Compare(comparison)),
            None => Err(self.error(ErrorKind::UnexpectedInput { found: text })),
        }
    }

    fn is_delimiter(ch: char) -> bool {
        matches!(ch, ';' | ',' | '!' | '=' | ')' | '*')
    }

    /// Reads a raw value up to whitespace or an unescaped delimiter. A
    /// backslash makes the next character literal and is dropped.
    fn read_value(&mut self) -> String {
        let mut result = String::new();
        let mut escaped = false;

        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                break;
            }
            if escaped {
                result.push(ch);
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if Self::is_delimiter(ch) {
                break;
            } else {
                result.push(ch);
            }
            self.advance();
        }

        self.cursor.last_literal = result.clone();
        result
    }

    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();

        let token = match self.current_char() {
            None => Token::Eof,
            Some('=') | Some('!') => self.read_comparator()?,
            Some('(') => {
                self.advance();
                Token::BraceOpen
            }
            Some(')') => {
                self.advance();
                Token::BraceClose
            }
            Some(';') => {
                self.advance();
                Token::And
            }
            Some(',') => {
                self.advance();
                Token::Or
            }
            Some('*') => {
                self.advance();
                Token::Wildcard
            }
            Some(_) => Token::Value(self.read_value()),
        };

        log::trace!("token {:?} at {}", token, self.position());
        Ok(token)
    }

    /// Returns the next token without consuming it.
    ///
    /// Errors carry the position reached by the trial read.
    pub fn peek_token(&mut self) -> Result<Token, ParseError> {
        let saved = self.cursor.clone();
        let token = self.next_token();
        self.cursor = saved;
        token
    }
}

#[test]
fn test_cursor_restored_after_peek() {
    let mut lexer = Lexer::new("title ==\nfoo");
    assert_eq!(lexer.next_token().unwrap(), Token::Value("title".to_string()));
    let before = lexer.position();

    assert_eq!(lexer.peek_token().unwrap(), Token::Compare(Comparison::Equal));
    assert_eq!(lexer.position(), before);
    assert_eq!(lexer.last_literal(), "title");

    lexer.next_token().unwrap();
    assert_eq!(lexer.peek_token().unwrap(), Token::Value("foo".to_string()));
    assert_eq!(lexer.last_literal(), "title");
    assert_eq!(lexer.next_token().unwrap(), Token::Value("foo".to_string()));
    assert_eq!(lexer.last_literal(), "foo");
    assert_eq!(lexer.position(), Position::new(2, 3));
}

#[test]
fn test_escaped_leading_delimiter() {
    let mut lexer = Lexer::new(r"\;a;b");
    assert_eq!(lexer.next_token().unwrap(), Token::Value(";a".to_string()));
    assert_eq!(lexer.next_token().unwrap(), Token::And);
    assert_eq!(lexer.next_token().unwrap(), Token::Value("b".to_string()));
}
