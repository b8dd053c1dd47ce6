use super::cursor::Cursor;
use super::token::{identifier_or_keyword, Token};

fn is_digit_char(ch: char) -> bool {
    ch.is_ascii_digit()
}

fn is_letter_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_monkey_whitespace(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r')
}

pub struct Lexer<'src> {
    source: &'src str,
    cursor: Cursor<'src>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer from source code.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            source,
            cursor: Cursor::new(source),
        }
    }

    /// Returns the next token and advances. Once the source is exhausted,
    /// every further call returns `EndOfFile`. The lexer never fails:
    /// unrecognized characters come back as `Illegal` tokens.
    pub fn next_token(&mut self) -> Token {
        self.cursor.take_while(is_monkey_whitespace);

        let (byte_idx, ch) = match self.cursor.take() {
            Some(t) => t,
            None => return Token::EndOfFile,
        };

        match ch {
            '=' => self.look_for_eq_sign(Token::Assign, Token::Eq),
            '!' => self.look_for_eq_sign(Token::Bang, Token::NotEq),
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Asterisk,
            '/' => Token::Slash,
            '<' => Token::Lt,
            '>' => Token::Gt,
            ',' => Token::Comma,
            ';' => Token::Semicolon,
            ':' => Token::Colon,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '{' => Token::LBrace,
            '}' => Token::RBrace,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            '"' => self.scan_string(byte_idx),
            _ if is_digit_char(ch) => self.scan_number(byte_idx),
            _ if is_letter_char(ch) => self.scan_identifier_or_kw(byte_idx),
            _ => Token::Illegal(ch.to_string()),
        }
    }

    /// Checks if next char is '='. If so, consume it and return t2.
    /// Otherwise, return t1.
    fn look_for_eq_sign(&mut self, t1: Token, t2: Token) -> Token {
        if self.cursor.take_if('=') {
            t2
        } else {
            t1
        }
    }

    /// Scans string contents verbatim up to the next '"' or end of input.
    /// There is no escape processing. start_idx is the opening '"'.
    fn scan_string(&mut self, start_idx: usize) -> Token {
        let start_idx = start_idx + 1;

        self.cursor.take_until(|ch| ch == '"');
        let end_idx = self.cursor.byte_index();

        // Consume the closing quote if the string was terminated.
        self.cursor.take();

        Token::Str(self.source[start_idx..end_idx].to_owned())
    }

    /// Scans a maximal run of decimal digits. No sign, no float syntax.
    fn scan_number(&mut self, start_idx: usize) -> Token {
        self.cursor.take_while(is_digit_char);
        let end_idx = self.cursor.byte_index();

        let digits = &self.source[start_idx..end_idx];
        match digits.parse() {
            Ok(value) => Token::Int(value),
            // A digit run that does not fit an i64.
            Err(_) => Token::Illegal(digits.to_owned()),
        }
    }

    /// Scans to the end of the lexeme and checks it against the keyword table.
    fn scan_identifier_or_kw(&mut self, start_idx: usize) -> Token {
        self.cursor.take_while(is_letter_char);
        let end_idx = self.cursor.byte_index();

        identifier_or_keyword(&self.source[start_idx..end_idx])
    }

    /// Returns an iterator version of lexer, yielding tokens up to and
    /// including the first `EndOfFile`.
    pub fn iter(self) -> LexerIterator<'src> {
        LexerIterator {
            lexer: self,
            seen_eof: false,
        }
    }
}

pub struct LexerIterator<'src> {
    lexer: Lexer<'src>,
    seen_eof: bool,
}

impl<'src> Iterator for LexerIterator<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seen_eof {
            return None;
        }
        let token = self.lexer.next_token();
        if token == Token::EndOfFile {
            self.seen_eof = true;
        }
        Some(token)
    }
}
