use super::token::*;
use super::{Error, ErrorCode};

type Result<T> = std::result::Result<T, Error>;

/// Lexes one line of Grin source. Tokens are produced lazily and the
/// iterator ends after the first error.
pub fn lex(s: &str, line_number: usize) -> Lexer<'_> {
    Lexer {
        chars: s.chars().peekable(),
        line: line_number,
        col: 0,
        failed: false,
    }
}

fn is_grin_digit(c: char) -> bool {
    c.is_ascii_digit()
}

trait Tokenizers<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>>;
    fn bump(&mut self) -> Option<char>;
    fn error_at(&self, code: ErrorCode, index: usize) -> Error;
    fn token(&self, kind: Kind, text: String, start: usize) -> Token;
    fn col(&self) -> usize;

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars().peek() {
            if !pk.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn alphabetic(&mut self) -> Result<Token> {
        let start = self.col();
        let mut s = String::new();
        while let Some(pk) = self.chars().peek() {
            if s.is_empty() || pk.is_alphanumeric() {
                let ch = *pk;
                self.bump();
                s.push(ch);
                continue;
            }
            break;
        }
        let kind = match Word::from_str(&s) {
            Some(word) => Kind::Word(word),
            None => Kind::Ident,
        };
        Ok(self.token(kind, s, start))
    }

    fn string(&mut self) -> Result<Token> {
        let start = self.col();
        let mut s = String::new();
        self.bump();
        loop {
            match self.bump() {
                Some('"') => break,
                Some(ch) => s.push(ch),
                None => return Err(self.error_at(ErrorCode::UnterminatedString, self.col())),
            }
        }
        let text = format!("\"{}\"", s);
        Ok(self.token(Kind::Literal(Literal::String(s)), text, start))
    }

    fn number(&mut self) -> Result<Token> {
        let start = self.col();
        let mut s = String::new();
        let mut digits = 0;
        if let Some(ch) = self.bump() {
            if is_grin_digit(ch) {
                digits += 1;
            }
            s.push(ch);
        }
        digits += self.digits(&mut s);
        if digits == 0 {
            return Err(self.error_at(ErrorCode::MissingDigits, self.col()));
        }
        if let Some('.') = self.chars().peek() {
            self.bump();
            s.push('.');
            self.digits(&mut s);
            return match s.parse::<f64>() {
                Ok(n) => Ok(self.token(Kind::Literal(Literal::Float(n)), s, start)),
                Err(_) => Err(self.error_at(ErrorCode::LiteralOverflow, start)),
            };
        }
        match s.parse::<i64>() {
            Ok(n) => Ok(self.token(Kind::Literal(Literal::Integer(n)), s, start)),
            Err(_) => Err(self.error_at(ErrorCode::LiteralOverflow, start)),
        }
    }

    fn digits(&mut self, s: &mut String) -> usize {
        let mut count = 0;
        while let Some(pk) = self.chars().peek() {
            if !is_grin_digit(*pk) {
                break;
            }
            let ch = *pk;
            self.bump();
            s.push(ch);
            count += 1;
        }
        count
    }

    fn minutia(&mut self) -> Result<Token> {
        let start = self.col();
        let ch = match self.chars().peek() {
            Some(ch) => *ch,
            None => return Err(self.error_at(ErrorCode::InvalidCharacter, start)),
        };
        let kind = match ch {
            ':' => Kind::Colon,
            '.' => Kind::Dot,
            '=' => Kind::Operator(Operator::Equal),
            '<' | '>' => {
                self.bump();
                let op = match (ch, self.chars().peek()) {
                    ('<', Some('>')) => Some(Operator::NotEqual),
                    ('<', Some('=')) => Some(Operator::LessEqual),
                    ('>', Some('=')) => Some(Operator::GreaterEqual),
                    _ => None,
                };
                return Ok(match op {
                    Some(op) => {
                        self.bump();
                        self.token(Kind::Operator(op), op.to_string(), start)
                    }
                    None if ch == '<' => {
                        self.token(Kind::Operator(Operator::Less), "<".to_string(), start)
                    }
                    None => self.token(Kind::Operator(Operator::Greater), ">".to_string(), start),
                });
            }
            _ => return Err(self.error_at(ErrorCode::InvalidCharacter, start)),
        };
        self.bump();
        Ok(self.token(kind, ch.to_string(), start))
    }
}

pub struct Lexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
    line: usize,
    col: usize,
    failed: bool,
}

impl<'a> Tokenizers<'a> for Lexer<'a> {
    fn chars(&mut self) -> &mut std::iter::Peekable<std::str::Chars<'a>> {
        &mut self.chars
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        self.col += 1;
        Some(ch)
    }

    fn col(&self) -> usize {
        self.col
    }

    fn token(&self, kind: Kind, text: String, start: usize) -> Token {
        Token::new(kind, text, self.line, start + 1)
    }

    fn error_at(&self, code: ErrorCode, index: usize) -> Error {
        Error::new(code)
            .in_line_number(Some(self.line))
            .in_column(Some(index + 1))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.whitespace();
        let pk = *self.chars.peek()?;
        let result = if pk.is_alphabetic() {
            self.alphabetic()
        } else if pk == '"' {
            self.string()
        } else if pk == '-' || is_grin_digit(pk) {
            self.number()
        } else {
            self.minutia()
        };
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}

impl<'a> std::iter::FusedIterator for Lexer<'a> {}
