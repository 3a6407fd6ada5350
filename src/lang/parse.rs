use super::{lex, token::*, Error, ErrorCode, Line};

type Result<T> = std::result::Result<T, Error>;

/// Parses Grin source lines lazily. Iteration stops, without yielding,
/// at a line consisting of a lone `.`, and after the first error.
pub fn parse<I, S>(lines: I) -> Parse<I::IntoIter>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Parse {
        lines: lines.into_iter(),
        line_number: 0,
        done: false,
    }
}

pub struct Parse<I> {
    lines: I,
    line_number: usize,
    done: bool,
}

impl<I, S> Iterator for Parse<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let source = match self.lines.next() {
            Some(source) => source,
            None => {
                self.done = true;
                return None;
            }
        };
        self.line_number += 1;
        let source = source.as_ref();
        let tokens = match lex(source, self.line_number).collect::<Result<Vec<Token>>>() {
            Ok(tokens) => tokens,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };
        if let [dot] = tokens.as_slice() {
            if *dot.kind() == Kind::Dot {
                self.done = true;
                return None;
            }
        }
        let end = source.chars().count() + 1;
        if let Err(e) = Parser::parse(&tokens, self.line_number, end) {
            self.done = true;
            return Some(Err(e));
        }
        Some(Ok(Line::new(self.line_number, tokens)))
    }
}

impl<I, S> std::iter::FusedIterator for Parse<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
}

struct Parser<'a> {
    token_stream: std::iter::Peekable<std::slice::Iter<'a, Token>>,
    line_number: usize,
    end: usize,
}

impl<'a> Parser<'a> {
    fn parse(tokens: &'a [Token], line_number: usize, end: usize) -> Result<()> {
        let mut parse = Parser {
            token_stream: tokens.iter().peekable(),
            line_number,
            end,
        };
        if tokens.is_empty() {
            return Err(parse.error_at_end(ErrorCode::EmptyLine, ""));
        }
        parse.label()?;
        parse.statement()?;
        match parse.token_stream.next() {
            None => Ok(()),
            Some(t) => Err(parse.error_on(t, ErrorCode::ExtraTokens, "")),
        }
    }

    fn error_on(&self, token: &Token, code: ErrorCode, message: &str) -> Error {
        Error::new(code)
            .in_line_number(Some(token.line()))
            .in_column(Some(token.column()))
            .message(message)
    }

    fn error_at_end(&self, code: ErrorCode, message: &str) -> Error {
        Error::new(code)
            .in_line_number(Some(self.line_number))
            .in_column(Some(self.end))
            .message(message)
    }

    fn label(&mut self) -> Result<()> {
        if let Some(t) = self.token_stream.peek() {
            if t.is_ident() {
                self.token_stream.next();
                self.expect(|t| *t.kind() == Kind::Colon, "Expected ':' after label")?;
            }
        }
        Ok(())
    }

    fn statement(&mut self) -> Result<()> {
        let token = match self.token_stream.next() {
            Some(t) => t,
            None => return Err(self.error_at_end(ErrorCode::MissingStatement, "")),
        };
        let word = match token.kind() {
            Kind::Word(word) if word.is_statement() => *word,
            _ => return Err(self.error_on(token, ErrorCode::ExpectedStatement, "")),
        };
        use Word::*;
        match word {
            Let | Add | Sub | Mult | Div => {
                self.ident()?;
                self.value()
            }
            Print => self.value(),
            Innum | Instr => self.ident(),
            Goto | Gosub => self.jump(),
            Return | End => Ok(()),
            If => Err(self.error_on(token, ErrorCode::ExpectedStatement, "")),
        }
    }

    fn jump(&mut self) -> Result<()> {
        self.expect(
            Token::is_jump_target,
            "Expected jump target (integer literal, string literal or identifier)",
        )?;
        if let Some(t) = self.token_stream.peek() {
            if *t.kind() == Kind::Word(Word::If) {
                self.token_stream.next();
                self.value()?;
                self.expect(
                    Token::is_relational,
                    "Expected relational operator (=, <>, <, <=, >, >=)",
                )?;
                self.value()?;
            }
        }
        Ok(())
    }

    fn ident(&mut self) -> Result<()> {
        self.expect(Token::is_ident, "Expected identifier")
    }

    fn value(&mut self) -> Result<()> {
        self.expect(
            Token::is_value,
            "Expected value (integer literal, float literal, string literal or identifier)",
        )
    }

    fn expect(&mut self, accept: fn(&Token) -> bool, message: &str) -> Result<()> {
        match self.token_stream.next() {
            Some(t) if accept(t) => Ok(()),
            Some(t) => Err(self.error_on(t, ErrorCode::UnexpectedToken, message)),
            None => Err(self.error_at_end(ErrorCode::UnexpectedToken, message)),
        }
    }
}
