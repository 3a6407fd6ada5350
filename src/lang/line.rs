use super::token::*;

/// ## A validated line of Grin
///
/// Produced by the parser only after the whole line checked out.

#[derive(Debug, PartialEq, Clone)]
pub struct Line {
    number: usize,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(number: usize, tokens: Vec<Token>) -> Line {
        Line { number, tokens }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    /// The label declared by a leading `NAME:` prefix.
    pub fn label(&self) -> Option<&str> {
        match self.tokens.as_slice() {
            [name, colon, ..] if name.is_ident() && *colon.kind() == Kind::Colon => {
                Some(name.text())
            }
            _ => None,
        }
    }

    /// Tokens following the label, starting with the statement keyword.
    pub fn body(&self) -> &[Token] {
        match self.label() {
            Some(_) => &self.tokens[2..],
            None => &self.tokens,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut first = true;
        for token in &self.tokens {
            if !first && *token.kind() != Kind::Colon {
                write!(f, " ")?;
            }
            write!(f, "{}", token)?;
            first = false;
        }
        Ok(())
    }
}
