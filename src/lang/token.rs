/// ## Lexeme produced by the lexer
///
/// Keeps the text exactly as written alongside the decoded kind so that
/// statements can carry operands verbatim. String literals keep their
/// quotes in `text`; the decoded [`Literal::String`] does not.

#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    kind: Kind,
    text: String,
    line: usize,
    column: usize,
}

impl Token {
    pub fn new<S: Into<String>>(kind: Kind, text: S, line: usize, column: usize) -> Token {
        Token {
            kind,
            text: text.into(),
            line,
            column,
        }
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_ident(&self) -> bool {
        matches!(self.kind, Kind::Ident)
    }

    pub fn is_value(&self) -> bool {
        matches!(self.kind, Kind::Ident | Kind::Literal(_))
    }

    pub fn is_jump_target(&self) -> bool {
        matches!(
            self.kind,
            Kind::Ident | Kind::Literal(Literal::Integer(_)) | Kind::Literal(Literal::String(_))
        )
    }

    pub fn is_relational(&self) -> bool {
        matches!(self.kind, Kind::Operator(_))
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Kind {
    Word(Word),
    Ident,
    Literal(Literal),
    Operator(Operator),
    Colon,
    Dot,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Kind::*;
        match self {
            Word(w) => write!(f, "{}", w),
            Ident => write!(f, "identifier"),
            Literal(l) => write!(f, "{}", l.category()),
            Operator(o) => write!(f, "{}", o),
            Colon => write!(f, ":"),
            Dot => write!(f, "."),
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    String(String),
}

impl Literal {
    pub fn category(&self) -> &'static str {
        match self {
            Literal::Integer(_) => "integer literal",
            Literal::Float(_) => "float literal",
            Literal::String(_) => "string literal",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Word {
    Add,
    Div,
    End,
    Gosub,
    Goto,
    If,
    Innum,
    Instr,
    Let,
    Mult,
    Print,
    Return,
    Sub,
}

impl Word {
    /// Reserved words are case-sensitive.
    pub fn from_str(s: &str) -> Option<Word> {
        use Word::*;
        Some(match s {
            "ADD" => Add,
            "DIV" => Div,
            "END" => End,
            "GOSUB" => Gosub,
            "GOTO" => Goto,
            "IF" => If,
            "INNUM" => Innum,
            "INSTR" => Instr,
            "LET" => Let,
            "MULT" => Mult,
            "PRINT" => Print,
            "RETURN" => Return,
            "SUB" => Sub,
            _ => return None,
        })
    }

    pub fn is_statement(&self) -> bool {
        !matches!(self, Word::If)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Word::*;
        match self {
            Add => write!(f, "ADD"),
            Div => write!(f, "DIV"),
            End => write!(f, "END"),
            Gosub => write!(f, "GOSUB"),
            Goto => write!(f, "GOTO"),
            If => write!(f, "IF"),
            Innum => write!(f, "INNUM"),
            Instr => write!(f, "INSTR"),
            Let => write!(f, "LET"),
            Mult => write!(f, "MULT"),
            Print => write!(f, "PRINT"),
            Return => write!(f, "RETURN"),
            Sub => write!(f, "SUB"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Operator {
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Operator::*;
        match self {
            Equal => write!(f, "="),
            NotEqual => write!(f, "<>"),
            Less => write!(f, "<"),
            LessEqual => write!(f, "<="),
            Greater => write!(f, ">"),
            GreaterEqual => write!(f, ">="),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(Word::from_str("GOSUB"), Some(Word::Gosub));
        assert_eq!(Word::from_str("gosub"), None);
        assert_eq!(Word::from_str("PICKLES"), None);
    }

    #[test]
    fn test_if_is_not_a_statement() {
        assert!(Word::Let.is_statement());
        assert!(!Word::If.is_statement());
    }
}
