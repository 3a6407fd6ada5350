use crate::error;
use crate::lang::{token::*, Error, Line};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// ## Executable statement
///
/// Operands keep the text they were written with; they are evaluated
/// against the program state only when the statement runs.

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Let(Rc<str>, String),
    Print(String),
    InputNumber(Rc<str>),
    InputString(Rc<str>),
    Add(Rc<str>, String),
    Subtract(Rc<str>, String),
    Multiply(Rc<str>, String),
    Divide(Rc<str>, String),
    Goto(Jump),
    GoSub(Jump),
    Return,
    End,
}

/// Target of GOTO or GOSUB with its optional `IF` gate.
#[derive(Debug, PartialEq, Clone)]
pub struct Jump {
    pub target: String,
    pub condition: Option<Condition>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Condition {
    pub left: String,
    pub relop: String,
    pub right: String,
}

impl Statement {
    /// Builds the statement for a line the parser already accepted.
    pub fn from_line(line: &Line) -> Result<Statement> {
        let body = line.body();
        let word = match body.first().map(Token::kind) {
            Some(Kind::Word(word)) => *word,
            _ => return Err(error!(InternalError; "Statement keyword missing after parse")),
        };
        let operand = |index: usize| -> Result<String> {
            match body.get(index) {
                Some(token) => Ok(token.text().to_string()),
                None => Err(error!(InternalError; "Operand missing after parse")),
            }
        };
        let var = |index: usize| -> Result<Rc<str>> { Ok(operand(index)?.into()) };
        use Word::*;
        Ok(match word {
            Let => Statement::Let(var(1)?, operand(2)?),
            Print => Statement::Print(operand(1)?),
            Innum => Statement::InputNumber(var(1)?),
            Instr => Statement::InputString(var(1)?),
            Add => Statement::Add(var(1)?, operand(2)?),
            Sub => Statement::Subtract(var(1)?, operand(2)?),
            Mult => Statement::Multiply(var(1)?, operand(2)?),
            Div => Statement::Divide(var(1)?, operand(2)?),
            Goto => Statement::Goto(Jump::from_tokens(body)?),
            Gosub => Statement::GoSub(Jump::from_tokens(body)?),
            Return => Statement::Return,
            End => Statement::End,
            If => return Err(error!(InternalError; "IF is not a statement")),
        })
    }
}

impl Jump {
    fn from_tokens(body: &[Token]) -> Result<Jump> {
        let text = |index: usize| body.get(index).map(|t| t.text().to_string());
        let target = match text(1) {
            Some(target) => target,
            None => return Err(error!(InternalError; "Jump target missing after parse")),
        };
        let condition = match body.get(2).map(Token::kind) {
            Some(Kind::Word(Word::If)) => match (text(3), text(4), text(5)) {
                (Some(left), Some(relop), Some(right)) => Some(Condition { left, relop, right }),
                _ => return Err(error!(InternalError; "Condition incomplete after parse")),
            },
            _ => None,
        };
        Ok(Jump { target, condition })
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Statement::*;
        match self {
            Let(var, val) => write!(f, "LET {} {}", var, val),
            Print(val) => write!(f, "PRINT {}", val),
            InputNumber(var) => write!(f, "INNUM {}", var),
            InputString(var) => write!(f, "INSTR {}", var),
            Add(var, val) => write!(f, "ADD {} {}", var, val),
            Subtract(var, val) => write!(f, "SUB {} {}", var, val),
            Multiply(var, val) => write!(f, "MULT {} {}", var, val),
            Divide(var, val) => write!(f, "DIV {} {}", var, val),
            Goto(jump) => write!(f, "GOTO {}", jump),
            GoSub(jump) => write!(f, "GOSUB {}", jump),
            Return => write!(f, "RETURN"),
            End => write!(f, "END"),
        }
    }
}

impl std::fmt::Display for Jump {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.target)?;
        if let Some(c) = &self.condition {
            write!(f, " IF {} {} {}", c.left, c.relop, c.right)?;
        }
        Ok(())
    }
}
