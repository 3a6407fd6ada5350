use super::{Address, Jump, Operation, Program, Stack, Statement, Val, Var};
use crate::error;
use crate::lang::{token::Operator, Error};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// What the driver does after a statement has executed.
#[derive(Debug, PartialEq)]
pub enum Flow {
    /// Continue with the following statement.
    Next,
    /// Output a value, then continue with the following statement.
    Print(Val),
    /// Continue at the address. One past the last statement halts;
    /// the statement's own address continues with the following one.
    Jump(Address),
    End,
}

/// ## Mutable state of one program run

#[derive(Debug)]
pub struct ProgramState {
    program: Rc<Program>,
    pc: Address,
    var: Var,
    gosub: Stack<Address>,
    running: bool,
}

impl ProgramState {
    pub fn new(program: Rc<Program>) -> ProgramState {
        ProgramState {
            program,
            pc: 0,
            var: Var::new(),
            gosub: Stack::new("GOSUB stack overflow"),
            running: true,
        }
    }

    pub fn pc(&self) -> Address {
        self.pc
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn current_statement(&self) -> Option<&Statement> {
        self.program.get(self.pc)
    }

    pub fn get_variable(&self, name: &str) -> Val {
        self.var.fetch(name)
    }

    pub fn set_variable(&mut self, name: &Rc<str>, value: Val) {
        self.var.store(name, value)
    }

    pub fn advance(&mut self) {
        self.jump(self.pc + 1)
    }

    pub fn jump(&mut self, addr: Address) {
        self.pc = addr;
        if self.program.get(addr).is_none() {
            self.running = false;
        }
    }

    pub fn push_gosub(&mut self, addr: Address) -> Result<()> {
        self.gosub.push(addr)
    }

    pub fn pop_gosub(&mut self) -> Result<Address> {
        match self.gosub.pop() {
            Some(addr) => Ok(addr),
            None => Err(error!(ReturnWithoutGosub)),
        }
    }

    /// Quoted text is a string, numeral text is a number and anything
    /// else names a variable. Numerals always win over variable names.
    pub fn evaluate(&self, text: &str) -> Val {
        if let Some(s) = unquote(text) {
            return Val::String(s.into());
        }
        if text.contains('.') {
            if let Ok(n) = text.parse::<f64>() {
                return Val::Float(n);
            }
        } else if let Ok(n) = text.parse::<i64>() {
            return Val::Integer(n);
        }
        self.var.fetch(text)
    }

    pub fn resolve_target(&self, target: &str) -> Result<Address> {
        if let Some(name) = unquote(target) {
            return match self.program.label(name) {
                Some(addr) => Ok(addr),
                None => Err(error!(UndefinedLabel; format!("Label {} not found", name))),
            };
        }
        let offset = match target.parse::<i64>() {
            Ok(0) => return Err(error!(InfiniteLoop)),
            Ok(n) => n,
            Err(_) => {
                return Err(error!(InvalidTarget; format!("Invalid label format: {}", target)))
            }
        };
        let dest = match (self.pc as i64).checked_add(offset) {
            Some(dest) => dest,
            None => return Err(error!(OutOfRange)),
        };
        if dest < 0 {
            Err(error!(InvalidRange; format!("Invalid range: {} jumps before line 1", target)))
        } else if dest as u64 > self.program.len() as u64 {
            Err(error!(OutOfRange; format!("Out of range: {} jumps past the end", target)))
        } else {
            Ok(dest as Address)
        }
    }

    pub fn evaluate_condition(&self, left: &Val, right: &Val, relop: &str) -> Result<bool> {
        use Operator::*;
        let op = match relop {
            "=" => Equal,
            "<>" => NotEqual,
            "<" => Less,
            "<=" => LessEqual,
            ">" => Greater,
            ">=" => GreaterEqual,
            _ => {
                return Err(error!(UnknownOperator; format!(
                    "Unknown relational operator: {}",
                    relop
                )))
            }
        };
        Operation::compare(op, left, right)
    }

    pub fn execute(&mut self, statement: &Statement) -> Result<Flow> {
        use Statement::*;
        match statement {
            Let(var, val) => {
                let value = self.evaluate(val);
                self.set_variable(var, value);
                Ok(Flow::Next)
            }
            Print(val) => Ok(Flow::Print(self.evaluate(val))),
            InputNumber(var) => match self.get_variable(var) {
                v if v.is_number() => Ok(Flow::Print(v)),
                _ => Err(error!(TypeMismatch; format!("Variable {} is not a number", var))),
            },
            InputString(var) => match self.get_variable(var) {
                v @ Val::String(_) => Ok(Flow::Print(v)),
                _ => Err(error!(TypeMismatch; format!("Variable {} is not a string", var))),
            },
            Add(var, val) => self.arithmetic(var, val, Operation::sum),
            Subtract(var, val) => self.arithmetic(var, val, Operation::subtract),
            Multiply(var, val) => self.arithmetic(var, val, Operation::multiply),
            Divide(var, val) => self.arithmetic(var, val, Operation::divide),
            Goto(jump) => {
                if !self.gate(jump)? {
                    return Ok(Flow::Next);
                }
                Ok(Flow::Jump(self.resolve_target(&jump.target)?))
            }
            GoSub(jump) => {
                if !self.gate(jump)? {
                    return Ok(Flow::Next);
                }
                let dest = self.resolve_target(&jump.target)?;
                if dest == self.pc {
                    return Err(error!(SelfGosub));
                }
                self.push_gosub(self.pc + 1)?;
                Ok(Flow::Jump(dest))
            }
            Return => match self.pop_gosub() {
                Ok(addr) => Ok(Flow::Jump(addr)),
                Err(e) => {
                    self.running = false;
                    Err(e)
                }
            },
            End => Ok(Flow::End),
        }
    }

    fn gate(&self, jump: &Jump) -> Result<bool> {
        match &jump.condition {
            None => Ok(true),
            Some(c) => {
                let left = self.evaluate(&c.left);
                let right = self.evaluate(&c.right);
                self.evaluate_condition(&left, &right, &c.relop)
            }
        }
    }

    fn arithmetic(
        &mut self,
        var: &Rc<str>,
        val: &str,
        op: fn(Val, Val) -> Result<Val>,
    ) -> Result<Flow> {
        let current = match self.var.get(var) {
            Some(current) => current.clone(),
            None => return Err(error!(UndefinedVariable; format!("Variable {} not found", var))),
        };
        let value = op(current, self.evaluate(val))?;
        self.set_variable(var, value);
        Ok(Flow::Next)
    }
}

fn unquote(text: &str) -> Option<&str> {
    if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
        Some(&text[1..text.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;
    use crate::mach::Condition;

    fn state(source: &[&str]) -> ProgramState {
        ProgramState::new(Rc::new(Program::compile(source.iter()).unwrap()))
    }

    fn four_lines() -> ProgramState {
        state(&["START: PRINT 1", "PRINT 2", "MID: PRINT 3", "PRINT 4"])
    }

    #[test]
    fn test_initial_state() {
        let s = state(&[]);
        assert_eq!(s.pc(), 0);
        assert!(s.is_running());
        assert_eq!(s.current_statement(), None);
    }

    #[test]
    fn test_evaluate() {
        let mut s = state(&[]);
        assert_eq!(s.evaluate("10"), Val::Integer(10));
        assert_eq!(s.evaluate("-3"), Val::Integer(-3));
        assert_eq!(s.evaluate("10.5"), Val::Float(10.5));
        assert_eq!(s.evaluate("\"Hello\""), Val::from("Hello"));
        assert_eq!(s.evaluate("\"\""), Val::from(""));
        assert_eq!(s.evaluate("B"), Val::Integer(0));
        s.set_variable(&"A".into(), Val::Integer(10));
        assert_eq!(s.evaluate("A"), Val::Integer(10));
    }

    #[test]
    fn test_evaluate_malformed_text_reads_a_variable() {
        let s = state(&[]);
        assert_eq!(s.evaluate("\"Invalid"), Val::Integer(0));
        assert_eq!(s.evaluate("10a"), Val::Integer(0));
        assert_eq!(s.evaluate("10.5a"), Val::Integer(0));
        assert_eq!(s.evaluate(""), Val::Integer(0));
    }

    #[test]
    fn test_resolve_label() {
        let s = four_lines();
        assert_eq!(s.resolve_target("\"MID\""), Ok(2));
        let e = s.resolve_target("\"NOWHERE\"").unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedLabel as u16);
        assert!(e.to_string().contains("Label NOWHERE not found"));
        let e = s.resolve_target("MID\"").unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidTarget as u16);
        let e = s.resolve_target("\"MID").unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidTarget as u16);
        let e = s.resolve_target("MID").unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidTarget as u16);
    }

    #[test]
    fn test_resolve_relative() {
        let mut s = four_lines();
        s.jump(1);
        assert_eq!(s.resolve_target("2"), Ok(3));
        assert_eq!(s.resolve_target("3"), Ok(4));
        assert_eq!(s.resolve_target("-1"), Ok(0));
        let e = s.resolve_target("4").unwrap_err();
        assert_eq!(e.code(), ErrorCode::OutOfRange as u16);
        let e = s.resolve_target("-2").unwrap_err();
        assert_eq!(e.code(), ErrorCode::InvalidRange as u16);
    }

    #[test]
    fn test_resolve_zero_is_infinite_loop() {
        let mut s = four_lines();
        for pc in 0..4 {
            s.jump(pc);
            let e = s.resolve_target("0").unwrap_err();
            assert_eq!(e.code(), ErrorCode::InfiniteLoop as u16);
        }
    }

    #[test]
    fn test_evaluate_condition() {
        let s = state(&[]);
        let one = Val::Integer(1);
        let two = Val::Float(2.0);
        assert_eq!(s.evaluate_condition(&one, &two, "<"), Ok(true));
        assert_eq!(s.evaluate_condition(&one, &two, ">="), Ok(false));
        assert_eq!(s.evaluate_condition(&one, &one, "="), Ok(true));
        assert_eq!(s.evaluate_condition(&one, &one, "<>"), Ok(false));
        let e = s.evaluate_condition(&one, &two, "==").unwrap_err();
        assert_eq!(e.code(), ErrorCode::UnknownOperator as u16);
        let e = s.evaluate_condition(&one, &Val::from("1"), "=").unwrap_err();
        assert_eq!(e.code(), ErrorCode::TypeMismatch as u16);
    }

    #[test]
    fn test_gosub_stack() {
        let mut s = state(&[]);
        s.push_gosub(10).unwrap();
        s.push_gosub(20).unwrap();
        assert_eq!(s.pop_gosub(), Ok(20));
        assert_eq!(s.pop_gosub(), Ok(10));
        let e = s.pop_gosub().unwrap_err();
        assert_eq!(e.code(), ErrorCode::ReturnWithoutGosub as u16);
    }

    #[test]
    fn test_advance_off_the_end_stops() {
        let mut s = state(&["PRINT 1", "PRINT 2"]);
        s.advance();
        assert!(s.is_running());
        s.advance();
        assert_eq!(s.pc(), 2);
        assert!(!s.is_running());
    }

    #[test]
    fn test_arithmetic_requires_set_variable() {
        let mut s = state(&[]);
        let e = s
            .execute(&Statement::Add("X".into(), "3".to_string()))
            .unwrap_err();
        assert_eq!(e.code(), ErrorCode::UndefinedVariable as u16);
        assert!(e.to_string().contains("Variable X not found"));
    }

    #[test]
    fn test_input_statements() {
        let mut s = state(&[]);
        s.set_variable(&"N".into(), Val::Float(3.14));
        s.set_variable(&"S".into(), Val::from("hello"));
        assert_eq!(
            s.execute(&Statement::InputNumber("N".into())),
            Ok(Flow::Print(Val::Float(3.14)))
        );
        assert_eq!(
            s.execute(&Statement::InputString("S".into())),
            Ok(Flow::Print(Val::from("hello")))
        );
        assert_eq!(
            s.execute(&Statement::InputNumber("UNSET".into())),
            Ok(Flow::Print(Val::Integer(0)))
        );
        let e = s.execute(&Statement::InputNumber("S".into())).unwrap_err();
        assert!(e.to_string().contains("Variable S is not a number"));
        let e = s.execute(&Statement::InputString("N".into())).unwrap_err();
        assert!(e.to_string().contains("Variable N is not a string"));
    }

    #[test]
    fn test_gosub_pushes_next_line() {
        let mut s = four_lines();
        s.jump(1);
        let gosub = Statement::GoSub(Jump {
            target: "\"MID\"".to_string(),
            condition: None,
        });
        assert_eq!(s.execute(&gosub), Ok(Flow::Jump(2)));
        assert_eq!(s.pop_gosub(), Ok(2));
        s.jump(2);
        let e = s.execute(&gosub).unwrap_err();
        assert_eq!(e.code(), ErrorCode::SelfGosub as u16);
    }

    #[test]
    fn test_false_condition_falls_through() {
        let mut s = four_lines();
        let goto = Statement::Goto(Jump {
            target: "\"NOWHERE\"".to_string(),
            condition: Some(Condition {
                left: "1".to_string(),
                relop: ">".to_string(),
                right: "2".to_string(),
            }),
        });
        assert_eq!(s.execute(&goto), Ok(Flow::Next));
    }

    #[test]
    fn test_return_on_empty_stack_stops() {
        let mut s = four_lines();
        assert!(s.execute(&Statement::Return).is_err());
        assert!(!s.is_running());
    }
}
