use super::{Address, Statement};
use crate::lang::{parse, Error, Line};
use log::debug;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Statement and label tables
///
/// Built once from parsed lines and never modified afterwards.

#[derive(Debug, Default)]
pub struct Program {
    statements: Vec<Statement>,
    line_numbers: Vec<usize>,
    labels: HashMap<String, Address>,
}

impl Program {
    /// Lexes, parses and builds a program from source lines.
    pub fn compile<I, S>(source: I) -> Result<Program>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Program::build(parse(source))
    }

    /// Builds the tables from parser output. The first error aborts the build.
    pub fn build<I>(lines: I) -> Result<Program>
    where
        I: IntoIterator<Item = Result<Line>>,
    {
        let mut program = Program::default();
        for line in lines {
            program.push(&line?)?;
        }
        debug!(
            "built {} statements, {} labels",
            program.statements.len(),
            program.labels.len()
        );
        Ok(program)
    }

    fn push(&mut self, line: &Line) -> Result<()> {
        let statement = match Statement::from_line(line) {
            Ok(s) => s,
            Err(e) => return Err(e.in_line_number(Some(line.number()))),
        };
        if let Some(label) = line.label() {
            self.labels.insert(label.to_string(), self.statements.len());
        }
        self.statements.push(statement);
        self.line_numbers.push(line.number());
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn get(&self, addr: Address) -> Option<&Statement> {
        self.statements.get(addr)
    }

    pub fn label(&self, name: &str) -> Option<Address> {
        self.labels.get(name).copied()
    }

    /// Source line of the statement at `addr`, for error reports.
    pub fn line_number(&self, addr: Address) -> Option<usize> {
        self.line_numbers.get(addr).copied()
    }
}
