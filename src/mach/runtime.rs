use super::{Flow, Program, ProgramState};
use crate::error;
use crate::lang::Error;
use log::{debug, trace, warn};
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// Statements executed per call to [`Runtime::execute`] by [`Runtime::run`].
pub const CYCLES_PER_SLICE: usize = 5000;

/// ## Events for the user interface

#[derive(Debug, PartialEq)]
pub enum Event {
    /// The program has halted; further calls keep returning this.
    Stopped,
    /// The cycle budget ran out with the program still running.
    Running,
    /// One line of output, newline included.
    Print(String),
    /// The run was aborted. Subsequent calls return `Stopped`.
    Error(Error),
}

/// ## Fetch-execute loop over one program

pub struct Runtime {
    program: Rc<Program>,
    state: ProgramState,
    interrupted: bool,
}

impl Runtime {
    pub fn new(program: Program) -> Runtime {
        let program = Rc::new(program);
        Runtime {
            state: ProgramState::new(Rc::clone(&program)),
            program,
            interrupted: false,
        }
    }

    /// Lexes, parses and builds `source`, reporting the first
    /// lex or parse error before anything runs.
    pub fn compile<I, S>(source: I) -> Result<Runtime>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(Runtime::new(Program::compile(source)?))
    }

    pub fn state(&self) -> &ProgramState {
        &self.state
    }

    /// Asks a running program to stop before its next statement.
    pub fn interrupt(&mut self) {
        if self.state.is_running() {
            self.interrupted = true;
        }
    }

    /// Executes at most `cycles` statements.
    pub fn execute(&mut self, cycles: usize) -> Event {
        for _ in 0..cycles {
            if !self.state.is_running() {
                return Event::Stopped;
            }
            let pc = self.state.pc();
            if self.interrupted {
                self.interrupted = false;
                self.state.stop();
                warn!("interrupted at statement {}", pc);
                return Event::Error(self.locate(error!(Interrupted), pc));
            }
            let statement = match self.program.get(pc) {
                Some(statement) => statement,
                None => {
                    self.state.stop();
                    return Event::Stopped;
                }
            };
            trace!("{:>5} {}", pc, statement);
            match self.state.execute(statement) {
                Ok(Flow::Next) => self.state.advance(),
                Ok(Flow::Print(val)) => {
                    self.state.advance();
                    return Event::Print(format!("{}\n", val));
                }
                Ok(Flow::Jump(addr)) if addr == pc => self.state.advance(),
                Ok(Flow::Jump(addr)) => self.state.jump(addr),
                Ok(Flow::End) => {
                    debug!("END at statement {}", pc);
                    self.state.stop();
                }
                Err(e) => {
                    self.state.stop();
                    debug!("stopped by error at statement {}", pc);
                    return Event::Error(self.locate(e, pc));
                }
            }
        }
        if self.state.is_running() {
            Event::Running
        } else {
            Event::Stopped
        }
    }

    /// Runs to completion, collecting one string per output line.
    pub fn run(&mut self) -> Result<Vec<String>> {
        let mut output = vec![];
        loop {
            match self.execute(CYCLES_PER_SLICE) {
                Event::Stopped => return Ok(output),
                Event::Running => {}
                Event::Print(mut s) => {
                    s.pop();
                    output.push(s);
                }
                Event::Error(e) => return Err(e),
            }
        }
    }

    fn locate(&self, error: Error, pc: usize) -> Error {
        if error.line_number().is_some() {
            return error;
        }
        error.in_line_number(self.program.line_number(pc))
    }
}
