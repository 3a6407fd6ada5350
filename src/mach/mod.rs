/*!
## Rust Machine Module

This Rust module builds Grin programs from parsed lines and runs them.

*/

/// Index of a statement in a [`Program`].
pub type Address = usize;

mod operation;
mod program;
mod runtime;
mod stack;
mod state;
mod statement;
mod val;
mod var;

pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use runtime::CYCLES_PER_SLICE;
pub use stack::Stack;
pub use state::Flow;
pub use state::ProgramState;
pub use statement::Condition;
pub use statement::Jump;
pub use statement::Statement;
pub use val::Val;
pub use var::Var;
