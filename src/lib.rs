//! # Grin
//!
//! A small line-oriented language with variables, arithmetic,
//! labels, relative jumps and subroutines.
//!
//! Each program line holds one statement, optionally preceded by a
//! label. A line containing only `.` ends the program.
//! ```
//! let output = grin::run(vec![
//!     "LET A 10",
//!     "LET B 20",
//!     "ADD A B",
//!     "PRINT A",
//!     ".",
//! ]);
//! assert_eq!(output, Ok(vec!["30".to_string()]));
//! ```
//!
//! Run the `grin` executable with a file name, or pipe a program
//! into it. Set `RUST_LOG=trace` to see each statement as it runs.

pub mod lang;
pub mod mach;
pub mod term;

/// Builds and runs a program, returning its output lines or the first error.
pub fn run<I, S>(lines: I) -> Result<Vec<String>, lang::Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    mach::Runtime::compile(lines)?.run()
}
