/*!
# Rust Language Module

This Rust module provides lexical analysis and parsing of the Grin language.

*/

/// 1-based source line, when known.
pub type LineNumber = Option<usize>;
/// 1-based character column, when known.
pub type Column = Option<usize>;

mod error;
mod lex;
mod line;
mod parse;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use error::ErrorKind;
pub use lex::lex;
pub use lex::Lexer;
pub use line::Line;
pub use parse::parse;
pub use parse::Parse;

#[cfg(test)]
mod tests;
