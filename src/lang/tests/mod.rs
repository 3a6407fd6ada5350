use super::token::*;
use super::*;

mod lex_test;
