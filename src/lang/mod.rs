/*!
# Rust Language Module

This Rust module describes the eight-instruction tape language:
its instructions, the scanning helpers used by the validator and engine,
and the errors every stage reports.

*/

#[macro_use]
mod error;
mod lex;
mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::{is_clear_idiom, lex, run_length};
pub use token::Instruction;

#[cfg(test)]
mod tests;
