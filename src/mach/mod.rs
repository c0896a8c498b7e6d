/*!
## Rust Machine Module

This Rust module is the validator and virtual machine for the tape language.

*/

pub type Address = usize;

mod debug;
mod io;
mod link;
mod program;
mod runtime;
mod stack;
mod tape;

pub use debug::{Deadline, Fuel, Interrupt, Observer};
pub use io::{Eof, Input, Output};
pub use link::{link, JumpTable, MAX_DEPTH};
pub use program::Program;
pub use runtime::{run, Config, Runtime};
pub use stack::Stack;
pub use tape::Tape;

#[cfg(test)]
mod tests;
