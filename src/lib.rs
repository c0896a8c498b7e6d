//! # bf-vm
//!
//! A bounded virtual machine for the eight-instruction tape language,
//! with a single-step observer for debuggers.
//!
//! ```
//! use bfvm::mach::{Config, Runtime};
//!
//! let runtime = Runtime::new(Config::default());
//! let out = runtime.run(b"++++++++[>++++++++<-]>+.", b"", None).unwrap();
//! assert_eq!(out, b"A");
//! ```
//!
//! Programs are validated before anything runs: an unmatched bracket is
//! reported without touching the tape. Every run gets a fresh tape and
//! either returns all of its output or an [`Error`](lang::Error).
//!
//! The `bfvm` binary runs a program file and can single-step it
//! interactively with `--step`.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

pub mod lang;
pub mod log;
pub mod mach;

pub use lang::{Error, ErrorCode};
pub use mach::{run, Config, Observer, Runtime};
