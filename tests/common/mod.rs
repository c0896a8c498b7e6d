#![allow(dead_code)]
use bfvm::mach::{Config, Runtime};
use bfvm::Error;

pub fn exec(code: &str) -> Result<Vec<u8>, Error> {
    exec_input(code, "")
}

pub fn exec_input(code: &str, input: &str) -> Result<Vec<u8>, Error> {
    Runtime::default().run(code.as_bytes(), input.as_bytes(), None)
}

pub fn exec_with(code: &str, input: &str, config: Config) -> Result<Vec<u8>, Error> {
    Runtime::new(config).run(code.as_bytes(), input.as_bytes(), None)
}

pub fn tape(tape_size: usize) -> Config {
    Config {
        tape_size,
        ..Config::default()
    }
}

pub fn text(code: &str) -> String {
    match exec(code) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).to_string(),
        Err(error) => format!("{}", error),
    }
}
