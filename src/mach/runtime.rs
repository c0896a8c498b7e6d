use super::debug::Observer;
use super::io::{Eof, Input, Output};
use super::link::MAX_DEPTH;
use super::{Address, Program, Tape};
use crate::lang::{is_clear_idiom, run_length, Error, Instruction};
use crate::{debug, error, info};
use std::cell::Cell;

type Result<T> = std::result::Result<T, Error>;

/// ## Engine configuration

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of tape cells.
    pub tape_size: usize,
    /// Most output bytes a run may produce.
    pub output_max: usize,
    /// Most `[` that may be open at once.
    pub max_depth: usize,
    pub eof: Eof,
    /// Call the observer before every instruction.
    pub single_step: bool,
    /// Fold runs of `+ - > <` and rewrite `[-]` and `[+]` to a clear.
    pub optimize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tape_size: 30_000,
            output_max: 65_536,
            max_depth: MAX_DEPTH,
            eof: Eof::Zero,
            single_step: false,
            optimize: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.tape_size == 0 {
            return Err(error!(InvalidArguments; "TAPE SIZE IS ZERO"));
        }
        if self.output_max == 0 {
            return Err(error!(InvalidArguments; "OUTPUT SIZE IS ZERO"));
        }
        if self.max_depth == 0 {
            return Err(error!(InvalidArguments; "MAX DEPTH IS ZERO"));
        }
        Ok(())
    }
}

/// ## Virtual machine
///
/// Each [`Runtime::run`] links the program, builds a fresh tape, executes
/// to completion and returns the output. Nothing carries over between runs,
/// and nothing but the complete output is returned.

#[derive(Debug, Default)]
pub struct Runtime {
    config: Config,
    running: Cell<bool>,
}

struct Running<'a>(&'a Cell<bool>);

impl<'a> Running<'a> {
    fn enter(running: &'a Cell<bool>) -> Result<Running<'a>> {
        if running.replace(true) {
            return Err(error!(InvalidArguments; "NESTED RUN"));
        }
        Ok(Running(running))
    }
}

impl Drop for Running<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        Runtime {
            config,
            running: Cell::new(false),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(
        &self,
        code: &[u8],
        input: &[u8],
        observer: Option<&mut dyn Observer>,
    ) -> Result<Vec<u8>> {
        self.config.validate()?;
        let _running = Running::enter(&self.running)?;
        let program = Program::compile(code, self.config.max_depth)?;
        let mut machine = Machine::new(&program, input, &self.config)?;
        debug!(
            "run: {} bytes of code, {} of input, tape {}",
            code.len(),
            input.len(),
            self.config.tape_size
        );
        machine.execute(observer)?;
        debug!(
            "run finished: {} steps, {} bytes of output",
            machine.steps,
            machine.output.len()
        );
        Ok(machine.output.into_bytes())
    }
}

/// Run `program` once and copy its output into `output`.
///
/// `output.len()` is the output limit. On success the output is followed by
/// a 0 byte when there is room, and the output length is returned. On
/// failure `output` is untouched.
pub fn run(
    program: &[u8],
    input: &[u8],
    output: &mut [u8],
    tape_size: usize,
    observer: Option<&mut dyn Observer>,
    single_step: bool,
) -> Result<usize> {
    let config = Config {
        tape_size,
        output_max: output.len(),
        single_step,
        ..Config::default()
    };
    let bytes = Runtime::new(config).run(program, input, observer)?;
    output[..bytes.len()].copy_from_slice(&bytes);
    if let Some(end) = output.get_mut(bytes.len()) {
        *end = 0;
    }
    Ok(bytes.len())
}

/// Execution state of one run.
pub(crate) struct Machine<'a> {
    program: &'a Program<'a>,
    pub(crate) tape: Tape,
    input: Input<'a>,
    pub(crate) output: Output,
    pub(crate) ip: Address,
    pub(crate) steps: u64,
    single_step: bool,
    optimize: bool,
}

impl<'a> Machine<'a> {
    pub(crate) fn new(
        program: &'a Program<'a>,
        input: &'a [u8],
        config: &Config,
    ) -> Result<Machine<'a>> {
        Ok(Machine {
            program,
            tape: Tape::new(config.tape_size)?,
            input: Input::new(input, config.eof),
            output: Output::new(config.output_max),
            ip: 0,
            steps: 0,
            single_step: config.single_step,
            optimize: config.optimize,
        })
    }

    fn halt(&self, ip: Address) -> Error {
        info!("halted by observer at {} (dp {})", ip, self.tape.cursor());
        error!(DebugHaltRequested, ip, self.tape.cursor())
    }

    fn out_of_bounds(&self, ip: Address) -> Error {
        error!(OutOfBounds, ip, self.tape.cursor())
    }

    pub(crate) fn execute(&mut self, observer: Option<&mut dyn Observer>) -> Result<()> {
        let mut observer = match observer {
            Some(o) if self.single_step => Some(o),
            _ => None,
        };
        let fold = self.optimize
            && match observer.as_ref() {
                Some(o) => !o.every_step(),
                None => true,
            };
        let code = self.program.code();
        let mut observed = false;
        while self.ip < code.len() {
            let ip = self.ip;
            if let Some(o) = observer.as_mut() {
                if !observed && o.observe(ip, self.tape.cursor(), self.tape.get()) {
                    return Err(self.halt(ip));
                }
            }
            observed = false;
            let instruction = match Instruction::from_byte(code[ip]) {
                Some(i) => i,
                None => {
                    self.ip += 1;
                    continue;
                }
            };
            let count = if fold && instruction.is_foldable() {
                run_length(code, ip)
            } else {
                1
            };
            match instruction {
                Instruction::Right => {
                    if let Err(done) = self.tape.right(count) {
                        self.steps += done as u64;
                        return Err(self.out_of_bounds(ip + done));
                    }
                }
                Instruction::Left => {
                    if let Err(done) = self.tape.left(count) {
                        self.steps += done as u64;
                        return Err(self.out_of_bounds(ip + done));
                    }
                }
                Instruction::Inc => self.tape.add(count),
                Instruction::Dec => self.tape.sub(count),
                Instruction::Write => {
                    if let Err(e) = self.output.push(self.tape.get()) {
                        return Err(e.at_ip(ip).at_dp(self.tape.cursor()));
                    }
                }
                Instruction::Read => {
                    let cell = self.input.read(self.tape.get());
                    self.tape.set(cell);
                }
                Instruction::Open => {
                    if self.tape.get() == 0 {
                        self.ip = self.program.jump(ip) + 1;
                        self.steps += 1;
                        continue;
                    }
                    if self.optimize && is_clear_idiom(code, ip) {
                        self.tape.set(0);
                        self.ip = ip + 3;
                        self.steps += 1;
                        if let Some(o) = observer.as_mut() {
                            if o.observe(self.ip, self.tape.cursor(), 0) {
                                return Err(self.halt(self.ip));
                            }
                            observed = true;
                        }
                        continue;
                    }
                }
                Instruction::Close => {
                    if self.tape.get() != 0 {
                        self.ip = self.program.jump(ip) + 1;
                        self.steps += 1;
                        continue;
                    }
                }
            }
            self.ip += count;
            self.steps += count as u64;
        }
        Ok(())
    }
}
