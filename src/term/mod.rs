extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::Options;
use ansi_term::Style;
use bfvm::mach::{Address, Deadline, Interrupt, Observer, Runtime};
use bfvm::{info, warn};
use chrono::Duration;
use linefeed::{DefaultTerminal, Interface, ReadResult, Signal};
use std::io::Write;

/// Run the program and report the outcome. Returns the exit status.
pub fn main(code: &[u8], options: &Options) -> i32 {
    let mut config = options.config.clone();
    let deadline = options
        .timeout
        .map(|ms| Deadline::after(Duration::milliseconds(ms)));
    let result = if options.step {
        config.single_step = true;
        let mut stepper = match Stepper::new(code, deadline) {
            Ok(stepper) => stepper,
            Err(error) => {
                eprintln!("{}", error);
                return 1;
            }
        };
        Runtime::new(config).run(code, &options.input, Some(&mut stepper))
    } else if let Some(mut deadline) = deadline {
        config.single_step = true;
        Runtime::new(config).run(code, &options.input, Some(&mut deadline))
    } else {
        Runtime::new(config).run(code, &options.input, None)
    };
    match result {
        Ok(output) => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            if let Err(error) = lock.write_all(&output).and_then(|_| lock.flush()) {
                eprintln!("{}", error);
                return 1;
            }
            info!("{} bytes of output", output.len());
            0
        }
        Err(error) => {
            eprintln!("{}", Style::new().bold().paint(error.to_string()));
            if let (true, Some(ip)) = (error.is_syntax(), error.ip()) {
                eprintln!("{}", decorate_listing(code, ip));
            }
            1
        }
    }
}

/// Interactive observer: prompts before each instruction until told to continue.
struct Stepper<'a> {
    code: &'a [u8],
    interface: Interface<DefaultTerminal>,
    interrupt: Interrupt,
    deadline: Option<Deadline>,
    continuing: bool,
}

impl<'a> Stepper<'a> {
    fn new(code: &'a [u8], deadline: Option<Deadline>) -> std::io::Result<Stepper<'a>> {
        let interrupt = Interrupt::new();
        let flag = interrupt.flag();
        ctrlc::set_handler(move || {
            flag.store(true, std::sync::atomic::Ordering::SeqCst);
        })
        .expect("Error setting Ctrl-C handler");
        let interface = Interface::new("bfvm")?;
        interface.set_report_signal(Signal::Interrupt, true);
        interface.set_prompt("> ")?;
        Ok(Stepper {
            code,
            interface,
            interrupt,
            deadline,
            continuing: false,
        })
    }

    fn describe(&self, ip: Address, dp: Address, cell: u8) -> String {
        let at = match self.code.get(ip) {
            Some(byte) => format!("'{}'", printable(*byte)),
            None => "end".to_string(),
        };
        format!("ip {} {}  dp {}  cell {}", ip, at, dp, cell)
    }

    fn prompt(&mut self, ip: Address, dp: Address, cell: u8) -> std::io::Result<bool> {
        self.interface
            .write_fmt(format_args!("{}\n", self.describe(ip, dp, cell)))?;
        loop {
            let line = match self.interface.read_line()? {
                ReadResult::Input(line) => line,
                ReadResult::Signal(_) | ReadResult::Eof => return Ok(true),
            };
            let command = line.trim();
            if !command.is_empty() {
                self.interface.add_history_unique(command.to_string());
            }
            match command {
                "" | "s" => return Ok(false),
                "c" => {
                    self.continuing = true;
                    return Ok(false);
                }
                "q" => return Ok(true),
                "l" => self
                    .interface
                    .write_fmt(format_args!("{}\n", decorate_listing(self.code, ip)))?,
                _ => self.interface.write_fmt(format_args!(
                    "ENTER or s: step, c: continue, l: list, q: quit\n"
                ))?,
            }
        }
    }
}

impl Observer for Stepper<'_> {
    fn observe(&mut self, ip: Address, dp: Address, cell: u8) -> bool {
        if let Some(deadline) = self.deadline.as_mut() {
            if deadline.observe(ip, dp, cell) {
                warn!("timeout at {}", ip);
                return true;
            }
        }
        if self.interrupt.take() {
            self.continuing = false;
        }
        if self.continuing {
            return false;
        }
        match self.prompt(ip, dp, cell) {
            Ok(halt) => halt,
            Err(error) => {
                warn!("{}", error);
                true
            }
        }
    }
}

fn printable(byte: u8) -> char {
    if byte.is_ascii_graphic() {
        byte as char
    } else {
        ' '
    }
}

/// The code around `ip` on one line with the byte at `ip` underlined.
fn decorate_listing(code: &[u8], ip: Address) -> String {
    const CONTEXT: usize = 32;
    let start = ip.saturating_sub(CONTEXT);
    let end = std::cmp::min(code.len(), ip + CONTEXT + 1);
    let style = Style::new().underline();
    let mut out = String::new();
    for (addr, byte) in code[start..end].iter().enumerate() {
        let ch = printable(*byte);
        if start + addr == ip {
            out.push_str(&style.paint(ch.to_string()).to_string());
        } else {
            out.push(ch);
        }
    }
    if ip >= code.len() {
        out.push_str(&style.paint(" ").to_string());
    }
    out
}
