//! # bfvm
//!
//! Run a tape-language program file.
//!
//! ```text
//! bfvm <program> [OPTIONS]
//!
//!   -i, --input <text>        program input
//!   -f, --input-file <path>   program input from a file
//!   -t, --tape <cells>        tape size (default 30000)
//!   -o, --output-max <bytes>  output limit (default 65536)
//!   -d, --max-depth <n>       bracket nesting limit (default 4096)
//!       --eof zero|unchanged  what `,` stores at end of input
//!       --no-optimize         no run folding or clear rewrite
//!   -s, --step                interactive single stepping
//!       --timeout <ms>        halt after this much wall-clock time
//!   -v                        more logging, repeatable
//! ```

mod term;

use bfvm::log::{self, Level};
use bfvm::mach::Config;
use bfvm::{info, warn};
use std::env;
use std::fs;
use std::process;

struct Options {
    program: String,
    input: Vec<u8>,
    config: Config,
    step: bool,
    timeout: Option<i64>,
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage(&args[0]);
        process::exit(if args.len() < 2 { 2 } else { 0 });
    }
    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            print_usage(&args[0]);
            process::exit(2);
        }
    };
    let code = match fs::read(&options.program) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}: {}", options.program, error);
            process::exit(2);
        }
    };
    info!("loaded {} ({} bytes)", options.program, code.len());
    process::exit(term::main(&code, &options));
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut program = None;
    let mut input = vec![];
    let mut config = Config::default();
    let mut step = false;
    let mut timeout = None;
    let mut verbosity = 0;

    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--input" | "-i" => input = value(args, &mut i)?.as_bytes().to_vec(),
            "--input-file" | "-f" => {
                let path = value(args, &mut i)?;
                input = fs::read(path).map_err(|e| format!("{}: {}", path, e))?;
            }
            "--tape" | "-t" => config.tape_size = number(arg, value(args, &mut i)?)?,
            "--output-max" | "-o" => config.output_max = number(arg, value(args, &mut i)?)?,
            "--max-depth" | "-d" => config.max_depth = number(arg, value(args, &mut i)?)?,
            "--eof" => {
                config.eof = value(args, &mut i)?
                    .parse()
                    .map_err(|e| format!("{}", e))?
            }
            "--no-optimize" => config.optimize = false,
            "--step" | "-s" => step = true,
            "--timeout" => timeout = Some(millis(arg, value(args, &mut i)?)?),
            "-v" => verbosity += 1,
            "-vv" => verbosity += 2,
            _ if arg.starts_with('-') => return Err(format!("unknown option {}", arg)),
            _ => {
                if program.is_some() {
                    return Err(format!("unexpected argument {}", arg));
                }
                program = Some(arg.to_string());
            }
        }
        i += 1;
    }

    log::set_level(match verbosity {
        0 => Level::Warn,
        1 => Level::Info,
        _ => Level::Debug,
    });
    if let Err(error) = config.validate() {
        return Err(error.to_string());
    }
    if step && timeout.is_some() {
        warn!("--timeout also applies while stepping");
    }
    match program {
        Some(program) => Ok(Options {
            program,
            input,
            config,
            step,
            timeout,
        }),
        None => Err("no program file".to_string()),
    }
}

/// The argument after the option at `args[*i]`.
fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, String> {
    let option = &args[*i];
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value),
        None => Err(format!("{} requires an argument", option)),
    }
}

fn number(arg: &str, value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{} expects a number, got '{}'", arg, value))
}

fn millis(arg: &str, value: &str) -> Result<i64, String> {
    value
        .parse::<i64>()
        .ok()
        .filter(|ms| *ms >= 0)
        .ok_or_else(|| {
            format!(
                "{} expects 0 to {} milliseconds, got '{}'",
                arg,
                i64::MAX,
                value
            )
        })
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <program> [OPTIONS]", program);
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -i, --input <text>        program input");
    eprintln!("  -f, --input-file <path>   program input from a file");
    eprintln!("  -t, --tape <cells>        tape size (default 30000)");
    eprintln!("  -o, --output-max <bytes>  output limit (default 65536)");
    eprintln!("  -d, --max-depth <n>       bracket nesting limit (default 4096)");
    eprintln!("      --eof zero|unchanged  what ',' stores at end of input");
    eprintln!("      --no-optimize         no run folding or clear rewrite");
    eprintln!("  -s, --step                interactive single stepping");
    eprintln!("      --timeout <ms>        halt after this much wall-clock time");
    eprintln!("  -v                        more logging, repeatable");
}
