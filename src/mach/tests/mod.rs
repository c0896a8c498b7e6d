use super::runtime::Machine;
use super::{Address, Config, Program};
use crate::lang::{Error, ErrorCode};

mod fold_test;

#[derive(Debug, PartialEq)]
struct Snapshot {
    result: Result<(), Error>,
    cells: Vec<u8>,
    cursor: Address,
    output: Vec<u8>,
}

fn config(tape_size: usize, optimize: bool) -> Config {
    Config {
        tape_size,
        optimize,
        ..Config::default()
    }
}

fn snapshot(code: &[u8], input: &[u8], config: &Config) -> Snapshot {
    let program = Program::compile(code, config.max_depth).unwrap();
    let mut machine = Machine::new(&program, input, config).unwrap();
    let result = machine.execute(None);
    Snapshot {
        result,
        cells: machine.tape.cells().to_vec(),
        cursor: machine.tape.cursor(),
        output: machine.output.into_bytes(),
    }
}

#[test]
fn test_transfer_loop_leaves_tape() {
    let s = snapshot(b"++[>+<-]", b"", &config(10, true));
    assert_eq!(s.result, Ok(()));
    assert_eq!(s.cells, [0, 2, 0, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(s.cursor, 0);
    assert!(s.output.is_empty());
}

#[test]
fn test_out_of_bounds_leaves_cursor_on_boundary() {
    let s = snapshot(b">>>>>>", b"", &config(4, true));
    let e = s.result.unwrap_err();
    assert_eq!(e.code(), ErrorCode::OutOfBounds);
    assert_eq!(e.ip(), Some(3));
    assert_eq!(e.dp(), Some(3));
    assert_eq!(s.cursor, 3);
}
