mod common;
use bfvm::mach::Config;
use common::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PIECES: &[&str] = &["+", "-", ">", "<", ".", "[-]", "[+]", "x"];

fn random_program(rng: &mut StdRng) -> String {
    let mut code = String::new();
    for _ in 0..rng.gen_range(1..60) {
        let piece = PIECES[rng.gen_range(0..PIECES.len())];
        let repeat = rng.gen_range(1..40);
        code.push_str(&piece.repeat(repeat));
    }
    code
}

fn configs(tape_size: usize) -> (Config, Config) {
    let folded = Config {
        tape_size,
        output_max: 1 << 16,
        ..Config::default()
    };
    let single = Config {
        optimize: false,
        ..folded.clone()
    };
    (folded, single)
}

#[test]
fn test_random_programs_fold_transparently() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..500 {
        let code = random_program(&mut rng);
        let tape_size = rng.gen_range(1..48);
        let (folded, single) = configs(tape_size);
        assert_eq!(
            exec_with(&code, "", folded),
            exec_with(&code, "", single),
            "{}",
            code
        );
    }
}

#[test]
fn test_random_clear_starts() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let start: u8 = rng.gen_range(1..=255);
        let code = "+".repeat(start as usize) + "[-]>" + &"-".repeat(start as usize) + "[+]<.>.";
        let (folded, single) = configs(2);
        let out = exec_with(&code, "", folded).unwrap();
        assert_eq!(out, [0, 0]);
        assert_eq!(exec_with(&code, "", single).unwrap(), out);
    }
}

#[test]
fn test_every_right_run_to_the_tape_size() {
    let tape_size = 100;
    for n in 1..=tape_size {
        let code = ">".repeat(n) + "+.";
        let (folded, single) = configs(tape_size);
        let result = exec_with(&code, "", folded);
        assert_eq!(result, exec_with(&code, "", single));
        if n < tape_size {
            assert_eq!(result, Ok(vec![1]));
        } else {
            let e = result.unwrap_err();
            assert_eq!(e.ip(), Some(tape_size - 1));
            assert_eq!(e.dp(), Some(tape_size - 1));
        }
    }
}
