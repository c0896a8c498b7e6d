use super::*;

fn assert_fold_matches_single_steps(code: &[u8], tape_size: usize) {
    let folded = snapshot(code, b"", &config(tape_size, true));
    let single = snapshot(code, b"", &config(tape_size, false));
    assert_eq!(
        folded,
        single,
        "{}",
        String::from_utf8_lossy(code)
    );
}

#[test]
fn test_every_run_length_to_the_tape_size() {
    let tape_size = 64;
    for n in 1..=tape_size {
        let right = vec![b'>'; n];
        assert_fold_matches_single_steps(&right, tape_size);

        let mut left = vec![b'>'; n / 2];
        left.extend(vec![b'<'; n]);
        assert_fold_matches_single_steps(&left, tape_size);

        let inc = vec![b'+'; n * 5];
        assert_fold_matches_single_steps(&inc, tape_size);

        let mut dec = vec![b'-'; n * 7];
        dec.push(b'.');
        assert_fold_matches_single_steps(&dec, tape_size);
    }
}

#[test]
fn test_runs_broken_by_commentary() {
    assert_fold_matches_single_steps(b">> >>x>>", 5);
    assert_fold_matches_single_steps(b"+++ +++.", 5);
}

#[test]
fn test_right_run_stops_at_last_cell() {
    let s = snapshot(b"+>>>>>>>>>>+", b"", &config(5, true));
    let e = s.result.unwrap_err();
    assert_eq!(e.code(), ErrorCode::OutOfBounds);
    assert_eq!(e.ip(), Some(5));
    assert_eq!(s.cursor, 4);
    assert_eq!(s.cells, [1, 0, 0, 0, 0]);
}

#[test]
fn test_left_run_stops_at_first_cell() {
    let s = snapshot(b">>><<<<<", b"", &config(5, true));
    let e = s.result.unwrap_err();
    assert_eq!(e.ip(), Some(6));
    assert_eq!(e.dp(), Some(0));
}

#[test]
fn test_clear_idiom_matches_loop() {
    for start in 1..=255usize {
        for idiom in &[&b"[-]"[..], &b"[+]"[..]] {
            let mut code = vec![b'+'; start];
            code.extend_from_slice(idiom);
            code.extend_from_slice(b"+++.");
            let fused = snapshot(&code, b"", &config(3, true));
            let looped = snapshot(&code, b"", &config(3, false));
            assert_eq!(fused, looped);
            assert_eq!(fused.output, [3]);
        }
    }
}
