use super::Instruction;
use crate::mach::Address;

/// Iterate the instructions of `code` with their positions, skipping commentary.
pub fn lex(code: &[u8]) -> impl Iterator<Item = (Address, Instruction)> + '_ {
    code.iter()
        .enumerate()
        .filter_map(|(addr, byte)| Instruction::from_byte(*byte).map(|i| (addr, i)))
}

/// Length of the run of bytes identical to `code[ip]` starting at `ip`.
pub fn run_length(code: &[u8], ip: Address) -> usize {
    match code.get(ip) {
        Some(first) => code[ip..].iter().take_while(|b| *b == first).count(),
        None => 0,
    }
}

/// Recognizes `[-]` and `[+]` starting at `ip`.
pub fn is_clear_idiom(code: &[u8], ip: Address) -> bool {
    match code.get(ip..ip + 3) {
        Some([b'[', b'-', b']']) | Some([b'[', b'+', b']']) => true,
        _ => false,
    }
}
