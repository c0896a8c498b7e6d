use super::{Address, Stack};
use crate::error;
use crate::lang::{lex, Error, ErrorCode, Instruction};

type Result<T> = std::result::Result<T, Error>;

/// Default limit on pending `[` while linking.
pub const MAX_DEPTH: usize = 4096;

const UNLINKED: Address = Address::max_value();

/// ## Bracket jump table
///
/// Maps every `[` to its matching `]` and every `]` back to its `[`.
/// Only [`link`] builds one, and only for a fully balanced program.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumpTable {
    dest: Vec<Address>,
}

impl JumpTable {
    fn with_len(len: usize) -> Result<JumpTable> {
        let mut dest: Vec<Address> = Vec::new();
        if dest.try_reserve_exact(len).is_err() {
            return Err(error!(JumpTableAllocFailed));
        }
        dest.resize(len, UNLINKED);
        Ok(JumpTable { dest })
    }

    /// Matching bracket for the bracket at `addr`.
    pub fn get(&self, addr: Address) -> Option<Address> {
        match self.dest.get(addr) {
            Some(&dest) if dest != UNLINKED => Some(dest),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.dest.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dest.is_empty()
    }

    /// `(open, close)` pairs in order of their `[`.
    pub fn pairs(&self) -> impl Iterator<Item = (Address, Address)> + '_ {
        self.dest
            .iter()
            .enumerate()
            .filter(|(addr, dest)| **dest != UNLINKED && *addr < **dest)
            .map(|(addr, dest)| (addr, *dest))
    }
}

impl std::ops::Index<Address> for JumpTable {
    type Output = Address;
    fn index(&self, addr: Address) -> &Address {
        let dest = &self.dest[addr];
        debug_assert_ne!(*dest, UNLINKED, "no bracket at {}", addr);
        dest
    }
}

/// Resolve every bracket of `code` in one pass, or report the first
/// syntax error. Nothing of a failed link survives.
pub fn link(code: &[u8], max_depth: usize) -> Result<JumpTable> {
    let mut table = JumpTable::with_len(code.len())?;
    let mut open: Stack<Address> = Stack::new(max_depth, ErrorCode::BracketDepthExceeded);
    for (addr, instruction) in lex(code) {
        match instruction {
            Instruction::Open => {
                if let Err(e) = open.push(addr) {
                    return Err(e.at_ip(addr));
                }
            }
            Instruction::Close => match open.pop() {
                Some(start) => {
                    table.dest[start] = addr;
                    table.dest[addr] = start;
                }
                None => return Err(error!(UnmatchedClose, addr)),
            },
            _ => {}
        }
    }
    match open.last() {
        Some(&addr) => Err(error!(UnmatchedOpen, addr)),
        None => Ok(table),
    }
}
