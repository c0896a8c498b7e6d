use super::link::{link, JumpTable};
use super::Address;
use crate::lang::{Error, Instruction};

/// ## A validated program
///
/// Program text plus its jump table. Holding a `Program` proves every
/// bracket is matched.

#[derive(Debug, Clone)]
pub struct Program<'a> {
    code: &'a [u8],
    jumps: JumpTable,
}

impl<'a> Program<'a> {
    pub fn compile(code: &'a [u8], max_depth: usize) -> Result<Program<'a>, Error> {
        let jumps = link(code, max_depth)?;
        Ok(Program { code, jumps })
    }
    pub fn code(&self) -> &'a [u8] {
        self.code
    }
    pub fn len(&self) -> usize {
        self.code.len()
    }
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
    pub fn byte(&self, addr: Address) -> u8 {
        self.code[addr]
    }
    pub fn instruction(&self, addr: Address) -> Option<Instruction> {
        self.code.get(addr).and_then(|b| Instruction::from_byte(*b))
    }
    /// Matching bracket for the bracket at `addr`.
    pub fn jump(&self, addr: Address) -> Address {
        self.jumps[addr]
    }
}
