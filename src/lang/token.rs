/// ## The instruction set
///
/// Eight single-byte instructions. Every other byte is commentary and
/// executes as a no-op.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `>` move the data pointer right.
    Right,
    /// `<` move the data pointer left.
    Left,
    /// `+` increment the current cell, wrapping.
    Inc,
    /// `-` decrement the current cell, wrapping.
    Dec,
    /// `.` append the current cell to the output.
    Write,
    /// `,` read one input byte into the current cell.
    Read,
    /// `[` skip past the matching `]` if the current cell is zero.
    Open,
    /// `]` return to just after the matching `[` if the current cell is non-zero.
    Close,
}

impl Instruction {
    pub fn from_byte(byte: u8) -> Option<Instruction> {
        use Instruction::*;
        match byte {
            b'>' => Some(Right),
            b'<' => Some(Left),
            b'+' => Some(Inc),
            b'-' => Some(Dec),
            b'.' => Some(Write),
            b',' => Some(Read),
            b'[' => Some(Open),
            b']' => Some(Close),
            _ => None,
        }
    }

    pub fn to_byte(self) -> u8 {
        use Instruction::*;
        match self {
            Right => b'>',
            Left => b'<',
            Inc => b'+',
            Dec => b'-',
            Write => b'.',
            Read => b',',
            Open => b'[',
            Close => b']',
        }
    }

    /// Instructions whose maximal runs are folded into one bulk update.
    pub fn is_foldable(self) -> bool {
        use Instruction::*;
        match self {
            Right | Left | Inc | Dec => true,
            _ => false,
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.to_byte() as char)
    }
}
