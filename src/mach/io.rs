use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// What `,` stores once the input is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eof {
    /// Store 0.
    Zero,
    /// Leave the cell unchanged.
    Unchanged,
}

impl Default for Eof {
    fn default() -> Self {
        Eof::Zero
    }
}

impl std::str::FromStr for Eof {
    type Err = Error;
    fn from_str(s: &str) -> Result<Eof> {
        match s {
            "zero" | "0" => Ok(Eof::Zero),
            "unchanged" | "keep" => Ok(Eof::Unchanged),
            _ => Err(error!(InvalidArguments; "EOF POLICY MUST BE zero OR unchanged")),
        }
    }
}

/// ## Read-only input with a forward cursor

#[derive(Debug)]
pub struct Input<'a> {
    bytes: &'a [u8],
    cursor: usize,
    eof: Eof,
}

impl<'a> Input<'a> {
    pub fn new(bytes: &'a [u8], eof: Eof) -> Input<'a> {
        Input {
            bytes,
            cursor: 0,
            eof,
        }
    }

    /// The next byte, or what the EOF policy makes of `cell`.
    pub fn read(&mut self, cell: u8) -> u8 {
        match self.bytes.get(self.cursor) {
            Some(byte) => {
                self.cursor += 1;
                *byte
            }
            None => match self.eof {
                Eof::Zero => 0,
                Eof::Unchanged => cell,
            },
        }
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.cursor
    }
}

/// ## Append-only output with a hard maximum

#[derive(Debug)]
pub struct Output {
    bytes: Vec<u8>,
    max_len: usize,
}

impl Output {
    /// Up-front reservation; larger limits grow on demand.
    const RESERVE: usize = 4096;

    pub fn new(max_len: usize) -> Output {
        Output {
            bytes: Vec::with_capacity(std::cmp::min(max_len, Output::RESERVE)),
            max_len,
        }
    }

    pub fn push(&mut self, byte: u8) -> Result<()> {
        if self.bytes.len() >= self.max_len {
            return Err(error!(OutputOverflow));
        }
        self.bytes.push(byte);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_eof_policies() {
        let mut i = Input::new(b"A", Eof::Zero);
        assert_eq!(i.read(9), b'A');
        assert_eq!(i.remaining(), 0);
        assert_eq!(i.read(9), 0);
        assert_eq!(i.read(9), 0);
        let mut i = Input::new(b"", Eof::Unchanged);
        assert_eq!(i.read(9), 9);
    }

    #[test]
    fn test_output_limit() {
        let mut o = Output::new(2);
        assert!(o.push(1).is_ok());
        assert!(o.push(2).is_ok());
        let e = o.push(3).unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::OutputOverflow);
        assert_eq!(o.into_bytes(), vec![1, 2]);
    }

    #[test]
    fn test_output_is_reserved_up_front() {
        assert!(Output::new(16).into_bytes().capacity() >= 16);
        let mut o = Output::new(usize::MAX);
        assert!(o.push(7).is_ok());
        assert!(o.into_bytes().capacity() >= Output::RESERVE);
    }

    #[test]
    fn test_eof_from_str() {
        assert_eq!("zero".parse::<Eof>().unwrap(), Eof::Zero);
        assert_eq!("unchanged".parse::<Eof>().unwrap(), Eof::Unchanged);
        assert!("never".parse::<Eof>().is_err());
    }
}
