use super::Address;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Memory tape
///
/// A fixed number of byte cells with one cursor (the data pointer).
/// Cell arithmetic wraps; the cursor never leaves `0..len`.
///
/// Moves take a count so a folded run is one bounds check. A move that
/// would cross an end stops the cursor on the last cell it could reach and
/// returns `Err(done)`, where `done` is how many single steps succeeded.

#[derive(Debug)]
pub struct Tape {
    cells: Vec<u8>,
    cursor: Address,
}

impl Tape {
    pub fn new(len: usize) -> Result<Tape> {
        if len == 0 {
            return Err(error!(InvalidArguments; "TAPE SIZE IS ZERO"));
        }
        let mut cells: Vec<u8> = Vec::new();
        if cells.try_reserve_exact(len).is_err() {
            return Err(error!(TapeAllocFailed));
        }
        cells.resize(len, 0);
        Ok(Tape { cells, cursor: 0 })
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cursor(&self) -> Address {
        self.cursor
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn get(&self) -> u8 {
        self.cells[self.cursor]
    }

    pub fn set(&mut self, val: u8) {
        self.cells[self.cursor] = val;
    }

    pub fn add(&mut self, count: usize) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_add(count as u8);
    }

    pub fn sub(&mut self, count: usize) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_sub(count as u8);
    }

    pub fn right(&mut self, count: usize) -> std::result::Result<(), usize> {
        let room = self.cells.len() - 1 - self.cursor;
        if count > room {
            self.cursor += room;
            return Err(room);
        }
        self.cursor += count;
        Ok(())
    }

    pub fn left(&mut self, count: usize) -> std::result::Result<(), usize> {
        let room = self.cursor;
        if count > room {
            self.cursor = 0;
            return Err(room);
        }
        self.cursor -= count;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping_cells() {
        let mut t = Tape::new(4).unwrap();
        t.sub(1);
        assert_eq!(t.get(), 255);
        t.add(2);
        assert_eq!(t.get(), 1);
        t.add(256 * 3 + 5);
        assert_eq!(t.get(), 6);
        t.sub(300);
        assert_eq!(t.get(), 6u8.wrapping_sub(44));
    }

    #[test]
    fn test_moves_stop_at_the_boundary() {
        let mut t = Tape::new(10).unwrap();
        assert_eq!(t.right(8), Ok(()));
        assert_eq!(t.cursor(), 8);
        assert_eq!(t.right(3), Err(1));
        assert_eq!(t.cursor(), 9);
        assert_eq!(t.left(4), Ok(()));
        assert_eq!(t.left(7), Err(5));
        assert_eq!(t.cursor(), 0);
        assert_eq!(t.left(1), Err(0));
    }

    #[test]
    fn test_huge_tape_fails_to_allocate() {
        let e = Tape::new(usize::max_value()).unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::TapeAllocFailed);
    }
}
