use super::Address;
use chrono::{DateTime, Duration, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ## Single-step observer
///
/// Called before each instruction while single-stepping with the
/// instruction pointer, the data pointer and the current cell.
/// Return `true` to halt the run with `DebugHaltRequested`.
///
/// The engine waits for every call to return and has no timeout of its own;
/// [`Fuel`], [`Deadline`] and [`Interrupt`] put limits at this layer.
/// Any `FnMut(Address, Address, u8) -> bool` closure is an observer.

pub trait Observer {
    fn observe(&mut self, ip: Address, dp: Address, cell: u8) -> bool;

    /// Whether runs of `+ - > <` must be observed one instruction at a time.
    /// When `false` the engine keeps folding and calls [`Observer::observe`]
    /// once before each folded run.
    fn every_step(&self) -> bool {
        true
    }
}

impl<F> Observer for F
where
    F: FnMut(Address, Address, u8) -> bool,
{
    fn observe(&mut self, ip: Address, dp: Address, cell: u8) -> bool {
        self(ip, dp, cell)
    }
}

/// Halts once `steps` instructions have run.
#[derive(Debug, Clone)]
pub struct Fuel {
    remaining: u64,
}

impl Fuel {
    pub fn new(steps: u64) -> Fuel {
        Fuel { remaining: steps }
    }
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

impl Observer for Fuel {
    fn observe(&mut self, _ip: Address, _dp: Address, _cell: u8) -> bool {
        if self.remaining == 0 {
            return true;
        }
        self.remaining -= 1;
        false
    }
}

/// Halts once the wall clock passes a deadline.
///
/// A deadline too far out to represent never expires.
#[derive(Debug, Clone)]
pub struct Deadline {
    at: Option<DateTime<Utc>>,
    calls: u32,
}

impl Deadline {
    /// Clock reads are amortized over this many calls.
    const CHECK_EVERY: u32 = 1024;

    pub fn at(at: DateTime<Utc>) -> Deadline {
        Deadline {
            at: Some(at),
            calls: 0,
        }
    }
    pub fn after(duration: Duration) -> Deadline {
        Deadline {
            at: Utc::now().checked_add_signed(duration),
            calls: 0,
        }
    }
    pub fn expired(&self) -> bool {
        match self.at {
            Some(at) => Utc::now() >= at,
            None => false,
        }
    }
}

impl Observer for Deadline {
    fn observe(&mut self, _ip: Address, _dp: Address, _cell: u8) -> bool {
        let check = self.calls == 0;
        self.calls = (self.calls + 1) % Deadline::CHECK_EVERY;
        check && self.expired()
    }

    fn every_step(&self) -> bool {
        false
    }
}

/// Halts when a shared flag is raised, typically by a Ctrl-C handler.
#[derive(Debug, Clone, Default)]
pub struct Interrupt {
    flag: Arc<AtomicBool>,
}

impl Interrupt {
    pub fn new() -> Interrupt {
        Interrupt::default()
    }
    pub fn flag(&self) -> Arc<AtomicBool> {
        self.flag.clone()
    }
    pub fn raise(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
    /// Clears the flag, returning whether it was raised.
    pub fn take(&self) -> bool {
        self.flag.swap(false, Ordering::SeqCst)
    }
}

impl Observer for Interrupt {
    fn observe(&mut self, _ip: Address, _dp: Address, _cell: u8) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fuel() {
        let mut f = Fuel::new(2);
        assert!(!f.observe(0, 0, 0));
        assert!(!f.observe(1, 0, 0));
        assert!(f.observe(2, 0, 0));
        assert_eq!(f.remaining(), 0);
    }

    #[test]
    fn test_deadline_in_the_past() {
        let mut d = Deadline::at(Utc::now() - Duration::seconds(1));
        assert!(d.expired());
        assert!(d.observe(0, 0, 0));
    }

    #[test]
    fn test_deadline_in_the_future() {
        let mut d = Deadline::after(Duration::hours(1));
        for ip in 0..5000 {
            assert!(!d.observe(ip, 0, 0));
        }
    }

    #[test]
    fn test_deadline_beyond_the_calendar() {
        let mut d = Deadline::after(Duration::milliseconds(i64::MAX));
        assert!(!d.expired());
        assert!(!d.observe(0, 0, 0));
        assert!(!d.every_step());
        assert!(Fuel::new(1).every_step());
    }

    #[test]
    fn test_interrupt() {
        let mut i = Interrupt::new();
        assert!(!i.observe(0, 0, 0));
        i.raise();
        assert!(i.observe(0, 0, 0));
        assert!(i.take());
        assert!(!i.observe(0, 0, 0));
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = vec![];
        let mut o = |ip: Address, _dp: Address, cell: u8| {
            seen.push((ip, cell));
            false
        };
        assert!(!o.observe(3, 0, 7));
        assert_eq!(seen, [(3, 7)]);
    }
}
