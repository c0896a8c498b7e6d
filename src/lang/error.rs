use crate::mach::Address;

/// ## Engine error
///
/// Every failure the engine can report, tagged with the instruction position
/// and data pointer where they are known.

#[derive(Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    ip: Option<Address>,
    dp: Option<Address>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $ip:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).at_ip($ip)
    };
    ($err:ident, $ip:expr, $dp:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_ip($ip)
            .at_dp($dp)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $ip:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_ip($ip)
            .message($msg)
    };
    ($err:ident, $ip:expr, $dp:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .at_ip($ip)
            .at_dp($dp)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            ip: None,
            dp: None,
            message: "",
        }
    }

    pub fn at_ip(self, ip: Address) -> Error {
        debug_assert!(self.ip.is_none());
        Error {
            ip: Some(ip),
            ..self
        }
    }

    pub fn at_dp(self, dp: Address) -> Error {
        debug_assert!(self.dp.is_none());
        Error {
            dp: Some(dp),
            ..self
        }
    }

    pub fn message(self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error { message, ..self }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn ip(&self) -> Option<Address> {
        self.ip
    }

    pub fn dp(&self) -> Option<Address> {
        self.dp
    }

    /// Host-visible status: always negative.
    pub fn status(&self) -> i32 {
        self.code as i32
    }

    /// True when an observer stopped the run rather than the program failing.
    pub fn is_halt(&self) -> bool {
        self.code == ErrorCode::DebugHaltRequested
    }

    pub fn is_syntax(&self) -> bool {
        match self.code {
            ErrorCode::UnmatchedClose
            | ErrorCode::UnmatchedOpen
            | ErrorCode::BracketDepthExceeded => true,
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    OutOfBounds = -1,
    OutputOverflow = -3,
    UnmatchedClose = -4,
    UnmatchedOpen = -5,
    TapeAllocFailed = -6,
    JumpTableAllocFailed = -7,
    BracketDepthExceeded = -8,
    DebugHaltRequested = -9,
    InvalidArguments = -10,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ErrorCode::*;
        let s = match self {
            OutOfBounds => "OUT OF BOUNDS",
            OutputOverflow => "OUTPUT OVERFLOW",
            UnmatchedClose => "UNMATCHED ]",
            UnmatchedOpen => "UNMATCHED [",
            TapeAllocFailed => "TAPE ALLOCATION FAILED",
            JumpTableAllocFailed => "JUMP TABLE ALLOCATION FAILED",
            BracketDepthExceeded => "BRACKETS NESTED TOO DEEPLY",
            DebugHaltRequested => "HALTED",
            InvalidArguments => "INVALID ARGUMENTS",
        };
        write!(f, "{}", s)
    }
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut suffix = String::new();
        if let Some(ip) = self.ip {
            suffix.push_str(&format!(" AT {}", ip));
        }
        if let Some(dp) = self.dp {
            suffix.push_str(&format!(" (DP {})", dp));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        write!(f, "{}{}", self.code, suffix)
    }
}

impl std::error::Error for Error {}
