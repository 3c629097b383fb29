use crate::LevelError;

/// ANSI escape sequences framing each leveled message.
pub mod ansi {
    /// Debug
    pub const CYAN: &str = "\x1b[36m";
    /// Info
    pub const GREEN: &str = "\x1b[32m";
    /// Warning
    pub const YELLOW: &str = "\x1b[33m";
    /// Error
    pub const RED: &str = "\x1b[31m";
    /// Fatal
    pub const BOLD_RED: &str = "\x1b[1m\x1b[31m";
    /// Emitted after every leveled message body.
    pub const RESET: &str = "\x1b[0m";
}

/// Label printed instead of a level name for codes outside `0..=4`.
pub const UNKNOWN_LEVEL: &str = "Unknown LogLvl?";

/// Importance of a log message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Code 0
    Debug = 0,
    /// Code 1
    Info = 1,
    /// Code 2
    Warning = 2,
    /// Code 3
    Error = 3,
    /// Code 4
    Fatal = 4,
}

impl Severity {
    /// Every severity, in code order.
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Fatal,
    ];

    /// Maps a raw level code; `None` for unknown codes.
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => Severity::Debug,
            1 => Severity::Info,
            2 => Severity::Warning,
            3 => Severity::Error,
            4 => Severity::Fatal,
            _ => return None,
        })
    }

    /// The raw level code.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Name printed between the brackets of a leveled message.
    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    /// Color sequence that opens a leveled message.
    pub const fn color(self) -> &'static str {
        match self {
            Severity::Debug => ansi::CYAN,
            Severity::Info => ansi::GREEN,
            Severity::Warning => ansi::YELLOW,
            Severity::Error => ansi::RED,
            Severity::Fatal => ansi::BOLD_RED,
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> u8 {
        severity.code()
    }
}

impl TryFrom<u8> for Severity {
    type Error = LevelError;

    fn try_from(code: u8) -> Result<Self, LevelError> {
        Severity::from_code(code).ok_or(LevelError::UnknownLevel(code))
    }
}
