use core::sync::atomic::{AtomicU8, Ordering};

use crate::Severity;

/// Enable mask chosen at build time through `EMLOG_LEVELS` (all levels when unset).
const DEFAULT_LEVELS: u8 = include!(concat!(env!("OUT_DIR"), "/default_levels.rs"));

bitflags::bitflags! {
    /// Set of severities whose messages are emitted.
    pub struct Levels: u8 {
        /// [`Severity::Debug`]
        const DEBUG = 1 << 0;
        /// [`Severity::Info`]
        const INFO = 1 << 1;
        /// [`Severity::Warning`]
        const WARNING = 1 << 2;
        /// [`Severity::Error`]
        const ERROR = 1 << 3;
        /// [`Severity::Fatal`]
        const FATAL = 1 << 4;
    }
}

impl Levels {
    /// The flag of a single severity.
    pub const fn of(severity: Severity) -> Self {
        match severity {
            Severity::Debug => Levels::DEBUG,
            Severity::Info => Levels::INFO,
            Severity::Warning => Levels::WARNING,
            Severity::Error => Levels::ERROR,
            Severity::Fatal => Levels::FATAL,
        }
    }

    /// The set a freshly created logger starts with.
    pub const fn build_default() -> Self {
        Levels::from_bits_truncate(DEFAULT_LEVELS)
    }
}

/// Per-severity enable table shared by every execution context.
///
/// Reads happen on every emission. Writes are expected at start-up only and are a plain
/// load-modify-store, so two concurrent writers can lose an update; targets without
/// compare-and-swap (thumbv6m) rule out `fetch_or`.
pub(crate) struct LevelTable {
    bits: AtomicU8,
}

impl LevelTable {
    pub(crate) const fn new() -> Self {
        Self {
            bits: AtomicU8::new(Levels::build_default().bits()),
        }
    }

    pub(crate) fn get(&self) -> Levels {
        Levels::from_bits_truncate(self.bits.load(Ordering::Relaxed))
    }

    pub(crate) fn is_enabled(&self, severity: Severity) -> bool {
        self.get().contains(Levels::of(severity))
    }

    pub(crate) fn set(&self, severity: Severity, enabled: bool) {
        let mut levels = self.get();
        levels.set(Levels::of(severity), enabled);
        self.bits.store(levels.bits(), Ordering::Relaxed);
    }
}

#[cfg(test)]
#[path = "../build/env_levels.rs"]
mod env_levels;

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn table_starts_from_the_build_default() {
        assert_eq!(LevelTable::new().get(), Levels::build_default());
        assert_eq!(Levels::build_default().bits(), DEFAULT_LEVELS);
    }

    #[rstest]
    #[case("", Levels::empty())]
    #[case("all", Levels::all())]
    #[case("none", Levels::empty())]
    #[case("warn", Levels::WARNING)]
    #[case("warning", Levels::WARNING)]
    #[case("info,error", Levels::INFO | Levels::ERROR)]
    #[case(" Debug , FATAL ,", Levels::DEBUG | Levels::FATAL)]
    #[case("none,error", Levels::ERROR)]
    #[case("all,none", Levels::all())]
    fn env_level_lists(#[case] spec: &str, #[case] expected: Levels) {
        assert_eq!(env_levels::parse_levels(spec).unwrap(), expected.bits());
    }

    #[test]
    fn env_level_names_follow_codes() {
        for severity in Severity::ALL {
            let name = env_levels::LEVELS[usize::from(severity.code())];
            assert_eq!(name, severity.as_str().to_ascii_lowercase());
        }
        assert_eq!(env_levels::all(), Levels::all().bits());
    }

    #[test]
    fn unknown_env_level_is_rejected() {
        let err = env_levels::parse_levels("info,verbose").unwrap_err();
        assert!(err.to_string().contains("`verbose`"));
    }

    #[test]
    fn toggling_one_level_leaves_the_others() {
        let table = LevelTable::new();
        table.set(Severity::Warning, false);
        assert!(!table.is_enabled(Severity::Warning));
        for severity in [Severity::Debug, Severity::Info, Severity::Error, Severity::Fatal] {
            assert!(table.is_enabled(severity));
        }

        table.set(Severity::Warning, true);
        assert_eq!(table.get(), Levels::all());
    }

    #[test]
    fn flags_follow_codes() {
        for severity in Severity::ALL {
            assert_eq!(Levels::of(severity).bits(), 1 << severity.code());
        }
    }
}
