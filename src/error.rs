use emlog_parser::ArgKind;

/// `Logger::init` failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InitError {
    /// The requested baud rate is zero or above the platform maximum.
    #[error("baud rate {requested} is outside 1..={max}")]
    BaudRateInvalid {
        /// Requested rate.
        requested: u32,
        /// Platform maximum.
        max: u32,
    },
    /// `init` was called from inside the logger's own transport.
    #[error("transport is busy")]
    TransportBusy,
}

/// `Logger::set_level_enabled` failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    /// The logger has not been initialized yet.
    #[error("logger is not initialized")]
    NotInitialized,
    /// The level code is outside `0..=4`.
    #[error("unknown log level code {0}")]
    UnknownLevel(u8),
}

/// Mismatch between a template and its arguments, reported by [`check_args`].
///
/// [`check_args`]: crate::check_args
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArgError {
    /// The template has more specifiers than arguments.
    #[error("no argument for specifier #{index}")]
    Missing {
        /// Position of the specifier among the argument-consuming ones.
        index: usize,
    },
    /// The argument cannot be rendered by its specifier.
    #[error("argument #{index} is {found:?} but the specifier expects {expected:?}")]
    Mismatch {
        /// Argument position.
        index: usize,
        /// Kind the specifier consumes.
        expected: ArgKind,
        /// Kind that was passed.
        found: ArgKind,
    },
    /// More arguments were passed than the template consumes.
    #[error("{count} argument(s) not used by the template")]
    Unused {
        /// Number of surplus arguments.
        count: usize,
    },
}
