use core::{
    cell::{Cell, RefCell},
    sync::atomic::{AtomicBool, Ordering},
};

use critical_section::Mutex;

use crate::{
    formatter,
    levels::LevelTable,
    severity::{ansi, UNKNOWN_LEVEL},
    transport::{Platform, Transport},
    Arg, InitError, LevelError, Levels, Severity,
};

/// Baud rate ceiling used by [`TransportConfig::new`].
pub const DEFAULT_MAX_BAUD_RATE: u32 = 115_200;

/// Source tag of assertion failure messages.
///
/// The C `RML_COMM` logger tags them `RML_ASSERT`; everything after the tag is unchanged.
pub const ASSERT_TAG: &str = "ASSERT";

/// Parameters checked by [`Logger::init`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransportConfig {
    /// Requested baud rate, passed to [`Transport::begin`].
    pub baud_rate: u32,
    /// Largest baud rate the platform supports.
    pub max_baud_rate: u32,
}

impl TransportConfig {
    /// `baud_rate` against [`DEFAULT_MAX_BAUD_RATE`].
    pub const fn new(baud_rate: u32) -> Self {
        Self {
            baud_rate,
            max_baud_rate: DEFAULT_MAX_BAUD_RATE,
        }
    }

    /// Overrides the platform maximum.
    pub const fn with_max_baud_rate(self, max_baud_rate: u32) -> Self {
        Self {
            max_baud_rate,
            ..self
        }
    }

    fn validate(&self) -> Result<(), InitError> {
        if self.baud_rate == 0 || self.baud_rate > self.max_baud_rate {
            return Err(InitError::BaudRateInvalid {
                requested: self.baud_rate,
                max: self.max_baud_rate,
            });
        }
        Ok(())
    }
}

/// Snapshot of a logger's lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoggerState {
    /// Whether [`Logger::init`] has succeeded.
    pub initialized: bool,
    /// The transport's platform, known once initialized.
    pub platform: Option<Platform>,
}

/// A logger that owns one [`Transport`].
///
/// Every message is written inside a critical section, so messages from different threads or
/// interrupt priorities never interleave. The transport may block (see
/// [`TxTimeout`](crate::transport::TxTimeout)) and does so with the critical section held; keep
/// the timeouts short on targets where interrupt latency matters.
///
/// The level table and the initialized flag are read without the critical section. Change them
/// at start-up: a [`Logger::set_level_enabled`] racing with another one may be lost.
///
/// ```
/// use emlog::{
///     transport::{Platform, Transport},
///     Logger, TransportConfig,
/// };
///
/// struct Console;
///
/// impl Transport for Console {
///     fn platform(&self) -> Platform {
///         Platform::Native
///     }
///
///     fn put_char(&mut self, byte: u8) {
///         print!("{}", char::from(byte));
///     }
///
///     fn put_str(&mut self, s: &str) {
///         print!("{}", s);
///     }
/// }
///
/// static LOGGER: Logger<Console> = Logger::new(Console);
///
/// LOGGER.init(&TransportConfig::new(115_200)).unwrap();
/// emlog::info!(LOGGER, "main", "booted in %u ms", 12u32);
/// ```
pub struct Logger<T> {
    transport: Mutex<RefCell<T>>,
    platform: Mutex<Cell<Option<Platform>>>,
    initialized: AtomicBool,
    levels: LevelTable,
}

impl<T> Logger<T> {
    /// Creates an uninitialized logger; nothing is written until [`Logger::init`] succeeds.
    pub const fn new(transport: T) -> Self {
        Self {
            transport: Mutex::new(RefCell::new(transport)),
            platform: Mutex::new(Cell::new(None)),
            initialized: AtomicBool::new(false),
            levels: LevelTable::new(),
        }
    }

    /// Whether [`Logger::init`] has succeeded.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    /// The current lifecycle state.
    pub fn state(&self) -> LoggerState {
        LoggerState {
            initialized: self.is_initialized(),
            platform: critical_section::with(|cs| self.platform.borrow(cs).get()),
        }
    }

    /// Severities currently enabled.
    pub fn levels(&self) -> Levels {
        self.levels.get()
    }

    /// Enables or disables the messages of `severity`.
    pub fn set_level_enabled(&self, severity: Severity, enabled: bool) -> Result<(), LevelError> {
        if !self.is_initialized() {
            return Err(LevelError::NotInitialized);
        }

        self.levels.set(severity, enabled);
        log::debug!(
            "{} messages {}",
            severity.as_str(),
            if enabled { "enabled" } else { "disabled" }
        );
        Ok(())
    }

    /// Like [`Logger::set_level_enabled`] for raw codes; any nonzero `enabled` enables.
    pub fn set_level_code_enabled(&self, code: u8, enabled: u8) -> Result<(), LevelError> {
        if !self.is_initialized() {
            return Err(LevelError::NotInitialized);
        }

        let severity = Severity::try_from(code).map_err(|e| {
            log::warn!("cannot toggle level: {}", e);
            e
        })?;
        self.set_level_enabled(severity, enabled != 0)
    }

    /// Runs `f` with exclusive access to the transport.
    ///
    /// Returns `None` when called from inside the transport itself, e.g. from a `put_str`
    /// implementation.
    pub fn with_transport<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        critical_section::with(|cs| {
            let mut transport = self.transport.borrow(cs).try_borrow_mut().ok()?;
            Some(f(&mut transport))
        })
    }
}

impl<T: Transport> Logger<T> {
    /// Validates `config`, starts the transport and enables output.
    ///
    /// Calling it again restarts the transport with the new configuration.
    pub fn init(&self, config: &TransportConfig) -> Result<(), InitError> {
        if let Err(e) = config.validate() {
            log::warn!("logger not initialized: {}", e);
            return Err(e);
        }

        let platform = self
            .with_transport(|transport| {
                transport.begin(config.baud_rate);
                transport.platform()
            })
            .ok_or(InitError::TransportBusy)?;

        critical_section::with(|cs| self.platform.borrow(cs).set(Some(platform)));
        self.initialized.store(true, Ordering::Release);
        log::info!("logger ready: {:?} at {} baud", platform, config.baud_rate);
        Ok(())
    }

    /// Writes one leveled message.
    ///
    /// The layout is `<color>> [<LEVEL>] <source>: <message><reset>\r\n`. Nothing is written
    /// before [`Logger::init`] or while `severity` is disabled.
    pub fn log(&self, source: &str, severity: Severity, template: &str, args: &[Arg<'_>]) {
        self.write_leveled(source, Some(severity), template, args);
    }

    /// Writes one leveled message for a raw level code.
    ///
    /// Codes outside `0..=4` are always written, uncolored and labelled `Unknown LogLvl?`.
    pub fn log_code(&self, source: &str, code: u8, template: &str, args: &[Arg<'_>]) {
        self.write_leveled(source, Severity::from_code(code), template, args);
    }

    /// Writes `template` without any framing; only requires [`Logger::init`].
    pub fn print(&self, template: &str, args: &[Arg<'_>]) {
        self.emit(None, |out| formatter::write_formatted(out, template, args));
    }

    /// Logs the assertion failure message at [`Severity::Fatal`].
    pub fn report_assertion(&self, file: &str, line: u32) {
        self.log(
            ASSERT_TAG,
            Severity::Fatal,
            "ASSERTION FAILED:\r\n\t--> File: %s\r\n\t--> Line: %u",
            &[Arg::Str(file), Arg::Unsigned(line)],
        );
    }

    /// Reports a failed assertion and halts the calling context forever.
    pub fn assert_fail(&self, file: &str, line: u32) -> ! {
        self.report_assertion(file, line);
        loop {
            core::hint::spin_loop();
        }
    }

    fn write_leveled(
        &self,
        source: &str,
        severity: Option<Severity>,
        template: &str,
        args: &[Arg<'_>],
    ) {
        let (color, name) = match severity {
            Some(severity) => (severity.color(), severity.as_str()),
            None => ("", UNKNOWN_LEVEL),
        };

        self.emit(severity, |out| {
            out.put_str(color);
            out.put_str("> [");
            out.put_str(name);
            out.put_str("] ");
            out.put_str(source);
            out.put_str(": ");
            formatter::write_formatted(out, template, args);
            out.put_str(ansi::RESET);
            out.put_str("\r\n");
        });
    }

    /// Runs `write` inside the critical section if the logger is initialized and `gate`, when
    /// given, is enabled.
    fn emit(&self, gate: Option<Severity>, write: impl FnOnce(&mut T)) {
        critical_section::with(|cs| {
            if !self.is_initialized() {
                return;
            }
            if let Some(severity) = gate {
                if !self.levels.is_enabled(severity) {
                    return;
                }
            }

            // re-entrant call from inside the transport
            let mut transport = match self.transport.borrow(cs).try_borrow_mut() {
                Ok(transport) => transport,
                Err(_) => return,
            };
            write(&mut transport);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Capture {
        text: String,
        baud_rate: Option<u32>,
    }

    impl Transport for Capture {
        fn platform(&self) -> Platform {
            Platform::HardwareUart
        }

        fn begin(&mut self, baud_rate: u32) {
            self.baud_rate = Some(baud_rate);
        }

        fn put_char(&mut self, byte: u8) {
            self.text.push(char::from(byte));
        }

        fn put_str(&mut self, s: &str) {
            self.text.push_str(s);
        }
    }

    fn ready() -> Logger<Capture> {
        let logger = Logger::new(Capture::default());
        logger.init(&TransportConfig::new(9600)).unwrap();
        logger
    }

    fn text(logger: &Logger<Capture>) -> String {
        logger.with_transport(|t| t.text.clone()).unwrap()
    }

    #[test]
    fn baud_rate_bounds() {
        let logger = Logger::new(Capture::default());
        assert_eq!(
            logger.init(&TransportConfig::new(0)),
            Err(InitError::BaudRateInvalid {
                requested: 0,
                max: DEFAULT_MAX_BAUD_RATE
            })
        );
        assert_eq!(
            logger.init(&TransportConfig::new(115_201)),
            Err(InitError::BaudRateInvalid {
                requested: 115_201,
                max: DEFAULT_MAX_BAUD_RATE
            })
        );
        assert!(!logger.is_initialized());
        assert_eq!(logger.with_transport(|t| t.baud_rate).unwrap(), None);

        assert_eq!(logger.init(&TransportConfig::new(115_200)), Ok(()));
        assert_eq!(
            logger.init(&TransportConfig::new(921_600).with_max_baud_rate(921_600)),
            Ok(())
        );
        assert_eq!(logger.with_transport(|t| t.baud_rate).unwrap(), Some(921_600));
    }

    #[test]
    fn state_follows_init() {
        let logger = Logger::new(Capture::default());
        assert_eq!(
            logger.state(),
            LoggerState {
                initialized: false,
                platform: None
            }
        );

        logger.init(&TransportConfig::new(9600)).unwrap();
        assert_eq!(
            logger.state(),
            LoggerState {
                initialized: true,
                platform: Some(Platform::HardwareUart)
            }
        );
    }

    #[test]
    fn nothing_before_init() {
        let logger = Logger::new(Capture::default());
        logger.log("main", Severity::Fatal, "boom", &[]);
        logger.log_code("main", 9, "boom", &[]);
        logger.print("boom", &[]);
        assert_eq!(text(&logger), "");

        assert_eq!(
            logger.set_level_enabled(Severity::Debug, false),
            Err(LevelError::NotInitialized)
        );
        assert_eq!(
            logger.set_level_code_enabled(9, 0),
            Err(LevelError::NotInitialized)
        );
    }

    #[test]
    fn leveled_frame() {
        let logger = ready();
        logger.log("net", Severity::Info, "up after %u tries", &[Arg::Unsigned(3)]);
        assert_eq!(
            text(&logger),
            "\x1b[32m> [INFO] net: up after 3 tries\x1b[0m\r\n"
        );
    }

    #[test]
    fn unknown_code_is_uncolored_and_never_gated() {
        let logger = ready();
        for severity in Severity::ALL {
            logger.set_level_enabled(severity, false).unwrap();
        }
        logger.log_code("io", 7, "odd", &[]);
        assert_eq!(text(&logger), "> [Unknown LogLvl?] io: odd\x1b[0m\r\n");
    }

    #[test]
    fn level_codes() {
        let logger = ready();
        assert_eq!(
            logger.set_level_code_enabled(5, 1),
            Err(LevelError::UnknownLevel(5))
        );

        logger.set_level_code_enabled(2, 0).unwrap();
        assert_eq!(logger.levels(), Levels::all() - Levels::WARNING);
        logger.log_code("x", 2, "hidden", &[]);
        assert_eq!(text(&logger), "");

        // clamped to "enabled"
        logger.set_level_code_enabled(2, 200).unwrap();
        assert_eq!(logger.levels(), Levels::all());
    }

    #[test]
    fn print_ignores_levels() {
        let logger = ready();
        for severity in Severity::ALL {
            logger.set_level_enabled(severity, false).unwrap();
        }
        logger.print("%d%%", &[Arg::Signed(-5)]);
        assert_eq!(text(&logger), "-5%");
    }

    #[test]
    fn assertion_message() {
        let logger = ready();
        logger.report_assertion("src/main.rs", 42);
        assert_eq!(
            text(&logger),
            "\x1b[1m\x1b[31m> [FATAL] ASSERT: ASSERTION FAILED:\r\n\t--> File: src/main.rs\r\n\t--> Line: 42\x1b[0m\r\n"
        );
    }

    #[test]
    fn init_from_inside_the_transport_is_refused() {
        let logger = Logger::new(Capture::default());
        let nested = logger.with_transport(|_| logger.init(&TransportConfig::new(9600)));
        assert_eq!(nested, Some(Err(InitError::TransportBusy)));

        assert_eq!(
            logger.state(),
            LoggerState {
                initialized: false,
                platform: None
            }
        );
        assert_eq!(logger.with_transport(|t| t.baud_rate).unwrap(), None);
    }

    #[test]
    fn reentrant_emission_is_dropped() {
        let logger = ready();
        let inner = logger.with_transport(|t| {
            // the transport is already borrowed
            logger.print("nested", &[]);
            t.text.len()
        });
        assert_eq!(inner, Some(0));
        assert_eq!(text(&logger), "");
    }
}
