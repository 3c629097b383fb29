//! A small, allocation-free `printf`-style logger for microcontrollers.
//!
//! Messages are formatted while they are written: literal text goes straight to the
//! [`Transport`], numbers are rendered into a stack buffer first. Nothing is buffered and nothing
//! is allocated, so the same code runs on a host console, a USB CDC-ACM port or a bare UART.
//!
//! ```
//! use emlog::{transport::{Platform, Transport}, Logger, Severity, TransportConfig};
//!
//! # struct Uart;
//! # impl Transport for Uart {
//! #     fn platform(&self) -> Platform { Platform::HardwareUart }
//! #     fn put_char(&mut self, _: u8) {}
//! #     fn put_str(&mut self, _: &str) {}
//! # }
//! static LOGGER: Logger<Uart> = Logger::new(Uart);
//!
//! LOGGER.init(&TransportConfig::new(115_200)).unwrap();
//! LOGGER.set_level_enabled(Severity::Debug, false).unwrap();
//!
//! // "\x1b[33m> [WARNING] pump: pressure 3.1 bar\x1b[0m\r\n"
//! emlog::warning!(LOGGER, "pump", "pressure %.1f bar", 3.14);
//! ```
//!
//! # Templates
//!
//! See [`emlog_parser`] for the supported specifiers. Anything else is echoed literally, and so is
//! a specifier whose argument is missing or of the wrong kind. [`check_args`] reports such
//! mismatches ahead of time.
//!
//! # Cargo features
//!
//! - `std`: [`transport::Native`]
//! - `uart`: [`transport::HardwareUart`]
//! - `usb`: [`transport::UsbSerial`]
//!
//! A `critical-section` implementation must be provided by the application (e.g. the one of the
//! target's HAL, or `critical-section/std` on a host).

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]

mod arg;
mod error;
mod formatter;
mod levels;
mod logger;
mod macros;
mod severity;
pub mod transport;

pub use emlog_convert as convert;
pub use emlog_parser::{ArgKind, DEFAULT_PRECISION, MAX_PRECISION};

pub use crate::{
    arg::{check_args, Arg},
    error::{ArgError, InitError, LevelError},
    formatter::write_formatted,
    levels::Levels,
    logger::{Logger, LoggerState, TransportConfig, ASSERT_TAG, DEFAULT_MAX_BAUD_RATE},
    severity::{ansi, Severity, UNKNOWN_LEVEL},
    transport::Transport,
};
