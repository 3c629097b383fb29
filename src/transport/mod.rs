//! Output channels a logger writes to.
//!
//! Exactly one [`Transport`] is owned by each [`Logger`](crate::Logger). The implementations here
//! are selected with Cargo features:
//!
//! - `std`: [`Native`], any `std::io::Write` (stdout by default)
//! - `uart`: [`HardwareUart`], an `embedded-hal` serial port with a bounded blocking transmit
//! - `usb`: [`UsbSerial`], a `usbd-serial` CDC-ACM port that by default never waits for the host

#[cfg(feature = "std")]
mod native;
mod timeout;
#[cfg(feature = "uart")]
mod uart;
#[cfg(feature = "usb")]
mod usb;

#[cfg(feature = "std")]
pub use native::Native;
pub use timeout::TxTimeout;
#[cfg(feature = "uart")]
pub use uart::HardwareUart;
#[cfg(feature = "usb")]
pub use usb::{NoDelay, UsbSerial};

/// The kind of channel behind a [`Transport`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    /// Host console.
    Native,
    /// USB-CDC serial peripheral.
    EmbeddedUsb,
    /// Hardware UART.
    HardwareUart,
}

/// A blocking sink for formatted log text.
///
/// Writes must not fail: a transport that cannot deliver (disconnected host, transmit timeout)
/// drops the data. Note that one log message results in many `put_char` / `put_str` calls; the
/// [`Logger`](crate::Logger) keeps them together.
pub trait Transport {
    /// What kind of channel this is.
    fn platform(&self) -> Platform;

    /// Called by [`Logger::init`](crate::Logger::init) with the validated baud rate.
    fn begin(&mut self, baud_rate: u32) {
        let _ = baud_rate;
    }

    /// Writes a single byte.
    fn put_char(&mut self, byte: u8);

    /// Writes a whole string.
    fn put_str(&mut self, s: &str);
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn platform(&self) -> Platform {
        T::platform(self)
    }

    fn begin(&mut self, baud_rate: u32) {
        T::begin(self, baud_rate)
    }

    fn put_char(&mut self, byte: u8) {
        T::put_char(self, byte)
    }

    fn put_str(&mut self, s: &str) {
        T::put_str(self, s)
    }
}
