use embedded_hal::blocking::delay::DelayUs;
use usb_device::{bus::UsbBus, UsbError};
use usbd_serial::SerialPort;

use super::{
    timeout::{self, Progress},
    Platform, Transport, TxTimeout,
};

/// Delay provider for ports that never wait.
///
/// With [`TxTimeout::NONE`] the delay is never called; with any other timeout it only bounds the
/// number of retries instead of the elapsed time.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

impl DelayUs<u32> for NoDelay {
    fn delay_us(&mut self, _us: u32) {}
}

/// Writes to a USB CDC-ACM serial port.
///
/// A USB port only drains while the host polls it, and nobody might be listening at all, so the
/// default timeout is zero: whatever the endpoint buffer does not accept right away is dropped.
///
/// The application must keep servicing the USB device. Since the port is owned by the logger, use
/// [`Logger::with_transport`](crate::Logger::with_transport) to reach it:
///
/// ```ignore
/// LOGGER.with_transport(|usb| usb_dev.poll(&mut [usb.port_mut()]));
/// ```
pub struct UsbSerial<'a, B: UsbBus, D = NoDelay> {
    port: SerialPort<'a, B>,
    delay: D,
    timeout: TxTimeout,
}

impl<'a, B: UsbBus> UsbSerial<'a, B> {
    /// Uses [`TxTimeout::USB_DEFAULT`].
    pub fn new(port: SerialPort<'a, B>) -> Self {
        Self::with_timeout(port, NoDelay, TxTimeout::USB_DEFAULT)
    }
}

impl<'a, B, D> UsbSerial<'a, B, D>
where
    B: UsbBus,
    D: DelayUs<u32>,
{
    /// Waits up to `timeout` per call for the host to drain the endpoint.
    pub fn with_timeout(port: SerialPort<'a, B>, delay: D, timeout: TxTimeout) -> Self {
        Self {
            port,
            delay,
            timeout,
        }
    }

    /// The per-call timeout.
    pub fn timeout(&self) -> TxTimeout {
        self.timeout
    }

    /// The underlying serial class, e.g. to pass to `UsbDevice::poll`.
    pub fn port_mut(&mut self) -> &mut SerialPort<'a, B> {
        &mut self.port
    }

    /// Releases the serial port and the delay provider.
    pub fn free(self) -> (SerialPort<'a, B>, D) {
        (self.port, self.delay)
    }

    fn transmit(&mut self, bytes: &[u8]) {
        let port = &mut self.port;
        timeout::send_all(bytes, self.timeout, &mut self.delay, |rest| {
            progress(port.write(rest))
        });
    }
}

/// `WouldBlock` means the endpoint buffer is full until the host polls again.
fn progress(written: usb_device::Result<usize>) -> Progress {
    match written {
        Ok(n) => Progress::Sent(n),
        Err(UsbError::WouldBlock) => Progress::Busy,
        Err(_) => Progress::Failed,
    }
}

impl<'a, B, D> Transport for UsbSerial<'a, B, D>
where
    B: UsbBus,
    D: DelayUs<u32>,
{
    fn platform(&self) -> Platform {
        Platform::EmbeddedUsb
    }

    fn put_char(&mut self, byte: u8) {
        self.transmit(&[byte]);
    }

    fn put_str(&mut self, s: &str) {
        self.transmit(s.as_bytes());
    }
}
