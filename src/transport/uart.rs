use embedded_hal::{blocking::delay::DelayUs, serial};

use super::{
    timeout::{self, Progress},
    Platform, Transport, TxTimeout,
};

/// Blocking transmit over a hardware UART.
///
/// The serial port must already be configured (pins, clocks, baud rate) by the HAL. Each
/// `put_char` / `put_str` call waits at most its [`TxTimeout`] for the transmitter and drops
/// whatever is left once the budget runs out or the port reports an error.
///
/// ```ignore
/// let uart = HardwareUart::new(tx, delay);
/// static LOGGER: Logger<HardwareUart<Tx, Delay>> = ...;
/// ```
pub struct HardwareUart<S, D> {
    serial: S,
    delay: D,
    timeout: TxTimeout,
}

impl<S, D> HardwareUart<S, D>
where
    S: serial::Write<u8>,
    D: DelayUs<u32>,
{
    /// Uses [`TxTimeout::UART_DEFAULT`].
    pub fn new(serial: S, delay: D) -> Self {
        Self::with_timeout(serial, delay, TxTimeout::UART_DEFAULT)
    }

    /// Uses a custom per-call timeout.
    pub fn with_timeout(serial: S, delay: D, timeout: TxTimeout) -> Self {
        Self {
            serial,
            delay,
            timeout,
        }
    }

    /// The per-call timeout.
    pub fn timeout(&self) -> TxTimeout {
        self.timeout
    }

    /// Releases the serial port and the delay provider.
    pub fn free(self) -> (S, D) {
        (self.serial, self.delay)
    }

    fn transmit(&mut self, bytes: &[u8]) {
        let serial = &mut self.serial;
        timeout::send_all(bytes, self.timeout, &mut self.delay, |rest| {
            match serial.write(rest[0]) {
                Ok(()) => Progress::Sent(1),
                Err(nb::Error::WouldBlock) => Progress::Busy,
                Err(nb::Error::Other(_)) => Progress::Failed,
            }
        });
    }
}

impl<S, D> Transport for HardwareUart<S, D>
where
    S: serial::Write<u8>,
    D: DelayUs<u32>,
{
    fn platform(&self) -> Platform {
        Platform::HardwareUart
    }

    fn put_char(&mut self, byte: u8) {
        self.transmit(&[byte]);
    }

    fn put_str(&mut self, s: &str) {
        self.transmit(s.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reports "busy" `busy_polls` times before accepting each byte.
    struct SlowTx {
        busy_polls: u32,
        pending: u32,
        sent: Vec<u8>,
    }

    impl SlowTx {
        fn new(busy_polls: u32) -> Self {
            Self {
                busy_polls,
                pending: busy_polls,
                sent: Vec::new(),
            }
        }
    }

    impl serial::Write<u8> for SlowTx {
        type Error = ();

        fn write(&mut self, word: u8) -> nb::Result<(), ()> {
            if self.pending > 0 {
                self.pending -= 1;
                return Err(nb::Error::WouldBlock);
            }
            self.pending = self.busy_polls;
            self.sent.push(word);
            Ok(())
        }

        fn flush(&mut self) -> nb::Result<(), ()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct Clock {
        elapsed_us: u32,
    }

    impl DelayUs<u32> for Clock {
        fn delay_us(&mut self, us: u32) {
            self.elapsed_us += us;
        }
    }

    #[test]
    fn idle_port_sends_everything() {
        let mut uart = HardwareUart::new(SlowTx::new(0), Clock::default());
        uart.put_str("hi");
        uart.put_char(b'!');
        let (tx, clock) = uart.free();
        assert_eq!(tx.sent, b"hi!");
        assert_eq!(clock.elapsed_us, 0);
    }

    #[test]
    fn busy_port_is_waited_for_within_the_timeout() {
        let mut uart = HardwareUart::new(SlowTx::new(3), Clock::default());
        uart.put_str("ok");
        let (tx, clock) = uart.free();
        assert_eq!(tx.sent, b"ok");
        assert_eq!(clock.elapsed_us, 6 * timeout::STEP_US);
    }

    #[test]
    fn timeout_drops_the_rest_of_the_call() {
        // zero timeout: the first busy poll ends the call
        let mut uart =
            HardwareUart::with_timeout(SlowTx::new(2), Clock::default(), TxTimeout::from_millis(0));
        uart.put_str("xy");
        assert!(uart.free().0.sent.is_empty());

        let mut uart = HardwareUart::with_timeout(
            SlowTx::new(1_000_000),
            Clock::default(),
            TxTimeout::from_millis(1),
        );
        uart.put_str("xy");
        let (tx, clock) = uart.free();
        assert!(tx.sent.is_empty());
        assert_eq!(clock.elapsed_us, 1000);
    }
}
