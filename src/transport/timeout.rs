/// Upper bound on how long one transport call may block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TxTimeout {
    millis: u32,
}

impl TxTimeout {
    /// Never wait: data that cannot be sent immediately is dropped.
    pub const NONE: Self = Self::from_millis(0);

    /// Default for [`HardwareUart`](crate::transport::HardwareUart).
    pub const UART_DEFAULT: Self = Self::from_millis(1000);

    /// Default for [`UsbSerial`](crate::transport::UsbSerial); a disconnected host must never
    /// stall the caller.
    pub const USB_DEFAULT: Self = Self::NONE;

    /// A timeout of `millis` milliseconds.
    pub const fn from_millis(millis: u32) -> Self {
        Self { millis }
    }

    /// The timeout in milliseconds.
    pub const fn as_millis(self) -> u32 {
        self.millis
    }

    /// The timeout in microseconds, saturating.
    pub const fn as_micros(self) -> u32 {
        self.millis.saturating_mul(1000)
    }

    /// Whether this is [`TxTimeout::NONE`].
    pub const fn is_none(self) -> bool {
        self.millis == 0
    }
}

/// Outcome of one transmit attempt.
#[cfg(any(feature = "uart", feature = "usb"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Progress {
    /// This many leading bytes were accepted.
    Sent(usize),
    /// The transmitter is busy, try again later.
    Busy,
    /// The transmitter failed; give up on this call.
    Failed,
}

/// Granularity of the busy wait, in microseconds.
#[cfg(any(feature = "uart", feature = "usb"))]
pub(crate) const STEP_US: u32 = 10;

/// Feeds `bytes` to `attempt` until everything is sent, the transmitter fails or `timeout` worth
/// of busy waiting has been spent.
#[cfg(any(feature = "uart", feature = "usb"))]
pub(crate) fn send_all<D>(
    mut bytes: &[u8],
    timeout: TxTimeout,
    delay: &mut D,
    mut attempt: impl FnMut(&[u8]) -> Progress,
) where
    D: embedded_hal::blocking::delay::DelayUs<u32>,
{
    let mut remaining_us = timeout.as_micros();
    while !bytes.is_empty() {
        match attempt(bytes) {
            Progress::Sent(n) if n > 0 => bytes = &bytes[n.min(bytes.len())..],
            Progress::Sent(_) | Progress::Busy => {
                if remaining_us == 0 {
                    return;
                }
                let step = STEP_US.min(remaining_us);
                delay.delay_us(step);
                remaining_us -= step;
            }
            Progress::Failed => return,
        }
    }
}

#[cfg(all(test, any(feature = "uart", feature = "usb")))]
mod tests {
    use embedded_hal::blocking::delay::DelayUs;

    use super::*;

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
    fn partial_writes_advance() {
        let mut clock = Clock::default();
        let mut chunks = vec![];
        send_all(b"abcde", TxTimeout::NONE, &mut clock, |rest| {
            let n = rest.len().min(2);
            chunks.push(rest[..n].to_vec());
            Progress::Sent(n)
        });
        assert_eq!(chunks, [b"ab".to_vec(), b"cd".to_vec(), b"e".to_vec()]);
        assert_eq!(clock.elapsed_us, 0);
    }

    #[test]
    fn zero_timeout_gives_up_on_first_busy() {
        let mut clock = Clock::default();
        let mut attempts = 0;
        send_all(b"abc", TxTimeout::NONE, &mut clock, |_| {
            attempts += 1;
            Progress::Busy
        });
        assert_eq!(attempts, 1);
        assert_eq!(clock.elapsed_us, 0);
    }

    #[test]
    fn busy_time_is_bounded() {
        let mut clock = Clock::default();
        send_all(b"abc", TxTimeout::from_millis(2), &mut clock, |_| Progress::Busy);
        assert_eq!(clock.elapsed_us, 2000);
    }

    #[test]
    fn failure_stops_immediately() {
        let mut clock = Clock::default();
        let mut attempts = 0;
        send_all(b"abc", TxTimeout::UART_DEFAULT, &mut clock, |_| {
            attempts += 1;
            Progress::Failed
        });
        assert_eq!(attempts, 1);
        assert_eq!(clock.elapsed_us, 0);
    }
}
