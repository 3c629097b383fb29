#![allow(dead_code)]

use emlog::{
    transport::{Platform, Transport},
    Logger, TransportConfig,
};

/// One transport call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    Begin(u32),
    Char(u8),
    Str(String),
}

/// Transport that records every call in order.
#[derive(Default)]
pub struct Recorder {
    pub calls: Vec<Call>,
    /// Yield to other threads after every call.
    pub yielding: bool,
}

impl Recorder {
    pub fn text(&self) -> String {
        let mut text = String::new();
        for call in &self.calls {
            match call {
                Call::Begin(_) => {}
                Call::Char(byte) => text.push(char::from(*byte)),
                Call::Str(s) => text.push_str(s),
            }
        }
        text
    }
}

impl Transport for Recorder {
    fn platform(&self) -> Platform {
        Platform::Native
    }

    fn begin(&mut self, baud_rate: u32) {
        self.calls.push(Call::Begin(baud_rate));
    }

    fn put_char(&mut self, byte: u8) {
        self.calls.push(Call::Char(byte));
        if self.yielding {
            std::thread::yield_now();
        }
    }

    fn put_str(&mut self, s: &str) {
        self.calls.push(Call::Str(s.to_string()));
        if self.yielding {
            std::thread::yield_now();
        }
    }
}

pub fn logger() -> Logger<Recorder> {
    Logger::new(Recorder::default())
}

pub fn ready_logger() -> Logger<Recorder> {
    let logger = logger();
    logger.init(&TransportConfig::new(115_200)).unwrap();
    logger.with_transport(|t| t.calls.clear()).unwrap();
    logger
}

pub fn text(logger: &Logger<Recorder>) -> String {
    logger.with_transport(|t| t.text()).unwrap()
}

pub fn calls(logger: &Logger<Recorder>) -> Vec<Call> {
    logger.with_transport(|t| t.calls.clone()).unwrap()
}
