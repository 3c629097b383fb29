use std::io::{self, Stdout, Write};

use super::{Platform, Transport};

/// Host console transport.
///
/// Wraps any [`std::io::Write`]; I/O errors are discarded.
pub struct Native<W = Stdout> {
    writer: W,
}

impl Native<Stdout> {
    /// Writes to the process' standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Native<W> {
    /// Writes to `writer`.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// The wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Unwraps the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Transport for Native<W> {
    fn platform(&self) -> Platform {
        Platform::Native
    }

    fn put_char(&mut self, byte: u8) {
        let _ = self.writer.write_all(&[byte]);
    }

    fn put_str(&mut self, s: &str) {
        let _ = self.writer.write_all(s.as_bytes());
        // a message ends with `put_str("\r\n")`
        if s.ends_with('\n') {
            let _ = self.writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_bytes_through() {
        let mut native = Native::new(Vec::new());
        native.put_str("ab");
        native.put_char(b'c');
        assert_eq!(native.get_ref().as_slice(), b"abc");
        assert_eq!(native.platform(), Platform::Native);
    }
}
