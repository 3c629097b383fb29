//! Allocation-free conversion of integers and floats to text.
//!
//! All converters write into a caller supplied buffer, reserve one byte for a NUL terminator and
//! return the length of the rendered text. On failure the buffer is emptied (its first byte is set
//! to NUL) instead of being left with a partial rendering.
//!
//! ```
//! let mut buf = [0u8; 16];
//! let len = emlog_convert::signed_to_text(-42, &mut buf, 10).unwrap();
//! assert_eq!(&buf[..len], b"-42");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]


/// Digit lookup table shared by the signed and unsigned paths.
///
/// A digit with (possibly negative) remainder `r` lives at index `35 + r`, so the negative
/// remainders produced by truncating division of a negative number map onto the same digits.
pub const DIGITS: &[u8; 71] =
    b"ZYXWVUTSRQPONMLKJIHGFEDCBA9876543210123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Smallest supported base.
pub const MIN_BASE: u32 = 2;
/// Largest supported base.
pub const MAX_BASE: u32 = 36;

/// Value returned by [`sentinel`] for a failed conversion.
pub const SENTINEL: i32 = -1;

/// 2^63, the magnitude from which [`float_to_text`] clamps the integer part.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Conversion failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The base is outside `2..=36`.
    #[error("base {0} is outside 2..=36")]
    InvalidBase(u32),
    /// The rendered text plus its terminator does not fit in the buffer.
    #[error("buffer too small for the rendered value")]
    BufferTooSmall,
}

/// Collapses a conversion result into the C style return value: the length on success,
/// [`SENTINEL`] on failure.
pub fn sentinel(result: Result<usize, Error>) -> i32 {
    match result {
        Ok(len) => len as i32,
        Err(_) => SENTINEL,
    }
}

/// Returns the rendered text of a successful conversion.
///
/// The converters only ever write ASCII, so this does not fail for lengths they returned.
pub fn as_str(buf: &[u8], len: usize) -> &str {
    core::str::from_utf8(&buf[..len]).unwrap_or("")
}

/// Renders `value` in `base`, most significant digit first.
pub fn unsigned_to_text(value: u32, buf: &mut [u8], base: u32) -> Result<usize, Error> {
    check_base(buf, base)?;

    let mut out = Cursor::new(buf);
    let mut value = value;
    loop {
        let rest = value / base;
        let rem = (value - rest * base) as usize;
        out.push(DIGITS[35 + rem])?;
        value = rest;
        if value == 0 {
            break;
        }
    }

    Ok(out.finish_reversed())
}

/// Renders `value` in `base`.
///
/// A leading `-` is only produced in base 10. Every other base renders the two's complement bit
/// pattern of `value`, so `-1` in base 16 is `FFFFFFFF`.
pub fn signed_to_text(value: i32, buf: &mut [u8], base: u32) -> Result<usize, Error> {
    check_base(buf, base)?;

    if base != 10 {
        return unsigned_to_text(value as u32, buf, base);
    }

    // dividing the signed value keeps `i32::MIN` representable; its remainders are negative
    // and index the lower half of `DIGITS`
    let mut out = Cursor::new(buf);
    let mut rest = value;
    loop {
        let before = rest;
        rest /= 10;
        let rem = before - rest * 10;
        out.push(DIGITS[(35 + rem) as usize])?;
        if rest == 0 {
            break;
        }
    }

    if value < 0 {
        out.push(b'-')?;
    }

    Ok(out.finish_reversed())
}

/// Renders `value` with exactly `decimal_places` fractional digits.
///
/// Rounding is applied once, by adding half a unit of the last requested place to the fractional
/// part before digits are extracted. A negative value whose rendering is all zeroes loses its
/// sign (`-0.004` at two places is `0.00`). Magnitudes of 2^63 and above render as `i64::MAX`
/// (or `i64::MIN` when negative) with an all-zero fraction.
pub fn float_to_text(value: f64, buf: &mut [u8], decimal_places: u8) -> Result<usize, Error> {
    let mut out = Cursor::new(buf);

    if value.is_nan() {
        out.push_all(b"nan")?;
        return Ok(out.finish());
    }
    if value.is_infinite() {
        if value < 0.0 {
            out.push(b'-')?;
        }
        out.push_all(b"inf")?;
        return Ok(out.finish());
    }

    let negative = value < 0.0;
    let magnitude = if negative { -value } else { value };
    // at and above 2^63 every f64 is an integer; clamp to the `i64` range with no fraction
    let (mut whole, mut fraction) = if magnitude >= I64_LIMIT {
        let whole = if negative {
            i64::MIN.unsigned_abs()
        } else {
            i64::MAX as u64
        };
        (whole, 0.0)
    } else {
        let whole = magnitude as u64;
        (whole, magnitude - whole as f64)
    };

    let mut rounding = 0.5;
    for _ in 0..decimal_places {
        rounding /= 10.0;
    }
    fraction += rounding;
    if fraction >= 1.0 {
        whole = whole.saturating_add(1);
        fraction -= 1.0;
    }

    let mut nonzero = whole != 0;

    let mut digits = [0u8; 20];
    let mut count = 0;
    loop {
        digits[count] = b'0' + (whole % 10) as u8;
        whole /= 10;
        count += 1;
        if whole == 0 {
            break;
        }
    }
    for &digit in digits[..count].iter().rev() {
        out.push(digit)?;
    }

    if decimal_places > 0 {
        out.push(b'.')?;

        for _ in 0..decimal_places {
            fraction *= 10.0;
            let digit = (fraction as u8).min(9);
            out.push(b'0' + digit)?;
            fraction -= f64::from(digit);
            nonzero |= digit != 0;
        }
    }

    if negative && nonzero {
        out.insert_front(b'-')?;
    }

    Ok(out.finish())
}

fn check_base(buf: &mut [u8], base: u32) -> Result<(), Error> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        if let Some(first) = buf.first_mut() {
            *first = 0;
        }
        Err(Error::InvalidBase(base))
    }
}

/// Bounded writer that always keeps room for the terminator.
struct Cursor<'b> {
    buf: &'b mut [u8],
    len: usize,
}

impl<'b> Cursor<'b> {
    fn new(buf: &'b mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    fn has_room(&self) -> bool {
        self.len + 1 < self.buf.len()
    }

    fn push(&mut self, byte: u8) -> Result<(), Error> {
        if !self.has_room() {
            return Err(self.overflow());
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    fn push_all(&mut self, bytes: &[u8]) -> Result<(), Error> {
        bytes.iter().try_for_each(|b| self.push(*b))
    }

    fn insert_front(&mut self, byte: u8) -> Result<(), Error> {
        if !self.has_room() {
            return Err(self.overflow());
        }
        self.buf.copy_within(..self.len, 1);
        self.buf[0] = byte;
        self.len += 1;
        Ok(())
    }

    fn overflow(&mut self) -> Error {
        if let Some(first) = self.buf.first_mut() {
            *first = 0;
        }
        self.len = 0;
        Error::BufferTooSmall
    }

    fn finish(self) -> usize {
        self.buf[self.len] = 0;
        self.len
    }

    // digits are produced least significant first
    fn finish_reversed(self) -> usize {
        self.buf[..self.len].reverse();
        self.finish()
    }
}
