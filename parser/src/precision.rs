use crate::{DEFAULT_PRECISION, MAX_PRECISION};

/// Parses the digits of a `%.NNf` precision at the start of `s`.
///
/// At most two digits are consumed. Returns the precision and the number of bytes consumed. A
/// value above [`MAX_PRECISION`] is clamped, a zero (or absent) value becomes
/// [`DEFAULT_PRECISION`].
pub(crate) fn parse(s: &str) -> (u8, usize) {
    let mut value = 0u8;
    let mut consumed = 0;
    for b in s.as_bytes().iter().take(2) {
        if !b.is_ascii_digit() {
            break;
        }
        value = value * 10 + (b - b'0');
        consumed += 1;
    }

    let precision = match value {
        0 => DEFAULT_PRECISION,
        v if v > MAX_PRECISION => MAX_PRECISION,
        v => v,
    };
    (precision, consumed)
}
