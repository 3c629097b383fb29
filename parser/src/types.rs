/// What a template fragment asks the formatter to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Token {
    /// Literal text, emitted byte by byte.
    Literal,
    /// `%s`
    Str,
    /// `%c`
    Char,
    /// `%u` (base 10), `%x` / `%X` (base 16)
    Unsigned(u32),
    /// `%i` / `%d`
    Signed(u32),
    /// `%f` or `%.Nf`; the payload is the number of fractional digits
    Float(u8),
    /// `%%`
    Percent,
    /// `%` followed by a character that is not a specifier; echoed as written
    Unknown(char),
    /// `%.` with optional digits followed by something other than `f`.
    ///
    /// Echoed as `%`, `.` and the offending character; the digits are dropped.
    UnknownPrecision(char),
}

/// The kind of argument a [`Token`] consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    /// A string slice.
    Str,
    /// A single character.
    Char,
    /// An unsigned 32-bit integer.
    Unsigned,
    /// A signed 32-bit integer.
    Signed,
    /// A floating point value.
    Float,
}

impl Token {
    /// The argument consumed by this token, if any.
    pub fn arg_kind(self) -> Option<ArgKind> {
        Some(match self {
            Token::Str => ArgKind::Str,
            Token::Char => ArgKind::Char,
            Token::Unsigned(_) => ArgKind::Unsigned,
            Token::Signed(_) => ArgKind::Signed,
            Token::Float(_) => ArgKind::Float,
            Token::Literal | Token::Percent | Token::Unknown(_) | Token::UnknownPrecision(_) => {
                return None
            }
        })
    }

    // everything after the `%`
    pub(crate) fn from_specifier(c: char) -> Self {
        match c {
            's' => Token::Str,
            'c' => Token::Char,
            'u' => Token::Unsigned(10),
            'i' | 'd' => Token::Signed(10),
            // both cases render with the converter's uppercase digits
            'x' | 'X' => Token::Unsigned(16),
            'f' => Token::Float(crate::DEFAULT_PRECISION),
            '%' => Token::Percent,
            other => Token::Unknown(other),
        }
    }
}
