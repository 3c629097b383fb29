use emlog_parser::ArgKind;

use crate::ArgError;

/// One argument of a formatted message.
///
/// Build these with `From` (the logging macros do it for you):
///
/// ```
/// use emlog::Arg;
///
/// let args = [Arg::from("pump"), Arg::from(3u32), Arg::from(-1.5f32)];
/// assert_eq!(args[1], Arg::Unsigned(3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Arg<'a> {
    /// Rendered by `%s`.
    Str(&'a str),
    /// Rendered by `%c`.
    Char(char),
    /// Rendered by `%u`, `%x` and `%X`.
    Unsigned(u32),
    /// Rendered by `%i` and `%d`.
    Signed(i32),
    /// Rendered by `%f` and `%.Nf`.
    Float(f64),
}

impl Arg<'_> {
    /// The kind of this argument.
    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Str(_) => ArgKind::Str,
            Arg::Char(_) => ArgKind::Char,
            Arg::Unsigned(_) => ArgKind::Unsigned,
            Arg::Signed(_) => ArgKind::Signed,
            Arg::Float(_) => ArgKind::Float,
        }
    }

    /// Integers reinterpret their bits across signedness, like C varargs do.
    pub(crate) fn as_unsigned(&self) -> Option<u32> {
        match *self {
            Arg::Unsigned(v) => Some(v),
            Arg::Signed(v) => Some(v as u32),
            _ => None,
        }
    }

    pub(crate) fn as_signed(&self) -> Option<i32> {
        match *self {
            Arg::Signed(v) => Some(v),
            Arg::Unsigned(v) => Some(v as i32),
            _ => None,
        }
    }

    /// Whether a specifier consuming `kind` can render this argument.
    pub fn fits(&self, kind: ArgKind) -> bool {
        match kind {
            ArgKind::Str => matches!(self, Arg::Str(_)),
            ArgKind::Char => matches!(self, Arg::Char(_)),
            ArgKind::Unsigned => self.as_unsigned().is_some(),
            ArgKind::Signed => self.as_signed().is_some(),
            ArgKind::Float => matches!(self, Arg::Float(_)),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(s: &'a str) -> Self {
        Arg::Str(s)
    }
}

impl From<char> for Arg<'_> {
    fn from(c: char) -> Self {
        Arg::Char(c)
    }
}

macro_rules! from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(v: $ty) -> Self {
                    Arg::Unsigned(v.into())
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg<'_> {
                fn from(v: $ty) -> Self {
                    Arg::Signed(v.into())
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32);
from_signed!(i8, i16, i32);

impl From<bool> for Arg<'_> {
    fn from(b: bool) -> Self {
        Arg::Unsigned(b.into())
    }
}

impl From<f32> for Arg<'_> {
    fn from(v: f32) -> Self {
        Arg::Float(v.into())
    }
}

impl From<f64> for Arg<'_> {
    fn from(v: f64) -> Self {
        Arg::Float(v)
    }
}

/// Checks that `args` match the specifiers of `template`, in order and in number.
///
/// The formatter itself never fails: it echoes a specifier whose argument is missing or of the
/// wrong kind. Use this in tests or debug builds to catch such templates early.
///
/// ```
/// use emlog::{check_args, Arg, ArgError};
///
/// assert_eq!(check_args("%s=%u", &[Arg::from("x"), Arg::from(1u8)]), Ok(()));
/// assert_eq!(check_args("%s=%u", &[Arg::from("x")]), Err(ArgError::Missing { index: 1 }));
/// ```
pub fn check_args(template: &str, args: &[Arg<'_>]) -> Result<(), ArgError> {
    let mut consumed = 0;
    for (index, expected) in emlog_parser::arg_kinds(template).enumerate() {
        let arg = args.get(index).ok_or(ArgError::Missing { index })?;
        if !arg.fits(expected) {
            return Err(ArgError::Mismatch {
                index,
                expected,
                found: arg.kind(),
            });
        }
        consumed += 1;
    }

    match args.len() - consumed {
        0 => Ok(()),
        count => Err(ArgError::Unused { count }),
    }
}
