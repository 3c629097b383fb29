use emlog_convert as convert;
use emlog_parser::{Fragment, Token};

use crate::{transport::Transport, Arg};

/// Scratch space for one rendered number; fits `i32::MIN`, 32 binary digits and the longest float.
const SCRATCH_LEN: usize = 40;

/// Interprets `template` against `args` and writes the result to `out`.
///
/// Specifiers consume `args` left to right. A specifier whose argument is missing or of the wrong
/// kind is echoed as written (e.g. `%u`), and so are specifiers this formatter does not know
/// (`%.3q` is echoed as `%.q`).
/// Surplus arguments are ignored.
pub fn write_formatted<T>(out: &mut T, template: &str, args: &[Arg<'_>])
where
    T: Transport + ?Sized,
{
    let mut args = args.iter();
    for fragment in emlog_parser::parse(template) {
        let Fragment { token, source } = fragment;
        match token {
            Token::Literal => source.bytes().for_each(|b| out.put_char(b)),
            Token::Percent => out.put_char(b'%'),
            Token::Unknown(c) => {
                out.put_char(b'%');
                put_char(out, c);
            }
            // precision digits are not echoed
            Token::UnknownPrecision(c) => {
                out.put_char(b'%');
                out.put_char(b'.');
                put_char(out, c);
            }
            _ => match args.next() {
                Some(arg) if token.arg_kind().map_or(false, |kind| arg.fits(kind)) => {
                    write_arg(out, token, arg)
                }
                _ => out.put_str(source),
            },
        }
    }
}

fn write_arg<T>(out: &mut T, token: Token, arg: &Arg<'_>)
where
    T: Transport + ?Sized,
{
    let mut scratch = [0u8; SCRATCH_LEN];
    let rendered = match (token, *arg) {
        (Token::Str, Arg::Str(s)) => return out.put_str(s),
        (Token::Char, Arg::Char(c)) => return put_char(out, c),
        (Token::Unsigned(base), arg) => match arg.as_unsigned() {
            Some(v) => convert::unsigned_to_text(v, &mut scratch, base),
            None => return,
        },
        (Token::Signed(base), arg) => match arg.as_signed() {
            Some(v) => convert::signed_to_text(v, &mut scratch, base),
            None => return,
        },
        (Token::Float(places), Arg::Float(v)) => convert::float_to_text(v, &mut scratch, places),
        _ => return,
    };

    // a failed conversion leaves nothing to print
    if let Ok(len) = rendered {
        out.put_str(convert::as_str(&scratch, len));
    }
}

fn put_char<T>(out: &mut T, c: char)
where
    T: Transport + ?Sized,
{
    if c.is_ascii() {
        out.put_char(c as u8);
    } else {
        let mut utf8 = [0; 4];
        out.put_str(c.encode_utf8(&mut utf8));
    }
}
