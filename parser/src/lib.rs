//! Scanner for [`emlog`] format templates.
//!
//! A template is a string with `printf`-like specifiers. Only the small subset below is
//! recognized; everything else (widths, flags, length modifiers) is echoed literally by the
//! formatter.
//!
//! | Specifier       | Argument              |
//! |-----------------|-----------------------|
//! | `%s`            | string                |
//! | `%c`            | character             |
//! | `%u`            | unsigned, base 10     |
//! | `%i`, `%d`      | signed, base 10       |
//! | `%x`, `%X`      | unsigned, base 16     |
//! | `%f`, `%.Nf`    | float, `N` in `1..=15` |
//! | `%%`            | none, a literal `%`   |
//!
//! Scanning never allocates and never fails: [`Tokens`] yields one [`Fragment`] per literal run
//! or specifier and silently stops at a trailing incomplete specifier.
//!
//! [`emlog`]: https://docs.rs/emlog

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

mod precision;
mod types;

pub use crate::types::{ArgKind, Token};

/// Fractional digits used by `%f` and by a `%.Nf` whose `N` is zero.
pub const DEFAULT_PRECISION: u8 = 2;
/// Largest accepted `%.Nf` precision; larger values are clamped.
pub const MAX_PRECISION: u8 = 15;

/// A part of a template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fragment<'t> {
    /// What this fragment does.
    pub token: Token,
    /// The template text this fragment was scanned from (e.g. `"%.3f"` or `"hello "`).
    pub source: &'t str,
}

/// Iterator over the [`Fragment`]s of a template.
#[derive(Clone, Debug)]
pub struct Tokens<'t> {
    template: &'t str,
    pos: usize,
}

impl<'t> Tokens<'t> {
    /// Starts scanning `template`.
    pub fn new(template: &'t str) -> Self {
        Self { template, pos: 0 }
    }

    fn fragment(&mut self, start: usize, end: usize, token: Token) -> Fragment<'t> {
        self.pos = end;
        Fragment {
            token,
            source: &self.template[start..end],
        }
    }

    // stop silently: the rest of the template is an incomplete specifier
    fn exhaust(&mut self) -> Option<Fragment<'t>> {
        self.pos = self.template.len();
        None
    }
}

impl<'t> Iterator for Tokens<'t> {
    type Item = Fragment<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos;
        let rest = self.template.get(start..)?;
        if rest.is_empty() {
            return None;
        }

        if !rest.starts_with('%') {
            let len = rest.find('%').unwrap_or(rest.len());
            return Some(self.fragment(start, start + len, Token::Literal));
        }

        // `%` is one byte
        let after_percent = &rest[1..];
        let specifier = match after_percent.chars().next() {
            Some(c) => c,
            None => return self.exhaust(),
        };

        if specifier != '.' {
            let end = start + 1 + specifier.len_utf8();
            return Some(self.fragment(start, end, Token::from_specifier(specifier)));
        }

        let digits = &after_percent[1..];
        let (precision, consumed) = precision::parse(digits);
        let trailing = match digits[consumed..].chars().next() {
            Some(c) => c,
            None => return self.exhaust(),
        };

        let end = start + 2 + consumed + trailing.len_utf8();
        let token = if trailing == 'f' {
            Token::Float(precision)
        } else {
            Token::UnknownPrecision(trailing)
        };
        Some(self.fragment(start, end, token))
    }
}

/// Scans `template`.
pub fn parse(template: &str) -> Tokens<'_> {
    Tokens::new(template)
}

/// Returns the argument kinds `template` consumes, in order.
pub fn arg_kinds(template: &str) -> impl Iterator<Item = ArgKind> + '_ {
    parse(template).filter_map(|fragment| fragment.token.arg_kind())
}
