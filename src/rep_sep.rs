use crate::parser::{Parsed, Parser};
use crate::result::ParseResult;

/// Parser combinator that matches a list of items separated by a parser
///
/// Each round parses an item and then a separator. A separator only counts
/// as consumed once the item after it parses, so a trailing separator is left
/// in the remainder. Never fails: zero items yields an empty list and the
/// original cursor.
///
/// # Examples
/// - `"1,2,3"` with separator `,` → `[1, 2, 3]`, remainder `""`
/// - `"1,2,"` with separator `,` → `[1, 2]`, remainder `","`
/// - `"1,,3"` with separator `,` → `[1]`, remainder `",,3"`
///
/// # Note
/// - A malformed item after a separator ends the list; it is not reported
/// - Does not handle whitespace automatically
#[derive(Clone)]
pub struct RepSep<P, S> {
    parser: P,
    separator: S,
}

impl<P, S> RepSep<P, S> {
    pub fn new(parser: P, separator: S) -> Self {
        RepSep { parser, separator }
    }
}

impl<'code, P, S> Parser<'code> for RepSep<P, S>
where
    P: Parser<'code>,
    S: Parser<'code, Cursor = P::Cursor, Error = P::Error>,
{
    type Cursor = P::Cursor;
    type Output = Vec<P::Output>;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        let mut results = Vec::new();
        // End of the last item that parsed
        let mut confirmed = cursor;
        // Where the next item is expected, past a separator
        let mut next = cursor;

        while let Some((value, after_item)) = self.parser.parse(next).ok() {
            results.push(value);
            confirmed = after_item;

            match self.separator.parse(after_item).ok() {
                // Item and separator together consumed nothing: stop rather than spin
                Some((_, after_separator)) if after_separator != next => next = after_separator,
                _ => break,
            }
        }

        ParseResult::success(results, confirmed)
    }
}

/// Creates a parser that matches a list of items separated by the given parser
pub fn rep_sep<'code, P, S>(parser: P, separator: S) -> RepSep<P, S>
where
    P: Parser<'code>,
    S: Parser<'code, Cursor = P::Cursor, Error = P::Error>,
{
    RepSep::new(parser, separator)
}

/// Extension trait to add .rep_sep() method support for parsers
pub trait RepSepExt<'code>: Parser<'code> + Sized {
    fn rep_sep<S>(self, separator: S) -> RepSep<Self, S>
    where
        S: Parser<'code, Cursor = Self::Cursor, Error = Self::Error>,
    {
        RepSep::new(self, separator)
    }
}

/// Implement RepSepExt for all parsers
impl<'code, P> RepSepExt<'code> for P where P: Parser<'code> {}
