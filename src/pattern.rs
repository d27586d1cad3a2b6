use crate::cursor::Cursor;
use crate::cursors::StrCursor;
use crate::error::LeafError;
use crate::parser::{Parsed, Parser};
use crate::result::ParseResult;
use ::regex::Regex;

/// Leaf parser backed by a regular expression
///
/// The pattern is anchored at the cursor: it must match starting exactly at
/// the current position, and yields the matched slice of the source.
#[derive(Debug, Clone)]
pub struct RegexParser {
    pattern: String,
    regex: Regex,
}

impl RegexParser {
    pub fn new(pattern: &str) -> Result<Self, ::regex::Error> {
        let regex = Regex::new(&format!("^(?:{})", pattern))?;
        Ok(RegexParser {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as given, without the anchoring
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl<'code> Parser<'code> for RegexParser {
    type Cursor = StrCursor<'code>;
    type Output = &'code str;
    type Error = LeafError;

    fn parse(&self, cursor: Self::Cursor) -> Parsed<'code, Self> {
        match self.regex.find(cursor.remaining()) {
            Some(found) => ParseResult::success(found.as_str(), cursor.skip_bytes(found.end())),
            None if cursor.eos() => ParseResult::fail(LeafError::end_of_input(&cursor)),
            None => ParseResult::fail(LeafError::NoMatch {
                pattern: self.pattern.clone(),
                loc: cursor.location(),
            }),
        }
    }
}

/// Compile `pattern` into a parser
pub fn regex(pattern: &str) -> Result<RegexParser, ::regex::Error> {
    RegexParser::new(pattern)
}
