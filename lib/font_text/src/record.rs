//! Parsing of [`CharacterBlock`]s into [`CharacterRecord`]s.

use core::{error, fmt};

use crate::block::{CharacterBlock, blocks};

/// The character named by a [`CharacterBlock`]'s identifier line.
///
/// The [`Display`][fmt::Display] implementation produces the form used inside a quoted byte
/// literal: `'` and `\` are escaped with a leading `\`, all other characters are written as is.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Identifier(char);

impl Identifier {
    /// Creates a new [`Identifier`] for `c`.
    pub const fn new(c: char) -> Self {
        Self(c)
    }

    /// Returns the unescaped character.
    pub const fn as_char(self) -> char {
        self.0
    }

    /// Returns `true` if the character must be escaped inside a quoted literal.
    pub const fn needs_escape(self) -> bool {
        matches!(self.0, '\'' | '\\')
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.needs_escape() {
            write!(f, "\\{}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// The parsed contents of a single [`CharacterBlock`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct CharacterRecord<'text> {
    /// The character that the glyph describes.
    identifier: Identifier,
    /// The glyph's rows, from top to bottom.
    rows: Vec<&'text str>,
}

impl<'text> CharacterRecord<'text> {
    /// Creates a new [`CharacterRecord`].
    pub const fn new(identifier: Identifier, rows: Vec<&'text str>) -> Self {
        Self { identifier, rows }
    }

    /// Returns the [`Identifier`] of the character.
    pub const fn identifier(&self) -> Identifier {
        self.identifier
    }

    /// Returns the glyph's rows, from top to bottom.
    pub fn rows(&self) -> &[&'text str] {
        &self.rows
    }
}

/// Controls how much of the identifier line is significant.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub enum IdentifierPolicy {
    /// The first character is the identifier and the rest of the line is ignored.
    #[default]
    Lenient,
    /// The identifier line must be a single character, optionally followed by a `:`.
    Strict,
}

/// Options that control parsing of a glyph-table description.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq)]
pub struct ParseOptions {
    /// How the identifier line is interpreted.
    pub identifier_policy: IdentifierPolicy,
    /// If `true`, malformed blocks are skipped with a warning instead of failing the parse.
    pub skip_malformed: bool,
}

/// Parses `block` into a [`CharacterRecord`].
///
/// The identifier is the first character of the block's first line. Every remaining non-empty
/// line becomes a row, in order.
///
/// # Errors
///
/// - [`ParseError::EmptyIdentifier`]: Returned if the block has no lines or its first line is
///   blank.
/// - [`ParseError::IdentifierTooLong`]: Returned if `policy` is [`IdentifierPolicy::Strict`] and
///   the identifier line holds more than the identifier and an optional `:`.
pub fn parse_block<'text>(
    block: &CharacterBlock<'text>,
    policy: IdentifierPolicy,
) -> Result<CharacterRecord<'text>, ParseError> {
    let Some((identifier_line, data_lines)) = block.lines().split_first() else {
        return Err(ParseError::EmptyIdentifier {
            block: block.index(),
            line: block.first_line(),
        });
    };

    let mut chars = identifier_line.trim().chars();
    let Some(identifier) = chars.next() else {
        return Err(ParseError::EmptyIdentifier {
            block: block.index(),
            line: block.first_line(),
        });
    };

    if policy == IdentifierPolicy::Strict && !matches!(chars.as_str(), "" | ":") {
        return Err(ParseError::IdentifierTooLong {
            block: block.index(),
            line: block.first_line(),
            identifier_line: identifier_line.trim().to_owned(),
        });
    }

    let rows = data_lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    Ok(CharacterRecord::new(Identifier::new(identifier), rows))
}

/// The [`CharacterRecord`]s parsed from a glyph-table description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedDocument<'text> {
    /// The records, in the order their blocks appeared.
    pub records: Vec<CharacterRecord<'text>>,
    /// The number of malformed blocks that were skipped.
    pub skipped_blocks: usize,
}

/// Parses every block in `text`, in order.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered, unless [`ParseOptions::skip_malformed`] is set,
/// in which case malformed blocks are logged and counted in [`ParsedDocument::skipped_blocks`].
pub fn parse_document<'text>(
    text: &'text str,
    options: &ParseOptions,
) -> Result<ParsedDocument<'text>, ParseError> {
    let mut document = ParsedDocument::default();

    for block in blocks(text) {
        match parse_block(&block, options.identifier_policy) {
            Ok(record) => {
                tracing::debug!(
                    block = block.index(),
                    line = block.first_line(),
                    identifier = %record.identifier(),
                    rows = record.rows().len(),
                    "parsed block"
                );
                document.records.push(record);
            }
            Err(error) if options.skip_malformed => {
                tracing::warn!(%error, "skipping malformed block");
                document.skipped_blocks += 1;
            }
            Err(error) => return Err(error),
        }
    }

    Ok(document)
}

/// Various errors that can occur while parsing a [`CharacterBlock`].
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub enum ParseError {
    /// The identifier line of the block is empty.
    EmptyIdentifier {
        /// The 1-based position of the block.
        block: usize,
        /// The 1-based line number of the block's first line.
        line: usize,
    },
    /// The identifier line holds more than a single character.
    IdentifierTooLong {
        /// The 1-based position of the block.
        block: usize,
        /// The 1-based line number of the block's first line.
        line: usize,
        /// The offending identifier line.
        identifier_line: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyIdentifier { block, line } => {
                write!(f, "block {block} (line {line}) has an empty identifier line")
            }
            Self::IdentifierTooLong {
                block,
                line,
                identifier_line,
            } => write!(
                f,
                "block {block} (line {line}) has identifier line {identifier_line:?} but expected a single character"
            ),
        }
    }
}

impl error::Error for ParseError {}
