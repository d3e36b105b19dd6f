//! Parsing and rendering of the plain-text glyph-table format.
//!
//! A glyph-table description is a sequence of blank-line separated blocks. The first line of each
//! block names the character, and the remaining lines hold the glyph's rows. Each block is parsed
//! into a [`CharacterRecord`] and rendered as a literal match arm suitable for inclusion in a
//! static glyph table.

pub mod block;
pub mod record;
pub mod render;

pub use block::{CharacterBlock, blocks};
pub use record::{
    CharacterRecord, Identifier, IdentifierPolicy, ParseError, ParseOptions, ParsedDocument,
    parse_block, parse_document,
};
pub use render::{render_document, render_record};
