//! Rendering of [`CharacterRecord`]s as glyph-table match arms.
//!
//! Each record is rendered as:
//!
//! ```text
//! b'A' => Char {
//!     data: [
//!         "##",
//!         "##",
//!     ],
//! },
//! ```

use core::fmt;

use crate::record::CharacterRecord;

/// The text placed between consecutive rendered records.
pub const RECORD_SEPARATOR: &str = "\n\n";

impl fmt::Display for CharacterRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "b'{}' => Char {{", self.identifier())?;
        writeln!(f, "    data: [")?;
        for row in self.rows() {
            writeln!(f, "        \"{row}\",")?;
        }
        writeln!(f, "    ],")?;
        write!(f, "}},")
    }
}

/// Renders a single [`CharacterRecord`].
///
/// Row contents are inserted verbatim.
pub fn render_record(record: &CharacterRecord<'_>) -> String {
    record.to_string()
}

/// Renders `records` in order, separated by a single blank line.
///
/// No separator precedes the first record or follows the last.
pub fn render_document(records: &[CharacterRecord<'_>]) -> String {
    records
        .iter()
        .map(render_record)
        .collect::<Vec<_>>()
        .join(RECORD_SEPARATOR)
}

#[cfg(test)]
mod test {
    use super::{render_document, render_record};
    use crate::record::{CharacterRecord, Identifier, ParseOptions, parse_document};

    #[test]
    fn record_template() {
        let record = CharacterRecord::new(Identifier::new('A'), vec!["##.", ".##", "..."]);

        assert_eq!(
            render_record(&record),
            "b'A' => Char {\n    data: [\n        \"##.\",\n        \".##\",\n        \"...\",\n    ],\n},"
        );
    }

    #[test]
    fn escaped_identifiers() {
        let quote = CharacterRecord::new(Identifier::new('\''), vec!["#"]);
        let backslash = CharacterRecord::new(Identifier::new('\\'), vec!["#"]);

        assert!(render_record(&quote).starts_with("b'\\'' => Char {"));
        assert!(render_record(&backslash).starts_with("b'\\\\' => Char {"));
    }

    #[test]
    fn record_without_rows() {
        let record = CharacterRecord::new(Identifier::new(' '), Vec::new());

        assert_eq!(render_record(&record), "b' ' => Char {\n    data: [\n    ],\n},");
    }

    #[test]
    fn empty_document() {
        assert_eq!(render_document(&[]), "");
    }

    #[test]
    fn documents_are_separated_by_one_blank_line() {
        let text = "A\n##\n##\n\n'\n#.\n.#\n";
        let document = parse_document(text, &ParseOptions::default()).unwrap();

        let expected = "\
b'A' => Char {
    data: [
        \"##\",
        \"##\",
    ],
},

b'\\'' => Char {
    data: [
        \"#.\",
        \".#\",
    ],
},";
        assert_eq!(render_document(&document.records), expected);
    }

    #[test]
    fn record_count_matches_block_count() {
        let text = "a\n#\n\n\n  \nb\n#\n\nc\n#\n\nd\n\n\n";
        let document = parse_document(text, &ParseOptions::default()).unwrap();
        let rendered = render_document(&document.records);

        assert_eq!(rendered.matches(" => Char {").count(), 4);
        assert!(!rendered.starts_with('\n'));
        assert!(rendered.ends_with("},"));
    }
}
