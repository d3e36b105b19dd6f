//! Segmentation of glyph-table text into [`CharacterBlock`]s.

use core::{iter::Enumerate, str::Lines};

/// Returns an [`Iterator`] over the [`CharacterBlock`]s in `text`.
///
/// Blocks are separated by one or more blank lines, where a line holding only whitespace counts
/// as blank. Every line of a yielded block is trimmed and non-empty.
pub fn blocks(text: &str) -> Blocks<'_> {
    Blocks {
        lines: text.lines().enumerate(),
        index: 0,
    }
}

/// A maximal run of non-blank lines describing a single character.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct CharacterBlock<'text> {
    /// The 1-based position of the block in its source text.
    index: usize,
    /// The 1-based line number of the block's first line.
    first_line: usize,
    /// The lines that make up the block.
    lines: Vec<&'text str>,
}

impl<'text> CharacterBlock<'text> {
    /// Creates a new [`CharacterBlock`] from its position and lines.
    pub const fn new(index: usize, first_line: usize, lines: Vec<&'text str>) -> Self {
        Self {
            index,
            first_line,
            lines,
        }
    }

    /// Returns the 1-based position of the block in its source text.
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns the 1-based line number of the block's first line.
    pub const fn first_line(&self) -> usize {
        self.first_line
    }

    /// Returns the lines that make up the block.
    pub fn lines(&self) -> &[&'text str] {
        &self.lines
    }
}

/// An [`Iterator`] over the [`CharacterBlock`]s of some text.
#[derive(Clone, Debug)]
pub struct Blocks<'text> {
    /// The remaining lines, paired with their 0-based line index.
    lines: Enumerate<Lines<'text>>,
    /// The number of blocks yielded so far.
    index: usize,
}

impl<'text> Iterator for Blocks<'text> {
    type Item = CharacterBlock<'text>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut lines = Vec::new();
        let mut first_line = 0;

        for (line_index, line) in self.lines.by_ref() {
            let line = line.trim();
            if line.is_empty() {
                if lines.is_empty() {
                    continue;
                }

                break;
            }

            if lines.is_empty() {
                first_line = line_index + 1;
            }
            lines.push(line);
        }

        if lines.is_empty() {
            return None;
        }

        self.index += 1;
        Some(CharacterBlock::new(self.index, first_line, lines))
    }
}

#[cfg(test)]
mod test {
    use super::blocks;

    #[test]
    fn splits_on_blank_lines() {
        let text = "A\n##\n##\n\nB\n#.\n";
        let blocks = blocks(text).collect::<Vec<_>>();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].lines(), ["A", "##", "##"]);
        assert_eq!(blocks[1].lines(), ["B", "#."]);
    }

    #[test]
    fn whitespace_only_lines_separate_blocks() {
        let text = "A\n#\n   \t\nB\n.\n";
        let blocks = blocks(text).collect::<Vec<_>>();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[1].lines(), ["B", "."]);
    }

    #[test]
    fn runs_of_blank_lines_yield_no_empty_blocks() {
        let text = "\n\n  \nA\n#\n\n\n\n\nB\n.\n\n\n   \n";
        let blocks = blocks(text).collect::<Vec<_>>();

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].index(), 1);
        assert_eq!(blocks[1].index(), 2);
    }

    #[test]
    fn lines_are_trimmed() {
        let text = "  A:  \n\t##. \r\n .## \n";
        let block = blocks(text).next().unwrap();

        assert_eq!(block.lines(), ["A:", "##.", ".##"]);
    }

    #[test]
    fn records_first_line_numbers() {
        let text = "\nA\n#\n\n\nB\n#\n";
        let blocks = blocks(text).collect::<Vec<_>>();

        assert_eq!(blocks[0].first_line(), 2);
        assert_eq!(blocks[1].first_line(), 6);
    }

    #[test]
    fn empty_text_has_no_blocks() {
        assert_eq!(blocks("").count(), 0);
        assert_eq!(blocks("\n \n\t\n").count(), 0);
    }
}
