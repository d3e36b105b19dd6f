//! Tool for converting plain-text glyph-table descriptions into glyph-table source fragments.

use core::{error, fmt};
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use font_text::{ParseError, ParseOptions, parse_document, render_document};

/// The input path used when none is provided.
pub const DEFAULT_INPUT_PATH: &str = "font.txt";
/// The output path used when none is provided.
pub const DEFAULT_OUTPUT_PATH: &str = "font_output.txt";

/// Description of a single conversion.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ConvertConfig {
    /// The path of the glyph-table description to read.
    pub input_path: PathBuf,
    /// The path of the file to which the rendered records are written.
    pub output_path: PathBuf,
    /// Options controlling how the description is parsed.
    pub options: ParseOptions,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            options: ParseOptions::default(),
        }
    }
}

/// The rendered form of a glyph-table description.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct RenderedDocument {
    /// The rendered records, separated by blank lines.
    pub text: String,
    /// The number of records in `text`.
    pub record_count: usize,
    /// The number of malformed blocks that were skipped.
    pub skipped_blocks: usize,
}

/// Information about a successful conversion.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct ConvertSummary {
    /// The path to which the output was written.
    pub output_path: PathBuf,
    /// The number of records written.
    pub record_count: usize,
    /// The number of malformed blocks that were skipped.
    pub skipped_blocks: usize,
}

/// Parses `text` as a glyph-table description and renders every record.
///
/// # Errors
///
/// Returns a [`ParseError`] if a block is malformed and [`ParseOptions::skip_malformed`] is not
/// set.
pub fn convert_str(text: &str, options: &ParseOptions) -> Result<RenderedDocument, ParseError> {
    let document = parse_document(text, options)?;

    Ok(RenderedDocument {
        text: render_document(&document.records),
        record_count: document.records.len(),
        skipped_blocks: document.skipped_blocks,
    })
}

/// Reads the description at [`ConvertConfig::input_path`] and writes its rendered records to
/// [`ConvertConfig::output_path`], replacing any existing file.
///
/// The whole output is rendered before the output file is touched, so no output is written when
/// reading or parsing fails.
///
/// # Errors
///
/// - [`ConvertError::InputNotFound`]: Returned if the input file cannot be opened.
/// - [`ConvertError::InputRead`]: Returned if the input file is not valid UTF-8 text.
/// - [`ConvertError::Parse`]: Returned if a block is malformed.
/// - [`ConvertError::OutputWrite`]: Returned if the output file cannot be written.
pub fn convert(config: &ConvertConfig) -> Result<ConvertSummary, ConvertError> {
    let text = read_input(&config.input_path)?;
    let rendered = convert_str(&text, &config.options)?;

    fs::write(&config.output_path, &rendered.text).map_err(|source| ConvertError::OutputWrite {
        path: config.output_path.clone(),
        source,
    })?;

    tracing::info!(
        input = %config.input_path.display(),
        output = %config.output_path.display(),
        records = rendered.record_count,
        skipped = rendered.skipped_blocks,
        "conversion completed"
    );

    Ok(ConvertSummary {
        output_path: config.output_path.clone(),
        record_count: rendered.record_count,
        skipped_blocks: rendered.skipped_blocks,
    })
}

/// Reads the entire file at `path` as UTF-8 text.
fn read_input(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::InvalidData => ConvertError::InputRead {
            path: path.to_path_buf(),
            source,
        },
        _ => ConvertError::InputNotFound {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Various errors that can occur while converting a glyph-table description.
#[derive(Debug)]
pub enum ConvertError {
    /// The input file does not exist or could not be opened.
    InputNotFound {
        /// The path of the input file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// The input file could not be read as UTF-8 text.
    InputRead {
        /// The path of the input file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// A block of the input is malformed.
    Parse(ParseError),
    /// The output file could not be created or written.
    OutputWrite {
        /// The path of the output file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}

impl From<ParseError> for ConvertError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputNotFound { path, .. } => {
                write!(f, "file \"{}\" not found", path.display())
            }
            Self::InputRead { path, .. } => {
                write!(f, "error reading \"{}\" as UTF-8 text", path.display())
            }
            Self::Parse(error) => write!(f, "malformed block: {error}"),
            Self::OutputWrite { path, .. } => {
                write!(f, "error writing output to \"{}\"", path.display())
            }
        }
    }
}

impl error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InputNotFound { source, .. }
            | Self::InputRead { source, .. }
            | Self::OutputWrite { source, .. } => Some(source),
            Self::Parse(error) => Some(error),
        }
    }
}
