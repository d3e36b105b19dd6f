//! Command line parsing and [`ConvertConfig`] construction.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use font_converter::{ConvertConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};
use font_text::{IdentifierPolicy, ParseOptions};

/// Parses `font-converter`'s arguments to construct a [`ConvertConfig`].
pub fn get_config() -> ConvertConfig {
    parse_arguments(&command_parser().get_matches())
}

/// Parses the arguments required to produce a valid [`ConvertConfig`].
pub fn parse_arguments(matches: &ArgMatches) -> ConvertConfig {
    let input_path = matches
        .get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| unreachable!("`input` should have a default value"));

    let output_path = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| unreachable!("`output` should have a default value"));

    let identifier_policy = if matches.get_flag("strict") {
        IdentifierPolicy::Strict
    } else {
        IdentifierPolicy::Lenient
    };

    ConvertConfig {
        input_path,
        output_path,
        options: ParseOptions {
            identifier_policy,
            skip_malformed: matches.get_flag("skip-malformed"),
        },
    }
}

/// Returns the command parser for `font-converter`.
pub fn command_parser() -> Command {
    let input = Arg::new("input")
        .value_name("INPUT")
        .help("Path to the glyph-table description")
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_INPUT_PATH);

    let output = Arg::new("output")
        .value_name("OUTPUT")
        .help("Path to which the rendered glyph table is written")
        .value_parser(value_parser!(PathBuf))
        .default_value(DEFAULT_OUTPUT_PATH);

    let strict = Arg::new("strict")
        .long("strict")
        .help("Reject identifier lines holding more than one character and an optional `:`")
        .action(ArgAction::SetTrue);

    let skip_malformed = Arg::new("skip-malformed")
        .long("skip-malformed")
        .help("Skip malformed blocks with a warning instead of failing")
        .action(ArgAction::SetTrue);

    Command::new("font-converter")
        .about("Converts a plain-text glyph-table description into glyph-table source")
        .arg(input)
        .arg(output)
        .arg(strict)
        .arg(skip_malformed)
}

#[cfg(test)]
mod test {
    use std::path::Path;

    use font_text::IdentifierPolicy;

    use super::{command_parser, parse_arguments};

    #[test]
    fn defaults() {
        let matches = command_parser()
            .try_get_matches_from(["font-converter"])
            .unwrap();
        let config = parse_arguments(&matches);

        assert_eq!(config.input_path, Path::new("font.txt"));
        assert_eq!(config.output_path, Path::new("font_output.txt"));
        assert_eq!(config.options.identifier_policy, IdentifierPolicy::Lenient);
        assert!(!config.options.skip_malformed);
    }

    #[test]
    fn positional_paths() {
        let matches = command_parser()
            .try_get_matches_from(["font-converter", "glyphs.txt", "out/glyphs.rs"])
            .unwrap();
        let config = parse_arguments(&matches);

        assert_eq!(config.input_path, Path::new("glyphs.txt"));
        assert_eq!(config.output_path, Path::new("out/glyphs.rs"));
    }

    #[test]
    fn flags() {
        let matches = command_parser()
            .try_get_matches_from(["font-converter", "--strict", "--skip-malformed", "in.txt"])
            .unwrap();
        let config = parse_arguments(&matches);

        assert_eq!(config.input_path, Path::new("in.txt"));
        assert_eq!(config.output_path, Path::new("font_output.txt"));
        assert_eq!(config.options.identifier_policy, IdentifierPolicy::Strict);
        assert!(config.options.skip_malformed);
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(
            command_parser()
                .try_get_matches_from(["font-converter", "--format", "c"])
                .is_err()
        );
    }

    #[test]
    fn command_is_well_formed() {
        command_parser().debug_assert();
    }
}
