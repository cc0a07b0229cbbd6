/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pngview")
        .about("Decode, inspect and view 8 bit png images")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("out")
            .help("Write the decoded image as a PAM file")
            .long_help("Write the decoded image as a PAM (P7) file.\nWhen given, must be given once per input")
            .action(ArgAction::Append))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print header and chunk information as json and exit"))
        .arg(Arg::new("view")
            .long("view")
            .action(ArgAction::SetTrue)
            .help("Open the decoded image in the default image viewer"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("scale")
            .long("scale")
            .help_heading("OPERATIONS")
            .help("Scale the image by a factor")
            .long_help("Scale both dimensions by a factor, e.g 0.5 halves the image.\nResult is at least one pixel wide and tall")
            .value_parser(value_parser!(f64)))
        .arg(Arg::new("resize-method")
            .long("resize-method")
            .help_heading("OPERATIONS")
            .help("Resampling used by --scale")
            .value_parser(PossibleValuesParser::new(["nearest", "bilinear"]))
            .default_value("bilinear"))
        .arg(Arg::new("histogram")
            .long("histogram")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Print channel statistics")
            .long_help("Print per channel mean values.\nWith --view the histogram plot is opened too"))
        .arg(Arg::new("strict")
            .long("strict")
            .help_heading("ADVANCED")
            .action(ArgAction::SetTrue)
            .help("Treat recoverable errors as fatal")
            .long_help("Treat recoverable errors as fatal, e.g palette indices past the palette end"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of images allowed")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of images allowed")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("no-confirm-adler")
            .long("no-confirm-adler")
            .help_heading("ADVANCED")
            .action(ArgAction::SetTrue)
            .help("Skip zlib checksum confirmation"))
}

#[cfg(test)]
mod tests {
    use super::create_cmd_args;

    #[test]
    fn input_is_required() {
        assert!(create_cmd_args()
            .try_get_matches_from(["pngview", "--probe"])
            .is_err());
    }

    #[test]
    fn parse_operations() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "pngview",
                "-i",
                "a.png",
                "--input",
                "b.png",
                "--scale",
                "0.5",
                "--resize-method",
                "nearest",
                "--histogram"
            ])
            .unwrap();

        let inputs: Vec<&String> = matches.get_many::<String>("in").unwrap().collect();
        assert_eq!(inputs, ["a.png", "b.png"]);
        assert_eq!(matches.get_one::<f64>("scale"), Some(&0.5));
        assert_eq!(
            matches.get_one::<String>("resize-method").map(String::as_str),
            Some("nearest")
        );
        assert!(matches.get_flag("histogram"));
        assert!(!matches.get_flag("view"));
    }

    #[test]
    fn unknown_resize_method() {
        assert!(create_cmd_args()
            .try_get_matches_from(["pngview", "-i", "a.png", "--resize-method", "cubic"])
            .is_err());
    }
}
