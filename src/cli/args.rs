//! CLI argument parsing
//!
//! Flags follow getopt conventions: they may be clustered (`-dl`), may appear
//! before or after the positionals, and `--` ends flag parsing.

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Scan(ScanArgs),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanArgs {
    pub path: String,
    pub pattern: String,
    pub debug: bool,
    pub long_format: bool,
}

/// Parse command line arguments (`args[0]` is the program name)
///
/// Unknown flags are reported before `-h` is honoured, and `-h` wins over
/// missing positionals.
pub fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut scan_args = ScanArgs::default();
    let mut help = false;
    let mut positionals: Vec<&str> = Vec::new();
    let mut errors: Vec<String> = Vec::new();
    let mut flags_done = false;

    for arg in args.iter().skip(1) {
        if flags_done || arg == "-" || !arg.starts_with('-') {
            positionals.push(arg);
            continue;
        }
        if arg == "--" {
            flags_done = true;
            continue;
        }

        for flag in arg.chars().skip(1) {
            match flag {
                'd' => scan_args.debug = true,
                'h' => help = true,
                'l' => scan_args.long_format = true,
                other => errors.push(format!("Unknown option '{other}'")),
            }
        }
    }

    if !errors.is_empty() {
        return Err(Error::InvalidInput(errors.join("\n")));
    }

    if help {
        return Ok(CliArgs {
            command: Command::Help,
        });
    }

    // Positionals past the second are ignored
    let [path, pattern, ..] = positionals.as_slice() else {
        return Err(Error::InvalidInput(
            "Missing required arguments: dirname pattern".to_string(),
        ));
    };

    scan_args.path = (*path).to_string();
    scan_args.pattern = (*pattern).to_string();

    Ok(CliArgs {
        command: Command::Scan(scan_args),
    })
}

/// Usage summary printed for `-h` and after parameter errors
#[must_use]
pub fn usage(program: &str) -> String {
    format!(
        "Usage : {program} [-dhl] dirname pattern\n\n\
         d - invoke debugging mode\n\
         h - produce this summary\n\
         l - list file information in long format\n"
    )
}
