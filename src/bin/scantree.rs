//! Directory tree scanner (scantree) - Main binary entry point

use scantree::ScanConfig;
use scantree::cli::args::{Command, ScanArgs, parse_args, usage};
use std::io;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("scantree", String::as_str);

    let cli_args = match parse_args(&args) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            eprint!("{}", usage(program));
            eprintln!("\nAborted due to parameter errors");
            process::exit(exit_code(&e));
        }
    };

    let scan_args = match cli_args.command {
        Command::Help => {
            eprint!("{}", usage(program));
            print_version();
            return;
        }
        Command::Scan(scan_args) => scan_args,
    };

    process::exit(handle_scan(&scan_args));
}

/// Logger honours RUST_LOG; `-d` forces debug output onto stdout.
fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Stdout);
    }
    builder.init();
}

fn handle_scan(args: &ScanArgs) -> i32 {
    let config = match ScanConfig::new(&args.pattern, args.long_format) {
        Ok(config) => config.with_debug(args.debug),
        Err(e) => {
            eprintln!("{e}");
            return exit_code(&e);
        }
    };

    init_logging(config.debug);
    log::debug!(
        "Pattern {:?}, long format {}",
        config.matcher.as_str(),
        config.long_format
    );

    let stdout = io::stdout();
    let stderr = io::stderr();

    match scantree::scan_tree(&args.path, &config, stdout.lock(), stderr.lock()) {
        Ok(summary) => {
            let elapsed = summary
                .finished_at
                .duration_since(summary.started_at)
                .unwrap_or_default();
            log::info!(
                "Scanned {}: {} directories, {} entries, {} matches, {} warnings in {elapsed:?}",
                summary.root,
                summary.directories,
                summary.entries,
                summary.matches,
                summary.errors.len(),
            );
            0
        }
        Err(e) => {
            eprintln!("{e}");
            exit_code(&e)
        }
    }
}

/// Every fatal condition exits with status 1.
fn exit_code(err: &scantree::Error) -> i32 {
    match err {
        scantree::Error::InvalidInput(_)
        | scantree::Error::InvalidPattern(_)
        | scantree::Error::OpenFailed { .. }
        | scantree::Error::Io(_) => 1,
    }
}

fn print_version() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DATE: &str = env!("GIT_DATE");
    const BUILD_TARGET: &str = env!("BUILD_TARGET");

    eprintln!();
    eprintln!("scantree {VERSION}");
    eprintln!("Commit: {GIT_HASH} ({GIT_DATE})");
    eprintln!("Target: {BUILD_TARGET}");
}
