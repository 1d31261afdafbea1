mod cli;

use std::process::ExitCode;

use clap::Parser;
use wificard::CardError;

use crate::cli::Cli;

/// Initialize the logger; `RUST_LOG` overrides the chosen level.
fn init_logger(verbose: bool) {
    use env_logger::Builder;
    use std::io::Write;

    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            let code = err
                .downcast_ref::<CardError>()
                .map(CardError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
