#![deny(clippy::all)]
#![deny(clippy::use_self)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

use std::{io, process::ExitCode, time::Instant};

use clap::Parser;
use craftkit::{
    command::{Cli, CommandContext},
    init_log,
};
use craftkit_config::{logging::LoggingConfig, Configuration};

fn main() -> ExitCode {
    let time = Instant::now();
    let cli = Cli::parse();

    let config = match Configuration::load(&cli.config_dir) {
        Ok(config) => config,
        Err(err) => {
            init_log(&LoggingConfig::default(), cli.verbose);
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    init_log(&config.advanced.logging, cli.verbose);

    log::debug!(
        "Build info: OS: \"{}\", ARCH: \"{}\", BUILD: \"{}\"",
        std::env::consts::OS,
        std::env::consts::ARCH,
        if cfg!(debug_assertions) {
            "Debug"
        } else {
            "Release"
        }
    );

    let context = CommandContext {
        config: &config.basic,
    };
    let result = cli
        .command
        .executor()
        .execute(&context)
        .and_then(|output| output.write(cli.json, &mut io::stdout().lock()));

    match result {
        Ok(()) => {
            log::debug!("Done, took {}ms", time.elapsed().as_millis());
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
