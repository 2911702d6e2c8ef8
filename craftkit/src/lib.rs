use craftkit_config::logging::LoggingConfig;
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

pub mod command;

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the terminal logger. Logs go to stderr so stdout only carries results.
///
/// `verbosity` raises the configured level by one step per count.
pub fn init_log(config: &LoggingConfig, verbosity: u8) {
    if !config.enabled {
        return;
    }

    let level = raise_level(config.level, verbosity);
    let mut builder = ConfigBuilder::new();
    if config.timestamp {
        builder.set_time_level(LevelFilter::Error);
    } else {
        builder.set_time_level(LevelFilter::Off);
    }
    if config.threads {
        builder.set_thread_level(LevelFilter::Error);
    } else {
        builder.set_thread_level(LevelFilter::Off);
    }
    builder.set_target_level(LevelFilter::Off);
    builder.set_location_level(LevelFilter::Off);

    let color = if config.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    if let Err(err) = TermLogger::init(level, builder.build(), TerminalMode::Stderr, color) {
        // Already initialised, keep the first logger
        log::warn!("Couldn't install logger: {err}");
    }
    log::debug!("craftkit {CARGO_PKG_VERSION}, log level {level}");
}

fn raise_level(level: LevelFilter, steps: u8) -> LevelFilter {
    const LEVELS: [LevelFilter; 6] = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];
    let index = LEVELS.iter().position(|l| *l == level).unwrap_or(3);
    LEVELS[(index + usize::from(steps)).min(LEVELS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::raise_level;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(raise_level(LevelFilter::Info, 0), LevelFilter::Info);
        assert_eq!(raise_level(LevelFilter::Info, 1), LevelFilter::Debug);
        assert_eq!(raise_level(LevelFilter::Warn, 9), LevelFilter::Trace);
        assert_eq!(raise_level(LevelFilter::Off, 2), LevelFilter::Warn);
    }
}
