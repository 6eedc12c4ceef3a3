//! log4rs initialization for the binary.
//!
//! Logs go to stderr so results on stdout stay pipeable.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::path::Path;

const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

/// Initialize logging from `config_file`, or a stderr console logger at
/// `warn` level if the file is missing or invalid.
pub fn init_logging(config_file: &str) {
    if Path::new(config_file).exists() {
        match log4rs::init_file(config_file, Default::default()) {
            Ok(()) => {
                log::debug!("Logging configured from {config_file}");
                return;
            }
            Err(e) => eprintln!("Error initializing log4rs from {config_file}: {e}"),
        }
    }

    if let Err(e) = log4rs::init_config(fallback_config()) {
        eprintln!("Error initializing fallback logger: {e}");
    }
}

fn fallback_config() -> Config {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();

    Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Warn))
        .expect("Static log4rs fallback config is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_config() {
        let config = fallback_config();
        assert_eq!(config.root().level(), LevelFilter::Warn);
        assert_eq!(config.appenders().len(), 1);
    }
}
