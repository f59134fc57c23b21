//! Stderr logger for the command-line binary.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Environment variable that selects the log level.
const LOG_ENV: &str = "PAGESIM_LOG";

/// Install the logger.
///
/// `PAGESIM_LOG` wins when set; otherwise each `-v` raises the level by one
/// step starting from warnings.
pub fn init(verbosity: u8) {
    static LOGGER: SimpleLogger = SimpleLogger;

    let level = match std::env::var(LOG_ENV).ok().as_deref() {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some("off") => LevelFilter::Off,
        _ => match verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        },
    };

    // A second init (tests) keeps the first logger.
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        eprintln!(
            "\u{1B}[{}m[{:>5}][{}] {}\u{1B}[0m",
            level_to_color_code(record.level()),
            record.level(),
            record.target(),
            record.args()
        );
    }

    fn flush(&self) {}
}

fn level_to_color_code(level: Level) -> u8 {
    match level {
        Level::Error => 31, // Red
        Level::Warn => 93,  // BrightYellow
        Level::Info => 34,  // Blue
        Level::Debug => 32, // Green
        Level::Trace => 90, // BrightBlack
    }
}
