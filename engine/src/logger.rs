use chrono::Local;
use std::sync::OnceLock;

static LOGGER: OnceLock<Logger> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
}

impl Level {
    fn tag(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
        }
    }
}

pub struct Logger {
    prefix: Option<String>,
    min_level: Level,
}

impl Logger {
    fn new(prefix: Option<String>, verbose: bool) -> Self {
        let min_level = if verbose { Level::Debug } else { Level::Info };
        Self { prefix, min_level }
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.min_level
    }

    pub fn format(&self, level: Level, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match self.prefix {
            Some(ref prefix) => format!(
                "[{}][{}][{}][{}:{}] {}",
                timestamp,
                prefix,
                level.tag(),
                file_name,
                line,
                message
            ),
            None => format!(
                "[{}][{}][{}:{}] {}",
                timestamp,
                level.tag(),
                file_name,
                line,
                message
            ),
        }
    }

    pub fn log(&self, level: Level, file: &str, line: u32, message: &str) {
        if self.enabled(level) {
            // stdout belongs to the board renderer
            eprintln!("{}", self.format(level, file, line, message));
        }
    }
}

/// Installs the process-wide logger. Later calls keep the first configuration.
pub fn init_logger(prefix: Option<String>, verbose: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, verbose));
}

/// Messages sent before [`init_logger`] are dropped.
pub fn log(level: Level, file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(level, file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(
            $crate::logger::Level::Info,
            file!(),
            line!(),
            &format!($($arg)*),
        )
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::logger::log(
            $crate::logger::Level::Debug,
            file!(),
            line!(),
            &format!($($arg)*),
        )
    };
}
