use std::sync::OnceLock;
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

/// Writes to stderr so log lines never interleave with the board on stdout.
pub struct Logger {
    prefix: Option<String>,
    enabled: bool,
}

impl Logger {
    fn new(prefix: Option<String>, enabled: bool) -> Self {
        Self { prefix, enabled }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        if !self.enabled {
            return;
        }
        eprintln!("{}", self.format_line(file, line, message));
    }

    fn format_line(&self, file: &str, line: u32, message: &str) -> String {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        if let Some(ref prefix) = self.prefix {
            format!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message)
        } else {
            format!("[{}][{}:{}] {}", timestamp, file_name, line, message)
        }
    }
}

/// First call wins; later calls are ignored.
pub fn init_logger(prefix: Option<String>, enabled: bool) {
    LOGGER.get_or_init(|| Logger::new(prefix, enabled));
}

/// Silent until `init_logger` has been called.
pub fn log(file: &str, line: u32, message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(file, line, message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_strips_directories() {
        let logger = Logger::new(None, true);
        let line = logger.format_line("common/src/games/mod.rs", 12, "hello");
        assert!(line.ends_with("[mod.rs:12] hello"), "{}", line);
    }

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("CLI".to_string()), true);
        let line = logger.format_line("main.rs", 3, "started");
        assert!(line.ends_with("[CLI][main.rs:3] started"), "{}", line);
    }
}
