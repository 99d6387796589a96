// src/logger.rs
//! `log` クレートのマクロ (info! とか error!) をブラウザのコンソールに流すロガー。

use log::{Level, LevelFilter, Log, Metadata, Record};

use crate::{error as console_error, log as console_log};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

/// コンソールに出す1行の形。
pub fn format_line(level: Level, target: &str, message: &str) -> String {
    format!("[{}] {}: {}", level, target, message)
}

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.level(), record.target(), &record.args().to_string());
        match record.level() {
            Level::Error | Level::Warn => console_error(&line),
            _ => console_log(&line),
        }
    }

    fn flush(&self) {}
}

/// ロガーを登録する。2回目以降は何もしない。
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_format() {
        assert_eq!(
            format_line(Level::Info, "wasm_pairs_game::app", "started"),
            "[INFO] wasm_pairs_game::app: started"
        );
    }
}
