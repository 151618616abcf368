//! ロギング
//!
//! ライブラリ側は `log` クレートのマクロで出力し、バイナリが起動時に
//! [`Logger`] をグローバルロガーとして登録する。

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::OptionsError;

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    fn tag(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }

    /// `log` クレートのレベルから変換（TRACE は DEBUG に含める）
    fn from_log(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }

    fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Debug => log::LevelFilter::Trace,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

impl FromStr for LogLevel {
    type Err = OptionsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            _ => Err(OptionsError::InvalidLogLevel {
                value: value.to_string(),
            }),
        }
    }
}

/// ロガー
///
/// * stderr へ `LEVEL: message` 形式で出力
/// * 任意でファイルへ追記
#[derive(Debug, Clone)]
pub struct Logger {
    level: LogLevel,
    output_stderr: bool,
    output_file: Option<PathBuf>,
}

impl Logger {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            output_stderr: true,
            output_file: None,
        }
    }

    /// 開発者向けロガー
    pub fn for_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// ファイル出力を設定
    pub fn with_file_output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// 標準エラー出力を無効化
    pub fn without_stderr(mut self) -> Self {
        self.output_stderr = false;
        self
    }

    /// グローバルロガーとして登録する
    pub fn init(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level().to_filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }

    fn should_log(&self, level: LogLevel) -> bool {
        level >= self.level
    }

    fn write_line(&self, message: &str) {
        if self.output_stderr {
            eprintln!("{}", message);
        }

        if let Some(path) = &self.output_file {
            if let Err(err) = append_line(path, message) {
                eprintln!("[log] failed to write {}: {}", path.display(), err);
            }
        }
    }
}

fn append_line(path: &Path, message: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", message)
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        self.should_log(LogLevel::from_log(metadata.level()))
    }

    fn log(&self, record: &log::Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let level = LogLevel::from_log(record.level());
        self.write_line(&format!(
            "{}: {} in {}",
            level.tag(),
            record.args(),
            record.target()
        ));
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;

    #[test]
    fn logger_respects_log_level() {
        let logger = Logger::for_development().without_stderr();
        assert!(logger.should_log(LogLevel::Debug));
        assert!(logger.should_log(LogLevel::Error));

        let info_logger = Logger::for_development()
            .with_level(LogLevel::Info)
            .without_stderr();
        assert!(!info_logger.should_log(LogLevel::Debug));
        assert!(info_logger.should_log(LogLevel::Warning));
    }

    #[test]
    fn trace_records_count_as_debug() {
        let logger = Logger::new(LogLevel::Debug).without_stderr();
        let metadata = log::Metadata::builder().level(log::Level::Trace).build();
        assert!(logger.enabled(&metadata));

        let logger = Logger::new(LogLevel::Info).without_stderr();
        assert!(!logger.enabled(&metadata));
    }

    #[test]
    fn parses_level_names() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("WARN".parse::<LogLevel>(), Ok(LogLevel::Warning));
        assert_eq!(
            "verbose".parse::<LogLevel>(),
            Err(OptionsError::InvalidLogLevel {
                value: "verbose".to_string()
            })
        );
    }

    #[test]
    fn writes_records_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arranger.log");
        let logger = Logger::new(LogLevel::Info)
            .without_stderr()
            .with_file_output(&path);

        logger.log(
            &log::Record::builder()
                .args(format_args!("arranged 2 problems"))
                .level(log::Level::Info)
                .target("arith_arranger")
                .build(),
        );
        logger.log(
            &log::Record::builder()
                .args(format_args!("hidden"))
                .level(log::Level::Debug)
                .target("arith_arranger")
                .build(),
        );

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "INFO: arranged 2 problems in arith_arranger\n");
    }

    #[test]
    fn append_line_reports_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(append_line(dir.path(), "message").is_err());

        let path = dir.path().join("arranger.log");
        append_line(&path, "first").unwrap();
        append_line(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn init_installs_global_logger_once() {
        let logger = Logger::new(LogLevel::Error).without_stderr();
        assert_eq!(logger.level(), LogLevel::Error);
        assert!(logger.clone().init().is_ok());
        assert_eq!(log::max_level(), log::LevelFilter::Error);
        assert!(logger.init().is_err());
    }
}
