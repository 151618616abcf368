//! コマンドラインオプション

use std::io::{self, BufRead};
use std::path::PathBuf;

use crate::error::OptionsError;
use crate::logging::LogLevel;

/// 実行モード
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    Arrange,
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub mode: RunMode,
    /// 解の行を出力する
    pub show_solutions: bool,
    /// JSON で出力する
    pub json: bool,
    pub log_level: LogLevel,
    /// ログの追記先
    pub debug_log: Option<PathBuf>,
    /// 引数で渡された問題（空なら標準入力から読む）
    pub problems: Vec<String>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            mode: RunMode::Arrange,
            show_solutions: false,
            json: false,
            log_level: LogLevel::Warning,
            debug_log: None,
            problems: Vec::new(),
        }
    }
}

impl CliOptions {
    /// プログラム名を除いた引数を解析する
    pub fn parse<I, S>(args: I) -> Result<Self, OptionsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = CliOptions::default();
        let mut only_problems = false;

        let mut iter = args.into_iter().map(Into::into);
        while let Some(arg) = iter.next() {
            if only_problems || !is_flag(&arg) {
                options.problems.push(arg);
                continue;
            }

            match arg.as_str() {
                "--" => only_problems = true,
                "-s" | "--solutions" => options.show_solutions = true,
                "--json" => options.json = true,
                "-h" | "--help" => options.mode = RunMode::Help,
                "-V" | "--version" => options.mode = RunMode::Version,
                "--log-level" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| OptionsError::MissingValue { flag: arg.clone() })?;
                    options.log_level = value.parse()?;
                }
                "--debug-log" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| OptionsError::MissingValue { flag: arg.clone() })?;
                    options.debug_log = Some(PathBuf::from(value));
                }
                _ => return Err(OptionsError::UnknownFlag { flag: arg }),
            }
        }

        Ok(options)
    }
}

/// 引数エラー時の終了コード
pub const EXIT_USAGE_ERROR: u8 = 2;

/// 1行1問で読み込む。空行は読み飛ばす
pub fn read_problems(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut problems = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            problems.push(line);
        }
    }
    Ok(problems)
}

/// 空白を含む引数は問題文字列として扱う
fn is_flag(arg: &str) -> bool {
    arg.starts_with('-') && !arg.contains(char::is_whitespace)
}

pub const USAGE: &str = "\
Usage: arith-arranger [OPTIONS] [PROBLEM]...

Arranges up to five addition/subtraction problems into aligned columns.
Reads one problem per line from stdin when no PROBLEM is given.

Options:
  -s, --solutions          Print a fourth row with the results
      --json               Print a JSON report instead of text
      --log-level <LEVEL>  debug, info, warning or error (default: warning)
      --debug-log <PATH>   Append log lines to PATH
  -h, --help               Print help
  -V, --version            Print version
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_flags() {
        let options = CliOptions::parse(["3801 - 2", "123 + 49"]).unwrap();
        assert_eq!(options.mode, RunMode::Arrange);
        assert!(!options.show_solutions);
        assert!(!options.json);
        assert_eq!(options.problems, vec!["3801 - 2", "123 + 49"]);
    }

    #[test]
    fn parses_flags_and_values() {
        let options = CliOptions::parse([
            "-s",
            "--json",
            "--log-level",
            "debug",
            "--debug-log",
            "out/arranger.log",
            "3 + 855",
        ])
        .unwrap();
        assert!(options.show_solutions);
        assert!(options.json);
        assert_eq!(options.log_level, LogLevel::Debug);
        assert_eq!(options.debug_log, Some(PathBuf::from("out/arranger.log")));
        assert_eq!(options.problems, vec!["3 + 855"]);
    }

    #[test]
    fn problems_starting_with_dash_are_not_flags() {
        let options = CliOptions::parse(["-3 + 1"]).unwrap();
        assert_eq!(options.problems, vec!["-3 + 1"]);

        let options = CliOptions::parse(["--", "-s"]).unwrap();
        assert!(!options.show_solutions);
        assert_eq!(options.problems, vec!["-s"]);
    }

    #[test]
    fn reports_bad_flags() {
        assert_eq!(
            CliOptions::parse(["--bogus"]),
            Err(OptionsError::UnknownFlag {
                flag: "--bogus".to_string()
            })
        );
        assert_eq!(
            CliOptions::parse(["--log-level"]),
            Err(OptionsError::MissingValue {
                flag: "--log-level".to_string()
            })
        );
    }

    #[test]
    fn reads_problems_skipping_blank_lines() {
        let input = io::Cursor::new("3801 - 2\n\n   \n123 + 49\n\t\n");
        let problems = read_problems(input).unwrap();
        assert_eq!(problems, vec!["3801 - 2", "123 + 49"]);
    }

    #[test]
    fn reads_nothing_from_empty_input() {
        let problems = read_problems(io::Cursor::new("")).unwrap();
        assert!(problems.is_empty());
    }

    #[test]
    fn help_and_version_modes() {
        assert_eq!(CliOptions::parse(["-h"]).unwrap().mode, RunMode::Help);
        assert_eq!(CliOptions::parse(["--version"]).unwrap().mode, RunMode::Version);
    }
}
