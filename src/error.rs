//! エラーハンドリング
//!
//! 問題の検証・整形で使う固定のエラー分類と、コマンドライン層のエラーを定義
//! メッセージ文字列は呼び出し側が文字列比較するため一字一句固定

use thiserror::Error;

/// 整形処理のエラー分類
///
/// `Display` は外部に公開するメッセージそのもの。
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrangeError {
    /// 問題数が上限を超えている
    #[error("Error: Too many problems.")]
    TooManyProblems,

    /// 演算子が `+` / `-` 以外
    #[error("Error: Operator must be '+' or '-'.")]
    InvalidOperator,

    /// オペランドに数字以外の文字が含まれる
    #[error("Error: Numbers must only contain digits.")]
    NonDigitOperand,

    /// オペランドが4桁を超える
    #[error("Error: Numbers cannot be more than four digits.")]
    OperandTooLong,

    /// トークン数が3ではない
    #[error("Error: Expected 3 tokens (two operands and an operator), but got a different amount.")]
    TokenCountMismatch,

    /// 内部不整合（通常は到達しない）
    #[error("Error: An unexpected error occurred.")]
    Internal,
}

impl ArrangeError {
    /// 構造化出力向けの識別子
    pub fn code(&self) -> &'static str {
        match self {
            ArrangeError::TooManyProblems => "too_many_problems",
            ArrangeError::InvalidOperator => "invalid_operator",
            ArrangeError::NonDigitOperand => "non_digit_operand",
            ArrangeError::OperandTooLong => "operand_too_long",
            ArrangeError::TokenCountMismatch => "token_count_mismatch",
            ArrangeError::Internal => "internal",
        }
    }
}

/// コマンドライン引数のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("Unknown option: {flag}")]
    UnknownFlag { flag: String },

    #[error("Missing value for {flag}")]
    MissingValue { flag: String },

    #[error("Invalid log level: {value}")]
    InvalidLogLevel { value: String },
}

/// プロジェクト標準のResult型
pub type Result<T> = std::result::Result<T, ArrangeError>;

/// パニックハンドラの設定
pub fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s
        } else {
            "Unknown panic payload"
        };

        eprintln!("PANIC at {}: {}", location, message);
        eprintln!("Stack trace: {}", std::backtrace::Backtrace::capture());

        std::process::exit(1);
    }));
}
