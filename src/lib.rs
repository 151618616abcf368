//! arith-arranger - 足し算・引き算の問題を縦書きに整形する
//!
//! 検証・計算・レイアウトの3段構成

// コアモジュール
pub mod error;
pub mod logging;

// データ層
pub mod equation;

// ロジック層
pub mod evaluator;
pub mod parser;

// 表示層
pub mod layout;
pub mod report;

// エントリポイント
pub mod arrange;
pub mod options;

// 公開API
pub use arrange::{arrange, arrange_equations, try_arrange};
pub use equation::{Equation, Operator};
pub use error::{ArrangeError, OptionsError, Result};
pub use parser::{parse_problem, parse_problems, DIGIT_LENGTH_LIMIT, PROBLEM_LIMIT};
pub use report::Report;
