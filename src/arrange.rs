//! 公開エントリポイント
//!
//! 検証 → 解の計算 → レイアウトの順に処理する。

use crate::equation::Equation;
use crate::error::Result;
use crate::layout;
use crate::parser::parse_problems;

/// 問題を検証し、式の一覧を返す
pub fn arrange_equations<S: AsRef<str>>(problems: &[S]) -> Result<Vec<Equation>> {
    parse_problems(problems)
}

/// 問題を整形する。失敗時は最初に見つかったエラーを返す
pub fn try_arrange<S: AsRef<str>>(problems: &[S], show_solutions: bool) -> Result<String> {
    let equations = arrange_equations(problems)?;
    let block = layout::render(&equations, show_solutions);
    log::debug!(
        "arranged {} problems (solutions: {})",
        equations.len(),
        show_solutions
    );
    Ok(block)
}

/// 問題を整形する。失敗時はエラーメッセージ文字列を返す
pub fn arrange<S: AsRef<str>>(problems: &[S], show_solutions: bool) -> String {
    try_arrange(problems, show_solutions).unwrap_or_else(|err| err.to_string())
}
