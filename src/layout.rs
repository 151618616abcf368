//! 列揃えレイアウト
//!
//! 各式を縦に並べ、全ての式を横に連結したテキストブロックを生成する。
//! 行の内容は [`Row`] の並びで決まり、各式の列幅は [`Equation::width`]。

use unicode_width::UnicodeWidthStr;

use crate::equation::{Equation, OPERATOR_GUTTER};

/// 式と式の間の区切り
pub const SEPARATOR: &str = "    ";

/// 行の終端
pub const LINE_END: char = '\n';

const DASH: char = '-';

/// 出力する行の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    /// 上段オペランド
    FirstOperand,
    /// 演算子と下段オペランド
    SecondOperand,
    /// 区切り線
    Dashes,
    /// 解（表示時のみ）
    Solution,
}

impl Row {
    /// 出力順の行一覧
    pub fn sequence(show_solutions: bool) -> &'static [Row] {
        const WITHOUT_SOLUTIONS: &[Row] = &[Row::FirstOperand, Row::SecondOperand, Row::Dashes];
        const WITH_SOLUTIONS: &[Row] = &[
            Row::FirstOperand,
            Row::SecondOperand,
            Row::Dashes,
            Row::Solution,
        ];

        if show_solutions {
            WITH_SOLUTIONS
        } else {
            WITHOUT_SOLUTIONS
        }
    }

    /// 1式分のセルを生成する。幅は常に `equation.width()`
    pub fn render(self, equation: &Equation) -> String {
        let width = equation.width();
        match self {
            Row::FirstOperand => pad_start(&equation.operand1, width, ' '),
            Row::SecondOperand => format!(
                "{} {}",
                equation.operator,
                pad_start(&equation.operand2, width - OPERATOR_GUTTER, ' ')
            ),
            Row::Dashes => pad_start("", width, DASH),
            Row::Solution => pad_start(&equation.solution.to_string(), width, ' '),
        }
    }
}

/// 式の一覧をテキストブロックに整形する
pub fn render(equations: &[Equation], show_solutions: bool) -> String {
    let mut block = String::new();
    if equations.is_empty() {
        return block;
    }

    for row in Row::sequence(show_solutions) {
        let cells: Vec<String> = equations.iter().map(|eq| row.render(eq)).collect();
        block.push_str(&cells.join(SEPARATOR));
        block.push(LINE_END);
    }

    block
}

/// 表示幅が `target_width` になるよう左側を `fill` で埋める
///
/// 既に幅を超えている場合は切り詰めずにそのまま返す。
pub fn pad_start(s: &str, target_width: usize, fill: char) -> String {
    let current_width = s.width();
    if current_width >= target_width {
        return s.to_string();
    }

    let mut padded = String::with_capacity(target_width);
    padded.extend(std::iter::repeat(fill).take(target_width - current_width));
    padded.push_str(s);
    padded
}
