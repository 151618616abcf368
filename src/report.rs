//! JSON形式の整形結果

use serde::Serialize;

use crate::arrange::arrange_equations;
use crate::equation::Equation;
use crate::layout;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report {
    Arranged {
        show_solutions: bool,
        equations: Vec<Equation>,
        block: String,
    },
    Failed {
        code: &'static str,
        message: String,
    },
}

impl Report {
    pub fn build<S: AsRef<str>>(problems: &[S], show_solutions: bool) -> Self {
        match arrange_equations(problems) {
            Ok(equations) => {
                let block = layout::render(&equations, show_solutions);
                Report::Arranged {
                    show_solutions,
                    equations,
                    block,
                }
            }
            Err(err) => Report::Failed {
                code: err.code(),
                message: err.to_string(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Report::Arranged { .. })
    }

    /// テキスト出力（成功時はブロック、失敗時はメッセージ）
    pub fn text(&self) -> &str {
        match self {
            Report::Arranged { block, .. } => block,
            Report::Failed { message, .. } => message,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// 標準出力に書く内容
    ///
    /// ブロックは既に改行で終わるのでそのまま、メッセージと JSON には改行を付ける。
    pub fn render(&self, json: bool) -> serde_json::Result<String> {
        if json {
            return Ok(format!("{}\n", self.to_json()?));
        }
        Ok(match self {
            Report::Arranged { block, .. } => block.clone(),
            Report::Failed { message, .. } => format!("{}\n", message),
        })
    }

    /// プロセスの終了コード
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            EXIT_SUCCESS
        } else {
            EXIT_ARRANGE_ERROR
        }
    }
}

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ARRANGE_ERROR: u8 = 1;
