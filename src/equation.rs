//! 検証済みの問題（式）を表すデータ型

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

use crate::error::ArrangeError;

/// 演算子と下段オペランドの間に確保する列数（演算子1文字 + 空白1文字）
pub const OPERATOR_GUTTER: usize = 2;

/// 対応している演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
}

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }
}

impl FromStr for Operator {
    type Err = ArrangeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "+" => Ok(Operator::Add),
            "-" => Ok(Operator::Subtract),
            _ => Err(ArrangeError::InvalidOperator),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 1問分の式
///
/// オペランドは整数として読み直した十進表記で保持する（`"0012"` は `"12"`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Equation {
    pub operand1: String,
    pub operator: Operator,
    pub operand2: String,
    pub solution: i32,
}

impl Equation {
    pub fn new(operand1: u16, operator: Operator, operand2: u16, solution: i32) -> Self {
        Self {
            operand1: operand1.to_string(),
            operator,
            operand2: operand2.to_string(),
            solution,
        }
    }

    /// 長い方のオペランドの表示幅
    pub fn longest_operand(&self) -> usize {
        self.operand1.width().max(self.operand2.width())
    }

    /// この式が占める列幅
    pub fn width(&self) -> usize {
        self.longest_operand() + OPERATOR_GUTTER
    }
}
