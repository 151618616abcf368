//! 解の計算

use crate::equation::Operator;
use crate::error::{ArrangeError, Result};

impl Operator {
    /// 演算子を適用する。桁あふれ時は `None`
    pub fn apply(self, lhs: i32, rhs: i32) -> Option<i32> {
        match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
        }
    }
}

/// 2つのオペランドから解を求める
pub fn evaluate(lhs: u16, operator: Operator, rhs: u16) -> Result<i32> {
    operator
        .apply(i32::from(lhs), i32::from(rhs))
        .ok_or(ArrangeError::Internal)
}
