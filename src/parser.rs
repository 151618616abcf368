//! 問題文字列の検証と解析
//!
//! `"<数字> <演算子> <数字>"` 形式の文字列を [`Equation`] に変換する。
//! エラーの優先順位（トークン数 → 数字以外 → 桁数 → 演算子）は呼び出し側の
//! 期待値に影響するため変更しないこと。

use crate::equation::{Equation, Operator};
use crate::error::{ArrangeError, Result};
use crate::evaluator::evaluate;

/// 一度に整形できる問題数の上限
pub const PROBLEM_LIMIT: usize = 5;

/// オペランドの最大桁数
pub const DIGIT_LENGTH_LIMIT: usize = 4;

const EXPECTED_TOKENS: usize = 3;

/// 1問分の文字列を検証して式に変換する
pub fn parse_problem(problem: &str) -> Result<Equation> {
    let tokens: Vec<&str> = problem.split_whitespace().collect();
    let &[lhs, operator, rhs] = tokens.as_slice() else {
        return Err(ArrangeError::TokenCountMismatch);
    };

    if !is_digits(lhs) || !is_digits(rhs) {
        return Err(ArrangeError::NonDigitOperand);
    }

    if lhs.len() > DIGIT_LENGTH_LIMIT || rhs.len() > DIGIT_LENGTH_LIMIT {
        return Err(ArrangeError::OperandTooLong);
    }

    let operator: Operator = operator.parse()?;

    let lhs = parse_operand(lhs)?;
    let rhs = parse_operand(rhs)?;
    let solution = evaluate(lhs, operator, rhs)?;

    Ok(Equation::new(lhs, operator, rhs, solution))
}

/// 問題のリストを先頭から検証し、最初のエラーで打ち切る
pub fn parse_problems<S: AsRef<str>>(problems: &[S]) -> Result<Vec<Equation>> {
    if problems.len() > PROBLEM_LIMIT {
        log::debug!(
            "rejecting batch of {} problems (limit {})",
            problems.len(),
            PROBLEM_LIMIT
        );
        return Err(ArrangeError::TooManyProblems);
    }

    let mut equations = Vec::with_capacity(problems.len());
    for (index, problem) in problems.iter().enumerate() {
        let problem = problem.as_ref();
        match parse_problem(problem) {
            Ok(equation) => equations.push(equation),
            Err(err) => {
                log::debug!("problem {} {:?} rejected: {}", index, problem, err.code());
                return Err(err);
            }
        }
    }

    log::trace!("parsed {} problems", equations.len());
    Ok(equations)
}

fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

// 桁数チェック済みなので失敗しない
fn parse_operand(token: &str) -> Result<u16> {
    token.parse().map_err(|_| ArrangeError::Internal)
}
