//! turns a String expression into a symbolic expression
//!# Example
//! ```
//! use RustedFxFinder::symbolic::symbolic_engine::Expr;
//! let parsed_expression = Expr::parse_expression("x^2+4").unwrap();
//! let f = parsed_expression.lambdify1D("x").unwrap();
//! assert_eq!(f(2.0), 8.0);
//! ```
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::utils::{
    brackets_are_balanced, ends_operand, find_char_positions_outside_brackets,
    find_pair_to_this_bracket, is_exponent_sign, max_bracket_depth, previous_significant_char,
};
use log::debug;
use thiserror::Error;
//                  search recursion diagram
//                "x^2+exp(x)-sin(x)/x"             |
//                |       left  | right             |
//                |_________________________________|
//                |  rightmost + or - outside ()    |
//                |_________________________________|
//                | x^2+exp(x)  |   sin(x)/x        |
//                |       |     |          |        |
//                |______\|/____|_________\|/_______|
//                |   div by +  |   div by /        |
//                |_____________|___________________|
//                | x^2 |exp(x) | sin(x)  |  x      |
//                |_\|/_|__\|/__|___\|/___|__Ok_____|
//                | div by ^    | function call     |
//                |______Ok_____|_______Ok__________|
// Precedence, loosest first: binary + -, binary * /, unary + -, ^ (or **), calls.
// + - * / split at the rightmost operator (left associative),
// ^ splits at the leftmost one (right associative), so 2^3^2 = 2^9 and -x^2 = -(x^2).

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    EmptyExpression,
    #[error("unbalanced brackets in '{0}'")]
    UnbalancedBrackets(String),
    #[error("operator '{operator}' is missing an operand in '{input}'")]
    MissingOperand { operator: String, input: String },
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("'{0}' is neither a number, a name nor a function call")]
    InvalidToken(String),
    #[error("expression is nested deeper than {0} levels")]
    TooDeep(usize),
}

/// deepest recursion allowed while splitting the input, brackets and chained operators alike
pub const MAX_NESTING: usize = 256;

impl Expr {
    /// Parses a string into a symbolic expression.
    ///
    /// # Supported Syntax
    /// - Variables: x, y, var_name
    /// - Constants: 3.14, 2.5e-3, pi, E
    /// - Operators: +, -, *, /, ^ (or **)
    /// - Functions: sin, cos, tan/tg, cot/ctg, asin, acos, atan, acot, exp, log/ln, sqrt, abs
    /// - Parentheses for grouping
    pub fn parse_expression(input: &str) -> Result<Expr, ParseError> {
        let result = parse_expression_func(input);
        match &result {
            Ok(expr) => debug!("parsed '{}' into {}", input, expr),
            Err(err) => debug!("failed to parse '{}': {}", input, err),
        }
        result
    }
}

pub fn parse_expression_func(input: &str) -> Result<Expr, ParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    if !brackets_are_balanced(input) {
        return Err(ParseError::UnbalancedBrackets(input.to_string()));
    }
    if max_bracket_depth(input) > MAX_NESTING {
        return Err(ParseError::TooDeep(MAX_NESTING));
    }
    parse_node(input, 0)
}

// a '+' or '-' between two operands, not a sign and not the exponent of a literal
fn is_binary_sign(s: &str, pos: usize, c: char) -> bool {
    (c == '+' || c == '-')
        && previous_significant_char(s, pos).is_some_and(ends_operand)
        && !is_exponent_sign(s, pos)
}

// a '*' that is not half of '**', or a '/'
fn is_product_sign(s: &str, pos: usize, c: char) -> bool {
    c == '/' || (c == '*' && !s[..pos].ends_with('*') && !s[pos + 1..].starts_with('*'))
}

fn is_power_sign(s: &str, pos: usize, c: char) -> bool {
    c == '^' || (c == '*' && s[pos + 1..].starts_with('*'))
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

fn parse_operands(
    input: &str,
    operator: &str,
    left: &str,
    right: &str,
    depth: usize,
) -> Result<(Expr, Expr), ParseError> {
    if left.trim().is_empty() || right.trim().is_empty() {
        return Err(ParseError::MissingOperand {
            operator: operator.to_string(),
            input: input.to_string(),
        });
    }
    Ok((parse_node(left, depth + 1)?, parse_node(right, depth + 1)?))
}

fn parse_node(input: &str, depth: usize) -> Result<Expr, ParseError> {
    if depth > MAX_NESTING {
        return Err(ParseError::TooDeep(MAX_NESTING));
    }
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    // addition and subtraction
    if let Some(&(pos, op)) = find_char_positions_outside_brackets(input, is_binary_sign).last() {
        let (left, right) = parse_operands(input, &op.to_string(), &input[..pos], &input[pos + 1..], depth)?;
        return Ok(if op == '+' { left + right } else { left - right });
    }

    // multiplication and division
    if let Some(&(pos, op)) = find_char_positions_outside_brackets(input, is_product_sign).last() {
        let (left, right) = parse_operands(input, &op.to_string(), &input[..pos], &input[pos + 1..], depth)?;
        return Ok(if op == '*' { left * right } else { left / right });
    }

    // unary signs
    if let Some(sign) = input.chars().next().filter(|c| *c == '-' || *c == '+') {
        let rest = &input[1..];
        if rest.trim().is_empty() {
            return Err(ParseError::MissingOperand {
                operator: sign.to_string(),
                input: input.to_string(),
            });
        }
        let operand = parse_node(rest, depth + 1)?;
        return Ok(match (sign, operand) {
            ('+', operand) => operand,
            (_, Expr::Const(value)) => Expr::Const(-value),
            (_, operand) => -operand,
        });
    }

    // power
    if let Some(&(pos, op)) = find_char_positions_outside_brackets(input, is_power_sign).first() {
        let width = if op == '^' { 1 } else { 2 };
        let (base, exponent) = parse_operands(
            input,
            &input[pos..pos + width],
            &input[..pos],
            &input[pos + width..],
            depth,
        )?;
        return Ok(base.pow(exponent));
    }

    // brackets and function calls
    if input.ends_with(')') {
        let close = input.len() - 1;
        let open = find_pair_to_this_bracket(input, close)
            .ok_or_else(|| ParseError::UnbalancedBrackets(input.to_string()))?;
        let inner = &input[open + 1..close];
        if open == 0 {
            return parse_node(inner, depth + 1);
        }
        let name = input[..open].trim();
        if !is_identifier(name) {
            return Err(ParseError::InvalidToken(input.to_string()));
        }
        let argument = parse_node(inner, depth + 1)?;
        return Expr::function_by_name(name, argument)
            .ok_or_else(|| ParseError::UnknownFunction(name.to_string()));
    }

    parse_atom(input)
}

// constants and variables
fn parse_atom(input: &str) -> Result<Expr, ParseError> {
    let starts_like_number = input
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.');
    if starts_like_number {
        return input
            .parse::<f64>()
            .map(Expr::Const)
            .map_err(|_| ParseError::InvalidToken(input.to_string()));
    }
    if is_identifier(input) {
        return Ok(Expr::constant_by_name(input).unwrap_or_else(|| Expr::Var(input.to_string())));
    }
    Err(ParseError::InvalidToken(input.to_string()))
}
