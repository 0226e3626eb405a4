#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module turns a String expression into a symbolic expression
///
///# Example
/// ```
/// use RustedFxFinder::symbolic::symbolic_engine::Expr;
/// let parsed_expression = Expr::parse_expression("sin(x)^2 + 1").unwrap();
/// println!(" parsed_expression {}", parsed_expression);
/// assert_eq!(parsed_expression.all_arguments_are_variables(), vec!["x".to_string()]);
///  ```
/// ________________________________________________________________________________________________________________________________
pub mod parse_expr;
///____________________________________________________________________________________________________________________________
/// # Symbolic engine
/// a module
/// 1) holds the expression tree built by the parser
/// 2) reports the free variables of an expression
/// 3) turns a symbolic expression into a string for printing and control results
pub mod symbolic_engine;
///____________________________________________________________________________________________________________________________
/// turns a symbolic expression into a Rust function
///# Example#
/// ```
/// use RustedFxFinder::symbolic::symbolic_engine::Expr;
/// let f = Expr::parse_expression("x^2+4").unwrap();
/// let f_res = f.lambdify1D("x").unwrap()(1.0);
/// assert_eq!(f_res, 5.0);
/// ```
pub mod symbolic_lambdify;
///______________________________________________________________________________________________________________________________________________
/// the collection of utility functions mainly for bracket parsing and proceeding
/// _____________________________________________________________________________________________________________________________________________
pub mod utils;
#[cfg(test)]
mod symbolic_engine_tests;
