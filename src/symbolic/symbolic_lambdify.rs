use crate::symbolic::symbolic_engine::Expr;
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LambdifyError {
    #[error("variable '{0}' has no value bound to it")]
    UnboundVariable(String),
    #[error("a function of one argument '{expected}' was requested, found variables {found:?}")]
    TooManyVariables { expected: String, found: Vec<String> },
}

pub type LambdifiedFn = Box<dyn Fn(&[f64]) -> f64 + Send + Sync>;

impl Expr {
    /// LAMBDIFICATION - Converting Symbolic Expressions to Executable Functions

    /// Converts a single-variable symbolic expression into an executable Rust closure.
    ///
    /// An expression without variables becomes a constant function. Any variable
    /// other than `arg` makes the conversion fail.
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::parse_expression("x^2")?;
    /// let func = f.lambdify1D("x")?;
    /// assert_eq!(func(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self, arg: &str) -> Result<Box<dyn Fn(f64) -> f64>, LambdifyError> {
        let vars = self.all_arguments_are_variables();
        match vars.as_slice() {
            [] => {
                let compiled_func = self.lambdify(&[])?;
                Ok(Box::new(move |_| compiled_func(&[])))
            }
            [var_name] if var_name == arg => {
                let compiled_func = self.lambdify(&[arg])?;
                Ok(Box::new(move |x| compiled_func(&[x])))
            }
            [var_name] => Err(LambdifyError::UnboundVariable(var_name.clone())),
            _ => Err(LambdifyError::TooManyVariables {
                expected: arg.to_string(),
                found: vars.clone(),
            }),
        }
    } // end of lambdify1D

    /// Compiles the tree into nested closures over a slice of argument values,
    /// `vars[i]` names the value found at `args[i]`.
    pub fn lambdify(&self, vars: &[&str]) -> Result<LambdifiedFn, LambdifyError> {
        let func: LambdifiedFn = match self {
            Expr::Var(name) => {
                let index = vars
                    .iter()
                    .position(|v| *v == name.as_str())
                    .ok_or_else(|| LambdifyError::UnboundVariable(name.clone()))?;
                Box::new(move |args| args[index])
            }
            Expr::Const(val) => {
                let val = *val;
                Box::new(move |_| val)
            }
            Expr::Add(lhs, rhs) => {
                let (lf, rf) = (lhs.lambdify(vars)?, rhs.lambdify(vars)?);
                Box::new(move |args| lf(args) + rf(args))
            }
            Expr::Sub(lhs, rhs) => {
                let (lf, rf) = (lhs.lambdify(vars)?, rhs.lambdify(vars)?);
                Box::new(move |args| lf(args) - rf(args))
            }
            Expr::Mul(lhs, rhs) => {
                let (lf, rf) = (lhs.lambdify(vars)?, rhs.lambdify(vars)?);
                Box::new(move |args| lf(args) * rf(args))
            }
            Expr::Div(lhs, rhs) => {
                let (lf, rf) = (lhs.lambdify(vars)?, rhs.lambdify(vars)?);
                Box::new(move |args| lf(args) / rf(args))
            }
            Expr::Pow(b, e) => {
                let (bf, ef) = (b.lambdify(vars)?, e.lambdify(vars)?);
                Box::new(move |args| bf(args).powf(ef(args)))
            }
            Expr::Exp(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).exp())
            }
            Expr::Ln(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).ln())
            }
            Expr::sqrt(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).sqrt())
            }
            Expr::abs(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).abs())
            }
            Expr::sin(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).sin())
            }
            Expr::cos(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).cos())
            }
            Expr::tg(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).tan())
            }
            Expr::ctg(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| 1.0 / f(args).tan())
            }
            Expr::arcsin(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).asin())
            }
            Expr::arccos(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).acos())
            }
            Expr::arctg(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| f(args).atan())
            }
            Expr::arcctg(e) => {
                let f = e.lambdify(vars)?;
                Box::new(move |args| PI / 2.0 - f(args).atan())
            }
        };
        Ok(func)
    }

    /// evaluates the expression on every point of `x_values`
    pub fn lamdified_from_points(&self, arg: &str, x_values: &[f64]) -> Result<Vec<f64>, LambdifyError> {
        let f = self.lambdify1D(arg)?;
        Ok(x_values.iter().map(|&x| f(x)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lambdify1D_polynomial() {
        let f = Expr::parse_expression("x^2+4").unwrap().lambdify1D("x").unwrap();
        assert_relative_eq!(f(0.0), 4.0);
        assert_relative_eq!(f(-3.0), 13.0);
    }

    #[test]
    fn test_lambdify1D_functions() {
        let f = Expr::parse_expression("sin(x)^2 + cos(x)^2").unwrap().lambdify1D("x").unwrap();
        assert_relative_eq!(f(1.234), 1.0, epsilon = 1e-12);
        let f = Expr::parse_expression("acot(x) + atan(x)").unwrap().lambdify1D("x").unwrap();
        assert_relative_eq!(f(0.7), PI / 2.0, epsilon = 1e-12);
        let f = Expr::parse_expression("abs(x)*sqrt(4)").unwrap().lambdify1D("x").unwrap();
        assert_relative_eq!(f(-2.5), 5.0);
    }

    #[test]
    fn test_lambdify1D_constant_expression() {
        let f = Expr::parse_expression("2*pi").unwrap().lambdify1D("x").unwrap();
        assert_relative_eq!(f(100.0), 2.0 * PI);
    }

    #[test]
    fn test_lambdify1D_foreign_variable() {
        let expr = Expr::parse_expression("banana").unwrap();
        assert_eq!(
            expr.lambdify1D("x").err(),
            Some(LambdifyError::UnboundVariable("banana".to_string()))
        );
    }

    #[test]
    fn test_lambdify1D_two_variables() {
        let expr = Expr::parse_expression("x*y").unwrap();
        assert!(matches!(
            expr.lambdify1D("x"),
            Err(LambdifyError::TooManyVariables { .. })
        ));
    }

    #[test]
    fn test_lambdify_multi_argument() {
        let expr = Expr::parse_expression("x - 2*y").unwrap();
        let f = expr.lambdify(&["y", "x"]).unwrap();
        assert_relative_eq!(f(&[1.0, 5.0]), 3.0);
    }

    #[test]
    fn test_non_finite_values_pass_through() {
        let values = Expr::parse_expression("1/(x-x)")
            .unwrap()
            .lamdified_from_points("x", &[-1.0, 2.0])
            .unwrap();
        assert!(values.iter().all(|v| v.is_infinite()));
        let values = Expr::parse_expression("sqrt(-1-x^2)")
            .unwrap()
            .lamdified_from_points("x", &[0.0, 3.0])
            .unwrap();
        assert!(values.iter().all(|v| v.is_nan()));
    }
}
