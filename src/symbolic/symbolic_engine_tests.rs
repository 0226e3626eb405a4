use crate::symbolic::symbolic_engine::Expr;
//___________________________________TESTS____________________________________

mod tests {
    use super::*;

    #[test]
    fn test_neg() {
        let expr = Expr::Var("x".to_string());
        let neg_expr = -expr;
        let expected = Expr::Mul(
            Box::new(Expr::Const(-1.0)),
            Box::new(Expr::Var("x".to_string())),
        );
        assert_eq!(neg_expr, expected);
    }

    #[test]
    fn test_combined_operations() {
        let x = Expr::Var("x".to_string());
        let expr = (x + Expr::Const(2.0)) * Expr::Const(3.0) / Expr::Const(2.0);
        let expected = Expr::Div(
            Box::new(Expr::Mul(
                Box::new(Expr::Add(
                    Box::new(Expr::Var("x".to_string())),
                    Box::new(Expr::Const(2.0)),
                )),
                Box::new(Expr::Const(3.0)),
            )),
            Box::new(Expr::Const(2.0)),
        );
        assert_eq!(expr, expected);
    }

    #[test]
    fn test_all_arguments_are_variables() {
        let expr = Expr::parse_expression("x^2 + y*sin(z) + x").unwrap();
        assert_eq!(expr.all_arguments_are_variables(), vec!["x", "y", "z"]);
        let expr = Expr::parse_expression("2*pi").unwrap();
        assert!(expr.all_arguments_are_variables().is_empty());
        let expr = Expr::parse_expression("exp(sqrt(abs(x)))/ln(y)").unwrap();
        assert_eq!(expr.all_arguments_are_variables(), vec!["x", "y"]);
    }

    #[test]
    fn test_function_by_name() {
        let x = Expr::Var("x".to_string());
        assert_eq!(
            Expr::function_by_name("atan", x.clone()),
            Some(Expr::arctg(Box::new(x.clone())))
        );
        assert_eq!(Expr::function_by_name("banana", x), None);
    }

    #[test]
    fn test_display() {
        let expr = Expr::parse_expression("sin(x)^2 - 1/x").unwrap();
        assert_eq!(format!("{}", expr), "((sin(x) ^ 2) - (1 / x))");
    }
}
