//! From the text typed by the user to a chart on screen.
//!
//! The input is parsed into a symbolic expression, turned into a function of `x`,
//! sampled over a fixed domain and handed to a [`PlotPresenter`]. Every failure on
//! the way ends up as the same bilingual message in the result label.
use crate::Utils::plots::{ChartSpec, PlotError};
use crate::localization::language_state::LanguageState;
use crate::symbolic::parse_expr::ParseError;
use crate::symbolic::symbolic_engine::Expr;
use crate::symbolic::symbolic_lambdify::LambdifyError;
use crate::symbolic::utils::linspace;
use log::{debug, info, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExpressionError {
    #[error("cannot parse the expression: {0}")]
    Parse(#[from] ParseError),
    #[error("cannot turn the expression into a function: {0}")]
    Conversion(#[from] LambdifyError),
    #[error("cannot evaluate the expression: {reason}")]
    Evaluation { reason: String },
    #[error("cannot show the chart: {0}")]
    Render(#[from] PlotError),
}

/// sampling domain and view window of every chart
#[derive(Debug, Clone, PartialEq)]
pub struct PlotSettings {
    pub variable: String,
    pub samples: usize,
    pub domain: (f64, f64),
    pub x_view: (f64, f64),
    pub y_view: (f64, f64),
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            variable: "x".to_string(),
            samples: 400,
            domain: (-10.0, 10.0),
            x_view: (-20.0, 20.0),
            y_view: (-10.0, 20.0),
        }
    }
}

/// values of a function on the sample grid, non-finite values kept as they are
#[derive(Debug, Clone, PartialEq)]
pub struct SampledFunction {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl SampledFunction {
    pub fn finite_count(&self) -> usize {
        self.y.iter().filter(|y| y.is_finite()).count()
    }
}

/// Anything able to show a finished chart to the user.
pub trait PlotPresenter {
    fn present(&mut self, chart: ChartSpec) -> Result<(), PlotError>;
}

/// Lambdifies `expr` and evaluates it on the sample grid.
/// Fails only when no sample gives a finite value.
pub fn sample_expression(expr: &Expr, settings: &PlotSettings) -> Result<SampledFunction, ExpressionError> {
    let x = linspace(settings.domain.0, settings.domain.1, settings.samples);
    let y = expr.lamdified_from_points(&settings.variable, &x)?;
    let sampled = SampledFunction { x, y };
    let finite = sampled.finite_count();
    if finite == 0 {
        return Err(ExpressionError::Evaluation {
            reason: format!(
                "no finite value of {} on [{}, {}]",
                expr, settings.domain.0, settings.domain.1
            ),
        });
    }
    debug!("{} of {} samples are finite", finite, sampled.y.len());
    Ok(sampled)
}

/// chart of the sampled function, the legend shows the text as the user typed it
pub fn chart_spec(raw_text: &str, title: String, sampled: SampledFunction, settings: &PlotSettings) -> ChartSpec {
    ChartSpec {
        title,
        legend: format!("f(x) = {}", raw_text),
        x: sampled.x,
        y: sampled.y,
        x_range: settings.x_view,
        y_range: settings.y_view,
    }
}

/// parse, convert, sample and present, stopping at the first failure
pub fn plot_expression(
    raw_text: &str,
    state: &LanguageState,
    settings: &PlotSettings,
    presenter: &mut impl PlotPresenter,
) -> Result<(), ExpressionError> {
    let expr = Expr::parse_expression(raw_text)?;
    let sampled = sample_expression(&expr, settings)?;
    let chart = chart_spec(raw_text, state.chart_title(), sampled, settings);
    presenter.present(chart)?;
    Ok(())
}

/// Handler of the plot button: clears the result label, then either presents
/// the chart or puts the error message in the label. Returns whether a chart was shown.
pub fn evaluate_and_plot(
    raw_text: &str,
    state: &mut LanguageState,
    settings: &PlotSettings,
    presenter: &mut impl PlotPresenter,
) -> bool {
    state.clear_result();
    match plot_expression(raw_text, state, settings, presenter) {
        Ok(()) => {
            info!("plotted f(x) = {}", raw_text);
            true
        }
        Err(e) => {
            warn!("'{}' was not plotted: {}", raw_text, e);
            state.show_error();
            false
        }
    }
}
