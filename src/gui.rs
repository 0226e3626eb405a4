//! Desktop front end built on eframe/egui.
/// main window: prompt, input field, buttons and result label
pub mod app;
/// rounded panel painted behind the widgets
pub mod backdrop;
/// pop-up window showing a rendered chart
pub mod chart_window;
/// installation of the Arabic-capable interface font
pub mod fonts;

use crate::Utils::config::{AppConfig, ConfigError};
use crate::Utils::logger::LoggerError;
use crate::gui::app::FxFinderApp;
use crate::localization::language_state::WINDOW_TITLE;
use eframe::egui;
use log::info;
use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop the application before or while its window is open.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("cannot load font {path:?}: {source}")]
    Font {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Logger(#[from] LoggerError),
    #[error("window system failure: {0}")]
    Gui(#[from] eframe::Error),
}

pub const WINDOW_SIZE: [f32; 2] = [600.0, 420.0];

/// Opens the fixed-size main window and runs the event loop until it is closed.
pub fn run(config: &AppConfig) -> Result<(), AppError> {
    let font_bytes = fonts::load_font(&config.font_path)?;
    let chart_size = (config.chart_width, config.chart_height);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };
    info!("opening main window");
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Box::new(FxFinderApp::new(cc, font_bytes, chart_size))),
    )?;
    info!("main window closed");
    Ok(())
}
