use crate::gui::AppError;
use eframe::egui::{Context, FontData, FontDefinitions, FontFamily};
use log::info;
use std::fs;
use std::path::Path;

pub const INTERFACE_FONT: &str = "interface_font";

pub fn load_font(path: &Path) -> Result<Vec<u8>, AppError> {
    let bytes = fs::read(path).map_err(|source| AppError::Font {
        path: path.to_path_buf(),
        source,
    })?;
    info!("font {} loaded, {} bytes", path.display(), bytes.len());
    Ok(bytes)
}

/// default definitions with `bytes` placed first in the proportional family
pub fn font_definitions(bytes: Vec<u8>) -> FontDefinitions {
    let mut definitions = FontDefinitions::default();
    definitions
        .font_data
        .insert(INTERFACE_FONT.to_owned(), FontData::from_owned(bytes));
    if let Some(family) = definitions.families.get_mut(&FontFamily::Proportional) {
        family.insert(0, INTERFACE_FONT.to_owned());
    }
    if let Some(family) = definitions.families.get_mut(&FontFamily::Monospace) {
        family.push(INTERFACE_FONT.to_owned());
    }
    definitions
}

pub fn install_font(ctx: &Context, bytes: Vec<u8>) {
    ctx.set_fonts(font_definitions(bytes));
}
