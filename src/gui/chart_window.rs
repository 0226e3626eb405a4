use eframe::egui::{self, ColorImage, Context, TextureHandle, TextureOptions, ViewportClass, ViewportId};
use eframe::egui::load::SizedTexture;
use log::debug;

/// A rendered chart waiting to be shown in its own window.
pub struct ChartWindow {
    title: String,
    size: [usize; 2],
    image: ColorImage,
    texture: Option<TextureHandle>,
}

impl ChartWindow {
    /// `rgb` holds `size.0 * size.1` pixels, three bytes each, row by row
    pub fn new(title: String, size: (u32, u32), rgb: &[u8]) -> Self {
        let size = [size.0 as usize, size.1 as usize];
        ChartWindow {
            title,
            size,
            image: ColorImage::from_rgb(size, rgb),
            texture: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn texture(&mut self, ctx: &Context) -> SizedTexture {
        let image = &self.image;
        let texture = self
            .texture
            .get_or_insert_with(|| ctx.load_texture("chart", image.clone(), TextureOptions::LINEAR));
        SizedTexture::new(texture.id(), texture.size_vec2())
    }

    /// Shows the chart for one frame. Returns false once the user closed the window.
    pub fn show(&mut self, ctx: &Context) -> bool {
        let inner_size = egui::vec2(self.size[0] as f32, self.size[1] as f32);
        let builder = egui::ViewportBuilder::default()
            .with_title(self.title.clone())
            .with_inner_size(inner_size)
            .with_resizable(false);
        let texture = self.texture(ctx);
        let title = self.title.clone();

        ctx.show_viewport_immediate(ViewportId::from_hash_of("chart_window"), builder, |ctx, class| {
            match class {
                // the backend cannot open a second native window
                ViewportClass::Embedded => {
                    let mut open = true;
                    egui::Window::new(title)
                        .collapsible(false)
                        .resizable(false)
                        .open(&mut open)
                        .show(ctx, |ui| {
                            ui.add(egui::Image::new(texture));
                        });
                    open
                }
                _ => {
                    egui::CentralPanel::default()
                        .frame(egui::Frame::none())
                        .show(ctx, |ui| {
                            ui.add(egui::Image::new(texture));
                        });
                    let close = ctx.input(|i| i.viewport().close_requested());
                    if close {
                        debug!("chart window closed");
                    }
                    !close
                }
            }
        })
    }
}
