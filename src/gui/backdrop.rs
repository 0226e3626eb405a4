use egui::{Color32, Painter, Rect, Rounding};

const MARGIN: f32 = 10.0;
const RADIUS: f32 = 20.0;

/// (0.15, 0.15, 0.15, 0.9)
pub const BACKDROP_COLOR: Color32 = Color32::from_rgba_premultiplied(34, 34, 34, 230);

/// Rounded panel behind the widgets, kept in step with the bounds of its container.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Backdrop {
    rect: Option<Rect>,
}

impl Backdrop {
    pub fn rect(&self) -> Option<Rect> {
        self.rect
    }

    /// follows the container, returns true when the panel had to move or resize
    pub fn track(&mut self, container: Rect) -> bool {
        let rect = container.shrink(MARGIN);
        if self.rect == Some(rect) {
            return false;
        }
        self.rect = Some(rect);
        true
    }

    pub fn paint(&self, painter: &Painter) {
        if let Some(rect) = self.rect {
            painter.rect_filled(rect, Rounding::same(RADIUS), BACKDROP_COLOR);
        }
    }
}
