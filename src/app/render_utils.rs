use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

/// Uniform fit of the chart canvas into the painter rect, centered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(super) struct ChartTransform {
    origin: Pos2,
    scale: f32,
}

impl ChartTransform {
    pub(super) fn fit(rect: Rect, canvas: Vec2) -> Self {
        let scale = if canvas.x > 0.0 && canvas.y > 0.0 {
            (rect.width() / canvas.x).min(rect.height() / canvas.y).max(0.01)
        } else {
            1.0
        };
        let origin = rect.center() - canvas * scale * 0.5;
        Self { origin, scale }
    }

    pub(super) fn to_screen(self, chart: Vec2) -> Pos2 {
        self.origin + chart * self.scale
    }

    pub(super) fn to_chart(self, screen: Pos2) -> Vec2 {
        (screen - self.origin) / self.scale
    }

    pub(super) fn scale_length(self, length: f32) -> f32 {
        length * self.scale
    }

    pub(super) fn canvas_rect(self, canvas: Vec2) -> Rect {
        Rect::from_min_size(self.origin, canvas * self.scale)
    }
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, canvas: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(236, 238, 241));
    painter.rect_filled(canvas, 4.0, Color32::WHITE);
    painter.rect_stroke(
        canvas,
        4.0,
        Stroke::new(1.0, Color32::from_rgb(210, 214, 220)),
        eframe::egui::StrokeKind::Inside,
    );
}

pub(super) fn circle_visible(rect: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < rect.left()
        || position.x - radius > rect.right()
        || position.y + radius < rect.top()
        || position.y - radius > rect.bottom())
}
