use eframe::egui::{Align2, Color32, FontId, Sense, Stroke, Ui};

use crate::chart::{Chart, FrameRequest, LabelKind};

use super::super::render_utils::{ChartTransform, circle_visible, draw_background};
use super::super::{CHART_CONTAINER, ViewModel};

const LABEL_COLOR: Color32 = Color32::from_rgb(60, 64, 72);

impl ViewModel {
    pub(in crate::app) fn draw_chart(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
        let painter = ui.painter_at(rect);

        let Some(chart) = self.host.get_mut(CHART_CONTAINER) else {
            return;
        };

        let frame_delta_seconds = ui.ctx().input(|input| input.stable_dt);
        if chart.frame(frame_delta_seconds) == FrameRequest::Repaint {
            ui.ctx().request_repaint();
        }

        let canvas = chart.config().canvas_size();
        let transform = ChartTransform::fit(rect, canvas);
        draw_background(&painter, rect, transform.canvas_rect(canvas));

        Self::draw_bubbles(&painter, rect, transform, chart);
        Self::draw_labels(&painter, transform, chart);

        let hover_pos = response.hover_pos();
        Self::handle_hover(chart, transform, hover_pos);

        if chart.detail().is_visible() {
            self.draw_detail_panel(ui.ctx(), rect);
        }
    }

    fn draw_bubbles(
        painter: &eframe::egui::Painter,
        rect: eframe::egui::Rect,
        transform: ChartTransform,
        chart: &Chart,
    ) {
        let radii = chart.radii();
        let stroke_width = transform.scale_length(1.5).max(1.0);

        // Nodes are sorted largest first, so smaller bubbles paint on top.
        for (element, radius) in chart.binder().elements().iter().zip(radii) {
            let center = transform.to_screen(element.center);
            let radius = transform.scale_length(radius);
            if radius <= 0.0 || !circle_visible(rect, center, radius) {
                continue;
            }
            painter.circle(
                center,
                radius,
                element.fill,
                Stroke::new(stroke_width, element.stroke),
            );
        }
    }

    fn draw_labels(painter: &eframe::egui::Painter, transform: ChartTransform, chart: &Chart) {
        let font_size = transform.scale_length(18.0).clamp(10.0, 22.0);
        for label in chart.binder().labels() {
            let align = match label.kind {
                LabelKind::Category => Align2::CENTER_CENTER,
                LabelKind::Severity => Align2::CENTER_TOP,
            };
            painter.text(
                transform.to_screen(label.position),
                align,
                label.text,
                FontId::proportional(font_size),
                LABEL_COLOR,
            );
        }
    }
}
