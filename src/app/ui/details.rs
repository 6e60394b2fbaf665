use eframe::egui::{self, Context, Rect, RichText};

use crate::chart::{PANEL_WIDTH, panel_position};

use super::super::{CHART_CONTAINER, ViewModel};

impl ViewModel {
    /// Floating hover panel; the message is shown as plain text.
    pub(in crate::app) fn draw_detail_panel(&mut self, ctx: &Context, bounds: Rect) {
        let Some(chart) = self.host.get(CHART_CONTAINER) else {
            return;
        };
        let detail_panel = chart.detail();
        let (Some(detail), Some(pointer)) = (detail_panel.content(), detail_panel.pointer()) else {
            return;
        };

        let position = panel_position(pointer, self.detail_size, bounds);
        let area = egui::Area::new(egui::Id::new("bubble_detail"))
            .order(egui::Order::Tooltip)
            .fixed_pos(position)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_width(PANEL_WIDTH);
                    egui::Grid::new("bubble_detail_rows")
                        .num_columns(2)
                        .spacing([12.0, 4.0])
                        .show(ui, |ui| {
                            for (title, value) in detail.rows() {
                                ui.label(RichText::new(title).strong());
                                ui.add(egui::Label::new(value).wrap());
                                ui.end_row();
                            }
                        });
                });
            });

        self.detail_size = area.response.rect.size();
    }
}
