use eframe::egui::Pos2;

use crate::chart::{Chart, hit_test};

use super::super::ViewModel;
use super::super::render_utils::ChartTransform;

impl ViewModel {
    pub(in crate::app) fn handle_hover(
        chart: &mut Chart,
        transform: ChartTransform,
        hover_pos: Option<Pos2>,
    ) {
        let Some(pointer) = hover_pos else {
            if chart.detail().is_visible() {
                chart.update_hover(None, Pos2::ZERO);
            }
            return;
        };

        let radii = chart.radii();
        let hit = hit_test(chart.binder().elements(), &radii, transform.to_chart(pointer));
        chart.update_hover(hit, pointer);
    }
}
