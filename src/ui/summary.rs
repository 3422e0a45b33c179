//! Summary bar shown above the joint charts.

use eframe::egui;
use strum::IntoEnumIterator;

use crate::app::JointDeviationApp;
use crate::parsers::types::Joint;

impl JointDeviationApp {
    pub fn render_summary_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(self.source_name()).strong());
            ui.separator();
            ui.label(format!("{} records", self.report.series.len()));
            if let Some((start, end)) = self.axis.range() {
                ui.separator();
                ui.label(format!(
                    "{} - {}",
                    self.axis.clock_label(start),
                    self.axis.clock_label(end)
                ));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.checkbox(&mut self.color_blind_mode, "Color blind mode");
            });
        });

        ui.horizontal_wrapped(|ui| {
            ui.label("Max deviation:");
            for joint in Joint::iter() {
                let color = self.get_joint_color(joint);
                ui.label(
                    egui::RichText::new(format!(
                        "{} {:.4}",
                        joint,
                        self.report.summary.get(joint)
                    ))
                    .color(egui::Color32::from_rgb(color[0], color[1], color[2])),
                );
            }
        });
    }
}
