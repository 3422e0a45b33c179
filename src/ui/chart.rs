//! Joint chart rendering and data processing utilities.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use strum::IntoEnumIterator;

use crate::analysis::TimeAxis;
use crate::app::JointDeviationApp;
use crate::parsers::types::Joint;

impl JointDeviationApp {
    /// Render one subplot per joint, stacked, with linked time axes
    pub fn render_joint_charts(&self, ui: &mut egui::Ui, plot_height: f32) {
        if self.report.series.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("No follow trajectory records")
                        .size(20.0)
                        .color(egui::Color32::GRAY),
                );
            });
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("joint_charts_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for joint in Joint::iter() {
                    ui.label(egui::RichText::new(joint.as_ref()).strong().size(16.0));
                    self.render_joint_plot(ui, joint, plot_height);
                    ui.add_space(5.0);
                }
            });
    }

    fn render_joint_plot(&self, ui: &mut egui::Ui, joint: Joint, height: f32) {
        let origin = self.axis.origin();
        let color = self.get_joint_color(joint);
        let color = egui::Color32::from_rgb(color[0], color[1], color[2]);

        let points = &self.chart_points[joint.index()];
        let max_marker = self.max_marker(joint);

        let plot = Plot::new(format!("joint_plot_{}", joint))
            .height(height)
            .legend(Legend::default())
            .link_axis("joint_charts", [true, false])
            .x_axis_label("date-time")
            .y_axis_label("difference state-target")
            .x_axis_formatter(move |mark, _range| TimeAxis::format_offset(origin, mark.value));

        plot.show(ui, |plot_ui| {
            let plot_points: PlotPoints = points.iter().copied().collect();
            plot_ui.line(Line::new(joint.to_string(), plot_points).color(color).width(1.5));

            if let Some(marker) = max_marker {
                plot_ui.points(
                    Points::new("max", PlotPoints::from(vec![marker]))
                        .color(egui::Color32::from_rgb(0, 255, 255))
                        .radius(4.0),
                );
            }
        });
    }

    /// `[seconds, value]` of the record holding this joint's maximum
    fn max_marker(&self, joint: Joint) -> Option<[f64; 2]> {
        let record = self.report.summary.record_index[joint.index()];
        let time = *self.axis.seconds().get(record)?;
        Some([time, self.report.summary.get(joint)])
    }

    /// Downsample data using the Largest Triangle Three Buckets (LTTB) algorithm
    /// This preserves the visual shape of the data while reducing point count
    pub fn downsample_lttb(times: &[f64], values: &[f64], target_points: usize) -> Vec<[f64; 2]> {
        let n = times.len().min(values.len());

        if n <= target_points || target_points < 3 {
            return times
                .iter()
                .zip(values.iter())
                .map(|(t, v)| [*t, *v])
                .collect();
        }

        let mut result = Vec::with_capacity(target_points);
        result.push([times[0], values[0]]);

        let bucket_size = (n - 2) as f64 / (target_points - 2) as f64;
        let mut a_index = 0usize;

        for i in 0..(target_points - 2) {
            let bucket_start = ((i as f64) * bucket_size).floor() as usize + 1;
            let bucket_end = (((i + 1) as f64) * bucket_size).floor() as usize + 1;
            let bucket_end = bucket_end.min(n - 1).max(bucket_start + 1);

            // Average of the next bucket is the third triangle vertex
            let next_bucket_start = bucket_end;
            let next_bucket_end = ((((i + 2) as f64) * bucket_size).floor() as usize + 1).min(n);

            let (avg_x, avg_y) = if next_bucket_start < next_bucket_end {
                let count = (next_bucket_end - next_bucket_start) as f64;
                let sum_x: f64 = times[next_bucket_start..next_bucket_end].iter().sum();
                let sum_y: f64 = values[next_bucket_start..next_bucket_end].iter().sum();
                (sum_x / count, sum_y / count)
            } else {
                (times[n - 1], values[n - 1])
            };

            let a_x = times[a_index];
            let a_y = values[a_index];

            let mut max_area = -1.0f64;
            let mut max_index = bucket_start;
            for j in bucket_start..bucket_end.min(n - 1) {
                let area =
                    ((a_x - avg_x) * (values[j] - a_y) - (a_x - times[j]) * (avg_y - a_y)).abs();
                if area > max_area {
                    max_area = area;
                    max_index = j;
                }
            }

            result.push([times[max_index], values[max_index]]);
            a_index = max_index;
        }

        result.push([times[n - 1], values[n - 1]]);
        result
    }
}
