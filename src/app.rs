use eframe::egui;
use std::path::PathBuf;
use strum::IntoEnumIterator;

use crate::analysis::{DeviationReport, TimeAxis};
use crate::parsers::types::{Joint, JOINT_COUNT};

/// Color palette for joint lines
pub const CHART_COLORS: &[[u8; 3]] = &[
    [113, 120, 78],  // Olive green (primary)
    [191, 78, 48],   // Rust orange (accent)
    [71, 108, 155],  // Blue (info)
    [159, 166, 119], // Sage green (success)
    [253, 193, 73],  // Amber (warning)
    [135, 30, 28],   // Dark red (error)
];

/// Colorblind-friendly palette (based on Wong's optimized palette)
pub const COLORBLIND_COLORS: &[[u8; 3]] = &[
    [0, 114, 178],   // Blue
    [230, 159, 0],   // Orange
    [0, 158, 115],   // Bluish green
    [204, 121, 167], // Reddish purple
    [86, 180, 233],  // Sky blue
    [213, 94, 0],    // Vermillion
];

/// Smallest height a joint subplot is allowed to shrink to
pub const MIN_PLOT_HEIGHT: f32 = 120.0;

/// Viewer for one analysed log: a summary bar and one chart per joint
pub struct JointDeviationApp {
    pub(crate) source: PathBuf,
    pub(crate) report: DeviationReport,
    pub(crate) axis: TimeAxis,
    /// Downsampled `[seconds, deviation]` points, indexed by joint
    pub(crate) chart_points: Vec<Vec<[f64; 2]>>,
    pub(crate) color_blind_mode: bool,
}

impl JointDeviationApp {
    pub fn new(
        source: PathBuf,
        report: DeviationReport,
        axis: TimeAxis,
        max_chart_points: usize,
    ) -> Self {
        let chart_points = Joint::iter()
            .map(|joint| {
                let values = report.joint_series(joint);
                Self::downsample_lttb(axis.seconds(), &values, max_chart_points)
            })
            .collect();

        Self {
            source,
            report,
            axis,
            chart_points,
            color_blind_mode: false,
        }
    }

    /// Get color for a joint based on current color mode
    pub fn get_joint_color(&self, joint: Joint) -> [u8; 3] {
        let palette = if self.color_blind_mode {
            COLORBLIND_COLORS
        } else {
            CHART_COLORS
        };
        palette[joint.index() % palette.len()]
    }

    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Unknown".to_string())
    }
}

impl eframe::App for JointDeviationApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("summary_bar").show(ctx, |ui| {
            self.render_summary_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let plot_height =
                ((ui.available_height() / JOINT_COUNT as f32) - 30.0).max(MIN_PLOT_HEIGHT);
            self.render_joint_charts(ui, plot_height);
        });
    }
}
