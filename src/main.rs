//! jointlog - Joint deviation viewer for robot controller logs
//!
//! Reads the configured controller log, prints the maximum difference of each
//! joint and opens a window charting every joint's deviation over time. The
//! process exits once the window is closed.

use anyhow::{anyhow, Context};
use tracing_subscriber::EnvFilter;

use jointlog::analysis::analyze_file;
use jointlog::app::JointDeviationApp;
use jointlog::settings::AnalysisSettings;

/// Set the macOS application name for the dock
#[cfg(target_os = "macos")]
fn set_macos_app_name() {
    use objc2::{class, msg_send};
    use objc2_foundation::NSString;

    unsafe {
        let app_name = NSString::from_str("jointlog");
        let process_info_class = class!(NSProcessInfo);
        let process_info: *mut objc2::runtime::AnyObject =
            msg_send![process_info_class, processInfo];
        let _: () = msg_send![process_info, setProcessName: &*app_name];
    }
}

#[cfg(not(target_os = "macos"))]
fn set_macos_app_name() {}

fn main() -> anyhow::Result<()> {
    set_macos_app_name();

    // Logs go to stderr so the summary line stays alone on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = AnalysisSettings::load();
    let path = settings.log_path();

    let report = analyze_file(&path)
        .with_context(|| format!("Failed to analyze {}", path.display()))?;
    println!("{}", report.summary_line());

    let axis = report
        .time_axis()
        .context("Failed to build time axis for charts")?;

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 1080.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("jointlog - Joint Deviation")
            .with_app_id("jointlog"),
        ..Default::default()
    };

    let app = JointDeviationApp::new(path, report, axis, settings.max_chart_points);

    // Blocks until the viewer window is closed
    eframe::run_native(
        "jointlog",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("Viewer failed: {}", e))
}
