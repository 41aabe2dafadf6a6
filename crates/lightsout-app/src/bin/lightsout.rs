//! Lights Out desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Lights Out application.

use lightsout_app::LightsOutApp;

fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.gifnksm.lightsout";

    better_panic::install();
    env_logger::init();

    log::info!("starting Lights Out {}", env!("CARGO_PKG_VERSION"));

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((480.0, 600.0))
            .with_min_inner_size((320.0, 400.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Lights Out",
        options,
        Box::new(|cc| Ok(Box::new(LightsOutApp::new(cc)))),
    )
}
