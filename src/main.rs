use anyhow::Result;
use eframe::egui;
use filterlab::config::DemoConfig;
use filterlab::ui::DemoApp;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = DemoConfig::default();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 820.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Filter Lab - UI responsiveness demo",
        options,
        Box::new(move |cc| Box::new(DemoApp::new(cc, config))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
