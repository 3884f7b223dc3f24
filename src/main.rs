#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use punchgrid::PunchgridApp;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // A share URL (or bare token) may be passed as the first argument.
    let share_arg = std::env::args().nth(1);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 640.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "punchgrid",
        native_options,
        Box::new(|cc| Ok(Box::new(PunchgridApp::new(cc, share_arg)))),
    )
}
