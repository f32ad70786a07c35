//! Ninefold desktop application using egui/eframe.
//!
//! This is the main entry point for the desktop Sudoku client.

use eframe::{
    NativeOptions,
    egui::{self, Vec2},
};

use crate::app::NinefoldApp;

mod app;

fn main() -> eframe::Result<()> {
    better_panic::install();
    env_logger::init();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_resizable(true)
            .with_inner_size(Vec2::new(800.0, 600.0))
            .with_min_inner_size(Vec2::new(400.0, 300.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Ninefold",
        options,
        Box::new(|cc| Ok(Box::new(NinefoldApp::new(cc)))),
    )
}
