#[cfg(feature = "gui")]
use deckpress::gui::models::DeckpressGui;
#[cfg(feature = "gui")]
use eframe::{NativeOptions, egui::ViewportBuilder};

#[cfg(feature = "gui")]
fn main() -> Result<(), eframe::Error> {
    let options = NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([800.0, 600.0])
            .with_min_inner_size([640.0, 440.0]),
        ..Default::default()
    };

    eframe::run_native(
        "DECKPRESS",
        options,
        Box::new(|_cc| Ok(Box::new(DeckpressGui::default()))),
    )
}

#[cfg(not(feature = "gui"))]
fn main() {
    eprintln!("GUI feature is not enabled. Please build with --features gui");
    std::process::exit(1);
}
