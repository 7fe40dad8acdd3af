use super::logging::GuiLogLayer;
use super::models::{DeckpressGui, init_gui_logging};
use crate::batch::BatchEvent;
use crate::engines::detect;
use std::sync::atomic::Ordering;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

impl DeckpressGui {
    pub fn select_input_files(&mut self) {
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter("PowerPoint", &["ppt", "pptx"])
            .pick_files()
        {
            info!("Added {} input file(s)", paths.len());
            self.input_items.extend(paths);
        }
    }

    pub fn select_input_folder(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_folder() {
            info!("Added input folder: {:?}", path);
            self.input_items.push(path);
        }
    }

    pub fn select_output_directory(&mut self) {
        if let Some(path) = rfd::FileDialog::new().pick_folder() {
            info!("Selected output directory: {:?}", path);
            self.output_dir = Some(path);
        }
    }

    /// Probe the host and report each engine in the log panel.
    pub fn detect_engines(&self) {
        init_gui_logging();
        for availability in detect::detect() {
            if availability.available {
                match &availability.detail {
                    Some(detail) => info!("{}: FOUND ({})", availability.engine, detail),
                    None => info!("{}: FOUND", availability.engine),
                }
            } else {
                warn!("{}: NOT FOUND", availability.engine);
            }
        }
    }

    pub fn start_conversion(&mut self) {
        if self.is_processing {
            return;
        }

        // Always initialize logging so error messages appear in the GUI
        init_gui_logging();

        if self.input_items.is_empty() {
            error!("Add at least one file or folder first");
            return;
        }
        let Some(output_dir) = self.output_dir.clone() else {
            error!("Choose an output folder first");
            return;
        };

        self.is_processing = true;
        self.processing_start_time = Some(Instant::now());
        self.last_processing_duration = None;
        self.progress_done.store(0, Ordering::SeqCst);
        self.progress_total.store(0, Ordering::SeqCst);
        self.cancel_flag.store(false, Ordering::SeqCst);

        // Clone everything the background thread needs
        let inputs = self.input_items.clone();
        let recursive = self.recursive;
        let engine = self.engine;
        let cancel_flag = self.cancel_flag.clone();
        let progress_done = self.progress_done.clone();
        let progress_total = self.progress_total.clone();
        let log_messages = self.log_messages.clone();
        let (tx, rx) = std::sync::mpsc::channel();

        std::thread::spawn(move || {
            // Set up tracing for this thread so messages reach the GUI panel
            let subscriber = Registry::default().with(GuiLogLayer::new());
            let _ = tracing::subscriber::set_global_default(subscriber);

            let separator = crate::gui::logging::LogEntry::new(
                tracing::Level::INFO,
                "--- Conversion Started ---".to_string(),
                "gui".to_string(),
            );
            if let Ok(mut logs) = log_messages.lock() {
                logs.push(separator);
            }

            let result = crate::api::run_batch(
                &inputs,
                recursive,
                &output_dir,
                engine,
                &cancel_flag,
                |event| match event {
                    BatchEvent::JobStarted { index: _, total } => {
                        progress_total.store(total, Ordering::SeqCst);
                    }
                    BatchEvent::JobFinished { index, total, job: _ } => {
                        progress_done.store(index + 1, Ordering::SeqCst);
                        progress_total.store(total, Ordering::SeqCst);
                    }
                    _ => {}
                },
            );

            let msg = match result {
                Ok(report) => format!("Conversion complete. {}", report),
                Err(e) => {
                    error!("Conversion aborted: {}", e);
                    format!("Error: {}", e)
                }
            };
            let _ = tx.send(msg);
        });

        self.completion_receiver = Some(rx);
        info!("Conversion started in background thread");
    }

    pub fn cancel_conversion(&mut self) {
        if self.is_processing {
            self.cancel_flag.store(true, Ordering::SeqCst);
            info!("Cancelling after the current file finishes...");
        }
    }
}
