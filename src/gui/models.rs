use crate::gui::logging::{GuiLogLayer, LogEntry};
use crate::types::EngineChoice;
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicBool, AtomicUsize};
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use sysinfo;
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

pub fn init_gui_logging() {
    LOGGING_INIT.get_or_init(|| {
        let gui_layer = GuiLogLayer::new();

        // Filter out eframe/winit TRACE noise.
        let filter = EnvFilter::new("trace")
            .add_directive("eframe=info".parse().unwrap())
            .add_directive("winit=info".parse().unwrap());

        let subscriber = Registry::default().with(gui_layer).with(filter);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

pub struct DeckpressGui {
    // Input parameters
    pub input_items: Vec<PathBuf>,
    pub output_dir: Option<PathBuf>,

    // Conversion parameters
    pub engine: EngineChoice,
    pub recursive: bool,
    pub min_log_level: Level,

    // Status
    pub is_processing: bool,
    pub processing_start_time: Option<Instant>,
    pub last_processing_duration: Option<Duration>,

    // Progress counters bumped by the background worker
    pub progress_done: Arc<AtomicUsize>,
    pub progress_total: Arc<AtomicUsize>,

    // Cancel flag: set by the UI, read by the worker between jobs
    pub cancel_flag: Arc<AtomicBool>,

    // Log messages for the central panel - thread-safe
    pub log_messages: Arc<Mutex<Vec<LogEntry>>>,

    // Receiver for completion notification from background processing
    pub completion_receiver: Option<Receiver<String>>,

    // System monitoring
    pub cpu_usage: f32,
    pub memory_usage_mb: f64,
    pub total_memory_mb: f64,
    pub system_monitor: Option<sysinfo::System>,
    pub last_system_update: Option<Instant>,
}

impl Default for DeckpressGui {
    fn default() -> Self {
        Self {
            input_items: Vec::new(),
            output_dir: None,
            engine: EngineChoice::Auto,
            recursive: true,
            min_log_level: Level::INFO,
            is_processing: false,
            processing_start_time: None,
            last_processing_duration: None,
            progress_done: Arc::new(AtomicUsize::new(0)),
            progress_total: Arc::new(AtomicUsize::new(0)),
            cancel_flag: Arc::new(AtomicBool::new(false)),
            log_messages: Arc::new(Mutex::new(Vec::new())),
            completion_receiver: None,
            cpu_usage: 0.0,
            memory_usage_mb: 0.0,
            total_memory_mb: 0.0,
            system_monitor: None,
            last_system_update: None,
        }
    }
}

impl DeckpressGui {
    pub fn clear_inputs(&mut self) {
        self.input_items.clear();
        tracing::info!("Input list cleared");
    }

    pub fn remove_missing_inputs(&mut self) {
        let before = self.input_items.len();
        self.input_items.retain(|p| p.exists());
        let removed = before - self.input_items.len();
        if removed > 0 {
            tracing::info!("Removed {} missing input(s)", removed);
        }
    }

    /// Open the output folder in the platform file manager.
    pub fn open_output_dir(&self) -> Result<(), Box<dyn std::error::Error>> {
        let dir = self.output_dir.as_ref().ok_or("No output folder selected")?;
        fs::create_dir_all(dir)?;

        let opener = if cfg!(windows) {
            "explorer"
        } else if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };
        Command::new(opener).arg(dir).spawn()?;
        Ok(())
    }

    pub fn save_logs_to_file(&self) -> Result<(), Box<dyn std::error::Error>> {
        let logs = self
            .log_messages
            .lock()
            .map_err(|e| format!("Failed to lock logs: {}", e))?;

        if logs.is_empty() {
            return Err("No logs to save".into());
        }

        // Filter logs based on current filter level
        let filtered_logs: Vec<&LogEntry> = logs
            .iter()
            .filter(|entry| {
                if self.min_log_level == Level::TRACE {
                    true
                } else {
                    entry.level == self.min_log_level
                }
            })
            .collect();

        if filtered_logs.is_empty() {
            return Err("No logs match the current filter level".into());
        }

        if let Some(save_path) = rfd::FileDialog::new()
            .add_filter("DECKPRESS Log files", &["deckpresslog"])
            .set_file_name("deckpress_log.deckpresslog")
            .save_file()
        {
            let mut log_content = String::new();
            log_content.push_str("=== DECKPRESS Log File ===\n");
            log_content.push_str(&format!("Generated: {}\n", chrono::Utc::now().to_rfc3339()));
            log_content.push_str(&format!(
                "Filter Level: {}\n",
                match self.min_log_level {
                    Level::ERROR => "ERROR",
                    Level::WARN => "WARN",
                    Level::INFO => "INFO",
                    Level::DEBUG => "DEBUG",
                    Level::TRACE => "ALL",
                }
            ));
            log_content.push_str(&format!("Total Logs: {}\n", filtered_logs.len()));
            log_content.push_str("=====================\n\n");

            for entry in &filtered_logs {
                let level_str = match entry.level {
                    Level::ERROR => "ERROR",
                    Level::WARN => "WARN",
                    Level::INFO => "INFO",
                    Level::DEBUG => "DEBUG",
                    Level::TRACE => "TRACE",
                };

                log_content.push_str(&format!(
                    "[{}] {} {}: {}\n",
                    entry.timestamp, level_str, entry.target, entry.message
                ));
            }

            fs::write(&save_path, log_content)?;

            tracing::info!(
                "Filtered logs saved to: {:?} ({} entries)",
                save_path,
                filtered_logs.len()
            );

            Ok(())
        } else {
            Err("No save location selected".into())
        }
    }

    pub fn save_preset(&self) -> Result<(), Box<dyn std::error::Error>> {
        // Only configuration fields; paths are deliberately excluded
        #[derive(Serialize)]
        struct DeckpressPreset {
            engine: EngineChoice,
            recursive: bool,
            min_log_level: String,
        }

        let preset = DeckpressPreset {
            engine: self.engine,
            recursive: self.recursive,
            min_log_level: format!("{:?}", self.min_log_level),
        };

        if let Some(save_path) = rfd::FileDialog::new()
            .add_filter("DECKPRESS Preset files", &["deckpress"])
            .set_file_name("deckpress_preset.deckpress")
            .save_file()
        {
            let mut preset_content = String::new();
            preset_content.push_str("// ==========================================\n");
            preset_content.push_str("// DECKPRESS Configuration Preset\n");
            preset_content.push_str("// ==========================================\n");
            preset_content.push_str("// Program: DECKPRESS - Presentation to PDF Converter\n");
            preset_content.push_str(&format!("// Version: {}\n", env!("CARGO_PKG_VERSION")));
            preset_content.push_str(&format!(
                "// Generated: {}\n",
                chrono::Utc::now().to_rfc3339()
            ));
            preset_content.push_str("// Note: Input/Output paths are not included in presets\n");
            preset_content.push_str("// ==========================================\n\n");

            let json = serde_json::to_string_pretty(&preset)?;
            preset_content.push_str(&json);

            fs::write(&save_path, preset_content)?;

            tracing::info!("Preset saved to: {:?}", save_path);
            Ok(())
        } else {
            Err("No save location selected".into())
        }
    }

    pub fn load_preset(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(load_path) = rfd::FileDialog::new()
            .add_filter("DECKPRESS Preset files", &["deckpress"])
            .pick_file()
        {
            let content = fs::read_to_string(&load_path)?;

            // Extract JSON part by finding the first '{' character
            let json_start = content
                .find('{')
                .ok_or("Invalid preset file: no JSON content found")?;
            let json = &content[json_start..];

            #[derive(Deserialize)]
            struct DeckpressPreset {
                engine: EngineChoice,
                recursive: bool,
                min_log_level: String,
            }

            let preset: DeckpressPreset = serde_json::from_str(json)?;

            let min_log_level = match preset.min_log_level.as_str() {
                "ERROR" => Level::ERROR,
                "WARN" => Level::WARN,
                "INFO" => Level::INFO,
                "DEBUG" => Level::DEBUG,
                "TRACE" => Level::TRACE,
                _ => Level::INFO,
            };

            self.engine = preset.engine;
            self.recursive = preset.recursive;
            self.min_log_level = min_log_level;

            tracing::info!("Preset loaded from: {:?}", load_path);
            Ok(())
        } else {
            Err("No preset file selected".into())
        }
    }

    pub fn generate_cli_command(&self) -> String {
        let mut cmd = String::from("cargo run --release --bin deckpress --");

        for input in &self.input_items {
            cmd.push_str(&format!(" --input {:?}", input));
        }
        if let Some(output_dir) = &self.output_dir {
            cmd.push_str(&format!(" --output-dir {:?}", output_dir));
        }

        let engine_cli = match self.engine {
            EngineChoice::Auto => "auto",
            EngineChoice::LibreOffice => "libre-office",
            EngineChoice::PowerPoint => "power-point",
        };
        cmd.push_str(&format!(" --engine {}", engine_cli));

        if self.recursive {
            cmd.push_str(" --recursive");
        }
        // we always want to log
        cmd.push_str(" --log");

        cmd
    }

    /// Update system statistics (CPU and memory usage)
    pub fn update_system_stats(&mut self) {
        // Only update every 2 seconds to avoid excessive system calls
        let now = Instant::now();
        if let Some(last_update) = self.last_system_update {
            if now.duration_since(last_update).as_secs() < 2 {
                return;
            }
        }

        if self.system_monitor.is_none() {
            self.system_monitor = Some(sysinfo::System::new_all());
        }

        if let Some(ref mut sys) = self.system_monitor {
            sys.refresh_all();

            self.cpu_usage = sys.global_cpu_usage();

            self.memory_usage_mb = sys.used_memory() as f64 / 1024.0 / 1024.0;
            self.total_memory_mb = sys.total_memory() as f64 / 1024.0 / 1024.0;
        }

        self.last_system_update = Some(now);
    }
}
