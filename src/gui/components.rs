use super::models::DeckpressGui;
use crate::types::EngineChoice;
use eframe::egui::{Align, Color32, ComboBox, Frame, Layout, ProgressBar, RichText, Ui};
use std::sync::atomic::Ordering;

const COMPONENT_HEIGHT: f32 = 80.0;
const COMPONENT_WIDTH: f32 = 120.0;

pub struct EngineSelectionComponent;

impl EngineSelectionComponent {
    pub fn render(ui: &mut Ui, app: &mut DeckpressGui) {
        ui.heading("Engine");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT * 0.6);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Converter:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ComboBox::from_id_salt("engine_choice")
                        .selected_text(app.engine.to_string())
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut app.engine, EngineChoice::Auto, "Auto");
                            ui.selectable_value(
                                &mut app.engine,
                                EngineChoice::LibreOffice,
                                "LibreOffice",
                            );
                            ui.selectable_value(
                                &mut app.engine,
                                EngineChoice::PowerPoint,
                                "PowerPoint",
                            );
                        });
                });
            });

            ui.add_space(5.0);

            let engine_info = match app.engine {
                EngineChoice::Auto => {
                    "Prefers PowerPoint automation on Windows when present, otherwise falls back to LibreOffice."
                }
                EngineChoice::LibreOffice => {
                    "Headless soffice command line. Works on any platform with LibreOffice installed."
                }
                EngineChoice::PowerPoint => {
                    "Drives the installed PowerPoint application. Windows only."
                }
            };
            ui.label(
                RichText::new(engine_info)
                    .color(Color32::from_gray(120))
                    .size(11.0),
            );

            ui.add_space(8.0);

            if ui.button("Detect Engines").clicked() {
                app.detect_engines();
            }
        });
    }
}

pub struct InputSelectionComponent;

impl InputSelectionComponent {
    pub fn render(ui: &mut Ui, app: &mut DeckpressGui) {
        ui.heading("Inputs");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                if ui.button("Add Files").clicked() {
                    app.select_input_files();
                }
                if ui.button("Add Folder").clicked() {
                    app.select_input_folder();
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.clear_inputs();
                }
                if ui.button("Drop Missing").clicked() {
                    app.remove_missing_inputs();
                }
            });

            ui.add_space(5.0);

            if app.input_items.is_empty() {
                ui.label(RichText::new("Nothing selected").color(Color32::from_gray(120)));
            } else {
                let mut remove: Option<usize> = None;
                for (idx, item) in app.input_items.iter().enumerate() {
                    ui.horizontal(|ui| {
                        if ui.small_button("✕").clicked() {
                            remove = Some(idx);
                        }
                        let label = if item.is_dir() {
                            format!("[dir] {}", item.display())
                        } else {
                            item.display().to_string()
                        };
                        ui.label(
                            RichText::new(label)
                                .color(Color32::from_rgb(255, 165, 0))
                                .size(11.0),
                        );
                    });
                }
                if let Some(idx) = remove {
                    app.input_items.remove(idx);
                }
            }
        });
    }
}

pub struct OutputComponent;

impl OutputComponent {
    pub fn render(ui: &mut Ui, app: &mut DeckpressGui) {
        ui.heading("Output Folder");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT * 0.6);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                if ui.button("Browse").clicked() {
                    app.select_output_directory();
                }
                if ui.button("Open").clicked() {
                    if let Err(e) = app.open_output_dir() {
                        tracing::error!("Failed to open output folder: {}", e);
                    }
                }
            });

            if let Some(path) = &app.output_dir {
                ui.label(
                    RichText::new(path.to_string_lossy()).color(Color32::from_rgb(255, 165, 0)),
                );
            } else {
                ui.label(RichText::new("None selected").color(Color32::from_gray(120)));
            }

            ui.add_space(5.0);

            ui.label(
                RichText::new(
                    "Converted PDFs land here. Existing files with the same name are overwritten.",
                )
                .color(Color32::from_gray(120))
                .size(11.0),
            );
        });
    }
}

pub struct OptionsComponent;

impl OptionsComponent {
    pub fn render(ui: &mut Ui, app: &mut DeckpressGui) {
        ui.heading("Options");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Scan folders recursively:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.checkbox(&mut app.recursive, "");
                });
            });

            ui.add_space(5.0);

            ui.label(
                RichText::new(
                    "When enabled, added folders are searched for .ppt/.pptx files in all \
                     subdirectories; otherwise only the folder itself is scanned.",
                )
                .color(Color32::from_gray(120))
                .size(11.0),
            );
        });
    }
}

pub struct FooterComponent;

impl FooterComponent {
    pub fn render(ui: &mut Ui, app: &mut DeckpressGui) {
        // Update system statistics
        app.update_system_stats();

        ui.horizontal(|ui| {
            // Left side - timing and progress
            let status_color = if app.is_processing {
                Color32::from_rgb(255, 165, 0) // Orange for processing
            } else {
                Color32::from_rgb(100, 200, 100) // Green for ready
            };

            let timing_text = if app.is_processing {
                if let Some(start_time) = app.processing_start_time {
                    format!("Converting: {:.2?}", start_time.elapsed())
                } else {
                    "Converting...".to_string()
                }
            } else if let Some(duration) = app.last_processing_duration {
                format!("Last run: {:.2?}", duration)
            } else {
                "Ready".to_string()
            };

            ui.label(RichText::new(timing_text).color(status_color).size(14.0));

            ui.separator();

            let done = app.progress_done.load(Ordering::SeqCst);
            let total = app.progress_total.load(Ordering::SeqCst);
            let fraction = if total > 0 {
                done as f32 / total as f32
            } else {
                0.0
            };
            ui.add(
                ProgressBar::new(fraction)
                    .desired_width(200.0)
                    .text(format!("{} / {}", done, total)),
            );

            ui.separator();

            // CPU usage
            let cpu_color = if app.cpu_usage > 80.0 {
                Color32::from_rgb(255, 100, 100)
            } else if app.cpu_usage > 50.0 {
                Color32::from_rgb(255, 165, 0)
            } else {
                Color32::from_rgb(100, 200, 100)
            };

            ui.label(
                RichText::new(format!("CPU: {:.1}%", app.cpu_usage))
                    .color(cpu_color)
                    .size(12.0),
            );

            ui.separator();

            // Memory usage
            let memory_percent = if app.total_memory_mb > 0.0 {
                (app.memory_usage_mb / app.total_memory_mb) * 100.0
            } else {
                0.0
            };

            let memory_color = if memory_percent > 80.0 {
                Color32::from_rgb(255, 100, 100)
            } else if memory_percent > 60.0 {
                Color32::from_rgb(255, 165, 0)
            } else {
                Color32::from_rgb(100, 200, 100)
            };

            ui.label(
                RichText::new(format!(
                    "RAM: {:.1} GB / {:.1} GB ({:.1}%)",
                    app.memory_usage_mb / 1024.0,
                    app.total_memory_mb / 1024.0,
                    memory_percent
                ))
                .color(memory_color)
                .size(12.0),
            );

            // Right side - buttons
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("To CLI").clicked() {
                    let cli_command = app.generate_cli_command();

                    // A special CLI command entry (not a regular log)
                    let cli_entry = crate::gui::logging::LogEntry::new(
                        tracing::Level::INFO,
                        format!("CLI Command: {}", cli_command),
                        "cli".to_string(),
                    );

                    if let Ok(mut logs) = app.log_messages.lock() {
                        logs.push(cli_entry);
                    }
                }

                if ui.button("Save Preset").clicked() {
                    if let Err(e) = app.save_preset() {
                        tracing::error!("Failed to save preset: {}", e);
                    }
                }

                if ui.button("Load Preset").clicked() {
                    if let Err(e) = app.load_preset() {
                        tracing::error!("Failed to load preset: {}", e);
                    }
                }

                if ui.button("Save Logs").clicked() {
                    if let Err(e) = app.save_logs_to_file() {
                        tracing::error!("Failed to save logs: {}", e);
                    }
                }

                if ui.button("Clear").clicked() {
                    if let Ok(mut logs) = app.log_messages.lock() {
                        logs.clear();
                    }
                }

                if ui.button("Reset").clicked() {
                    if !app.is_processing {
                        *app = DeckpressGui::default();
                    }
                }
            });
        });
    }
}
