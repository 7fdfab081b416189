/// Sesame Studio GUI
///
/// Pose editor for the Sesame leg rig: set the 8 servo angles, capture
/// frames, and copy the generated firmware code into the sketch.
///
/// Run with: cargo run --bin sesame_studio

#[path = "../config_loader.rs"]
mod config_loader;
#[path = "../joints.rs"]
mod joints;
#[path = "../codegen.rs"]
mod codegen;
#[path = "../code_buffer.rs"]
mod code_buffer;
#[path = "../session.rs"]
mod session;

use clap::Parser;
use eframe::egui;
use egui::Color32;
use joints::Joint;
use session::Session;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a sesame_studio.yaml config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

/// Entry grid layout mirroring the top-down schematic of the rig: outer leg
/// servos at the edges, hip servos toward the center, front row then rear.
const FRONT_ROW: [Joint; 4] = [Joint::L3, Joint::L1, Joint::R1, Joint::R3];
const REAR_ROW: [Joint; 4] = [Joint::L4, Joint::L2, Joint::R2, Joint::R4];

struct StudioGUI {
    session: Session,
    status: String,
    status_is_error: bool,
    show_help: bool,
}

impl StudioGUI {
    fn new(config: &config_loader::StudioConfig) -> Self {
        Self {
            session: Session::new(config.default_angle, config.default_delay_ms),
            status: "Ready".to_string(),
            status_is_error: false,
            show_help: false,
        }
    }

    fn set_status(&mut self, msg: impl Into<String>, is_error: bool) {
        self.status = msg.into();
        self.status_is_error = is_error;
    }

    fn add_frame_clicked(&mut self) {
        match self.session.add_frame() {
            Ok(()) => {
                log::info!(target: "studio_gui", "Frame {} added", self.session.frame_count());
                self.set_status("Frame added successfully", false);
            }
            Err(e) => {
                log::warn!(target: "studio_gui", "Frame rejected: {}", e);
                self.set_status(e.to_string(), true);
            }
        }
    }

    fn joint_entry(&mut self, ui: &mut egui::Ui, joint: Joint) {
        let (r, g, b) = joint.color_rgb();
        let color = Color32::from_rgb(r, g, b);
        ui.vertical_centered(|ui| {
            ui.colored_label(color, egui::RichText::new(joint.label()).strong());
            ui.add(
                egui::TextEdit::singleline(self.session.fields.field_mut(joint))
                    .desired_width(44.0)
                    .horizontal_align(egui::Align::Center),
            );
        });
    }

    fn help_window(&mut self, ctx: &egui::Context) {
        egui::Window::new("How to use Sesame Studio")
            .open(&mut self.show_help)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new("1. Set Angles").strong());
                ui.label("Type an angle for each servo. 90 is usually center/straight.");
                ui.add_space(6.0);
                ui.label(egui::RichText::new("2. Add Frame").strong());
                ui.label("Set the delay (speed) and click + Add Frame to save the pose.");
                ui.add_space(6.0);
                ui.label(egui::RichText::new("3. Get Code").strong());
                ui.label("Copy the generated C++ code into your firmware sketch.");
            });
    }
}

impl eframe::App for StudioGUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Sesame Studio");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("?").clicked() {
                        self.show_help = !self.show_help;
                    }
                });
            });
            ui.separator();

            // Joint entries, arranged like the physical rig seen from above.
            ui.vertical_centered(|ui| {
                egui::Grid::new("joint_grid")
                    .spacing([28.0, 10.0])
                    .show(ui, |ui| {
                        for joint in FRONT_ROW {
                            self.joint_entry(ui, joint);
                        }
                        ui.end_row();
                        for joint in REAR_ROW {
                            self.joint_entry(ui, joint);
                        }
                        ui.end_row();
                    });
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label("Delay (ms):");
                ui.add(
                    egui::TextEdit::singleline(&mut self.session.delay_field).desired_width(60.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("+ Add Frame").clicked() {
                        self.add_frame_clicked();
                    }
                    if ui.button("Clear Code").clicked() {
                        self.session.clear_code();
                        self.set_status("Code cleared", false);
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(egui::RichText::new("Generated Code:").strong());
            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - 70.0)
                .auto_shrink([false; 2])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut self.session.generated_code())
                            .desired_width(f32::INFINITY)
                            .code_editor(),
                    );
                });

            ui.add_space(6.0);
            if ui
                .add_sized(
                    [ui.available_width(), 30.0],
                    egui::Button::new("Copy to Clipboard"),
                )
                .clicked()
            {
                let code = self.session.export_code();
                ui.output_mut(|o| o.copied_text = code);
                self.set_status("Code copied to clipboard!", false);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let color = if self.status_is_error {
                    Color32::from_rgb(255, 85, 85)
                } else {
                    Color32::from_gray(136)
                };
                ui.colored_label(color, &self.status);
            });
        });

        self.help_window(ctx);
    }
}

fn main() {
    let args = Args::parse();
    let filter = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = match config_loader::load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {:#}", e);
            std::process::exit(1);
        }
    };

    let app = StudioGUI::new(&config);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height]),
        ..Default::default()
    };
    let _ = eframe::run_native("Sesame Studio", options, Box::new(|_cc| Box::new(app)));
}
