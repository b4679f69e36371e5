use std::f64::consts::PI;

use eframe::egui;
use egui_plot::{Corner, Legend, Line, Plot, PlotBounds, PlotPoints};
use serde::{Deserialize, Serialize};
use waveloom_core::{sample_frame, SampleFrame, SamplerConfig, VIEW_HALF_SPAN};

const DT: f64 = 0.01;

const RE_COLOR: egui::Color32 = egui::Color32::from_rgb(86, 156, 214);
const IM_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 163, 60);
const PROB_COLOR: egui::Color32 = egui::Color32::from_rgb(97, 175, 110);

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Preset {
    name: String,
    config: SamplerConfig,
}

struct AppState {
    config: SamplerConfig,
    presets: Vec<Preset>,
    selected_preset: usize,
    time: f64,
    speed: f64,
    running: bool,
    status: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let presets = default_presets();
        Self {
            config: presets[0].config,
            presets,
            selected_preset: 0,
            time: 0.0,
            speed: 1.0,
            running: true,
            status: None,
        }
    }
}

impl AppState {
    fn save_preset(&mut self) {
        let name = format!("Custom {}", self.presets.len() + 1);
        let preset = Preset {
            name,
            config: self.config,
        };
        let save_path = rfd::FileDialog::new()
            .set_file_name("waveloom_preset.json")
            .add_filter("Preset", &["json"])
            .save_file();
        if let Some(path) = save_path {
            match std::fs::File::create(path) {
                Ok(file) => {
                    if serde_json::to_writer_pretty(file, &preset).is_ok() {
                        self.status = Some("Preset saved.".to_string());
                    } else {
                        self.status = Some("Failed to save preset.".to_string());
                    }
                }
                Err(_) => {
                    self.status = Some("Unable to create preset file.".to_string());
                }
            }
        }
    }

    fn load_preset(&mut self) {
        let open_path = rfd::FileDialog::new()
            .add_filter("Preset", &["json"])
            .pick_file();
        if let Some(path) = open_path {
            match std::fs::File::open(path) {
                Ok(file) => {
                    if let Ok(preset) = serde_json::from_reader::<_, Preset>(file) {
                        self.config = preset.config;
                        self.presets.push(preset);
                        self.selected_preset = self.presets.len() - 1;
                        self.status = Some("Preset loaded.".to_string());
                    } else {
                        self.status = Some("Failed to parse preset.".to_string());
                    }
                }
                Err(_) => {
                    self.status = Some("Unable to open preset.".to_string());
                }
            }
        }
    }
}

impl eframe::App for AppState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.running {
            self.time += DT * self.speed;
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = if self.running { "Pause" } else { "Play" };
                if ui.button(label).clicked() {
                    self.running = !self.running;
                }
                if ui.button("Reset Time").clicked() {
                    self.time = 0.0;
                }
                if ui.button("Save Preset").clicked() {
                    self.save_preset();
                }
                if ui.button("Load Preset").clicked() {
                    self.load_preset();
                }
            });
        });

        egui::SidePanel::left("left_panel").show(ctx, |ui| {
            ui.heading("Presets");
            egui::ComboBox::from_id_source("preset_combo")
                .selected_text(self.presets[self.selected_preset].name.clone())
                .show_ui(ui, |ui| {
                    for (idx, preset) in self.presets.iter().enumerate() {
                        if ui
                            .selectable_label(idx == self.selected_preset, &preset.name)
                            .clicked()
                        {
                            self.selected_preset = idx;
                            self.config = preset.config;
                        }
                    }
                });

            ui.separator();
            ui.heading("Playback");
            ui.add(egui::Slider::new(&mut self.speed, 0.1..=5.0).text("speed"))
                .on_hover_text("Simulation time advance per frame, relative to 0.01.");
            ui.label(format!("t = {:.2}", self.time));
        });

        egui::SidePanel::right("right_panel").show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    egui::CollapsingHeader::new("Wave Packet")
                        .default_open(true)
                        .show(ui, |ui| {
                            ui.add(
                                egui::Slider::new(&mut self.config.packet.amplitude, 0.1..=2.0)
                                    .step_by(0.1)
                                    .text("amplitude"),
                            )
                            .on_hover_text("Envelope peak height per wave term.");
                            ui.add(
                                egui::Slider::new(&mut self.config.packet.sigma, 0.1..=3.0)
                                    .step_by(0.1)
                                    .text("sigma"),
                            )
                            .on_hover_text("Gaussian envelope width.");
                            ui.add(
                                egui::Slider::new(&mut self.config.packet.k0, 0.0..=20.0)
                                    .step_by(0.5)
                                    .text("k0"),
                            )
                            .on_hover_text("Primary wavenumber; also sets the window drift speed.");
                        });

                    egui::CollapsingHeader::new("Interference")
                        .default_open(true)
                        .show(ui, |ui| {
                            ui.checkbox(&mut self.config.interference.enabled, "Second wave")
                                .on_hover_text("Superpose a second carrier in the same envelope.");
                            ui.add(
                                egui::Slider::new(&mut self.config.interference.k1, 0.0..=20.0)
                                    .step_by(0.5)
                                    .text("k1"),
                            )
                            .on_hover_text("Secondary wavenumber.");
                        });

                    egui::CollapsingHeader::new("Phase Gate")
                        .default_open(true)
                        .show(ui, |ui| {
                            ui.checkbox(&mut self.config.phase_gate.enabled, "Phase gate")
                                .on_hover_text("Localized phase rotation, magnitude preserving.");
                            ui.add(
                                egui::Slider::new(&mut self.config.phase_gate.center, -10.0..=10.0)
                                    .step_by(0.1)
                                    .text("center"),
                            )
                            .on_hover_text("Gate position.");
                            ui.add(
                                egui::Slider::new(&mut self.config.phase_gate.width, 0.1..=5.0)
                                    .step_by(0.1)
                                    .text("width"),
                            )
                            .on_hover_text("Gate spatial spread.");
                            ui.add(
                                egui::Slider::new(&mut self.config.phase_gate.phase, -PI..=PI)
                                    .step_by(0.1)
                                    .text("phase"),
                            )
                            .on_hover_text("Peak phase shift at the gate center, in radians.");
                        });
                });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            match sample_frame(self.time, &self.config) {
                Ok(frame) => {
                    let plot_height = (ui.available_height() * 0.5 - 12.0).max(100.0);
                    draw_wavefunction_plot(ui, &frame, plot_height);
                    ui.separator();
                    draw_probability_plot(ui, &frame, plot_height);
                }
                Err(err) => {
                    self.status = Some(format!("Sampling failed: {err}"));
                }
            }
            if let Some(status) = &self.status {
                ui.label(status);
            }
        });

        if self.running {
            ctx.request_repaint();
        }
    }
}

fn draw_wavefunction_plot(ui: &mut egui::Ui, frame: &SampleFrame, height: f32) {
    let re_points: PlotPoints = frame
        .positions
        .iter()
        .zip(&frame.real)
        .map(|(&x, &re)| [x, re])
        .collect();
    let im_points: PlotPoints = frame
        .positions
        .iter()
        .zip(&frame.imag)
        .map(|(&x, &im)| [x, im])
        .collect();

    let extent = frame
        .real
        .iter()
        .chain(&frame.imag)
        .fold(0.0_f64, |acc, v| acc.max(v.abs()))
        .max(1e-6);
    let cx = frame.window_center;

    Plot::new("wavefunction")
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .legend(Legend::default().position(Corner::RightTop))
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [cx - VIEW_HALF_SPAN, -1.1 * extent],
                [cx + VIEW_HALF_SPAN, 1.1 * extent],
            ));
            plot_ui.line(Line::new(re_points).color(RE_COLOR).width(2.0).name("Re ψ"));
            plot_ui.line(Line::new(im_points).color(IM_COLOR).width(2.0).name("Im ψ"));
        });
}

fn draw_probability_plot(ui: &mut egui::Ui, frame: &SampleFrame, height: f32) {
    let prob = frame.probability_density();
    let points: PlotPoints = frame
        .positions
        .iter()
        .zip(&prob)
        .map(|(&x, &p)| [x, p])
        .collect();
    let peak = frame.peak_probability().max(1e-9);
    let cx = frame.window_center;

    Plot::new("probability")
        .height(height)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .legend(Legend::default().position(Corner::RightTop))
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [cx - VIEW_HALF_SPAN, 0.0],
                [cx + VIEW_HALF_SPAN, 1.1 * peak],
            ));
            plot_ui.line(Line::new(points).color(PROB_COLOR).width(2.0).name("|ψ|²"));
        });
}

fn default_presets() -> Vec<Preset> {
    let gated_interference = SamplerConfig::default();

    let mut single_packet = SamplerConfig::default();
    single_packet.interference.enabled = false;
    single_packet.phase_gate.enabled = false;

    let mut beating_pair = SamplerConfig::default();
    beating_pair.phase_gate.enabled = false;

    let mut phase_gate = SamplerConfig::default();
    phase_gate.interference.enabled = false;

    let mut slow_wide = SamplerConfig::default();
    slow_wide.packet.amplitude = 1.0;
    slow_wide.packet.sigma = 2.5;
    slow_wide.packet.k0 = 1.0;
    slow_wide.interference.enabled = false;
    slow_wide.phase_gate.enabled = false;

    vec![
        Preset {
            name: "Gated Interference".to_string(),
            config: gated_interference,
        },
        Preset {
            name: "Single Packet".to_string(),
            config: single_packet,
        },
        Preset {
            name: "Beating Pair".to_string(),
            config: beating_pair,
        },
        Preset {
            name: "Phase Gate".to_string(),
            config: phase_gate,
        },
        Preset {
            name: "Slow Wide Packet".to_string(),
            config: slow_wide,
        },
    ]
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "waveloom",
        options,
        Box::new(|_cc| Box::<AppState>::default()),
    )
}
