//! Desktop preview app for pendant-light-composer
//!
//! Draws the LED rings in a window and drives the renderer with synthetic
//! time. The touch pad and the ambient light sensor are simulated with a
//! button and a slider.

use std::time::Instant as StdInstant;

use eframe::egui::{self};
use pendant_light_composer::{
    EngineConfig, FrameInput, IndicatorSink, Instant, Renderer, Rgb, color::BLACK,
};

/// Size of each LED circle in pixels
const LED_SIZE: f32 = 14.0;

/// Radius of a drawn ring
const RING_RADIUS: f32 = 70.0;

/// Gap between drawn rings
const RING_GAP: f32 = 40.0;

/// Frames rendered per UI update at most, so a paused window can catch up
const MAX_CATCH_UP_FRAMES: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Preset {
    NovaBlue,
    Nova,
    Chase,
}

impl Preset {
    const ALL: [Self; 3] = [Self::NovaBlue, Self::Nova, Self::Chase];

    const fn as_str(self) -> &'static str {
        match self {
            Self::NovaBlue => "nova_blue",
            Self::Nova => "nova",
            Self::Chase => "chase",
        }
    }

    fn config(self) -> EngineConfig {
        match self {
            Self::NovaBlue => EngineConfig::nova_blue(),
            Self::Nova => EngineConfig::nova(),
            Self::Chase => EngineConfig::chase(),
        }
    }
}

/// Status light and touch lamp drawn next to the rings
#[derive(Debug, Clone, Copy)]
struct PreviewIndicator {
    color: Rgb,
    touch: bool,
}

impl IndicatorSink for PreviewIndicator {
    fn set_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn set_touch(&mut self, active: bool) {
        self.touch = active;
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_title("Pendant Light Preview"),
        ..Default::default()
    };

    eframe::run_native(
        "pendant-light-preview",
        options,
        Box::new(|_cc| Ok(Box::new(PreviewApp::new()))),
    )
}

struct PreviewApp {
    preset: Preset,
    /// `None` while the selected preset fails validation
    renderer: Option<Renderer>,
    indicator: PreviewIndicator,
    /// Last rendered frame
    pixels: Vec<Rgb>,
    /// Synthetic time in milliseconds
    t_ms: u64,
    /// Synthetic time of the next frame
    next_frame_ms: u64,
    /// Wall-clock reference for delta time
    last_frame: StdInstant,
    playing: bool,
    /// Time scale multiplier (1.0 = realtime)
    time_scale: f32,
    /// Simulated raw light sensor sample
    ambient: u16,
    /// Touch button held down
    touch: bool,
    /// Configuration error of the selected preset
    error: Option<String>,
}

impl PreviewApp {
    fn new() -> Self {
        let preset = Preset::NovaBlue;
        let mut app = Self {
            preset,
            renderer: None,
            indicator: PreviewIndicator {
                color: BLACK,
                touch: false,
            },
            pixels: Vec::new(),
            t_ms: 0,
            next_frame_ms: 0,
            last_frame: StdInstant::now(),
            playing: true,
            time_scale: 1.0,
            ambient: 30_000,
            touch: false,
            error: None,
        };
        app.select_preset(preset);
        app
    }

    /// Restart the engine with another preset
    fn select_preset(&mut self, preset: Preset) {
        let config = preset.config();
        self.preset = preset;
        match Renderer::new(&config, Instant::from_millis(0)) {
            Ok(renderer) => {
                self.renderer = Some(renderer);
                self.error = None;
            }
            Err(err) => {
                self.renderer = None;
                self.error = Some(format!("{}: {err}", preset.as_str()));
            }
        }
        self.indicator.color = BLACK;
        self.pixels = vec![BLACK; config.pixel_count];
        self.t_ms = 0;
        self.next_frame_ms = 0;
        self.last_frame = StdInstant::now();
    }

    /// Update synthetic time based on wall clock and time scale
    fn update_time(&mut self) {
        let now = StdInstant::now();
        let delta = now.duration_since(self.last_frame);
        self.last_frame = now;

        if self.playing {
            let delta_ms_f64 = delta.as_secs_f64() * 1000.0 * f64::from(self.time_scale);
            let delta_ms_f64 = if delta_ms_f64.is_finite() {
                #[allow(clippy::cast_precision_loss)]
                delta_ms_f64.clamp(0.0, u64::MAX as f64)
            } else {
                0.0
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let delta_ms = delta_ms_f64 as u64;
            self.t_ms = self.t_ms.wrapping_add(delta_ms);
        }
    }

    /// Render every frame that is due, honoring each frame's hold time
    fn render_due_frames(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        for _ in 0..MAX_CATCH_UP_FRAMES {
            if self.next_frame_ms > self.t_ms {
                return;
            }
            let input = FrameInput {
                now: Instant::from_millis(self.next_frame_ms),
                touch: self.touch,
                light: self.ambient,
            };
            let frame = renderer.render(input, &mut self.indicator);
            self.pixels.clear();
            self.pixels.extend_from_slice(frame.pixels);
            // A zero hold would stall synthetic time
            self.next_frame_ms += frame.hold.as_millis().max(1);
        }
        self.next_frame_ms = self.t_ms;
    }

    fn draw_rings(&self, ui: &mut egui::Ui, renderer: &Renderer) {
        let topology = renderer.topology();
        let ring_size = topology.ring_size();
        let ring_count = topology.ring_count();

        let ring_span = RING_RADIUS * 2.0 + LED_SIZE;
        #[allow(clippy::cast_precision_loss)]
        let width = ring_count as f32 * (ring_span + RING_GAP);
        let (response, painter) =
            ui.allocate_painter(egui::vec2(width, ring_span), egui::Sense::hover());
        let origin = response.rect.min;

        #[allow(clippy::cast_precision_loss)]
        for (index, pixel) in self.pixels.iter().enumerate() {
            let ring = topology.ring_of(index);
            let center = egui::pos2(
                origin.x + ring as f32 * (ring_span + RING_GAP) + ring_span / 2.0,
                origin.y + ring_span / 2.0,
            );
            let position = if topology.is_center(index) {
                center
            } else {
                let slot = index - topology.center(index) - 1;
                let angle = std::f32::consts::TAU * slot as f32 / (ring_size - 1) as f32;
                center + RING_RADIUS * egui::vec2(angle.sin(), -angle.cos())
            };

            let color = egui::Color32::from_rgb(pixel.r, pixel.g, pixel.b);
            painter.circle_filled(position, LED_SIZE / 2.0, color);
            painter.circle_stroke(
                position,
                LED_SIZE / 2.0,
                egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
            );
        }
    }
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_time();
        self.render_due_frames();

        ctx.request_repaint();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal(|ui| {
                // <PlaybackControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("⏮ Reset").clicked() {
                            self.select_preset(self.preset);
                        }
                        if ui
                            .button(if self.playing { "⏸ Pause" } else { "▶ Play" })
                            .clicked()
                        {
                            self.playing = !self.playing;
                        }
                    });

                    ui.add_space(4.0);

                    let secs = self.t_ms / 1000;
                    let ms = self.t_ms % 1000;
                    ui.label(format!("Time: {secs}.{ms:03}s"));

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Speed:");
                        ui.add(egui::Slider::new(&mut self.time_scale, 0.1..=5.0).logarithmic(true));
                    });
                });
                // </PlaybackControls>
                ui.add_space(16.0);
                // <DeviceControls>
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label("Preset:");
                        let mut selected = self.preset;
                        egui::ComboBox::from_id_salt("preset_selector")
                            .selected_text(self.preset.as_str())
                            .show_ui(ui, |ui| {
                                for preset in Preset::ALL {
                                    ui.selectable_value(&mut selected, preset, preset.as_str());
                                }
                            });
                        if selected != self.preset {
                            self.select_preset(selected);
                        }
                    });

                    ui.add_space(4.0);

                    ui.horizontal(|ui| {
                        ui.label("Ambient:");
                        ui.add(egui::Slider::new(&mut self.ambient, 0..=u16::MAX));
                    });

                    ui.add_space(4.0);

                    let button = egui::Button::new("Touch").sense(egui::Sense::click_and_drag());
                    self.touch = ui.add(button).is_pointer_button_down_on();
                });
                // </DeviceControls>
            });

            ui.add_space(16.0);

            // === Status ===
            ui.horizontal(|ui| {
                let selector = self.renderer.as_ref().map(Renderer::selector);
                let mode = selector
                    .and_then(|selector| selector.active())
                    .map_or("-", |mode| mode.as_str());
                let lock = if selector.is_some_and(|selector| selector.is_locked()) {
                    "locked"
                } else {
                    "selecting"
                };
                ui.label(format!("Mode: {mode} ({lock})"));

                ui.add_space(8.0);

                // Indicator values are tiny, scale them up so the hue is visible
                let Rgb { r, g, b } = self.indicator.color;
                let peak = r.max(g).max(b).max(1);
                #[allow(clippy::cast_possible_truncation)]
                let boost = |channel: u8| (u16::from(channel) * 255 / u16::from(peak)) as u8;
                let swatch = if self.indicator.color == BLACK {
                    egui::Color32::BLACK
                } else {
                    egui::Color32::from_rgb(boost(r), boost(g), boost(b))
                };
                ui.label("Indicator:");
                let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 3.0, swatch);

                ui.add_space(8.0);
                ui.label(if self.indicator.touch { "touch lamp on" } else { "touch lamp off" });
            });

            if let Some(error) = &self.error {
                ui.colored_label(egui::Color32::RED, error);
            }

            ui.add_space(16.0);

            // === LED Display ===
            if let Some(renderer) = &self.renderer {
                self.draw_rings(ui, renderer);
            }
        });
    }
}
