use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Align2, Color32, Context as EguiContext, FontId, Mesh, Rect};
use gradient_clock_core::{PingPong, Rgb, TimeOfDay, palette, phase::DEFAULT_HALF_CYCLE};

/// Repaint delay while the animation runs (~60 Hz).
const FRAME_INTERVAL: Duration = Duration::from_micros(16_666);

const CLOCK_FONT_SIZE: f32 = 48.0;

pub struct AppConfig {
    /// Bound-to-bound sweep time of the gradient oscillation.
    pub half_cycle: Duration,
    /// How often the displayed time is resampled.
    pub tick_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            half_cycle: DEFAULT_HALF_CYCLE,
            tick_interval: Duration::from_secs(1),
        }
    }
}

pub struct GradientClockApp {
    phase: PingPong,
    time: TimeOfDay,
    tick_interval: Duration,
    last_tick: Instant,
    last_frame: Instant,
}

impl GradientClockApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        let now = Instant::now();
        Self {
            phase: PingPong::new(config.half_cycle),
            time: TimeOfDay::now(),
            tick_interval: config.tick_interval,
            last_tick: now,
            last_frame: now,
        }
    }

    /// Resamples the wall clock once per tick interval.
    fn sample_time(&mut self) {
        if self.last_tick.elapsed() >= self.tick_interval {
            self.time = TimeOfDay::now();
            self.last_tick = Instant::now();
            tracing::debug!("clock tick: {}", self.time);
        }
    }

    fn draw(&self, ctx: &EguiContext) {
        let t = self.phase.value();
        let start = palette::dark_color(t, 0.0);
        let end = palette::dark_color(t, 1.0);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let canvas_size = ui.available_size();
                let (rect, _) = ui.allocate_exact_size(canvas_size, egui::Sense::hover());

                ui.painter().add(gradient_mesh(rect, start, end));
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    self.time.to_string(),
                    FontId::monospace(CLOCK_FONT_SIZE),
                    Color32::WHITE,
                );
            });
    }
}

impl eframe::App for GradientClockApp {
    fn update(&mut self, ctx: &EguiContext, _: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;

        self.phase.advance(dt);
        self.sample_time();
        self.draw(ctx);

        // The animation has no input to wake it up; keep repainting ourselves.
        ctx.request_repaint_after(FRAME_INTERVAL);
    }
}

/// Builds a full-rect mesh approximating a linear gradient that runs from the
/// top-left corner (`start`) to the bottom-right corner (`end`).
///
/// Vertex colors interpolate linearly across each triangle, so the two
/// off-diagonal corners take the midpoint blend of the anchors.
fn gradient_mesh(rect: Rect, start: Rgb, end: Rgb) -> Mesh {
    let mid = to_color32(start.lerp(end, 0.5));

    let mut mesh = Mesh::default();
    mesh.colored_vertex(rect.left_top(), to_color32(start));
    mesh.colored_vertex(rect.right_top(), mid);
    mesh.colored_vertex(rect.left_bottom(), mid);
    mesh.colored_vertex(rect.right_bottom(), to_color32(end));
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    mesh
}

fn to_color32(rgb: Rgb) -> Color32 {
    let [r, g, b] = rgb.to_srgb8();
    Color32::from_rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::{gradient_mesh, to_color32};
    use eframe::egui::{Color32, Pos2, Rect};
    use gradient_clock_core::Rgb;

    #[test]
    fn mesh_covers_rect_with_anchor_corners() {
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(800.0, 600.0));
        let start = Rgb::new(1.0, 0.0, 0.0);
        let end = Rgb::new(0.0, 0.0, 1.0);

        let mesh = gradient_mesh(rect, start, end);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);

        assert_eq!(mesh.vertices[0].pos, rect.left_top());
        assert_eq!(mesh.vertices[0].color, Color32::from_rgb(255, 0, 0));
        assert_eq!(mesh.vertices[3].pos, rect.right_bottom());
        assert_eq!(mesh.vertices[3].color, Color32::from_rgb(0, 0, 255));

        // Off-diagonal corners carry the midpoint blend.
        let mid = to_color32(start.lerp(end, 0.5));
        assert_eq!(mesh.vertices[1].color, mid);
        assert_eq!(mesh.vertices[2].color, mid);
    }
}
