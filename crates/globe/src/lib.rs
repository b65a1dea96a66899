//! Interactive arc globe engine.
//!
//! `Globe` ties the crates together behind one facade:
//! - callers hand in replacement arrow sets ([`Globe::reconcile`]) and
//!   pointer/zoom input; arrows grow, shrink and fade through the scene's
//!   animation scheduler,
//! - a damped camera eases towards its rotation and zoom targets,
//! - [`Globe::advance`] runs one display frame on demand and returns draw
//!   commands, or `None` when nothing moved,
//! - picking decodes a caller-sampled pixel from the offscreen pick pass
//!   back to an arrow name.
//!
//! The engine is single-threaded and frame-driven; everything here is plain
//! state plus the per-frame `advance` entry point.

pub mod config;

pub use config::GlobeConfig;
pub use foundation::time::Time;
pub use gpu::renderer::{RenderCommand, RenderFrame};
pub use runtime::event_bus::Event;
pub use scene::arrow::{ArrowSpec, GeoPoint};

use std::collections::BTreeMap;

use foundation::math::arc::ArcProfile;
use gpu::camera::CameraState;
use gpu::renderer::Renderer;
use runtime::event_bus::EventBus;
use runtime::frame::Frame;
use runtime::metrics::Metrics;
use runtime::ready::ReadyLatch;
use scene::mesh::GridSize;
use scene::{ArrowSettings, Arrows, ReconcileSummary};

pub struct Globe {
    config: GlobeConfig,
    arrows: Arrows,
    camera: CameraState,
    frame: Frame,
    redraw: bool,
    pointer_active: bool,
    highlighted: Option<String>,
    arrow_color: [f32; 3],
    highlight_color: [f32; 3],
    texture_url: Option<String>,
    texture_latch: ReadyLatch,
    bus: EventBus,
    metrics: Metrics,
}

impl Default for Globe {
    fn default() -> Self {
        Self::new(GlobeConfig::default())
    }
}

impl Globe {
    pub fn new(config: GlobeConfig) -> Self {
        let settings = ArrowSettings {
            grid: GridSize::new(config.slices, config.stacks),
            profile: ArcProfile {
                base_radius: config.base_radius,
                peak_height: config.peak_height,
            },
            enter_ms: config.enter_ms,
            stagger_ms: config.stagger_ms,
        };
        let camera = CameraState::new();
        let mut arrows = Arrows::new(settings);
        arrows.set_pick_floor(camera.distance_target / config.pick_floor_divisor);

        Self {
            arrow_color: config.arrow_color,
            highlight_color: config.highlight_color,
            config,
            arrows,
            camera,
            frame: Frame::new(0, 0.0),
            redraw: true,
            pointer_active: false,
            highlighted: None,
            texture_url: None,
            texture_latch: ReadyLatch::new(),
            bus: EventBus::new(),
            metrics: Metrics::new(),
        }
    }

    /// Replace the arrow set; see `scene::Arrows::reconcile` for the
    /// animation schedule this produces.
    pub fn reconcile(&mut self, replacement: BTreeMap<String, ArrowSpec>) -> ReconcileSummary {
        let summary = self.arrows.reconcile(replacement);
        self.metrics.inc_counter("arrows.added", summary.added as u64);
        self.metrics.inc_counter("arrows.updated", summary.updated as u64);
        self.metrics.inc_counter("arrows.removed", summary.removed as u64);
        self.metrics.set_gauge("arrows.live", self.arrows.len() as i64);
        if summary != ReconcileSummary::default() {
            self.bus.emit(
                self.frame,
                "arrows",
                format!(
                    "added {}, updated {}, removed {}",
                    summary.added, summary.updated, summary.removed
                ),
            );
            self.redraw = true;
        }
        summary
    }

    /// Resolve the arrow under the pointer.
    ///
    /// `sample` reads the pick-pass pixel at the given coordinates; it is
    /// only invoked once the zoom has settled and no drag is in progress,
    /// since the pick render is stale while the view is still moving.
    pub fn pick_arrow_at<F>(&self, x: f64, y: f64, sample: F) -> Option<String>
    where
        F: FnOnce(f64, f64) -> Option<[u8; 3]>,
    {
        if !self.camera.zoom_converged(self.config.epsilon) || self.pointer_active {
            return None;
        }
        let pixel = sample(x, y)?;
        self.arrows.mousemap().decode(pixel).map(str::to_string)
    }

    /// Highlight one arrow (or clear). Unknown names simply match nothing.
    pub fn highlight(&mut self, name: Option<&str>) {
        self.highlighted = name.map(str::to_string);
        self.redraw = true;
    }

    pub fn set_color(&mut self, color: [f32; 3]) {
        if color == self.arrow_color {
            return;
        }
        self.arrow_color = color;
        self.redraw = true;
    }

    pub fn set_highlight_color(&mut self, color: [f32; 3]) {
        if color == self.highlight_color {
            return;
        }
        self.highlight_color = color;
        self.redraw = true;
    }

    pub fn set_thickness_scale(&mut self, scale: f64) {
        if self.arrows.set_thickness_scale(scale) {
            self.redraw = true;
        }
    }

    /// Returns false when the url is unchanged. Changing the url does not
    /// reset the readiness latch; textures load once per run.
    pub fn set_texture_url(&mut self, url: &str) -> bool {
        if self.texture_url.as_deref() == Some(url) {
            return false;
        }
        self.texture_url = Some(url.to_string());
        self.redraw = true;
        true
    }

    pub fn texture_url(&self) -> Option<&str> {
        self.texture_url.as_deref()
    }

    /// Run `callback` once the texture has loaded; immediately if it already
    /// has.
    pub fn when_texture_ready(&mut self, callback: impl FnOnce() + 'static) {
        self.texture_latch.when_ready(callback);
    }

    /// Called by the embedder when the texture bytes have arrived.
    pub fn notify_texture_loaded(&mut self) {
        if self.texture_latch.is_ready() {
            return;
        }
        self.texture_latch.fire();
        self.bus.emit(self.frame, "texture", "ready");
        self.redraw = true;
    }

    pub fn texture_ready(&self) -> bool {
        self.texture_latch.is_ready()
    }

    /// Point the camera at a geographic rotation target.
    pub fn rotate_to(&mut self, x: f64, y: f64) {
        self.camera.set_rotation_target_geographic(x, y);
        let (gx, gy) = self.camera.rotation_target_geographic();
        self.bus
            .emit(self.frame, "rotation", format!("target ({gx:.3}, {gy:.3})"));
    }

    pub fn rotation_target(&self) -> (f64, f64) {
        self.camera.rotation_target_geographic()
    }

    pub fn zoom_to(&mut self, distance: f64) {
        self.camera.set_distance_target(distance);
        self.after_zoom_change();
    }

    /// Positive `delta` zooms in.
    pub fn zoom_by(&mut self, delta: f64) {
        self.camera.zoom(delta);
        self.after_zoom_change();
    }

    pub fn zoom_target(&self) -> f64 {
        self.camera.distance_target
    }

    fn after_zoom_change(&mut self) {
        let target = self.camera.distance_target;
        self.arrows
            .set_pick_floor(target / self.config.pick_floor_divisor);
        self.bus
            .emit(self.frame, "distance", format!("target {target:.1}"));
    }

    /// Drag/touch gesture state from the embedder; picking is suppressed
    /// while active.
    pub fn set_pointer_active(&mut self, active: bool) {
        self.pointer_active = active;
    }

    /// Run one display frame.
    ///
    /// Returns `None` without doing any work when no redraw is pending, the
    /// camera has converged and no animation is active. Otherwise damps the
    /// camera, applies due animation samples (including arrow destruction)
    /// and collects the visible pass.
    pub fn advance(&mut self, now: Time) -> Option<RenderFrame> {
        self.frame = self.frame.next(now.0);

        let idle = !self.redraw
            && self.camera.converged(self.config.epsilon)
            && !self.arrows.animating();
        if idle {
            self.metrics.inc_counter("frames.skipped", 1);
            return None;
        }
        self.redraw = false;

        self.camera.step();
        let outcome = self.arrows.tick(now);
        if !outcome.destroyed.is_empty() {
            self.bus.emit(
                self.frame,
                "arrows",
                format!("destroyed {}", outcome.destroyed.join(", ")),
            );
            self.metrics
                .set_gauge("arrows.live", self.arrows.len() as i64);
        }
        self.metrics.inc_counter("frames.rendered", 1);

        Some(Renderer::collect(
            &self.arrows,
            self.arrow_color,
            self.highlight_color,
            self.highlighted.as_deref(),
        ))
    }

    /// Pick-pass commands for the offscreen render backing `pick_arrow_at`.
    pub fn pickmap_frame(&self) -> RenderFrame {
        Renderer::collect_pickmap(&self.arrows)
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn arrows(&self) -> &Arrows {
        &self.arrows
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn events(&self) -> &[Event] {
        self.bus.events()
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.bus.drain()
    }
}
