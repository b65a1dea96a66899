//! Damped orbit camera for the globe.
//!
//! All input goes through targets: handlers move `rotation_target` and
//! `distance_target`, and `step` eases the actual values towards them once
//! per rendered frame. Convergence drives both frame skipping and the
//! pick gate.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_6, PI};

use foundation::math::{Vec2, Vec3};

/// Maximum pitch magnitude (radians); keeps the camera off the poles.
pub const MAX_PITCH: f64 = FRAC_PI_2;

/// Minimum camera distance from the globe center.
pub const MIN_DISTANCE: f64 = 350.0;

/// Maximum camera distance from the globe center.
pub const MAX_DISTANCE: f64 = 1000.0;

/// Fraction of the remaining rotation covered per frame.
pub const ROTATION_DAMPING: f64 = 0.1;

/// Fraction of the remaining zoom covered per frame.
pub const DISTANCE_DAMPING: f64 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub rotation: Vec2,
    pub rotation_target: Vec2,
    pub distance: f64,
    pub distance_target: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        // Start far out and fly in towards the default view.
        Self {
            rotation: Vec2::new(0.0, 0.0),
            rotation_target: Vec2::new(PI * 1.5, FRAC_PI_6),
            distance: 100_000.0,
            distance_target: 1000.0,
        }
    }
}

impl CameraState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ease rotation and distance towards their targets.
    pub fn step(&mut self) {
        self.rotation.x += (self.rotation_target.x - self.rotation.x) * ROTATION_DAMPING;
        self.rotation.y += (self.rotation_target.y - self.rotation.y) * ROTATION_DAMPING;
        self.distance += (self.distance_target - self.distance) * DISTANCE_DAMPING;
    }

    pub fn converged(&self, eps: f64) -> bool {
        (self.rotation_target.x - self.rotation.x).abs() < eps
            && (self.rotation_target.y - self.rotation.y).abs() < eps
            && self.zoom_converged(eps)
    }

    /// Zoom-only convergence; picking is gated on this.
    pub fn zoom_converged(&self, eps: f64) -> bool {
        (self.distance_target - self.distance).abs() < eps
    }

    pub fn set_rotation_target(&mut self, x: f64, y: f64) {
        self.rotation_target.x = x;
        self.rotation_target.y = y.clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Rotation target in geographic terms: x offset so that longitude 0
    /// faces the camera when the target is 0.
    pub fn rotation_target_geographic(&self) -> (f64, f64) {
        (self.rotation_target.x + FRAC_PI_2, self.rotation_target.y)
    }

    pub fn set_rotation_target_geographic(&mut self, x: f64, y: f64) {
        self.set_rotation_target(x - FRAC_PI_2, y);
    }

    pub fn set_distance_target(&mut self, distance: f64) {
        self.distance_target = distance.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Move the distance target; positive `delta` zooms in.
    pub fn zoom(&mut self, delta: f64) {
        self.set_distance_target(self.distance_target - delta);
    }

    /// Camera eye derived from the current rotation and distance.
    pub fn eye_position(&self) -> Vec3 {
        let (rx, ry) = (self.rotation.x, self.rotation.y);
        Vec3::new(
            self.distance * rx.sin() * ry.cos(),
            self.distance * ry.sin(),
            self.distance * rx.cos() * ry.cos(),
        )
    }
}
