//! Parametric surface for a great-circle arc with a parabolic height and
//! width envelope.
//!
//! The surface is evaluated over `(u, v)` in the unit square: `u` runs along
//! the arc, `v` across its width. Both the radial bump and the width follow
//! the envelope `4u(1-u)`, so the arc lifts off the sphere toward its
//! midpoint and tapers to a point at both ends.

use super::spherical;
use super::vec::Vec3;

/// Endpoint basis for one arc, computed once per arc.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcFrame {
    pub r0: Vec3,
    pub r1: Vec3,
    /// Lateral thickness direction; zero when the endpoints coincide.
    pub lateral: Vec3,
}

impl ArcFrame {
    pub fn from_unit_vectors(r0: Vec3, r1: Vec3) -> Self {
        Self {
            r0,
            r1,
            lateral: spherical::lateral_tangent(r0, r1),
        }
    }
}

/// Radial profile: the sphere radius the arc sits on and the bump peak.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcProfile {
    pub base_radius: f64,
    pub peak_height: f64,
}

/// The parabolic envelope `4u(1-u)`: 0 at both ends, 1 at the midpoint.
pub fn envelope(u: f64) -> f64 {
    4.0 * u * (1.0 - u)
}

/// Evaluate the arc surface at `(u, v)`.
///
/// `progress` scales the effective arc parameter so a partially drawn arc
/// occupies `[0, progress]` of its great circle; `width` is the half-width
/// multiplier applied across `v`.
pub fn surface_point(
    frame: ArcFrame,
    profile: ArcProfile,
    width: f64,
    progress: f64,
    u: f64,
    v: f64,
) -> Vec3 {
    let u = u * progress;
    let bump = envelope(u);
    let radius = profile.base_radius + profile.peak_height * bump;
    let center = spherical::slerp(frame.r0, frame.r1, u).scale(radius);
    center + frame.lateral.scale(width * (v - 0.5) * 2.0 * bump)
}
