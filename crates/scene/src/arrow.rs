//! Arrow descriptions and live per-arrow state.
//!
//! An [`ArrowSpec`] is the caller's view of an arrow: two geographic endpoints
//! and a score. An [`Arrow`] is what the scene keeps per live arrow on top of
//! that spec: animated position along the arc, the score currently displayed,
//! the lifecycle phase, and handles to its meshes and pick id.

use foundation::handles::PickId;
use foundation::math::{Vec3, spherical};
use serde::{Deserialize, Serialize};

use crate::mesh::MeshId;

/// Geographic position in degrees, longitude east-positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lon_deg: f64,
    pub lat_deg: f64,
}

impl GeoPoint {
    pub fn new(lon_deg: f64, lat_deg: f64) -> Self {
        Self { lon_deg, lat_deg }
    }

    /// Position on the unit sphere.
    pub fn unit_vector(&self) -> Vec3 {
        spherical::unit_vector(self.lon_deg.to_radians(), self.lat_deg.to_radians())
    }
}

/// Caller-supplied description of one arrow.
///
/// `score` scales the arrow's width; the scene animates the displayed score
/// towards this value rather than applying it instantly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrowSpec {
    pub src: GeoPoint,
    pub dst: GeoPoint,
    pub score: f64,
}

/// Lifecycle phase of a live arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Growing from the source towards the destination.
    Entering,
    /// Fully extended.
    Steady,
    /// Shrinking back towards the source; removed when it gets there.
    Exiting,
}

/// Live per-arrow state.
///
/// `progress` is how far along the arc the tip has grown, in [0, 1].
/// `displayed_score` trails `spec.score` while a score fade is running.
/// `pick_id` stays stable for the arrow's whole life, including across
/// spec updates and exit-reversals.
#[derive(Debug, Clone)]
pub struct Arrow {
    pub spec: ArrowSpec,
    pub progress: f64,
    pub displayed_score: f64,
    pub phase: Phase,
    pub pick_id: PickId,
    pub mesh: MeshId,
    pub pick_mesh: MeshId,
}
