//! Unit-sphere geometry for great-circle arcs.
//!
//! All angles are radians; all vector arguments are unit vectors unless
//! noted. Key properties:
//! - `slerp(a, b, 0) == a` and `slerp(a, b, 1) == b` exactly.
//! - Coincident endpoints never divide by zero; they collapse to `a`.

use super::vec::Vec3;

/// Angular separation below which two unit vectors are treated as one.
const DEGENERATE_OMEGA: f64 = 1e-10;

/// Position on the unit sphere for a longitude/latitude pair.
pub fn unit_vector(lon_rad: f64, lat_rad: f64) -> Vec3 {
    Vec3::new(
        lon_rad.cos() * lat_rad.cos(),
        lon_rad.sin() * lat_rad.cos(),
        lat_rad.sin(),
    )
}

/// Inverse of `unit_vector`: `(lon, lat)` for a unit-sphere position.
///
/// Longitude is 0 at the poles, where it is undefined.
pub fn lon_lat(v: Vec3) -> (f64, f64) {
    let lat = v.z.clamp(-1.0, 1.0).asin();
    let d = lat.cos();
    if d < 1e-12 {
        return (0.0, lat);
    }
    ((v.y / d).atan2(v.x / d), lat)
}

/// Great-circle angle between two unit vectors, in [0, pi].
pub fn angular_distance(a: Vec3, b: Vec3) -> f64 {
    a.dot(b).clamp(-1.0, 1.0).acos()
}

/// Spherical linear interpolation between two unit-sphere positions.
pub fn slerp(a: Vec3, b: Vec3, t: f64) -> Vec3 {
    let omega = angular_distance(a, b);
    if omega < DEGENERATE_OMEGA {
        return a;
    }
    let sin_omega = omega.sin();
    let alpha = ((1.0 - t) * omega).sin() / sin_omega;
    let beta = (t * omega).sin() / sin_omega;
    a.scale(alpha) + b.scale(beta)
}

/// Direction of travel along the arc at `a`, toward `b`.
///
/// This is d/dt of `slerp(a, b, t)` at t = 0, normalized. Zero for
/// coincident endpoints.
pub fn arc_tangent(a: Vec3, b: Vec3) -> Vec3 {
    let omega = angular_distance(a, b);
    if omega < DEGENERATE_OMEGA {
        return Vec3::ZERO;
    }
    let sin_omega = omega.sin();
    let alpha = -omega * omega.cos() / sin_omega;
    let beta = omega / sin_omega;
    (a.scale(alpha) + b.scale(beta)).normalized()
}

/// Lateral thickness direction: the travel tangent crossed with the chord
/// `b - a`, normalized. Zero for coincident endpoints.
pub fn lateral_tangent(a: Vec3, b: Vec3) -> Vec3 {
    arc_tangent(a, b).cross(b - a).normalized()
}

/// Map from the mathematician's frame (z through the north pole) to the
/// render frame (y up, x mirrored).
pub fn to_render_frame(v: Vec3) -> Vec3 {
    Vec3::new(-v.x, v.z, v.y)
}
