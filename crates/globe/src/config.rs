use serde::{Deserialize, Serialize};

/// Tunables for the globe engine.
///
/// Every field has a default matching the stock look, so configs only need
/// to spell out what they change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Radius of the sphere the arcs sit on.
    pub base_radius: f64,

    /// How far the arc midpoint lifts off the sphere.
    pub peak_height: f64,

    /// Tessellation along the arc.
    pub slices: u32,

    /// Tessellation across the arc.
    pub stacks: u32,

    /// Full entry/exit/fade duration in milliseconds.
    pub enter_ms: f64,

    /// Per-arrow delay step within one reconcile batch.
    pub stagger_ms: f64,

    /// Camera convergence epsilon; drives frame skipping and pick gating.
    pub epsilon: f64,

    /// Pick meshes never drop below `distance_target / pick_floor_divisor`
    /// in effective score, so thin arrows stay hittable when zoomed out.
    pub pick_floor_divisor: f64,

    pub arrow_color: [f32; 3],
    pub highlight_color: [f32; 3],
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self {
            base_radius: 200.0,
            peak_height: 30.0,
            slices: 100,
            stacks: 5,
            enter_ms: 2000.0,
            stagger_ms: 40.0,
            epsilon: 0.01,
            pick_floor_divisor: 500.0,
            arrow_color: [1.0, 1.0, 1.0],
            highlight_color: [1.0, 1.0, 0.1],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GlobeConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_json_yields_the_defaults() {
        let config: GlobeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GlobeConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_what_it_names() {
        let config: GlobeConfig =
            serde_json::from_str(r#"{ "peak_height": 45.0, "stagger_ms": 0.0 }"#).unwrap();
        assert_eq!(config.peak_height, 45.0);
        assert_eq!(config.stagger_ms, 0.0);
        assert_eq!(config.slices, 100);
        assert_eq!(config.enter_ms, 2000.0);
    }
}
