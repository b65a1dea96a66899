//! The live arrow set.
//!
//! `Arrows` owns every arrow currently on the globe together with its two
//! meshes and its pick id, and reconciles that state against replacement
//! sets handed in by the caller. All motion goes through the animation
//! scheduler: arrows grow in from their source, shrink out towards it, and
//! fade their displayed score towards spec changes.
//!
//! Key properties:
//! - Reconciliation classifies names into added / updated / removed and
//!   walks each class in name order, so identical inputs produce identical
//!   animation schedules.
//! - A removed arrow is only forgotten once its exit completes; until then
//!   an update under the same name reverses the exit in place, keeping its
//!   pick id.
//! - The visible mesh follows the animated position and score; the pick mesh
//!   stays at full length so thin or half-grown arrows remain hittable.

use std::collections::BTreeMap;

use foundation::math::arc::{ArcFrame, ArcProfile};
use foundation::time::Time;
use runtime::animation::Animations;

use crate::arrow::{Arrow, ArrowSpec, Phase};
use crate::mesh::{GridSize, MeshStore};
use crate::picking::Mousemap;

/// What a given animation drives. Start and target values are captured here
/// so the scheduler never holds closures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Track {
    /// Grow position 0 → 1.
    Enter,
    /// Reverse a partial exit: position back to 1, score towards the new
    /// spec.
    Resume {
        from_progress: f64,
        from_score: f64,
        to_score: f64,
    },
    /// Score-only fade; position untouched.
    Fade { from_score: f64, to_score: f64 },
    /// Shrink position back to 0, then destroy.
    Exit { from_progress: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowSettings {
    pub grid: GridSize,
    pub profile: ArcProfile,
    /// Full entry/fade duration in milliseconds; partial transitions scale it.
    pub enter_ms: f64,
    /// Per-arrow delay step within one reconcile batch.
    pub stagger_ms: f64,
}

impl Default for ArrowSettings {
    fn default() -> Self {
        Self {
            grid: GridSize::new(100, 5),
            profile: ArcProfile {
                base_radius: 200.0,
                peak_height: 30.0,
            },
            enter_ms: 2000.0,
            stagger_ms: 40.0,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub added: usize,
    pub updated: usize,
    pub removed: usize,
}

/// Names touched by one tick: `advanced` need their visible mesh redrawn,
/// `destroyed` finished exiting and are gone.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub advanced: Vec<String>,
    pub destroyed: Vec<String>,
}

pub struct Arrows {
    live: BTreeMap<String, Arrow>,
    settings: ArrowSettings,
    thickness_scale: f64,
    pick_floor: f64,
    animations: Animations<Track>,
    mousemap: Mousemap,
    meshes: MeshStore,
}

impl Default for Arrows {
    fn default() -> Self {
        Self::new(ArrowSettings::default())
    }
}

impl Arrows {
    pub fn new(settings: ArrowSettings) -> Self {
        Self {
            live: BTreeMap::new(),
            settings,
            thickness_scale: 1.0,
            pick_floor: 0.0,
            animations: Animations::new(),
            mousemap: Mousemap::new(),
            meshes: MeshStore::new(),
        }
    }

    /// Replace the arrow set.
    ///
    /// New names grow in with a per-arrow stagger; names absent from
    /// `replacement` shrink out; surviving names animate towards their new
    /// spec. Afterwards every live arrow's pick mesh is regenerated.
    pub fn reconcile(&mut self, replacement: BTreeMap<String, ArrowSpec>) -> ReconcileSummary {
        let mut summary = ReconcileSummary::default();
        let mut stagger = 0usize;

        let removed: Vec<String> = self
            .live
            .keys()
            .filter(|name| !replacement.contains_key(*name))
            .cloned()
            .collect();

        let mut updates: Vec<(String, ArrowSpec)> = Vec::new();
        for (name, spec) in replacement {
            if self.live.contains_key(&name) {
                updates.push((name, spec));
            } else {
                self.admit(&name, spec, stagger);
                stagger += 1;
                summary.added += 1;
            }
        }

        for (name, spec) in updates {
            self.update(&name, spec, &mut stagger);
            summary.updated += 1;
        }

        for name in removed {
            if self.retire(&name) {
                summary.removed += 1;
            }
        }

        self.regenerate_pick_meshes();
        summary
    }

    fn admit(&mut self, name: &str, spec: ArrowSpec, stagger: usize) {
        let frame = ArcFrame::from_unit_vectors(spec.src.unit_vector(), spec.dst.unit_vector());
        let grid = self.settings.grid;
        let profile = self.settings.profile;
        let mesh = self
            .meshes
            .insert(frame, grid, profile, spec.score * self.thickness_scale, 0.0);
        let pick_width = pick_width(spec.score, self.pick_floor, self.thickness_scale);
        let pick_mesh = self.meshes.insert(frame, grid, profile, pick_width, 1.0);
        let pick_id = self.mousemap.allocate(name);

        self.live.insert(
            name.to_string(),
            Arrow {
                displayed_score: spec.score,
                spec,
                progress: 0.0,
                phase: Phase::Entering,
                pick_id,
                mesh,
                pick_mesh,
            },
        );
        self.animations.start(
            name,
            self.settings.enter_ms,
            self.settings.stagger_ms * stagger as f64,
            Track::Enter,
        );
    }

    fn update(&mut self, name: &str, spec: ArrowSpec, stagger: &mut usize) {
        let enter_ms = self.settings.enter_ms;
        let stagger_ms = self.settings.stagger_ms;
        let Some(arrow) = self.live.get_mut(name) else {
            return;
        };
        let previous_phase = arrow.phase;
        arrow.spec = spec;

        match previous_phase {
            Phase::Exiting => {
                // Reverse the exit from wherever it paused; the pending
                // destruction is dropped with the overwritten animation.
                arrow.phase = Phase::Entering;
                self.animations.start(
                    name,
                    enter_ms * (1.0 - arrow.progress),
                    stagger_ms * *stagger as f64,
                    Track::Resume {
                        from_progress: arrow.progress,
                        from_score: arrow.displayed_score,
                        to_score: arrow.spec.score,
                    },
                );
                *stagger += 1;
            }
            Phase::Entering => {
                // No fade while growing: only the stored spec changes, and
                // the displayed score stays where the entry left it until a
                // later reconcile fades it. A running resume keeps its
                // timing and only moves its score target.
                if let Some(Track::Resume { to_score, .. }) = self.animations.payload_mut(name) {
                    *to_score = arrow.spec.score;
                }
            }
            Phase::Steady => {
                self.animations.start(
                    name,
                    enter_ms,
                    0.0,
                    Track::Fade {
                        from_score: arrow.displayed_score,
                        to_score: arrow.spec.score,
                    },
                );
            }
        }
    }

    fn retire(&mut self, name: &str) -> bool {
        let enter_ms = self.settings.enter_ms;
        let Some(arrow) = self.live.get_mut(name) else {
            return false;
        };
        if arrow.phase == Phase::Exiting {
            return false;
        }
        arrow.phase = Phase::Exiting;
        self.animations.start(
            name,
            enter_ms * arrow.progress,
            0.0,
            Track::Exit {
                from_progress: arrow.progress,
            },
        );
        true
    }

    /// Advance all animations to `now` and apply their samples.
    pub fn tick(&mut self, now: Time) -> TickOutcome {
        let mut advanced: Vec<String> = Vec::new();
        let mut settled: Vec<String> = Vec::new();
        let mut destroyed: Vec<String> = Vec::new();

        let live = &mut self.live;
        self.animations.tick(now, |sample| {
            let Some(arrow) = live.get_mut(sample.name) else {
                return;
            };
            let t = sample.eased;
            match *sample.payload {
                Track::Enter => {
                    arrow.progress = t;
                }
                Track::Resume {
                    from_progress,
                    from_score,
                    to_score,
                } => {
                    arrow.progress = from_progress + t * (1.0 - from_progress);
                    arrow.displayed_score = from_score + t * (to_score - from_score);
                }
                Track::Fade {
                    from_score,
                    to_score,
                } => {
                    arrow.displayed_score = from_score + t * (to_score - from_score);
                }
                Track::Exit { from_progress } => {
                    arrow.progress = from_progress - t * from_progress;
                }
            }
            if sample.finished {
                if matches!(sample.payload, Track::Exit { .. }) {
                    destroyed.push(sample.name.to_string());
                } else {
                    settled.push(sample.name.to_string());
                }
            } else {
                advanced.push(sample.name.to_string());
            }
        });

        for name in &destroyed {
            if let Some(arrow) = self.live.remove(name) {
                self.meshes.remove(arrow.mesh);
                self.meshes.remove(arrow.pick_mesh);
                self.mousemap.release(arrow.pick_id);
            }
        }
        for name in settled {
            if let Some(arrow) = self.live.get_mut(&name) {
                arrow.phase = Phase::Steady;
            }
            advanced.push(name);
        }
        for name in &advanced {
            self.regenerate_visible(name);
        }

        TickOutcome {
            advanced,
            destroyed,
        }
    }

    /// Scale applied to every arrow width. Returns false when unchanged.
    pub fn set_thickness_scale(&mut self, scale: f64) -> bool {
        if scale == self.thickness_scale {
            return false;
        }
        self.thickness_scale = scale;
        let names: Vec<String> = self.live.keys().cloned().collect();
        for name in &names {
            self.regenerate_visible(name);
        }
        self.regenerate_pick_meshes();
        true
    }

    pub fn thickness_scale(&self) -> f64 {
        self.thickness_scale
    }

    /// Minimum effective score for pick meshes. Scores in `(0, floor)` are
    /// lifted to the floor so thin arrows stay hittable; zero stays zero.
    pub fn set_pick_floor(&mut self, floor: f64) {
        if floor == self.pick_floor {
            return;
        }
        self.pick_floor = floor;
        self.regenerate_pick_meshes();
    }

    fn regenerate_visible(&mut self, name: &str) {
        let Some(arrow) = self.live.get(name) else {
            return;
        };
        self.meshes.regenerate(
            arrow.mesh,
            self.settings.profile,
            arrow.displayed_score * self.thickness_scale,
            arrow.progress,
        );
    }

    fn regenerate_pick_meshes(&mut self) {
        let profile = self.settings.profile;
        for arrow in self.live.values() {
            let width = pick_width(arrow.spec.score, self.pick_floor, self.thickness_scale);
            self.meshes.regenerate(arrow.pick_mesh, profile, width, 1.0);
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arrow> {
        self.live.get(name)
    }

    /// Live arrows in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arrow)> {
        self.live.iter().map(|(name, arrow)| (name.as_str(), arrow))
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// True while any entry, exit or fade is still running.
    pub fn animating(&self) -> bool {
        !self.animations.is_empty()
    }

    pub fn mousemap(&self) -> &Mousemap {
        &self.mousemap
    }

    pub fn meshes(&self) -> &MeshStore {
        &self.meshes
    }

    pub fn settings(&self) -> &ArrowSettings {
        &self.settings
    }
}

fn pick_width(score: f64, floor: f64, thickness_scale: f64) -> f64 {
    let lifted = if score > 0.0 && score < floor {
        floor
    } else {
        score
    };
    lifted * thickness_scale
}

#[cfg(test)]
mod tests {
    use super::{ArrowSettings, Arrows, ReconcileSummary};
    use crate::arrow::{ArrowSpec, GeoPoint, Phase};
    use foundation::handles::PickId;
    use foundation::time::Time;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn spec(score: f64) -> ArrowSpec {
        ArrowSpec {
            src: GeoPoint::new(0.0, 0.0),
            dst: GeoPoint::new(90.0, 0.0),
            score,
        }
    }

    fn set(entries: &[(&str, f64)]) -> BTreeMap<String, ArrowSpec> {
        entries
            .iter()
            .map(|(name, score)| (name.to_string(), spec(*score)))
            .collect()
    }

    fn assert_near(value: f64, expected: f64, what: &str) {
        assert!(
            (value - expected).abs() < 1e-9,
            "{what}: expected {expected}, got {value}"
        );
    }

    /// Half-grown arrows sit exactly halfway because the easing curve passes
    /// through (0.5, 0.5).
    #[test]
    fn added_arrow_grows_to_full_length() {
        let mut arrows = Arrows::default();
        let summary = arrows.reconcile(set(&[("a", 0.5)]));
        assert_eq!(
            summary,
            ReconcileSummary {
                added: 1,
                updated: 0,
                removed: 0
            }
        );

        let arrow = arrows.get("a").unwrap();
        assert_eq!(arrow.phase, Phase::Entering);
        assert_near(arrow.progress, 0.0, "initial position");
        assert_near(arrow.displayed_score, 0.5, "score applies immediately");
        assert_eq!(arrows.meshes().len(), 2, "visible + pick mesh");

        arrows.tick(Time(0.0));
        arrows.tick(Time(1000.0));
        assert_near(arrows.get("a").unwrap().progress, 0.5, "halfway");

        let outcome = arrows.tick(Time(2000.0));
        assert_eq!(outcome.advanced, vec!["a".to_string()]);
        assert!(outcome.destroyed.is_empty());
        let arrow = arrows.get("a").unwrap();
        assert_near(arrow.progress, 1.0, "fully grown");
        assert_eq!(arrow.phase, Phase::Steady);
        assert!(!arrows.animating());
    }

    #[test]
    fn batch_entries_are_staggered() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.5), ("b", 0.5)]));

        // "b" sits in its 40 ms delay window on the first tick.
        arrows.tick(Time(0.0));
        let ticked = arrows.tick(Time(2000.0));
        assert!(ticked.advanced.contains(&"a".to_string()));
        assert_eq!(arrows.get("a").unwrap().phase, Phase::Steady);
        assert_eq!(arrows.get("b").unwrap().phase, Phase::Entering);
        assert!(arrows.get("b").unwrap().progress < 1.0);

        arrows.tick(Time(2040.0));
        assert_eq!(arrows.get("b").unwrap().phase, Phase::Steady);
        assert!(!arrows.animating());
    }

    #[test]
    fn removed_arrow_shrinks_then_disappears() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.5)]));
        arrows.tick(Time(0.0));
        arrows.tick(Time(2000.0));

        let pick_id = arrows.get("a").unwrap().pick_id;
        let summary = arrows.reconcile(BTreeMap::new());
        assert_eq!(summary.removed, 1);
        assert_eq!(arrows.get("a").unwrap().phase, Phase::Exiting);

        arrows.tick(Time(2500.0));
        arrows.tick(Time(3500.0));
        assert_near(arrows.get("a").unwrap().progress, 0.5, "halfway out");

        let outcome = arrows.tick(Time(4500.0));
        assert_eq!(outcome.destroyed, vec!["a".to_string()]);
        assert!(arrows.is_empty());
        assert!(arrows.meshes().is_empty());
        assert_eq!(arrows.mousemap().resolve(pick_id), None, "stale pick id");
    }

    #[test]
    fn exit_duration_scales_with_how_far_the_arrow_got() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.5)]));
        arrows.tick(Time(0.0));
        arrows.tick(Time(1000.0));
        assert_near(arrows.get("a").unwrap().progress, 0.5, "mid-entry");

        // Shrinking from halfway takes half the full duration.
        arrows.reconcile(BTreeMap::new());
        arrows.tick(Time(1100.0));
        let outcome = arrows.tick(Time(2100.0));
        assert_eq!(outcome.destroyed, vec!["a".to_string()]);
    }

    #[test]
    fn an_arrow_that_never_grew_exits_immediately() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.5)]));
        // No tick in between: position is still 0, so the exit has zero
        // duration and completes on its first tick.
        arrows.reconcile(BTreeMap::new());
        let outcome = arrows.tick(Time(5.0));
        assert_eq!(outcome.destroyed, vec!["a".to_string()]);
        assert!(arrows.is_empty());
    }

    #[test]
    fn update_mid_exit_resumes_growth_and_keeps_the_pick_id() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.5)]));
        arrows.tick(Time(0.0));
        arrows.tick(Time(2000.0));
        let pick_id = arrows.get("a").unwrap().pick_id;

        arrows.reconcile(BTreeMap::new());
        arrows.tick(Time(2500.0));
        arrows.tick(Time(3500.0));
        assert_near(arrows.get("a").unwrap().progress, 0.5, "paused mid-exit");

        let summary = arrows.reconcile(set(&[("a", 0.9)]));
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.removed, 0);
        let arrow = arrows.get("a").unwrap();
        assert_eq!(arrow.phase, Phase::Entering);
        assert_eq!(arrow.pick_id, pick_id, "reversal keeps the pick id");

        // Resuming from 0.5 takes 1000 ms and fades the score alongside.
        arrows.tick(Time(4000.0));
        arrows.tick(Time(4500.0));
        let arrow = arrows.get("a").unwrap();
        assert_near(arrow.progress, 0.75, "halfway back");
        assert_near(arrow.displayed_score, 0.7, "score halfway to 0.9");

        arrows.tick(Time(5000.0));
        let arrow = arrows.get("a").unwrap();
        assert_near(arrow.progress, 1.0, "fully regrown");
        assert_near(arrow.displayed_score, 0.9, "score caught up");
        assert_eq!(arrow.phase, Phase::Steady);
    }

    #[test]
    fn resupplied_after_destruction_counts_as_a_fresh_arrow() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.5)]));
        arrows.reconcile(BTreeMap::new());
        arrows.tick(Time(1.0));
        assert!(arrows.is_empty());

        let summary = arrows.reconcile(set(&[("a", 0.5)]));
        assert_eq!(summary.added, 1);
        let arrow = arrows.get("a").unwrap();
        assert_eq!(arrow.pick_id, PickId(2), "fresh allocation, no reuse");
        assert_near(arrow.progress, 0.0, "starts from scratch");
    }

    #[test]
    fn steady_update_fades_the_score_in_place() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.2)]));
        arrows.tick(Time(0.0));
        arrows.tick(Time(2000.0));

        let summary = arrows.reconcile(set(&[("a", 0.8)]));
        assert_eq!(summary.updated, 1);
        assert!(arrows.animating());

        arrows.tick(Time(2100.0));
        arrows.tick(Time(3100.0));
        let arrow = arrows.get("a").unwrap();
        assert_near(arrow.displayed_score, 0.5, "fade midpoint");
        assert_near(arrow.progress, 1.0, "position untouched by the fade");

        arrows.tick(Time(4100.0));
        assert_near(arrows.get("a").unwrap().displayed_score, 0.8, "fade done");
        assert!(!arrows.animating());
    }

    #[test]
    fn update_mid_fade_restarts_towards_the_latest_score() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.0)]));
        arrows.tick(Time(0.0));
        arrows.tick(Time(2000.0));

        arrows.reconcile(set(&[("a", 1.0)]));
        arrows.tick(Time(2100.0));
        arrows.tick(Time(3100.0));
        assert_near(arrows.get("a").unwrap().displayed_score, 0.5, "mid-fade");

        arrows.reconcile(set(&[("a", 0.25)]));
        arrows.tick(Time(3200.0));
        arrows.tick(Time(4200.0));
        assert_near(
            arrows.get("a").unwrap().displayed_score,
            0.375,
            "restarted from 0.5 towards 0.25",
        );
        arrows.tick(Time(5200.0));
        assert_near(arrows.get("a").unwrap().displayed_score, 0.25, "settled");
    }

    #[test]
    fn update_while_entering_keeps_the_displayed_score() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.5)]));
        arrows.tick(Time(0.0));
        arrows.tick(Time(500.0));

        // Reconciling alone moves only the stored spec; the displayed score
        // is animation state and holds its value.
        arrows.reconcile(set(&[("a", 0.9)]));
        let arrow = arrows.get("a").unwrap();
        assert_near(arrow.spec.score, 0.9, "stored score");
        assert_near(arrow.displayed_score, 0.5, "displayed score after update");

        // The entry still finishes on its original clock, and the old width
        // survives it; no fade was started.
        arrows.tick(Time(2000.0));
        let arrow = arrows.get("a").unwrap();
        assert_eq!(arrow.phase, Phase::Steady);
        assert_near(arrow.progress, 1.0, "entry complete");
        assert_near(arrow.displayed_score, 0.5, "old width persists");
        assert!(!arrows.animating());

        // The next reconcile finds the arrow steady and fades the display
        // to the stored score.
        arrows.reconcile(set(&[("a", 0.9)]));
        arrows.tick(Time(2000.0));
        arrows.tick(Time(4000.0));
        assert_near(arrows.get("a").unwrap().displayed_score, 0.9, "faded");
    }

    #[test]
    fn update_mid_resume_retargets_the_score() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.5)]));
        arrows.tick(Time(0.0));
        arrows.tick(Time(2000.0));
        arrows.reconcile(BTreeMap::new());
        arrows.tick(Time(2500.0));
        arrows.tick(Time(3500.0));

        arrows.reconcile(set(&[("a", 0.9)]));
        arrows.tick(Time(4000.0));
        // Another update while the resume is live: same timing, new target.
        arrows.reconcile(set(&[("a", 0.3)]));
        arrows.tick(Time(5000.0));

        let arrow = arrows.get("a").unwrap();
        assert_near(arrow.progress, 1.0, "resume finished on schedule");
        assert_near(arrow.displayed_score, 0.3, "landed on the latest score");
    }

    #[test]
    fn pick_mesh_stays_at_full_length_while_entering() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.5)]));
        arrows.tick(Time(0.0));
        arrows.tick(Time(1000.0));

        let arrow = arrows.get("a").unwrap();
        let visible = arrows.meshes().get(arrow.mesh).unwrap();
        let pick = arrows.meshes().get(arrow.pick_mesh).unwrap();

        // dst (90°E, 0°N) maps to the render-frame z axis; the pick tip is
        // there, the half-grown visible tip is not.
        let pick_tip = pick.vertex(0, 100);
        assert_near(pick_tip.length(), 200.0, "pick tip on the base sphere");
        assert!((pick_tip.z - 200.0).abs() < 1e-9, "pick tip at destination");

        let visible_tip = visible.vertex(0, 100);
        assert!(
            (visible_tip.z - 200.0).abs() > 1.0,
            "visible tip still short of the destination"
        );
    }

    #[test]
    fn pick_floor_lifts_small_scores_but_not_zero() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("thin", 0.001), ("zero", 0.0), ("wide", 0.5)]));
        arrows.set_pick_floor(0.1);

        assert_near(pick_mesh_width(&arrows, "thin"), 0.1, "lifted to floor");
        assert_near(pick_mesh_width(&arrows, "zero"), 0.0, "zero stays zero");
        assert_near(pick_mesh_width(&arrows, "wide"), 0.5, "above floor untouched");
    }

    #[test]
    fn thickness_scale_rescales_both_mesh_families() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.5)]));
        arrows.tick(Time(0.0));
        arrows.tick(Time(2000.0));
        assert_near(visible_mesh_width(&arrows, "a"), 0.5, "unscaled");

        assert!(arrows.set_thickness_scale(2.0));
        assert_near(visible_mesh_width(&arrows, "a"), 1.0, "visible rescaled");
        assert_near(pick_mesh_width(&arrows, "a"), 1.0, "pick rescaled");

        assert!(!arrows.set_thickness_scale(2.0), "unchanged scale is a no-op");
    }

    #[test]
    fn reconcile_classifies_a_mixed_replacement() {
        let mut arrows = Arrows::default();
        arrows.reconcile(set(&[("a", 0.5), ("b", 0.5)]));
        arrows.tick(Time(0.0));
        arrows.tick(Time(3000.0));

        let summary = arrows.reconcile(set(&[("b", 0.6), ("c", 0.7)]));
        assert_eq!(
            summary,
            ReconcileSummary {
                added: 1,
                updated: 1,
                removed: 1
            }
        );
        let names: Vec<&str> = arrows.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b", "c"], "exiting arrows stay until done");
    }

    /// Width between the two lateral edges at the arc midpoint; the envelope
    /// peaks there, so the separation is exactly twice the width parameter.
    fn mesh_width(arrows: &Arrows, id: crate::mesh::MeshId) -> f64 {
        let mesh = arrows.meshes().get(id).unwrap();
        let size = mesh.size();
        let near = mesh.vertex(0, size.slices / 2);
        let far = mesh.vertex(size.stacks, size.slices / 2);
        (far - near).length() / 2.0
    }

    fn visible_mesh_width(arrows: &Arrows, name: &str) -> f64 {
        mesh_width(arrows, arrows.get(name).unwrap().mesh)
    }

    fn pick_mesh_width(arrows: &Arrows, name: &str) -> f64 {
        mesh_width(arrows, arrows.get(name).unwrap().pick_mesh)
    }
}
