use glam::DVec3;

use crate::api::config::SimConfig;
use crate::core::registry::BodyRegistry;

/// Planet section count for the built-in solar system.
/// Target index 0 is the star; index k is planet k−1.
pub const PLANET_SECTIONS: usize = 8;

/// Scroll-keyed intro timeline for the star section: the camera glides from
/// the wide establishing shot down toward the star as the first section
/// scrolls by.
const INTRO_START: DVec3 = DVec3::new(0.0, 50.0, 200.0);
const INTRO_END: DVec3 = DVec3::new(0.0, 15.0, 45.0);

/// Who currently owns the camera pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// The controller drives the camera from scroll progress.
    #[default]
    Scroll,
    /// The host's orbit control owns the camera; the controller writes nothing.
    FreeFly,
}

impl CameraMode {
    /// Numeric id used in the wire protocol.
    pub fn wire_id(self) -> f32 {
        match self {
            CameraMode::Scroll => 0.0,
            CameraMode::FreeFly => 1.0,
        }
    }
}

/// Map scroll progress to a target body index across `sections` planets.
///
/// The index changes exactly at the section boundaries k/N, and a boundary
/// value resolves upward: p = 1/8 targets planet 1, p = 1/8 − ε still
/// targets the star, p = 1.0 targets the outermost planet. This exact
/// tie-break keeps the choice deterministic when progress sits on a boundary.
pub fn target_index(progress: f64, sections: usize) -> usize {
    let p = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    ((p * sections as f64).floor() as usize).min(sections)
}

/// Scroll-driven camera targeting with exponential position damping.
///
/// Each tick in Scroll mode the controller picks the target body from scroll
/// progress, computes a desired framing position offset along the sun→target
/// direction, and eases the camera toward it. The look-at point snaps to the
/// target's exact current position, so damping lag lives in position only,
/// never in aim, so a moving target stays centered.
pub struct CameraController {
    mode: CameraMode,
    target: usize,
    /// Planet count; the scroll range divides into this many sections plus
    /// the star's.
    sections: usize,
    position: DVec3,
    look_at: DVec3,
    damping: f64,
    view_distance_radii: f64,
    frame_lift_radii: f64,
}

impl CameraController {
    pub fn new(config: &SimConfig, sections: usize) -> Self {
        Self {
            mode: CameraMode::Scroll,
            target: 0,
            sections,
            position: INTRO_START,
            look_at: DVec3::ZERO,
            damping: config.camera_damping.clamp(0.0, 1.0),
            view_distance_radii: config.view_distance_radii,
            frame_lift_radii: config.frame_lift_radii,
        }
    }

    /// Advance the camera for this tick. Body states in the registry must
    /// already be current; a look-at computed against last frame's position
    /// would break the damping math's assumption of monotone target motion.
    pub fn update(&mut self, progress: f64, registry: &BodyRegistry) {
        if self.mode == CameraMode::FreeFly {
            return;
        }

        let p = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.target = target_index(p, self.sections);

        let desired = if self.target == 0 {
            self.look_at = DVec3::ZERO;
            // Local progress across the star section, eased like the intro tween.
            let local = (p * self.sections as f64).clamp(0.0, 1.0);
            INTRO_START.lerp(INTRO_END, quad_out(local))
        } else {
            // Registration order puts the star at index 0 and planet k at
            // index k, matching the target index directly.
            let Some(body) = registry.get_at(self.target) else {
                return;
            };
            let target_pos = body.state.position;
            let radius = body.state.scale;

            // Frame the planet from just outside its orbit, between it and
            // the star, lifted slightly for composition.
            let dir = target_pos.normalize_or_zero();
            let mut desired = target_pos + dir * (radius * self.view_distance_radii);
            desired.y += radius * self.frame_lift_radii;

            self.look_at = target_pos;
            desired
        };

        self.position = self.position.lerp(desired, self.damping);
    }

    /// Switch ownership. Entering FreeFly freezes the controller's pose;
    /// returning to Scroll resumes damping from wherever the pose stands.
    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
    }

    /// Host hands the live camera pose back (typically on leaving FreeFly).
    pub fn sync_pose(&mut self, position: DVec3, look_at: DVec3) {
        self.position = position;
        self.look_at = look_at;
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn target(&self) -> usize {
        self.target
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn look_at(&self) -> DVec3 {
        self.look_at
    }
}

/// Quadratic ease-out: fast start, gentle settle.
fn quad_out(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}
