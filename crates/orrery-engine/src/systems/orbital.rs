use std::f64::consts::TAU;

use glam::DVec3;

use crate::api::types::{BodyKind, ScaleMode};
use crate::components::body::BodyState;
use crate::components::elements::{MoonOrbit, OrbitalElements};
use crate::core::clock::SimulationClock;
use crate::core::registry::BodyRegistry;
use crate::systems::kepler::{focal_radius, solve_kepler, true_anomaly};

// ── Scene scaling ────────────────────────────────────────────────────

/// Scene units per million km of orbital distance.
pub const DISTANCE_SCALE: f64 = 0.1;
/// Scene units per km of body radius.
pub const PLANET_SCALE: f64 = 0.0002;
/// Millions of km per AU; realistic mode derives distance from this.
pub const MKM_PER_AU: f64 = 149.6;

// ── Moon presentation ────────────────────────────────────────────────

/// Moon orbital offsets are exaggerated for visibility; at true scale the
/// moon would sit inside its parent's mesh.
pub const MOON_DISTANCE_EXAGGERATION: f64 = 20.0;
/// Moon self-rotation in rad per real second (its spin is presentation-only).
pub const MOON_SPIN_RATE: f64 = 0.6;

/// Pose for a planet on its Keplerian orbit at the given simulated time.
///
/// Inclination is applied as a single-axis rotation splitting the planar z
/// into inclined z/y components. A true ascending-node rotation would need
/// node-longitude data the catalog does not carry; the simplified form is
/// the system's established look and is kept as-is.
pub fn planet_state(elements: &OrbitalElements, elapsed_days: f64, mode: ScaleMode) -> BodyState {
    // The two modes read different source fields, not just different
    // multipliers; eccentricity/inclination/anomaly math is mode-blind.
    let base_distance_mkm = match mode {
        ScaleMode::Cinematic => elements.distance_mkm,
        ScaleMode::Realistic => elements.semi_major_axis_au * MKM_PER_AU,
    };
    let a = base_distance_mkm * DISTANCE_SCALE * mode.distance_multiplier();
    let e = elements.eccentricity;

    let mean_anomaly = (elapsed_days / elements.orbital_period_days) * TAU;
    let ecc_anomaly = solve_kepler(mean_anomaly, e);
    let v = true_anomaly(ecc_anomaly, e);
    let r = focal_radius(a, e, ecc_anomaly);

    // Position in the orbital plane.
    let x = r * v.cos();
    let z = r * v.sin();

    // Simplified inclination.
    let inclination = elements.inclination_deg.to_radians();
    let y = z * inclination.sin();
    let z = z * inclination.cos();

    let spin_turns = elapsed_days / elements.rotation_period_days.abs();
    let rotation = if elements.rotation_period_days > 0.0 {
        spin_turns * TAU
    } else {
        -spin_turns * TAU
    };

    BodyState {
        position: DVec3::new(x, y, z),
        rotation,
        scale: elements.radius_km * PLANET_SCALE * mode.size_multiplier(),
    }
}

/// Pose for the star: pinned at the origin, no spin from orbital math.
pub fn star_state(radius_km: f64, mode: ScaleMode) -> BodyState {
    BodyState {
        position: DVec3::ZERO,
        rotation: 0.0,
        scale: radius_km * PLANET_SCALE * mode.size_multiplier(),
    }
}

/// Pose for a moon: circular orbit in the ecliptic plane around its parent's
/// current position. The orbital offset stays in exaggerated cinematic units
/// regardless of mode; body size follows the mode like every other body.
pub fn moon_state(
    parent: &BodyState,
    orbit: &MoonOrbit,
    clock: &SimulationClock,
    mode: ScaleMode,
) -> BodyState {
    let dist = orbit.distance_mkm * PLANET_SCALE * MOON_DISTANCE_EXAGGERATION;
    let angle = (clock.elapsed_days() / orbit.orbital_period_days) * TAU;

    BodyState {
        position: DVec3::new(
            parent.position.x + angle.cos() * dist,
            0.0,
            parent.position.z + angle.sin() * dist,
        ),
        rotation: clock.elapsed_seconds() * MOON_SPIN_RATE,
        scale: orbit.radius_km * PLANET_SCALE * mode.size_multiplier(),
    }
}

/// Recompute and write every body's state for the current tick, in
/// registration order. Parents are registered before their moons, so a moon
/// always reads its parent's position for the *current* frame.
pub fn update_bodies(registry: &mut BodyRegistry, clock: &SimulationClock, mode: ScaleMode) {
    let ids: Vec<_> = registry.ids().collect();
    for id in ids {
        let Some(body) = registry.get(id) else { continue };

        let state = match body.kind {
            BodyKind::Star => star_state(body.radius_km, mode),
            BodyKind::Planet => match &body.elements {
                Some(elements) => planet_state(elements, clock.elapsed_days(), mode),
                None => continue,
            },
            BodyKind::Moon => {
                let (Some(orbit), Some(parent_id)) = (&body.moon, body.parent) else {
                    continue;
                };
                let Some(parent) = registry.state(parent_id) else { continue };
                moon_state(&parent, orbit, clock, mode)
            }
        };

        registry.set_state(id, state);
    }
}
