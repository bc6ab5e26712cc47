use glam::DVec3;

use crate::api::types::{BodyId, BodyKind};
use crate::components::elements::{MoonOrbit, OrbitalElements};

/// Kinematic state of a body, recomputed every tick. Plain data, no
/// graphics-API types; the renderer reads copies through the query surface
/// or the pose buffer and must not write back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    /// Position in scene units.
    pub position: DVec3,
    /// Accumulated axial rotation angle in radians.
    pub rotation: f64,
    /// Visual radius in scene units (already includes the scale mode).
    pub scale: f64,
}

impl Default for BodyState {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            rotation: 0.0,
            scale: 1.0,
        }
    }
}

/// Fat body record: a single struct with optional components.
/// A star carries neither elements nor a moon orbit; a planet carries
/// elements; a moon carries a moon orbit and a parent handle.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique handle.
    pub id: BodyId,
    /// Display name, as loaded.
    pub name: String,
    /// Lowercased lookup key, computed once at construction.
    canonical: String,
    pub kind: BodyKind,
    /// Keplerian elements (planets only).
    pub elements: Option<OrbitalElements>,
    /// Circular orbit about `parent` (moons only).
    pub moon: Option<MoonOrbit>,
    /// Parent body (moons only).
    pub parent: Option<BodyId>,
    /// Physical radius in km, for scale derivation.
    pub radius_km: f64,
    /// Axial tilt in degrees, carried through to the renderer.
    pub axial_tilt_deg: f64,
    /// Current kinematic state. Written by the orbital pass, once per tick.
    pub state: BodyState,
}

impl Body {
    pub fn new(id: BodyId, name: impl Into<String>, kind: BodyKind) -> Self {
        let name = name.into();
        let canonical = canonicalize(&name);
        Self {
            id,
            name,
            canonical,
            kind,
            elements: None,
            moon: None,
            parent: None,
            radius_km: 0.0,
            axial_tilt_deg: 0.0,
            state: BodyState::default(),
        }
    }

    // -- Builder pattern --

    pub fn with_elements(mut self, elements: OrbitalElements) -> Self {
        self.radius_km = elements.radius_km;
        self.axial_tilt_deg = elements.axial_tilt_deg;
        self.elements = Some(elements);
        self
    }

    pub fn with_moon_orbit(mut self, orbit: MoonOrbit, parent: BodyId) -> Self {
        self.radius_km = orbit.radius_km;
        self.moon = Some(orbit);
        self.parent = Some(parent);
        self
    }

    /// Physical radius for bodies with no orbit record (the star).
    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }

    pub fn with_state(mut self, state: BodyState) -> Self {
        self.state = state;
        self
    }

    /// Lowercased lookup key.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }
}

/// Canonical form used for name lookups: trimmed, ASCII-lowercased.
pub fn canonicalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
