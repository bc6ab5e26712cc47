use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Keplerian orbital elements and physical constants for one planet.
/// Immutable after load; every field is validated once at catalog build time
/// so the per-frame pose math never has to check anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub name: String,
    /// Physical radius in km.
    pub radius_km: f64,
    /// Cinematic-mode orbital distance shorthand, in millions of km.
    pub distance_mkm: f64,
    /// Semi-major axis in AU. Source of distance in realistic mode.
    pub semi_major_axis_au: f64,
    /// Orbit shape, [0, 1). 0 = circle.
    pub eccentricity: f64,
    /// Orbital inclination relative to the ecliptic, degrees.
    pub inclination_deg: f64,
    /// Sidereal orbital period in Earth days.
    pub orbital_period_days: f64,
    /// Rotation period in Earth days. Negative = retrograde spin.
    pub rotation_period_days: f64,
    /// Axial tilt in degrees. Presentation-only; carried through to the renderer.
    pub axial_tilt_deg: f64,
}

impl OrbitalElements {
    /// Check the invariants the pose math relies on.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(CatalogError::Eccentricity {
                name: self.name.clone(),
                value: self.eccentricity,
            });
        }
        if self.orbital_period_days == 0.0 {
            return Err(CatalogError::ZeroOrbitalPeriod {
                name: self.name.clone(),
            });
        }
        if self.rotation_period_days == 0.0 {
            return Err(CatalogError::ZeroRotationPeriod {
                name: self.name.clone(),
            });
        }
        if self.radius_km <= 0.0 {
            return Err(CatalogError::NonPositiveRadius {
                name: self.name.clone(),
                value: self.radius_km,
            });
        }
        Ok(())
    }
}

/// Circular orbit of a moon relative to its parent planet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonOrbit {
    pub name: String,
    /// Physical radius in km.
    pub radius_km: f64,
    /// Orbital distance from the parent, in millions of km.
    pub distance_mkm: f64,
    /// Orbital period in Earth days.
    pub orbital_period_days: f64,
}

impl MoonOrbit {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.orbital_period_days == 0.0 {
            return Err(CatalogError::ZeroOrbitalPeriod {
                name: self.name.clone(),
            });
        }
        if self.radius_km <= 0.0 {
            return Err(CatalogError::NonPositiveRadius {
                name: self.name.clone(),
                value: self.radius_km,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn earth() -> OrbitalElements {
        OrbitalElements {
            name: "Earth".into(),
            radius_km: 6371.0,
            distance_mkm: 149.6,
            semi_major_axis_au: 1.0,
            eccentricity: 0.0167,
            inclination_deg: 0.0,
            orbital_period_days: 365.2,
            rotation_period_days: 0.99,
            axial_tilt_deg: 23.4,
        }
    }

    #[test]
    fn valid_elements_pass() {
        assert!(earth().validate().is_ok());
    }

    #[test]
    fn hyperbolic_eccentricity_rejected() {
        let mut e = earth();
        e.eccentricity = 1.0;
        assert!(matches!(
            e.validate(),
            Err(CatalogError::Eccentricity { .. })
        ));
        e.eccentricity = -0.1;
        assert!(e.validate().is_err());
    }

    #[test]
    fn zero_periods_rejected() {
        let mut e = earth();
        e.orbital_period_days = 0.0;
        assert!(matches!(
            e.validate(),
            Err(CatalogError::ZeroOrbitalPeriod { .. })
        ));

        let mut e = earth();
        e.rotation_period_days = 0.0;
        assert!(matches!(
            e.validate(),
            Err(CatalogError::ZeroRotationPeriod { .. })
        ));
    }

    #[test]
    fn retrograde_rotation_is_valid() {
        let mut e = earth();
        e.rotation_period_days = -243.0;
        assert!(e.validate().is_ok());
    }

    #[test]
    fn elements_roundtrip_through_json() {
        let json = serde_json::to_string(&earth()).unwrap();
        let back: OrbitalElements = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, "Earth");
        assert_eq!(back.eccentricity, 0.0167);
    }
}
