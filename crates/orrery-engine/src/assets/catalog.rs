use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::components::body::canonicalize;
use crate::components::elements::{MoonOrbit, OrbitalElements};
use crate::error::CatalogError;

/// The star at the system's center.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarDef {
    pub name: String,
    pub radius_km: f64,
}

/// A moon entry: its orbit plus the name of the planet it circles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoonDef {
    pub parent: String,
    #[serde(flatten)]
    pub orbit: MoonOrbit,
}

/// Full body catalog for one system: star, planets sun-outward, moons.
/// Loaded once at startup, either from the built-in table or from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub star: StarDef,
    pub planets: Vec<OrbitalElements>,
    #[serde(default)]
    pub moons: Vec<MoonDef>,
}

impl Catalog {
    /// Parse a catalog from a JSON string. Validation is separate.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check every invariant the per-frame math relies on. Fatal at startup;
    /// after this passes, pose computation is total.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.star.radius_km <= 0.0 {
            return Err(CatalogError::NonPositiveRadius {
                name: self.star.name.clone(),
                value: self.star.radius_km,
            });
        }

        let mut seen = HashSet::new();
        seen.insert(canonicalize(&self.star.name));

        for planet in &self.planets {
            planet.validate()?;
            if !seen.insert(canonicalize(&planet.name)) {
                return Err(CatalogError::DuplicateName(planet.name.clone()));
            }
        }

        for moon in &self.moons {
            moon.orbit.validate()?;
            if !seen.insert(canonicalize(&moon.orbit.name)) {
                return Err(CatalogError::DuplicateName(moon.orbit.name.clone()));
            }
            let parent = canonicalize(&moon.parent);
            if !self.planets.iter().any(|p| canonicalize(&p.name) == parent) {
                return Err(CatalogError::UnknownParent {
                    moon: moon.orbit.name.clone(),
                    parent: moon.parent.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    /// The built-in solar system: the Sun, the eight planets, and Luna.
    pub fn solar_system() -> Self {
        Self {
            star: StarDef {
                name: "Sun".into(),
                radius_km: 695_700.0,
            },
            planets: vec![
                OrbitalElements {
                    name: "Mercury".into(),
                    radius_km: 2440.0,
                    distance_mkm: 57.9,
                    semi_major_axis_au: 0.387,
                    eccentricity: 0.2056,
                    inclination_deg: 7.00,
                    orbital_period_days: 88.0,
                    rotation_period_days: 58.6,
                    axial_tilt_deg: 0.03,
                },
                OrbitalElements {
                    name: "Venus".into(),
                    radius_km: 6052.0,
                    distance_mkm: 108.2,
                    semi_major_axis_au: 0.723,
                    eccentricity: 0.0067,
                    inclination_deg: 3.39,
                    orbital_period_days: 224.7,
                    // Retrograde
                    rotation_period_days: -243.0,
                    axial_tilt_deg: 177.4,
                },
                OrbitalElements {
                    name: "Earth".into(),
                    radius_km: 6371.0,
                    distance_mkm: 149.6,
                    semi_major_axis_au: 1.000,
                    eccentricity: 0.0167,
                    inclination_deg: 0.00,
                    orbital_period_days: 365.2,
                    rotation_period_days: 0.99,
                    axial_tilt_deg: 23.4,
                },
                OrbitalElements {
                    name: "Mars".into(),
                    radius_km: 3390.0,
                    distance_mkm: 227.9,
                    semi_major_axis_au: 1.524,
                    eccentricity: 0.0934,
                    inclination_deg: 1.85,
                    orbital_period_days: 687.0,
                    rotation_period_days: 1.03,
                    axial_tilt_deg: 25.2,
                },
                OrbitalElements {
                    name: "Jupiter".into(),
                    radius_km: 69_911.0,
                    distance_mkm: 778.6,
                    semi_major_axis_au: 5.203,
                    eccentricity: 0.0484,
                    inclination_deg: 1.30,
                    orbital_period_days: 4331.0,
                    rotation_period_days: 0.41,
                    axial_tilt_deg: 3.1,
                },
                OrbitalElements {
                    name: "Saturn".into(),
                    radius_km: 58_232.0,
                    distance_mkm: 1433.5,
                    semi_major_axis_au: 9.537,
                    eccentricity: 0.0541,
                    inclination_deg: 2.49,
                    orbital_period_days: 10_747.0,
                    rotation_period_days: 0.44,
                    axial_tilt_deg: 26.7,
                },
                OrbitalElements {
                    name: "Uranus".into(),
                    radius_km: 25_362.0,
                    distance_mkm: 2872.5,
                    semi_major_axis_au: 19.191,
                    eccentricity: 0.0472,
                    inclination_deg: 0.77,
                    // Retrograde
                    rotation_period_days: -0.72,
                    orbital_period_days: 30_589.0,
                    axial_tilt_deg: 97.8,
                },
                OrbitalElements {
                    name: "Neptune".into(),
                    radius_km: 24_622.0,
                    distance_mkm: 4495.1,
                    semi_major_axis_au: 30.069,
                    eccentricity: 0.0086,
                    inclination_deg: 1.77,
                    orbital_period_days: 59_800.0,
                    rotation_period_days: 0.67,
                    axial_tilt_deg: 28.3,
                },
            ],
            moons: vec![MoonDef {
                parent: "Earth".into(),
                orbit: MoonOrbit {
                    name: "Luna".into(),
                    radius_km: 1737.0,
                    distance_mkm: 0.384,
                    orbital_period_days: 27.3,
                },
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::solar_system();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.planet_count(), 8);
        assert_eq!(catalog.moons.len(), 1);
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut catalog = Catalog::solar_system();
        let mut dup = catalog.planets[2].clone();
        dup.name = "EARTH".into();
        catalog.planets.push(dup);
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::DuplicateName(_))
        ));
    }

    #[test]
    fn orphan_moon_rejected() {
        let mut catalog = Catalog::solar_system();
        catalog.moons[0].parent = "Vulcan".into();
        assert!(matches!(
            catalog.validate(),
            Err(CatalogError::UnknownParent { .. })
        ));
    }

    #[test]
    fn parse_catalog_from_json() {
        let json = r#"{
            "star": { "name": "Sol", "radius_km": 695700.0 },
            "planets": [{
                "name": "Earth",
                "radius_km": 6371.0,
                "distance_mkm": 149.6,
                "semi_major_axis_au": 1.0,
                "eccentricity": 0.0167,
                "inclination_deg": 0.0,
                "orbital_period_days": 365.2,
                "rotation_period_days": 0.99,
                "axial_tilt_deg": 23.4
            }],
            "moons": [{
                "parent": "Earth",
                "name": "Luna",
                "radius_km": 1737.0,
                "distance_mkm": 0.384,
                "orbital_period_days": 27.3
            }]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert!(catalog.validate().is_ok());
        assert_eq!(catalog.star.name, "Sol");
        assert_eq!(catalog.moons[0].orbit.name, "Luna");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            Catalog::from_json("{"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn bad_planet_elements_fail_validation() {
        let mut catalog = Catalog::solar_system();
        catalog.planets[0].eccentricity = 1.3;
        assert!(catalog.validate().is_err());
    }
}
