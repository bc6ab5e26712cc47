pub mod api;
pub mod assets;
pub mod bridge;
pub mod components;
pub mod core;
pub mod error;
pub mod input;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::SimConfig;
pub use api::sim::{Settings, Simulation};
pub use api::types::{
    BodyId, BodyKind, ScaleMode, SimEvent, EVENT_DATE_INFO, EVENT_TARGET_INFO, EVENT_TIME_INFO,
};
pub use assets::catalog::{Catalog, MoonDef, StarDef};
pub use bridge::protocol::{
    build_belt_instances, BeltInstance, CameraBlock, PoseBuffer, PoseInstance, ProtocolLayout,
    PROTOCOL_VERSION,
};
pub use components::body::{Body, BodyState};
pub use components::elements::{MoonOrbit, OrbitalElements};
pub use crate::core::clock::SimulationClock;
pub use crate::core::registry::BodyRegistry;
pub use error::CatalogError;
pub use input::controls::{ControlEvent, ControlQueue};
pub use systems::belt::{AsteroidBelt, BeltRock};
pub use systems::camera::{target_index, CameraController, CameraMode, PLANET_SECTIONS};
pub use systems::kepler::{
    days_to_date, focal_radius, solve_kepler, true_anomaly, KEPLER_ITERATIONS,
};
pub use systems::orbital::{
    moon_state, planet_state, star_state, update_bodies, DISTANCE_SCALE, MKM_PER_AU, PLANET_SCALE,
};
