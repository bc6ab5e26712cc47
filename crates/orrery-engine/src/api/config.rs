/// Configuration for the simulation, fixed at construction.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Simulated days accumulated per real second at acceleration 1.0.
    pub days_per_second: f64,
    /// Simulation epoch as days from J2000, used for the HUD date readout.
    pub start_days_from_j2000: f64,
    /// Per-tick exponential damping factor for camera position (0 = frozen,
    /// 1 = instant snap).
    pub camera_damping: f64,
    /// Camera standoff distance from a framed body, in multiples of the
    /// body's current visual radius.
    pub view_distance_radii: f64,
    /// Vertical framing offset, in multiples of the body's current visual radius.
    pub frame_lift_radii: f64,
    /// Number of asteroid belt rocks to generate.
    pub belt_count: usize,
    /// Seed for deterministic belt placement.
    pub belt_seed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days_per_second: 0.01,
            // ~mid 2026
            start_days_from_j2000: 9700.0,
            camera_damping: 0.08,
            view_distance_radii: 5.0,
            frame_lift_radii: 0.5,
            belt_count: 2000,
            belt_seed: 1,
        }
    }
}
