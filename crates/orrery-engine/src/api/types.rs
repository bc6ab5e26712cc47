use bytemuck::{Pod, Zeroable};

/// Unique handle for a body in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// What a registry entry is. Determines which pose path updates it each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    /// Fixed at the origin; no orbital motion.
    Star,
    /// Keplerian orbit around the star.
    Planet,
    /// Circular orbit around a parent planet.
    Moon,
}

impl BodyKind {
    /// Numeric id used in the wire protocol.
    pub fn wire_id(self) -> f32 {
        match self {
            BodyKind::Star => 0.0,
            BodyKind::Planet => 1.0,
            BodyKind::Moon => 2.0,
        }
    }
}

/// Display convention for distances and body sizes.
/// Switching modes never touches elapsed time or anomaly math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleMode {
    /// Compressed distances and exaggerated sizes, everything on screen at once.
    #[default]
    Cinematic,
    /// Proportionally accurate distances (AU-derived), shrunken sizes.
    Realistic,
}

impl ScaleMode {
    /// Multiplier applied on top of the base distance scale.
    pub fn distance_multiplier(self) -> f64 {
        match self {
            ScaleMode::Cinematic => 1.0,
            ScaleMode::Realistic => 5.0,
        }
    }

    /// Multiplier applied on top of the base body-size scale.
    pub fn size_multiplier(self) -> f64 {
        match self {
            ScaleMode::Cinematic => 1.0,
            ScaleMode::Realistic => 0.2,
        }
    }

    /// Numeric id used in the wire protocol.
    pub fn wire_id(self) -> f32 {
        match self {
            ScaleMode::Cinematic => 0.0,
            ScaleMode::Realistic => 1.0,
        }
    }
}

/// A HUD event communicated to the host UI each tick.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SimEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl SimEvent {
    pub const FLOATS: usize = 4;
}

/// Event kinds emitted by the simulation.
pub const EVENT_TIME_INFO: f32 = 1.0;
pub const EVENT_DATE_INFO: f32 = 2.0;
pub const EVENT_TARGET_INFO: f32 = 3.0;
