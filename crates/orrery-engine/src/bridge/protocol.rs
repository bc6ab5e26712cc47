// Wire format read by the JS renderer from WASM linear memory.
// Must stay in sync with the TypeScript `protocol.ts`.
//
// The simulation exports four sections, each behind its own pointer
// accessor: body poses (rewritten per tick), belt instances (written once),
// a camera block (per tick), and HUD events (per tick). All records are
// f32 and multiples of 16 bytes.

use bytemuck::{Pod, Zeroable};

use crate::api::types::SimEvent;
use crate::core::registry::BodyRegistry;
use crate::systems::belt::AsteroidBelt;
use crate::systems::camera::CameraController;

/// Protocol version surfaced to the host at init.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Per-body pose written every tick.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct PoseInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Accumulated axial rotation in radians.
    pub rotation: f32,
    /// Visual radius in scene units.
    pub scale: f32,
    /// Static axial tilt in degrees, carried so the renderer needs no catalog.
    pub axial_tilt_deg: f32,
    /// Body kind wire id (0 star, 1 planet, 2 moon).
    pub kind: f32,
    /// Index in registration order.
    pub body_index: f32,
}

impl PoseInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One belt rock. Written once at init; the renderer spins the whole ring by
/// the camera block's belt rotation angle.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct BeltInstance {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub scale: f32,
    /// Grey tint.
    pub grey: f32,
    pub _pad: [f32; 3],
}

impl BeltInstance {
    pub const FLOATS: usize = 8;
}

/// Camera pose and targeting info, rewritten per tick.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct CameraBlock {
    pub pos_x: f32,
    pub pos_y: f32,
    pub pos_z: f32,
    pub look_x: f32,
    pub look_y: f32,
    pub look_z: f32,
    /// Camera mode wire id (0 scroll, 1 free-fly).
    pub mode: f32,
    pub target_index: f32,
}

impl CameraBlock {
    pub const FLOATS: usize = 8;

    pub fn from_controller(camera: &CameraController) -> Self {
        let pos = camera.position();
        let look = camera.look_at();
        Self {
            pos_x: pos.x as f32,
            pos_y: pos.y as f32,
            pos_z: pos.z as f32,
            look_x: look.x as f32,
            look_y: look.y as f32,
            look_z: look.z as f32,
            mode: camera.mode().wire_id(),
            target_index: camera.target() as f32,
        }
    }
}

/// Section capacities and record sizes, surfaced to the host so the JS side
/// computes offsets dynamically instead of hardcoding them.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_bodies: usize,
    pub max_belt_instances: usize,
    pub max_events: usize,
    pub pose_floats: usize,
    pub belt_floats: usize,
    pub camera_floats: usize,
    pub event_floats: usize,
}

impl ProtocolLayout {
    pub fn new(max_bodies: usize, max_belt_instances: usize, max_events: usize) -> Self {
        Self {
            max_bodies,
            max_belt_instances,
            max_events,
            pose_floats: PoseInstance::FLOATS,
            belt_floats: BeltInstance::FLOATS,
            camera_floats: CameraBlock::FLOATS,
            event_floats: SimEvent::FLOATS,
        }
    }
}

/// Pose buffer rebuilt from the registry each tick.
pub struct PoseBuffer {
    instances: Vec<PoseInstance>,
}

impl PoseBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            instances: Vec::with_capacity(capacity),
        }
    }

    /// Rebuild from the registry, in registration order.
    pub fn rebuild(&mut self, registry: &BodyRegistry) {
        self.instances.clear();
        for (index, body) in registry.iter().enumerate() {
            self.instances.push(PoseInstance {
                x: body.state.position.x as f32,
                y: body.state.position.y as f32,
                z: body.state.position.z as f32,
                rotation: body.state.rotation as f32,
                scale: body.state.scale as f32,
                axial_tilt_deg: body.axial_tilt_deg as f32,
                kind: body.kind.wire_id(),
                body_index: index as f32,
            });
        }
    }

    pub fn count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Raw pointer to pose data for linear-memory reads.
    pub fn as_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

/// Flatten the belt into its static instance block. Called once at init.
pub fn build_belt_instances(belt: &AsteroidBelt) -> Vec<BeltInstance> {
    belt.rocks()
        .iter()
        .map(|rock| BeltInstance {
            x: rock.position.x as f32,
            y: rock.position.y as f32,
            z: rock.position.z as f32,
            scale: rock.scale as f32,
            grey: rock.grey as f32,
            _pad: [0.0; 3],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::BodyKind;
    use crate::components::body::{Body, BodyState};
    use glam::DVec3;

    #[test]
    fn record_sizes_match_declared_float_counts() {
        assert_eq!(std::mem::size_of::<PoseInstance>(), PoseInstance::FLOATS * 4);
        assert_eq!(std::mem::size_of::<BeltInstance>(), BeltInstance::FLOATS * 4);
        assert_eq!(std::mem::size_of::<CameraBlock>(), CameraBlock::FLOATS * 4);
    }

    #[test]
    fn pose_buffer_tracks_registry_order() {
        let mut reg = BodyRegistry::new();
        let id = reg.next_id();
        reg.register(Body::new(id, "Sun", BodyKind::Star).with_radius_km(695_700.0));
        let id = reg.next_id();
        reg.register(
            Body::new(id, "Mercury", BodyKind::Planet).with_state(BodyState {
                position: DVec3::new(5.0, 0.0, -2.0),
                rotation: 1.5,
                scale: 0.5,
            }),
        );

        let mut buffer = PoseBuffer::with_capacity(4);
        buffer.rebuild(&reg);
        assert_eq!(buffer.count(), 2);
        assert_eq!(buffer.instances[0].kind, BodyKind::Star.wire_id());
        assert_eq!(buffer.instances[1].x, 5.0);
        assert_eq!(buffer.instances[1].body_index, 1.0);
    }

    #[test]
    fn belt_instances_mirror_rocks() {
        let belt = AsteroidBelt::generate(16, 7);
        let instances = build_belt_instances(&belt);
        assert_eq!(instances.len(), 16);
        assert_eq!(instances[3].x, belt.rocks()[3].position.x as f32);
    }
}
