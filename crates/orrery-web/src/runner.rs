use orrery_engine::{
    build_belt_instances, BeltInstance, CameraBlock, CatalogError, PoseBuffer, ProtocolLayout,
    ScaleMode, SimConfig, Simulation,
};

/// Runner that wires the simulation to the browser frame loop.
///
/// Owns the `Simulation` plus the flat buffers the TypeScript renderer reads
/// from WASM linear memory each frame. The JS side calls `tick` from its
/// requestAnimationFrame callback, then reads poses/camera/events through
/// the pointer accessors.
pub struct SimRunner {
    sim: Simulation,
    poses: PoseBuffer,
    belt_instances: Vec<BeltInstance>,
    camera_block: CameraBlock,
    layout: ProtocolLayout,
}

impl SimRunner {
    pub fn new(config: SimConfig) -> Result<Self, CatalogError> {
        let sim = Simulation::new(config)?;

        let body_count = sim.body_ids().len();
        let belt_instances = build_belt_instances(sim.belt());
        let layout = ProtocolLayout::new(body_count, belt_instances.len(), 8);

        let mut poses = PoseBuffer::with_capacity(body_count);
        poses.rebuild(sim.registry());
        let camera_block = CameraBlock::from_controller(sim.camera());

        Ok(Self {
            sim,
            poses,
            belt_instances,
            camera_block,
            layout,
        })
    }

    /// Run one frame tick and rebuild the export buffers.
    pub fn tick(&mut self, dt_millis: f64) {
        self.sim.tick(dt_millis);
        self.poses.rebuild(self.sim.registry());
        self.camera_block = CameraBlock::from_controller(self.sim.camera());
    }

    // ---- Control intake (queued; applied at the next tick) ----

    pub fn set_scroll_progress(&mut self, progress: f64) {
        self.sim.set_scroll_progress(progress);
    }

    pub fn set_realistic_scale(&mut self, realistic: bool) {
        self.sim.set_scale_mode(if realistic {
            ScaleMode::Realistic
        } else {
            ScaleMode::Cinematic
        });
    }

    pub fn set_free_fly(&mut self, on: bool) {
        self.sim.set_free_fly(on);
    }

    pub fn set_time_acceleration(&mut self, factor: f64) {
        self.sim.set_time_acceleration(factor);
    }

    pub fn sync_camera_pose(&mut self, pos: [f64; 3], look: [f64; 3]) {
        self.sim
            .sync_camera_pose(glam::DVec3::from_array(pos), glam::DVec3::from_array(look));
    }

    // ---- Pointer accessors for linear-memory reads ----

    pub fn poses_ptr(&self) -> *const f32 {
        self.poses.as_ptr()
    }

    pub fn pose_count(&self) -> u32 {
        self.poses.count()
    }

    pub fn belt_ptr(&self) -> *const f32 {
        self.belt_instances.as_ptr() as *const f32
    }

    pub fn belt_count(&self) -> u32 {
        self.belt_instances.len() as u32
    }

    pub fn belt_rotation(&self) -> f32 {
        self.sim.belt_rotation() as f32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        &self.camera_block as *const CameraBlock as *const f32
    }

    pub fn events_ptr(&self) -> *const f32 {
        self.sim.events().as_ptr() as *const f32
    }

    pub fn event_count(&self) -> u32 {
        self.sim.events().len() as u32
    }

    // ---- Scalar accessors ----

    pub fn elapsed_days(&self) -> f64 {
        self.sim.elapsed_days()
    }

    pub fn planet_count(&self) -> u32 {
        self.sim.planet_count() as u32
    }

    // ---- Layout accessors (read once by TypeScript at init) ----

    pub fn max_bodies(&self) -> u32 {
        self.layout.max_bodies as u32
    }

    pub fn max_belt_instances(&self) -> u32 {
        self.layout.max_belt_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn pose_floats(&self) -> u32 {
        self.layout.pose_floats as u32
    }

    pub fn belt_floats(&self) -> u32 {
        self.layout.belt_floats as u32
    }

    pub fn camera_floats(&self) -> u32 {
        self.layout.camera_floats as u32
    }

    pub fn event_floats(&self) -> u32 {
        self.layout.event_floats as u32
    }
}
