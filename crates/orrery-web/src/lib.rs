pub mod runner;

pub use runner::SimRunner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use orrery_engine::SimConfig;

thread_local! {
    static RUNNER: RefCell<Option<SimRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut SimRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Simulation not initialized. Call sim_init() first.");
        f(runner)
    })
}

/// Build the simulation. Call once before anything else.
/// Returns false (with a console error) if the catalog fails validation.
#[wasm_bindgen]
pub fn sim_init() -> bool {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    match SimRunner::new(SimConfig::default()) {
        Ok(runner) => {
            RUNNER.with(|cell| {
                *cell.borrow_mut() = Some(runner);
            });
            log::info!("orrery: initialized");
            true
        }
        Err(err) => {
            log::error!("orrery: init failed: {err}");
            false
        }
    }
}

/// Run one frame. `dt` is the frame delta in milliseconds.
#[wasm_bindgen]
pub fn sim_tick(dt: f64) {
    with_runner(|r| r.tick(dt));
}

// ---- Controls (queued; applied at the next tick boundary) ----

#[wasm_bindgen]
pub fn sim_set_scroll_progress(progress: f64) {
    with_runner(|r| r.set_scroll_progress(progress));
}

#[wasm_bindgen]
pub fn sim_set_realistic_scale(realistic: bool) {
    with_runner(|r| r.set_realistic_scale(realistic));
}

#[wasm_bindgen]
pub fn sim_set_free_fly(on: bool) {
    with_runner(|r| r.set_free_fly(on));
}

#[wasm_bindgen]
pub fn sim_set_time_acceleration(factor: f64) {
    with_runner(|r| r.set_time_acceleration(factor));
}

#[wasm_bindgen]
pub fn sim_sync_camera_pose(px: f64, py: f64, pz: f64, lx: f64, ly: f64, lz: f64) {
    with_runner(|r| r.sync_camera_pose([px, py, pz], [lx, ly, lz]));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_poses_ptr() -> *const f32 {
    with_runner(|r| r.poses_ptr())
}

#[wasm_bindgen]
pub fn get_pose_count() -> u32 {
    with_runner(|r| r.pose_count())
}

#[wasm_bindgen]
pub fn get_belt_ptr() -> *const f32 {
    with_runner(|r| r.belt_ptr())
}

#[wasm_bindgen]
pub fn get_belt_count() -> u32 {
    with_runner(|r| r.belt_count())
}

#[wasm_bindgen]
pub fn get_belt_rotation() -> f32 {
    with_runner(|r| r.belt_rotation())
}

#[wasm_bindgen]
pub fn get_camera_ptr() -> *const f32 {
    with_runner(|r| r.camera_ptr())
}

#[wasm_bindgen]
pub fn get_events_ptr() -> *const f32 {
    with_runner(|r| r.events_ptr())
}

#[wasm_bindgen]
pub fn get_event_count() -> u32 {
    with_runner(|r| r.event_count())
}

#[wasm_bindgen]
pub fn get_elapsed_days() -> f64 {
    with_runner(|r| r.elapsed_days())
}

#[wasm_bindgen]
pub fn get_planet_count() -> u32 {
    with_runner(|r| r.planet_count())
}

// ---- Layout accessors (read by TypeScript once at init) ----

#[wasm_bindgen]
pub fn get_max_bodies() -> u32 {
    with_runner(|r| r.max_bodies())
}

#[wasm_bindgen]
pub fn get_max_belt_instances() -> u32 {
    with_runner(|r| r.max_belt_instances())
}

#[wasm_bindgen]
pub fn get_max_events() -> u32 {
    with_runner(|r| r.max_events())
}

#[wasm_bindgen]
pub fn get_pose_floats() -> u32 {
    with_runner(|r| r.pose_floats())
}

#[wasm_bindgen]
pub fn get_belt_floats() -> u32 {
    with_runner(|r| r.belt_floats())
}

#[wasm_bindgen]
pub fn get_camera_floats() -> u32 {
    with_runner(|r| r.camera_floats())
}

#[wasm_bindgen]
pub fn get_event_floats() -> u32 {
    with_runner(|r| r.event_floats())
}
