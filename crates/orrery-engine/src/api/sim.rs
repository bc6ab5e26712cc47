use glam::DVec3;

use crate::api::config::SimConfig;
use crate::api::types::{
    BodyId, BodyKind, ScaleMode, SimEvent, EVENT_DATE_INFO, EVENT_TARGET_INFO, EVENT_TIME_INFO,
};
use crate::assets::catalog::Catalog;
use crate::components::body::{Body, BodyState};
use crate::core::clock::SimulationClock;
use crate::core::registry::BodyRegistry;
use crate::error::CatalogError;
use crate::input::controls::{ControlEvent, ControlQueue};
use crate::systems::belt::AsteroidBelt;
use crate::systems::camera::{CameraController, CameraMode};
use crate::systems::kepler::days_to_date;
use crate::systems::orbital::update_bodies;

/// Externally settable toggles, frozen into a per-tick snapshot.
/// Control events mutate this only at the tick boundary, so no frame ever
/// sees a torn mix of old and new settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Settings {
    pub scale_mode: ScaleMode,
    pub scroll_progress: f64,
}

/// The simulation: owns the clock, the body registry, the camera controller,
/// and the belt, and runs the strict per-tick update order:
/// controls, clock, body poses, camera, HUD events.
pub struct Simulation {
    config: SimConfig,
    clock: SimulationClock,
    registry: BodyRegistry,
    camera: CameraController,
    belt: AsteroidBelt,
    controls: ControlQueue,
    settings: Settings,
    events: Vec<SimEvent>,
    planet_count: usize,
}

impl Simulation {
    /// Build with the built-in solar system catalog.
    pub fn new(config: SimConfig) -> Result<Self, CatalogError> {
        Self::with_catalog(Catalog::solar_system(), config)
    }

    /// Build from a caller-supplied catalog. Validation failures are fatal
    /// here so the per-frame path never has to re-check static data.
    pub fn with_catalog(catalog: Catalog, config: SimConfig) -> Result<Self, CatalogError> {
        catalog.validate()?;

        let mut registry = BodyRegistry::new();

        let star_id = registry.next_id();
        registry.register(
            Body::new(star_id, catalog.star.name.clone(), BodyKind::Star)
                .with_radius_km(catalog.star.radius_km),
        );

        for elements in &catalog.planets {
            let id = registry.next_id();
            registry.register(
                Body::new(id, elements.name.clone(), BodyKind::Planet)
                    .with_elements(elements.clone()),
            );
        }

        for moon in &catalog.moons {
            // Validation guarantees the parent exists.
            let Some(parent_id) = registry.get_by_name(&moon.parent).map(|b| b.id) else {
                return Err(CatalogError::UnknownParent {
                    moon: moon.orbit.name.clone(),
                    parent: moon.parent.clone(),
                });
            };
            let id = registry.next_id();
            registry.register(
                Body::new(id, moon.orbit.name.clone(), BodyKind::Moon)
                    .with_moon_orbit(moon.orbit.clone(), parent_id),
            );
        }

        let planet_count = catalog.planet_count();
        let clock = SimulationClock::new(config.days_per_second);
        let settings = Settings::default();

        // Prime every pose so queries are valid before the first tick.
        update_bodies(&mut registry, &clock, settings.scale_mode);

        let camera = CameraController::new(&config, planet_count);
        let belt = AsteroidBelt::generate(config.belt_count, config.belt_seed);

        log::info!(
            "simulation ready: {} bodies, {} belt rocks",
            registry.len(),
            belt.len()
        );

        Ok(Self {
            config,
            clock,
            registry,
            camera,
            belt,
            controls: ControlQueue::new(),
            settings,
            events: Vec::with_capacity(8),
            planet_count,
        })
    }

    /// Run one frame: drain controls, advance time, recompute every body
    /// pose, then the camera (which must read current-frame poses), then
    /// rebuild HUD events. Zero or negative delta advances nothing but still
    /// recomputes, so a paused frame stays consistent.
    pub fn tick(&mut self, delta_time_millis: f64) {
        self.apply_controls();
        let settings = self.settings;

        self.clock.advance(delta_time_millis / 1000.0);
        update_bodies(&mut self.registry, &self.clock, settings.scale_mode);
        self.camera.update(settings.scroll_progress, &self.registry);
        self.emit_events(settings);
    }

    fn apply_controls(&mut self) {
        for event in self.controls.drain() {
            match event {
                ControlEvent::SetScaleMode(mode) => self.settings.scale_mode = mode,
                ControlEvent::SetFreeFly(on) => self.camera.set_mode(if on {
                    CameraMode::FreeFly
                } else {
                    CameraMode::Scroll
                }),
                ControlEvent::SetTimeAcceleration(factor) => self.clock.set_acceleration(factor),
                ControlEvent::SetScrollProgress(p) => {
                    if p.is_finite() {
                        self.settings.scroll_progress = p.clamp(0.0, 1.0);
                    } else {
                        log::warn!("ignoring non-finite scroll progress");
                    }
                }
                ControlEvent::SyncCameraPose { position, look_at } => {
                    self.camera.sync_pose(position, look_at)
                }
            }
        }
    }

    fn emit_events(&mut self, settings: Settings) {
        self.events.clear();
        self.events.push(SimEvent {
            kind: EVENT_TIME_INFO,
            a: self.clock.elapsed_days() as f32,
            b: self.clock.acceleration() as f32,
            c: settings.scale_mode.wire_id(),
        });

        let (year, month, day) = self.date();
        self.events.push(SimEvent {
            kind: EVENT_DATE_INFO,
            a: year as f32,
            b: month as f32,
            c: day as f32,
        });

        self.events.push(SimEvent {
            kind: EVENT_TARGET_INFO,
            a: self.camera.target() as f32,
            b: self.camera.mode().wire_id(),
            c: settings.scroll_progress as f32,
        });
    }

    // ── Control surface (queued; applied at the next tick boundary) ──

    pub fn set_scale_mode(&mut self, mode: ScaleMode) {
        self.controls.push(ControlEvent::SetScaleMode(mode));
    }

    pub fn set_free_fly(&mut self, on: bool) {
        self.controls.push(ControlEvent::SetFreeFly(on));
    }

    pub fn set_time_acceleration(&mut self, factor: f64) {
        self.controls.push(ControlEvent::SetTimeAcceleration(factor));
    }

    pub fn set_scroll_progress(&mut self, progress: f64) {
        self.controls.push(ControlEvent::SetScrollProgress(progress));
    }

    pub fn sync_camera_pose(&mut self, position: DVec3, look_at: DVec3) {
        self.controls
            .push(ControlEvent::SyncCameraPose { position, look_at });
    }

    // ── Query surface ────────────────────────────────────────────────

    pub fn elapsed_days(&self) -> f64 {
        self.clock.elapsed_days()
    }

    /// Simulated calendar date for the HUD.
    pub fn date(&self) -> (i32, u32, u32) {
        days_to_date(self.config.start_days_from_j2000 + self.clock.elapsed_days())
    }

    pub fn body_state(&self, id: BodyId) -> Option<BodyState> {
        self.registry.state(id)
    }

    pub fn body_state_by_name(&self, name: &str) -> Option<BodyState> {
        self.registry.state_by_name(name)
    }

    /// Body handles in registration order (star, planets sun-outward, moons).
    pub fn body_ids(&self) -> Vec<BodyId> {
        self.registry.ids().collect()
    }

    pub fn registry(&self) -> &BodyRegistry {
        &self.registry
    }

    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    pub fn belt(&self) -> &AsteroidBelt {
        &self.belt
    }

    /// Whole-ring belt spin angle for the current time.
    pub fn belt_rotation(&self) -> f64 {
        self.belt.rotation(self.clock.elapsed_seconds())
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn planet_count(&self) -> usize {
        self.planet_count
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 16.0;

    fn sim() -> Simulation {
        Simulation::new(SimConfig::default()).unwrap()
    }

    fn body_states(sim: &Simulation) -> Vec<BodyState> {
        sim.body_ids()
            .into_iter()
            .filter_map(|id| sim.body_state(id))
            .collect()
    }

    #[test]
    fn builds_ten_bodies_from_builtin_catalog() {
        let sim = sim();
        assert_eq!(sim.body_ids().len(), 10); // star + 8 planets + Luna
        assert_eq!(sim.planet_count(), 8);
        assert!(sim.body_state_by_name("earth").is_some());
        assert!(sim.body_state_by_name("SATURN").is_some());
        assert!(sim.body_state_by_name("Niburu").is_none());
    }

    #[test]
    fn tick_zero_is_idempotent_for_body_state() {
        let mut sim = sim();
        for _ in 0..5 {
            sim.tick(FRAME_MS);
        }
        let before = body_states(&sim);
        for _ in 0..5 {
            sim.tick(0.0);
        }
        assert_eq!(before, body_states(&sim));
    }

    #[test]
    fn scale_mode_round_trip_restores_positions() {
        let mut sim = sim();
        for _ in 0..10 {
            sim.tick(FRAME_MS);
        }
        let cinematic = body_states(&sim);

        sim.set_scale_mode(ScaleMode::Realistic);
        sim.tick(0.0);
        let realistic = body_states(&sim);
        // Mercury actually moved outward.
        assert!(realistic[1].position.length() > cinematic[1].position.length());

        sim.set_scale_mode(ScaleMode::Cinematic);
        sim.tick(0.0);
        let restored = body_states(&sim);
        for (a, b) in cinematic.iter().zip(&restored) {
            assert!(a.position.distance(b.position) < 1e-9);
            assert!((a.scale - b.scale).abs() < 1e-12);
        }
    }

    #[test]
    fn toggles_take_effect_only_at_tick_boundary() {
        let mut sim = sim();
        sim.tick(FRAME_MS);
        let before = body_states(&sim);

        sim.set_scale_mode(ScaleMode::Realistic);
        // Not applied yet: no tick has run.
        assert_eq!(before, body_states(&sim));

        sim.tick(0.0);
        assert_ne!(before, body_states(&sim));
    }

    #[test]
    fn camera_reads_current_frame_poses() {
        let mut sim = sim();
        sim.set_scroll_progress(0.3); // planet section
        sim.set_time_acceleration(5000.0);
        for _ in 0..3 {
            sim.tick(FRAME_MS);
        }
        let target = sim.camera().target();
        assert!(target >= 1);
        let body = sim.registry().get_at(target).unwrap();
        // Aim must equal the pose computed this very tick, not a stale one.
        assert_eq!(sim.camera().look_at(), body.state.position);
    }

    #[test]
    fn free_fly_cedes_camera_ownership() {
        let mut sim = sim();
        sim.set_scroll_progress(0.3);
        sim.tick(FRAME_MS);

        sim.set_free_fly(true);
        sim.tick(FRAME_MS);
        let pos = sim.camera().position();
        let look = sim.camera().look_at();

        sim.set_scroll_progress(0.9);
        for _ in 0..10 {
            sim.tick(FRAME_MS);
        }
        assert_eq!(sim.camera().position(), pos);
        assert_eq!(sim.camera().look_at(), look);
        assert_eq!(sim.camera().mode(), CameraMode::FreeFly);

        sim.set_free_fly(false);
        sim.tick(FRAME_MS);
        assert_ne!(sim.camera().position(), pos);
    }

    #[test]
    fn earth_comes_home_after_one_year() {
        let mut sim = sim();
        let start = sim.body_state_by_name("Earth").unwrap();

        // One Earth year of simulated days in a single (huge) tick:
        // 365.2 days / (0.01 days per second) = 36 520 s.
        sim.tick(36_520.0 * 1000.0);
        assert!((sim.elapsed_days() - 365.2).abs() < 1e-9);

        let end = sim.body_state_by_name("Earth").unwrap();
        assert!(start.position.distance(end.position) < 1e-2);
    }

    #[test]
    fn negative_acceleration_never_rewinds_time() {
        let mut sim = sim();
        sim.tick(FRAME_MS);
        let days = sim.elapsed_days();
        sim.set_time_acceleration(-100.0);
        for _ in 0..10 {
            sim.tick(FRAME_MS);
        }
        assert!(sim.elapsed_days() >= days);
    }

    #[test]
    fn hud_events_rebuilt_every_tick() {
        let mut sim = sim();
        sim.tick(FRAME_MS);
        let events = sim.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].kind, EVENT_TIME_INFO);
        assert_eq!(events[1].kind, EVENT_DATE_INFO);
        assert_eq!(events[2].kind, EVENT_TARGET_INFO);

        // Date starts at the configured epoch (~mid 2026).
        let (year, _, _) = sim.date();
        assert_eq!(year, 2026);
    }

    #[test]
    fn belt_is_generated_and_spins() {
        let mut sim = sim();
        assert_eq!(sim.belt().len(), SimConfig::default().belt_count);
        assert_eq!(sim.belt_rotation(), 0.0);
        sim.tick(1000.0);
        assert!(sim.belt_rotation() > 0.0);
    }

    #[test]
    fn bad_catalog_is_fatal_at_construction() {
        let mut catalog = Catalog::solar_system();
        catalog.planets[0].eccentricity = 2.0;
        assert!(Simulation::with_catalog(catalog, SimConfig::default()).is_err());
    }
}
