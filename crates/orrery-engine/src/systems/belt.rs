use glam::DVec3;

// ── Belt geometry ────────────────────────────────────────────────────

/// Inner/outer scene radii for the ring, sitting in the Mars–Jupiter gap
/// after distance scaling.
pub const BELT_INNER_RADIUS: f64 = 25.0;
pub const BELT_OUTER_RADIUS: f64 = 40.0;
/// Vertical scatter half-height.
pub const BELT_Y_SPREAD: f64 = 1.0;
/// Per-rock scale range.
pub const BELT_SCALE_MIN: f64 = 0.5;
pub const BELT_SCALE_MAX: f64 = 2.0;
/// Whole-ring spin in rad per real second.
pub const BELT_SPIN_RATE: f64 = 0.03;

/// Deterministic integer hash for rock placement. No rand dependency:
/// the belt must look identical on every run and every client.
pub fn scatter_hash(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2_654_435_761);
    n ^= n >> 16;
    n = n.wrapping_mul(2_246_822_519);
    n ^= n >> 13;
    n
}

/// One belt rock: a static ring position plus presentation attributes.
/// Rocks are not registry bodies; the whole ring moves as one rigid spin.
#[derive(Debug, Clone, Copy)]
pub struct BeltRock {
    pub position: DVec3,
    pub scale: f64,
    /// Grey tint in [0.3, 0.6], varied per rock.
    pub grey: f64,
}

/// The asteroid belt: a deterministic scatter of rocks between Mars and
/// Jupiter, exported once, plus a global spin angle recomputed per tick.
pub struct AsteroidBelt {
    rocks: Vec<BeltRock>,
}

impl AsteroidBelt {
    pub fn generate(count: usize, seed: u32) -> Self {
        let frac = |h: u32| h as f64 / u32::MAX as f64;

        let mut rocks = Vec::with_capacity(count);
        for i in 0..count {
            let base = seed.wrapping_add(i as u32);
            let h1 = scatter_hash(base.wrapping_mul(7).wrapping_add(31));
            let h2 = scatter_hash(base.wrapping_mul(13).wrapping_add(97));
            let h3 = scatter_hash(base.wrapping_mul(19).wrapping_add(151));
            let h4 = scatter_hash(base.wrapping_mul(23).wrapping_add(211));
            let h5 = scatter_hash(base.wrapping_mul(29).wrapping_add(277));

            let angle = frac(h1) * std::f64::consts::TAU;
            let radius = BELT_INNER_RADIUS + frac(h2) * (BELT_OUTER_RADIUS - BELT_INNER_RADIUS);
            let y = (frac(h3) - 0.5) * 2.0 * BELT_Y_SPREAD;
            let scale = BELT_SCALE_MIN + frac(h4) * (BELT_SCALE_MAX - BELT_SCALE_MIN);
            let grey = 0.3 + frac(h5) * 0.3;

            rocks.push(BeltRock {
                position: DVec3::new(angle.cos() * radius, y, angle.sin() * radius),
                scale,
                grey,
            });
        }

        Self { rocks }
    }

    /// Current whole-ring rotation angle about the y axis.
    pub fn rotation(&self, elapsed_seconds: f64) -> f64 {
        elapsed_seconds * BELT_SPIN_RATE
    }

    pub fn rocks(&self) -> &[BeltRock] {
        &self.rocks
    }

    pub fn len(&self) -> usize {
        self.rocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let a = AsteroidBelt::generate(100, 1);
        let b = AsteroidBelt::generate(100, 1);
        for (ra, rb) in a.rocks().iter().zip(b.rocks()) {
            assert_eq!(ra.position, rb.position);
            assert_eq!(ra.scale, rb.scale);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let a = AsteroidBelt::generate(10, 1);
        let b = AsteroidBelt::generate(10, 2);
        assert_ne!(a.rocks()[0].position, b.rocks()[0].position);
    }

    #[test]
    fn rocks_stay_in_the_ring() {
        let belt = AsteroidBelt::generate(500, 1);
        assert_eq!(belt.len(), 500);
        for rock in belt.rocks() {
            let ring_r = (rock.position.x * rock.position.x + rock.position.z * rock.position.z)
                .sqrt();
            assert!(ring_r >= BELT_INNER_RADIUS - 1e-9, "rock too close: {ring_r}");
            assert!(ring_r <= BELT_OUTER_RADIUS + 1e-9, "rock too far: {ring_r}");
            assert!(rock.position.y.abs() <= BELT_Y_SPREAD + 1e-9);
            assert!(rock.scale >= BELT_SCALE_MIN && rock.scale <= BELT_SCALE_MAX);
        }
    }

    #[test]
    fn spin_is_linear_in_time() {
        let belt = AsteroidBelt::generate(1, 1);
        assert_eq!(belt.rotation(0.0), 0.0);
        assert!((belt.rotation(10.0) - 10.0 * BELT_SPIN_RATE).abs() < 1e-12);
    }

    #[test]
    fn hash_is_deterministic_and_spread() {
        assert_eq!(scatter_hash(42), scatter_hash(42));
        assert_ne!(scatter_hash(0), scatter_hash(1));
    }
}
