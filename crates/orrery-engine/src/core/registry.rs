use crate::api::types::BodyId;
use crate::components::body::{canonicalize, Body, BodyState};

/// Flat-Vec body storage in registration order (star first, planets
/// sun-outward, moons last).
///
/// Reads are open to everyone; writes are the orbital pass's alone, exactly
/// once per body per tick. The single-writer discipline is convention only;
/// the model is single-threaded, so there is nothing to lock.
pub struct BodyRegistry {
    bodies: Vec<Body>,
    next_id: u32,
}

impl BodyRegistry {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(16),
            next_id: 1,
        }
    }

    /// Generate the next unique body handle.
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a body. Returns its handle.
    pub fn register(&mut self, body: Body) -> BodyId {
        let id = body.id;
        self.bodies.push(body);
        id
    }

    /// Get a body by handle.
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Get a body by registration index (0 = star, k = k-th registered body).
    pub fn get_at(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    /// Get a body by name. Case- and whitespace-insensitive.
    pub fn get_by_name(&self, name: &str) -> Option<&Body> {
        let key = canonicalize(name);
        self.bodies.iter().find(|b| b.canonical() == key)
    }

    /// Current kinematic state by handle.
    pub fn state(&self, id: BodyId) -> Option<BodyState> {
        self.get(id).map(|b| b.state)
    }

    /// Current kinematic state by name.
    pub fn state_by_name(&self, name: &str) -> Option<BodyState> {
        self.get_by_name(name).map(|b| b.state)
    }

    /// Overwrite a body's state. Returns false on an unknown handle.
    pub fn set_state(&mut self, id: BodyId, state: BodyState) -> bool {
        if let Some(body) = self.bodies.iter_mut().find(|b| b.id == id) {
            body.state = state;
            true
        } else {
            false
        }
    }

    /// Handles in registration order.
    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.bodies.iter().map(|b| b.id)
    }

    /// Iterate bodies in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for BodyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
