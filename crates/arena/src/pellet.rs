use glam::Vec3;

/// Stable handle to a live pellet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PelletId(pub u32);

/// A collectible point-entity.
#[derive(Copy, Clone, Debug)]
pub struct Pellet {
    pub id: PelletId,
    pub pos: Vec3,
}

/// The set of currently-live pellets, indexed by id.
///
/// Membership is the source of truth for "remaining pellets": the arena is
/// cleared and fully repopulated exactly once per episode, and a pickup
/// removes its record explicitly. Ids are never reused within a run.
#[derive(Debug, Default)]
pub struct PelletArena {
    next_id: u32,
    live: Vec<Pellet>,
}

impl PelletArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Add a pellet at `pos`, returning its handle.
    pub fn spawn(&mut self, pos: Vec3) -> PelletId {
        let id = PelletId(self.next_id);
        self.next_id += 1;
        self.live.push(Pellet { id, pos });
        id
    }

    /// Remove the pellet with `id`, returning its record if it was live.
    pub fn remove(&mut self, id: PelletId) -> Option<Pellet> {
        let idx = self.live.iter().position(|p| p.id == id)?;
        Some(self.live.remove(idx))
    }

    /// Drop every live pellet.
    pub fn clear(&mut self) {
        self.live.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pellet> {
        self.live.iter()
    }
}
