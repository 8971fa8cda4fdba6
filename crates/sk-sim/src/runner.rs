use crate::catalog::Catalog;

/// Drives a [`Catalog`] through update/render ticks.
///
/// One tick is a single pass over the catalog in stored order, calling
/// `update` then `render` on each object before moving to the next —
/// interleaved per object, not all updates followed by all renders.
/// Ticks are stateless passes; the loop imposes no fixed tick count or
/// timing, that is caller policy.
pub struct GameLoop {
    catalog: Catalog,
    tick: u64,
}

impl std::fmt::Debug for GameLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLoop")
            .field("tick", &self.tick)
            .field("objects", &self.catalog.len())
            .finish()
    }
}

impl GameLoop {
    /// Create a loop over a catalog, taking ownership of it.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, tick: 0 }
    }

    /// Advance every object by one tick.
    pub fn tick(&mut self) {
        self.tick += 1;
        for object in self.catalog.iter_mut() {
            object.update();
            object.render();
        }
    }

    /// Advance by `n` ticks.
    pub fn run(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    /// Number of ticks run so far.
    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// The driven catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access to the driven catalog.
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Extract the catalog, consuming the loop.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
