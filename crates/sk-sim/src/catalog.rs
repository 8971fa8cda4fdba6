use sk_core::GameObject;

/// An ordered, owned collection of spawned game objects.
///
/// Objects enter in spawn order and iteration always follows that
/// order. The catalog exclusively owns its objects; dropping or
/// [`clear`](Self::clear)ing it releases them all.
#[derive(Default)]
pub struct Catalog {
    objects: Vec<Box<dyn GameObject>>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("len", &self.objects.len())
            .field("kinds", &self.kinds())
            .finish()
    }
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object, taking ownership of it.
    pub fn push(&mut self, object: Box<dyn GameObject>) {
        self.objects.push(object);
    }

    /// Number of objects in the catalog.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the catalog holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate the objects in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn GameObject> {
        self.objects.iter().map(|o| o.as_ref())
    }

    /// Iterate the objects mutably in stored order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut dyn GameObject> {
        self.objects
            .iter_mut()
            .map(|o| -> &mut dyn GameObject { o.as_mut() })
    }

    /// The kind name of every object, in stored order.
    pub fn kinds(&self) -> Vec<&str> {
        self.objects.iter().map(|o| o.kind()).collect()
    }

    /// Drop all objects, leaving the catalog empty.
    pub fn clear(&mut self) {
        self.objects.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sk_core::units::{Ant, Plane};

    #[test]
    fn push_preserves_order() {
        let mut catalog = Catalog::new();
        catalog.push(Box::new(Plane::default()));
        catalog.push(Box::new(Ant::default()));
        catalog.push(Box::new(Plane::default()));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.kinds(), vec!["plane", "ant", "plane"]);
    }

    #[test]
    fn clear_empties_catalog() {
        let mut catalog = Catalog::new();
        catalog.push(Box::new(Ant::default()));
        catalog.clear();
        assert!(catalog.is_empty());
        assert_eq!(catalog.iter().count(), 0);
    }
}
