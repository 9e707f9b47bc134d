//! Stable entity identifiers
//!
//! Every world object that can be killed carries an [`EntityId`]. Killing an
//! entity means removing its id from every container that references it.

/// Identifier of a world entity (plane or obstacle half)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(pub u32);

/// Hands out ids in increasing order; ids are never reused within a session
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next_id: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

impl IdAllocator {
    /// Allocate a new entity ID
    pub fn next(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut ids = IdAllocator::default();
        let a = ids.next();
        let b = ids.next();
        assert_eq!(a, EntityId(1));
        assert!(b > a);
    }
}
