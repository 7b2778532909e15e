//! Fixed-capacity entity pools
//!
//! Slots are allocated once; spawning re-arms the first inactive slot and
//! never grows the pool.

/// An entity that can live in a [`Pool`]
pub trait Poolable: Default {
    fn is_active(&self) -> bool;
    /// Force inactive and clear transient fields
    fn reset(&mut self);
}

/// Pre-allocated set of reusable slots
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<T>,
}

impl<T: Poolable> Pool<T> {
    /// Allocate `capacity` inactive slots
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| T::default()).collect(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// First inactive slot, or `None` when saturated
    pub fn claim(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|slot| !slot.is_active())
    }

    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|slot| slot.is_active())
    }

    pub fn active_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.slots.iter_mut().filter(|slot| slot.is_active())
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Debug, Default)]
    struct Dummy {
        active: bool,
    }

    impl Poolable for Dummy {
        fn is_active(&self) -> bool {
            self.active
        }

        fn reset(&mut self) {
            self.active = false;
        }
    }

    #[test]
    fn test_claim_returns_first_inactive() {
        let mut pool: Pool<Dummy> = Pool::new(3);
        pool.claim().unwrap().active = true;
        pool.claim().unwrap().active = true;
        assert_eq!(pool.active_count(), 2);

        pool.claim().unwrap().active = true;
        assert!(pool.claim().is_none());

        // Freed slot is the one handed out next
        pool.active_mut().nth(1).unwrap().reset();
        assert_eq!(pool.active_count(), 2);
        pool.claim().unwrap().active = true;
        assert_eq!(pool.active_count(), 3);
        assert_eq!(pool.capacity(), 3);
    }

    proptest! {
        #[test]
        fn prop_active_never_exceeds_capacity(
            capacity in 1usize..32,
            ops in proptest::collection::vec(any::<bool>(), 0..200),
        ) {
            let mut pool: Pool<Dummy> = Pool::new(capacity);
            for spawn in ops {
                if spawn {
                    if let Some(slot) = pool.claim() {
                        slot.active = true;
                    }
                } else if let Some(slot) = pool.active_mut().next() {
                    slot.reset();
                }
                prop_assert!(pool.active_count() <= capacity);
                prop_assert_eq!(pool.capacity(), capacity);
            }
        }
    }
}
