//! # Flowers — Nectar-Bearing Resources
//!
//! A [`Flower`] is the interactable payload a forager feeds from. Each one is
//! keyed by its [`NectarId`], the identifier of the contact surface a forager
//! touches to drink. The registry in [`area`](crate::area) never stores
//! flowers directly — it stores node handles and the nectar index, and reaches
//! flower state through the host.

use std::fmt;

/// Identifier of a flower's nectar contact surface.
///
/// Assigned by the host (one per flower, unique within a hierarchy) and used
/// as the lookup key in [`FlowerArea`](crate::area::FlowerArea). It is only
/// an identifier — two `NectarId`s from different scenes are unrelated.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NectarId(u32);

impl NectarId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw id. Useful for diagnostics, not for general use.
    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NectarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NectarId({})", self.0)
    }
}

impl fmt::Display for NectarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "nectar#{}", self.0)
    }
}

/// One flower's nectar state.
///
/// Owned and mutated by the host side of the simulation; the registry only
/// triggers [`Flower::reset`] through the host at episode boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct Flower {
    nectar: NectarId,
    capacity: f32,
    remaining: f32,
}

impl Flower {
    /// Nectar a flower holds when nothing else is specified.
    pub const DEFAULT_CAPACITY: f32 = 1.0;

    /// A full flower with the default capacity.
    pub fn new(nectar: NectarId) -> Self {
        Self::with_capacity(nectar, Self::DEFAULT_CAPACITY)
    }

    /// A full flower holding `capacity` nectar.
    pub fn with_capacity(nectar: NectarId, capacity: f32) -> Self {
        Self {
            nectar,
            capacity,
            remaining: capacity,
        }
    }

    /// The contact surface this flower is looked up by.
    pub fn nectar_collider(&self) -> NectarId {
        self.nectar
    }

    pub fn capacity(&self) -> f32 {
        self.capacity
    }

    /// Nectar still available to drink.
    pub fn nectar_remaining(&self) -> f32 {
        self.remaining
    }

    pub fn has_nectar(&self) -> bool {
        self.remaining > 0.0
    }

    /// Drink up to `amount` nectar. Returns how much was actually consumed,
    /// which can be less than requested when the flower is nearly empty.
    pub fn feed(&mut self, amount: f32) -> f32 {
        let consumed = amount.clamp(0.0, self.remaining);
        self.remaining -= consumed;
        consumed
    }

    /// Refill to capacity. Invoked (via the host) for every flower at the
    /// start of an episode.
    pub fn reset(&mut self) {
        self.remaining = self.capacity;
    }
}
