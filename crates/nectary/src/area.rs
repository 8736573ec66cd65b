//! # Flower Area — The Nectar Registry
//!
//! A [`FlowerArea`] indexes every flower reachable from one root of a host
//! hierarchy: which plants group them, which flowers exist (in discovery
//! order), and which flower owns each nectar contact surface.
//!
//! ## Lifecycle
//!
//! ```text
//! host hierarchy ──discover()──▶ FlowerArea { plants, flowers, nectar_index }
//!                                     │
//!                 flower_from_nectar(id)      constant-time lookup
//!                 reset_flowers(host, rng)    per-episode reset
//! ```
//!
//! The three collections are built exactly once, by a single pre-order
//! depth-first walk, and never change afterward — resets only touch flower
//! state and plant orientation, both owned by the host. To pick up host-side
//! scene edits, discover again and replace the whole registry.

use std::collections::HashMap;
use std::fmt;

use rand::Rng;
use thiserror::Error;

use crate::flower::NectarId;
use crate::host::{FlowerHost, NodeKind};
use crate::math::rotation_from_euler_degrees;

/// Usable diameter of a flower area. External consumers use it to normalize
/// forager-to-flower distances.
pub const AREA_DIAMETER: f32 = 20.0;

/// Largest tilt (degrees, either sign) a plant picks up on X and Z per reset.
const PLANT_TILT_DEGREES: f32 = 5.0;

/// Registry failure modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AreaError {
    /// Two discovered flowers presented the same nectar collider. The index
    /// would silently mis-route lookups, so discovery aborts instead.
    #[error("two flowers share the same nectar collider ({0})")]
    DuplicateNectar(NectarId),
    /// Lookup with an identifier this registry never discovered. Callers are
    /// expected to only pass identifiers obtained from this registry's own
    /// flowers.
    #[error("no flower registered for {0}")]
    UnknownNectar(NectarId),
}

/// Registry of every plant and flower under one hierarchy root.
pub struct FlowerArea<H: FlowerHost> {
    /// Plants in discovery (pre-order) order.
    plants: Vec<H::Node>,
    /// Flowers in discovery (pre-order) order.
    flowers: Vec<H::Node>,
    /// Nectar contact surface → owning flower.
    nectar_index: HashMap<NectarId, H::Node>,
}

impl<H: FlowerHost> FlowerArea<H> {
    /// Build the registry by scanning everything beneath `root`.
    ///
    /// The root itself is never classified or recorded — only its
    /// descendants are. Children are visited in the host's order, so two
    /// scans of an unchanged hierarchy produce identical registries.
    ///
    /// The hierarchy must be finite and cycle-free; a cyclic hierarchy will
    /// not terminate. Fails with [`AreaError::DuplicateNectar`] if two
    /// flowers present the same nectar collider.
    pub fn discover(host: &H, root: H::Node) -> Result<Self, AreaError> {
        let mut area = Self {
            plants: Vec::new(),
            flowers: Vec::new(),
            nectar_index: HashMap::new(),
        };
        area.scan_children(host, root)?;
        log::debug!(
            "flower area ready: {} flowers across {} plants",
            area.flowers.len(),
            area.plants.len()
        );
        Ok(area)
    }

    fn scan_children(&mut self, host: &H, parent: H::Node) -> Result<(), AreaError> {
        for &child in host.children(parent) {
            match host.classify(child) {
                NodeKind::Plant => {
                    self.plants.push(child);
                    // A plant's subtree still holds flowers (and possibly
                    // nested plants), so keep scanning below it.
                    self.scan_children(host, child)?;
                }
                NodeKind::Flower(nectar) => {
                    if self.nectar_index.insert(nectar, child).is_some() {
                        return Err(AreaError::DuplicateNectar(nectar));
                    }
                    self.flowers.push(child);
                    // Flowers never grow under other flowers — terminal.
                }
                NodeKind::Plain => self.scan_children(host, child)?,
            }
        }
        Ok(())
    }

    /// All discovered flowers, in discovery order.
    pub fn flowers(&self) -> &[H::Node] {
        &self.flowers
    }

    /// All discovered plants, in discovery order.
    pub fn plants(&self) -> &[H::Node] {
        &self.plants
    }

    /// The flower owning the given nectar contact surface.
    ///
    /// Identifiers that did not come from this registry's discovery pass are
    /// a contract violation and fail with [`AreaError::UnknownNectar`].
    pub fn flower_from_nectar(&self, nectar: NectarId) -> Result<H::Node, AreaError> {
        self.nectar_index
            .get(&nectar)
            .copied()
            .ok_or(AreaError::UnknownNectar(nectar))
    }

    /// Start a fresh episode: re-orient every plant and refill every flower.
    ///
    /// Each plant draws an independent orientation — a tilt within ±5° on X
    /// and Z and a full ±180° spin on Y — which is applied through the host.
    /// Flowers are then reset in discovery order, so a seeded `rng` makes the
    /// whole operation reproducible.
    ///
    /// The registry itself is untouched: membership and order of
    /// [`plants`](Self::plants) and [`flowers`](Self::flowers) survive any
    /// number of resets.
    pub fn reset_flowers<R: Rng + ?Sized>(&self, host: &mut H, rng: &mut R) {
        for &plant in &self.plants {
            let x = rng.random_range(-PLANT_TILT_DEGREES..=PLANT_TILT_DEGREES);
            let y = rng.random_range(-180.0f32..=180.0);
            let z = rng.random_range(-PLANT_TILT_DEGREES..=PLANT_TILT_DEGREES);
            host.set_plant_rotation(plant, rotation_from_euler_degrees(x, y, z));
        }
        for &flower in &self.flowers {
            host.reset_flower(flower);
        }
        log::debug!(
            "episode reset: {} plants re-oriented, {} flowers refilled",
            self.plants.len(),
            self.flowers.len()
        );
    }
}

impl<H: FlowerHost> fmt::Debug for FlowerArea<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowerArea")
            .field("plants", &self.plants.len())
            .field("flowers", &self.flowers.len())
            .finish()
    }
}
