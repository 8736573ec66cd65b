//! # Host Adapter — The Seam Between Registry and Scene
//!
//! The registry never touches a concrete scene graph. It walks the hierarchy
//! through [`FlowerHost`], a small oracle the host implements: enumerate a
//! node's children, classify a node, and carry out the two mutations the
//! registry requests at episode boundaries (re-orient a plant, reset a
//! flower).
//!
//! This keeps [`FlowerArea`](crate::area::FlowerArea) independent of
//! rendering and physics concerns, and testable against synthetic
//! hierarchies — any tree-shaped type can implement the trait.

use std::fmt;

use crate::flower::NectarId;
use crate::math::Quat;

/// What a node contributes to discovery, resolved once per node.
///
/// A node is exactly one of these. Plants are structural grouping nodes and
/// never host a flower themselves (flowers hang somewhere below them); hosts
/// whose nodes could be both must resolve to `Plant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A flower plant: recorded, then its subtree is scanned for more plants
    /// and flowers.
    Plant,
    /// Hosts a flower, keyed by its nectar contact surface. Terminal for the
    /// scan — flowers never grow under other flowers.
    Flower(NectarId),
    /// Pass-through structural node; only interesting for what's beneath it.
    Plain,
}

/// The hierarchy oracle the registry discovers and resets through.
///
/// The reachable hierarchy must be finite and cycle-free — discovery walks it
/// without a cycle guard.
pub trait FlowerHost {
    /// Opaque handle to a node in the host's hierarchy.
    type Node: Copy + Eq + fmt::Debug;

    /// The node's children, in the host's stable order. Discovery order (and
    /// therefore registry order) follows this ordering exactly.
    fn children(&self, node: Self::Node) -> &[Self::Node];

    /// Classify a node for discovery.
    fn classify(&self, node: Self::Node) -> NodeKind;

    /// Write a fresh orientation to a plant. Cosmetic only — called during
    /// [`reset_flowers`](crate::area::FlowerArea::reset_flowers) so each
    /// episode sees the plants at new angles.
    fn set_plant_rotation(&mut self, plant: Self::Node, rotation: Quat);

    /// Restore a flower to its initial interactable state.
    fn reset_flower(&mut self, flower: Self::Node);
}
