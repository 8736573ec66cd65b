//! # Node Handles — Generational Identifiers for Scene Nodes
//!
//! A [`NodeId`] is just a number; the [`Scene`](super::graph::Scene) maps it
//! to the node's actual data. Handles pair a slot index with a generation
//! counter so a handle kept across a despawn is detected as stale instead of
//! silently pointing at whatever node reused the slot.
//!
//! ```text
//! NodeId { index: 5, generation: 0 }  ← original
//! NodeId { index: 5, generation: 1 }  ← after the slot is recycled
//! ```

use std::fmt;

/// A lightweight handle to a node in a [`Scene`](super::graph::Scene).
///
/// Only valid for the `Scene` that created it, and only while its generation
/// matches.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Returns the raw slot index. Useful for diagnostics, not for general use.
    pub fn index(self) -> u32 {
        self.index
    }

    pub fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}

/// Manages node slot allocation and recycling.
///
/// Spawning pops a recycled slot if one is free, otherwise grows. Despawning
/// bumps the slot's generation so stale handles fail the liveness check.
pub(crate) struct NodeAllocator {
    /// Generation counter per slot ever allocated.
    generations: Vec<u32>,
    /// Slots available for reuse.
    free_list: Vec<u32>,
}

impl NodeAllocator {
    pub fn new() -> Self {
        Self {
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    pub fn allocate(&mut self) -> NodeId {
        if let Some(index) = self.free_list.pop() {
            // Generation was already bumped on deallocate.
            let generation = self.generations[index as usize];
            NodeId { index, generation }
        } else {
            let index = self.generations.len() as u32;
            self.generations.push(0);
            NodeId {
                index,
                generation: 0,
            }
        }
    }

    /// Returns `false` if the handle was already stale.
    pub fn deallocate(&mut self, node: NodeId) -> bool {
        if self.is_alive(node) {
            self.generations[node.index as usize] += 1;
            self.free_list.push(node.index);
            true
        } else {
            false
        }
    }

    pub fn is_alive(&self, node: NodeId) -> bool {
        let idx = node.index as usize;
        idx < self.generations.len() && self.generations[idx] == node.generation
    }

    pub fn alive_count(&self) -> usize {
        self.generations.len() - self.free_list.len()
    }
}
