//! # Scene — An In-Memory Flower Hierarchy
//!
//! [`Scene`] is the concrete hierarchy host shipped with the crate: an arena
//! of nodes, each carrying a local [`Transform`], an ordered child list and a
//! payload — a plain structural node, a flower plant, or a [`Flower`].
//!
//! A node carries exactly one payload, so a plant can never simultaneously
//! host a flower; flowers hang somewhere below the plants that group them.
//!
//! External simulations with their own scene graph implement
//! [`FlowerHost`] themselves instead — `Scene` exists so the registry can be
//! driven, demoed and tested without one.

use std::collections::HashMap;

use crate::flower::{Flower, NectarId};
use crate::host::{FlowerHost, NodeKind};
use crate::math::{Quat, Transform};
use crate::scene::node::{NodeAllocator, NodeId};

enum Payload {
    Plain,
    Plant,
    Flower(Flower),
}

struct NodeData {
    name: Option<String>,
    transform: Transform,
    payload: Payload,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl NodeData {
    fn new(payload: Payload, parent: Option<NodeId>) -> Self {
        Self {
            name: None,
            transform: Transform::IDENTITY,
            payload,
            parent,
            children: Vec::new(),
        }
    }
}

/// Arena-backed scene hierarchy with a fixed root node.
pub struct Scene {
    allocator: NodeAllocator,
    slots: Vec<Option<NodeData>>,
    names: HashMap<String, NodeId>,
    root: NodeId,
    next_nectar: u32,
}

impl Scene {
    /// An empty scene: just the (plain) root node.
    pub fn new() -> Self {
        let mut allocator = NodeAllocator::new();
        let root = allocator.allocate();
        Self {
            allocator,
            slots: vec![Some(NodeData::new(Payload::Plain, None))],
            names: HashMap::new(),
            root,
            next_nectar: 0,
        }
    }

    /// The fixed root every other node descends from.
    pub fn root(&self) -> NodeId {
        self.root
    }

    // ── Spawning ─────────────────────────────────────────────────────

    /// Spawn a plain structural node under `parent`.
    ///
    /// # Panics
    ///
    /// Panics if the parent is not alive.
    pub fn spawn_node(&mut self, parent: NodeId) -> NodeId {
        self.spawn(parent, Payload::Plain)
    }

    /// Spawn a flower plant under `parent`.
    pub fn spawn_plant(&mut self, parent: NodeId) -> NodeId {
        self.spawn(parent, Payload::Plant)
    }

    /// Spawn a flower under `parent`, with a scene-assigned nectar collider
    /// and the default capacity.
    pub fn spawn_flower(&mut self, parent: NodeId) -> NodeId {
        let nectar = NectarId::new(self.next_nectar);
        self.next_nectar += 1;
        self.spawn(parent, Payload::Flower(Flower::new(nectar)))
    }

    /// Spawn a flower built by the caller. The caller owns identifier
    /// uniqueness here — discovery will reject a scene where two flowers
    /// share a nectar collider.
    pub fn spawn_flower_with(&mut self, parent: NodeId, flower: Flower) -> NodeId {
        // Keep scene-assigned ids clear of caller-picked ones.
        self.next_nectar = self.next_nectar.max(flower.nectar_collider().raw() + 1);
        self.spawn(parent, Payload::Flower(flower))
    }

    fn spawn(&mut self, parent: NodeId, payload: Payload) -> NodeId {
        assert!(
            self.allocator.is_alive(parent),
            "Cannot spawn under dead node {parent:?}"
        );
        let node = self.allocator.allocate();
        let data = NodeData::new(payload, Some(parent));
        let idx = node.index() as usize;
        if idx == self.slots.len() {
            self.slots.push(Some(data));
        } else {
            self.slots[idx] = Some(data);
        }
        self.data_mut(parent).unwrap().children.push(node);
        node
    }

    /// Remove a node and its whole subtree. Returns `false` for a stale
    /// handle.
    ///
    /// # Panics
    ///
    /// Panics when asked to despawn the root.
    pub fn despawn_recursive(&mut self, node: NodeId) -> bool {
        assert!(node != self.root, "Cannot despawn the scene root");
        if !self.allocator.is_alive(node) {
            return false;
        }

        // Detach from the parent's child list.
        if let Some(parent) = self.parent(node) {
            if let Some(data) = self.data_mut(parent) {
                data.children.retain(|&c| c != node);
            }
        }

        // Collect the subtree, then free every node in it.
        let mut doomed = vec![node];
        let mut i = 0;
        while i < doomed.len() {
            let children = self.data(doomed[i]).unwrap().children.clone();
            doomed.extend(children);
            i += 1;
        }
        for n in doomed {
            if let Some(data) = self.slots[n.index() as usize].take() {
                if let Some(name) = data.name {
                    self.names.remove(&name);
                }
            }
            self.allocator.deallocate(n);
        }
        true
    }

    // ── Access ───────────────────────────────────────────────────────

    pub fn is_alive(&self, node: NodeId) -> bool {
        self.allocator.is_alive(node)
    }

    /// Number of alive nodes, the root included.
    pub fn node_count(&self) -> usize {
        self.allocator.alive_count()
    }

    /// The node's children in spawn order. Empty for stale handles.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.data(node).map(|d| d.children.as_slice()).unwrap_or(&[])
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.data(node)?.parent
    }

    pub fn is_plant(&self, node: NodeId) -> bool {
        matches!(self.data(node), Some(d) if matches!(d.payload, Payload::Plant))
    }

    pub fn flower(&self, node: NodeId) -> Option<&Flower> {
        match &self.data(node)?.payload {
            Payload::Flower(f) => Some(f),
            _ => None,
        }
    }

    pub fn flower_mut(&mut self, node: NodeId) -> Option<&mut Flower> {
        match &mut self.data_mut(node)?.payload {
            Payload::Flower(f) => Some(f),
            _ => None,
        }
    }

    pub fn transform(&self, node: NodeId) -> Option<&Transform> {
        self.data(node).map(|d| &d.transform)
    }

    pub fn transform_mut(&mut self, node: NodeId) -> Option<&mut Transform> {
        self.data_mut(node).map(|d| &mut d.transform)
    }

    // ── Named nodes ──────────────────────────────────────────────────

    /// Assign a name to a node.
    ///
    /// # Panics
    ///
    /// Panics if the name is already in use or the node is not alive.
    pub fn set_name(&mut self, node: NodeId, name: &str) {
        if let Some(&existing) = self.names.get(name) {
            panic!(
                "Name \"{name}\" is already used by node {existing:?} (tried to assign to {node:?})"
            );
        }
        let data = self
            .data_mut(node)
            .unwrap_or_else(|| panic!("Cannot name dead node {node:?}"));
        if let Some(old) = data.name.replace(name.to_string()) {
            self.names.remove(&old);
        }
        self.names.insert(name.to_string(), node);
    }

    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.data(node)?.name.as_deref()
    }

    /// Get the node with the given name.
    ///
    /// # Panics
    ///
    /// Panics if no node has that name.
    pub fn named(&self, name: &str) -> NodeId {
        *self
            .names
            .get(name)
            .unwrap_or_else(|| panic!("No node named \"{name}\""))
    }

    /// Try to get the node with the given name. Returns `None` if not found.
    pub fn try_named(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    // ── Internals ────────────────────────────────────────────────────

    fn data(&self, node: NodeId) -> Option<&NodeData> {
        if !self.allocator.is_alive(node) {
            return None;
        }
        self.slots.get(node.index() as usize)?.as_ref()
    }

    fn data_mut(&mut self, node: NodeId) -> Option<&mut NodeData> {
        if !self.allocator.is_alive(node) {
            return None;
        }
        self.slots.get_mut(node.index() as usize)?.as_mut()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowerHost for Scene {
    type Node = NodeId;

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.children(node)
    }

    fn classify(&self, node: NodeId) -> NodeKind {
        match self.data(node).map(|d| &d.payload) {
            Some(Payload::Plant) => NodeKind::Plant,
            Some(Payload::Flower(f)) => NodeKind::Flower(f.nectar_collider()),
            _ => NodeKind::Plain,
        }
    }

    fn set_plant_rotation(&mut self, plant: NodeId, rotation: Quat) {
        if let Some(data) = self.data_mut(plant) {
            data.transform.rotation = rotation;
        }
    }

    fn reset_flower(&mut self, flower: NodeId) {
        if let Some(f) = self.flower_mut(flower) {
            f.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_scene_has_only_the_root() {
        let scene = Scene::new();
        assert_eq!(scene.node_count(), 1);
        assert!(scene.is_alive(scene.root()));
        assert_eq!(scene.parent(scene.root()), None);
        assert!(scene.children(scene.root()).is_empty());
    }

    #[test]
    fn children_keep_spawn_order() {
        let mut scene = Scene::new();
        let a = scene.spawn_plant(scene.root());
        let b = scene.spawn_node(scene.root());
        let c = scene.spawn_flower(scene.root());
        assert_eq!(scene.children(scene.root()), &[a, b, c]);
        assert_eq!(scene.parent(b), Some(scene.root()));
    }

    #[test]
    #[should_panic(expected = "dead node")]
    fn spawn_under_dead_parent_panics() {
        let mut scene = Scene::new();
        let branch = scene.spawn_node(scene.root());
        scene.despawn_recursive(branch);
        scene.spawn_flower(branch);
    }

    #[test]
    fn scene_assigned_nectar_ids_are_unique() {
        let mut scene = Scene::new();
        let a = scene.spawn_flower(scene.root());
        let b = scene.spawn_flower(scene.root());
        assert_ne!(
            scene.flower(a).unwrap().nectar_collider(),
            scene.flower(b).unwrap().nectar_collider()
        );
    }

    #[test]
    fn explicit_nectar_ids_do_not_collide_with_assigned_ones() {
        let mut scene = Scene::new();
        let picked = scene.spawn_flower_with(
            scene.root(),
            Flower::new(NectarId::new(5)),
        );
        // The next auto id must skip past the caller-picked one.
        let auto = scene.spawn_flower(scene.root());
        assert!(
            scene.flower(auto).unwrap().nectar_collider().raw()
                > scene.flower(picked).unwrap().nectar_collider().raw()
        );
    }

    #[test]
    fn payload_accessors() {
        let mut scene = Scene::new();
        let plant = scene.spawn_plant(scene.root());
        let flower = scene.spawn_flower(plant);
        assert!(scene.is_plant(plant));
        assert!(!scene.is_plant(flower));
        assert!(scene.flower(plant).is_none());
        assert!(scene.flower(flower).is_some());

        scene.flower_mut(flower).unwrap().feed(0.5);
        assert_eq!(scene.flower(flower).unwrap().nectar_remaining(), 0.5);
    }

    #[test]
    fn despawn_recursive_removes_subtree() {
        let mut scene = Scene::new();
        let plant = scene.spawn_plant(scene.root());
        let f1 = scene.spawn_flower(plant);
        let f2 = scene.spawn_flower(plant);
        let keeper = scene.spawn_flower(scene.root());
        assert_eq!(scene.node_count(), 5);

        assert!(scene.despawn_recursive(plant));
        assert_eq!(scene.node_count(), 2);
        for gone in [plant, f1, f2] {
            assert!(!scene.is_alive(gone));
        }
        assert!(scene.is_alive(keeper));
        assert_eq!(scene.children(scene.root()), &[keeper]);

        // Second attempt is a stale handle.
        assert!(!scene.despawn_recursive(plant));
    }

    #[test]
    #[should_panic(expected = "scene root")]
    fn despawning_the_root_panics() {
        let mut scene = Scene::new();
        scene.despawn_recursive(scene.root());
    }

    #[test]
    fn stale_handles_read_as_nothing() {
        let mut scene = Scene::new();
        let flower = scene.spawn_flower(scene.root());
        scene.despawn_recursive(flower);
        assert!(scene.flower(flower).is_none());
        assert!(scene.transform(flower).is_none());
        assert!(scene.children(flower).is_empty());
    }

    #[test]
    fn named_lookup() {
        let mut scene = Scene::new();
        let plant = scene.spawn_plant(scene.root());
        scene.set_name(plant, "plantA");
        assert_eq!(scene.named("plantA"), plant);
        assert_eq!(scene.try_named("plantA"), Some(plant));
        assert_eq!(scene.try_named("plantZ"), None);
        assert_eq!(scene.name(plant), Some("plantA"));
    }

    #[test]
    #[should_panic(expected = "No node named")]
    fn named_panics_on_missing() {
        let scene = Scene::new();
        scene.named("ghost");
    }

    #[test]
    #[should_panic(expected = "already used")]
    fn duplicate_name_panics() {
        let mut scene = Scene::new();
        let a = scene.spawn_node(scene.root());
        let b = scene.spawn_node(scene.root());
        scene.set_name(a, "pot");
        scene.set_name(b, "pot");
    }

    #[test]
    fn despawn_cleans_up_names() {
        let mut scene = Scene::new();
        let plant = scene.spawn_plant(scene.root());
        scene.set_name(plant, "temp");
        scene.despawn_recursive(plant);
        assert_eq!(scene.try_named("temp"), None);
    }

    #[test]
    fn recycled_slots_reuse_indices_safely() {
        let mut scene = Scene::new();
        let old = scene.spawn_flower(scene.root());
        scene.despawn_recursive(old);
        let new = scene.spawn_plant(scene.root());
        assert_eq!(new.index(), old.index());
        assert_ne!(new, old);
        // The stale handle sees nothing; the new one is a plant.
        assert!(scene.flower(old).is_none());
        assert!(scene.is_plant(new));
    }

    #[test]
    fn host_classification_matches_payloads() {
        let mut scene = Scene::new();
        let pot = scene.spawn_node(scene.root());
        let plant = scene.spawn_plant(pot);
        let flower = scene.spawn_flower(plant);
        assert_eq!(scene.classify(pot), NodeKind::Plain);
        assert_eq!(scene.classify(plant), NodeKind::Plant);
        assert_eq!(
            scene.classify(flower),
            NodeKind::Flower(scene.flower(flower).unwrap().nectar_collider())
        );
    }
}
