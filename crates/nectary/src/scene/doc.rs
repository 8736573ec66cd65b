//! # Scene Documents — Declarative Flower Layouts
//!
//! JSON-serializable description of a scene: nested nodes, each plain, a
//! plant, or a flower. Lets hosts author flower layouts as data instead of
//! spawn calls:
//!
//! ```json
//! {
//!   "nodes": [
//!     { "name": "plantA", "kind": "plant", "children": [
//!       { "kind": "flower", "flower": { "capacity": 2.0 } }
//!     ] }
//!   ]
//! }
//! ```
//!
//! [`Scene::from_doc`] builds a scene from a document; [`Scene::to_doc`]
//! writes one back out. Round-tripping preserves structure, names, nectar
//! colliders and transforms.

use serde::{Deserialize, Serialize};

use crate::flower::{Flower, NectarId};
use crate::math::{rotation_from_euler_degrees, rotation_to_euler_degrees, Vec3};
use crate::scene::graph::Scene;
use crate::scene::node::NodeId;

/// A whole scene: the root's children.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDoc {
    #[serde(default)]
    pub nodes: Vec<NodeDoc>,
}

/// What a documented node is. Plain when omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindDoc {
    #[default]
    Plain,
    Plant,
    Flower,
}

/// One node in a scene document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub kind: KindDoc,
    /// Flower settings; only read when `kind` is `flower`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flower: Option<FlowerDoc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
    /// Euler rotation in degrees: X tilt, Y spin, Z tilt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<[f32; 3]>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeDoc>,
}

/// Flower settings in a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowerDoc {
    /// Explicit nectar collider id. Scene-assigned when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nectar: Option<u32>,
    /// Nectar capacity. Default capacity when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<f32>,
}

impl SceneDoc {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Scene {
    /// Build a scene from a document.
    ///
    /// # Panics
    ///
    /// Panics if the document names two nodes identically (same contract as
    /// [`Scene::set_name`]).
    pub fn from_doc(doc: &SceneDoc) -> Self {
        let mut scene = Scene::new();
        let root = scene.root();
        for node in &doc.nodes {
            build_node(&mut scene, root, node);
        }
        log::debug!("scene document loaded: {} nodes", scene.node_count());
        scene
    }

    /// Parse a JSON document and build a scene from it.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::from_doc(&SceneDoc::from_json(json)?))
    }

    /// Write the scene back out as a document.
    pub fn to_doc(&self) -> SceneDoc {
        SceneDoc {
            nodes: self
                .children(self.root())
                .iter()
                .map(|&child| emit_node(self, child))
                .collect(),
        }
    }
}

fn build_node(scene: &mut Scene, parent: NodeId, doc: &NodeDoc) {
    let node = match doc.kind {
        KindDoc::Plain => scene.spawn_node(parent),
        KindDoc::Plant => scene.spawn_plant(parent),
        KindDoc::Flower => {
            let settings = doc.flower.unwrap_or_default();
            match settings.nectar {
                Some(raw) => {
                    let nectar = NectarId::new(raw);
                    let flower = match settings.capacity {
                        Some(capacity) => Flower::with_capacity(nectar, capacity),
                        None => Flower::new(nectar),
                    };
                    scene.spawn_flower_with(parent, flower)
                }
                None => {
                    let node = scene.spawn_flower(parent);
                    if let Some(capacity) = settings.capacity {
                        let nectar = scene.flower(node).unwrap().nectar_collider();
                        *scene.flower_mut(node).unwrap() =
                            Flower::with_capacity(nectar, capacity);
                    }
                    node
                }
            }
        }
    };

    if let Some(name) = &doc.name {
        scene.set_name(node, name);
    }
    if let Some([x, y, z]) = doc.position {
        scene.transform_mut(node).unwrap().translation = Vec3::new(x, y, z);
    }
    if let Some([x, y, z]) = doc.rotation {
        scene.transform_mut(node).unwrap().rotation = rotation_from_euler_degrees(x, y, z);
    }

    for child in &doc.children {
        build_node(scene, node, child);
    }
}

fn emit_node(scene: &Scene, node: NodeId) -> NodeDoc {
    let transform = scene.transform(node).unwrap();
    let position = (transform.translation != Vec3::ZERO).then(|| {
        let p = transform.translation;
        [p.x, p.y, p.z]
    });
    let rotation = (!transform.rotation.abs_diff_eq(crate::math::Quat::IDENTITY, 1e-6))
        .then(|| {
            let (x, y, z) = rotation_to_euler_degrees(transform.rotation);
            [x, y, z]
        });

    let (kind, flower) = match scene.flower(node) {
        Some(f) => (
            KindDoc::Flower,
            Some(FlowerDoc {
                nectar: Some(f.nectar_collider().raw()),
                capacity: Some(f.capacity()),
            }),
        ),
        None if scene.is_plant(node) => (KindDoc::Plant, None),
        None => (KindDoc::Plain, None),
    };

    NodeDoc {
        name: scene.name(node).map(str::to_string),
        kind,
        flower,
        position,
        rotation,
        children: scene
            .children(node)
            .iter()
            .map(|&child| emit_node(scene, child))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::FlowerArea;

    const LAYOUT: &str = r#"{
        "nodes": [
            {
                "name": "plantA",
                "kind": "plant",
                "position": [2.0, 0.0, -1.5],
                "children": [
                    { "kind": "flower", "flower": { "nectar": 10, "capacity": 2.0 } },
                    {
                        "name": "plantB",
                        "kind": "plant",
                        "rotation": [0.0, 90.0, 0.0],
                        "children": [ { "kind": "flower" } ]
                    }
                ]
            },
            { "kind": "flower" }
        ]
    }"#;

    #[test]
    fn builds_scene_from_json() {
        let scene = Scene::from_json(LAYOUT).unwrap();
        // root + 2 plants + 3 flowers
        assert_eq!(scene.node_count(), 6);

        let plant_a = scene.named("plantA");
        assert!(scene.is_plant(plant_a));
        assert_eq!(
            scene.transform(plant_a).unwrap().translation,
            Vec3::new(2.0, 0.0, -1.5)
        );

        let first_flower = scene.children(plant_a)[0];
        let f = scene.flower(first_flower).unwrap();
        assert_eq!(f.nectar_collider(), NectarId::new(10));
        assert_eq!(f.capacity(), 2.0);
    }

    #[test]
    fn documented_scene_discovers_like_a_built_one() {
        let scene = Scene::from_json(LAYOUT).unwrap();
        let area = FlowerArea::discover(&scene, scene.root()).unwrap();
        assert_eq!(area.plants().len(), 2);
        assert_eq!(area.flowers().len(), 3);
        assert_eq!(area.plants()[0], scene.named("plantA"));
        assert_eq!(area.plants()[1], scene.named("plantB"));
    }

    #[test]
    fn kind_defaults_to_plain() {
        let doc = SceneDoc::from_json(r#"{ "nodes": [ { "name": "shelf" } ] }"#).unwrap();
        assert_eq!(doc.nodes[0].kind, KindDoc::Plain);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SceneDoc::from_json("{ nodes: oops").is_err());
        assert!(SceneDoc::from_json(r#"{ "nodes": [ { "kind": "tree" } ] }"#).is_err());
    }

    #[test]
    fn doc_round_trip_preserves_discovery() {
        let original = Scene::from_json(LAYOUT).unwrap();
        let doc = original.to_doc();
        let rebuilt = Scene::from_doc(&doc);

        let a = FlowerArea::discover(&original, original.root()).unwrap();
        let b = FlowerArea::discover(&rebuilt, rebuilt.root()).unwrap();
        assert_eq!(a.plants().len(), b.plants().len());

        let nectar_of = |scene: &Scene, nodes: &[NodeId]| -> Vec<NectarId> {
            nodes
                .iter()
                .map(|&n| scene.flower(n).unwrap().nectar_collider())
                .collect()
        };
        assert_eq!(
            nectar_of(&original, a.flowers()),
            nectar_of(&rebuilt, b.flowers())
        );
    }

    #[test]
    fn json_round_trip_preserves_document() {
        let doc = SceneDoc::from_json(LAYOUT).unwrap();
        let json = doc.to_json().unwrap();
        assert_eq!(SceneDoc::from_json(&json).unwrap(), doc);
    }
}
