//! Loading a flower layout from a JSON scene document.
//!
//! Parses an embedded document into a [`Scene`], discovers the registry and
//! prints what it found, then resets once to show the plants picking up
//! fresh orientations.
//!
//! Run with: `cargo run -p nectary --example scene_from_json`

use nectary::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

const LAYOUT: &str = r#"{
    "nodes": [
        {
            "name": "hedge", "children": [
                {
                    "name": "honeysuckle", "kind": "plant", "position": [-3.0, 0.0, 0.0],
                    "children": [
                        { "kind": "flower", "flower": { "capacity": 2.0 } },
                        { "kind": "flower" }
                    ]
                },
                {
                    "name": "bottlebrush", "kind": "plant", "position": [3.0, 0.0, 1.0],
                    "children": [
                        { "kind": "flower" },
                        {
                            "name": "offshoot", "kind": "plant",
                            "children": [ { "kind": "flower" } ]
                        }
                    ]
                }
            ]
        },
        { "name": "stray", "kind": "flower", "position": [0.0, 0.5, -6.0] }
    ]
}"#;

fn main() {
    env_logger::init();

    let mut scene = Scene::from_json(LAYOUT).expect("layout parses");
    let area = FlowerArea::discover(&scene, scene.root()).expect("layout has unique colliders");

    println!(
        "loaded layout: {} plants, {} flowers",
        area.plants().len(),
        area.flowers().len()
    );
    for &plant in area.plants() {
        println!(
            "  plant \"{}\" with {} direct children",
            scene.name(plant).unwrap_or("<unnamed>"),
            scene.children(plant).len()
        );
    }
    for &flower in area.flowers() {
        let f = scene.flower(flower).unwrap();
        println!(
            "  flower {} holding {:.1} nectar",
            f.nectar_collider(),
            f.nectar_remaining()
        );
    }

    let mut rng = StdRng::seed_from_u64(42);
    area.reset_flowers(&mut scene, &mut rng);
    for &plant in area.plants() {
        let rotation = scene.transform(plant).unwrap().rotation;
        println!(
            "  plant \"{}\" re-oriented to {rotation:?}",
            scene.name(plant).unwrap_or("<unnamed>")
        );
    }
}
