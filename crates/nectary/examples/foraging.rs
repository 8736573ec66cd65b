//! Foraging episodes — build, discover, drink, reset.
//!
//! Builds a small flower area in code, discovers the registry, then runs a
//! few seeded episodes in which a forager empties the area one sip at a
//! time, finding each flower through its nectar collider.
//!
//! Run with: `cargo run -p nectary --example foraging`

use nectary::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Nectar consumed per touch of a nectar collider.
const SIP: f32 = 0.34;

fn main() {
    env_logger::init();

    let mut scene = Scene::new();
    build_area(&mut scene);

    let area = FlowerArea::discover(&scene, scene.root()).expect("layout has unique colliders");
    println!(
        "discovered {} flowers on {} plants",
        area.flowers().len(),
        area.plants().len()
    );

    let mut rng = StdRng::seed_from_u64(7);
    for episode in 1..=3 {
        area.reset_flowers(&mut scene, &mut rng);
        let (drunk, sips) = run_episode(&area, &mut scene, &mut rng);
        println!("episode {episode}: drank {drunk:.2} nectar in {sips} sips");
    }
}

fn build_area(scene: &mut Scene) {
    let trellis = scene.spawn_node(scene.root());
    // Spread the plants across a slice of the usable area.
    let spread = AREA_DIAMETER / 5.0;
    let plants: [(&str, f32, usize); 3] = [
        ("fuchsia", -spread, 3),
        ("sage", 0.0, 2),
        ("trumpet-vine", spread, 4),
    ];
    for (name, x, flower_count) in plants {
        let plant = scene.spawn_plant(trellis);
        scene.set_name(plant, name);
        scene.transform_mut(plant).unwrap().translation = Vec3::new(x, 0.0, 0.0);
        for i in 0..flower_count {
            let flower = scene.spawn_flower(plant);
            scene.transform_mut(flower).unwrap().translation =
                Vec3::new(0.0, 1.0 + i as f32 * 0.3, 0.0);
        }
    }
}

/// Drink from random flowers until the whole area is empty.
fn run_episode(area: &FlowerArea<Scene>, scene: &mut Scene, rng: &mut StdRng) -> (f32, u32) {
    // The colliders the "physics" would report contact with.
    let colliders: Vec<NectarId> = area
        .flowers()
        .iter()
        .map(|&node| scene.flower(node).unwrap().nectar_collider())
        .collect();

    let mut drunk = 0.0;
    let mut sips = 0;
    loop {
        let fresh: Vec<NectarId> = colliders
            .iter()
            .copied()
            .filter(|&id| {
                let node = area.flower_from_nectar(id).unwrap();
                scene.flower(node).unwrap().has_nectar()
            })
            .collect();
        if fresh.is_empty() {
            return (drunk, sips);
        }

        let touched = fresh[rng.random_range(0..fresh.len())];
        let node = area.flower_from_nectar(touched).unwrap();
        drunk += scene.flower_mut(node).unwrap().feed(SIP);
        sips += 1;
    }
}
